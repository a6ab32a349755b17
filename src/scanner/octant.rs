use crate::geometry::Vector;

/// Direction family of a scanner, for a direction `(a, b)` normalised so
/// that `a >= 0` (and `b > 0` when `a == 0`).
///
/// The name gives the major axis and the sense of `y` along the scan.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Octant {
    /// `b < 0`, `-b > a`: y-major, `y` decreasing.
    SteepUp,
    /// `b < 0`, `-b <= a`: x-major, `y` decreasing.
    FlatUp,
    /// `b >= 0`, `b <= a`: x-major, `y` increasing.
    FlatDown,
    /// `b >= 0`, `b > a`: y-major, `y` increasing.
    SteepDown,
}

impl Octant {
    /// Family of the normalised direction `(a, b)`.
    pub fn of(a: i32, b: i32) -> Self {
        if b < 0 {
            if -b > a {
                Octant::SteepUp
            } else {
                Octant::FlatUp
            }
        } else if b > a {
            Octant::SteepDown
        } else {
            Octant::FlatDown
        }
    }

    #[inline]
    pub fn is_x_major(self) -> bool {
        matches!(self, Octant::FlatUp | Octant::FlatDown)
    }

    /// Unit move along the major axis.
    pub fn major(self) -> Vector {
        match self {
            Octant::SteepUp => Vector::new(0, -1),
            Octant::SteepDown => Vector::new(0, 1),
            Octant::FlatUp | Octant::FlatDown => Vector::new(1, 0),
        }
    }

    /// Unit move along the minor axis, applied on pattern steps.
    pub fn minor(self) -> Vector {
        match self {
            Octant::SteepUp | Octant::SteepDown => Vector::new(1, 0),
            Octant::FlatUp => Vector::new(0, -1),
            Octant::FlatDown => Vector::new(0, 1),
        }
    }

    /// Shift from one scan line to the next one on the right, i.e. towards
    /// `(b, -a)`.
    pub fn right(self) -> Vector {
        match self {
            Octant::SteepUp => Vector::new(-1, 0),
            Octant::SteepDown => Vector::new(1, 0),
            Octant::FlatUp | Octant::FlatDown => Vector::new(0, -1),
        }
    }
}

/// Normalises a direction so that `a >= 0`, and `b > 0` when `a == 0`.
pub(crate) fn normalise(d: Vector) -> Vector {
    if d.x < 0 || (d.x == 0 && d.y < 0) {
        -d
    } else {
        d
    }
}
