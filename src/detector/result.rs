use serde::{Deserialize, Serialize};
use std::fmt;

/// Pipeline stage holding a stored segment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    Final,
    Initial,
    Preliminary,
}

impl Step {
    pub fn code(self) -> i32 {
        match self {
            Step::Final => 0,
            Step::Initial => 1,
            Step::Preliminary => 2,
        }
    }
}

/// Outcome of one detection, with the gate that rejected it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultCode {
    /// Degenerate probe.
    Void,
    /// Nothing run yet.
    #[default]
    Undetermined,
    Ok,
    PrelimNoDetection,
    PrelimTooFew,
    InitialNoDetection,
    InitialTooFew,
    InitialTooSparse,
    InitialTooManyOutliers,
    InitialCloseOrientation,
    FinalNoDetection,
    FinalTooFew,
    FinalTooSparse,
    FinalTooSmall,
    FinalTooManyOutliers,
}

impl ResultCode {
    pub const ALL: [ResultCode; 15] = [
        ResultCode::Void,
        ResultCode::Undetermined,
        ResultCode::Ok,
        ResultCode::PrelimNoDetection,
        ResultCode::PrelimTooFew,
        ResultCode::InitialNoDetection,
        ResultCode::InitialTooFew,
        ResultCode::InitialTooSparse,
        ResultCode::InitialTooManyOutliers,
        ResultCode::InitialCloseOrientation,
        ResultCode::FinalNoDetection,
        ResultCode::FinalTooFew,
        ResultCode::FinalTooSparse,
        ResultCode::FinalTooSmall,
        ResultCode::FinalTooManyOutliers,
    ];

    /// Stable numeric code.
    pub fn code(self) -> i32 {
        match self {
            ResultCode::Void => -2,
            ResultCode::Undetermined => -1,
            ResultCode::Ok => 0,
            ResultCode::PrelimNoDetection => 1,
            ResultCode::PrelimTooFew => 2,
            ResultCode::InitialNoDetection => 11,
            ResultCode::InitialTooFew => 12,
            ResultCode::InitialTooSparse => 13,
            ResultCode::InitialTooManyOutliers => 14,
            ResultCode::InitialCloseOrientation => 15,
            ResultCode::FinalNoDetection => 21,
            ResultCode::FinalTooFew => 22,
            ResultCode::FinalTooSparse => 23,
            ResultCode::FinalTooSmall => 24,
            ResultCode::FinalTooManyOutliers => 25,
        }
    }

    pub fn from_code(code: i32) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.code() == code)
    }

    #[inline]
    pub fn is_ok(self) -> bool {
        self == ResultCode::Ok
    }

    /// Stage that produced a rejection, `None` for the other codes.
    pub fn step(self) -> Option<Step> {
        match self.code() {
            1..=9 => Some(Step::Preliminary),
            11..=19 => Some(Step::Initial),
            21..=29 => Some(Step::Final),
            _ => None,
        }
    }
}

impl fmt::Display for ResultCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            ResultCode::Void => "void probe",
            ResultCode::Undetermined => "undetermined",
            ResultCode::Ok => "ok",
            ResultCode::PrelimNoDetection => "preliminary: no detection",
            ResultCode::PrelimTooFew => "preliminary: too few points",
            ResultCode::InitialNoDetection => "initial: no detection",
            ResultCode::InitialTooFew => "initial: too few points",
            ResultCode::InitialTooSparse => "initial: too sparse",
            ResultCode::InitialTooManyOutliers => "initial: too many outliers",
            ResultCode::InitialCloseOrientation => "initial: close to probe orientation",
            ResultCode::FinalNoDetection => "final: no detection",
            ResultCode::FinalTooFew => "final: too few points",
            ResultCode::FinalTooSparse => "final: too sparse",
            ResultCode::FinalTooSmall => "final: too small",
            ResultCode::FinalTooManyOutliers => "final: too many outliers",
        };
        f.write_str(text)
    }
}
