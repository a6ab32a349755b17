/// Read-only access to a row-major image with a possibly padded stride.
pub trait ImageView {
    type Pixel: Copy;

    fn width(&self) -> usize;
    fn height(&self) -> usize;
    fn stride(&self) -> usize;

    /// The `width()` pixels of row `y`, padding excluded.
    fn row(&self, y: usize) -> &[Self::Pixel];
}
