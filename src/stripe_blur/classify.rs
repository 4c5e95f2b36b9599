/// Position of a pixel relative to the image border
///
/// The class depends only on `(x, y)` and the image dimensions, never on
/// pixel content, and selects the averaging divisor of the blur.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PixelClass {
    /// One of the four image corners
    Corner,
    /// On the border but not a corner
    Edge,
    /// Not on the border
    Interior,
}

impl PixelClass {
    /// Classifies pixel `(x, y)` of a `width` x `height` image.
    ///
    /// A pixel is a corner when it sits on both a horizontal and a
    /// vertical border row/column. For one-pixel-wide (or tall) images
    /// this makes the two end pixels corners and everything between them
    /// edges, since every pixel lies on a border.
    ///
    /// The caller guarantees `x < width` and `y < height`.
    pub const fn classify(x: u32, y: u32, width: u32, height: u32) -> Self {
        let on_vertical_border = x == 0 || x == width - 1;
        let on_horizontal_border = y == 0 || y == height - 1;

        match (on_vertical_border, on_horizontal_border) {
            (true, true) => Self::Corner,
            (true, false) | (false, true) => Self::Edge,
            (false, false) => Self::Interior,
        }
    }

    /// Integer divisor applied after the shared `/ 1.5` step
    pub const fn divisor(self) -> u32 {
        match self {
            Self::Corner => 4,
            Self::Edge => 6,
            Self::Interior => 9,
        }
    }
}
