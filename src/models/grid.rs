//! Read-only access to a bilevel pixel grid

use image::GrayImage;

use super::BitMatrix;

/// Luma values strictly below this count as dark in a [`GrayImage`]
pub const GRAY_DARK_THRESHOLD: u8 = 128;

/// A binarized image the alignment search can read.
///
/// Implementations must return `false` for coordinates outside
/// `[0, width) x [0, height)` instead of panicking.
pub trait PixelGrid {
    /// Grid width in pixels
    fn width(&self) -> usize;
    /// Grid height in pixels
    fn height(&self) -> usize;
    /// Whether the pixel at (x, y) is dark
    fn is_dark(&self, x: usize, y: usize) -> bool;
}

impl PixelGrid for BitMatrix {
    fn width(&self) -> usize {
        BitMatrix::width(self)
    }

    fn height(&self) -> usize {
        BitMatrix::height(self)
    }

    fn is_dark(&self, x: usize, y: usize) -> bool {
        self.get(x, y)
    }
}

/// An already-thresholded luma buffer (e.g. 0/255 output of a binarizer).
impl PixelGrid for GrayImage {
    fn width(&self) -> usize {
        self.dimensions().0 as usize
    }

    fn height(&self) -> usize {
        self.dimensions().1 as usize
    }

    fn is_dark(&self, x: usize, y: usize) -> bool {
        let (w, h) = self.dimensions();
        if x >= w as usize || y >= h as usize {
            return false;
        }
        self.get_pixel(x as u32, y as u32).0[0] < GRAY_DARK_THRESHOLD
    }
}

impl<G: PixelGrid + ?Sized> PixelGrid for &G {
    fn width(&self) -> usize {
        (**self).width()
    }

    fn height(&self) -> usize {
        (**self).height()
    }

    fn is_dark(&self, x: usize, y: usize) -> bool {
        (**self).is_dark(x, y)
    }
}
