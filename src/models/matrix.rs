/// Packed bilevel pixel grid, one bit per pixel (set = dark)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitMatrix {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl BitMatrix {
    /// Create an all-light grid with the given dimensions
    pub fn new(width: usize, height: usize) -> Self {
        let bytes_needed = (width * height).div_ceil(8);
        Self {
            width,
            height,
            data: vec![0; bytes_needed],
        }
    }

    /// Build a grid by evaluating `is_dark` for every pixel
    pub fn from_fn(width: usize, height: usize, mut is_dark: impl FnMut(usize, usize) -> bool) -> Self {
        let mut matrix = Self::new(width, height);
        for y in 0..height {
            for x in 0..width {
                if is_dark(x, y) {
                    matrix.set(x, y, true);
                }
            }
        }
        matrix
    }

    /// Grid width in pixels
    pub fn width(&self) -> usize {
        self.width
    }

    /// Grid height in pixels
    pub fn height(&self) -> usize {
        self.height
    }

    /// Whether the pixel at (x, y) is dark; out-of-range reads are light
    pub fn get(&self, x: usize, y: usize) -> bool {
        match self.bit_index(x, y) {
            Some((byte, bit)) => (self.data[byte] >> bit) & 1 == 1,
            None => false,
        }
    }

    /// Set the pixel at (x, y); out-of-range writes are ignored
    pub fn set(&mut self, x: usize, y: usize, dark: bool) {
        let Some((byte, bit)) = self.bit_index(x, y) else {
            return;
        };
        if dark {
            self.data[byte] |= 1 << bit;
        } else {
            self.data[byte] &= !(1 << bit);
        }
    }

    /// Paint the half-open rectangle `[x0, x1) x [y0, y1)`, clipped to the grid
    pub fn fill_rect(&mut self, x0: usize, y0: usize, x1: usize, y1: usize, dark: bool) {
        for y in y0..y1.min(self.height) {
            for x in x0..x1.min(self.width) {
                self.set(x, y, dark);
            }
        }
    }

    fn bit_index(&self, x: usize, y: usize) -> Option<(usize, usize)> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let index = y * self.width + x;
        Some((index / 8, index % 8))
    }
}

impl Default for BitMatrix {
    fn default() -> Self {
        Self::new(0, 0)
    }
}
