//! Search windows and where to put them

use crate::models::Point;

/// Rectangle of grid pixels to search, `[x, x + width) x [y, y + height)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchWindow {
    /// Left column
    pub x: usize,
    /// Top row
    pub y: usize,
    /// Width in pixels
    pub width: usize,
    /// Height in pixels
    pub height: usize,
}

impl SearchWindow {
    /// Create a new window
    pub fn new(x: usize, y: usize, width: usize, height: usize) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Intersect with a `grid_width x grid_height` grid; `None` if nothing is left
    pub fn clamp_to(&self, grid_width: usize, grid_height: usize) -> Option<Self> {
        let right = self.x.saturating_add(self.width).min(grid_width);
        let bottom = self.y.saturating_add(self.height).min(grid_height);
        if self.x >= right || self.y >= bottom {
            return None;
        }
        Some(Self::new(self.x, self.y, right - self.x, bottom - self.y))
    }

    /// Window of `allowance_factor` module sizes on each side of `estimate`,
    /// clipped to the grid.
    ///
    /// Returns `None` when the clipped window is narrower or shorter than
    /// `min_modules` module sizes.
    pub fn around(
        estimate: Point,
        module_size: f32,
        allowance_factor: f32,
        min_modules: f32,
        grid_width: usize,
        grid_height: usize,
    ) -> Option<Self> {
        if grid_width == 0 || grid_height == 0 || !estimate.x.is_finite() || !estimate.y.is_finite() {
            return None;
        }
        let allowance = (allowance_factor * module_size) as i64;
        let min_side = module_size * min_modules;

        let (left, right) = Self::span(estimate.x as i64, allowance, grid_width)?;
        let (top, bottom) = Self::span(estimate.y as i64, allowance, grid_height)?;
        if ((right - left) as f32) < min_side || ((bottom - top) as f32) < min_side {
            return None;
        }
        Some(Self::new(left, top, right - left, bottom - top))
    }

    fn span(center: i64, allowance: i64, limit: usize) -> Option<(usize, usize)> {
        let low = (center - allowance).max(0);
        let high = (center + allowance).min(limit as i64 - 1);
        (high >= low).then_some((low as usize, high as usize))
    }
}

/// Where the bottom-right alignment pattern should sit, given the three
/// finder pattern centres of a symbol `dimension` modules wide.
///
/// Finder centres lie 3 modules in from the corners and the alignment
/// centre 3 modules in from the bottom-right corner, so the estimate is
/// pulled back from the virtual fourth corner by `3 / (dimension - 7)`.
/// Version 1 symbols (`dimension < 25`) have no alignment pattern.
pub fn expected_alignment_center(
    top_left: Point,
    top_right: Point,
    bottom_left: Point,
    dimension: usize,
) -> Option<Point> {
    if dimension < 25 {
        return None;
    }
    let bottom_right_x = top_right.x - top_left.x + bottom_left.x;
    let bottom_right_y = top_right.y - top_left.y + bottom_left.y;
    let correction = 1.0 - 3.0 / (dimension as f32 - 7.0);
    Some(Point::new(
        top_left.x + correction * (bottom_right_x - top_left.x),
        top_left.y + correction * (bottom_right_y - top_left.y),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_to_grid() {
        let window = SearchWindow::new(5, 5, 100, 3);
        assert_eq!(window.clamp_to(20, 20), Some(SearchWindow::new(5, 5, 15, 3)));
        assert_eq!(SearchWindow::new(25, 0, 4, 4).clamp_to(20, 20), None);
        assert_eq!(SearchWindow::new(0, 0, 0, 4).clamp_to(20, 20), None);
    }

    #[test]
    fn test_around_clips_to_grid() {
        let window = SearchWindow::around(Point::new(17.0, 14.0), 2.0, 4.0, 3.0, 60, 60);
        assert_eq!(window, Some(SearchWindow::new(9, 6, 16, 16)));

        let window = SearchWindow::around(Point::new(2.0, 57.5), 2.0, 4.0, 3.0, 60, 60);
        assert_eq!(window, Some(SearchWindow::new(0, 49, 10, 10)));
    }

    #[test]
    fn test_around_rejects_small_region() {
        // Clipped to 4 columns at the right edge, less than 3 modules
        let window = SearchWindow::around(Point::new(63.0, 30.0), 2.0, 4.0, 3.0, 60, 60);
        assert_eq!(window, None);
        assert_eq!(SearchWindow::around(Point::new(f32::NAN, 1.0), 2.0, 4.0, 3.0, 60, 60), None);
    }

    #[test]
    fn test_expected_alignment_center_version_2() {
        let tl = Point::new(3.5, 3.5);
        let tr = Point::new(21.5, 3.5);
        let bl = Point::new(3.5, 21.5);
        let center = expected_alignment_center(tl, tr, bl, 25).expect("version 2");
        assert!((center.x - 18.5).abs() < 1e-4);
        assert!((center.y - 18.5).abs() < 1e-4);
        assert!(expected_alignment_center(tl, tr, bl, 21).is_none());
    }
}
