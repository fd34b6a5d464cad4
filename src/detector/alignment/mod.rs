//! Alignment pattern search
//!
//! Given a window where the finder-pattern geometry predicts an alignment
//! pattern and the expected module size, scan rows from the middle of the
//! window outwards for a light/dark/light 1:1:1 run triple, confirm each hit
//! with a vertical scan through its centre, and stop as soon as two rows agree
//! on the same pattern. If no pattern is seen twice, the first one seen is
//! returned as a best-effort estimate.

pub mod candidates;
pub mod cross_check;
pub mod pattern;
pub mod ratio;
pub(crate) mod scanner;
pub mod window;

use log::{debug, trace};
use rayon::prelude::*;

use crate::config::RegionSearchConfig;
use crate::models::{PixelGrid, Point};
use candidates::CandidateSet;
use cross_check::cross_check_vertical;
use ratio::{center_from_end, total};
use scanner::{RowHit, RowScanner};

pub use pattern::AlignmentPattern;
pub use window::{SearchWindow, expected_alignment_center};

/// One independent search for [`AlignmentFinder::find_all`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AlignmentRequest {
    /// Where to look
    pub window: SearchWindow,
    /// Expected module size in pixels
    pub module_size: f32,
}

/// Alignment pattern locator
pub struct AlignmentFinder;

impl AlignmentFinder {
    /// Search `window` of `grid` for an alignment pattern of roughly
    /// `module_size` pixels per module.
    ///
    /// Returns the first pattern confirmed on two rows, otherwise the first
    /// pattern seen on any row (`observations == 1`), otherwise `None`.
    /// The window is clipped to the grid; a non-positive or non-finite
    /// module size finds nothing.
    pub fn find<G: PixelGrid + ?Sized>(
        grid: &G,
        window: SearchWindow,
        module_size: f32,
    ) -> Option<AlignmentPattern> {
        if !module_size.is_finite() || module_size <= 0.0 {
            debug!("alignment: rejecting module size {}", module_size);
            return None;
        }
        let Some(window) = window.clamp_to(grid.width(), grid.height()) else {
            debug!("alignment: window {:?} lies outside the grid", window);
            return None;
        };
        let end_col = window.x + window.width;

        let mut candidates = CandidateSet::new();
        for row in row_order(window) {
            for hit in RowScanner::new(grid, row, window.x, end_col, module_size) {
                if let Some(confirmed) =
                    Self::handle_possible_center(grid, hit, row, module_size, &mut candidates)
                {
                    debug!(
                        "alignment: confirmed at ({:.2}, {:.2}), module {:.2}",
                        confirmed.center.x, confirmed.center.y, confirmed.module_size
                    );
                    return Some(confirmed);
                }
            }
        }

        // Nothing seen twice; the first sighting is the best guess
        let fallback = candidates.first();
        match &fallback {
            Some(p) => debug!(
                "alignment: unconfirmed, using first of {} candidates at ({:.2}, {:.2})",
                candidates.len(),
                p.center.x,
                p.center.y
            ),
            None => debug!("alignment: no candidates in {:?}", window),
        }
        fallback
    }

    /// Search windows of growing size around `estimate`, one per allowance
    /// factor in `config`, until one yields a pattern.
    pub fn find_in_region<G: PixelGrid + ?Sized>(
        grid: &G,
        estimate: Point,
        module_size: f32,
        config: &RegionSearchConfig,
    ) -> Option<AlignmentPattern> {
        for &factor in &config.allowance_factors {
            let Some(window) = SearchWindow::around(
                estimate,
                module_size,
                factor as f32,
                config.min_window_modules,
                grid.width(),
                grid.height(),
            ) else {
                debug!("alignment: allowance {} leaves too small a region", factor);
                continue;
            };
            if let Some(pattern) = Self::find(grid, window, module_size) {
                return Some(pattern);
            }
            debug!("alignment: nothing within allowance {}, widening", factor);
        }
        None
    }

    /// Run independent searches over one shared grid in parallel.
    ///
    /// Results are in request order and match sequential [`Self::find`] calls.
    pub fn find_all<G: PixelGrid + Sync + ?Sized>(
        grid: &G,
        requests: &[AlignmentRequest],
    ) -> Vec<Option<AlignmentPattern>> {
        requests
            .par_iter()
            .map(|request| Self::find(grid, request.window, request.module_size))
            .collect()
    }

    /// Cross-check a row hit vertically and record it. Returns a pattern only
    /// once it has been confirmed.
    fn handle_possible_center<G: PixelGrid + ?Sized>(
        grid: &G,
        hit: RowHit,
        row: usize,
        module_size: f32,
        candidates: &mut CandidateSet,
    ) -> Option<AlignmentPattern> {
        let horizontal_total = total(&hit.counts);
        let center_x = center_from_end(&hit.counts, hit.end);
        let center_y = cross_check_vertical(
            grid,
            row,
            center_x as usize,
            2 * hit.counts[1],
            horizontal_total,
            module_size,
        )?;
        let estimated_module_size = horizontal_total as f32 / 3.0;
        trace!(
            "alignment: row {} hit at ({:.2}, {:.2}), counts {:?}",
            row, center_x, center_y, hit.counts
        );
        candidates.observe(Point::new(center_x, center_y), estimated_module_size)
    }
}

/// Rows of `window` from the middle outwards: middle, middle - 1,
/// middle + 1, middle - 2, ...
fn row_order(window: SearchWindow) -> impl Iterator<Item = usize> {
    let middle = window.y + window.height / 2;
    (0..window.height).filter_map(move |generation| {
        let offset = generation.div_ceil(2);
        if generation % 2 == 0 {
            Some(middle + offset)
        } else {
            middle.checked_sub(offset)
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BitMatrix;

    /// 5x5-module alignment pattern with its top-left pixel at (left, top)
    fn draw_pattern(matrix: &mut BitMatrix, left: usize, top: usize, module: usize) {
        for row in 0..5usize {
            for col in 0..5usize {
                let ring = row.abs_diff(2).max(col.abs_diff(2));
                let x = left + col * module;
                let y = top + row * module;
                matrix.fill_rect(x, y, x + module, y + module, ring != 1);
            }
        }
    }

    #[test]
    fn test_row_order_is_middle_out() {
        let rows: Vec<_> = row_order(SearchWindow::new(0, 10, 0, 5)).collect();
        assert_eq!(rows, vec![12, 11, 13, 10, 14]);

        let rows: Vec<_> = row_order(SearchWindow::new(0, 0, 0, 4)).collect();
        assert_eq!(rows, vec![2, 1, 3, 0]);
    }

    #[test]
    fn test_confirms_two_pixel_pattern() {
        let mut matrix = BitMatrix::new(30, 30);
        draw_pattern(&mut matrix, 10, 10, 2);

        let found = AlignmentFinder::find(&matrix, SearchWindow::new(0, 0, 30, 30), 2.0)
            .expect("pattern should be found");
        assert!(found.is_confirmed());
        assert!((found.center.x - 15.0).abs() < 1e-5);
        assert!((found.center.y - 15.0).abs() < 1e-5);
        assert!((found.module_size - 2.0).abs() < 1e-5);
    }

    #[test]
    fn test_rejects_bad_module_size() {
        let mut matrix = BitMatrix::new(30, 30);
        draw_pattern(&mut matrix, 10, 10, 2);
        let window = SearchWindow::new(0, 0, 30, 30);
        assert!(AlignmentFinder::find(&matrix, window, 0.0).is_none());
        assert!(AlignmentFinder::find(&matrix, window, -2.0).is_none());
        assert!(AlignmentFinder::find(&matrix, window, f32::NAN).is_none());
    }

    #[test]
    fn test_window_outside_grid() {
        let mut matrix = BitMatrix::new(30, 30);
        draw_pattern(&mut matrix, 10, 10, 2);
        assert!(AlignmentFinder::find(&matrix, SearchWindow::new(40, 0, 10, 10), 2.0).is_none());
    }

    #[test]
    fn test_oversized_window_is_clamped() {
        let mut matrix = BitMatrix::new(30, 30);
        draw_pattern(&mut matrix, 10, 10, 2);
        let found = AlignmentFinder::find(&matrix, SearchWindow::new(0, 0, 500, 500), 2.0)
            .expect("pattern should be found");
        assert!((found.center.x - 15.0).abs() < 1e-5);
    }

    #[test]
    fn test_module_size_mismatch_finds_nothing() {
        let mut matrix = BitMatrix::new(30, 30);
        draw_pattern(&mut matrix, 10, 10, 2);
        assert!(AlignmentFinder::find(&matrix, SearchWindow::new(0, 0, 30, 30), 6.0).is_none());
    }
}
