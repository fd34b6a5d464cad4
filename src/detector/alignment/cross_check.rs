//! Vertical confirmation of a horizontal hit

use super::ratio::{RunCounts, center_from_end, is_valid_ratio, total};
use crate::models::PixelGrid;

/// Scan up and down column `center_col` from `start_row` and return the
/// sub-pixel row of the dark centre run, or `None` when the column does not
/// show the same light/dark/light structure.
///
/// `max_count` bounds every run. The centre run must end before the grid
/// edge in both directions. The vertical total must stay within 40% of
/// `horizontal_total`.
pub fn cross_check_vertical<G: PixelGrid + ?Sized>(
    grid: &G,
    start_row: usize,
    center_col: usize,
    max_count: usize,
    horizontal_total: usize,
    module_size: f32,
) -> Option<f32> {
    let height = grid.height();
    if start_row >= height || center_col >= grid.width() {
        return None;
    }
    let dark = |row: usize| grid.is_dark(center_col, row);
    let mut counts: RunCounts = [0; 3];

    // Upwards: centre run, then the light run above it
    let mut above = Some(start_row);
    while let Some(row) = above {
        if !dark(row) || counts[1] > max_count {
            break;
        }
        counts[1] += 1;
        above = row.checked_sub(1);
    }
    if above.is_none() || counts[1] > max_count {
        return None;
    }
    while let Some(row) = above {
        if dark(row) || counts[0] > max_count {
            break;
        }
        counts[0] += 1;
        above = row.checked_sub(1);
    }
    if counts[0] > max_count {
        return None;
    }

    // Downwards: the same centre run, then the light run below it
    let mut row = start_row + 1;
    while row < height && dark(row) && counts[1] <= max_count {
        counts[1] += 1;
        row += 1;
    }
    if row == height || counts[1] > max_count {
        return None;
    }
    while row < height && !dark(row) && counts[2] <= max_count {
        counts[2] += 1;
        row += 1;
    }
    if counts[2] > max_count {
        return None;
    }

    let vertical_total = total(&counts);
    if 5 * vertical_total.abs_diff(horizontal_total) >= 2 * horizontal_total {
        return None;
    }

    is_valid_ratio(&counts, module_size).then(|| center_from_end(&counts, row))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BitMatrix;

    fn column_from(pattern: &str) -> BitMatrix {
        BitMatrix::from_fn(1, pattern.len(), |_, y| pattern.as_bytes()[y] == b'#')
    }

    #[test]
    fn test_confirms_centre() {
        let grid = column_from("##..##..##");
        let center = cross_check_vertical(&grid, 4, 0, 4, 6, 2.0);
        assert_eq!(center, Some(5.0));
        // Starting on the lower half of the centre run gives the same answer
        assert_eq!(cross_check_vertical(&grid, 5, 0, 4, 6, 2.0), Some(5.0));
    }

    #[test]
    fn test_fails_when_centre_touches_top_edge() {
        let grid = column_from("##..######");
        assert_eq!(cross_check_vertical(&grid, 0, 0, 4, 6, 2.0), None);
    }

    #[test]
    fn test_fails_when_centre_touches_bottom_edge() {
        let grid = column_from("##..##");
        assert_eq!(cross_check_vertical(&grid, 4, 0, 4, 6, 2.0), None);
    }

    #[test]
    fn test_fails_when_run_exceeds_max_count() {
        let grid = column_from("#......##..#");
        assert_eq!(cross_check_vertical(&grid, 7, 0, 4, 6, 2.0), None);
    }

    #[test]
    fn test_fails_on_total_mismatch() {
        let grid = column_from("##..##..##");
        // Vertical total 6 against a horizontal total of 12
        assert_eq!(cross_check_vertical(&grid, 4, 0, 4, 12, 2.0), None);
        // 6 against 9: 5 * 3 = 15 < 18, accepted
        assert_eq!(cross_check_vertical(&grid, 4, 0, 4, 9, 2.0), Some(5.0));
    }

    #[test]
    fn test_fails_on_bad_ratio() {
        let grid = column_from("#.##....#");
        assert_eq!(cross_check_vertical(&grid, 2, 0, 8, 7, 2.0), None);
    }

    #[test]
    fn test_out_of_range_start() {
        let grid = column_from("##..##..##");
        assert_eq!(cross_check_vertical(&grid, 20, 0, 4, 6, 2.0), None);
        assert_eq!(cross_check_vertical(&grid, 4, 3, 4, 6, 2.0), None);
    }
}
