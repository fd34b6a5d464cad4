//! qr_alignment - QR alignment pattern locator
//!
//! Finds the small alignment pattern of a QR symbol (version 2 and up) in an
//! already-binarized pixel grid, given a search window and the module size
//! estimated from the finder patterns. The result is a sub-pixel centre for
//! the perspective transform that follows.
//!
//! ```
//! use qr_alignment::{BitMatrix, SearchWindow, find_alignment_pattern};
//!
//! let grid = BitMatrix::new(21, 21);
//! let window = SearchWindow::new(0, 0, 21, 21);
//! assert!(find_alignment_pattern(&grid, window, 1.0).is_none());
//! ```

#![warn(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

/// Environment-driven tuning knobs
pub mod config;
/// Alignment pattern detection
pub mod detector;
/// Core data structures (BitMatrix, Point, PixelGrid)
pub mod models;

pub use config::RegionSearchConfig;
pub use detector::alignment::{
    AlignmentFinder, AlignmentPattern, AlignmentRequest, SearchWindow, expected_alignment_center,
};
pub use models::{BitMatrix, PixelGrid, Point};

/// Search `window` of `grid` for an alignment pattern
///
/// # Arguments
/// * `grid` - Binarized image (dark/light per pixel)
/// * `window` - Region to scan, clipped to the grid
/// * `module_size` - Expected module size in pixels
///
/// # Returns
/// The confirmed pattern, the first unconfirmed sighting if none confirmed,
/// or `None`
pub fn find_alignment_pattern<G: PixelGrid + ?Sized>(
    grid: &G,
    window: SearchWindow,
    module_size: f32,
) -> Option<AlignmentPattern> {
    AlignmentFinder::find(grid, window, module_size)
}

/// Search around an estimated centre with growing windows, using the
/// process-wide [`RegionSearchConfig`]
pub fn find_alignment_near<G: PixelGrid + ?Sized>(
    grid: &G,
    estimate: Point,
    module_size: f32,
) -> Option<AlignmentPattern> {
    AlignmentFinder::find_in_region(grid, estimate, module_size, RegionSearchConfig::global())
}
