/// Read-only pixel grid access
pub mod grid;
/// Packed bilevel matrix
pub mod matrix;
/// Floating point coordinates
pub mod point;

pub use grid::PixelGrid;
pub use matrix::BitMatrix;
pub use point::Point;
