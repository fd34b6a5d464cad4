//! Alignment pattern estimates and how repeated sightings merge

use crate::models::Point;

/// A located (or hypothesised) alignment pattern
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AlignmentPattern {
    /// Sub-pixel centre of the pattern's centre stone
    pub center: Point,
    /// Estimated module size in pixels
    pub module_size: f32,
    /// Number of row observations merged into this estimate
    pub observations: u32,
}

impl AlignmentPattern {
    /// A fresh single-observation hypothesis
    pub fn new(x: f32, y: f32, module_size: f32) -> Self {
        Self {
            center: Point::new(x, y),
            module_size,
            observations: 1,
        }
    }

    /// Whether this estimate was seen on at least two rows
    pub fn is_confirmed(&self) -> bool {
        self.observations >= 2
    }

    /// Whether an observation at `center` with `module_size` describes the
    /// same physical pattern. Position tolerance scales with this pattern's
    /// module size.
    pub fn about_equals(&self, module_size: f32, center: Point) -> bool {
        (self.module_size - module_size).abs() <= 1.0
            && (self.center.y - center.y).abs() <= self.module_size
            && (self.center.x - center.x).abs() <= self.module_size
    }

    /// Average this estimate with a new observation, weighting both equally
    pub fn combine_estimate(&self, module_size: f32, center: Point) -> Self {
        Self {
            center: self.center.midpoint(&center),
            module_size: (self.module_size + module_size) / 2.0,
            observations: self.observations + 1,
        }
    }
}
