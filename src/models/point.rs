/// 2D point with floating point coordinates
///
/// Pixel `(x, y)` covers `[x, x + 1) x [y, y + 1)`, so the middle of a
/// single pixel sits at `x + 0.5`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// X coordinate (column axis)
    pub x: f32,
    /// Y coordinate (row axis)
    pub y: f32,
}

impl Point {
    /// Create a new point
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Calculate distance to another point
    pub fn distance(&self, other: &Point) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Midpoint between this point and another
    pub fn midpoint(&self, other: &Point) -> Self {
        Self {
            x: (self.x + other.x) / 2.0,
            y: (self.y + other.y) / 2.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert!((a.distance(&b) - 5.0).abs() < 1e-6);
    }

    #[test]
    fn test_midpoint() {
        let m = Point::new(10.0, 10.0).midpoint(&Point::new(9.6, 10.5));
        assert!((m.x - 9.8).abs() < 1e-5);
        assert!((m.y - 10.25).abs() < 1e-5);
    }
}
