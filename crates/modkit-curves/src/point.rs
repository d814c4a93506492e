//! Control point type shared by every curve.

use serde::{Deserialize, Serialize};

/// A 2-D control point.
///
/// # Examples
///
/// ```
/// use modkit_curves::Point;
///
/// let p = Point::new(24.0, 2.0);
/// assert_eq!(p, Point::from((24.0, 2.0)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    /// Abscissa.
    pub x: f64,
    /// Ordinate.
    pub y: f64,
}

impl Point {
    /// Creates a point from its coordinates.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Slope of the line through `lhs` and `rhs`.
    ///
    /// Unguarded: equal abscissae give ±∞ or NaN.
    #[inline]
    pub fn slope(lhs: &Point, rhs: &Point) -> f64 {
        (rhs.y - lhs.y) / (rhs.x - lhs.x)
    }

    /// True when both coordinates are finite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}
