//! Linear interpolation through two control points.

use serde::{Deserialize, Serialize};

use crate::curve::Curve;
use crate::error::CurveError;
use crate::point::Point;

/// The unique line through two points, extrapolated with the same slope.
///
/// `p1.x == p2.x` is not checked: the slope becomes ±∞ or NaN and so does
/// every value. Callers must supply distinct abscissae.
///
/// # Example
///
/// ```
/// use modkit_curves::{LinearCurve, Point};
///
/// let line = LinearCurve::new(Point::new(24.0, 2.0), Point::new(96.0, 16.0));
/// assert!((line.value_at(96.0) - 16.0).abs() < 1e-12);
/// assert!((line.value_at(0.0) + 2.666_666).abs() < 1e-5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearCurve {
    origin: Point,
    slope: f64,
}

impl LinearCurve {
    /// Fits the line through `p1` and `p2`.
    pub fn new(p1: Point, p2: Point) -> Self {
        Self {
            origin: p1,
            slope: Point::slope(&p1, &p2),
        }
    }

    /// Slope of the fitted line.
    pub fn slope(&self) -> f64 {
        self.slope
    }

    /// Anchor point the line was fitted from.
    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Infallible evaluation.
    #[inline]
    pub fn value_at(&self, x: f64) -> f64 {
        self.slope * (x - self.origin.x) + self.origin.y
    }
}

impl Curve for LinearCurve {
    #[inline]
    fn evaluate(&self, x: f64) -> Result<f64, CurveError> {
        Ok(self.value_at(x))
    }
}

/// Builds `f(x)` for the line through `p1` and `p2`.
///
/// ```
/// use modkit_curves::{build_linear_curve, Point};
///
/// let f = build_linear_curve(Point::new(0.0, 1.0), Point::new(2.0, 5.0));
/// assert!((f(1.0) - 3.0).abs() < 1e-12);
/// ```
pub fn build_linear_curve(p1: Point, p2: Point) -> impl Fn(f64) -> f64 + Clone + Send + Sync {
    let curve = LinearCurve::new(p1, p2);
    move |x| curve.value_at(x)
}
