//! Exponential interpolation `f(x) = a * e^(shape * x) + c` through two points.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::curve::Curve;
use crate::error::CurveError;
use crate::linear::LinearCurve;
use crate::point::Point;

/// Exponential curve fitted through two control points.
///
/// When `e^(shape * p1.x) == e^(shape * p2.x)` the exponential form is
/// undetermined (`shape == 0`, or the exponent spread is below `f64`
/// resolution) and the fit falls back to the straight line through the
/// same points.
///
/// # Example
///
/// ```
/// use modkit_curves::{ExponentialCurve, Point};
///
/// let decay = ExponentialCurve::new(-2.3, Point::new(0.0, 3.0), Point::new(1.0, 0.5));
/// assert!((decay.value_at(0.5) - 1.101_222_707_627_222_5).abs() < 1e-9);
///
/// let flat = ExponentialCurve::new(0.0, Point::new(0.0, 3.0), Point::new(1.0, 0.5));
/// assert!(flat.is_linear_fallback());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ExponentialCurve {
    /// `a * e^(shape * x) + c`.
    Exponential {
        /// Exponent scale.
        shape: f64,
        /// Multiplier on the exponential term.
        a: f64,
        /// Constant offset.
        c: f64,
    },
    /// Degenerate fit, evaluated as a straight line.
    Linear(LinearCurve),
}

impl ExponentialCurve {
    /// Fits `a * e^(shape * x) + c` so that it passes through `p1` and `p2`.
    pub fn new(shape: f64, p1: Point, p2: Point) -> Self {
        let ebx1 = (shape * p1.x).exp();
        let divisor = (shape * p2.x).exp() - ebx1;

        if divisor == 0.0 {
            debug!(
                shape,
                x1 = p1.x,
                x2 = p2.x,
                "exponential fit degenerate, falling back to linear"
            );
            return Self::Linear(LinearCurve::new(p1, p2));
        }

        let a = (p2.y - p1.y) / divisor;
        let c = p1.y - a * ebx1;
        Self::Exponential { shape, a, c }
    }

    /// True when the fit degenerated to a straight line.
    pub fn is_linear_fallback(&self) -> bool {
        matches!(self, Self::Linear(_))
    }

    /// Infallible evaluation.
    #[inline]
    pub fn value_at(&self, x: f64) -> f64 {
        match self {
            Self::Exponential { shape, a, c } => a * (shape * x).exp() + c,
            Self::Linear(line) => line.value_at(x),
        }
    }
}

impl Curve for ExponentialCurve {
    #[inline]
    fn evaluate(&self, x: f64) -> Result<f64, CurveError> {
        Ok(self.value_at(x))
    }
}

/// Builds `f(x) = a * e^(shape * x) + c` through `p1` and `p2`.
///
/// Falls back to [`build_linear_curve`](crate::build_linear_curve) semantics
/// when the exponential terms at both abscissae coincide.
pub fn build_exponential_curve(
    shape: f64,
    p1: Point,
    p2: Point,
) -> impl Fn(f64) -> f64 + Clone + Send + Sync {
    let curve = ExponentialCurve::new(shape, p1, p2);
    move |x| curve.value_at(x)
}
