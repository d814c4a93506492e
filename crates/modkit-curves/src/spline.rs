//! Natural cubic spline through an ordered list of control points.
//!
//! The spline has zero curvature at both ends. Second derivatives at the
//! knots come from a tridiagonal system solved once at construction. The
//! curve is flat beyond the first and last knot, as long as those knots
//! sit strictly inside the conventional `[0, 1]` domain.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::curve::Curve;
use crate::error::CurveError;
use crate::point::Point;

/// How much checking a spline does on its control points at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SplineValidation {
    /// Accept any input. Unsorted points give meaningless values or a
    /// [`CurveError::NoBracketingInterval`] at evaluation time.
    #[default]
    Lenient,
    /// Reject non-finite coordinates and x values that are not strictly
    /// increasing.
    Strict,
}

/// Construction options for [`CubicSpline`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SplineOptions {
    /// Validation mode.
    #[serde(default)]
    pub validation: SplineValidation,
}

impl SplineOptions {
    /// Options that reject malformed control points.
    pub fn strict() -> Self {
        Self {
            validation: SplineValidation::Strict,
        }
    }

    /// Replaces the validation mode.
    pub fn with_validation(mut self, validation: SplineValidation) -> Self {
        self.validation = validation;
        self
    }
}

/// Natural cubic spline interpolant.
///
/// Sizes below two are degenerate: no points evaluate to `0` everywhere, and
/// a single point evaluates to its `y` everywhere.
///
/// # Example
///
/// ```
/// use modkit_curves::{CubicSpline, Curve, Point};
///
/// let spline = CubicSpline::new(&[
///     Point::new(0.1, 0.0),
///     Point::new(0.5, 1.0),
///     Point::new(0.9, 0.0),
/// ]);
///
/// assert!((spline.evaluate(0.5)? - 1.0).abs() < 1e-12);
/// // Flat beyond the first knot because 0.1 > 0.
/// assert!((spline.evaluate(0.0)? - 0.0).abs() < 1e-12);
/// # Ok::<(), modkit_curves::CurveError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CubicSpline {
    points: Vec<Point>,
    second_derivatives: Vec<f64>,
}

impl CubicSpline {
    /// Fits a spline without validating the control points.
    ///
    /// Points are expected in ascending x order. Out-of-order input is logged
    /// at `warn` level but otherwise accepted.
    pub fn new(points: &[Point]) -> Self {
        if let Some(index) = first_unsorted(points) {
            warn!(
                index,
                "spline control points are not strictly increasing in x; evaluation may fail"
            );
        }
        Self::fit(points)
    }

    /// Fits a spline with explicit options.
    ///
    /// # Errors
    ///
    /// With [`SplineValidation::Strict`], returns
    /// [`CurveError::NonFinitePoint`] or [`CurveError::UnsortedPoints`] for
    /// malformed input.
    pub fn with_options(points: &[Point], options: SplineOptions) -> Result<Self, CurveError> {
        match options.validation {
            SplineValidation::Lenient => Ok(Self::new(points)),
            SplineValidation::Strict => {
                validate_points(points)?;
                Ok(Self::fit(points))
            }
        }
    }

    fn fit(points: &[Point]) -> Self {
        let second_derivatives = if points.len() < 2 {
            vec![0.0; points.len()]
        } else {
            natural_second_derivatives(points)
        };

        debug!(points = points.len(), "fitted natural cubic spline");

        Self {
            points: points.to_vec(),
            second_derivatives,
        }
    }

    /// Control points the spline was fitted through.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Second derivative of the spline at each control point.
    pub fn second_derivatives(&self) -> &[f64] {
        &self.second_derivatives
    }

    /// Number of control points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True when the spline has no control points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Abscissa of the first control point.
    pub fn min_x(&self) -> Option<f64> {
        self.points.first().map(|p| p.x)
    }

    /// Abscissa of the last control point.
    pub fn max_x(&self) -> Option<f64> {
        self.points.last().map(|p| p.x)
    }

    /// Evaluates the spline at `x`.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::NoBracketingInterval`] when `x` is NaN, when it
    /// lies outside the knots on a side that does not extrapolate flat, or
    /// when unsorted knots leave it without an enclosing interval.
    pub fn try_value_at(&self, x: f64) -> Result<f64, CurveError> {
        let (first, last) = match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) => (*first, *last),
            _ => return Ok(0.0),
        };

        if self.points.len() == 1 {
            return Ok(first.y);
        }
        if x <= first.x && first.x > 0.0 {
            return Ok(first.y);
        }
        if (x >= last.x && last.x < 1.0) || x == last.x {
            return Ok(last.y);
        }

        let knots = self.points.windows(2).zip(self.second_derivatives.windows(2));
        for (pair, curvature) in knots {
            if let ([cur, next], [sd_cur, sd_next]) = (pair, curvature) {
                if cur.x <= x && x < next.x {
                    let h = next.x - cur.x;
                    let b = (x - cur.x) / h;
                    let a = 1.0 - b;
                    return Ok(a * cur.y
                        + b * next.y
                        + (h * h / 6.0) * ((a * a * a - a) * sd_cur + (b * b * b - b) * sd_next));
                }
            }
        }

        Err(CurveError::NoBracketingInterval {
            x,
            min_x: first.x,
            max_x: last.x,
        })
    }
}

impl Curve for CubicSpline {
    #[inline]
    fn evaluate(&self, x: f64) -> Result<f64, CurveError> {
        self.try_value_at(x)
    }
}

/// Builds a lenient natural cubic spline `f(x)` over `points`.
///
/// ```
/// use modkit_curves::{build_cubic_spline, Point};
///
/// let f = build_cubic_spline(&[Point::new(0.5, 7.0)]);
/// assert!((f(0.0)? - 7.0).abs() < 1e-12);
/// assert!((f(123.0)? - 7.0).abs() < 1e-12);
/// # Ok::<(), modkit_curves::CurveError>(())
/// ```
pub fn build_cubic_spline(
    points: &[Point],
) -> impl Fn(f64) -> Result<f64, CurveError> + Clone + Send + Sync + use<> {
    let spline = CubicSpline::new(points);
    move |x| spline.try_value_at(x)
}

/// Builds a natural cubic spline `f(x)` with explicit options.
///
/// # Errors
///
/// See [`CubicSpline::with_options`].
pub fn build_cubic_spline_with(
    points: &[Point],
    options: SplineOptions,
) -> Result<impl Fn(f64) -> Result<f64, CurveError> + Clone + Send + Sync + use<>, CurveError> {
    let spline = CubicSpline::with_options(points, options)?;
    Ok(move |x| spline.try_value_at(x))
}

/// Rejects non-finite coordinates and x values that are not strictly increasing.
pub(crate) fn validate_points(points: &[Point]) -> Result<(), CurveError> {
    if let Some(index) = points.iter().position(|p| !p.is_finite()) {
        return Err(CurveError::NonFinitePoint { index });
    }
    for (offset, pair) in points.windows(2).enumerate() {
        if let [prev, cur] = pair {
            if cur.x <= prev.x {
                return Err(CurveError::UnsortedPoints {
                    index: offset + 1,
                    previous_x: prev.x,
                    x: cur.x,
                });
            }
        }
    }
    Ok(())
}

fn first_unsorted(points: &[Point]) -> Option<usize> {
    points
        .windows(2)
        .position(|pair| {
            matches!(pair, [prev, cur] if cur.x.partial_cmp(&prev.x) != Some(Ordering::Greater))
        })
        .map(|offset| offset + 1)
}

/// Second derivatives at each knot with natural boundary conditions.
///
/// Tridiagonal (Thomas) solve: the forward sweep expresses each row in terms
/// of the previous one, storing the decomposition factor in `sd` and the
/// transformed right-hand side in `u`; back-substitution then runs from the
/// last knot to the first. Requires at least two points.
fn natural_second_derivatives(points: &[Point]) -> Vec<f64> {
    let n = points.len();
    let mut sd = vec![0.0; n];
    let mut u = vec![0.0; n];

    for i in 1..n - 1 {
        let (prev, cur, next) = (points[i - 1], points[i], points[i + 1]);
        let sig = (cur.x - prev.x) / (next.x - prev.x);
        let p = sig * sd[i - 1] + 2.0;
        sd[i] = (sig - 1.0) / p;

        let slope_diff = (next.y - cur.y) / (next.x - cur.x) - (cur.y - prev.y) / (cur.x - prev.x);
        u[i] = (6.0 * slope_diff / (next.x - prev.x) - sig * u[i - 1]) / p;
    }

    // natural boundary
    sd[n - 1] = 0.0;
    for k in (0..n - 1).rev() {
        sd[k] = sd[k] * sd[k + 1] + u[k];
    }

    sd
}
