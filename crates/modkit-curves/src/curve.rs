//! The evaluation seam shared by every fitted curve.

use crate::error::CurveError;

/// A fitted curve `y = f(x)`.
///
/// Implementations capture their coefficients at construction time and never
/// mutate them, so evaluation is pure: the same `x` always yields the same
/// bits, and a curve can be shared across threads freely.
pub trait Curve {
    /// Evaluates the curve at `x`.
    ///
    /// # Errors
    ///
    /// Only curves with a bracketing step (the cubic spline) can fail, with
    /// [`CurveError::NoBracketingInterval`].
    fn evaluate(&self, x: f64) -> Result<f64, CurveError>;

    /// Evaluates many points, stopping at the first failure.
    ///
    /// # Errors
    ///
    /// Propagates the first error returned by [`Curve::evaluate`].
    #[inline]
    fn evaluate_many(&self, xs: &[f64]) -> Result<Vec<f64>, CurveError> {
        xs.iter().map(|&x| self.evaluate(x)).collect()
    }
}

impl<C: Curve + ?Sized> Curve for &C {
    #[inline]
    fn evaluate(&self, x: f64) -> Result<f64, CurveError> {
        (**self).evaluate(x)
    }
}

impl<C: Curve + ?Sized> Curve for Box<C> {
    #[inline]
    fn evaluate(&self, x: f64) -> Result<f64, CurveError> {
        (**self).evaluate(x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Doubling;

    impl Curve for Doubling {
        fn evaluate(&self, x: f64) -> Result<f64, CurveError> {
            if x.is_nan() {
                return Err(CurveError::NoBracketingInterval {
                    x,
                    min_x: 0.0,
                    max_x: 0.0,
                });
            }
            Ok(2.0 * x)
        }
    }

    #[test]
    fn test_evaluate_many_collects() -> Result<(), CurveError> {
        let out = Doubling.evaluate_many(&[0.0, 1.5, -2.0])?;
        assert_eq!(out.len(), 3);
        assert!((out[1] - 3.0).abs() < 1e-12);
        assert!((out[2] + 4.0).abs() < 1e-12);
        Ok(())
    }

    #[test]
    fn test_evaluate_many_stops_on_error() {
        let result = Doubling.evaluate_many(&[0.0, f64::NAN, 1.0]);
        assert!(matches!(
            result,
            Err(CurveError::NoBracketingInterval { .. })
        ));
    }

    #[test]
    fn test_boxed_dyn_curve() -> Result<(), CurveError> {
        let boxed: Box<dyn Curve> = Box::new(Doubling);
        assert!((boxed.evaluate(4.0)? - 8.0).abs() < 1e-12);
        Ok(())
    }
}
