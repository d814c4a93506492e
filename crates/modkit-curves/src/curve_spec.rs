//! Serializable curve descriptions.
//!
//! Mod profiles and scripts describe curves as data. A [`CurveSpec`] is that
//! description; [`CurveSpec::build`] turns it into a [`FittedCurve`].

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::curve::Curve;
use crate::error::CurveError;
use crate::exponential::ExponentialCurve;
use crate::linear::LinearCurve;
use crate::point::Point;
use crate::spline::{CubicSpline, SplineOptions, SplineValidation, validate_points};

/// Declarative description of a curve.
///
/// # Example
///
/// ```
/// use modkit_curves::{Curve, CurveSpec};
///
/// let spec = CurveSpec::from_json(
///     r#"{"type":"exponential","shape":-2.3,"p1":{"x":0.0,"y":3.0},"p2":{"x":1.0,"y":0.5}}"#,
/// )?;
/// let curve = spec.build()?;
/// assert!((curve.evaluate(1.0)? - 0.5).abs() < 1e-12);
/// # Ok::<(), modkit_curves::CurveError>(())
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CurveSpec {
    /// Straight line through two points.
    Linear {
        /// First control point.
        p1: Point,
        /// Second control point.
        p2: Point,
    },

    /// `a * e^(shape * x) + c` through two points.
    Exponential {
        /// Exponent scale. Zero degenerates to a line.
        shape: f64,
        /// First control point.
        p1: Point,
        /// Second control point.
        p2: Point,
    },

    /// Natural cubic spline through ordered control points.
    CubicSpline {
        /// Control points, ascending in x.
        points: Vec<Point>,
        /// Construction-time validation mode.
        #[serde(default)]
        validation: SplineValidation,
    },
}

impl CurveSpec {
    /// Parses a curve description from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::Serialization`] when the JSON does not describe
    /// a curve.
    pub fn from_json(json: &str) -> Result<Self, CurveError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Encodes the description as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::Serialization`] if encoding fails.
    pub fn to_json(&self) -> Result<String, CurveError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Validates the description.
    ///
    /// Two-point curves need finite coordinates and distinct abscissae. A
    /// finite shape is also required for exponentials. Splines are checked
    /// according to their validation mode.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::InvalidConfiguration`] for bad two-point curves
    /// and the strict spline errors for bad spline input.
    pub fn validate(&self) -> Result<(), CurveError> {
        match self {
            CurveSpec::Linear { p1, p2 } => validate_pair("linear", p1, p2),
            CurveSpec::Exponential { shape, p1, p2 } => {
                if !shape.is_finite() {
                    return Err(CurveError::InvalidConfiguration(
                        "exponential shape must be finite".to_string(),
                    ));
                }
                validate_pair("exponential", p1, p2)
            }
            CurveSpec::CubicSpline { points, validation } => match validation {
                SplineValidation::Lenient => Ok(()),
                SplineValidation::Strict => validate_points(points),
            },
        }
    }

    /// Validates and fits the described curve.
    ///
    /// # Errors
    ///
    /// See [`CurveSpec::validate`].
    pub fn build(&self) -> Result<FittedCurve, CurveError> {
        self.validate()?;

        let curve = match self {
            CurveSpec::Linear { p1, p2 } => FittedCurve::Linear(LinearCurve::new(*p1, *p2)),
            CurveSpec::Exponential { shape, p1, p2 } => {
                FittedCurve::Exponential(ExponentialCurve::new(*shape, *p1, *p2))
            }
            CurveSpec::CubicSpline { points, validation } => {
                let options = SplineOptions::default().with_validation(*validation);
                FittedCurve::CubicSpline(CubicSpline::with_options(points, options)?)
            }
        };

        debug!(kind = curve.kind(), "built curve from spec");
        Ok(curve)
    }
}

fn validate_pair(kind: &str, p1: &Point, p2: &Point) -> Result<(), CurveError> {
    if !p1.is_finite() || !p2.is_finite() {
        return Err(CurveError::InvalidConfiguration(format!(
            "{kind} control points must be finite"
        )));
    }
    if p1.x == p2.x {
        return Err(CurveError::InvalidConfiguration(format!(
            "{kind} control points must have distinct x, both are {}",
            p1.x
        )));
    }
    Ok(())
}

/// A curve built from a [`CurveSpec`].
#[derive(Clone, Debug, PartialEq)]
pub enum FittedCurve {
    /// See [`LinearCurve`].
    Linear(LinearCurve),
    /// See [`ExponentialCurve`].
    Exponential(ExponentialCurve),
    /// See [`CubicSpline`].
    CubicSpline(CubicSpline),
}

impl FittedCurve {
    /// Short name of the curve family.
    pub fn kind(&self) -> &'static str {
        match self {
            FittedCurve::Linear(_) => "linear",
            FittedCurve::Exponential(_) => "exponential",
            FittedCurve::CubicSpline(_) => "cubic_spline",
        }
    }
}

impl Curve for FittedCurve {
    fn evaluate(&self, x: f64) -> Result<f64, CurveError> {
        match self {
            FittedCurve::Linear(curve) => curve.evaluate(x),
            FittedCurve::Exponential(curve) => curve.evaluate(x),
            FittedCurve::CubicSpline(curve) => curve.evaluate(x),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn must<T, E: std::fmt::Debug>(result: Result<T, E>) -> T {
        match result {
            Ok(v) => v,
            Err(e) => panic!("unexpected error: {:?}", e),
        }
    }

    #[test]
    fn test_linear_spec_builds() -> Result<(), CurveError> {
        let spec = CurveSpec::Linear {
            p1: Point::new(24.0, 2.0),
            p2: Point::new(96.0, 16.0),
        };
        let curve = spec.build()?;
        assert_eq!(curve.kind(), "linear");
        assert!((curve.evaluate(96.0)? - 16.0).abs() < 1e-12);
        Ok(())
    }

    #[test]
    fn test_linear_spec_rejects_equal_x() {
        let spec = CurveSpec::Linear {
            p1: Point::new(1.0, 2.0),
            p2: Point::new(1.0, 3.0),
        };
        match spec.build() {
            Err(CurveError::InvalidConfiguration(msg)) => assert!(msg.contains("distinct x")),
            other => panic!("expected InvalidConfiguration, got {:?}", other),
        }
    }

    #[test]
    fn test_exponential_spec_rejects_nan_shape() {
        let spec = CurveSpec::Exponential {
            shape: f64::NAN,
            p1: Point::new(0.0, 3.0),
            p2: Point::new(1.0, 0.5),
        };
        assert!(spec.validate().is_err());
    }

    #[test]
    fn test_exponential_spec_rejects_infinite_point() {
        let spec = CurveSpec::Exponential {
            shape: 1.0,
            p1: Point::new(0.0, f64::INFINITY),
            p2: Point::new(1.0, 0.5),
        };
        assert!(matches!(
            spec.validate(),
            Err(CurveError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_spline_spec_strict_rejects_unsorted() {
        let spec = CurveSpec::CubicSpline {
            points: vec![Point::new(0.5, 1.0), Point::new(0.2, 2.0)],
            validation: SplineValidation::Strict,
        };
        assert!(matches!(
            spec.build(),
            Err(CurveError::UnsortedPoints { index: 1, .. })
        ));
    }

    #[test]
    fn test_spline_spec_lenient_builds_unsorted() {
        let spec = CurveSpec::CubicSpline {
            points: vec![Point::new(0.5, 1.0), Point::new(0.2, 2.0)],
            validation: SplineValidation::Lenient,
        };
        assert!(spec.build().is_ok());
    }

    #[test]
    fn test_json_round_trip() -> Result<(), CurveError> {
        let spec = CurveSpec::CubicSpline {
            points: vec![Point::new(0.1, 0.0), Point::new(0.5, 1.0), Point::new(0.9, 0.0)],
            validation: SplineValidation::Strict,
        };
        let json = spec.to_json()?;
        assert!(json.contains(r#""type":"cubic_spline""#));
        assert_eq!(CurveSpec::from_json(&json)?, spec);
        Ok(())
    }

    #[test]
    fn test_spline_validation_defaults_to_lenient() -> Result<(), CurveError> {
        let spec = CurveSpec::from_json(r#"{"type":"cubic_spline","points":[]}"#)?;
        assert_eq!(
            spec,
            CurveSpec::CubicSpline {
                points: Vec::new(),
                validation: SplineValidation::Lenient,
            }
        );
        let curve = spec.build()?;
        assert!((curve.evaluate(0.3)? - 0.0).abs() < 1e-12);
        Ok(())
    }

    #[test]
    fn test_unknown_type_is_serialization_error() {
        let result = CurveSpec::from_json(r#"{"type":"bezier"}"#);
        assert!(matches!(result, Err(CurveError::Serialization(_))));
    }

    #[test]
    fn test_built_spec_matches_direct_construction() {
        let p1 = Point::new(0.0, 3.0);
        let p2 = Point::new(1.0, 0.5);
        let spec = CurveSpec::Exponential { shape: -2.3, p1, p2 };
        let built = must(spec.build());
        let direct = ExponentialCurve::new(-2.3, p1, p2);
        for x in [0.0, 0.3, 0.5, 0.8, 1.0] {
            assert_eq!(must(built.evaluate(x)).to_bits(), direct.value_at(x).to_bits());
        }
    }
}
