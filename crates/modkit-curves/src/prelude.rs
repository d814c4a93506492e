//! Prelude for the curves crate.
//!
//! ```
//! use modkit_curves::prelude::*;
//!
//! let line = LinearCurve::new(Point::new(0.0, 0.0), Point::new(1.0, 2.0));
//! assert!((line.evaluate(0.5)? - 1.0).abs() < 1e-12);
//! # Ok::<(), CurveError>(())
//! ```

pub use crate::curve::Curve;
pub use crate::curve_spec::{CurveSpec, FittedCurve};
pub use crate::error::CurveError;
pub use crate::exponential::{ExponentialCurve, build_exponential_curve};
pub use crate::linear::{LinearCurve, build_linear_curve};
pub use crate::lut::CurveLut;
pub use crate::point::Point;
pub use crate::spline::{
    CubicSpline, SplineOptions, SplineValidation, build_cubic_spline, build_cubic_spline_with,
};
