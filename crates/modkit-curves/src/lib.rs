//! Curve fitting for modkit scripts
//!
//! This crate builds interpolating curves from control points supplied by
//! scripts and mod profiles.
//!
//! # Overview
//!
//! - **Linear**: the line through two points, extrapolated with the same slope
//! - **Exponential**: `a * e^(shape * x) + c` through two points, falling back
//!   to linear when the exponential form is undetermined
//! - **Cubic spline**: natural cubic spline through ordered points, flat
//!   beyond the end knots inside the `[0, 1]` domain
//! - **Curve specs**: serde descriptions of the above for profile files
//! - **Lookup tables**: pre-sampled curves for O(1) evaluation
//!
//! Every fitted curve captures its coefficients once and evaluates as a pure
//! function, so curves are `Send + Sync` and can be shared freely.
//!
//! # Example
//!
//! ```
//! use modkit_curves::{build_cubic_spline, build_exponential_curve, build_linear_curve, Point};
//!
//! let line = build_linear_curve(Point::new(24.0, 2.0), Point::new(96.0, 16.0));
//! assert!((line(24.0) - 2.0).abs() < 1e-12);
//!
//! let decay = build_exponential_curve(-2.3, Point::new(0.0, 3.0), Point::new(1.0, 0.5));
//! assert!((decay(0.5) - 1.101_222_7).abs() < 1e-6);
//!
//! let spline = build_cubic_spline(&[
//!     Point::new(0.1, 0.0),
//!     Point::new(0.5, 1.0),
//!     Point::new(0.9, 0.25),
//! ]);
//! assert!((spline(0.5)? - 1.0).abs() < 1e-12);
//! # Ok::<(), modkit_curves::CurveError>(())
//! ```

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![deny(static_mut_refs)]
#![deny(unused_must_use)]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod curve;
pub mod curve_spec;
pub mod error;
pub mod exponential;
pub mod linear;
pub mod lut;
pub mod point;
pub mod prelude;
pub mod spline;

pub use curve::Curve;
pub use curve_spec::{CurveSpec, FittedCurve};
pub use error::{CurveError, Result};
pub use exponential::{ExponentialCurve, build_exponential_curve};
pub use linear::{LinearCurve, build_linear_curve};
pub use lut::CurveLut;
pub use point::Point;
pub use spline::{
    CubicSpline, SplineOptions, SplineValidation, build_cubic_spline, build_cubic_spline_with,
};
