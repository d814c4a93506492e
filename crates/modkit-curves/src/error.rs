//! Error types for curve construction and evaluation.

/// Error type for curve operations.
///
/// Numeric degeneracy (equal x-coordinates in a linear fit, a zero exponent
/// spread) is not an error and never shows up here. These variants cover
/// invariant violations and malformed configuration only.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CurveError {
    /// No spline interval brackets the query.
    ///
    /// Happens for NaN queries, for queries outside the control points when
    /// the boundary point does not trigger flat extrapolation, and for
    /// unsorted control points.
    #[error("no spline interval brackets x = {x} (control points span [{min_x}, {max_x}])")]
    NoBracketingInterval {
        /// The query abscissa.
        x: f64,
        /// Smallest control point abscissa.
        min_x: f64,
        /// Largest control point abscissa.
        max_x: f64,
    },

    /// Control points are not strictly increasing in x.
    #[error(
        "spline control points must be strictly increasing in x: point {index} (x = {x}) follows x = {previous_x}"
    )]
    UnsortedPoints {
        /// Index of the first offending point.
        index: usize,
        /// Abscissa of the point before it.
        previous_x: f64,
        /// Abscissa of the offending point.
        x: f64,
    },

    /// A control point has a NaN or infinite coordinate.
    #[error("control point {index} has a non-finite coordinate")]
    NonFinitePoint {
        /// Index of the offending point.
        index: usize,
    },

    /// Invalid curve configuration.
    #[error("invalid curve configuration: {0}")]
    InvalidConfiguration(String),

    /// A curve description could not be encoded or decoded.
    #[error("curve serialization failed: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for CurveError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

/// A specialized `Result` type for curve operations.
pub type Result<T> = std::result::Result<T, CurveError>;
