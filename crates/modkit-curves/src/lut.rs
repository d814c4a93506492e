//! Pre-sampled lookup table for hot-path curve evaluation.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::curve::Curve;
use crate::error::CurveError;

/// Evenly spaced samples of a curve over `[x_min, x_max]`.
///
/// Fitting a spline walks its knots on every evaluation; a LUT trades that
/// for O(1) lookups with linear interpolation between samples. Build it once
/// when a script loads its curves, then call [`CurveLut::lookup`] freely.
///
/// `lookup()` does not allocate and clamps its input to the sampled domain.
///
/// # Example
///
/// ```
/// use modkit_curves::{CubicSpline, CurveLut, Point};
///
/// let spline = CubicSpline::new(&[
///     Point::new(0.0, 0.0),
///     Point::new(0.5, 1.0),
///     Point::new(1.0, 0.0),
/// ]);
/// let lut = CurveLut::from_curve_default(&spline, 0.0, 1.0)?;
///
/// assert!((lut.lookup(0.5) - 1.0).abs() < 1e-3);
/// assert!((lut.lookup(7.0) - 0.0).abs() < 1e-9);
/// # Ok::<(), modkit_curves::CurveError>(())
/// ```
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CurveLut {
    x_min: f64,
    x_max: f64,
    table: Vec<f64>,
}

impl CurveLut {
    /// Default number of samples.
    pub const DEFAULT_SIZE: usize = 256;

    /// Samples `curve` at `size` evenly spaced points over `[x_min, x_max]`.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::InvalidConfiguration`] when `size < 2` or the
    /// bounds are not finite with `x_min < x_max`, and propagates the first
    /// evaluation error from `curve`.
    pub fn from_curve<C>(curve: &C, x_min: f64, x_max: f64, size: usize) -> Result<Self, CurveError>
    where
        C: Curve + ?Sized,
    {
        check_domain(x_min, x_max, size)?;

        let step = (x_max - x_min) / (size - 1) as f64;
        let table = (0..size)
            .map(|i| {
                // pin the last sample to x_max exactly
                let x = if i == size - 1 {
                    x_max
                } else {
                    x_min + step * i as f64
                };
                curve.evaluate(x)
            })
            .collect::<Result<Vec<f64>, CurveError>>()?;

        debug!(size, x_min, x_max, "sampled curve into lookup table");

        Ok(Self {
            x_min,
            x_max,
            table,
        })
    }

    /// Samples `curve` with [`CurveLut::DEFAULT_SIZE`] entries.
    ///
    /// # Errors
    ///
    /// See [`CurveLut::from_curve`].
    pub fn from_curve_default<C>(curve: &C, x_min: f64, x_max: f64) -> Result<Self, CurveError>
    where
        C: Curve + ?Sized,
    {
        Self::from_curve(curve, x_min, x_max, Self::DEFAULT_SIZE)
    }

    /// Interpolated lookup.
    ///
    /// `x` is clamped to `[x_min, x_max]`. NaN maps to the first entry.
    #[inline]
    pub fn lookup(&self, x: f64) -> f64 {
        let last = self.table.len() - 1;
        let x = if x.is_nan() {
            self.x_min
        } else {
            x.clamp(self.x_min, self.x_max)
        };

        let scaled = (x - self.x_min) / (self.x_max - self.x_min) * last as f64;
        let index_low = (scaled as usize).min(last - 1);
        let fraction = scaled - index_low as f64;

        let low_value = self.table[index_low];
        let high_value = self.table[index_low + 1];

        low_value + fraction * (high_value - low_value)
    }

    /// Raw sampled values.
    pub fn table(&self) -> &[f64] {
        &self.table
    }

    /// Lower bound of the sampled domain.
    pub fn x_min(&self) -> f64 {
        self.x_min
    }

    /// Upper bound of the sampled domain.
    pub fn x_max(&self) -> f64 {
        self.x_max
    }

    /// True when no sample is lower than the one before it.
    pub fn is_monotonic(&self) -> bool {
        self.table.windows(2).all(|w| matches!(w, [a, b] if b >= a))
    }

    /// Smallest sampled value.
    pub fn min_value(&self) -> f64 {
        self.table.iter().copied().fold(f64::INFINITY, f64::min)
    }

    /// Largest sampled value.
    pub fn max_value(&self) -> f64 {
        self.table.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }
}

fn check_domain(x_min: f64, x_max: f64, size: usize) -> Result<(), CurveError> {
    if size < 2 {
        return Err(CurveError::InvalidConfiguration(format!(
            "lookup table needs at least 2 entries, got {size}"
        )));
    }
    if !x_min.is_finite() || !x_max.is_finite() {
        return Err(CurveError::InvalidConfiguration(
            "lookup table bounds must be finite".to_string(),
        ));
    }
    if x_min >= x_max {
        return Err(CurveError::InvalidConfiguration(format!(
            "lookup table domain is empty: [{x_min}, {x_max}]"
        )));
    }
    if !(x_max - x_min).is_finite() {
        return Err(CurveError::InvalidConfiguration(format!(
            "lookup table domain width overflows: [{x_min}, {x_max}]"
        )));
    }
    Ok(())
}

impl<'de> Deserialize<'de> for CurveLut {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            x_min: f64,
            x_max: f64,
            table: Vec<f64>,
        }

        let raw = Raw::deserialize(deserializer)?;
        check_domain(raw.x_min, raw.x_max, raw.table.len()).map_err(serde::de::Error::custom)?;
        Ok(CurveLut {
            x_min: raw.x_min,
            x_max: raw.x_max,
            table: raw.table,
        })
    }
}
