//! Range checks for physical parameters.

use crate::{CoreError, CoreResult};

/// Rejects NaN and infinities.
pub fn ensure_finite(v: f64, what: &'static str) -> CoreResult<f64> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(CoreError::NonFinite { what, value: v })
    }
}

/// Finite and strictly greater than zero.
pub fn ensure_positive(v: f64, what: &'static str) -> CoreResult<f64> {
    let v = ensure_finite(v, what)?;
    if v > 0.0 {
        Ok(v)
    } else {
        Err(CoreError::OutOfRange { what, value: v })
    }
}

/// Finite and within (0, 1].
pub fn ensure_fraction(v: f64, what: &'static str) -> CoreResult<f64> {
    let v = ensure_finite(v, what)?;
    if v > 0.0 && v <= 1.0 {
        Ok(v)
    } else {
        Err(CoreError::OutOfRange { what, value: v })
    }
}
