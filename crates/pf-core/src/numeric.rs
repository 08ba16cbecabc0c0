use crate::CoreError;

/// Reject NaN and infinities coming back from the engine.
pub fn ensure_finite(v: f64, what: &'static str) -> Result<f64, CoreError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(CoreError::NonFinite { what, value: v })
    }
}

/// Magnitudes reported by the engine (per-unit voltages, amperes) are finite and >= 0.
pub fn ensure_magnitude(v: f64, what: &'static str) -> Result<f64, CoreError> {
    let v = ensure_finite(v, what)?;
    if v < 0.0 {
        return Err(CoreError::NegativeMagnitude { what, value: v });
    }
    Ok(v)
}
