// src/parsers.rs

/// Parse a finite `f64` from CLI or environment input.
///
/// # Errors
/// Returns an error if the input is not a number, or is NaN or infinite.
pub fn parse_finite_f64(s: &str) -> Result<f64, String> {
    let value = s.trim().parse::<f64>().map_err(|err| format!("invalid number '{s}': {err}"))?;
    if value.is_finite() { Ok(value) } else { Err(format!("value must be finite, got '{s}'")) }
}
