/// Reject NaN and infinities, which slip through ordinary range comparisons
pub fn ensure_finite(field: &str, value: f64) -> Result<(), String> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(format!("{} must be a finite number", field))
    }
}
