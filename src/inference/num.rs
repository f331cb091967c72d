use serde_json::Number;

/// Value-level integrality: `3`, `-7`, `1.0` and `1e3` are all integral.
///
/// The JSON lexeme is irrelevant; only the numeric value decides.
pub fn is_integral(n: &Number) -> bool {
    if n.is_i64() || n.is_u64() {
        return true;
    }
    match n.as_f64() {
        Some(f) => f.is_finite() && f.fract() == 0.0,
        None => false,
    }
}
