//! `release_year` coercion.

/// Parses a raw `release_year` cell.
///
/// Accepts integers (`"2015"`) and integral floats (`"2015.0"`), which is
/// what spreadsheet round-trips tend to produce. Returns `None` for anything
/// else, including fractional or out-of-range values.
pub fn parse_release_year(raw: &str) -> Option<i32> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(year) = trimmed.parse::<i32>() {
        return Some(year);
    }
    let value = trimmed.parse::<f64>().ok()?;
    if !value.is_finite() || value.fract() != 0.0 {
        return None;
    }
    if value < f64::from(i32::MIN) || value > f64::from(i32::MAX) {
        return None;
    }
    Some(value as i32)
}
