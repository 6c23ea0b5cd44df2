// Human-readable magnitude formatting for dashboard metrics

/// Unit ladder for metric callouts. The scale stops at "million": anything
/// beyond renders as a large million figure rather than advancing further.
const UNITS: [&str; 2] = ["", "thousand"];

/// Format a non-negative magnitude as `{prefix}{value:.2} {unit}`, dividing
/// by 1000 for each tier. The base tier has an empty unit, so the trailing
/// space is kept (`"R$300.00 "`), matching the reference output exactly.
pub fn format_magnitude(value: f64, prefix: &str) -> String {
    let mut value = value;
    for unit in UNITS {
        if value < 1000.0 {
            return format!("{}{:.2} {}", prefix, value, unit);
        }
        value /= 1000.0;
    }
    format!("{}{:.2} million", prefix, value)
}
