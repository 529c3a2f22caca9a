//! Slider value formatting.

/// Render a slider weight the way a range input reports it:
/// `1`, `0.5`, `-0.3`, never `-0`.
pub fn format_weight(value: f64) -> String {
    let rounded = (value * 10.0).round() / 10.0;
    if rounded == 0.0 {
        "0".to_string()
    } else if rounded.fract() == 0.0 {
        format!("{rounded:.0}")
    } else {
        format!("{rounded:.1}")
    }
}
