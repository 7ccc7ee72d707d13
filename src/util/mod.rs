//! Utility module
//!
//! Numeric display helpers shared by the field renderer.

/// Returns 2^exponent seconds
pub fn exp2_seconds(exponent: i32) -> f64 {
    2f64.powi(exponent)
}

/// Scales a seconds value for display, to milliseconds when requested
pub fn scale_for_display(secs: f64, milliseconds: bool) -> f64 {
    if milliseconds {
        secs * 1000.0
    } else {
        secs
    }
}

/// Unit suffix matching [`scale_for_display`]
pub fn unit_suffix(milliseconds: bool) -> &'static str {
    if milliseconds {
        " ms"
    } else {
        " seconds"
    }
}

/// Shortest decimal that reads back as `value`, never in exponent notation
pub fn format_decimal(value: f64) -> String {
    format!("{}", value)
}

/// Renders a seconds value with its unit, e.g. `"0.5 seconds"` or `"500 ms"`
pub fn render_seconds(secs: f64, milliseconds: bool) -> String {
    format!(
        "{}{}",
        format_decimal(scale_for_display(secs, milliseconds)),
        unit_suffix(milliseconds)
    )
}
