//! CSS value formatting
//!
//! Numbers are written the compact way hand-authored stylesheets write them:
//! no trailing zeros, no leading zero before the decimal point, and a bare
//! `0` for zero lengths.

/// Format a unitless number (`0.6` -> `.6`, `1.0` -> `1`, `-0.0` -> `0`)
pub fn css_number(value: f32) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    let s = format!("{value}");
    if let Some(rest) = s.strip_prefix("0.") {
        format!(".{rest}")
    } else if let Some(rest) = s.strip_prefix("-0.") {
        format!("-.{rest}")
    } else {
        s
    }
}

/// Format a length in pixels, writing zero without a unit
pub fn css_length(px: f32) -> String {
    if px == 0.0 {
        "0".to_string()
    } else {
        format!("{}px", css_number(px))
    }
}

/// Format a length in pixels, always carrying the unit
pub fn css_px(px: f32) -> String {
    format!("{}px", css_number(px))
}

/// Format a duration given in milliseconds as seconds (`350` -> `0.35s`)
pub fn css_seconds(ms: u32) -> String {
    format!("{}s", ms as f32 / 1000.0)
}
