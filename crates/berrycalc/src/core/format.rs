//! Number formatting for the display and history
//!
//! Values are `f64`. Non-integral results are rounded to
//! [`DECIMAL_PLACES`] before printing so that repeated calculations render
//! identically across platforms.

use std::borrow::Cow;

/// Decimal places kept for non-integral results
pub const DECIMAL_PLACES: i32 = 8;

/// Marker appended when the display is truncated for presentation
pub const ELLIPSIS: &str = "...";

/// Returns true if `value` has no fractional part
#[must_use]
pub fn is_integral(value: f64) -> bool {
    value == value.trunc()
}

/// Rounds `value` to `places` decimal places (half away from zero)
#[must_use]
pub fn round_to_places(value: f64, places: i32) -> f64 {
    let scale = 10f64.powi(places);
    let scaled = value * scale;
    if !scaled.is_finite() {
        // Already beyond the precision that rounding could change
        return value;
    }
    scaled.round() / scale
}

/// Formats a value the way the calculator displays it.
///
/// Integral values print without a fractional part (`8`, not `8.0`);
/// everything else is rounded to eight places and printed with the
/// shortest representation that round-trips.
#[must_use]
pub fn format_number(value: f64) -> String {
    let value = if is_integral(value) {
        value
    } else {
        round_to_places(value, DECIMAL_PLACES)
    };

    if is_integral(value) {
        // `+ 0.0` folds negative zero into zero
        format!("{:.0}", value + 0.0)
    } else {
        value.to_string()
    }
}

/// Truncates `text` to `width` characters plus an ellipsis
#[must_use]
pub fn truncate_for_display(text: &str, width: usize) -> Cow<'_, str> {
    if text.chars().count() <= width {
        return Cow::Borrowed(text);
    }
    let mut shown: String = text.chars().take(width).collect();
    shown.push_str(ELLIPSIS);
    Cow::Owned(shown)
}
