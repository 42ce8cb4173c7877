//! Field padding and alignment primitives.
//!
//! Widths here are measured in string length (`str::len()`), not display
//! cells; the crate targets plain ASCII output where the two coincide.

use serde::{Deserialize, Serialize};

/// Text alignment within a column.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    /// Left-align text (pad on the right).
    #[default]
    Left,
    /// Center text (pad on both sides).
    Center,
    /// Right-align text (pad on the left).
    Right,
}

/// Left-aligns `text` in a field of `width` by padding on the right.
///
/// Text at or above `width` is returned unchanged, never truncated.
pub fn pad_right(text: &str, width: usize) -> String {
    let mut out = String::with_capacity(width.max(text.len()));
    out.push_str(text);
    while out.len() < width {
        out.push(' ');
    }
    out
}

/// Right-aligns `text` in a field of `width` by padding on the left.
///
/// Text at or above `width` is returned unchanged, never truncated.
pub fn pad_left(text: &str, width: usize) -> String {
    let mut out = String::with_capacity(width.max(text.len()));
    for _ in text.len()..width {
        out.push(' ');
    }
    out.push_str(text);
    out
}

/// Centers `text` in a field of `width`.
///
/// When the slack is odd the extra space goes on the right half: the text
/// ends at offset `(width + len) / 2` from the left edge. Text at or above
/// `width` is returned unchanged.
///
/// # Example
///
/// ```rust
/// use textgrid::pad_center;
///
/// assert_eq!(pad_center("ab", 5), " ab  ");
/// assert_eq!(pad_center("hello", 3), "hello");
/// ```
pub fn pad_center(text: &str, width: usize) -> String {
    if text.len() >= width {
        return text.to_string();
    }
    let left = (width + text.len()) / 2 - text.len();
    let right = width - (width + text.len()) / 2;
    let mut out = String::with_capacity(width);
    for _ in 0..left {
        out.push(' ');
    }
    out.push_str(text);
    for _ in 0..right {
        out.push(' ');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pad_right_basic() {
        assert_eq!(pad_right("ab", 5), "ab   ");
        assert_eq!(pad_right("", 3), "   ");
    }

    #[test]
    fn pad_left_basic() {
        assert_eq!(pad_left("ab", 5), "   ab");
        assert_eq!(pad_left("", 3), "   ");
    }

    #[test]
    fn pad_center_even_slack() {
        assert_eq!(pad_center("ab", 6), "  ab  ");
    }

    #[test]
    fn pad_center_odd_slack_biases_right() {
        // Slack of 3 splits 1/2, never 2/1.
        assert_eq!(pad_center("ab", 5), " ab  ");
        assert_eq!(pad_center("x", 4), " x  ");
    }

    #[test]
    fn padding_is_identity_on_full_width_text() {
        assert_eq!(pad_right("hello", 5), "hello");
        assert_eq!(pad_left("hello", 5), "hello");
        assert_eq!(pad_center("hello", 5), "hello");
    }

    #[test]
    fn padding_never_truncates() {
        assert_eq!(pad_right("overflow", 3), "overflow");
        assert_eq!(pad_left("overflow", 3), "overflow");
        assert_eq!(pad_center("overflow", 3), "overflow");
    }

    #[test]
    fn pad_center_zero_width() {
        assert_eq!(pad_center("", 0), "");
        assert_eq!(pad_center("a", 0), "a");
    }

    #[test]
    fn align_serde_lowercase() {
        assert_eq!(
            serde_json::from_str::<Align>("\"center\"").unwrap(),
            Align::Center
        );
        assert_eq!(serde_json::to_string(&Align::Left).unwrap(), "\"left\"");
    }

    #[test]
    fn align_default_is_left() {
        assert_eq!(Align::default(), Align::Left);
    }
}
