//! # Shared Utility Functions
//!
//! Common utility functions used across the widget clients.
//!
//! ## Label Formatting
//!
//! - [`truncate_label`] - Truncate display text with an ellipsis, preserving
//!   the underlying full value for the caller
//!
//! ## Usage
//!
//! ```rust
//! use shared::utils::truncate_label;
//!
//! let phrase = "What's the towing capacity of the Silverado?";
//! assert_eq!(truncate_label(phrase, 20), "What's the towing ca...");
//! ```

/// Truncate a display label to at most `max_len` characters, appending an
/// ellipsis when the text was cut.
///
/// Text at or under the limit is returned unchanged. Operates on characters,
/// not bytes, so multi-byte input never splits a code point.
pub fn truncate_label(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        let head: String = text.chars().take(max_len).collect();
        format!("{head}...")
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_labels_pass_through() {
        assert_eq!(truncate_label("Tell me about the warranty", 40), "Tell me about the warranty");
        assert_eq!(truncate_label("", 20), "");
    }

    #[test]
    fn long_labels_are_cut_with_ellipsis() {
        assert_eq!(
            truncate_label("What's the fuel economy of the Equinox?", 20),
            "What's the fuel econ..."
        );
    }

    #[test]
    fn exact_length_is_not_truncated() {
        let text = "a".repeat(20);
        assert_eq!(truncate_label(&text, 20), text);
    }

    #[test]
    fn multibyte_text_truncates_on_char_boundary() {
        assert_eq!(truncate_label("ééééé", 3), "ééé...");
    }
}
