// src/ui/validation.rs
//! Checks applied to the create-table form before a request is sent.

/// Input length bound for a column label.
pub(crate) const MAX_COLUMN_LABEL_LEN: usize = 15;

pub(crate) const REQUIRED_MESSAGE: &str = "This column is required";

/// Returns the message to show under a required input, if any.
pub(crate) fn validate_required(value: &str) -> Option<&'static str> {
    if value.is_empty() {
        Some(REQUIRED_MESSAGE)
    } else {
        None
    }
}

/// Cuts `value` down to `MAX_COLUMN_LABEL_LEN` characters.
pub(crate) fn clamp_label(value: &mut String) {
    if let Some((byte_idx, _)) = value.char_indices().nth(MAX_COLUMN_LABEL_LEN) {
        value.truncate(byte_idx);
    }
}
