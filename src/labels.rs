//! Human readable output labels.
//!
//! Every recognizer yields `Option<T>`; `None` means "nothing recognized" and
//! renders as the `"___"` sentinel.

use serde::Serializer;

use crate::constants::SENTINEL_LABEL;

/// A recognized value with a fixed textual label
pub trait Label: Copy {
    /// Label as emitted downstream
    fn as_str(&self) -> &'static str;
}

/// Render an optional recognition result, substituting the sentinel for `None`
#[must_use]
pub fn label_or_sentinel<T: Label>(value: Option<T>) -> &'static str {
    value.map_or(SENTINEL_LABEL, |v| v.as_str())
}

/// Serde adapter writing `Option<T: Label>` as its label string
pub fn serialize_label<T, S>(value: &Option<T>, serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    T: Label,
    S: Serializer,
{
    serializer.serialize_str(label_or_sentinel(*value))
}
