//! Utility functions for the code block widget.
//!
//! - **Language labels**: resolving the header label shown for a configured
//!   language identifier. The mapping is data; extend the table, the lookup
//!   stays unchanged.
//! - **Clipboard access**: probing for the async clipboard API so browsers
//!   that lack it degrade to a silent no-op instead of throwing.

use wasm_bindgen::JsValue;
use web_sys::Clipboard;

/// Known language identifiers and the label shown in the header bar.
const LANGUAGE_LABELS: &[(&str, &str)] = &[
    ("bash", "BASH"),
    ("sh", "BASH"),
    ("shell", "BASH"),
    ("python", "PYTHON"),
    ("javascript", "JAVASCRIPT"),
    ("typescript", "TYPESCRIPT"),
];

/// Resolves the header label for a language identifier: the mapped label for
/// known identifiers (case-insensitive), the uppercased identifier otherwise.
pub fn language_label(language: &str) -> String {
    let lower = language.to_lowercase();
    LANGUAGE_LABELS
        .iter()
        .find(|(id, _)| *id == lower)
        .map(|(_, label)| (*label).to_string())
        .unwrap_or_else(|| language.to_uppercase())
}

/// Returns the async clipboard API when the browser exposes one.
///
/// `navigator.clipboard` is probed via `Reflect` first: the generated
/// binding assumes the property exists, and calling `write_text` through it
/// on an older browser would throw instead of rejecting.
pub fn clipboard() -> Option<Clipboard> {
    let navigator = web_sys::window()?.navigator();
    let value = js_sys::Reflect::get(navigator.as_ref(), &JsValue::from_str("clipboard")).ok()?;
    if value.is_undefined() || value.is_null() {
        return None;
    }
    Some(navigator.clipboard())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_identifiers_use_mapped_labels() {
        assert_eq!(language_label("bash"), "BASH");
        assert_eq!(language_label("sh"), "BASH");
        assert_eq!(language_label("shell"), "BASH");
        assert_eq!(language_label("python"), "PYTHON");
        assert_eq!(language_label("javascript"), "JAVASCRIPT");
        assert_eq!(language_label("typescript"), "TYPESCRIPT");
    }

    #[test]
    fn lookup_is_case_insensitive() {
        assert_eq!(language_label("Python"), "PYTHON");
        assert_eq!(language_label("BASH"), "BASH");
    }

    #[test]
    fn unknown_identifiers_are_uppercased() {
        assert_eq!(language_label("ruby"), "RUBY");
        assert_eq!(language_label("c++"), "C++");
    }
}
