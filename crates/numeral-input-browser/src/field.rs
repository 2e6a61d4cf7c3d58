//! `FieldHandle` over a DOM `<input>` element.
//!
//! The DOM reports and accepts selection offsets in UTF-16 code units; the
//! core works in characters, so offsets are converted at this boundary.

use numeral_input_core::text_helpers::{char_to_utf16_offset, utf16_to_char_offset};
use numeral_input_core::{FieldHandle, PlatformError, Selection};
use web_sys::HtmlInputElement;

/// Browser text field backed by an `HtmlInputElement`.
#[derive(Debug, Clone)]
pub struct BrowserField {
    element: HtmlInputElement,
}

impl BrowserField {
    pub fn new(element: HtmlInputElement) -> Self {
        Self { element }
    }

    pub fn element(&self) -> &HtmlInputElement {
        &self.element
    }
}

impl FieldHandle for BrowserField {
    fn text(&self) -> String {
        self.element.value()
    }

    fn selection(&self) -> Selection {
        let text = self.element.value();
        // Inputs that don't support selection report null; treat as 0.
        let start = self.element.selection_start().ok().flatten().unwrap_or(0) as usize;
        let end = self.element.selection_end().ok().flatten().unwrap_or(0) as usize;
        Selection::new(
            utf16_to_char_offset(&text, start),
            utf16_to_char_offset(&text, end),
        )
    }

    fn set_text(&mut self, text: &str) {
        self.element.set_value(text);
    }

    fn set_selection(&mut self, selection: Selection) -> Result<(), PlatformError> {
        let text = self.element.value();
        let start = char_to_utf16_offset(&text, selection.start) as u32;
        let end = char_to_utf16_offset(&text, selection.end) as u32;
        self.element
            .set_selection_range(start, end)
            .map_err(|e| PlatformError(format!("setSelectionRange failed: {e:?}")))
    }
}
