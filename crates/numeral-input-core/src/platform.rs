//! Platform abstraction for the live text field.
//!
//! The controller reads the field at event time and writes committed state
//! back through this trait. The browser implementation wraps an
//! `HtmlInputElement`; tests use an in-memory field.

use smol_str::SmolStr;

use crate::error::PlatformError;
use crate::types::{FieldSnapshot, Selection};

/// Handle to the live text field an input controller drives.
pub trait FieldHandle {
    /// Current text shown by the field.
    fn text(&self) -> String;

    /// Current selection, in character offsets.
    fn selection(&self) -> Selection;

    /// Replace the displayed text.
    ///
    /// Native fields typically move the caret to the end as a side effect;
    /// the controller re-applies the selection afterwards.
    fn set_text(&mut self, text: &str);

    /// Place the selection, in character offsets.
    fn set_selection(&mut self, selection: Selection) -> Result<(), PlatformError>;

    /// Capture text and selection together.
    fn snapshot(&self) -> FieldSnapshot {
        FieldSnapshot::new(self.text(), self.selection())
    }
}

/// Notification sent after every accepted edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeEvent {
    /// Name tag the host uses to route the change.
    pub field_name: SmolStr,
    /// Canonical Latin-digit value.
    pub value: String,
}

/// In-memory field that behaves like a native text input: setting the text
/// moves the caret to the end.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryField {
    pub text: String,
    pub selection: Selection,
}

impl MemoryField {
    pub fn new(text: impl Into<String>, selection: Selection) -> Self {
        Self {
            text: text.into(),
            selection,
        }
    }

    /// Field with the caret at the end of `text`.
    pub fn with_text(text: impl Into<String>) -> Self {
        let text = text.into();
        let end = text.chars().count();
        Self::new(text, Selection::caret(end))
    }
}

impl FieldHandle for MemoryField {
    fn text(&self) -> String {
        self.text.clone()
    }

    fn selection(&self) -> Selection {
        self.selection
    }

    fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
        self.selection = Selection::caret(text.chars().count());
    }

    fn set_selection(&mut self, selection: Selection) -> Result<(), PlatformError> {
        let len = self.text.chars().count();
        if selection.end > len {
            return Err(PlatformError(format!(
                "selection {}..{} out of bounds for length {len}",
                selection.start, selection.end
            )));
        }
        self.selection = selection;
        Ok(())
    }
}
