//! The numeral input controller.
//!
//! Owns the [`EditState`] of one input and the handle to its live field.
//! Every accepted edit is committed in a fixed order: write the display text,
//! re-apply the computed selection (writing the text resets the native caret
//! to the end), then notify the change listener with the canonical value.

use std::fmt;

use smol_str::SmolStr;

use crate::actions::{EditAction, KeyIntent, KeydownResult, Modifiers};
use crate::config::NumeralInputConfig;
use crate::digits::NumeralFormat;
use crate::execute::execute_action;
use crate::platform::{ChangeEvent, FieldHandle};
use crate::types::{EditState, Selection};

type ChangeListener = Box<dyn FnMut(&ChangeEvent)>;

/// Digits-only input that displays Latin or Farsi glyphs and reports Latin.
pub struct NumeralInput<F> {
    field: F,
    state: EditState,
    format: NumeralFormat,
    field_name: SmolStr,
    on_change: Option<ChangeListener>,
}

impl<F: FieldHandle> NumeralInput<F> {
    /// Create an input over `field`, showing the configured initial value.
    pub fn new(mut field: F, config: &NumeralInputConfig) -> Self {
        let format = config.numeral_format;
        let state = EditState::new(&config.initial_value, format);
        field.set_text(&state.value_to_show);
        Self {
            field,
            state,
            format,
            field_name: config.field_name.clone(),
            on_change: None,
        }
    }

    /// Set the change listener.
    pub fn with_on_change(mut self, listener: impl FnMut(&ChangeEvent) + 'static) -> Self {
        self.set_on_change(listener);
        self
    }

    pub fn set_on_change(&mut self, listener: impl FnMut(&ChangeEvent) + 'static) {
        self.on_change = Some(Box::new(listener));
    }

    /// Handle a keydown by key code with no modifiers held.
    ///
    /// Digits and deletes become edits, navigation and IME keys pass through,
    /// and everything else is swallowed.
    pub fn handle_keydown(&mut self, key_code: u32) -> KeydownResult {
        self.handle_keydown_with_modifiers(key_code, Modifiers::NONE)
    }

    /// Handle a keydown with the modifiers held alongside it.
    ///
    /// Ctrl/Cmd shortcuts on non-editing keys pass through, so a keyboard
    /// paste still produces the paste event that [`Self::handle_paste`]
    /// sanitizes.
    pub fn handle_keydown_with_modifiers(
        &mut self,
        key_code: u32,
        modifiers: Modifiers,
    ) -> KeydownResult {
        let intent = KeyIntent::from_key_event(key_code, modifiers);
        match intent.to_action() {
            Some(action) => {
                self.apply(&action);
                KeydownResult::Handled
            }
            None if intent.passes_through() => KeydownResult::PassThrough,
            None => {
                tracing::trace!(key_code, "suppressed key");
                KeydownResult::Suppressed
            }
        }
    }

    /// Handle a paste of clipboard text. The host always prevents the
    /// default insertion.
    ///
    /// Non-digits are stripped; whatever digits remain replace the selection.
    /// Returns whether an edit was committed.
    pub fn handle_paste(&mut self, clipboard: &str) -> bool {
        self.apply(&EditAction::insert(clipboard))
    }

    /// Handle an input event: the field text changed by some path other than
    /// keydown or paste (autocomplete, IME commit, spell check).
    ///
    /// Returns whether an edit was committed.
    pub fn handle_input(&mut self) -> bool {
        if self.field.text() == self.state.value_to_show {
            return false;
        }
        self.apply(&EditAction::Resync)
    }

    /// Apply an edit to the live field and commit the result.
    ///
    /// Returns `false` when the edit was not applicable; nothing is committed
    /// and no change fires.
    pub fn apply(&mut self, action: &EditAction) -> bool {
        let snapshot = self.field.snapshot();
        match execute_action(&snapshot, action, self.format) {
            Some(next) => {
                self.commit(next);
                true
            }
            None => false,
        }
    }

    fn commit(&mut self, next: EditState) {
        self.field.set_text(&next.value_to_show);
        if let Err(err) = self.field.set_selection(next.selection) {
            tracing::warn!(%err, field = %self.field_name, "failed to restore cursor");
        }
        self.state = next;

        tracing::debug!(
            field = %self.field_name,
            value = %self.state.value,
            start = self.state.selection.start,
            end = self.state.selection.end,
            "committed edit"
        );

        if let Some(on_change) = self.on_change.as_mut() {
            on_change(&ChangeEvent {
                field_name: self.field_name.clone(),
                value: self.state.value.clone(),
            });
        }
    }

    /// Change the format used by future edits.
    ///
    /// Text already in the field is not re-mapped. Existing digits keep their
    /// glyphs; only digits inserted afterwards, or a resync, use the new set.
    pub fn set_numeral_format(&mut self, format: NumeralFormat) {
        if format != self.format {
            tracing::debug!(from = %self.format, to = %format, "numeral format changed");
        }
        self.format = format;
    }

    pub fn numeral_format(&self) -> NumeralFormat {
        self.format
    }

    /// Canonical Latin-digit value.
    pub fn value(&self) -> &str {
        &self.state.value
    }

    /// Value as displayed.
    pub fn value_to_show(&self) -> &str {
        &self.state.value_to_show
    }

    pub fn selection(&self) -> Selection {
        self.state.selection
    }

    pub fn state(&self) -> &EditState {
        &self.state
    }

    pub fn field_name(&self) -> &str {
        &self.field_name
    }

    pub fn field(&self) -> &F {
        &self.field
    }

    pub fn field_mut(&mut self) -> &mut F {
        &mut self.field
    }
}

impl<F: fmt::Debug> fmt::Debug for NumeralInput<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NumeralInput")
            .field("field", &self.field)
            .field("state", &self.state)
            .field("format", &self.format)
            .field("field_name", &self.field_name)
            .field("on_change", &self.on_change.is_some())
            .finish()
    }
}
