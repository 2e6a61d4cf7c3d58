//! Core input types: selection, field snapshot, and edit state.
//!
//! All offsets are character offsets (NOT byte offsets). Both glyph sets are
//! single characters per digit, so an offset means the same position in the
//! displayed text and in the canonical value.

use serde::Serialize;

use crate::digits::{NumeralFormat, is_latin_digit, map_to_format, strip_non_digits, to_latin};

/// A selection or caret, measured in character offsets.
///
/// Always normalized so `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Selection {
    pub start: usize,
    pub end: usize,
}

impl Selection {
    /// Create a selection; the bounds may be given in either order.
    pub fn new(a: usize, b: usize) -> Self {
        Self {
            start: a.min(b),
            end: a.max(b),
        }
    }

    /// Create a zero-width selection.
    pub fn caret(offset: usize) -> Self {
        Self {
            start: offset,
            end: offset,
        }
    }

    pub fn is_caret(&self) -> bool {
        self.start == self.end
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.is_caret()
    }

    /// Clamp both bounds to `len`.
    pub fn clamp(self, len: usize) -> Self {
        Self {
            start: self.start.min(len),
            end: self.end.min(len),
        }
    }
}

/// The live field's text and selection at the moment an event arrived.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSnapshot {
    pub text: String,
    pub selection: Selection,
}

impl FieldSnapshot {
    pub fn new(text: impl Into<String>, selection: Selection) -> Self {
        Self {
            text: text.into(),
            selection,
        }
    }

    /// Character length of the field text.
    pub fn len_chars(&self) -> usize {
        self.text.chars().count()
    }
}

/// State of one numeral input.
///
/// `value` holds Latin digits only; `value_to_show` holds the same digits in
/// the glyphs of the active format, position for position.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct EditState {
    pub value: String,
    pub value_to_show: String,
    pub selection: Selection,
}

impl EditState {
    /// Build the initial state from an externally supplied value.
    ///
    /// The value is sanitized to digits and canonicalized to Latin glyphs;
    /// the caret is placed at the end.
    pub fn new(initial: &str, format: NumeralFormat) -> Self {
        let digits = strip_non_digits(initial);
        let value = to_latin(&digits).into_owned();
        let value_to_show = map_to_format(&value, format).into_owned();
        let len = value.chars().count();
        Self {
            value,
            value_to_show,
            selection: Selection::caret(len),
        }
    }

    /// Build a state from freshly computed display text.
    ///
    /// The canonical value is always recomputed from the display text rather
    /// than patched incrementally.
    pub(crate) fn from_display(value_to_show: String, selection: Selection) -> Self {
        let value = to_latin(&value_to_show).into_owned();
        Self {
            value,
            value_to_show,
            selection,
        }
    }

    /// Character length, shared by `value` and `value_to_show`.
    pub fn len_chars(&self) -> usize {
        self.value.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Check the state invariants, returning the first violation.
    pub fn check_invariants(&self, format: NumeralFormat) -> Result<(), InvariantViolation> {
        let len = self.len_chars();
        if self.value_to_show.chars().count() != len {
            return Err(InvariantViolation::LengthMismatch);
        }
        if let Some(c) = self.value.chars().find(|c| !is_latin_digit(*c)) {
            return Err(InvariantViolation::NonLatinValue(c));
        }
        if let Some(c) = self.value_to_show.chars().find(|c| !format.is_glyph(*c)) {
            return Err(InvariantViolation::ForeignGlyph(c));
        }
        if to_latin(&self.value_to_show) != self.value {
            return Err(InvariantViolation::Diverged);
        }
        if self.selection.start > self.selection.end || self.selection.end > len {
            return Err(InvariantViolation::SelectionOutOfBounds);
        }
        Ok(())
    }
}

/// A broken [`EditState`] invariant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvariantViolation {
    /// `value` and `value_to_show` differ in character length.
    LengthMismatch,
    /// `value` contains something other than `0`-`9`.
    NonLatinValue(char),
    /// `value_to_show` contains a character outside the active glyph set.
    ForeignGlyph(char),
    /// `value_to_show` does not map back to `value`.
    Diverged,
    /// Selection is not within `0..=len`.
    SelectionOutOfBounds,
}
