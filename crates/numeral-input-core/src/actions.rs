//! Edit actions and key classification.
//!
//! `EditAction` is the semantic edit the engine applies; `KeyIntent` is what
//! a raw key code means to a digits-only field.

use crate::digits::NumeralFormat;

/// An edit to apply to a field snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditAction {
    /// Insert digits at the selection, replacing it. Anything that is not a
    /// Latin or Farsi digit is dropped.
    Insert { text: String },
    /// Backspace.
    DeleteBackward,
    /// Delete key.
    DeleteForward,
    /// Re-interpret the field text after an untracked change.
    Resync,
}

impl EditAction {
    pub fn insert(text: impl Into<String>) -> Self {
        Self::Insert { text: text.into() }
    }
}

/// Key codes the field reacts to.
pub mod key_code {
    pub const BACKSPACE: u32 = 8;
    pub const HOME: u32 = 36;
    pub const ARROW_DOWN: u32 = 40;
    pub const DELETE: u32 = 46;
    pub const DIGIT_0: u32 = 48;
    pub const DIGIT_9: u32 = 57;
    pub const NUMPAD_0: u32 = 96;
    pub const NUMPAD_9: u32 = 105;
    /// Reported while an IME composition is in progress (and by Android
    /// virtual keyboards for every key).
    pub const IME_PROCESS: u32 = 229;
}

/// Modifier keys held during a keydown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Modifiers {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
    pub meta: bool,
}

impl Modifiers {
    pub const NONE: Self = Self {
        ctrl: false,
        alt: false,
        shift: false,
        meta: false,
    };

    pub const CTRL: Self = Self {
        ctrl: true,
        ..Self::NONE
    };

    pub const META: Self = Self {
        meta: true,
        ..Self::NONE
    };

    /// Ctrl or Cmd is held, so the key is a shortcut rather than typing.
    pub fn is_shortcut(self) -> bool {
        self.ctrl || self.meta
    }
}

/// What a key press means for a digits-only field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyIntent {
    /// A digit key, carrying its numeric value.
    Digit(u8),
    DeleteBackward,
    DeleteForward,
    /// Home and the arrow keys.
    Navigation,
    /// IME composition in progress.
    Composition,
    /// A Ctrl/Cmd chord on a non-editing key (copy, paste, select all, undo).
    /// The platform handles it; a paste arrives afterwards as its own event.
    Shortcut,
    /// Anything else; never allowed to reach the field.
    Other,
}

impl KeyIntent {
    pub fn from_key_code(code: u32) -> Self {
        use key_code::*;
        match code {
            BACKSPACE => Self::DeleteBackward,
            DELETE => Self::DeleteForward,
            DIGIT_0..=DIGIT_9 => Self::Digit((code - DIGIT_0) as u8),
            NUMPAD_0..=NUMPAD_9 => Self::Digit((code - NUMPAD_0) as u8),
            HOME..=ARROW_DOWN => Self::Navigation,
            IME_PROCESS => Self::Composition,
            _ => Self::Other,
        }
    }

    /// Classify a key code with the modifiers held alongside it.
    ///
    /// Digits and deletes mean the same thing with or without modifiers.
    pub fn from_key_event(code: u32, modifiers: Modifiers) -> Self {
        match Self::from_key_code(code) {
            Self::Other if modifiers.is_shortcut() => Self::Shortcut,
            intent => intent,
        }
    }

    /// The edit this key asks for, if any.
    pub fn to_action(self) -> Option<EditAction> {
        match self {
            Self::Digit(d) => NumeralFormat::Latin
                .glyph(d)
                .map(|c| EditAction::insert(c.to_string())),
            Self::DeleteBackward => Some(EditAction::DeleteBackward),
            Self::DeleteForward => Some(EditAction::DeleteForward),
            Self::Navigation | Self::Composition | Self::Shortcut | Self::Other => None,
        }
    }

    /// Whether the host should let the platform's default action run.
    pub fn passes_through(self) -> bool {
        matches!(self, Self::Navigation | Self::Composition | Self::Shortcut)
    }
}

/// Result of handling a keydown event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeydownResult {
    /// The key was turned into an edit; prevent default.
    Handled,
    /// Let the platform handle it (navigation, IME).
    PassThrough,
    /// Swallowed without effect; prevent default.
    Suppressed,
}

impl KeydownResult {
    pub fn prevents_default(self) -> bool {
        !matches!(self, Self::PassThrough)
    }
}
