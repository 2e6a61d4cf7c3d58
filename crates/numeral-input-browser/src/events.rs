//! Browser event handling for numeral inputs.
//!
//! Extracts what the core needs from DOM events and decides whether the
//! browser's default action may run.

use numeral_input_core::{KeydownResult, Modifiers, NumeralInput};
use web_sys::{ClipboardEvent, Event, KeyboardEvent};

use crate::field::BrowserField;

pub type BrowserNumeralInput = NumeralInput<BrowserField>;

/// Plain-text clipboard contents of a paste event.
pub fn clipboard_text(event: &ClipboardEvent) -> Option<String> {
    let data_transfer = event.clipboard_data()?;
    match data_transfer.get_data("text") {
        Ok(text) => Some(text),
        Err(e) => {
            tracing::debug!("clipboard read failed: {:?}", e);
            None
        }
    }
}

/// Modifier keys held during a keyboard event.
pub fn modifiers(event: &KeyboardEvent) -> Modifiers {
    Modifiers {
        ctrl: event.ctrl_key(),
        alt: event.alt_key(),
        shift: event.shift_key(),
        meta: event.meta_key(),
    }
}

/// Handle a `keydown` event, preventing default for anything but
/// navigation, IME keys and Ctrl/Cmd shortcuts.
pub fn handle_keydown(input: &mut BrowserNumeralInput, event: &KeyboardEvent) -> KeydownResult {
    let result = input.handle_keydown_with_modifiers(event.key_code(), modifiers(event));
    if result.prevents_default() {
        event.prevent_default();
    }
    result
}

/// Handle a `paste` event. Default insertion is always prevented.
pub fn handle_paste(input: &mut BrowserNumeralInput, event: &ClipboardEvent) -> bool {
    event.prevent_default();
    match clipboard_text(event) {
        Some(text) => input.handle_paste(&text),
        None => false,
    }
}

/// Handle an `input` event: re-sync if the element text drifted from the
/// committed display value.
pub fn handle_input(input: &mut BrowserNumeralInput, _event: &Event) -> bool {
    input.handle_input()
}
