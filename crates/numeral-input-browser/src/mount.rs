//! Mounting a numeral input onto an existing `<input>` element.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_events::{EventListener, EventListenerOptions};
use numeral_input_core::{ChangeEvent, FieldAttributes, NumeralInput, NumeralInputConfig};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{ClipboardEvent, HtmlInputElement, KeyboardEvent};

use crate::events::{self, BrowserNumeralInput};
use crate::field::BrowserField;

/// Set every attribute in `attrs` on the element.
pub fn apply_attributes(element: &HtmlInputElement, attrs: &FieldAttributes) -> Result<(), JsValue> {
    for (name, value) in attrs.iter() {
        element.set_attribute(name, value)?;
    }
    Ok(())
}

/// A numeral input wired to a DOM element.
///
/// Listeners stay attached for as long as this value lives; dropping it
/// detaches them.
pub struct MountedNumeralInput {
    input: Rc<RefCell<BrowserNumeralInput>>,
    _listeners: Vec<EventListener>,
}

impl MountedNumeralInput {
    /// Attach to `element`: apply the fixed attributes, show the initial
    /// value and start handling keydown, paste and input events.
    pub fn mount(
        element: HtmlInputElement,
        config: &NumeralInputConfig,
        on_change: impl FnMut(&ChangeEvent) + 'static,
    ) -> Result<Self, JsValue> {
        apply_attributes(&element, &config.field_attributes())?;

        let input = NumeralInput::new(BrowserField::new(element.clone()), config)
            .with_on_change(on_change);
        let input = Rc::new(RefCell::new(input));

        let listeners = vec![
            listen(&element, "keydown", &input, |input, event| {
                if let Some(event) = event.dyn_ref::<KeyboardEvent>() {
                    events::handle_keydown(input, event);
                }
            }),
            listen(&element, "paste", &input, |input, event| {
                if let Some(event) = event.dyn_ref::<ClipboardEvent>() {
                    events::handle_paste(input, event);
                }
            }),
            listen(&element, "input", &input, |input, event| {
                events::handle_input(input, event);
            }),
        ];

        tracing::debug!(field = input.borrow().field_name(), "numeral input mounted");

        Ok(Self {
            input,
            _listeners: listeners,
        })
    }

    /// Canonical value.
    pub fn value(&self) -> String {
        self.input.borrow().value().to_string()
    }

    /// Shared handle to the controller.
    pub fn input(&self) -> Rc<RefCell<BrowserNumeralInput>> {
        self.input.clone()
    }
}

fn listen(
    element: &HtmlInputElement,
    event_type: &'static str,
    input: &Rc<RefCell<BrowserNumeralInput>>,
    mut handler: impl FnMut(&mut BrowserNumeralInput, &web_sys::Event) + 'static,
) -> EventListener {
    let input = input.clone();
    EventListener::new_with_options(
        element,
        event_type,
        EventListenerOptions::enable_prevent_default(),
        move |event| match input.try_borrow_mut() {
            Ok(mut input) => handler(&mut input, event),
            // A change listener dispatched an event back into this input.
            Err(_) => tracing::warn!(event_type, "re-entrant event ignored"),
        },
    )
}
