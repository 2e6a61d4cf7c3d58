//! Browser DOM layer for numeral inputs.
//!
//! Binds the framework-free controller from `numeral-input-core` to a real
//! `<input>` element. It assumes a `wasm32-unknown-unknown` target
//! environment.
//!
//! # Architecture
//!
//! - `field`: `FieldHandle` over `HtmlInputElement`, UTF-16 offset conversion
//! - `events`: keydown, paste and input event handling
//! - `mount`: attribute setup and listener registration
//!
//! # Re-exports
//!
//! This crate re-exports `numeral-input-core` for convenience, so consumers
//! only need to depend on `numeral-input-browser`.

// Re-export core crate
pub use numeral_input_core;
pub use numeral_input_core::*;

pub mod events;
pub mod field;
pub mod mount;

pub use events::BrowserNumeralInput;
pub use field::BrowserField;
pub use mount::{MountedNumeralInput, apply_attributes};

/// Install the panic hook and route `tracing` output to the browser console.
#[cfg(all(target_family = "wasm", target_os = "unknown"))]
pub fn init_tracing() {
    console_error_panic_hook::set_once();

    let level = if cfg!(debug_assertions) {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_wasm::set_as_global_default_with_config(
        tracing_wasm::WASMLayerConfigBuilder::new()
            .set_max_level(level)
            .build(),
    );
}
