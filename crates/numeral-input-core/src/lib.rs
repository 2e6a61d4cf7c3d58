//! numeral-input-core: digits-only text input logic without framework dependencies.
//!
//! A user may type Latin (`0-9`) or Farsi (`۰-۹`) digits; the field displays
//! them in the configured glyph set while the logical value is always Latin.
//!
//! This crate provides:
//! - Digit mapping between the two glyph sets (`to_farsi`, `to_latin`, ...)
//! - `execute_action` - pure edit engine over a field snapshot
//! - `NumeralInput<F>` - controller that commits edits to a `FieldHandle`,
//!   restores the cursor and fires change notifications

pub mod actions;
pub mod config;
pub mod digits;
pub mod error;
pub mod execute;
pub mod input;
pub mod platform;
pub mod text_helpers;
pub mod types;

pub use actions::{EditAction, KeyIntent, KeydownResult, Modifiers, key_code};
pub use config::{FIXED_ATTRIBUTES, FieldAttributes, NumeralInputConfig};
pub use digits::{
    NumeralFormat, is_digit, is_farsi_digit, is_latin_digit, map_to_format, strip_non_digits,
    to_farsi, to_latin,
};
pub use error::{ConfigError, FormatParseError, PlatformError};
pub use execute::execute_action;
pub use input::NumeralInput;
pub use platform::{ChangeEvent, FieldHandle, MemoryField};
pub use smol_str::SmolStr;
pub use types::{EditState, FieldSnapshot, InvariantViolation, Selection};
