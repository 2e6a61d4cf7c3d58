//! Construction-time configuration and rendered field attributes.

use std::collections::BTreeMap;

use serde::Deserialize;
use smol_str::SmolStr;

use crate::digits::{NumeralFormat, is_digit};
use crate::error::ConfigError;

/// Attributes forced onto the rendered field regardless of caller input.
pub const FIXED_ATTRIBUTES: [(&str, &str); 3] = [
    ("type", "text"),
    ("inputmode", "numeric"),
    ("pattern", "[0-9]*"),
];

/// Configuration for one numeral input.
///
/// Deserializes from the host's props shape:
///
/// ```
/// use numeral_input_core::{NumeralFormat, NumeralInputConfig};
///
/// let config = NumeralInputConfig::from_json(
///     r#"{ "name": "phone", "numeralFormat": "LATIN", "initialValue": "0912" }"#,
/// ).unwrap();
/// assert_eq!(config.numeral_format, NumeralFormat::Latin);
/// assert_eq!(config.field_name, "phone");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NumeralInputConfig {
    pub initial_value: String,
    pub numeral_format: NumeralFormat,
    #[serde(rename = "name")]
    pub field_name: SmolStr,
    /// Presentation attributes passed through to the rendered field.
    pub attributes: BTreeMap<String, String>,
}

impl NumeralInputConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a JSON config, rejecting initial values that are not all digits.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        if !config.initial_value.chars().all(is_digit) {
            return Err(ConfigError::InitialValue {
                value: config.initial_value,
            });
        }
        Ok(config)
    }

    pub fn with_initial_value(mut self, value: impl Into<String>) -> Self {
        self.initial_value = value.into();
        self
    }

    pub fn with_numeral_format(mut self, format: NumeralFormat) -> Self {
        self.numeral_format = format;
        self
    }

    pub fn with_field_name(mut self, name: impl Into<SmolStr>) -> Self {
        self.field_name = name.into();
        self
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Final attribute set for the rendered field.
    pub fn field_attributes(&self) -> FieldAttributes {
        FieldAttributes::with_passthrough(
            self.attributes
                .iter()
                .map(|(name, value)| (name.as_str(), value.as_str())),
        )
    }
}

/// Attribute set for the rendered field: the fixed attributes plus any
/// caller pass-through that does not collide with them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldAttributes {
    entries: Vec<(SmolStr, String)>,
}

impl FieldAttributes {
    pub fn fixed() -> Self {
        Self {
            entries: FIXED_ATTRIBUTES
                .iter()
                .map(|(name, value)| (SmolStr::new(name), value.to_string()))
                .collect(),
        }
    }

    /// Merge caller attributes, dropping any that would override the fixed
    /// set, the field value, or an event handler.
    pub fn with_passthrough<'a>(extra: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let mut attrs = Self::fixed();
        for (name, value) in extra {
            if is_reserved(name) {
                tracing::debug!(name, "dropping reserved field attribute");
                continue;
            }
            attrs.entries.push((SmolStr::new(name), value.to_string()));
        }
        attrs
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for FieldAttributes {
    fn default() -> Self {
        Self::fixed()
    }
}

fn is_reserved(name: &str) -> bool {
    let name = name.to_ascii_lowercase();
    matches!(name.as_str(), "type" | "inputmode" | "pattern" | "value") || name.starts_with("on")
}
