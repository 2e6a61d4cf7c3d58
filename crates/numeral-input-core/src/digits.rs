//! Digit glyph mapping between Latin and Farsi numerals.
//!
//! Farsi (Extended Arabic-Indic) digits occupy `U+06F0..=U+06F9`, a fixed
//! 1728 codepoints above ASCII `'0'..='9'`, so conversion in either direction
//! is plain codepoint arithmetic. Every function here is total: characters
//! are either translated or passed through, never dropped (except by
//! [`strip_non_digits`], whose job is dropping them).

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FormatParseError;

/// Codepoint distance from a Latin digit to its Farsi counterpart.
pub const FARSI_DIGIT_OFFSET: u32 = 1728;

/// Farsi digit zero, `۰`.
pub const FARSI_ZERO: char = '\u{06F0}';

/// Farsi digit nine, `۹`.
pub const FARSI_NINE: char = '\u{06F9}';

/// Glyph set used for the displayed representation of digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE", from = "String")]
pub enum NumeralFormat {
    /// Extended Arabic-Indic digits, `۰`..`۹`.
    #[default]
    Farsi,
    /// ASCII digits, `0`..`9`.
    Latin,
}

impl NumeralFormat {
    /// Parse a format name, falling back to [`NumeralFormat::Farsi`] for
    /// anything unrecognized.
    pub fn from_name(name: &str) -> Self {
        match name.parse() {
            Ok(format) => format,
            Err(err) => {
                tracing::warn!(%err, "falling back to FARSI numeral format");
                Self::Farsi
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Farsi => "FARSI",
            Self::Latin => "LATIN",
        }
    }

    /// Glyph for the numeric digit `digit` (0-9) in this format.
    pub fn glyph(&self, digit: u8) -> Option<char> {
        if digit > 9 {
            return None;
        }
        let latin = char::from(b'0' + digit);
        Some(match self {
            Self::Latin => latin,
            Self::Farsi => farsi_from_latin(latin),
        })
    }

    /// Whether `c` is a digit glyph of this format.
    pub fn is_glyph(&self, c: char) -> bool {
        match self {
            Self::Latin => is_latin_digit(c),
            Self::Farsi => is_farsi_digit(c),
        }
    }
}

impl fmt::Display for NumeralFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NumeralFormat {
    type Err = FormatParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        if name.eq_ignore_ascii_case("farsi") {
            Ok(Self::Farsi)
        } else if name.eq_ignore_ascii_case("latin") {
            Ok(Self::Latin)
        } else {
            Err(FormatParseError::Unknown(name.into()))
        }
    }
}

impl From<String> for NumeralFormat {
    fn from(name: String) -> Self {
        Self::from_name(&name)
    }
}

#[inline]
pub fn is_latin_digit(c: char) -> bool {
    c.is_ascii_digit()
}

#[inline]
pub fn is_farsi_digit(c: char) -> bool {
    (FARSI_ZERO..=FARSI_NINE).contains(&c)
}

/// Whether `c` is a digit in either glyph set.
#[inline]
pub fn is_digit(c: char) -> bool {
    is_latin_digit(c) || is_farsi_digit(c)
}

#[inline]
fn farsi_from_latin(c: char) -> char {
    char::from_u32(c as u32 + FARSI_DIGIT_OFFSET).unwrap_or(c)
}

#[inline]
fn latin_from_farsi(c: char) -> char {
    char::from_u32(c as u32 - FARSI_DIGIT_OFFSET).unwrap_or(c)
}

/// Apply `convert` to every character matching `matches`, borrowing the
/// input when nothing matches.
fn map_digits(
    text: &str,
    matches: impl Fn(char) -> bool,
    convert: impl Fn(char) -> char,
) -> Cow<'_, str> {
    if !text.chars().any(&matches) {
        return Cow::Borrowed(text);
    }
    Cow::Owned(
        text.chars()
            .map(|c| if matches(c) { convert(c) } else { c })
            .collect(),
    )
}

/// Replace every Latin digit with its Farsi counterpart.
///
/// ```
/// use numeral_input_core::to_farsi;
///
/// assert_eq!(to_farsi("a1b20"), "a۱b۲۰");
/// assert_eq!(to_farsi(""), "");
/// ```
pub fn to_farsi(text: &str) -> Cow<'_, str> {
    map_digits(text, is_latin_digit, farsi_from_latin)
}

/// Replace every Farsi digit with its Latin counterpart.
///
/// ```
/// use numeral_input_core::to_latin;
///
/// assert_eq!(to_latin("۱۲x۳"), "12x3");
/// ```
pub fn to_latin(text: &str) -> Cow<'_, str> {
    map_digits(text, is_farsi_digit, latin_from_farsi)
}

/// Map every digit in `text` into the glyph set of `format`.
pub fn map_to_format(text: &str, format: NumeralFormat) -> Cow<'_, str> {
    match format {
        NumeralFormat::Farsi => to_farsi(text),
        NumeralFormat::Latin => to_latin(text),
    }
}

/// Drop everything that is not a Latin or Farsi digit, keeping glyphs as-is.
///
/// ```
/// use numeral_input_core::strip_non_digits;
///
/// assert_eq!(strip_non_digits("a1-۲ 3"), "1۲3");
/// ```
pub fn strip_non_digits(text: &str) -> Cow<'_, str> {
    if text.chars().all(is_digit) {
        return Cow::Borrowed(text);
    }
    Cow::Owned(text.chars().filter(|c| is_digit(*c)).collect())
}
