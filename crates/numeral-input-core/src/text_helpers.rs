//! Character-offset helpers over `&str`.
//!
//! Selections are in characters but Rust strings index by byte; these
//! helpers do the conversion and clamp out-of-range offsets to the end.

/// Byte index of the character at `char_offset`, or `text.len()` when the
/// offset is at or past the end.
pub fn char_to_byte(text: &str, char_offset: usize) -> usize {
    text.char_indices()
        .nth(char_offset)
        .map(|(idx, _)| idx)
        .unwrap_or(text.len())
}

/// Replace the characters in `start..end` with `replacement`.
///
/// Offsets beyond the end of `text` are clamped.
pub fn splice_chars(text: &str, start: usize, end: usize, replacement: &str) -> String {
    let start_byte = char_to_byte(text, start);
    let end_byte = char_to_byte(text, end.max(start));
    let mut out =
        String::with_capacity(text.len() - (end_byte - start_byte) + replacement.len());
    out.push_str(&text[..start_byte]);
    out.push_str(replacement);
    out.push_str(&text[end_byte..]);
    out
}

/// Convert a UTF-16 code unit offset into a character offset.
///
/// Browser fields report selection in UTF-16 units. Offsets that land inside
/// a surrogate pair round down to the start of that character.
pub fn utf16_to_char_offset(text: &str, utf16_offset: usize) -> usize {
    let mut units = 0;
    for (chars, c) in text.chars().enumerate() {
        let next = units + c.len_utf16();
        if next > utf16_offset {
            return chars;
        }
        units = next;
    }
    text.chars().count()
}

/// Convert a character offset into a UTF-16 code unit offset.
pub fn char_to_utf16_offset(text: &str, char_offset: usize) -> usize {
    text.chars().take(char_offset).map(char::len_utf16).sum()
}
