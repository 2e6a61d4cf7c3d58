//! Action execution against a field snapshot.
//!
//! Each operation is a pure function of the field's current text and
//! selection, the requested edit, and the active format. It returns the
//! complete next [`EditState`], or `None` when the edit does not apply
//! (the caller ignores the event and fires no change).

use crate::actions::EditAction;
use crate::digits::{NumeralFormat, map_to_format, strip_non_digits};
use crate::text_helpers::splice_chars;
use crate::types::{EditState, FieldSnapshot, Selection};

/// Execute an edit action on a field snapshot.
pub fn execute_action(
    field: &FieldSnapshot,
    action: &EditAction,
    format: NumeralFormat,
) -> Option<EditState> {
    let next = match action {
        EditAction::Insert { text } => execute_insert(field, text, format),
        EditAction::DeleteBackward => execute_delete_backward(field),
        EditAction::DeleteForward => execute_delete_forward(field),
        EditAction::Resync => execute_resync(field, format),
    };

    match &next {
        Some(state) => tracing::trace!(
            ?action,
            value = %state.value,
            start = state.selection.start,
            end = state.selection.end,
            "edit applied"
        ),
        None => tracing::trace!(?action, "edit not applicable"),
    }

    next
}

/// Clamp the reported selection to the field text.
fn field_selection(field: &FieldSnapshot) -> Selection {
    field.selection.clamp(field.len_chars())
}

fn execute_insert(field: &FieldSnapshot, text: &str, format: NumeralFormat) -> Option<EditState> {
    let range = field_selection(field);
    let digits = strip_non_digits(text);
    // Nothing to insert and nothing selected to replace.
    if digits.is_empty() && range.is_caret() {
        return None;
    }
    let mapped = map_to_format(&digits, format);
    let value_to_show = splice_chars(&field.text, range.start, range.end, &mapped);
    let caret = range.start + mapped.chars().count();
    Some(EditState::from_display(value_to_show, Selection::caret(caret)))
}

fn execute_delete_backward(field: &FieldSnapshot) -> Option<EditState> {
    let range = field_selection(field);

    if !range.is_caret() {
        return Some(delete_range(field, range));
    }

    if range.start == 0 {
        return None;
    }

    Some(delete_range(field, Selection::new(range.start - 1, range.start)))
}

fn execute_delete_forward(field: &FieldSnapshot) -> Option<EditState> {
    let range = field_selection(field);

    if !range.is_caret() {
        return Some(delete_range(field, range));
    }

    if range.start >= field.len_chars() {
        return None;
    }

    Some(delete_range(field, Selection::new(range.start, range.start + 1)))
}

fn delete_range(field: &FieldSnapshot, range: Selection) -> EditState {
    let value_to_show = splice_chars(&field.text, range.start, range.end, "");
    EditState::from_display(value_to_show, Selection::caret(range.start))
}

fn execute_resync(field: &FieldSnapshot, format: NumeralFormat) -> Option<EditState> {
    let digits = strip_non_digits(&field.text);
    let value_to_show = map_to_format(&digits, format).into_owned();
    // The field's own selection is already post-edit; it is only clamped
    // when stripping shortened the text.
    let selection = field.selection.clamp(value_to_show.chars().count());
    Some(EditState::from_display(value_to_show, selection))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(text: &str, start: usize, end: usize) -> FieldSnapshot {
        FieldSnapshot::new(text, Selection::new(start, end))
    }

    #[test]
    fn test_insert_into_empty_farsi() {
        let next = execute_action(&field("", 0, 0), &EditAction::insert("5"), NumeralFormat::Farsi)
            .unwrap();
        assert_eq!(next.value_to_show, "۵");
        assert_eq!(next.value, "5");
        assert_eq!(next.selection, Selection::caret(1));
    }

    #[test]
    fn test_insert_mid_string() {
        let next = execute_action(
            &field("۱۲۳", 1, 1),
            &EditAction::insert("9"),
            NumeralFormat::Farsi,
        )
        .unwrap();
        assert_eq!(next.value_to_show, "۱۹۲۳");
        assert_eq!(next.value, "1923");
        assert_eq!(next.selection, Selection::caret(2));
    }

    #[test]
    fn test_insert_replaces_selection() {
        let next = execute_action(
            &field("1234", 1, 3),
            &EditAction::insert("۷۸۹"),
            NumeralFormat::Latin,
        )
        .unwrap();
        assert_eq!(next.value_to_show, "17894");
        assert_eq!(next.selection, Selection::caret(4));
    }

    #[test]
    fn test_insert_clamps_stale_selection() {
        let next =
            execute_action(&field("12", 7, 9), &EditAction::insert("3"), NumeralFormat::Latin)
                .unwrap();
        assert_eq!(next.value, "123");
        assert_eq!(next.selection, Selection::caret(3));
    }

    #[test]
    fn test_value_recomputed_from_display() {
        // Field already shows mixed glyphs; the canonical value still comes
        // out all Latin.
        let next =
            execute_action(&field("1۲", 2, 2), &EditAction::insert("3"), NumeralFormat::Farsi)
                .unwrap();
        assert_eq!(next.value_to_show, "1۲۳");
        assert_eq!(next.value, "123");
    }

    #[test]
    fn test_insert_drops_non_digits() {
        let next = execute_action(
            &field("۹", 1, 1),
            &EditAction::insert("1a-2"),
            NumeralFormat::Farsi,
        )
        .unwrap();
        assert_eq!(next.value, "912");
        assert_eq!(next.value_to_show, "۹۱۲");
        assert_eq!(next.selection, Selection::caret(3));
        assert_eq!(next.check_invariants(NumeralFormat::Farsi), Ok(()));
    }

    #[test]
    fn test_insert_without_digits() {
        assert_eq!(
            execute_action(&field("12", 1, 1), &EditAction::insert("x"), NumeralFormat::Latin),
            None
        );
        // A selected range is still replaced.
        let next =
            execute_action(&field("123", 0, 2), &EditAction::insert("x"), NumeralFormat::Latin)
                .unwrap();
        assert_eq!(next.value, "3");
        assert_eq!(next.selection, Selection::caret(0));
    }

    #[test]
    fn test_delete_backward_caret() {
        let next =
            execute_action(&field("۱۲۳", 3, 3), &EditAction::DeleteBackward, NumeralFormat::Farsi)
                .unwrap();
        assert_eq!(next.value_to_show, "۱۲");
        assert_eq!(next.value, "12");
        assert_eq!(next.selection, Selection::caret(2));
    }

    #[test]
    fn test_delete_backward_at_start_is_noop() {
        for text in ["", "۱۲۳", "45"] {
            assert_eq!(
                execute_action(&field(text, 0, 0), &EditAction::DeleteBackward, NumeralFormat::Farsi),
                None
            );
        }
    }

    #[test]
    fn test_delete_backward_range() {
        let next =
            execute_action(&field("12345", 1, 4), &EditAction::DeleteBackward, NumeralFormat::Latin)
                .unwrap();
        assert_eq!(next.value, "15");
        assert_eq!(next.selection, Selection::caret(1));
    }

    #[test]
    fn test_delete_forward_caret() {
        let next =
            execute_action(&field("۱۲۳", 1, 1), &EditAction::DeleteForward, NumeralFormat::Farsi)
                .unwrap();
        assert_eq!(next.value_to_show, "۱۳");
        assert_eq!(next.selection, Selection::caret(1));
    }

    #[test]
    fn test_delete_forward_at_end_is_noop() {
        assert_eq!(
            execute_action(&field("۱۲۳", 3, 3), &EditAction::DeleteForward, NumeralFormat::Farsi),
            None
        );
        assert_eq!(
            execute_action(&field("", 0, 0), &EditAction::DeleteForward, NumeralFormat::Farsi),
            None
        );
    }

    #[test]
    fn test_delete_forward_range() {
        let next =
            execute_action(&field("۱۲۳", 0, 2), &EditAction::DeleteForward, NumeralFormat::Farsi)
                .unwrap();
        assert_eq!(next.value_to_show, "۳");
        assert_eq!(next.value, "3");
        assert_eq!(next.selection, Selection::caret(0));
    }

    #[test]
    fn test_resync_maps_whole_text() {
        // Autocomplete dropped Latin digits and punctuation into a Farsi field.
        let next =
            execute_action(&field("۱2-3", 3, 3), &EditAction::Resync, NumeralFormat::Farsi)
                .unwrap();
        assert_eq!(next.value_to_show, "۱۲۳");
        assert_eq!(next.value, "123");
        assert_eq!(next.selection, Selection::caret(3));
    }

    #[test]
    fn test_resync_keeps_field_selection() {
        let next =
            execute_action(&field("۱۲۳۴", 1, 2), &EditAction::Resync, NumeralFormat::Latin)
                .unwrap();
        assert_eq!(next.value_to_show, "1234");
        assert_eq!(next.selection, Selection::new(1, 2));
    }

    #[test]
    fn test_resync_clamps_selection_after_strip() {
        let next =
            execute_action(&field("a1b2c", 5, 5), &EditAction::Resync, NumeralFormat::Latin)
                .unwrap();
        assert_eq!(next.value, "12");
        assert_eq!(next.selection, Selection::caret(2));
    }
}
