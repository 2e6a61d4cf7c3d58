//! End-to-end behaviour of the edit engine and the input controller.

use std::cell::RefCell;
use std::rc::Rc;

use numeral_input_core::{
    ChangeEvent, EditAction, EditState, FieldHandle, FieldSnapshot, MemoryField, NumeralFormat,
    NumeralInput, NumeralInputConfig, Selection, execute_action, map_to_format, strip_non_digits,
    to_farsi, to_latin,
};

const FORMATS: [NumeralFormat; 2] = [NumeralFormat::Farsi, NumeralFormat::Latin];

fn snapshot(text: &str, start: usize, end: usize) -> FieldSnapshot {
    FieldSnapshot::new(text, Selection::new(start, end))
}

/// Every digit string over `alphabet` up to `max_len` characters.
fn digit_strings(alphabet: &[char], max_len: usize) -> Vec<String> {
    let mut out = vec![String::new()];
    let mut frontier = vec![String::new()];
    for _ in 0..max_len {
        let mut next = Vec::new();
        for s in &frontier {
            for c in alphabet {
                let mut t = s.clone();
                t.push(*c);
                next.push(t);
            }
        }
        out.extend(next.iter().cloned());
        frontier = next;
    }
    out
}

/// Every selection within a text of `len` characters.
fn selections(len: usize) -> Vec<Selection> {
    (0..=len)
        .flat_map(|start| (start..=len).map(move |end| Selection::new(start, end)))
        .collect()
}

// === Documented scenarios ===

#[test]
fn insert_into_empty_farsi_field() {
    let next = execute_action(
        &snapshot("", 0, 0),
        &EditAction::insert("5"),
        NumeralFormat::Farsi,
    );
    insta::assert_debug_snapshot!(next, @r#"
    Some(
        EditState {
            value: "5",
            value_to_show: "۵",
            selection: Selection {
                start: 1,
                end: 1,
            },
        },
    )
    "#);
}

#[test]
fn backspace_at_end_of_farsi_field() {
    let next = execute_action(
        &snapshot("۱۲۳", 3, 3),
        &EditAction::DeleteBackward,
        NumeralFormat::Farsi,
    );
    insta::assert_debug_snapshot!(next, @r#"
    Some(
        EditState {
            value: "12",
            value_to_show: "۱۲",
            selection: Selection {
                start: 2,
                end: 2,
            },
        },
    )
    "#);
}

#[test]
fn paste_into_latin_field() {
    let changes = Rc::new(RefCell::new(Vec::<ChangeEvent>::new()));
    let sink = changes.clone();
    let config = NumeralInputConfig::new()
        .with_initial_value("12")
        .with_numeral_format(NumeralFormat::Latin)
        .with_field_name("code");
    let mut input = NumeralInput::new(MemoryField::default(), &config)
        .with_on_change(move |event| sink.borrow_mut().push(event.clone()));
    input.field_mut().selection = Selection::caret(1);

    assert!(input.handle_paste("a3b"));

    insta::assert_debug_snapshot!(input.state(), @r#"
    EditState {
        value: "132",
        value_to_show: "132",
        selection: Selection {
            start: 2,
            end: 2,
        },
    }
    "#);
    assert_eq!(input.field().selection(), Selection::caret(2));
    assert_eq!(
        *changes.borrow(),
        vec![ChangeEvent {
            field_name: "code".into(),
            value: "132".into(),
        }]
    );
}

#[test]
fn delete_forward_over_selected_range() {
    let next = execute_action(
        &snapshot("۱۲۳", 0, 2),
        &EditAction::DeleteForward,
        NumeralFormat::Farsi,
    );
    insta::assert_debug_snapshot!(next, @r#"
    Some(
        EditState {
            value: "3",
            value_to_show: "۳",
            selection: Selection {
                start: 0,
                end: 0,
            },
        },
    )
    "#);
}

#[test]
fn backspace_at_start_is_noop_without_notification() {
    for text in ["", "۱", "۱۲۳", "987"] {
        assert_eq!(
            execute_action(&snapshot(text, 0, 0), &EditAction::DeleteBackward, NumeralFormat::Farsi),
            None
        );
    }

    let fired = Rc::new(RefCell::new(0));
    let counter = fired.clone();
    let config = NumeralInputConfig::new().with_initial_value("45");
    let mut input = NumeralInput::new(MemoryField::default(), &config)
        .with_on_change(move |_| *counter.borrow_mut() += 1);
    input.field_mut().selection = Selection::caret(0);
    let before = input.state().clone();

    input.handle_keydown(8);

    assert_eq!(input.state(), &before);
    assert_eq!(input.field().text, "۴۵");
    assert_eq!(*fired.borrow(), 0);
}

// === Mapping properties ===

#[test]
fn mapping_round_trips() {
    for s in digit_strings(&['0', '1', '5', '9'], 4) {
        assert_eq!(to_latin(&to_farsi(&s)), s);
        let farsi = to_farsi(&s).into_owned();
        assert_eq!(to_farsi(&to_latin(&farsi)), farsi);
    }
}

#[test]
fn mapping_preserves_length() {
    for s in digit_strings(&['1', '۲', 'x', ' ', '\u{1F600}'], 3) {
        for format in FORMATS {
            assert_eq!(map_to_format(&s, format).chars().count(), s.chars().count());
        }
    }
}

#[test]
fn stripping_is_idempotent() {
    for s in digit_strings(&['1', '۲', 'x', '-'], 4) {
        let once = strip_non_digits(&s).into_owned();
        assert_eq!(strip_non_digits(&once), once);
    }
}

// === Edit engine properties ===

#[test]
fn every_edit_keeps_invariants() {
    let actions = [
        EditAction::insert("7"),
        EditAction::insert("۳۴"),
        EditAction::insert(""),
        EditAction::insert("1a-2"),
        EditAction::DeleteBackward,
        EditAction::DeleteForward,
        EditAction::Resync,
    ];

    for format in FORMATS {
        for value in digit_strings(&['0', '4', '9'], 3) {
            let state = EditState::new(&value, format);
            let len = state.len_chars();
            for selection in selections(len) {
                let field = FieldSnapshot::new(state.value_to_show.clone(), selection);
                for action in &actions {
                    let Some(next) = execute_action(&field, action, format) else {
                        continue;
                    };
                    assert_eq!(
                        next.check_invariants(format),
                        Ok(()),
                        "{action:?} on {:?} at {selection:?} in {format}",
                        state.value_to_show
                    );
                }
            }
        }
    }
}

#[test]
fn deletes_are_noops_only_at_boundaries() {
    for len in 0..4 {
        let text: String = "۱۲۳".chars().take(len).collect();
        for selection in selections(len) {
            let field = FieldSnapshot::new(text.clone(), selection);
            let back = execute_action(&field, &EditAction::DeleteBackward, NumeralFormat::Farsi);
            let fwd = execute_action(&field, &EditAction::DeleteForward, NumeralFormat::Farsi);
            assert_eq!(back.is_none(), selection == Selection::caret(0));
            assert_eq!(fwd.is_none(), selection == Selection::caret(len));
        }
    }
}

/// Small deterministic generator so the walk is reproducible.
struct Lcg(u64);

impl Lcg {
    fn next(&mut self, bound: usize) -> usize {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        ((self.0 >> 33) as usize) % bound
    }
}

#[test]
fn random_walk_through_controller_keeps_field_in_sync() {
    for format in FORMATS {
        let mut rng = Lcg(0x5eed + format as u64);
        let config = NumeralInputConfig::new().with_numeral_format(format);
        let mut input = NumeralInput::new(MemoryField::default(), &config);

        for step in 0..500 {
            let len = input.state().len_chars();
            // User clicks somewhere, then does something.
            let a = rng.next(len + 1);
            let b = rng.next(len + 1);
            input.field_mut().selection = Selection::new(a, b);

            match rng.next(6) {
                0 | 1 => {
                    input.handle_keydown(48 + rng.next(10) as u32);
                }
                2 => {
                    input.handle_keydown(8);
                }
                3 => {
                    input.handle_keydown(46);
                }
                4 => {
                    input.handle_paste("(۱2)-3");
                }
                _ => {
                    input.handle_keydown(65);
                }
            }

            let state = input.state();
            assert_eq!(state.check_invariants(format), Ok(()), "step {step}");
            assert_eq!(input.field().text, state.value_to_show, "step {step}");
            if step > 0 && input.field().selection != state.selection {
                // Only possible when the last event committed nothing.
                assert_eq!(input.field().selection, Selection::new(a, b), "step {step}");
            }
        }
    }
}
