//! Value store for form controls.
//!
//! Holds the live value of every text-bearing control in a document (single
//! line text entries and textareas alike), plus caret and selection for the
//! ones a user edits. Hosts translate keystrokes into the editing calls here;
//! controls that own a value (such as a chip field's backing textarea) write
//! it with [`InputValueStore::set`].

use crate::id::InputId;
use crate::selection::SelectionRange;
use crate::state::InputState;
use crate::text::{
    clamp_to_char_boundary, filter_single_line, next_cursor_boundary, normalize_newlines,
    prev_cursor_boundary,
};
use std::collections::HashMap;

/// ```
/// use input_core::{InputId, InputValueStore};
///
/// let mut store = InputValueStore::new();
/// let entry = InputId::from_raw(3);
///
/// store.ensure_initial(entry, String::new());
/// store.insert_text(entry, "read,");
/// store.backspace(entry);
///
/// assert_eq!(store.get(entry), Some("read"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct InputValueStore {
    values: HashMap<InputId, InputState>,
}

impl InputValueStore {
    pub fn new() -> Self {
        Self {
            values: HashMap::new(),
        }
    }

    pub fn has(&self, id: InputId) -> bool {
        self.values.contains_key(&id)
    }

    pub fn get(&self, id: InputId) -> Option<&str> {
        self.values.get(&id).map(|s| s.value.as_str())
    }

    /// Returns `true` when the control has no entry or an empty value.
    pub fn is_empty(&self, id: InputId) -> bool {
        self.get(id).is_none_or(str::is_empty)
    }

    pub fn caret(&self, id: InputId) -> Option<usize> {
        self.values.get(&id).map(|s| s.caret)
    }

    pub fn selection(&self, id: InputId) -> Option<SelectionRange> {
        let st = self.values.get(&id)?;
        selection_range(&st.value, st.selection_anchor, st.caret)
    }

    /// Overwrites the value, moving the caret to the end and dropping any selection.
    pub fn set(&mut self, id: InputId, value: String) {
        let st = self.values.entry(id).or_default();
        st.caret = value.len();
        st.value = value;
        st.selection_anchor = None;
    }

    /// Inserts `initial` only if the control has no entry yet.
    pub fn ensure_initial(&mut self, id: InputId, initial: String) {
        self.values.entry(id).or_insert_with(|| InputState {
            caret: initial.len(),
            value: initial,
            ..InputState::default()
        });
    }

    pub fn focus(&mut self, id: InputId) {
        if let Some(st) = self.values.get_mut(&id) {
            clamp_state(st);
            st.selection_anchor = None;
        }
    }

    pub fn blur(&mut self, id: InputId) {
        if let Some(st) = self.values.get_mut(&id) {
            clamp_state(st);
            st.selection_anchor = None;
        }
    }

    /// Types `s` at the caret of a single-line control, replacing any selection.
    pub fn insert_text(&mut self, id: InputId, s: &str) {
        let st = self.values.entry(id).or_default();
        clamp_state(st);
        let s = filter_single_line(s);
        if s.is_empty() {
            return;
        }

        delete_selection_if_any(st);
        st.value.insert_str(st.caret, &s);
        st.caret += s.len();
    }

    /// Like [`insert_text`](Self::insert_text), for textareas: line breaks are
    /// kept and normalized to LF.
    pub fn insert_text_multiline(&mut self, id: InputId, s: &str) {
        let st = self.values.entry(id).or_default();
        clamp_state(st);
        let s = normalize_newlines(s);
        if s.is_empty() {
            return;
        }

        delete_selection_if_any(st);
        st.value.insert_str(st.caret, &s);
        st.caret += s.len();
    }

    /// Deletes the selection, or the character before the caret.
    pub fn backspace(&mut self, id: InputId) {
        let Some(st) = self.values.get_mut(&id) else {
            return;
        };
        clamp_state(st);
        if delete_selection_if_any(st) || st.caret == 0 {
            return;
        }

        let prev = prev_cursor_boundary(&st.value, st.caret);
        st.value.drain(prev..st.caret);
        st.caret = prev;
    }

    /// Deletes the selection, or the character after the caret.
    pub fn delete(&mut self, id: InputId) {
        let Some(st) = self.values.get_mut(&id) else {
            return;
        };
        clamp_state(st);
        if delete_selection_if_any(st) || st.caret >= st.value.len() {
            return;
        }

        let next = next_cursor_boundary(&st.value, st.caret);
        st.value.drain(st.caret..next);
    }

    pub fn move_caret_left(&mut self, id: InputId, selecting: bool) {
        self.move_caret(id, selecting, |st| {
            match selection_range(&st.value, st.selection_anchor, st.caret) {
                Some(sel) if !selecting => sel.start,
                _ => prev_cursor_boundary(&st.value, st.caret),
            }
        });
    }

    pub fn move_caret_right(&mut self, id: InputId, selecting: bool) {
        self.move_caret(id, selecting, |st| {
            match selection_range(&st.value, st.selection_anchor, st.caret) {
                Some(sel) if !selecting => sel.end,
                _ => next_cursor_boundary(&st.value, st.caret),
            }
        });
    }

    pub fn move_caret_to_start(&mut self, id: InputId, selecting: bool) {
        self.move_caret(id, selecting, |_| 0);
    }

    pub fn move_caret_to_end(&mut self, id: InputId, selecting: bool) {
        self.move_caret(id, selecting, |st| st.value.len());
    }

    fn move_caret(
        &mut self,
        id: InputId,
        selecting: bool,
        target: impl FnOnce(&InputState) -> usize,
    ) {
        let st = self.values.entry(id).or_default();
        clamp_state(st);
        let caret = clamp_to_char_boundary(&st.value, target(st));

        if selecting {
            if st.selection_anchor.is_none() {
                st.selection_anchor = Some(st.caret);
            }
            st.caret = caret;
            normalize_selection_anchor(st);
        } else {
            st.caret = caret;
            st.selection_anchor = None;
        }
    }
}

fn selection_range(value: &str, anchor: Option<usize>, caret: usize) -> Option<SelectionRange> {
    let a = clamp_to_char_boundary(value, anchor?);
    let c = clamp_to_char_boundary(value, caret);
    (a != c).then(|| SelectionRange::new(a, c))
}

fn normalize_selection_anchor(st: &mut InputState) {
    // A collapsed selection is no selection.
    if st.selection_anchor == Some(st.caret) {
        st.selection_anchor = None;
    }
}

fn delete_selection_if_any(st: &mut InputState) -> bool {
    let Some(sel) = selection_range(&st.value, st.selection_anchor, st.caret) else {
        st.selection_anchor = None;
        return false;
    };

    st.value.drain(sel.start..sel.end);
    st.caret = sel.start;
    st.selection_anchor = None;
    true
}

fn clamp_state(st: &mut InputState) {
    st.caret = clamp_to_char_boundary(&st.value, st.caret);
    if let Some(a) = st.selection_anchor {
        st.selection_anchor = Some(clamp_to_char_boundary(&st.value, a));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with(value: &str) -> (InputValueStore, InputId) {
        let mut store = InputValueStore::new();
        let id = InputId::from_raw(1);
        store.set(id, value.to_string());
        store.focus(id);
        (store, id)
    }

    #[test]
    fn typing_a_comma_separated_batch() {
        let (mut store, id) = store_with("");
        store.insert_text(id, "Export, VIEW");
        store.insert_text(id, ",,export");
        assert_eq!(store.get(id), Some("Export, VIEW,,export"));
        assert_eq!(store.caret(id), Some(20));
    }

    #[test]
    fn pasted_line_breaks_are_dropped() {
        let (mut store, id) = store_with("");
        store.insert_text(id, "a\r\nb");
        assert_eq!(store.get(id), Some("ab"));
    }

    #[test]
    fn textarea_insert_keeps_normalized_line_breaks() {
        let (mut store, id) = store_with("read");
        store.insert_text_multiline(id, "\r\nwrite\r");
        assert_eq!(store.get(id), Some("read\nwrite\n"));
    }

    #[test]
    fn backspace_on_empty_value_is_a_no_op() {
        let (mut store, id) = store_with("");
        store.backspace(id);
        assert_eq!(store.get(id), Some(""));
        assert_eq!(store.caret(id), Some(0));
        assert!(store.is_empty(id));
    }

    #[test]
    fn backspace_removes_whole_scalar() {
        let (mut store, id) = store_with("a€");
        store.backspace(id);
        assert_eq!(store.get(id), Some("a"));
        assert_eq!(store.caret(id), Some(1));
    }

    #[test]
    fn stale_caret_is_clamped_before_insert() {
        let (mut store, id) = store_with("€");
        store.values.get_mut(&id).unwrap().caret = 2;
        store.insert_text(id, "x");
        assert_eq!(store.get(id), Some("x€"));
    }

    #[test]
    fn shift_left_selects_and_typing_replaces() {
        let (mut store, id) = store_with("reaX");
        store.move_caret_left(id, true);
        assert_eq!(store.selection(id), Some(SelectionRange::new(3, 4)));
        store.insert_text(id, "d");
        assert_eq!(store.get(id), Some("read"));
        assert_eq!(store.selection(id), None);
    }

    #[test]
    fn arrows_collapse_selection_to_its_edges() {
        let (mut store, id) = store_with("abcd");
        store.move_caret_to_start(id, true);
        store.move_caret_left(id, false);
        assert_eq!(store.caret(id), Some(0));
        store.move_caret_to_end(id, false);
        store.move_caret_to_start(id, true);
        store.move_caret_right(id, false);
        assert_eq!(store.caret(id), Some(4));
    }

    #[test]
    fn delete_removes_selection_first() {
        let (mut store, id) = store_with("abcd");
        store.move_caret_to_start(id, false);
        store.move_caret_right(id, true);
        store.move_caret_right(id, true);
        store.delete(id);
        assert_eq!(store.get(id), Some("cd"));
        store.delete(id);
        assert_eq!(store.get(id), Some("d"));
        store.move_caret_to_end(id, false);
        store.delete(id);
        assert_eq!(store.get(id), Some("d"));
    }

    #[test]
    fn ensure_initial_keeps_existing_value() {
        let (mut store, id) = store_with("seeded");
        store.ensure_initial(id, "other".to_string());
        assert_eq!(store.get(id), Some("seeded"));
        assert!(store.is_empty(InputId::from_raw(99)));
    }
}
