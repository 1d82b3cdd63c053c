use crate::interaction::InteractionState;
use crate::seed::seed_input_values_from_dom;
use crate::submit::{FormSubmission, collect_form_data};
use chip_input::{
    ChipCtx, ChipEvent, ChipInputConfig, ChipInputs, EventOutcome, init_chip_inputs, to_input_id,
};
use core_types::{Disposition, Key, KeyDown};
use dom::attrs::attr;
use dom::debug::outline_from_dom;
use dom::forms::{ControlKind, control_kind};
use dom::{Document, Id, Node};
use input_core::InputValueStore;

/// A loaded document together with its form state.
#[derive(Debug)]
pub struct Page {
    document: Document,
    input_values: InputValueStore,
    interaction: InteractionState,
    chips: ChipInputs,
}

impl Page {
    /// Takes ownership of a parsed tree, seeds control values from markup and
    /// mounts chip editors on every matching field.
    pub fn load(root: Node, config: ChipInputConfig) -> Self {
        let mut document = Document::new(root);
        let mut input_values = InputValueStore::new();
        let seeded = seed_input_values_from_dom(&mut input_values, document.root());
        let chips = init_chip_inputs(
            &mut ChipCtx::new(&mut document, &mut input_values),
            config,
        );
        log::debug!(
            target: "page",
            "loaded document: {seeded} controls seeded, {} chip fields",
            chips.len()
        );

        Self {
            document,
            input_values,
            interaction: InteractionState::default(),
            chips,
        }
    }

    /// Seeds and enhances controls added since load. Returns the number of new
    /// chip editors.
    pub fn enhance(&mut self) -> usize {
        seed_input_values_from_dom(&mut self.input_values, self.document.root());
        self.chips
            .mount_all(&mut ChipCtx::new(&mut self.document, &mut self.input_values))
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    /// For scripted markup changes; call [`enhance`](Self::enhance) afterwards.
    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }

    pub fn input_values(&self) -> &InputValueStore {
        &self.input_values
    }

    pub fn interaction(&self) -> &InteractionState {
        &self.interaction
    }

    pub fn chips(&self) -> &ChipInputs {
        &self.chips
    }

    pub fn focused(&self) -> Option<Id> {
        self.interaction.focused_node_id
    }

    /// Live value of a text control.
    pub fn value(&self, id: Id) -> Option<&str> {
        self.input_values.get(to_input_id(id))
    }

    pub fn outline(&self, cap: usize) -> Vec<String> {
        outline_from_dom(self.document.root(), cap)
    }

    /// Moves focus to `id`, blurring the previously focused control first.
    ///
    /// Focusing something that is not a text control just clears focus.
    pub fn focus(&mut self, id: Id) {
        let target = self
            .document
            .get(id)
            .filter(|n| control_kind(n) != ControlKind::Other)
            .map(|_| id);
        if target.is_some() && target == self.interaction.focused_node_id {
            return;
        }

        self.blur();
        if let Some(id) = target {
            self.focus_without_blur(id);
        }
    }

    pub fn blur(&mut self) {
        let Some(prev) = self.interaction.focused_node_id else {
            return;
        };
        self.interaction.clear_focus();
        self.input_values.blur(to_input_id(prev));
        self.dispatch(ChipEvent::Blur { target: prev });
    }

    /// Delivers a key press to the focused control.
    ///
    /// Control handlers see the key first; the default edit is applied only if
    /// none of them prevented it.
    pub fn key_down(&mut self, key: KeyDown) -> Disposition {
        let Some(focused) = self.interaction.focused_node_id else {
            return Disposition::Default;
        };

        let outcome = self.dispatch(ChipEvent::KeyDown {
            target: focused,
            key,
        });
        if outcome.disposition.is_prevented() {
            return outcome.disposition;
        }

        self.apply_default_edit(focused, key);
        Disposition::Default
    }

    /// Delivers a key named as in `KeyboardEvent.key` (`"Enter"`, `","`, ...).
    ///
    /// Returns `None` for keys with no editing meaning (modifiers, function keys).
    pub fn press_key(&mut self, name: &str, shift: bool) -> Option<Disposition> {
        let key = Key::from_dom_key(name)?;
        Some(self.key_down(KeyDown { key, shift }))
    }

    /// Types `s` one key at a time; `\n` is sent as Enter.
    pub fn type_text(&mut self, s: &str) {
        for ch in s.chars() {
            let key = match ch {
                '\n' => Key::Enter,
                ch => Key::Char(ch),
            };
            self.key_down(KeyDown::new(key));
        }
    }

    /// Inserts `s` into the focused control without any key events.
    pub fn paste(&mut self, s: &str) {
        let Some(focused) = self.interaction.focused_node_id else {
            return;
        };
        let id = to_input_id(focused);
        match self.document.get(focused).map(control_kind) {
            Some(ControlKind::TextArea) => self.input_values.insert_text_multiline(id, s),
            Some(ControlKind::TextInput) => self.input_values.insert_text(id, s),
            _ => {}
        }
    }

    /// Clicks the node `id`: focus moves first, then the click is delivered.
    ///
    /// Returns the form data set when the click activated a submit button.
    pub fn click(&mut self, id: Id) -> Option<FormSubmission> {
        let element = self.element_for(id)?;
        self.interaction.active = Some(element);

        // Focus leaves the entry before the click lands. Its blur handler may
        // rebuild the chips, so remember which chip the button stood for.
        let button = self.document.closest(element, "button");
        let remove_target = button.and_then(|b| self.chips.remove_target(b));

        self.focus(element);

        let Some(button) = button else {
            return self.submit_for_input(element);
        };
        let button = remove_target
            .and_then(|(field, index)| self.chips.for_field(field)?.remove_button(index))
            .unwrap_or(button);

        let outcome = self.dispatch(ChipEvent::Click { target: button });
        if let Some(next) = outcome.focus {
            self.focus_without_blur(next);
            return None;
        }
        if outcome.handled || !is_submit_button(self.document.get(button)?) {
            return None;
        }
        let form = self.document.closest(button, "form")?;
        Some(self.submit(form))
    }

    /// Runs submit handlers for `form`, then builds its data set.
    pub fn submit(&mut self, form: Id) -> FormSubmission {
        self.dispatch(ChipEvent::Submit { form });
        let submission = collect_form_data(&self.document, &self.input_values, form);
        log::debug!(
            target: "page",
            "form {} submitted with {} entries",
            form.0,
            submission.entries.len()
        );
        submission
    }

    fn submit_for_input(&mut self, element: Id) -> Option<FormSubmission> {
        let node = self.document.get(element)?;
        let is_submit = node.is_element_named("input")
            && attr(node, "type").is_some_and(|t| t.trim().eq_ignore_ascii_case("submit"));
        if !is_submit {
            return None;
        }
        let form = self.document.closest(element, "form")?;
        Some(self.submit(form))
    }

    fn focus_without_blur(&mut self, id: Id) {
        self.interaction.set_focus(id);
        self.input_values.focus(to_input_id(id));
    }

    /// Text and comment nodes resolve to their parent element.
    fn element_for(&self, id: Id) -> Option<Id> {
        let node = self.document.get(id)?;
        if node.element_name().is_some() {
            Some(id)
        } else {
            self.document.parent_of(id)
        }
    }

    fn apply_default_edit(&mut self, id: Id, key: KeyDown) {
        let Some(kind) = self.document.get(id).map(control_kind) else {
            return;
        };
        let input = to_input_id(id);
        let store = &mut self.input_values;
        let mut buf = [0u8; 4];

        match (kind, key.key) {
            (ControlKind::Other, _) => {}
            (ControlKind::TextArea, Key::Enter) => store.insert_text_multiline(input, "\n"),
            // Implicit submission is not modeled.
            (ControlKind::TextInput, Key::Enter) => {}
            (ControlKind::TextArea, Key::Char(ch)) => {
                store.insert_text_multiline(input, ch.encode_utf8(&mut buf));
            }
            (ControlKind::TextInput, Key::Char(ch)) => {
                store.insert_text(input, ch.encode_utf8(&mut buf));
            }
            (_, Key::Backspace) => store.backspace(input),
            (_, Key::Delete) => store.delete(input),
            (_, Key::ArrowLeft) => store.move_caret_left(input, key.shift),
            (_, Key::ArrowRight) => store.move_caret_right(input, key.shift),
            (_, Key::Home) => store.move_caret_to_start(input, key.shift),
            (_, Key::End) => store.move_caret_to_end(input, key.shift),
        }
    }

    fn dispatch(&mut self, event: ChipEvent) -> EventOutcome {
        let mut ctx = ChipCtx::new(&mut self.document, &mut self.input_values);
        match self.chips.dispatch(&mut ctx, event) {
            Ok(outcome) => outcome,
            Err(err) => {
                log::warn!(target: "page", "chip handler failed for {event:?}: {err}");
                EventOutcome::default()
            }
        }
    }
}

/// `<button>` with a missing, empty or `submit` type.
fn is_submit_button(node: &Node) -> bool {
    match attr(node, "type").map(str::trim).filter(|t| !t.is_empty()) {
        None => true,
        Some(t) => t.eq_ignore_ascii_case("submit"),
    }
}
