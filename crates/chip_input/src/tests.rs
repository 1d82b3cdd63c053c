use super::*;
use core_types::{Disposition, Key, KeyDown};
use dom::build::{doc, elem, text};
use dom::debug::outline_from_dom;
use dom::{Document, Id, Node};
use input_core::InputValueStore;

struct Fixture {
    document: Document,
    inputs: InputValueStore,
    chips: ChipInputs,
}

fn chip_field(name: &str, seed: &str) -> Node {
    elem(
        "textarea",
        &[("name", name), ("class", "permissions-chip-input")],
        vec![text(seed)],
    )
}

impl Fixture {
    fn with_root(root: Node) -> Self {
        let mut document = Document::new(root);
        let mut inputs = InputValueStore::new();
        let chips = init_chip_inputs(
            &mut ChipCtx::new(&mut document, &mut inputs),
            ChipInputConfig::default(),
        );
        Self {
            document,
            inputs,
            chips,
        }
    }

    fn new(seed: &str) -> Self {
        Self::with_root(doc(vec![elem(
            "form",
            &[("method", "post")],
            vec![
                chip_field("permission_codes", seed),
                elem("button", &[("type", "submit")], vec![text("Save")]),
            ],
        )]))
    }

    fn ctrl(&self) -> &ChipListController {
        self.chips.iter().next().expect("one chip field")
    }

    fn tokens(&self) -> Vec<String> {
        self.ctrl().tokens().to_vec()
    }

    fn field_value(&self) -> &str {
        self.inputs
            .get(to_input_id(self.ctrl().field()))
            .expect("backing field value")
    }

    fn entry_value(&self) -> &str {
        self.inputs.get(to_input_id(self.ctrl().entry())).unwrap_or("")
    }

    fn type_text(&mut self, s: &str) {
        let entry = to_input_id(self.ctrl().entry());
        self.inputs.insert_text(entry, s);
    }

    fn dispatch(&mut self, event: ChipEvent) -> EventOutcome {
        let mut ctx = ChipCtx::new(&mut self.document, &mut self.inputs);
        self.chips.dispatch(&mut ctx, event).expect("dispatch")
    }

    fn key(&mut self, key: Key) -> EventOutcome {
        let target = self.ctrl().entry();
        self.dispatch(ChipEvent::KeyDown {
            target,
            key: KeyDown::new(key),
        })
    }

    fn blur(&mut self) -> EventOutcome {
        let target = self.ctrl().entry();
        self.dispatch(ChipEvent::Blur { target })
    }

    fn click_remove(&mut self, index: usize) -> EventOutcome {
        let target = self.ctrl().remove_button(index).expect("remove button");
        self.dispatch(ChipEvent::Click { target })
    }

    /// Visible chip labels, read back from the document.
    fn chip_labels(&self) -> Vec<String> {
        let list = self.document.get(self.ctrl().list()).expect("chip list");
        list.children()
            .iter()
            .map(|chip| match chip.children().first() {
                Some(Node::Text { text, .. }) => text.clone(),
                other => panic!("chip without label: {other:?}"),
            })
            .collect()
    }

    fn editor_count(&self) -> usize {
        self.document
            .elements_with_class(Some("div"), "permission-tag-editor")
            .len()
    }
}

#[test]
fn seed_value_is_parsed_and_reserialized() {
    let fx = Fixture::new("Read\n\nwrite-all");
    assert_eq!(fx.tokens(), ["read", "write-all"]);
    assert_eq!(fx.field_value(), "read\nwrite-all");
    assert_eq!(fx.chip_labels(), ["read", "write-all"]);
}

#[test]
fn mixed_delimiters_in_seed_are_normalized_to_lines() {
    let fx = Fixture::new("\nops, Billing\r\nbad code!\nops");
    assert_eq!(fx.field_value(), "ops\nbilling");
}

#[test]
fn mount_builds_editor_after_hidden_field() {
    let fx = Fixture::new("read");
    assert_eq!(
        outline_from_dom(fx.document.root(), 64),
        vec![
            "#document",
            "  <form>",
            r#"    <textarea class="permissions-chip-input permission-chip-hidden" name="permission_codes">"#,
            r#"      "read""#,
            r#"    <div class="permission-tag-editor">"#,
            r#"      <div class="permission-chip-list">"#,
            r#"        <span class="permission-tag-chip">"#,
            r#"          "read""#,
            r#"          <button class="permission-tag-remove" type="button" aria-label="Remove permission">"#,
            r#"            "×""#,
            r#"      <input class="permission-chip-editor-input" type="text">"#,
            r#"    <button type="submit">"#,
            r#"      "Save""#,
        ]
    );
    let field = fx.ctrl().field();
    assert_eq!(fx.document.attribute(field, "data-tag-input-ready"), Some("1"));
    assert_eq!(
        fx.document.attribute(fx.ctrl().entry(), "placeholder"),
        Some("Type code and press Enter or comma")
    );
    assert_eq!(fx.ctrl().form(), fx.document.parent_of(field));
}

#[test]
fn enter_commits_a_typed_batch() {
    let mut fx = Fixture::new("");
    fx.type_text("Export, VIEW,,export");
    let outcome = fx.key(Key::Enter);

    assert!(outcome.handled);
    assert_eq!(outcome.disposition, Disposition::PreventDefault);
    assert_eq!(fx.tokens(), ["export", "view"]);
    assert_eq!(fx.field_value(), "export\nview");
    assert_eq!(fx.entry_value(), "");
    assert_eq!(fx.chip_labels(), ["export", "view"]);
}

#[test]
fn comma_key_commits_and_is_prevented() {
    let mut fx = Fixture::new("read");
    fx.type_text("Write");
    let outcome = fx.key(Key::Char(','));
    assert_eq!(outcome.disposition, Disposition::PreventDefault);
    assert_eq!(fx.field_value(), "read\nwrite");
}

#[test]
fn other_keys_fall_through() {
    let mut fx = Fixture::new("read");
    let outcome = fx.key(Key::Char('x'));
    assert!(outcome.handled);
    assert_eq!(outcome.disposition, Disposition::Default);
    assert_eq!(fx.tokens(), ["read"]);
}

#[test]
fn blur_drops_invalid_text_silently() {
    let mut fx = Fixture::new("keep");
    fx.type_text("bad code!");
    fx.blur();

    assert_eq!(fx.tokens(), ["keep"]);
    assert_eq!(fx.field_value(), "keep");
    assert_eq!(fx.entry_value(), "");
}

#[test]
fn blur_commits_unterminated_code() {
    let mut fx = Fixture::new("");
    fx.type_text("audit");
    fx.blur();
    assert_eq!(fx.field_value(), "audit");
}

#[test]
fn backspace_on_empty_entry_drops_last_chip() {
    let mut fx = Fixture::new("a\nb");
    let outcome = fx.key(Key::Backspace);

    assert_eq!(outcome.disposition, Disposition::Default);
    assert_eq!(fx.tokens(), ["a"]);
    assert_eq!(fx.field_value(), "a");
    assert_eq!(fx.chip_labels(), ["a"]);
}

#[test]
fn backspace_with_pending_text_leaves_chips_alone() {
    let mut fx = Fixture::new("a\nb");
    fx.type_text("c");
    fx.key(Key::Backspace);
    assert_eq!(fx.tokens(), ["a", "b"]);
    assert_eq!(fx.entry_value(), "c");
}

#[test]
fn backspace_with_no_chips_is_harmless() {
    let mut fx = Fixture::new("");
    fx.key(Key::Backspace);
    assert!(fx.tokens().is_empty());
    assert_eq!(fx.field_value(), "");
}

#[test]
fn remove_button_drops_its_chip_and_requests_entry_focus() {
    let mut fx = Fixture::new("a\nb\nc");
    let outcome = fx.click_remove(0);

    assert!(outcome.handled);
    assert_eq!(outcome.focus, Some(fx.ctrl().entry()));
    assert_eq!(fx.tokens(), ["b", "c"]);
    assert_eq!(fx.chip_labels(), ["b", "c"]);
    assert_eq!(fx.field_value(), "b\nc");
}

#[test]
fn buttons_are_rebound_to_current_indices_after_render() {
    let mut fx = Fixture::new("a\nb\nc");
    let stale = fx.ctrl().remove_button(2).unwrap();
    fx.click_remove(0);

    assert!(!fx.document.contains(stale));
    let outcome = fx.dispatch(ChipEvent::Click { target: stale });
    assert!(!outcome.handled);
    assert_eq!(fx.tokens(), ["b", "c"]);

    // Former index 2 now lives at index 1.
    fx.click_remove(1);
    assert_eq!(fx.tokens(), ["b"]);
}

#[test]
fn submit_commits_pending_text_first() {
    let mut fx = Fixture::new("read");
    fx.type_text("temp");
    let form = fx.ctrl().form().unwrap();
    let outcome = fx.dispatch(ChipEvent::Submit { form });

    assert!(outcome.handled);
    assert_eq!(fx.field_value(), "read\ntemp");
}

#[test]
fn submit_of_another_form_is_not_routed() {
    let mut fx = Fixture::new("read");
    fx.type_text("temp");
    let outcome = fx.dispatch(ChipEvent::Submit { form: Id(4242) });
    assert!(!outcome.handled);
    assert_eq!(fx.entry_value(), "temp");
    assert_eq!(fx.field_value(), "read");
}

#[test]
fn mounting_twice_is_a_no_op() {
    let mut fx = Fixture::new("a\nb");
    let field = fx.ctrl().field();
    let before = outline_from_dom(fx.document.root(), 128);

    let mut ctx = ChipCtx::new(&mut fx.document, &mut fx.inputs);
    assert_eq!(fx.chips.mount(&mut ctx, field), Ok(false));
    assert_eq!(fx.chips.mount_all(&mut ctx), 0);
    let second = init_chip_inputs(&mut ctx, ChipInputConfig::default());

    assert!(second.is_empty());
    assert_eq!(fx.chips.len(), 1);
    assert_eq!(fx.editor_count(), 1);
    assert_eq!(outline_from_dom(fx.document.root(), 128), before);
}

#[test]
fn missing_or_detached_targets_are_skipped() {
    let mut fx = Fixture::new("");
    let root = fx.document.root_id();
    let mut ctx = ChipCtx::new(&mut fx.document, &mut fx.inputs);
    assert_eq!(fx.chips.mount(&mut ctx, Id(9999)), Ok(false));
    assert_eq!(fx.chips.mount(&mut ctx, root), Ok(false));
    assert_eq!(fx.chips.len(), 1);
}

#[test]
fn fields_are_independent() {
    let mut fx = Fixture::with_root(doc(vec![elem(
        "form",
        &[],
        vec![chip_field("read_codes", "a"), chip_field("write_codes", "b")],
    )]));
    assert_eq!(fx.chips.len(), 2);

    let first = fx.chips.iter().next().unwrap().entry();
    fx.inputs.insert_text(to_input_id(first), "c");
    fx.dispatch(ChipEvent::KeyDown {
        target: first,
        key: KeyDown::new(Key::Enter),
    });

    let values: Vec<Vec<String>> = fx.chips.iter().map(|c| c.tokens().to_vec()).collect();
    assert_eq!(values, vec![vec!["a", "c"], vec!["b"]]);
}

#[test]
fn field_outside_a_form_still_mounts() {
    let fx = Fixture::with_root(doc(vec![elem(
        "div",
        &[],
        vec![chip_field("codes", "x")],
    )]));
    assert_eq!(fx.ctrl().form(), None);
    assert_eq!(fx.field_value(), "x");
}

#[test]
fn value_already_in_store_wins_over_markup() {
    let mut document = Document::new(doc(vec![elem(
        "form",
        &[],
        vec![chip_field("codes", "from_markup")],
    )]));
    let field = document.elements_named("textarea")[0];
    let mut inputs = InputValueStore::new();
    inputs.set(to_input_id(field), "restored,Other".to_string());

    let chips = init_chip_inputs(
        &mut ChipCtx::new(&mut document, &mut inputs),
        ChipInputConfig::default(),
    );
    assert_eq!(chips.for_field(field).unwrap().tokens(), ["restored", "other"]);
    assert_eq!(inputs.get(to_input_id(field)), Some("restored\nother"));
}

#[test]
fn add_token_waits_for_sync() {
    let mut fx = Fixture::new("a");
    let field = fx.ctrl().field();
    let ctrl = fx.chips.for_field_mut(field).unwrap();

    assert!(ctrl.add_token(" B "));
    assert!(!ctrl.add_token("b"));
    assert!(!ctrl.add_token("no way"));
    assert_eq!(fx.inputs.get(to_input_id(field)), Some("a"));

    let mut ctx = ChipCtx::new(&mut fx.document, &mut fx.inputs);
    ctrl.render(ctx.document).unwrap();
    ctrl.sync(&mut ctx);
    assert_eq!(fx.inputs.get(to_input_id(field)), Some("a\nb"));
}

#[test]
fn custom_config_changes_target_and_labels() {
    let config = ChipInputConfig::from_toml_str(
        r#"
        target_class = "scope-input"
        remove_label = "Remove scope"
        "#,
    )
    .unwrap();
    let mut document = Document::new(doc(vec![elem(
        "form",
        &[],
        vec![
            elem(
                "textarea",
                &[("name", "scopes"), ("class", "scope-input")],
                vec![text("one")],
            ),
            chip_field("ignored", "two"),
        ],
    )]));
    let mut inputs = InputValueStore::new();
    let chips = init_chip_inputs(&mut ChipCtx::new(&mut document, &mut inputs), config);

    assert_eq!(chips.len(), 1);
    let button = chips.iter().next().unwrap().remove_button(0).unwrap();
    assert_eq!(document.attribute(button, "aria-label"), Some("Remove scope"));
}

#[test]
fn serialized_value_round_trips_through_a_fresh_list() {
    let sequences: [&[&str]; 4] = [
        &["read", "Write", "read", "a-b_c"],
        &["z", "y", "x", "Y"],
        &["", " ", "ok!", "ok"],
        &[],
    ];
    for seq in sequences {
        let mut list = CodeList::new();
        for raw in seq {
            list.add(raw);
        }
        let restored = CodeList::from_serialized(&list.serialize());
        assert_eq!(restored, list, "{seq:?}");
    }
}

#[test]
fn seed_with_byte_order_mark_is_admitted() {
    let fx = Fixture::new("\u{FEFF}Read\n\u{FEFF}write");
    assert_eq!(fx.tokens(), ["read", "write"]);
    assert_eq!(fx.field_value(), "read\nwrite");
}

#[test]
fn marked_fields_always_have_their_editor_next() {
    let mut fx = Fixture::with_root(doc(vec![
        chip_field("top_level", "a"),
        elem("form", &[], vec![chip_field("in_form", "b")]),
    ]));
    assert_eq!(fx.chips.len(), 2);

    for field in fx.document.elements_named("textarea") {
        assert_eq!(fx.document.attribute(field, "data-tag-input-ready"), Some("1"));
        let parent = fx.document.parent_of(field).unwrap();
        let siblings = fx.document.get(parent).unwrap().children();
        let pos = siblings.iter().position(|n| n.id() == field).unwrap();
        let next = siblings[pos + 1].id();
        let list = fx.chips.for_field(field).unwrap().list();
        assert_eq!(fx.document.parent_of(list), Some(next));
    }

    // A target that cannot host an editor is left unmarked.
    let root = fx.document.root_id();
    let mut ctx = ChipCtx::new(&mut fx.document, &mut fx.inputs);
    assert_eq!(fx.chips.mount(&mut ctx, root), Ok(false));
    assert_eq!(fx.document.attribute(root, "data-tag-input-ready"), None);
}
