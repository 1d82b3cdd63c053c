use crate::code_list::CodeList;
use crate::config::ChipInputConfig;
use crate::{ChipCtx, to_input_id};
use core_types::{Disposition, Key, KeyDown};
use dom::attrs::attr;
use dom::forms::textarea_default_value;
use dom::{Document, DomError, Id, Node};
use std::sync::Arc;

/// One enhanced field: the code list plus the surfaces it owns in the document.
///
/// The backing field's value (in the host's value store) is rewritten after
/// every mutation, so it always equals [`CodeList::serialize`] between events.
/// Chip removal is routed through the remove-button table built by the last
/// [`render`](Self::render); a button id from an earlier render no longer maps
/// to any index.
#[derive(Debug)]
pub struct ChipListController {
    config: Arc<ChipInputConfig>,
    field: Id,
    editor: Id,
    list: Id,
    entry: Id,
    form: Option<Id>,
    tokens: CodeList,
    remove_buttons: Vec<Id>,
}

impl ChipListController {
    /// Attaches an editor to `field`.
    ///
    /// Returns `Ok(None)` without touching the document when the field is
    /// missing, is not an element, has no parent to host the editor, or already
    /// carries the ready marker.
    pub fn mount(
        ctx: &mut ChipCtx<'_>,
        field: Id,
        config: &Arc<ChipInputConfig>,
    ) -> Result<Option<Self>, DomError> {
        let Some(node) = ctx.document.get(field) else {
            return Ok(None);
        };
        if node.element_name().is_none() || ctx.document.parent_of(field).is_none() {
            return Ok(None);
        }
        if attr(node, &config.ready_attribute) == Some("1") {
            log::debug!(target: "chip_input", "field {} already has a chip editor", field.0);
            return Ok(None);
        }
        let seed = match ctx.inputs.get(to_input_id(field)) {
            Some(value) => value.to_string(),
            None => textarea_default_value(node),
        };

        // The field is only marked and hidden once its editor is in place.
        let (editor, list, entry) = build_editor(ctx.document, config);
        let editor = ctx.document.insert_after(field, editor)?;
        ctx.document.set_attribute(field, &config.ready_attribute, "1")?;
        ctx.document.add_class(field, &config.hidden_class)?;
        ctx.inputs.ensure_initial(to_input_id(entry), String::new());

        let mut controller = Self {
            config: Arc::clone(config),
            field,
            editor,
            list,
            entry,
            form: ctx.document.closest(field, "form"),
            tokens: CodeList::new(),
            remove_buttons: Vec::new(),
        };
        controller.tokens.extend_parsed(&seed);
        controller.render(ctx.document)?;
        controller.sync(ctx);

        log::debug!(
            target: "chip_input",
            "mounted chip editor {} on field {} with {} codes (form: {:?})",
            controller.editor.0,
            field.0,
            controller.tokens.len(),
            controller.form.map(|f| f.0),
        );
        Ok(Some(controller))
    }

    /// Normalizes and appends `raw`; empty, invalid and duplicate codes are dropped.
    ///
    /// Touches neither the document nor the backing field. Callers render and
    /// sync once their batch is complete.
    pub fn add_token(&mut self, raw: &str) -> bool {
        self.tokens.add(raw)
    }

    pub fn remove_at(&mut self, ctx: &mut ChipCtx<'_>, index: usize) -> Result<(), DomError> {
        if self.tokens.remove(index).is_none() {
            return Ok(());
        }
        self.render(ctx.document)?;
        self.sync(ctx);
        Ok(())
    }

    /// Turns whatever is typed in the text entry into chips and clears the entry.
    pub fn commit_typed_input(&mut self, ctx: &mut ChipCtx<'_>) -> Result<(), DomError> {
        let entry = to_input_id(self.entry);
        let typed = ctx.inputs.get(entry).unwrap_or_default().to_string();
        let admitted = self.tokens.extend_parsed(&typed);
        ctx.inputs.set(entry, String::new());
        self.render(ctx.document)?;
        self.sync(ctx);

        log::trace!(
            target: "chip_input",
            "field {}: committed typed input, {admitted} new codes, {} total",
            self.field.0,
            self.tokens.len(),
        );
        Ok(())
    }

    /// Rebuilds every chip from the code list.
    pub fn render(&mut self, document: &mut Document) -> Result<(), DomError> {
        let config = &self.config;
        let mut chips = Vec::with_capacity(self.tokens.len());
        let mut buttons = Vec::with_capacity(self.tokens.len());

        for code in self.tokens.iter() {
            let button = document.alloc_id();
            buttons.push(button);
            chips.push(element(
                Id::UNASSIGNED,
                "span",
                vec![class_attr(&config.chip_class)],
                vec![
                    text(code),
                    element(
                        button,
                        "button",
                        vec![
                            ("type".to_string(), Some("button".to_string())),
                            class_attr(&config.remove_class),
                            ("aria-label".to_string(), Some(config.remove_label.clone())),
                        ],
                        vec![text(&config.remove_glyph)],
                    ),
                ],
            ));
        }

        document.replace_children(self.list, chips)?;
        self.remove_buttons = buttons;
        Ok(())
    }

    /// Writes the serialized code list into the backing field.
    pub fn sync(&self, ctx: &mut ChipCtx<'_>) {
        ctx.inputs.set(to_input_id(self.field), self.tokens.serialize());
    }

    /// Enter and comma commit; Backspace on an empty entry drops the last chip.
    pub fn on_key_down(
        &mut self,
        ctx: &mut ChipCtx<'_>,
        key: KeyDown,
    ) -> Result<Disposition, DomError> {
        match key.key {
            Key::Enter | Key::Char(',') => {
                self.commit_typed_input(ctx)?;
                Ok(Disposition::PreventDefault)
            }
            Key::Backspace
                if ctx.inputs.is_empty(to_input_id(self.entry)) && !self.tokens.is_empty() =>
            {
                self.remove_at(ctx, self.tokens.len() - 1)?;
                Ok(Disposition::Default)
            }
            _ => Ok(Disposition::Default),
        }
    }

    /// Commits codes left in the entry without Enter or comma.
    pub fn on_blur(&mut self, ctx: &mut ChipCtx<'_>) -> Result<(), DomError> {
        self.commit_typed_input(ctx)
    }

    /// Runs before the enclosing form builds its data set.
    pub fn on_submit(&mut self, ctx: &mut ChipCtx<'_>) -> Result<(), DomError> {
        self.commit_typed_input(ctx)
    }

    /// Removes the chip whose button was activated and asks for focus back on the entry.
    ///
    /// Returns `None` when `button` is not one of this controller's current buttons.
    pub fn on_remove_clicked(
        &mut self,
        ctx: &mut ChipCtx<'_>,
        button: Id,
    ) -> Result<Option<Id>, DomError> {
        let Some(index) = self.remove_index(button) else {
            return Ok(None);
        };
        self.remove_at(ctx, index)?;
        Ok(Some(self.entry))
    }

    /// Index a remove button was bound to at the last render.
    pub fn remove_index(&self, button: Id) -> Option<usize> {
        self.remove_buttons.iter().position(|&b| b == button)
    }

    pub fn remove_button(&self, index: usize) -> Option<Id> {
        self.remove_buttons.get(index).copied()
    }

    pub fn tokens(&self) -> &[String] {
        self.tokens.as_slice()
    }

    pub fn field(&self) -> Id {
        self.field
    }

    pub fn list(&self) -> Id {
        self.list
    }

    pub fn entry(&self) -> Id {
        self.entry
    }

    pub fn form(&self) -> Option<Id> {
        self.form
    }
}

/// `<div editor><div list/><input entry/></div>`, returned with the list and entry ids.
fn build_editor(document: &mut Document, config: &ChipInputConfig) -> (Node, Id, Id) {
    let list = document.alloc_id();
    let entry = document.alloc_id();

    let mut entry_attrs = vec![
        ("type".to_string(), Some("text".to_string())),
        class_attr(&config.input_class),
    ];
    if !config.placeholder.is_empty() {
        entry_attrs.push(("placeholder".to_string(), Some(config.placeholder.clone())));
    }

    let editor = element(
        Id::UNASSIGNED,
        "div",
        vec![class_attr(&config.editor_class)],
        vec![
            element(list, "div", vec![class_attr(&config.list_class)], Vec::new()),
            element(entry, "input", entry_attrs, Vec::new()),
        ],
    );
    (editor, list, entry)
}

fn element(
    id: Id,
    name: &str,
    attributes: Vec<(String, Option<String>)>,
    children: Vec<Node>,
) -> Node {
    Node::Element {
        id,
        name: name.to_string(),
        attributes,
        children,
    }
}

fn class_attr(class: &str) -> (String, Option<String>) {
    ("class".to_string(), Some(class.to_string()))
}

fn text(text: &str) -> Node {
    Node::Text {
        id: Id::UNASSIGNED,
        text: text.to_string(),
    }
}
