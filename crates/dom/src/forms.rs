//! Form-control facts read straight from markup.

use crate::attrs::{attr, collect_text, has_attr};
use crate::Node;

/// The value a `<textarea>` starts with: its text content with CRLF/CR
/// rewritten to LF and a single leading newline dropped, as HTML parsing does.
pub fn textarea_default_value(node: &Node) -> String {
    let mut raw = String::new();
    collect_text(node.children(), &mut raw);
    let mut value = if raw.contains('\r') {
        raw.replace("\r\n", "\n").replace('\r', "\n")
    } else {
        raw
    };
    if value.starts_with('\n') {
        value.remove(0);
    }
    value
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControlKind {
    /// `<input>` with a missing, empty, `text`, `search` or `hidden` type.
    TextInput,
    TextArea,
    Other,
}

pub fn control_kind(node: &Node) -> ControlKind {
    if node.is_element_named("textarea") {
        return ControlKind::TextArea;
    }
    if !node.is_element_named("input") {
        return ControlKind::Other;
    }

    match attr(node, "type").map(str::trim).filter(|t| !t.is_empty()) {
        None => ControlKind::TextInput, // missing type defaults to text
        Some(t)
            if ["text", "search", "hidden"]
                .iter()
                .any(|k| t.eq_ignore_ascii_case(k)) =>
        {
            ControlKind::TextInput
        }
        Some(_) => ControlKind::Other,
    }
}

/// Name under which a control contributes to a form data set, if it does.
pub fn submission_name(node: &Node) -> Option<&str> {
    if control_kind(node) == ControlKind::Other || has_attr(node, "disabled") {
        return None;
    }
    attr(node, "name").filter(|n| !n.is_empty())
}
