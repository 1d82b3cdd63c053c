use chip_input::to_input_id;
use dom::attrs::attr;
use dom::forms::{ControlKind, control_kind, submission_name, textarea_default_value};
use dom::{Document, Id, Node};
use input_core::InputValueStore;
use url::form_urlencoded;

/// The form data set produced by submitting one form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormSubmission {
    pub form: Option<Id>,
    pub action: Option<String>,
    /// Lowercased `method` attribute; `"get"` when absent.
    pub method: String,
    pub entries: Vec<(String, String)>,
}

impl FormSubmission {
    /// First value submitted under `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn get_all<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.entries
            .iter()
            .filter(move |(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// `application/x-www-form-urlencoded` body.
    pub fn to_urlencoded(&self) -> String {
        let mut ser = form_urlencoded::Serializer::new(String::new());
        for (name, value) in &self.entries {
            ser.append_pair(name, value);
        }
        ser.finish()
    }
}

/// Builds the data set for `form` from the live control values, in tree order.
///
/// Only named, enabled text inputs and textareas contribute. A control the
/// store has never seen contributes its markup default.
pub fn collect_form_data(
    document: &Document,
    inputs: &InputValueStore,
    form: Id,
) -> FormSubmission {
    fn walk(node: &Node, inputs: &InputValueStore, out: &mut Vec<(String, String)>) {
        if let Some(name) = submission_name(node) {
            let value = match inputs.get(to_input_id(node.id())) {
                Some(v) => v.to_string(),
                None => match control_kind(node) {
                    ControlKind::TextArea => textarea_default_value(node),
                    _ => attr(node, "value").unwrap_or("").to_string(),
                },
            };
            out.push((name.to_string(), value));
        }
        for c in node.children() {
            walk(c, inputs, out);
        }
    }

    let Some(node) = document.get(form) else {
        log::warn!(target: "page", "submit of missing form {}", form.0);
        return FormSubmission::default();
    };

    let mut entries = Vec::new();
    for c in node.children() {
        walk(c, inputs, &mut entries);
    }

    FormSubmission {
        form: Some(form),
        action: attr(node, "action").map(str::to_string),
        method: attr(node, "method")
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .unwrap_or("get")
            .to_ascii_lowercase(),
        entries,
    }
}
