//! Attribute and class helpers over [`Node`] values.
//!
//! Attribute names compare ASCII case-insensitively, like HTML. Class tokens
//! compare exactly.

use crate::Node;

pub fn attr<'a>(node: &'a Node, name: &str) -> Option<&'a str> {
    match node {
        Node::Element { attributes, .. } => attributes
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .and_then(|(_, v)| v.as_deref()),
        _ => None,
    }
}

pub fn has_attr(node: &Node, name: &str) -> bool {
    match node {
        Node::Element { attributes, .. } => {
            attributes.iter().any(|(k, _)| k.eq_ignore_ascii_case(name))
        }
        _ => false,
    }
}

/// Sets (or overwrites) an attribute. Returns `false` for non-elements.
pub fn set_attr(node: &mut Node, name: &str, value: &str) -> bool {
    let Node::Element { attributes, .. } = node else {
        return false;
    };
    match attributes.iter_mut().find(|(k, _)| k.eq_ignore_ascii_case(name)) {
        Some((_, v)) => *v = Some(value.to_string()),
        None => attributes.push((name.to_string(), Some(value.to_string()))),
    }
    true
}

pub fn class_list(node: &Node) -> impl Iterator<Item = &str> {
    attr(node, "class").unwrap_or("").split_ascii_whitespace()
}

pub fn has_class(node: &Node, class: &str) -> bool {
    class_list(node).any(|c| c == class)
}

/// Appends `class` to the class attribute unless already present.
pub fn add_class(node: &mut Node, class: &str) -> bool {
    if node.element_name().is_none() {
        return false;
    }
    if has_class(node, class) {
        return true;
    }
    let joined = match attr(node, "class").map(str::trim).filter(|c| !c.is_empty()) {
        Some(existing) => format!("{existing} {class}"),
        None => class.to_string(),
    };
    set_attr(node, "class", &joined)
}

pub fn collect_text(nodes: &[Node], out: &mut String) {
    for n in nodes {
        match n {
            Node::Text { text, .. } => out.push_str(text),
            Node::Element { children, .. } | Node::Document { children, .. } => {
                collect_text(children, out);
            }
            Node::Comment { .. } => {}
        }
    }
}
