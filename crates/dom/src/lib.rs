//! # dom
//!
//! A small owned document tree: nodes addressed by stable [`Id`]s, read
//! helpers for attributes and classes, and a [`Document`] wrapper that
//! allocates ids and performs the structural mutations enhanced controls need
//! (insert after a sibling, replace a child list, toggle attributes).
//!
//! Trees are plain [`Node`] values; tests and hosts build them directly and
//! hand them to [`Document::new`], which assigns ids to any node still carrying
//! [`Id::UNASSIGNED`].

pub mod attrs;
pub mod debug;
mod document;
mod error;
pub mod forms;
pub mod traverse;
mod types;

pub use document::Document;
pub use error::DomError;
pub use types::{Id, Node, NodeId};

/// Convenience constructors for building trees by hand.
pub mod build {
    use crate::{Id, Node};

    pub fn doc(children: Vec<Node>) -> Node {
        Node::Document {
            id: Id::UNASSIGNED,
            children,
        }
    }

    pub fn elem(name: &str, attributes: &[(&str, &str)], children: Vec<Node>) -> Node {
        Node::Element {
            id: Id::UNASSIGNED,
            name: name.to_string(),
            attributes: attributes
                .iter()
                .map(|(k, v)| (k.to_string(), Some(v.to_string())))
                .collect(),
            children,
        }
    }

    pub fn text(text: &str) -> Node {
        Node::Text {
            id: Id::UNASSIGNED,
            text: text.to_string(),
        }
    }
}
