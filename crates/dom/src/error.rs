use crate::Id;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DomError {
    MissingNode(Id),
    /// The node exists but cannot hold children or attributes.
    NotAContainer(Id),
    /// The node is the document root or otherwise detached.
    MissingParent(Id),
}

impl std::fmt::Display for DomError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DomError::MissingNode(id) => write!(f, "no node with id {}", id.0),
            DomError::NotAContainer(id) => write!(f, "node {} is not an element", id.0),
            DomError::MissingParent(id) => write!(f, "node {} has no parent", id.0),
        }
    }
}

impl std::error::Error for DomError {}
