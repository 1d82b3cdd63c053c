use crate::attrs::{add_class, attr, collect_text, has_class, set_attr};
use crate::traverse::{
    assign_node_ids, collect_ids, find_node_by_id, find_node_by_id_mut, max_node_id, parent_id,
    path_to,
};
use crate::{DomError, Id, Node};

/// An owned document tree plus the id allocator for nodes created after load.
///
/// Every node reachable from the root carries a unique, non-zero [`Id`].
/// Nodes inserted through this type are adopted: any [`Id::UNASSIGNED`]
/// inside the inserted subtree receives a fresh id first.
#[derive(Clone, Debug)]
pub struct Document {
    root: Node,
    next_id: u32,
}

impl Document {
    pub fn new(mut root: Node) -> Self {
        let mut next_id = max_node_id(&root).0.wrapping_add(1);
        let assigned = assign_node_ids(&mut root, &mut next_id);
        log::trace!(target: "dom", "adopted document, assigned {assigned} node ids");
        Self { root, next_id }
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    pub fn root_id(&self) -> Id {
        self.root.id()
    }

    /// Reserves an id for a node the caller is about to build.
    pub fn alloc_id(&mut self) -> Id {
        let id = Id(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        id
    }

    pub fn get(&self, id: Id) -> Option<&Node> {
        find_node_by_id(&self.root, id)
    }

    pub fn get_mut(&mut self, id: Id) -> Option<&mut Node> {
        find_node_by_id_mut(&mut self.root, id)
    }

    pub fn contains(&self, id: Id) -> bool {
        self.get(id).is_some()
    }

    pub fn parent_of(&self, id: Id) -> Option<Id> {
        parent_id(&self.root, id)
    }

    /// Nearest element named `tag`, starting at `id` itself and walking up.
    pub fn closest(&self, id: Id, tag: &str) -> Option<Id> {
        let path = path_to(&self.root, id)?;
        path.into_iter()
            .rev()
            .find(|&ancestor| self.get(ancestor).is_some_and(|n| n.is_element_named(tag)))
    }

    /// `tag.class` lookup in document order. `tag = None` matches any element.
    pub fn elements_with_class(&self, tag: Option<&str>, class: &str) -> Vec<Id> {
        collect_ids(&self.root, &mut |n| {
            let tag_ok = match tag {
                Some(tag) => n.is_element_named(tag),
                None => n.element_name().is_some(),
            };
            tag_ok && has_class(n, class)
        })
    }

    pub fn elements_named(&self, tag: &str) -> Vec<Id> {
        collect_ids(&self.root, &mut |n| n.is_element_named(tag))
    }

    pub fn attribute(&self, id: Id, name: &str) -> Option<&str> {
        self.get(id).and_then(|n| attr(n, name))
    }

    pub fn set_attribute(&mut self, id: Id, name: &str, value: &str) -> Result<(), DomError> {
        let node = self.get_mut(id).ok_or(DomError::MissingNode(id))?;
        if !set_attr(node, name, value) {
            return Err(DomError::NotAContainer(id));
        }
        Ok(())
    }

    pub fn add_class(&mut self, id: Id, class: &str) -> Result<(), DomError> {
        let node = self.get_mut(id).ok_or(DomError::MissingNode(id))?;
        if !add_class(node, class) {
            return Err(DomError::NotAContainer(id));
        }
        Ok(())
    }

    pub fn text_content(&self, id: Id) -> Option<String> {
        let node = self.get(id)?;
        let mut out = String::new();
        collect_text(std::slice::from_ref(node), &mut out);
        Some(out)
    }

    /// Inserts `node` as the next sibling of `anchor` and returns the new node's id.
    pub fn insert_after(&mut self, anchor: Id, node: Node) -> Result<Id, DomError> {
        let parent = self.parent_of(anchor).ok_or_else(|| {
            if self.contains(anchor) {
                DomError::MissingParent(anchor)
            } else {
                DomError::MissingNode(anchor)
            }
        })?;
        let node = self.adopt(node);
        let id = node.id();
        let siblings = self.children_of_mut(parent)?;
        let Some(pos) = siblings.iter().position(|c| c.id() == anchor) else {
            debug_assert!(false, "anchor missing from its parent's children");
            return Err(DomError::MissingNode(anchor));
        };
        siblings.insert(pos + 1, node);
        Ok(id)
    }

    pub fn append_child(&mut self, parent: Id, node: Node) -> Result<Id, DomError> {
        let node = self.adopt(node);
        let id = node.id();
        self.children_of_mut(parent)?.push(node);
        Ok(id)
    }

    /// Drops every child of `parent` and installs `children` in their place.
    pub fn replace_children(&mut self, parent: Id, children: Vec<Node>) -> Result<(), DomError> {
        let children: Vec<Node> = children.into_iter().map(|c| self.adopt(c)).collect();
        *self.children_of_mut(parent)? = children;
        Ok(())
    }

    pub fn remove(&mut self, id: Id) -> Result<Node, DomError> {
        let parent = self.parent_of(id).ok_or(DomError::MissingParent(id))?;
        let siblings = self.children_of_mut(parent)?;
        let pos = siblings
            .iter()
            .position(|c| c.id() == id)
            .ok_or(DomError::MissingNode(id))?;
        Ok(siblings.remove(pos))
    }

    fn adopt(&mut self, mut node: Node) -> Node {
        assign_node_ids(&mut node, &mut self.next_id);
        node
    }

    fn children_of_mut(&mut self, parent: Id) -> Result<&mut Vec<Node>, DomError> {
        self.get_mut(parent)
            .ok_or(DomError::MissingNode(parent))?
            .children_mut()
            .ok_or(DomError::NotAContainer(parent))
    }
}
