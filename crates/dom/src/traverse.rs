use crate::{Id, Node};

/// Assigns ids to every node still carrying [`Id::UNASSIGNED`], drawing from `next`.
///
/// Returns how many nodes were assigned.
pub fn assign_node_ids(root: &mut Node, next: &mut u32) -> usize {
    fn walk(node: &mut Node, next: &mut u32, assigned: &mut usize) {
        // only assign if currently unset
        if node.id() == Id::UNASSIGNED {
            node.set_id(Id(*next));
            *next = next.wrapping_add(1);
            *assigned += 1;
        }

        if let Some(children) = node.children_mut() {
            for c in children {
                walk(c, next, assigned);
            }
        }
    }

    let mut assigned = 0;
    walk(root, next, &mut assigned);
    assigned
}

pub fn max_node_id(node: &Node) -> Id {
    node.children()
        .iter()
        .map(max_node_id)
        .fold(node.id(), Id::max)
}

pub fn find_node_by_id(node: &Node, id: Id) -> Option<&Node> {
    if node.id() == id {
        return Some(node);
    }
    for c in node.children() {
        if let Some(found) = find_node_by_id(c, id) {
            return Some(found);
        }
    }
    None
}

pub fn find_node_by_id_mut(node: &mut Node, id: Id) -> Option<&mut Node> {
    if node.id() == id {
        return Some(node);
    }
    node.children_mut()?
        .iter_mut()
        .find_map(|c| find_node_by_id_mut(c, id))
}

/// Ids from `root` down to (and including) `id`, or `None` if `id` is not in the tree.
pub fn path_to(root: &Node, id: Id) -> Option<Vec<Id>> {
    fn walk(node: &Node, id: Id, path: &mut Vec<Id>) -> bool {
        path.push(node.id());
        if node.id() == id {
            return true;
        }
        for c in node.children() {
            if walk(c, id, path) {
                return true;
            }
        }
        path.pop();
        false
    }

    let mut path = Vec::new();
    walk(root, id, &mut path).then_some(path)
}

pub fn parent_id(root: &Node, id: Id) -> Option<Id> {
    let path = path_to(root, id)?;
    let len = path.len();
    (len >= 2).then(|| path[len - 2])
}

/// Ids of all nodes matching `pred`, in document (pre-)order.
pub fn collect_ids(root: &Node, pred: &mut dyn FnMut(&Node) -> bool) -> Vec<Id> {
    fn walk(node: &Node, pred: &mut dyn FnMut(&Node) -> bool, out: &mut Vec<Id>) {
        if pred(node) {
            out.push(node.id());
        }
        for c in node.children() {
            walk(c, pred, out);
        }
    }

    let mut out = Vec::new();
    walk(root, pred, &mut out);
    out
}
