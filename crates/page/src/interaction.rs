use dom::Id;

/// Focus bookkeeping for one document.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InteractionState {
    pub focused_node_id: Option<Id>,
    /// The last element a click landed on, after resolving text to its element.
    pub active: Option<Id>,
}

impl InteractionState {
    pub fn clear_focus(&mut self) {
        self.focused_node_id = None;
    }

    pub fn set_focus(&mut self, id: Id) {
        self.focused_node_id = Some(id);
    }
}
