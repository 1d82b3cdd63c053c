/// Per-control state kept by [`InputValueStore`](crate::InputValueStore).
#[derive(Clone, Debug, Default)]
pub(crate) struct InputState {
    pub value: String,

    /// Byte offset into `value`, always on a char boundary.
    pub caret: usize,

    /// Other end of the selection; the selected range is `anchor..caret` in either order.
    pub selection_anchor: Option<usize>,
}
