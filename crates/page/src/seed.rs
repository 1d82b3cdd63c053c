use chip_input::to_input_id;
use dom::Node;
use dom::attrs::attr;
use dom::forms::{ControlKind, control_kind, textarea_default_value};
use input_core::{InputValueStore, filter_single_line};

/// Gives every text control its initial value from markup.
///
/// Controls already present in `store` keep their value, so reseeding after
/// markup changes never clobbers what the user typed. Returns the number of
/// controls seeded.
pub fn seed_input_values_from_dom(store: &mut InputValueStore, root: &Node) -> usize {
    fn walk(store: &mut InputValueStore, node: &Node, seeded: &mut usize) {
        let id = to_input_id(node.id());
        match control_kind(node) {
            ControlKind::TextInput if !store.has(id) => {
                let initial = attr(node, "value").unwrap_or("");
                // Single-line controls never hold a line break.
                let initial = filter_single_line(initial).into_owned();
                store.ensure_initial(id, initial);
                *seeded += 1;
            }
            ControlKind::TextArea if !store.has(id) => {
                store.ensure_initial(id, textarea_default_value(node));
                *seeded += 1;
            }
            _ => {}
        }

        for c in node.children() {
            walk(store, c, seeded);
        }
    }

    let mut seeded = 0;
    walk(store, root, &mut seeded);
    seeded
}
