//! Variant swapping with content preservation (e.g. Row → Scaffold).

use protoform_model::{Component, ComponentKind, Slot};

/// Swap `node`'s variant for the one carried by `replacement`.
///
/// The result keeps `node`'s id and modifiers and takes the replacement's
/// kind and value properties. Child content is carried over:
///
/// - into a Group: every old child, flattened across old slots, followed by
///   the replacement's own children;
/// - into a Slotted node: see [`fit_slots`];
/// - into a leaf or Custom node: the content is dropped.
///
/// The flag is `true` when content is dropped, so callers can ask for
/// confirmation before committing the swap.
pub fn replace_base(node: &Component, replacement: &Component) -> (Component, bool) {
    let base = Component {
        id: node.id.clone(),
        modifiers: node.modifiers.clone(),
        kind: replacement.kind.clone(),
    };

    match &replacement.kind {
        ComponentKind::Group(group) => {
            let mut children = node.content_children();
            children.extend(group.children.iter().cloned());
            (base.with_children(children), false)
        }
        ComponentKind::Slotted(slotted) => {
            let containers = logical_containers(node);
            let slots = fit_slots(containers, &slotted.slots);
            (base.with_slots(slots), false)
        }
        ComponentKind::Text(_)
        | ComponentKind::Icon(_)
        | ComponentKind::Spacer
        | ComponentKind::Custom(_) => (base, node.has_content()),
    }
}

/// The old node's content as a list of containers: one for a Group, one
/// per slot for a Slotted node, none for anything else.
fn logical_containers(node: &Component) -> Vec<Vec<Component>> {
    match &node.kind {
        ComponentKind::Group(group) => vec![group.children.clone()],
        ComponentKind::Slotted(slotted) => slotted
            .slots
            .iter()
            .map(|slot| slot.children().to_vec())
            .collect(),
        _ => Vec::new(),
    }
}

/// Distribute containers over `slots`.
///
/// - A single container lands in the last slot, which is the content slot
///   of every slotted variant.
/// - Otherwise container `i` goes to slot `i`. Trailing slots without a
///   container stay as supplied; containers past the last slot are
///   flattened together into it.
///
/// Slots that receive children are enabled. Content is appended after any
/// children the slot group already had.
pub fn fit_slots(containers: Vec<Vec<Component>>, slots: &[Slot]) -> Vec<Slot> {
    let mut fitted = slots.to_vec();
    let Some(last) = fitted.len().checked_sub(1) else {
        return fitted;
    };

    let mut placements: Vec<(usize, Vec<Component>)> = Vec::new();
    if containers.len() == 1 {
        placements.extend(containers.into_iter().map(|c| (last, c)));
    } else {
        for (index, container) in containers.into_iter().enumerate() {
            placements.push((index.min(last), container));
        }
    }

    for (index, children) in placements {
        if children.is_empty() {
            continue;
        }
        let slot = &mut fitted[index];
        let mut merged = slot.children().to_vec();
        merged.extend(children);
        slot.group = slot.group.with_children(merged);
        slot.enabled = true;
    }

    fitted
}
