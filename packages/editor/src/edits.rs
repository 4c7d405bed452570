//! # Tree Edit Engine
//!
//! Pure, total functions over a root component. Every function returns a new
//! root and never signals "not found" as an error: editing against a node
//! that is not in the tree yields an unchanged copy.
//!
//! Traversal is pre-order. A Group descends into its children, a Slotted
//! node into every slot's Group (enabled or not). When several nodes are
//! structurally equal the first one reached wins.

use protoform_model::{Category, Component, Modifier, Slot};
use tracing::debug;

/// Rebuild `node` with the first child (or slot group) that `rewrite`
/// changes. Returns `None` when no child was rewritten.
fn rewrite_first(
    node: &Component,
    mut rewrite: impl FnMut(&Component) -> Option<Component>,
) -> Option<Component> {
    match node.category() {
        Category::Group => {
            let children = node.children()?;
            for (index, child) in children.iter().enumerate() {
                if let Some(updated) = rewrite(child) {
                    let mut children = children.to_vec();
                    children[index] = updated;
                    return Some(node.with_children(children));
                }
            }
            None
        }
        Category::Slotted => {
            let slots = node.slots()?;
            for (index, slot) in slots.iter().enumerate() {
                if let Some(group) = rewrite(&slot.group) {
                    let mut slots: Vec<Slot> = slots.to_vec();
                    slots[index].group = group;
                    return Some(node.with_slots(slots));
                }
            }
            None
        }
        Category::Leaf | Category::Custom => None,
    }
}

/// Insert `adding` into the children of the first node equal to `parent`.
///
/// `index` is clamped to the child count.
pub fn insert(tree: &Component, adding: &Component, parent: &Component, index: usize) -> Component {
    insert_into(tree, adding, parent, index).unwrap_or_else(|| {
        debug!(parent_id = %parent.id, "Insert parent not found");
        tree.clone()
    })
}

fn insert_into(
    node: &Component,
    adding: &Component,
    parent: &Component,
    index: usize,
) -> Option<Component> {
    if node == parent {
        if let Some(children) = node.children() {
            let mut children = children.to_vec();
            children.insert(index.min(children.len()), adding.clone());
            return Some(node.with_children(children));
        }
    }
    rewrite_first(node, |child| insert_into(child, adding, parent, index))
}

/// Remove the first node equal to `target` from the group that directly
/// contains it. The root itself cannot be removed.
pub fn remove(tree: &Component, target: &Component) -> Component {
    remove_from(tree, target).unwrap_or_else(|| {
        debug!(target_id = %target.id, "Remove target not found");
        tree.clone()
    })
}

fn remove_from(node: &Component, target: &Component) -> Option<Component> {
    if let Some(children) = node.children() {
        for (index, child) in children.iter().enumerate() {
            if child == target {
                let mut children = children.to_vec();
                children.remove(index);
                return Some(node.with_children(children));
            }
            if let Some(updated) = remove_from(child, target) {
                let mut children = children.to_vec();
                children[index] = updated;
                return Some(node.with_children(children));
            }
        }
        return None;
    }
    // Slot groups are part of the slot set and are never removed themselves
    rewrite_first(node, |group| remove_from(group, target))
}

/// Replace the node whose id matches `replacement.id`
pub fn update_by_id(tree: &Component, replacement: &Component) -> Component {
    update_in(tree, replacement).unwrap_or_else(|| {
        debug!(id = %replacement.id, "Update target not found");
        tree.clone()
    })
}

fn update_in(node: &Component, replacement: &Component) -> Option<Component> {
    if node.id == replacement.id {
        return Some(replacement.clone());
    }
    rewrite_first(node, |child| update_in(child, replacement))
}

/// Depth-first search by id
pub fn find_by_id<'a>(tree: &'a Component, id: &str) -> Option<&'a Component> {
    if tree.id == id {
        return Some(tree);
    }
    if let Some(children) = tree.children() {
        return children.iter().find_map(|child| find_by_id(child, id));
    }
    if let Some(slots) = tree.slots() {
        return slots.iter().find_map(|slot| find_by_id(&slot.group, id));
    }
    None
}

/// Depth-first search for a modifier; a node's own modifiers are checked
/// before its descendants.
pub fn find_modifier_by_id<'a>(tree: &'a Component, id: &str) -> Option<&'a Modifier> {
    if let Some(modifier) = tree.modifiers.iter().find(|m| m.id == id) {
        return Some(modifier);
    }
    if let Some(children) = tree.children() {
        return children
            .iter()
            .find_map(|child| find_modifier_by_id(child, id));
    }
    if let Some(slots) = tree.slots() {
        return slots
            .iter()
            .find_map(|slot| find_modifier_by_id(&slot.group, id));
    }
    None
}

/// The first Group whose children contain a node equal to `target`, and
/// that node's position.
pub fn find_parent_and_index<'a>(
    tree: &'a Component,
    target: &Component,
) -> Option<(&'a Component, usize)> {
    if let Some(children) = tree.children() {
        for (index, child) in children.iter().enumerate() {
            if child == target {
                return Some((tree, index));
            }
            if let Some(found) = find_parent_and_index(child, target) {
                return Some(found);
            }
        }
        return None;
    }
    if let Some(slots) = tree.slots() {
        return slots
            .iter()
            .find_map(|slot| find_parent_and_index(&slot.group, target));
    }
    None
}

/// Whether a node structurally equal to `node` occurs in `tree`
pub fn contains(tree: &Component, node: &Component) -> bool {
    tree.flatten().into_iter().any(|candidate| candidate == node)
}
