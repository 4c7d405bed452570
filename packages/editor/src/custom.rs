//! Extraction of subtrees into reusable trees, and the way back.
//!
//! A `Custom` node points at another tree by id. The reference graph must
//! stay acyclic; [`can_reference`] is the check callers run before creating
//! a new reference.

use protoform_common::CustomRefCollector;
use protoform_model::{
    reassign_ids, Component, ComponentKind, CustomRef, IdAllocator, IdError, Project, Slot,
    TreeType,
};
use std::collections::HashSet;

/// Replace every node whose content equals `target` (ids ignored) with a
/// `Custom` reference to `tree_id`.
///
/// Each reference keeps the id of the node it replaces and starts without
/// modifiers. Returns the rewritten tree and the replaced nodes in
/// pre-order.
pub fn extract_to_custom(
    tree: &Component,
    target: &Component,
    tree_id: &str,
) -> (Component, Vec<Component>) {
    let mut originals = Vec::new();
    let rewritten = extract_in(tree, target, tree_id, &mut originals);
    (rewritten, originals)
}

fn extract_in(
    node: &Component,
    target: &Component,
    tree_id: &str,
    originals: &mut Vec<Component>,
) -> Component {
    if node.same_content(target) {
        originals.push(node.clone());
        return Component::new(
            node.id.clone(),
            ComponentKind::Custom(CustomRef {
                tree_id: tree_id.to_string(),
            }),
        );
    }

    match &node.kind {
        ComponentKind::Group(group) => node.with_children(
            group
                .children
                .iter()
                .map(|child| extract_in(child, target, tree_id, originals))
                .collect(),
        ),
        ComponentKind::Slotted(slotted) => node.with_slots(
            slotted
                .slots
                .iter()
                .map(|slot| Slot {
                    group: extract_in(&slot.group, target, tree_id, originals),
                    ..slot.clone()
                })
                .collect(),
        ),
        _ => node.clone(),
    }
}

/// Inline every `Custom` node that references `tree_id`.
///
/// A reference is replaced by the entry of `replacements` with the same id,
/// or else by a copy of `fallback` whose root takes the reference's id and
/// whose descendants get fresh ids from `ids`. Modifiers accumulated on the
/// reference are prepended to the restored node's own.
///
/// Returns the rewritten tree and the replaced `Custom` nodes in pre-order.
pub fn replace_custom_with(
    tree: &Component,
    tree_id: &str,
    replacements: &[Component],
    fallback: &Component,
    ids: &mut IdAllocator,
) -> Result<(Component, Vec<Component>), IdError> {
    let mut replaced = Vec::new();
    let rewritten = inline_in(tree, tree_id, replacements, fallback, ids, &mut replaced)?;
    Ok((rewritten, replaced))
}

fn inline_in(
    node: &Component,
    tree_id: &str,
    replacements: &[Component],
    fallback: &Component,
    ids: &mut IdAllocator,
    replaced: &mut Vec<Component>,
) -> Result<Component, IdError> {
    match &node.kind {
        ComponentKind::Custom(custom) if custom.tree_id == tree_id => {
            let mut restored = match replacements.iter().find(|r| r.id == node.id) {
                Some(original) => original.clone(),
                None => {
                    let mut copy = reassign_ids(fallback, ids)?;
                    copy.id = node.id.clone();
                    copy
                }
            };
            let mut modifiers = node.modifiers.clone();
            modifiers.append(&mut restored.modifiers);
            restored.modifiers = modifiers;

            replaced.push(node.clone());
            Ok(restored)
        }
        ComponentKind::Group(group) => {
            let mut children = Vec::with_capacity(group.children.len());
            for child in &group.children {
                children.push(inline_in(child, tree_id, replacements, fallback, ids, replaced)?);
            }
            Ok(node.with_children(children))
        }
        ComponentKind::Slotted(slotted) => {
            let mut slots = Vec::with_capacity(slotted.slots.len());
            for slot in &slotted.slots {
                slots.push(Slot {
                    group: inline_in(&slot.group, tree_id, replacements, fallback, ids, replaced)?,
                    ..slot.clone()
                });
            }
            Ok(node.with_slots(slots))
        }
        _ => Ok(node.clone()),
    }
}

/// Whether `tree` reaches a reference to `tree_id`, directly or through the
/// trees its own references point at.
pub fn contains_custom_component(tree: &Component, tree_id: &str, project: &Project) -> bool {
    let mut visited: HashSet<String> = HashSet::new();
    let mut pending = CustomRefCollector::collect(tree);

    while let Some(referenced) = pending.pop() {
        if referenced == tree_id {
            return true;
        }
        if !visited.insert(referenced.clone()) {
            continue;
        }
        if let Some(next) = project.find_tree(&referenced) {
            pending.extend(CustomRefCollector::collect(&next.root));
        }
    }

    false
}

/// Whether a `Custom` node pointing at `tree_id` inside `host_tree_id`
/// would make the host reach itself.
pub fn creates_cycle(project: &Project, host_tree_id: &str, tree_id: &str) -> bool {
    host_tree_id == tree_id
        || project
            .find_tree(tree_id)
            .is_some_and(|target| contains_custom_component(&target.root, host_tree_id, project))
}

/// Whether a `Custom` node pointing at `tree_id` may be placed inside
/// `host_tree_id`: the target must be a Component tree and no reference
/// cycle may result.
pub fn can_reference(project: &Project, host_tree_id: &str, tree_id: &str) -> bool {
    matches!(
        project.find_tree(tree_id),
        Some(target) if target.tree_type == TreeType::Component
    ) && !creates_cycle(project, host_tree_id, tree_id)
}
