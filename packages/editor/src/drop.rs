//! Drag-and-drop resolution.
//!
//! Translates "drop `dragged` relative to `target`" into a concrete parent
//! and index, and from there into an [`Action`]. Positions are computed on
//! the tree as it looks once the dragged node has left its old place, which
//! is also how [`Action::MoveComponent`] matches its parent.

use crate::actions::Action;
use crate::edits::{contains, find_by_id, find_parent_and_index, remove};
use protoform_model::{Category, Component};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DropPosition {
    Above,
    Below,
    NestedFirst,
    NestedLast,
}

/// Where a dropped node lands
#[derive(Debug, Clone, PartialEq)]
pub struct DropTarget {
    /// The receiving Group, as it looks after the dragged node is removed
    pub parent: Component,
    pub index: usize,
}

/// Resolve a drop of `dragged` at `position` relative to `target`.
///
/// Returns `None` when the drop has no valid landing place, including drops
/// onto the dragged node itself or one of its descendants.
pub fn resolve_drop(
    root: &Component,
    dragged: &Component,
    target: &Component,
    position: DropPosition,
) -> Option<DropTarget> {
    if contains(dragged, target) {
        return None;
    }

    let base = if contains(root, dragged) {
        remove(root, dragged)
    } else {
        root.clone()
    };
    let target = find_by_id(&base, &target.id)?;

    match position {
        DropPosition::Above => beside(&base, target, false),
        DropPosition::Below => beside(&base, target, true),
        DropPosition::NestedFirst => nest(&base, target, false),
        DropPosition::NestedLast => nest(&base, target, true),
    }
}

fn beside(base: &Component, target: &Component, below: bool) -> Option<DropTarget> {
    if let Some((parent, index)) = find_parent_and_index(base, target) {
        return Some(DropTarget {
            parent: parent.clone(),
            index: index + usize::from(below),
        });
    }

    // The root and slot groups have no siblings
    let children = target.children()?;
    Some(DropTarget {
        parent: target.clone(),
        index: if below { children.len() } else { 0 },
    })
}

fn nest(base: &Component, target: &Component, last: bool) -> Option<DropTarget> {
    match target.category() {
        Category::Group => {
            let len = target.children().map_or(0, <[Component]>::len);
            Some(DropTarget {
                parent: target.clone(),
                index: if last { len } else { 0 },
            })
        }
        Category::Slotted => {
            let slot = target.slots()?.iter().find(|slot| slot.enabled)?;
            nest(base, &slot.group, last)
        }
        Category::Leaf | Category::Custom => beside(base, target, true),
    }
}

/// The action performing a drop: a move when `dragged` is already in the
/// tree, an insertion otherwise.
pub fn drop_action(
    tree_id: &str,
    root: &Component,
    dragged: &Component,
    target: &Component,
    position: DropPosition,
) -> Option<Action> {
    let DropTarget { parent, index } = resolve_drop(root, dragged, target, position)?;

    let action = if contains(root, dragged) {
        Action::MoveComponent {
            tree_id: tree_id.to_string(),
            component: dragged.clone(),
            parent,
            index,
        }
    } else {
        Action::AddComponent {
            tree_id: tree_id.to_string(),
            component: dragged.clone(),
            parent,
            index,
        }
    };
    Some(action)
}

#[cfg(test)]
mod tests {
    use super::*;
    use protoform_model::{templates, ComponentKind, IdAllocator, Project, Tree};

    fn labels(group: &Component) -> Vec<String> {
        group
            .children()
            .unwrap()
            .iter()
            .map(|child| match &child.kind {
                ComponentKind::Text(text) => text.text.clone(),
                other => other.name().to_string(),
            })
            .collect()
    }

    fn abc(ids: &mut IdAllocator) -> (Component, [Component; 3]) {
        let a = templates::text(ids, "A").unwrap();
        let b = templates::text(ids, "B").unwrap();
        let c = templates::text(ids, "C").unwrap();
        let column = templates::column(ids)
            .unwrap()
            .with_children(vec![a.clone(), b.clone(), c.clone()]);
        (column, [a, b, c])
    }

    fn run(root: &Component, action: Action) -> Component {
        let mut project = Project::new("Drop").unwrap();
        let tree = Tree::new("t", "T", protoform_model::TreeType::Screen, root.clone());
        project.trees = vec![tree];
        let applied = action.apply(&project).unwrap();
        applied.project.trees[0].root.clone()
    }

    #[test]
    fn test_move_down_accounts_for_removal() {
        let mut ids = IdAllocator::new();
        let (column, [a, _, c]) = abc(&mut ids);

        let drop = resolve_drop(&column, &a, &c, DropPosition::Below).unwrap();
        assert_eq!(drop.index, 2);
        assert_eq!(labels(&drop.parent), vec!["B", "C"]);

        let action = drop_action("t", &column, &a, &c, DropPosition::Below).unwrap();
        assert!(matches!(action, Action::MoveComponent { .. }));
        assert_eq!(labels(&run(&column, action)), vec!["B", "C", "A"]);
    }

    #[test]
    fn test_move_up() {
        let mut ids = IdAllocator::new();
        let (column, [a, _, c]) = abc(&mut ids);

        let action = drop_action("t", &column, &c, &a, DropPosition::Above).unwrap();
        assert_eq!(labels(&run(&column, action)), vec!["C", "A", "B"]);
    }

    #[test]
    fn test_new_node_becomes_add() {
        let mut ids = IdAllocator::new();
        let (column, [_, b, _]) = abc(&mut ids);
        let fresh = templates::text(&mut ids, "New").unwrap();

        let action = drop_action("t", &column, &fresh, &b, DropPosition::Above).unwrap();
        assert!(matches!(action, Action::AddComponent { index: 1, .. }));
        assert_eq!(labels(&run(&column, action)), vec!["A", "New", "B", "C"]);
    }

    #[test]
    fn test_nested_on_leaf_behaves_as_below() {
        let mut ids = IdAllocator::new();
        let (column, [a, b, _]) = abc(&mut ids);

        let nested = resolve_drop(&column, &a, &b, DropPosition::NestedFirst);
        let below = resolve_drop(&column, &a, &b, DropPosition::Below);
        assert_eq!(nested, below);
    }

    #[test]
    fn test_nested_on_slotted_uses_first_enabled_slot() {
        let mut ids = IdAllocator::new();
        let scaffold = templates::scaffold(&mut ids).unwrap();
        let content = scaffold.slot("content").unwrap().group.clone();
        let fresh = templates::text(&mut ids, "Body").unwrap();

        let drop = resolve_drop(&scaffold, &fresh, &scaffold, DropPosition::NestedLast).unwrap();
        assert_eq!(drop.parent, content);
        assert_eq!(drop.index, 0);
    }

    #[test]
    fn test_root_without_parent_nests() {
        let mut ids = IdAllocator::new();
        let (column, [a, ..]) = abc(&mut ids);
        let fresh = templates::text(&mut ids, "Top").unwrap();

        let above = resolve_drop(&column, &fresh, &column, DropPosition::Above).unwrap();
        assert_eq!(above.index, 0);
        let below = resolve_drop(&column, &fresh, &column, DropPosition::Below).unwrap();
        assert_eq!(below.index, 3);

        // A leaf root has nowhere to take siblings
        assert!(resolve_drop(&a, &fresh, &a, DropPosition::Above).is_none());
    }

    #[test]
    fn test_drop_onto_self_or_descendant_is_rejected() {
        let mut ids = IdAllocator::new();
        let (inner, [a, ..]) = abc(&mut ids);
        let column = templates::column(&mut ids)
            .unwrap()
            .with_children(vec![inner.clone()]);

        assert!(resolve_drop(&column, &inner, &inner, DropPosition::Below).is_none());
        assert!(resolve_drop(&column, &inner, &a, DropPosition::NestedLast).is_none());
        assert!(drop_action("t", &column, &inner, &a, DropPosition::Above).is_none());
    }
}
