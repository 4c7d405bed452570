use protoform_model::{Component, ComponentKind, CustomRef, Modifier, Project, Slot, Tree};

/// Visitor pattern for traversing projects and component trees immutably
///
/// This trait provides default implementations that walk the entire tree in
/// pre-order, descending into every slot whether enabled or not.
/// Override specific visit_* methods to perform custom actions on nodes.
pub trait Visitor: Sized {
    fn visit_project(&mut self, project: &Project) {
        walk_project(self, project);
    }

    fn visit_tree(&mut self, tree: &Tree) {
        walk_tree(self, tree);
    }

    fn visit_component(&mut self, component: &Component) {
        walk_component(self, component);
    }

    fn visit_slot(&mut self, slot: &Slot) {
        walk_slot(self, slot);
    }

    fn visit_modifier(&mut self, _modifier: &Modifier) {
        // Leaf node, no children to walk
    }

    fn visit_custom_ref(&mut self, _custom: &CustomRef) {
        // Leaf node, no children to walk
    }
}

// Default walk implementations

pub fn walk_project<V: Visitor>(visitor: &mut V, project: &Project) {
    for tree in &project.trees {
        visitor.visit_tree(tree);
    }
}

pub fn walk_tree<V: Visitor>(visitor: &mut V, tree: &Tree) {
    visitor.visit_component(&tree.root);
}

pub fn walk_component<V: Visitor>(visitor: &mut V, component: &Component) {
    for modifier in &component.modifiers {
        visitor.visit_modifier(modifier);
    }

    match &component.kind {
        ComponentKind::Group(group) => {
            for child in &group.children {
                visitor.visit_component(child);
            }
        }
        ComponentKind::Slotted(slotted) => {
            for slot in &slotted.slots {
                visitor.visit_slot(slot);
            }
        }
        ComponentKind::Custom(custom) => {
            visitor.visit_custom_ref(custom);
        }
        ComponentKind::Text(_) | ComponentKind::Icon(_) | ComponentKind::Spacer => {
            // Leaf nodes
        }
    }
}

pub fn walk_slot<V: Visitor>(visitor: &mut V, slot: &Slot) {
    visitor.visit_component(&slot.group);
}

/// Collects the tree ids referenced by `Custom` nodes, in first-seen order
#[derive(Debug, Default)]
pub struct CustomRefCollector {
    pub tree_ids: Vec<String>,
}

impl CustomRefCollector {
    pub fn collect(component: &Component) -> Vec<String> {
        let mut collector = Self::default();
        collector.visit_component(component);
        collector.tree_ids
    }
}

impl Visitor for CustomRefCollector {
    fn visit_custom_ref(&mut self, custom: &CustomRef) {
        if !self.tree_ids.contains(&custom.tree_id) {
            self.tree_ids.push(custom.tree_id.clone());
        }
    }
}
