//! # Actions
//!
//! Reversible operations on a [`Project`]. An action never mutates its
//! input; [`Action::apply`] returns the next project together with the
//! action that takes it back.
//!
//! ## Inverse Semantics
//!
//! | Action            | Inverse                                            |
//! |-------------------|----------------------------------------------------|
//! | `UpdateName`      | `UpdateName` with the prior name                   |
//! | `UpdateTheme`     | `UpdateTheme` with the prior theme                 |
//! | `UpdateTreeName`  | `UpdateTreeName` with the prior name               |
//! | `AddComponent`    | `DeleteComponent` of the added node                |
//! | `DeleteComponent` | `AddComponent` at the captured parent and index    |
//! | `MoveComponent`   | `MoveComponent` back to the captured parent, index |
//! | `UpdateComponent` | `UpdateComponent` with the prior node              |
//! | `ExtractComponent`| `DeleteTree` restoring the replaced originals      |
//! | `DeleteTree`      | `AddTree` with the tree and the inlined references |
//! | `AddTree`         | `DeleteTree` restoring what the references covered |
//!
//! Captured parents are expressed as they look after the node left them, so
//! that matching by structural equality finds them in the edited tree.
//!
//! An action that leaves the project unchanged (unknown tree, absent node)
//! is its own inverse.

use crate::custom::{extract_to_custom, replace_custom_with};
use crate::edits::{contains, find_by_id, find_parent_and_index, insert, remove, update_by_id};
use protoform_model::{
    reassign_ids, Component, IdError, Project, Theme, Tree, TreeType,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Reversible project edits
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all_fields = "camelCase")]
pub enum Action {
    /// Move every occurrence of `target` into a new Component tree
    ExtractComponent {
        target: Component,
        tree_id: String,
        name: String,
    },

    /// Remove a tree, inlining the `Custom` nodes that referenced it
    DeleteTree {
        tree_id: String,
        replacements: Vec<Component>,
    },

    /// Re-insert a tree and the `Custom` nodes pointing at it
    AddTree {
        tree: Tree,
        index: usize,
        references: Vec<Component>,
    },

    UpdateTheme {
        theme: Theme,
    },

    UpdateName {
        name: String,
    },

    UpdateTreeName {
        tree_id: String,
        name: String,
    },

    /// Insert `component` into the first node equal to `parent`
    AddComponent {
        tree_id: String,
        component: Component,
        parent: Component,
        index: usize,
    },

    /// Remove `component`, then insert it into `parent` as matched after
    /// the removal
    MoveComponent {
        tree_id: String,
        component: Component,
        parent: Component,
        index: usize,
    },

    /// Replace the node carrying `component.id`
    UpdateComponent {
        tree_id: String,
        component: Component,
    },

    DeleteComponent {
        tree_id: String,
        component: Component,
    },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ActionError {
    #[error("Id allocation failed: {0}")]
    Id(#[from] IdError),
}

/// Outcome of [`Action::apply`]
#[derive(Debug, Clone, PartialEq)]
pub struct Applied {
    pub project: Project,
    pub inverse: Action,
}

impl Action {
    pub fn name(&self) -> &'static str {
        match self {
            Action::ExtractComponent { .. } => "ExtractComponent",
            Action::DeleteTree { .. } => "DeleteTree",
            Action::AddTree { .. } => "AddTree",
            Action::UpdateTheme { .. } => "UpdateTheme",
            Action::UpdateName { .. } => "UpdateName",
            Action::UpdateTreeName { .. } => "UpdateTreeName",
            Action::AddComponent { .. } => "AddComponent",
            Action::MoveComponent { .. } => "MoveComponent",
            Action::UpdateComponent { .. } => "UpdateComponent",
            Action::DeleteComponent { .. } => "DeleteComponent",
        }
    }

    /// The tree a tree-scoped action edits
    pub fn tree_id(&self) -> Option<&str> {
        match self {
            Action::UpdateTreeName { tree_id, .. }
            | Action::AddComponent { tree_id, .. }
            | Action::MoveComponent { tree_id, .. }
            | Action::UpdateComponent { tree_id, .. }
            | Action::DeleteComponent { tree_id, .. } => Some(tree_id),
            _ => None,
        }
    }

    /// Apply to `project`, producing the next project and the inverse
    pub fn apply(&self, project: &Project) -> Result<Applied, ActionError> {
        debug!(action = self.name(), tree_id = ?self.tree_id(), "Applying action");

        let applied = match self {
            Action::UpdateName { name } => {
                let mut next = project.clone();
                next.name = name.clone();
                Applied {
                    project: next,
                    inverse: Action::UpdateName {
                        name: project.name.clone(),
                    },
                }
            }

            Action::UpdateTheme { theme } => {
                let mut next = project.clone();
                next.theme = theme.clone();
                Applied {
                    project: next,
                    inverse: Action::UpdateTheme {
                        theme: project.theme.clone(),
                    },
                }
            }

            Action::UpdateTreeName { tree_id, name } => match project.find_tree(tree_id) {
                Some(tree) => Applied {
                    project: project.with_tree(Tree {
                        name: name.clone(),
                        ..tree.clone()
                    }),
                    inverse: Action::UpdateTreeName {
                        tree_id: tree_id.clone(),
                        name: tree.name.clone(),
                    },
                },
                None => self.unchanged(project),
            },

            Action::AddComponent {
                tree_id,
                component,
                parent,
                index,
            } => self.apply_add(project, tree_id, component, parent, *index),

            Action::DeleteComponent { tree_id, component } => {
                self.apply_delete(project, tree_id, component)
            }

            Action::MoveComponent {
                tree_id,
                component,
                parent,
                index,
            } => self.apply_move(project, tree_id, component, parent, *index),

            Action::UpdateComponent { tree_id, component } => {
                self.apply_update(project, tree_id, component)
            }

            Action::ExtractComponent {
                target,
                tree_id,
                name,
            } => self.apply_extract(project, target, tree_id, name)?,

            Action::DeleteTree {
                tree_id,
                replacements,
            } => self.apply_delete_tree(project, tree_id, replacements)?,

            Action::AddTree {
                tree,
                index,
                references,
            } => self.apply_add_tree(project, tree, *index, references),
        };

        Ok(applied)
    }

    fn unchanged(&self, project: &Project) -> Applied {
        debug!(action = self.name(), "Action left the project unchanged");
        Applied {
            project: project.clone(),
            inverse: self.clone(),
        }
    }

    fn apply_add(
        &self,
        project: &Project,
        tree_id: &str,
        component: &Component,
        parent: &Component,
        index: usize,
    ) -> Applied {
        let Some(tree) = project.find_tree(tree_id) else {
            return self.unchanged(project);
        };
        let root = insert(&tree.root, component, parent, index);
        if root == tree.root {
            return self.unchanged(project);
        }

        Applied {
            project: project.with_tree(tree.with_root(root)),
            inverse: Action::DeleteComponent {
                tree_id: tree_id.to_string(),
                component: component.clone(),
            },
        }
    }

    fn apply_delete(&self, project: &Project, tree_id: &str, component: &Component) -> Applied {
        let Some(tree) = project.find_tree(tree_id) else {
            return self.unchanged(project);
        };
        let Some((parent, index)) = find_parent_and_index(&tree.root, component) else {
            return self.unchanged(project);
        };

        let root = remove(&tree.root, component);
        let Some(parent_after) = find_by_id(&root, &parent.id).cloned() else {
            return self.unchanged(project);
        };

        Applied {
            project: project.with_tree(tree.with_root(root)),
            inverse: Action::AddComponent {
                tree_id: tree_id.to_string(),
                component: component.clone(),
                parent: parent_after,
                index,
            },
        }
    }

    fn apply_move(
        &self,
        project: &Project,
        tree_id: &str,
        component: &Component,
        parent: &Component,
        index: usize,
    ) -> Applied {
        let Some(tree) = project.find_tree(tree_id) else {
            return self.unchanged(project);
        };
        let Some((old_parent, old_index)) = find_parent_and_index(&tree.root, component) else {
            return self.unchanged(project);
        };
        // A node cannot become its own descendant
        if contains(component, parent) {
            return self.unchanged(project);
        }

        let removed = remove(&tree.root, component);
        let Some(old_parent_after) = find_by_id(&removed, &old_parent.id).cloned() else {
            return self.unchanged(project);
        };
        let root = insert(&removed, component, parent, index);
        if root == removed {
            return self.unchanged(project);
        }

        Applied {
            project: project.with_tree(tree.with_root(root)),
            inverse: Action::MoveComponent {
                tree_id: tree_id.to_string(),
                component: component.clone(),
                parent: old_parent_after,
                index: old_index,
            },
        }
    }

    fn apply_update(&self, project: &Project, tree_id: &str, component: &Component) -> Applied {
        let Some(tree) = project.find_tree(tree_id) else {
            return self.unchanged(project);
        };
        let Some(prior) = find_by_id(&tree.root, &component.id).cloned() else {
            return self.unchanged(project);
        };

        Applied {
            project: project.with_tree(tree.with_root(update_by_id(&tree.root, component))),
            inverse: Action::UpdateComponent {
                tree_id: tree_id.to_string(),
                component: prior,
            },
        }
    }

    fn apply_extract(
        &self,
        project: &Project,
        target: &Component,
        tree_id: &str,
        name: &str,
    ) -> Result<Applied, ActionError> {
        if project.find_tree(tree_id).is_some() {
            return Ok(self.unchanged(project));
        }

        let mut next = project.clone();
        let mut originals = Vec::new();
        for tree in &mut next.trees {
            let (root, mut replaced) = extract_to_custom(&tree.root, target, tree_id);
            tree.root = root;
            originals.append(&mut replaced);
        }
        if originals.is_empty() {
            return Ok(self.unchanged(project));
        }

        let mut ids = project.allocator();
        let content = reassign_ids(target, &mut ids)?;
        next.trees
            .push(Tree::new(tree_id, name, TreeType::Component, content));

        debug!(tree_id, occurrences = originals.len(), "Extracted component");
        Ok(Applied {
            project: next,
            inverse: Action::DeleteTree {
                tree_id: tree_id.to_string(),
                replacements: originals,
            },
        })
    }

    fn apply_delete_tree(
        &self,
        project: &Project,
        tree_id: &str,
        replacements: &[Component],
    ) -> Result<Applied, ActionError> {
        let Some(index) = project.tree_index(tree_id) else {
            return Ok(self.unchanged(project));
        };

        // Fresh ids for fallback copies come after everything, the deleted
        // tree included
        let mut ids = project.allocator();
        let mut next = project.clone();
        let deleted = next.trees.remove(index);

        let mut references = Vec::new();
        for tree in &mut next.trees {
            let (root, mut replaced) =
                replace_custom_with(&tree.root, tree_id, replacements, &deleted.root, &mut ids)?;
            tree.root = root;
            references.append(&mut replaced);
        }

        debug!(tree_id, inlined = references.len(), "Deleted tree");
        Ok(Applied {
            project: next,
            inverse: Action::AddTree {
                tree: deleted,
                index,
                references,
            },
        })
    }

    fn apply_add_tree(
        &self,
        project: &Project,
        tree: &Tree,
        index: usize,
        references: &[Component],
    ) -> Applied {
        if project.find_tree(&tree.id).is_some() {
            return self.unchanged(project);
        }

        let mut next = project.clone();
        next.trees.insert(index.min(next.trees.len()), tree.clone());

        let mut covered = Vec::with_capacity(references.len());
        for reference in references {
            let Some((_, current)) = next.find_component(&reference.id) else {
                debug!(id = %reference.id, "Reference target not found");
                continue;
            };
            let mut restored = current.clone();
            // Inlining prepended the reference's modifiers; deleting again
            // will prepend them once more
            if restored.modifiers.starts_with(&reference.modifiers) {
                restored.modifiers.drain(..reference.modifiers.len());
            }
            covered.push(restored);

            for host in &mut next.trees {
                host.root = update_by_id(&host.root, reference);
            }
        }

        Applied {
            project: next,
            inverse: Action::DeleteTree {
                tree_id: tree.id.clone(),
                replacements: covered,
            },
        }
    }
}
