//! Project aggregate: a theme and an ordered list of named trees.

use crate::component::Component;
use crate::error::{IdError, ModelResult};
use crate::id_generator::{compare_ids, is_allocator_id, IdAllocator, DEFAULT_ID_WIDTH};
use crate::templates;
use crate::values::Theme;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TreeType {
    /// Entry point of the prototype
    Screen,
    /// Reusable fragment referenced through `Custom` nodes
    Component,
}

/// A named root component
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tree {
    pub id: String,
    pub name: String,
    pub tree_type: TreeType,
    pub root: Component,
}

impl Tree {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        tree_type: TreeType,
        root: Component,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            tree_type,
            root,
        }
    }

    pub fn with_root(&self, root: Component) -> Tree {
        Tree {
            root,
            ..self.clone()
        }
    }
}

/// Root aggregate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub name: String,
    pub trees: Vec<Tree>,
    #[serde(default)]
    pub theme: Theme,
}

impl Project {
    /// New project holding one empty `Main` screen
    pub fn new(name: impl Into<String>) -> Result<Self, IdError> {
        let mut ids = IdAllocator::new();
        let root = templates::column(&mut ids)?;
        let screen = Tree::new(ids.next_id()?, "Main", TreeType::Screen, root);

        Ok(Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.into(),
            trees: vec![screen],
            theme: Theme::default(),
        })
    }

    pub fn find_tree(&self, tree_id: &str) -> Option<&Tree> {
        self.trees.iter().find(|tree| tree.id == tree_id)
    }

    pub fn tree_index(&self, tree_id: &str) -> Option<usize> {
        self.trees.iter().position(|tree| tree.id == tree_id)
    }

    /// Copy of the project with one tree replaced (no-op for unknown ids)
    pub fn with_tree(&self, tree: Tree) -> Project {
        let mut project = self.clone();
        if let Some(slot) = project.trees.iter_mut().find(|t| t.id == tree.id) {
            *slot = tree;
        }
        project
    }

    pub fn screen_count(&self) -> usize {
        self.trees
            .iter()
            .filter(|tree| tree.tree_type == TreeType::Screen)
            .count()
    }

    pub fn component_trees(&self) -> impl Iterator<Item = &Tree> {
        self.trees
            .iter()
            .filter(|tree| tree.tree_type == TreeType::Component)
    }

    /// Find a node by id in any tree
    pub fn find_component(&self, id: &str) -> Option<(&Tree, &Component)> {
        self.trees.iter().find_map(|tree| {
            tree.root
                .flatten()
                .into_iter()
                .find(|node| node.id == id)
                .map(|node| (tree, node))
        })
    }

    /// Greatest allocator id used by any tree, node or modifier
    pub fn max_id(&self) -> Option<String> {
        let nodes = self.trees.iter().flat_map(|tree| tree.root.flatten());
        let mut max: Option<&str> = None;
        for tree in &self.trees {
            if is_allocator_id(&tree.id) {
                max = Some(greater(max, &tree.id));
            }
        }
        for node in nodes {
            let ids = std::iter::once(node.id.as_str())
                .chain(node.modifiers.iter().map(|m| m.id.as_str()));
            for id in ids.filter(|id| is_allocator_id(id)) {
                max = Some(greater(max, id));
            }
        }
        max.map(str::to_string)
    }

    /// Allocator continuing after every id already in the project
    pub fn allocator(&self) -> IdAllocator {
        match self.max_id() {
            Some(id) => IdAllocator::after(id),
            None => IdAllocator::with_width(DEFAULT_ID_WIDTH),
        }
    }

    pub fn to_json(&self) -> ModelResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> ModelResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

fn greater<'a>(current: Option<&'a str>, candidate: &'a str) -> &'a str {
    match current {
        Some(id) if compare_ids(id, candidate).is_ge() => id,
        _ => candidate,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modifier::{Modifier, ModifierKind};

    #[test]
    fn test_new_project_has_one_screen() {
        let project = Project::new("Demo").unwrap();
        assert_eq!(project.name, "Demo");
        assert_eq!(project.trees.len(), 1);
        assert_eq!(project.screen_count(), 1);
        assert_eq!(project.trees[0].root.name(), "Column");
    }

    #[test]
    fn test_allocator_continues_after_max_id() {
        let mut project = Project::new("Demo").unwrap();
        let mut ids = project.allocator();
        let mut text = templates::text(&mut ids, "Hi").unwrap();
        text.modifiers
            .push(Modifier::new("000000zz", ModifierKind::padding_all(4.0)));
        let root = project.trees[0].root.with_children(vec![text]);
        project.trees[0].root = root;

        assert_eq!(project.max_id().as_deref(), Some("000000zz"));
        let mut next = project.allocator();
        assert_eq!(next.next_id().unwrap(), "000000zA");
    }

    #[test]
    fn test_json_round_trip() {
        let mut project = Project::new("Demo").unwrap();
        let mut ids = project.allocator();
        let card = templates::box_layout(&mut ids).unwrap();
        project.trees.push(Tree::new(
            ids.next_id().unwrap(),
            "Card",
            TreeType::Component,
            card,
        ));

        let json = project.to_json().unwrap();
        let back = Project::from_json(&json).unwrap();
        assert_eq!(back, project);
        assert_eq!(back.component_trees().count(), 1);
    }
}
