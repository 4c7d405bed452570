//! # Document Handle
//!
//! A Document is one project file together with its editing state.
//! Documents can be:
//! - **Memory-backed**: Temporary, for testing or in-memory operations
//! - **File-backed**: Single-user editing with disk persistence
//!
//! ## Lifecycle
//!
//! ```text
//! Load → Edit → Undo/Redo → Save
//!   ↓      ↓         ↓        ↓
//! JSON  Actions   History   JSON
//! ```

use crate::actions::Action;
use crate::custom::{can_reference, creates_cycle};
use crate::undo_stack::UndoStack;
use crate::EditorError;
use protoform_common::CustomRefCollector;
use protoform_model::{Component, Project};
use std::path::PathBuf;
use tracing::{debug, info};

/// Editable project document
#[derive(Debug)]
pub struct Document {
    /// Path to the project file
    pub path: PathBuf,

    /// Current version number (increments on each change)
    pub version: u64,

    /// Backing storage strategy
    storage: DocumentStorage,

    /// Node the rendering side should highlight
    selected_id: Option<String>,
}

/// Storage backend for document
#[derive(Debug)]
pub enum DocumentStorage {
    /// In-memory only (for testing, temp docs)
    Memory { history: UndoStack },

    /// File-backed (single-user editing)
    File { history: UndoStack, dirty: bool },
}

/// Outcome of a change to the document
#[derive(Debug, Clone, PartialEq)]
pub struct ActionResult {
    /// New version number
    pub version: u64,
}

impl Document {
    /// Create document around a project (memory-backed)
    pub fn from_project(path: PathBuf, project: Project) -> Self {
        Self {
            path,
            version: 0,
            storage: DocumentStorage::Memory {
                history: UndoStack::new(project),
            },
            selected_id: None,
        }
    }

    /// Create document from JSON text (memory-backed)
    pub fn from_json(path: PathBuf, json: &str) -> Result<Self, EditorError> {
        let project = Project::from_json(json)?;
        Ok(Self::from_project(path, project))
    }

    /// Load document from file (file-backed)
    pub fn load(path: PathBuf) -> Result<Self, EditorError> {
        let source = std::fs::read_to_string(&path)?;
        let project = Project::from_json(&source)?;
        info!(path = %path.display(), trees = project.trees.len(), "Loaded project");

        Ok(Self {
            path,
            version: 0,
            storage: DocumentStorage::File {
                history: UndoStack::new(project),
                dirty: false,
            },
            selected_id: None,
        })
    }

    pub fn history(&self) -> &UndoStack {
        match &self.storage {
            DocumentStorage::Memory { history } => history,
            DocumentStorage::File { history, .. } => history,
        }
    }

    fn history_mut(&mut self) -> &mut UndoStack {
        match &mut self.storage {
            DocumentStorage::Memory { history } => history,
            DocumentStorage::File { history, .. } => history,
        }
    }

    pub fn project(&self) -> &Project {
        self.history().project()
    }

    /// Apply an action through the history.
    ///
    /// Any action that would leave a tree reaching itself through `Custom`
    /// references is rejected before anything changes. New insertions must
    /// also point at existing Component trees.
    pub fn apply(&mut self, action: Action) -> Result<ActionResult, EditorError> {
        match &action {
            Action::AddComponent {
                tree_id, component, ..
            } => self.check_references(tree_id, component, true)?,
            Action::UpdateComponent { tree_id, component }
            | Action::MoveComponent {
                tree_id, component, ..
            } => self.check_references(tree_id, component, false)?,
            Action::AddTree { tree, .. } => self.check_references(&tree.id, &tree.root, false)?,
            _ => {}
        }

        self.history_mut().apply(&action)?;
        self.touch();

        Ok(ActionResult {
            version: self.version,
        })
    }

    /// Undo the last step; `false` when there was nothing to undo
    pub fn undo(&mut self) -> Result<bool, EditorError> {
        let undone = self.history_mut().undo()?;
        if undone {
            self.touch();
        }
        Ok(undone)
    }

    /// Redo the last undone step; `false` when there was nothing to redo
    pub fn redo(&mut self) -> Result<bool, EditorError> {
        let redone = self.history_mut().redo()?;
        if redone {
            self.touch();
        }
        Ok(redone)
    }

    /// `strict` additionally requires every target to be a Component tree
    fn check_references(
        &self,
        host_tree_id: &str,
        component: &Component,
        strict: bool,
    ) -> Result<(), EditorError> {
        let project = self.project();
        for tree_id in CustomRefCollector::collect(component) {
            let allowed = if strict {
                can_reference(project, host_tree_id, &tree_id)
            } else {
                !creates_cycle(project, host_tree_id, &tree_id)
            };
            if !allowed {
                return Err(EditorError::CyclicReference {
                    host_tree_id: host_tree_id.to_string(),
                    tree_id,
                });
            }
        }
        Ok(())
    }

    fn touch(&mut self) {
        self.version += 1;
        if let DocumentStorage::File { dirty, .. } = &mut self.storage {
            *dirty = true;
        }
        // Selection does not survive the node it points at
        if let Some(id) = &self.selected_id {
            if self.project().find_component(id).is_none() {
                debug!(id = %id, "Clearing stale selection");
                self.selected_id = None;
            }
        }
    }

    pub fn select(&mut self, id: Option<String>) {
        self.selected_id = id;
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.selected_id.as_deref()
    }

    pub fn selected(&self) -> Option<&Component> {
        let id = self.selected_id.as_deref()?;
        self.project().find_component(id).map(|(_, node)| node)
    }

    /// Check if document has unsaved changes
    pub fn is_dirty(&self) -> bool {
        match &self.storage {
            DocumentStorage::File { dirty, .. } => *dirty,
            _ => false,
        }
    }

    /// Save document to disk (if file-backed)
    pub fn save(&mut self) -> Result<(), EditorError> {
        match &mut self.storage {
            DocumentStorage::File { history, dirty } => {
                std::fs::write(&self.path, history.project().to_json()?)?;
                *dirty = false;
                info!(path = %self.path.display(), "Saved project");
                Ok(())
            }
            _ => Err(EditorError::NotFileBacked),
        }
    }
}
