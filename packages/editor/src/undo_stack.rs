//! # Undo/Redo Stack
//!
//! Owns the current [`Project`] and the history that leads to it.
//!
//! ## Design
//!
//! - Each action yields its inverse while being applied
//! - Undo applies the inverses and keeps their own inverses for redo
//! - Redo reapplies those and records fresh inverses for the next undo
//! - New actions clear the redo stack
//! - Supports batched operations (group multiple actions as one undo step)
//! - Undo and redo are atomic: a failing step leaves project and stacks
//!   untouched
//!
//! ## Example
//!
//! ```rust,ignore
//! let mut history = UndoStack::new(Project::new("Demo")?);
//!
//! history.apply(&Action::UpdateName { name: "Renamed".into() })?;
//! history.undo()?;
//! history.redo()?;
//! ```

use crate::actions::{Action, ActionError};
use protoform_model::Project;
use tracing::debug;

/// One undo step
#[derive(Debug, Clone)]
pub struct HistoryEntry {
    /// Actions replayed by redo (in application order)
    pub actions: Vec<Action>,

    /// Actions replayed by undo (in application order, i.e. reversed)
    pub inverses: Vec<Action>,

    /// Optional description of this step
    pub description: Option<String>,
}

impl HistoryEntry {
    /// Create a single-action entry
    pub fn single(action: Action, inverse: Action) -> Self {
        Self {
            actions: vec![action],
            inverses: vec![inverse],
            description: None,
        }
    }

    /// Add a description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Undo depth of [`UndoStack::new`]
pub const DEFAULT_MAX_LEVELS: usize = 100;

/// Version history of a project
#[derive(Debug)]
pub struct UndoStack {
    project: Project,

    /// Applied steps (most recent last)
    undo_stack: Vec<HistoryEntry>,

    /// Undone steps (most recent last)
    redo_stack: Vec<HistoryEntry>,

    /// Maximum number of undo levels (0 = unlimited)
    max_levels: usize,

    /// Currently building a batch
    current_batch: Option<HistoryEntry>,
}

impl UndoStack {
    /// Create a history keeping the last [`DEFAULT_MAX_LEVELS`] steps
    pub fn new(project: Project) -> Self {
        Self::with_max_levels(project, DEFAULT_MAX_LEVELS)
    }

    /// Create a history with custom max levels
    pub fn with_max_levels(project: Project, max_levels: usize) -> Self {
        Self {
            project,
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            max_levels,
            current_batch: None,
        }
    }

    pub fn project(&self) -> &Project {
        &self.project
    }

    pub fn into_project(self) -> Project {
        self.project
    }

    /// Apply an action and record it for undo
    pub fn apply(&mut self, action: &Action) -> Result<&Project, ActionError> {
        let applied = action.apply(&self.project)?;
        self.project = applied.project;

        if let Some(batch) = &mut self.current_batch {
            batch.actions.push(action.clone());
            batch.inverses.insert(0, applied.inverse); // Inverses go in reverse order
        } else {
            self.push_entry(HistoryEntry::single(action.clone(), applied.inverse));
        }

        // New action invalidates the future
        self.redo_stack.clear();

        Ok(&self.project)
    }

    /// Start a batch of actions (will be undone/redone together)
    pub fn begin_batch(&mut self) {
        self.current_batch = Some(HistoryEntry {
            actions: Vec::new(),
            inverses: Vec::new(),
            description: None,
        });
    }

    /// End the current batch and push to undo stack
    pub fn end_batch(&mut self) {
        if let Some(batch) = self.current_batch.take() {
            if !batch.actions.is_empty() {
                self.push_entry(batch);
            }
        }
    }

    /// Set description for current batch (if batching)
    pub fn set_batch_description(&mut self, description: impl Into<String>) {
        if let Some(batch) = &mut self.current_batch {
            batch.description = Some(description.into());
        }
    }

    fn push_entry(&mut self, entry: HistoryEntry) {
        self.undo_stack.push(entry);

        // Trim if exceeded max levels
        if self.max_levels > 0 && self.undo_stack.len() > self.max_levels {
            let dropped = self.undo_stack.remove(0);
            debug!(
                max_levels = self.max_levels,
                actions = dropped.actions.len(),
                "Dropped oldest history entry"
            );
        }
    }

    /// Undo the most recent step
    pub fn undo(&mut self) -> Result<bool, ActionError> {
        self.end_batch();
        let Some(entry) = self.undo_stack.last() else {
            return Ok(false); // Nothing to undo
        };

        let (project, actions) = replay(&self.project, &entry.inverses)?;
        debug!(steps = entry.inverses.len(), "Undo");

        if let Some(entry) = self.undo_stack.pop() {
            self.project = project;
            self.redo_stack.push(HistoryEntry {
                actions,
                inverses: entry.inverses,
                description: entry.description,
            });
        }
        Ok(true)
    }

    /// Redo the most recently undone step
    pub fn redo(&mut self) -> Result<bool, ActionError> {
        self.end_batch();
        let Some(entry) = self.redo_stack.last() else {
            return Ok(false); // Nothing to redo
        };

        let (project, inverses) = replay(&self.project, &entry.actions)?;
        debug!(steps = entry.actions.len(), "Redo");

        if let Some(entry) = self.redo_stack.pop() {
            self.project = project;
            self.undo_stack.push(HistoryEntry {
                actions: entry.actions,
                inverses,
                description: entry.description,
            });
        }
        Ok(true)
    }

    /// Check if undo is available
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Check if redo is available
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Get the number of undo levels available
    pub fn undo_levels(&self) -> usize {
        self.undo_stack.len()
    }

    /// Get the number of redo levels available
    pub fn redo_levels(&self) -> usize {
        self.redo_stack.len()
    }

    /// Clear all undo/redo history, keeping the current project
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
        self.current_batch = None;
    }

    /// Get description of the next undo operation
    pub fn undo_description(&self) -> Option<&str> {
        self.undo_stack
            .last()
            .and_then(|entry| entry.description.as_deref())
    }

    /// Get description of the next redo operation
    pub fn redo_description(&self) -> Option<&str> {
        self.redo_stack
            .last()
            .and_then(|entry| entry.description.as_deref())
    }
}

/// Apply `actions` in order on a copy of `project`. Returns the result and
/// the inverses in the order that reverts it.
fn replay(project: &Project, actions: &[Action]) -> Result<(Project, Vec<Action>), ActionError> {
    let mut current = project.clone();
    let mut inverses = Vec::with_capacity(actions.len());
    for action in actions {
        let applied = action.apply(&current)?;
        current = applied.project;
        inverses.push(applied.inverse);
    }
    inverses.reverse();
    Ok((current, inverses))
}
