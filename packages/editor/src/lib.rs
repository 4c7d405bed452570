//! # Protoform Editor
//!
//! Editing engine for layout prototypes.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ model: Project, Tree, Component, ids        │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ editor                                      │
//! │  - edits: pure tree edits (insert/remove)   │
//! │  - custom: extract / inline reusable trees  │
//! │  - actions: reversible project edits        │
//! │  - undo_stack: version history              │
//! │  - drop: drag-and-drop resolution           │
//! │  - document: load/save + history            │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ compiler: Project → Kotlin source           │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core Principles
//!
//! 1. **Values, not handles**: every edit returns a new root; the previous
//!    project stays valid for readers
//! 2. **Total edits**: a missing target is a no-op, never an error
//! 3. **Inverse at apply time**: each action reports what undoes it, so
//!    history never has to diff projects
//!
//! ## Usage
//!
//! ```rust,ignore
//! use protoform_editor::{Action, Document};
//!
//! let mut doc = Document::load("demo.project.json".into())?;
//! doc.apply(Action::UpdateName { name: "Checkout".into() })?;
//! doc.undo()?;
//! doc.save()?;
//! ```

pub mod actions;
pub mod custom;
mod document;
pub mod drop;
pub mod edits;
mod errors;
pub mod replace_base;
mod undo_stack;

pub use actions::{Action, ActionError, Applied};
pub use custom::{
    can_reference, contains_custom_component, creates_cycle, extract_to_custom, replace_custom_with,
};
pub use document::{ActionResult, Document, DocumentStorage};
pub use drop::{drop_action, resolve_drop, DropPosition, DropTarget};
pub use edits::{find_by_id, find_modifier_by_id, find_parent_and_index, insert, remove, update_by_id};
pub use errors::EditorError;
pub use replace_base::{fit_slots, replace_base};
pub use undo_stack::{HistoryEntry, UndoStack, DEFAULT_MAX_LEVELS};
