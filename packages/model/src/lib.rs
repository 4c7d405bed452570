//! # Protoform Model
//!
//! Data model of a layout prototype: value types, the recursive component
//! tree, the project aggregate and the identifier allocator.
//!
//! ```text
//! Project ─┬─ Theme
//!          └─ Tree* ── root: Component
//!                         ├─ Leaf     (Text, Icon, Spacer)
//!                         ├─ Group    (Row, Column, Box) ── children
//!                         ├─ Slotted  (TopAppBar, Scaffold, Button) ── Slot* ── Group
//!                         └─ Custom   ── tree_id → Tree
//! ```

pub mod component;
pub mod error;
pub mod id_generator;
pub mod modifier;
pub mod project;
pub mod templates;
pub mod values;

pub use component::{
    Category, Component, ComponentKind, CustomRef, Group, GroupLayout, Icon, Slot, SlotSpec,
    Slotted, SlottedVariant, Text,
};
pub use error::{IdError, ModelError, ModelResult};
pub use id_generator::{compare_ids, id_count, reassign_ids, IdAllocator};
pub use modifier::{Modifier, ModifierKind};
pub use project::{Project, Tree, TreeType};
pub use values::{
    Alignment, Argb, Arrangement, Color, ColorScheme, HorizontalAlignment, Shape, TextStyle,
    Theme, VerticalAlignment,
};
