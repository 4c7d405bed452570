//! # Component Tree
//!
//! The recursive node type of a layout. A node is one of four categories:
//!
//! - **Leaf**: `Text`, `Icon`, `Spacer`. Value properties only.
//! - **Group**: `Row`, `Column`, `Box`. An ordered list of children.
//! - **Slotted**: `TopAppBar`, `Scaffold`, `Button`. A fixed, named set of
//!   slots, each wrapping one Group.
//! - **Custom**: a reference to another tree of the same project.
//!
//! Nodes are plain values. Structural edits never mutate a node in place;
//! they rebuild it through [`Component::with_children`] or
//! [`Component::with_slots`], which keep the node's id, modifiers and value
//! properties.

use crate::error::{ModelError, ModelResult};
use crate::modifier::Modifier;
use crate::values::{
    Alignment, Arrangement, Color, HorizontalAlignment, TextStyle, VerticalAlignment,
};
use serde::{Deserialize, Serialize};

/// A node of the layout tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Component {
    pub id: String,
    #[serde(default)]
    pub modifiers: Vec<Modifier>,
    pub kind: ComponentKind,
}

/// Closed set of node variants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ComponentKind {
    Text(Text),
    Icon(Icon),
    Spacer,
    Group(Group),
    Slotted(Slotted),
    Custom(CustomRef),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Text {
    pub text: String,
    #[serde(default)]
    pub color: Color,
    #[serde(default)]
    pub style: TextStyle,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Icon {
    /// Material icon name, e.g. `Favorite`
    pub icon: String,
    #[serde(default)]
    pub tint: Color,
    #[serde(default)]
    pub content_description: Option<String>,
}

/// A container with an ordered child list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Group {
    pub layout: GroupLayout,
    #[serde(default)]
    pub children: Vec<Component>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GroupLayout {
    Row {
        #[serde(default)]
        arrangement: Arrangement,
        #[serde(default)]
        alignment: VerticalAlignment,
    },
    Column {
        #[serde(default)]
        arrangement: Arrangement,
        #[serde(default)]
        alignment: HorizontalAlignment,
    },
    Box {
        #[serde(default)]
        alignment: Alignment,
    },
}

impl GroupLayout {
    pub fn name(&self) -> &'static str {
        match self {
            GroupLayout::Row { .. } => "Row",
            GroupLayout::Column { .. } => "Column",
            GroupLayout::Box { .. } => "Box",
        }
    }
}

/// A node with named slots
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slotted {
    pub variant: SlottedVariant,
    pub slots: Vec<Slot>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all_fields = "camelCase")]
pub enum SlottedVariant {
    TopAppBar {
        #[serde(default)]
        container_color: Color,
    },
    Scaffold {
        #[serde(default)]
        container_color: Color,
    },
    Button {
        enabled: bool,
    },
}

/// Name and optionality of one slot of a slotted variant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotSpec {
    pub name: &'static str,
    pub optional: bool,
}

const TOP_APP_BAR_SLOTS: &[SlotSpec] = &[
    SlotSpec { name: "navigationIcon", optional: true },
    SlotSpec { name: "actions", optional: true },
    SlotSpec { name: "title", optional: false },
];

const SCAFFOLD_SLOTS: &[SlotSpec] = &[
    SlotSpec { name: "topBar", optional: true },
    SlotSpec { name: "bottomBar", optional: true },
    SlotSpec { name: "floatingActionButton", optional: true },
    SlotSpec { name: "drawerContent", optional: true },
    SlotSpec { name: "content", optional: false },
];

const BUTTON_SLOTS: &[SlotSpec] = &[SlotSpec { name: "content", optional: false }];

impl SlottedVariant {
    pub fn name(&self) -> &'static str {
        match self {
            SlottedVariant::TopAppBar { .. } => "TopAppBar",
            SlottedVariant::Scaffold { .. } => "Scaffold",
            SlottedVariant::Button { .. } => "Button",
        }
    }

    /// The fixed slot set of this variant. The required content slot is last.
    pub fn slot_specs(&self) -> &'static [SlotSpec] {
        match self {
            SlottedVariant::TopAppBar { .. } => TOP_APP_BAR_SLOTS,
            SlottedVariant::Scaffold { .. } => SCAFFOLD_SLOTS,
            SlottedVariant::Button { .. } => BUTTON_SLOTS,
        }
    }
}

/// A named, enable-able container inside a slotted node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slot {
    pub name: String,
    pub enabled: bool,
    pub optional: bool,
    /// Always a Group node
    pub group: Component,
}

impl Slot {
    /// Children of the wrapped group.
    ///
    /// # Panics
    ///
    /// Panics when the slot wraps something other than a Group, which means
    /// the tree was built without going through the slot constructors.
    pub fn children(&self) -> &[Component] {
        match &self.group.kind {
            ComponentKind::Group(group) => &group.children,
            other => panic!(
                "slot `{}` must wrap a group, found {}",
                self.name,
                other.name()
            ),
        }
    }
}

/// Reference to another tree of the same project
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomRef {
    pub tree_id: String,
}

/// Coarse node category used by the edit engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Leaf,
    Group,
    Slotted,
    Custom,
}

impl ComponentKind {
    pub fn name(&self) -> &'static str {
        match self {
            ComponentKind::Text(_) => "Text",
            ComponentKind::Icon(_) => "Icon",
            ComponentKind::Spacer => "Spacer",
            ComponentKind::Group(group) => group.layout.name(),
            ComponentKind::Slotted(slotted) => slotted.variant.name(),
            ComponentKind::Custom(_) => "Custom",
        }
    }

    pub fn category(&self) -> Category {
        match self {
            ComponentKind::Text(_) | ComponentKind::Icon(_) | ComponentKind::Spacer => {
                Category::Leaf
            }
            ComponentKind::Group(_) => Category::Group,
            ComponentKind::Slotted(_) => Category::Slotted,
            ComponentKind::Custom(_) => Category::Custom,
        }
    }

    pub fn children_mut(&mut self) -> Option<&mut Vec<Component>> {
        match self {
            ComponentKind::Group(group) => Some(&mut group.children),
            _ => None,
        }
    }

    pub fn slots_mut(&mut self) -> Option<&mut Vec<Slot>> {
        match self {
            ComponentKind::Slotted(slotted) => Some(&mut slotted.slots),
            _ => None,
        }
    }
}

impl Component {
    pub fn new(id: impl Into<String>, kind: ComponentKind) -> Self {
        Self {
            id: id.into(),
            modifiers: Vec::new(),
            kind,
        }
    }

    pub fn with_modifiers(mut self, modifiers: Vec<Modifier>) -> Self {
        self.modifiers = modifiers;
        self
    }

    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    pub fn category(&self) -> Category {
        self.kind.category()
    }

    pub fn is_group(&self) -> bool {
        self.category() == Category::Group
    }

    pub fn children(&self) -> Option<&[Component]> {
        match &self.kind {
            ComponentKind::Group(group) => Some(&group.children),
            _ => None,
        }
    }

    pub fn slots(&self) -> Option<&[Slot]> {
        match &self.kind {
            ComponentKind::Slotted(slotted) => Some(&slotted.slots),
            _ => None,
        }
    }

    pub fn slot(&self, name: &str) -> Option<&Slot> {
        self.slots()?.iter().find(|slot| slot.name == name)
    }

    /// Rebuild this group with new children.
    ///
    /// # Panics
    ///
    /// Panics when called on anything but a Group.
    pub fn with_children(&self, children: Vec<Component>) -> Component {
        match &self.kind {
            ComponentKind::Group(group) => Component {
                id: self.id.clone(),
                modifiers: self.modifiers.clone(),
                kind: ComponentKind::Group(Group {
                    layout: group.layout.clone(),
                    children,
                }),
            },
            other => panic!("with_children called on {} {}", other.name(), self.id),
        }
    }

    /// Rebuild this slotted node with new slot content.
    ///
    /// # Panics
    ///
    /// Panics when called on anything but a Slotted node.
    pub fn with_slots(&self, slots: Vec<Slot>) -> Component {
        match &self.kind {
            ComponentKind::Slotted(slotted) => Component {
                id: self.id.clone(),
                modifiers: self.modifiers.clone(),
                kind: ComponentKind::Slotted(Slotted {
                    variant: slotted.variant.clone(),
                    slots,
                }),
            },
            other => panic!("with_slots called on {} {}", other.name(), self.id),
        }
    }

    /// Whether the node holds any child content, directly or in a slot
    pub fn has_content(&self) -> bool {
        match &self.kind {
            ComponentKind::Group(group) => !group.children.is_empty(),
            ComponentKind::Slotted(slotted) => {
                slotted.slots.iter().any(|slot| !slot.children().is_empty())
            }
            _ => false,
        }
    }

    /// Direct child content, flattened across slots in slot order
    pub fn content_children(&self) -> Vec<Component> {
        match &self.kind {
            ComponentKind::Group(group) => group.children.clone(),
            ComponentKind::Slotted(slotted) => slotted
                .slots
                .iter()
                .flat_map(|slot| slot.children().iter().cloned())
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Every node of the subtree in pre-order, descending into every slot
    pub fn flatten(&self) -> Vec<&Component> {
        let mut nodes = Vec::new();
        self.collect_nodes(&mut nodes);
        nodes
    }

    fn collect_nodes<'a>(&'a self, nodes: &mut Vec<&'a Component>) {
        nodes.push(self);
        match &self.kind {
            ComponentKind::Group(group) => {
                for child in &group.children {
                    child.collect_nodes(nodes);
                }
            }
            ComponentKind::Slotted(slotted) => {
                for slot in &slotted.slots {
                    slot.group.collect_nodes(nodes);
                }
            }
            _ => {}
        }
    }

    pub fn node_count(&self) -> usize {
        self.flatten().len()
    }

    /// Structural equality that ignores node and modifier ids
    pub fn same_content(&self, other: &Component) -> bool {
        let modifiers_match = self.modifiers.len() == other.modifiers.len()
            && self
                .modifiers
                .iter()
                .zip(&other.modifiers)
                .all(|(a, b)| a.kind == b.kind);
        if !modifiers_match {
            return false;
        }

        match (&self.kind, &other.kind) {
            (ComponentKind::Group(a), ComponentKind::Group(b)) => {
                a.layout == b.layout
                    && a.children.len() == b.children.len()
                    && a.children
                        .iter()
                        .zip(&b.children)
                        .all(|(x, y)| x.same_content(y))
            }
            (ComponentKind::Slotted(a), ComponentKind::Slotted(b)) => {
                a.variant == b.variant
                    && a.slots.len() == b.slots.len()
                    && a.slots.iter().zip(&b.slots).all(|(x, y)| {
                        x.name == y.name
                            && x.enabled == y.enabled
                            && x.optional == y.optional
                            && x.group.same_content(&y.group)
                    })
            }
            (a, b) => a == b,
        }
    }

    /// Toggle a slot. Required slots cannot be disabled.
    pub fn set_slot_enabled(&self, name: &str, enabled: bool) -> ModelResult<Component> {
        let slots = self
            .slots()
            .ok_or_else(|| ModelError::NotSlotted(self.id.clone()))?;
        let slot = slots
            .iter()
            .find(|slot| slot.name == name)
            .ok_or_else(|| ModelError::UnknownSlot(name.to_string()))?;
        if !slot.optional && !enabled {
            return Err(ModelError::RequiredSlot(name.to_string()));
        }

        let slots = slots
            .iter()
            .map(|slot| {
                if slot.name == name {
                    Slot {
                        enabled,
                        ..slot.clone()
                    }
                } else {
                    slot.clone()
                }
            })
            .collect();
        Ok(self.with_slots(slots))
    }
}
