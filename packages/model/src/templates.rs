//! Default instances of every component variant.
//!
//! Each constructor draws ids from the given allocator, so freshly added
//! nodes never collide with the project they are added to.

use crate::component::{
    Component, ComponentKind, CustomRef, Group, GroupLayout, Icon, Slot, Slotted, SlottedVariant,
    Text,
};
use crate::error::IdError;
use crate::id_generator::IdAllocator;
use crate::values::{Alignment, Arrangement, Color, HorizontalAlignment, TextStyle, VerticalAlignment};

pub fn text(ids: &mut IdAllocator, text: impl Into<String>) -> Result<Component, IdError> {
    Ok(Component::new(
        ids.next_id()?,
        ComponentKind::Text(Text {
            text: text.into(),
            color: Color::Unspecified,
            style: TextStyle::BodyLarge,
        }),
    ))
}

pub fn icon(ids: &mut IdAllocator, name: impl Into<String>) -> Result<Component, IdError> {
    Ok(Component::new(
        ids.next_id()?,
        ComponentKind::Icon(Icon {
            icon: name.into(),
            tint: Color::Unspecified,
            content_description: None,
        }),
    ))
}

pub fn spacer(ids: &mut IdAllocator) -> Result<Component, IdError> {
    Ok(Component::new(ids.next_id()?, ComponentKind::Spacer))
}

fn group(ids: &mut IdAllocator, layout: GroupLayout) -> Result<Component, IdError> {
    Ok(Component::new(
        ids.next_id()?,
        ComponentKind::Group(Group {
            layout,
            children: Vec::new(),
        }),
    ))
}

pub fn row(ids: &mut IdAllocator) -> Result<Component, IdError> {
    group(
        ids,
        GroupLayout::Row {
            arrangement: Arrangement::Start,
            alignment: VerticalAlignment::Top,
        },
    )
}

pub fn column(ids: &mut IdAllocator) -> Result<Component, IdError> {
    group(
        ids,
        GroupLayout::Column {
            arrangement: Arrangement::Start,
            alignment: HorizontalAlignment::Start,
        },
    )
}

pub fn box_layout(ids: &mut IdAllocator) -> Result<Component, IdError> {
    group(
        ids,
        GroupLayout::Box {
            alignment: Alignment::TopStart,
        },
    )
}

/// Build a slotted node with one empty Box per slot. Optional slots start
/// disabled, required slots enabled.
pub fn slotted(ids: &mut IdAllocator, variant: SlottedVariant) -> Result<Component, IdError> {
    let id = ids.next_id()?;
    let mut slots = Vec::new();
    for spec in variant.slot_specs() {
        slots.push(Slot {
            name: spec.name.to_string(),
            enabled: !spec.optional,
            optional: spec.optional,
            group: box_layout(ids)?,
        });
    }

    Ok(Component::new(
        id,
        ComponentKind::Slotted(Slotted { variant, slots }),
    ))
}

pub fn top_app_bar(ids: &mut IdAllocator) -> Result<Component, IdError> {
    slotted(
        ids,
        SlottedVariant::TopAppBar {
            container_color: Color::Unspecified,
        },
    )
}

pub fn scaffold(ids: &mut IdAllocator) -> Result<Component, IdError> {
    slotted(
        ids,
        SlottedVariant::Scaffold {
            container_color: Color::Unspecified,
        },
    )
}

pub fn button(ids: &mut IdAllocator) -> Result<Component, IdError> {
    slotted(ids, SlottedVariant::Button { enabled: true })
}

pub fn custom(ids: &mut IdAllocator, tree_id: impl Into<String>) -> Result<Component, IdError> {
    Ok(Component::new(
        ids.next_id()?,
        ComponentKind::Custom(CustomRef {
            tree_id: tree_id.into(),
        }),
    ))
}
