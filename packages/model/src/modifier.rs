use crate::values::{Color, Shape};
use serde::{Deserialize, Serialize};

/// A decorator applied to a component (padding, size, border, ...).
///
/// Modifiers carry their own id so property panels can target one entry
/// of a chain without rewriting the rest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Modifier {
    pub id: String,
    pub kind: ModifierKind,
}

impl Modifier {
    pub fn new(id: impl Into<String>, kind: ModifierKind) -> Self {
        Self {
            id: id.into(),
            kind,
        }
    }
}

/// Modifier payloads. Lengths are in dp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ModifierKind {
    Padding {
        start: f32,
        top: f32,
        end: f32,
        bottom: f32,
    },
    Size {
        width: f32,
        height: f32,
    },
    Width {
        width: f32,
    },
    Height {
        height: f32,
    },
    FillMaxWidth {
        fraction: f32,
    },
    FillMaxHeight {
        fraction: f32,
    },
    FillMaxSize {
        fraction: f32,
    },
    Background {
        color: Color,
        shape: Shape,
    },
    Border {
        width: f32,
        color: Color,
        shape: Shape,
    },
    Clip {
        shape: Shape,
    },
}

impl ModifierKind {
    pub fn padding_all(value: f32) -> Self {
        ModifierKind::Padding {
            start: value,
            top: value,
            end: value,
            bottom: value,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ModifierKind::Padding { .. } => "padding",
            ModifierKind::Size { .. } => "size",
            ModifierKind::Width { .. } => "width",
            ModifierKind::Height { .. } => "height",
            ModifierKind::FillMaxWidth { .. } => "fillMaxWidth",
            ModifierKind::FillMaxHeight { .. } => "fillMaxHeight",
            ModifierKind::FillMaxSize { .. } => "fillMaxSize",
            ModifierKind::Background { .. } => "background",
            ModifierKind::Border { .. } => "border",
            ModifierKind::Clip { .. } => "clip",
        }
    }
}
