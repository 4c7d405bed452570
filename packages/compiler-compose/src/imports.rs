//! Import resolution for generated files.

use crate::compiler::{is_emitted, is_plain_box};
use protoform_common::{walk_component, walk_slot, Visitor};
use protoform_model::{
    Arrangement, Color, Component, ComponentKind, GroupLayout, Modifier, ModifierKind, Shape,
    Slot, SlottedVariant,
};
use std::collections::BTreeSet;

const COMPOSABLE: &str = "androidx.compose.runtime.Composable";
const MODIFIER: &str = "androidx.compose.ui.Modifier";
const ALIGNMENT: &str = "androidx.compose.ui.Alignment";
const ARRANGEMENT: &str = "androidx.compose.foundation.layout.Arrangement";
const MATERIAL_THEME: &str = "androidx.compose.material3.MaterialTheme";
const DP: &str = "androidx.compose.ui.unit.dp";

/// Collects the fully qualified names a tree's generated code refers to.
///
/// Names come out sorted, so the import block is stable for a given tree.
#[derive(Debug, Default)]
pub struct ImportCollector {
    imports: BTreeSet<String>,
}

impl ImportCollector {
    /// Imports for one tree's function. `takes_modifier` is set for
    /// Component trees, whose signature always mentions `Modifier`.
    pub fn collect(root: &Component, takes_modifier: bool) -> Vec<String> {
        let mut collector = Self::default();
        collector.add(COMPOSABLE);
        if takes_modifier {
            collector.add(MODIFIER);
        }
        collector.visit_component(root);
        collector.imports.into_iter().collect()
    }

    fn add(&mut self, name: &str) {
        self.imports.insert(name.to_string());
    }

    fn add_color(&mut self, color: Color) {
        if color.is_specified() {
            self.add(MATERIAL_THEME);
        } else {
            self.add("androidx.compose.ui.graphics.Color");
        }
    }

    fn add_shape(&mut self, shape: Shape) {
        match shape {
            Shape::Rectangle => self.add("androidx.compose.ui.graphics.RectangleShape"),
            Shape::Circle => self.add("androidx.compose.foundation.shape.CircleShape"),
            Shape::RoundedCorner { .. } => {
                self.add("androidx.compose.foundation.shape.RoundedCornerShape");
                self.add(DP);
            }
        }
    }
}

impl Visitor for ImportCollector {
    fn visit_component(&mut self, component: &Component) {
        match &component.kind {
            ComponentKind::Text(_) => {
                self.add("androidx.compose.material3.Text");
                // Typography always resolves through the theme
                self.add(MATERIAL_THEME);
            }
            ComponentKind::Icon(icon) => {
                self.add("androidx.compose.material3.Icon");
                self.add("androidx.compose.material.icons.Icons");
                self.add(&format!("androidx.compose.material.icons.filled.{}", icon.icon));
                if icon.tint.is_specified() {
                    self.add_color(icon.tint);
                }
            }
            ComponentKind::Spacer => self.add("androidx.compose.foundation.layout.Spacer"),
            ComponentKind::Group(group) => {
                self.add(&format!(
                    "androidx.compose.foundation.layout.{}",
                    group.layout.name()
                ));
                self.add(ALIGNMENT);
                match group.layout {
                    GroupLayout::Row { arrangement, .. } | GroupLayout::Column { arrangement, .. } => {
                        self.add(ARRANGEMENT);
                        if matches!(arrangement, Arrangement::SpacedBy(_)) {
                            self.add(DP);
                        }
                    }
                    GroupLayout::Box { .. } => {}
                }
            }
            ComponentKind::Slotted(slotted) => {
                self.add(&format!("androidx.compose.material3.{}", slotted.variant.name()));
                match slotted.variant {
                    SlottedVariant::TopAppBar { container_color } if container_color.is_specified() => {
                        self.add("androidx.compose.material3.TopAppBarDefaults");
                        self.add_color(container_color);
                    }
                    SlottedVariant::Scaffold { container_color } if container_color.is_specified() => {
                        self.add_color(container_color);
                    }
                    _ => {}
                }
            }
            // Referenced trees live in the same package
            ComponentKind::Custom(_) => {}
        }

        if !component.modifiers.is_empty() {
            self.add(MODIFIER);
        }
        walk_component(self, component);
    }

    fn visit_slot(&mut self, slot: &Slot) {
        if !is_emitted(slot) {
            return;
        }
        if is_plain_box(&slot.group) {
            for child in slot.children() {
                self.visit_component(child);
            }
        } else {
            walk_slot(self, slot);
        }
    }

    fn visit_modifier(&mut self, modifier: &Modifier) {
        let layout = "androidx.compose.foundation.layout";
        match &modifier.kind {
            ModifierKind::Padding { .. }
            | ModifierKind::Size { .. }
            | ModifierKind::Width { .. }
            | ModifierKind::Height { .. } => {
                self.add(&format!("{}.{}", layout, modifier.kind.name()));
                self.add(DP);
            }
            ModifierKind::FillMaxWidth { .. }
            | ModifierKind::FillMaxHeight { .. }
            | ModifierKind::FillMaxSize { .. } => {
                self.add(&format!("{}.{}", layout, modifier.kind.name()));
            }
            ModifierKind::Background { color, shape } => {
                self.add("androidx.compose.foundation.background");
                self.add_color(*color);
                if *shape != Shape::Rectangle {
                    self.add_shape(*shape);
                }
            }
            ModifierKind::Border {
                color, shape, ..
            } => {
                self.add("androidx.compose.foundation.border");
                self.add(DP);
                self.add_color(*color);
                if *shape != Shape::Rectangle {
                    self.add_shape(*shape);
                }
            }
            ModifierKind::Clip { shape } => {
                self.add("androidx.compose.ui.draw.clip");
                self.add_shape(*shape);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use protoform_model::{templates, IdAllocator};

    #[test]
    fn test_imports_are_sorted_and_unique() {
        let mut ids = IdAllocator::new();
        let first = templates::text(&mut ids, "A").unwrap();
        let second = templates::text(&mut ids, "B").unwrap();
        let padded = templates::spacer(&mut ids)
            .unwrap()
            .with_modifiers(vec![Modifier::new("m", ModifierKind::padding_all(4.0))]);
        let column = templates::column(&mut ids)
            .unwrap()
            .with_children(vec![first, second, padded]);

        let imports = ImportCollector::collect(&column, false);

        let mut sorted = imports.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(imports, sorted);
        assert!(imports.contains(&"androidx.compose.material3.Text".to_string()));
        assert!(imports.contains(&"androidx.compose.foundation.layout.padding".to_string()));
        assert!(imports.contains(&DP.to_string()));
        assert!(imports.contains(&MODIFIER.to_string()));
    }

    #[test]
    fn test_disabled_slots_add_no_imports() {
        let mut ids = IdAllocator::new();
        let icon = templates::icon(&mut ids, "Menu").unwrap();
        let bar = templates::top_app_bar(&mut ids).unwrap();
        let mut slots = bar.slots().unwrap().to_vec();
        slots[0].group = slots[0].group.with_children(vec![icon]);
        let bar = bar.with_slots(slots);

        let imports = ImportCollector::collect(&bar, true);
        assert!(!imports.contains(&"androidx.compose.material.icons.filled.Menu".to_string()));
        assert!(imports.contains(&"androidx.compose.material3.TopAppBar".to_string()));

        let enabled = bar.set_slot_enabled("navigationIcon", true).unwrap();
        let imports = ImportCollector::collect(&enabled, true);
        assert!(imports.contains(&"androidx.compose.material.icons.filled.Menu".to_string()));
    }
}
