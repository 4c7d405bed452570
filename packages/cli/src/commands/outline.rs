use super::find_project_files;
use crate::config::Config;
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use protoform_editor::Document;
use protoform_model::{Component, ComponentKind, Project, TreeType};
use std::path::Path;

#[derive(Debug, Args)]
pub struct OutlineArgs {
    /// Project file or directory to outline (defaults to current directory)
    #[arg(default_value = ".")]
    pub path: String,
}

pub fn outline(args: OutlineArgs, cwd: &Path) -> Result<()> {
    let root = cwd.join(&args.path);
    let base = if root.is_file() { cwd } else { root.as_path() };
    let src_dir = Config::load(base)?.get_src_dir(base);

    for project_file in find_project_files(&root, &src_dir)? {
        let document = Document::load(project_file.clone())?;
        println!(
            "{} {}",
            document.project().name.bright_white().bold(),
            format!("({})", project_file.display()).dimmed()
        );
        for line in outline_project(document.project()) {
            println!("{}", line);
        }
        println!();
    }

    Ok(())
}

/// One line per tree and node, indented two spaces per level
pub fn outline_project(project: &Project) -> Vec<String> {
    let mut lines = Vec::new();
    for tree in &project.trees {
        let tree_type = match tree.tree_type {
            TreeType::Screen => "screen",
            TreeType::Component => "component",
        };
        lines.push(format!("{} [{}]", tree.name, tree_type));
        outline_component(&tree.root, project, 1, &mut lines);
    }
    lines
}

fn outline_component(node: &Component, project: &Project, depth: usize, lines: &mut Vec<String>) {
    let indent = "  ".repeat(depth);
    let label = match &node.kind {
        ComponentKind::Text(text) => format!("Text {:?}", text.text),
        ComponentKind::Icon(icon) => format!("Icon {}", icon.icon),
        ComponentKind::Custom(custom) => match project.find_tree(&custom.tree_id) {
            Some(tree) => format!("Custom -> {}", tree.name),
            None => format!("Custom -> ? ({})", custom.tree_id),
        },
        _ => node.name().to_string(),
    };
    let modifiers = if node.modifiers.is_empty() {
        String::new()
    } else {
        let names: Vec<&str> = node.modifiers.iter().map(|m| m.kind.name()).collect();
        format!(" .{}", names.join("."))
    };
    lines.push(format!("{}{} #{}{}", indent, label, node.id, modifiers));

    if let Some(children) = node.children() {
        for child in children {
            outline_component(child, project, depth + 1, lines);
        }
    }
    if let Some(slots) = node.slots() {
        for slot in slots.iter().filter(|slot| slot.enabled) {
            lines.push(format!("{}  {}:", indent, slot.name));
            for child in slot.children() {
                outline_component(child, project, depth + 2, lines);
            }
        }
    }
}
