//! Integration tests for editor crate

use protoform_editor::{
    drop_action, replace_base, Action, Document, DropPosition, EditorError, UndoStack,
};
use protoform_model::{templates, ComponentKind, Project};

fn starter_project() -> Project {
    let mut project = Project::new("Starter").unwrap();
    let mut ids = project.allocator();
    let hello = templates::text(&mut ids, "Hello").unwrap();
    let root = project.trees[0].root.with_children(vec![hello]);
    project.trees[0].root = root;
    project
}

#[test]
fn test_document_lifecycle() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("starter.project.json");
    std::fs::write(&path, starter_project().to_json()?)?;

    let mut doc = Document::load(path.clone())?;
    assert_eq!(doc.version, 0);
    assert!(!doc.is_dirty());

    doc.apply(Action::UpdateName {
        name: "Checkout".into(),
    })?;
    assert!(doc.is_dirty());
    assert_eq!(doc.version, 1);

    doc.save()?;
    assert!(!doc.is_dirty());

    let reloaded = Document::load(path)?;
    assert_eq!(reloaded.project().name, "Checkout");
    assert_eq!(reloaded.project(), doc.project());
    Ok(())
}

#[test]
fn test_load_reports_invalid_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.project.json");
    std::fs::write(&path, "{ not json").unwrap();

    assert!(matches!(Document::load(path), Err(EditorError::Model(_))));
    assert!(matches!(
        Document::load(dir.path().join("missing.json")),
        Err(EditorError::Io(_))
    ));
}

#[test]
fn test_drag_new_node_then_undo() {
    let project = starter_project();
    let tree = project.trees[0].clone();
    let hello = tree.root.children().unwrap()[0].clone();
    let mut ids = project.allocator();
    let world = templates::text(&mut ids, "World").unwrap();

    let mut history = UndoStack::new(project.clone());
    let action = drop_action(&tree.id, &tree.root, &world, &hello, DropPosition::Below).unwrap();
    history.apply(&action).unwrap();

    let children = history.project().trees[0].root.children().unwrap().to_vec();
    assert_eq!(children, vec![hello, world]);

    history.undo().unwrap();
    assert_eq!(history.project(), &project);
}

#[test]
fn test_replace_base_through_history() {
    let mut project = Project::new("Swap").unwrap();
    let mut ids = project.allocator();
    let a = templates::text(&mut ids, "A").unwrap();
    let b = templates::text(&mut ids, "B").unwrap();
    let row = templates::row(&mut ids).unwrap().with_children(vec![a, b]);
    let root = project.trees[0].root.with_children(vec![row.clone()]);
    project.trees[0].root = root;
    let tree_id = project.trees[0].id.clone();

    let scaffold = templates::scaffold(&mut ids).unwrap();
    let (swapped, loses_children) = replace_base(&row, &scaffold);
    assert!(!loses_children);

    let mut history = UndoStack::new(project.clone());
    history
        .apply(&Action::UpdateComponent {
            tree_id,
            component: swapped,
        })
        .unwrap();

    let placed = &history.project().trees[0].root.children().unwrap()[0];
    assert!(matches!(placed.kind, ComponentKind::Slotted(_)));
    assert_eq!(placed.slot("content").unwrap().children().len(), 2);

    history.undo().unwrap();
    assert_eq!(history.project(), &project);
}

#[test]
fn test_action_serialization() {
    let project = starter_project();
    let action = Action::DeleteComponent {
        tree_id: project.trees[0].id.clone(),
        component: project.trees[0].root.children().unwrap()[0].clone(),
    };

    let json = serde_json::to_string(&action).unwrap();
    let back: Action = serde_json::from_str(&json).unwrap();
    assert_eq!(back, action);
}
