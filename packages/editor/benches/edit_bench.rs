use criterion::{black_box, criterion_group, criterion_main, Criterion};
use protoform_editor::{insert, remove, Action, UndoStack};
use protoform_model::{templates, Component, IdAllocator, Project};

/// Column of `rows` rows, each holding an icon and a label
fn wide_tree(ids: &mut IdAllocator, rows: usize) -> Component {
    let children = (0..rows)
        .map(|i| {
            let icon = templates::icon(ids, "Star").unwrap();
            let label = templates::text(ids, format!("Item {}", i)).unwrap();
            templates::row(ids).unwrap().with_children(vec![icon, label])
        })
        .collect();
    templates::column(ids).unwrap().with_children(children)
}

fn insert_remove(c: &mut Criterion) {
    let mut ids = IdAllocator::new();
    let tree = wide_tree(&mut ids, 200);
    let last_row = tree.children().unwrap()[199].clone();
    let extra = templates::text(&mut ids, "Extra").unwrap();

    c.bench_function("insert_into_last_row", |b| {
        b.iter(|| insert(black_box(&tree), black_box(&extra), black_box(&last_row), 1))
    });

    let inserted = insert(&tree, &extra, &last_row, 1);
    c.bench_function("remove_from_last_row", |b| {
        b.iter(|| remove(black_box(&inserted), black_box(&extra)))
    });
}

fn apply_undo(c: &mut Criterion) {
    let mut project = Project::new("Bench").unwrap();
    let mut ids = project.allocator();
    project.trees[0].root = wide_tree(&mut ids, 200);
    let tree_id = project.trees[0].id.clone();
    let target = project.trees[0].root.children().unwrap()[100].clone();

    c.bench_function("delete_and_undo", |b| {
        b.iter(|| {
            let mut history = UndoStack::new(project.clone());
            history
                .apply(&Action::DeleteComponent {
                    tree_id: tree_id.clone(),
                    component: target.clone(),
                })
                .unwrap();
            history.undo().unwrap();
            black_box(history.into_project())
        })
    });
}

criterion_group!(benches, insert_remove, apply_undo);
criterion_main!(benches);
