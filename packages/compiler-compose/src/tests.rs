use crate::{
    compile_project, compile_tree, compile_tree_file, function_name, function_names,
    CompileOptions,
};
use protoform_model::{
    templates, Arrangement, Color, Component, ComponentKind, Group, GroupLayout,
    HorizontalAlignment, IdAllocator, Modifier, ModifierKind, Project, Shape, SlottedVariant,
    Tree, TreeType,
};

/// Project whose `Main` screen has `children` under its root column
fn screen(build: impl FnOnce(&mut IdAllocator) -> Vec<Component>) -> Project {
    let mut project = Project::new("Demo").unwrap();
    let mut ids = project.allocator();
    let children = build(&mut ids);
    project.trees[0].root = project.trees[0].root.with_children(children);
    project
}

fn with_slot(node: Component, name: &str, children: Vec<Component>) -> Component {
    let mut slots = node.slots().unwrap().to_vec();
    let slot = slots.iter_mut().find(|slot| slot.name == name).unwrap();
    slot.group = slot.group.with_children(children);
    node.with_slots(slots)
}

fn main_output(project: &Project) -> String {
    compile_tree(&project.trees[0], project, CompileOptions::default())
}

#[test]
fn test_simple_screen() {
    let project = screen(|ids| {
        vec![
            templates::text(ids, "Hello").unwrap(),
            templates::text(ids, "World").unwrap(),
        ]
    });

    let result = main_output(&project);

    println!("Generated code:\n{}", result);

    assert_eq!(
        result,
        "@Composable
fun Main() {
    Column(verticalArrangement = Arrangement.Top, horizontalAlignment = Alignment.Start) {
        Text(text = \"Hello\", style = MaterialTheme.typography.bodyLarge)
        Text(text = \"World\", style = MaterialTheme.typography.bodyLarge)
    }
}
"
    );
}

#[test]
fn test_scaffold_emits_only_enabled_slots() {
    let project = screen(|ids| {
        let hi = templates::text(ids, "Hi").unwrap();
        let scaffold = templates::scaffold(ids).unwrap();
        vec![with_slot(scaffold, "content", vec![hi])]
    });

    let result = main_output(&project);

    println!("Generated code:\n{}", result);

    assert!(result.contains(
        "        Scaffold(
            content = {
                Text(text = \"Hi\", style = MaterialTheme.typography.bodyLarge)
            },
        )
"
    ));
    assert_eq!(result.matches(" = {").count(), 1);
    for hidden in ["topBar", "bottomBar", "floatingActionButton", "drawerContent"] {
        assert!(!result.contains(hidden), "{} should be omitted", hidden);
    }
}

#[test]
fn test_required_slots_always_appear() {
    let project = screen(|ids| vec![templates::top_app_bar(ids).unwrap()]);
    let result = main_output(&project);

    assert!(result.contains("title = {},"));
    assert!(!result.contains("navigationIcon"));
    assert!(!result.contains("actions"));

    let bar = project.trees[0].root.children().unwrap()[0].clone();
    let enabled = bar.set_slot_enabled("navigationIcon", true).unwrap();
    let root = project.trees[0].root.with_children(vec![enabled]);
    let project = project.with_tree(project.trees[0].with_root(root));
    let result = main_output(&project);

    assert!(result.contains("navigationIcon = {},"));
    assert!(result.contains("title = {},"));
}

#[test]
fn test_slot_with_aligned_box_keeps_the_box() {
    let project = screen(|ids| {
        let icon = templates::icon(ids, "Add").unwrap();
        let mut fab = templates::box_layout(ids).unwrap().with_children(vec![icon]);
        if let ComponentKind::Group(group) = &mut fab.kind {
            group.layout = GroupLayout::Box {
                alignment: protoform_model::Alignment::Center,
            };
        }
        let scaffold = templates::scaffold(ids)
            .unwrap()
            .set_slot_enabled("floatingActionButton", true)
            .unwrap();
        let mut slots = scaffold.slots().unwrap().to_vec();
        let slot = slots
            .iter_mut()
            .find(|slot| slot.name == "floatingActionButton")
            .unwrap();
        slot.group = fab;
        vec![scaffold.with_slots(slots)]
    });

    let result = main_output(&project);

    println!("Generated code:\n{}", result);

    assert!(result.contains(
        "            floatingActionButton = {
                Box(contentAlignment = Alignment.Center) {
                    Icon(imageVector = Icons.Default.Add, contentDescription = null)
                }
            },
"
    ));
    assert!(result.contains("            content = {},\n"));
}

#[test]
fn test_button_arguments_and_escaping() {
    let project = screen(|ids| {
        let label = templates::text(ids, "Say \"hi\" to $name").unwrap();
        let button = templates::slotted(ids, SlottedVariant::Button { enabled: false }).unwrap();
        vec![with_slot(button, "content", vec![label])]
    });

    let result = main_output(&project);

    println!("Generated code:\n{}", result);

    assert!(result.contains(
        "        Button(
            onClick = {},
            enabled = false,
            content = {
                Text(text = \"Say \\\"hi\\\" to \\$name\", style = MaterialTheme.typography.bodyLarge)
            },
        )
"
    ));
}

#[test]
fn test_colored_containers() {
    let project = screen(|ids| {
        let bar = templates::slotted(
            ids,
            SlottedVariant::TopAppBar {
                container_color: Color::Surface,
            },
        )
        .unwrap();
        vec![bar]
    });
    let result = main_output(&project);

    assert!(result.contains(
        "colors = TopAppBarDefaults.topAppBarColors(containerColor = MaterialTheme.colorScheme.surface),"
    ));
}

#[test]
fn test_modifier_chain() {
    let project = screen(|ids| {
        let modifiers = vec![
            Modifier::new(
                ids.next_id().unwrap(),
                ModifierKind::Padding {
                    start: 4.0,
                    top: 8.0,
                    end: 4.0,
                    bottom: 8.0,
                },
            ),
            Modifier::new(
                ids.next_id().unwrap(),
                ModifierKind::FillMaxWidth { fraction: 1.0 },
            ),
            Modifier::new(
                ids.next_id().unwrap(),
                ModifierKind::Background {
                    color: Color::Primary,
                    shape: Shape::RoundedCorner { radius: 12.0 },
                },
            ),
            Modifier::new(
                ids.next_id().unwrap(),
                ModifierKind::Border {
                    width: 1.5,
                    color: Color::OnSurface,
                    shape: Shape::Circle,
                },
            ),
            Modifier::new(
                ids.next_id().unwrap(),
                ModifierKind::FillMaxHeight { fraction: 0.5 },
            ),
        ];
        vec![templates::spacer(ids).unwrap().with_modifiers(modifiers)]
    });

    let result = main_output(&project);

    assert!(result.contains(
        "Spacer(modifier = Modifier.padding(horizontal = 4.dp, vertical = 8.dp).fillMaxWidth().background(MaterialTheme.colorScheme.primary, RoundedCornerShape(12.dp)).border(1.5.dp, MaterialTheme.colorScheme.onSurface, CircleShape).fillMaxHeight(0.5f))"
    ));
}

#[test]
fn test_modifier_forms() {
    let project = screen(|ids| {
        let padded = templates::icon(ids, "Star").unwrap().with_modifiers(vec![
            Modifier::new(ids.next_id().unwrap(), ModifierKind::padding_all(16.0)),
            Modifier::new(
                ids.next_id().unwrap(),
                ModifierKind::Size {
                    width: 24.0,
                    height: 24.0,
                },
            ),
            Modifier::new(
                ids.next_id().unwrap(),
                ModifierKind::Clip {
                    shape: Shape::Circle,
                },
            ),
        ]);
        let sized = templates::spacer(ids).unwrap().with_modifiers(vec![
            Modifier::new(
                ids.next_id().unwrap(),
                ModifierKind::Size {
                    width: 10.0,
                    height: 20.0,
                },
            ),
            Modifier::new(
                ids.next_id().unwrap(),
                ModifierKind::Padding {
                    start: 1.0,
                    top: 2.0,
                    end: 3.0,
                    bottom: 4.0,
                },
            ),
            Modifier::new(
                ids.next_id().unwrap(),
                ModifierKind::Background {
                    color: Color::Unspecified,
                    shape: Shape::Rectangle,
                },
            ),
        ]);
        vec![padded, sized]
    });

    let result = main_output(&project);

    assert!(result.contains(
        "Icon(imageVector = Icons.Default.Star, contentDescription = null, modifier = Modifier.padding(16.dp).size(24.dp).clip(CircleShape))"
    ));
    assert!(result.contains(
        "Spacer(modifier = Modifier.size(width = 10.dp, height = 20.dp).padding(start = 1.dp, top = 2.dp, end = 3.dp, bottom = 4.dp).background(Color.Unspecified))"
    ));
}

#[test]
fn test_group_layouts() {
    let project = screen(|_| {
        let column = Component::new(
            "spaced",
            ComponentKind::Group(Group {
                layout: GroupLayout::Column {
                    arrangement: Arrangement::SpacedBy(8.0),
                    alignment: HorizontalAlignment::CenterHorizontally,
                },
                children: Vec::new(),
            }),
        );
        let row = Component::new(
            "bottom",
            ComponentKind::Group(Group {
                layout: GroupLayout::Column {
                    arrangement: Arrangement::End,
                    alignment: HorizontalAlignment::End,
                },
                children: Vec::new(),
            }),
        );
        vec![column, row]
    });

    let result = main_output(&project);

    assert!(result.contains(
        "Column(verticalArrangement = Arrangement.spacedBy(8.dp), horizontalAlignment = Alignment.CenterHorizontally) {}"
    ));
    assert!(result.contains(
        "Column(verticalArrangement = Arrangement.Bottom, horizontalAlignment = Alignment.End) {}"
    ));
}

fn project_with_component() -> Project {
    let mut project = Project::new("Demo").unwrap();
    let mut ids = project.allocator();
    let chip_root = templates::row(&mut ids)
        .unwrap()
        .with_children(vec![templates::text(&mut ids, "Chip").unwrap()]);
    project.trees.push(Tree::new(
        "chip",
        "chip card",
        TreeType::Component,
        chip_root,
    ));

    let reference = templates::custom(&mut ids, "chip")
        .unwrap()
        .with_modifiers(vec![Modifier::new(
            ids.next_id().unwrap(),
            ModifierKind::padding_all(8.0),
        )]);
    let bare = templates::custom(&mut ids, "chip").unwrap();
    let dangling = templates::custom(&mut ids, "gone").unwrap();
    project.trees[0].root = project.trees[0]
        .root
        .with_children(vec![reference, bare, dangling]);
    project
}

#[test]
fn test_custom_references() {
    let project = project_with_component();
    let result = main_output(&project);

    println!("Generated code:\n{}", result);

    assert!(result.contains("        ChipCard(modifier = Modifier.padding(8.dp))\n"));
    assert!(result.contains("        ChipCard()\n"));
    assert!(result.contains("        // Unresolved component: gone\n"));
}

#[test]
fn test_component_tree_takes_modifier() {
    let project = project_with_component();
    let chip = project.find_tree("chip").unwrap();
    let result = compile_tree(chip, &project, CompileOptions::default());

    assert_eq!(
        result,
        "@Composable
fun ChipCard(modifier: Modifier = Modifier) {
    Row(horizontalArrangement = Arrangement.Start, verticalAlignment = Alignment.Top, modifier = modifier) {
        Text(text = \"Chip\", style = MaterialTheme.typography.bodyLarge)
    }
}
"
    );
}

#[test]
fn test_file_header() {
    let project = project_with_component();
    let options = CompileOptions {
        package: Some("com.example.ui".into()),
        ..CompileOptions::default()
    };
    let result = compile_tree_file(&project.trees[0], &project, options);

    println!("Generated code:\n{}", result);

    assert!(result.starts_with("package com.example.ui\n\nimport androidx.compose."));
    assert!(result.contains("import androidx.compose.runtime.Composable\n"));
    assert!(result.contains("import androidx.compose.foundation.layout.padding\n"));
    assert!(result.contains("\n\n@Composable\nfun Main() {"));

    let bare = compile_tree_file(
        &project.trees[0],
        &project,
        CompileOptions {
            include_imports: false,
            ..CompileOptions::default()
        },
    );
    assert!(bare.starts_with("@Composable\n"));
}

#[test]
fn test_indent_width() {
    let project = screen(|ids| vec![templates::spacer(ids).unwrap()]);
    let options = CompileOptions {
        indent_width: 2,
        ..CompileOptions::default()
    };
    let result = compile_tree(&project.trees[0], &project, options);

    assert!(result.contains("\n    Spacer()\n"));
    assert!(result.contains("\n  Column("));
}

#[test]
fn test_generation_is_idempotent() {
    let project = project_with_component();

    assert_eq!(main_output(&project), main_output(&project));
    assert_eq!(
        compile_project(&project, CompileOptions::default()),
        compile_project(&project, CompileOptions::default())
    );
}

#[test]
fn test_compile_project_files() {
    let project = project_with_component();
    let files = compile_project(&project, CompileOptions::default());

    let paths: Vec<&str> = files.iter().map(|file| file.path.as_str()).collect();
    assert_eq!(paths, vec!["Main.kt", "ChipCard.kt", "Theme.kt"]);
    assert!(files[1].contents.contains("fun ChipCard(modifier: Modifier = Modifier)"));
    assert!(files[2].contents.contains("lightColorScheme("));
}

#[test]
fn test_function_names() {
    assert_eq!(function_name("Main"), "Main");
    assert_eq!(function_name("my screen"), "MyScreen");
    assert_eq!(function_name("home_page"), "HomePage");
    assert_eq!(function_name("2nd"), "Tree2nd");
    assert_eq!(function_name(""), "Tree");
}

#[test]
fn test_clashing_tree_names_get_unique_files() {
    let mut project = Project::new("Demo").unwrap();
    let mut ids = project.allocator();
    for (id, name) in [("theme-tree", "Theme"), ("lower-main", "main")] {
        let root = templates::text(&mut ids, name).unwrap();
        project
            .trees
            .push(Tree::new(id, name, TreeType::Component, root));
    }
    let calls = vec![
        templates::custom(&mut ids, "lower-main").unwrap(),
        templates::custom(&mut ids, "theme-tree").unwrap(),
    ];
    project.trees[0].root = project.trees[0].root.with_children(calls);

    let names = function_names(&project);
    assert_eq!(names[&project.trees[0].id], "Main");
    assert_eq!(names["theme-tree"], "Theme2");
    assert_eq!(names["lower-main"], "Main2");

    let files = compile_project(&project, CompileOptions::default());
    let paths: Vec<&str> = files.iter().map(|file| file.path.as_str()).collect();
    assert_eq!(paths, vec!["Main.kt", "Theme2.kt", "Main2.kt", "Theme.kt"]);

    assert!(files[0].contents.contains("fun Main() {"));
    assert!(files[0].contents.contains("        Main2()\n"));
    assert!(files[0].contents.contains("        Theme2()\n"));
    assert!(files[1].contents.contains("fun Theme2(modifier: Modifier = Modifier)"));
    assert!(files[2].contents.contains("fun Main2(modifier: Modifier = Modifier)"));
    assert!(files[3].contents.contains("lightColorScheme("));
}
