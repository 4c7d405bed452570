use crate::context::{CompileOptions, CompilerContext};
use crate::imports::ImportCollector;
use crate::theme::compile_theme;
use protoform_model::{
    Alignment, Arrangement, Color, Component, ComponentKind, GroupLayout, HorizontalAlignment,
    Icon, Modifier, ModifierKind, Project, Shape, Slot, Slotted, SlottedVariant, Text, TextStyle,
    Tree, TreeType, VerticalAlignment,
};
use std::collections::{HashMap, HashSet};
use tracing::info;

/// File stem reserved for the generated theme
const THEME_FILE_STEM: &str = "Theme";

/// One output file of [`compile_project`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    /// Path relative to the output directory
    pub path: String,
    pub contents: String,
}

/// Compile a tree to a single `@Composable` function
pub fn compile_tree(tree: &Tree, project: &Project, options: CompileOptions) -> String {
    let names = function_names(project);
    let mut ctx = CompilerContext::new(options);
    compile_function(tree, &names, &mut ctx);
    ctx.into_output()
}

/// Compile a tree to a complete Kotlin file (package, imports, function)
pub fn compile_tree_file(tree: &Tree, project: &Project, options: CompileOptions) -> String {
    let names = function_names(project);
    compile_file(tree, &names, options)
}

fn compile_file(tree: &Tree, names: &HashMap<String, String>, options: CompileOptions) -> String {
    let mut ctx = CompilerContext::new(options);
    let imports = ImportCollector::collect(&tree.root, tree.tree_type == TreeType::Component);
    compile_header(&imports, &mut ctx);
    compile_function(tree, names, &mut ctx);
    ctx.into_output()
}

/// Compile every tree of a project, plus its theme
pub fn compile_project(project: &Project, options: CompileOptions) -> Vec<GeneratedFile> {
    let names = function_names(project);
    let mut files: Vec<GeneratedFile> = project
        .trees
        .iter()
        .map(|tree| GeneratedFile {
            path: format!("{}.kt", unique_name(tree, &names)),
            contents: compile_file(tree, &names, options.clone()),
        })
        .collect();

    files.push(GeneratedFile {
        path: "Theme.kt".to_string(),
        contents: compile_theme(&project.theme, options),
    });

    info!(project = %project.name, files = files.len(), "Compiled project");
    files
}

/// Kotlin function name for a tree name: PascalCase over alphanumeric words
pub fn function_name(name: &str) -> String {
    let mut out = String::new();
    for word in name
        .split(|c: char| !c.is_alphanumeric())
        .filter(|word| !word.is_empty())
    {
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            out.extend(first.to_uppercase());
            out.push_str(chars.as_str());
        }
    }
    if out.is_empty() || out.starts_with(|c: char| c.is_ascii_digit()) {
        out.insert_str(0, "Tree");
    }
    out
}

/// Function name of every tree, keyed by tree id.
///
/// Names are unique within the project, ignoring case so the `.kt` files
/// cannot collide on case-insensitive file systems. Clashes take a numeric
/// suffix in tree order (`Main`, `Main2`, ...), and `Theme` stays free for
/// the theme file.
pub fn function_names(project: &Project) -> HashMap<String, String> {
    let mut taken = HashSet::from([THEME_FILE_STEM.to_lowercase()]);
    let mut names = HashMap::new();
    for tree in &project.trees {
        let base = function_name(&tree.name);
        let mut name = base.clone();
        let mut suffix = 2;
        while !taken.insert(name.to_lowercase()) {
            name = format!("{}{}", base, suffix);
            suffix += 1;
        }
        names.insert(tree.id.clone(), name);
    }
    names
}

fn unique_name(tree: &Tree, names: &HashMap<String, String>) -> String {
    names
        .get(&tree.id)
        .cloned()
        .unwrap_or_else(|| function_name(&tree.name))
}

pub(crate) fn compile_header(imports: &[String], ctx: &mut CompilerContext) {
    if let Some(package) = ctx.options.package.clone() {
        ctx.add_line(&format!("package {}", package));
        ctx.add("\n");
    }

    if ctx.options.include_imports && !imports.is_empty() {
        for import in imports {
            ctx.add_line(&format!("import {}", import));
        }
        ctx.add("\n");
    }
}

fn compile_function(tree: &Tree, names: &HashMap<String, String>, ctx: &mut CompilerContext) {
    let name = unique_name(tree, names);

    ctx.add_line("@Composable");
    let base = match tree.tree_type {
        TreeType::Screen => {
            ctx.add_line(&format!("fun {}() {{", name));
            ModifierBase::Fresh
        }
        TreeType::Component => {
            ctx.add_line(&format!("fun {}(modifier: Modifier = Modifier) {{", name));
            ModifierBase::Parameter
        }
    };
    ctx.indent();
    compile_component(&tree.root, names, ctx, base);
    ctx.dedent();
    ctx.add_line("}");

    info!(tree = %tree.name, nodes = tree.root.node_count(), "Compiled tree");
}

/// Where a node's modifier chain starts
#[derive(Clone, Copy)]
enum ModifierBase {
    /// `Modifier`, omitted when the chain is empty
    Fresh,
    /// The function's `modifier` parameter, always passed through
    Parameter,
}

fn compile_component(
    node: &Component,
    names: &HashMap<String, String>,
    ctx: &mut CompilerContext,
    base: ModifierBase,
) {
    let modifier = modifier_arg(&node.modifiers, base);

    match &node.kind {
        ComponentKind::Text(text) => {
            let args = with_modifier(text_args(text), modifier);
            ctx.add_line(&format!("Text({})", args.join(", ")));
        }
        ComponentKind::Icon(icon) => {
            let args = with_modifier(icon_args(icon), modifier);
            ctx.add_line(&format!("Icon({})", args.join(", ")));
        }
        ComponentKind::Spacer => {
            let args = with_modifier(Vec::new(), modifier);
            ctx.add_line(&format!("Spacer({})", args.join(", ")));
        }
        ComponentKind::Group(group) => {
            let args = with_modifier(layout_args(&group.layout), modifier);
            let call = format!("{}({})", group.layout.name(), args.join(", "));
            if group.children.is_empty() {
                ctx.add_line(&format!("{} {{}}", call));
            } else {
                ctx.add_line(&format!("{} {{", call));
                ctx.indent();
                for child in &group.children {
                    compile_component(child, names, ctx, ModifierBase::Fresh);
                }
                ctx.dedent();
                ctx.add_line("}");
            }
        }
        ComponentKind::Slotted(slotted) => compile_slotted(slotted, modifier, names, ctx),
        ComponentKind::Custom(custom) => match names.get(&custom.tree_id) {
            Some(target) => {
                let args = with_modifier(Vec::new(), modifier);
                ctx.add_line(&format!("{}({})", target, args.join(", ")));
            }
            None => ctx.add_line(&format!("// Unresolved component: {}", custom.tree_id)),
        },
    }
}

fn compile_slotted(
    slotted: &Slotted,
    modifier: Option<String>,
    names: &HashMap<String, String>,
    ctx: &mut CompilerContext,
) {
    ctx.add_line(&format!("{}(", slotted.variant.name()));
    ctx.indent();

    for arg in with_modifier(variant_args(&slotted.variant), modifier) {
        ctx.add_line(&format!("{},", arg));
    }

    for slot in slotted.slots.iter().filter(|slot| is_emitted(slot)) {
        let direct = is_plain_box(&slot.group);
        if direct && slot.children().is_empty() {
            ctx.add_line(&format!("{} = {{}},", slot.name));
            continue;
        }

        ctx.add_line(&format!("{} = {{", slot.name));
        ctx.indent();
        if direct {
            for child in slot.children() {
                compile_component(child, names, ctx, ModifierBase::Fresh);
            }
        } else {
            compile_component(&slot.group, names, ctx, ModifierBase::Fresh);
        }
        ctx.dedent();
        ctx.add_line("},");
    }

    ctx.dedent();
    ctx.add_line(")");
}

/// Disabled optional slots are left out; required slots always appear
pub(crate) fn is_emitted(slot: &Slot) -> bool {
    slot.enabled || !slot.optional
}

/// A Box without modifiers or alignment adds nothing around its children
pub(crate) fn is_plain_box(group: &Component) -> bool {
    group.modifiers.is_empty()
        && matches!(
            &group.kind,
            ComponentKind::Group(g) if g.layout == GroupLayout::Box { alignment: Alignment::default() }
        )
}

fn with_modifier(mut args: Vec<String>, modifier: Option<String>) -> Vec<String> {
    args.extend(modifier);
    args
}

fn text_args(text: &Text) -> Vec<String> {
    let mut args = vec![format!("text = {}", kotlin_string(&text.text))];
    if text.color.is_specified() {
        args.push(format!("color = {}", color_ref(text.color)));
    }
    args.push(format!(
        "style = MaterialTheme.typography.{}",
        text_style_name(text.style)
    ));
    args
}

fn icon_args(icon: &Icon) -> Vec<String> {
    let description = match &icon.content_description {
        Some(description) => kotlin_string(description),
        None => "null".to_string(),
    };
    let mut args = vec![
        format!("imageVector = Icons.Default.{}", icon.icon),
        format!("contentDescription = {}", description),
    ];
    if icon.tint.is_specified() {
        args.push(format!("tint = {}", color_ref(icon.tint)));
    }
    args
}

fn layout_args(layout: &GroupLayout) -> Vec<String> {
    match layout {
        GroupLayout::Row {
            arrangement,
            alignment,
        } => vec![
            format!("horizontalArrangement = {}", arrangement_ref(*arrangement, false)),
            format!("verticalAlignment = Alignment.{}", vertical_name(*alignment)),
        ],
        GroupLayout::Column {
            arrangement,
            alignment,
        } => vec![
            format!("verticalArrangement = {}", arrangement_ref(*arrangement, true)),
            format!("horizontalAlignment = Alignment.{}", horizontal_name(*alignment)),
        ],
        GroupLayout::Box { alignment } => {
            vec![format!("contentAlignment = Alignment.{}", alignment_name(*alignment))]
        }
    }
}

fn variant_args(variant: &SlottedVariant) -> Vec<String> {
    match variant {
        SlottedVariant::TopAppBar { container_color } if container_color.is_specified() => {
            vec![format!(
                "colors = TopAppBarDefaults.topAppBarColors(containerColor = {})",
                color_ref(*container_color)
            )]
        }
        SlottedVariant::Scaffold { container_color } if container_color.is_specified() => {
            vec![format!("containerColor = {}", color_ref(*container_color))]
        }
        SlottedVariant::Button { enabled } => {
            let mut args = vec!["onClick = {}".to_string()];
            if !enabled {
                args.push("enabled = false".to_string());
            }
            args
        }
        SlottedVariant::TopAppBar { .. } | SlottedVariant::Scaffold { .. } => Vec::new(),
    }
}

fn modifier_arg(modifiers: &[Modifier], base: ModifierBase) -> Option<String> {
    let chain: String = modifiers
        .iter()
        .map(|modifier| format!(".{}", modifier_call(&modifier.kind)))
        .collect();
    match base {
        ModifierBase::Fresh if modifiers.is_empty() => None,
        ModifierBase::Fresh => Some(format!("modifier = Modifier{}", chain)),
        ModifierBase::Parameter => Some(format!("modifier = modifier{}", chain)),
    }
}

fn modifier_call(kind: &ModifierKind) -> String {
    match kind {
        ModifierKind::Padding {
            start,
            top,
            end,
            bottom,
        } => {
            if start == top && top == end && end == bottom {
                format!("padding({})", dp(*start))
            } else if start == end && top == bottom {
                format!("padding(horizontal = {}, vertical = {})", dp(*start), dp(*top))
            } else {
                format!(
                    "padding(start = {}, top = {}, end = {}, bottom = {})",
                    dp(*start),
                    dp(*top),
                    dp(*end),
                    dp(*bottom)
                )
            }
        }
        ModifierKind::Size { width, height } if width == height => format!("size({})", dp(*width)),
        ModifierKind::Size { width, height } => {
            format!("size(width = {}, height = {})", dp(*width), dp(*height))
        }
        ModifierKind::Width { width } => format!("width({})", dp(*width)),
        ModifierKind::Height { height } => format!("height({})", dp(*height)),
        ModifierKind::FillMaxWidth { fraction }
        | ModifierKind::FillMaxHeight { fraction }
        | ModifierKind::FillMaxSize { fraction } => {
            if *fraction == 1.0 {
                format!("{}()", kind.name())
            } else {
                format!("{}({}f)", kind.name(), number(*fraction))
            }
        }
        ModifierKind::Background { color, shape } => match shape {
            Shape::Rectangle => format!("background({})", color_ref(*color)),
            _ => format!("background({}, {})", color_ref(*color), shape_ref(*shape)),
        },
        ModifierKind::Border {
            width,
            color,
            shape,
        } => match shape {
            Shape::Rectangle => format!("border({}, {})", dp(*width), color_ref(*color)),
            _ => format!(
                "border({}, {}, {})",
                dp(*width),
                color_ref(*color),
                shape_ref(*shape)
            ),
        },
        ModifierKind::Clip { shape } => format!("clip({})", shape_ref(*shape)),
    }
}

fn shape_ref(shape: Shape) -> String {
    match shape {
        Shape::Rectangle => "RectangleShape".to_string(),
        Shape::Circle => "CircleShape".to_string(),
        Shape::RoundedCorner { radius } => format!("RoundedCornerShape({})", dp(radius)),
    }
}

fn color_ref(color: Color) -> String {
    match color_role(color) {
        Some(role) => format!("MaterialTheme.colorScheme.{}", role),
        None => "Color.Unspecified".to_string(),
    }
}

/// Property name of a color role on Material's `ColorScheme`
pub(crate) fn color_role(color: Color) -> Option<&'static str> {
    let role = match color {
        Color::Unspecified => return None,
        Color::Primary => "primary",
        Color::OnPrimary => "onPrimary",
        Color::Secondary => "secondary",
        Color::OnSecondary => "onSecondary",
        Color::Tertiary => "tertiary",
        Color::OnTertiary => "onTertiary",
        Color::Background => "background",
        Color::OnBackground => "onBackground",
        Color::Surface => "surface",
        Color::OnSurface => "onSurface",
        Color::Error => "error",
        Color::OnError => "onError",
    };
    Some(role)
}

fn text_style_name(style: TextStyle) -> &'static str {
    match style {
        TextStyle::DisplayLarge => "displayLarge",
        TextStyle::DisplayMedium => "displayMedium",
        TextStyle::DisplaySmall => "displaySmall",
        TextStyle::HeadlineLarge => "headlineLarge",
        TextStyle::HeadlineMedium => "headlineMedium",
        TextStyle::HeadlineSmall => "headlineSmall",
        TextStyle::TitleLarge => "titleLarge",
        TextStyle::TitleMedium => "titleMedium",
        TextStyle::TitleSmall => "titleSmall",
        TextStyle::BodyLarge => "bodyLarge",
        TextStyle::BodyMedium => "bodyMedium",
        TextStyle::BodySmall => "bodySmall",
        TextStyle::LabelLarge => "labelLarge",
        TextStyle::LabelMedium => "labelMedium",
        TextStyle::LabelSmall => "labelSmall",
    }
}

/// `Start`/`End` read as `Top`/`Bottom` on a column's vertical axis
fn arrangement_ref(arrangement: Arrangement, vertical: bool) -> String {
    let name = match arrangement {
        Arrangement::Start if vertical => "Top",
        Arrangement::End if vertical => "Bottom",
        Arrangement::Start => "Start",
        Arrangement::End => "End",
        Arrangement::Center => "Center",
        Arrangement::SpaceBetween => "SpaceBetween",
        Arrangement::SpaceAround => "SpaceAround",
        Arrangement::SpaceEvenly => "SpaceEvenly",
        Arrangement::SpacedBy(space) => return format!("Arrangement.spacedBy({})", dp(space)),
    };
    format!("Arrangement.{}", name)
}

fn alignment_name(alignment: Alignment) -> &'static str {
    match alignment {
        Alignment::TopStart => "TopStart",
        Alignment::TopCenter => "TopCenter",
        Alignment::TopEnd => "TopEnd",
        Alignment::CenterStart => "CenterStart",
        Alignment::Center => "Center",
        Alignment::CenterEnd => "CenterEnd",
        Alignment::BottomStart => "BottomStart",
        Alignment::BottomCenter => "BottomCenter",
        Alignment::BottomEnd => "BottomEnd",
    }
}

fn horizontal_name(alignment: HorizontalAlignment) -> &'static str {
    match alignment {
        HorizontalAlignment::Start => "Start",
        HorizontalAlignment::CenterHorizontally => "CenterHorizontally",
        HorizontalAlignment::End => "End",
    }
}

fn vertical_name(alignment: VerticalAlignment) -> &'static str {
    match alignment {
        VerticalAlignment::Top => "Top",
        VerticalAlignment::CenterVertically => "CenterVertically",
        VerticalAlignment::Bottom => "Bottom",
    }
}

fn dp(value: f32) -> String {
    format!("{}.dp", number(value))
}

/// Whole numbers print without a fractional part
fn number(value: f32) -> String {
    if value.fract() == 0.0 && value.abs() < 1e9 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

fn kotlin_string(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '$' => out.push_str("\\$"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(c),
        }
    }
    out.push('"');
    out
}
