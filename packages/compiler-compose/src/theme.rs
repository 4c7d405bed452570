//! Theme file generation.

use crate::compiler::{color_role, compile_header};
use crate::context::{CompileOptions, CompilerContext};
use protoform_model::{Color, ColorScheme, Theme};

/// Compile a project theme to `Theme.kt`: one light and one dark
/// Material color scheme covering every role.
pub fn compile_theme(theme: &Theme, options: CompileOptions) -> String {
    let mut ctx = CompilerContext::new(options);
    let imports = [
        "androidx.compose.material3.darkColorScheme".to_string(),
        "androidx.compose.material3.lightColorScheme".to_string(),
        "androidx.compose.ui.graphics.Color".to_string(),
    ];
    compile_header(&imports, &mut ctx);

    compile_scheme("LightColorScheme", "lightColorScheme", &theme.light, &mut ctx);
    ctx.add("\n");
    compile_scheme("DarkColorScheme", "darkColorScheme", &theme.dark, &mut ctx);

    ctx.into_output()
}

fn compile_scheme(name: &str, builder: &str, scheme: &ColorScheme, ctx: &mut CompilerContext) {
    ctx.add_line(&format!("val {} = {}(", name, builder));
    ctx.indent();
    for role in Color::ROLES {
        if let (Some(property), Some(value)) = (color_role(role), scheme.resolve(role)) {
            ctx.add_line(&format!("{} = Color(0x{:08X}),", property, value));
        }
    }
    ctx.dedent();
    ctx.add_line(")");
}
