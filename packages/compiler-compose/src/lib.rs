//! Jetpack Compose code generation for protoform projects.
//!
//! Every tree becomes one `@Composable` Kotlin function. Screens take no
//! parameters; component trees take a `modifier` that prefixes the root's
//! modifier chain, so references can be decorated at the call site.

mod compiler;
mod context;
mod imports;
mod theme;

pub use compiler::{
    compile_project, compile_tree, compile_tree_file, function_name, function_names, GeneratedFile,
};
pub use context::{CompileOptions, CompilerContext};
pub use imports::ImportCollector;
pub use theme::compile_theme;

#[cfg(test)]
mod tests;
