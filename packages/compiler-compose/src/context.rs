/// Options for Kotlin compilation
#[derive(Debug, Clone)]
pub struct CompileOptions {
    /// Package declaration for generated files
    pub package: Option<String>,
    /// Spaces per indentation level
    pub indent_width: usize,
    /// Whether generated files start with their import block
    pub include_imports: bool,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            package: None,
            indent_width: 4,
            include_imports: true,
        }
    }
}

/// Output buffer of one generated file
#[derive(Debug)]
pub struct CompilerContext {
    buffer: String,
    indent_level: usize,
    pub options: CompileOptions,
}

impl CompilerContext {
    pub fn new(options: CompileOptions) -> Self {
        Self {
            buffer: String::new(),
            indent_level: 0,
            options,
        }
    }

    pub fn add(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    pub fn add_line(&mut self, text: &str) {
        self.add_indented(text);
        self.buffer.push('\n');
    }

    pub fn add_indented(&mut self, text: &str) {
        let width = self.options.indent_width * self.indent_level;
        self.buffer.extend(std::iter::repeat(' ').take(width));
        self.buffer.push_str(text);
    }

    pub fn indent(&mut self) {
        self.indent_level += 1;
    }

    /// Never goes below the top level
    pub fn dedent(&mut self) {
        self.indent_level = self.indent_level.saturating_sub(1);
    }

    pub fn output(&self) -> &str {
        &self.buffer
    }

    pub fn into_output(self) -> String {
        self.buffer
    }
}
