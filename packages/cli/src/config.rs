use protoform_compiler_compose::CompileOptions;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_NAME: &str = "protoform.config.json";

/// Protoform configuration file format
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Source directory containing .project.json files
    #[serde(default = "default_src_dir")]
    pub src_dir: String,

    /// Directory generated Kotlin files are written to
    #[serde(default = "default_out_dir")]
    pub out_dir: String,

    /// Kotlin package for generated files
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package: Option<String>,

    /// Spaces per indentation level in generated code
    #[serde(default = "default_indent_width")]
    pub indent_width: usize,
}

fn default_src_dir() -> String {
    "src".to_string()
}

fn default_out_dir() -> String {
    "dist".to_string()
}

fn default_indent_width() -> usize {
    4
}

impl Config {
    /// Load config from a directory
    pub fn load(cwd: &Path) -> anyhow::Result<Self> {
        let config_path = cwd.join(DEFAULT_CONFIG_NAME);

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            // Return default config if none exists
            Ok(Config::default())
        }
    }

    /// Get absolute path to source directory
    pub fn get_src_dir(&self, cwd: &Path) -> PathBuf {
        cwd.join(&self.src_dir)
    }

    pub fn get_out_dir(&self, cwd: &Path) -> PathBuf {
        cwd.join(&self.out_dir)
    }

    pub fn compile_options(&self) -> CompileOptions {
        CompileOptions {
            package: self.package.clone(),
            indent_width: self.indent_width,
            ..CompileOptions::default()
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            src_dir: default_src_dir(),
            out_dir: default_out_dir(),
            package: None,
            indent_width: default_indent_width(),
        }
    }
}
