use super::{find_project_files, project_stem};
use crate::config::Config;
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use protoform_compiler_compose::{compile_project, CompileOptions};
use protoform_editor::Document;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, Args)]
pub struct CompileArgs {
    /// Project file or directory to compile (defaults to current directory)
    #[arg(default_value = ".")]
    pub path: String,

    /// Output to stdout instead of files
    #[arg(long)]
    pub stdout: bool,

    /// Output directory (overrides config)
    #[arg(short, long)]
    pub out_dir: Option<String>,
}

pub fn compile(args: CompileArgs, cwd: &Path) -> Result<()> {
    let root = cwd.join(&args.path);
    let base = if root.is_file() { cwd } else { root.as_path() };
    let config = Config::load(base)?;
    let src_dir = config.get_src_dir(base);

    println!("{}", "🔨 Compiling Protoform projects...".bright_blue().bold());

    let project_files = find_project_files(&root, &src_dir)?;

    if project_files.is_empty() {
        println!("{}", "⚠️  No .project.json files found".yellow());
        return Ok(());
    }

    println!("Found {} files", project_files.len());

    let out_dir = match &args.out_dir {
        Some(out) => cwd.join(out),
        None => config.get_out_dir(base),
    };
    let options = config.compile_options();

    // Compile each file
    let mut success_count = 0;
    let mut error_count = 0;

    for project_file in &project_files {
        let relative_path = project_file.strip_prefix(&src_dir).unwrap_or(project_file);
        match compile_file(project_file, &args, &out_dir, &options) {
            Ok(outputs) => {
                success_count += 1;
                for output in outputs {
                    println!(
                        "  {} {} → {}",
                        "✓".green(),
                        relative_path.display(),
                        output
                    );
                }
            }
            Err(e) => {
                error_count += 1;
                eprintln!(
                    "  {} {} - {}",
                    "✗".red(),
                    relative_path.display(),
                    e.to_string().red()
                );
            }
        }
    }

    println!();
    if error_count == 0 {
        println!(
            "{} Compiled {} files successfully",
            "✅".green(),
            success_count
        );
    } else {
        println!(
            "{} Compiled {} files, {} errors",
            "⚠️".yellow(),
            success_count,
            error_count
        );
    }

    Ok(())
}

/// Compile one project file. Each project gets its own directory under
/// `out_dir`, named after the file.
fn compile_file(
    file_path: &Path,
    args: &CompileArgs,
    out_dir: &Path,
    options: &CompileOptions,
) -> Result<Vec<String>> {
    let document = Document::load(file_path.to_path_buf())?;
    let files = compile_project(document.project(), options.clone());

    if args.stdout {
        for file in &files {
            println!("// {}", file.path);
            println!("{}", file.contents);
        }
        return Ok(vec!["stdout".to_string()]);
    }

    let target_dir: PathBuf = out_dir.join(project_stem(file_path));
    fs::create_dir_all(&target_dir)?;

    let mut written = Vec::new();
    for file in files {
        let output_file = target_dir.join(&file.path);
        debug!(path = %output_file.display(), "Writing generated file");
        fs::write(&output_file, file.contents)?;
        written.push(output_file.display().to_string());
    }

    Ok(written)
}
