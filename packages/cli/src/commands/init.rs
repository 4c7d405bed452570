use super::PROJECT_EXTENSION;
use crate::config::{Config, DEFAULT_CONFIG_NAME};
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use protoform_model::{templates, Project};
use std::fs;
use std::path::Path;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Name of the starter project
    #[arg(short, long, default_value = "App")]
    pub name: String,

    /// Source directory
    #[arg(short, long, default_value = "src")]
    pub src_dir: String,

    /// Force overwrite existing config
    #[arg(short, long)]
    pub force: bool,
}

pub fn init(args: InitArgs, cwd: &Path) -> Result<()> {
    let config_path = cwd.join(DEFAULT_CONFIG_NAME);

    // Check if config already exists
    if config_path.exists() && !args.force {
        println!(
            "{} {} already exists",
            "⚠️".yellow(),
            DEFAULT_CONFIG_NAME.bright_white()
        );
        println!("Use --force to overwrite");
        return Ok(());
    }

    println!(
        "{}",
        "📝 Initializing Protoform project...".bright_blue().bold()
    );

    // Create source directory if it doesn't exist
    let src_dir = cwd.join(&args.src_dir);
    if !src_dir.exists() {
        fs::create_dir_all(&src_dir)?;
        println!("  {} Created {}/", "✓".green(), args.src_dir);
    }

    // Create starter project
    let file_name = format!("{}{}", file_slug(&args.name), PROJECT_EXTENSION);
    let project_file = src_dir.join(&file_name);
    if !project_file.exists() || args.force {
        fs::write(&project_file, starter_project(&args.name)?.to_json()?)?;
        println!("  {} Created {}", "✓".green(), file_name);
    }

    let config = Config {
        src_dir: args.src_dir.clone(),
        ..Config::default()
    };

    // Write config file
    let config_json = serde_json::to_string_pretty(&config)?;
    fs::write(&config_path, config_json)?;

    println!("  {} Created {}", "✓".green(), DEFAULT_CONFIG_NAME);
    println!();
    println!("{}", "✅ Project initialized!".green().bold());
    println!();
    println!("Next steps:");
    println!("  1. Edit {}/{}", args.src_dir, file_name);
    println!("  2. Run: protoform compile");
    println!("  3. Check output in {}/", config.out_dir);

    Ok(())
}

/// One `Main` screen greeting the user
fn starter_project(name: &str) -> Result<Project> {
    let mut project = Project::new(name)?;
    let mut ids = project.allocator();
    let greeting = templates::text(&mut ids, format!("Hello, {}!", name))?;
    project.trees[0].root = project.trees[0].root.with_children(vec![greeting]);
    Ok(project)
}

fn file_slug(name: &str) -> String {
    let slug: String = name
        .chars()
        .map(|c| {
            if c.is_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '-'
            }
        })
        .collect();
    let slug = slug.trim_matches('-');
    if slug.is_empty() {
        "project".to_string()
    } else {
        slug.to_string()
    }
}
