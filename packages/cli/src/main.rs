mod commands;
mod config;

use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{compile, init, outline, CompileArgs, InitArgs, OutlineArgs};
use tracing_subscriber::EnvFilter;

/// Protoform CLI - layout trees to Jetpack Compose
#[derive(Parser, Debug)]
#[command(name = "protoform")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Initialize a new Protoform project
    Init(InitArgs),

    /// Compile .project.json files to Kotlin
    Compile(CompileArgs),

    /// Print the component trees of a project
    Outline(OutlineArgs),
}

fn main() {
    let cli = Cli::parse();

    // RUST_LOG wins over --verbose
    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run(cli.command) {
        eprintln!();
        eprintln!("{} {}", "Error:".red().bold(), err);
        eprintln!();
        std::process::exit(1);
    }
}

fn run(command: Command) -> anyhow::Result<()> {
    let cwd = std::env::current_dir()?;

    match command {
        Command::Init(args) => init(args, &cwd),
        Command::Compile(args) => compile(args, &cwd),
        Command::Outline(args) => outline(args, &cwd),
    }
}
