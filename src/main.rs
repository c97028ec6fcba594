//! # cmakegen CLI Entry Point
//!
//! Parses CLI arguments with clap, loads the project description and
//! generates the project tree.

use anyhow::{Context, Result};
use clap::{Args, CommandFactory, Parser, Subcommand};
use clap_complete::{Shell, generate};
use std::path::PathBuf;

use cmakegen::config::ProjectConfig;
use cmakegen::manifest;
use cmakegen::ui;
use cmakegen::writer::{self, DiskFs};

const DEFAULT_CONFIG: &str = "project_template.json";

#[derive(Parser)]
#[command(name = "cmakegen")]
#[command(about = "Generate a CMake C/C++ project from a JSON description", version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
#[command(propagate_version = true)]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    generate: GenerateArgs,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the project described by a JSON file
    Generate(GenerateArgs),
    /// Generate shell completions
    Completion {
        /// The shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Args)]
struct GenerateArgs {
    /// Project description [default: project_template.json]
    config: Option<PathBuf>,
    /// Parent directory of the project (overrides `outputDir`)
    #[arg(long, short)]
    output_dir: Option<PathBuf>,
    /// Show the files that would be written without writing them
    #[arg(long)]
    dry_run: bool,
    /// List every written file
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Generate(args)) => run_generate(args),
        Some(Commands::Completion { shell }) => {
            let mut cmd = Cli::command();
            let bin_name = cmd.get_name().to_string();
            generate(shell, &mut cmd, bin_name, &mut std::io::stdout());
            Ok(())
        }
        None => run_generate(cli.generate),
    }
}

fn run_generate(args: GenerateArgs) -> Result<()> {
    let config_path = args.config.unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG));
    let mut config = ProjectConfig::load(&config_path)
        .with_context(|| format!("Failed to load {}", config_path.display()))?;
    if let Some(dir) = args.output_dir {
        config.output_dir = dir;
    }

    let root = config.project_root();
    let manifest = manifest::build_manifest(&config).context("Invalid project description")?;

    if args.dry_run {
        ui::notice(&format!(
            "Dry run: {} files for '{}' would be written",
            manifest.len(),
            config.project_name
        ));
        ui::print_manifest(&manifest, &root);
        return Ok(());
    }

    ui::status(&format!(
        "Creating project '{}' in '{}'...",
        config.project_name,
        root.display()
    ));
    let report = writer::write(&manifest, &root, &mut DiskFs)
        .with_context(|| format!("Failed to generate project in {}", root.display()))?;

    ui::print_summary(&report, args.verbose);
    ui::print_next_steps(&root, config.enable_tests);
    Ok(())
}
