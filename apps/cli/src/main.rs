//! R4MVC command-line driver
//!
//! Usage:
//!   r4mvc generate --model model.json --project-root ./MyApp --output ./generated [--config r4mvc.json]
//!   r4mvc views --project-root ./MyApp

mod logging;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use r4mvc_codegen::ProjectConfig;
use r4mvc_views::{FileSystemViewLocator, ViewLocator};

#[derive(Parser, Debug)]
#[clap(name = "r4mvc")]
#[clap(about = "Generate strongly-typed companions for MVC controllers and views")]
#[clap(version)]
struct Cli {
    /// Emit logs as JSON lines
    #[clap(long, global = true)]
    json_logs: bool,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate controller companions from a declaration model
    Generate {
        /// JSON declaration model written by the source parser
        #[clap(short, long)]
        model: PathBuf,

        /// Project root scanned for views and pages
        #[clap(short, long)]
        project_root: PathBuf,

        /// Directory receiving one JSON document per namespace
        #[clap(short, long)]
        output: PathBuf,

        /// Optional JSON configuration file
        #[clap(short, long)]
        config: Option<PathBuf>,
    },
    /// List the views and pages found under a project root as JSON
    Views {
        /// Project root scanned for views and pages
        #[clap(short, long)]
        project_root: PathBuf,

        /// Optional JSON configuration file
        #[clap(short, long)]
        config: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.json_logs);

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "Starting r4mvc");

    match cli.command {
        Command::Generate {
            model,
            project_root,
            output,
            config,
        } => {
            let config = load_config(config.as_deref())?;
            let written = r4mvc_codegen::generate_from_project(&model, &project_root, &output, &config)
                .with_context(|| format!("Failed to generate companions for {}", project_root.display()))?;
            tracing::info!(files = written, output = %output.display(), "Generation finished");
        }
        Command::Views {
            project_root,
            config,
        } => {
            let config = load_config(config.as_deref())?;
            let views = FileSystemViewLocator::new(&project_root, config.views)
                .find_views()
                .with_context(|| format!("Failed to scan views under {}", project_root.display()))?;
            let json = serde_json::to_string_pretty(&views).context("Failed to serialize views")?;
            println!("{}", json);
        }
    }

    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<ProjectConfig> {
    match path {
        Some(path) => ProjectConfig::load(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display())),
        None => Ok(ProjectConfig::default()),
    }
}
