//! `sf-ant`: run Ant Migration Tool targets from `sf-ant.toml`.
//!
//! ```sh
//! sf-ant deploy dev
//! sf-ant --config ci.toml retrieve prod
//! sf-ant manifest dev --destructive
//! RUST_LOG=debug sf-ant list objects
//! ```

use std::io::IsTerminal;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use busbar_sf_metadata::registry;
use busbar_sf_tasks::{plan, ProjectConfig, TaskKind, TaskRunner, CONFIG_FILE};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "sf-ant",
    about = "Deploy, retrieve and inspect Salesforce metadata with the Ant Migration Tool",
    version
)]
struct Cli {
    /// Project file
    #[arg(long, short = 'c', global = true, value_name = "PATH", default_value = CONFIG_FILE)]
    config: PathBuf,

    /// Ant executable (overrides `[ant] command`)
    #[arg(long, global = true, value_name = "PATH", env = "SF_ANT_COMMAND")]
    ant: Option<String>,

    /// Directory holding ant-salesforce.jar (overrides `[ant] lib_dir`)
    #[arg(long, global = true, value_name = "DIR", env = "SF_ANT_LIB")]
    lib: Option<PathBuf>,

    /// Debug logging, including the Ant command line
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate package.xml in the target's root and deploy it
    Deploy { target: String },

    /// Delete the target's components with destructiveChanges.xml
    Destroy { target: String },

    /// Retrieve the target's package
    Retrieve { target: String },

    /// Describe the org's metadata types
    Describe { target: String },

    /// List the org's components of one metadata type
    List { target: String },

    /// Print the manifest a target would produce, without running Ant
    Manifest {
        target: String,

        /// Print the destroy target's package.xml and destructiveChanges.xml
        #[arg(long)]
        destructive: bool,

        /// Section the target is read from
        #[arg(long, value_enum, default_value = "deploy", conflicts_with = "destructive")]
        task: ManifestTask,
    },

    /// List the known metadata types
    Types,
}

#[derive(Clone, Copy, ValueEnum)]
enum ManifestTask {
    Deploy,
    Retrieve,
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("sf_ant=debug,busbar_sf_tasks=debug")
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("sf_ant=info,busbar_sf_tasks=info"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .compact()
        .init();
}

fn load_config(path: &Path) -> Result<ProjectConfig> {
    ProjectConfig::load(path).with_context(|| format!("Failed to load {}", path.display()))
}

fn print_types() {
    println!("{:<28} {:<36} FOLDER", "KEY", "TYPE");
    for entry in registry::entries() {
        println!(
            "{:<28} {:<36} {}",
            entry.key,
            entry.xml_type,
            entry.folder.unwrap_or("-")
        );
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let (kind, target) = match cli.command {
        Command::Types => {
            print_types();
            return Ok(());
        }
        Command::Manifest {
            target,
            destructive,
            task,
        } => {
            let kind = match (destructive, task) {
                (true, _) => TaskKind::Destroy,
                (false, ManifestTask::Deploy) => TaskKind::Deploy,
                (false, ManifestTask::Retrieve) => TaskKind::Retrieve,
            };
            let config = load_config(&cli.config)?;
            let manifests = plan(&config, kind, &target)
                .with_context(|| format!("Failed to build manifest for {} target {}", kind, target))?;
            print!("{}", manifests);
            return Ok(());
        }
        Command::Deploy { target } => (TaskKind::Deploy, target),
        Command::Destroy { target } => (TaskKind::Destroy, target),
        Command::Retrieve { target } => (TaskKind::Retrieve, target),
        Command::Describe { target } => (TaskKind::Describe, target),
        Command::List { target } => (TaskKind::List, target),
    };

    let config = load_config(&cli.config)?;
    let mut ant = config.ant.clone();
    if let Some(command) = cli.ant {
        ant = ant.with_command(command);
    }
    if let Some(lib) = cli.lib {
        ant = ant.with_lib_dir(lib);
    }

    let runner = TaskRunner::process(ant).context("Failed to prepare task runner")?;
    runner
        .run(&config, kind, &target)
        .await
        .with_context(|| format!("{} target {} failed", kind, target))?;

    Ok(())
}
