mod commands;
mod formatting;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::Level;

#[derive(Parser)]
#[command(name = "polybundle")]
#[command(about = "Derive bundler build plans for the packages of a JavaScript monorepo")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Workspace root holding `polybundle.toml` and the packages directory.
    #[arg(long, default_value = ".")]
    root: PathBuf,

    /// Overrides the packages directory from the workspace config.
    #[arg(long)]
    packages_dir: Option<PathBuf>,

    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[arg(short, long, action)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the build configurations of each package.
    Plan {
        packages: Vec<String>,
        #[arg(long, action)]
        json: bool,
    },
    /// List discovered packages.
    List {
        #[arg(long, action)]
        json: bool,
    },
    /// Remove the build output directory of each package.
    Clean { packages: Vec<String> },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.quiet {
        Level::ERROR
    } else {
        match cli.verbose {
            0 => Level::INFO,
            1 => Level::DEBUG,
            _ => Level::TRACE,
        }
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .init();

    let workspace = commands::Workspace::open(cli.root, cli.packages_dir)?;

    match cli.command {
        Commands::Plan { packages, json } => commands::cmd_plan(&workspace, packages, json)?,
        Commands::List { json } => commands::cmd_list(&workspace, json)?,
        Commands::Clean { packages } => commands::cmd_clean(&workspace, packages)?,
    }

    Ok(())
}
