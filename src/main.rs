use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod build;
mod commands;
mod config;
mod util;

#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// The command to execute
    #[command(subcommand)]
    command: HellfireCommand,
}

#[derive(Parser)]
struct InitArgs {
    /// The path to initialize the site in
    path: PathBuf,

    /// Whether to create the directory if it doesn't exist
    #[arg(short, long, default_value = "false")]
    create: bool,
}

#[derive(Parser)]
struct BuildArgs {
    /// The path to the configuration file (defaults to hellfire.yaml)
    #[arg(short, long)]
    config_file: Option<PathBuf>,

    /// Override the source directory from the config
    #[arg(short, long)]
    source: Option<PathBuf>,

    /// Override the output directory from the config
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// Delete the output directory before building
    #[arg(long, default_value = "false")]
    clean: bool,
}

#[derive(Parser)]
struct CleanArgs {
    /// The path to the configuration file (defaults to hellfire.yaml)
    #[arg(short, long)]
    config_file: Option<PathBuf>,

    /// Print what would be deleted without deleting anything
    #[arg(long, default_value = "false")]
    dry_run: bool,
}

#[derive(Subcommand)]
enum HellfireCommand {
    /// Initialize a new site with default templates and a sample post
    Init(InitArgs),

    /// Build the site
    Build(BuildArgs),

    /// Delete the generated output directory
    Clean(CleanArgs),
}

fn main() -> Result<(), anyhow::Error> {
    let args = Args::parse();

    match args.command {
        HellfireCommand::Init(args) => {
            commands::init::run(&args)?;
        }
        HellfireCommand::Build(args) => {
            commands::build::run(&args)?;
        }
        HellfireCommand::Clean(args) => {
            commands::clean::run(&args)?;
        }
    }

    Ok(())
}
