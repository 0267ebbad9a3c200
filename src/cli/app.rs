//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use super::commands;
use ctf::context::Context;
use ctf::core::models::TrackName;
use ctf::output::{FlagFormat, OutputMode};

/// ctf - Validate and inspect CTF track repositories
#[derive(Parser, Debug)]
#[command(
    name = "ctf",
    version,
    about = "Validate and inspect CTF track repositories",
    long_about = "Validate the tracks of a CTF repository and report on them.\n\n\
                  Every challenges/<track>/track.yaml and its discourse posts are\n\
                  checked against JSON Schemas, then against cross-track rules\n\
                  (unique flags, files and tags, resolvable references, no\n\
                  leftover placeholders)."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// CTF repository root (default: discovered from the current directory, then CTF_ROOT_DIR)
    #[arg(long, global = true, value_name = "DIR")]
    pub root: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the JSON Schema gate and every validator over all tracks
    Validate {
        /// Do not check documents against the JSON Schemas
        #[arg(long)]
        skip_schemas: bool,
    },

    /// List tracks and their contacts
    List,

    /// Print the flags of the selected tracks
    Flags {
        /// Only flags from the given tracks (use the directory name)
        #[arg(short, long = "tracks", value_name = "TRACK")]
        tracks: Vec<TrackName>,

        /// Output format
        #[arg(long, value_enum, default_value_t = FlagFormat::Json)]
        format: FlagFormat,
    },

    /// Print the services of the selected tracks
    Services {
        /// Only services from the given tracks (use the directory name)
        #[arg(short, long = "tracks", value_name = "TRACK")]
        tracks: Vec<TrackName>,
    },

    /// Print statistics about the selected tracks
    Stats {
        /// Only statistics about the given tracks (use the directory name)
        #[arg(short, long = "tracks", value_name = "TRACK")]
        tracks: Vec<TrackName>,
    },

    /// Show version
    Version,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let context = || Context::discover(cli.root.as_deref());

    match cli.command {
        Some(Command::Validate { skip_schemas }) => {
            commands::validate(&context()?, skip_schemas, output_mode)
        },
        Some(Command::List) => commands::list(&context()?, output_mode),
        Some(Command::Flags { ref tracks, format }) => commands::flags(&context()?, tracks, format),
        Some(Command::Services { ref tracks }) => {
            commands::services(&context()?, tracks, output_mode)
        },
        Some(Command::Stats { ref tracks }) => commands::stats(&context()?, tracks),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": ctf::VERSION
                    })
                );
            } else {
                println!("ctf v{}", ctf::VERSION);
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": ctf::VERSION,
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("ctf v{}", ctf::VERSION);
                println!("\nRun 'ctf --help' for usage");
                println!("Run 'ctf validate' to check every track");
            }
            Ok(())
        },
    }
}
