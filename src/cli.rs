use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::model::{DEFAULT_COLOR, MAX_STEPS, Options};

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub action: Action,
}

#[derive(Subcommand, Debug)]
pub enum Action {
    /// Execute a script and report its trace
    Run {
        /// Script file
        script: PathBuf,
        /// Print the full result as JSON instead of a summary
        #[arg(long)]
        json: bool,
        /// Also write the full result as JSON into this file
        #[arg(long)]
        json_out: Option<PathBuf>,
        /// Also draw the trace into this SVG file
        #[arg(long)]
        svg: Option<PathBuf>,
        #[command(flatten)]
        options: RunOptions,
    },
    /// Execute a script and check it against a level
    Check {
        level: u32,
        script: PathBuf,
        /// Level catalog (.json); defaults to the built-in one
        #[arg(long)]
        levels: Option<PathBuf>,
        #[command(flatten)]
        options: RunOptions,
    },
    /// Draw a level's solution into an SVG file
    Preview {
        level: u32,
        #[arg(long)]
        svg: PathBuf,
        #[arg(long)]
        levels: Option<PathBuf>,
    },
    /// List the level catalog
    Levels {
        #[arg(long)]
        levels: Option<PathBuf>,
    },
}

#[derive(Args, Debug, Clone)]
pub struct RunOptions {
    /// Stop silently after this many steps
    #[arg(long, default_value_t = MAX_STEPS)]
    pub max_steps: usize,
    /// Initial pen colour
    #[arg(long, default_value = DEFAULT_COLOR)]
    pub color: String,
}

impl From<RunOptions> for Options {
    fn from(o: RunOptions) -> Self {
        Options {
            max_steps: o.max_steps,
            default_color: o.color,
        }
    }
}
