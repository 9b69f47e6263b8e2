use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "bootenv")]
#[command(about = "Typed key/value environment store for early-boot configuration", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Snapshot file to operate on (defaults to the per-user data dir)
    #[arg(short = 'F', long, global = true)]
    pub file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print variables, or the whole environment
    #[command(alias = "p")]
    Print {
        /// Variable names (all variables when omitted)
        #[arg(required = false, num_args = 0..)]
        names: Vec<String>,
    },

    /// Create or update a variable
    Set {
        name: String,
        value: String,

        /// Bypass write-once protection
        #[arg(short, long)]
        force: bool,
    },

    /// Delete one or more variables
    #[command(alias = "rm")]
    Delete {
        /// Variable names (e.g. bootdelay bootargs)
        #[arg(required = true, num_args = 1..)]
        names: Vec<String>,

        /// Bypass write-once protection
        #[arg(short, long)]
        force: bool,
    },

    /// Show the resolved type of every variable
    Flags,

    /// Arm recovery boot (force-sets bootcmd)
    Recovery,
}
