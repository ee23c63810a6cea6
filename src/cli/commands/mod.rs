//! CLI command implementations
//!
//! Each command is implemented in its own submodule.

pub mod example;
pub mod fmt;
pub mod run;
pub mod toolchain;

use std::path::PathBuf;

use anyhow::Result;
use clap::Subcommand;

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compile and run a Go snippet
    Run {
        /// Snippet file to run (reads stdin when omitted or '-')
        file: Option<PathBuf>,
    },

    /// Format a Go snippet with go fmt
    Fmt {
        /// Snippet file to format (reads stdin when omitted or '-')
        file: Option<PathBuf>,

        /// Rewrite the file in place instead of printing to stdout
        #[arg(short, long)]
        write: bool,
    },

    /// Manage the Go toolchain path
    Toolchain {
        #[command(subcommand)]
        command: ToolchainCommands,
    },

    /// Manage the on-disk example library
    Example {
        #[command(subcommand)]
        command: ExampleCommands,
    },
}

/// Toolchain subcommands
#[derive(Subcommand, Debug)]
pub enum ToolchainCommands {
    /// Show the configured Go toolchain
    Show,

    /// Set and persist the Go toolchain path
    Set {
        /// Path to the go executable
        path: PathBuf,
    },

    /// Auto-detect the Go toolchain on this system
    Detect,

    /// Validate a Go toolchain path
    Validate {
        /// Path to check
        path: PathBuf,
    },
}

/// Example library subcommands
#[derive(Subcommand, Debug)]
pub enum ExampleCommands {
    /// List examples stored in a folder
    List {
        /// Example library folder
        folder: PathBuf,
    },

    /// Seed a folder with a starter example template
    New {
        /// Example library folder
        folder: PathBuf,
    },

    /// Save an example into a folder from a JSON document
    Save {
        /// Example library folder
        folder: PathBuf,

        /// Example JSON file (reads stdin when omitted or '-')
        file: Option<PathBuf>,
    },

    /// Remove an example from a folder by id
    Rm {
        /// Example library folder
        folder: PathBuf,

        /// Example id (file name without .json)
        id: String,
    },
}

impl Commands {
    /// Execute the command
    pub async fn run(self) -> Result<()> {
        match self {
            Self::Run { file } => run::execute(file.as_deref()).await,
            Self::Fmt { file, write } => fmt::execute(file.as_deref(), write).await,
            Self::Toolchain { command } => match command {
                ToolchainCommands::Show => toolchain::execute_show(),
                ToolchainCommands::Set { path } => toolchain::execute_set(path),
                ToolchainCommands::Detect => toolchain::execute_detect(),
                ToolchainCommands::Validate { path } => toolchain::execute_validate(&path),
            },
            Self::Example { command } => match command {
                ExampleCommands::List { folder } => example::execute_list(&folder),
                ExampleCommands::New { folder } => example::execute_new(&folder),
                ExampleCommands::Save { folder, file } => {
                    example::execute_save(&folder, file.as_deref())
                }
                ExampleCommands::Rm { folder, id } => example::execute_rm(&folder, &id),
            },
        }
    }
}
