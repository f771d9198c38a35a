//! CLI command definitions and handlers

use clap::{Parser, Subcommand};
pub use clap_complete::Shell;

pub mod args;
pub mod completions;
pub mod context;
pub mod login;
pub mod logout;
pub mod status;
pub mod token;
pub mod whoami;

pub use args::{GlobalOptions, OutputFormat};
pub use context::CommandContext;

/// Mediop CLI - companion for the Medilink clinic platform
#[derive(Parser, Debug)]
#[command(name = "mediop")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (pretty, table, json)
    #[arg(
        long,
        global = true,
        env = "MEDIOP_FORMAT",
        default_value = "pretty",
        hide_env = true,
        hide_possible_values = true
    )]
    pub format: OutputFormat,

    /// Override config file location
    #[arg(long, global = true, env = "MEDIOP_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// Custom API host (self-hosted deployments, testing)
    #[arg(long, global = true, env = "MEDIOP_API_HOST", hide_env = true)]
    pub api_host: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true, env = "MEDIOP_DEBUG", hide_env = true)]
    pub debug: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Sign in to the Medilink platform
    Login {
        /// Account email (prompted for when omitted)
        #[arg(long)]
        email: Option<String>,

        /// Account password (prompted for when omitted; prefer the prompt
        /// over leaving passwords in shell history)
        #[arg(long)]
        password: Option<String>,
    },

    /// Sign out and clear the stored session
    Logout,

    /// Show session and configuration status
    Status,

    /// Show the signed-in identity
    Whoami,

    /// Print the bearer token for scripting
    Token,

    /// Display version information
    Version,

    /// Generate shell completions
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
