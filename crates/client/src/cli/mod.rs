//! CLI command definitions.

pub mod todos;

use clap::{Parser, ValueEnum};

/// CLI client for the todos API.
#[derive(Debug, Parser)]
#[command(name = "todos-client")]
#[command(about = "CLI client for the todos API", long_about = None)]
pub struct Cli {
    /// Server base URL.
    #[arg(long, env = "TODOS_URL", default_value = "http://localhost:3000")]
    pub base_url: String,

    /// Bearer token (JWT) identifying the caller.
    #[arg(long, env = "TODOS_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Output format.
    #[arg(long, default_value = "pretty")]
    pub format: OutputFormat,

    /// Suppress non-essential output.
    #[arg(long)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: todos::TodosAction,
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Raw JSON output.
    Json,
    /// Human-readable output.
    #[default]
    Pretty,
}
