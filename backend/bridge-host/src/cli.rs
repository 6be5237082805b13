use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "bridge-host")]
#[command(about = "Host for the embedded JSON-RPC server")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Config directory (defaults to BRIDGE_CONFIG_DIR, then ./.bridge)
    #[arg(long, global = true)]
    pub config_dir: Option<PathBuf>,

    /// Override the configured log level (off, error, warn, info, debug, trace)
    #[arg(long, global = true)]
    pub log_level: Option<String>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Start the server, print its port and run until SIGINT/SIGTERM
    Run,

    /// Control the server with commands read from stdin
    Console,
}
