//! CLI argument parsing with clap

use std::ffi::OsString;

use clap::{Args, Parser, Subcommand};

/// Brokkr - Node.js project scaffolding CLI
#[derive(Parser, Debug)]
#[command(name = "brokkr")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scaffold a new project interactively
    Init(InitArgs),

    /// Register an import path alias across tool configs
    Resolve(ResolveArgs),

    /// Show version information
    Version(VersionArgs),

    /// Unrecognized commands fall through to the usage help
    #[command(external_subcommand)]
    External(Vec<OsString>),
}

// Init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Project name (prompted when omitted)
    #[arg(long)]
    pub name: Option<String>,

    /// Author name (prompted when omitted)
    #[arg(long)]
    pub author: Option<String>,

    /// Author email (prompted when omitted)
    #[arg(long)]
    pub email: Option<String>,

    /// License identifier (prompted when omitted)
    #[arg(short, long)]
    pub license: Option<String>,

    /// Recreate an existing project directory without asking
    #[arg(short, long)]
    pub force: bool,
}

// Resolve command
#[derive(Args, Debug)]
pub struct ResolveArgs {
    /// Alias name to register
    pub alias: String,

    /// Path the alias points at, relative to the working directory
    pub path: String,
}

// Version command
#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}
