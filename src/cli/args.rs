//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// vercheck - Decide whether installed modules meet required versions.
#[derive(Debug, Parser)]
#[command(name = "vercheck")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to manifest file (overrides vercheck.yml discovery)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to project root (overrides current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Only consult the manifest's static module registry
    #[arg(long, global = true)]
    pub registry_only: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Decide whether one module needs installing
    Check(CheckArgs),

    /// Parse a dotted version into its integer segments
    Parse(ParseArgs),

    /// Check every requirement in the manifest
    Verify(VerifyArgs),
}

/// Arguments for the `check` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct CheckArgs {
    /// Module name to look up
    pub module: String,

    /// Minimum required version (dotted integers, e.g. 2.30.0)
    pub required: String,

    /// Output the full decision as JSON
    #[arg(long)]
    pub json: bool,

    /// Exit with status 3 when an install is needed
    #[arg(long)]
    pub exit_code: bool,
}

/// Arguments for the `parse` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ParseArgs {
    /// Dotted version string
    #[arg(id = "version_string", value_name = "VERSION")]
    pub version: String,

    /// Output segments as a JSON array
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `verify` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct VerifyArgs {
    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}
