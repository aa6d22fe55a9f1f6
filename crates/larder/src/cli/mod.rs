//! Command-line interface for larder.
//!
//! This module provides the CLI structure and command definitions for the
//! `larder` binary.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use commands::{
    AddCommand, ConfigCommand, GuideCommand, ListCommand, RemoveCommand, StatusCommand,
};

/// larder - Track your perishables before they track you
///
/// A local food-inventory tracker: register perishable items with a
/// storage location and expiry date, list what is nearing expiry, and get
/// an email reminder before items go bad.
#[derive(Debug, Parser)]
#[command(name = "larder")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to custom configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// The command to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Add a food item to the inventory
    Add(AddCommand),

    /// List tracked food items, soonest expiry first
    List(ListCommand),

    /// Remove a food item by identifier
    Remove(RemoveCommand),

    /// View or modify the shelf-life guide
    #[command(subcommand)]
    Guide(GuideCommand),

    /// Run one reminder sweep and exit
    Sweep,

    /// Run the reminder sweep on an interval (default every 24 hours)
    Watch,

    /// Show inventory and store status
    Status(StatusCommand),

    /// View or validate configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

impl Cli {
    /// Get the verbosity level based on flags.
    #[must_use]
    pub fn verbosity(&self) -> crate::logging::Verbosity {
        if self.quiet {
            crate::logging::Verbosity::Quiet
        } else {
            match self.verbose {
                0 => crate::logging::Verbosity::Normal,
                1 => crate::logging::Verbosity::Verbose,
                _ => crate::logging::Verbosity::Trace,
            }
        }
    }
}
