//! CLI command definitions.
//!
//! This module defines the structure of all CLI subcommands.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Subcommand};

/// Add command arguments.
///
/// Fields the user omits are filled from the shelf-life guide (location
/// and period, when the name matches a guide entry) and from configuration
/// (the default reminder recipient). Anything still missing is reported as
/// a validation error rather than a usage error.
#[derive(Debug, Args)]
pub struct AddCommand {
    /// Name of the food item (guide names enable autofill)
    pub name: Option<String>,

    /// Storage location, e.g. "Fridge"
    #[arg(short, long)]
    pub location: Option<String>,

    /// Storage period in days
    #[arg(short = 'd', long)]
    pub days: Option<u32>,

    /// Expiry date (YYYY-MM-DD); defaults to today + period
    #[arg(short, long)]
    pub expires: Option<NaiveDate>,

    /// Reminder recipient email
    #[arg(short = 'm', long)]
    pub email: Option<String>,
}

/// List command arguments.
#[derive(Debug, Args)]
pub struct ListCommand {
    /// Output as JSON
    #[arg(short, long)]
    pub json: bool,
}

/// Remove command arguments.
#[derive(Debug, Args)]
pub struct RemoveCommand {
    /// Identifier of the entry to remove
    pub id: String,

    /// Skip confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}

/// Shelf-life guide commands.
#[derive(Debug, Subcommand)]
pub enum GuideCommand {
    /// Add a guide entry
    Add {
        /// Food name (acts as the autofill lookup key)
        name: Option<String>,

        /// Shelf-life period as free text, e.g. "2 weeks"
        #[arg(short, long)]
        period: Option<String>,

        /// Suggested storage location
        #[arg(short, long)]
        location: Option<String>,
    },

    /// List guide entries
    List {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Remove a guide entry
    Remove {
        /// Identifier of the entry to remove
        id: String,

        /// Skip confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

/// Status command arguments.
#[derive(Debug, Args)]
pub struct StatusCommand {
    /// Output as JSON
    #[arg(short, long)]
    pub json: bool,
}

/// Configuration commands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Show the configuration file path
    Path,

    /// Validate configuration
    Validate {
        /// Path to configuration file to validate
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}
