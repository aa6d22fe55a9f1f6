//! `larder` - A local household food-inventory tracker
//!
//! This library provides the core functionality for tracking perishable
//! food items: a shelf-life guide with autofill, expiry classification,
//! and a periodic reminder sweep that dispatches email notifications for
//! items nearing expiry.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod cli;
pub mod config;
pub mod entry;
pub mod error;
pub mod expiry;
pub mod guide;
pub mod inventory;
pub mod logging;
pub mod notify;
pub mod period;
pub mod render;
pub mod store;
pub mod sweep;

pub use config::Config;
pub use entry::{FoodEntry, GuideEntry};
pub use error::{Error, Result};
pub use expiry::{remaining_days, status_text, Severity};
pub use inventory::{FoodDraft, Inventory};
pub use logging::init_logging;
pub use notify::{EmailNotifier, Notifier, Reminder};
pub use store::Store;
pub use sweep::{run_sweep, SweepOutcome};
