//! The reminder sweep.
//!
//! A periodic, idempotent pass over the food collection: entries within
//! the reminder threshold of expiry that have not yet been reminded get
//! exactly one dispatched notification. The `reminder_sent` flag is set
//! at dispatch time, before the send outcome is known, so at-most-once
//! dispatch holds even when the send fails or resolves late.

use chrono::NaiveDate;
use tracing::{info, warn};

use crate::expiry::{remaining_days, Severity};
use crate::inventory::Inventory;
use crate::notify::{Notifier, Reminder};

/// Summary of one sweep pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SweepOutcome {
    /// Entries examined.
    pub checked: usize,
    /// Reminders dispatched this pass.
    pub dispatched: usize,
    /// Entries past their expiry date.
    pub expired: usize,
    /// Entries within the warning window (not yet expired).
    pub warning: usize,
}

/// Run one sweep over the food collection.
///
/// Dispatch failures are logged and otherwise ignored: the flag update is
/// never reversed, no retry happens, and the sweep continues with the
/// remaining entries. The caller persists the collection afterwards.
pub async fn run_sweep(
    inventory: &mut Inventory,
    today: NaiveDate,
    reminder_threshold: i64,
    notifier: &dyn Notifier,
) -> SweepOutcome {
    let mut outcome = SweepOutcome::default();
    let mut due: Vec<(String, Reminder)> = Vec::new();

    for food in inventory.foods() {
        outcome.checked += 1;
        let remaining = remaining_days(food.expiry_date, today);

        match Severity::from_days(remaining) {
            Severity::Expired => outcome.expired += 1,
            Severity::Warning => outcome.warning += 1,
            Severity::Safe => {}
        }

        if (0..=reminder_threshold).contains(&remaining) && !food.reminder_sent {
            due.push((
                food.id.clone(),
                Reminder {
                    item_name: food.name.clone(),
                    expiry_date: food.expiry_date,
                    to_email: food.email.clone(),
                },
            ));
        }
    }

    for (id, reminder) in due {
        // Flag first: the dispatch outcome must not affect the gate.
        inventory.mark_reminder_sent(&id);
        outcome.dispatched += 1;

        match notifier.send(&reminder).await {
            Ok(()) => info!(
                "Reminder sent for '{}' to {}",
                reminder.item_name, reminder.to_email
            ),
            Err(e) => warn!(
                "Reminder dispatch failed for '{}': {}",
                reminder.item_name, e
            ),
        }
    }

    outcome
}
