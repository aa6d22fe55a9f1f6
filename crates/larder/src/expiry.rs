//! Expiry computation for tracked food entries.
//!
//! Remaining days are computed by calendar-date subtraction, so the result
//! depends only on the date, never on the time of day the check runs. The
//! current date is always passed in by the caller.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Items with this many days or fewer remaining are classified as warning.
pub const WARNING_WINDOW_DAYS: i64 = 3;

/// Three-way classification of an entry's proximity to expiry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// The expiry date has passed.
    Expired,
    /// Expires within the warning window.
    Warning,
    /// Expiry is comfortably in the future.
    Safe,
}

impl Severity {
    /// Classify a remaining-day count.
    #[must_use]
    pub fn from_days(days: i64) -> Self {
        if days < 0 {
            Self::Expired
        } else if days <= WARNING_WINDOW_DAYS {
            Self::Warning
        } else {
            Self::Safe
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Expired => write!(f, "expired"),
            Self::Warning => write!(f, "warning"),
            Self::Safe => write!(f, "safe"),
        }
    }
}

/// Compute whole days remaining until expiry.
///
/// Both dates are date-only values, so this is exact calendar subtraction:
/// zero means the item expires today, negative means it already expired.
#[must_use]
pub fn remaining_days(expiry: NaiveDate, today: NaiveDate) -> i64 {
    (expiry - today).num_days()
}

/// Human-readable status text for a remaining-day count.
#[must_use]
pub fn status_text(days: i64) -> String {
    if days < 0 {
        format!("Expired {}d ago", days.abs())
    } else if days == 0 {
        "Expires Today".to_string()
    } else if days == 1 {
        "Expires Tomorrow".to_string()
    } else {
        format!("{days} days left")
    }
}
