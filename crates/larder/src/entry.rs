//! Core entry types for larder.
//!
//! This module defines the fundamental data structures for tracked food
//! items and reusable shelf-life guide entries.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A tracked perishable item.
///
/// Entries are immutable once added except for the `reminder_sent` flag,
/// which only ever transitions from `false` to `true`. There is no edit
/// operation, only add and delete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoodEntry {
    /// Unique identifier for this entry.
    pub id: String,

    /// Food name, typically drawn from a guide entry's name.
    pub name: String,

    /// Where the item is stored (free text, e.g. "Fridge").
    pub location: String,

    /// Storage period in days.
    pub period_days: u32,

    /// Calendar date the item expires (no time component).
    pub expiry_date: NaiveDate,

    /// Email address to remind when the item nears expiry.
    pub email: String,

    /// Calendar date the item was registered.
    pub added_date: NaiveDate,

    /// Whether an expiry reminder has already been dispatched.
    #[serde(default)]
    pub reminder_sent: bool,
}

impl FoodEntry {
    /// Create a new food entry with a fresh identifier.
    ///
    /// The reminder flag starts unset and `added_date` is the injected
    /// current date, so construction stays independent of the wall clock.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        location: impl Into<String>,
        period_days: u32,
        expiry_date: NaiveDate,
        email: impl Into<String>,
        today: NaiveDate,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            location: location.into(),
            period_days,
            expiry_date,
            email: email.into(),
            added_date: today,
            reminder_sent: false,
        }
    }
}

/// A reusable shelf-life/location guideline used to autofill food entries.
///
/// The name acts as a non-enforced lookup key: duplicate names are
/// permitted and only the first match is used by lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuideEntry {
    /// Unique identifier for this entry.
    pub id: String,

    /// Food name used as the lookup key for autofill.
    pub name: String,

    /// Shelf-life period as free text, e.g. "2 weeks" or "5 days".
    pub period: String,

    /// Suggested storage location (free text).
    pub location: String,
}

impl GuideEntry {
    /// Create a new guide entry with a fresh identifier.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        period: impl Into<String>,
        location: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            period: period.into(),
            location: location.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_food_entry_new() {
        let today = date(2024, 1, 1);
        let entry = FoodEntry::new(
            "Milk",
            "Fridge",
            7,
            date(2024, 1, 8),
            "me@example.com",
            today,
        );

        assert!(!entry.id.is_empty());
        assert_eq!(entry.name, "Milk");
        assert_eq!(entry.location, "Fridge");
        assert_eq!(entry.period_days, 7);
        assert_eq!(entry.expiry_date, date(2024, 1, 8));
        assert_eq!(entry.email, "me@example.com");
        assert_eq!(entry.added_date, today);
        assert!(!entry.reminder_sent);
    }

    #[test]
    fn test_food_entry_ids_unique() {
        let today = date(2024, 1, 1);
        let a = FoodEntry::new("Milk", "Fridge", 7, date(2024, 1, 8), "a@b.c", today);
        let b = FoodEntry::new("Milk", "Fridge", 7, date(2024, 1, 8), "a@b.c", today);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_food_entry_serialization() {
        let entry = FoodEntry::new(
            "Bread",
            "Pantry",
            5,
            date(2024, 3, 10),
            "me@example.com",
            date(2024, 3, 5),
        );

        let json = serde_json::to_string(&entry).unwrap();
        let deserialized: FoodEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(entry, deserialized);
    }

    #[test]
    fn test_food_entry_reminder_flag_defaults_on_deserialize() {
        // Records written before the reminder flag existed load as unsent.
        let json = r#"{
            "id": "1",
            "name": "Eggs",
            "location": "Fridge",
            "period_days": 21,
            "expiry_date": "2024-02-01",
            "email": "me@example.com",
            "added_date": "2024-01-11"
        }"#;
        let entry: FoodEntry = serde_json::from_str(json).unwrap();
        assert!(!entry.reminder_sent);
    }

    #[test]
    fn test_guide_entry_new() {
        let entry = GuideEntry::new("Carrots", "2 weeks", "Crisper Drawer");
        assert!(!entry.id.is_empty());
        assert_eq!(entry.name, "Carrots");
        assert_eq!(entry.period, "2 weeks");
        assert_eq!(entry.location, "Crisper Drawer");
    }

    #[test]
    fn test_guide_entry_serialization() {
        let entry = GuideEntry::new("Onions", "3 weeks", "Pantry");
        let json = serde_json::to_string(&entry).unwrap();
        let deserialized: GuideEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(entry, deserialized);
    }
}
