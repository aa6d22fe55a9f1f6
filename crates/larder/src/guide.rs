//! Shelf-life guide: built-in defaults, lookup, and autofill.
//!
//! The guide is a list of reusable shelf-life/location guidelines. Names
//! are a non-enforced lookup key: duplicates are allowed and lookup takes
//! the first match in insertion order.

use crate::entry::GuideEntry;
use crate::period::parse_period_days;

/// Values derived from a guide entry to prefill a new food entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Autofill {
    /// Storage location taken directly from the guide entry.
    pub location: String,
    /// Day count derived from the guide entry's free-text period.
    pub period_days: u32,
}

/// The guide entries seeded on first run.
#[must_use]
pub fn builtin_guide() -> Vec<GuideEntry> {
    let defaults = [
        ("Carrots", "2 weeks", "Crisper Drawer"),
        ("Cucumber", "5 days", "Crisper Drawer"),
        ("Tomatoes", "5 days", "Pantry"),
        ("Cabbage", "2 weeks", "Crisper Drawer"),
        ("Bell Peppers", "10 days", "Crisper Drawer"),
        ("Onions", "3 weeks", "Pantry"),
        ("Potatoes", "3 weeks", "Pantry"),
        ("Milk", "7 days", "Fridge"),
        ("Bread", "5 days", "Pantry"),
        ("Curd/Yogurt", "10 days", "Fridge"),
        ("Eggs", "3 weeks", "Fridge"),
        ("Chicken (Raw)", "2 days", "Fridge"),
        ("Meat (Raw)", "3 days", "Fridge"),
        ("Cooked Leftovers", "4 days", "Fridge"),
    ];

    defaults
        .iter()
        .enumerate()
        .map(|(i, (name, period, location))| GuideEntry {
            id: (i + 1).to_string(),
            name: (*name).to_string(),
            period: (*period).to_string(),
            location: (*location).to_string(),
        })
        .collect()
}

/// Find the first guide entry with a matching name.
#[must_use]
pub fn find_by_name<'a>(guide: &'a [GuideEntry], name: &str) -> Option<&'a GuideEntry> {
    guide.iter().find(|entry| entry.name == name)
}

/// Derive autofill values for a food name from the guide.
///
/// Returns `None` when no guide entry matches; the period falls back to
/// the parser's one-week default when the matched entry's text is
/// unrecognized.
#[must_use]
pub fn autofill(guide: &[GuideEntry], name: &str) -> Option<Autofill> {
    find_by_name(guide, name).map(|entry| Autofill {
        location: entry.location.clone(),
        period_days: parse_period_days(&entry.period),
    })
}
