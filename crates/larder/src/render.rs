//! Text rendering of the tracked collections.
//!
//! Rendering derives everything from current state: the food list is
//! re-sorted by expiry date ascending on every render, the guide list
//! keeps insertion order, and an empty food collection renders a
//! placeholder line instead of a table.

use chrono::NaiveDate;
use serde::Serialize;

use crate::entry::{FoodEntry, GuideEntry};
use crate::expiry::{remaining_days, status_text, Severity};

/// Placeholder shown when no food entries exist.
pub const EMPTY_FOODS_PLACEHOLDER: &str = "No items registered yet";

/// One display row of the food list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FoodRow {
    /// Entry identifier (needed for `remove`).
    pub id: String,
    /// Food name.
    pub name: String,
    /// Storage location.
    pub location: String,
    /// Storage period in days.
    pub period_days: u32,
    /// Expiry date.
    pub expiry_date: NaiveDate,
    /// Whole days remaining (negative when expired).
    pub remaining_days: i64,
    /// Severity classification.
    pub severity: Severity,
    /// Human-readable status text.
    pub status: String,
    /// Whether a reminder has been dispatched.
    pub reminder_sent: bool,
}

/// Derive display rows from the food collection, sorted by expiry
/// ascending. The sort is stable, so entries sharing an expiry date keep
/// their insertion order.
#[must_use]
pub fn food_rows(foods: &[FoodEntry], today: NaiveDate) -> Vec<FoodRow> {
    let mut rows: Vec<FoodRow> = foods
        .iter()
        .map(|food| {
            let remaining = remaining_days(food.expiry_date, today);
            FoodRow {
                id: food.id.clone(),
                name: food.name.clone(),
                location: food.location.clone(),
                period_days: food.period_days,
                expiry_date: food.expiry_date,
                remaining_days: remaining,
                severity: Severity::from_days(remaining),
                status: status_text(remaining),
                reminder_sent: food.reminder_sent,
            }
        })
        .collect();
    rows.sort_by_key(|row| row.expiry_date);
    rows
}

/// Render the food list as a text table.
#[must_use]
pub fn render_foods(foods: &[FoodEntry], today: NaiveDate) -> String {
    if foods.is_empty() {
        return format!("{EMPTY_FOODS_PLACEHOLDER}\n");
    }

    let rows = food_rows(foods, today);
    let name_width = column_width("Name", rows.iter().map(|r| r.name.len()));
    let location_width = column_width("Location", rows.iter().map(|r| r.location.len()));

    let mut out = String::new();
    out.push_str(&format!(
        "{:<name_width$}  {:<location_width$}  {:>6}  {:<10}  {}\n",
        "Name", "Location", "Period", "Expires", "Status",
    ));
    for row in &rows {
        out.push_str(&format!(
            "{:<name_width$}  {:<location_width$}  {:>5}d  {:<10}  {} [{}]\n",
            row.name,
            row.location,
            row.period_days,
            row.expiry_date.format("%Y-%m-%d"),
            row.status,
            row.severity,
        ));
    }
    out
}

/// Render the guide list as a text table, in insertion order.
#[must_use]
pub fn render_guide(guide: &[GuideEntry]) -> String {
    if guide.is_empty() {
        return "No guide entries\n".to_string();
    }

    let name_width = column_width("Name", guide.iter().map(|e| e.name.len()));
    let period_width = column_width("Period", guide.iter().map(|e| e.period.len()));

    let mut out = String::new();
    out.push_str(&format!(
        "{:<name_width$}  {:<period_width$}  {}\n",
        "Name", "Period", "Location",
    ));
    for entry in guide {
        out.push_str(&format!(
            "{:<name_width$}  {:<period_width$}  {}\n",
            entry.name, entry.period, entry.location,
        ));
    }
    out
}

fn column_width(header: &str, lengths: impl Iterator<Item = usize>) -> usize {
    lengths.chain(std::iter::once(header.len())).max().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn food(name: &str, expiry: NaiveDate) -> FoodEntry {
        FoodEntry::new(
            name,
            "Fridge",
            7,
            expiry,
            "me@example.com",
            date(2024, 1, 1),
        )
    }

    #[test]
    fn test_empty_foods_placeholder() {
        let out = render_foods(&[], date(2024, 1, 1));
        assert!(out.contains(EMPTY_FOODS_PLACEHOLDER));
        assert!(!out.contains("Name"));
    }

    #[test]
    fn test_food_rows_sorted_by_expiry_ascending() {
        let foods = vec![
            food("Later", date(2024, 2, 1)),
            food("Soonest", date(2024, 1, 3)),
            food("Middle", date(2024, 1, 10)),
        ];
        let rows = food_rows(&foods, date(2024, 1, 1));

        let names: Vec<_> = rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Soonest", "Middle", "Later"]);
    }

    #[test]
    fn test_food_rows_stable_for_equal_dates() {
        let foods = vec![
            food("First", date(2024, 1, 3)),
            food("Second", date(2024, 1, 3)),
        ];
        let rows = food_rows(&foods, date(2024, 1, 1));
        assert_eq!(rows[0].name, "First");
        assert_eq!(rows[1].name, "Second");
    }

    #[test]
    fn test_food_rows_status_fields() {
        let foods = vec![food("Milk", date(2024, 1, 3))];
        let rows = food_rows(&foods, date(2024, 1, 1));

        assert_eq!(rows[0].remaining_days, 2);
        assert_eq!(rows[0].severity, Severity::Warning);
        assert_eq!(rows[0].status, "2 days left");
    }

    #[test]
    fn test_render_foods_table() {
        let foods = vec![
            food("Milk", date(2024, 1, 3)),
            food("Bread", date(2023, 12, 27)),
        ];
        let out = render_foods(&foods, date(2024, 1, 1));

        assert!(out.contains("Name"));
        assert!(out.contains("2 days left"));
        assert!(out.contains("Expired 5d ago"));
        // Expired item sorts first.
        let bread_pos = out.find("Bread").unwrap();
        let milk_pos = out.find("Milk").unwrap();
        assert!(bread_pos < milk_pos);
    }

    #[test]
    fn test_render_guide_preserves_insertion_order() {
        let guide = vec![
            GuideEntry::new("Zucchini", "5 days", "Crisper Drawer"),
            GuideEntry::new("Apples", "3 weeks", "Fridge"),
        ];
        let out = render_guide(&guide);

        let zucchini_pos = out.find("Zucchini").unwrap();
        let apples_pos = out.find("Apples").unwrap();
        assert!(zucchini_pos < apples_pos);
    }

    #[test]
    fn test_render_guide_empty() {
        assert!(render_guide(&[]).contains("No guide entries"));
    }

    #[test]
    fn test_food_rows_serialize_to_json() {
        let foods = vec![food("Milk", date(2024, 1, 3))];
        let rows = food_rows(&foods, date(2024, 1, 1));

        let json = serde_json::to_value(&rows).unwrap();
        assert_eq!(json[0]["name"], "Milk");
        assert_eq!(json[0]["remaining_days"], 2);
        assert_eq!(json[0]["severity"], "warning");
    }
}
