//! Application state: the two tracked collections and their operations.
//!
//! `Inventory` is an explicit state struct (no singleton): it holds the
//! food and guide collections in memory, validates mutations, and leaves
//! persistence and rendering to thin adapter layers around it.

use chrono::NaiveDate;
use tracing::debug;

use crate::entry::{FoodEntry, GuideEntry};
use crate::error::{Error, Result};
use crate::guide::builtin_guide;
use crate::store::Store;

/// A food entry as assembled from user input, before validation.
///
/// Fields the user may omit are optional; [`Inventory::add_food`] rejects
/// the draft if any required value is missing.
#[derive(Debug, Clone, Default)]
pub struct FoodDraft {
    /// Food name.
    pub name: String,
    /// Storage location.
    pub location: String,
    /// Storage period in days.
    pub period_days: Option<u32>,
    /// Expiry date.
    pub expiry_date: Option<NaiveDate>,
    /// Reminder recipient.
    pub email: String,
}

/// In-memory application state holding both collections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inventory {
    foods: Vec<FoodEntry>,
    guide: Vec<GuideEntry>,
}

impl Inventory {
    /// Load both collections from the store, seeding defaults for any
    /// collection that has never been written.
    ///
    /// Seeded defaults are written back immediately so a subsequent run
    /// loads them verbatim: an empty food list and the built-in guide.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read or written.
    pub fn load_or_seed(store: &Store) -> Result<Self> {
        let foods = match store.load_foods()? {
            Some(foods) => foods,
            None => {
                debug!("No stored foods, seeding empty collection");
                store.save_foods(&[])?;
                Vec::new()
            }
        };

        let guide = match store.load_guide()? {
            Some(guide) => guide,
            None => {
                debug!("No stored guide, seeding built-in defaults");
                let defaults = builtin_guide();
                store.save_guide(&defaults)?;
                defaults
            }
        };

        Ok(Self { foods, guide })
    }

    /// The tracked food entries, in insertion order.
    #[must_use]
    pub fn foods(&self) -> &[FoodEntry] {
        &self.foods
    }

    /// The guide entries, in insertion order.
    #[must_use]
    pub fn guide(&self) -> &[GuideEntry] {
        &self.guide
    }

    /// Validate a draft and append it as a new food entry, returning a
    /// copy of the stored entry.
    ///
    /// All five fields are required; the first missing or invalid one is
    /// reported and nothing is mutated.
    ///
    /// # Errors
    ///
    /// Returns a validation error naming the offending field.
    pub fn add_food(&mut self, draft: FoodDraft, today: NaiveDate) -> Result<FoodEntry> {
        if draft.name.trim().is_empty() {
            return Err(Error::missing_field("name"));
        }
        if draft.location.trim().is_empty() {
            return Err(Error::missing_field("location"));
        }
        let period_days = draft
            .period_days
            .ok_or_else(|| Error::missing_field("period"))?;
        if period_days == 0 {
            return Err(Error::invalid_field("period", "must be at least one day"));
        }
        let expiry_date = draft
            .expiry_date
            .ok_or_else(|| Error::missing_field("expiry date"))?;
        if draft.email.trim().is_empty() {
            return Err(Error::missing_field("email"));
        }

        let entry = FoodEntry::new(
            draft.name,
            draft.location,
            period_days,
            expiry_date,
            draft.email,
            today,
        );
        debug!("Adding food entry '{}' ({})", entry.name, entry.id);
        self.foods.push(entry.clone());
        Ok(entry)
    }

    /// Remove a food entry by identifier.
    ///
    /// Returns `true` if an entry was removed; an unknown id is a no-op.
    pub fn delete_food(&mut self, id: &str) -> bool {
        let before = self.foods.len();
        self.foods.retain(|food| food.id != id);
        self.foods.len() < before
    }

    /// Find a food entry by identifier.
    #[must_use]
    pub fn find_food(&self, id: &str) -> Option<&FoodEntry> {
        self.foods.iter().find(|food| food.id == id)
    }

    /// Set the reminder flag on an entry.
    ///
    /// The flag is monotonic: this is the only mutation path and it never
    /// clears a flag that is already set. Returns `false` for unknown ids.
    pub fn mark_reminder_sent(&mut self, id: &str) -> bool {
        match self.foods.iter_mut().find(|food| food.id == id) {
            Some(food) => {
                food.reminder_sent = true;
                true
            }
            None => false,
        }
    }

    /// Validate and append a new guide entry, returning a copy of the
    /// stored entry.
    ///
    /// # Errors
    ///
    /// Returns a validation error naming the offending field.
    pub fn add_guide(
        &mut self,
        name: &str,
        period: &str,
        location: &str,
    ) -> Result<GuideEntry> {
        if name.trim().is_empty() {
            return Err(Error::missing_field("name"));
        }
        if location.trim().is_empty() {
            return Err(Error::missing_field("location"));
        }
        if period.trim().is_empty() {
            return Err(Error::missing_field("period"));
        }

        // Duplicate names are allowed; lookup stays first-match.
        let entry = GuideEntry::new(name.trim(), period.trim(), location.trim());
        debug!("Adding guide entry '{}' ({})", entry.name, entry.id);
        self.guide.push(entry.clone());
        Ok(entry)
    }

    /// Remove a guide entry by identifier.
    ///
    /// Returns `true` if an entry was removed; an unknown id is a no-op.
    pub fn delete_guide(&mut self, id: &str) -> bool {
        let before = self.guide.len();
        self.guide.retain(|entry| entry.id != id);
        self.guide.len() < before
    }

    /// Find a guide entry by identifier.
    #[must_use]
    pub fn find_guide(&self, id: &str) -> Option<&GuideEntry> {
        self.guide.iter().find(|entry| entry.id == id)
    }

    /// Persist the food collection.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    pub fn persist_foods(&self, store: &Store) -> Result<()> {
        store.save_foods(&self.foods)
    }

    /// Persist the guide collection.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    pub fn persist_guide(&self, store: &Store) -> Result<()> {
        store.save_guide(&self.guide)
    }
}
