//! List item model.
//!
//! # Responsibility
//! - Define the named, checkable record stored in the list.
//! - Provide in-place mutation helpers used by the store.
//!
//! # Invariants
//! - `id` is assigned once at creation and never reused.
//! - Items start unchecked unless seeded otherwise.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque identifier assigned to every item at creation.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type ItemId = Uuid;

/// One shopping list entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Stable opaque id. Not used for addressing.
    pub id: ItemId,
    /// Display name. May be empty when the session accepts empty names.
    pub name: String,
    /// Whether the item is checked off.
    pub checked: bool,
}

impl Item {
    /// Creates an unchecked item with a generated id.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_checked(name, false)
    }

    /// Creates an item with an explicit checked flag, used for seeding.
    pub fn with_checked(name: impl Into<String>, checked: bool) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            checked,
        }
    }

    /// Flips the checked flag.
    pub fn toggle(&mut self) {
        self.checked = !self.checked;
    }

    /// Replaces the display name.
    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Returns whether this item renders as an edit form.
    ///
    /// Checked items are display-only.
    pub fn is_editable(&self) -> bool {
        !self.checked
    }
}

#[cfg(test)]
mod tests {
    use super::Item;

    #[test]
    fn new_item_is_unchecked_with_fresh_id() {
        let first = Item::new("apples");
        let second = Item::new("apples");

        assert!(!first.checked);
        assert!(!first.id.is_nil());
        assert_ne!(first.id, second.id);
    }

    #[test]
    fn toggle_flips_and_editable_follows() {
        let mut item = Item::new("milk");
        assert!(item.is_editable());

        item.toggle();
        assert!(item.checked);
        assert!(!item.is_editable());

        item.toggle();
        assert!(!item.checked);
    }

    #[test]
    fn rename_keeps_identity() {
        let mut item = Item::with_checked("bread", true);
        let id = item.id;

        item.rename("rye bread");
        assert_eq!(item.name, "rye bread");
        assert_eq!(item.id, id);
        assert!(item.checked);
    }
}
