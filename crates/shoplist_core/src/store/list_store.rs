//! In-memory list store.
//!
//! # Responsibility
//! - Hold the canonical `items` sequence, `hide_checked` and `search_term`.
//! - Apply add/toggle/delete/rename and modifier updates synchronously.
//!
//! # Invariants
//! - New items are prepended; delete removes exactly one position.
//! - Ordering changes only through add and delete.
//! - Indexes always refer to the canonical sequence, never a filtered view.
//! - The store performs no name validation.

use crate::model::item::Item;
use crate::logging::ListEvent;
use log::Level;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Store-layer error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Index outside `[0, len)` for an index-based operation.
    ///
    /// Signals a desynchronization between the view and the store.
    IndexOutOfRange {
        op: &'static str,
        index: usize,
        len: usize,
    },
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IndexOutOfRange { op, index, len } => write!(
                f,
                "{op}: index {index} out of range for list of length {len}"
            ),
        }
    }
}

impl Error for StoreError {}

/// Canonical list state for one session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListState {
    items: Vec<Item>,
    hide_checked: bool,
    search_term: String,
}

impl ListState {
    /// Creates an empty list with no active modifiers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a list from an ordered item sequence.
    pub fn with_items(items: Vec<Item>) -> Self {
        Self {
            items,
            ..Self::default()
        }
    }

    /// Creates the fixed session seed list.
    pub fn seeded() -> Self {
        Self::with_items(seed_items())
    }

    /// Canonical item sequence.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Item at canonical `index`, if any.
    pub fn get(&self, index: usize) -> Option<&Item> {
        self.items.get(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn hide_checked(&self) -> bool {
        self.hide_checked
    }

    /// Active search term. Empty means no search filter.
    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// Prepends an unchecked item named `name`.
    ///
    /// Accepts any string, including empty.
    pub fn add_item(&mut self, name: impl Into<String>) {
        let item = Item::new(name);
        let name_len = item.name.chars().count();
        self.items.insert(0, item);
        store_event("item_added")
            .with("name_len", name_len)
            .with("len", self.items.len())
            .emit(Level::Debug);
    }

    /// Flips `checked` on the item at `index`.
    ///
    /// # Errors
    /// - `StoreError::IndexOutOfRange` when `index >= len`.
    pub fn toggle_checked(&mut self, index: usize) -> StoreResult<()> {
        let item = self.item_mut("toggle_checked", index)?;
        item.toggle();
        store_event("item_toggled")
            .with("index", index)
            .with("checked", item.checked)
            .emit(Level::Debug);
        Ok(())
    }

    /// Removes the item at `index`, shifting later items down by one.
    ///
    /// # Errors
    /// - `StoreError::IndexOutOfRange` when `index >= len`.
    pub fn delete_item(&mut self, index: usize) -> StoreResult<Item> {
        self.check_index("delete_item", index)?;
        let removed = self.items.remove(index);
        store_event("item_deleted")
            .with("index", index)
            .with("len", self.items.len())
            .emit(Level::Debug);
        Ok(removed)
    }

    /// Replaces the name of the item at `index`.
    ///
    /// # Errors
    /// - `StoreError::IndexOutOfRange` when `index >= len`.
    pub fn rename_item(&mut self, index: usize, new_name: impl Into<String>) -> StoreResult<()> {
        let item = self.item_mut("rename_item", index)?;
        item.rename(new_name);
        store_event("item_renamed")
            .with("index", index)
            .with("name_len", item.name.chars().count())
            .emit(Level::Debug);
        Ok(())
    }

    pub fn set_hide_checked(&mut self, value: bool) {
        self.hide_checked = value;
        store_event("hide_checked_set")
            .with("value", value)
            .emit(Level::Debug);
    }

    pub fn toggle_hide_checked(&mut self) {
        self.set_hide_checked(!self.hide_checked);
    }

    /// Sets the search term as given. An empty term clears the search.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
        store_event("search_term_set")
            .with("term_len", self.search_term.chars().count())
            .emit(Level::Debug);
    }

    fn check_index(&self, op: &'static str, index: usize) -> StoreResult<()> {
        let len = self.items.len();
        if index < len {
            return Ok(());
        }
        store_event("index_out_of_range")
            .with("op", op)
            .with("index", index)
            .with("len", len)
            .emit(Level::Warn);
        Err(StoreError::IndexOutOfRange { op, index, len })
    }

    fn item_mut(&mut self, op: &'static str, index: usize) -> StoreResult<&mut Item> {
        self.check_index(op, index)?;
        Ok(&mut self.items[index])
    }
}

fn store_event(event: &'static str) -> ListEvent {
    ListEvent::new("store", event)
}

/// Builds the fixed seed list shown when a session starts.
pub fn seed_items() -> Vec<Item> {
    vec![
        Item::with_checked("apples", false),
        Item::with_checked("oranges", false),
        Item::with_checked("milk", true),
        Item::with_checked("bread", false),
    ]
}
