//! State-to-rows projection.
//!
//! # Responsibility
//! - Apply the hide-checked and search predicates to the canonical items.
//! - Annotate each surviving row with its canonical index.
//!
//! # Invariants
//! - Both predicates are conjoined and evaluated once per canonical item,
//!   so predicate order cannot change the result.
//! - Relative canonical order is preserved; rows are only removed.
//! - Search is a case-sensitive substring match; an empty term matches all.

use crate::model::item::{Item, ItemId};
use crate::store::list_store::ListState;
use serde::{Deserialize, Serialize};

/// One renderable row of the filtered view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderRow {
    /// Position of the item in the unfiltered sequence.
    pub canonical_index: usize,
    /// Stable opaque id of the underlying item.
    pub item_id: ItemId,
    pub name: String,
    pub checked: bool,
    /// `true` when the row renders as an edit form.
    pub editable: bool,
}

impl RenderRow {
    fn from_item(canonical_index: usize, item: &Item) -> Self {
        Self {
            canonical_index,
            item_id: item.id,
            name: item.name.clone(),
            checked: item.checked,
            editable: item.is_editable(),
        }
    }
}

/// Projects `state` into the ordered rows that should be displayed.
pub fn project(state: &ListState) -> Vec<RenderRow> {
    state
        .items()
        .iter()
        .enumerate()
        .filter(|(_, item)| is_visible(state, item))
        .map(|(index, item)| RenderRow::from_item(index, item))
        .collect()
}

fn is_visible(state: &ListState, item: &Item) -> bool {
    passes_hide_checked(state.hide_checked(), item) && matches_search(state.search_term(), item)
}

fn passes_hide_checked(hide_checked: bool, item: &Item) -> bool {
    !(hide_checked && item.checked)
}

fn matches_search(term: &str, item: &Item) -> bool {
    term.is_empty() || item.name.contains(term)
}
