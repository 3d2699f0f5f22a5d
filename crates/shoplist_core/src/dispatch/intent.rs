//! Intent vocabulary accepted from the view adapter.

use serde::{Deserialize, Serialize};

/// Named user action with its fixed payload shape.
///
/// Serialized with an `intent` tag, e.g. `{"intent":"toggle_checked","canonical_index":2}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "intent", rename_all = "snake_case")]
pub enum Intent {
    AddItem { name: String },
    ToggleChecked { canonical_index: usize },
    DeleteItem { canonical_index: usize },
    RenameItem { canonical_index: usize, new_name: String },
    ToggleHideChecked,
    SetSearchTerm { term: String },
}

impl Intent {
    /// Stable label used in log events.
    pub fn label(&self) -> &'static str {
        match self {
            Self::AddItem { .. } => "add_item",
            Self::ToggleChecked { .. } => "toggle_checked",
            Self::DeleteItem { .. } => "delete_item",
            Self::RenameItem { .. } => "rename_item",
            Self::ToggleHideChecked => "toggle_hide_checked",
            Self::SetSearchTerm { .. } => "set_search_term",
        }
    }
}
