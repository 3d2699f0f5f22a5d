//! Session-scoped dispatcher.
//!
//! # Responsibility
//! - Own the single `ListState` for one session.
//! - Normalize and validate name payloads before they reach the store.
//! - Produce a full re-render after every successful intent.
//!
//! # Invariants
//! - Handlers borrow the session mutably, so dispatch cannot re-enter.
//! - Every render is `render(project(state))`; no incremental patching.
//! - Name payloads are trimmed; search terms are stored as given.

use crate::config::{ConfigError, EmptyNamePolicy, SessionConfig};
use crate::dispatch::intent::Intent;
use crate::store::list_store::{ListState, StoreError};
use crate::view::markup::render;
use crate::view::projector::{project, RenderRow};
use crate::logging::ListEvent;
use log::Level;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Name payload validation error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameValidationError {
    /// Name is empty after trimming.
    Empty,
}

impl Display for NameValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "item name cannot be empty"),
        }
    }
}

impl Error for NameValidationError {}

/// Dispatcher error for one intent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchError {
    /// Store rejected the operation.
    Store(StoreError),
    /// Name payload failed validation.
    InvalidName(NameValidationError),
}

impl Display for DispatchError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Store(err) => write!(f, "{err}"),
            Self::InvalidName(err) => write!(f, "{err}"),
        }
    }
}

impl Error for DispatchError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
            Self::InvalidName(err) => Some(err),
        }
    }
}

impl From<StoreError> for DispatchError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

impl From<NameValidationError> for DispatchError {
    fn from(value: NameValidationError) -> Self {
        Self::InvalidName(value)
    }
}

impl DispatchError {
    /// Stable label used in log events.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Store(StoreError::IndexOutOfRange { .. }) => "index_out_of_range",
            Self::InvalidName(NameValidationError::Empty) => "empty_name",
        }
    }
}

/// Result type for dispatch APIs.
pub type DispatchResult<T> = Result<T, DispatchError>;

/// Full re-render output handed to the view adapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedView {
    /// Projected rows in display order.
    pub rows: Vec<RenderRow>,
    /// Markup replacing the mount point content.
    pub markup: String,
}

/// One list session: canonical state plus dispatch policy.
#[derive(Debug, Clone)]
pub struct ListSession {
    state: ListState,
    empty_names: EmptyNamePolicy,
}

impl Default for ListSession {
    fn default() -> Self {
        Self::with_state(ListState::seeded(), EmptyNamePolicy::default())
    }
}

impl ListSession {
    /// Starts a session from the default seed list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a session from an explicit config.
    ///
    /// # Errors
    /// - `ConfigError::BlankSeedName` when a seed entry has a blank name.
    pub fn from_config(config: &SessionConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            state: config.initial_state(),
            empty_names: config.empty_names,
        })
    }

    /// Starts a session from a JSON config document.
    ///
    /// # Errors
    /// - Returns `ConfigError` when the document is malformed or invalid.
    pub fn from_json_config(raw: &str) -> Result<Self, ConfigError> {
        let config = SessionConfig::from_json_str(raw)?;
        Self::from_config(&config)
    }

    /// Starts a session over an existing state.
    pub fn with_state(state: ListState, empty_names: EmptyNamePolicy) -> Self {
        Self { state, empty_names }
    }

    /// Read-only view of the canonical state.
    pub fn state(&self) -> &ListState {
        &self.state
    }

    pub fn empty_names(&self) -> EmptyNamePolicy {
        self.empty_names
    }

    /// Applies one intent and returns the full re-render.
    ///
    /// # Errors
    /// - `DispatchError::Store` for canonical indexes out of range.
    /// - `DispatchError::InvalidName` for empty names under `Reject`.
    pub fn dispatch(&mut self, intent: Intent) -> DispatchResult<RenderedView> {
        let label = intent.label();
        match self.apply(intent) {
            Ok(()) => {
                ListEvent::new("dispatch", "intent_applied")
                    .with("intent", label)
                    .with("len", self.state.len())
                    .emit(Level::Debug);
                Ok(self.current_view())
            }
            Err(err) => {
                ListEvent::new("dispatch", "intent_rejected")
                    .with("intent", label)
                    .with("error", err.kind())
                    .emit(Level::Warn);
                Err(err)
            }
        }
    }

    /// Renders the current state without mutating it.
    pub fn current_view(&self) -> RenderedView {
        let rows = project(&self.state);
        let markup = render(&rows);
        ListEvent::new("dispatch", "render")
            .with("rows", rows.len())
            .with("total", self.state.len())
            .with("hide_checked", self.state.hide_checked())
            .with("searching", !self.state.search_term().is_empty())
            .emit(Level::Debug);
        RenderedView { rows, markup }
    }

    fn apply(&mut self, intent: Intent) -> DispatchResult<()> {
        match intent {
            Intent::AddItem { name } => {
                let name = self.normalize_name(&name)?;
                self.state.add_item(name);
            }
            Intent::ToggleChecked { canonical_index } => {
                self.state.toggle_checked(canonical_index)?;
            }
            Intent::DeleteItem { canonical_index } => {
                self.state.delete_item(canonical_index)?;
            }
            Intent::RenameItem {
                canonical_index,
                new_name,
            } => {
                let new_name = self.normalize_name(&new_name)?;
                self.state.rename_item(canonical_index, new_name)?;
            }
            Intent::ToggleHideChecked => self.state.toggle_hide_checked(),
            Intent::SetSearchTerm { term } => self.state.set_search_term(term),
        }
        Ok(())
    }

    /// Trims `raw`. Under `Accept` the trimmed name is forwarded even when empty.
    fn normalize_name(&self, raw: &str) -> Result<String, NameValidationError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() && self.empty_names == EmptyNamePolicy::Reject {
            return Err(NameValidationError::Empty);
        }
        Ok(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::{DispatchError, ListSession, NameValidationError};
    use crate::config::EmptyNamePolicy;
    use crate::dispatch::intent::Intent;
    use crate::store::list_store::ListState;

    #[test]
    fn add_trims_name() {
        let mut session = ListSession::new();
        let view = session
            .dispatch(Intent::AddItem {
                name: "  eggs \n".to_string(),
            })
            .unwrap();
        assert_eq!(view.rows[0].name, "eggs");
    }

    #[test]
    fn reject_policy_blocks_blank_names_without_mutation() {
        let mut session = ListSession::new();
        let before = session.state().clone();

        let err = session
            .dispatch(Intent::AddItem {
                name: "   ".to_string(),
            })
            .unwrap_err();
        assert_eq!(err, DispatchError::InvalidName(NameValidationError::Empty));

        let err = session
            .dispatch(Intent::RenameItem {
                canonical_index: 0,
                new_name: String::new(),
            })
            .unwrap_err();
        assert_eq!(err, DispatchError::InvalidName(NameValidationError::Empty));
        assert_eq!(session.state(), &before);
    }

    #[test]
    fn accept_policy_forwards_empty_names() {
        let mut session = ListSession::with_state(ListState::seeded(), EmptyNamePolicy::Accept);
        let view = session
            .dispatch(Intent::AddItem {
                name: "  ".to_string(),
            })
            .unwrap();
        assert_eq!(view.rows.len(), 5);
        assert_eq!(view.rows[0].name, "");
    }

    #[test]
    fn rename_validates_name_before_index() {
        let mut session = ListSession::new();
        let err = session
            .dispatch(Intent::RenameItem {
                canonical_index: 99,
                new_name: " ".to_string(),
            })
            .unwrap_err();
        assert!(matches!(err, DispatchError::InvalidName(_)));
    }

    #[test]
    fn current_view_matches_dispatch_output() {
        let mut session = ListSession::new();
        let view = session.dispatch(Intent::ToggleHideChecked).unwrap();
        assert_eq!(view, session.current_view());
    }
}
