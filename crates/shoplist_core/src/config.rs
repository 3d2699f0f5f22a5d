//! Session configuration.
//!
//! # Responsibility
//! - Describe the initial list a session starts from.
//! - Select the empty-name policy applied by the dispatcher.
//!
//! # Invariants
//! - Missing fields fall back to defaults; unknown fields are rejected.
//! - Seed names must be non-blank.

use crate::model::item::Item;
use crate::store::list_store::{seed_items, ListState};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Configuration-layer error.
#[derive(Debug)]
pub enum ConfigError {
    /// Input is not valid config JSON.
    Parse(serde_json::Error),
    /// Seed entry at `index` has a blank name.
    BlankSeedName { index: usize },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(err) => write!(f, "invalid session config: {err}"),
            Self::BlankSeedName { index } => {
                write!(f, "seed item at index {index} has a blank name")
            }
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Parse(err) => Some(err),
            Self::BlankSeedName { .. } => None,
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value)
    }
}

/// How the dispatcher treats names that are empty after trimming.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptyNamePolicy {
    /// Fail add/rename intents with `InvalidName`.
    #[default]
    Reject,
    /// Forward the trimmed name to the store, even when empty.
    Accept,
}

/// One seed entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedItem {
    pub name: String,
    #[serde(default)]
    pub checked: bool,
}

/// Session bootstrap options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SessionConfig {
    /// Initial items in canonical order.
    pub seed: Vec<SeedItem>,
    pub hide_checked: bool,
    pub search_term: String,
    pub empty_names: EmptyNamePolicy,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed: seed_items()
                .into_iter()
                .map(|item| SeedItem {
                    name: item.name,
                    checked: item.checked,
                })
                .collect(),
            hide_checked: false,
            search_term: String::new(),
            empty_names: EmptyNamePolicy::default(),
        }
    }
}

impl SessionConfig {
    /// Parses and validates a JSON config document.
    ///
    /// # Errors
    /// - `ConfigError::Parse` for malformed JSON or unknown fields.
    /// - `ConfigError::BlankSeedName` for blank seed names.
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects blank seed names.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self
            .seed
            .iter()
            .position(|seed| seed.name.trim().is_empty())
        {
            Some(index) => Err(ConfigError::BlankSeedName { index }),
            None => Ok(()),
        }
    }

    /// Builds the initial store state described by this config.
    pub fn initial_state(&self) -> ListState {
        let items = self
            .seed
            .iter()
            .map(|seed| Item::with_checked(seed.name.clone(), seed.checked))
            .collect();
        let mut state = ListState::with_items(items);
        state.set_hide_checked(self.hide_checked);
        state.set_search_term(self.search_term.clone());
        state
    }
}
