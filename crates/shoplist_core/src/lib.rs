//! Core list logic for the shopping list widget.
//! This crate is the single source of truth for list invariants.

pub mod config;
pub mod dispatch;
pub mod logging;
pub mod model;
pub mod store;
pub mod view;

pub use config::{ConfigError, EmptyNamePolicy, SeedItem, SessionConfig};
pub use dispatch::intent::Intent;
pub use dispatch::session::{
    DispatchError, DispatchResult, ListSession, NameValidationError, RenderedView,
};
pub use logging::{
    default_log_level, init_logging, logging_status, FieldValue, ListEvent,
};
pub use model::item::{Item, ItemId};
pub use store::list_store::{seed_items, ListState, StoreError, StoreResult};
pub use view::markup::render;
pub use view::projector::{project, RenderRow};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
