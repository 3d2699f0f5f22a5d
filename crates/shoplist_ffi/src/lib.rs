//! Flutter-facing view adapter for the shopping list core.

pub mod api;
