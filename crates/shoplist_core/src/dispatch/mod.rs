//! Intent dispatch.
//!
//! # Responsibility
//! - Accept the six named user intents from the view adapter.
//! - Apply exactly one store operation per intent, then re-render.
//!
//! # Invariants
//! - Intent indexes are canonical indexes taken from `data-item-index`.
//! - A rejected intent leaves state unchanged and renders nothing.

pub mod intent;
pub mod session;
