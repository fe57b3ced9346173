//! Core UI functionality.
//!
//! This module contains the building blocks every component shares: the
//! [`Component`] trait, the [`Action`] values components exchange with the
//! host loop, and the [`EventHandler`] that turns terminal input into events.

pub mod actions;
pub mod component;
pub mod event_handler;

// Re-export core types for easier access from other modules
pub use actions::Action;
pub use component::Component;
pub use event_handler::{EventHandler, EventType};
