//! Terminal user interface for date picker fields
//!
//! This module hosts picker fields in a ratatui application: the component
//! abstractions, the selection dialogs, layout helpers and the demo form.

pub mod app;
pub mod components;
pub mod core;
pub mod layout;
pub mod renderer;

pub use app::App;
pub use layout::LayoutManager;
pub use renderer::run_app;
