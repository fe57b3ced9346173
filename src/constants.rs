//! Constants used throughout the crate
//!
//! This module centralizes placeholder strings, UI text, and format patterns
//! to improve maintainability and consistency.

// Placeholders shown when a field has no value
pub const PLACEHOLDER_DATE: &str = "Tap here to select a date";
pub const PLACEHOLDER_TIME: &str = "Tap here to select a time";

// Platform renderings of a date-time value
pub const PLATFORM_DATE_FORMAT: &str = "%a %b %d %Y";
pub const PLATFORM_TIME_FORMAT: &str = "%H:%M:%S";

// Dialog titles
pub const DIALOG_TITLE_DATE: &str = " Select date ";
pub const DIALOG_TITLE_TIME: &str = " Select time ";

// Dialog sizing (percent of the host area)
pub const DIALOG_WIDTH_PERCENT: u16 = 50;

// Config messages
pub const CONFIG_GENERATED: &str = "✅ Default configuration written to";
pub const CONFIG_FILE_NAME: &str = "datefield.toml";
pub const APP_DIR_NAME: &str = "datefield";
pub const LOG_FILE_NAME: &str = "datefield.log";

// In-memory log ring capacity
pub const LOG_BUFFER_CAPACITY: usize = 500;
