//! Canonical schema constants for structured logging
//!
//! These constants ensure consistency across everything that attaches
//! or inspects log record fields.

// Canonical field keys for structured logging
pub const FIELD_FILE: &str = "file";
pub const FIELD_LINE: &str = "line";
pub const FIELD_MESSAGE: &str = "message";

// Environment variable controlling the debug-mode gate
pub const ENV_DEBUG_MODE: &str = "TRACERY_DEBUG";
pub const ENV_DEBUG_MODE_ENABLED: &str = "1";
