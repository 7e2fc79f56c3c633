//! Process-wide debug-mode gate
//!
//! The flag is written once, at or before first use, and is read-only for
//! the remainder of the process lifetime. Reads after initialization are
//! lock-free, so the gate is safe to consult on every log call from
//! arbitrary threads.

use std::sync::OnceLock;

use tracery_core_types::schema::{ENV_DEBUG_MODE, ENV_DEBUG_MODE_ENABLED};

static DEBUG_MODE: OnceLock<bool> = OnceLock::new();

/// Whether the process runs in debug mode
///
/// If nothing initialized the flag explicitly, the first read freezes it
/// from the `TRACERY_DEBUG` environment variable (`"1"` enables).
pub fn is_debug_enabled() -> bool {
    *DEBUG_MODE.get_or_init(debug_mode_from_env)
}

/// Freeze the debug flag from startup configuration
///
/// The first write wins; later calls leave the flag untouched. Returns
/// the effective value, which is the previously frozen one when the call
/// arrives too late.
pub fn init_debug_mode(enabled: bool) -> bool {
    *DEBUG_MODE.get_or_init(|| enabled)
}

fn debug_mode_from_env() -> bool {
    std::env::var(ENV_DEBUG_MODE)
        .map(|value| value == ENV_DEBUG_MODE_ENABLED)
        .unwrap_or(false)
}
