//! The debug gate falls back to the environment when nothing froze it
//!
//! Single test on purpose: the first read freezes the flag for the
//! whole process.

use tracery_core_types::schema::{ENV_DEBUG_MODE, ENV_DEBUG_MODE_ENABLED};
use tracery_logging::is_debug_enabled;

#[test]
fn test_env_variable_enables_debug_mode_and_freezes() {
    std::env::set_var(ENV_DEBUG_MODE, ENV_DEBUG_MODE_ENABLED);
    assert!(is_debug_enabled());

    // Frozen after the first read; clearing the variable changes nothing
    std::env::remove_var(ENV_DEBUG_MODE);
    assert!(is_debug_enabled());
}
