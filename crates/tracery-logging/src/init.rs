//! Logging initialization module
//!
//! Provides a single initialization point for the logging facility.

use std::sync::Once;

use tracing_subscriber::{util::SubscriberInitExt, EnvFilter};

use crate::debug_mode::init_debug_mode;

/// Logging profile configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    /// Human-readable output for development
    Development,
    /// JSON structured output for production
    Production,
    /// Capture mode for deterministic testing
    Test,
}

static INIT_ONCE: Once = Once::new();

/// Initialize the logging facility
///
/// This function should be called once at application startup. It sets
/// up the tracing subscriber behind the default sink and freezes the
/// debug-mode gate for the selected profile (an earlier explicit
/// `init_debug_mode` call wins, since the first write to the flag is
/// final).
///
/// # Profiles
///
/// - **Development**: Human-readable logs with debug level; debug mode on
/// - **Production**: JSON structured logs with info level; debug mode off
/// - **Test**: Bare subscriber; pair with `init_log_capture()` and set the
///   debug flag explicitly in the test binary
///
/// # Example
///
/// ```
/// use tracery_logging::{init, Profile};
///
/// init(Profile::Development);
/// ```
pub fn init(profile: Profile) {
    INIT_ONCE.call_once(|| match profile {
        Profile::Development => {
            init_debug_mode(true);
            tracing_subscriber::fmt()
                .with_env_filter(
                    EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| EnvFilter::new("tracery=debug")),
                )
                .init();
        }
        Profile::Production => {
            init_debug_mode(false);
            tracing_subscriber::fmt()
                .json()
                .with_env_filter(
                    EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| EnvFilter::new("tracery=info")),
                )
                .init();
        }
        Profile::Test => {
            // Capture is installed separately via init_log_capture()
            tracing_subscriber::registry().init();
        }
    });
}
