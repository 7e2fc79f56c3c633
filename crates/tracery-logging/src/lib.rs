//! Structured contextual logging facility for Tracery
//!
//! This crate provides a canonical logging facility with:
//! - Single initialization point via `init(profile)`
//! - Context-aware entry points (`log_debug`, `log_error`) that merge an
//!   [`ExecutionContext`](tracery_core_types::ExecutionContext)'s metadata
//!   into every record
//! - A process-frozen debug-mode gate controlling caller-location capture
//! - An assertion helper that fails fast in development and degrades to an
//!   error record in production
//! - A pluggable sink seam with a capture mode for deterministic assertions
//!
//! # Usage
//!
//! ```rust
//! use tracery_logging::{init, Profile};
//!
//! // Initialize once at application startup
//! init(Profile::Development);
//! ```

pub mod assertions;
pub mod contextual;
pub mod debug_mode;
pub mod init;
pub mod sink;
pub mod test_capture;

pub use assertions::assert_or_log;
pub use contextual::{log_debug, log_error};
pub use debug_mode::{init_debug_mode, is_debug_enabled};
pub use init::{init, Profile};
pub use sink::{install_sink, LogSink, TracingSink};
pub use test_capture::{init_log_capture, CapturedRecord, LogCapture, Severity};
