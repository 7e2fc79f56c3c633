//! Standalone helpers used across Tracery
//!
//! These have no dependency on the context carrier or the logging
//! facility:
//!
//! - **Retry**: synchronous retry with fixed backoff
//! - **Set**: minimal set container over hashable elements

pub mod retry;
pub mod set;

pub use retry::retry_with_backoff;
pub use set::Set;
