//! Core types shared across Tracery facilities
//!
//! This crate provides the foundational types used by the logging
//! facility and by callers that thread contextual metadata through
//! their operations:
//!
//! - **Context carrier**: ExecutionContext, CallerLocation
//! - **Schema constants**: Canonical field keys and environment variable names

pub mod context;
pub mod schema;

pub use context::{CallerLocation, ExecutionContext};
