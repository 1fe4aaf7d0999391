//! Observability for the storefront.
//!
//! This crate provides:
//! - `SessionId` - Shopper session identifier used to correlate log lines
//! - `StructuredLogger` - Structured logging with session context
//! - `LogBuilder` - Fluent builder for entries with extra fields

mod logging;
mod session;

pub use logging::*;
pub use session::*;
