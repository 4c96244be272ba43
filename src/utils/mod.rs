//! Utility modules
//!
//! Common utilities for error handling and logging

pub mod errors;
pub mod logging;

pub use errors::{Result, UmmahError};
