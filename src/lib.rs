//! Ummah admin core
//!
//! Reusable core of the admin console for the Ummah community-services
//! platform: an authenticated resource client, a collection view model,
//! a declarative workflow engine for enrollment and moderation
//! transitions, and a declarative form model. The console shell that
//! renders screens and routes is an external embedder of this crate.

pub mod client;
pub mod collection;
pub mod config;
pub mod forms;
pub mod models;
pub mod utils;
pub mod workflow;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{Result, UmmahError};

// Re-export main components for easy access
pub use client::{ApiClient, Endpoint, SessionStore, ViewScope};
pub use collection::Collection;
pub use forms::{FormMode, RuleSet};
pub use workflow::{TransitionRegistry, WorkflowEngine};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
