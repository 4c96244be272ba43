//! Resource client module
//!
//! Authenticated HTTP access to the platform REST API, durable session
//! storage, and view-scoped request cancellation.

pub mod http;
pub mod scope;
pub mod session;

// Re-export commonly used client components
pub use http::{ApiClient, Endpoint};
pub use scope::ViewScope;
pub use session::{
    FileSessionStore, MemorySessionStore, Notifier, RecordingAuthority, ReloadAuthority,
    SessionAuthority, SessionStore, TracingNotifier,
};
