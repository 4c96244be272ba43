//! Session persistence and cross-cutting session policy
//!
//! This module handles durable storage of the auth token and the last
//! login profile, plus the injected policy objects the API client applies
//! uniformly across calls: the logout-on-unauthorized authority and the
//! blocking-notification surface for server errors.

use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use crate::models::profile::LoginProfile;
use crate::utils::errors::Result;

/// Durable storage for the auth token and login profile.
///
/// The token is read fresh on every API call rather than cached in
/// memory, so a rotation or logout between calls is always honored.
pub trait SessionStore: Send + Sync {
    fn token(&self) -> Option<String>;
    fn set_token(&self, token: &str) -> Result<()>;
    fn profile(&self) -> Option<LoginProfile>;
    fn set_profile(&self, profile: &LoginProfile) -> Result<()>;
    /// Remove both token and profile
    fn clear(&self) -> Result<()>;
}

/// Cross-cutting logout-on-unauthorized policy.
///
/// Invoked exactly once per 401 response, after the session store has
/// been cleared. Injected rather than hard-wired so it is substitutable
/// in tests and in non-browser embeddings.
pub trait SessionAuthority: Send + Sync {
    fn on_unauthorized(&self);
}

/// Surface for the generic blocking notification raised on HTTP 500.
/// The error still propagates to the caller afterwards.
pub trait Notifier: Send + Sync {
    fn notify_blocking(&self, message: &str);
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct SessionRecord {
    token: Option<String>,
    profile: Option<LoginProfile>,
}

/// In-memory session store, used in tests and short-lived tooling
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    record: Mutex<SessionRecord>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: &str) -> Self {
        let store = Self::new();
        let mut record = store.record.lock().unwrap_or_else(|e| e.into_inner());
        record.token = Some(token.to_string());
        drop(record);
        store
    }
}

impl SessionStore for MemorySessionStore {
    fn token(&self) -> Option<String> {
        self.record.lock().unwrap_or_else(|e| e.into_inner()).token.clone()
    }

    fn set_token(&self, token: &str) -> Result<()> {
        self.record.lock().unwrap_or_else(|e| e.into_inner()).token = Some(token.to_string());
        Ok(())
    }

    fn profile(&self) -> Option<LoginProfile> {
        self.record.lock().unwrap_or_else(|e| e.into_inner()).profile.clone()
    }

    fn set_profile(&self, profile: &LoginProfile) -> Result<()> {
        self.record.lock().unwrap_or_else(|e| e.into_inner()).profile = Some(profile.clone());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        let mut record = self.record.lock().unwrap_or_else(|e| e.into_inner());
        *record = SessionRecord::default();
        Ok(())
    }
}

/// File-backed session store persisting a small JSON record.
///
/// Every read goes back to disk so concurrent invalidation (a 401 on one
/// in-flight call) is visible to subsequent calls immediately.
#[derive(Debug)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn read_record(&self) -> SessionRecord {
        match std::fs::read_to_string(&self.path) {
            Ok(data) => match serde_json::from_str(&data) {
                Ok(record) => record,
                Err(e) => {
                    warn!(path = %self.path.display(), error = %e, "Corrupt session file, treating as empty");
                    SessionRecord::default()
                }
            },
            Err(_) => SessionRecord::default(),
        }
    }

    fn write_record(&self, record: &SessionRecord) -> Result<()> {
        let data = serde_json::to_string_pretty(record)?;
        std::fs::write(&self.path, data)?;
        Ok(())
    }
}

impl SessionStore for FileSessionStore {
    fn token(&self) -> Option<String> {
        self.read_record().token
    }

    fn set_token(&self, token: &str) -> Result<()> {
        let mut record = self.read_record();
        record.token = Some(token.to_string());
        self.write_record(&record)
    }

    fn profile(&self) -> Option<LoginProfile> {
        self.read_record().profile
    }

    fn set_profile(&self, profile: &LoginProfile) -> Result<()> {
        let mut record = self.read_record();
        record.profile = Some(profile.clone());
        self.write_record(&record)
    }

    fn clear(&self) -> Result<()> {
        if self.path.exists() {
            std::fs::remove_file(&self.path)?;
        }
        debug!(path = %self.path.display(), "Session store cleared");
        Ok(())
    }
}

/// Production authority: flags that the embedding application must do a
/// full reload. There is no redirect-with-return-URL flow.
#[derive(Debug, Default)]
pub struct ReloadAuthority {
    reload_requested: AtomicBool,
}

impl ReloadAuthority {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a full application reload has been requested
    pub fn reload_requested(&self) -> bool {
        self.reload_requested.load(Ordering::SeqCst)
    }
}

impl SessionAuthority for ReloadAuthority {
    fn on_unauthorized(&self) {
        self.reload_requested.store(true, Ordering::SeqCst);
        crate::utils::logging::log_session_event("unauthorized", Some("full reload requested"));
    }
}

/// Test/diagnostic authority that counts invocations
#[derive(Debug, Default)]
pub struct RecordingAuthority {
    invocations: AtomicUsize,
}

impl RecordingAuthority {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn invocations(&self) -> usize {
        self.invocations.load(Ordering::SeqCst)
    }
}

impl SessionAuthority for RecordingAuthority {
    fn on_unauthorized(&self) {
        self.invocations.fetch_add(1, Ordering::SeqCst);
    }
}

/// Default notifier that routes the blocking message to the log
#[derive(Debug, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify_blocking(&self, message: &str) {
        warn!(message = message, "Blocking notification raised");
    }
}
