//! Shared test helpers
//!
//! Builders wiring the API client and workflow engine against a wiremock
//! server, plus recording doubles for the injected session policies.

use std::sync::{Arc, Mutex};
use chrono::Utc;
use wiremock::MockServer;
use ummah_admin::client::{ApiClient, Notifier, RecordingAuthority, SessionStore, MemorySessionStore};
use ummah_admin::config::{ApiConfig, Settings};
use ummah_admin::models::enrollment::{Enrollment, EnrollmentStatus};
use ummah_admin::workflow::WorkflowEngine;

/// Notifier double that records every blocking message
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    messages: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify_blocking(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }
}

/// API config pointing both base paths at the mock server
pub fn test_api_config(server: &MockServer) -> ApiConfig {
    let mut config = Settings::default().api;
    config.landing_url = format!("{}/landing", server.uri());
    config.masjid_url = format!("{}/masjid", server.uri());
    config
}

pub struct TestHarness {
    pub client: ApiClient,
    pub engine: WorkflowEngine,
    pub store: Arc<MemorySessionStore>,
    pub authority: Arc<RecordingAuthority>,
    pub notifier: Arc<RecordingNotifier>,
}

/// Build a client + engine against the mock server with a token already
/// in the session store
pub fn build_harness(server: &MockServer) -> TestHarness {
    let store = Arc::new(MemorySessionStore::with_token("test-token"));
    let authority = Arc::new(RecordingAuthority::new());
    let notifier = Arc::new(RecordingNotifier::new());

    let client = ApiClient::new(
        test_api_config(server),
        store.clone() as Arc<dyn SessionStore>,
        authority.clone(),
        notifier.clone(),
    )
    .expect("client construction");

    let engine = WorkflowEngine::new(client.clone());

    TestHarness {
        client,
        engine,
        store,
        authority,
        notifier,
    }
}

/// A pending enrollment with two required sessions
pub fn pending_enrollment(id: i64) -> Enrollment {
    Enrollment {
        id,
        madrasa_id: 1,
        student_name: "Yusuf".to_string(),
        parent_name: "Ahmed".to_string(),
        emergency_contact: "+441234567890".to_string(),
        required_sessions: vec![10, 11],
        status: EnrollmentStatus::Pending,
        rejection_comment: None,
        assignments: vec![],
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}
