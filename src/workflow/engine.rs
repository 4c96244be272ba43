//! Workflow engine
//!
//! Executes approval, rejection, reassignment and moderation transitions:
//! checks the transition is valid for the entity's current status, checks
//! the side-data preconditions client-side (no network call is issued on
//! a violation), submits one call, and reconciles the collection with an
//! authoritative re-fetch on success. A failed transition leaves the
//! collection untouched, because the collection only changes through
//! reconciliation.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use crate::client::{ApiClient, Endpoint};
use crate::collection::Collection;
use crate::models::enrollment::{
    ApproveEnrollmentRequest, Enrollment, RejectEnrollmentRequest, SessionAssignment,
};
use crate::models::moderation::{ModerationDecisionRequest, ModerationItem};
use crate::utils::errors::{Result, UmmahError};
use crate::utils::logging::log_transition;
use super::transitions::{SideData, TransitionRegistry, TransitionSpec};

/// In-flight submission lock. The flag is set before the first await of a
/// submission, so a second click while one is in flight is refused.
#[derive(Debug, Clone, Default)]
pub struct SubmitGuard {
    in_flight: Arc<AtomicBool>,
}

impl SubmitGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Acquire the guard, failing if a submission is already in flight
    pub fn acquire(&self) -> Result<SubmitPermit> {
        if self.in_flight.swap(true, Ordering::SeqCst) {
            return Err(UmmahError::SubmissionInFlight);
        }
        Ok(SubmitPermit {
            flag: self.in_flight.clone(),
        })
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst)
    }
}

/// Releases the submit guard when dropped
#[derive(Debug)]
pub struct SubmitPermit {
    flag: Arc<AtomicBool>,
}

impl Drop for SubmitPermit {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::SeqCst);
    }
}

/// Workflow engine parameterized by the transition registry
#[derive(Debug, Clone)]
pub struct WorkflowEngine {
    client: ApiClient,
    registry: TransitionRegistry,
    guard: SubmitGuard,
}

impl WorkflowEngine {
    /// Create an engine with the platform's default transition registry
    pub fn new(client: ApiClient) -> Self {
        Self::with_registry(client, TransitionRegistry::new())
    }

    pub fn with_registry(client: ApiClient, registry: TransitionRegistry) -> Self {
        Self {
            client,
            registry,
            guard: SubmitGuard::new(),
        }
    }

    pub fn registry(&self) -> &TransitionRegistry {
        &self.registry
    }

    /// Enabled transitions valid for an entity kind's current status
    pub fn valid_transitions(&self, kind: &str, from_status: &str) -> Vec<&TransitionSpec> {
        self.registry.valid_transitions(kind, from_status)
    }

    /// Approve a pending enrollment, supplying a teacher selection for
    /// every required session in one atomic call.
    pub async fn approve(
        &self,
        enrollment: &Enrollment,
        assignments: &[SessionAssignment],
        collection: &mut Collection<Enrollment>,
        list_endpoint: &Endpoint,
    ) -> Result<()> {
        self.execute_assignment("approve", enrollment, assignments, collection, list_endpoint)
            .await
    }

    /// Reassign teachers on an already-completed enrollment. Identical
    /// wire mechanics to approval; the status does not change.
    pub async fn reassign(
        &self,
        enrollment: &Enrollment,
        assignments: &[SessionAssignment],
        collection: &mut Collection<Enrollment>,
        list_endpoint: &Endpoint,
    ) -> Result<()> {
        self.execute_assignment("reassign", enrollment, assignments, collection, list_endpoint)
            .await
    }

    async fn execute_assignment(
        &self,
        transition: &str,
        enrollment: &Enrollment,
        assignments: &[SessionAssignment],
        collection: &mut Collection<Enrollment>,
        list_endpoint: &Endpoint,
    ) -> Result<()> {
        let spec = self
            .registry
            .require("enrollment", transition, &enrollment.status.to_string())?;

        // Precondition checked before any network call: one selection per
        // required session. Surfaced as a blocking alert, not a field error.
        if assignments.len() != enrollment.required_sessions.len() {
            return Err(UmmahError::InvalidInput(format!(
                "Expected {} teacher selections, got {}",
                enrollment.required_sessions.len(),
                assignments.len()
            )));
        }

        let _permit = self.guard.acquire()?;

        let payload = ApproveEnrollmentRequest {
            enrollment_id: enrollment.id,
            assignments: assignments.to_vec(),
        };

        match self
            .client
            .post_json::<_, serde_json::Value>(&spec.endpoint, &payload)
            .await
        {
            Ok(_) => {
                log_transition("enrollment", &enrollment.id.to_string(), transition, true);
            }
            Err(e) => {
                log_transition("enrollment", &enrollment.id.to_string(), transition, false);
                return Err(e);
            }
        }

        self.reconcile(collection, list_endpoint).await;
        Ok(())
    }

    /// Reject an enrollment or session request. Whether an empty comment
    /// is allowed depends on the entity kind's registered transition.
    pub async fn reject(
        &self,
        kind: &str,
        enrollment: &Enrollment,
        comment: &str,
        collection: &mut Collection<Enrollment>,
        list_endpoint: &Endpoint,
    ) -> Result<()> {
        let spec = self
            .registry
            .require(kind, "reject", &enrollment.status.to_string())?;

        if let SideData::Comment { required: true } = spec.requires {
            if comment.trim().is_empty() {
                return Err(UmmahError::InvalidInput(
                    "A rejection reason is required".to_string(),
                ));
            }
        }

        let _permit = self.guard.acquire()?;

        let payload = RejectEnrollmentRequest {
            enrollment_id: enrollment.id,
            comment: comment.to_string(),
        };

        match self
            .client
            .post_json::<_, serde_json::Value>(&spec.endpoint, &payload)
            .await
        {
            Ok(_) => {
                log_transition(kind, &enrollment.id.to_string(), "reject", true);
            }
            Err(e) => {
                log_transition(kind, &enrollment.id.to_string(), "reject", false);
                return Err(e);
            }
        }

        self.reconcile(collection, list_endpoint).await;
        Ok(())
    }

    /// Approve a moderation queue item. The boolean decision is required
    /// only where the kind's transition demands it (halal products).
    pub async fn moderate(
        &self,
        item: &ModerationItem,
        decision: Option<bool>,
        collection: &mut Collection<ModerationItem>,
        list_endpoint: &Endpoint,
    ) -> Result<()> {
        let spec = self
            .registry
            .require(item.kind.as_str(), "approve", &item.state.to_string())?;

        if spec.requires == SideData::Decision && decision.is_none() {
            return Err(UmmahError::InvalidInput(
                "A decision is required for this item".to_string(),
            ));
        }

        let _permit = self.guard.acquire()?;

        let payload = ModerationDecisionRequest {
            item_id: item.id,
            is_halal: decision,
        };

        match self
            .client
            .post_json::<_, serde_json::Value>(&spec.endpoint, &payload)
            .await
        {
            Ok(_) => {
                log_transition(item.kind.as_str(), &item.id.to_string(), "approve", true);
            }
            Err(e) => {
                log_transition(item.kind.as_str(), &item.id.to_string(), "approve", false);
                return Err(e);
            }
        }

        self.reconcile(collection, list_endpoint).await;
        Ok(())
    }

    /// Authoritative re-fetch after a successful transition
    async fn reconcile<T: serde::de::DeserializeOwned>(
        &self,
        collection: &mut Collection<T>,
        list_endpoint: &Endpoint,
    ) {
        let client = self.client.clone();
        let endpoint = list_endpoint.clone();
        collection
            .reconcile(move || async move { client.get_json::<Vec<T>>(&endpoint).await })
            .await;
    }
}
