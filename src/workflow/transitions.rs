//! Declarative transition registry
//!
//! Each entity kind registers the transitions its moderation or approval
//! pages expose: which statuses they apply from, the side data they
//! require, and the endpoint they submit to. The engine consults the
//! registry before issuing any network call, so an invalid transition is
//! refused client-side.

use std::collections::HashMap;
use crate::client::Endpoint;
use crate::utils::errors::{Result, UmmahError};

/// Side data a transition requires from the operator
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SideData {
    /// Identity only
    None,
    /// One teacher selection per required session
    TeacherAssignments,
    /// Free-text comment; required-ness differs per entity kind
    Comment { required: bool },
    /// Boolean decision (halal products)
    Decision,
}

/// A single transition an entity kind supports
#[derive(Debug, Clone)]
pub struct TransitionSpec {
    /// Transition identifier
    pub id: String,
    /// Statuses this transition applies from
    pub from: Vec<String>,
    /// Side data the transition requires
    pub requires: SideData,
    /// Endpoint the transition submits to
    pub endpoint: Endpoint,
    /// Disabled transitions are kept in the registry (the vendor-category
    /// edit path exists but is switched off) and refused at execution
    pub enabled: bool,
}

/// Transitions registered for one entity kind
#[derive(Debug, Clone, Default)]
pub struct KindTransitions {
    transitions: HashMap<String, TransitionSpec>,
}

impl KindTransitions {
    pub fn get(&self, id: &str) -> Option<&TransitionSpec> {
        self.transitions.get(id)
    }

    pub fn all(&self) -> impl Iterator<Item = &TransitionSpec> {
        self.transitions.values()
    }
}

/// Registry of transition specs per entity kind
#[derive(Debug, Clone)]
pub struct TransitionRegistry {
    kinds: HashMap<String, KindTransitions>,
}

impl TransitionRegistry {
    /// Create a registry with the platform's default transitions
    pub fn new() -> Self {
        let mut registry = Self {
            kinds: HashMap::new(),
        };

        registry.register_default_transitions();
        registry
    }

    /// Empty registry, for embedders that configure their own kinds
    pub fn empty() -> Self {
        Self {
            kinds: HashMap::new(),
        }
    }

    fn register_default_transitions(&mut self) {
        // Enrollment approval pages
        self.register("enrollment", TransitionSpec {
            id: "approve".to_string(),
            from: vec!["pending".to_string()],
            requires: SideData::TeacherAssignments,
            endpoint: Endpoint::landing("madrasa/enrollments/approve"),
            enabled: true,
        });
        self.register("enrollment", TransitionSpec {
            id: "reject".to_string(),
            from: vec!["pending".to_string()],
            requires: SideData::Comment { required: true },
            endpoint: Endpoint::landing("madrasa/enrollments/reject"),
            enabled: true,
        });
        // Reassignment uses the same operation as approval at the wire
        // level; only the originating status differs
        self.register("enrollment", TransitionSpec {
            id: "reassign".to_string(),
            from: vec!["completed".to_string()],
            requires: SideData::TeacherAssignments,
            endpoint: Endpoint::landing("madrasa/enrollments/approve"),
            enabled: true,
        });

        // Session requests allow rejection without a reason; the
        // divergence from enrollments is deliberate
        self.register("session_request", TransitionSpec {
            id: "reject".to_string(),
            from: vec!["pending".to_string()],
            requires: SideData::Comment { required: false },
            endpoint: Endpoint::landing("madrasa/session-requests/reject"),
            enabled: true,
        });

        // Moderation queues
        self.register("daawah_category", TransitionSpec {
            id: "approve".to_string(),
            from: vec!["pending".to_string()],
            requires: SideData::None,
            endpoint: Endpoint::absolute("https://moderation.ummah.example/daawah/categories/approve"),
            enabled: true,
        });
        self.register("halal_product", TransitionSpec {
            id: "approve".to_string(),
            from: vec!["pending".to_string()],
            requires: SideData::Decision,
            endpoint: Endpoint::absolute("https://moderation.ummah.example/halal/products/approve"),
            enabled: true,
        });
        self.register("learning_category", TransitionSpec {
            id: "approve".to_string(),
            from: vec!["pending".to_string()],
            requires: SideData::None,
            endpoint: Endpoint::absolute("https://moderation.ummah.example/learning/categories/approve"),
            enabled: true,
        });

        // The vendor-category edit action exists in the product but is
        // switched off; it stays registered so the gap is visible
        self.register("vendor_category", TransitionSpec {
            id: "edit".to_string(),
            from: vec!["pending".to_string(), "approved".to_string()],
            requires: SideData::None,
            endpoint: Endpoint::absolute("https://moderation.ummah.example/vendors/categories/edit"),
            enabled: false,
        });
    }

    /// Register a transition for an entity kind
    pub fn register(&mut self, kind: &str, spec: TransitionSpec) {
        self.kinds
            .entry(kind.to_string())
            .or_default()
            .transitions
            .insert(spec.id.clone(), spec);
    }

    /// Look up a transition, verifying it applies from the given status
    /// and is enabled
    pub fn require(&self, kind: &str, transition: &str, from_status: &str) -> Result<&TransitionSpec> {
        let spec = self
            .kinds
            .get(kind)
            .and_then(|k| k.get(transition))
            .ok_or_else(|| {
                UmmahError::InvalidInput(format!("Unknown transition: {}/{}", kind, transition))
            })?;

        if !spec.enabled {
            return Err(UmmahError::InvalidInput(format!(
                "Transition is disabled: {}/{}",
                kind, transition
            )));
        }

        if !spec.from.iter().any(|s| s == from_status) {
            return Err(UmmahError::InvalidStateTransition {
                from: from_status.to_string(),
                to: transition.to_string(),
            });
        }

        Ok(spec)
    }

    /// Enabled transitions valid from the given status
    pub fn valid_transitions(&self, kind: &str, from_status: &str) -> Vec<&TransitionSpec> {
        self.kinds
            .get(kind)
            .map(|k| {
                k.all()
                    .filter(|spec| spec.enabled && spec.from.iter().any(|s| s == from_status))
                    .collect()
            })
            .unwrap_or_default()
    }
}

impl Default for TransitionRegistry {
    fn default() -> Self {
        Self::new()
    }
}
