//! Enrollment model
//!
//! A student's request to join a madrasa program, together with the
//! transition payloads the workflow engine submits on its behalf.

use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};

/// Lifecycle status of an enrollment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnrollmentStatus {
    Pending,
    Completed,
    Rejected,
}

impl std::fmt::Display for EnrollmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EnrollmentStatus::Pending => write!(f, "pending"),
            EnrollmentStatus::Completed => write!(f, "completed"),
            EnrollmentStatus::Rejected => write!(f, "rejected"),
        }
    }
}

/// A teacher selection for one of the enrollment's required sessions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionAssignment {
    pub session_id: i64,
    pub teacher_id: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enrollment {
    pub id: i64,
    pub madrasa_id: i64,
    pub student_name: String,
    pub parent_name: String,
    pub emergency_contact: String,
    /// Sessions the student must be placed into before approval can complete
    pub required_sessions: Vec<i64>,
    pub status: EnrollmentStatus,
    /// Present only when the enrollment was rejected
    pub rejection_comment: Option<String>,
    /// Assignments made so far, one per required session once completed
    pub assignments: Vec<SessionAssignment>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Enrollment {
    /// Check the status invariants: rejected requires a non-empty comment,
    /// completed requires every required session to have an assigned teacher.
    pub fn invariants_hold(&self) -> bool {
        match self.status {
            EnrollmentStatus::Pending => true,
            EnrollmentStatus::Rejected => self
                .rejection_comment
                .as_deref()
                .map_or(false, |c| !c.trim().is_empty()),
            EnrollmentStatus::Completed => self
                .required_sessions
                .iter()
                .all(|session_id| {
                    self.assignments.iter().any(|a| a.session_id == *session_id)
                }),
        }
    }

    /// Required sessions still lacking a teacher assignment
    pub fn unassigned_sessions(&self) -> Vec<i64> {
        self.required_sessions
            .iter()
            .copied()
            .filter(|session_id| {
                !self.assignments.iter().any(|a| a.session_id == *session_id)
            })
            .collect()
    }
}

/// Payload for the Approve (and Reassign) transition: all session
/// assignments are carried in one atomic call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApproveEnrollmentRequest {
    pub enrollment_id: i64,
    pub assignments: Vec<SessionAssignment>,
}

/// Payload for the Reject transition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RejectEnrollmentRequest {
    pub enrollment_id: i64,
    pub comment: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn enrollment(status: EnrollmentStatus) -> Enrollment {
        Enrollment {
            id: 1,
            madrasa_id: 7,
            student_name: "Yusuf".to_string(),
            parent_name: "Ahmed".to_string(),
            emergency_contact: "+441234567890".to_string(),
            required_sessions: vec![10, 11],
            status,
            rejection_comment: None,
            assignments: vec![],
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_pending_invariants() {
        assert!(enrollment(EnrollmentStatus::Pending).invariants_hold());
    }

    #[test]
    fn test_rejected_requires_comment() {
        let mut e = enrollment(EnrollmentStatus::Rejected);
        assert!(!e.invariants_hold());

        e.rejection_comment = Some("   ".to_string());
        assert!(!e.invariants_hold());

        e.rejection_comment = Some("No places left this term".to_string());
        assert!(e.invariants_hold());
    }

    #[test]
    fn test_completed_requires_full_assignment() {
        let mut e = enrollment(EnrollmentStatus::Completed);
        assert!(!e.invariants_hold());
        assert_eq!(e.unassigned_sessions(), vec![10, 11]);

        e.assignments.push(SessionAssignment { session_id: 10, teacher_id: 3 });
        assert!(!e.invariants_hold());
        assert_eq!(e.unassigned_sessions(), vec![11]);

        e.assignments.push(SessionAssignment { session_id: 11, teacher_id: 4 });
        assert!(e.invariants_hold());
        assert!(e.unassigned_sessions().is_empty());
    }

    #[test]
    fn test_status_serde_snake_case() {
        let json = serde_json::to_string(&EnrollmentStatus::Completed).unwrap();
        assert_eq!(json, "\"completed\"");
        let status: EnrollmentStatus = serde_json::from_str("\"pending\"").unwrap();
        assert_eq!(status, EnrollmentStatus::Pending);
    }
}
