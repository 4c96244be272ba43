//! Data models module
//!
//! This module contains all data structures used throughout the crate

pub mod enrollment;
pub mod session;
pub mod teacher;
pub mod moderation;
pub mod profile;

// Re-export commonly used models
pub use enrollment::{Enrollment, EnrollmentStatus, SessionAssignment, ApproveEnrollmentRequest, RejectEnrollmentRequest};
pub use session::{ClassSession, GenderTrack, CreateSessionRequest, UpdateSessionRequest};
pub use teacher::{Teacher, CreateTeacherRequest, UpdateTeacherRequest};
pub use moderation::{ModerationItem, ModerationKind, ApprovalState, CreateModerationItemRequest, ModerationDecisionRequest};
pub use profile::{MasjidProfile, MadrasaProfile, GeoPoint, LoginProfile};
