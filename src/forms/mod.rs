//! Form model module
//!
//! Declarative client-side validation run before any create or
//! transition submission, plus image payload encoding.

pub mod encoding;
pub mod rules;
pub mod tables;

// Re-export commonly used form components
pub use rules::{FieldRule, FieldRules, FormData, FormMode, RuleSet, ValidationReport};
pub use tables::{
    category_rules, enrollment_reject_rules, madrasa_profile_rules, masjid_profile_rules,
    session_request_reject_rules, teacher_rules,
};
