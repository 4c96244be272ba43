//! Per-entity validation rule tables
//!
//! Each entity's rules are an explicit declarative table so the
//! divergences between near-duplicate pages stay visible artifacts
//! rather than accidents. In particular: enrollment rejection requires a
//! comment while session-request rejection does not, and the Daawah
//! category form requires an image while the FAQ category form has no
//! image field at all. Do not unify these silently; that would change
//! product behavior.

use crate::models::moderation::ModerationKind;
use super::rules::{FieldRule, FieldRules, FormMode, RuleSet};

/// Rejecting an enrollment requires a reason
pub fn enrollment_reject_rules() -> RuleSet {
    RuleSet::new(
        "enrollment_reject",
        vec![FieldRules::new("comment", vec![FieldRule::Required])],
    )
}

/// Rejecting a session request allows an empty reason. The field is
/// listed with no rules so the divergence from `enrollment_reject_rules`
/// is explicit.
pub fn session_request_reject_rules() -> RuleSet {
    RuleSet::new(
        "session_request_reject",
        vec![FieldRules::new("comment", vec![])],
    )
}

pub fn teacher_rules() -> RuleSet {
    RuleSet::new(
        "teacher",
        vec![
            FieldRules::new("name", vec![FieldRule::Required]),
            FieldRules::new("email", vec![FieldRule::Email]),
            FieldRules::new("phone", vec![FieldRule::Numeric]),
        ],
    )
}

/// Masjid profile form. The password is write-only and optional on edit.
pub fn masjid_profile_rules() -> RuleSet {
    RuleSet::new(
        "masjid_profile",
        vec![
            FieldRules::new("name", vec![FieldRule::Required]),
            FieldRules::new("email", vec![FieldRule::Required, FieldRule::Email]),
            FieldRules::new("phone", vec![FieldRule::Required]),
            FieldRules::new("address", vec![FieldRule::Required]),
            FieldRules::new("website", vec![FieldRule::Url]),
            FieldRules::new("latitude", vec![FieldRule::Numeric]),
            FieldRules::new("longitude", vec![FieldRule::Numeric]),
            FieldRules::new("password", vec![FieldRule::RequiredUnless(FormMode::Edit)]),
        ],
    )
}

pub fn madrasa_profile_rules() -> RuleSet {
    RuleSet::new(
        "madrasa_profile",
        vec![
            FieldRules::new("name", vec![FieldRule::Required]),
            FieldRules::new("email", vec![FieldRule::Required, FieldRule::Email]),
            FieldRules::new("phone", vec![FieldRule::Required]),
            FieldRules::new("address", vec![FieldRule::Required]),
            // Numeric alone: the empty string passes, and negative fees
            // are accepted (pending product decision)
            FieldRules::new("fee", vec![FieldRule::Numeric]),
            FieldRules::new("password", vec![FieldRule::RequiredUnless(FormMode::Edit)]),
        ],
    )
}

/// Category/product forms differ per moderation module
pub fn category_rules(kind: ModerationKind) -> RuleSet {
    let mut fields = vec![FieldRules::new("name", vec![FieldRule::Required])];

    match kind {
        ModerationKind::DaawahCategory => {
            fields.push(FieldRules::new("image", vec![FieldRule::Required]));
        }
        ModerationKind::FaqCategory => {
            // No image field on the FAQ form
        }
        ModerationKind::HalalProduct
        | ModerationKind::LearningCategory
        | ModerationKind::VendorCategory => {
            // Image optional on these forms
            fields.push(FieldRules::new("image", vec![]));
        }
    }

    RuleSet::new(format!("category_{}", kind.as_str()), fields)
}
