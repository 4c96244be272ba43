//! Moderation queue models
//!
//! Generalized moderation entries covering Daawah categories, halal
//! products and Islamic-learning categories. Edited categories have no
//! explicit state: they go live immediately.

use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};

/// Approval state of a moderation queue entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApprovalState {
    Pending,
    Approved,
}

impl std::fmt::Display for ApprovalState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApprovalState::Pending => write!(f, "pending"),
            ApprovalState::Approved => write!(f, "approved"),
        }
    }
}

/// The moderation module an item belongs to. Each module is addressed
/// by its own absolute endpoint rather than a shared base path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModerationKind {
    DaawahCategory,
    HalalProduct,
    LearningCategory,
    FaqCategory,
    VendorCategory,
}

impl ModerationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ModerationKind::DaawahCategory => "daawah_category",
            ModerationKind::HalalProduct => "halal_product",
            ModerationKind::LearningCategory => "learning_category",
            ModerationKind::FaqCategory => "faq_category",
            ModerationKind::VendorCategory => "vendor_category",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModerationItem {
    pub id: i64,
    pub kind: ModerationKind,
    pub name: String,
    /// Bare base64 image payload, without the data-URL prefix
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub state: ApprovalState,
    pub submitted_at: DateTime<Utc>,
}

/// Payload for creating a category/product entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateModerationItemRequest {
    pub kind: ModerationKind,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// Payload for the single-field approve operation. The boolean decision
/// only exists for halal products; category modules carry identity alone.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModerationDecisionRequest {
    pub item_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_halal: Option<bool>,
}
