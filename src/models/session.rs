//! Class session model

use serde::{Deserialize, Serialize};
use chrono::NaiveTime;

/// Gender track a session is scheduled for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GenderTrack {
    Male,
    Female,
    Mixed,
}

/// A scheduled teaching slot belonging to exactly one madrasa.
///
/// Note: `end_time` is deliberately not validated against `start_time`,
/// and fees are not checked for sign; the platform accepts both today
/// and tightening either is a pending product decision.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassSession {
    pub id: i64,
    pub madrasa_id: i64,
    pub name: String,
    pub day: String,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub gender_track: GenderTrack,
    pub teacher_ids: Vec<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateSessionRequest {
    pub madrasa_id: i64,
    pub name: String,
    pub day: String,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub gender_track: GenderTrack,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateSessionRequest {
    pub name: Option<String>,
    pub day: Option<String>,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
    pub gender_track: Option<GenderTrack>,
    pub teacher_ids: Option<Vec<i64>>,
}
