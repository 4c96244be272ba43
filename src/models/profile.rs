//! Masjid and madrasa profile models
//!
//! Profiles are edited in place via full-record submission. The password
//! field is write-only: it is never populated from a read response and is
//! optional on edit.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MasjidProfile {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub location: Option<GeoPoint>,
    /// Write-only credential; absent in read responses, optional on edit
    #[serde(skip_serializing_if = "Option::is_none", skip_deserializing)]
    pub password: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MadrasaProfile {
    pub id: i64,
    pub masjid_id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    /// Monthly fee; non-positive values are accepted today (pending
    /// product decision, see session model note)
    pub fee: f64,
    #[serde(skip_serializing_if = "Option::is_none", skip_deserializing)]
    pub password: Option<String>,
}

/// Login profile flags persisted alongside the auth token and used for
/// route guarding by the embedding console.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginProfile {
    pub is_super_user: bool,
    pub is_masjid_admin: bool,
}
