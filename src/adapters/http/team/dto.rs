//! HTTP DTOs for team session endpoints.
//!
//! These types decouple the HTTP API from domain types, allowing independent evolution.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ErrorCode;
use crate::domain::session::TeamSession;
use crate::domain::team::{CategoryOverlap, MemberProfile, ProfileDocument, ProfileMode};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Request to create a new team session.
///
/// An empty object seeds the default team in the configured mode.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateTeamSessionRequest {
    #[serde(default)]
    pub mode: Option<ProfileMode>,
    /// Starting roster in export form; overrides `mode`.
    #[serde(default)]
    pub profile: Option<ProfileDocument>,
}

/// Request to replace one category of a member's profile.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateCategoryRequest {
    pub tags: Vec<String>,
}

/// Query parameters for the dashboard.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DashboardQuery {
    #[serde(default)]
    pub policy: Option<String>,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Team session summary.
#[derive(Debug, Clone, Serialize)]
pub struct TeamSessionResponse {
    pub session_id: String,
    pub mode: ProfileMode,
    pub members: Vec<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<&TeamSession> for TeamSessionResponse {
    fn from(session: &TeamSession) -> Self {
        Self {
            session_id: session.id().to_string(),
            mode: session.mode(),
            members: session
                .roster()
                .member_names()
                .into_iter()
                .map(String::from)
                .collect(),
            created_at: session.created_at().as_datetime().to_rfc3339(),
            updated_at: session.updated_at().as_datetime().to_rfc3339(),
        }
    }
}

/// One member's profile as tag symbols.
///
/// Competency and frustration are omitted for genius-only rosters.
#[derive(Debug, Clone, Serialize)]
pub struct MemberProfileResponse {
    pub member: String,
    pub genius: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub competency: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frustration: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub overlaps: Vec<CategoryOverlap>,
}

impl MemberProfileResponse {
    pub fn new(member: &str, mode: ProfileMode, profile: &MemberProfile) -> Self {
        let full = mode == ProfileMode::Full;
        Self {
            member: member.trim().to_string(),
            genius: profile.genius().symbols(),
            competency: full.then(|| profile.competency().symbols()),
            frustration: full.then(|| profile.frustration().symbols()),
            overlaps: profile.overlaps(),
        }
    }
}

/// Standard error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: "BAD_REQUEST".to_string(),
            message: message.into(),
            details: None,
        }
    }

    /// Error carrying a domain error code.
    pub fn from_code(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.into(),
            details: None,
        }
    }
}
