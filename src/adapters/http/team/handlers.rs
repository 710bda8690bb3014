//! HTTP handlers for team session endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::application::handlers::team::{
    CreateTeamSessionCommand, CreateTeamSessionHandler, ExportTeamProfileHandler,
    ExportTeamProfileQuery, GetMemberHandler, GetMemberQuery, GetTeamDashboardHandler,
    GetTeamDashboardQuery, ImportTeamProfileCommand, ImportTeamProfileHandler,
    UpdateMemberCategoryCommand, UpdateMemberCategoryHandler,
};
use crate::domain::analysis::{CoveragePolicy, CoverageWeights, PhaseTable};
use crate::domain::foundation::{Category, SessionId};
use crate::domain::team::{ProfileDocument, ProfileMode, TeamError};
use crate::ports::RosterSessionStore;

use super::dto::{
    CreateTeamSessionRequest, DashboardQuery, ErrorResponse, MemberProfileResponse,
    TeamSessionResponse, UpdateCategoryRequest,
};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared state for team endpoints.
#[derive(Clone)]
pub struct TeamAppState {
    pub store: Arc<dyn RosterSessionStore>,
    pub phase_table: Arc<PhaseTable>,
    pub default_policy: CoveragePolicy,
    pub weights: CoverageWeights,
    pub default_mode: ProfileMode,
}

impl TeamAppState {
    /// State with the standard phase table and default policy settings.
    pub fn new(store: Arc<dyn RosterSessionStore>) -> Self {
        Self {
            store,
            phase_table: Arc::new(PhaseTable::standard()),
            default_policy: CoveragePolicy::default(),
            weights: CoverageWeights::default(),
            default_mode: ProfileMode::default(),
        }
    }

    pub fn with_phase_table(mut self, phase_table: PhaseTable) -> Self {
        self.phase_table = Arc::new(phase_table);
        self
    }

    pub fn with_coverage(mut self, policy: CoveragePolicy, weights: CoverageWeights) -> Self {
        self.default_policy = policy;
        self.weights = weights;
        self
    }

    pub fn with_default_mode(mut self, mode: ProfileMode) -> Self {
        self.default_mode = mode;
        self
    }

    pub fn create_session_handler(&self) -> CreateTeamSessionHandler {
        CreateTeamSessionHandler::new(self.store.clone())
    }

    pub fn get_member_handler(&self) -> GetMemberHandler {
        GetMemberHandler::new(self.store.clone())
    }

    pub fn update_category_handler(&self) -> UpdateMemberCategoryHandler {
        UpdateMemberCategoryHandler::new(self.store.clone())
    }

    pub fn dashboard_handler(&self) -> GetTeamDashboardHandler {
        GetTeamDashboardHandler::new(
            self.store.clone(),
            self.phase_table.clone(),
            self.default_policy,
            self.weights,
        )
    }

    pub fn export_handler(&self) -> ExportTeamProfileHandler {
        ExportTeamProfileHandler::new(self.store.clone())
    }

    pub fn import_handler(&self) -> ImportTeamProfileHandler {
        ImportTeamProfileHandler::new(self.store.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Command Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// POST /api/team-sessions - Start a team session
pub async fn create_team_session(
    State(state): State<TeamAppState>,
    Json(request): Json<CreateTeamSessionRequest>,
) -> Result<impl IntoResponse, TeamApiError> {
    let cmd = CreateTeamSessionCommand {
        mode: request.mode.unwrap_or(state.default_mode),
        document: request.profile,
    };

    let result = state.create_session_handler().handle(cmd).await?;
    let response = TeamSessionResponse::from(&result.session);

    Ok((StatusCode::CREATED, Json(response)))
}

/// PUT /api/team-sessions/:id/members/:member/:category - Replace one category
pub async fn update_member_category(
    State(state): State<TeamAppState>,
    Path((session_id, member, category)): Path<(String, String, String)>,
    Json(request): Json<UpdateCategoryRequest>,
) -> Result<impl IntoResponse, TeamApiError> {
    let session_id = parse_session_id(&session_id)?;
    let category: Category = category.parse().map_err(TeamError::from)?;

    let cmd = UpdateMemberCategoryCommand {
        session_id,
        member: member.clone(),
        category,
        tags: request.tags,
    };

    let result = state.update_category_handler().handle(cmd).await?;
    let response = MemberProfileResponse::new(&member, result.mode, &result.profile);

    Ok((StatusCode::OK, Json(response)))
}

/// PUT /api/team-sessions/:id/profile - Replace the roster from a document
pub async fn import_profile(
    State(state): State<TeamAppState>,
    Path(session_id): Path<String>,
    Json(document): Json<ProfileDocument>,
) -> Result<impl IntoResponse, TeamApiError> {
    let session_id = parse_session_id(&session_id)?;

    let cmd = ImportTeamProfileCommand {
        session_id,
        document,
    };

    let result = state.import_handler().handle(cmd).await?;
    let response = TeamSessionResponse::from(&result.session);

    Ok((StatusCode::OK, Json(response)))
}

// ════════════════════════════════════════════════════════════════════════════════
// Query Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// GET /api/team-sessions/:id/members/:member - One member's profile
pub async fn get_member(
    State(state): State<TeamAppState>,
    Path((session_id, member)): Path<(String, String)>,
) -> Result<impl IntoResponse, TeamApiError> {
    let session_id = parse_session_id(&session_id)?;
    tracing::debug!(session_id = %session_id, member = %member, "Fetching member profile");

    let result = state
        .get_member_handler()
        .handle(GetMemberQuery { session_id, member })
        .await?;
    let response = MemberProfileResponse::new(result.member.as_str(), result.mode, &result.profile);

    Ok((StatusCode::OK, Json(response)))
}

/// GET /api/team-sessions/:id/dashboard?policy= - Charts for the roster
pub async fn get_dashboard(
    State(state): State<TeamAppState>,
    Path(session_id): Path<String>,
    Query(query): Query<DashboardQuery>,
) -> Result<impl IntoResponse, TeamApiError> {
    let session_id = parse_session_id(&session_id)?;
    let policy = query
        .policy
        .as_deref()
        .map(str::parse::<CoveragePolicy>)
        .transpose()
        .map_err(TeamError::from)?;
    tracing::debug!(session_id = %session_id, policy = ?policy, "Building team dashboard");

    let dashboard = state
        .dashboard_handler()
        .handle(GetTeamDashboardQuery { session_id, policy })
        .await?;

    Ok((StatusCode::OK, Json(dashboard)))
}

/// GET /api/team-sessions/:id/export - Download the roster as JSON
pub async fn export_profile(
    State(state): State<TeamAppState>,
    Path(session_id): Path<String>,
) -> Result<impl IntoResponse, TeamApiError> {
    let session_id = parse_session_id(&session_id)?;

    let export = state
        .export_handler()
        .handle(ExportTeamProfileQuery { session_id })
        .await?;
    let disposition = export.content_disposition();

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, export.content_type.to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        export.body,
    ))
}

fn parse_session_id(raw: &str) -> Result<SessionId, TeamApiError> {
    raw.parse()
        .map_err(|_| TeamApiError::BadRequest(format!("Invalid session ID format: {}", raw)))
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

/// API error type that converts team errors to HTTP responses.
#[derive(Debug)]
pub enum TeamApiError {
    /// Malformed path or query parameter.
    BadRequest(String),
    Team(TeamError),
}

impl From<TeamError> for TeamApiError {
    fn from(err: TeamError) -> Self {
        TeamApiError::Team(err)
    }
}

impl IntoResponse for TeamApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, error) = match self {
            TeamApiError::BadRequest(msg) => {
                tracing::warn!("Rejected request: {}", msg);
                (StatusCode::BAD_REQUEST, ErrorResponse::bad_request(msg))
            }
            TeamApiError::Team(err) => {
                let code = err.code();
                let status = if code.is_not_found() {
                    StatusCode::NOT_FOUND
                } else if code.is_validation() {
                    StatusCode::BAD_REQUEST
                } else {
                    StatusCode::INTERNAL_SERVER_ERROR
                };
                if status.is_server_error() {
                    tracing::error!(code = %code, "Team request failed: {}", err);
                } else {
                    tracing::warn!(code = %code, "Rejected team request: {}", err);
                }
                (status, ErrorResponse::from_code(code, err.to_string()))
            }
        };

        (status, Json(error)).into_response()
    }
}
