//! Route configuration for team session endpoints.

use axum::routing::{get, post, put};
use axum::Router;

use super::handlers::{
    create_team_session, export_profile, get_dashboard, get_member, import_profile,
    update_member_category, TeamAppState,
};

/// Creates the team router with all endpoints.
///
/// Routes:
/// - `POST /api/team-sessions` - Start a session (default team or uploaded profile)
/// - `GET /api/team-sessions/:id/members/:member` - One member's profile
/// - `PUT /api/team-sessions/:id/members/:member/:category` - Replace one category
/// - `GET /api/team-sessions/:id/dashboard?policy=` - Dashboard charts
/// - `GET /api/team-sessions/:id/export` - JSON download
/// - `PUT /api/team-sessions/:id/profile` - Replace the roster from a document
pub fn team_router() -> Router<TeamAppState> {
    Router::new()
        .route("/api/team-sessions", post(create_team_session))
        .route("/api/team-sessions/:id/members/:member", get(get_member))
        .route(
            "/api/team-sessions/:id/members/:member/:category",
            put(update_member_category),
        )
        .route("/api/team-sessions/:id/dashboard", get(get_dashboard))
        .route("/api/team-sessions/:id/export", get(export_profile))
        .route("/api/team-sessions/:id/profile", put(import_profile))
}
