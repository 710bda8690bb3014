//! HTTP adapter for team session endpoints.
//!
//! Exposes the roster editor, dashboard and JSON export over REST.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    CreateTeamSessionRequest, DashboardQuery, ErrorResponse, MemberProfileResponse,
    TeamSessionResponse, UpdateCategoryRequest,
};
pub use handlers::{TeamApiError, TeamAppState};
pub use routes::team_router;
