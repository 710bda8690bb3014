//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod team;

pub use team::{
    CreateTeamSessionCommand, CreateTeamSessionHandler, CreateTeamSessionResult,
    ExportTeamProfileHandler, ExportTeamProfileQuery, GetMemberHandler, GetMemberQuery,
    GetMemberResult, GetTeamDashboardHandler, GetTeamDashboardQuery, ImportTeamProfileCommand,
    ImportTeamProfileHandler, ImportTeamProfileResult, UpdateMemberCategoryCommand,
    UpdateMemberCategoryHandler, UpdateMemberCategoryResult,
};
