//! Team session command and query handlers.

mod create_team_session;
mod export_team_profile;
mod get_member;
mod get_team_dashboard;
mod import_team_profile;
mod update_member_category;

pub use create_team_session::{
    CreateTeamSessionCommand, CreateTeamSessionHandler, CreateTeamSessionResult,
};
pub use export_team_profile::{ExportTeamProfileHandler, ExportTeamProfileQuery};
pub use get_member::{GetMemberHandler, GetMemberQuery, GetMemberResult};
pub use get_team_dashboard::{GetTeamDashboardHandler, GetTeamDashboardQuery};
pub use import_team_profile::{
    ImportTeamProfileCommand, ImportTeamProfileHandler, ImportTeamProfileResult,
};
pub use update_member_category::{
    UpdateMemberCategoryCommand, UpdateMemberCategoryHandler, UpdateMemberCategoryResult,
};

use crate::domain::foundation::SessionId;
use crate::domain::session::TeamSession;
use crate::domain::team::TeamError;
use crate::ports::RosterSessionStore;

/// Loads a session or fails with `SessionNotFound`.
async fn load_session(
    store: &dyn RosterSessionStore,
    id: SessionId,
) -> Result<TeamSession, TeamError> {
    store
        .find(&id)
        .await?
        .ok_or_else(|| TeamError::session_not_found(id))
}

#[cfg(test)]
pub(crate) mod test_support {
    use async_trait::async_trait;

    use crate::domain::foundation::{DomainError, ErrorCode, SessionId};
    use crate::domain::session::TeamSession;
    use crate::domain::team::TeamError;
    use crate::ports::{RosterSessionStore, SessionEdit};

    /// Store whose every call fails with a storage error.
    pub struct FailingStore;

    #[async_trait]
    impl RosterSessionStore for FailingStore {
        async fn create(&self, _session: &TeamSession) -> Result<(), DomainError> {
            Err(DomainError::new(ErrorCode::StorageError, "Simulated create failure"))
        }

        async fn find(&self, _id: &SessionId) -> Result<Option<TeamSession>, DomainError> {
            Err(DomainError::new(ErrorCode::StorageError, "Simulated find failure"))
        }

        async fn update(&self, _session: &TeamSession) -> Result<(), DomainError> {
            Err(DomainError::new(ErrorCode::StorageError, "Simulated update failure"))
        }

        async fn modify(
            &self,
            _id: &SessionId,
            _edit: SessionEdit<'_>,
        ) -> Result<TeamSession, TeamError> {
            Err(TeamError::storage("Simulated modify failure"))
        }

        async fn delete(&self, _id: &SessionId) -> Result<(), DomainError> {
            Err(DomainError::new(ErrorCode::StorageError, "Simulated delete failure"))
        }
    }
}
