//! GetMemberHandler - Query handler for one member's profile.

use std::sync::Arc;

use super::load_session;
use crate::domain::foundation::{MemberName, SessionId};
use crate::domain::team::{MemberProfile, ProfileMode, TeamError};
use crate::ports::RosterSessionStore;

/// Query for one member of a session.
#[derive(Debug, Clone)]
pub struct GetMemberQuery {
    pub session_id: SessionId,
    pub member: String,
}

/// A member profile together with the roster's mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetMemberResult {
    pub member: MemberName,
    pub mode: ProfileMode,
    pub profile: MemberProfile,
}

/// Handler for member lookups.
pub struct GetMemberHandler {
    store: Arc<dyn RosterSessionStore>,
}

impl GetMemberHandler {
    pub fn new(store: Arc<dyn RosterSessionStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, query: GetMemberQuery) -> Result<GetMemberResult, TeamError> {
        let session = load_session(self.store.as_ref(), query.session_id).await?;
        let profile = session.member(&query.member)?.clone();

        Ok(GetMemberResult {
            member: MemberName::new(query.member)?,
            mode: session.mode(),
            profile,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryRosterSessionStore;
    use crate::domain::foundation::Tag;
    use crate::domain::session::TeamSession;

    async fn setup() -> (GetMemberHandler, SessionId) {
        let store = Arc::new(InMemoryRosterSessionStore::new());
        let session = TeamSession::default_team(ProfileMode::Full);
        store.create(&session).await.unwrap();
        (GetMemberHandler::new(store), *session.id())
    }

    #[tokio::test]
    async fn returns_member_profile() {
        let (handler, session_id) = setup().await;

        let result = handler
            .handle(GetMemberQuery {
                session_id,
                member: "Molly".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(result.member.as_str(), "Molly");
        assert_eq!(
            result.profile.genius().as_slice(),
            &[Tag::Invention, Tag::Discernment]
        );
    }

    #[tokio::test]
    async fn unknown_member_is_not_found() {
        let (handler, session_id) = setup().await;

        let result = handler
            .handle(GetMemberQuery {
                session_id,
                member: "Zoe".to_string(),
            })
            .await;

        assert_eq!(result, Err(TeamError::member_not_found("Zoe")));
    }

    #[tokio::test]
    async fn unknown_session_is_not_found() {
        let (handler, _) = setup().await;
        let missing = SessionId::new();

        let result = handler
            .handle(GetMemberQuery {
                session_id: missing,
                member: "Anne".to_string(),
            })
            .await;

        assert_eq!(result, Err(TeamError::SessionNotFound(missing)));
    }
}
