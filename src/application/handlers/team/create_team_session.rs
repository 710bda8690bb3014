//! CreateTeamSessionHandler - Command handler for starting team sessions.

use std::sync::Arc;

use crate::domain::session::TeamSession;
use crate::domain::team::{ProfileDocument, ProfileMode, Roster, TeamError};
use crate::ports::RosterSessionStore;

/// Command to create a new team session.
#[derive(Debug, Clone, Default)]
pub struct CreateTeamSessionCommand {
    /// Mode for the seeded default team, or for an empty document.
    pub mode: ProfileMode,
    /// Optional starting roster in export form.
    pub document: Option<ProfileDocument>,
}

/// Result of successful session creation.
#[derive(Debug, Clone)]
pub struct CreateTeamSessionResult {
    pub session: TeamSession,
}

/// Handler for creating team sessions.
pub struct CreateTeamSessionHandler {
    store: Arc<dyn RosterSessionStore>,
}

impl CreateTeamSessionHandler {
    pub fn new(store: Arc<dyn RosterSessionStore>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        cmd: CreateTeamSessionCommand,
    ) -> Result<CreateTeamSessionResult, TeamError> {
        let roster = match cmd.document {
            Some(document) => Roster::from_document_with_mode(document, cmd.mode)?,
            None => Roster::default_team(cmd.mode),
        };

        let session = TeamSession::new(roster);
        self.store.create(&session).await?;

        tracing::info!(
            session_id = %session.id(),
            members = session.roster().len(),
            "Team session created"
        );

        Ok(CreateTeamSessionResult { session })
    }
}
