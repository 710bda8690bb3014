//! ImportTeamProfileHandler - Command handler replacing a session's roster
//! with an uploaded profile document.

use std::sync::Arc;

use crate::domain::foundation::SessionId;
use crate::domain::session::TeamSession;
use crate::domain::team::{ProfileDocument, Roster, TeamError};
use crate::ports::RosterSessionStore;

/// Command to import a profile document into an existing session.
#[derive(Debug, Clone)]
pub struct ImportTeamProfileCommand {
    pub session_id: SessionId,
    pub document: ProfileDocument,
}

/// Result of a successful import.
#[derive(Debug, Clone)]
pub struct ImportTeamProfileResult {
    pub session: TeamSession,
}

/// Handler for profile imports.
pub struct ImportTeamProfileHandler {
    store: Arc<dyn RosterSessionStore>,
}

impl ImportTeamProfileHandler {
    pub fn new(store: Arc<dyn RosterSessionStore>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        cmd: ImportTeamProfileCommand,
    ) -> Result<ImportTeamProfileResult, TeamError> {
        let document = cmd.document;

        // An empty document keeps the session's current mode.
        let session = self
            .store
            .modify(
                &cmd.session_id,
                Box::new(move |session: &mut TeamSession| -> Result<(), TeamError> {
                    let roster = Roster::from_document_with_mode(document, session.mode())?;
                    session.replace_roster(roster);
                    Ok(())
                }),
            )
            .await?;

        tracing::info!(
            session_id = %cmd.session_id,
            members = session.roster().len(),
            mode = ?session.mode(),
            "Team profile imported"
        );

        Ok(ImportTeamProfileResult { session })
    }
}
