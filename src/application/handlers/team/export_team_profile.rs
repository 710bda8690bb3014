//! ExportTeamProfileHandler - Query handler rendering the JSON download.

use std::sync::Arc;

use super::load_session;
use crate::domain::foundation::SessionId;
use crate::domain::team::{ProfileExport, TeamError};
use crate::ports::RosterSessionStore;

/// Query to export a session's roster.
#[derive(Debug, Clone)]
pub struct ExportTeamProfileQuery {
    pub session_id: SessionId,
}

/// Handler for profile exports.
pub struct ExportTeamProfileHandler {
    store: Arc<dyn RosterSessionStore>,
}

impl ExportTeamProfileHandler {
    pub fn new(store: Arc<dyn RosterSessionStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, query: ExportTeamProfileQuery) -> Result<ProfileExport, TeamError> {
        let session = load_session(self.store.as_ref(), query.session_id).await?;
        let export = ProfileExport::from_roster(session.roster())?;

        tracing::info!(
            session_id = %query.session_id,
            filename = export.filename,
            bytes = export.body.len(),
            "Team profile exported"
        );

        Ok(export)
    }
}
