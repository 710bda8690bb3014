//! GetTeamDashboardHandler - Query handler for the team dashboard.
//!
//! Builds distribution, phase coverage and relationship graph for a
//! session's current roster.

use std::sync::Arc;

use super::load_session;
use crate::domain::analysis::{CoveragePolicy, CoverageWeights, PhaseTable};
use crate::domain::dashboard::TeamDashboard;
use crate::domain::foundation::SessionId;
use crate::domain::team::TeamError;
use crate::ports::RosterSessionStore;

/// Query for a session's dashboard.
#[derive(Debug, Clone)]
pub struct GetTeamDashboardQuery {
    pub session_id: SessionId,
    /// Coverage policy; the handler default applies when `None`.
    pub policy: Option<CoveragePolicy>,
}

/// Handler for dashboard queries.
pub struct GetTeamDashboardHandler {
    store: Arc<dyn RosterSessionStore>,
    phase_table: Arc<PhaseTable>,
    default_policy: CoveragePolicy,
    weights: CoverageWeights,
}

impl GetTeamDashboardHandler {
    pub fn new(
        store: Arc<dyn RosterSessionStore>,
        phase_table: Arc<PhaseTable>,
        default_policy: CoveragePolicy,
        weights: CoverageWeights,
    ) -> Self {
        Self {
            store,
            phase_table,
            default_policy,
            weights,
        }
    }

    pub async fn handle(&self, query: GetTeamDashboardQuery) -> Result<TeamDashboard, TeamError> {
        let session = load_session(self.store.as_ref(), query.session_id).await?;
        let policy = query.policy.unwrap_or(self.default_policy);

        Ok(TeamDashboard::build(
            session.roster(),
            &self.phase_table,
            policy,
            self.weights,
        ))
    }
}
