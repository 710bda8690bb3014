//! UpdateMemberCategoryHandler - Command handler for editing one category.
//!
//! Replaces a member's Genius, Competency or Frustration tags. Invalid tags
//! or an untracked category leave the stored session untouched.

use std::sync::Arc;

use crate::domain::foundation::{Category, SessionId, Timestamp};
use crate::domain::session::TeamSession;
use crate::domain::team::{MemberProfile, ProfileMode, TeamError};
use crate::ports::RosterSessionStore;

/// Command to replace one category of a member's profile.
#[derive(Debug, Clone)]
pub struct UpdateMemberCategoryCommand {
    pub session_id: SessionId,
    pub member: String,
    pub category: Category,
    /// Tag symbols or names, in selection order.
    pub tags: Vec<String>,
}

/// Result of a successful edit.
#[derive(Debug, Clone)]
pub struct UpdateMemberCategoryResult {
    pub mode: ProfileMode,
    pub profile: MemberProfile,
    pub updated_at: Timestamp,
}

/// Handler for category edits.
pub struct UpdateMemberCategoryHandler {
    store: Arc<dyn RosterSessionStore>,
}

impl UpdateMemberCategoryHandler {
    pub fn new(store: Arc<dyn RosterSessionStore>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        cmd: UpdateMemberCategoryCommand,
    ) -> Result<UpdateMemberCategoryResult, TeamError> {
        let member = cmd.member.as_str();
        let category = cmd.category;
        let tags = cmd.tags.as_slice();

        let session = self
            .store
            .modify(
                &cmd.session_id,
                Box::new(move |session: &mut TeamSession| {
                    session.set_category_symbols(member, category, tags)
                }),
            )
            .await?;

        tracing::info!(
            session_id = %cmd.session_id,
            member = %cmd.member,
            category = %cmd.category,
            tags = cmd.tags.len(),
            "Member category updated"
        );

        Ok(UpdateMemberCategoryResult {
            mode: session.mode(),
            profile: session.member(&cmd.member)?.clone(),
            updated_at: *session.updated_at(),
        })
    }
}
