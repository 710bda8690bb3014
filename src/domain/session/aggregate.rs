//! Team session aggregate.
//!
//! A session owns one roster. All edits go through the session so that
//! `updated_at` tracks the last change.

use crate::domain::foundation::{Category, SessionId, Timestamp};
use crate::domain::team::{MemberProfile, ProfileMode, Roster, TagSet, TeamError};

/// One team's editing session.
///
/// # Invariants
///
/// - `id` is globally unique
/// - `updated_at` is never before `created_at`
/// - A failed edit leaves the roster and `updated_at` unchanged
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamSession {
    id: SessionId,
    roster: Roster,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl TeamSession {
    /// Starts a session on the given roster.
    pub fn new(roster: Roster) -> Self {
        Self::with_id(SessionId::new(), roster)
    }

    pub fn with_id(id: SessionId, roster: Roster) -> Self {
        let now = Timestamp::now();
        Self {
            id,
            roster,
            created_at: now,
            updated_at: now,
        }
    }

    /// Starts a session seeded with the default team.
    pub fn default_team(mode: ProfileMode) -> Self {
        Self::new(Roster::default_team(mode))
    }

    /// Reconstitute a session from storage.
    pub fn reconstitute(
        id: SessionId,
        roster: Roster,
        created_at: Timestamp,
        updated_at: Timestamp,
    ) -> Self {
        Self {
            id,
            roster,
            created_at,
            updated_at,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn mode(&self) -> ProfileMode {
        self.roster.mode()
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    /// Looks up one member's profile.
    pub fn member(&self, name: &str) -> Result<&MemberProfile, TeamError> {
        self.roster.get(name)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Edits
    // ─────────────────────────────────────────────────────────────────────────

    /// Replaces one category of a member's profile.
    pub fn set_category(
        &mut self,
        member: &str,
        category: Category,
        tags: TagSet,
    ) -> Result<(), TeamError> {
        self.roster.set_category(member, category, tags)?;
        self.touch();
        Ok(())
    }

    /// Replaces one category from raw tag symbols or names.
    pub fn set_category_symbols<S: AsRef<str>>(
        &mut self,
        member: &str,
        category: Category,
        symbols: &[S],
    ) -> Result<(), TeamError> {
        self.roster.set_category_symbols(member, category, symbols)?;
        self.touch();
        Ok(())
    }

    /// Swaps in a whole roster, e.g. after an import.
    pub fn replace_roster(&mut self, roster: Roster) {
        self.roster = roster;
        self.touch();
    }

    fn touch(&mut self) {
        let now = Timestamp::now();
        if now.is_after(&self.updated_at) {
            self.updated_at = now;
        }
    }
}
