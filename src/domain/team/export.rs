//! ProfileExport - the downloadable JSON form of a roster.

use serde::Serialize;

use super::{ProfileMode, Roster, TeamError};

/// Download name for a full profile export.
pub const FULL_PROFILE_FILENAME: &str = "working_genius_full_profile.json";

/// Download name for a genius-only export.
pub const GENIUS_ONLY_FILENAME: &str = "working_genius_team.json";

/// A rendered export, ready to hand to a download.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileExport {
    pub filename: &'static str,
    pub content_type: &'static str,
    pub body: String,
}

impl ProfileExport {
    /// Renders the roster as pretty-printed JSON.
    pub fn from_roster(roster: &Roster) -> Result<Self, TeamError> {
        let body = roster.to_document().to_json_pretty()?;
        Ok(Self {
            filename: Self::filename_for(roster.mode()),
            content_type: "application/json",
            body,
        })
    }

    pub fn filename_for(mode: ProfileMode) -> &'static str {
        match mode {
            ProfileMode::Full => FULL_PROFILE_FILENAME,
            ProfileMode::GeniusOnly => GENIUS_ONLY_FILENAME,
        }
    }

    /// Value for a `Content-Disposition` header.
    pub fn content_disposition(&self) -> String {
        format!("attachment; filename=\"{}\"", self.filename)
    }
}
