//! Team Module - the roster of members and their Working Genius profiles.
//!
//! # Components
//!
//! - `TagSet` - unique tags in selection order
//! - `MemberProfile` - Genius / Competency / Frustration sets for one member
//! - `Roster` - ordered members with lookup and category edits
//! - `ProfileDocument` - plain nested form used for JSON export and import
//! - `ProfileExport` - rendered download (filename, content type, body)

mod document;
mod errors;
mod export;
mod profile;
mod roster;
mod tag_set;

pub use document::{CategoryLists, MemberEntry, ProfileDocument};
pub use errors::TeamError;
pub use export::{ProfileExport, FULL_PROFILE_FILENAME, GENIUS_ONLY_FILENAME};
pub use profile::{CategoryOverlap, MemberProfile};
pub use roster::{ProfileMode, Roster};
pub use tag_set::TagSet;
