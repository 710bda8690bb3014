//! Roster - the ordered team of members and their profiles.

use serde::{Deserialize, Serialize};

use super::{CategoryLists, MemberEntry, MemberProfile, ProfileDocument, TagSet, TeamError};
use crate::domain::foundation::{Category, MemberName, Tag, ValidationError};

/// Which categories a roster tracks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileMode {
    /// Genius, Competency and Frustration.
    #[default]
    Full,
    /// A single genius set per member.
    GeniusOnly,
}

impl ProfileMode {
    /// True if this mode records the given category.
    pub fn tracks(&self, category: Category) -> bool {
        match self {
            ProfileMode::Full => true,
            ProfileMode::GeniusOnly => category == Category::Genius,
        }
    }
}

/// Ordered mapping from member name to profile.
///
/// Members are fixed once the roster is built; edits only replace tag sets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roster {
    mode: ProfileMode,
    members: Vec<(MemberName, MemberProfile)>,
}

impl Roster {
    /// Creates an empty roster.
    pub fn new(mode: ProfileMode) -> Self {
        Self {
            mode,
            members: Vec::new(),
        }
    }

    /// The four-person team the dashboard starts with.
    pub fn default_team(mode: ProfileMode) -> Self {
        use Tag::*;

        let seed = [
            ("Anne", [Galvanizing, Tenacity], [Invention, Discernment], [Wonder, Enablement]),
            ("Molly", [Invention, Discernment], [Galvanizing, Enablement], [Wonder, Tenacity]),
            ("Allison", [Invention, Discernment], [Galvanizing, Tenacity], [Wonder, Enablement]),
            ("Kris", [Wonder, Enablement], [Discernment, Invention], [Galvanizing, Tenacity]),
        ];

        let members = seed
            .into_iter()
            .map(|(name, genius, competency, frustration)| {
                let profile = match mode {
                    ProfileMode::Full => MemberProfile::new(genius, competency, frustration),
                    ProfileMode::GeniusOnly => MemberProfile::genius_only(genius),
                };
                (MemberName::from_static(name), profile)
            })
            .collect();

        Self { mode, members }
    }

    /// Adds a member, consuming and returning the roster.
    ///
    /// Fails on a blank or duplicate name, or on non-genius tags in
    /// genius-only mode.
    pub fn with_member(
        mut self,
        name: impl Into<String>,
        profile: MemberProfile,
    ) -> Result<Self, TeamError> {
        let name = MemberName::new(name)?;
        if self.position(name.as_str()).is_some() {
            return Err(ValidationError::duplicate_member(name.as_str()).into());
        }
        for category in Category::all() {
            if !profile.category(*category).is_empty() {
                self.check_tracked(*category)?;
            }
        }
        self.members.push((name, profile));
        Ok(self)
    }

    pub fn mode(&self) -> ProfileMode {
        self.mode
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Iterates members in roster order.
    pub fn members(&self) -> impl Iterator<Item = (&MemberName, &MemberProfile)> + '_ {
        self.members.iter().map(|(name, profile)| (name, profile))
    }

    pub fn member_names(&self) -> Vec<MemberName> {
        self.members.iter().map(|(name, _)| name.clone()).collect()
    }

    /// Roster position of a member, if present.
    pub fn position(&self, member: &str) -> Option<usize> {
        let member = member.trim();
        self.members.iter().position(|(name, _)| name.as_str() == member)
    }

    /// Looks up a member's profile.
    pub fn get(&self, member: &str) -> Result<&MemberProfile, TeamError> {
        self.position(member)
            .map(|idx| &self.members[idx].1)
            .ok_or_else(|| TeamError::member_not_found(member))
    }

    /// Replaces one category of a member's profile.
    pub fn set_category(
        &mut self,
        member: &str,
        category: Category,
        tags: TagSet,
    ) -> Result<(), TeamError> {
        self.check_tracked(category)?;
        let idx = self
            .position(member)
            .ok_or_else(|| TeamError::member_not_found(member))?;
        self.members[idx].1.set_category(category, tags);
        Ok(())
    }

    /// Replaces one category from raw symbols. Nothing changes on failure.
    pub fn set_category_symbols<S: AsRef<str>>(
        &mut self,
        member: &str,
        category: Category,
        symbols: &[S],
    ) -> Result<(), TeamError> {
        let tags = TagSet::from_symbols(symbols)?;
        self.set_category(member, category, tags)
    }

    /// Pure form of [`Roster::set_category`].
    pub fn with_category(
        mut self,
        member: &str,
        category: Category,
        tags: TagSet,
    ) -> Result<Self, TeamError> {
        self.set_category(member, category, tags)?;
        Ok(self)
    }

    /// Converts to the plain nested export form.
    pub fn to_document(&self) -> ProfileDocument {
        let mut doc = ProfileDocument::new();
        for (name, profile) in &self.members {
            let entry = match self.mode {
                ProfileMode::Full => MemberEntry::Categorised(CategoryLists {
                    genius: profile.genius().symbols(),
                    competency: profile.competency().symbols(),
                    frustration: profile.frustration().symbols(),
                }),
                ProfileMode::GeniusOnly => MemberEntry::GeniusOnly(profile.genius().symbols()),
            };
            doc.push(name.as_str(), entry);
        }
        doc
    }

    /// Builds a roster from its export form.
    ///
    /// A document made only of flat lists yields a genius-only roster; any
    /// categorised entry makes it a full roster. An empty document yields an
    /// empty full roster.
    pub fn from_document(doc: ProfileDocument) -> Result<Self, TeamError> {
        Self::from_document_with_mode(doc, ProfileMode::Full)
    }

    /// Like [`Roster::from_document`], but an empty document (`{}`) carries
    /// no mode of its own and takes `empty_mode`.
    pub fn from_document_with_mode(
        doc: ProfileDocument,
        empty_mode: ProfileMode,
    ) -> Result<Self, TeamError> {
        let mode = if doc.is_empty() {
            empty_mode
        } else if doc
            .entries()
            .iter()
            .all(|(_, entry)| matches!(entry, MemberEntry::GeniusOnly(_)))
        {
            ProfileMode::GeniusOnly
        } else {
            ProfileMode::Full
        };

        let mut roster = Roster::new(mode);
        for (name, entry) in doc.into_entries() {
            let profile = match entry {
                MemberEntry::GeniusOnly(genius) => {
                    MemberProfile::genius_only(TagSet::from_symbols(&genius)?)
                }
                MemberEntry::Categorised(lists) => MemberProfile::new(
                    TagSet::from_symbols(&lists.genius)?,
                    TagSet::from_symbols(&lists.competency)?,
                    TagSet::from_symbols(&lists.frustration)?,
                ),
            };
            roster = roster.with_member(name, profile)?;
        }
        Ok(roster)
    }

    fn check_tracked(&self, category: Category) -> Result<(), ValidationError> {
        if self.mode.tracks(category) {
            Ok(())
        } else {
            Err(ValidationError::category_not_tracked(category.display_name()))
        }
    }
}

impl Default for Roster {
    fn default() -> Self {
        Self::default_team(ProfileMode::Full)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn anne_and_molly() -> Roster {
        Roster::new(ProfileMode::Full)
            .with_member(
                "Anne",
                MemberProfile::new(
                    [Tag::Galvanizing, Tag::Tenacity],
                    [Tag::Invention, Tag::Discernment],
                    [Tag::Wonder, Tag::Enablement],
                ),
            )
            .unwrap()
            .with_member(
                "Molly",
                MemberProfile::new(
                    [Tag::Invention, Tag::Discernment],
                    [Tag::Galvanizing, Tag::Enablement],
                    [Tag::Wonder, Tag::Tenacity],
                ),
            )
            .unwrap()
    }

    #[test]
    fn default_team_has_four_members_in_order() {
        let roster = Roster::default_team(ProfileMode::Full);
        let names: Vec<_> = roster.member_names().iter().map(|n| n.to_string()).collect();
        assert_eq!(names, vec!["Anne", "Molly", "Allison", "Kris"]);
        assert_eq!(
            roster.get("Kris").unwrap().competency().as_slice(),
            &[Tag::Discernment, Tag::Invention]
        );
    }

    #[test]
    fn genius_only_default_team_drops_other_categories() {
        let roster = Roster::default_team(ProfileMode::GeniusOnly);
        assert!(roster.members().all(|(_, p)| p.is_genius_only()));
        assert_eq!(
            roster.get("Anne").unwrap().genius().as_slice(),
            &[Tag::Galvanizing, Tag::Tenacity]
        );
    }

    #[test]
    fn get_unknown_member_is_not_found() {
        let roster = anne_and_molly();
        assert_eq!(
            roster.get("Zoe").unwrap_err(),
            TeamError::member_not_found("Zoe")
        );
    }

    #[test]
    fn set_category_symbols_replaces_set() {
        let mut roster = anne_and_molly();
        roster
            .set_category_symbols("Molly", Category::Genius, &["T", "W"])
            .unwrap();
        assert_eq!(
            roster.get("Molly").unwrap().genius().as_slice(),
            &[Tag::Tenacity, Tag::Wonder]
        );
    }

    #[test]
    fn set_category_symbols_rejects_unknown_tag_without_change() {
        let mut roster = anne_and_molly();
        let before = roster.clone();
        let err = roster
            .set_category_symbols("Anne", Category::Competency, &["I", "X"])
            .unwrap_err();
        assert_eq!(err, TeamError::Validation(ValidationError::unknown_tag("X")));
        assert_eq!(roster, before);
    }

    #[test]
    fn set_category_for_missing_member_fails() {
        let mut roster = anne_and_molly();
        let err = roster
            .set_category("Kris", Category::Genius, TagSet::new())
            .unwrap_err();
        assert_eq!(err, TeamError::member_not_found("Kris"));
    }

    #[test]
    fn genius_only_roster_rejects_other_categories() {
        let mut roster = Roster::default_team(ProfileMode::GeniusOnly);
        let err = roster
            .set_category("Anne", Category::Frustration, TagSet::from([Tag::Wonder]))
            .unwrap_err();
        assert_eq!(
            err,
            TeamError::Validation(ValidationError::category_not_tracked("Frustration"))
        );
    }

    #[test]
    fn with_member_rejects_duplicates() {
        let err = anne_and_molly()
            .with_member("Anne", MemberProfile::default())
            .unwrap_err();
        assert_eq!(
            err,
            TeamError::Validation(ValidationError::duplicate_member("Anne"))
        );
    }

    #[test]
    fn with_category_returns_updated_roster() {
        let roster = anne_and_molly()
            .with_category("Anne", Category::Genius, TagSet::from([Tag::Wonder]))
            .unwrap();
        assert_eq!(roster.get("Anne").unwrap().genius().as_slice(), &[Tag::Wonder]);
    }

    #[test]
    fn document_round_trip_preserves_everything() {
        let roster = Roster::default_team(ProfileMode::Full);
        let restored = Roster::from_document(roster.to_document()).unwrap();
        assert_eq!(restored, roster);
    }

    #[test]
    fn genius_only_document_round_trip() {
        let roster = Roster::default_team(ProfileMode::GeniusOnly);
        let doc = roster.to_document();
        assert!(matches!(doc.entries()[0].1, MemberEntry::GeniusOnly(_)));
        let restored = Roster::from_document(doc).unwrap();
        assert_eq!(restored.mode(), ProfileMode::GeniusOnly);
        assert_eq!(restored, roster);
    }

    #[test]
    fn from_document_rejects_unknown_tags() {
        let doc = ProfileDocument::from_json(r#"{"Anne": {"Genius": ["G", "Q"]}}"#).unwrap();
        let err = Roster::from_document(doc).unwrap_err();
        assert_eq!(err, TeamError::Validation(ValidationError::unknown_tag("Q")));
    }

    #[test]
    fn from_document_rejects_duplicate_members() {
        let doc = ProfileDocument::from_json(r#"{"Anne": ["G"], "Anne": ["T"]}"#).unwrap();
        assert!(matches!(
            Roster::from_document(doc),
            Err(TeamError::Validation(ValidationError::DuplicateMember { .. }))
        ));
    }

    #[test]
    fn empty_document_gives_empty_full_roster() {
        let roster = Roster::from_document(ProfileDocument::new()).unwrap();
        assert!(roster.is_empty());
        assert_eq!(roster.mode(), ProfileMode::Full);
    }

    #[test]
    fn empty_genius_only_roster_round_trips_with_mode() {
        let roster = Roster::new(ProfileMode::GeniusOnly);
        let json = roster.to_document().to_json_pretty().unwrap();
        assert_eq!(json, "{}");

        let doc = ProfileDocument::from_json(&json).unwrap();
        let restored = Roster::from_document_with_mode(doc, ProfileMode::GeniusOnly).unwrap();

        assert_eq!(restored.mode(), ProfileMode::GeniusOnly);
        assert_eq!(restored, roster);
    }

    #[test]
    fn non_empty_document_ignores_mode_hint() {
        let doc = ProfileDocument::from_json(r#"{"Anne": {"Genius": ["G"]}}"#).unwrap();
        let roster = Roster::from_document_with_mode(doc, ProfileMode::GeniusOnly).unwrap();
        assert_eq!(roster.mode(), ProfileMode::Full);

        let doc = ProfileDocument::from_json(r#"{"Anne": ["G"]}"#).unwrap();
        let roster = Roster::from_document_with_mode(doc, ProfileMode::Full).unwrap();
        assert_eq!(roster.mode(), ProfileMode::GeniusOnly);
    }
}
