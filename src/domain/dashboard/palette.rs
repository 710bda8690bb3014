//! Chart colours for categories and members.

use crate::domain::foundation::Category;

pub const GENIUS_COLOR: &str = "#00A049";
pub const COMPETENCY_COLOR: &str = "#FBC331";
pub const FRUSTRATION_COLOR: &str = "#CB695B";

/// Colours for the seeded team.
const NAMED_MEMBER_COLORS: [(&str, &str); 4] = [
    ("Anne", "#FF7F50"),    // coral
    ("Molly", "#87CEEB"),   // sky blue
    ("Allison", "#DDA0DD"), // plum
    ("Kris", "#90EE90"),    // light green
];

/// Cycled by roster position for everyone else.
const FALLBACK_MEMBER_COLORS: [&str; 10] = [
    "#1F77B4", "#FF7F0E", "#2CA02C", "#D62728", "#9467BD", "#8C564B", "#E377C2", "#7F7F7F",
    "#BCBD22", "#17BECF",
];

pub struct ColorPalette;

impl ColorPalette {
    pub fn category_color(category: Category) -> &'static str {
        match category {
            Category::Genius => GENIUS_COLOR,
            Category::Competency => COMPETENCY_COLOR,
            Category::Frustration => FRUSTRATION_COLOR,
        }
    }

    /// Colour for a member: a fixed colour for the seeded names, otherwise
    /// the fallback palette indexed by roster position.
    pub fn member_color(name: &str, position: usize) -> &'static str {
        NAMED_MEMBER_COLORS
            .iter()
            .find(|(named, _)| *named == name)
            .map(|(_, color)| *color)
            .unwrap_or(FALLBACK_MEMBER_COLORS[position % FALLBACK_MEMBER_COLORS.len()])
    }
}
