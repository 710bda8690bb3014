pub mod overview;
pub mod palette;

pub use overview::{CategoryColor, MemberColor, MemberOverlap, TeamDashboard};
pub use palette::{ColorPalette, COMPETENCY_COLOR, FRUSTRATION_COLOR, GENIUS_COLOR};
