use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::Error;

/// Presentation variant of the portfolio.
///
/// Both skins share the document registry ids and the navigation model.
/// They differ in content schema (see [`crate::InternRecord`] and
/// [`crate::SkillSet`]) and in the shell chrome they enable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Skin {
    /// Fixed explorer, flat skill list, summary-style internship record
    #[default]
    Classic,
    /// Collapsible explorer, intro overlay, timeline-style internship record
    Sidebar,
}

impl Skin {
    pub const ALL: [Skin; 2] = [Skin::Classic, Skin::Sidebar];

    pub fn as_str(&self) -> &'static str {
        match self {
            Skin::Classic => "classic",
            Skin::Sidebar => "sidebar",
        }
    }

    /// Whether the explorer pane can be collapsed
    pub fn has_collapsible_sidebar(&self) -> bool {
        matches!(self, Skin::Sidebar)
    }

    /// Whether the intro overlay is shown when the config does not say otherwise
    pub fn shows_intro_by_default(&self) -> bool {
        matches!(self, Skin::Sidebar)
    }
}

impl fmt::Display for Skin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Skin {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "classic" => Ok(Skin::Classic),
            "sidebar" => Ok(Skin::Sidebar),
            _ => Err(Error::UnknownSkin(s.to_string())),
        }
    }
}
