// ── Resource domain types ──

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, IntoEnumIterator};

/// The four resource categories a subject's detail view shows as tabs.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumIter, Serialize, Deserialize,
)]
pub enum ResourceKind {
    #[default]
    #[strum(to_string = "Notes")]
    Notes,
    #[strum(to_string = "Videos")]
    Videos,
    #[strum(to_string = "Questions")]
    Questions,
    #[strum(to_string = "Past Papers")]
    PastPapers,
}

impl ResourceKind {
    /// All categories in tab order.
    pub fn all() -> impl Iterator<Item = Self> {
        Self::iter()
    }

    /// Canonical wire key (`notes | videos | questions | past-papers`).
    pub fn key(self) -> &'static str {
        match self {
            Self::Notes => "notes",
            Self::Videos => "videos",
            Self::Questions => "questions",
            Self::PastPapers => "past-papers",
        }
    }

    /// Parse a server-side category spelling. The backend is not
    /// consistent with the canonical keys (`video`, `past_paper`), so
    /// both spellings are accepted.
    pub fn from_wire(key: &str) -> Option<Self> {
        match key {
            "notes" => Some(Self::Notes),
            "videos" | "video" => Some(Self::Videos),
            "questions" => Some(Self::Questions),
            "past-papers" | "past_paper" | "past_papers" => Some(Self::PastPapers),
            _ => None,
        }
    }
}

/// One learning resource within a category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    /// File size in bytes.
    pub file_size: Option<u64>,
    /// Playback length in minutes (videos only).
    pub duration_mins: Option<u64>,
}

/// A subject's resources, keyed by category in tab order.
///
/// Replaced wholesale when a subject detail loads; only the categories
/// the detail endpoint returned are present as keys.
pub type ResourceCollection = IndexMap<ResourceKind, Vec<Resource>>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_keys_round_trip() {
        for kind in ResourceKind::all() {
            assert_eq!(ResourceKind::from_wire(kind.key()), Some(kind));
        }
    }

    #[test]
    fn backend_spellings_are_accepted() {
        assert_eq!(ResourceKind::from_wire("video"), Some(ResourceKind::Videos));
        assert_eq!(
            ResourceKind::from_wire("past_paper"),
            Some(ResourceKind::PastPapers)
        );
        assert_eq!(ResourceKind::from_wire("homework"), None);
    }
}
