// ── View-models ──
//
// Data structures describing what to render. Core logic builds these;
// the presentation layer turns them into widgets or markup. All the
// fallback text lives here, not in the renderer.

use bytesize::ByteSize;
use std::time::Duration;

use crate::model::{Resource, ResourceCollection, ResourceKind, Subject};

/// Placeholder description when a resource has none.
const NO_DESCRIPTION: &str = "No description available";
/// Placeholder for missing size/duration metadata.
const NOT_AVAILABLE: &str = "N/A";

/// One navigable subject card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubjectCard {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub icon: String,
    pub color: String,
    pub resource_count: Option<i64>,
    /// Route the card navigates to.
    pub route: &'static str,
    /// Detail-route parameter: the subject's lowercased code.
    pub code: String,
}

/// One resource card, with all placeholder fallbacks applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceCard {
    pub title: String,
    pub description: String,
    /// Humanized file size, or "N/A".
    pub size_label: String,
    /// Humanized playback length, or "N/A".
    pub duration_label: String,
    /// Resource id the download action references.
    pub download_id: i64,
}

/// Fixed placeholder shown when a category has no resources.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    pub title: String,
    pub hint: &'static str,
}

/// What to render for one category tab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceListView {
    Cards(Vec<ResourceCard>),
    Empty(EmptyState),
}

/// Map the subject catalog to cards, one per subject, in order.
pub fn subject_cards(subjects: &[Subject]) -> Vec<SubjectCard> {
    subjects
        .iter()
        .map(|s| SubjectCard {
            id: s.id,
            title: s.name.clone(),
            description: s.description.clone(),
            icon: s.icon.clone(),
            color: s.color.clone(),
            resource_count: s.resource_count,
            route: "subject-detail",
            code: s.route_code(),
        })
        .collect()
}

/// Map one category of a collection to its list view. An absent or
/// empty category renders the fixed placeholder.
pub fn resource_list(kind: ResourceKind, collection: &ResourceCollection) -> ResourceListView {
    let resources = collection.get(&kind).map_or(&[][..], Vec::as_slice);

    if resources.is_empty() {
        return ResourceListView::Empty(EmptyState {
            title: format!("No {} available", kind.to_string().to_lowercase()),
            hint: "Check back later for new resources",
        });
    }

    ResourceListView::Cards(resources.iter().map(resource_card).collect())
}

/// Map all four categories eagerly, in tab order. Tab switching is then
/// a pure visibility toggle over these, with no further work.
pub fn all_resource_lists(
    collection: &ResourceCollection,
) -> Vec<(ResourceKind, ResourceListView)> {
    ResourceKind::all()
        .map(|kind| (kind, resource_list(kind, collection)))
        .collect()
}

fn resource_card(resource: &Resource) -> ResourceCard {
    ResourceCard {
        title: resource.title.clone(),
        description: resource
            .description
            .clone()
            .unwrap_or_else(|| NO_DESCRIPTION.to_owned()),
        size_label: resource
            .file_size
            .map_or_else(|| NOT_AVAILABLE.to_owned(), |b| ByteSize(b).to_string()),
        duration_label: resource.duration_mins.map_or_else(
            || NOT_AVAILABLE.to_owned(),
            |mins| humantime::format_duration(Duration::from_secs(mins * 60)).to_string(),
        ),
        download_id: resource.id,
    }
}
