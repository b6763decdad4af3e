// ── API-to-domain type conversions ──
//
// Bridges raw `studyhall_api` response types into canonical
// `studyhall_core::model` domain types. Each impl normalizes field
// names, maps the server's category spellings onto `ResourceKind`, and
// fills defaults for missing optional data.

use std::collections::HashMap;

use studyhall_api::types::{ResourcePayload, SubjectPayload, UserPayload};

use crate::model::{Resource, ResourceCollection, ResourceKind, Subject, User};

impl From<UserPayload> for User {
    fn from(payload: UserPayload) -> Self {
        Self {
            id: payload.id,
            username: payload.username,
            full_name: payload.full_name,
            email: payload.email,
        }
    }
}

impl From<SubjectPayload> for Subject {
    fn from(payload: SubjectPayload) -> Self {
        Self {
            id: payload.id,
            code: payload.code,
            name: payload.name,
            description: payload.description.unwrap_or_default(),
            icon: payload.icon.unwrap_or_else(|| "book".into()),
            color: payload.color.unwrap_or_else(|| "#6272a4".into()),
            resource_count: payload.resource_count,
        }
    }
}

impl From<ResourcePayload> for Resource {
    fn from(payload: ResourcePayload) -> Self {
        Self {
            id: payload.id,
            title: payload.title,
            description: payload.description,
            file_size: payload.file_size,
            duration_mins: payload.duration,
        }
    }
}

/// Build a [`ResourceCollection`] from the detail endpoint's category
/// map. Keys the server sent that don't parse as a known category are
/// dropped; keys it didn't send stay absent. Category order follows tab
/// order regardless of the map's iteration order.
pub fn collection_from_wire(wire: HashMap<String, Vec<ResourcePayload>>) -> ResourceCollection {
    let mut parsed: HashMap<ResourceKind, Vec<Resource>> = HashMap::new();
    for (key, resources) in wire {
        if let Some(kind) = ResourceKind::from_wire(&key) {
            parsed
                .entry(kind)
                .or_default()
                .extend(resources.into_iter().map(Resource::from));
        }
    }

    ResourceKind::all()
        .filter_map(|kind| parsed.remove(&kind).map(|resources| (kind, resources)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(id: i64, title: &str) -> ResourcePayload {
        ResourcePayload {
            id,
            title: title.into(),
            description: None,
            file_size: None,
            duration: None,
            difficulty: None,
            year: None,
        }
    }

    #[test]
    fn collection_keeps_only_returned_categories() {
        let wire = HashMap::from([
            ("notes".to_owned(), vec![payload(1, "a")]),
            ("video".to_owned(), vec![payload(2, "b")]),
        ]);

        let collection = collection_from_wire(wire);

        assert_eq!(collection.len(), 2);
        assert!(collection.contains_key(&ResourceKind::Notes));
        assert!(collection.contains_key(&ResourceKind::Videos));
        assert!(!collection.contains_key(&ResourceKind::Questions));
    }

    #[test]
    fn collection_orders_categories_by_tab_order() {
        let wire = HashMap::from([
            ("past_paper".to_owned(), vec![payload(1, "p")]),
            ("notes".to_owned(), vec![payload(2, "n")]),
        ]);

        let collection = collection_from_wire(wire);
        let kinds: Vec<ResourceKind> = collection.keys().copied().collect();

        assert_eq!(kinds, [ResourceKind::Notes, ResourceKind::PastPapers]);
    }

    #[test]
    fn unknown_categories_are_dropped() {
        let wire = HashMap::from([("homework".to_owned(), vec![payload(1, "h")])]);
        assert!(collection_from_wire(wire).is_empty());
    }

    #[test]
    fn subject_defaults_fill_missing_fields() {
        let subject: Subject = SubjectPayload {
            id: 9,
            code: "bio".into(),
            name: "Biology".into(),
            description: None,
            icon: None,
            color: None,
            resource_count: None,
        }
        .into();

        assert_eq!(subject.description, "");
        assert_eq!(subject.icon, "book");
        assert_eq!(subject.color, "#6272a4");
    }
}
