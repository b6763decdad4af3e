// ── Subject domain type ──

use serde::{Deserialize, Serialize};

/// One subject in the catalog. Immutable once fetched; the whole
/// collection is replaced on every reload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    pub id: i64,
    /// Unique slug used in routes and detail-endpoint paths.
    pub code: String,
    pub name: String,
    pub description: String,
    /// Icon identifier from the platform's icon set.
    pub icon: String,
    /// Accent color as `#rrggbb`.
    pub color: String,
    pub resource_count: Option<i64>,
}

impl Subject {
    /// The route parameter for this subject's detail view.
    pub fn route_code(&self) -> String {
        self.code.to_lowercase()
    }
}

/// The built-in catalog used whenever the subjects endpoint is
/// unreachable, so the UI is never empty. Order is fixed.
pub fn builtin_subjects() -> Vec<Subject> {
    let seed = [
        (1, "maths", "Mathematics", "Comprehensive mathematics curriculum", "calculator", "#ff6b6b"),
        (2, "computer", "Computer Science", "Programming and algorithms", "laptop-code", "#4ecdc4"),
        (3, "chemistry", "Chemistry", "Elements and compounds", "flask", "#45b7d1"),
        (4, "physics", "Physics", "Laws of the universe", "atom", "#ffa726"),
        (5, "english", "English", "Language and literature", "book-open", "#ba68c8"),
        (6, "islamiat", "Islamiat", "Islamic studies", "mosque", "#66bb6a"),
        (7, "pst", "Pakistan Studies", "History and geography", "globe-asia", "#78909c"),
    ];

    seed.into_iter()
        .map(|(id, code, name, description, icon, color)| Subject {
            id,
            code: code.to_owned(),
            name: name.to_owned(),
            description: description.to_owned(),
            icon: icon.to_owned(),
            color: color.to_owned(),
            resource_count: None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_has_seven_subjects_in_fixed_order() {
        let subjects = builtin_subjects();
        let names: Vec<&str> = subjects.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(
            names,
            [
                "Mathematics",
                "Computer Science",
                "Chemistry",
                "Physics",
                "English",
                "Islamiat",
                "Pakistan Studies"
            ]
        );
    }

    #[test]
    fn route_code_lowercases() {
        let mut subject = builtin_subjects().remove(0);
        subject.code = "MATH".into();
        assert_eq!(subject.route_code(), "math");
    }
}
