//! Canonical domain types shared by every Studyhall front end.

pub mod draft;
pub mod resource;
pub mod subject;
pub mod theme;
pub mod user;

pub use draft::{Difficulty, QuestionType, TestDraft};
pub use resource::{Resource, ResourceCollection, ResourceKind};
pub use subject::Subject;
pub use theme::ThemePreference;
pub use user::User;
