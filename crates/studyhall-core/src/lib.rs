//! State layer between `studyhall-api` and UI consumers.
//!
//! This crate owns everything about the client that is not presentation:
//!
//! - **[`Router`]** — single-token view routing. `navigate()` moves,
//!   `resolve()` answers which view is active, which nav item is
//!   highlighted, and what the page title reads. Unknown tokens resolve
//!   to no active view, never an error.
//!
//! - **[`AppState`]** — the one mutable state container, owned by the
//!   front end's event loop and passed by reference into handlers.
//!   Holds the session, the subject catalog, the active subject's
//!   resource collection, and the test wizard.
//!
//! - **Services** ([`session`], [`catalog`], [`wizard`]) — async
//!   operations over [`PlatformClient`](studyhall_api::PlatformClient)
//!   that catch every failure and return typed outcomes; nothing
//!   network-shaped escapes them.
//!
//! - **[`update::apply`]** — the synchronization step: folds a completed
//!   operation's outcome into `AppState`, the router, and the notice
//!   board, discarding stale responses by generation token.
//!
//! - **View-models** ([`view`]) — data structures describing what to
//!   render (subject cards, resource cards, empty states). Turning them
//!   into widgets or markup is the front end's job.

pub mod catalog;
pub mod convert;
pub mod model;
pub mod notify;
pub mod router;
pub mod session;
pub mod state;
pub mod update;
pub mod view;
pub mod wizard;

// ── Primary re-exports ──────────────────────────────────────────────
pub use catalog::{DetailOutcome, DownloadOutcome, SubjectsOutcome};
pub use notify::{Notice, NoticeBoard, NoticeKind};
pub use router::{RouteView, Router};
pub use session::{AuthCheck, LoginOutcome, SignupOutcome};
pub use state::{AppState, Generation};
pub use update::{Effect, StateEvent};
pub use wizard::{SubmitOutcome, TestWizard};

// Re-export model types at the crate root for ergonomics.
pub use model::{
    Difficulty, QuestionType, Resource, ResourceCollection, ResourceKind, Subject, TestDraft,
    ThemePreference, User,
};
