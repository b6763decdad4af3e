//! All possible UI actions. Actions are the sole mechanism for state
//! mutation: key handlers and background tasks emit them, the app loop
//! drains and processes them in order.

use secrecy::SecretString;

use studyhall_core::StateEvent;
use studyhall_core::model::{Difficulty, QuestionType, ResourceKind};

/// Every state transition in the TUI is expressed as an Action.
#[derive(Debug, Clone)]
pub enum Action {
    // ── Lifecycle ──────────────────────────────────────────────────
    Quit,
    Tick,
    Render,
    Resize(u16, u16),

    // ── Navigation ────────────────────────────────────────────────
    /// Set the route token and re-resolve the visible view.
    Navigate(String),
    GoBack,
    /// Open a subject's detail view and start its fetch.
    OpenSubject(String),
    /// Show another resource category; a pure visibility toggle.
    SwitchTab(ResourceKind),

    // ── Session intents ───────────────────────────────────────────
    LoginSubmit {
        username: String,
        password: SecretString,
    },
    SignupRequest,
    LogoutRequest,

    // ── Data intents ──────────────────────────────────────────────
    ReloadSubjects,
    DownloadResource(i64),

    // ── Test maker wizard ─────────────────────────────────────────
    WizardNext,
    WizardBack,
    WizardSubmit,
    WizardSetSubject { id: i64, name: String },
    WizardSetPaper(u8),
    WizardSetDifficulty(Difficulty),
    WizardSetMarks(u32),
    WizardToggleQuestionType(QuestionType),

    // ── Appearance ────────────────────────────────────────────────
    ToggleTheme,

    // ── Completed operations ──────────────────────────────────────
    /// Outcome of a finished network task, folded in by `update::apply`.
    Core(StateEvent),
}
