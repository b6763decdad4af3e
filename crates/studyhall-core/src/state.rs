// ── Application state container ──
//
// The single mutable state object. Owned by the front end's event loop
// and passed by reference into handlers -- never ambient, never shared
// across tasks. Spawned network tasks report back as `StateEvent`s that
// the loop folds in via `update::apply`, so every mutation happens on
// one task and torn reads cannot occur.

use chrono::{DateTime, Utc};

use crate::model::{ResourceCollection, ResourceKind, Subject, User};
use crate::wizard::TestWizard;

/// Monotonic request token for one resource kind of fetch.
///
/// In-flight requests cannot be cancelled, so responses may resolve out
/// of order. Each fetch-triggering operation calls [`begin`](Self::begin)
/// and stamps the spawned task with the returned sequence number; when
/// the response arrives, `update::apply` discards it unless the number
/// is still [`current`](Self::is_current). Issued only from the event
/// loop, so a plain counter suffices.
#[derive(Debug, Clone, Copy, Default)]
pub struct Generation {
    issued: u64,
}

impl Generation {
    /// Issue the next sequence number, invalidating all earlier ones.
    pub fn begin(&mut self) -> u64 {
        self.issued += 1;
        self.issued
    }

    /// Whether `seq` is the most recently issued number.
    pub fn is_current(&self, seq: u64) -> bool {
        self.issued == seq
    }
}

/// All client-side state mirroring server responses.
#[derive(Debug, Default)]
pub struct AppState {
    /// The authenticated user, when a session exists.
    pub session: Option<User>,
    /// Whether the login prompt is exposed.
    pub auth_prompt: bool,
    /// The subject catalog; replaced wholesale on every load.
    pub subjects: Vec<Subject>,
    /// Subject whose detail view is loaded, with its resources.
    pub active_subject: Option<Subject>,
    pub resources: ResourceCollection,
    /// Which resource category tab is visible.
    pub active_tab: ResourceKind,
    /// Test-maker wizard state.
    pub wizard: TestWizard,
    /// When the catalog last synced from the server (not set when the
    /// built-in fallback substituted).
    pub last_synced: Option<DateTime<Utc>>,
    /// Stale-response guards, one per fetch kind.
    pub subjects_gen: Generation,
    pub detail_gen: Generation,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resources currently visible under `active_tab`.
    pub fn visible_resources(&self) -> &[crate::model::Resource] {
        self.resources
            .get(&self.active_tab)
            .map_or(&[], Vec::as_slice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generation_invalidates_earlier_sequences() {
        let mut generation = Generation::default();
        let first = generation.begin();
        let second = generation.begin();

        assert!(!generation.is_current(first));
        assert!(generation.is_current(second));
    }

    #[test]
    fn visible_resources_empty_for_missing_category() {
        let state = AppState::new();
        assert!(state.visible_resources().is_empty());
    }
}
