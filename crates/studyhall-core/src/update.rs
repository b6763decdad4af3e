// ── State synchronization ──
//
// `apply` folds the outcome of a completed operation into the state
// container, the router, and the notice board. It runs only on the
// event-loop task; spawned network tasks never touch state directly.
// Stale fetch responses are discarded here by generation token.

use std::time::Instant;

use chrono::Utc;
use tracing::debug;

use crate::catalog::{DetailOutcome, DownloadOutcome, SubjectsOutcome};
use crate::model::ResourceKind;
use crate::model::subject::builtin_subjects;
use crate::notify::{Notice, NoticeBoard};
use crate::router::Router;
use crate::session::{AuthCheck, LoginOutcome, SignupOutcome};
use crate::state::AppState;
use crate::wizard::SubmitOutcome;

const NETWORK_ERROR_MSG: &str = "Network error. Please try again.";

/// The outcome of a completed operation, ready to be folded into state.
#[derive(Debug, Clone)]
pub enum StateEvent {
    AuthChecked(AuthCheck),
    LoginFinished(LoginOutcome),
    LogoutFinished,
    SignupFinished(SignupOutcome),
    SubjectsLoaded { seq: u64, outcome: SubjectsOutcome },
    DetailLoaded { seq: u64, outcome: DetailOutcome },
    TestSubmitted(SubmitOutcome),
    DownloadFinished { id: i64, outcome: DownloadOutcome },
}

/// A follow-up operation the event loop must start. Fetches are spawned
/// by the loop, not here, so `apply` stays synchronous and testable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    ReloadSubjects,
}

/// Fold one event into the state. Returns a follow-up effect when the
/// event sequences another operation (login success → subjects reload).
pub fn apply(
    state: &mut AppState,
    router: &mut Router,
    notices: &mut NoticeBoard,
    now: Instant,
    event: StateEvent,
) -> Option<Effect> {
    match event {
        StateEvent::AuthChecked(AuthCheck::Authenticated(user)) => {
            state.session = Some(user);
            state.auth_prompt = false;
            None
        }
        StateEvent::AuthChecked(AuthCheck::Unauthenticated) => {
            state.session = None;
            state.auth_prompt = true;
            None
        }

        StateEvent::LoginFinished(LoginOutcome::Success(user)) => {
            state.session = Some(user);
            state.auth_prompt = false;
            notices.push(Notice::success("Login successful!"), now);
            router.navigate("dashboard");
            Some(Effect::ReloadSubjects)
        }
        StateEvent::LoginFinished(LoginOutcome::Rejected(message)) => {
            notices.push(Notice::error(message), now);
            None
        }
        StateEvent::LoginFinished(LoginOutcome::NetworkError) => {
            notices.push(Notice::error(NETWORK_ERROR_MSG), now);
            None
        }

        StateEvent::LogoutFinished => {
            state.session = None;
            state.auth_prompt = true;
            notices.push(Notice::success("Logged out successfully"), now);
            None
        }

        StateEvent::SignupFinished(SignupOutcome::Created) => {
            notices.push(
                Notice::success("Account created! Use: student/student123"),
                now,
            );
            None
        }
        StateEvent::SignupFinished(SignupOutcome::Rejected(message)) => {
            notices.push(Notice::error(message), now);
            None
        }
        StateEvent::SignupFinished(SignupOutcome::NetworkError) => {
            notices.push(Notice::error(NETWORK_ERROR_MSG), now);
            None
        }

        StateEvent::SubjectsLoaded { seq, outcome } => {
            if !state.subjects_gen.is_current(seq) {
                debug!(seq, "discarding stale subjects response");
                return None;
            }
            match outcome {
                SubjectsOutcome::Loaded(subjects) => {
                    state.subjects = subjects;
                    state.last_synced = Some(Utc::now());
                }
                SubjectsOutcome::Unavailable => {
                    state.subjects = builtin_subjects();
                }
            }
            None
        }

        StateEvent::DetailLoaded { seq, outcome } => {
            if !state.detail_gen.is_current(seq) {
                debug!(seq, "discarding stale detail response");
                return None;
            }
            if let DetailOutcome::Loaded { subject, resources } = outcome {
                state.active_subject = Some(subject);
                state.resources = resources;
                state.active_tab = ResourceKind::Notes;
            }
            // A failed detail load leaves the previous detail in place
            // and surfaces nothing.
            None
        }

        StateEvent::TestSubmitted(outcome) => {
            match outcome {
                SubmitOutcome::Generated { test_id } => {
                    debug!(?test_id, "test generated");
                    notices.push(Notice::success("Test generated successfully!"), now);
                }
                SubmitOutcome::Rejected(message) => {
                    notices.push(Notice::error(message), now);
                }
                SubmitOutcome::NetworkError => {
                    notices.push(Notice::error(NETWORK_ERROR_MSG), now);
                }
            }
            // The draft never survives a submission.
            state.wizard.reset();
            None
        }

        StateEvent::DownloadFinished { id, outcome } => {
            match outcome {
                DownloadOutcome::Fetched(_) => {
                    debug!(id, "download fetched");
                    notices.push(Notice::success("Download started"), now);
                }
                DownloadOutcome::Failed => {
                    notices.push(Notice::error("Failed to download resource"), now);
                }
                DownloadOutcome::NetworkError => {
                    notices.push(Notice::error(NETWORK_ERROR_MSG), now);
                }
            }
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Subject, User};
    use crate::notify::NoticeKind;

    fn user(name: &str) -> User {
        User {
            id: 1,
            username: name.into(),
            full_name: None,
            email: None,
        }
    }

    fn subject(id: i64, code: &str) -> Subject {
        Subject {
            id,
            code: code.into(),
            name: code.to_uppercase(),
            description: String::new(),
            icon: "book".into(),
            color: "#000000".into(),
            resource_count: None,
        }
    }

    struct Harness {
        state: AppState,
        router: Router,
        notices: NoticeBoard,
        now: Instant,
    }

    impl Harness {
        fn new() -> Self {
            Self {
                state: AppState::new(),
                router: Router::new(),
                notices: NoticeBoard::new(),
                now: Instant::now(),
            }
        }

        fn apply(&mut self, event: StateEvent) -> Option<Effect> {
            apply(
                &mut self.state,
                &mut self.router,
                &mut self.notices,
                self.now,
                event,
            )
        }
    }

    #[test]
    fn rejected_login_leaves_session_unset_with_one_error_notice() {
        let mut h = Harness::new();

        let effect = h.apply(StateEvent::LoginFinished(LoginOutcome::Rejected(
            "bad creds".into(),
        )));

        assert!(effect.is_none());
        assert!(h.state.session.is_none());
        let notices: Vec<_> = h.notices.active().collect();
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].kind, NoticeKind::Error);
        assert!(notices[0].message.contains("bad creds"));
    }

    #[test]
    fn successful_login_sets_session_and_triggers_subjects_reload() {
        let mut h = Harness::new();

        let effect = h.apply(StateEvent::LoginFinished(LoginOutcome::Success(user("a"))));

        assert_eq!(effect, Some(Effect::ReloadSubjects));
        assert_eq!(h.state.session.as_ref().map(|u| u.username.as_str()), Some("a"));
        assert!(!h.state.auth_prompt);
        assert_eq!(h.router.current(), "dashboard");
        assert_eq!(h.notices.len(), 1);
    }

    #[test]
    fn unavailable_subjects_substitute_the_builtin_seven() {
        let mut h = Harness::new();
        let seq = h.state.subjects_gen.begin();

        h.apply(StateEvent::SubjectsLoaded {
            seq,
            outcome: SubjectsOutcome::Unavailable,
        });

        let names: Vec<&str> = h.state.subjects.iter().map(|s| s.name.as_str()).collect();
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
        // Fallback data is not a sync.
        assert!(h.state.last_synced.is_none());
    }

    #[test]
    fn stale_subjects_response_is_discarded() {
        let mut h = Harness::new();
        let stale = h.state.subjects_gen.begin();
        let fresh = h.state.subjects_gen.begin();

        h.apply(StateEvent::SubjectsLoaded {
            seq: fresh,
            outcome: SubjectsOutcome::Loaded(vec![subject(1, "maths")]),
        });
        // The earlier-issued request resolves late; it must not clobber.
        h.apply(StateEvent::SubjectsLoaded {
            seq: stale,
            outcome: SubjectsOutcome::Loaded(vec![subject(2, "physics")]),
        });

        assert_eq!(h.state.subjects.len(), 1);
        assert_eq!(h.state.subjects[0].code, "maths");
    }

    #[test]
    fn stale_detail_response_is_discarded() {
        let mut h = Harness::new();
        let stale = h.state.detail_gen.begin();
        let fresh = h.state.detail_gen.begin();

        h.apply(StateEvent::DetailLoaded {
            seq: fresh,
            outcome: DetailOutcome::Loaded {
                subject: subject(1, "maths"),
                resources: crate::model::ResourceCollection::default(),
            },
        });
        h.apply(StateEvent::DetailLoaded {
            seq: stale,
            outcome: DetailOutcome::Loaded {
                subject: subject(2, "physics"),
                resources: crate::model::ResourceCollection::default(),
            },
        });

        assert_eq!(
            h.state.active_subject.as_ref().map(|s| s.code.as_str()),
            Some("maths")
        );
    }

    #[test]
    fn logout_clears_session_unconditionally() {
        let mut h = Harness::new();
        h.state.session = Some(user("a"));

        h.apply(StateEvent::LogoutFinished);

        assert!(h.state.session.is_none());
        assert!(h.state.auth_prompt);
        assert_eq!(
            h.notices.active().next().map(|n| n.kind),
            Some(NoticeKind::Success)
        );
    }

    #[test]
    fn submission_discards_the_draft_in_both_outcomes() {
        let mut h = Harness::new();
        h.state.wizard.draft.subject_id = Some(3);
        h.apply(StateEvent::TestSubmitted(SubmitOutcome::Generated {
            test_id: Some(9),
        }));
        assert!(h.state.wizard.draft.subject_id.is_none());

        h.state.wizard.draft.subject_id = Some(3);
        h.apply(StateEvent::TestSubmitted(SubmitOutcome::Rejected(
            "nope".into(),
        )));
        assert!(h.state.wizard.draft.subject_id.is_none());
    }

    #[test]
    fn detail_load_resets_the_active_tab() {
        let mut h = Harness::new();
        h.state.active_tab = ResourceKind::PastPapers;
        let seq = h.state.detail_gen.begin();

        h.apply(StateEvent::DetailLoaded {
            seq,
            outcome: DetailOutcome::Loaded {
                subject: subject(1, "maths"),
                resources: crate::model::ResourceCollection::default(),
            },
        });

        assert_eq!(h.state.active_tab, ResourceKind::Notes);
    }

    #[test]
    fn network_login_failure_emits_generic_notice() {
        let mut h = Harness::new();
        h.apply(StateEvent::LoginFinished(LoginOutcome::NetworkError));

        let notices: Vec<_> = h.notices.active().collect();
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].message, "Network error. Please try again.");
    }
}
