// ── Test generation wizard ──
//
// A 4-step linear state machine. Transitions are only next/back; no
// skipping. Forward navigation is NOT gated on validation -- the server
// validates the submitted draft and the rejection comes back as a
// notice. The draft is discarded after submission, success or failure.

use studyhall_api::PlatformClient;
use tracing::warn;

use crate::model::TestDraft;

/// Number of wizard steps.
pub const STEP_COUNT: u8 = 4;

/// Display state of one step indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepState {
    /// Every index below the current step.
    Completed,
    /// The current step.
    Active,
    /// Every index above the current step.
    Upcoming,
}

/// Result of submitting the accumulated draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The test was generated server-side. Its content is not surfaced
    /// in this client; only the notice is.
    Generated { test_id: Option<i64> },
    Rejected(String),
    NetworkError,
}

/// Wizard state: current step plus the draft being accumulated.
#[derive(Debug, Clone, Default)]
pub struct TestWizard {
    step: u8,
    pub draft: TestDraft,
}

impl TestWizard {
    pub fn new() -> Self {
        Self {
            step: 1,
            draft: TestDraft::default(),
        }
    }

    /// Current step, 1-based.
    pub fn step(&self) -> u8 {
        self.step.max(1)
    }

    /// Advance one step; clamped at the last step.
    pub fn next(&mut self) {
        self.step = (self.step() + 1).min(STEP_COUNT);
    }

    /// Go back one step; clamped at the first step.
    pub fn back(&mut self) {
        self.step = self.step().saturating_sub(1).max(1);
    }

    pub fn on_last_step(&self) -> bool {
        self.step() == STEP_COUNT
    }

    /// Indicator states for steps 1..=4, in order.
    pub fn indicators(&self) -> [StepState; STEP_COUNT as usize] {
        let mut states = [StepState::Upcoming; STEP_COUNT as usize];
        for (idx, state) in states.iter_mut().enumerate() {
            let step = u8::try_from(idx + 1).unwrap_or(u8::MAX);
            *state = if step == self.step() {
                StepState::Active
            } else if step < self.step() {
                StepState::Completed
            } else {
                StepState::Upcoming
            };
        }
        states
    }

    /// Discard the draft and return to step 1. Called after every
    /// submission regardless of outcome.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

/// Submit a draft. An incomplete draft (no subject chosen) is rejected
/// locally with the same message shape the server would use.
pub async fn submit(client: &PlatformClient, draft: &TestDraft) -> SubmitOutcome {
    let Some(request) = draft.to_request() else {
        return SubmitOutcome::Rejected("Select a subject first".into());
    };

    match client.generate_test(&request).await {
        Ok(resp) if resp.success => SubmitOutcome::Generated {
            test_id: resp.test_id,
        },
        Ok(resp) => SubmitOutcome::Rejected(
            resp.error
                .unwrap_or_else(|| "Failed to generate test".into()),
        ),
        Err(e) if e.is_network() => {
            warn!(error = %e, "test generation request failed");
            SubmitOutcome::NetworkError
        }
        Err(e) => {
            warn!(error = %e, "test generation rejected");
            SubmitOutcome::Rejected("Failed to generate test".into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_step_one() {
        assert_eq!(TestWizard::new().step(), 1);
    }

    #[test]
    fn next_three_back_two_lands_on_step_two() {
        let mut wizard = TestWizard::new();
        wizard.next();
        wizard.next();
        wizard.next();
        wizard.back();
        wizard.back();
        assert_eq!(wizard.step(), 2);
    }

    #[test]
    fn steps_clamp_at_both_ends() {
        let mut wizard = TestWizard::new();
        wizard.back();
        assert_eq!(wizard.step(), 1);

        for _ in 0..10 {
            wizard.next();
        }
        assert_eq!(wizard.step(), STEP_COUNT);
        assert!(wizard.on_last_step());
    }

    #[test]
    fn indicators_mark_completed_active_upcoming() {
        let mut wizard = TestWizard::new();
        wizard.next();
        wizard.next(); // now on step 3

        assert_eq!(
            wizard.indicators(),
            [
                StepState::Completed,
                StepState::Completed,
                StepState::Active,
                StepState::Upcoming
            ]
        );
    }

    #[test]
    fn reset_discards_draft_and_position() {
        let mut wizard = TestWizard::new();
        wizard.draft.subject_id = Some(3);
        wizard.next();

        wizard.reset();
        assert_eq!(wizard.step(), 1);
        assert_eq!(wizard.draft, TestDraft::default());
    }

    #[tokio::test]
    async fn incomplete_draft_is_rejected_locally() {
        let base = url::Url::parse("http://127.0.0.1:1/api").expect("static url");
        let client = PlatformClient::with_client(reqwest::Client::new(), base);

        let outcome = submit(&client, &TestDraft::default()).await;
        assert_eq!(outcome, SubmitOutcome::Rejected("Select a subject first".into()));
    }
}
