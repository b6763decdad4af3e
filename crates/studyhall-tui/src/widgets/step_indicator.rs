//! Wizard step indicator — the "1 ─ 2 ─ 3 ─ 4" progress row.

use ratatui::style::Modifier;
use ratatui::text::{Line, Span};

use studyhall_core::wizard::StepState;

use crate::theme::Theme;

/// Render the step row from the wizard's indicator states. Completed
/// steps show a check, the active step is highlighted, upcoming steps
/// are dimmed.
pub fn render_steps<'a>(theme: &Theme, states: &[StepState], labels: &[&'a str]) -> Line<'a> {
    let mut spans = Vec::with_capacity(states.len() * 3);

    for (i, state) in states.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" ─ ", theme.key_hint()));
        }

        let label = labels.get(i).copied().unwrap_or("");
        match state {
            StepState::Completed => {
                spans.push(Span::styled(format!("✓ {label}"), theme.text()));
            }
            StepState::Active => {
                spans.push(Span::styled(
                    format!("{} {label}", i + 1),
                    theme.tab_active().add_modifier(Modifier::UNDERLINED),
                ));
            }
            StepState::Upcoming => {
                spans.push(Span::styled(format!("{} {label}", i + 1), theme.key_hint()));
            }
        }
    }

    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;
    use studyhall_core::{TestWizard, ThemePreference};

    #[test]
    fn completed_steps_show_a_check() {
        let theme = Theme::new(ThemePreference::Dark);
        let mut wizard = TestWizard::new();
        wizard.next();
        wizard.next(); // step 3

        let line = render_steps(
            &theme,
            &wizard.indicators(),
            &["Subject", "Paper", "Format", "Review"],
        );
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();

        assert_eq!(text, "✓ Subject ─ ✓ Paper ─ 3 Format ─ 4 Review");
    }
}
