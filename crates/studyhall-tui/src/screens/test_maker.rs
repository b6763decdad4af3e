//! Test maker — the four-step generation wizard.
//!
//! Step 1 picks a subject, step 2 the paper and difficulty, step 3 the
//! marks and question formats, step 4 reviews and submits. Navigation
//! is strictly next/back; nothing stops a user moving forward past an
//! incomplete step -- the server rejects an unusable draft and the
//! rejection surfaces as a notice.

use color_eyre::eyre::Result;
use crossterm::event::{Event as CrosstermEvent, KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};
use strum::IntoEnumIterator;
use tui_input::Input;
use tui_input::backend::crossterm::EventHandler;

use studyhall_core::model::{Difficulty, QuestionType};
use studyhall_core::{StateEvent, wizard::SubmitOutcome};

use crate::action::Action;
use crate::component::{Component, ViewContext};
use crate::widgets::step_indicator::render_steps;

const STEP_LABELS: [&str; 4] = ["Subject", "Paper", "Format", "Review"];
const DEFAULT_MARKS: &str = "50";

pub struct TestMakerScreen {
    focused: bool,
    subject_cursor: usize,
    difficulty_cursor: usize,
    qtype_cursor: usize,
    marks: Input,
}

impl TestMakerScreen {
    pub fn new() -> Self {
        Self {
            focused: false,
            subject_cursor: 0,
            difficulty_cursor: Difficulty::iter()
                .position(|d| d == Difficulty::default())
                .unwrap_or(0),
            qtype_cursor: 0,
            marks: Input::new(DEFAULT_MARKS.into()),
        }
    }

    fn parsed_marks(&self) -> u32 {
        self.marks.value().trim().parse().unwrap_or(0)
    }

    fn handle_step_key(&mut self, key: KeyEvent, ctx: &ViewContext<'_>) -> Option<Action> {
        match ctx.state.wizard.step() {
            1 => self.handle_subject_key(key, ctx),
            2 => Self::handle_paper_key(key, &mut self.difficulty_cursor),
            3 => self.handle_format_key(key),
            _ => match key.code {
                KeyCode::Enter => Some(Action::WizardSubmit),
                _ => None,
            },
        }
    }

    fn handle_subject_key(&mut self, key: KeyEvent, ctx: &ViewContext<'_>) -> Option<Action> {
        let subjects = &ctx.state.subjects;
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                if self.subject_cursor + 1 < subjects.len() {
                    self.subject_cursor += 1;
                }
                None
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.subject_cursor = self.subject_cursor.saturating_sub(1);
                None
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                subjects
                    .get(self.subject_cursor)
                    .map(|s| Action::WizardSetSubject {
                        id: s.id,
                        name: s.name.clone(),
                    })
            }
            _ => None,
        }
    }

    fn handle_paper_key(key: KeyEvent, difficulty_cursor: &mut usize) -> Option<Action> {
        let difficulties: Vec<Difficulty> = Difficulty::iter().collect();
        match key.code {
            KeyCode::Char('1') => Some(Action::WizardSetPaper(1)),
            KeyCode::Char('2') => Some(Action::WizardSetPaper(2)),
            KeyCode::Char('j') | KeyCode::Down => {
                if *difficulty_cursor + 1 < difficulties.len() {
                    *difficulty_cursor += 1;
                }
                Some(Action::WizardSetDifficulty(difficulties[*difficulty_cursor]))
            }
            KeyCode::Char('k') | KeyCode::Up => {
                *difficulty_cursor = difficulty_cursor.saturating_sub(1);
                Some(Action::WizardSetDifficulty(difficulties[*difficulty_cursor]))
            }
            _ => None,
        }
    }

    fn handle_format_key(&mut self, key: KeyEvent) -> Option<Action> {
        let qtypes: Vec<QuestionType> = QuestionType::iter().collect();
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                if self.qtype_cursor + 1 < qtypes.len() {
                    self.qtype_cursor += 1;
                }
                None
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.qtype_cursor = self.qtype_cursor.saturating_sub(1);
                None
            }
            KeyCode::Char(' ') => Some(Action::WizardToggleQuestionType(qtypes[self.qtype_cursor])),
            KeyCode::Char(c) if c.is_ascii_digit() => {
                self.marks.handle_event(&CrosstermEvent::Key(key));
                Some(Action::WizardSetMarks(self.parsed_marks()))
            }
            KeyCode::Backspace => {
                self.marks.handle_event(&CrosstermEvent::Key(key));
                Some(Action::WizardSetMarks(self.parsed_marks()))
            }
            _ => None,
        }
    }
}

impl Component for TestMakerScreen {
    fn handle_key_event(
        &mut self,
        key: KeyEvent,
        ctx: &ViewContext<'_>,
    ) -> Result<Option<Action>> {
        // Step navigation first; everything else is per-step.
        match key.code {
            KeyCode::Char('n') | KeyCode::Right => return Ok(Some(Action::WizardNext)),
            KeyCode::Char('b') | KeyCode::Left => return Ok(Some(Action::WizardBack)),
            _ => {}
        }
        Ok(self.handle_step_key(key, ctx))
    }

    fn update(&mut self, action: &Action) -> Result<Option<Action>> {
        // The draft is discarded after every submission; local cursors
        // and the marks field follow it back to their defaults.
        if let Action::Core(StateEvent::TestSubmitted(
            SubmitOutcome::Generated { .. } | SubmitOutcome::Rejected(_) | SubmitOutcome::NetworkError,
        )) = action
        {
            *self = Self {
                focused: self.focused,
                ..Self::new()
            };
        }
        Ok(None)
    }

    #[allow(clippy::too_many_lines)]
    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &ViewContext<'_>) {
        let theme = ctx.theme;
        let state = ctx.state;
        let wizard = &state.wizard;
        let draft = &wizard.draft;

        let block = Block::default()
            .title(" Test Maker ")
            .title_style(theme.title_style())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(if self.focused {
                theme.border_focused()
            } else {
                theme.border_default()
            });
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let layout = Layout::vertical([
            Constraint::Length(2), // step indicator
            Constraint::Min(1),    // step panel
            Constraint::Length(1), // key hints
        ])
        .split(inner);

        frame.render_widget(
            Paragraph::new(render_steps(theme, &wizard.indicators(), &STEP_LABELS)),
            layout[0],
        );

        let mut lines: Vec<Line> = vec![Line::from("")];
        match wizard.step() {
            1 => {
                lines.push(Line::from(Span::styled(
                    "  Choose a subject:",
                    theme.text(),
                )));
                if self.subject_cursor >= state.subjects.len() {
                    self.subject_cursor = state.subjects.len().saturating_sub(1);
                }
                for (i, subject) in state.subjects.iter().enumerate() {
                    let chosen = draft.subject_id == Some(subject.id);
                    let marker = if chosen { "●" } else { "○" };
                    let style = if i == self.subject_cursor {
                        theme.selected()
                    } else {
                        theme.text()
                    };
                    lines.push(Line::from(Span::styled(
                        format!("   {marker} {}", subject.name),
                        style,
                    )));
                }
            }
            2 => {
                let paper = |n: u8| {
                    if draft.paper == Some(n) { "●" } else { "○" }
                };
                lines.push(Line::from(vec![
                    Span::styled("  Paper:  ", theme.text()),
                    Span::styled(format!("{} 1   {} 2", paper(1), paper(2)), theme.text()),
                    Span::styled("   (press 1 or 2)", theme.key_hint()),
                ]));
                lines.push(Line::from(""));
                lines.push(Line::from(Span::styled("  Difficulty:", theme.text())));
                for (i, difficulty) in Difficulty::iter().enumerate() {
                    let chosen = draft.difficulty == difficulty;
                    let marker = if chosen { "●" } else { "○" };
                    let style = if i == self.difficulty_cursor {
                        theme.selected()
                    } else {
                        theme.text()
                    };
                    lines.push(Line::from(Span::styled(
                        format!("   {marker} {difficulty}"),
                        style,
                    )));
                }
            }
            3 => {
                lines.push(Line::from(vec![
                    Span::styled("  Total marks: ", theme.text()),
                    Span::styled(self.marks.value().to_owned(), theme.tab_active()),
                    Span::styled("  (type digits)", theme.key_hint()),
                ]));
                lines.push(Line::from(""));
                lines.push(Line::from(Span::styled(
                    "  Question types (Space toggles):",
                    theme.text(),
                )));
                for (i, qtype) in QuestionType::iter().enumerate() {
                    let chosen = draft.question_types.contains(&qtype);
                    let marker = if chosen { "☑" } else { "☐" };
                    let style = if i == self.qtype_cursor {
                        theme.selected()
                    } else {
                        theme.text()
                    };
                    lines.push(Line::from(Span::styled(
                        format!("   {marker} {qtype}"),
                        style,
                    )));
                }
            }
            _ => {
                let subject = draft
                    .subject_name
                    .clone()
                    .unwrap_or_else(|| "(none selected)".into());
                let paper = draft
                    .paper
                    .map_or_else(|| "any".to_owned(), |p| p.to_string());
                let qtypes = if draft.question_types.is_empty() {
                    "all".to_owned()
                } else {
                    draft
                        .question_types
                        .iter()
                        .map(ToString::to_string)
                        .collect::<Vec<_>>()
                        .join(", ")
                };

                lines.push(Line::from(Span::styled("  Review:", theme.text())));
                lines.push(Line::from(""));
                for (label, value) in [
                    ("Subject", subject),
                    ("Paper", paper),
                    ("Difficulty", draft.difficulty.to_string()),
                    ("Total marks", draft.total_marks.to_string()),
                    ("Question types", qtypes),
                ] {
                    lines.push(Line::from(vec![
                        Span::styled(format!("   {label:<15}"), theme.key_hint()),
                        Span::styled(value, theme.text()),
                    ]));
                }
                lines.push(Line::from(""));
                lines.push(Line::from(Span::styled(
                    "  Press Enter to generate the test.",
                    theme.tab_active(),
                )));
            }
        }
        frame.render_widget(Paragraph::new(lines), layout[1]);

        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled(" n ", theme.key_hint_key()),
                Span::styled("next step   ", theme.key_hint()),
                Span::styled("b ", theme.key_hint_key()),
                Span::styled("back   ", theme.key_hint()),
                Span::styled("j/k ", theme.key_hint_key()),
                Span::styled("move   ", theme.key_hint()),
                Span::styled("Enter ", theme.key_hint_key()),
                Span::styled("select / submit", theme.key_hint()),
            ])),
            layout[2],
        );
    }

    fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    fn id(&self) -> &'static str {
        "test-maker"
    }
}
