//! Dashboard — landing view with a greeting and catalog summary.

use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Wrap};

use crate::action::Action;
use crate::component::{Component, ViewContext};

pub struct DashboardScreen {
    focused: bool,
}

impl DashboardScreen {
    pub fn new() -> Self {
        Self { focused: false }
    }
}

impl Component for DashboardScreen {
    fn handle_key_event(
        &mut self,
        key: KeyEvent,
        _ctx: &ViewContext<'_>,
    ) -> Result<Option<Action>> {
        match key.code {
            KeyCode::Char('s') | KeyCode::Enter => {
                Ok(Some(Action::Navigate("subjects".into())))
            }
            KeyCode::Char('g') => Ok(Some(Action::Navigate("test-maker".into()))),
            _ => Ok(None),
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &ViewContext<'_>) {
        let theme = ctx.theme;
        let state = ctx.state;

        let block = Block::default()
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
            Constraint::Length(3), // greeting
            Constraint::Min(1),    // summary
        ])
        .split(inner);

        let greeting = match &state.session {
            Some(user) => format!("Welcome back, {}!", user.display_name()),
            None => "Welcome to Studyhall".to_owned(),
        };
        frame.render_widget(
            Paragraph::new(vec![
                Line::from(""),
                Line::from(Span::styled(format!("  {greeting}"), theme.title_style())),
            ]),
            layout[0],
        );

        let total_resources: i64 = state
            .subjects
            .iter()
            .filter_map(|s| s.resource_count)
            .sum();

        let synced = match state.last_synced {
            Some(at) => format!("last synced {}", at.format("%H:%M:%S")),
            None => "showing built-in catalog".to_owned(),
        };

        let mut lines = vec![
            Line::from(""),
            Line::from(vec![
                Span::styled(format!("  {} ", state.subjects.len()), theme.text()),
                Span::styled("subjects", theme.key_hint()),
                Span::styled(format!("   {total_resources} "), theme.text()),
                Span::styled("resources", theme.key_hint()),
                Span::styled(format!("   ({synced})"), theme.key_hint()),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::styled("  s ", theme.key_hint_key()),
                Span::styled("browse subjects    ", theme.key_hint()),
                Span::styled("g ", theme.key_hint_key()),
                Span::styled("generate a test", theme.key_hint()),
            ]),
        ];

        if state.session.is_none() {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                "  Sign in to generate tests and track downloads.",
                theme.key_hint(),
            )));
        }

        frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), layout[1]);
    }

    fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    fn id(&self) -> &'static str {
        "dashboard"
    }
}
