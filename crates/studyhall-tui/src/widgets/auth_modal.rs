//! Login dialog — the authentication prompt shown whenever no session
//! exists. Rendered as a centered overlay on top of whichever view is
//! active; while visible it captures all input.

use crossterm::event::{Event as CrosstermEvent, KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph};
use secrecy::SecretString;
use tui_input::Input;
use tui_input::backend::crossterm::EventHandler;

use crate::action::Action;
use crate::theme::Theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Username,
    Password,
}

/// Login form state.
pub struct AuthModal {
    username: Input,
    password: Input,
    focus: Field,
}

impl AuthModal {
    pub fn new() -> Self {
        Self {
            username: Input::default(),
            password: Input::default(),
            focus: Field::Username,
        }
    }

    /// Wipe both fields (after a successful login).
    pub fn clear(&mut self) {
        self.username.reset();
        self.password.reset();
        self.focus = Field::Username;
    }

    /// Handle a key while the prompt is visible. Returns the action to
    /// dispatch, if any.
    pub fn handle_key_event(&mut self, key: KeyEvent) -> Option<Action> {
        match key.code {
            KeyCode::Tab | KeyCode::Down | KeyCode::Up => {
                self.focus = match self.focus {
                    Field::Username => Field::Password,
                    Field::Password => Field::Username,
                };
                None
            }
            KeyCode::Enter => {
                let username = self.username.value().trim().to_owned();
                if username.is_empty() {
                    self.focus = Field::Username;
                    return None;
                }
                let password = SecretString::from(self.password.value().to_owned());
                Some(Action::LoginSubmit { username, password })
            }
            // The "create demo account" shortcut, in place of a signup form.
            KeyCode::F(2) => Some(Action::SignupRequest),
            _ => {
                let field = match self.focus {
                    Field::Username => &mut self.username,
                    Field::Password => &mut self.password,
                };
                field.handle_event(&CrosstermEvent::Key(key));
                None
            }
        }
    }

    /// Render the centered dialog.
    pub fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let width = 44u16.min(area.width.saturating_sub(4));
        let height = 9u16;

        let x = (area.width.saturating_sub(width)) / 2;
        let y = (area.height.saturating_sub(height)) / 2;
        let dialog_area = Rect::new(area.x + x, area.y + y, width, height);

        frame.render_widget(Clear, dialog_area);
        frame.render_widget(
            Block::default().style(Style::default().bg(theme.palette().panel_bg)),
            dialog_area,
        );

        let block = Block::default()
            .title(" Sign in ")
            .title_style(theme.title_style())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme.border_focused());

        let inner = block.inner(dialog_area);
        frame.render_widget(block, dialog_area);

        let field_line = |label: &str, value: String, focused: bool| {
            let cursor = if focused { "█" } else { "" };
            Line::from(vec![
                Span::styled(format!("  {label:<10}"), theme.key_hint()),
                Span::styled(value, theme.text()),
                Span::styled(cursor.to_owned(), theme.tab_active()),
            ])
        };

        let masked = "•".repeat(self.password.value().chars().count());

        let lines = vec![
            Line::from(""),
            field_line(
                "Username",
                self.username.value().to_owned(),
                self.focus == Field::Username,
            ),
            Line::from(""),
            field_line("Password", masked, self.focus == Field::Password),
            Line::from(""),
            Line::from(vec![
                Span::styled("  Enter ", theme.key_hint_key()),
                Span::styled("sign in   ", theme.key_hint()),
                Span::styled("Tab ", theme.key_hint_key()),
                Span::styled("switch   ", theme.key_hint()),
                Span::styled("F2 ", theme.key_hint_key()),
                Span::styled("demo account", theme.key_hint()),
            ]),
        ];

        frame.render_widget(Paragraph::new(lines), inner);
    }
}

impl Default for AuthModal {
    fn default() -> Self {
        Self::new()
    }
}
