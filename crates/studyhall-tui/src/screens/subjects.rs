//! Subjects — the catalog grid, one card per subject.

use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, List, ListItem, ListState, Paragraph};

use studyhall_core::view::{SubjectCard, subject_cards};

use crate::action::Action;
use crate::component::{Component, ViewContext};

pub struct SubjectsScreen {
    focused: bool,
    selected: usize,
}

impl SubjectsScreen {
    pub fn new() -> Self {
        Self {
            focused: false,
            selected: 0,
        }
    }

    fn clamp(&mut self, len: usize) {
        if len == 0 {
            self.selected = 0;
        } else if self.selected >= len {
            self.selected = len - 1;
        }
    }
}

impl Component for SubjectsScreen {
    fn handle_key_event(
        &mut self,
        key: KeyEvent,
        ctx: &ViewContext<'_>,
    ) -> Result<Option<Action>> {
        let cards = subject_cards(&ctx.state.subjects);
        self.clamp(cards.len());

        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                if self.selected + 1 < cards.len() {
                    self.selected += 1;
                }
                Ok(None)
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.selected = self.selected.saturating_sub(1);
                Ok(None)
            }
            KeyCode::Char('g') => {
                self.selected = 0;
                Ok(None)
            }
            KeyCode::Char('G') => {
                self.selected = cards.len().saturating_sub(1);
                Ok(None)
            }
            KeyCode::Enter => Ok(cards
                .get(self.selected)
                .map(|card| Action::OpenSubject(card.code.clone()))),
            _ => Ok(None),
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &ViewContext<'_>) {
        let theme = ctx.theme;
        let cards = subject_cards(&ctx.state.subjects);
        self.clamp(cards.len());

        let block = Block::default()
            .title(" Subjects ")
            .title_style(theme.title_style())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(if self.focused {
                theme.border_focused()
            } else {
                theme.border_default()
            });

        if cards.is_empty() {
            let inner = block.inner(area);
            frame.render_widget(block, area);
            frame.render_widget(
                Paragraph::new(Line::from(Span::styled(
                    "  Loading subjects…",
                    theme.key_hint(),
                ))),
                inner,
            );
            return;
        }

        let items: Vec<ListItem> = cards.iter().map(|card| card_item(card, ctx)).collect();

        let list = List::new(items)
            .block(block)
            .highlight_style(theme.selected())
            .highlight_symbol("▸ ");

        let mut list_state = ListState::default();
        list_state.select(Some(self.selected));
        frame.render_stateful_widget(list, area, &mut list_state);
    }

    fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    fn id(&self) -> &'static str {
        "subjects"
    }
}

fn card_item<'a>(card: &'a SubjectCard, ctx: &ViewContext<'_>) -> ListItem<'a> {
    let theme = ctx.theme;
    let count = card
        .resource_count
        .map(|n| format!("{n} resources"))
        .unwrap_or_default();

    ListItem::new(vec![
        Line::from(vec![
            Span::styled(card.title.clone(), theme.text()),
            Span::styled(format!("  {count}"), theme.key_hint()),
        ]),
        Line::from(Span::styled(
            format!("  {}", card.description),
            theme.key_hint(),
        )),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use studyhall_core::AppState;
    use studyhall_core::model::subject::builtin_subjects;
    use studyhall_core::ThemePreference;

    use crate::theme::Theme;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn enter_opens_the_selected_subject() {
        let mut state = AppState::new();
        state.subjects = builtin_subjects();
        let theme = Theme::new(ThemePreference::Dark);
        let ctx = ViewContext {
            state: &state,
            theme: &theme,
        };

        let mut screen = SubjectsScreen::new();
        screen.handle_key_event(press(KeyCode::Char('j')), &ctx).expect("key");
        let action = screen.handle_key_event(press(KeyCode::Enter), &ctx).expect("key");

        match action {
            Some(Action::OpenSubject(code)) => assert_eq!(code, "computer"),
            other => panic!("expected OpenSubject, got {other:?}"),
        }
    }

    #[test]
    fn selection_clamps_to_catalog_size() {
        let mut state = AppState::new();
        state.subjects = builtin_subjects();
        let theme = Theme::new(ThemePreference::Dark);
        let ctx = ViewContext {
            state: &state,
            theme: &theme,
        };

        let mut screen = SubjectsScreen::new();
        screen.handle_key_event(press(KeyCode::Char('G')), &ctx).expect("key");

        // Catalog shrinks (e.g. wholesale replacement); cursor clamps.
        state.subjects.truncate(2);
        let ctx = ViewContext {
            state: &state,
            theme: &theme,
        };
        let action = screen.handle_key_event(press(KeyCode::Enter), &ctx).expect("key");

        match action {
            Some(Action::OpenSubject(code)) => assert_eq!(code, "computer"),
            other => panic!("expected OpenSubject, got {other:?}"),
        }
    }
}
