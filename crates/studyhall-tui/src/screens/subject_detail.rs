//! Subject detail — header, category tabs, and the resource list for
//! the visible tab.
//!
//! All four category lists are built eagerly from the state's resource
//! collection; switching tabs only changes which one is shown and
//! never refetches.

use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, List, ListItem, ListState, Paragraph};

use studyhall_core::model::ResourceKind;
use studyhall_core::view::{ResourceListView, resource_list};

use crate::action::Action;
use crate::component::{Component, ViewContext};
use crate::widgets::sub_tabs::render_sub_tabs;

pub struct SubjectDetailScreen {
    focused: bool,
    selected: usize,
}

impl SubjectDetailScreen {
    pub fn new() -> Self {
        Self {
            focused: false,
            selected: 0,
        }
    }

    fn tabs() -> Vec<ResourceKind> {
        ResourceKind::all().collect()
    }

    fn neighbor_tab(current: ResourceKind, forward: bool) -> ResourceKind {
        let tabs = Self::tabs();
        let idx = tabs.iter().position(|&k| k == current).unwrap_or(0);
        let next = if forward {
            (idx + 1) % tabs.len()
        } else {
            (idx + tabs.len() - 1) % tabs.len()
        };
        tabs[next]
    }
}

impl Component for SubjectDetailScreen {
    fn handle_key_event(
        &mut self,
        key: KeyEvent,
        ctx: &ViewContext<'_>,
    ) -> Result<Option<Action>> {
        let visible = ctx.state.visible_resources();

        match key.code {
            KeyCode::Char('l') | KeyCode::Right | KeyCode::Tab => {
                self.selected = 0;
                Ok(Some(Action::SwitchTab(Self::neighbor_tab(
                    ctx.state.active_tab,
                    true,
                ))))
            }
            KeyCode::Char('h') | KeyCode::Left | KeyCode::BackTab => {
                self.selected = 0;
                Ok(Some(Action::SwitchTab(Self::neighbor_tab(
                    ctx.state.active_tab,
                    false,
                ))))
            }
            KeyCode::Char('j') | KeyCode::Down => {
                if self.selected + 1 < visible.len() {
                    self.selected += 1;
                }
                Ok(None)
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.selected = self.selected.saturating_sub(1);
                Ok(None)
            }
            KeyCode::Char('d') | KeyCode::Enter => Ok(visible
                .get(self.selected)
                .map(|r| Action::DownloadResource(r.id))),
            _ => Ok(None),
        }
    }

    #[allow(clippy::too_many_lines)]
    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &ViewContext<'_>) {
        let theme = ctx.theme;
        let state = ctx.state;

        let border = if self.focused {
            theme.border_focused()
        } else {
            theme.border_default()
        };

        let Some(subject) = &state.active_subject else {
            let block = Block::default()
                .title(" Subject ")
                .title_style(theme.title_style())
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(border);
            let inner = block.inner(area);
            frame.render_widget(block, area);
            frame.render_widget(
                Paragraph::new(Line::from(Span::styled(
                    "  Loading subject…",
                    theme.key_hint(),
                ))),
                inner,
            );
            return;
        };

        let block = Block::default()
            .title(format!(" {} ", subject.name))
            .title_style(theme.title_style())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let layout = Layout::vertical([
            Constraint::Length(2), // description
            Constraint::Length(2), // category tabs
            Constraint::Min(1),    // resource list
        ])
        .split(inner);

        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                format!("  {}", subject.description),
                theme.key_hint(),
            ))),
            layout[0],
        );

        let tabs = Self::tabs();
        let labels: Vec<String> = tabs.iter().map(ToString::to_string).collect();
        let active_index = tabs
            .iter()
            .position(|&k| k == state.active_tab)
            .unwrap_or(0);
        frame.render_widget(
            Paragraph::new(render_sub_tabs(theme, &labels, active_index)),
            layout[1],
        );

        match resource_list(state.active_tab, &state.resources) {
            ResourceListView::Empty(empty) => {
                frame.render_widget(
                    Paragraph::new(vec![
                        Line::from(""),
                        Line::from(Span::styled(
                            format!("  {}", empty.title),
                            theme.text(),
                        )),
                        Line::from(Span::styled(format!("  {}", empty.hint), theme.key_hint())),
                    ]),
                    layout[2],
                );
            }
            ResourceListView::Cards(cards) => {
                if self.selected >= cards.len() {
                    self.selected = cards.len().saturating_sub(1);
                }

                let items: Vec<ListItem> = cards
                    .iter()
                    .map(|card| {
                        ListItem::new(vec![
                            Line::from(Span::styled(card.title.clone(), theme.text())),
                            Line::from(vec![
                                Span::styled(format!("  {}", card.description), theme.key_hint()),
                                Span::styled(
                                    format!("   {} · {}", card.size_label, card.duration_label),
                                    theme.key_hint(),
                                ),
                            ]),
                        ])
                    })
                    .collect();

                let list = List::new(items)
                    .highlight_style(theme.selected())
                    .highlight_symbol("▸ ");
                let mut list_state = ListState::default();
                list_state.select(Some(self.selected));
                frame.render_stateful_widget(list, layout[2], &mut list_state);
            }
        }
    }

    fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    fn id(&self) -> &'static str {
        "subject-detail"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use studyhall_core::model::Resource;
    use studyhall_core::{AppState, ThemePreference};

    use crate::theme::Theme;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn tab_switching_is_an_action_not_a_fetch() {
        let state = AppState::new();
        let theme = Theme::new(ThemePreference::Dark);
        let ctx = ViewContext {
            state: &state,
            theme: &theme,
        };

        let mut screen = SubjectDetailScreen::new();
        let action = screen.handle_key_event(press(KeyCode::Right), &ctx).expect("key");

        assert!(matches!(
            action,
            Some(Action::SwitchTab(ResourceKind::Videos))
        ));
    }

    #[test]
    fn tab_cycling_wraps_backwards() {
        let state = AppState::new(); // active tab: Notes
        let theme = Theme::new(ThemePreference::Dark);
        let ctx = ViewContext {
            state: &state,
            theme: &theme,
        };

        let mut screen = SubjectDetailScreen::new();
        let action = screen.handle_key_event(press(KeyCode::Left), &ctx).expect("key");

        assert!(matches!(
            action,
            Some(Action::SwitchTab(ResourceKind::PastPapers))
        ));
    }

    #[test]
    fn download_references_the_selected_resource() {
        let mut state = AppState::new();
        state.resources.insert(
            ResourceKind::Notes,
            vec![Resource {
                id: 7,
                title: "T".into(),
                description: None,
                file_size: None,
                duration_mins: None,
            }],
        );
        let theme = Theme::new(ThemePreference::Dark);
        let ctx = ViewContext {
            state: &state,
            theme: &theme,
        };

        let mut screen = SubjectDetailScreen::new();
        let action = screen.handle_key_event(press(KeyCode::Char('d')), &ctx).expect("key");

        assert!(matches!(action, Some(Action::DownloadResource(7))));
    }
}
