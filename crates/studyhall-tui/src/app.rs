//! Application core — event loop, view management, action dispatch.
//!
//! Input priority: Ctrl+C always quits; the login prompt captures
//! everything while visible; then the active screen gets the key; then
//! the global bindings. All state mutation happens here on the loop
//! task — background network tasks only send `Action::Core` outcomes
//! back through the channel, and `studyhall_core::update::apply` folds
//! them in.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};

use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use studyhall_api::PlatformClient;
use studyhall_core::model::{QuestionType, ThemePreference};
use studyhall_core::{
    AppState, Notice, NoticeBoard, Router, StateEvent, catalog, session,
    update::{self, Effect},
    wizard,
};

use crate::action::Action;
use crate::component::{Component, ViewContext};
use crate::event::{Event, EventReader};
use crate::screens::create_screens;
use crate::theme::Theme;
use crate::tui::Tui;

/// How long the startup splash stays up. Fixed timer, not tied to the
/// initial fetches.
const SPLASH_DURATION: Duration = Duration::from_secs(1);

/// Top-level application state and event loop.
pub struct App {
    /// The injectable state container shared with core handlers.
    state: AppState,
    router: Router,
    notices: NoticeBoard,
    theme: Theme,
    /// All screen components, keyed by view identifier.
    screens: HashMap<&'static str, Box<dyn Component>>,
    /// Whether the app should keep running.
    running: bool,
    /// Action sender — components and tasks dispatch through this.
    action_tx: mpsc::UnboundedSender<Action>,
    /// Action receiver — main loop drains this.
    action_rx: mpsc::UnboundedReceiver<Action>,
    client: Arc<PlatformClient>,
    downloads_dir: PathBuf,
    /// Where the theme preference persists; `None` disables persistence.
    prefs_path: Option<PathBuf>,
    auth_modal: crate::widgets::auth_modal::AuthModal,
    /// Startup splash visibility; dropped on a fixed timer.
    loading: bool,
    started_at: Instant,
    throbber: throbber_widgets_tui::ThrobberState,
}

impl App {
    pub fn new(
        client: Arc<PlatformClient>,
        theme: ThemePreference,
        downloads_dir: PathBuf,
        prefs_path: Option<PathBuf>,
    ) -> Self {
        let (action_tx, action_rx) = mpsc::unbounded_channel();
        let screens: HashMap<&'static str, Box<dyn Component>> =
            create_screens().into_iter().collect();

        Self {
            state: AppState::new(),
            router: Router::new(),
            notices: NoticeBoard::new(),
            theme: Theme::new(theme),
            screens,
            running: true,
            action_tx,
            action_rx,
            client,
            downloads_dir,
            prefs_path,
            auth_modal: crate::widgets::auth_modal::AuthModal::new(),
            loading: true,
            started_at: Instant::now(),
            throbber: throbber_widgets_tui::ThrobberState::default(),
        }
    }

    /// Run the main event loop. This is the heart of the TUI.
    pub async fn run(&mut self) -> Result<()> {
        let mut tui = Tui::new()?;
        tui.enter()?;

        for screen in self.screens.values_mut() {
            screen.init(self.action_tx.clone())?;
        }

        // Initial load: probe the session and fetch the catalog. The
        // two are independent; neither blocks the other.
        self.spawn_auth_check();
        self.spawn_subjects_reload();

        let mut events = EventReader::new(
            Duration::from_millis(250), // 4 Hz tick
            Duration::from_millis(33),  // ~30 FPS render
        );

        info!("TUI event loop started");

        while self.running {
            let Some(event) = events.next().await else {
                break;
            };

            match event {
                Event::Key(key) => {
                    if let Some(action) = self.handle_key_event(key)? {
                        self.action_tx.send(action)?;
                    }
                }
                Event::Resize(w, h) => {
                    self.action_tx.send(Action::Resize(w, h))?;
                }
                Event::Tick => {
                    self.action_tx.send(Action::Tick)?;
                }
                Event::Render => {
                    self.action_tx.send(Action::Render)?;
                }
            }

            // Drain and process all queued actions
            while let Ok(action) = self.action_rx.try_recv() {
                self.process_action(&action)?;

                if let Action::Render = action {
                    tui.draw(|frame| self.render(frame))?;
                }
            }
        }

        events.stop();
        info!("TUI event loop ended");
        Ok(())
    }

    /// Map a key event to an action. The login prompt captures all
    /// input while visible; screen-specific keys beat global ones.
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if key.modifiers == KeyModifiers::CONTROL && key.code == KeyCode::Char('c') {
            return Ok(Some(Action::Quit));
        }

        if self.state.auth_prompt {
            return Ok(self.auth_modal.handle_key_event(key));
        }

        // Active screen first
        let route_view = self.router.resolve();
        if let Some(view) = route_view.active_view {
            if let Some(screen) = self.screens.get_mut(view) {
                let ctx = ViewContext {
                    state: &self.state,
                    theme: &self.theme,
                };
                if let Some(action) = screen.handle_key_event(key, &ctx)? {
                    return Ok(Some(action));
                }
            }
        }

        // Global bindings
        match key.code {
            KeyCode::Char('q') => Ok(Some(Action::Quit)),
            KeyCode::Esc => Ok(Some(Action::GoBack)),
            KeyCode::Char('t') => Ok(Some(Action::ToggleTheme)),
            KeyCode::Char('L') => Ok(Some(Action::LogoutRequest)),
            KeyCode::Char(c @ '1'..='3') => {
                let idx = (c as usize) - ('1' as usize);
                Ok(route_view
                    .nav
                    .get(idx)
                    .map(|item| Action::Navigate(item.route.to_owned())))
            }
            _ => Ok(None),
        }
    }

    /// Process a single action — update state and propagate to screens.
    fn process_action(&mut self, action: &Action) -> Result<()> {
        match action {
            Action::Quit => {
                self.running = false;
            }

            // The next Render redraws against the new size.
            Action::Resize(_, _) | Action::Render => {}

            Action::Tick => {
                self.notices.prune(Instant::now());
                self.throbber.calc_next();
                // The splash hides on a fixed timer, fetches or not.
                if self.loading && self.started_at.elapsed() >= SPLASH_DURATION {
                    self.loading = false;
                }
            }

            // ── Navigation ────────────────────────────────────────
            Action::Navigate(route) => {
                debug!(%route, "navigate");
                self.router.navigate(route.clone());
            }

            Action::GoBack => {
                self.router.back();
            }

            Action::OpenSubject(code) => {
                self.router.navigate("subject-detail");
                self.spawn_detail_load(code.clone());
            }

            Action::SwitchTab(kind) => {
                // Visibility toggle only — never a fetch.
                self.state.active_tab = *kind;
            }

            // ── Session intents ───────────────────────────────────
            Action::LoginSubmit { username, password } => {
                self.spawn_login(username.clone(), password.clone());
            }

            Action::SignupRequest => {
                self.spawn_signup();
            }

            Action::LogoutRequest => {
                self.spawn_logout();
            }

            // ── Data intents ──────────────────────────────────────
            Action::ReloadSubjects => {
                self.spawn_subjects_reload();
            }

            Action::DownloadResource(id) => {
                self.spawn_download(*id);
            }

            // ── Wizard ────────────────────────────────────────────
            Action::WizardNext => self.state.wizard.next(),
            Action::WizardBack => self.state.wizard.back(),
            Action::WizardSubmit => {
                self.spawn_test_submit();
            }
            Action::WizardSetSubject { id, name } => {
                self.state.wizard.draft.subject_id = Some(*id);
                self.state.wizard.draft.subject_name = Some(name.clone());
            }
            Action::WizardSetPaper(n) => {
                self.state.wizard.draft.paper = Some(*n);
            }
            Action::WizardSetDifficulty(difficulty) => {
                self.state.wizard.draft.difficulty = *difficulty;
            }
            Action::WizardSetMarks(marks) => {
                self.state.wizard.draft.total_marks = *marks;
            }
            Action::WizardToggleQuestionType(qtype) => {
                toggle_question_type(&mut self.state, *qtype);
            }

            // ── Appearance ────────────────────────────────────────
            Action::ToggleTheme => {
                self.theme.toggle();
                self.persist_theme();
            }

            // ── Completed operations ──────────────────────────────
            Action::Core(event) => {
                if matches!(
                    event,
                    StateEvent::LoginFinished(studyhall_core::LoginOutcome::Success(_))
                ) {
                    self.auth_modal.clear();
                }

                let effect = update::apply(
                    &mut self.state,
                    &mut self.router,
                    &mut self.notices,
                    Instant::now(),
                    event.clone(),
                );

                if let Some(Effect::ReloadSubjects) = effect {
                    self.action_tx.send(Action::ReloadSubjects)?;
                }
            }
        }

        // Screens may react to anything that was just processed
        // (e.g. the wizard screen resets after a submission).
        for screen in self.screens.values_mut() {
            if let Some(follow_up) = screen.update(action)? {
                self.action_tx.send(follow_up)?;
            }
        }

        Ok(())
    }

    fn persist_theme(&self) {
        let Some(path) = &self.prefs_path else {
            return;
        };
        let prefs = studyhall_config::Preferences {
            theme: self.theme.preference,
        };
        if let Err(e) = studyhall_config::save_prefs_to(path, &prefs) {
            warn!(error = %e, "failed to persist theme preference");
        }
    }

    // ── Background task spawns ────────────────────────────────────
    //
    // Each spawn captures the client, runs one operation, and reports
    // its outcome as an `Action::Core`. Fetches that can race carry a
    // generation sequence so late responses are discarded in `apply`.

    fn spawn_auth_check(&self) {
        let client = Arc::clone(&self.client);
        let tx = self.action_tx.clone();
        tokio::spawn(async move {
            let outcome = session::check_auth(&client).await;
            let _ = tx.send(Action::Core(StateEvent::AuthChecked(outcome)));
        });
    }

    fn spawn_login(&self, username: String, password: secrecy::SecretString) {
        let client = Arc::clone(&self.client);
        let tx = self.action_tx.clone();
        tokio::spawn(async move {
            let outcome = session::login(&client, &username, &password).await;
            let _ = tx.send(Action::Core(StateEvent::LoginFinished(outcome)));
        });
    }

    fn spawn_signup(&self) {
        let client = Arc::clone(&self.client);
        let tx = self.action_tx.clone();
        tokio::spawn(async move {
            let outcome = session::signup(&client).await;
            let _ = tx.send(Action::Core(StateEvent::SignupFinished(outcome)));
        });
    }

    fn spawn_logout(&self) {
        let client = Arc::clone(&self.client);
        let tx = self.action_tx.clone();
        tokio::spawn(async move {
            // Best-effort; the session clears regardless of the answer.
            session::logout(&client).await;
            let _ = tx.send(Action::Core(StateEvent::LogoutFinished));
        });
    }

    fn spawn_subjects_reload(&mut self) {
        let seq = self.state.subjects_gen.begin();
        let client = Arc::clone(&self.client);
        let tx = self.action_tx.clone();
        tokio::spawn(async move {
            let outcome = catalog::load_subjects(&client).await;
            let _ = tx.send(Action::Core(StateEvent::SubjectsLoaded { seq, outcome }));
        });
    }

    fn spawn_detail_load(&mut self, code: String) {
        let seq = self.state.detail_gen.begin();
        let client = Arc::clone(&self.client);
        let tx = self.action_tx.clone();
        tokio::spawn(async move {
            let outcome = catalog::load_detail(&client, &code).await;
            let _ = tx.send(Action::Core(StateEvent::DetailLoaded { seq, outcome }));
        });
    }

    fn spawn_test_submit(&self) {
        let client = Arc::clone(&self.client);
        let tx = self.action_tx.clone();
        let draft = self.state.wizard.draft.clone();
        tokio::spawn(async move {
            let outcome = wizard::submit(&client, &draft).await;
            let _ = tx.send(Action::Core(StateEvent::TestSubmitted(outcome)));
        });
    }

    fn spawn_download(&self, id: i64) {
        let client = Arc::clone(&self.client);
        let tx = self.action_tx.clone();
        let dir = self.downloads_dir.clone();
        tokio::spawn(async move {
            let outcome = match catalog::download(&client, id).await {
                catalog::DownloadOutcome::Fetched(bytes) => {
                    let path = dir.join(format!("resource-{id}.pdf"));
                    match tokio::fs::write(&path, &bytes).await {
                        Ok(()) => {
                            info!(path = %path.display(), "resource saved");
                            catalog::DownloadOutcome::Fetched(bytes)
                        }
                        Err(e) => {
                            warn!(error = %e, "failed to write downloaded resource");
                            catalog::DownloadOutcome::Failed
                        }
                    }
                }
                other => other,
            };
            let _ = tx.send(Action::Core(StateEvent::DownloadFinished { id, outcome }));
        });
    }

    // ── Rendering ─────────────────────────────────────────────────

    /// Render the full application frame.
    fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();
        let palette = self.theme.palette();
        frame.render_widget(Block::default().style(Style::default().bg(palette.bg)), area);

        let route_view = self.router.resolve();

        // Focus follows the resolved view (and drops while the login
        // prompt is up).
        for (id, screen) in &mut self.screens {
            let focused = !self.state.auth_prompt && route_view.active_view == Some(*id);
            screen.set_focused(focused);
        }

        // Layout: [header] [content] [nav bar] [status bar]
        let layout = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);

        self.render_header(frame, layout[0], &route_view.page_title);

        if let Some(view) = route_view.active_view {
            if let Some(screen) = self.screens.get_mut(view) {
                let ctx = ViewContext {
                    state: &self.state,
                    theme: &self.theme,
                };
                screen.render(frame, layout[1], &ctx);
            }
        }
        // An unknown route leaves the content area empty — degraded,
        // not an error.

        self.render_nav_bar(frame, layout[2], &route_view);
        self.render_status_bar(frame, layout[3]);

        // Overlays (last = topmost)
        self.render_notices(frame, area);

        if self.state.auth_prompt && !self.loading {
            self.auth_modal.render(frame, area, &self.theme);
        }

        if self.loading {
            self.render_splash(frame, area);
        }
    }

    fn render_header(&self, frame: &mut Frame, area: Rect, page_title: &str) {
        let user = self
            .state
            .session
            .as_ref()
            .map_or_else(|| "not signed in".to_owned(), |u| u.display_name().to_owned());

        let title_span = Span::styled(format!(" {page_title}"), self.theme.title_style());
        let user_span = Span::styled(format!("{user} "), self.theme.key_hint());

        let pad = (area.width as usize)
            .saturating_sub(page_title.len() + 1)
            .saturating_sub(user.len() + 1);

        let line = Line::from(vec![
            title_span,
            Span::raw(" ".repeat(pad)),
            user_span,
        ]);
        frame.render_widget(Paragraph::new(line), area);
    }

    fn render_nav_bar(&self, frame: &mut Frame, area: Rect, route_view: &studyhall_core::RouteView) {
        let mut spans = Vec::with_capacity(route_view.nav.len() * 2);
        for (i, item) in route_view.nav.iter().enumerate() {
            let style = if item.active {
                self.theme.tab_active()
            } else {
                self.theme.tab_inactive()
            };
            spans.push(Span::styled(format!(" {} {} ", i + 1, item.label), style));
        }
        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }

    fn render_status_bar(&self, frame: &mut Frame, area: Rect) {
        let theme = &self.theme;
        let session_indicator = if self.state.session.is_some() {
            Span::styled("● signed in", Style::default().fg(theme.palette().success))
        } else {
            Span::styled("○ signed out", theme.key_hint())
        };

        let hints = Span::styled(
            " │ t theme  Esc back  L sign out  q quit",
            theme.key_hint(),
        );

        frame.render_widget(
            Paragraph::new(Line::from(vec![Span::raw(" "), session_indicator, hints])),
            area,
        );
    }

    /// Render the notice stack in the bottom-right corner, newest at
    /// the bottom, each with its own box.
    fn render_notices(&self, frame: &mut Frame, area: Rect) {
        let theme = &self.theme;
        let notices: Vec<&Notice> = self.notices.active().collect();

        let mut bottom = area.height.saturating_sub(3); // above status bar
        for notice in notices.iter().rev() {
            if bottom < 3 {
                break;
            }
            let msg_len = u16::try_from(notice.message.len()).unwrap_or(u16::MAX);
            let width = (msg_len + 8).clamp(24, 60).min(area.width);
            let toast_area = Rect::new(
                area.x + area.width.saturating_sub(width + 1),
                area.y + bottom.saturating_sub(3),
                width,
                3,
            );

            let color = match notice.kind {
                studyhall_core::NoticeKind::Success => theme.palette().success,
                studyhall_core::NoticeKind::Error => theme.palette().error,
                studyhall_core::NoticeKind::Info => theme.palette().info,
            };

            frame.render_widget(Clear, toast_area);
            frame.render_widget(
                Block::default().style(Style::default().bg(theme.palette().panel_bg)),
                toast_area,
            );
            let block = Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(color));
            let inner = block.inner(toast_area);
            frame.render_widget(block, toast_area);
            frame.render_widget(
                Paragraph::new(Line::from(vec![
                    Span::styled(
                        format!(" {} ", notice.kind.icon()),
                        Style::default().fg(color),
                    ),
                    Span::styled(notice.message.clone(), theme.text()),
                ])),
                inner,
            );

            bottom = bottom.saturating_sub(3);
        }
    }

    fn render_splash(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(Clear, area);
        frame.render_widget(
            Block::default().style(Style::default().bg(self.theme.palette().bg)),
            area,
        );

        let width = 30u16.min(area.width);
        let x = (area.width.saturating_sub(width)) / 2;
        let y = area.height / 2;
        let splash_area = Rect::new(area.x + x, area.y + y, width, 1);

        let throbber = throbber_widgets_tui::Throbber::default()
            .label("Loading Studyhall…")
            .style(self.theme.title_style());
        frame.render_stateful_widget(throbber, splash_area, &mut self.throbber);
    }
}

/// Toggle a question type in the wizard draft's set.
fn toggle_question_type(state: &mut AppState, qtype: QuestionType) {
    let set = &mut state.wizard.draft.question_types;
    if !set.remove(&qtype) {
        set.insert(qtype);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use studyhall_core::model::User;
    use studyhall_core::{LoginOutcome, SubjectsOutcome};

    fn test_app() -> App {
        let base = url::Url::parse("http://127.0.0.1:1/api").expect("static url");
        let client = Arc::new(PlatformClient::with_client(reqwest_client(), base));
        App::new(
            client,
            ThemePreference::Light,
            std::env::temp_dir(),
            None,
        )
    }

    fn reqwest_client() -> reqwest::Client {
        reqwest::Client::new()
    }

    fn demo_user() -> User {
        User {
            id: 1,
            username: "a".into(),
            full_name: None,
            email: None,
        }
    }

    #[tokio::test]
    async fn login_success_navigates_and_queues_subjects_reload() {
        let mut app = test_app();

        app.process_action(&Action::Core(StateEvent::LoginFinished(
            LoginOutcome::Success(demo_user()),
        )))
        .expect("process");

        assert_eq!(app.router.current(), "dashboard");
        assert!(app.state.session.is_some());

        match app.action_rx.try_recv() {
            Ok(Action::ReloadSubjects) => {}
            other => panic!("expected queued ReloadSubjects, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn tab_switch_only_toggles_visibility() {
        let mut app = test_app();

        app.process_action(&Action::SwitchTab(
            studyhall_core::ResourceKind::Videos,
        ))
        .expect("process");

        assert_eq!(app.state.active_tab, studyhall_core::ResourceKind::Videos);
        // No fetch was started: nothing else landed on the channel.
        assert!(app.action_rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn theme_toggle_flips_preference() {
        let mut app = test_app();
        app.process_action(&Action::ToggleTheme).expect("process");
        assert_eq!(app.theme.preference, ThemePreference::Dark);
    }

    #[tokio::test]
    async fn stale_subjects_are_not_applied() {
        let mut app = test_app();
        let stale = app.state.subjects_gen.begin();
        let fresh = app.state.subjects_gen.begin();

        app.process_action(&Action::Core(StateEvent::SubjectsLoaded {
            seq: fresh,
            outcome: SubjectsOutcome::Unavailable,
        }))
        .expect("process");
        let count_after_fresh = app.state.subjects.len();

        app.process_action(&Action::Core(StateEvent::SubjectsLoaded {
            seq: stale,
            outcome: SubjectsOutcome::Loaded(Vec::new()),
        }))
        .expect("process");

        assert_eq!(app.state.subjects.len(), count_after_fresh);
    }
}
