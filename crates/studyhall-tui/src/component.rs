//! Component trait — the building block for every screen.

use color_eyre::eyre::Result;
use crossterm::event::KeyEvent;
use ratatui::{Frame, layout::Rect};
use tokio::sync::mpsc::UnboundedSender;

use studyhall_core::AppState;

use crate::action::Action;
use crate::theme::Theme;

/// Read-only context handed to components on every key event and
/// render: the shared state container plus the active theme. Screens
/// hold only their own cursor/scroll state and derive everything else
/// from here.
pub struct ViewContext<'a> {
    pub state: &'a AppState,
    pub theme: &'a Theme,
}

/// Every screen implements Component.
///
/// Lifecycle: `init` → (`handle_key_event` | `update` | `render`)*
pub trait Component {
    /// Called once when the component is mounted.
    /// Receives the action sender for dispatching actions to the app loop.
    fn init(&mut self, _action_tx: UnboundedSender<Action>) -> Result<()> {
        Ok(())
    }

    /// Handle a keyboard event. Return an Action to dispatch, or None.
    fn handle_key_event(&mut self, _key: KeyEvent, _ctx: &ViewContext<'_>) -> Result<Option<Action>> {
        Ok(None)
    }

    /// Process a dispatched action. May return a follow-up action.
    fn update(&mut self, _action: &Action) -> Result<Option<Action>> {
        Ok(None)
    }

    /// Render into the provided frame area.
    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &ViewContext<'_>);

    /// Set focus state.
    fn set_focused(&mut self, _focused: bool) {}

    /// The view identifier this component renders (a route token).
    fn id(&self) -> &'static str;
}
