//! Two-valued theme with semantic styling for the TUI.
//!
//! The persisted [`ThemePreference`] picks one of two fixed palettes;
//! everything else styles itself through the semantic helpers so a
//! toggle repaints the whole UI on the next frame.

use ratatui::style::{Color, Modifier, Style};

use studyhall_core::ThemePreference;

/// The raw colors one theme resolves to.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub bg: Color,
    pub panel_bg: Color,
    pub text: Color,
    pub dim: Color,
    pub border: Color,
    pub accent: Color,
    pub highlight: Color,
    pub success: Color,
    pub error: Color,
    pub info: Color,
}

/// Dark palette (Dracula-adjacent, matching the platform's dark CSS).
pub const DARK: Palette = Palette {
    bg: Color::Rgb(30, 31, 41),         // #1e1f29
    panel_bg: Color::Rgb(40, 42, 54),   // #282a36
    text: Color::Rgb(189, 193, 207),    // #bdc1cf
    dim: Color::Rgb(98, 114, 164),      // #6272a4
    border: Color::Rgb(98, 114, 164),   // #6272a4
    accent: Color::Rgb(139, 233, 253),  // #8be9fd
    highlight: Color::Rgb(189, 147, 249), // #bd93f9
    success: Color::Rgb(80, 250, 123),  // #50fa7b
    error: Color::Rgb(255, 99, 99),     // #ff6363
    info: Color::Rgb(241, 250, 140),    // #f1fa8c
};

/// Light palette.
pub const LIGHT: Palette = Palette {
    bg: Color::Rgb(250, 250, 248),      // #fafaf8
    panel_bg: Color::Rgb(238, 238, 234), // #eeeeea
    text: Color::Rgb(40, 42, 54),       // #282a36
    dim: Color::Rgb(130, 137, 151),     // #828997
    border: Color::Rgb(160, 167, 180),  // #a0a7b4
    accent: Color::Rgb(0, 122, 204),    // #007acc
    highlight: Color::Rgb(121, 94, 185), // #795eb9
    success: Color::Rgb(34, 139, 34),   // #228b22
    error: Color::Rgb(196, 30, 58),     // #c41e3a
    info: Color::Rgb(176, 121, 0),      // #b07900
};

/// The active theme. Owned by the app; flipped by `ToggleTheme`.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub preference: ThemePreference,
}

impl Theme {
    pub fn new(preference: ThemePreference) -> Self {
        Self { preference }
    }

    pub fn toggle(&mut self) {
        self.preference = self.preference.toggled();
    }

    pub fn palette(&self) -> &'static Palette {
        match self.preference {
            ThemePreference::Light => &LIGHT,
            ThemePreference::Dark => &DARK,
        }
    }

    // ── Semantic styles ─────────────────────────────────────────────

    /// Title text for blocks/panels.
    pub fn title_style(&self) -> Style {
        Style::default()
            .fg(self.palette().accent)
            .add_modifier(Modifier::BOLD)
    }

    /// Border for a focused panel.
    pub fn border_focused(&self) -> Style {
        Style::default().fg(self.palette().highlight)
    }

    /// Border for an unfocused panel.
    pub fn border_default(&self) -> Style {
        Style::default().fg(self.palette().border)
    }

    /// Normal body text.
    pub fn text(&self) -> Style {
        Style::default().fg(self.palette().text)
    }

    /// Selected / highlighted list row.
    pub fn selected(&self) -> Style {
        Style::default()
            .fg(self.palette().highlight)
            .bg(self.palette().panel_bg)
            .add_modifier(Modifier::BOLD)
    }

    /// Active tab / nav item.
    pub fn tab_active(&self) -> Style {
        Style::default()
            .fg(self.palette().highlight)
            .add_modifier(Modifier::BOLD)
    }

    /// Inactive tab / nav item.
    pub fn tab_inactive(&self) -> Style {
        Style::default().fg(self.palette().text)
    }

    /// Key hint text (e.g., "q quit  ? help").
    pub fn key_hint(&self) -> Style {
        Style::default().fg(self.palette().dim)
    }

    /// Key hint key character.
    pub fn key_hint_key(&self) -> Style {
        Style::default()
            .fg(self.palette().accent)
            .add_modifier(Modifier::BOLD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_switches_palettes() {
        let mut theme = Theme::new(ThemePreference::Light);
        let light_bg = theme.palette().bg;
        theme.toggle();
        let dark_bg = theme.palette().bg;
        assert_ne!(format!("{light_bg:?}"), format!("{dark_bg:?}"));
        assert_eq!(theme.preference, ThemePreference::Dark);
    }
}
