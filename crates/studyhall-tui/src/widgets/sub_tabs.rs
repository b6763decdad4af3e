//! Horizontal sub-tab bar for use within screens (the resource
//! category tabs on the subject detail view).

use ratatui::style::Modifier;
use ratatui::text::{Line, Span};

use crate::theme::Theme;

/// Renders a horizontal tab bar line with the active tab highlighted.
///
/// Each label is rendered inline; the active tab is bracketed and bold.
pub fn render_sub_tabs<'a>(theme: &Theme, labels: &[String], active_index: usize) -> Line<'a> {
    let mut spans = Vec::with_capacity(labels.len() * 2);

    for (i, label) in labels.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("  ", theme.key_hint()));
        }

        if i == active_index {
            spans.push(Span::styled(
                format!("[{label}]"),
                theme.tab_active().add_modifier(Modifier::BOLD),
            ));
        } else {
            spans.push(Span::styled(label.clone(), theme.tab_inactive()));
        }
    }

    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;
    use studyhall_core::ThemePreference;

    #[test]
    fn active_tab_is_bracketed() {
        let theme = Theme::new(ThemePreference::Dark);
        let labels = vec!["Notes".to_owned(), "Videos".to_owned()];

        let line = render_sub_tabs(&theme, &labels, 1);
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();

        assert_eq!(text, "Notes  [Videos]");
    }
}
