//! Footer with key hints.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::keymap::InputMode;
use crate::styles::ColorTheme;

/// Render the footer key hints for the current input mode.
pub fn render_footer(frame: &mut Frame, area: Rect, mode: InputMode, theme: &ColorTheme) {
    let hints = match mode {
        InputMode::Browse => {
            "↑/↓ scroll · 1-5 jump · ←/→ select project · Enter open · f filter · e edit form · q quit"
        }
        InputMode::Editing => "type to fill · Tab next · Enter send · Esc done",
        InputMode::Modal => "Esc/Enter close",
    };
    let line = Line::from(vec![Span::styled(hints, theme.muted_style())]);
    frame.render_widget(Paragraph::new(vec![line]), area);
}
