//! Notification overlay, drawn in the top-right corner.

use folio_core::{NotificationKind, ToastQueue};
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::styles::ColorTheme;

const TOAST_WIDTH: u16 = 44;

/// Render the visible notifications, newest at the bottom of the stack.
pub fn render_toasts(frame: &mut Frame, toasts: &ToastQueue, theme: &ColorTheme) {
    let area = frame.area();
    let width = TOAST_WIDTH.min(area.width);

    for (i, toast) in toasts.visible().iter().enumerate() {
        let y = area.y + 1 + u16::try_from(i).unwrap_or(u16::MAX) * 3;
        if y + 3 > area.height {
            break;
        }
        let rect = Rect {
            x: area.x + area.width.saturating_sub(width + 1),
            y,
            width,
            height: 3,
        };
        frame.render_widget(Clear, rect);

        let prefix = match toast.kind {
            NotificationKind::Success => "✔ ",
            NotificationKind::Error => "✖ ",
            NotificationKind::Info => "ℹ ",
        };
        let line = Line::from(vec![
            Span::styled(prefix, theme.toast_style(toast.kind)),
            Span::styled(toast.message.clone(), theme.text_style()),
        ]);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme.toast_style(toast.kind));
        frame.render_widget(Paragraph::new(vec![line]).block(block), rect);
    }
}
