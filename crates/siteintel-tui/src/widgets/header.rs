//! Header bar widget
//!
//! Shows the app title, the current screen and which backend answers requests.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use siteintel_app::{ApiMode, AppState, Screen};
use siteintel_core::display_host;

use crate::theme::{palette, styles};

use super::wrap::truncate;

/// Main header showing app title, current screen and backend
pub struct MainHeader<'a> {
    screen: &'a Screen,
    mode: ApiMode,
    backend_label: &'a str,
}

impl<'a> MainHeader<'a> {
    pub fn new(screen: &'a Screen, mode: ApiMode, backend_label: &'a str) -> Self {
        Self {
            screen,
            mode,
            backend_label,
        }
    }

    pub fn from_state(state: &'a AppState) -> Self {
        Self::new(&state.screen, state.api_mode, &state.backend_label)
    }

    fn screen_title(&self) -> String {
        match self.screen {
            Screen::Analyzer(_) => "Analyze a website".to_string(),
            Screen::Results(result) => format!("Results · {}", display_host(&result.url)),
            Screen::Conversation(session) => {
                format!("Conversation · {}", display_host(&session.result.url))
            }
        }
    }
}

impl Widget for MainHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        // Left: title + screen
        let left = Line::from(vec![
            Span::raw(" "),
            Span::styled("SiteIntel", styles::accent_bold()),
            Span::raw(" "),
            Span::styled("/", Style::default().fg(palette::TEXT_MUTED)),
            Span::raw(" "),
            Span::styled(self.screen_title(), styles::text_secondary()),
        ]);
        let left_width = left.width() as u16;

        // Right: backend pill, target truncated to what is left
        let (icon, label, style) = styles::mode_indicator(self.mode);
        let room = inner.width.saturating_sub(left_width + 12) as usize;
        let target = truncate(self.backend_label, room);
        let right = Line::from(vec![
            Span::styled(format!("{} {}", icon, label), style),
            Span::raw(" "),
            Span::styled(target, styles::text_muted()),
            Span::raw(" "),
        ]);
        let right_width = (right.width() as u16).min(inner.width);

        Paragraph::new(left).render(inner, buf);

        if left_width + right_width < inner.width {
            let right_area = Rect {
                x: inner.x + inner.width - right_width,
                y: inner.y,
                width: right_width,
                height: 1,
            };
            Paragraph::new(right).render(right_area, buf);
        }
    }
}
