//! Status bar widget
//!
//! One row: request status on the left, key hints for the current screen on
//! the right.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use siteintel_app::{AppState, FormStatus, Screen};

use crate::theme::styles;

/// Status bar widget showing request state and key hints
pub struct StatusBar<'a> {
    state: &'a AppState,
}

impl<'a> StatusBar<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn status_indicator(&self) -> Span<'static> {
        match &self.state.screen {
            Screen::Analyzer(form) => match &form.status {
                FormStatus::Editing => Span::styled("● Ready", styles::status_green()),
                FormStatus::Submitting => Span::styled("⟳ Analyzing", styles::status_yellow()),
                FormStatus::Failed(_) => Span::styled("✗ Analysis failed", styles::status_red()),
            },
            Screen::Results(result) => Span::styled(
                format!("✓ {} custom answer(s)", result.extracted_answers.len()),
                styles::status_green(),
            ),
            Screen::Conversation(session) if session.chat.is_awaiting_reply() => {
                Span::styled("⟳ Waiting for reply", styles::status_yellow())
            }
            Screen::Conversation(session) => Span::styled(
                format!("● {} turn(s)", session.chat.turns.len()),
                styles::status_green(),
            ),
        }
    }

    fn hints(&self) -> &'static [(&'static str, &'static str)] {
        match &self.state.screen {
            Screen::Analyzer(_) => &[
                ("Enter", "analyze"),
                ("Tab", "next field"),
                ("^N", "add question"),
                ("^D", "remove"),
                ("Esc", "quit"),
            ],
            Screen::Results(_) => &[
                ("c", "chat"),
                ("n", "new analysis"),
                ("j/k", "scroll"),
                ("q", "quit"),
            ],
            Screen::Conversation(_) => &[
                ("Enter", "send"),
                ("↑/↓", "scroll"),
                ("Esc", "back"),
                ("^N", "new analysis"),
            ],
        }
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        let status = Line::from(vec![Span::raw(" "), self.status_indicator()]);
        let status_width = status.width() as u16;

        let mut spans = Vec::new();
        for (i, (key, action)) in self.hints().iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" · ", styles::text_muted()));
            }
            spans.push(Span::styled(*key, styles::keybinding()));
            spans.push(Span::styled(format!(" {}", action), styles::text_muted()));
        }
        spans.push(Span::raw(" "));
        let hints = Line::from(spans);
        let hints_width = hints.width() as u16;

        Paragraph::new(status).render(area, buf);

        // Hints are dropped rather than overlapping the status
        if status_width + hints_width < area.width {
            let hints_area = Rect {
                x: area.x + area.width - hints_width,
                width: hints_width,
                ..area
            };
            Paragraph::new(hints).render(hints_area, buf);
        }
    }
}
