//! Conversation view widget
//!
//! Transcript of question/answer turns above a single-line input box. The
//! transcript is anchored to the bottom: a scroll offset of 0 shows the
//! newest turn and larger offsets reveal older ones. Rendering records the
//! wrapped transcript height in the session's scroll state.

use chrono::Local;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Paragraph, StatefulWidget, Widget},
};

use siteintel_app::ConversationSession;
use siteintel_core::{ConversationTurn, TurnStatus};

use crate::theme::styles;

use super::wrap::{tail, wrap_text};

const INPUT_HEIGHT: u16 = 3;
const INDENT: &str = "  ";

pub struct ConversationView {
    show_timestamps: bool,
}

impl Default for ConversationView {
    fn default() -> Self {
        Self::new()
    }
}

impl ConversationView {
    pub fn new() -> Self {
        Self {
            show_timestamps: true,
        }
    }

    pub fn show_timestamps(mut self, show: bool) -> Self {
        self.show_timestamps = show;
        self
    }

    fn transcript_lines(&self, session: &ConversationSession, width: u16) -> Vec<Line<'static>> {
        let turns = &session.chat.turns;
        if turns.is_empty() {
            let host = session.result.hostname();
            return vec![
                Line::from(Span::styled(
                    format!("Ask anything about {}.", host),
                    styles::text_secondary(),
                )),
                Line::from(Span::styled(
                    "Answers draw on the analyzed company profile.",
                    styles::text_muted(),
                )),
            ];
        }

        let body_width = width.saturating_sub(INDENT.len() as u16);
        let mut lines = Vec::new();
        for (i, turn) in turns.iter().enumerate() {
            if i > 0 {
                lines.push(Line::default());
            }
            lines.push(self.speaker_line("You", turn, styles::accent_bold()));
            push_indented(&mut lines, &turn.user_query, body_width, styles::text_primary());

            match &turn.status {
                TurnStatus::Pending => {
                    lines.push(Line::from(Span::styled("Agent", styles::label())));
                    lines.push(Line::from(vec![
                        Span::raw(INDENT),
                        Span::styled(
                            "Thinking...",
                            styles::status_yellow().add_modifier(Modifier::ITALIC),
                        ),
                    ]));
                }
                TurnStatus::Answered { response } => {
                    lines.push(self.speaker_line("Agent", turn, styles::label()));
                    push_indented(&mut lines, response, body_width, styles::text_primary());
                }
                TurnStatus::Failed { response, .. } => {
                    lines.push(self.speaker_line("Agent", turn, styles::status_red()));
                    push_indented(&mut lines, response, body_width, styles::status_red());
                }
            }
        }
        lines
    }

    fn speaker_line(
        &self,
        name: &'static str,
        turn: &ConversationTurn,
        style: ratatui::style::Style,
    ) -> Line<'static> {
        let mut spans = vec![Span::styled(name, style)];
        if self.show_timestamps {
            let time = turn.timestamp.with_timezone(&Local).format("%H:%M");
            spans.push(Span::styled(format!("  {}", time), styles::text_muted()));
        }
        Line::from(spans)
    }

    fn input_line(&self, input: &str, width: u16) -> Line<'static> {
        let prompt = Span::styled("> ", styles::accent());
        if input.is_empty() {
            return Line::from(vec![
                prompt,
                Span::styled("_", styles::accent()),
                Span::styled(" Type a question and press Enter", styles::text_muted()),
            ]);
        }

        let room = width.saturating_sub(3) as usize;
        Line::from(vec![
            prompt,
            Span::styled(tail(input, room), styles::text_primary()),
            Span::styled("_", styles::accent()),
        ])
    }
}

fn push_indented(
    lines: &mut Vec<Line<'static>>,
    text: &str,
    width: u16,
    style: ratatui::style::Style,
) {
    lines.extend(
        wrap_text(text, width)
            .into_iter()
            .map(|row| Line::from(vec![Span::raw(INDENT), Span::styled(row, style)])),
    );
}

impl StatefulWidget for ConversationView {
    type State = ConversationSession;

    fn render(self, area: Rect, buf: &mut Buffer, session: &mut ConversationSession) {
        let [transcript_area, input_area] =
            Layout::vertical([Constraint::Min(3), Constraint::Length(INPUT_HEIGHT)]).areas(area);

        let block = styles::glass_block(false).title(Span::styled(
            format!(" Conversation · {} ", session.result.hostname()),
            styles::accent_bold(),
        ));
        let inner = block.inner(transcript_area);
        block.render(transcript_area, buf);

        if inner.height > 0 && inner.width > 0 {
            let lines = self.transcript_lines(session, inner.width);
            let scroll = &mut session.chat.scroll;
            scroll.set_bounds(lines.len(), inner.height as usize);
            let top = scroll.max_offset().unwrap_or(0).saturating_sub(scroll.offset);
            Paragraph::new(lines)
                .scroll((top, 0))
                .render(inner, buf);
        }

        let title = if session.chat.is_awaiting_reply() {
            Span::styled(" Waiting for reply ", styles::status_yellow())
        } else {
            Span::styled(" Ask a question ", styles::text_secondary())
        };
        let block = styles::glass_block(true).title(title);
        let inner = block.inner(input_area);
        block.render(input_area, buf);

        if inner.height > 0 && inner.width > 0 {
            Paragraph::new(self.input_line(&session.chat.input, inner.width)).render(inner, buf);
        }
    }
}
