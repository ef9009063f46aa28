//! Analyzer form widget
//!
//! URL field, the list of custom question slots, the last error and the
//! submit hint. Text fields show their tail when longer than the row.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use siteintel_app::{AnalysisFormState, FormField, FormStatus};

use crate::theme::styles;

use super::wrap::tail;

const URL_PLACEHOLDER: &str = "https://example.com";
const QUESTION_PLACEHOLDER: &str = "e.g. What is your pricing model?";

pub struct AnalyzerForm<'a> {
    form: &'a AnalysisFormState,
}

impl<'a> AnalyzerForm<'a> {
    pub fn new(form: &'a AnalysisFormState) -> Self {
        Self { form }
    }

    /// One input row: focus marker, optional number, text or placeholder, cursor
    fn field_line(
        &self,
        prefix: String,
        text: &str,
        placeholder: &str,
        focused: bool,
        width: u16,
    ) -> Line<'static> {
        let marker = if focused { "▸ " } else { "  " };
        let editable = focused && !self.form.is_submitting();
        let fixed = (marker.chars().count() + prefix.chars().count()) as u16 + u16::from(editable);
        let room = width.saturating_sub(fixed) as usize;

        let mut spans = vec![
            Span::styled(marker, styles::accent()),
            Span::styled(prefix, styles::text_muted()),
        ];

        if text.is_empty() && !focused {
            spans.push(Span::styled(placeholder.to_string(), styles::text_muted()));
        } else {
            let style = if focused {
                styles::text_primary().add_modifier(Modifier::BOLD)
            } else {
                styles::text_secondary()
            };
            spans.push(Span::styled(tail(text, room), style));
        }

        if editable {
            spans.push(Span::styled("_", styles::accent()));
        }

        Line::from(spans)
    }

    /// First question row to draw so the focused slot stays visible
    fn question_scroll(&self, visible: usize) -> usize {
        match self.form.focus {
            FormField::Question(i) if visible > 0 && i >= visible => i + 1 - visible,
            _ => 0,
        }
    }

    fn submit_line(&self) -> Line<'static> {
        match &self.form.status {
            FormStatus::Submitting => Line::from(Span::styled(
                "⟳ Analyzing website... this can take a minute",
                styles::status_yellow(),
            )),
            _ if self.form.can_submit() => Line::from(vec![
                Span::styled("[", styles::text_muted()),
                Span::styled("Enter", styles::keybinding()),
                Span::styled("] ", styles::text_muted()),
                Span::styled("Analyze website", styles::accent_bold()),
            ]),
            _ => Line::from(Span::styled(
                "Enter a website URL to start",
                styles::text_muted(),
            )),
        }
    }
}

impl Widget for AnalyzerForm<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(true).title(Span::styled(
            " Company Intelligence ",
            styles::accent_bold(),
        ));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let [intro, url_label, url_row, _, questions_label, questions, error, submit] =
            Layout::vertical([
                Constraint::Length(2),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Min(1),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .areas(inner);

        Paragraph::new(Line::from(Span::styled(
            "Enter a company website to extract structured company information.",
            styles::text_secondary(),
        )))
        .wrap(Wrap { trim: true })
        .render(intro, buf);

        Paragraph::new(Line::from(Span::styled("Website URL", styles::label())))
            .render(url_label, buf);
        Paragraph::new(self.field_line(
            String::new(),
            &self.form.url,
            URL_PLACEHOLDER,
            self.form.focus == FormField::Url,
            url_row.width,
        ))
        .render(url_row, buf);

        Paragraph::new(Line::from(vec![
            Span::styled("Custom questions ", styles::label()),
            Span::styled("(optional)", styles::text_muted()),
        ]))
        .render(questions_label, buf);

        let visible = questions.height as usize;
        let lines: Vec<Line> = self
            .form
            .questions
            .iter()
            .enumerate()
            .skip(self.question_scroll(visible))
            .take(visible)
            .map(|(i, text)| {
                self.field_line(
                    format!("{}. ", i + 1),
                    text,
                    QUESTION_PLACEHOLDER,
                    self.form.focus == FormField::Question(i),
                    questions.width,
                )
            })
            .collect();
        Paragraph::new(lines).render(questions, buf);

        if let Some(message) = self.form.error() {
            Paragraph::new(Line::from(vec![
                Span::styled("✗ ", styles::status_red().add_modifier(Modifier::BOLD)),
                Span::styled(message.to_string(), styles::status_red()),
            ]))
            .render(error, buf);
        }

        Paragraph::new(self.submit_line()).render(submit, buf);
    }
}
