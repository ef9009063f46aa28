//! Results view widget
//!
//! Renders one analysis result. Contact and custom-question sections are
//! omitted entirely when they have nothing to show. The scroll state records
//! the wrapped content height so scrolling stops at the last row.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, StatefulWidget, Widget},
};

use siteintel_app::ScrollState;
use siteintel_core::AnalysisResult;

use crate::theme::styles;

use super::wrap::wrap_text;

pub struct ResultsView<'a> {
    result: &'a AnalysisResult,
}

impl<'a> ResultsView<'a> {
    pub fn new(result: &'a AnalysisResult) -> Self {
        Self { result }
    }

    /// All rows of the view, wrapped to `width`
    fn lines(&self, width: u16) -> Vec<Line<'static>> {
        let info = &self.result.company_info;
        let mut lines = vec![
            Line::from(Span::styled(
                format!("Analysis for {}", self.result.hostname()),
                styles::accent_bold(),
            )),
            Line::from(Span::styled(
                format!("Analyzed at {}", self.result.analysis_timestamp),
                styles::text_muted(),
            )),
        ];

        section(&mut lines, "Company Overview");
        field(&mut lines, "Industry", &info.industry, width);
        field(&mut lines, "Company size", &info.company_size, width);
        field(&mut lines, "Location", &info.location, width);
        field(&mut lines, "Target audience", &info.target_audience, width);

        section(&mut lines, "Products & Services");
        if info.core_products_services.is_empty() {
            lines.push(Line::from(Span::styled("None listed", styles::text_muted())));
        }
        for product in &info.core_products_services {
            paragraph(&mut lines, &format!("• {}", product), width);
        }

        section(&mut lines, "Unique Selling Proposition");
        paragraph(&mut lines, &info.unique_selling_proposition, width);

        let contact = &info.contact_info;
        if !contact.is_empty() {
            section(&mut lines, "Contact Information");
            for (name, value) in contact.entries() {
                field(&mut lines, name, value, width);
            }
        }

        if !self.result.extracted_answers.is_empty() {
            section(&mut lines, "Custom Questions");
            for (i, answer) in self.result.extracted_answers.iter().enumerate() {
                if i > 0 {
                    lines.push(Line::default());
                }
                for row in wrap_text(&format!("Q: {}", answer.question), width) {
                    lines.push(Line::from(Span::styled(row, styles::label())));
                }
                paragraph(&mut lines, &format!("A: {}", answer.answer), width);
            }
        }

        lines
    }
}

fn section(lines: &mut Vec<Line<'static>>, title: &str) {
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(title.to_string(), styles::heading())));
}

fn field(lines: &mut Vec<Line<'static>>, name: &str, value: &str, width: u16) {
    let label = format!("{}: ", name);
    let indent = label.chars().count() as u16;
    let rows = wrap_text(value, width.saturating_sub(indent));

    for (i, row) in rows.into_iter().enumerate() {
        let lead = if i == 0 {
            Span::styled(label.clone(), styles::label())
        } else {
            Span::raw(" ".repeat(indent as usize))
        };
        lines.push(Line::from(vec![lead, Span::styled(row, styles::text_primary())]));
    }
}

fn paragraph(lines: &mut Vec<Line<'static>>, text: &str, width: u16) {
    lines.extend(
        wrap_text(text, width)
            .into_iter()
            .map(|row| Line::from(Span::styled(row, styles::text_primary()))),
    );
}

impl StatefulWidget for ResultsView<'_> {
    type State = ScrollState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut ScrollState) {
        let block = styles::glass_block(true).title(Span::styled(
            " Company Profile ",
            styles::accent_bold(),
        ));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let lines = self.lines(inner.width);
        state.set_bounds(lines.len(), inner.height as usize);
        Paragraph::new(lines)
            .scroll((state.offset, 0))
            .render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use siteintel_client::test_utils::{
        test_result, test_result_with_answers, test_result_without_contact,
    };

    fn render_tall(result: &AnalysisResult) -> TestTerminal {
        let mut term = TestTerminal::with_size(80, 60);
        let area = term.area();
        term.render_stateful_widget(ResultsView::new(result), area, &mut ScrollState::new());
        term
    }

    #[test]
    fn test_renders_heading_and_overview() {
        let term = render_tall(&test_result("https://acme.io"));

        assert!(term.buffer_contains("Analysis for acme.io"));
        assert!(term.buffer_contains("Industry: Software Development"));
        assert!(term.buffer_contains("Location: San Francisco, CA, USA"));
        assert!(term.buffer_contains("• Cloud CRM"));
        assert!(term.buffer_contains("Unique Selling Proposition"));
    }

    #[test]
    fn test_contact_lines_only_when_present() {
        let term = render_tall(&test_result("https://acme.io"));
        assert!(term.buffer_contains("Contact Information"));
        assert!(term.buffer_contains("Email: info@example.com"));
        assert!(term.buffer_contains("LinkedIn:"));
        assert!(!term.buffer_contains("Facebook:"));

        let term = render_tall(&test_result_without_contact("https://acme.io"));
        assert!(!term.buffer_contains("Contact Information"));
    }

    #[test]
    fn test_blank_contact_strings_are_not_rendered() {
        let mut result = test_result_without_contact("https://acme.io");
        result.company_info.contact_info.email = Some(String::new());
        result.company_info.contact_info.social_media.twitter = Some("  ".into());

        let term = render_tall(&result);
        assert!(!term.buffer_contains("Contact Information"));
        assert!(!term.buffer_contains("Email:"));

        result.company_info.contact_info.phone = Some("+1-555-0100".into());
        let term = render_tall(&result);
        assert!(term.buffer_contains("Phone: +1-555-0100"));
        assert!(!term.buffer_contains("Email:"));
        assert!(!term.buffer_contains("Twitter:"));
    }

    #[test]
    fn test_custom_questions_only_when_answered() {
        let term = render_tall(&test_result("https://acme.io"));
        assert!(!term.buffer_contains("Custom Questions"));

        let result =
            test_result_with_answers("https://acme.io", &[("What is your pricing?", "Usage based.")]);
        let term = render_tall(&result);
        assert!(term.buffer_contains("Custom Questions"));
        assert!(term.buffer_contains("Q: What is your pricing?"));
        assert!(term.buffer_contains("A: Usage based."));
    }

    #[test]
    fn test_scroll_moves_heading_out_of_view() {
        let result = test_result("https://acme.io");
        let mut term = TestTerminal::with_size(80, 12);
        let area = term.area();
        let mut scroll = ScrollState::new();
        scroll.scroll_away(4);

        term.render_stateful_widget(ResultsView::new(&result), area, &mut scroll);

        assert!(!term.buffer_contains("Analysis for acme.io"));
        assert_eq!(scroll.offset, 4);
    }

    #[test]
    fn test_scroll_is_clamped_to_content() {
        let result = test_result("https://acme.io");
        let mut term = TestTerminal::with_size(80, 12);
        let area = term.area();
        let mut scroll = ScrollState::new();
        scroll.scroll_away(u16::MAX);

        term.render_stateful_widget(ResultsView::new(&result), area, &mut scroll);

        // Last rows of the profile remain visible instead of a blank panel
        assert!(term.buffer_contains("Twitter:"));
        let max = scroll.max_offset().unwrap();
        assert_eq!(scroll.offset, max);
        assert_eq!(scroll.visible_lines, 10);

        // One step back is visible on the next frame
        let last_frame = term.content();
        scroll.scroll_back(1);
        term.render_stateful_widget(ResultsView::new(&result), area, &mut scroll);
        assert_eq!(scroll.offset, max - 1);
        assert_ne!(term.content(), last_frame);
    }
}
