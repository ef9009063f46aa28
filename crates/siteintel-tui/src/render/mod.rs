//! Main render/view function (View in TEA pattern)

use ratatui::{style::Style, widgets::Block, Frame};

use siteintel_app::{AppState, Screen};

use crate::theme::palette;
use crate::{layout, widgets};


/// Render the complete UI (View function in TEA)
///
/// Only the scroll states are written: they record the rendered content size.
pub fn view(frame: &mut Frame, state: &mut AppState) {
    let area = frame.area();
    frame.render_widget(
        Block::new().style(Style::default().bg(palette::DEEPEST_BG)),
        area,
    );

    let areas = layout::create(area);

    frame.render_widget(widgets::MainHeader::from_state(state), areas.header);

    let show_timestamps = state.settings.ui.show_timestamps;
    match &mut state.screen {
        Screen::Analyzer(form) => {
            frame.render_widget(widgets::AnalyzerForm::new(form), areas.body);
        }
        Screen::Results(result) => {
            frame.render_stateful_widget(
                widgets::ResultsView::new(result),
                areas.body,
                &mut state.results_scroll,
            );
        }
        Screen::Conversation(session) => {
            let conversation = widgets::ConversationView::new().show_timestamps(show_timestamps);
            frame.render_stateful_widget(conversation, areas.body, session);
        }
    }

    frame.render_widget(widgets::StatusBar::new(state), areas.status);
}
