//! Custom widget components

mod analyzer_form;
mod conversation_view;
mod header;
mod results_view;
mod status_bar;
mod wrap;

pub use analyzer_form::AnalyzerForm;
pub use conversation_view::ConversationView;
pub use header::MainHeader;
pub use results_view::ResultsView;
pub use status_bar::StatusBar;
