//! Conversation transcript state
//!
//! Turns are appended optimistically as `Pending` and later resolved in place.
//! At most one turn is pending at a time because submission is refused while
//! a reply is outstanding, so a turn's index is a stable handle for its reply.

use chrono::Utc;

use siteintel_core::{
    ConversationRequest, ConversationTurn, HistoryEntry, TurnStatus, FALLBACK_RESPONSE,
};

use crate::scroll_state::ScrollState;

/// Lines scrolled per PageUp/PageDown
pub const PAGE_SCROLL_LINES: u16 = 10;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversationState {
    pub turns: Vec<ConversationTurn>,
    pub input: String,
    /// Rows scrolled back from the newest turn; offset 0 keeps the newest visible
    pub scroll: ScrollState,
}

impl ConversationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index of the turn awaiting a reply, if any
    pub fn pending_turn(&self) -> Option<usize> {
        self.turns.iter().position(ConversationTurn::is_pending)
    }

    pub fn is_awaiting_reply(&self) -> bool {
        self.pending_turn().is_some()
    }

    /// Whether a submission would currently send a request
    pub fn can_submit(&self) -> bool {
        !self.input.trim().is_empty() && !self.is_awaiting_reply()
    }

    pub fn insert_char(&mut self, c: char) {
        self.input.push(c);
    }

    pub fn backspace(&mut self) {
        self.input.pop();
    }

    pub fn clear_input(&mut self) {
        self.input.clear();
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    /// Append the current input as a pending turn and build its request.
    ///
    /// The request history covers every turn including the new pending one,
    /// whose agent text is empty. Returns `None` without touching the
    /// transcript when the input is blank or a reply is outstanding.
    pub fn begin_turn(&mut self, url: &str) -> Option<(usize, ConversationRequest)> {
        if !self.can_submit() {
            return None;
        }

        let query = self.input.trim().to_string();
        self.input.clear();
        self.turns.push(ConversationTurn::pending(query.clone()));
        self.scroll_to_newest();

        let request = ConversationRequest {
            url: url.to_string(),
            query,
            conversation_history: self.history(),
        };
        Some((self.turns.len() - 1, request))
    }

    /// Fill the pending turn at `index` with the service's reply.
    ///
    /// Returns false if there is no pending turn at that index.
    pub fn resolve_turn(&mut self, index: usize, response: impl Into<String>) -> bool {
        self.settle(
            index,
            TurnStatus::Answered {
                response: response.into(),
            },
        )
    }

    /// Replace the pending turn at `index` with the fallback reply.
    ///
    /// The turn stays in the transcript and counts as answered.
    pub fn fail_turn(&mut self, index: usize, error: impl Into<String>) -> bool {
        self.settle(
            index,
            TurnStatus::Failed {
                response: FALLBACK_RESPONSE.to_string(),
                error: error.into(),
            },
        )
    }

    fn settle(&mut self, index: usize, status: TurnStatus) -> bool {
        match self.turns.get_mut(index) {
            Some(turn) if turn.is_pending() => {
                turn.status = status;
                turn.timestamp = Utc::now();
                self.scroll_to_newest();
                true
            }
            _ => false,
        }
    }

    /// The transcript as `{user, agent}` pairs
    pub fn history(&self) -> Vec<HistoryEntry> {
        self.turns
            .iter()
            .map(ConversationTurn::to_history_entry)
            .collect()
    }

    pub fn scroll_to_newest(&mut self) {
        self.scroll.reset();
    }

    /// Scroll back towards older turns, stopping at the oldest
    pub fn scroll_up(&mut self, lines: u16) {
        self.scroll.scroll_away(lines);
    }

    /// Scroll forward towards the newest turn
    pub fn scroll_down(&mut self, lines: u16) {
        self.scroll.scroll_back(lines);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const URL: &str = "https://acme.io";

    fn with_input(text: &str) -> ConversationState {
        let mut state = ConversationState::new();
        state.set_input(text);
        state
    }

    #[test]
    fn test_begin_turn_inserts_pending_and_includes_it_in_history() {
        let mut state = with_input("Who are your customers?");

        let (index, request) = state.begin_turn(URL).unwrap();

        assert_eq!(index, 0);
        assert!(state.input.is_empty());
        assert!(state.turns[0].is_pending());
        assert_eq!(request.url, URL);
        assert_eq!(request.query, "Who are your customers?");
        assert_eq!(
            request.conversation_history,
            vec![HistoryEntry {
                user: "Who are your customers?".into(),
                agent: String::new(),
            }]
        );
    }

    #[test]
    fn test_blank_input_is_rejected() {
        let mut state = with_input("   ");
        assert!(state.begin_turn(URL).is_none());
        assert!(state.turns.is_empty());
    }

    #[test]
    fn test_submission_refused_while_pending() {
        let mut state = with_input("first");
        state.begin_turn(URL).unwrap();

        state.set_input("second");
        assert!(state.begin_turn(URL).is_none());
        assert_eq!(state.turns.len(), 1);
        assert_eq!(state.input, "second");
    }

    #[test]
    fn test_resolve_replaces_pending_turn() {
        let mut state = with_input("Who are your customers?");
        let (index, _) = state.begin_turn(URL).unwrap();

        assert!(state.resolve_turn(index, "SMBs in retail."));

        assert_eq!(state.turns.len(), 1);
        assert_eq!(state.turns[0].user_query, "Who are your customers?");
        assert_eq!(state.turns[0].agent_response(), "SMBs in retail.");
        assert!(!state.is_awaiting_reply());
    }

    #[test]
    fn test_failure_substitutes_fallback_and_unblocks() {
        let mut state = with_input("q1");
        let (index, _) = state.begin_turn(URL).unwrap();

        assert!(state.fail_turn(index, "HTTP 500"));

        assert_eq!(state.turns[0].agent_response(), FALLBACK_RESPONSE);
        assert!(state.turns[0].is_failed());
        assert!(state.pending_turn().is_none());

        state.set_input("q2");
        assert!(state.begin_turn(URL).is_some());
    }

    #[test]
    fn test_settle_only_touches_pending_turn() {
        let mut state = with_input("q1");
        let (index, _) = state.begin_turn(URL).unwrap();
        state.resolve_turn(index, "a1");

        assert!(!state.resolve_turn(index, "again"));
        assert!(!state.fail_turn(index, "late"));
        assert!(!state.resolve_turn(7, "nowhere"));
        assert_eq!(state.turns[0].agent_response(), "a1");
    }

    #[test]
    fn test_history_carries_prior_answers() {
        let mut state = with_input("q1");
        let (i, _) = state.begin_turn(URL).unwrap();
        state.resolve_turn(i, "a1");

        state.set_input("q2");
        let (_, request) = state.begin_turn(URL).unwrap();

        let agents: Vec<_> = request
            .conversation_history
            .iter()
            .map(|h| h.agent.as_str())
            .collect();
        assert_eq!(agents, vec!["a1", ""]);
    }

    #[test]
    fn test_transcript_change_pins_scroll_to_newest() {
        let mut state = with_input("q1");
        state.scroll_up(5);
        assert_eq!(state.scroll.offset, 5);

        let (i, _) = state.begin_turn(URL).unwrap();
        assert_eq!(state.scroll.offset, 0);

        state.scroll_up(3);
        state.resolve_turn(i, "a1");
        assert_eq!(state.scroll.offset, 0);
    }

    #[test]
    fn test_scroll_down_saturates_at_newest() {
        let mut state = ConversationState::new();
        state.scroll_up(2);
        state.scroll_down(PAGE_SCROLL_LINES);
        assert_eq!(state.scroll.offset, 0);
    }

    #[test]
    fn test_scroll_up_stops_at_oldest_turn() {
        let mut state = ConversationState::new();
        state.scroll.set_bounds(24, 8);

        for _ in 0..50 {
            state.scroll_up(PAGE_SCROLL_LINES);
        }
        assert_eq!(state.scroll.offset, 16);

        state.scroll_down(1);
        assert_eq!(state.scroll.offset, 15);
    }
}
