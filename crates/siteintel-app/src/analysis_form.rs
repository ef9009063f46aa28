//! Analyzer form state
//!
//! Holds the site URL and the ordered list of custom question slots. The list
//! always has at least one slot; blank slots are dropped when the request is
//! built, preserving the order of the remaining ones.

use siteintel_core::AnalysisRequest;

/// Which input of the form receives typed characters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Url,
    /// Question slot by position
    Question(usize),
}

/// Submission lifecycle of the form
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FormStatus {
    #[default]
    Editing,
    /// A request is in flight; edits and re-submission are refused
    Submitting,
    /// The last submission failed; entered data is kept for a retry
    Failed(String),
}

/// State of the analyzer screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisFormState {
    pub url: String,
    pub questions: Vec<String>,
    pub focus: FormField,
    pub status: FormStatus,
}

impl Default for AnalysisFormState {
    fn default() -> Self {
        Self {
            url: String::new(),
            questions: vec![String::new()],
            focus: FormField::Url,
            status: FormStatus::Editing,
        }
    }
}

impl AnalysisFormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.status, FormStatus::Submitting)
    }

    /// Error from the last failed submission
    pub fn error(&self) -> Option<&str> {
        match &self.status {
            FormStatus::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Whether a submission would currently send a request
    pub fn can_submit(&self) -> bool {
        !self.is_submitting() && !self.url.trim().is_empty()
    }

    pub fn set_url(&mut self, url: impl Into<String>) {
        if self.is_submitting() {
            return;
        }
        self.url = url.into();
    }

    /// Append a blank question slot and focus it
    pub fn add_question(&mut self) {
        if self.is_submitting() {
            return;
        }
        self.questions.push(String::new());
        self.focus = FormField::Question(self.questions.len() - 1);
    }

    /// Remove the slot at `index`.
    ///
    /// The last remaining slot cannot be removed. Focus stays on the same
    /// logical slot where possible and is clamped otherwise.
    pub fn remove_question(&mut self, index: usize) {
        if self.is_submitting() || index >= self.questions.len() || self.questions.len() <= 1 {
            return;
        }
        self.questions.remove(index);

        if let FormField::Question(focused) = self.focus {
            let last = self.questions.len() - 1;
            let focused = if focused > index { focused - 1 } else { focused };
            self.focus = FormField::Question(focused.min(last));
        }
    }

    pub fn update_question(&mut self, index: usize, text: impl Into<String>) {
        if self.is_submitting() {
            return;
        }
        if let Some(slot) = self.questions.get_mut(index) {
            *slot = text.into();
        }
    }

    pub fn focus_next(&mut self) {
        self.focus = match self.focus {
            FormField::Url => FormField::Question(0),
            FormField::Question(i) if i + 1 < self.questions.len() => FormField::Question(i + 1),
            FormField::Question(_) => FormField::Url,
        };
    }

    pub fn focus_previous(&mut self) {
        self.focus = match self.focus {
            FormField::Url => FormField::Question(self.questions.len() - 1),
            FormField::Question(0) => FormField::Url,
            FormField::Question(i) => FormField::Question(i - 1),
        };
    }

    fn focused_text_mut(&mut self) -> Option<&mut String> {
        if self.is_submitting() {
            return None;
        }
        match self.focus {
            FormField::Url => Some(&mut self.url),
            FormField::Question(i) => self.questions.get_mut(i),
        }
    }

    /// Type a character into the focused field
    pub fn insert_char(&mut self, c: char) {
        if let Some(text) = self.focused_text_mut() {
            text.push(c);
        }
    }

    /// Delete the last character of the focused field
    pub fn backspace(&mut self) {
        if let Some(text) = self.focused_text_mut() {
            text.pop();
        }
    }

    /// Clear the focused field
    pub fn clear_field(&mut self) {
        if let Some(text) = self.focused_text_mut() {
            text.clear();
        }
    }

    /// Build the request and enter the submitting state.
    ///
    /// Returns `None`, leaving the form untouched, when the URL is blank or a
    /// submission is already in flight.
    pub fn prepare_submission(&mut self) -> Option<AnalysisRequest> {
        if !self.can_submit() {
            return None;
        }
        self.status = FormStatus::Submitting;
        Some(AnalysisRequest::new(
            self.url.trim(),
            self.questions.iter().cloned(),
        ))
    }

    /// Record a failed submission, keeping everything the user entered
    pub fn fail(&mut self, message: impl Into<String>) {
        self.status = FormStatus::Failed(message.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form_with_questions(questions: &[&str]) -> AnalysisFormState {
        AnalysisFormState {
            url: "https://acme.io".into(),
            questions: questions.iter().map(|q| q.to_string()).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_default_has_one_blank_slot() {
        let form = AnalysisFormState::default();
        assert_eq!(form.questions, vec![String::new()]);
        assert_eq!(form.focus, FormField::Url);
        assert_eq!(form.status, FormStatus::Editing);
    }

    #[test]
    fn test_blank_url_is_not_submitted() {
        let mut form = AnalysisFormState::default();
        form.url = "   ".into();

        assert!(form.prepare_submission().is_none());
        assert_eq!(form.status, FormStatus::Editing);
    }

    #[test]
    fn test_submission_filters_blank_questions() {
        let mut form = form_with_questions(&["", "What is your pricing?", ""]);

        let request = form.prepare_submission().unwrap();

        assert_eq!(request.url, "https://acme.io");
        assert_eq!(request.questions, vec!["What is your pricing?"]);
        assert!(form.is_submitting());
    }

    #[test]
    fn test_resubmission_refused_while_in_flight() {
        let mut form = form_with_questions(&["q"]);
        assert!(form.prepare_submission().is_some());
        assert!(form.prepare_submission().is_none());
    }

    #[test]
    fn test_edits_ignored_while_submitting() {
        let mut form = form_with_questions(&["q"]);
        form.prepare_submission();

        form.set_url("https://other.io");
        form.add_question();
        form.update_question(0, "changed");
        form.insert_char('x');

        assert_eq!(form.url, "https://acme.io");
        assert_eq!(form.questions, vec!["q"]);
    }

    #[test]
    fn test_failure_keeps_data_and_allows_retry() {
        let mut form = form_with_questions(&["a", "b"]);
        form.prepare_submission();
        form.fail("bad token");

        assert_eq!(form.error(), Some("bad token"));
        assert_eq!(form.questions, vec!["a", "b"]);

        let retry = form.prepare_submission().unwrap();
        assert_eq!(retry.questions, vec!["a", "b"]);
        assert_eq!(form.error(), None);
    }

    #[test]
    fn test_add_question_focuses_new_slot() {
        let mut form = AnalysisFormState::default();
        form.add_question();
        assert_eq!(form.questions.len(), 2);
        assert_eq!(form.focus, FormField::Question(1));
    }

    #[test]
    fn test_remove_last_remaining_slot_is_noop() {
        let mut form = AnalysisFormState::default();
        form.remove_question(0);
        assert_eq!(form.questions.len(), 1);
    }

    #[test]
    fn test_remove_out_of_range_is_noop() {
        let mut form = form_with_questions(&["a", "b"]);
        form.remove_question(5);
        assert_eq!(form.questions, vec!["a", "b"]);
    }

    #[test]
    fn test_remove_clamps_focus() {
        let mut form = form_with_questions(&["a", "b", "c"]);
        form.focus = FormField::Question(2);
        form.remove_question(2);
        assert_eq!(form.questions, vec!["a", "b"]);
        assert_eq!(form.focus, FormField::Question(1));
    }

    #[test]
    fn test_remove_before_focus_shifts_focus() {
        let mut form = form_with_questions(&["a", "b", "c"]);
        form.focus = FormField::Question(2);
        form.remove_question(0);
        assert_eq!(form.focus, FormField::Question(1));
        assert_eq!(form.questions[1], "c");
    }

    #[test]
    fn test_question_order_survives_edits() {
        let mut form = form_with_questions(&["first"]);
        form.add_question();
        form.update_question(1, "second");
        form.add_question();
        form.update_question(2, "third");
        form.remove_question(1);
        form.add_question();

        let request = form.prepare_submission().unwrap();
        assert_eq!(request.questions, vec!["first", "third"]);
    }

    #[derive(Debug, Clone, Copy)]
    enum Edit {
        Add,
        Remove(usize),
        Update(usize, &'static str),
    }

    /// Apply `edit` to a plain list with the form's slot rules
    fn apply_to_model(slots: &mut Vec<String>, edit: Edit) {
        match edit {
            Edit::Add => slots.push(String::new()),
            Edit::Remove(i) if i < slots.len() && slots.len() > 1 => {
                slots.remove(i);
            }
            Edit::Remove(_) => {}
            Edit::Update(i, text) => {
                if let Some(slot) = slots.get_mut(i) {
                    *slot = text.to_string();
                }
            }
        }
    }

    #[test]
    fn test_question_order_matches_entry_order_for_edit_sequences() {
        use Edit::*;

        let cases: &[(&str, &[Edit], &[&str])] = &[
            ("no edits", &[], &[]),
            ("fill the default slot", &[Update(0, "a")], &["a"]),
            (
                "append three",
                &[Update(0, "a"), Add, Update(1, "b"), Add, Update(2, "c")],
                &["a", "b", "c"],
            ),
            (
                "remove the middle",
                &[Update(0, "a"), Add, Update(1, "b"), Add, Update(2, "c"), Remove(1)],
                &["a", "c"],
            ),
            (
                "remove the first then append",
                &[Update(0, "a"), Add, Update(1, "b"), Remove(0), Add, Update(1, "c")],
                &["b", "c"],
            ),
            (
                "blank slots in between are dropped",
                &[Add, Add, Update(1, "b"), Add, Update(3, "d")],
                &["b", "d"],
            ),
            (
                "last slot cannot be removed",
                &[Update(0, "a"), Remove(0), Remove(0)],
                &["a"],
            ),
            (
                "out of range edits are ignored",
                &[Update(4, "x"), Remove(7), Update(0, "a")],
                &["a"],
            ),
            (
                "rewrite after reordering removals",
                &[
                    Update(0, "a"),
                    Add,
                    Update(1, "b"),
                    Add,
                    Update(2, "c"),
                    Remove(2),
                    Remove(0),
                    Update(0, "B"),
                    Add,
                    Update(1, "D"),
                ],
                &["B", "D"],
            ),
        ];

        for (name, edits, expected) in cases {
            let mut form = form_with_questions(&[""]);
            let mut model = vec![String::new()];
            for &edit in edits.iter() {
                match edit {
                    Add => form.add_question(),
                    Remove(i) => form.remove_question(i),
                    Update(i, text) => form.update_question(i, text),
                }
                apply_to_model(&mut model, edit);
                assert_eq!(form.questions, model, "{}: slots after {:?}", name, edit);
            }

            let request = form.prepare_submission().unwrap();
            assert_eq!(request.questions, *expected, "{}", name);
        }
    }

    #[test]
    fn test_focus_cycles_through_all_fields() {
        let mut form = form_with_questions(&["a", "b"]);
        form.focus_next();
        assert_eq!(form.focus, FormField::Question(0));
        form.focus_next();
        assert_eq!(form.focus, FormField::Question(1));
        form.focus_next();
        assert_eq!(form.focus, FormField::Url);
        form.focus_previous();
        assert_eq!(form.focus, FormField::Question(1));
    }

    #[test]
    fn test_typing_edits_focused_field() {
        let mut form = AnalysisFormState::default();
        for c in "acme.io".chars() {
            form.insert_char(c);
        }
        form.backspace();
        assert_eq!(form.url, "acme.i");

        form.focus_next();
        form.insert_char('?');
        assert_eq!(form.questions[0], "?");

        form.clear_field();
        assert_eq!(form.questions[0], "");
    }
}
