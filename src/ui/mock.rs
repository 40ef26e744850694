//! Mock UI implementation for testing.
//!
//! `MockUI` implements the [`UserInterface`] trait and captures all
//! interactions for later assertion. Confirmation prompts are answered from
//! a queue of pre-configured responses; an empty queue declines, matching
//! the end-of-input behavior of the real UI.

use std::collections::VecDeque;

use crate::error::Result;

use super::UserInterface;

/// Mock UI implementation for testing.
#[derive(Debug, Default)]
pub struct MockUI {
    printed: Vec<String>,
    errors: Vec<String>,
    prompts: Vec<String>,
    questions: Vec<String>,
    confirm_responses: VecDeque<String>,
    interactive: bool,
}

impl MockUI {
    /// Create a new mock UI.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a raw answer for the next confirmation prompt.
    pub fn queue_confirm_response(&mut self, response: &str) {
        self.confirm_responses.push_back(response.to_string());
    }

    /// Set whether this mock behaves as interactive.
    pub fn set_interactive(&mut self, interactive: bool) {
        self.interactive = interactive;
    }

    /// All lines printed as command output.
    pub fn printed(&self) -> &[String] {
        &self.printed
    }

    /// All failure lines.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// All confirmation questions shown.
    pub fn questions(&self) -> &[String] {
        &self.questions
    }

    /// All prompts shown by the read loop.
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    /// The printed output joined into one block.
    pub fn output(&self) -> String {
        self.printed.join("\n")
    }
}

impl UserInterface for MockUI {
    fn print(&mut self, msg: &str) {
        self.printed.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }

    fn show_prompt(&mut self, prompt: &str) {
        self.prompts.push(prompt.to_string());
    }

    fn confirm(&mut self, question: &str) -> Result<bool> {
        self.questions.push(question.to_string());
        Ok(self
            .confirm_responses
            .pop_front()
            .map(|answer| answer.trim().eq_ignore_ascii_case("y"))
            .unwrap_or(false))
    }

    fn is_interactive(&self) -> bool {
        self.interactive
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn captures_output_and_errors() {
        let mut ui = MockUI::new();
        ui.print("hello");
        ui.error("ls: boom");
        assert_eq!(ui.printed(), ["hello"]);
        assert_eq!(ui.errors(), ["ls: boom"]);
    }

    #[test]
    fn confirm_answers_from_queue() {
        let mut ui = MockUI::new();
        ui.queue_confirm_response("y");
        ui.queue_confirm_response("n");
        assert!(ui.confirm("sure?").unwrap());
        assert!(!ui.confirm("sure?").unwrap());
        assert_eq!(ui.questions().len(), 2);
    }

    #[test]
    fn exhausted_queue_declines() {
        let mut ui = MockUI::new();
        assert!(!ui.confirm("sure?").unwrap());
    }

    #[test]
    fn uppercase_y_confirms() {
        let mut ui = MockUI::new();
        ui.queue_confirm_response("Y\n");
        assert!(ui.confirm("sure?").unwrap());
    }

    #[test]
    fn anything_else_declines() {
        let mut ui = MockUI::new();
        ui.queue_confirm_response("yes");
        assert!(!ui.confirm("sure?").unwrap());
    }
}
