//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! interactions for later assertion. Confirm answers can be queued or
//! defaulted.
//!
//! # Example
//!
//! ```
//! use pyvet::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.message("Checking environment");
//! ui.success("Done!");
//!
//! assert!(ui.messages().contains(&"Checking environment".to_string()));
//! assert!(ui.successes().contains(&"Done!".to_string()));
//! ```

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::error::Result;

use super::{OutputMode, SpinnerHandle, UserInterface};

/// Mock UI implementation for testing.
#[derive(Debug, Default)]
pub struct MockUI {
    mode: OutputMode,
    interactive: bool,
    messages: Vec<String>,
    successes: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
    headers: Vec<String>,
    key_values: Vec<(String, String)>,
    confirms: Vec<String>,
    confirm_queue: VecDeque<bool>,
    spinner_log: Arc<Mutex<Vec<String>>>,
}

impl MockUI {
    /// Create a new MockUI with Normal output mode.
    pub fn new() -> Self {
        Self {
            mode: OutputMode::Normal,
            ..Default::default()
        }
    }

    /// Queue answers for upcoming `confirm` calls.
    ///
    /// When the queue is exhausted, `confirm` falls back to the caller's
    /// default, like the non-interactive UI.
    pub fn queue_confirms(&mut self, answers: &[bool]) {
        self.confirm_queue.extend(answers.iter().copied());
    }

    /// Set whether this mock behaves as interactive.
    pub fn set_interactive(&mut self, interactive: bool) {
        self.interactive = interactive;
    }

    /// Get all captured messages.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Get all captured success messages.
    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    /// Get all captured warnings.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Get all captured errors.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Get all captured headers.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Get all captured key/value lines.
    pub fn key_values(&self) -> &[(String, String)] {
        &self.key_values
    }

    /// Get all confirm questions that were asked.
    pub fn confirms(&self) -> &[String] {
        &self.confirms
    }

    /// Get the spinner event log (`start:`, `success:`, `error:`, `skipped:` lines).
    pub fn spinner_events(&self) -> Vec<String> {
        self.spinner_log.lock().expect("spinner log lock").clone()
    }
}

impl UserInterface for MockUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn success(&mut self, msg: &str) {
        self.successes.push(msg.to_string());
    }

    fn warning(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }

    fn key_value(&mut self, key: &str, value: &str) {
        self.key_values.push((key.to_string(), value.to_string()));
    }

    fn confirm(&mut self, question: &str, default: bool) -> Result<bool> {
        self.confirms.push(question.to_string());
        Ok(self.confirm_queue.pop_front().unwrap_or(default))
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        let log = Arc::clone(&self.spinner_log);
        log.lock()
            .expect("spinner log lock")
            .push(format!("start: {}", message));
        Box::new(MockSpinner { log })
    }

    fn show_header(&mut self, title: &str) {
        self.headers.push(title.to_string());
    }

    fn is_interactive(&self) -> bool {
        self.interactive
    }
}

/// Spinner handle that records outcomes into the owning mock's log.
pub struct MockSpinner {
    log: Arc<Mutex<Vec<String>>>,
}

impl SpinnerHandle for MockSpinner {
    fn set_message(&mut self, msg: &str) {
        self.log
            .lock()
            .expect("spinner log lock")
            .push(format!("message: {}", msg));
    }

    fn finish_success(&mut self, msg: &str) {
        self.log
            .lock()
            .expect("spinner log lock")
            .push(format!("success: {}", msg));
    }

    fn finish_error(&mut self, msg: &str) {
        self.log
            .lock()
            .expect("spinner log lock")
            .push(format!("error: {}", msg));
    }

    fn finish_skipped(&mut self, msg: &str) {
        self.log
            .lock()
            .expect("spinner log lock")
            .push(format!("skipped: {}", msg));
    }
}
