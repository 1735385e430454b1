//! Command handlers - business logic for processing UI events

use crate::app::session::SessionError;
use crate::app::AppState;
use crate::messages::network::Operation;
use crate::messages::ui_events::{InputField, InputMode};
use crate::messages::{NetworkCommand, NetworkResponse};

impl AppState {
    // ========================
    // Navigation
    // ========================

    pub fn next_field(&mut self) {
        self.focus_field(self.focus.next());
    }

    pub fn prev_field(&mut self) {
        self.focus_field(self.focus.prev());
    }

    fn focus_field(&mut self, field: InputField) {
        self.focus = field;
        self.cursor_position = self.current_input().len();
        if self.input_mode == InputMode::Editing && !field.is_text() {
            self.stop_editing();
        }
    }

    pub fn next_level(&mut self) {
        let level = self.session.job().experience_level.next();
        self.session.set_experience_level(level);
    }

    pub fn prev_level(&mut self) {
        let level = self.session.job().experience_level.prev();
        self.session.set_experience_level(level);
    }

    // ========================
    // Input editing
    // ========================

    pub fn start_editing(&mut self) {
        if self.current_text_field().is_some() {
            self.input_mode = InputMode::Editing;
            self.cursor_position = self.current_input().len();
        }
    }

    pub fn stop_editing(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    pub fn move_cursor_left(&mut self) {
        if self.input_mode != InputMode::Editing {
            return;
        }
        let input = self.current_input();
        let cursor_pos = self.cursor_position.min(input.len());
        if cursor_pos > 0 {
            let new_pos = input[..cursor_pos]
                .char_indices()
                .last()
                .map(|(i, _)| i)
                .unwrap_or(0);
            self.cursor_position = new_pos;
        }
    }

    pub fn move_cursor_right(&mut self) {
        if self.input_mode != InputMode::Editing {
            return;
        }
        let input = self.current_input();
        let cursor_pos = self.cursor_position.min(input.len());
        if cursor_pos < input.len() {
            let new_pos = input[cursor_pos..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| cursor_pos + i)
                .unwrap_or(input.len());
            self.cursor_position = new_pos;
        }
    }

    pub fn enter_char(&mut self, c: char) {
        if self.input_mode != InputMode::Editing {
            return;
        }
        let cursor_pos = self.cursor_position;
        if let Some(input) = self.current_input_mut() {
            if cursor_pos <= input.len() {
                input.insert(cursor_pos, c);
                self.cursor_position = cursor_pos + c.len_utf8();
            }
        }
    }

    pub fn delete_char(&mut self) {
        if self.input_mode != InputMode::Editing || self.cursor_position == 0 {
            return;
        }
        let cursor_pos = self.cursor_position;
        if let Some(input) = self.current_input_mut() {
            let cursor_pos = cursor_pos.min(input.len());
            if cursor_pos == 0 {
                return;
            }
            let prev_pos = input[..cursor_pos]
                .char_indices()
                .last()
                .map(|(i, _)| i)
                .unwrap_or(0);
            input.remove(prev_pos);
            self.cursor_position = prev_pos;
        }
    }

    // ========================
    // Scrolling
    // ========================

    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }

    pub fn scroll_down(&mut self) {
        self.scroll = self.scroll.saturating_add(1).min(self.scroll_limit());
    }

    // ========================
    // Popups
    // ========================

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn close_help(&mut self) {
        self.show_help = false;
    }

    // ========================
    // Session transitions
    // ========================

    /// Validate the job details and build the question request
    pub fn generate_questions(&mut self) -> Option<NetworkCommand> {
        if self.is_loading {
            tracing::debug!("Generate ignored, request already in flight");
            return None;
        }
        self.stop_editing();

        match self.session.begin_generate() {
            Ok(job) => {
                let id = self.begin_request();
                tracing::info!(id, title = %job.title, level = %job.experience_level, "Requesting questions");
                Some(NetworkCommand::GenerateQuestions { id, job })
            }
            Err(e) => {
                log_rejected(&e);
                None
            }
        }
    }

    pub fn start_practice(&mut self) {
        match self.session.start_practice() {
            Ok(()) => {
                self.scroll = 0;
                self.cursor_position = 0;
                self.stop_editing();
                tracing::info!(total = self.session.questions().len(), "Practice started");
            }
            Err(e) => log_rejected(&e),
        }
    }

    /// Validate the answer and build the evaluation request
    pub fn submit_answer(&mut self) -> Option<NetworkCommand> {
        if self.is_loading {
            tracing::debug!("Submit ignored, request already in flight");
            return None;
        }
        self.stop_editing();

        match self.session.begin_evaluate() {
            Ok(request) => {
                let id = self.begin_request();
                tracing::info!(id, index = self.session.index(), "Submitting answer");
                Some(NetworkCommand::EvaluateAnswer { id, request })
            }
            Err(e) => {
                log_rejected(&e);
                None
            }
        }
    }

    pub fn advance(&mut self) {
        match self.session.advance() {
            Ok(()) => {
                self.scroll = 0;
                self.cursor_position = 0;
                self.input_mode = InputMode::Normal;
                tracing::info!(screen = self.session.screen().name(), index = self.session.index(), "Advanced");
            }
            Err(e) => log_rejected(&e),
        }
    }

    pub fn restart(&mut self) {
        if let Some(id) = self.pending_request_id {
            tracing::info!(id, "Restarting with a request in flight, its result will be dropped");
        }
        self.session.restart();
        self.is_loading = false;
        self.pending_request_id = None;
        self.focus = Default::default();
        self.input_mode = InputMode::Normal;
        self.cursor_position = 0;
        self.scroll = 0;
        tracing::info!("Session restarted");
    }

    fn begin_request(&mut self) -> u64 {
        let id = self.next_id();
        self.is_loading = true;
        self.pending_request_id = Some(id);
        id
    }

    // ========================
    // Response handling
    // ========================

    pub fn handle_response(&mut self, response: NetworkResponse) {
        if let NetworkResponse::Health(status) = response {
            self.backend_status = status;
            return;
        }

        // Only process if it matches the pending request
        if response.id() != self.pending_request_id {
            tracing::warn!(id = ?response.id(), pending = ?self.pending_request_id, "Dropping stale response");
            return;
        }
        self.is_loading = false;
        self.pending_request_id = None;
        let before = self.session.screen().name();

        match response {
            NetworkResponse::QuestionsGenerated { id, questions } => {
                tracing::info!(id, count = questions.len(), "Questions received");
                if let Err(e) = self.session.questions_generated(questions) {
                    log_rejected(&e);
                }
                self.scroll = 0;
            }
            NetworkResponse::AnswerEvaluated { id, feedback } => {
                tracing::info!(id, score = feedback.score, "Feedback received");
                if let Err(e) = self.session.answer_evaluated(feedback) {
                    log_rejected(&e);
                }
                self.scroll = 0;
            }
            NetworkResponse::Failed { id, operation, message } => {
                tracing::error!(id, operation = operation.as_str(), %message, "Backend call failed");
                match operation {
                    Operation::GenerateQuestions => self.session.generate_failed(),
                    Operation::EvaluateAnswer => self.session.evaluate_failed(),
                }
            }
            NetworkResponse::Health(_) => {}
        }

        if self.session.screen().name() != before {
            self.stop_editing();
            self.cursor_position = 0;
        }
    }
}

fn log_rejected(e: &SessionError) {
    match e {
        SessionError::Validation(message) => tracing::info!(%message, "Input rejected"),
        other => tracing::warn!(error = %other, "Transition rejected"),
    }
}
