//! Session controller - the interview workflow state machine
//!
//! `Session` owns everything a practice run knows: the job being prepared
//! for, the generated questions, the position in them, the answer being
//! written and the last error. It is only changed through the transition
//! methods below, each of which checks its guard before touching state.

use std::fmt;

use thiserror::Error;

use crate::constants::{
    MSG_EVALUATE_FAILED, MSG_FILL_ALL_FIELDS, MSG_GENERATE_FAILED, MSG_PROVIDE_ANSWER,
};
use crate::models::{EvaluateAnswerRequest, ExperienceLevel, Feedback, JobSpec, Question};

/// Screen the session is currently on
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Screen {
    #[default]
    Input,
    Questions,
    Practice,
    Feedback(Feedback),
    Complete,
}

impl Screen {
    pub fn name(&self) -> &'static str {
        match self {
            Screen::Input => "input",
            Screen::Questions => "questions",
            Screen::Practice => "practice",
            Screen::Feedback(_) => "feedback",
            Screen::Complete => "complete",
        }
    }
}

/// User-triggered transitions that can be rejected
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    GenerateQuestions,
    StartPractice,
    SubmitAnswer,
    Advance,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Action::GenerateQuestions => "generate questions",
            Action::StartPractice => "start practice",
            Action::SubmitAnswer => "submit an answer",
            Action::Advance => "advance",
        })
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("cannot {action} from the {screen} screen")]
    InvalidTransition { action: Action, screen: &'static str },
    #[error("question index {index} out of range for {len} questions")]
    QuestionOutOfRange { index: usize, len: usize },
    #[error("{0}")]
    Validation(&'static str),
}

/// Free-text fields the user can edit
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextField {
    Title,
    Description,
    Answer,
}

/// Percentage of questions finished when `index` is the one being answered.
///
/// The current question does not count until it has been advanced past.
pub fn progress_percent(index: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    (index.min(total) * 100 / total) as u8
}

/// State of one practice session
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    screen: Screen,
    job: JobSpec,
    questions: Vec<Question>,
    index: usize,
    answer: String,
    error: Option<String>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    // ========================
    // Accessors
    // ========================

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn job(&self) -> &JobSpec {
        &self.job
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Feedback for the current answer, present only on the feedback screen
    pub fn feedback(&self) -> Option<&Feedback> {
        match &self.screen {
            Screen::Feedback(feedback) => Some(feedback),
            _ => None,
        }
    }

    pub fn current_question(&self) -> Result<&Question, SessionError> {
        self.questions
            .get(self.index)
            .ok_or(SessionError::QuestionOutOfRange {
                index: self.index,
                len: self.questions.len(),
            })
    }

    pub fn is_last_question(&self) -> bool {
        self.index + 1 >= self.questions.len()
    }

    /// Completion percentage, only meaningful while practicing
    pub fn progress(&self) -> Option<u8> {
        match self.screen {
            Screen::Practice if !self.questions.is_empty() => {
                Some(progress_percent(self.index, self.questions.len()))
            }
            _ => None,
        }
    }

    // ========================
    // Input editing
    // ========================

    /// Read a text field, if the current screen shows it
    pub fn text(&self, field: TextField) -> Option<&str> {
        match (field, &self.screen) {
            (TextField::Title, Screen::Input) => Some(&self.job.title),
            (TextField::Description, Screen::Input) => Some(&self.job.description),
            (TextField::Answer, Screen::Practice) => Some(&self.answer),
            _ => None,
        }
    }

    /// Mutable access to a text field, if the current screen lets the user edit it
    pub fn text_mut(&mut self, field: TextField) -> Option<&mut String> {
        match (field, &self.screen) {
            (TextField::Title, Screen::Input) => Some(&mut self.job.title),
            (TextField::Description, Screen::Input) => Some(&mut self.job.description),
            (TextField::Answer, Screen::Practice) => Some(&mut self.answer),
            _ => None,
        }
    }

    /// Change the experience level; ignored outside the input screen
    pub fn set_experience_level(&mut self, level: ExperienceLevel) -> bool {
        if self.screen != Screen::Input {
            return false;
        }
        self.job.experience_level = level;
        true
    }

    // ========================
    // Question generation
    // ========================

    /// Validate the job and hand back the payload to request questions with.
    ///
    /// On a validation failure the error message is recorded and nothing
    /// should be sent.
    pub fn begin_generate(&mut self) -> Result<JobSpec, SessionError> {
        self.expect_screen(Action::GenerateQuestions, |s| *s == Screen::Input)?;
        if !self.job.is_complete() {
            self.error = Some(MSG_FILL_ALL_FIELDS.to_string());
            return Err(SessionError::Validation(MSG_FILL_ALL_FIELDS));
        }
        self.error = None;
        Ok(self.job.clone())
    }

    pub fn questions_generated(&mut self, questions: Vec<Question>) -> Result<(), SessionError> {
        self.expect_screen(Action::GenerateQuestions, |s| *s == Screen::Input)?;
        self.questions = questions;
        self.index = 0;
        self.error = None;
        self.screen = Screen::Questions;
        Ok(())
    }

    pub fn generate_failed(&mut self) {
        if self.screen == Screen::Input {
            self.error = Some(MSG_GENERATE_FAILED.to_string());
        }
    }

    // ========================
    // Practice
    // ========================

    pub fn start_practice(&mut self) -> Result<(), SessionError> {
        self.expect_screen(Action::StartPractice, |s| *s == Screen::Questions)?;
        if self.questions.is_empty() {
            return Err(SessionError::InvalidTransition {
                action: Action::StartPractice,
                screen: self.screen.name(),
            });
        }
        self.index = 0;
        self.screen = Screen::Practice;
        Ok(())
    }

    /// Validate the answer and build the evaluation payload for the current question
    pub fn begin_evaluate(&mut self) -> Result<EvaluateAnswerRequest, SessionError> {
        self.expect_screen(Action::SubmitAnswer, |s| *s == Screen::Practice)?;
        if self.answer.trim().is_empty() {
            self.error = Some(MSG_PROVIDE_ANSWER.to_string());
            return Err(SessionError::Validation(MSG_PROVIDE_ANSWER));
        }
        let question = self.current_question()?.text.clone();
        self.error = None;
        Ok(EvaluateAnswerRequest {
            question,
            answer: self.answer.clone(),
            job_context: self.job.job_context(),
        })
    }

    pub fn answer_evaluated(&mut self, feedback: Feedback) -> Result<(), SessionError> {
        self.expect_screen(Action::SubmitAnswer, |s| *s == Screen::Practice)?;
        self.error = None;
        self.screen = Screen::Feedback(feedback);
        Ok(())
    }

    pub fn evaluate_failed(&mut self) {
        if self.screen == Screen::Practice {
            self.error = Some(MSG_EVALUATE_FAILED.to_string());
        }
    }

    /// Move past the feedback: on to the next question, or finish after the last
    pub fn advance(&mut self) -> Result<(), SessionError> {
        self.expect_screen(Action::Advance, |s| matches!(s, Screen::Feedback(_)))?;
        if self.index + 1 < self.questions.len() {
            self.index += 1;
            self.answer.clear();
            self.screen = Screen::Practice;
        } else {
            self.screen = Screen::Complete;
        }
        Ok(())
    }

    /// Throw the whole session away and start over
    pub fn restart(&mut self) {
        *self = Session::default();
    }

    fn expect_screen(
        &self,
        action: Action,
        allowed: impl Fn(&Screen) -> bool,
    ) -> Result<(), SessionError> {
        if allowed(&self.screen) {
            Ok(())
        } else {
            Err(SessionError::InvalidTransition {
                action,
                screen: self.screen.name(),
            })
        }
    }
}
