//! Render state - data structure sent from App layer to UI for rendering

use crate::app::session::Screen;
use crate::messages::ui_events::{InputField, InputMode};
use crate::models::{BackendStatus, JobSpec, Question};

/// Complete state needed by the UI to render
#[derive(Debug, Clone, Default)]
pub struct RenderState {
    // Session
    pub screen: Screen,
    pub job: JobSpec,
    pub questions: Vec<Question>,
    pub index: usize,
    pub answer: String,
    pub error: Option<String>,
    pub progress: Option<u8>,
    pub is_last_question: bool,

    // UI state
    pub focus: InputField,
    pub input_mode: InputMode,
    pub cursor_position: usize,
    pub scroll: u16,
    pub is_loading: bool,

    // Status
    pub backend_status: BackendStatus,
    pub api_url: String,

    // Popups
    pub show_help: bool,
}

impl RenderState {
    /// Question currently being practiced, if the index is in range
    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.index)
    }
}
