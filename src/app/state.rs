//! App state - pure data structure with no I/O logic

use crate::app::session::{Screen, Session, TextField};
use crate::messages::ui_events::{InputField, InputMode};
use crate::messages::RenderState;
use crate::models::BackendStatus;

const SCROLL_WRAP_WIDTH: usize = 20;

/// Main application state - pure data, no I/O
pub struct AppState {
    // Interview session
    pub session: Session,

    // UI state
    pub focus: InputField,
    pub input_mode: InputMode,
    pub cursor_position: usize,
    pub scroll: u16,

    // Request tracking
    pub is_loading: bool,
    pub next_request_id: u64,
    pub pending_request_id: Option<u64>,

    // Backend
    pub backend_status: BackendStatus,
    pub api_url: String,

    // Popups
    pub show_help: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(crate::constants::DEFAULT_API_URL)
    }
}

impl AppState {
    pub fn new(api_url: impl Into<String>) -> Self {
        AppState {
            session: Session::new(),
            focus: InputField::Title,
            input_mode: InputMode::Normal,
            cursor_position: 0,
            scroll: 0,
            is_loading: false,
            next_request_id: 1,
            pending_request_id: None,
            backend_status: BackendStatus::Unknown,
            api_url: api_url.into(),
            show_help: false,
        }
    }

    /// Generate a unique request ID
    pub fn next_id(&mut self) -> u64 {
        let id = self.next_request_id;
        self.next_request_id += 1;
        id
    }

    /// Text field the cursor belongs to on the current screen
    pub fn current_text_field(&self) -> Option<TextField> {
        match self.session.screen() {
            Screen::Input => match self.focus {
                InputField::Title => Some(TextField::Title),
                InputField::Description => Some(TextField::Description),
                InputField::Level => None,
            },
            Screen::Practice => Some(TextField::Answer),
            _ => None,
        }
    }

    /// Get the current input field content
    pub fn current_input(&self) -> &str {
        self.current_text_field()
            .and_then(|field| self.session.text(field))
            .unwrap_or("")
    }

    /// Get mutable reference to current input field
    pub fn current_input_mut(&mut self) -> Option<&mut String> {
        let field = self.current_text_field()?;
        self.session.text_mut(field)
    }

    /// Last scroll offset that still shows content on the current screen.
    ///
    /// Counts rows as if wrapped at a narrow width so long text stays reachable.
    pub fn scroll_limit(&self) -> u16 {
        let rows = |text: &str| text.chars().count() / SCROLL_WRAP_WIDTH + 1;
        let total: usize = match self.session.screen() {
            Screen::Questions => self.session.questions().iter().map(|q| rows(&q.text) + 2).sum(),
            Screen::Feedback(feedback) => rows(&feedback.sample_answer) + feedback.sample_answer.lines().count(),
            _ => 0,
        };
        u16::try_from(total.saturating_sub(1)).unwrap_or(u16::MAX)
    }

    /// Convert state to RenderState for UI
    pub fn to_render_state(&self) -> RenderState {
        let session = &self.session;
        RenderState {
            screen: session.screen().clone(),
            job: session.job().clone(),
            questions: session.questions().to_vec(),
            index: session.index(),
            answer: session.answer().to_string(),
            error: session.error().map(str::to_string),
            progress: session.progress(),
            is_last_question: session.is_last_question(),
            focus: self.focus,
            input_mode: self.input_mode,
            cursor_position: self.cursor_position,
            scroll: self.scroll,
            is_loading: self.is_loading,
            backend_status: self.backend_status,
            api_url: self.api_url.clone(),
            show_help: self.show_help,
        }
    }
}
