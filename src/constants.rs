//! Application constants
//!
//! Centralized location for user-facing strings and configuration defaults.

/// Default backend base URL
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Log file name inside the log directory
pub const LOG_FILE_NAME: &str = "interviewiq.log";

/// Application name
pub const APP_NAME: &str = "InterviewIQ";

/// Application tagline shown in the header
pub const APP_TAGLINE: &str = "AI Interview Coach";

/// Application version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// Backend endpoints
pub const GENERATE_QUESTIONS_PATH: &str = "/generate-questions";
pub const EVALUATE_ANSWER_PATH: &str = "/evaluate-answer";
pub const HEALTH_PATH: &str = "/health";

// User-facing messages
pub const MSG_FILL_ALL_FIELDS: &str = "Please fill in all fields";
pub const MSG_PROVIDE_ANSWER: &str = "Please provide an answer";
pub const MSG_GENERATE_FAILED: &str = "Failed to generate questions. Please try again.";
pub const MSG_EVALUATE_FAILED: &str = "Failed to evaluate answer. Please try again.";
