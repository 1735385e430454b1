//! # InterviewIQ TUI
//!
//! A terminal interview coach.
//!
//! ## Features
//! - Job details form (title, experience level, description)
//! - AI-generated interview questions from a backend service
//! - Answer practice with scored feedback, strengths and improvements
//! - Progress tracking through the question list
//!
//! ## Architecture
//! Actor-based with channels:
//! - UI Layer (Ratatui) - synchronous
//! - App Layer (Session state machine)
//! - Network Layer (Tokio runtime)

pub mod constants;
pub mod config;
pub mod models;
pub mod ui;
pub mod messages;
pub mod app;
pub mod network;

// Re-export commonly used types
pub use models::{ExperienceLevel, Feedback, JobSpec, Question};
pub use messages::{UiEvent, NetworkCommand, NetworkResponse, RenderState};
pub use app::{AppActor, AppState, Screen, Session, SessionError};
pub use network::{ApiClient, ApiError, NetworkActor};
pub use config::Settings;
