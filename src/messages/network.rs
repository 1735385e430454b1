//! Network messages - communication between App and Network layers

use crate::models::{BackendStatus, EvaluateAnswerRequest, Feedback, JobSpec, Question};

/// The two backend operations the session depends on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    GenerateQuestions,
    EvaluateAnswer,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::GenerateQuestions => "generate-questions",
            Operation::EvaluateAnswer => "evaluate-answer",
        }
    }
}

/// Commands sent from App layer to Network layer
#[derive(Debug, Clone)]
pub enum NetworkCommand {
    /// Ask the backend for interview questions about a job
    GenerateQuestions {
        id: u64,
        job: JobSpec,
    },
    /// Ask the backend to score an answer
    EvaluateAnswer {
        id: u64,
        request: EvaluateAnswerRequest,
    },
    /// Probe the backend health endpoint
    CheckHealth,

    /// Shutdown the network actor
    Shutdown,
}

/// Responses sent from Network layer to App layer
#[derive(Debug, Clone)]
pub enum NetworkResponse {
    QuestionsGenerated {
        id: u64,
        questions: Vec<Question>,
    },
    AnswerEvaluated {
        id: u64,
        feedback: Feedback,
    },
    /// Any failure of either operation; the message is for logs only
    Failed {
        id: u64,
        operation: Operation,
        message: String,
    },
    Health(BackendStatus),
}

impl NetworkResponse {
    /// Request id this response answers, if it answers one
    pub fn id(&self) -> Option<u64> {
        match self {
            NetworkResponse::QuestionsGenerated { id, .. }
            | NetworkResponse::AnswerEvaluated { id, .. }
            | NetworkResponse::Failed { id, .. } => Some(*id),
            NetworkResponse::Health(_) => None,
        }
    }
}
