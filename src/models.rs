use serde::{Deserialize, Serialize};
use std::fmt;

/// Candidate seniority the questions are tailored for
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceLevel {
    #[default]
    Entry,
    Mid,
    Senior,
}

impl ExperienceLevel {
    /// Wire value, also used in the job context string
    pub fn as_str(&self) -> &'static str {
        match self {
            ExperienceLevel::Entry => "entry",
            ExperienceLevel::Mid => "mid",
            ExperienceLevel::Senior => "senior",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ExperienceLevel::Entry => "Entry Level",
            ExperienceLevel::Mid => "Mid Level",
            ExperienceLevel::Senior => "Senior Level",
        }
    }

    pub fn next(&self) -> ExperienceLevel {
        match self {
            ExperienceLevel::Entry => ExperienceLevel::Mid,
            ExperienceLevel::Mid => ExperienceLevel::Senior,
            ExperienceLevel::Senior => ExperienceLevel::Entry,
        }
    }

    pub fn prev(&self) -> ExperienceLevel {
        match self {
            ExperienceLevel::Entry => ExperienceLevel::Senior,
            ExperienceLevel::Mid => ExperienceLevel::Entry,
            ExperienceLevel::Senior => ExperienceLevel::Mid,
        }
    }
}

impl fmt::Display for ExperienceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The job the user is preparing for.
///
/// Serializes directly as the `/generate-questions` request body.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobSpec {
    pub title: String,
    pub description: String,
    pub experience_level: ExperienceLevel,
}

impl JobSpec {
    /// Both free-text fields must be filled before questions can be requested
    pub fn is_complete(&self) -> bool {
        !self.title.is_empty() && !self.description.is_empty()
    }

    /// Context string sent along with every answer for evaluation
    pub fn job_context(&self) -> String {
        format!("{} - {} level", self.title, self.experience_level)
    }
}

/// A single generated interview question
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    #[serde(rename = "question")]
    pub text: String,
    pub category: String,
    pub difficulty: String,
}

/// Evaluation of one submitted answer
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feedback {
    /// Reported on a 0-10 scale by the backend, taken as-is
    pub score: i64,
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
    pub sample_answer: String,
}

/// Body of a successful `/generate-questions` response
#[derive(Clone, Debug, Deserialize)]
pub struct QuestionsResponse {
    pub questions: Vec<Question>,
    /// Echoed back by the backend, not displayed
    #[serde(default)]
    pub job_title: Option<String>,
}

/// Body of an `/evaluate-answer` request
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct EvaluateAnswerRequest {
    pub question: String,
    pub answer: String,
    pub job_context: String,
}

/// Body of a `/health` response
#[derive(Clone, Debug, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

impl HealthResponse {
    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}

/// Result of the startup health probe
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BackendStatus {
    #[default]
    Unknown,
    Online,
    Offline,
}

impl BackendStatus {
    pub fn label(&self) -> &'static str {
        match self {
            BackendStatus::Unknown => "backend: ?",
            BackendStatus::Online => "backend: online",
            BackendStatus::Offline => "backend: offline",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_job_spec_request_body() {
        let job = JobSpec {
            title: "Backend Engineer".into(),
            description: "Build APIs".into(),
            experience_level: ExperienceLevel::Mid,
        };
        let value = serde_json::to_value(&job).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "title": "Backend Engineer",
                "description": "Build APIs",
                "experience_level": "mid"
            })
        );
    }

    #[test]
    fn test_job_context() {
        let job = JobSpec {
            title: "Backend Engineer".into(),
            description: "...".into(),
            experience_level: ExperienceLevel::Senior,
        };
        assert_eq!(job.job_context(), "Backend Engineer - senior level");
    }

    #[test]
    fn test_job_spec_completeness() {
        let mut job = JobSpec::default();
        assert!(!job.is_complete());
        job.title = "QA".into();
        assert!(!job.is_complete());
        job.description = "Testing".into();
        assert!(job.is_complete());
    }

    #[test]
    fn test_level_cycle() {
        let level = ExperienceLevel::default();
        assert_eq!(level, ExperienceLevel::Entry);
        assert_eq!(level.next().next().next(), ExperienceLevel::Entry);
        assert_eq!(level.prev(), ExperienceLevel::Senior);
    }

    #[test]
    fn test_parse_questions_response() {
        let body = r#"{
            "questions": [
                {"question": "Tell me about yourself", "category": "behavioral", "difficulty": "easy"},
                {"question": "Design a cache", "category": "technical", "difficulty": "hard"}
            ],
            "job_title": "Backend Engineer"
        }"#;
        let parsed: QuestionsResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.questions.len(), 2);
        assert_eq!(parsed.questions[1].text, "Design a cache");
        assert_eq!(parsed.questions[1].category, "technical");
    }

    #[test]
    fn test_parse_feedback_rejects_missing_fields() {
        let body = r#"{"score": 7, "strengths": ["clear"]}"#;
        assert!(serde_json::from_str::<Feedback>(body).is_err());
    }

    #[test]
    fn test_score_taken_as_is() {
        let body = r#"{"score": 12, "strengths": [], "improvements": [], "sample_answer": ""}"#;
        let feedback: Feedback = serde_json::from_str(body).unwrap();
        assert_eq!(feedback.score, 12);
    }
}
