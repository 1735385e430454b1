//! HTTP client wrapper - talks to the interview coach backend

use std::time::Instant;

use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::constants::{EVALUATE_ANSWER_PATH, GENERATE_QUESTIONS_PATH, HEALTH_PATH};
use crate::models::{
    EvaluateAnswerRequest, Feedback, HealthResponse, JobSpec, Question, QuestionsResponse,
};

/// Why a backend call failed. Callers show a generic message either way.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("backend returned HTTP {status}: {body}")]
    Status { status: u16, body: String },
    #[error("malformed response body: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Client for the question generation and answer evaluation backend
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Build a client for `base_url`. No request timeout is set; the
    /// transport defaults apply.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("interviewiq/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self::with_client(http, base_url))
    }

    pub fn with_client(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        ApiClient { http, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// `POST /generate-questions`. Questions come back in the order the backend sent them.
    pub async fn generate_questions(&self, job: &JobSpec) -> Result<Vec<Question>, ApiError> {
        let response: QuestionsResponse = self.post_json(GENERATE_QUESTIONS_PATH, job).await?;
        Ok(response.questions)
    }

    /// `POST /evaluate-answer`
    pub async fn evaluate_answer(&self, request: &EvaluateAnswerRequest) -> Result<Feedback, ApiError> {
        self.post_json(EVALUATE_ANSWER_PATH, request).await
    }

    /// `GET /health`
    pub async fn health(&self) -> Result<bool, ApiError> {
        let resp = self.http.get(self.endpoint(HEALTH_PATH)).send().await?;
        let health: HealthResponse = read_json(resp).await?;
        Ok(health.is_healthy())
    }

    async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: serde::Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let start = Instant::now();
        let resp = self.http.post(self.endpoint(path)).json(body).send().await?;
        let status = resp.status().as_u16();
        let result = read_json(resp).await;
        tracing::debug!(path, status, time_ms = start.elapsed().as_millis() as u64, "Backend responded");
        result
    }
}

/// Read a response body, failing on non-2xx statuses and undecodable JSON
async fn read_json<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, ApiError> {
    let status = resp.status();
    let body = resp.text().await?;
    if !status.is_success() {
        return Err(ApiError::Status {
            status: status.as_u16(),
            body,
        });
    }
    Ok(serde_json::from_str(&body)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ExperienceLevel;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn job() -> JobSpec {
        JobSpec {
            title: "Backend Engineer".into(),
            description: "Build reliable services".into(),
            experience_level: ExperienceLevel::Mid,
        }
    }

    fn client(server: &MockServer) -> ApiClient {
        ApiClient::new(server.uri()).unwrap()
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let client = ApiClient::with_client(reqwest::Client::new(), "http://localhost:8000/");
        assert_eq!(client.base_url(), "http://localhost:8000");
        assert_eq!(client.endpoint(GENERATE_QUESTIONS_PATH), "http://localhost:8000/generate-questions");
    }

    #[tokio::test]
    async fn test_generate_questions_success() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/generate-questions"))
            .and(body_json(serde_json::json!({
                "title": "Backend Engineer",
                "description": "Build reliable services",
                "experience_level": "mid"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "questions": [
                    {"question": "Why this role?", "category": "behavioral", "difficulty": "easy"},
                    {"question": "Shard a database", "category": "technical", "difficulty": "hard"},
                    {"question": "Why this role?", "category": "behavioral", "difficulty": "easy"}
                ],
                "job_title": "Backend Engineer"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let questions = client(&server).generate_questions(&job()).await.unwrap();
        let texts: Vec<_> = questions.iter().map(|q| q.text.as_str()).collect();
        assert_eq!(texts, ["Why this role?", "Shard a database", "Why this role?"]);
    }

    #[tokio::test]
    async fn test_generate_questions_server_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/generate-questions"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;

        let err = client(&server).generate_questions(&job()).await.unwrap_err();
        assert!(matches!(err, ApiError::Status { status: 500, .. }));
    }

    #[tokio::test]
    async fn test_generate_questions_malformed_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/generate-questions"))
            .respond_with(ResponseTemplate::new(200).set_body_string("{\"questions\": \"nope\"}"))
            .mount(&server)
            .await;

        let err = client(&server).generate_questions(&job()).await.unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[tokio::test]
    async fn test_evaluate_answer_success() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/evaluate-answer"))
            .and(body_json(serde_json::json!({
                "question": "Why this role?",
                "answer": "I like distributed systems",
                "job_context": "Backend Engineer - mid level"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "score": 7,
                "strengths": ["Enthusiastic"],
                "improvements": ["Give an example"],
                "sample_answer": "In my last role..."
            })))
            .mount(&server)
            .await;

        let request = EvaluateAnswerRequest {
            question: "Why this role?".into(),
            answer: "I like distributed systems".into(),
            job_context: job().job_context(),
        };
        let feedback = client(&server).evaluate_answer(&request).await.unwrap();
        assert_eq!(feedback.score, 7);
        assert_eq!(feedback.improvements, ["Give an example"]);
    }

    #[tokio::test]
    async fn test_connection_refused() {
        // Nothing listens on the discard port
        let client = ApiClient::new("http://127.0.0.1:9").unwrap();
        let err = client.generate_questions(&job()).await.unwrap_err();
        assert!(matches!(err, ApiError::Transport(_)));
    }

    #[tokio::test]
    async fn test_health() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/health"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "status": "healthy",
                "service": "InterviewIQ"
            })))
            .mount(&server)
            .await;

        assert!(client(&server).health().await.unwrap());
    }
}
