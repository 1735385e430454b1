//! Network actor - runs backend calls in the Tokio async runtime

use tokio::sync::mpsc;
use tokio::task::JoinSet;

use crate::messages::{NetworkCommand, NetworkResponse, Operation};
use crate::models::BackendStatus;
use crate::network::client::ApiClient;

/// Network actor that executes backend calls
pub struct NetworkActor {
    client: ApiClient,
    response_tx: mpsc::UnboundedSender<NetworkResponse>,
    active_requests: JoinSet<()>,
}

impl NetworkActor {
    pub fn new(client: ApiClient, response_tx: mpsc::UnboundedSender<NetworkResponse>) -> Self {
        NetworkActor {
            client,
            response_tx,
            active_requests: JoinSet::new(),
        }
    }

    /// Run the network actor message loop
    pub async fn run(mut self, mut cmd_rx: mpsc::UnboundedReceiver<NetworkCommand>) {
        loop {
            tokio::select! {
                biased;

                // Handle incoming commands
                cmd = cmd_rx.recv() => {
                    match cmd {
                        Some(NetworkCommand::GenerateQuestions { id, job }) => {
                            let response_tx = self.response_tx.clone();
                            let client = self.client.clone();

                            self.active_requests.spawn(async move {
                                tracing::info!(id, url = client.base_url(), "Generating questions");
                                let response = match client.generate_questions(&job).await {
                                    Ok(questions) => NetworkResponse::QuestionsGenerated { id, questions },
                                    Err(e) => NetworkResponse::Failed {
                                        id,
                                        operation: Operation::GenerateQuestions,
                                        message: e.to_string(),
                                    },
                                };
                                let _ = response_tx.send(response);
                            });
                        }

                        Some(NetworkCommand::EvaluateAnswer { id, request }) => {
                            let response_tx = self.response_tx.clone();
                            let client = self.client.clone();

                            self.active_requests.spawn(async move {
                                tracing::info!(id, "Evaluating answer");
                                let response = match client.evaluate_answer(&request).await {
                                    Ok(feedback) => NetworkResponse::AnswerEvaluated { id, feedback },
                                    Err(e) => NetworkResponse::Failed {
                                        id,
                                        operation: Operation::EvaluateAnswer,
                                        message: e.to_string(),
                                    },
                                };
                                let _ = response_tx.send(response);
                            });
                        }

                        Some(NetworkCommand::CheckHealth) => {
                            let response_tx = self.response_tx.clone();
                            let client = self.client.clone();

                            self.active_requests.spawn(async move {
                                let status = match client.health().await {
                                    Ok(true) => BackendStatus::Online,
                                    Ok(false) => BackendStatus::Offline,
                                    Err(e) => {
                                        tracing::warn!(error = %e, "Health check failed");
                                        BackendStatus::Offline
                                    }
                                };
                                tracing::info!(?status, "Backend health");
                                let _ = response_tx.send(NetworkResponse::Health(status));
                            });
                        }

                        Some(NetworkCommand::Shutdown) | None => break,
                    }
                }

                // Clean up completed tasks
                Some(_result) = self.active_requests.join_next() => {
                    // Task completed - results are sent by the tasks themselves
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExperienceLevel, JobSpec};
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_failure_reported_with_request_id() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/generate-questions"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let (cmd_tx, cmd_rx) = mpsc::unbounded_channel();
        let (resp_tx, mut resp_rx) = mpsc::unbounded_channel();
        let actor = NetworkActor::new(ApiClient::new(server.uri()).unwrap(), resp_tx);
        tokio::spawn(actor.run(cmd_rx));

        let job = JobSpec {
            title: "SRE".into(),
            description: "Keep things up".into(),
            experience_level: ExperienceLevel::Senior,
        };
        cmd_tx.send(NetworkCommand::GenerateQuestions { id: 42, job }).unwrap();

        match resp_rx.recv().await {
            Some(NetworkResponse::Failed { id, operation, .. }) => {
                assert_eq!(id, 42);
                assert_eq!(operation, Operation::GenerateQuestions);
            }
            other => panic!("unexpected response {:?}", other),
        }
        cmd_tx.send(NetworkCommand::Shutdown).unwrap();
    }

    #[tokio::test]
    async fn test_health_offline_when_unreachable() {
        let (cmd_tx, cmd_rx) = mpsc::unbounded_channel();
        let (resp_tx, mut resp_rx) = mpsc::unbounded_channel();
        let actor = NetworkActor::new(ApiClient::new("http://127.0.0.1:9").unwrap(), resp_tx);
        tokio::spawn(actor.run(cmd_rx));

        cmd_tx.send(NetworkCommand::CheckHealth).unwrap();
        assert!(matches!(
            resp_rx.recv().await,
            Some(NetworkResponse::Health(BackendStatus::Offline))
        ));
    }
}
