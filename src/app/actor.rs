//! App actor - message loop processing UI events and network responses

use tokio::sync::mpsc;

use crate::app::state::AppState;
use crate::messages::{NetworkCommand, NetworkResponse, RenderState, UiEvent};

/// App actor that processes UI events and network responses
pub struct AppActor {
    state: AppState,
    network_tx: mpsc::UnboundedSender<NetworkCommand>,
    render_tx: mpsc::UnboundedSender<RenderState>,
}

impl AppActor {
    pub fn new(
        state: AppState,
        network_tx: mpsc::UnboundedSender<NetworkCommand>,
        render_tx: mpsc::UnboundedSender<RenderState>,
    ) -> Self {
        AppActor {
            state,
            network_tx,
            render_tx,
        }
    }

    /// Run the actor message loop
    pub async fn run(
        mut self,
        mut ui_rx: mpsc::UnboundedReceiver<UiEvent>,
        mut net_rx: mpsc::UnboundedReceiver<NetworkResponse>,
    ) {
        // Send initial render state
        let _ = self.render_tx.send(self.state.to_render_state());

        loop {
            tokio::select! {
                Some(event) = ui_rx.recv() => {
                    if self.handle_ui_event(event) {
                        // Quit signal received
                        let _ = self.network_tx.send(NetworkCommand::Shutdown);
                        break;
                    }
                    let _ = self.render_tx.send(self.state.to_render_state());
                }
                Some(response) = net_rx.recv() => {
                    self.state.handle_response(response);
                    let _ = self.render_tx.send(self.state.to_render_state());
                }
                else => break,
            }
        }
    }

    /// Handle a UI event, returns true if quit was requested
    fn handle_ui_event(&mut self, event: UiEvent) -> bool {
        match event {
            // Field navigation
            UiEvent::NextField => self.state.next_field(),
            UiEvent::PrevField => self.state.prev_field(),
            UiEvent::NextLevel => self.state.next_level(),
            UiEvent::PrevLevel => self.state.prev_level(),

            // Input editing
            UiEvent::StartEditing => self.state.start_editing(),
            UiEvent::StopEditing => self.state.stop_editing(),
            UiEvent::CharInput(c) => self.state.enter_char(c),
            UiEvent::Newline => self.state.enter_char('\n'),
            UiEvent::Backspace => self.state.delete_char(),
            UiEvent::CursorLeft => self.state.move_cursor_left(),
            UiEvent::CursorRight => self.state.move_cursor_right(),

            // Session transitions
            UiEvent::GenerateQuestions => {
                if let Some(cmd) = self.state.generate_questions() {
                    let _ = self.network_tx.send(cmd);
                }
            }
            UiEvent::StartPractice => self.state.start_practice(),
            UiEvent::SubmitAnswer => {
                if let Some(cmd) = self.state.submit_answer() {
                    let _ = self.network_tx.send(cmd);
                }
            }
            UiEvent::Advance => self.state.advance(),
            UiEvent::Restart => self.state.restart(),

            // Scrolling
            UiEvent::ScrollUp => self.state.scroll_up(),
            UiEvent::ScrollDown => self.state.scroll_down(),

            // Popups
            UiEvent::ToggleHelp => self.state.toggle_help(),
            UiEvent::CloseHelp => self.state.close_help(),

            // System
            UiEvent::Quit => return true,
        }

        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::session::Screen;
    use crate::messages::network::Operation;
    use crate::models::Question;

    struct Harness {
        ui_tx: mpsc::UnboundedSender<UiEvent>,
        resp_tx: mpsc::UnboundedSender<NetworkResponse>,
        cmd_rx: mpsc::UnboundedReceiver<NetworkCommand>,
        render_rx: mpsc::UnboundedReceiver<RenderState>,
    }

    impl Harness {
        fn start() -> Self {
            let (ui_tx, ui_rx) = mpsc::unbounded_channel();
            let (resp_tx, resp_rx) = mpsc::unbounded_channel();
            let (cmd_tx, cmd_rx) = mpsc::unbounded_channel();
            let (render_tx, render_rx) = mpsc::unbounded_channel();
            let actor = AppActor::new(AppState::default(), cmd_tx, render_tx);
            tokio::spawn(actor.run(ui_rx, resp_rx));
            Harness { ui_tx, resp_tx, cmd_rx, render_rx }
        }

        /// Send an event and wait for the render it produces
        async fn send(&mut self, event: UiEvent) -> RenderState {
            self.ui_tx.send(event).unwrap();
            self.next_render().await
        }

        async fn respond(&mut self, response: NetworkResponse) -> RenderState {
            self.resp_tx.send(response).unwrap();
            self.next_render().await
        }

        async fn next_render(&mut self) -> RenderState {
            self.render_rx.recv().await.expect("actor stopped")
        }

        async fn type_text(&mut self, text: &str) {
            self.send(UiEvent::StartEditing).await;
            for c in text.chars() {
                self.send(UiEvent::CharInput(c)).await;
            }
            self.send(UiEvent::StopEditing).await;
        }
    }

    #[tokio::test]
    async fn test_empty_job_never_reaches_network() {
        let mut h = Harness::start();
        let initial = h.next_render().await;
        assert_eq!(initial.screen, Screen::Input);

        let render = h.send(UiEvent::GenerateQuestions).await;
        assert_eq!(render.screen, Screen::Input);
        assert!(render.error.is_some());
        assert!(h.cmd_rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_generate_then_fail_then_quit() {
        let mut h = Harness::start();
        h.next_render().await;

        h.type_text("Backend Engineer").await;
        h.send(UiEvent::NextField).await;
        h.send(UiEvent::NextField).await;
        h.type_text("Owns the billing service").await;

        let render = h.send(UiEvent::GenerateQuestions).await;
        assert!(render.is_loading);
        let id = match h.cmd_rx.recv().await {
            Some(NetworkCommand::GenerateQuestions { id, job }) => {
                assert_eq!(job.description, "Owns the billing service");
                id
            }
            other => panic!("unexpected command {:?}", other),
        };

        let render = h
            .respond(NetworkResponse::Failed {
                id,
                operation: Operation::GenerateQuestions,
                message: "HTTP 500".into(),
            })
            .await;
        assert_eq!(render.screen, Screen::Input);
        assert!(!render.is_loading);
        assert_eq!(render.job.title, "Backend Engineer");

        let render = h
            .respond(NetworkResponse::QuestionsGenerated {
                id,
                questions: vec![Question {
                    text: "late".into(),
                    category: "technical".into(),
                    difficulty: "easy".into(),
                }],
            })
            .await;
        assert_eq!(render.screen, Screen::Input);

        h.ui_tx.send(UiEvent::Quit).unwrap();
        assert!(matches!(h.cmd_rx.recv().await, Some(NetworkCommand::Shutdown)));
    }
}
