use std::sync::{mpsc, Arc, Mutex};
use std::thread;

use client_logging::{client_info, client_warn};
use tokio_util::sync::CancellationToken;

use crate::analyze::{AnalyzeBackend, HttpAnalyzeBackend};
use crate::settings::ServiceSettings;
use crate::types::{AnalyzeError, AnalyzeRequest, ClientEvent, FailureKind};

enum ClientCommand {
    Submit { request: AnalyzeRequest },
}

/// Owns the background runtime that talks to the analysis service.
///
/// Commands go in over a channel and events come back out; the caller
/// polls with [`try_recv`](Self::try_recv). The handle is cheap to clone.
/// [`cancel`](Self::cancel) aborts in-flight work on teardown, settling it
/// as a [`FailureKind::Cancelled`] event.
#[derive(Clone)]
pub struct ClientHandle {
    cmd_tx: mpsc::Sender<ClientCommand>,
    event_rx: Arc<Mutex<mpsc::Receiver<ClientEvent>>>,
    cancel: CancellationToken,
}

impl ClientHandle {
    pub fn new(settings: ServiceSettings) -> Result<Self, AnalyzeError> {
        Ok(Self::with_backend(Arc::new(HttpAnalyzeBackend::new(
            settings,
        )?)))
    }

    /// Wire an alternative backend; used by tests.
    pub fn with_backend(backend: Arc<dyn AnalyzeBackend>) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel::<ClientEvent>();
        let cancel = CancellationToken::new();
        let worker_cancel = cancel.clone();

        thread::spawn(move || {
            let runtime = match tokio::runtime::Runtime::new() {
                Ok(runtime) => runtime,
                Err(err) => {
                    client_warn!("client runtime failed to start: {err}");
                    return;
                }
            };
            while let Ok(command) = cmd_rx.recv() {
                let backend = backend.clone();
                let event_tx = event_tx.clone();
                let cancel = worker_cancel.clone();
                runtime.spawn(async move {
                    handle_command(backend.as_ref(), command, event_tx, cancel).await;
                });
            }
        });

        Self {
            cmd_tx,
            event_rx: Arc::new(Mutex::new(event_rx)),
            cancel,
        }
    }

    pub fn submit(&self, request: AnalyzeRequest) {
        let _ = self.cmd_tx.send(ClientCommand::Submit { request });
    }

    /// Aborts outstanding work. Meant for teardown; the handle stops
    /// accepting useful submissions afterwards.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    pub fn try_recv(&self) -> Option<ClientEvent> {
        self.event_rx.lock().ok()?.try_recv().ok()
    }
}

async fn handle_command(
    backend: &dyn AnalyzeBackend,
    command: ClientCommand,
    event_tx: mpsc::Sender<ClientEvent>,
    cancel: CancellationToken,
) {
    match command {
        ClientCommand::Submit { request } => {
            client_info!(
                "submitting analysis for {} ({} bytes)",
                request.file_name,
                request.resume.len()
            );
            let result = tokio::select! {
                _ = cancel.cancelled() => Err(AnalyzeError::new(
                    FailureKind::Cancelled,
                    "analysis request cancelled",
                )),
                result = backend.analyze(&request) => result,
            };
            let _ = event_tx.send(ClientEvent::Completed { result });
        }
    }
}
