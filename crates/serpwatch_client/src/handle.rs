use std::sync::{mpsc, Arc};
use std::thread;

use serpwatch_logging::{watch_debug, watch_warn};

use crate::{ClientCommand, ClientError, ClientEvent, RemoteSearchClient};

/// Receives completions from the client runtime, on one of its worker threads.
pub trait EventSink: Send + Sync {
    fn emit(&self, event: ClientEvent);
}

pub struct ChannelEventSink {
    tx: mpsc::Sender<ClientEvent>,
}

impl ChannelEventSink {
    pub fn new(tx: mpsc::Sender<ClientEvent>) -> Self {
        Self { tx }
    }
}

impl EventSink for ChannelEventSink {
    fn emit(&self, event: ClientEvent) {
        let _ = self.tx.send(event);
    }
}

/// Runs remote calls on a background tokio runtime.
///
/// Commands run concurrently and each reports exactly one event. Nothing is
/// cancelled; dropping the handle stops the worker and abandons whatever is
/// still outstanding.
pub struct ClientHandle {
    cmd_tx: mpsc::Sender<ClientCommand>,
}

impl ClientHandle {
    pub fn new(
        client: Arc<dyn RemoteSearchClient>,
        sink: Arc<dyn EventSink>,
    ) -> Result<Self, ClientError> {
        let (cmd_tx, cmd_rx) = mpsc::channel::<ClientCommand>();
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .thread_name("serpwatch-client")
            .enable_all()
            .build()
            .map_err(|err| ClientError::Runtime(err.to_string()))?;

        thread::Builder::new()
            .name("serpwatch-dispatch".to_string())
            .spawn(move || {
                while let Ok(command) = cmd_rx.recv() {
                    let client = client.clone();
                    let sink = sink.clone();
                    runtime.spawn(async move {
                        run_command(client.as_ref(), command, sink.as_ref()).await;
                    });
                }
            })
            .map_err(|err| ClientError::Runtime(err.to_string()))?;

        Ok(Self { cmd_tx })
    }

    pub fn dispatch(&self, command: impl Into<ClientCommand>) {
        if self.cmd_tx.send(command.into()).is_err() {
            watch_warn!("Client worker has stopped; command dropped");
        }
    }
}

async fn run_command(
    client: &dyn RemoteSearchClient,
    command: ClientCommand,
    sink: &dyn EventSink,
) {
    let event = match command {
        ClientCommand::Submit { request_id, draft } => {
            let reply = client.submit(&draft).await;
            ClientEvent::SubmitCompleted { request_id, reply }
        }
        ClientCommand::ListHistory { request_id } => {
            let result = client.list_history().await;
            if let Err(err) = &result {
                watch_warn!("Failed to fetch search history: {}", err);
            }
            ClientEvent::HistoryCompleted { request_id, result }
        }
        ClientCommand::FetchResults { search_id } => {
            let result = client.fetch_results(search_id).await;
            if let Err(err) = &result {
                watch_warn!("Failed to fetch results for search ID {}: {}", search_id, err);
            }
            ClientEvent::ResultsCompleted { search_id, result }
        }
    };
    watch_debug!("Client event ready: {}", event_label(&event));
    sink.emit(event);
}

fn event_label(event: &ClientEvent) -> &'static str {
    match event {
        ClientEvent::SubmitCompleted { .. } => "submit",
        ClientEvent::HistoryCompleted { .. } => "history",
        ClientEvent::ResultsCompleted { .. } => "results",
    }
}
