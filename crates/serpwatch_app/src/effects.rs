use std::sync::mpsc;
use std::sync::Arc;

use anyhow::Context;
use serpwatch_client::{ClientEvent, ClientHandle, ClientSettings, EventSink, HttpSearchClient};
use serpwatch_core::{Effect, Msg};
use serpwatch_logging::watch_info;

use crate::ui::commands::UiEvent;

/// Hands core effects to the client runtime and feeds completions back into
/// the dispatch loop as messages.
pub struct EffectRunner {
    client: ClientHandle,
}

impl EffectRunner {
    pub fn new(settings: ClientSettings, event_tx: mpsc::Sender<UiEvent>) -> anyhow::Result<Self> {
        let base_url = settings.base_url.clone();
        let http = HttpSearchClient::new(settings)
            .with_context(|| format!("cannot use search service at {base_url}"))?;
        let client = ClientHandle::new(Arc::new(http), Arc::new(MsgSink { event_tx }))
            .context("failed to start the search client")?;
        watch_info!("Search service at {}", base_url);
        Ok(Self { client })
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match &effect {
                Effect::SubmitSearch { request_id, draft } => {
                    watch_info!(
                        "SubmitSearch request_id={} engine={} top_n={} keyword_len={}",
                        request_id,
                        draft.engine_id,
                        draft.top_n,
                        draft.keyword.len()
                    );
                }
                Effect::LoadHistory { request_id } => {
                    watch_info!("LoadHistory request_id={}", request_id);
                }
                Effect::LoadResults { search_id } => {
                    watch_info!("LoadResults search_id={}", search_id);
                }
            }
            self.client.dispatch(effect);
        }
    }
}

struct MsgSink {
    event_tx: mpsc::Sender<UiEvent>,
}

impl EventSink for MsgSink {
    fn emit(&self, event: ClientEvent) {
        let _ = self.event_tx.send(UiEvent::Msg(Msg::from(event)));
    }
}
