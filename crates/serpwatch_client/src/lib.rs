//! Serpwatch client: typed access to the search service and the background
//! runtime that executes core effects.
mod client;
mod handle;
mod types;
mod wire;

pub use client::{ClientSettings, HttpSearchClient, RemoteSearchClient, DEFAULT_BASE_URL};
pub use handle::{ChannelEventSink, ClientHandle, EventSink};
pub use types::{ClientCommand, ClientError, ClientEvent};
