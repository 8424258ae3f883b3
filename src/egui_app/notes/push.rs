//! Push Channel Client
//!
//! Long-lived subscription to the server's note update stream. A dedicated
//! thread holds the connection, parses SSE frames, and forwards `notesUpdate`
//! payloads and connection status over channels polled by the UI each frame.
//!
//! Reconnection is bounded: up to `reconnect_attempts` consecutive failures,
//! with a delay that starts at `reconnect_delay` and doubles per attempt.
//! A successful connect resets the budget.

use crate::egui_app::config::Config;
use crate::shared::event::{ConnectionStatus, PushEvent, EVENT_REQUEST_NOTES_UPDATE};
use futures_util::StreamExt;
use reqwest::Client;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use tokio::runtime::Runtime;

/// Cap on the doubling reconnect delay
const MAX_RECONNECT_DELAY: std::time::Duration = std::time::Duration::from_secs(30);

/// Push channel client for note list updates
#[derive(Debug)]
pub struct PushClient {
    config: Config,
    subscription_thread: Option<thread::JoinHandle<()>>,
    event_receiver: Receiver<PushEvent>,
    status_receiver: Receiver<ConnectionStatus>,
}

impl PushClient {
    /// Create the client and start the subscription thread
    pub fn connect(config: Config) -> Self {
        let (event_tx, event_rx) = mpsc::channel();
        let (status_tx, status_rx) = mpsc::channel();

        let thread_config = config.clone();
        let thread = thread::spawn(move || {
            subscribe_to_stream(thread_config, event_tx, status_tx);
        });

        Self {
            config,
            subscription_thread: Some(thread),
            event_receiver: event_rx,
            status_receiver: status_rx,
        }
    }

    /// Drain pending events (non-blocking)
    pub fn poll_events(&self) -> Vec<PushEvent> {
        let mut events = Vec::new();
        while let Ok(event) = self.event_receiver.try_recv() {
            events.push(event);
        }
        events
    }

    /// Poll the latest connection status update (non-blocking)
    pub fn poll_status(&self) -> Option<ConnectionStatus> {
        self.status_receiver.try_recv().ok()
    }

    /// Whether the subscription thread is still running
    pub fn is_running(&self) -> bool {
        self.subscription_thread
            .as_ref()
            .map(|t| !t.is_finished())
            .unwrap_or(false)
    }

    /// Emit the client-originated `requestNotesUpdate` event.
    ///
    /// Fire-and-forget: the refreshed list arrives back on the stream.
    pub fn request_refresh(&self) {
        let url = self
            .config
            .events_url(&format!("/events/{}", EVENT_REQUEST_NOTES_UPDATE));
        let timeout = self.config.request_timeout();

        thread::spawn(move || {
            let rt = match Runtime::new() {
                Ok(rt) => rt,
                Err(e) => {
                    tracing::error!("[PUSH] Failed to create runtime for refresh: {}", e);
                    return;
                }
            };
            rt.block_on(async {
                let client = Client::new();
                match client.post(&url).timeout(timeout).send().await {
                    Ok(resp) if resp.status().is_success() => {
                        tracing::debug!("[PUSH] Refresh requested");
                    }
                    Ok(resp) => {
                        tracing::warn!("[PUSH] Refresh request rejected: {}", resp.status());
                    }
                    Err(e) => {
                        tracing::warn!("[PUSH] Refresh request failed: {}", e);
                    }
                }
            });
        });
    }
}

/// Subscribe to the SSE event stream, reconnecting within the attempt budget
fn subscribe_to_stream(
    config: Config,
    event_sender: Sender<PushEvent>,
    status_sender: Sender<ConnectionStatus>,
) {
    let rt = match Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            tracing::error!("[PUSH] Failed to create runtime for subscription: {}", e);
            let _ = status_sender.send(ConnectionStatus::Error(format!("runtime: {}", e)));
            return;
        }
    };

    rt.block_on(async {
        let url = config.events_url("/events");
        let max_attempts = config.reconnect_attempts().max(1);
        let initial_delay = config.reconnect_delay();
        let mut reconnect_delay = initial_delay;
        let mut failed_attempts: u32 = 0;

        loop {
            tracing::info!("[PUSH] Subscribing to event stream: {}", url);
            let _ = status_sender.send(ConnectionStatus::Connecting);

            // Connect timeout only; the stream itself stays open indefinitely
            let client = match Client::builder()
                .connect_timeout(config.request_timeout())
                .build()
            {
                Ok(client) => client,
                Err(e) => {
                    tracing::error!("[PUSH] Failed to build HTTP client: {}", e);
                    let _ = status_sender.send(ConnectionStatus::Error(format!("client: {}", e)));
                    return;
                }
            };
            let request = client.get(&url).header("Accept", "text/event-stream");

            let response = match request.send().await {
                Ok(resp) => resp,
                Err(e) => {
                    tracing::warn!("[PUSH] Connection failed: {}", e);
                    let _ = status_sender.send(ConnectionStatus::Error(format!("network: {}", e)));
                    failed_attempts += 1;
                    if failed_attempts >= max_attempts {
                        tracing::error!("[PUSH] Reconnect budget exhausted, giving up");
                        let _ = status_sender.send(ConnectionStatus::Disconnected);
                        return;
                    }
                    let _ = status_sender.send(ConnectionStatus::Retrying);
                    tokio::time::sleep(reconnect_delay).await;
                    reconnect_delay = std::cmp::min(reconnect_delay * 2, MAX_RECONNECT_DELAY);
                    continue;
                }
            };

            if !response.status().is_success() {
                tracing::warn!("[PUSH] Subscription rejected: {}", response.status());
                let _ = status_sender
                    .send(ConnectionStatus::Error(format!("http: {}", response.status())));
                failed_attempts += 1;
                if failed_attempts >= max_attempts {
                    tracing::error!("[PUSH] Reconnect budget exhausted, giving up");
                    let _ = status_sender.send(ConnectionStatus::Disconnected);
                    return;
                }
                let _ = status_sender.send(ConnectionStatus::Retrying);
                tokio::time::sleep(reconnect_delay).await;
                reconnect_delay = std::cmp::min(reconnect_delay * 2, MAX_RECONNECT_DELAY);
                continue;
            }

            tracing::info!("[PUSH] Event stream established");
            let _ = status_sender.send(ConnectionStatus::Connected);
            failed_attempts = 0;
            reconnect_delay = initial_delay;

            let mut stream = response.bytes_stream();
            let mut parser = SseParser::new();

            while let Some(chunk_result) = stream.next().await {
                match chunk_result {
                    Ok(chunk) => {
                        let chunk_str = match std::str::from_utf8(&chunk) {
                            Ok(s) => s,
                            Err(e) => {
                                tracing::error!("[PUSH] Invalid UTF-8 in event stream: {}", e);
                                break;
                            }
                        };

                        for event in parser.feed(chunk_str) {
                            tracing::debug!("[PUSH] Received event: {:?}", event);
                            if event_sender.send(event).is_err() {
                                // UI side dropped the receiver; stop for good
                                tracing::info!("[PUSH] Event receiver dropped, stopping");
                                return;
                            }
                        }
                    }
                    Err(e) => {
                        tracing::error!("[PUSH] Error reading event stream: {}", e);
                        let _ = status_sender.send(ConnectionStatus::Error(format!("stream: {}", e)));
                        break;
                    }
                }
            }

            // A clean close (server restart, proxy timeout) reconnects the
            // same as an errored one; the budget is the only terminal path.
            failed_attempts += 1;
            if failed_attempts >= max_attempts {
                tracing::error!("[PUSH] Reconnect budget exhausted, giving up");
                let _ = status_sender.send(ConnectionStatus::Disconnected);
                return;
            }
            tracing::warn!("[PUSH] Connection lost, will reconnect");
            let _ = status_sender.send(ConnectionStatus::Retrying);
            tokio::time::sleep(reconnect_delay).await;
            reconnect_delay = std::cmp::min(reconnect_delay * 2, MAX_RECONNECT_DELAY);
        }
    });
}

/// Incremental SSE frame parser.
///
/// Accumulates `event:` and `data:` lines; a blank line dispatches the frame.
/// Unknown event names and comment lines are ignored.
struct SseParser {
    buffer: String,
    event_name: String,
    data: String,
}

impl SseParser {
    fn new() -> Self {
        Self {
            buffer: String::new(),
            event_name: String::new(),
            data: String::new(),
        }
    }

    /// Feed a chunk of stream text, returning any completed events
    fn feed(&mut self, chunk: &str) -> Vec<PushEvent> {
        self.buffer.push_str(chunk);
        let mut events = Vec::new();

        while let Some(newline_pos) = self.buffer.find('\n') {
            let line = self.buffer[..newline_pos].trim_end_matches('\r').to_string();
            self.buffer = self.buffer[newline_pos + 1..].to_string();

            if line.is_empty() {
                // Frame boundary
                if !self.data.is_empty() {
                    match PushEvent::parse(&self.event_name, &self.data) {
                        Ok(Some(event)) => events.push(event),
                        Ok(None) => {
                            tracing::debug!("[PUSH] Ignoring event '{}'", self.event_name);
                        }
                        Err(e) => {
                            tracing::warn!(
                                "[PUSH] Failed to parse '{}' payload: {}",
                                self.event_name,
                                e
                            );
                        }
                    }
                }
                self.event_name.clear();
                self.data.clear();
                continue;
            }

            if line.starts_with(':') {
                continue;
            }

            if let Some(name) = line.strip_prefix("event:") {
                self.event_name = name.strip_prefix(' ').unwrap_or(name).to_string();
            } else if let Some(data) = line.strip_prefix("data:") {
                if !self.data.is_empty() {
                    self.data.push('\n');
                }
                // At most one space separates the field name from the value
                self.data.push_str(data.strip_prefix(' ').unwrap_or(data));
            }
        }

        events
    }
}
