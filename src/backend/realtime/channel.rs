/**
 * WebSocket Channel
 *
 * This module serves `GET /ws`, the persistent channel clients use to
 * receive presence, chat and approval frames and to send chat messages.
 *
 * # Connection Lifecycle
 *
 * 1. Upgrade; the connection gets a `ChannelHandle` and a writer task that
 *    drains its frame queue into the socket
 * 2. Client sends `register` with its session token; the server answers
 *    `welcome` and the presence directory announces the identity online
 * 3. Client sends `chat` frames; each is routed and acknowledged
 * 4. On close the identity is unregistered, unless a newer connection has
 *    already replaced this one
 *
 * # Errors
 *
 * A frame that cannot be decoded or processed is answered with an `error`
 * frame. The connection stays open.
 */

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        State,
    },
    response::Response,
};
use futures_util::{SinkExt, StreamExt};
use std::time::Duration;
use tokio::time::timeout;
use uuid::Uuid;

use crate::backend::error::{BackendError, BackendResult};
use crate::backend::realtime::broadcast::{ChannelHandle, FrameReceiver};
use crate::backend::server::state::AppState;
use crate::shared::{ClientFrame, ServerFrame};

/// How long a closing connection may spend flushing queued frames
const WRITER_DRAIN: Duration = Duration::from_secs(2);

/// Upgrade handler for `GET /ws`
pub async fn handle_channel_upgrade(ws: WebSocketUpgrade, State(state): State<AppState>) -> Response {
    ws.on_upgrade(move |socket| run_channel(socket, state))
}

/// Drive one connection until the client goes away
async fn run_channel(socket: WebSocket, state: AppState) {
    let (handle, frames) = ChannelHandle::open();
    let connection_id = handle.connection_id();
    tracing::info!("[Channel] Connection {} opened", connection_id);

    let (sink, mut stream) = socket.split();
    let mut writer = tokio::spawn(write_frames(sink, frames, connection_id));

    let mut session = ChannelSession::new(state, handle);
    while let Some(message) = stream.next().await {
        match message {
            Ok(Message::Text(text)) => session.handle_text(text.as_str()).await,
            Ok(Message::Binary(data)) => {
                tracing::warn!(
                    "[Channel] Unexpected binary frame on {} ({} bytes)",
                    connection_id,
                    data.len()
                );
                session.reject(BackendError::protocol("binary frames are not supported"));
            }
            Ok(Message::Ping(_)) | Ok(Message::Pong(_)) => {}
            Ok(Message::Close(frame)) => {
                tracing::debug!("[Channel] Connection {} closed by client: {:?}", connection_id, frame);
                break;
            }
            Err(e) => {
                tracing::warn!("[Channel] Connection {} failed: {}", connection_id, e);
                break;
            }
        }
    }

    // dropping the session drops the last sender, so the writer flushes and exits
    session.close().await;
    if timeout(WRITER_DRAIN, &mut writer).await.is_err() {
        tracing::debug!(
            "[Channel] Writer for {} still busy after {:?}; dropping queued frames",
            connection_id,
            WRITER_DRAIN
        );
        writer.abort();
    }
    tracing::info!("[Channel] Connection {} closed", connection_id);
}

/// Forward queued frames to the socket until the queue or the socket closes
async fn write_frames<S>(mut sink: S, mut frames: FrameReceiver, connection_id: Uuid)
where
    S: futures_util::Sink<Message> + Unpin,
    S::Error: std::fmt::Display,
{
    while let Some(frame) = frames.recv().await {
        let text = match frame.encode() {
            Ok(text) => text,
            Err(e) => {
                tracing::error!("[Channel] Could not encode {} frame: {}", frame.kind(), e);
                continue;
            }
        };
        if let Err(e) = sink.send(Message::Text(text.into())).await {
            tracing::debug!("[Channel] Write to {} failed: {}", connection_id, e);
            break;
        }
    }
}

/// Per-connection protocol state
pub struct ChannelSession {
    state: AppState,
    handle: ChannelHandle,
    registered: Option<Uuid>,
}

impl ChannelSession {
    pub fn new(state: AppState, handle: ChannelHandle) -> Self {
        Self {
            state,
            handle,
            registered: None,
        }
    }

    /// Identity this connection registered as, if any
    pub fn registered(&self) -> Option<Uuid> {
        self.registered
    }

    /// Process one text frame; failures become an `error` frame
    pub async fn handle_text(&mut self, text: &str) {
        let result = match ClientFrame::decode(text) {
            Ok(frame) => self.dispatch(frame).await,
            Err(e) => Err(BackendError::protocol(format!("malformed frame: {}", e))),
        };

        if let Err(e) = result {
            self.reject(e);
        }
    }

    fn reject(&self, err: BackendError) {
        tracing::debug!("[Channel] Rejected frame on {}: {}", self.handle.connection_id(), err);
        self.handle.send(ServerFrame::from(err));
    }

    async fn dispatch(&mut self, frame: ClientFrame) -> BackendResult<()> {
        match frame {
            ClientFrame::Register { token } => self.register(&token).await,
            ClientFrame::Chat { token, to_id, text } => {
                let from_id = self.state.sessions.resolve_member(&token).await?;
                self.state
                    .router
                    .route(from_id, to_id, &text, Some(&self.handle))
                    .await?;
                Ok(())
            }
        }
    }

    async fn register(&mut self, token: &str) -> BackendResult<()> {
        let id = self.state.sessions.resolve_member(token).await?;
        let identity = self.state.identities.require(id).await?;

        // re-registering this connection under another identity frees the old slot
        if let Some(previous) = self.registered.filter(|previous| *previous != id) {
            self.state
                .presence
                .unregister(previous, self.handle.connection_id())
                .await;
        }

        self.handle.send(ServerFrame::Welcome {
            identity: identity.summary(true),
        });
        self.state.presence.register(id, self.handle.clone()).await;
        self.registered = Some(id);
        Ok(())
    }

    /// Release the presence slot held by this connection
    pub async fn close(self) {
        if let Some(id) = self.registered {
            self.state
                .presence
                .unregister(id, self.handle.connection_id())
                .await;
        }
    }
}
