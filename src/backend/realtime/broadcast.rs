/**
 * Frame Fan-out
 *
 * This module delivers server frames to live channels. Each channel is the
 * sending half of an unbounded `tokio::sync::mpsc` queue drained by the
 * connection's writer task, so a send never waits on the network.
 *
 * # Closed Channels
 *
 * A send fails only when the connection's receiver is gone. Such channels
 * are reported back to the caller for removal; delivery is never retried.
 */

use tokio::sync::mpsc;
use uuid::Uuid;

use crate::shared::ServerFrame;

/// Sending half of a connection's outbound frame queue
pub type FrameSender = mpsc::UnboundedSender<ServerFrame>;

/// Receiving half of a connection's outbound frame queue
pub type FrameReceiver = mpsc::UnboundedReceiver<ServerFrame>;

/// A live delivery channel for one connection
#[derive(Clone, Debug)]
pub struct ChannelHandle {
    connection_id: Uuid,
    tx: FrameSender,
}

impl ChannelHandle {
    /// Create a channel and the receiver its writer task drains
    pub fn open() -> (Self, FrameReceiver) {
        let (tx, rx) = mpsc::unbounded_channel();
        (
            Self {
                connection_id: Uuid::new_v4(),
                tx,
            },
            rx,
        )
    }

    /// Identifier of the underlying connection
    pub fn connection_id(&self) -> Uuid {
        self.connection_id
    }

    /// Queue a frame; returns false when the connection is gone
    pub fn send(&self, frame: ServerFrame) -> bool {
        match self.tx.send(frame) {
            Ok(()) => true,
            Err(e) => {
                tracing::debug!(
                    "[Realtime] Dropping {} frame for closed connection {}",
                    e.0.kind(),
                    self.connection_id
                );
                false
            }
        }
    }

    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }
}

/// Result of a fan-out
#[derive(Debug, Default, PartialEq, Eq)]
pub struct FanOut {
    /// Channels the frame was queued on
    pub delivered: usize,
    /// (identity, connection) pairs whose channel turned out to be closed
    pub dead: Vec<(Uuid, Uuid)>,
}

/// Send a frame to every channel in `targets`
///
/// # Returns
///
/// The number of channels that accepted the frame and the closed ones the
/// caller should unregister.
pub fn fan_out<'a, I>(targets: I, frame: &ServerFrame) -> FanOut
where
    I: IntoIterator<Item = (&'a Uuid, &'a ChannelHandle)>,
{
    let mut result = FanOut::default();
    for (identity_id, handle) in targets {
        if handle.send(frame.clone()) {
            result.delivered += 1;
        } else {
            result.dead.push((*identity_id, handle.connection_id()));
        }
    }

    if result.delivered > 0 {
        tracing::debug!(
            "[Realtime] {} frame fanned out to {} channels",
            frame.kind(),
            result.delivered
        );
    } else {
        tracing::debug!("[Realtime] No live channels for {} frame", frame.kind());
    }
    result
}
