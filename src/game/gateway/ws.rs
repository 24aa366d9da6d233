use super::state::GatewayState;
use crate::game::core::messages::{InboundMessage, OutboundMessage};
use axum::extract::ws::{Message, WebSocket};
use futures_util::stream::{SplitSink, SplitStream};
use futures_util::{SinkExt, StreamExt};
use std::sync::Arc;
use tokio::sync::broadcast;
use tokio::sync::broadcast::error::RecvError;
use tracing::{debug, info, warn};

/// Run one WebSocket connection: inbound frames go to the gateway, and
/// whatever the gateway routes to this connection is written back.
pub async fn handle_connection(socket: WebSocket, state: Arc<GatewayState>) {
    info!("New WebSocket connection");
    let (sender, receiver) = socket.split();
    let (tx, rx) = broadcast::channel::<OutboundMessage>(16);

    let mut send_task = tokio::spawn(send_loop(sender, rx));
    let mut recv_task = tokio::spawn(receive_loop(receiver, tx.clone(), state.clone()));

    // Wait for either side to finish, then stop the other
    tokio::select! {
        _ = &mut send_task => recv_task.abort(),
        _ = &mut recv_task => send_task.abort(),
    }

    state.handle_disconnect(&tx);
    info!("WebSocket connection closed");
}

async fn send_loop(
    mut sender: SplitSink<WebSocket, Message>,
    mut rx: broadcast::Receiver<OutboundMessage>,
) {
    loop {
        let msg = match rx.recv().await {
            Ok(msg) => msg,
            Err(RecvError::Lagged(skipped)) => {
                warn!(skipped, "Connection lagging, outbound messages dropped");
                continue;
            }
            Err(RecvError::Closed) => break,
        };

        debug!(?msg, "Sending message to client");
        let json = match serde_json::to_string(&msg) {
            Ok(json) => json,
            Err(err) => {
                warn!(%err, "Failed to encode outbound message");
                continue;
            }
        };
        if sender.send(Message::Text(json)).await.is_err() {
            break;
        }
    }
}

async fn receive_loop(
    mut receiver: SplitStream<WebSocket>,
    tx: broadcast::Sender<OutboundMessage>,
    state: Arc<GatewayState>,
) {
    while let Some(Ok(msg)) = receiver.next().await {
        let Message::Text(text) = msg else {
            debug!("Received non-text message, ignoring");
            continue;
        };

        debug!(raw = %text, "Received message");

        let Ok(inbound) = serde_json::from_str::<InboundMessage>(&text) else {
            warn!(raw = %text, "Failed to parse inbound message");
            continue;
        };

        state.handle_inbound(inbound, &tx);
    }
}
