#![allow(dead_code)]

use futures_util::StreamExt;
use roshambo::GatewayState;
use roshambo::messages::{InboundMessage, OutboundMessage};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream, connect_async, tungstenite::Message};

pub type WsStream = WebSocketStream<MaybeTlsStream<tokio::net::TcpStream>>;

const RECV_TIMEOUT: Duration = Duration::from_secs(2);
const QUIET_PERIOD: Duration = Duration::from_millis(150);

pub struct TestServer {
    base_url: String,
    pub gateway: Arc<GatewayState>,
}

impl TestServer {
    pub fn ws_url(&self) -> String {
        format!("{}/ws", self.base_url)
    }
}

pub async fn spawn_test_server(total_rounds: u32) -> TestServer {
    let gateway = Arc::new(GatewayState::new(total_rounds));

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let app = roshambo::app_with_state(gateway.clone());
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    TestServer {
        base_url: format!("ws://{}", addr),
        gateway,
    }
}

pub async fn connect(server: &TestServer) -> WsStream {
    let (ws, _) = connect_async(&server.ws_url()).await.expect("Failed to connect");
    ws
}

fn to_frame(msg: &InboundMessage) -> Message {
    let json = serde_json::to_string(msg).unwrap();
    Message::Text(json.into())
}

pub fn start_msg(from_addr: &str) -> Message {
    to_frame(&InboundMessage::session_start(from_addr))
}

pub fn content_msg(from_addr: &str, content: &str) -> Message {
    to_frame(&InboundMessage::content(from_addr, content))
}

pub async fn recv(ws: &mut WsStream) -> OutboundMessage {
    let msg = tokio::time::timeout(RECV_TIMEOUT, ws.next())
        .await
        .expect("Timed out waiting for a message")
        .unwrap()
        .unwrap();
    serde_json::from_str(msg.to_text().unwrap()).unwrap()
}

/// Assert nothing arrives for a short while
pub async fn assert_silent(ws: &mut WsStream) {
    if let Ok(Some(msg)) = tokio::time::timeout(QUIET_PERIOD, ws.next()).await {
        panic!("Expected no message, got {:?}", msg);
    }
}
