use crate::game::core::messages::{InboundMessage, OutboundMessage};
use crate::game::matchmaking::SessionRouter;
use dashmap::DashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};
use tokio::sync::broadcast;
use tracing::{debug, error};

/// Connects the router to live connections. Every inbound event is handled
/// under one lock, including the sends it produces, so events never
/// interleave.
pub struct GatewayState {
    router: Mutex<SessionRouter>,
    channels: DashMap<String, broadcast::Sender<OutboundMessage>>, // address -> connection
}

impl GatewayState {
    pub fn new(total_rounds: u32) -> Self {
        Self {
            router: Mutex::new(SessionRouter::new(total_rounds)),
            channels: DashMap::new(),
        }
    }

    fn lock_router(&self) -> MutexGuard<'_, SessionRouter> {
        self.router.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Read-only access to the router, for status checks and tests
    pub fn with_router<R>(&self, f: impl FnOnce(&SessionRouter) -> R) -> R {
        let router = self.lock_router();
        f(&router)
    }

    fn register(&self, address: &str, tx: &broadcast::Sender<OutboundMessage>) {
        debug!(address, "Registering address channel");
        self.channels.insert(address.to_string(), tx.clone());
    }

    /// Route one inbound event. `tx` is the connection it arrived on; the
    /// sender's address is bound to it for later deliveries.
    pub fn handle_inbound(&self, msg: InboundMessage, tx: &broadcast::Sender<OutboundMessage>) {
        self.register(&msg.from_addr, tx);
        let from_addr = msg.from_addr.clone();

        let mut router = self.lock_router();
        match router.dispatch(msg) {
            Ok(outbound) => {
                for msg in outbound {
                    self.deliver(msg);
                }
            }
            Err(err) => error!(from_addr, %err, "Router rejected event"),
        }
    }

    fn deliver(&self, msg: OutboundMessage) {
        let Some(tx) = self.channels.get(msg.to_addr.as_str()) else {
            debug!(to_addr = msg.to_addr, "No connection for address, dropping");
            return;
        };
        debug!(to_addr = msg.to_addr, "Delivering message");
        let _ = tx.send(msg);
    }

    /// Forget every address bound to the closed connection. Matches are
    /// left as they are.
    pub fn handle_disconnect(&self, tx: &broadcast::Sender<OutboundMessage>) {
        self.channels.retain(|address, sender| {
            let keep = !sender.same_channel(tx);
            if !keep {
                debug!(address, "Unregistering address channel");
            }
            keep
        });
    }

    pub fn connected_addresses(&self) -> usize {
        self.channels.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pairing_delivers_to_each_sender() {
        let state = GatewayState::new(5);
        let (alice_tx, mut alice_rx) = broadcast::channel(16);
        let (bob_tx, mut bob_rx) = broadcast::channel(16);

        state.handle_inbound(InboundMessage::session_start("alice"), &alice_tx);
        state.handle_inbound(InboundMessage::session_start("bob"), &bob_tx);

        assert_eq!(alice_rx.try_recv().unwrap().to_addr, "alice");
        assert_eq!(bob_rx.try_recv().unwrap().to_addr, "bob");
        assert!(alice_rx.try_recv().is_err());
    }

    #[test]
    fn round_result_reaches_both_connections() {
        let state = GatewayState::new(5);
        let (alice_tx, mut alice_rx) = broadcast::channel(16);
        let (bob_tx, mut bob_rx) = broadcast::channel(16);
        state.handle_inbound(InboundMessage::session_start("alice"), &alice_tx);
        state.handle_inbound(InboundMessage::session_start("bob"), &bob_tx);
        alice_rx.try_recv().unwrap();
        bob_rx.try_recv().unwrap();

        state.handle_inbound(InboundMessage::content("bob", "1"), &bob_tx);
        assert!(alice_rx.try_recv().is_err());
        assert!(bob_rx.try_recv().is_err());

        state.handle_inbound(InboundMessage::content("alice", "2"), &alice_tx);
        assert_eq!(alice_rx.try_recv().unwrap().to_addr, "alice");
        assert_eq!(bob_rx.try_recv().unwrap().to_addr, "bob");
    }

    #[test]
    fn disconnect_drops_only_that_connection() {
        let state = GatewayState::new(5);
        let (alice_tx, _alice_rx) = broadcast::channel(16);
        let (bob_tx, _bob_rx) = broadcast::channel(16);
        state.handle_inbound(InboundMessage::session_start("alice"), &alice_tx);
        state.handle_inbound(InboundMessage::session_start("bob"), &bob_tx);

        state.handle_disconnect(&alice_tx);

        assert_eq!(state.connected_addresses(), 1);
        assert_eq!(state.with_router(|r| r.store().match_count()), 1);
    }

    #[test]
    fn delivery_to_unknown_address_is_dropped() {
        let state = GatewayState::new(5);

        state.deliver(OutboundMessage::new("nobody", "hello"));

        assert_eq!(state.connected_addresses(), 0);
    }
}
