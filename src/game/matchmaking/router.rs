use super::notices;
use super::store::SessionStore;
use crate::game::core::messages::{InboundMessage, OutboundMessage, SessionEvent};
use crate::game::core::{Match, MatchError, MoveInput, MoveResult};
use thiserror::Error;
use tracing::{debug, info};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouterError {
    #[error(transparent)]
    Match(#[from] MatchError),
}

/// Turns inbound session events into match operations and outbound
/// notifications. Handles one event at a time; callers sharing a router
/// across connections must serialize access to it.
#[derive(Debug)]
pub struct SessionRouter {
    total_rounds: u32,
    store: SessionStore,
}

impl SessionRouter {
    pub fn new(total_rounds: u32) -> Self {
        Self {
            total_rounds,
            store: SessionStore::new(),
        }
    }

    pub fn total_rounds(&self) -> u32 {
        self.total_rounds
    }

    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    pub fn dispatch(&mut self, msg: InboundMessage) -> Result<Vec<OutboundMessage>, RouterError> {
        match msg.session_event {
            Some(SessionEvent::New) => self.session_start(&msg.from_addr),
            None => self.content(&msg.from_addr, msg.content.as_deref()),
            Some(event) => {
                debug!(from_addr = %msg.from_addr, ?event, "Ignoring session event");
                Ok(Vec::new())
            }
        }
    }

    fn session_start(&mut self, address: &str) -> Result<Vec<OutboundMessage>, RouterError> {
        if let Some(game) = self.store.match_for(address) {
            debug!(from_addr = address, "Session start from seated player");
            return Ok(vec![notices::reminder(game, address)]);
        }

        if let Some(match_id) = self.store.join_open_slot(address)? {
            let total_rounds = self
                .store
                .get(match_id)
                .map_or(self.total_rounds, Match::total_rounds);
            info!(%match_id, from_addr = address, "Players matched");
            return Ok(vec![OutboundMessage::new(
                address,
                notices::match_starting(total_rounds),
            )]);
        }

        let game = Match::new(self.total_rounds, address)?;
        let match_id = self.store.open(game);
        info!(%match_id, from_addr = address, "Player waiting for opponent");

        Ok(vec![OutboundMessage::new(address, notices::WAITING)])
    }

    fn content(
        &mut self,
        address: &str,
        content: Option<&str>,
    ) -> Result<Vec<OutboundMessage>, RouterError> {
        let Some(match_id) = self.store.match_id_for(address) else {
            debug!(from_addr = address, "Content from address without a match");
            return Ok(Vec::new());
        };

        let MoveInput::Valid(mv) = MoveInput::parse(content.unwrap_or_default()) else {
            debug!(from_addr = address, ?content, "Ignoring invalid move");
            return Ok(Vec::new());
        };

        let Some(game) = self.store.get_mut(match_id) else {
            return Ok(Vec::new());
        };

        if !game.is_ready() {
            debug!(from_addr = address, "Move before an opponent joined");
            return Ok(Vec::new());
        }

        match game.submit_move(address, mv)? {
            MoveResult::Pending => {
                debug!(%match_id, from_addr = address, "Move pending");
                Ok(Vec::new())
            }
            MoveResult::Resolved(round) => {
                info!(
                    %match_id,
                    round = round.number,
                    winner = ?round.winner,
                    scores = ?round.scores,
                    "Round resolved"
                );
                Ok(notices::round_result(game, &round))
            }
            MoveResult::Complete { round, outcome } => {
                info!(
                    %match_id,
                    scores = ?round.scores,
                    ?outcome,
                    "Match complete"
                );
                let messages = notices::match_over(game, outcome);
                self.store.release(match_id);
                Ok(messages)
            }
        }
    }
}
