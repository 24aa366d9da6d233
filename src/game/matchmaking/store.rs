use crate::game::core::{Match, MatchError};
use std::collections::HashMap;
use std::fmt;
use tracing::debug;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MatchId(Uuid);

impl MatchId {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for MatchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Bookkeeping for live matches: the open slot and which address plays in
/// which match. Both players of a match resolve to the same `MatchId`.
#[derive(Debug, Default)]
pub struct SessionStore {
    matches: HashMap<MatchId, Match>,
    open_slot: Option<MatchId>,
    address_to_match: HashMap<String, MatchId>, // address -> match_id
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open_slot_id(&self) -> Option<MatchId> {
        self.open_slot
    }

    /// The match waiting for a second player, if any
    pub fn open_slot(&self) -> Option<&Match> {
        self.matches.get(&self.open_slot?)
    }

    pub fn match_id_for(&self, address: &str) -> Option<MatchId> {
        self.address_to_match.get(address).copied()
    }

    pub fn match_for(&self, address: &str) -> Option<&Match> {
        self.matches.get(&self.match_id_for(address)?)
    }

    pub fn get(&self, match_id: MatchId) -> Option<&Match> {
        self.matches.get(&match_id)
    }

    pub fn get_mut(&mut self, match_id: MatchId) -> Option<&mut Match> {
        self.matches.get_mut(&match_id)
    }

    pub fn match_count(&self) -> usize {
        self.matches.len()
    }

    pub fn address_count(&self) -> usize {
        self.address_to_match.len()
    }

    /// Store a freshly created match as the open slot
    pub fn open(&mut self, game: Match) -> MatchId {
        let match_id = MatchId::new();
        debug!(%match_id, player_1 = game.player_1(), "Opening slot");

        self.address_to_match
            .insert(game.player_1().to_string(), match_id);
        self.matches.insert(match_id, game);
        self.open_slot = Some(match_id);
        match_id
    }

    /// Seat `address` as the second player of the open slot and close the
    /// slot. Returns `Ok(None)` when nothing is waiting.
    pub fn join_open_slot(&mut self, address: &str) -> Result<Option<MatchId>, MatchError> {
        let Some(match_id) = self.open_slot else {
            return Ok(None);
        };
        let Some(game) = self.matches.get_mut(&match_id) else {
            self.open_slot = None;
            return Ok(None);
        };

        game.join(address)?;

        self.address_to_match.insert(address.to_string(), match_id);
        self.open_slot = None;
        Ok(Some(match_id))
    }

    /// Drop a match and every address pointing at it
    pub fn release(&mut self, match_id: MatchId) -> Option<Match> {
        let game = self.matches.remove(&match_id)?;

        for address in [Some(game.player_1()), game.player_2()].into_iter().flatten() {
            if self.address_to_match.get(address) == Some(&match_id) {
                self.address_to_match.remove(address);
            }
        }
        if self.open_slot == Some(match_id) {
            self.open_slot = None;
        }

        debug!(%match_id, "Released match");
        Some(game)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_store_is_empty() {
        let store = SessionStore::new();

        assert!(store.open_slot().is_none());
        assert_eq!(store.match_count(), 0);
        assert_eq!(store.address_count(), 0);
    }

    #[test]
    fn open_maps_first_player() {
        let mut store = SessionStore::new();

        let match_id = store.open(Match::new(5, "alice").unwrap());

        assert_eq!(store.open_slot_id(), Some(match_id));
        assert_eq!(store.match_id_for("alice"), Some(match_id));
        assert_eq!(store.open_slot().map(Match::player_1), Some("alice"));
    }

    #[test]
    fn join_fills_and_closes_the_slot() {
        let mut store = SessionStore::new();
        let match_id = store.open(Match::new(5, "alice").unwrap());

        let joined = store.join_open_slot("bob").unwrap();

        assert_eq!(joined, Some(match_id));
        assert_eq!(store.open_slot_id(), None);
        assert_eq!(store.match_id_for("alice"), store.match_id_for("bob"));
        assert_eq!(store.get(match_id).and_then(Match::player_2), Some("bob"));
    }

    #[test]
    fn join_without_open_slot_does_nothing() {
        let mut store = SessionStore::new();

        assert_eq!(store.join_open_slot("bob"), Ok(None));
        assert_eq!(store.address_count(), 0);
    }

    #[test]
    fn release_drops_both_addresses() {
        let mut store = SessionStore::new();
        let match_id = store.open(Match::new(5, "alice").unwrap());
        store.join_open_slot("bob").unwrap();

        let released = store.release(match_id);

        assert!(released.is_some());
        assert_eq!(store.match_for("alice").map(Match::player_1), None);
        assert_eq!(store.match_id_for("bob"), None);
        assert_eq!(store.match_count(), 0);
        assert!(store.release(match_id).is_none());
    }

    #[test]
    fn release_of_open_slot_clears_it() {
        let mut store = SessionStore::new();
        let match_id = store.open(Match::new(5, "alice").unwrap());

        store.release(match_id);

        assert_eq!(store.open_slot_id(), None);
        assert_eq!(store.address_count(), 0);
    }
}
