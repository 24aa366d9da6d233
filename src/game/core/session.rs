use super::error::MatchError;
use super::moves::Move;
use std::cmp::Ordering;

/// Which side of a match a player sits on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Player1,
    Player2,
}

/// Winner of a round, or of a whole match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Winner {
    Player1,
    Player2,
    Draw,
}

/// A fully resolved round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundResult {
    pub number: u32,
    pub player_1_move: Move,
    pub player_2_move: Move,
    pub winner: Winner,
    pub scores: (u32, u32),
}

/// What a submitted move did to the match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveResult {
    /// Waiting for the other player's move
    Pending,
    Resolved(RoundResult),
    /// The round just resolved was the last one
    Complete { round: RoundResult, outcome: Winner },
}

fn round_winner(player_1_move: Move, player_2_move: Move) -> Winner {
    match player_1_move.diff(player_2_move) {
        0 => Winner::Draw,
        1 => Winner::Player2,
        _ => Winner::Player1,
    }
}

/// Overall result of a finished match. Equal scores are a draw.
pub fn overall_outcome(scores: (u32, u32)) -> Winner {
    match scores.0.cmp(&scores.1) {
        Ordering::Greater => Winner::Player1,
        Ordering::Less => Winner::Player2,
        Ordering::Equal => Winner::Draw,
    }
}

/// A two-player match over a fixed number of rounds (pure logic, no I/O)
#[derive(Debug, Clone)]
pub struct Match {
    player_1: String,
    player_2: Option<String>,
    scores: (u32, u32),
    pending_move: Option<(Slot, Move)>,
    rounds_played: u32,
    total_rounds: u32,
}

impl Match {
    pub fn new(total_rounds: u32, player_1: impl Into<String>) -> Result<Self, MatchError> {
        if total_rounds == 0 {
            return Err(MatchError::InvalidRounds);
        }

        Ok(Self {
            player_1: player_1.into(),
            player_2: None,
            scores: (0, 0),
            pending_move: None,
            rounds_played: 0,
            total_rounds,
        })
    }

    pub fn join(&mut self, player_2: impl Into<String>) -> Result<(), MatchError> {
        if let Some(existing) = &self.player_2 {
            return Err(MatchError::AlreadyJoined {
                player_2: existing.clone(),
            });
        }
        self.player_2 = Some(player_2.into());
        Ok(())
    }

    pub fn player_1(&self) -> &str {
        &self.player_1
    }

    pub fn player_2(&self) -> Option<&str> {
        self.player_2.as_deref()
    }

    pub fn scores(&self) -> (u32, u32) {
        self.scores
    }

    pub fn pending_move(&self) -> Option<(Slot, Move)> {
        self.pending_move
    }

    pub fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    pub fn total_rounds(&self) -> u32 {
        self.total_rounds
    }

    /// Both players are present
    pub fn is_ready(&self) -> bool {
        self.player_2.is_some()
    }

    pub fn is_complete(&self) -> bool {
        self.rounds_played >= self.total_rounds
    }

    pub fn slot_of(&self, address: &str) -> Option<Slot> {
        if address == self.player_1 {
            Some(Slot::Player1)
        } else if self.player_2.as_deref() == Some(address) {
            Some(Slot::Player2)
        } else {
            None
        }
    }

    pub fn has_player(&self, address: &str) -> bool {
        self.slot_of(address).is_some()
    }

    pub fn address_of(&self, slot: Slot) -> Option<&str> {
        match slot {
            Slot::Player1 => Some(&self.player_1),
            Slot::Player2 => self.player_2.as_deref(),
        }
    }

    pub fn opponent_of(&self, address: &str) -> Option<&str> {
        match self.slot_of(address)? {
            Slot::Player1 => self.player_2.as_deref(),
            Slot::Player2 => Some(&self.player_1),
        }
    }

    /// Submit a move. The first move of a round is held until the other
    /// player answers; a repeated move from the same player replaces it.
    pub fn submit_move(&mut self, address: &str, mv: Move) -> Result<MoveResult, MatchError> {
        let slot = self
            .slot_of(address)
            .ok_or_else(|| MatchError::UnknownPlayer {
                address: address.to_string(),
            })?;

        if self.is_complete() {
            return Err(MatchError::MatchComplete);
        }
        if !self.is_ready() {
            return Err(MatchError::AwaitingOpponent);
        }

        let pending = match self.pending_move {
            Some((pending_slot, pending)) if pending_slot != slot => pending,
            _ => {
                self.pending_move = Some((slot, mv));
                return Ok(MoveResult::Pending);
            }
        };

        let (player_1_move, player_2_move) = match slot {
            Slot::Player1 => (mv, pending),
            Slot::Player2 => (pending, mv),
        };

        let winner = round_winner(player_1_move, player_2_move);
        match winner {
            Winner::Player1 => self.scores.0 += 1,
            Winner::Player2 => self.scores.1 += 1,
            Winner::Draw => {}
        }
        self.rounds_played += 1;
        self.pending_move = None;

        let round = RoundResult {
            number: self.rounds_played,
            player_1_move,
            player_2_move,
            winner,
            scores: self.scores,
        };

        if self.is_complete() {
            Ok(MoveResult::Complete {
                round,
                outcome: overall_outcome(self.scores),
            })
        } else {
            Ok(MoveResult::Resolved(round))
        }
    }
}
