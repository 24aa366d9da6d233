use thiserror::Error;

/// Contract violations of the `Match` API. Each one is raised before any
/// state is touched.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MatchError {
    #[error("a match needs at least one round")]
    InvalidRounds,

    #[error("match already has a second player ({player_2})")]
    AlreadyJoined { player_2: String },

    #[error("{address} is not playing in this match")]
    UnknownPlayer { address: String },

    #[error("match is still waiting for a second player")]
    AwaitingOpponent,

    #[error("match is already complete")]
    MatchComplete,
}
