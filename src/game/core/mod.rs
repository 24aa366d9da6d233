mod error;
pub mod messages;
mod moves;
pub mod session;

pub use error::MatchError;
pub use moves::{Move, MoveInput};
pub use session::{Match, MoveResult, RoundResult, Slot, Winner};
