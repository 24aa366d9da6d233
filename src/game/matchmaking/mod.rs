pub mod notices;
mod router;
mod store;

pub use router::{RouterError, SessionRouter};
pub use store::{MatchId, SessionStore};
