pub mod core;
pub mod gateway;
pub mod matchmaking;

pub use core::messages;
