mod state;
mod ws;

pub use state::GatewayState;
pub use ws::handle_connection;
