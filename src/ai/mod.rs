mod agent;
mod random;
pub mod state_encoding;

pub use agent::Agent;
pub use random::RandomAgent;
pub use state_encoding::{encode_board, CHANNELS};
