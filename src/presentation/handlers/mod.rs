mod health;
mod turn;

pub use health::health_handler;
pub use turn::{turn_handler, API_KEY_HEADER};
