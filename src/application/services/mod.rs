pub mod persona_policy;
mod turn_service;

pub use turn_service::{Stage, TurnError, TurnOutcome, TurnRequest, TurnService};
