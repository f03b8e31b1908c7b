//! Tournament Runner for tic-tac-toe strategies
//!
//! This crate provides infrastructure for:
//! - Single-elimination rounds built from a roster or from the previous
//!   round's survivors
//! - Playing each bracket's matches with alternating first movers
//! - Saving the result artifact and printing reports
//!
//! # Usage
//!
//! ```bash
//! # Run the roster in tournament.toml and write TournamentResults.json
//! cargo run -p tournament -- run --config tournament.toml
//!
//! # Reprint a saved run
//! cargo run -p tournament -- report TournamentResults.json
//! ```

mod bracket;
mod config;
mod error;
mod match_runner;
mod players;
mod registry;
mod results;
mod scheduler;

#[cfg(test)]
mod test_support;

pub use bracket::*;
pub use config::*;
pub use error::TournamentError;
pub use match_runner::*;
pub use players::*;
pub use registry::*;
pub use results::*;
pub use scheduler::*;
