//! __rcasim-lib__ simulates one-dimensional cellular automata under an
//! exact-match neighborhood rule table, and computes a scalar summary of
//! the automaton (the sum of coordinates of active cells) after an
//! arbitrarily large number of generations.
//!
//! For very large generation counts the [`Extrapolator`] detects when the
//! summary metric has entered a steady linear regime and projects the
//! final value analytically instead of simulating every generation.

mod cells;
mod config;
mod error;
mod extrapolate;
mod rules;
mod tape;
mod world;

pub use cells::{Coord, State, ALIVE, DEAD};
pub use config::Config;
pub use error::Error;
pub use extrapolate::{Extrapolator, Status};
pub use rules::{Rule, RuleTable, MAX_RULE_WIDTH};
pub use tape::Tape;
pub use world::World;
