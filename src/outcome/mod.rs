//! The two-armed outcome type: construction, observation, and extraction.

mod constructors;
mod extract;
mod types;

pub use types::Outcome;
