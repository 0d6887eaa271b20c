//! Decode raw workout sensor packages and compute distance, mean speed
//! and calorie summaries for running, walking and swimming.

pub mod cli;
pub mod formula;
pub mod message;
pub mod package;
pub mod types;
pub mod utils;
