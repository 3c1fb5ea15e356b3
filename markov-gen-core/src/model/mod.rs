//! Top-level module for the Markov chain generation system.
//!
//! - Per-token successor lists (`State`)
//! - The transition table and its builder (`TransitionTable`, `build`)
//! - Generation parameters (`GenerationInput`)
//! - The random walk and its result (`generate`, `Generation`, `Generator`)

/// Transition table keyed by token, built in a single pass over a corpus.
pub mod chain;

/// Random-walk generation over a transition table.
///
/// Handles start token resolution, fallback notices and dead-end termination.
pub mod generator;

/// Generation parameters (length and start seed strategy).
pub mod generation_input;

/// A single entry of the transition table.
///
/// Not exposed publicly.
mod state;
