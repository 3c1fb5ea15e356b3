//! First-order Markov chain text generation library.
//!
//! This crate provides:
//! - A transition table built from whitespace-tokenized text
//! - A random walk over that table producing bounded-length token sequences
//! - Small I/O helpers for drivers (corpus loading, folder listing)
//!
//! Randomness is always supplied by the caller, so every walk can be
//! reproduced from a seeded generator.

/// Transition table construction and sequence generation.
pub mod model;

/// Error types returned by the generation API.
pub mod error;

/// I/O utilities (corpus loading, path helpers).
///
/// Used by drivers only; nothing in `model` touches the filesystem.
pub mod io;

pub use error::ChainError;
pub use model::chain::{build, TransitionTable};
pub use model::generator::{generate, Generation, Generator, Notice};
