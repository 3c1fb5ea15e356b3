use crate::error::ChainError;
use crate::model::chain::{build, TransitionTable};
use crate::model::generation_input::GenerationInput;
use rand::Rng;
use serde::Serialize;
use std::fmt;

/// Non-fatal event reported alongside a generated sequence.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Notice {
	/// The requested start token has no successors; a random key was used.
	StartNotFound { requested: String },
}

impl fmt::Display for Notice {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Notice::StartNotFound { requested } => write!(
				f,
				"requested start token '{requested}' not found, using random start"
			),
		}
	}
}

/// Result of one random walk.
///
/// Holds at least one token. A sequence shorter than the requested length
/// means the walk reached a dead end, which is a normal outcome.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Generation {
	tokens: Vec<String>,
	notices: Vec<Notice>,
}

impl Generation {
	/// Generated tokens, in walk order.
	pub fn tokens(&self) -> &[String] {
		&self.tokens
	}

	/// Notices raised while resolving the walk.
	pub fn notices(&self) -> &[Notice] {
		&self.notices
	}

	/// Tokens joined with single spaces.
	pub fn text(&self) -> String {
		self.tokens.join(" ")
	}

	/// Number of generated tokens, between 1 and the requested length.
	pub fn len(&self) -> usize {
		self.tokens.len()
	}

	/// Never `true` for a sequence returned by `generate`.
	pub fn is_empty(&self) -> bool {
		self.tokens.is_empty()
	}

	/// Returns `true` if the walk stopped at a dead end before `length` tokens.
	pub fn is_truncated(&self, length: usize) -> bool {
		self.tokens.len() < length.max(1)
	}
}

/// Generates up to `length` tokens by walking `table` from `start`.
///
/// # Behavior
/// - A `length` of 0 is treated as 1.
/// - `start` is trimmed; blank input counts as not provided, so a random
///   key is used and no notice is raised.
/// - `length` only bounds the walk; memory grows with the tokens actually
///   produced, never with the requested length.
/// - If `start` is not a key, a random key is used and a
///   `Notice::StartNotFound` is attached to the result.
/// - Each step picks uniformly over the successor occurrences of the
///   current token; the walk stops early at a token without successors.
///
/// # Errors
/// Returns `ChainError::EmptyChain` if the table has no keys.
pub fn generate<R: Rng + ?Sized>(
	table: &TransitionTable,
	length: usize,
	start: Option<&str>,
	rng: &mut R,
) -> Result<Generation, ChainError> {
	if table.is_empty() {
		return Err(ChainError::EmptyChain);
	}

	let length = length.max(1);
	let mut notices = Vec::new();

	let first = match start.map(str::trim).filter(|s| !s.is_empty()) {
		Some(token) if table.contains_key(token) => token,
		Some(token) => {
			log::warn!("start token '{token}' not found, using random start");
			notices.push(Notice::StartNotFound { requested: token.to_owned() });
			table.random_key(rng).ok_or(ChainError::EmptyChain)?
		}
		None => table.random_key(rng).ok_or(ChainError::EmptyChain)?,
	};

	let mut tokens = Vec::with_capacity(length.min(table.transition_count() + 1));
	tokens.push(first.to_owned());

	let mut current = first;
	for _ in 1..length {
		match table.predict(current, rng) {
			Some(next) => {
				tokens.push(next.to_owned());
				current = next;
			}
			// Dead end
			None => break,
		}
	}

	Ok(Generation { tokens, notices })
}

/// High-level generator owning a named transition table.
///
/// # Responsibilities
/// - Build and hold the table for one corpus
/// - Produce default generation parameters
/// - Run walks with a caller-supplied random source
#[derive(Clone, Debug)]
pub struct Generator {
	name: String,
	table: TransitionTable,
}

impl Generator {
	/// Builds a generator from raw corpus text.
	pub fn from_text(name: &str, text: &str) -> Self {
		Self {
			name: name.to_owned(),
			table: build(text),
		}
	}

	/// Name of the corpus this generator was built from.
	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn table(&self) -> &TransitionTable {
		&self.table
	}

	/// Creates a `GenerationInput` with the default length and a random start.
	pub fn make_generation_input(&self) -> GenerationInput {
		GenerationInput::default()
	}

	/// Generates a sequence according to `input`.
	///
	/// # Errors
	/// Returns `ChainError::EmptyChain` if the corpus produced no transitions.
	pub fn predict<R: Rng + ?Sized>(
		&self,
		input: &GenerationInput,
		rng: &mut R,
	) -> Result<Generation, ChainError> {
		generate(&self.table, input.length(), input.start_seed.as_token(), rng)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rand::rngs::StdRng;
	use rand::{RngCore, SeedableRng};

	/// Random source whose every draw is zero, so every choice picks index 0.
	struct FirstPick;

	impl RngCore for FirstPick {
		fn next_u32(&mut self) -> u32 {
			0
		}

		fn next_u64(&mut self) -> u64 {
			0
		}

		fn fill_bytes(&mut self, dst: &mut [u8]) {
			dst.fill(0);
		}
	}

	const CAT_TEXT: &str = "the cat sat on the mat the cat ran";

	#[test]
	fn walk_from_given_start() {
		let table = build(CAT_TEXT);
		let result = generate(&table, 6, Some("the"), &mut FirstPick).unwrap();

		assert_eq!(result.tokens(), ["the", "cat", "sat", "on", "the", "cat"]);
		assert_eq!(result.text(), "the cat sat on the cat");
		assert!(result.notices().is_empty());
		assert!(!result.is_truncated(6));
	}

	#[test]
	fn empty_table_is_an_error() {
		let table = build("");
		for (length, start) in [(10, None), (0, Some("x")), (1, Some(""))] {
			assert_eq!(
				generate(&table, length, start, &mut FirstPick),
				Err(ChainError::EmptyChain)
			);
		}
	}

	#[test]
	fn zero_length_yields_one_token() {
		let table = build(CAT_TEXT);
		let result = generate(&table, 0, Some("cat"), &mut FirstPick).unwrap();

		assert_eq!(result.tokens(), ["cat"]);
	}

	#[test]
	fn dead_end_stops_the_walk() {
		let table = build("a b");
		let result = generate(&table, 100, Some("a"), &mut FirstPick).unwrap();

		assert_eq!(result.tokens(), ["a", "b"]);
		assert!(result.is_truncated(100));
		assert!(result.notices().is_empty());
	}

	#[test]
	fn huge_length_stops_at_dead_end() {
		let table = build("a b");

		for length in [usize::MAX, 1 << 40] {
			let result = generate(&table, length, Some("a"), &mut StdRng::seed_from_u64(0)).unwrap();
			assert_eq!(result.tokens(), ["a", "b"]);
		}
	}

	#[test]
	fn unknown_start_falls_back_with_notice() {
		let table = build(CAT_TEXT);
		let result = generate(&table, 3, Some("dog"), &mut FirstPick).unwrap();

		// First key in first-seen order
		assert_eq!(result.tokens()[0], "the");
		assert_eq!(
			result.notices(),
			[Notice::StartNotFound { requested: "dog".to_owned() }]
		);
		assert_eq!(
			result.notices()[0].to_string(),
			"requested start token 'dog' not found, using random start"
		);
	}

	#[test]
	fn final_token_is_not_a_valid_start() {
		let table = build(CAT_TEXT);
		let result = generate(&table, 2, Some("ran"), &mut FirstPick).unwrap();

		assert_ne!(result.tokens()[0], "ran");
		assert_eq!(result.notices().len(), 1);
	}

	#[test]
	fn blank_start_is_random_without_notice() {
		let table = build(CAT_TEXT);
		let result = generate(&table, 2, Some("   "), &mut FirstPick).unwrap();

		assert!(table.contains_key(&result.tokens()[0]));
		assert!(result.notices().is_empty());
	}

	#[test]
	fn start_is_trimmed_before_lookup() {
		let table = build(CAT_TEXT);
		let result = generate(&table, 1, Some(" sat\n"), &mut FirstPick).unwrap();

		assert_eq!(result.tokens(), ["sat"]);
		assert!(result.notices().is_empty());
	}

	#[test]
	fn same_seed_same_output() {
		let table = build(CAT_TEXT);
		let a = generate(&table, 20, None, &mut StdRng::seed_from_u64(3)).unwrap();
		let b = generate(&table, 20, None, &mut StdRng::seed_from_u64(3)).unwrap();

		assert_eq!(a, b);
	}

	#[test]
	fn generator_uses_input_parameters() {
		let generator = Generator::from_text("cats", CAT_TEXT);
		let mut input = generator.make_generation_input().with_start(Some("on"));
		input.set_length(3);

		let result = generator.predict(&input, &mut FirstPick).unwrap();

		assert_eq!(generator.name(), "cats");
		assert_eq!(result.tokens(), ["on", "the", "cat"]);
	}
}
