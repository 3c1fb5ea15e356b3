use super::state::State;
use rand::Rng;
use rand::seq::IndexedRandom;
use std::collections::HashMap;

/// First-order Markov transition table over whitespace-separated tokens.
///
/// Maps each token to the list of tokens observed immediately after it.
/// Keys are kept in first-seen order so that a seeded random source picks
/// the same start token for the same corpus.
///
/// # Responsibilities
/// - Build the table from raw text in a single left-to-right pass
/// - Answer successor lookups without inserting defaults
/// - Pick a uniformly random key or successor from a caller-supplied RNG
///
/// # Invariants
/// - A token is a key iff it occurs at some non-final corpus position
/// - Every successor list holds at least one entry
/// - The table is never modified after `build` returns
#[derive(Clone, Debug, Default)]
pub struct TransitionTable {
	/// Position of each key in `states`
	index: HashMap<String, usize>,

	/// One state per key, in first-seen order
	states: Vec<State>,
}

/// Builds a transition table from `text`.
///
/// Tokens are the substrings between runs of whitespace, kept verbatim
/// (no case folding, no punctuation stripping). Empty text or a single
/// token yields an empty table.
pub fn build(text: &str) -> TransitionTable {
	let mut table = TransitionTable::default();
	let mut tokens = text.split_whitespace();

	if let Some(mut current) = tokens.next() {
		for next in tokens {
			table.add_transition(current, next);
			current = next;
		}
	}

	log::debug!(
		"built transition table: {} keys, {} transitions",
		table.len(),
		table.transition_count()
	);
	table
}

impl TransitionTable {
	/// Records that `next` was observed right after `current`.
	fn add_transition(&mut self, current: &str, next: &str) {
		match self.index.get(current) {
			Some(&i) => self.states[i].add_successor(next),
			None => {
				self.index.insert(current.to_owned(), self.states.len());
				self.states.push(State::new(current, next));
			}
		}
	}

	/// Returns `true` if no transition was observed.
	pub fn is_empty(&self) -> bool {
		self.states.is_empty()
	}

	/// Number of distinct keys.
	pub fn len(&self) -> usize {
		self.states.len()
	}

	/// Total number of successor entries across all keys.
	///
	/// Equals the corpus length minus one for any corpus of two or more tokens.
	pub fn transition_count(&self) -> usize {
		self.states.iter().map(|s| s.successors().len()).sum()
	}

	/// Returns `true` if `token` has at least one recorded successor.
	pub fn contains_key(&self, token: &str) -> bool {
		self.index.contains_key(token)
	}

	/// Iterates over the keys in first-seen order.
	pub fn keys(&self) -> impl Iterator<Item = &str> {
		self.states.iter().map(State::key)
	}

	/// Returns the successor list of `token`, or `None` for a dead end.
	pub fn successors(&self, token: &str) -> Option<&[String]> {
		self.state(token).map(State::successors)
	}

	/// Picks a key uniformly at random.
	///
	/// Returns `None` if the table is empty.
	pub fn random_key<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&str> {
		self.states.choose(rng).map(State::key)
	}

	/// Picks a successor of `token` uniformly over its recorded occurrences.
	///
	/// Returns `None` if `token` is not a key.
	pub fn predict<R: Rng + ?Sized>(&self, token: &str, rng: &mut R) -> Option<&str> {
		self.state(token)?.predict(rng)
	}

	fn state(&self, token: &str) -> Option<&State> {
		self.index.get(token).map(|&i| &self.states[i])
	}
}
