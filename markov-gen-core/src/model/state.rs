use rand::Rng;
use rand::seq::IndexedRandom;

/// Represents one token of a first-order Markov chain.
///
/// A `State` stores every token observed immediately after `key` in the
/// corpus, in order of occurrence. Duplicates are kept: a successor seen
/// three times appears three times, so uniform sampling over the list is
/// biased toward frequent successors.
///
/// ## Invariants
/// - `successors` is never empty once the state is part of a table
#[derive(Clone, Debug)]
pub(crate) struct State {
	/// The token this state describes.
	key: String,
	/// Observed successors, duplicates included.
	/// Example: "the" => ["cat", "mat", "cat"]
	successors: Vec<String>,
}

impl State {
	/// Creates a state holding its first observed successor.
	pub(crate) fn new(key: &str, first: &str) -> Self {
		Self {
			key: key.to_owned(),
			successors: vec![first.to_owned()],
		}
	}

	pub(crate) fn key(&self) -> &str {
		&self.key
	}

	pub(crate) fn successors(&self) -> &[String] {
		&self.successors
	}

	/// Records one more occurrence of `next` following this key.
	pub(crate) fn add_successor(&mut self, next: &str) {
		self.successors.push(next.to_owned());
	}

	/// Picks a successor uniformly over the recorded occurrences.
	///
	/// Returns `None` if the state has no successors.
	pub(crate) fn predict<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&str> {
		self.successors.choose(rng).map(String::as_str)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	#[test]
	fn keeps_duplicate_successors_in_order() {
		let mut state = State::new("the", "cat");
		state.add_successor("mat");
		state.add_successor("cat");

		assert_eq!(state.key(), "the");
		assert_eq!(state.successors(), ["cat", "mat", "cat"]);
	}

	#[test]
	fn predict_only_returns_recorded_successors() {
		let mut state = State::new("a", "b");
		state.add_successor("c");
		let mut rng = StdRng::seed_from_u64(7);

		for _ in 0..100 {
			let next = state.predict(&mut rng);
			assert!(matches!(next, Some("b") | Some("c")));
		}
	}

	#[test]
	fn predict_follows_occurrence_frequency() {
		let mut state = State::new("x", "often");
		for _ in 0..8 {
			state.add_successor("often");
		}
		state.add_successor("rarely");
		let mut rng = StdRng::seed_from_u64(42);

		let often = (0..10_000)
			.filter(|_| state.predict(&mut rng) == Some("often"))
			.count();

		// 9 of 10 occurrences are "often"
		assert!((8_500..9_500).contains(&often), "got {often}");
	}
}
