/// Number of tokens requested when the caller does not choose one.
pub const DEFAULT_LENGTH: usize = 50;

/// Strategy used to select the first token of a walk.
///
/// # Variants
/// - `Random`: start from a uniformly random key of the table.
/// - `Custom(String)`: start from the given token, falling back to a random
///   key (with a notice) when the token has no successors.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum StartSeed {
	#[default]
	Random,
	Custom(String),
}

impl StartSeed {
	/// Maps an optional user-supplied token to a seed strategy.
	///
	/// Blank or whitespace-only input counts as "not provided".
	pub fn from_option(start: Option<&str>) -> Self {
		match start.map(str::trim) {
			Some(token) if !token.is_empty() => StartSeed::Custom(token.to_owned()),
			_ => StartSeed::Random,
		}
	}

	/// Returns the requested token, if any.
	pub fn as_token(&self) -> Option<&str> {
		match self {
			StartSeed::Random => None,
			StartSeed::Custom(token) => Some(token),
		}
	}
}

/// Parameters of a single generation call.
///
/// # Invariants
/// - `length` is always >= 1
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenerationInput {
	/// Maximum number of tokens in the generated sequence.
	length: usize,

	/// How the first token is chosen.
	pub start_seed: StartSeed,
}

impl Default for GenerationInput {
	fn default() -> Self {
		Self::new(DEFAULT_LENGTH)
	}
}

impl GenerationInput {
	/// Creates an input with a random start. A `length` of 0 is clamped to 1.
	pub fn new(length: usize) -> Self {
		Self {
			length: length.max(1),
			start_seed: StartSeed::Random,
		}
	}

	/// Returns the maximum sequence length.
	pub fn length(&self) -> usize {
		self.length
	}

	/// Sets the maximum sequence length, clamping 0 to 1.
	pub fn set_length(&mut self, length: usize) {
		self.length = length.max(1);
	}

	/// Sets the start token from optional user input.
	pub fn with_start(mut self, start: Option<&str>) -> Self {
		self.start_seed = StartSeed::from_option(start);
		self
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn zero_length_is_clamped() {
		assert_eq!(GenerationInput::new(0).length(), 1);

		let mut input = GenerationInput::default();
		assert_eq!(input.length(), DEFAULT_LENGTH);
		input.set_length(0);
		assert_eq!(input.length(), 1);
	}

	#[test]
	fn blank_start_means_random() {
		assert_eq!(StartSeed::from_option(None), StartSeed::Random);
		assert_eq!(StartSeed::from_option(Some("")), StartSeed::Random);
		assert_eq!(StartSeed::from_option(Some(" \t\n")), StartSeed::Random);
	}

	#[test]
	fn custom_start_is_trimmed() {
		let input = GenerationInput::new(3).with_start(Some("  the "));
		assert_eq!(input.start_seed, StartSeed::Custom("the".to_owned()));
		assert_eq!(input.start_seed.as_token(), Some("the"));
	}
}
