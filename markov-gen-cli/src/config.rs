use clap::Parser;
use std::path::PathBuf;

/// Number of tokens generated when `--length` is not given.
pub const DEFAULT_CLI_LENGTH: usize = 100;

/// Generate pseudo-random text from a first-order Markov chain.
#[derive(Parser, Debug)]
#[command(name = "markov-gen", version, about)]
pub struct Args {
	/// Corpus text file. Prompted for when omitted.
	pub file: Option<PathBuf>,

	/// Maximum number of words to generate (0 is treated as 1).
	#[arg(short = 'n', long, default_value_t = DEFAULT_CLI_LENGTH)]
	pub length: usize,

	/// Word to start from. A random word is used when it has no successors.
	#[arg(short, long)]
	pub start: Option<String>,

	/// Seed for a reproducible run.
	#[arg(long)]
	pub seed: Option<u64>,

	/// Prompt for the start word and length.
	#[arg(short, long)]
	pub interactive: bool,

	/// Report how long building and generation took.
	#[arg(long)]
	pub timing: bool,
}
