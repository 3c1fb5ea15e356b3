use clap::Parser;

/// Default upper bound on the tokens generated per request.
pub const DEFAULT_MAX_LENGTH: usize = 10_000;

/// HTTP server generating text from a Markov chain built on a corpus file.
#[derive(Parser, Debug, Clone)]
#[command(name = "markov-gen-server", version, about)]
pub struct ServerConfig {
	/// Folder holding `.txt` corpora.
	#[arg(long, default_value = "./data")]
	pub data: String,

	#[arg(long, default_value = "127.0.0.1")]
	pub host: String,

	#[arg(long, default_value_t = 5000)]
	pub port: u16,

	/// Largest `length` accepted by `/v1/generate`.
	#[arg(long, default_value_t = DEFAULT_MAX_LENGTH)]
	pub max_length: usize,

	/// Corpus loaded at startup (file name without extension).
	#[arg(long)]
	pub corpus: Option<String>,
}
