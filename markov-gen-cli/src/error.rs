use markov_gen_core::ChainError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failures of the command-line driver.
#[derive(Error, Debug)]
pub enum CliError {
	#[error("The file '{}' was not found.", path.display())]
	FileNotFound { path: PathBuf },

	/// The corpus exists but could not be read.
	#[error("could not read '{}': {source}", path.display())]
	SourceUnavailable {
		path: PathBuf,
		#[source]
		source: io::Error,
	},

	#[error("could not read input: {0}")]
	Prompt(#[source] io::Error),

	#[error("invalid length {0:?}, expected a non-negative integer")]
	InvalidLength(String),

	#[error(transparent)]
	Chain(#[from] ChainError),
}

impl CliError {
	/// Maps a corpus read failure, keeping "not found" distinct.
	pub fn from_read(path: PathBuf, source: io::Error) -> Self {
		if source.kind() == io::ErrorKind::NotFound {
			CliError::FileNotFound { path }
		} else {
			CliError::SourceUnavailable { path, source }
		}
	}
}
