mod config;
mod error;

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;
use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;

use markov_gen_core::io::{get_filename, read_corpus};
use markov_gen_core::model::generation_input::{GenerationInput, StartSeed};
use markov_gen_core::model::generator::Generator;

use config::Args;
use error::CliError;

fn main() -> ExitCode {
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

	match run(Args::parse()) {
		Ok(()) => ExitCode::SUCCESS,
		Err(e) => {
			eprintln!("Error: {e}");
			ExitCode::FAILURE
		}
	}
}

fn run(args: Args) -> Result<(), CliError> {
	let stdin = io::stdin();
	let mut input = stdin.lock();

	let filename = match args.file {
		Some(path) => path,
		None => PathBuf::from(prompt(&mut input, "Enter the name of the text file (e.g., 'sample.txt'): ")?),
	};
	let text = read_corpus(&filename).map_err(|e| CliError::from_read(filename.clone(), e))?;

	let mut generation_input = GenerationInput::new(args.length).with_start(args.start.as_deref());
	if args.interactive {
		ask_parameters(&mut input, &mut generation_input)?;
	}

	let started = Instant::now();
	let name = get_filename(&filename).unwrap_or_else(|_| "corpus".to_owned());
	let generator = Generator::from_text(&name, &text);
	let built_in = started.elapsed();
	info!(
		"'{}': {} words with successors, {} transitions",
		generator.name(),
		generator.table().len(),
		generator.table().transition_count()
	);

	let mut rng = match args.seed {
		Some(seed) => StdRng::seed_from_u64(seed),
		None => StdRng::from_os_rng(),
	};

	let started = Instant::now();
	let generation = generator.predict(&generation_input, &mut rng)?;
	let generated_in = started.elapsed();

	for notice in generation.notices() {
		eprintln!("Note: {notice}");
	}
	if generation.is_truncated(generation_input.length()) {
		info!("walk reached a dead end after {} words", generation.len());
	}

	println!("\n--- Generated Text ---");
	println!("{}", generation.text());

	if args.timing {
		eprintln!("Chain built in {built_in:.2?}, text generated in {generated_in:.2?}");
	}

	Ok(())
}

/// Asks for the start word and length, keeping current values on blank answers.
fn ask_parameters<R: BufRead>(input: &mut R, generation_input: &mut GenerationInput) -> Result<(), CliError> {
	let start = prompt(input, "Enter a starting word (leave blank for random): ")?;
	if !start.is_empty() {
		generation_input.start_seed = StartSeed::from_option(Some(&start));
	}

	let message = format!("Enter the number of words to generate [{}]: ", generation_input.length());
	let length = prompt(input, &message)?;
	if !length.is_empty() {
		let parsed = length.parse().map_err(|_| CliError::InvalidLength(length.clone()))?;
		generation_input.set_length(parsed);
	}

	Ok(())
}

/// Prints `message` and reads one trimmed line. End of input reads as blank.
fn prompt<R: BufRead>(input: &mut R, message: &str) -> Result<String, CliError> {
	print!("{message}");
	io::stdout().flush().map_err(CliError::Prompt)?;

	let mut line = String::new();
	input.read_line(&mut line).map_err(CliError::Prompt)?;
	Ok(line.trim().to_owned())
}
