mod config;

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use actix_cors::Cors;
use actix_web::{get, put, web, App, HttpResponse, HttpServer, Responder};
use clap::Parser;
use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use markov_gen_core::io::{corpus_path, list_files, normalize_folder, read_corpus, CORPUS_EXTENSION};
use markov_gen_core::model::generation_input::GenerationInput;
use markov_gen_core::model::generator::{Generation, Generator};

use config::ServerConfig;

/// Query parameters for the `/v1/generate` endpoint
#[derive(Deserialize)]
struct GenerateParams {
	length: Option<usize>,
	start: Option<String>,
	seed: Option<u64>,
}

#[derive(Deserialize)]
struct CorpusQuery {
	name: Option<String>,
}

/// Body of a successful `/v1/generate` call
#[derive(Serialize)]
struct GenerateResponse {
	text: String,
	#[serde(flatten)]
	generation: Generation,
}

/// Body of `/v1/loaded_corpus`
#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct CorpusInfo {
	name: String,
	keys: usize,
	transitions: usize,
}

struct SharedData {
	folder: PathBuf,
	max_length: usize,
	generator: Option<Generator>,
}

impl GenerateParams {
	/// Builds the generation parameters, using the library defaults for missing values.
	fn generation_input(&self) -> GenerationInput {
		let mut input = GenerationInput::default().with_start(self.start.as_deref());
		if let Some(length) = self.length {
			input.set_length(length);
		}
		input
	}

	fn rng(&self) -> StdRng {
		match self.seed {
			Some(seed) => StdRng::seed_from_u64(seed),
			None => StdRng::from_os_rng(),
		}
	}
}

/// Reads `<folder>/<name>.txt` and builds its chain.
fn load_generator(folder: &Path, name: &str) -> std::io::Result<Generator> {
	let path = corpus_path(folder, name)?;
	let text = read_corpus(&path)?;
	let generator = Generator::from_text(name, &text);
	info!(
		"loaded corpus '{}': {} keys, {} transitions",
		name,
		generator.table().len(),
		generator.table().transition_count()
	);
	Ok(generator)
}

/// HTTP GET endpoint `/v1/generate`
///
/// Walks the loaded chain and returns the tokens, the joined text and any notices.
#[get("/v1/generate")]
async fn get_generated(data: web::Data<Mutex<SharedData>>, query: web::Query<GenerateParams>) -> impl Responder {
	let shared_data = match data.lock() {
		Ok(m) => m,
		Err(_) => return HttpResponse::InternalServerError().body("Model lock failed"),
	};

	if let Some(length) = query.length.filter(|&l| l > shared_data.max_length) {
		return HttpResponse::BadRequest().body(format!("length {length} exceeds the limit of {}", shared_data.max_length));
	}

	let generator = match &shared_data.generator {
		Some(g) => g,
		None => return HttpResponse::Conflict().body("No corpus loaded"),
	};

	match generator.predict(&query.generation_input(), &mut query.rng()) {
		Ok(generation) => HttpResponse::Ok().json(GenerateResponse { text: generation.text(), generation }),
		Err(e) => HttpResponse::Conflict().body(e.to_string()),
	}
}

#[get("/v1/corpora")]
async fn get_corpora(data: web::Data<Mutex<SharedData>>) -> impl Responder {
	let folder = match data.lock() {
		Ok(m) => m.folder.clone(),
		Err(_) => return HttpResponse::InternalServerError().body("Model lock failed"),
	};
	match list_files(&folder, CORPUS_EXTENSION) {
		Ok(files) => HttpResponse::Ok().body(files.join("\n")),
		Err(_) => HttpResponse::InternalServerError().body("Failed to list corpora"),
	}
}

#[get("/v1/loaded_corpus")]
async fn get_loaded_corpus(data: web::Data<Mutex<SharedData>>) -> impl Responder {
	let shared_data = match data.lock() {
		Ok(m) => m,
		Err(_) => return HttpResponse::InternalServerError().body("Model lock failed"),
	};
	match &shared_data.generator {
		Some(g) => HttpResponse::Ok().json(CorpusInfo {
			name: g.name().to_owned(),
			keys: g.table().len(),
			transitions: g.table().transition_count(),
		}),
		None => HttpResponse::Conflict().body("No corpus loaded"),
	}
}

#[put("/v1/load_corpus")]
async fn put_corpus(data: web::Data<Mutex<SharedData>>, query: web::Query<CorpusQuery>) -> impl Responder {
	let name = match &query.name {
		Some(s) if !s.trim().is_empty() => s.trim(),
		_ => return HttpResponse::BadRequest().body("Missing or empty corpus name"),
	};

	let folder = match data.lock() {
		Ok(m) => m.folder.clone(),
		Err(_) => return HttpResponse::InternalServerError().body("Model lock failed"),
	};

	// Built without holding the lock
	let generator = match load_generator(&folder, name) {
		Ok(generator) => generator,
		Err(e) if e.kind() == std::io::ErrorKind::InvalidInput => return HttpResponse::BadRequest().body(e.to_string()),
		Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
			return HttpResponse::NotFound().body(format!("Corpus '{name}' not found"));
		}
		Err(e) => return HttpResponse::InternalServerError().body(format!("Failed to load corpus: {e}")),
	};

	match data.lock() {
		Ok(mut m) => {
			m.generator = Some(generator);
			HttpResponse::Ok().body("Corpus loaded successfully")
		}
		Err(_) => HttpResponse::InternalServerError().body("Model lock failed"),
	}
}

fn configure(cfg: &mut web::ServiceConfig) {
	cfg.service(get_generated)
		.service(get_corpora)
		.service(put_corpus)
		.service(get_loaded_corpus);
}

/// Main entry point for the server.
///
/// Optionally preloads a corpus, wraps the shared state in a `Mutex`
/// and starts an Actix-web HTTP server.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

	let config = ServerConfig::parse();
	let folder = normalize_folder(&config.data);
	let generator = match &config.corpus {
		Some(name) => Some(load_generator(&folder, name)?),
		None => None,
	};

	let shared_data = web::Data::new(Mutex::new(SharedData {
		folder,
		max_length: config.max_length,
		generator,
	}));

	info!("listening on {}:{}", config.host, config.port);
	HttpServer::new(move || {
		App::new()
			.wrap(Cors::permissive())
			.app_data(shared_data.clone())
			.configure(configure)
	})
		.bind((config.host.as_str(), config.port))?
		.run()
		.await
}
