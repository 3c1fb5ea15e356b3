use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::{env, fs, io};

/// Extension of corpus files looked up by name.
pub const CORPUS_EXTENSION: &str = "txt";

/// Reads a whole UTF-8 text file into memory.
pub fn read_corpus<P: AsRef<Path>>(filename: P) -> io::Result<String> {
	let mut contents = String::new();
	File::open(filename)?.read_to_string(&mut contents)?;
	Ok(contents)
}

/// Builds the path of a named corpus inside a folder.
///
/// Example:
/// `data` + `"poems"` → `data/poems.txt`
///
/// # Errors
/// Returns `InvalidInput` if `name` is empty or is not a plain file name.
pub fn corpus_path<P: AsRef<Path>>(folder: P, name: &str) -> io::Result<PathBuf> {
	let stem = Path::new(name);
	if name.is_empty() || stem.file_name() != Some(stem.as_os_str()) {
		return Err(io::Error::new(io::ErrorKind::InvalidInput, format!("Invalid corpus name: {name:?}")));
	}

	let mut output = folder.as_ref().join(name);
	output.set_extension(CORPUS_EXTENSION);
	Ok(output)
}

/// Extracts the base filename without extension.
///
/// Examples:
/// - `"./data/poems.txt"` → `"poems"`
/// - `"poems.txt"` → `"poems"`
pub fn get_filename<P: AsRef<Path>>(input_path: P) -> io::Result<String> {
	let stem = input_path
		.as_ref()
		.file_stem()
		.ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "Path has no filename"))?;

	Ok(stem.to_string_lossy().to_string())
}

/// Normalize a folder path.
///
/// - `"."` or `"./"` resolves to the current working directory
/// - Other paths are returned as-is (not canonicalized)
pub fn normalize_folder(input: &str) -> PathBuf {
	if input == "." || input == "./" {
		env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
	} else {
		PathBuf::from(input)
	}
}

/// Lists the stems of all files with a given extension in a directory.
///
/// Returns names only (no paths, no extension), sorted.
pub fn list_files<P: AsRef<Path>>(dir: P, extension: &str) -> io::Result<Vec<String>> {
	let mut files = Vec::new();

	for entry in fs::read_dir(dir)? {
		let path = entry?.path();

		if path.is_file() && path.extension() == Some(std::ffi::OsStr::new(extension)) {
			files.push(get_filename(&path)?);
		}
	}

	files.sort();
	Ok(files)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn corpus_path_appends_extension() {
		let path = corpus_path("data", "poems").unwrap();
		assert_eq!(path, Path::new("data").join("poems.txt"));
	}

	#[test]
	fn corpus_path_rejects_nested_names() {
		assert!(corpus_path("data", "").is_err());
		assert!(corpus_path("data", "../secret").is_err());
		assert!(corpus_path("data", "a/b").is_err());
	}

	#[test]
	fn filename_is_the_stem() {
		assert_eq!(get_filename("./data/poems.txt").unwrap(), "poems");
		assert_eq!(get_filename("poems.txt").unwrap(), "poems");
	}

	#[test]
	fn lists_only_matching_files() {
		let dir = tempfile::tempdir().unwrap();
		fs::write(dir.path().join("b.txt"), "x y").unwrap();
		fs::write(dir.path().join("a.txt"), "x y").unwrap();
		fs::write(dir.path().join("c.bin"), "x y").unwrap();
		fs::create_dir(dir.path().join("d.txt")).unwrap();

		assert_eq!(list_files(dir.path(), "txt").unwrap(), ["a", "b"]);
	}

	#[test]
	fn reads_whole_file() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("corpus.txt");
		fs::write(&path, "one two\nthree").unwrap();

		assert_eq!(read_corpus(&path).unwrap(), "one two\nthree");
		assert!(read_corpus(dir.path().join("missing.txt")).is_err());
	}
}
