use std::{
	fs, io,
	path::Path,
};

use super::{Analysis, Source};


/// Run the analysis on every program in a data directory. The data directories
/// are flat, there is no need to recurse.
fn test_dir<F>(dir: &str, mut check: F) -> io::Result<()>
where
	F: FnMut(&Analysis) -> bool,
{
	let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join(dir);

	for entry in fs::read_dir(dir)? {
		let source = Source::from_path(entry?.path())?;
		let analysis = Analysis::analyze(&source);

		if !check(&analysis) {
			for error in analysis.errors.iter() {
				eprintln!("{}: {}", source.path.display(), error);
			}
			panic!("check failed for {}", source.path.display());
		}
	}

	Ok(())
}


#[test]
fn test_positive() -> io::Result<()> {
	test_dir(
		"src/syntax/tests/data/positive",
		|analysis| analysis.is_valid(),
	)
}


#[test]
fn test_negative() -> io::Result<()> {
	test_dir(
		"src/syntax/tests/data/negative",
		|analysis| !analysis.is_valid(),
	)
}
