use std::{
	fs::File,
	path::Path,
};


/// Mini language source code.
#[derive(Debug)]
pub struct Source {
	/// The origin path, may be something fictional like `<stdin>`.
	pub path: Box<Path>,
	/// The source code.
	pub contents: Box<[u8]>,
}


impl Source {
	/// Load the source code from a file path.
	pub fn from_path<P>(path: P) -> std::io::Result<Self>
	where
		P: Into<Box<Path>>,
	{
		let path = path.into();
		let file = File::open(&path)?;
		Self::from_reader(path, file)
	}


	/// Load the source code from a std::io::Read.
	/// The path argument may be anything, including fictional paths like `<stdin>`.
	pub fn from_reader<P, R>(path: P, mut reader: R) -> std::io::Result<Self>
	where
		P: Into<Box<Path>>,
		R: std::io::Read,
	{
		let path = path.into();
		let mut contents = Vec::with_capacity(512); // Expect a few characters.
		reader.read_to_end(&mut contents)?;

		Ok(Self { path, contents: contents.into() })
	}
}


#[cfg(test)]
mod tests {
	use super::*;


	#[test]
	fn test_reader_keeps_the_origin_path() {
		let source = Source::from_reader(Path::new("<stdin>"), "ni x = 1;".as_bytes())
			.expect("reading from a byte slice should not fail");

		assert_eq!(source.path.as_ref(), Path::new("<stdin>"));
		assert_eq!(source.contents.as_ref(), b"ni x = 1;");
	}
}
