use std::fmt::{self, Debug, Display};

use super::SourcePos;


/// The kind of lexical error.
pub enum ErrorKind {
	/// Unexpected character.
	Unexpected(u8),
	/// Invalid number literal, both integer and floating point.
	InvalidNumber(Box<[u8]>),
}


impl Debug for ErrorKind {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(f, "{}", self) // Use the display instance for debugging.
	}
}


impl Display for ErrorKind {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match self {
			Self::Unexpected(value) => write!(f, "unexpected '{}'", *value as char),

			Self::InvalidNumber(number) => {
				write!(f, "invalid number: {}", String::from_utf8_lossy(number))
			}
		}
	}
}


/// A lexical error.
#[derive(Debug)]
pub struct Error {
	pub error: ErrorKind,
	pub pos: SourcePos,
}


impl Display for Error {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(f, "{} - {}", self.pos, self.error)
	}
}


impl std::error::Error for Error {}


impl Error {
	pub fn unexpected(input: u8, pos: SourcePos) -> Self {
		Self { error: ErrorKind::Unexpected(input), pos }
	}


	pub fn invalid_number(number: &[u8], pos: SourcePos) -> Self {
		Self {
			error: ErrorKind::InvalidNumber(number.into()),
			pos,
		}
	}
}
