use std::fmt::{self, Display};

use super::{lexer, parser};


/// An error gathered during a translation run.
#[derive(Debug)]
pub enum Error {
	Lexer(lexer::Error),
	Parser(parser::Error),
}


impl Display for Error {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match self {
			Self::Lexer(error) => error.fmt(f),
			Self::Parser(error) => error.fmt(f),
		}
	}
}


impl std::error::Error for Error {}
