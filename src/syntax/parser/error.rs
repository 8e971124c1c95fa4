use std::fmt::{self, Display};

use super::{SourcePos, Token, TokenKind};


/// The kind of token the parser was expecting.
#[derive(Debug)]
pub enum Expected {
	Token(TokenKind),
	Message(&'static str),
}


impl Display for Expected {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match self {
			Self::Token(token) => write!(f, "{}", token),
			Self::Message(msg) => write!(f, "{}", msg),
		}
	}
}


/// A parser error, including the semantic errors produced by declaration tracking.
#[derive(Debug)]
pub enum Error {
	/// Premature EOF.
	UnexpectedEof,
	/// Unexpected token.
	Unexpected { token: Token, expected: Expected },
	/// Duplicate declaration of the same variable.
	Redeclaration { name: Box<str>, pos: SourcePos },
	/// Assignment to a variable that has not been declared.
	Undeclared { name: Box<str>, pos: SourcePos },
}


impl Error {
	pub fn unexpected_eof() -> Self {
		Self::UnexpectedEof
	}


	pub fn unexpected(token: Token, expected: TokenKind) -> Self {
		Self::Unexpected { token, expected: Expected::Token(expected) }
	}


	pub fn unexpected_msg(token: Token, message: &'static str) -> Self {
		Self::Unexpected { token, expected: Expected::Message(message) }
	}


	pub fn redeclaration(name: Box<str>, pos: SourcePos) -> Self {
		Self::Redeclaration { name, pos }
	}


	pub fn undeclared(name: Box<str>, pos: SourcePos) -> Self {
		Self::Undeclared { name, pos }
	}
}


impl Display for Error {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match self {
			Self::UnexpectedEof => write!(f, "unexpected end of input"),

			Self::Unexpected { token: Token { kind, pos }, expected } => {
				write!(f, "{} - unexpected {}, expected {}", pos, kind, expected)
			}

			Self::Redeclaration { name, pos } => {
				write!(f, "{} - variable '{}' has already been declared", pos, name)
			}

			Self::Undeclared { name, pos } => {
				write!(f, "{} - variable '{}' has not been declared", pos, name)
			}
		}
	}
}


impl std::error::Error for Error {}
