mod automata;
mod cursor;
mod error;
#[cfg(test)]
mod tests;
mod token;

use automata::Automata;
pub use cursor::{Checkpoint, Cursor, SourcePos};
pub use error::{Error, ErrorKind};
pub use token::{Keyword, Literal, Operator, Token, TokenKind};


/// The lexer for the mini language.
/// Yields tokens lazily, and is finite. A fresh instance must be built for each run.
#[derive(Debug)]
pub struct Lexer<'a>(Automata<'a>);


impl<'a> Lexer<'a> {
	pub fn new(cursor: Cursor<'a>) -> Self {
		Self(Automata::new(cursor))
	}
}


impl<'a> Iterator for Lexer<'a> {
	type Item = Result<Token, Error>;

	fn next(&mut self) -> Option<Self::Item> {
		self.0.next()
	}
}
