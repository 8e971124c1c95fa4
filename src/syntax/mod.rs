mod error;
pub mod lexer;
pub mod parser;
mod source;
#[cfg(test)]
mod tests;

use std::cell::RefCell;

pub use error::Error;
use lexer::{Lexer, Token};
use parser::Parser;
pub use source::Source;


/// A complete translation run: lexical, syntactic and semantic analysis, plus the
/// synthesized Python program.
#[derive(Debug)]
pub struct Analysis {
	/// The translated program. Only a valid artifact if there were no errors.
	pub code: String,
	/// The produced tokens, in source order.
	pub tokens: Box<[Token]>,
	/// All diagnostics, in the order they were found.
	pub errors: Box<[Error]>,
}


impl Analysis {
	/// Translate the given source. The symbol table and the error collector live
	/// and die with this call: nothing is shared across runs.
	pub fn analyze(source: &Source) -> Self {
		let cursor = lexer::Cursor::from(source.contents.as_ref());
		let lexer = Lexer::new(cursor);

		// Errors will be produced by the lexer and the parser alternatively.
		// There won't be borrow issues here because the lexer will always run a complete
		// iteration (producing a token or an error) before yielding to the parser.
		let errors = RefCell::new(Vec::new());
		let tokens = RefCell::new(Vec::new());

		let stream = lexer.filter_map(|result| match result {
			Ok(token) => {
				// Record the parallel token listing as tokens stream by.
				tokens.borrow_mut().push(token.clone());
				Some(token)
			}

			Err(error) => {
				errors.borrow_mut().push(Error::Lexer(error));
				None
			}
		});

		let parser = Parser::new(stream, |error| {
			errors.borrow_mut().push(Error::Parser(error))
		});

		let code = parser.parse();

		Analysis {
			code,
			tokens: tokens.into_inner().into(),
			errors: errors.into_inner().into(),
		}
	}


	/// Whether the run produced a valid translation.
	pub fn is_valid(&self) -> bool {
		self.errors.is_empty()
	}
}
