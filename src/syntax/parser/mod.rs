pub mod code;
mod error;
#[cfg(test)]
mod tests;

use crate::symbol::SymbolTable;
use super::lexer::{Keyword, Literal, Operator, SourcePos, Token, TokenKind};
pub use error::{Error, Expected};


/// The parser may report multiple errors before finishing. Instead of allocating those in
/// an vector, we delegate such handling to the caller.
pub trait ErrorReporter {
	fn report(&mut self, error: Error);
}


impl<F> ErrorReporter for F
where
	F: FnMut(Error),
{
	fn report(&mut self, error: Error) {
		self(error)
	}
}


/// The parser and translator for the mini language, fused: each grammar rule is a
/// method, and reducing a rule synthesizes the corresponding Python fragment
/// bottom-up, consulting the symbol table along the way.
///
/// The grammar needs a single token of lookahead and no backtracking. A construct
/// that fails a semantic check (redeclaration, undeclared assignment target)
/// reports a diagnostic and contributes an empty fragment; it never aborts the
/// parse.
#[derive(Debug)]
pub struct Parser<I, E>
where
	I: Iterator<Item = Token>,
{
	// We don't use a std::iter::Peekable instead of a (Iterator, Option<Token>) pair
	// because we must be able to move from `token`, but Peekable only returns a reference.
	cursor: I,
	token: Option<Token>,
	symbols: SymbolTable,
	error_reporter: E,
}


impl<I, E> Parser<I, E>
where
	I: Iterator<Item = Token>,
	E: ErrorReporter,
{
	/// Create a new parser for the given input. The symbol table is owned by the
	/// parser, and therefore by a single translation run.
	pub fn new(mut cursor: I, error_reporter: E) -> Self {
		let token = cursor.next();

		Self {
			cursor,
			token,
			symbols: SymbolTable::new(),
			error_reporter,
		}
	}


	/// Parse the input, producing the translated program.
	/// The result is only a valid program if no errors have been reported.
	pub fn parse(mut self) -> String {
		match self.parse_program() {
			Ok(code) => code,
			Err(error) => {
				self.error_reporter.report(error);
				String::new()
			}
		}
	}


	/// Step the cursor, placing the next token on self.token.
	fn step(&mut self) {
		self.token = self.cursor.next();
	}


	/// Try and eat a token.
	fn eat<F, T>(&mut self, eat: F) -> Result<T, Error>
	where
		F: FnOnce(Token) -> Result<T, (Error, Token)>,
	{
		if let Some(token) = self.token.take() {
			match eat(token) {
				Ok(value) => {
					// Token successfully consumed.
					self.step();
					Ok(value)
				}

				Err((error, token)) => {
					// Fail, rollback the token and produce an error.
					self.token = Some(token);
					Err(error)
				}
			}
		} else {
			Err(Error::unexpected_eof())
		}
	}


	/// Consume the expected token, or produce an error.
	fn expect(&mut self, expected: TokenKind) -> Result<(), Error> {
		self.eat(|token| {
			if token.kind == expected {
				Ok(())
			} else {
				Err((Error::unexpected(token.clone(), expected), token))
			}
		})
	}


	/// Program := 'inprograma' StmtList 'fmprograma'
	fn parse_program(&mut self) -> Result<String, Error> {
		self.expect(TokenKind::Keyword(Keyword::ProgramStart))?;
		let code = self.parse_statement_list()?;
		self.expect(TokenKind::Keyword(Keyword::ProgramEnd))?;

		// The program end keyword must also end the input.
		match self.token.take() {
			None => Ok(code),
			Some(token) => Err(Error::unexpected_msg(token, "end of input")),
		}
	}


	/// StmtList := Stmt+
	///
	/// Statement fragments are concatenated in source order. After a syntax error
	/// inside a statement, the parser synchronizes with the next statement boundary
	/// and keeps going, so that a single run surfaces as many problems as possible.
	/// Premature EOF is the exception: there is nothing left to synchronize with.
	fn parse_statement_list(&mut self) -> Result<String, Error> {
		let mut code = String::new();
		let mut first = true;

		loop {
			let proceed = first
				|| matches!(&self.token, Some(token) if token.kind.is_statement_start());

			if !proceed {
				break;
			}

			first = false;

			match self.parse_statement() {
				Ok(fragment) => code.push_str(&fragment),

				Err(error @ Error::UnexpectedEof) => return Err(error),

				Err(error) => {
					self.error_reporter.report(error);
					self.synchronize();
				}
			}
		}

		Ok(code)
	}


	/// Skip tokens until a statement boundary: past the next semicolon, or up to a
	/// token that may close a block.
	fn synchronize(&mut self) {
		loop {
			match &self.token {
				None => break,

				Some(Token { kind: TokenKind::Semicolon, .. }) => {
					self.step();
					break;
				}

				Some(Token { kind, .. }) if kind.is_block_terminator() => break,

				Some(_) => self.step(),
			}
		}
	}


	/// Stmt := Declare | Assign | Write | Read | ForLoop | WhileLoop
	fn parse_statement(&mut self) -> Result<String, Error> {
		match self.token.take() {
			// Declare := 'ni' Ident '=' Expr ';'
			Some(Token { kind: TokenKind::Keyword(Keyword::Declare), .. }) => {
				self.step();

				let (name, pos) = self.parse_identifier()?;
				self.expect(TokenKind::Operator(Operator::Assign))?;
				let expr = self.parse_expression()?;
				self.expect(TokenKind::Semicolon)?;

				if self.symbols.declare(&name) {
					Ok(code::assign(&name, &expr))
				} else {
					self.error_reporter.report(Error::redeclaration(name, pos));
					Ok(String::new())
				}
			}

			// Assign := Ident '=' Expr ';'
			Some(Token { kind: TokenKind::Identifier(name), pos }) => {
				self.step();

				self.expect(TokenKind::Operator(Operator::Assign))?;
				let expr = self.parse_expression()?;
				self.expect(TokenKind::Semicolon)?;

				if self.symbols.is_declared(&name) {
					Ok(code::assign(&name, &expr))
				} else {
					self.error_reporter.report(Error::undeclared(name, pos));
					Ok(String::new())
				}
			}

			// Write := 'escreva' Expr ';'
			Some(Token { kind: TokenKind::Keyword(Keyword::Write), .. }) => {
				self.step();

				let expr = self.parse_expression()?;
				self.expect(TokenKind::Semicolon)?;

				Ok(code::print(&expr))
			}

			// Read := 'leia' Ident ';'
			Some(Token { kind: TokenKind::Keyword(Keyword::Read), .. }) => {
				self.step();

				let (name, _) = self.parse_identifier()?;
				self.expect(TokenKind::Semicolon)?;

				// Reading declares the variable. Reading it again is not a
				// redeclaration.
				self.symbols.declare(&name);

				Ok(code::read(&name))
			}

			// ForLoop := 'para' '(' Ident 'in' 'range' '(' Expr ')' ')' '{' StmtList '}'
			Some(Token { kind: TokenKind::Keyword(Keyword::For), .. }) => {
				self.step();

				self.expect(TokenKind::OpenParens)?;
				let (variable, _) = self.parse_identifier()?;
				self.expect(TokenKind::Keyword(Keyword::In))?;
				self.expect(TokenKind::Keyword(Keyword::Range))?;
				self.expect(TokenKind::OpenParens)?;
				let range = self.parse_expression()?;
				self.expect(TokenKind::CloseParens)?;
				self.expect(TokenKind::CloseParens)?;
				self.expect(TokenKind::OpenBrace)?;
				let body = self.parse_statement_list()?;
				self.expect(TokenKind::CloseBrace)?;

				// The loop variable is declared when the whole loop is reduced, after
				// the body, and without any collision check: shadowing a previous
				// declaration is allowed.
				self.symbols.declare(&variable);

				Ok(code::for_loop(&variable, &range, &body))
			}

			// WhileLoop := 'enquanto' '(' Cond ')' '{' StmtList '}'
			Some(Token { kind: TokenKind::Keyword(Keyword::While), .. }) => {
				self.step();

				self.expect(TokenKind::OpenParens)?;
				let condition = self.parse_condition()?;
				self.expect(TokenKind::CloseParens)?;
				self.expect(TokenKind::OpenBrace)?;
				let body = self.parse_statement_list()?;
				self.expect(TokenKind::CloseBrace)?;

				Ok(code::while_loop(&condition, &body))
			}

			// Not a statement: rollback the token, so that the caller may still
			// match it against a block terminator.
			Some(token) => {
				let error = Error::unexpected_msg(token.clone(), "statement");
				self.token = Some(token);
				Err(error)
			}

			// EOF.
			None => Err(Error::unexpected_eof()),
		}
	}


	/// Expr := Integer | Float | Ident | Ident '+' Expr
	///
	/// Sums chain to the right, and the left operand of '+' must be a bare
	/// identifier. Identifiers in expression position are not checked against the
	/// symbol table: only declaration and assignment targets are.
	fn parse_expression(&mut self) -> Result<String, Error> {
		match self.token.take() {
			// Literal.
			Some(Token { kind: TokenKind::Literal(literal), .. }) => {
				self.step();

				Ok(code::literal(&literal))
			}

			// Identifier, possibly the left operand of a sum.
			Some(Token { kind: TokenKind::Identifier(name), .. }) => {
				self.step();

				match &self.token {
					Some(Token { kind: TokenKind::Operator(Operator::Plus), .. }) => {
						self.step();

						let rest = self.parse_expression()?;

						Ok(format!("{} + {}", name, rest))
					}

					_ => Ok(name.into()),
				}
			}

			// Not an expression: rollback the token so synchronization sees it.
			Some(token) => {
				let error = Error::unexpected_msg(token.clone(), "expression");
				self.token = Some(token);
				Err(error)
			}

			// EOF.
			None => Err(Error::unexpected_eof()),
		}
	}


	/// Cond := Expr ('<'|'>') Expr
	fn parse_condition(&mut self) -> Result<String, Error> {
		let left = self.parse_expression()?;
		let operator = self.parse_comparison()?;
		let right = self.parse_expression()?;

		Ok(format!("{} {} {}", left, operator, right))
	}


	fn parse_comparison(&mut self) -> Result<Operator, Error> {
		self.eat(|token| match token {
			Token { kind: TokenKind::Operator(operator @ Operator::Less), .. }
			| Token { kind: TokenKind::Operator(operator @ Operator::Greater), .. } => Ok(operator),

			token => Err((Error::unexpected_msg(token.clone(), "comparison operator"), token)),
		})
	}


	fn parse_identifier(&mut self) -> Result<(Box<str>, SourcePos), Error> {
		self.eat(|token| match token {
			Token { kind: TokenKind::Identifier(name), pos } => Ok((name, pos)),

			token => Err((Error::unexpected_msg(token.clone(), "identifier"), token)),
		})
	}
}
