mod fmt;

use super::SourcePos;


/// All keywords in the language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
	ProgramStart, // inprograma
	ProgramEnd,   // fmprograma
	Declare,      // ni
	Write,        // escreva
	Read,         // leia
	For,          // para
	In,           // in
	Range,        // range
	While,        // enquanto
}


/// Number literals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Literal {
	Int(i64),
	Float(f64),
}


/// Single character operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
	Assign,  // =
	Less,    // <
	Greater, // >
	Plus,    // +
}


/// All possible kinds of token.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
	Keyword(Keyword),
	// Identifiers carry their spelling instead of an interned symbol. Programs in
	// the mini language are tiny, and this keeps the lexer decoupled from the
	// symbol table, which tracks declarations only.
	Identifier(Box<str>),
	Literal(Literal),
	Operator(Operator),

	Semicolon, // ;

	OpenParens,  // (
	CloseParens, // )

	OpenBrace,  // {
	CloseBrace, // }
}


impl TokenKind {
	/// Check if the token may start a statement.
	pub fn is_statement_start(&self) -> bool {
		matches!(
			self,
			TokenKind::Identifier(_)
				| TokenKind::Keyword(Keyword::Declare)
				| TokenKind::Keyword(Keyword::Write)
				| TokenKind::Keyword(Keyword::Read)
				| TokenKind::Keyword(Keyword::For)
				| TokenKind::Keyword(Keyword::While)
		)
	}


	/// Check if the token terminates a statement block.
	/// Currently, only the closing brace and the program end keyword do that.
	pub fn is_block_terminator(&self) -> bool {
		matches!(
			self,
			TokenKind::CloseBrace | TokenKind::Keyword(Keyword::ProgramEnd)
		)
	}
}


/// A lexical token.
#[derive(Debug, Clone)]
pub struct Token {
	pub kind: TokenKind,
	pub pos: SourcePos,
}
