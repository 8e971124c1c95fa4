use super::{
	word::IsWord,
	Cursor,
	Error,
	NumberLiteral,
	Operator,
	State,
	Token,
	TokenKind,
	Transition,
	Word,
};


/// The top level lexer state.
#[derive(Debug)]
pub(super) struct Root;


impl Root {
	pub fn visit(self, cursor: &Cursor) -> Transition {
		match cursor.peek() {
			// Whitespace.
			Some(c) if c.is_ascii_whitespace() => Transition::step(self),

			// Number literals.
			Some(c) if c.is_ascii_digit() => Transition::step(NumberLiteral::at(cursor)),

			// Identifiers and keywords.
			Some(c) if c.is_word_start() => Transition::resume(Word::at(cursor)),

			// Single character symbols.
			Some(c) => match symbol(c) {
				Some(kind) => Transition::produce(
					self,
					Token { kind, pos: cursor.pos() },
				),

				// Skip exactly one character, so that lexing may continue.
				None => Transition::error(self, Error::unexpected(c, cursor.pos())),
			},

			// Eof.
			None => Transition::step(self),
		}
	}
}


impl From<Root> for State {
	fn from(state: Root) -> State {
		State::Root(state)
	}
}


fn symbol(value: u8) -> Option<TokenKind> {
	match value {
		b'=' => Some(TokenKind::Operator(Operator::Assign)),
		b'<' => Some(TokenKind::Operator(Operator::Less)),
		b'>' => Some(TokenKind::Operator(Operator::Greater)),
		b'+' => Some(TokenKind::Operator(Operator::Plus)),
		b';' => Some(TokenKind::Semicolon),
		b'(' => Some(TokenKind::OpenParens),
		b')' => Some(TokenKind::CloseParens),
		b'{' => Some(TokenKind::OpenBrace),
		b'}' => Some(TokenKind::CloseBrace),
		_ => None,
	}
}
