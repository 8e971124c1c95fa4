use super::{
	Cursor,
	Keyword,
	Root,
	SourcePos,
	State,
	Token,
	TokenKind,
	Transition,
};


/// The state for lexing identifiers and keywords.
#[derive(Debug)]
pub(super) struct Word {
	start_offset: usize,
	pos: SourcePos,
}


impl Word {
	pub fn at(cursor: &Cursor) -> Self {
		Self { start_offset: cursor.offset(), pos: cursor.pos() }
	}


	pub fn visit(self, cursor: &Cursor) -> Transition {
		// We don't need to check if the first character is a digit here, because the Root
		// state will only transition to this state if that is not the case.
		match cursor.peek() {
			// Word character.
			Some(c) if c.is_word() => Transition::step(self),

			// If we visit EOF or a non-identifier character, we should just produce.
			_ => {
				let word = &cursor.slice()[self.start_offset .. cursor.offset()];

				Transition::resume_produce(Root, Token { kind: to_token(word), pos: self.pos })
			}
		}
	}
}


impl From<Word> for State {
	fn from(state: Word) -> State {
		State::Word(state)
	}
}


/// Words are lexed as identifiers first, and then reclassified by exact spelling
/// against the keyword table. Keywords take priority over identifiers.
pub fn to_token(word: &[u8]) -> TokenKind {
	match word {
		// Keywords:
		b"inprograma" => TokenKind::Keyword(Keyword::ProgramStart),
		b"fmprograma" => TokenKind::Keyword(Keyword::ProgramEnd),
		b"ni" => TokenKind::Keyword(Keyword::Declare),
		b"escreva" => TokenKind::Keyword(Keyword::Write),
		b"leia" => TokenKind::Keyword(Keyword::Read),
		b"para" => TokenKind::Keyword(Keyword::For),
		b"in" => TokenKind::Keyword(Keyword::In),
		b"range" => TokenKind::Keyword(Keyword::Range),
		b"enquanto" => TokenKind::Keyword(Keyword::While),

		// Identifier:
		ident => {
			let name = std::str::from_utf8(ident)
				.expect("words should be valid ascii, which should be valid utf8");

			TokenKind::Identifier(name.into())
		}
	}
}


/// Helper trait for checking if a character is a valid word constituent.
pub trait IsWord {
	fn is_word_start(&self) -> bool;
	fn is_word(&self) -> bool;
}


impl IsWord for u8 {
	fn is_word_start(&self) -> bool {
		self.is_ascii_alphabetic() || *self == b'_'
	}

	fn is_word(&self) -> bool {
		self.is_ascii_alphanumeric() || *self == b'_'
	}
}
