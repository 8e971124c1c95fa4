use super::{
	Checkpoint,
	Cursor,
	Error,
	Literal,
	Root,
	SourcePos,
	State,
	Token,
	TokenKind,
	Transition,
};


/// Where the fractional part stands while lexing a number.
#[derive(Debug)]
enum Decimal {
	/// A dot has been consumed, but no digit has followed it yet. The checkpoint
	/// addresses the dot itself.
	Dot(Checkpoint),
	/// The dot has been followed by at least one digit.
	Digits,
}


/// The state for lexing numeric literals, both integer and float.
#[derive(Debug)]
pub(super) struct NumberLiteral {
	start_offset: usize,
	decimal: Option<Decimal>,
	pos: SourcePos,
}


impl NumberLiteral {
	pub fn at(cursor: &Cursor) -> Self {
		Self {
			start_offset: cursor.offset(),
			decimal: None,
			pos: cursor.pos(),
		}
	}


	pub fn visit(mut self, cursor: &Cursor) -> Transition {
		match (&self.decimal, cursor.peek()) {
			// There must be up to one dot. It only belongs to the number if a digit
			// follows, so remember where it is.
			(None, Some(b'.')) => {
				self.decimal = Some(Decimal::Dot(cursor.checkpoint()));
				Transition::step(self)
			}

			// Consume digits.
			(_, Some(value)) if value.is_ascii_digit() => {
				if let Some(Decimal::Dot(_)) = self.decimal {
					self.decimal = Some(Decimal::Digits);
				}

				Transition::step(self)
			}

			// A dot not followed by a digit is not part of the number: the integer part
			// is produced, and the cursor backs off to the dot, which the root state
			// will then report as an unexpected character.
			(Some(Decimal::Dot(checkpoint)), _) => {
				let checkpoint = *checkpoint;
				let output = self.parse(cursor, checkpoint.offset());
				Transition::rollback(Root, checkpoint, output)
			}

			// Stop and produce if a non-digit is found, including EOF.
			(_, _) => match self.parse(cursor, cursor.offset()) {
				Ok(token) => Transition::resume_produce(Root, token),
				Err(error) => Transition::resume_error(Root, error),
			},
		}
	}


	/// Parse the characters consumed up to the given offset.
	fn parse(&self, cursor: &Cursor, end_offset: usize) -> Result<Token, Error> {
		let number = &cursor.slice()[self.start_offset .. end_offset];

		let literal = |literal| Ok(Token { kind: TokenKind::Literal(literal), pos: self.pos });

		// There is no method in std to parse a number from a byte array.
		let number_str = std::str::from_utf8(number)
			.expect("number literals should be valid ascii, which should be valid utf8");

		if self.is_float() {
			match number_str.parse() {
				Ok(float) => literal(Literal::Float(float)),
				Err(_) => Err(Error::invalid_number(number, self.pos)),
			}
		} else {
			match number_str.parse() {
				Ok(int) => literal(Literal::Int(int)),
				Err(_) => Err(Error::invalid_number(number, self.pos)),
			}
		}
	}


	/// Check if the consumed characters constitute a float.
	fn is_float(&self) -> bool {
		matches!(self.decimal, Some(Decimal::Digits))
	}
}


impl From<NumberLiteral> for State {
	fn from(state: NumberLiteral) -> State {
		State::NumberLiteral(state)
	}
}
