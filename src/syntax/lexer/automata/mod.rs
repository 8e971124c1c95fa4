mod number;
mod root;
mod word;

use self::{
	number::NumberLiteral,
	root::Root,
	word::Word,
};
use super::{
	Checkpoint,
	Cursor,
	Error,
	Keyword,
	Literal,
	Operator,
	SourcePos,
	Token,
	TokenKind,
};


/// The automata may produce a token, or an error.
type Output = Result<Token, Error>;


/// The transition to be made after a character in the input has been visited.
#[derive(Debug)]
struct Transition {
	/// The next state.
	state: State,
	/// Whether to consume the visited input character.
	consume: bool,
	/// A checkpoint to restore the cursor to, if any.
	rollback: Option<Checkpoint>,
	/// The produced output, if any.
	output: Option<Output>,
}


impl Transition {
	/// Consume the character while updating the machine state, but not producing a token
	/// yet.
	pub fn step<S: Into<State>>(state: S) -> Self {
		Self { state: state.into(), consume: true, rollback: None, output: None }
	}

	/// Consume the input character and produce a token.
	pub fn produce<S: Into<State>>(state: S, token: Token) -> Self {
		Self {
			state: state.into(),
			consume: true,
			rollback: None,
			output: Some(Ok(token)),
		}
	}

	/// Consume the input character and produce an error.
	pub fn error<S: Into<State>>(state: S, error: Error) -> Self {
		Self {
			state: state.into(),
			consume: true,
			rollback: None,
			output: Some(Err(error)),
		}
	}

	/// Don't consume the input character, updating the machine state instead.
	pub fn resume<S: Into<State>>(state: S) -> Self {
		Self { state: state.into(), consume: false, rollback: None, output: None }
	}

	/// Don't consume the input character, but produce a token.
	pub fn resume_produce<S: Into<State>>(state: S, output: Token) -> Self {
		Self {
			state: state.into(),
			consume: false,
			rollback: None,
			output: Some(Ok(output)),
		}
	}

	/// Don't consume the input character and produce an error.
	pub fn resume_error<S: Into<State>>(state: S, error: Error) -> Self {
		Self {
			state: state.into(),
			consume: false,
			rollback: None,
			output: Some(Err(error)),
		}
	}

	/// Restore the cursor to the given checkpoint and yield the output from there.
	pub fn rollback<S: Into<State>>(state: S, checkpoint: Checkpoint, output: Output) -> Self {
		Self {
			state: state.into(),
			consume: false,
			rollback: Some(checkpoint),
			output: Some(output),
		}
	}
}


/// All states in the automata.
#[derive(Debug)]
enum State {
	Root(Root),
	NumberLiteral(NumberLiteral),
	Word(Word),
}


impl Default for State {
	fn default() -> Self {
		Root.into()
	}
}


impl State {
	pub fn visit(self, cursor: &Cursor) -> Transition {
		match self {
			State::Root(state) => state.visit(cursor),
			State::NumberLiteral(state) => state.visit(cursor),
			State::Word(state) => state.visit(cursor),
		}
	}
}


/// The automata instance.
#[derive(Debug)]
pub(super) struct Automata<'a> {
	state: State,
	cursor: Cursor<'a>,
}


impl<'a> Automata<'a> {
	pub fn new(cursor: Cursor<'a>) -> Self {
		Self { state: State::default(), cursor }
	}
}


impl<'a> Iterator for Automata<'a> {
	type Item = Output;

	fn next(&mut self) -> Option<Output> {
		loop {
			// We must temporarily take the state so that we can consume it.
			let state = std::mem::take(&mut self.state);

			let transition = state.visit(&self.cursor);

			self.state = transition.state;

			// Check EOF *before* stepping.
			let eof = self.cursor.is_eof();

			if let Some(checkpoint) = transition.rollback {
				self.cursor.rollback(checkpoint);
			} else if transition.consume {
				self.cursor.step();
			}

			if let Some(output) = transition.output {
				return Some(output);
			}

			if eof {
				return None;
			}
		}
	}
}
