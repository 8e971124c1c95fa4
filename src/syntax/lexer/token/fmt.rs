use std::fmt::{self, Display};

use super::{Keyword, Literal, Operator, Token, TokenKind};


impl Display for Keyword {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		let spelling = match self {
			Self::ProgramStart => "inprograma",
			Self::ProgramEnd => "fmprograma",
			Self::Declare => "ni",
			Self::Write => "escreva",
			Self::Read => "leia",
			Self::For => "para",
			Self::In => "in",
			Self::Range => "range",
			Self::While => "enquanto",
		};

		write!(f, "{}", spelling)
	}
}


impl Display for Literal {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match self {
			Self::Int(int) => write!(f, "{}", int),
			Self::Float(float) => write!(f, "{}", float),
		}
	}
}


impl Display for Operator {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		let symbol = match self {
			Self::Assign => "=",
			Self::Less => "<",
			Self::Greater => ">",
			Self::Plus => "+",
		};

		write!(f, "{}", symbol)
	}
}


impl Display for TokenKind {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match self {
			Self::Keyword(keyword) => write!(f, "keyword '{}'", keyword),
			Self::Identifier(name) => write!(f, "identifier '{}'", name),
			Self::Literal(Literal::Int(int)) => write!(f, "integer '{}'", int),
			Self::Literal(Literal::Float(float)) => write!(f, "float '{}'", float),
			Self::Operator(operator) => write!(f, "'{}'", operator),
			Self::Semicolon => write!(f, "';'"),
			Self::OpenParens => write!(f, "'('"),
			Self::CloseParens => write!(f, "')'"),
			Self::OpenBrace => write!(f, "'{{'"),
			Self::CloseBrace => write!(f, "'}}'"),
		}
	}
}


impl Display for Token {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(f, "{} at {}", self.kind, self.pos)
	}
}
