use super::*;

use assert_matches::assert_matches;


macro_rules! token {
	($kind:pat) => {
		Ok(Token { kind: $kind, .. })
	};
}

macro_rules! error {
	($error:pat) => {
		Err(Error { error: $error, .. })
	};
}


fn lex(input: &str) -> Vec<Result<Token, Error>> {
	let cursor = Cursor::from(input.as_bytes());
	Lexer::new(cursor).collect()
}


#[test]
fn test_simple_program() {
	let tokens = lex("inprograma ni x = 5; escreva x; fmprograma");

	assert_matches!(
		&tokens[..],
		[
			token!(TokenKind::Keyword(Keyword::ProgramStart)),
			token!(TokenKind::Keyword(Keyword::Declare)),
			token!(TokenKind::Identifier(x1)),
			token!(TokenKind::Operator(Operator::Assign)),
			token!(TokenKind::Literal(Literal::Int(5))),
			token!(TokenKind::Semicolon),
			token!(TokenKind::Keyword(Keyword::Write)),
			token!(TokenKind::Identifier(x2)),
			token!(TokenKind::Semicolon),
			token!(TokenKind::Keyword(Keyword::ProgramEnd)),
		]
			=> {
				assert_eq!(x1.as_ref(), "x");
				assert_eq!(x2.as_ref(), "x");
			}
	);
}


#[test]
fn test_keywords_are_reclassified_words() {
	let tokens = lex("para in range enquanto leia rangex _range");

	assert_matches!(
		&tokens[..],
		[
			token!(TokenKind::Keyword(Keyword::For)),
			token!(TokenKind::Keyword(Keyword::In)),
			token!(TokenKind::Keyword(Keyword::Range)),
			token!(TokenKind::Keyword(Keyword::While)),
			token!(TokenKind::Keyword(Keyword::Read)),
			token!(TokenKind::Identifier(rangex)),
			token!(TokenKind::Identifier(underscore_range)),
		]
			=> {
				assert_eq!(rangex.as_ref(), "rangex");
				assert_eq!(underscore_range.as_ref(), "_range");
			}
	);
}


#[test]
fn test_float_is_greedy() {
	// 12.5 must be a single float token, never INTEGER '.' INTEGER.
	let tokens = lex("12.5");

	assert_matches!(
		&tokens[..],
		[token!(TokenKind::Literal(Literal::Float(value)))] => assert_eq!(*value, 12.5)
	);
}


#[test]
fn test_dangling_dot_is_not_a_float() {
	// The dot only belongs to the number if a digit follows. Here, the integer is
	// produced and the dot is reported as an unexpected character.
	let tokens = lex("12.;");

	assert_matches!(
		&tokens[..],
		[
			token!(TokenKind::Literal(Literal::Int(12))),
			error!(ErrorKind::Unexpected(b'.')),
			token!(TokenKind::Semicolon),
		]
	);
}


#[test]
fn test_unexpected_character_skips_one() {
	let tokens = lex("ni x @ = 1;");

	assert_matches!(
		&tokens[..],
		[
			token!(TokenKind::Keyword(Keyword::Declare)),
			token!(TokenKind::Identifier(_)),
			error!(ErrorKind::Unexpected(b'@')),
			token!(TokenKind::Operator(Operator::Assign)),
			token!(TokenKind::Literal(Literal::Int(1))),
			token!(TokenKind::Semicolon),
		]
	);
}


#[test]
fn test_symbols() {
	let tokens = lex("= ; < > ( ) { } +");

	assert_matches!(
		&tokens[..],
		[
			token!(TokenKind::Operator(Operator::Assign)),
			token!(TokenKind::Semicolon),
			token!(TokenKind::Operator(Operator::Less)),
			token!(TokenKind::Operator(Operator::Greater)),
			token!(TokenKind::OpenParens),
			token!(TokenKind::CloseParens),
			token!(TokenKind::OpenBrace),
			token!(TokenKind::CloseBrace),
			token!(TokenKind::Operator(Operator::Plus)),
		]
	);
}


#[test]
fn test_source_lines() {
	let tokens = lex("ni x = 1;\nescreva x;\n");

	assert_matches!(
		&tokens[..],
		[
			Ok(Token { pos: SourcePos { line: 1, .. }, .. }),
			Ok(Token { pos: SourcePos { line: 1, .. }, .. }),
			Ok(Token { pos: SourcePos { line: 1, .. }, .. }),
			Ok(Token { pos: SourcePos { line: 1, .. }, .. }),
			Ok(Token { pos: SourcePos { line: 1, .. }, .. }),
			Ok(Token { kind: TokenKind::Keyword(Keyword::Write), pos: SourcePos { line: 2, .. } }),
			Ok(Token { pos: SourcePos { line: 2, .. }, .. }),
			Ok(Token { pos: SourcePos { line: 2, .. }, .. }),
		]
	);
}


#[test]
fn test_integer_overflow_is_invalid_number() {
	let tokens = lex("99999999999999999999;");

	assert_matches!(
		&tokens[..],
		[
			error!(ErrorKind::InvalidNumber(_)),
			token!(TokenKind::Semicolon),
		]
	);
}
