use super::*;
use crate::syntax::lexer::{Cursor, Lexer};

use assert_matches::assert_matches;


/// Run a full translation, returning the generated code and all parser errors.
/// Inputs in these tests are lexically valid.
fn translate(input: &str) -> (String, Vec<Error>) {
	let cursor = Cursor::from(input.as_bytes());
	let tokens = Lexer::new(cursor)
		.map(|result| result.expect("test input should be lexically valid"));

	let mut errors = Vec::new();
	let parser = Parser::new(tokens, |error| errors.push(error));
	let code = parser.parse();

	(code, errors)
}


#[test]
fn test_declare_and_write() {
	let (code, errors) = translate("inprograma ni x = 5; escreva x; fmprograma");

	assert!(errors.is_empty());
	assert_eq!(code, "x = 5\nprint(x)\n");
}


#[test]
fn test_declared_names_may_be_assigned() {
	let (code, errors) = translate("inprograma ni x = 1; x = 2; fmprograma");

	assert!(errors.is_empty());
	assert_eq!(code, "x = 1\nx = 2\n");
}


#[test]
fn test_redeclaration_is_a_single_error_and_omits_the_statement() {
	let (code, errors) = translate("inprograma ni x = 1; ni x = 2; fmprograma");

	assert_matches!(
		&errors[..],
		[Error::Redeclaration { name, .. }] => assert_eq!(name.as_ref(), "x")
	);

	// The duplicate binding is omitted from the output.
	assert_eq!(code, "x = 1\n");
}


#[test]
fn test_assignment_to_undeclared_name() {
	let (code, errors) = translate("inprograma x = 1; fmprograma");

	assert_matches!(
		&errors[..],
		[Error::Undeclared { name, .. }] => assert_eq!(name.as_ref(), "x")
	);

	assert_eq!(code, "");
}


#[test]
fn test_read_declares_idempotently() {
	let (code, errors) = translate("inprograma leia x; leia x; x = 1; fmprograma");

	assert!(errors.is_empty());
	assert_eq!(
		code,
		"x = float(input('Digite um numero : '))\n\
		 x = float(input('Digite um numero : '))\n\
		 x = 1\n"
	);
}


#[test]
fn test_for_loop_over_range() {
	let (code, errors) = translate(
		"inprograma para (i in range(3)) { escreva i; } fmprograma"
	);

	assert!(errors.is_empty());
	assert_eq!(code, "for i in range(3):\n    print(i)\n");
}


#[test]
fn test_nested_loops_indent_one_level_each() {
	let (code, errors) = translate(
		"inprograma \
			ni x = 0; \
			para (i in range(3)) { \
				para (j in range(2)) { \
					x = x + i + j; \
					escreva x; \
				} \
			} \
		fmprograma"
	);

	assert!(errors.is_empty());
	assert_eq!(
		code,
		"x = 0\n\
		 for i in range(3):\n    \
		 	for j in range(2):\n        \
		 		x = x + i + j\n        \
		 		print(x)\n"
	);
}


#[test]
fn test_while_loop() {
	let (code, errors) = translate(
		"inprograma ni x = 0; enquanto (x < 10) { x = x + 1; } fmprograma"
	);

	assert!(errors.is_empty());
	assert_eq!(code, "x = 0\nwhile x < 10:\n    x = x + 1\n");
}


#[test]
fn test_greater_condition() {
	let (code, errors) = translate(
		"inprograma ni x = 5; enquanto (x > 0) { escreva x; } fmprograma"
	);

	assert!(errors.is_empty());
	assert_eq!(code, "x = 5\nwhile x > 0:\n    print(x)\n");
}


#[test]
fn test_undeclared_in_expression_position_is_not_checked() {
	// Identifiers in expression position are intentionally not checked against
	// the symbol table. Only declaration and assignment targets are.
	let (code, errors) = translate("inprograma escreva y; fmprograma");

	assert!(errors.is_empty());
	assert_eq!(code, "print(y)\n");
}


#[test]
fn test_loop_variable_shadows_silently() {
	// Declaring the loop variable beforehand is not a redeclaration.
	let (code, errors) = translate(
		"inprograma ni i = 9; para (i in range(3)) { escreva i; } fmprograma"
	);

	assert!(errors.is_empty());
	assert_eq!(code, "i = 9\nfor i in range(3):\n    print(i)\n");
}


#[test]
fn test_loop_variable_is_declared_after_the_body() {
	// The loop variable only enters the symbol table when the whole loop is
	// reduced. Assigning to it inside its own body is an undeclared use, while
	// assigning to it after the loop is fine.
	let (code, errors) = translate(
		"inprograma \
			para (i in range(3)) { i = i + 1; } \
			i = 0; \
		fmprograma"
	);

	assert_matches!(
		&errors[..],
		[Error::Undeclared { name, .. }] => assert_eq!(name.as_ref(), "i")
	);

	assert_eq!(code, "for i in range(3):\n\ni = 0\n");
}


#[test]
fn test_chained_sum_requires_identifier_on_the_left() {
	let (_, errors) = translate("inprograma escreva 1 + 2; fmprograma");

	assert_matches!(&errors[..], [Error::Unexpected { .. }]);
}


#[test]
fn test_float_literal_expression() {
	let (code, errors) = translate("inprograma ni x = 12.5; ni y = 3.0; fmprograma");

	assert!(errors.is_empty());
	assert_eq!(code, "x = 12.5\ny = 3.0\n");
}


#[test]
fn test_missing_semicolon_recovers_at_the_next_statement() {
	let (code, errors) = translate(
		"inprograma ni x = 1 escreva x; escreva x; fmprograma"
	);

	assert_matches!(&errors[..], [Error::Unexpected { .. }]);

	// The malformed statement is dropped; parsing resumes at the next boundary.
	assert_eq!(code, "print(x)\n");
}


#[test]
fn test_unexpected_eof() {
	let (_, errors) = translate("inprograma ni x = ");

	assert_matches!(&errors[..], [Error::UnexpectedEof]);
}


#[test]
fn test_empty_program_is_a_syntax_error() {
	let (_, errors) = translate("inprograma fmprograma");

	assert_matches!(&errors[..], [Error::Unexpected { .. }]);
}


#[test]
fn test_trailing_input_after_program_end() {
	let (_, errors) = translate("inprograma ni x = 1; fmprograma escreva x;");

	assert_matches!(&errors[..], [Error::Unexpected { .. }]);
}
