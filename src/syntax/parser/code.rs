//! Synthesis of the Python fragments attached to each grammar rule.
//!
//! Fragments are plain strings, built bottom-up from child fragments and never
//! mutated after creation. Every statement fragment ends with a newline.

use super::Literal;


/// The prompt emitted for read statements. The spelling, including the trailing
/// space, is part of the translator's output contract.
pub const READ_PROMPT: &str = "Digite um numero : ";

/// Spaces per nesting level in the generated code.
pub const INDENT: usize = 4;


/// An assignment statement. Declarations translate to the same form.
pub fn assign(name: &str, expr: &str) -> String {
	format!("{} = {}\n", name, expr)
}


/// A call to Python's output primitive.
pub fn print(expr: &str) -> String {
	format!("print({})\n", expr)
}


/// Prompt for a number and bind it, parsed as a float.
pub fn read(name: &str) -> String {
	format!("{} = float(input('{}'))\n", name, READ_PROMPT)
}


/// Iteration from 0 up to (exclusive) the range expression.
pub fn for_loop(variable: &str, range: &str, body: &str) -> String {
	format!("for {} in range({}):\n{}\n", variable, range, indent(body))
}


pub fn while_loop(condition: &str, body: &str) -> String {
	format!("while {}:\n{}\n", condition, indent(body))
}


/// The textual form of a number literal.
pub fn literal(literal: &Literal) -> String {
	match literal {
		Literal::Int(int) => int.to_string(),
		Literal::Float(float) => float_literal(*float),
	}
}


/// Floats with an integral value must keep a decimal point, so that the
/// generated literal stays a float in Python.
fn float_literal(value: f64) -> String {
	if value.fract() == 0.0 && value.is_finite() {
		format!("{:.1}", value)
	} else {
		value.to_string()
	}
}


/// Indent every line of a block by one level. Empty lines are left empty,
/// never padded.
fn indent(text: &str) -> String {
	let lines: Vec<String> = text
		.lines()
		.map(|line| {
			if line.is_empty() {
				String::new()
			} else {
				format!("{:width$}{}", "", line, width = INDENT)
			}
		})
		.collect();

	lines.join("\n")
}
