mod args;
mod symbol;
mod syntax;
mod term;

use std::path::Path;

use term::color;

use args::{Args, Command};


/// How many errors to print before suppressing the rest.
const MAX_ERRORS: usize = 20;


fn main() -> ! {
	let command = match args::parse(std::env::args_os()) {
		Ok(command) => command,
		Err(error) => {
			eprint!("{}", error);
			std::process::exit(1)
		}
	};

	let result = match command {
		Command::Run(args) => run(args),
		Command::Help(msg) | Command::Version(msg) => {
			println!("{}", msg);
			std::process::exit(0)
		},
	};

	let exit_code = match result {
		Ok(code) => code,
		Err(error) => {
			eprintln!("{}", error);
			1
		}
	};

	std::process::exit(exit_code)
}


fn run(args: Args) -> std::io::Result<i32> {
	let source = match &args.script {
		Some(path) => syntax::Source::from_path(path.as_path())?,
		None => syntax::Source::from_reader(
			Path::new("<stdin>"),
			std::io::stdin().lock(),
		)?,
	};

	let analysis = syntax::Analysis::analyze(&source);

	if args.print_tokens {
		for token in analysis.tokens.iter() {
			println!("{}", token);
		}
	}

	for error in analysis.errors.iter().take(MAX_ERRORS) {
		eprintln!(
			"{}: {}: {}",
			color::Fg(color::Red, "Error"),
			source.path.display(),
			error
		);
	}

	let suppressed = analysis.errors.len().saturating_sub(MAX_ERRORS);
	if suppressed > 0 {
		eprintln!(
			"{} {}",
			color::Fg(color::Red, suppressed),
			color::Fg(color::Red, "more suppressed errors"),
		);
	}

	if !analysis.is_valid() {
		return Ok(2);
	}

	if args.check {
		return Ok(0);
	}

	match &args.output {
		Some(path) => std::fs::write(path, &analysis.code)?,
		None => print!("{}", analysis.code),
	}

	Ok(0)
}
