use std::ffi::OsString;
use std::path::PathBuf;

use clap::{clap_app, crate_authors, crate_description, crate_version};


#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Command {
	Help(Box<str>),
	Version(Box<str>),
	Run(Args),
}


#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Args {
	/// The script to translate. Stdin when absent.
	pub script: Option<PathBuf>,
	/// Analyze only, don't write the translation.
	pub check: bool,
	/// Print the token listing.
	pub print_tokens: bool,
	/// Where to write the translated program. Stdout when absent.
	pub output: Option<PathBuf>,
}


pub fn parse<A, T>(args: A) -> clap::Result<Command>
where
	A: IntoIterator<Item = T>,
	T: Into<OsString> + Clone,
{
	let app = clap_app!(
		minipy =>
			(version: crate_version!())
			(author: crate_authors!())
			(about: crate_description!())
			(@arg SCRIPT: "The program to translate. Reads from stdin when omitted.")
			(@arg check: --check "Perform only the analysis instead of writing the translation.")
			(@arg tokens: --tokens "Print the token listing.")
			(@arg output: -o --output +takes_value "Write the translated program to a file instead of stdout.")
	);

	match app.get_matches_from_safe(args) {
		Ok(matches) => Ok(
			Command::Run(
				Args {
					script: matches.value_of_os("SCRIPT").map(PathBuf::from),
					check: matches.is_present("check"),
					print_tokens: matches.is_present("tokens"),
					output: matches.value_of_os("output").map(PathBuf::from),
				}
			)
		),

		Err(error) => match error.kind {
			clap::ErrorKind::HelpDisplayed => Ok(
				Command::Help(error.message.into_boxed_str())
			),
			clap::ErrorKind::VersionDisplayed => Ok(
				Command::Version(error.message.into_boxed_str())
			),
			_ => Err(error)
		}
	}
}
