mod cli;
mod console;
mod exception;
mod lesson;
mod options;
mod value;

use std::process::ExitCode;

use clap::Parser;
use strum::IntoEnumIterator;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::{cli::Cli, console::Console, lesson::{run_lessons, LessonKind}};

fn main() -> ExitCode {
	let cli = match Cli::try_parse() {
		Ok(cli) => cli,
		Err(error) => {
			// Usage errors go to stderr, help and version to stdout
			let _ = error.print();
			return ExitCode::from(cli::parse_error_exit_code(&error));
		}
	};
	// Log to stderr so the log never mixes with the lessons on stdout
	tracing_subscriber::registry()
		.with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
		.with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr).with_target(false))
		.init();
	// List lessons
	if cli.list {
		for kind in LessonKind::iter() {
			println!("{}", kind.get_name());
		}
		return ExitCode::SUCCESS;
	}
	// Run lessons
	let options = cli.to_options();
	tracing::debug!(?options, "starting lessons");
	let mut console = Console::stdio(&options);
	match run_lessons(&cli.lessons, &mut console, &options) {
		Ok(_) => ExitCode::SUCCESS,
		Err(error) => {
			tracing::error!(%error, "lessons aborted");
			eprintln!("Error: {error}");
			ExitCode::FAILURE
		}
	}
}
