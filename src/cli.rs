use clap::Parser;
use num::BigInt;

use crate::{lesson::LessonKind, options::{ColorOption, MathOption, Options}};

#[derive(Parser, Debug)]
#[command(name = "console_exceptions")]
#[command(version, about = "Console lessons on handling invalid input and arithmetic errors", long_about = None)]
pub struct Cli {
	/// Lesson to run (number, division or age), may be repeated. Runs every lesson if not given
	#[arg(long = "lesson", short = 'l', value_parser = parse_lesson_kind)]
	pub lessons: Vec<LessonKind>,
	/// Print the lesson names and exit
	#[arg(long, default_value_t = false)]
	pub list: bool,
	/// Numerator of the division lesson
	#[arg(long, allow_hyphen_values = true, value_parser = parse_bigint)]
	pub numerator: Option<BigInt>,
	/// Denominator of the division lesson
	#[arg(long, allow_hyphen_values = true, value_parser = parse_bigint)]
	pub denominator: Option<BigInt>,
	/// How division by zero and overflow behave
	#[arg(long, value_enum)]
	pub math: Option<MathOption>,
	/// When to print handled errors in color
	#[arg(long, value_enum)]
	pub color: Option<ColorOption>,
	/// Ask again after an invalid age instead of moving on
	#[arg(long, default_value_t = false)]
	pub reprompt: bool,
}

impl Cli {
	pub fn to_options(&self) -> Options {
		let mut options = Options::new();
		options.math = self.math;
		options.color = self.color;
		options.reprompt = Some(self.reprompt);
		options.numerator = self.numerator.clone();
		options.denominator = self.denominator.clone();
		options
	}
}

/// The exit code for a command line that failed to parse. Help and version requests are not failures.
pub fn parse_error_exit_code(error: &clap::Error) -> u8 {
	match error.use_stderr() {
		true => 1,
		false => 0,
	}
}

fn parse_lesson_kind(name: &str) -> Result<LessonKind, String> {
	LessonKind::from_name(name).ok_or_else(|| format!("unknown lesson \"{name}\""))
}

fn parse_bigint(text: &str) -> Result<BigInt, String> {
	crate::value::IntValue::parse(text).map(|value| (*value.value).clone()).map_err(|exception| exception.to_string())
}
