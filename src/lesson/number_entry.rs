use std::io::{BufRead, Write};

use crate::{console::{Console, ConsoleError}, exception::Exception, lesson::lesson_trait::{Lesson, LessonOutcome}, options::Options, value::IntValue};

/// Asks for a number and reports any failure to read or convert it with the catch all handler.
pub struct NumberEntry;

impl Lesson for NumberEntry {
	fn name(&self) -> &'static str {
		"number entry"
	}

	fn run<R: BufRead, W: Write>(&mut self, console: &mut Console<R, W>, _options: &Options) -> Result<LessonOutcome, ConsoleError> {
		match self.read_number(console)? {
			Ok(value) => {
				tracing::debug!(%value, "number entered");
				Ok(LessonOutcome::Completed)
			}
			Err(exception) => self.handle_any_exception(console, exception),
		}
	}
}

impl NumberEntry {
	fn read_number<R: BufRead, W: Write>(&self, console: &mut Console<R, W>) -> Result<Result<IntValue, Exception>, ConsoleError> {
		Ok(match console.prompt("Enter a number: ")? {
			Some(line) => IntValue::parse(&line),
			None => Err(Exception::EndOfInput),
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::console::tests::{test_console, written};

	fn run(input: &str) -> (LessonOutcome, String) {
		let mut console = test_console(input);
		let outcome = NumberEntry.run(&mut console, &Options::new()).unwrap();
		(outcome, written(&console))
	}

	#[test]
	fn valid_number_prints_nothing_after_the_prompt() {
		let (outcome, output) = run("42\n");
		assert_eq!(outcome, LessonOutcome::Completed);
		assert_eq!(output, "Enter a number: ");
	}

	#[test]
	fn non_numeric_input_is_described() {
		let (outcome, output) = run("abc\n");
		assert_eq!(outcome, LessonOutcome::Handled(Exception::InvalidIntegerLiteral { text: "abc".into() }));
		assert_eq!(output, "Enter a number: InvalidIntegerLiteral\nValue\nError occurred: invalid literal for an integer with base 10: 'abc'\n");
	}

	#[test]
	fn end_of_input_is_described() {
		let (outcome, output) = run("");
		assert_eq!(outcome, LessonOutcome::Handled(Exception::EndOfInput));
		assert_eq!(output, "Enter a number: EndOfInput\nInput\nError occurred: end of input when reading a line\n");
	}
}
