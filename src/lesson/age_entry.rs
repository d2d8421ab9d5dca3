use std::io::{BufRead, Write};

use crate::{console::{Console, ConsoleError}, exception::Exception, lesson::lesson_trait::{Lesson, LessonOutcome}, options::Options, value::IntValue};

/// Asks for an age as a whole number, catching invalid integer literals specifically.
pub struct AgeEntry;

impl Lesson for AgeEntry {
	fn name(&self) -> &'static str {
		"age entry"
	}

	fn run<R: BufRead, W: Write>(&mut self, console: &mut Console<R, W>, options: &Options) -> Result<LessonOutcome, ConsoleError> {
		// Loop until a valid age is entered, or only once if not reprompting
		let mut is_redoing = false;
		loop {
			if is_redoing {
				console.write_line("Input error, please re-enter.")?;
			}
			is_redoing = true;
			let line = match console.prompt("Enter your age: ")? {
				Some(line) => line,
				None => {
					tracing::info!(lesson = self.name(), "input ended before an age was entered");
					console.write_error_line("No age entered.")?;
					return Ok(LessonOutcome::Handled(Exception::EndOfInput));
				}
			};
			match IntValue::parse(&line) {
				Ok(age) => {
					console.write_line(format_args!("Your age is {age}"))?;
					return Ok(LessonOutcome::Completed);
				}
				Err(exception @ Exception::InvalidIntegerLiteral { .. }) => {
					tracing::info!(lesson = self.name(), code = exception.code(), "handled invalid age");
					console.write_error_line(format_args!("Invalid input! Please enter a whole number. Error: {exception}"))?;
					if !options.reprompt_on_invalid_input() {
						return Ok(LessonOutcome::Handled(exception));
					}
				}
				Err(exception) => return self.handle_any_exception(console, exception),
			}
		}
	}
}
