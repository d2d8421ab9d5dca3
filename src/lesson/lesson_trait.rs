use std::io::{BufRead, Write};

use crate::{console::{Console, ConsoleError}, exception::Exception, options::Options};

/// How a lesson ended.
#[derive(Debug, Clone, PartialEq)]
pub enum LessonOutcome {
	/// Nothing went wrong.
	Completed,
	/// An exception was raised, caught and reported.
	Handled(Exception),
}

pub trait Lesson {
	/// The name shown in logs and when listing lessons.
	fn name(&self) -> &'static str;
	/// Runs the lesson to completion. Only console failures are returned as errors, exceptions are handled inside the lesson.
	fn run<R: BufRead, W: Write>(&mut self, console: &mut Console<R, W>, options: &Options) -> Result<LessonOutcome, ConsoleError>;
	/// The catch all handler, describes any exception in three lines: its kind, its category and its message.
	fn handle_any_exception<R: BufRead, W: Write>(&mut self, console: &mut Console<R, W>, exception: Exception) -> Result<LessonOutcome, ConsoleError> {
		tracing::info!(lesson = self.name(), code = exception.code(), "handled {}", exception.kind_name());
		console.write_error_line(exception.kind_name())?;
		console.write_error_line(exception.category().name())?;
		console.write_error_line(format_args!("Error occurred: {exception}"))?;
		Ok(LessonOutcome::Handled(exception))
	}
}
