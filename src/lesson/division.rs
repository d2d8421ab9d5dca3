use std::io::{BufRead, Write};

use crate::{console::{Console, ConsoleError}, exception::Exception, lesson::lesson_trait::{Lesson, LessonOutcome}, options::Options, value::{FloatValue, IntValue}};

/// Divides the configured numerator by the configured denominator, catching division by zero specifically.
pub struct Division;

impl Lesson for Division {
	fn name(&self) -> &'static str {
		"division"
	}

	fn run<R: BufRead, W: Write>(&mut self, console: &mut Console<R, W>, options: &Options) -> Result<LessonOutcome, ConsoleError> {
		let numerator = IntValue::from_bigint(options.get_numerator());
		let denominator = IntValue::from_bigint(options.get_denominator());
		match FloatValue::divide(&numerator, &denominator, options) {
			Ok(quotient) => {
				console.write_line(format_args!("{numerator} / {denominator} = {quotient}"))?;
				Ok(LessonOutcome::Completed)
			}
			Err(exception @ Exception::DivisionByZero) => {
				tracing::info!(lesson = self.name(), %numerator, "handled division by zero");
				console.write_error_line(format_args!("Division by zero is not allowed: {}", exception.kind_name()))?;
				console.write_error_line(format_args!("Division by zero is not allowed: {exception}"))?;
				Ok(LessonOutcome::Handled(exception))
			}
			Err(exception) => self.handle_any_exception(console, exception),
		}
	}
}

#[cfg(test)]
mod tests {
	use num::BigInt;

	use super::*;
	use crate::{console::tests::{test_console, written}, options::MathOption};

	fn run(options: &Options) -> (LessonOutcome, String) {
		let mut console = test_console("");
		let outcome = Division.run(&mut console, options).unwrap();
		(outcome, written(&console))
	}

	#[test]
	fn ten_by_zero_prints_both_messages() {
		let (outcome, output) = run(&Options::new());
		assert_eq!(outcome, LessonOutcome::Handled(Exception::DivisionByZero));
		assert_eq!(output, "Division by zero is not allowed: DivisionByZero\nDivision by zero is not allowed: division by zero\n");
	}

	#[test]
	fn division_by_zero_is_caught_every_time() {
		for _ in 0..3 {
			assert_eq!(run(&Options::new()).0, LessonOutcome::Handled(Exception::DivisionByZero));
		}
	}

	#[test]
	fn ieee_math_prints_infinity() {
		let mut options = Options::new();
		options.math = Some(MathOption::Ieee);
		let (outcome, output) = run(&options);
		assert_eq!(outcome, LessonOutcome::Completed);
		assert_eq!(output, "10 / 0 = inf\n");
	}

	#[test]
	fn non_zero_denominator_prints_the_quotient() {
		let mut options = Options::new();
		options.denominator = Some(BigInt::from(4));
		let (outcome, output) = run(&options);
		assert_eq!(outcome, LessonOutcome::Completed);
		assert_eq!(output, "10 / 4 = 2.5\n");
	}

	#[test]
	fn overflow_goes_to_the_catch_all_handler() {
		let mut options = Options::new();
		options.numerator = Some(BigInt::from(10).pow(400));
		options.denominator = Some(BigInt::from(1));
		let (outcome, output) = run(&options);
		assert_eq!(outcome, LessonOutcome::Handled(Exception::Overflow));
		assert!(output.starts_with("Overflow\nArithmetic\nError occurred: numeric overflow\n"));
	}
}
