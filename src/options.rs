use clap::ValueEnum;
use num::BigInt;

#[derive(Debug, PartialEq, Eq, Clone, Copy, ValueEnum)]
pub enum MathOption {
	/// Division by zero and overflow raise an exception.
	Strict,
	/// Division by zero and overflow give a non finite value.
	Ieee,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, ValueEnum)]
pub enum ColorOption {
	Auto,
	Always,
	Never,
}

/// The set of options a run of lessons is configured with.
#[derive(Debug, Clone)]
pub struct Options {
	pub math: Option<MathOption>,
	pub color: Option<ColorOption>,
	pub reprompt: Option<bool>,
	pub numerator: Option<BigInt>,
	pub denominator: Option<BigInt>,
}

impl Options {
	/// Get a default set of options, as if nothing was set on the command line.
	pub fn new() -> Self {
		Self {
			math: None,
			color: None,
			reprompt: None,
			numerator: None,
			denominator: None,
		}
	}

	pub const fn get_math_option(&self) -> MathOption {
		match self.math {
			None => MathOption::Strict,
			Some(math_option) => math_option,
		}
	}

	pub const fn get_color_option(&self) -> ColorOption {
		match self.color {
			None => ColorOption::Auto,
			Some(color_option) => color_option,
		}
	}

	/// Returns false if division by zero should throw an exception, returns true if it should return a non finite value.
	pub const fn allow_divide_by_zero(&self) -> bool {
		match self.get_math_option() {
			MathOption::Ieee => true,
			MathOption::Strict => false,
		}
	}

	/// Returns false if a quotient too large for a float should throw an exception, returns true if it should return a non finite value.
	pub const fn allow_overflow(&self) -> bool {
		match self.get_math_option() {
			MathOption::Ieee => true,
			MathOption::Strict => false,
		}
	}

	/// Returns true if invalid input to a prompt that asks for a whole number should be asked for again.
	pub const fn reprompt_on_invalid_input(&self) -> bool {
		match self.reprompt {
			None => false,
			Some(reprompt) => reprompt,
		}
	}

	/// Returns if error lines should be styled, `is_terminal` is if the output is an interactive terminal.
	pub const fn use_color(&self, is_terminal: bool) -> bool {
		match self.get_color_option() {
			ColorOption::Auto => is_terminal,
			ColorOption::Always => true,
			ColorOption::Never => false,
		}
	}

	pub fn get_numerator(&self) -> BigInt {
		match &self.numerator {
			None => BigInt::from(10),
			Some(numerator) => numerator.clone(),
		}
	}

	pub fn get_denominator(&self) -> BigInt {
		match &self.denominator {
			None => BigInt::ZERO,
			Some(denominator) => denominator.clone(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn defaults_divide_ten_by_zero_strictly() {
		let options = Options::new();
		assert_eq!(options.get_numerator(), BigInt::from(10));
		assert_eq!(options.get_denominator(), BigInt::ZERO);
		assert!(!options.allow_divide_by_zero());
		assert!(!options.allow_overflow());
		assert!(!options.reprompt_on_invalid_input());
	}

	#[test]
	fn color_follows_terminal_only_on_auto() {
		let mut options = Options::new();
		assert!(options.use_color(true));
		assert!(!options.use_color(false));
		options.color = Some(ColorOption::Never);
		assert!(!options.use_color(true));
		options.color = Some(ColorOption::Always);
		assert!(options.use_color(false));
	}

	#[test]
	fn ieee_math_allows_division_by_zero() {
		let mut options = Options::new();
		options.math = Some(MathOption::Ieee);
		assert!(options.allow_divide_by_zero());
		assert!(options.allow_overflow());
	}
}
