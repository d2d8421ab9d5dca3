use std::{f64::{INFINITY, NAN, NEG_INFINITY}, fmt::{self, Display, Formatter}, rc::Rc};

use num::{BigInt, BigRational, Signed, ToPrimitive, Zero};

use crate::{exception::Exception, options::Options};

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct IntValue {
	pub value: Rc<BigInt>,
}

impl IntValue {
	pub fn new(value: Rc<BigInt>) -> Self {
		Self {
			value,
		}
	}

	pub fn from_bigint(value: BigInt) -> Self {
		Self::new(Rc::new(value))
	}

	pub fn is_zero(&self) -> bool {
		self.value.is_zero()
	}

	/// Converts base 10 integer text into an integer. Surrounding whitespace is ignored, a sign may prefix the digits and single underscores may separate digits.
	/// Returns `Exception::InvalidIntegerLiteral` holding the unaltered text if it is not an integer.
	pub fn parse(text: &str) -> Result<Self, Exception> {
		let invalid = || Exception::InvalidIntegerLiteral { text: text.into() };
		let trimmed = text.trim();
		// Split off the sign
		let (is_negative, digits_and_underscores) = match trimmed.chars().next() {
			Some('-') => (true, &trimmed[1..]),
			Some('+') => (false, &trimmed[1..]),
			_ => (false, trimmed),
		};
		// Collect digits, underscores are only allowed between two digits
		let mut digits = String::with_capacity(digits_and_underscores.len());
		let mut last_was_digit = false;
		let mut chars = digits_and_underscores.chars().peekable();
		while let Some(chr) = chars.next() {
			match chr {
				'0'..='9' => {
					digits.push(chr);
					last_was_digit = true;
				}
				'_' if last_was_digit && chars.peek().is_some_and(|next| next.is_ascii_digit()) => last_was_digit = false,
				_ => return Err(invalid()),
			}
		}
		if digits.is_empty() {
			return Err(invalid());
		}
		let magnitude: BigInt = digits.parse().map_err(|_| invalid())?;
		Ok(Self::from_bigint(match is_negative {
			true => -magnitude,
			false => magnitude,
		}))
	}
}

impl Display for IntValue {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.value)
	}
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub struct FloatValue {
	pub value: f64,
}

impl FloatValue {
	pub const fn new(value: f64) -> Self {
		Self {
			value,
		}
	}

	/// True division of two integers, always gives a float.
	/// Dividing by zero throws `Exception::DivisionByZero` unless the options allow it, in which case the result is infinite or NaN.
	pub fn divide(numerator: &IntValue, denominator: &IntValue, options: &Options) -> Result<Self, Exception> {
		// Division by zero
		if denominator.is_zero() {
			if !options.allow_divide_by_zero() {
				return Err(Exception::DivisionByZero);
			}
			return Ok(Self::new(match numerator.value.is_positive() {
				_ if numerator.is_zero() => NAN,
				true => INFINITY,
				false => NEG_INFINITY,
			}));
		}
		// Divide as floats if both fit, otherwise divide exactly and then convert
		let quotient = match (numerator.value.to_f64(), denominator.value.to_f64()) {
			(Some(numerator), Some(denominator)) if numerator.is_finite() && denominator.is_finite() => numerator / denominator,
			_ => {
				let exact = BigRational::new((*numerator.value).clone(), (*denominator.value).clone());
				match exact.to_f64() {
					Some(quotient) => quotient,
					None => match exact.is_positive() {
						true => INFINITY,
						false => NEG_INFINITY,
					},
				}
			}
		};
		if !quotient.is_finite() && !options.allow_overflow() {
			return Err(Exception::Overflow);
		}
		Ok(Self::new(quotient))
	}
}

impl Display for FloatValue {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		let value = self.value;
		match value {
			_ if value.is_nan() => write!(f, "nan"),
			_ if value.is_infinite() => write!(f, "{}", match value.is_sign_positive() {
				true => "inf",
				false => "-inf",
			}),
			// Very large or very small magnitudes in exponent form with a signed exponent of at least two digits
			_ if value != 0. && (value.abs() >= 1e16 || value.abs() < 1e-4) => {
				let exponent_form = format!("{:e}", value);
				let (mantissa, exponent) = exponent_form.split_once('e').unwrap_or((exponent_form.as_str(), "0"));
				let (exponent_sign, exponent_digits) = match exponent.strip_prefix('-') {
					Some(exponent_digits) => ('-', exponent_digits),
					None => ('+', exponent),
				};
				write!(f, "{mantissa}e{exponent_sign}{exponent_digits:0>2}")
			}
			_ if value.fract() == 0. => write!(f, "{:.1}", value),
			_ => write!(f, "{}", value),
		}
	}
}
