use strum_macros::IntoStaticStr;
use thiserror::Error;

/// A recoverable failure raised while converting or calculating with console input.
#[derive(Debug, Clone, PartialEq, Error, IntoStaticStr)]
pub enum Exception {
	#[error("invalid literal for an integer with base 10: '{}'", escape_quoted(text))]
	InvalidIntegerLiteral { text: String },
	#[error("end of input when reading a line")]
	EndOfInput,
	#[error("division by zero")]
	DivisionByZero,
	#[error("numeric overflow")]
	Overflow,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, IntoStaticStr)]
pub enum ExceptionCategory {
	Value,
	Input,
	Arithmetic,
}

impl ExceptionCategory {
	pub fn name(self) -> &'static str {
		self.into()
	}
}

impl Exception {
	pub const fn code(&self) -> u16 {
		match self {
			Self::InvalidIntegerLiteral { .. } => 2001,
			Self::EndOfInput => 2002,
			Self::DivisionByZero => 3001,
			Self::Overflow => 3009,
		}
	}

	pub const fn category(&self) -> ExceptionCategory {
		match self {
			Self::InvalidIntegerLiteral { .. } => ExceptionCategory::Value,
			Self::EndOfInput => ExceptionCategory::Input,
			Self::DivisionByZero | Self::Overflow => ExceptionCategory::Arithmetic,
		}
	}

	/// The name of the exception kind without any of its data, eg. `DivisionByZero`.
	pub fn kind_name(&self) -> &'static str {
		self.into()
	}
}

/// Escapes backslashes and single quotes so the text can be shown between single quotes.
fn escape_quoted(text: &str) -> String {
	let mut escaped = String::with_capacity(text.len());
	for chr in text.chars() {
		if matches!(chr, '\\' | '\'') {
			escaped.push('\\');
		}
		escaped.push(chr);
	}
	escaped
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn invalid_literal_message_quotes_original_text() {
		let exception = Exception::InvalidIntegerLiteral { text: " abc ".into() };
		assert_eq!(exception.to_string(), "invalid literal for an integer with base 10: ' abc '");
	}

	#[test]
	fn invalid_literal_message_escapes_quotes() {
		let exception = Exception::InvalidIntegerLiteral { text: r"it's\".into() };
		assert_eq!(exception.to_string(), r"invalid literal for an integer with base 10: 'it\'s\\'");
	}

	#[test]
	fn kind_names_and_codes() {
		assert_eq!(Exception::DivisionByZero.kind_name(), "DivisionByZero");
		assert_eq!(Exception::DivisionByZero.code(), 3001);
		assert_eq!(Exception::InvalidIntegerLiteral { text: String::new() }.kind_name(), "InvalidIntegerLiteral");
		assert_eq!(Exception::EndOfInput.category().name(), "Input");
		assert_eq!(Exception::Overflow.category(), ExceptionCategory::Arithmetic);
	}
}
