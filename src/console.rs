use std::{fmt::Display, io::{self, stdin, stdout, BufRead, IsTerminal, StdinLock, Stdout, Write}};

use crossterm::{queue, style::{Color, ContentStyle, Print, PrintStyledContent, StyledContent}};
use thiserror::Error;

use crate::options::Options;

#[derive(Debug, Error)]
pub enum ConsoleError {
	#[error("unable to read from the console: {0}")]
	Read(#[source] io::Error),
	#[error("unable to write to the console: {0}")]
	Write(#[source] io::Error),
}

/// A line based console that prompts for and reads lines of text and writes plain or styled lines.
pub struct Console<R, W> {
	reader: R,
	writer: W,
	use_color: bool,
}

impl Console<StdinLock<'static>, Stdout> {
	/// A console over the standard input and output of the process.
	pub fn stdio(options: &Options) -> Self {
		let writer = stdout();
		let use_color = options.use_color(writer.is_terminal());
		Self::new(stdin().lock(), writer, use_color)
	}
}

impl<R: BufRead, W: Write> Console<R, W> {
	pub fn new(reader: R, writer: W, use_color: bool) -> Self {
		Self {
			reader,
			writer,
			use_color,
		}
	}

	/// Writes the prompt without a newline and reads the line entered after it. Returns:
	/// * `Ok(Some(line))` with the line terminator removed if a line was read.
	/// * `Ok(None)` if the input has ended.
	pub fn prompt(&mut self, prompt: &str) -> Result<Option<String>, ConsoleError> {
		write!(self.writer, "{prompt}").map_err(ConsoleError::Write)?;
		self.writer.flush().map_err(ConsoleError::Write)?;
		self.read_line()
	}

	pub fn read_line(&mut self) -> Result<Option<String>, ConsoleError> {
		let mut line = String::new();
		if self.reader.read_line(&mut line).map_err(ConsoleError::Read)? == 0 {
			return Ok(None);
		}
		// Remove the line terminator
		if line.ends_with('\n') {
			line.pop();
			if line.ends_with('\r') {
				line.pop();
			}
		}
		Ok(Some(line))
	}

	pub fn write_line<T>(&mut self, to_write: T) -> Result<(), ConsoleError> where T: Display {
		writeln!(self.writer, "{to_write}").map_err(ConsoleError::Write)
	}

	/// Writes a line describing a handled error, in red if color is enabled.
	pub fn write_error_line<T>(&mut self, to_write: T) -> Result<(), ConsoleError> where T: Display {
		match self.use_color {
			true => {
				let style = ContentStyle { foreground_color: Some(Color::Red), ..Default::default() };
				queue!(self.writer, PrintStyledContent(StyledContent::new(style, to_write)), Print('\n')).map_err(ConsoleError::Write)?;
			}
			false => writeln!(self.writer, "{to_write}").map_err(ConsoleError::Write)?,
		}
		Ok(())
	}

	pub fn flush(&mut self) -> Result<(), ConsoleError> {
		self.writer.flush().map_err(ConsoleError::Write)
	}
}
