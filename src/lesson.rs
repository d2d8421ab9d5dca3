pub mod lesson_trait;
pub mod number_entry;
pub mod division;
pub mod age_entry;

use std::io::{BufRead, Write};

use strum::IntoEnumIterator;
use strum_macros::EnumIter;

use crate::{console::{Console, ConsoleError}, lesson::{age_entry::AgeEntry, division::Division, lesson_trait::{Lesson, LessonOutcome}, number_entry::NumberEntry}, options::Options};

/// Every lesson, in the order they run when none are chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter)]
pub enum LessonKind {
	Number,
	Division,
	Age,
}

impl LessonKind {
	const fn get_names(self) -> &'static [&'static str] {
		match self {
			Self::Number => &["number", "num"],
			Self::Division => &["division", "divide", "div"],
			Self::Age => &["age"],
		}
	}

	/// The name a lesson is listed under.
	pub const fn get_name(self) -> &'static str {
		self.get_names()[0]
	}

	/// Finds the lesson with a name or alias matching the text, ignoring ASCII case.
	pub fn from_name(name: &str) -> Option<Self> {
		let name = name.trim_ascii();
		Self::iter().find(|kind| kind.get_names().iter().any(|kind_name| kind_name.eq_ignore_ascii_case(name)))
	}

	fn run<R: BufRead, W: Write>(self, console: &mut Console<R, W>, options: &Options) -> Result<LessonOutcome, ConsoleError> {
		match self {
			Self::Number => run_lesson(NumberEntry, console, options),
			Self::Division => run_lesson(Division, console, options),
			Self::Age => run_lesson(AgeEntry, console, options),
		}
	}
}

fn run_lesson<L: Lesson, R: BufRead, W: Write>(mut lesson: L, console: &mut Console<R, W>, options: &Options) -> Result<LessonOutcome, ConsoleError> {
	let span = tracing::debug_span!("lesson", name = lesson.name());
	let _entered = span.enter();
	tracing::debug!("starting");
	let outcome = lesson.run(console, options)?;
	tracing::debug!(?outcome, "finished");
	Ok(outcome)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunSummary {
	pub lessons_run: usize,
	pub exceptions_handled: usize,
}

/// Runs the lessons in order. An empty list runs every lesson.
pub fn run_lessons<R: BufRead, W: Write>(kinds: &[LessonKind], console: &mut Console<R, W>, options: &Options) -> Result<RunSummary, ConsoleError> {
	let kinds: Vec<LessonKind> = match kinds.is_empty() {
		true => LessonKind::iter().collect(),
		false => kinds.to_vec(),
	};
	let mut summary = RunSummary::default();
	for kind in kinds {
		let outcome = kind.run(console, options)?;
		summary.lessons_run += 1;
		if let LessonOutcome::Handled(_) = outcome {
			summary.exceptions_handled += 1;
		}
	}
	console.flush()?;
	tracing::info!(lessons_run = summary.lessons_run, exceptions_handled = summary.exceptions_handled, "lessons finished");
	Ok(summary)
}
