//! Source buffer handling and diagnostic rendering for the plang frontend

#![no_std]

extern crate alloc;
extern crate std;

mod filemap;
mod fileunit;
mod report;

use alloc::string::String;
use plang_core::Span;

pub use filemap::{Column, Line, LineCol, LinesMap};
pub use fileunit::FileUnit;
pub use report::{Report, ReportKind};

/// Which phase of the frontend rejected the input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// A character that cannot start any token
    Lex,
    /// A token that does not fit any production at the current position
    Syntax,
}

/// A parse failure, ready to be presented to the user
///
/// The parse is all-or-nothing, so a single error describes the whole
/// outcome. `location` is the byte range of the offending character or
/// token, or an empty range at the end of the input.
#[derive(Debug, Clone)]
pub struct ParseError {
    pub location: Span,
    pub description: String,
    pub note: Option<String>,
    pub kind: ParseErrorKind,
}

impl core::fmt::Display for ParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} at offset {}", self.description, self.location.start)
    }
}

impl ParseError {
    pub fn to_report(&self) -> Report {
        let here = match self.kind {
            ParseErrorKind::Lex => "cannot start a token",
            ParseErrorKind::Syntax => "parsing stopped here",
        };
        let mut report = Report::new(ReportKind::Error, self.description.clone())
            .highlight(self.location.clone(), String::from(here));
        if let Some(note) = &self.note {
            report = report.note(note.clone());
        }
        report
    }
}
