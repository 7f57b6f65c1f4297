use alloc::vec::Vec;
use core::fmt::{self, Debug, Display};
use plang_core::Span;

/// Fast resolver from raw byte offset to (line, col)
///
/// Stores the byte offset of the start of every line. An offset equal to the
/// content length resolves to the position just past the last character, so
/// that end-of-input spans can be reported.
pub struct LinesMap {
    len: usize,
    starts: Vec<usize>,
}

/// Zero-based line number, displayed one-based
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Line(pub u32);

pub type Column = u32;

#[derive(Clone, Copy, PartialEq, Eq)]
pub struct LineCol {
    line: Line,
    col: Column,
}

impl LineCol {
    pub fn new(line: Line, col: Column) -> Self {
        Self { line, col }
    }

    pub fn line(&self) -> Line {
        self.line
    }

    pub fn col(&self) -> Column {
        self.col
    }
}

impl Debug for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0 + 1)
    }
}

impl Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&(self.0 + 1), f)
    }
}

impl Debug for LineCol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.col)
    }
}

impl Display for LineCol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.col)
    }
}

impl LinesMap {
    pub fn new(content: &str) -> Self {
        let mut starts = Vec::new();
        starts.push(0);
        for (ofs, byte) in content.bytes().enumerate() {
            if byte == b'\n' {
                starts.push(ofs + 1)
            }
        }
        Self {
            len: content.len(),
            starts,
        }
    }

    pub fn last_line(&self) -> Line {
        Line((self.starts.len() - 1) as u32)
    }

    pub fn resolve(&self, offset: usize) -> Option<LineCol> {
        if offset > self.len {
            return None;
        }
        let line = match self.starts.binary_search(&offset) {
            Ok(index) => index,
            Err(above) => above - 1,
        };
        Some(LineCol {
            line: Line(line as u32),
            col: (offset - self.starts[line]) as Column,
        })
    }

    pub fn resolve_span(&self, span: &Span) -> Option<(LineCol, LineCol)> {
        let start = self.resolve(span.start)?;
        let end = self.resolve(span.end)?;
        Some((start, end))
    }

    /// Byte range of the given line, including its trailing newline
    pub fn line_span(&self, line: Line) -> Span {
        let index = line.0 as usize;
        if index >= self.starts.len() {
            panic!(
                "line {} is out of bound : {} lines",
                line,
                self.starts.len()
            )
        }
        let start = self.starts[index];
        let end = match self.starts.get(index + 1) {
            None => self.len,
            Some(next_start) => *next_start,
        };
        start..end
    }
}
