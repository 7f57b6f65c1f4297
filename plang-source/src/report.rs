use super::filemap::{Line, LinesMap};
use super::fileunit::FileUnit;

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::Write;
use plang_core::Span;

const GUTTER: usize = 4;

/// A plain text diagnostic, rendered with the source excerpt it points at
pub struct Report {
    kind: ReportKind,
    header: String,
    highlight: Option<(Span, String)>,
    notes: Vec<String>,
}

pub enum ReportKind {
    Error,
    Warning,
    Info,
}

impl Report {
    pub fn new(kind: ReportKind, header: String) -> Self {
        Self {
            kind,
            header,
            highlight: None,
            notes: Vec::new(),
        }
    }

    pub fn highlight(mut self, span: Span, message: String) -> Self {
        self.highlight = Some((span, message));
        self
    }

    pub fn note(mut self, s: String) -> Self {
        self.notes.push(s);
        self
    }

    pub fn write<W: Write>(
        self,
        file_unit: &FileUnit,
        file_map: &LinesMap,
        writer: &mut W,
    ) -> Result<(), core::fmt::Error> {
        let hd = match self.kind {
            ReportKind::Error => "Error",
            ReportKind::Warning => "Warning",
            ReportKind::Info => "Info",
        };
        writeln!(writer, "{}: {}", hd, self.header)?;

        let Some((span, message)) = self.highlight else {
            return Ok(());
        };
        let Some((start, end)) = file_map.resolve_span(&span) else {
            return Ok(());
        };

        writeln!(
            writer,
            "{} ╭─[{}:{}]",
            gutter(None),
            file_unit.filename,
            start
        )?;

        for raw_line in start.line().0..=end.line().0 {
            let line = Line(raw_line);
            let text = file_unit.slice(file_map.line_span(line));
            writeln!(writer, "{} │ {}", gutter(Some(line)), text.trim_end())?;

            // the caret rows only make sense for a single line highlight
            if start.line() == end.line() && line == start.line() {
                let col = start.col() as usize;
                let width = usize::max(end.col() as usize - col, 1);
                let middle = width / 2;

                writeln!(
                    writer,
                    "{} │ {}{}",
                    gutter(None),
                    string_repeat(col, ' '),
                    underline(width, middle)
                )?;
                writeln!(
                    writer,
                    "{} │ {}╰─ {}",
                    gutter(None),
                    string_repeat(col + middle, ' '),
                    message
                )?;
            }
        }

        for note in self.notes.iter() {
            writeln!(writer, "{} │ note: {}", gutter(None), note)?;
        }

        writeln!(writer, "{}─╯", string_repeat(GUTTER, '─'))?;

        Ok(())
    }
}

fn gutter(line: Option<Line>) -> String {
    match line {
        None => string_repeat(GUTTER, ' '),
        Some(line) => {
            let mut out = String::new();
            let _ = write!(&mut out, "{:>width$}", line, width = GUTTER);
            out
        }
    }
}

fn string_repeat(sz: usize, c: char) -> String {
    let mut out = String::new();
    for _ in 0..sz {
        out.push(c);
    }
    out
}

fn underline(width: usize, middle: usize) -> String {
    let mut out = String::new();
    for i in 0..width {
        if i == middle {
            out.push('┬');
        } else {
            out.push('─');
        }
    }
    out
}
