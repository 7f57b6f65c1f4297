use alloc::string::String;
use plang_core::Span;

/// A named source text buffer
pub struct FileUnit {
    pub filename: String,
    pub content: String,
}

impl FileUnit {
    pub fn from_string(filename: String, content: String) -> Self {
        Self { filename, content }
    }

    pub fn from_str(filename: &str, content: &str) -> Self {
        Self {
            filename: String::from(filename),
            content: String::from(content),
        }
    }

    /// Slice of the content at the given span, clamped to the content length
    pub fn slice(&self, span: Span) -> &str {
        let start = usize::min(span.start, self.content.len());
        let end = usize::min(usize::max(span.end, start), self.content.len());
        &self.content[start..end]
    }
}
