use core::ops::Deref;

/// Span as a range of bytes in a source file
pub type Span = core::ops::Range<usize>;

/// Merge two spans into one covering span, the end span need to start after the start span ends
pub fn span_merge(start: &Span, end: &Span) -> Span {
    assert!(
        start.end <= end.start,
        "merging span failed start={:?} end={:?}",
        start,
        end
    );
    Span {
        start: start.start,
        end: end.end,
    }
}

/// A type T with an attached Span
///
/// Unlike an AST, a concrete syntax tree keeps the exact source extent of
/// every node, so equality here includes the span.
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct Spanned<T> {
    /// The span of T
    pub span: Span,
    /// Inner value T
    pub inner: T,
}

impl<T> Deref for Spanned<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.inner
    }
}

impl<T> Spanned<T> {
    /// Create a new spanned type from its inner components
    pub fn new(span: Span, inner: T) -> Self {
        Self { span, inner }
    }

    /// Consume the Spanned and return its inner type only
    pub fn unspan(self) -> T {
        self.inner
    }
}
