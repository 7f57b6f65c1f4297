//! Concrete syntax tree of a plang source file
//!
//! The tree mirrors the grammar productions one for one and keeps the byte
//! span of every node. Nodes own their children exclusively and are never
//! mutated after the parse; the parser copies identifier text out of the
//! source, so the tree can outlive it.

use super::basic::Ident;
use super::location::{Span, Spanned};
use alloc::vec::Vec;

/// Root node, the whole parsed input
///
/// The span covers the entire source text, including surrounding whitespace.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceFile {
    pub span: Span,
    pub definitions: Vec<Definition>,
}

/// A top-level or block-level item
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Definition {
    /// A bare identifier standing alone as a definition
    Ident(Spanned<Ident>),
    Function(FunctionDefinition),
}

impl Definition {
    pub fn span(&self) -> &Span {
        match self {
            Definition::Ident(ident) => &ident.span,
            Definition::Function(fundef) => &fundef.span,
        }
    }
}

/// `fn name(param :type ...) :type { ... }`
///
/// Arity is fixed by the grammar: exactly one name, one parameter list, one
/// return type and one body.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FunctionDefinition {
    pub span: Span,
    pub name: Spanned<Ident>,
    pub params: ParameterList,
    pub ret: Type,
    pub body: Block,
}

/// Parenthesized, possibly empty, ordered parameters
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParameterList {
    pub span: Span,
    pub params: Vec<Parameter>,
}

/// One parameter; the type annotation is never optional
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Parameter {
    pub span: Span,
    pub name: Spanned<Ident>,
    pub ty: Type,
}

/// A type annotation `: name`
///
/// Only named types exist for now; kept as a sum type so further forms can
/// be added without reshaping the tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Type {
    Named(Span, Spanned<Ident>),
}

impl Type {
    pub fn span(&self) -> &Span {
        match self {
            Type::Named(span, _) => span,
        }
    }

    pub fn name(&self) -> &Ident {
        match self {
            Type::Named(_, name) => &name.inner,
        }
    }
}

/// A `{ }` delimited list of nested definitions
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Block {
    pub span: Span,
    pub definitions: Vec<Definition>,
}
