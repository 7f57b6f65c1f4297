//! Predictive recursive descent over the token stream, one method per
//! production. The read position only ever advances; a single token of
//! lookahead decides every branch.

use super::token::{Token, TokenKind, UnknownToken};
use alloc::{vec, vec::Vec};
use logos::Logos;
use plang_core::{
    Block, Definition, FunctionDefinition, Ident, Parameter, ParameterList, SourceFile, Span,
    Spanned, Type, span_merge,
};

pub struct Lexer<'a>(logos::Lexer<'a, Token>);

impl<'a> Lexer<'a> {
    pub fn new(content: &'a str) -> Self {
        let lex = Token::lexer(content);
        Lexer(lex)
    }

    pub fn slice(&self) -> &'a str {
        self.0.slice()
    }

    pub fn source(&self) -> &'a str {
        self.0.source()
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Spanned<Result<Token, UnknownToken>>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.0.next() {
            None => None,
            Some(token) => {
                let span = self.0.span();
                Some(Spanned::new(span, token))
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ParseError {
    Lex(LexError),
    Syntax(SyntaxError),
}

/// A character that cannot begin any token, aborting the lex pass
#[derive(Clone, Debug, PartialEq)]
pub struct LexError {
    pub offset: usize,
    pub found: char,
}

/// A well-formed token in a position where no production accepts it
///
/// `found` is `None` when the input ended while a construct was still open;
/// the span is then the empty range at the end of the input.
#[derive(Clone, Debug, PartialEq)]
pub struct SyntaxError {
    pub span: Span,
    pub found: Option<TokenKind>,
    pub expected: Vec<TokenKind>,
}

pub struct Parser<'a> {
    lex: Lexer<'a>,
    lookahead: Option<Spanned<Token>>,
    end: usize,
}

impl<'a> Parser<'a> {
    pub fn new(lex: Lexer<'a>) -> Self {
        let end = lex.source().len();
        Self {
            lex,
            lookahead: None,
            end,
        }
    }

    /// Parse a whole source file, consuming the parser
    pub fn source_file(mut self) -> Result<SourceFile, ParseError> {
        let mut definitions = Vec::new();
        while self.peek()?.is_some() {
            definitions.push(self.definition()?);
        }
        Ok(SourceFile {
            span: 0..self.end,
            definitions,
        })
    }

    fn definition(&mut self) -> Result<Definition, ParseError> {
        match self.peek()? {
            Some(TokenKind::Fn) => self.function_definition().map(Definition::Function),
            Some(TokenKind::Ident) => self.ident().map(Definition::Ident),
            _ => Err(self.unexpected(vec![TokenKind::Fn, TokenKind::Ident])),
        }
    }

    fn function_definition(&mut self) -> Result<FunctionDefinition, ParseError> {
        let fn_span = self.expect(TokenKind::Fn)?;
        let name = self.ident()?;
        let params = self.parameter_list()?;
        let ret = self.type_annotation()?;
        let body = self.block()?;
        let span = span_merge(&fn_span, &body.span);
        Ok(FunctionDefinition {
            span,
            name,
            params,
            ret,
            body,
        })
    }

    fn parameter_list(&mut self) -> Result<ParameterList, ParseError> {
        let open = self.expect(TokenKind::ParenOpen)?;
        let mut params = Vec::new();
        loop {
            match self.peek()? {
                Some(TokenKind::ParenClose) => break,
                Some(TokenKind::Ident) => {
                    let name = self.ident()?;
                    let ty = self.type_annotation()?;
                    let span = span_merge(&name.span, ty.span());
                    params.push(Parameter { span, name, ty });
                }
                _ => {
                    return Err(self.unexpected(vec![TokenKind::Ident, TokenKind::ParenClose]));
                }
            }
        }
        let close = self.expect(TokenKind::ParenClose)?;
        Ok(ParameterList {
            span: span_merge(&open, &close),
            params,
        })
    }

    fn type_annotation(&mut self) -> Result<Type, ParseError> {
        let colon = self.expect(TokenKind::Colon)?;
        let name = self.ident()?;
        let span = span_merge(&colon, &name.span);
        Ok(Type::Named(span, name))
    }

    fn block(&mut self) -> Result<Block, ParseError> {
        let open = self.expect(TokenKind::BraceOpen)?;
        let mut definitions = Vec::new();
        loop {
            match self.peek()? {
                Some(TokenKind::BraceClose) => break,
                Some(TokenKind::Fn) | Some(TokenKind::Ident) => {
                    definitions.push(self.definition()?)
                }
                _ => {
                    return Err(self.unexpected(vec![
                        TokenKind::Fn,
                        TokenKind::Ident,
                        TokenKind::BraceClose,
                    ]));
                }
            }
        }
        let close = self.expect(TokenKind::BraceClose)?;
        Ok(Block {
            span: span_merge(&open, &close),
            definitions,
        })
    }

    /// Pull the next token into the lookahead slot if it is empty
    fn fill(&mut self) -> Result<(), ParseError> {
        if self.lookahead.is_some() {
            return Ok(());
        }
        match self.lex.next() {
            None => Ok(()),
            Some(stok) => match stok.inner {
                Ok(token) => {
                    self.lookahead = Some(Spanned::new(stok.span, token));
                    Ok(())
                }
                Err(UnknownToken) => {
                    let found = self
                        .lex
                        .slice()
                        .chars()
                        .next()
                        .unwrap_or(char::REPLACEMENT_CHARACTER);
                    Err(ParseError::Lex(LexError {
                        offset: stok.span.start,
                        found,
                    }))
                }
            },
        }
    }

    fn peek(&mut self) -> Result<Option<TokenKind>, ParseError> {
        self.fill()?;
        Ok(self.lookahead.as_ref().map(|stok| stok.inner.kind()))
    }

    /// Build the error for the current lookahead, end of input included
    fn unexpected(&mut self, expected: Vec<TokenKind>) -> ParseError {
        match self.lookahead.take() {
            Some(stok) => ParseError::Syntax(SyntaxError {
                span: stok.span,
                found: Some(stok.inner.kind()),
                expected,
            }),
            None => ParseError::Syntax(SyntaxError {
                span: self.end..self.end,
                found: None,
                expected,
            }),
        }
    }

    fn expect(&mut self, kind: TokenKind) -> Result<Span, ParseError> {
        self.fill()?;
        match self.lookahead.take() {
            Some(stok) if stok.inner.kind() == kind => Ok(stok.span),
            Some(stok) => {
                self.lookahead = Some(stok);
                Err(self.unexpected(vec![kind]))
            }
            None => Err(self.unexpected(vec![kind])),
        }
    }

    fn ident(&mut self) -> Result<Spanned<Ident>, ParseError> {
        self.fill()?;
        match self.lookahead.take() {
            Some(stok) => match stok.inner {
                Token::Ident(text) => Ok(Spanned::new(stok.span, Ident::from(text))),
                token => {
                    self.lookahead = Some(Spanned::new(stok.span, token));
                    Err(self.unexpected(vec![TokenKind::Ident]))
                }
            },
            None => Err(self.unexpected(vec![TokenKind::Ident])),
        }
    }
}
