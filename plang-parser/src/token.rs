use alloc::{borrow::ToOwned, string::String};
use logos::Logos;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct UnknownToken;

#[derive(Debug, Clone, PartialEq, Logos)]
#[logos(skip r"[ \t\r\n\f]+")]
#[logos(error = UnknownToken)]
pub enum Token {
    #[token("fn")]
    Fn,
    #[token("(")]
    ParenOpen,
    #[token(")")]
    ParenClose,
    #[token(":")]
    Colon,
    #[token("{")]
    BraceOpen,
    #[token("}")]
    BraceClose,
    #[regex(r"[a-z]+", |lex| lex.slice().to_owned())]
    Ident(String),
}

impl Token {
    pub fn kind(&self) -> TokenKind {
        match self {
            Token::Fn => TokenKind::Fn,
            Token::ParenOpen => TokenKind::ParenOpen,
            Token::ParenClose => TokenKind::ParenClose,
            Token::Colon => TokenKind::Colon,
            Token::BraceOpen => TokenKind::BraceOpen,
            Token::BraceClose => TokenKind::BraceClose,
            Token::Ident(_) => TokenKind::Ident,
        }
    }
}

/// Payload-free mirror of [`Token`], used in expected-token sets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Fn,
    ParenOpen,
    ParenClose,
    Colon,
    BraceOpen,
    BraceClose,
    Ident,
}

impl core::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let s = match self {
            TokenKind::Fn => "'fn'",
            TokenKind::ParenOpen => "'('",
            TokenKind::ParenClose => "')'",
            TokenKind::Colon => "':'",
            TokenKind::BraceOpen => "'{'",
            TokenKind::BraceClose => "'}'",
            TokenKind::Ident => "identifier",
        };
        f.write_str(s)
    }
}
