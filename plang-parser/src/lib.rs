//! Tokenizer and parser for plang, a toy language of identifier definitions
//! and function definitions with typed parameters and nested blocks

#![no_std]

extern crate alloc;
extern crate std;

mod parse;
mod token;

use alloc::format;
use alloc::string::String;

use plang_core::SourceFile;
use plang_source::{FileUnit, ParseError, ParseErrorKind};
use token::TokenKind;

/// Parse a source file into its concrete syntax tree
///
/// All-or-nothing: the first lexing or parsing failure aborts the whole
/// parse, there is no recovery and no partial tree.
pub fn parse(fileunit: &FileUnit) -> Result<SourceFile, ParseError> {
    let lex = parse::Lexer::new(&fileunit.content);
    let parser = parse::Parser::new(lex);
    parser.source_file().map_err(remap_err)
}

fn remap_err(e: parse::ParseError) -> ParseError {
    match e {
        parse::ParseError::Lex(lex) => ParseError {
            location: lex.offset..lex.offset + lex.found.len_utf8(),
            description: format!("unrecognized character {:?}", lex.found),
            note: Some(String::from(
                "identifiers may only contain lowercase letters",
            )),
            kind: ParseErrorKind::Lex,
        },
        parse::ParseError::Syntax(syn) => {
            let (found, note) = match syn.found {
                Some(kind) => (format!("found {}", kind), None),
                None => (
                    String::from("found end of input"),
                    Some(String::from(
                        "the input ends while a definition is still open",
                    )),
                ),
            };
            ParseError {
                location: syn.span,
                description: format!("expected {}, {}", expected_list(&syn.expected), found),
                note,
                kind: ParseErrorKind::Syntax,
            }
        }
    }
}

fn expected_list(expected: &[TokenKind]) -> String {
    match expected {
        [] => String::from("nothing"),
        [single] => format!("{}", single),
        _ => {
            let mut out = String::from("one of ");
            for (i, kind) in expected.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                out.push_str(&format!("{}", kind));
            }
            out
        }
    }
}
