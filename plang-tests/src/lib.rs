//! End to end tests of the plang frontend through its public API

#![no_std]

extern crate alloc;
extern crate std;

use plang_core::SourceFile;
use plang_source::{FileUnit, ParseError};

pub fn parse_str(content: &str) -> Result<SourceFile, ParseError> {
    let unit = FileUnit::from_str("test.pl", content);
    plang_parser::parse(&unit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::String;
    use plang_core::{Definition, FunctionDefinition, Span};
    use plang_source::{LinesMap, ParseErrorKind};

    fn assert_contains(parent: &Span, child: &Span) {
        assert!(
            parent.start <= child.start && child.end <= parent.end,
            "span {:?} does not contain {:?}",
            parent,
            child
        );
    }

    fn check_function(fundef: &FunctionDefinition) {
        // name, params, return type and body appear in order inside the span
        let mut prev = fundef.span.start;
        for part in [
            &fundef.name.span,
            &fundef.params.span,
            fundef.ret.span(),
            &fundef.body.span,
        ] {
            assert!(prev <= part.start, "parts overlap or are out of order");
            assert_contains(&fundef.span, part);
            prev = part.end;
        }

        let mut prev = fundef.params.span.start;
        for param in &fundef.params.params {
            assert!(prev <= param.span.start);
            assert_contains(&fundef.params.span, &param.span);
            assert_contains(&param.span, &param.name.span);
            assert_contains(&param.span, param.ty.span());
            assert!(param.name.span.end <= param.ty.span().start);
            prev = param.span.end;
        }

        check_children(&fundef.body.span, &fundef.body.definitions);
    }

    fn check_children(parent: &Span, definitions: &[Definition]) {
        let mut prev = parent.start;
        for def in definitions {
            assert!(prev <= def.span().start, "sibling spans out of order");
            assert_contains(parent, def.span());
            prev = def.span().end;
            if let Definition::Function(fundef) = def {
                check_function(fundef)
            }
        }
    }

    #[test]
    fn whitespace_only_inputs() {
        for content in ["", " ", "   \t", "\n\n", " \t\r\n "] {
            let file = parse_str(content).unwrap();
            assert!(file.definitions.is_empty(), "input {:?}", content);
            assert_eq!(file.span, 0..content.len());
        }
    }

    #[test]
    fn single_ident_inputs() {
        for content in ["a", "qq", "abc", "zzzzz"] {
            let file = parse_str(content).unwrap();
            assert_eq!(file.definitions.len(), 1, "input {:?}", content);
            let Definition::Ident(ident) = &file.definitions[0] else {
                panic!("expected an ident definition")
            };
            assert!(ident.matches(content));
            assert_eq!(ident.span, 0..content.len());
        }
    }

    #[test]
    fn function_shape() {
        let file = parse_str("fn f() :int {}").unwrap();
        let Definition::Function(fundef) = &file.definitions[0] else {
            panic!("expected a function definition")
        };
        assert!(fundef.name.matches("f"));
        assert!(fundef.params.params.is_empty());
        assert!(fundef.ret.name().matches("int"));
        assert!(fundef.body.definitions.is_empty());
    }

    #[test]
    fn parse_is_deterministic() {
        let source = "x fn f(a :int b :int) :int { fn g() :int {} y } z";
        let first = parse_str(source).unwrap();
        let second = parse_str(source).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn spans_nest_and_stay_ordered() {
        let source = "x fn f(a :int b :int) :int { fn g() :int {} y } z";
        let file = parse_str(source).unwrap();
        assert_eq!(file.definitions.len(), 3);
        check_children(&file.span, &file.definitions);
    }

    #[test]
    fn definition_fragments_reparse() {
        let source = "x fn f(a :int) :int { b } y";
        let unit = FileUnit::from_str("test.pl", source);
        let file = plang_parser::parse(&unit).unwrap();

        for def in &file.definitions {
            let fragment = unit.slice(def.span().clone());
            let refile = parse_str(fragment).unwrap();
            assert_eq!(refile.definitions.len(), 1, "fragment {:?}", fragment);
            match (def, &refile.definitions[0]) {
                (Definition::Ident(a), Definition::Ident(b)) => assert_eq!(a.inner, b.inner),
                (Definition::Function(a), Definition::Function(b)) => {
                    assert_eq!(a.name.inner, b.name.inner);
                    assert_eq!(a.params.params.len(), b.params.params.len());
                }
                _ => panic!("fragment reparsed to a different definition kind"),
            }
        }
    }

    #[test]
    fn missing_parameter_type_is_rejected() {
        let err = parse_str("fn f(a) :int {}").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::Syntax);
        assert_eq!(err.location, 6..7);
        assert!(err.description.contains("':'"), "{}", err.description);
    }

    #[test]
    fn missing_function_name_is_rejected() {
        let err = parse_str("fn () :int {}").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::Syntax);
        assert_eq!(err.location, 3..4);
        assert!(err.description.contains("identifier"), "{}", err.description);
    }

    #[test]
    fn digit_is_rejected_by_the_lexer() {
        let err = parse_str("fn f1() :int {}").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::Lex);
        assert_eq!(err.location, 4..5);
        assert!(err.description.contains('1'), "{}", err.description);
    }

    #[test]
    fn error_renders_as_report() {
        let unit = FileUnit::from_str("test.pl", "fn f(a) :int {}");
        let err = plang_parser::parse(&unit).unwrap_err();

        let linemap = LinesMap::new(&unit.content);
        let mut out = String::new();
        err.to_report().write(&unit, &linemap, &mut out).unwrap();

        assert!(out.starts_with("Error: "));
        assert!(out.contains("test.pl"));
        assert!(out.contains("fn f(a) :int {}"));
        assert!(out.contains('┬'));
    }
}
