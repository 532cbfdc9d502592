// Integration tests for the .enum parser

use enums::parser::{parse, parse_chars, Document, EnumDefinition, Enumerator, IntType, ParseError};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn names(def: &EnumDefinition) -> Vec<(&str, &str)> {
    def.enumerators
        .iter()
        .map(|e| (e.name.as_str(), e.tag.as_str()))
        .collect()
}

#[test]
fn test_single_enum_default_base() {
    let doc = parse("package foo\ntype Color enum {\n Red\n Green\n Blue\n}\n").expect("Parsing failed");

    let mut color = EnumDefinition::new("Color", IntType::Int);
    color.enumerators = vec![
        Enumerator::new("Red"),
        Enumerator::new("Green"),
        Enumerator::new("Blue"),
    ];
    assert_eq!(
        doc,
        Document {
            package: "foo".to_string(),
            enums: vec![color],
        }
    );
}

#[test]
fn test_explicit_base_and_tag() {
    let doc = parse("package p\ntype T enum byte {\n A `alpha`\n }\n").expect("Parsing failed");

    assert_eq!(doc.enums.len(), 1);
    let t = &doc.enums[0];
    assert_eq!(t.type_name, "T");
    assert_eq!(t.base_type, IntType::Byte);
    assert_eq!(names(t), vec![("A", "alpha")]);
}

#[test]
fn test_empty_body() {
    let doc = parse("package p\ntype T enum {\n}\n").expect("Parsing failed");

    assert_eq!(doc.enums.len(), 1);
    assert_eq!(doc.enums[0].type_name, "T");
    assert!(doc.enums[0].enumerators.is_empty());
}

#[test]
fn test_truncated_body() {
    let err = parse("package p\ntype T enum {").unwrap_err();

    assert_eq!(
        err,
        ParseError::Syntax {
            line: 2,
            message: "expected '}', got end of input".to_string(),
        }
    );
}

#[test]
fn test_missing_enum_keyword() {
    let err = parse("package p\ntype T weird {\n}\n").unwrap_err();

    assert_eq!(err.line(), 2);
    assert_eq!(
        err.to_string(),
        "2: expected 'enum', got identifier \"weird\""
    );
}

#[test]
fn test_package_only() {
    let doc = parse("package lonely // nothing else\n").expect("Parsing failed");
    assert_eq!(doc, Document::new("lonely"));
}

#[test]
fn test_declaration_order_is_kept() {
    let source = r#"
        package shapes

        type Shape enum uint8 {
            Square
            Circle   `round thing`
            Triangle
        }

        /* second type */
        type Side enum {
            Left `L` Right `R`
        }
    "#;
    let doc = parse(source).expect("Parsing failed");

    assert_eq!(doc.package, "shapes");
    let types: Vec<&str> = doc.enums.iter().map(|e| e.type_name.as_str()).collect();
    assert_eq!(types, vec!["Shape", "Side"]);
    assert_eq!(
        names(&doc.enums[0]),
        vec![("Square", "Square"), ("Circle", "round thing"), ("Triangle", "Triangle")]
    );
    assert_eq!(doc.enums[1].base_type, IntType::Int);
    assert_eq!(names(&doc.enums[1]), vec![("Left", "L"), ("Right", "R")]);
}

#[rstest]
#[case("byte", IntType::Byte)]
#[case("int", IntType::Int)]
#[case("uint", IntType::Uint)]
#[case("int8", IntType::Int8)]
#[case("uint8", IntType::Uint8)]
#[case("int16", IntType::Int16)]
#[case("uint16", IntType::Uint16)]
#[case("int32", IntType::Int32)]
#[case("uint32", IntType::Uint32)]
#[case("int64", IntType::Int64)]
#[case("uint64", IntType::Uint64)]
fn test_base_types(#[case] keyword: &str, #[case] expected: IntType) {
    let source = format!("package p type T enum {} {{ A }}", keyword);
    let doc = parse(&source).expect("Parsing failed");
    assert_eq!(doc.enums[0].base_type, expected);
}

#[rstest]
#[case("", "1: expected 'package', got end of input")]
#[case("pkg p", "1: expected 'package', got identifier \"pkg\"")]
#[case("package type", "1: expected identifier, got 'type' \"type\"")]
#[case("package p\ntype T enum string {}", "2: expected '{' or <int-type>, got identifier \"string\"")]
#[case("package p\ntype T enum int A }", "2: expected '{', got identifier \"A\"")]
#[case("package p\ntype T enum { A `a` `b` }", "2: expected identifier, got tag \"b\"")]
#[case("package p\ntype T enum { A = B }", "2: expected identifier, got '=' \"=\"")]
#[case("package p\ntype T enum { A }\n}", "3: expected 'type', got '}' \"}\"")]
#[case("package p\ntype 9 enum {}", "2: expected identifier, got character \"9\"")]
fn test_syntax_errors(#[case] source: &str, #[case] expected: &str) {
    let err = parse(source).unwrap_err();
    assert!(matches!(err, ParseError::Syntax { .. }));
    assert_eq!(err.to_string(), expected);
}

#[rstest]
#[case("package p\n/* open")]
#[case("package p\ntype T enum { A `open")]
#[case("package p /")]
fn test_unexpected_end_of_input(#[case] source: &str) {
    let err = parse(source).unwrap_err();
    assert!(
        matches!(err, ParseError::UnexpectedEndOfInput { .. }),
        "{:?}",
        err
    );
}

#[test]
fn test_first_error_wins() {
    // The bad base type is reported, not the later unterminated comment.
    let err = parse("package p\ntype T enum bogus {\n}\n/* never closed").unwrap_err();
    assert_eq!(err.line(), 2);
    assert!(err.to_string().contains("<int-type>"));
}

#[test]
fn test_identifier_at_end_of_input() {
    let doc = parse("package p").expect("Parsing failed");
    assert_eq!(doc.package, "p");
}

#[test]
fn test_parse_chars_matches_parse() {
    let source = "package p\ntype T enum int32 { A `x` B }";
    let from_chars = parse_chars(source.chars().collect::<Vec<_>>().into_iter());
    assert_eq!(from_chars, parse(source));
}
