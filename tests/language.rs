use std::fs::{self};

use pratt::{Dialect, Error, Number, ParseError, RuntimeError, Token, parse, parse_with};
use walkdir::WalkDir;

#[test]
fn book_examples_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("book/src").into_iter()
                                .filter_map(Result::ok)
                                .filter(|e| e.path().extension().is_some_and(|ext| ext == "md"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for block in extract_dsl_blocks(&content) {
            for line in block.lines().filter(|l| !l.trim().is_empty()) {
                count += 1;
                let (source, expected) =
                    line.rsplit_once("=>")
                        .unwrap_or_else(|| panic!("Example {line:?} in {path:?} has no '=>'"));
                let expected: f64 = expected.trim().parse().unwrap_or_else(|e| {
                                                               panic!("Example {line:?} in {path:?} has a bad result: {e}")
                                                           });
                match parse(source) {
                    Ok(value) => assert_eq!(value, expected, "Example {line:?} in {path:?}"),
                    Err(e) => panic!("Example {line:?} in {path:?} failed: {e}"),
                }
            }
        }
    }

    assert!(count > 0, "No examples found in book/src");
}

fn extract_dsl_blocks(content: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut inside = false;
    let mut buf = String::new();

    for line in content.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```pratt") {
            inside = true;
            buf.clear();
            continue;
        }
        if inside && trimmed.starts_with("```") {
            inside = false;
            blocks.push(buf.clone());
            continue;
        }
        if inside {
            buf.push_str(line);
            buf.push('\n');
        }
    }

    blocks
}

fn assert_value(src: &str, expected: impl Into<Number>) {
    match parse(src) {
        Ok(value) => assert_eq!(value, expected.into(), "{src:?}"),
        Err(e) => panic!("{src:?} failed: {e}"),
    }
}

fn parse_failure(src: &str) -> Error {
    match parse(src) {
        Ok(value) => panic!("{src:?} evaluated to {value} but was expected to fail"),
        Err(e) => e,
    }
}

#[test]
fn basic_arithmetic() {
    assert_value("1", 1);
    assert_value("1+2+3", 6);
    assert_value("1+2*3*4+5", 30);
    assert_value("1*2*3", 6);
    assert_value("10-4-3", 3);
}

#[test]
fn power_is_right_associative() {
    assert_value("2**2**3", 256);
    assert_value("(2**2)**3", 64);
    assert_value("2**3*2", 16);
}

#[test]
fn prefix_operators_chain() {
    assert_value("-1", -1);
    assert_value("---1++2+~1", 2);
    assert_value("+-+-3", 3);
    assert_value("~~4", 4);
}

#[test]
fn grouping_overrides_binding_power() {
    assert_value("1*(2+ (-3-1))", -2);
    assert_value("(1+2)*3", 9);
    assert_value("((((7))))", 7);
}

#[test]
fn factorial_binds_tighter_than_everything() {
    assert_value("0+1+2*3*-4+5**2!", 2);
    assert_value("-1!", -1);
    assert_value("-3!", -6);
    assert_value("3!!", 720);
    assert_value("20!", 2_432_902_008_176_640_000_i64);
    assert_value("(4/2)!", 2);
}

#[test]
fn division_produces_reals() {
    assert_value("7/2", 3.5);
    assert_value("1/4*2", 0.5);
    assert!(matches!(parse("8/2"), Ok(Number::Real(_))));
    assert!(matches!(parse("2*3"), Ok(Number::Integer(6))));
}

#[test]
fn reparsing_is_pure() {
    let source = "0+1+2*3*-4+5**2!";
    assert_eq!(parse(source).unwrap(), parse(source).unwrap());
}

#[test]
fn empty_input_is_unexpected_end() {
    for src in ["", "   ", "\n\t"] {
        assert!(matches!(parse_failure(src),
                         Error::Parse(ParseError::UnexpectedToken { token: Token::End, .. })),
                "{src:?}");
    }
}

#[test]
fn missing_operand_is_unexpected_token() {
    assert!(matches!(parse_failure("1+"),
                     Error::Parse(ParseError::UnexpectedToken { token: Token::End,
                                                                position: 2 })));
    assert!(matches!(parse_failure("*2"),
                     Error::Parse(ParseError::UnexpectedToken { token: Token::Star,
                                                                position: 0 })));
    assert!(matches!(parse_failure("!"),
                     Error::Parse(ParseError::UnexpectedToken { token: Token::Bang, .. })));
}

#[test]
fn unmatched_parentheses() {
    assert!(matches!(parse_failure("(1+2"),
                     Error::Parse(ParseError::ExpectedToken { expected: Token::RParen,
                                                              found: Token::End,
                                                              position: 4 })));
    assert!(matches!(parse_failure("1)"),
                     Error::Parse(ParseError::UnexpectedToken { token: Token::RParen,
                                                                position: 1 })));
    assert!(matches!(parse_failure("()"),
                     Error::Parse(ParseError::UnexpectedToken { token: Token::RParen, .. })));
}

#[test]
fn juxtaposed_operands_are_rejected() {
    assert!(matches!(parse_failure("1 2"),
                     Error::Parse(ParseError::UnexpectedToken { token: Token::Number(2),
                                                                position: 2 })));
    assert!(matches!(parse_failure("1~2"),
                     Error::Parse(ParseError::UnexpectedToken { token: Token::Tilde, .. })));
}

#[test]
fn unknown_operator_reports_position() {
    assert!(matches!(parse_failure("1 % 2"),
                     Error::Parse(ParseError::UnknownOperator { character: '%',
                                                                position: 2 })));
    assert!(matches!(parse_failure("1.5"),
                     Error::Parse(ParseError::UnknownOperator { character: '.', .. })));
}

#[test]
fn division_by_zero_is_error() {
    assert!(matches!(parse_failure("1/0"),
                     Error::Runtime(RuntimeError::DivisionByZero { position: 1 })));
    assert!(matches!(parse_failure("~0"),
                     Error::Runtime(RuntimeError::DivisionByZero { position: 0 })));
    assert!(matches!(parse_failure("1/(2-2)"),
                     Error::Runtime(RuntimeError::DivisionByZero { .. })));
    assert!(matches!(parse_failure("0**-1"),
                     Error::Runtime(RuntimeError::DivisionByZero { .. })));
}

#[test]
fn factorial_domain_is_checked() {
    assert!(matches!(parse_failure("(-1)!"),
                     Error::Runtime(RuntimeError::DomainError { position: 4, .. })));
    assert!(matches!(parse_failure("(1/2)!"),
                     Error::Runtime(RuntimeError::DomainError { .. })));
}

#[test]
fn power_without_real_result_is_domain_error() {
    assert!(matches!(parse_failure("(-8)**~3"),
                     Error::Runtime(RuntimeError::DomainError { .. })));
}

#[test]
fn overflow_is_reported() {
    assert!(matches!(parse_failure("21!"), Error::Runtime(RuntimeError::Overflow { .. })));
    assert!(matches!(parse_failure("2**63"), Error::Runtime(RuntimeError::Overflow { .. })));
    assert!(matches!(parse_failure("9223372036854775807+1"),
                     Error::Runtime(RuntimeError::Overflow { position: 19 })));
    assert!(matches!(parse_failure("99999999999999999999"),
                     Error::Parse(ParseError::LiteralTooLarge { position: 0, .. })));
}

#[test]
fn large_integers_promote_to_nearest_real() {
    assert_value("10000000000000000/2", 5e15);
    assert_value("~10000000000000000", 1e-16);
    assert_value("9007199254740993/1", 9_007_199_254_740_992.0);
    assert_value("9223372036854775807/1", 9.223_372_036_854_775_807e18);
}

#[test]
fn trivial_bases_accept_any_exponent() {
    assert_value("1**5000000000", 1);
    assert_value("0**5000000000", 0);
    assert_value("0**0", 1);
    assert_value("(0-1)**5000000000", 1);
    assert_value("(0-1)**5000000001", -1);
    assert!(matches!(parse_failure("2**5000000000"),
                     Error::Runtime(RuntimeError::Overflow { position: 1 })));
}

#[test]
fn first_error_wins() {
    assert!(matches!(parse_failure("1/0 + %"),
                     Error::Runtime(RuntimeError::DivisionByZero { .. })));
    assert!(matches!(parse_failure("% + 1/0"),
                     Error::Parse(ParseError::UnknownOperator { position: 0, .. })));
}

#[test]
fn errors_display_their_position() {
    assert_eq!(parse_failure("1/0").to_string(),
               "Error at position 1: Division by zero.");
    assert_eq!(parse_failure("(1").to_string(),
               "Error at position 2: Expected ')' but found end of input.");
    assert_eq!(parse_failure("1 # 2").position(), 2);
}

#[test]
fn basic_dialect_is_a_subset() {
    let basic = |src| parse_with(src, Dialect::Basic);

    assert_eq!(basic("1").unwrap(), 1);
    assert_eq!(basic("1+2+3").unwrap(), 6);
    assert_eq!(basic("1+2*3*4+5").unwrap(), 30);
    assert_eq!(basic("1*2*3").unwrap(), 6);

    assert!(matches!(basic("-1"),
                     Err(Error::Parse(ParseError::UnknownOperator { character: '-', .. }))));
    assert!(matches!(basic("(1)"),
                     Err(Error::Parse(ParseError::UnknownOperator { character: '(', .. }))));
    assert!(matches!(basic("+1"),
                     Err(Error::Parse(ParseError::UnexpectedToken { token: Token::Plus, .. }))));
    assert!(matches!(basic("2**3"),
                     Err(Error::Parse(ParseError::UnexpectedToken { token: Token::Star,
                                                                    position: 2 }))));
}

#[test]
fn concurrent_parses_do_not_interfere() {
    let handles: Vec<_> = (0..8).map(|i| {
                                    std::thread::spawn(move || {
                                        let source = format!("{i}+2*3*4+5");
                                        parse(&source).unwrap()
                                    })
                                })
                                .collect();

    for (i, handle) in (0_i64..).zip(handles) {
        assert_eq!(handle.join().unwrap(), i + 29);
    }
}
