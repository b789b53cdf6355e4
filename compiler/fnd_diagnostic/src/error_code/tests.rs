use super::*;

#[test]
fn values_match_numbering() {
    assert_eq!(ErrorCode::IntegerParse.value(), 0x1002);
    assert_eq!(ErrorCode::PostfixExpected.value(), 0x100A);
    assert_eq!(ErrorCode::FloatOverflow.value(), 0x2000);
    assert_eq!(ErrorCode::IntegerOverflow.value(), 0x2001);
}

#[test]
fn overflow_codes_are_warnings() {
    assert_eq!(ErrorCode::FloatOverflow.severity(), Severity::Warning);
    assert_eq!(ErrorCode::IntegerOverflow.severity(), Severity::Warning);
    assert_eq!(ErrorCode::StringParse.severity(), Severity::Error);
}

#[test]
fn all_is_sorted_and_round_trips() {
    let values: Vec<u16> = ErrorCode::ALL.iter().map(|c| c.value()).collect();
    let mut sorted = values.clone();
    sorted.sort_unstable();
    sorted.dedup();
    assert_eq!(values, sorted);
    for code in ErrorCode::ALL {
        assert_eq!(ErrorCode::from_value(code.value()), Some(code));
    }
    assert_eq!(ErrorCode::from_value(0x1000), None);
}

#[test]
fn display_is_hex() {
    assert_eq!(ErrorCode::EscapeParse.to_string(), "0x1005");
    assert_eq!(ErrorCode::PostfixExpected.to_string(), "0x100A");
}

#[test]
fn lexer_and_parser_codes_are_disjoint() {
    assert!(ErrorCode::UnrecognizableChar.is_lexer());
    assert!(ErrorCode::IntegerOverflow.is_lexer());
    assert!(!ErrorCode::OperatorExpected.is_lexer());
    assert!(!ErrorCode::UnexpectedToken.is_lexer());
}
