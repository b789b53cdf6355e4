use super::*;

#[test]
fn longest_spelling_wins() {
    assert_eq!(
        match_delimiter("<<=x"),
        Some((op(Operator::ShlAssign), 3))
    );
    assert_eq!(match_delimiter("<<x"), Some((op(Operator::Shl), 2)));
    assert_eq!(match_delimiter("<x"), Some((op(Operator::Less), 1)));
    assert_eq!(match_delimiter("!>p"), Some((op(Operator::AddressOf), 2)));
    assert_eq!(match_delimiter("!p"), Some((op(Operator::Bang), 1)));
}

#[test]
fn brackets_match() {
    assert_eq!(match_delimiter("(1)"), Some((br(Bracket::LParen), 1)));
    assert_eq!(match_delimiter("}"), Some((br(Bracket::RBrace), 1)));
}

#[test]
fn non_delimiters_do_not_match() {
    assert_eq!(match_delimiter("abc"), None);
    assert_eq!(match_delimiter("9"), None);
    assert_eq!(match_delimiter(";"), None);
    assert_eq!(match_delimiter(""), None);
}

#[test]
fn no_entry_is_shadowed_by_an_earlier_prefix() {
    for (i, (later, _)) in DELIMITERS.iter().enumerate() {
        for (earlier, _) in &DELIMITERS[..i] {
            assert!(
                !later.starts_with(earlier),
                "`{earlier}` shadows `{later}`"
            );
        }
    }
}

#[test]
fn spellings_agree_with_operator_names() {
    for (spelling, delimiter) in DELIMITERS {
        assert_eq!(delimiter.into_kind().to_string(), *spelling);
    }
}
