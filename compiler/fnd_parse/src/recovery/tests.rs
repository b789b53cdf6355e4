use super::*;
use fnd_ir::{Literal, Operator, Position, Terminator, Token, TokenKind, TokenList};

fn tokens(kinds: Vec<TokenKind>) -> TokenList {
    TokenList::from_tokens(
        kinds
            .into_iter()
            .enumerate()
            .map(|(i, kind)| Token::new(kind, Position::new(1, u32::try_from(i + 1).unwrap_or(1))))
            .collect(),
    )
}

#[test]
fn stops_on_first_terminator() {
    let list = tokens(vec![
        TokenKind::Operator(Operator::Star),
        TokenKind::Literal(Literal::Integer(2)),
        TokenKind::Terminator(Terminator::Newline),
        TokenKind::Terminator(Terminator::Semicolon),
        TokenKind::Literal(Literal::Integer(3)),
    ]);
    let mut cursor = TokenCursor::new(&list);
    assert_eq!(synchronize(&mut cursor), 2);
    assert_eq!(
        cursor.peek().kind,
        TokenKind::Terminator(Terminator::Newline)
    );
}

#[test]
fn does_not_move_when_on_terminator() {
    let list = tokens(vec![
        TokenKind::Terminator(Terminator::Semicolon),
        TokenKind::Literal(Literal::Integer(3)),
    ]);
    let mut cursor = TokenCursor::new(&list);
    assert_eq!(synchronize(&mut cursor), 0);
    assert_eq!(cursor.index(), 0);
}

#[test]
fn reaches_stream_end_without_terminators() {
    let list = tokens(vec![
        TokenKind::Literal(Literal::Identifier("a".into())),
        TokenKind::Operator(Operator::Plus),
    ]);
    let mut cursor = TokenCursor::new(&list);
    assert_eq!(synchronize(&mut cursor), 2);
    assert!(cursor.is_at_end());
    assert_eq!(synchronize(&mut cursor), 0);
}
