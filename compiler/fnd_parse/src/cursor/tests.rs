use super::*;
use fnd_ir::{Literal, Terminator, TokenKind};

fn list() -> TokenList {
    TokenList::from_tokens(vec![
        Token::new(TokenKind::Literal(Literal::Integer(1)), Position::new(1, 1)),
        Token::new(TokenKind::Terminator(Terminator::Semicolon), Position::new(1, 2)),
    ])
}

#[test]
fn peek_does_not_advance() {
    let tokens = list();
    let cursor = TokenCursor::new(&tokens);
    assert_eq!(cursor.peek().kind, TokenKind::Literal(Literal::Integer(1)));
    assert_eq!(cursor.peek().kind, TokenKind::Literal(Literal::Integer(1)));
    assert_eq!(
        cursor.peek_next().kind,
        TokenKind::Terminator(Terminator::Semicolon)
    );
    assert_eq!(cursor.index(), 0);
}

#[test]
fn eat_returns_current_and_advances() {
    let tokens = list();
    let mut cursor = TokenCursor::new(&tokens);
    assert_eq!(cursor.eat().kind, TokenKind::Literal(Literal::Integer(1)));
    assert!(cursor.at_terminator());
    assert!(!cursor.is_at_end());
    cursor.eat();
    assert!(cursor.is_at_end());
}

#[test]
fn eat_saturates_at_stream_end() {
    let tokens = list();
    let mut cursor = TokenCursor::new(&tokens);
    for _ in 0..10 {
        cursor.eat();
    }
    assert_eq!(cursor.index(), tokens.len() - 1);
    assert!(cursor.eat().kind.is_stream_end());
    assert!(cursor.peek_next().kind.is_stream_end());
}
