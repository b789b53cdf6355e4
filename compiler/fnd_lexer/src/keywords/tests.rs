use super::*;

#[test]
fn type_keywords() {
    assert_eq!(lookup("int"), Some(TokenKind::TypeKeyword(TypeKeyword::Int)));
    assert_eq!(lookup("s16"), Some(TokenKind::TypeKeyword(TypeKeyword::S16)));
    assert_eq!(lookup("u64"), Some(TokenKind::TypeKeyword(TypeKeyword::U64)));
    assert_eq!(lookup("f32"), Some(TokenKind::TypeKeyword(TypeKeyword::F32)));
    assert_eq!(lookup("bool"), Some(TokenKind::TypeKeyword(TypeKeyword::Bool)));
}

#[test]
fn operator_keywords() {
    assert_eq!(lookup("and"), Some(TokenKind::Operator(Operator::And)));
    assert_eq!(lookup("xor"), Some(TokenKind::Operator(Operator::Xor)));
    assert_eq!(lookup("not"), Some(TokenKind::Operator(Operator::Not)));
    assert_eq!(lookup("decides"), Some(TokenKind::Operator(Operator::Decides)));
}

#[test]
fn match_is_exact() {
    assert_eq!(lookup("integer"), None);
    assert_eq!(lookup("in"), None);
    assert_eq!(lookup("u128"), None);
}

#[test]
fn match_is_case_sensitive() {
    assert_eq!(lookup("Int"), None);
    assert_eq!(lookup("AND"), None);
}

#[test]
fn table_has_every_keyword() {
    assert_eq!(table().len(), TYPE_KEYWORDS.len() + OPERATOR_KEYWORDS.len());
}
