use crate::{ParseFailure, Parser};
use fnd_diagnostic::ErrorCode;
use fnd_ir::{NodeKind, OperatorRole, SyntaxNode};
use fnd_lexer::lex;
use pretty_assertions::assert_eq;

fn parse_one(src: &str) -> Result<SyntaxNode, ParseFailure> {
    let output = lex(src);
    assert!(output.diagnostics.is_empty(), "lex errors in {src:?}");
    let mut parser = Parser::new(&output.tokens);
    parser.parse_expression()
}

fn sexpr(src: &str) -> String {
    match parse_one(src) {
        Ok(root) => root.to_string(),
        Err(failure) => format!("error {}", failure.code()),
    }
}

fn error_code(src: &str) -> Option<ErrorCode> {
    parse_one(src).err().map(|failure| failure.code())
}

// === Precedence and associativity ===

#[test]
fn multiplication_binds_tighter() {
    assert_eq!(sexpr("1 + 2 * 3"), "(+ 1 (* 2 3))");
    assert_eq!(sexpr("2 * 3 + 4"), "(+ (* 2 3) 4)");
    assert_eq!(sexpr("1 + 2 * 3 - 4"), "(- (+ 1 (* 2 3)) 4)");
}

#[test]
fn left_associative_levels() {
    assert_eq!(sexpr("1 - 2 - 3"), "(- (- 1 2) 3)");
    assert_eq!(sexpr("a / b % c"), "(% (/ a b) c)");
    assert_eq!(sexpr("a < b == c"), "(== (< a b) c)");
}

#[test]
fn assignment_is_right_associative() {
    assert_eq!(sexpr("a = b = c"), "(= a (= b c))");
    assert_eq!(sexpr("a += b <<= 1"), "(+= a (<<= b 1))");
    assert_eq!(sexpr("x = 1 + 2"), "(= x (+ 1 2))");
}

#[test]
fn keyword_operator_levels() {
    assert_eq!(sexpr("a or b xor c and d"), "(or a (xor b (and c d)))");
    assert_eq!(sexpr("a and b or c"), "(or (and a b) c)");
    assert_eq!(sexpr("not a and b"), "(and (not a) b)");
}

#[test]
fn bitwise_between_comparison_and_additive() {
    assert_eq!(sexpr("a == b | c + d"), "(== a (| b (+ c d)))");
    assert_eq!(sexpr("a << 1 & b"), "(& (<< a 1) b)");
}

#[test]
fn member_access_binds_tightest() {
    assert_eq!(sexpr("a.b + c.d"), "(+ (. a b) (. c d))");
    assert_eq!(sexpr("-a.b"), "(- (. a b))");
}

// === Role disambiguation ===

#[test]
fn prefix_and_binary_minus() {
    assert_eq!(sexpr("-1 + -2"), "(+ (- 1) (- 2))");
    assert_eq!(sexpr("a - -b"), "(- a (- b))");
    assert_eq!(sexpr("- - a"), "(- (- a))");
}

#[test]
fn prefix_binds_tighter_than_binary() {
    assert_eq!(sexpr("-a * b"), "(* (- a) b)");
    assert_eq!(sexpr("a * -b"), "(* a (- b))");
    assert_eq!(sexpr("!>p + !q"), "(+ (!> p) (! q))");
    assert_eq!(sexpr("~x"), "(~ x)");
}

#[test]
fn postfix_operators() {
    assert_eq!(sexpr("x ++"), "(x ++)");
    assert_eq!(sexpr("x++ + 1"), "(+ (x ++) 1)");
    assert_eq!(sexpr("x-- * y"), "(* (x --) y)");
    assert_eq!(sexpr("x ++ ++"), "((x ++) ++)");
}

#[test]
fn increment_before_operand_is_prefix() {
    assert_eq!(sexpr("++x"), "(++ x)");
    assert_eq!(sexpr("x + ++y"), "(+ x (++ y))");
}

#[test]
fn postfix_binds_tighter_than_prefix() {
    assert_eq!(sexpr("-x ++"), "(- (x ++))");
}

#[test]
fn postfix_with_member_access() {
    assert_eq!(sexpr("a.b ++"), "((. a b) ++)");
    assert_eq!(sexpr("x++.y"), "(. (x ++) y)");
}

#[test]
fn tree_roles_are_recorded() {
    let root = parse_one("-a + b").ok();
    let tree = root.as_ref().and_then(SyntaxNode::child);
    assert_eq!(
        tree.map(|t| t.kind),
        Some(NodeKind::OperatorTree(OperatorRole::Binary))
    );
    assert_eq!(
        tree.and_then(|t| t.children.first()).map(|t| t.kind),
        Some(NodeKind::OperatorTree(OperatorRole::Prefix))
    );
}

// === Groups ===

#[test]
fn parentheses_override_precedence() {
    assert_eq!(sexpr("(1 + 2) * 3"), "(* (paren (+ 1 2)) 3)");
    assert_eq!(sexpr("x * (y)"), "(* x (paren y))");
    assert_eq!(sexpr("-(a - b)"), "(- (paren (- a b)))");
    assert_eq!(sexpr("((a))"), "(paren (paren a))");
}

#[test]
fn group_restores_outer_level() {
    assert_eq!(sexpr("a * (b + c) + d"), "(+ (* a (paren (+ b c))) d)");
    assert_eq!(sexpr("a = (b) = c"), "(= a (= (paren b) c))");
}

// === Leaves and empty expressions ===

#[test]
fn single_leaves() {
    assert_eq!(sexpr("42"), "42");
    assert_eq!(sexpr("\"s\""), "\"s\"");
    assert_eq!(sexpr("u16"), "u16");
    let root = parse_one("bool").ok();
    assert_eq!(
        root.as_ref().and_then(SyntaxNode::child).map(|c| c.kind),
        Some(NodeKind::Type)
    );
}

#[test]
fn empty_expression_is_not_an_error() {
    let root = parse_one("").ok();
    assert_eq!(root.as_ref().map(|r| r.kind), Some(NodeKind::Root));
    assert!(root.as_ref().and_then(SyntaxNode::child).is_none());
    assert!(parse_one("; 1").is_ok_and(|r| r.child().is_none()));
}

// === Errors ===

#[test]
fn undeclared_role_after_operand() {
    assert_eq!(error_code("x ~"), Some(ErrorCode::PostfixExpected));
    assert_eq!(error_code("a -> b"), Some(ErrorCode::PostfixExpected));
    assert_eq!(error_code("a ?? b"), Some(ErrorCode::PostfixExpected));
    assert_eq!(error_code("1 +"), Some(ErrorCode::PostfixExpected));
    assert_eq!(error_code("1 + * 2"), Some(ErrorCode::PostfixExpected));
}

#[test]
fn undeclared_role_before_operand() {
    assert_eq!(error_code("* 3"), Some(ErrorCode::PrefixExpected));
    assert_eq!(error_code("- * 3"), Some(ErrorCode::PrefixExpected));
    assert_eq!(error_code("decides x"), Some(ErrorCode::PrefixExpected));
}

#[test]
fn adjacent_operands() {
    assert_eq!(error_code("a b"), Some(ErrorCode::OperatorExpected));
    assert_eq!(error_code("1 2 + 3"), Some(ErrorCode::OperatorExpected));
    assert_eq!(error_code("x ++ y"), Some(ErrorCode::OperatorExpected));
}

#[test]
fn dangling_prefix() {
    assert_eq!(error_code("-"), Some(ErrorCode::ExpressionExpected));
    assert_eq!(error_code("a + -"), Some(ErrorCode::ExpressionExpected));
    assert_eq!(error_code("(-)"), Some(ErrorCode::ExpressionExpected));
}

#[test]
fn bracket_errors() {
    assert_eq!(error_code("(1 + 2"), Some(ErrorCode::UnclosedDelimiter));
    assert_eq!(error_code("1 + 2)"), Some(ErrorCode::UnexpectedToken));
    assert_eq!(error_code("()"), Some(ErrorCode::ExpressionExpected));
    assert_eq!(error_code("f(x)"), Some(ErrorCode::BinaryOperatorExpected));
    assert_eq!(error_code("a[0]"), Some(ErrorCode::UnexpectedToken));
    assert_eq!(error_code("{"), Some(ErrorCode::UnexpectedToken));
}

#[test]
fn failure_root_has_no_child() {
    let Err(failure) = parse_one("x ~") else {
        panic!("expected failure");
    };
    let root = failure.root();
    assert_eq!(root.kind, NodeKind::Root);
    assert!(root.child().is_none());
    assert_eq!(failure.position().column, 3);
}

#[test]
fn failure_is_recorded_as_diagnostic() {
    let output = lex("a b");
    let mut parser = Parser::new(&output.tokens);
    assert!(parser.parse_expression().is_err());
    let diags = parser.into_diagnostics();
    assert_eq!(diags.len(), 1);
    assert!(diags.has_errors());
}

// === Resynchronization ===

#[test]
fn failure_leaves_cursor_on_terminator() {
    let output = lex("1 + * 2 + 3; 4");
    let mut parser = Parser::new(&output.tokens);
    assert!(parser.parse_expression().is_err());
    assert!(parser.peek().kind.is_terminator());
    assert!(!parser.is_at_end());

    parser.eat();
    let next = parser.parse_expression().map(|r| r.to_string());
    assert_eq!(next.ok().as_deref(), Some("4"));
    assert!(parser.is_at_end());
}

#[test]
fn success_stops_before_terminator() {
    let output = lex("a + b\nc");
    let mut parser = Parser::new(&output.tokens);
    let first = parser.parse_expression().map(|r| r.to_string());
    assert_eq!(first.ok().as_deref(), Some("(+ a b)"));
    assert!(parser.peek().kind.is_terminator());
    assert_eq!(parser.peek().position.line, 1);
}

#[test]
fn failure_at_terminator_does_not_skip_it() {
    let output = lex("(a;b");
    let mut parser = Parser::new(&output.tokens);
    let failure = parser.parse_expression().err().map(|f| f.code());
    assert_eq!(failure, Some(ErrorCode::UnclosedDelimiter));
    assert_eq!(parser.peek().position.column, 3);
}
