use super::*;
use crate::ParserConfig;
use pretty_assertions::assert_eq;
use widl_ir::NodeMeta;
use widl_lexer::TokenKind;

/// Minimal expression node: an identifier or a parenthesised chain.
#[derive(Debug, Default, PartialEq)]
struct Chain {
    meta: NodeMeta,
    text: String,
}

impl Node for Chain {
    fn meta(&self) -> &NodeMeta {
        &self.meta
    }

    fn meta_mut(&mut self) -> &mut NodeMeta {
        &mut self.meta
    }
}

fn operand(p: &mut Parser<'_>) -> Option<Chain> {
    if !p.check(TokenKind::Identifier) {
        return None;
    }
    Some(p.node(|p| Chain {
        text: p.advance().text.into_owned(),
        ..Chain::default()
    }))
}

fn combine(p: &mut Parser<'_>, left: Chain, operator: Token<'_>) -> Result<Chain, Chain> {
    match operand(p) {
        Some(right) => Ok(Chain {
            text: format!("({} {} {})", left.text, operator.text, right.text),
            ..Chain::default()
        }),
        None => Err(left),
    }
}

const OPERATORS: TokenSet = TokenSet::new()
    .with(TokenKind::Colon)
    .with(TokenKind::Equals);

/// Run the helper inside an enclosing node so errors have a home.
fn chain<'s>(
    source: &'s str,
    gate: Option<&dyn Fn(&Token<'s>) -> bool>,
) -> (Option<Chain>, NodeMeta) {
    let mut p = Parser::new(source, ParserConfig::default());
    p.advance();
    let mut result = None;
    let outer = p.node(|p| {
        result = p.left_recursive(operand, OPERATORS, gate, combine);
        Chain::default()
    });
    (result, outer.meta)
}

#[test]
fn single_operand_is_returned_unchanged() {
    let (result, _) = chain("a", None);
    let a = result.unwrap_or_default();
    assert_eq!(a.text, "a");
    assert_eq!(a.meta.span, Span::new(0, 0));
}

#[test]
fn chains_associate_to_the_left() {
    let (result, outer) = chain("a : b = cc : d", None);
    let chain = result.unwrap_or_default();
    assert_eq!(chain.text, "(((a : b) = cc) : d)");
    assert_eq!(chain.meta.span, Span::new(0, 13));
    assert!(outer.errors.is_empty());
}

#[test]
fn intermediate_nodes_keep_the_leftmost_start() {
    // Stop after two operators to observe the intermediate span.
    let (result, _) = chain("  a : bb = c ;", None);
    let chain = result.unwrap_or_default();
    assert_eq!(chain.meta.span, Span::new(2, 11));
}

#[test]
fn missing_operand_yields_none() {
    let (result, outer) = chain("; a", None);
    assert_eq!(result, None);
    assert!(outer.errors.is_empty());
}

#[test]
fn missing_right_operand_is_an_error() {
    let (result, outer) = chain("a : b : ;", None);
    let chain = result.unwrap_or_default();
    assert_eq!(chain.text, "(a : b)");
    assert_eq!(outer.errors.len(), 1);
    assert_eq!(
        outer.errors[0].message,
        "Expected right-hand operand, found `;`"
    );
}

#[test]
fn gate_can_refuse_an_operator() {
    let only_colons = |token: &Token<'_>| token.is(TokenKind::Colon);
    let (result, _) = chain("a : b = c", Some(&only_colons));
    assert_eq!(result.unwrap_or_default().text, "(a : b)");
}
