//! Left-associative operator chains.

use widl_ir::{Node, Span};
use widl_lexer::{Token, TokenSet};

use crate::Parser;

impl<'src> Parser<'src> {
    /// Parse `operand (op operand)*` as a left-leaning chain without
    /// recursion.
    ///
    /// `operand` parses one operand, or returns `None` without consuming if
    /// none is present. While the current token is in `operators` (and
    /// `gate`, if given, accepts it), the operator is consumed and
    /// `combine` receives the chain so far plus the operator token. It
    /// parses the right operand and returns the combined node, or gives the
    /// left node back as `Err` when no right operand follows; that records
    /// an error and ends the chain.
    ///
    /// Every combined node spans from the first token of the leftmost
    /// operand to the last consumed token.
    pub fn left_recursive<N: Node>(
        &mut self,
        mut operand: impl FnMut(&mut Self) -> Option<N>,
        operators: TokenSet,
        gate: Option<&dyn Fn(&Token<'src>) -> bool>,
        mut combine: impl FnMut(&mut Self, N, Token<'src>) -> Result<N, N>,
    ) -> Option<N> {
        let start = self.cursor().current_start();
        let mut left = operand(self)?;

        while self.check_any(operators) {
            if let Some(gate) = gate {
                if !gate(self.current()) {
                    break;
                }
            }
            let operator = self.advance();
            match combine(self, left, operator) {
                Ok(mut combined) => {
                    combined.meta_mut().span = Span::new(start, self.cursor().previous_end());
                    left = combined;
                }
                Err(unfinished) => {
                    let message = format!("Expected right-hand operand, found {}", self.current());
                    self.emit_error(message);
                    return Some(unfinished);
                }
            }
        }

        Some(left)
    }
}

#[cfg(test)]
mod tests;
