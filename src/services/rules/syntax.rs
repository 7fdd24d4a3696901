//! Recursive-descent syntax check for rule scripts.
//!
//! ```text
//! program     := [expression] (";" [expression])*
//! expression  := or ("=" expression)?
//! or          := and ("||" and)*
//! and         := equality ("&&" equality)*
//! equality    := comparison (("==" | "!=" | "===" | "!==") comparison)*
//! comparison  := additive (("<" | "<=" | ">" | ">=") additive)*
//! additive    := multiplicative (("+" | "-") multiplicative)*
//! multiplicative := unary (("*" | "/" | "%") unary)*
//! unary       := ("!" | "-") unary | postfix
//! postfix     := primary ("(" arguments ")" | "." IDENT | "[" expression "]")*
//! primary     := IDENT | NUMBER | STRING | "true" | "false" | "null" | "(" expression ")"
//! ```

use super::RuleError;
use super::lexer::{Token, TokenKind, tokenize};

/// Check `rule` against the grammar above.
pub fn check_syntax(rule: &str) -> Result<(), RuleError> {
    let tokens = tokenize(rule);
    let mut parser = Parser {
        tokens: &tokens,
        pos: 0,
        end: rule.len(),
        depth: 0,
    };
    parser.program()
}

/// Binary operator levels from loosest to tightest binding.
const LEVELS: [TokenKind; 6] = [
    TokenKind::OrOr,
    TokenKind::AndAnd,
    TokenKind::Equality,
    TokenKind::Comparison,
    TokenKind::Plus,
    TokenKind::Multiplicative,
];

/// Deepest nesting of groups, brackets, call arguments, assignments and
/// prefix operators a rule may use.
const MAX_DEPTH: usize = 128;

struct Parser<'t, 'a> {
    tokens: &'t [Token<'a>],
    pos: usize,
    end: usize,
    depth: usize,
}

impl Parser<'_, '_> {
    fn peek(&self) -> Option<&Token<'_>> {
        self.tokens.get(self.pos)
    }

    fn at(&self, kind: TokenKind) -> bool {
        self.peek().is_some_and(|token| token.kind == Some(kind))
    }

    fn eat(&mut self, kind: TokenKind) -> bool {
        if self.at(kind) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn error(&self, expected: &str) -> RuleError {
        match self.peek() {
            Some(token) => RuleError::syntax(
                token.offset,
                format!("expected {expected}, found '{}'", token.text),
            ),
            None => RuleError::syntax(self.end, format!("expected {expected}, found end of rule")),
        }
    }

    fn enter(&mut self) -> Result<(), RuleError> {
        if self.depth >= MAX_DEPTH {
            let offset = self.peek().map_or(self.end, |token| token.offset);
            return Err(RuleError::syntax(offset, "rule nested too deeply"));
        }
        self.depth += 1;
        Ok(())
    }

    fn leave(&mut self) {
        self.depth -= 1;
    }

    fn expect(&mut self, kind: TokenKind, expected: &str) -> Result<(), RuleError> {
        if self.eat(kind) {
            Ok(())
        } else {
            Err(self.error(expected))
        }
    }

    fn program(&mut self) -> Result<(), RuleError> {
        while self.peek().is_some() {
            if self.eat(TokenKind::Semicolon) {
                continue;
            }
            self.expression()?;
            if self.peek().is_some() {
                self.expect(TokenKind::Semicolon, "';'")?;
            }
        }
        Ok(())
    }

    fn expression(&mut self) -> Result<(), RuleError> {
        self.enter()?;
        self.binary(0)?;
        if self.eat(TokenKind::Assign) {
            self.expression()?;
        }
        self.leave();
        Ok(())
    }

    fn binary(&mut self, level: usize) -> Result<(), RuleError> {
        let Some(op) = LEVELS.get(level).copied() else {
            return self.unary();
        };

        self.binary(level + 1)?;
        loop {
            let matched = self.eat(op) || (op == TokenKind::Plus && self.eat(TokenKind::Minus));
            if !matched {
                return Ok(());
            }
            self.binary(level + 1)?;
        }
    }

    fn unary(&mut self) -> Result<(), RuleError> {
        let outer = self.depth;
        while self.eat(TokenKind::Bang) || self.eat(TokenKind::Minus) {
            self.enter()?;
        }
        self.postfix()?;
        self.depth = outer;
        Ok(())
    }

    fn postfix(&mut self) -> Result<(), RuleError> {
        self.primary()?;
        loop {
            if self.eat(TokenKind::LParen) {
                self.arguments()?;
            } else if self.eat(TokenKind::Dot) {
                self.expect(TokenKind::Ident, "member name")?;
            } else if self.eat(TokenKind::LBracket) {
                self.expression()?;
                self.expect(TokenKind::RBracket, "']'")?;
            } else {
                return Ok(());
            }
        }
    }

    fn arguments(&mut self) -> Result<(), RuleError> {
        if self.eat(TokenKind::RParen) {
            return Ok(());
        }
        loop {
            self.expression()?;
            if self.eat(TokenKind::RParen) {
                return Ok(());
            }
            self.expect(TokenKind::Comma, "',' or ')'")?;
        }
    }

    fn primary(&mut self) -> Result<(), RuleError> {
        let literal = [
            TokenKind::Ident,
            TokenKind::Number,
            TokenKind::String,
            TokenKind::Boolean,
            TokenKind::Null,
        ];
        if literal.into_iter().any(|kind| self.eat(kind)) {
            return Ok(());
        }
        if self.eat(TokenKind::LParen) {
            self.expression()?;
            return self.expect(TokenKind::RParen, "')'");
        }
        Err(self.error("an expression"))
    }
}
