//! Recursive-descent parser.
//!
//! ```text
//! expr    := term (('+' | '-') term)*
//! term    := unary (('*' | '/' | '%') unary)*
//! unary   := ('+' | '-') unary | power
//! power   := primary ('^' unary)?
//! primary := number | ident | ident '(' args ')' | '(' expr ')'
//! ```

use std::f64::consts;

use crate::{
    BinaryOp, Expr, Func, ParseError,
    lexer::{Token, TokenKind, tokenize},
};

/// Prefix accepted in front of any identifier, e.g. `Math.sqrt(x)`.
const NAMESPACE: &str = "Math.";

/// Deepest expression tree the parser builds.
///
/// Parsing and evaluation both recurse once per level, so this bounds their
/// stack use. Each operand of an operator chain counts as a level.
pub(crate) const MAX_DEPTH: usize = 256;

pub(crate) fn parse(text: &str) -> Result<Expr, ParseError> {
    let tokens = tokenize(text)?;
    if tokens.is_empty() {
        return Err(ParseError::Empty);
    }

    let mut parser = Parser {
        tokens,
        cursor: 0,
        depth: 0,
    };
    let expr = parser.expr()?;

    match parser.peek() {
        None => Ok(expr),
        Some(token) => Err(unexpected(token)),
    }
}

struct Parser {
    tokens: Vec<Token>,
    cursor: usize,
    depth: usize,
}

impl Parser {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.cursor)
    }

    fn next(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.cursor).cloned();
        if token.is_some() {
            self.cursor += 1;
        }
        token
    }

    /// Consumes the next token if it has the given kind.
    fn eat(&mut self, kind: &TokenKind) -> bool {
        if self.peek().is_some_and(|token| &token.kind == kind) {
            self.cursor += 1;
            true
        } else {
            false
        }
    }

    /// Position of the next token, or of the last one at the end of input.
    fn pos(&self) -> usize {
        self.tokens
            .get(self.cursor)
            .or_else(|| self.tokens.last())
            .map_or(0, |token| token.pos)
    }

    /// Enters one tree level; callers leave it with [`Parser::ascend`].
    fn descend(&mut self) -> Result<(), ParseError> {
        self.depth += 1;
        if self.depth > MAX_DEPTH {
            return Err(ParseError::TooDeep { pos: self.pos() });
        }
        Ok(())
    }

    fn ascend(&mut self, levels: usize) {
        self.depth -= levels;
    }

    /// Parses one nested level with `parse`.
    fn nested<T>(
        &mut self,
        parse: impl FnOnce(&mut Self) -> Result<T, ParseError>,
    ) -> Result<T, ParseError> {
        self.descend()?;
        let result = parse(self)?;
        self.ascend(1);
        Ok(result)
    }

    fn expect(&mut self, kind: &TokenKind) -> Result<(), ParseError> {
        match self.next() {
            Some(token) if &token.kind == kind => Ok(()),
            Some(token) => Err(unexpected(&token)),
            None => Err(ParseError::UnexpectedEnd),
        }
    }

    fn expr(&mut self) -> Result<Expr, ParseError> {
        let mut lhs = self.term()?;
        let mut links = 0;
        loop {
            let op = if self.eat(&TokenKind::Plus) {
                BinaryOp::Add
            } else if self.eat(&TokenKind::Minus) {
                BinaryOp::Sub
            } else {
                self.ascend(links);
                return Ok(lhs);
            };
            self.descend()?;
            links += 1;
            let rhs = self.term()?;
            lhs = Expr::Binary(op, Box::new(lhs), Box::new(rhs));
        }
    }

    fn term(&mut self) -> Result<Expr, ParseError> {
        let mut lhs = self.unary()?;
        let mut links = 0;
        loop {
            let op = if self.eat(&TokenKind::Star) {
                BinaryOp::Mul
            } else if self.eat(&TokenKind::Slash) {
                BinaryOp::Div
            } else if self.eat(&TokenKind::Percent) {
                BinaryOp::Rem
            } else {
                self.ascend(links);
                return Ok(lhs);
            };
            self.descend()?;
            links += 1;
            let rhs = self.unary()?;
            lhs = Expr::Binary(op, Box::new(lhs), Box::new(rhs));
        }
    }

    fn unary(&mut self) -> Result<Expr, ParseError> {
        self.nested(|parser| {
            if parser.eat(&TokenKind::Minus) {
                return Ok(Expr::Neg(Box::new(parser.unary()?)));
            }
            if parser.eat(&TokenKind::Plus) {
                return parser.unary();
            }
            parser.power()
        })
    }

    fn power(&mut self) -> Result<Expr, ParseError> {
        let base = self.primary()?;
        if self.eat(&TokenKind::Caret) {
            // Right associative: the exponent may itself contain `^`.
            let exponent = self.unary()?;
            return Ok(Expr::Binary(
                BinaryOp::Pow,
                Box::new(base),
                Box::new(exponent),
            ));
        }
        Ok(base)
    }

    fn primary(&mut self) -> Result<Expr, ParseError> {
        let token = self.next().ok_or(ParseError::UnexpectedEnd)?;
        match token.kind {
            TokenKind::Number(value) => Ok(Expr::Num(value)),
            TokenKind::LParen => self.nested(|parser| {
                let inner = parser.expr()?;
                parser.expect(&TokenKind::RParen)?;
                Ok(inner)
            }),
            TokenKind::Ident(ref name) => {
                let name = name.strip_prefix(NAMESPACE).unwrap_or(name);
                if self.eat(&TokenKind::LParen) {
                    self.nested(|parser| parser.call(name, token.pos))
                } else {
                    atom(name, token.pos)
                }
            }
            _ => Err(unexpected(&token)),
        }
    }

    /// Parses the argument list of a call; the opening parenthesis is consumed.
    fn call(&mut self, name: &str, pos: usize) -> Result<Expr, ParseError> {
        let func = Func::from_name(name).ok_or_else(|| ParseError::UnknownFunction {
            name: name.to_string(),
            pos,
        })?;

        let mut args = vec![self.expr()?];
        while self.eat(&TokenKind::Comma) {
            args.push(self.expr()?);
        }
        self.expect(&TokenKind::RParen)?;

        if args.len() != func.arity() {
            return Err(ParseError::Arity {
                name: func.name(),
                expected: func.arity(),
                found: args.len(),
            });
        }
        Ok(Expr::Call(func, args))
    }
}

/// Resolves a bare identifier: the variable or a named constant.
fn atom(name: &str, pos: usize) -> Result<Expr, ParseError> {
    match name {
        "x" => Ok(Expr::Var),
        "pi" | "PI" => Ok(Expr::Num(consts::PI)),
        "e" | "E" => Ok(Expr::Num(consts::E)),
        _ => Err(ParseError::UnknownIdentifier {
            name: name.to_string(),
            pos,
        }),
    }
}

fn unexpected(token: &Token) -> ParseError {
    ParseError::UnexpectedToken {
        found: token.kind.describe(),
        pos: token.pos,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn eval(text: &str, x: f64) -> f64 {
        parse(text).expect("should parse").eval(x)
    }

    #[test]
    fn respects_precedence() {
        assert_relative_eq!(eval("1 + 2 * 3", 0.0), 7.0);
        assert_relative_eq!(eval("(1 + 2) * 3", 0.0), 9.0);
        assert_relative_eq!(eval("10 - 4 - 3", 0.0), 3.0);
        assert_relative_eq!(eval("8 / 4 / 2", 0.0), 1.0);
        assert_relative_eq!(eval("7 % 4 * 2", 0.0), 6.0);
    }

    #[test]
    fn power_is_right_associative() {
        assert_relative_eq!(eval("2^3^2", 0.0), 512.0);
        assert_relative_eq!(eval("2**3", 0.0), 8.0);
        assert_relative_eq!(eval("2^-1", 0.0), 0.5);
    }

    #[test]
    fn negation_binds_looser_than_power() {
        assert_relative_eq!(eval("-x^2", 3.0), -9.0);
        assert_relative_eq!(eval("(-x)^2", 3.0), 9.0);
        assert_relative_eq!(eval("--x", 3.0), 3.0);
        assert_relative_eq!(eval("+x", 3.0), 3.0);
    }

    #[test]
    fn calls_and_constants() {
        assert_relative_eq!(eval("sin(pi / 2)", 0.0), 1.0);
        assert_relative_eq!(eval("pow(x, 3)", 2.0), 8.0);
        assert_relative_eq!(eval("max(x, 1) + min(x, 1)", 4.0), 5.0);
        assert_relative_eq!(eval("log(e)", 0.0), 1.0);
        assert_relative_eq!(eval("Math.sqrt(x) * Math.PI", 4.0), 2.0 * consts::PI);
    }

    #[test]
    fn rejects_empty_input() {
        assert_eq!(parse("   "), Err(ParseError::Empty));
    }

    #[test]
    fn rejects_dangling_operator() {
        assert_eq!(parse("x +"), Err(ParseError::UnexpectedEnd));
    }

    #[test]
    fn rejects_trailing_tokens() {
        assert_eq!(
            parse("x 2"),
            Err(ParseError::UnexpectedToken {
                found: "2".into(),
                pos: 2,
            })
        );
    }

    #[test]
    fn rejects_unbalanced_parentheses() {
        assert_eq!(parse("(x + 1"), Err(ParseError::UnexpectedEnd));
        assert!(matches!(
            parse("x + 1)"),
            Err(ParseError::UnexpectedToken { .. })
        ));
    }

    #[test]
    fn rejects_unknown_names() {
        assert_eq!(
            parse("y + 1"),
            Err(ParseError::UnknownIdentifier {
                name: "y".into(),
                pos: 0,
            })
        );
        assert_eq!(
            parse("alert(x)"),
            Err(ParseError::UnknownFunction {
                name: "alert".into(),
                pos: 0,
            })
        );
    }

    #[test]
    fn rejects_wrong_arity() {
        assert_eq!(
            parse("sin(x, 1)"),
            Err(ParseError::Arity {
                name: "sin",
                expected: 1,
                found: 2,
            })
        );
        assert!(matches!(parse("pow(x)"), Err(ParseError::Arity { .. })));
    }

    #[test]
    fn rejects_excessive_nesting() {
        let negations = format!("{}x", "-".repeat(100_000));
        assert_eq!(parse(&negations), Err(ParseError::TooDeep { pos: 256 }));

        let parens = format!("{}x{}", "(".repeat(50_000), ")".repeat(50_000));
        assert!(matches!(parse(&parens), Err(ParseError::TooDeep { .. })));

        let powers = format!("{}2", "2^".repeat(50_000));
        assert!(matches!(parse(&powers), Err(ParseError::TooDeep { .. })));

        let calls = format!("{}x{}", "sin(".repeat(50_000), ")".repeat(50_000));
        assert!(matches!(parse(&calls), Err(ParseError::TooDeep { .. })));
    }

    #[test]
    fn rejects_long_operator_chains() {
        let sum = format!("x{}", " + x".repeat(100_000));
        assert!(matches!(parse(&sum), Err(ParseError::TooDeep { .. })));

        let product = format!("x{}", " * x".repeat(100_000));
        assert!(matches!(parse(&product), Err(ParseError::TooDeep { .. })));
    }

    #[test]
    fn accepts_nesting_within_the_limit() {
        let parens = format!("{}x{}", "(".repeat(100), ")".repeat(100));
        assert_relative_eq!(eval(&parens, 2.0), 2.0);

        let negations = format!("{}x", "-".repeat(100));
        assert_relative_eq!(eval(&negations, 2.0), 2.0);

        let sum = format!("x{}", " + x".repeat(200));
        assert_relative_eq!(eval(&sum, 1.0), 201.0);
    }

    #[test]
    fn function_name_without_call_is_unknown_identifier() {
        assert!(matches!(
            parse("sin + 1"),
            Err(ParseError::UnknownIdentifier { .. })
        ));
    }
}
