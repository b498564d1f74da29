//! Expression evaluation over a fixed grammar.
//!
//! The evaluator accepts `+ - * / ^`, parentheses, decimal literals, and
//! unary minus. In scientific mode it additionally resolves the functions
//! `sin, cos, tan, log, exp, sqrt` and the constant `pi`; no other name is
//! resolvable. `^` binds right-associatively: `2^3^2` is `2^(3^2)`.
//!
//! Grammar:
//!
//! ```text
//! expr   := term (('+'|'-') term)*
//! term   := factor (('*'|'/') factor)*
//! factor := power
//! power  := unary ('^' power)?
//! unary  := '-'? atom
//! atom   := number | ident '(' expr ')' | '(' expr ')' | constant
//! ```

use crate::utils::error::{CalcError, Result};
use std::fmt;
use std::iter::Peekable;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvalMode {
    Basic,
    Scientific,
}

#[derive(Debug, Clone, PartialEq)]
enum Token {
    Number(f64),
    Ident(String),
    Plus,
    Minus,
    Star,
    Slash,
    Caret,
    LParen,
    RParen,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(n) => write!(f, "{}", n),
            Token::Ident(name) => write!(f, "{}", name),
            Token::Plus => write!(f, "+"),
            Token::Minus => write!(f, "-"),
            Token::Star => write!(f, "*"),
            Token::Slash => write!(f, "/"),
            Token::Caret => write!(f, "^"),
            Token::LParen => write!(f, "("),
            Token::RParen => write!(f, ")"),
        }
    }
}

fn tokenize(input: &str) -> Result<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut chars = input.char_indices().peekable();

    while let Some(&(start, c)) = chars.peek() {
        match c {
            c if c.is_whitespace() => {
                chars.next();
            }
            '+' => {
                chars.next();
                tokens.push(Token::Plus);
            }
            '-' => {
                chars.next();
                tokens.push(Token::Minus);
            }
            '*' => {
                chars.next();
                tokens.push(Token::Star);
            }
            '/' => {
                chars.next();
                tokens.push(Token::Slash);
            }
            '^' => {
                chars.next();
                tokens.push(Token::Caret);
            }
            '(' => {
                chars.next();
                tokens.push(Token::LParen);
            }
            ')' => {
                chars.next();
                tokens.push(Token::RParen);
            }
            c if c.is_ascii_digit() || c == '.' => {
                let mut end = start;
                while let Some(&(i, c)) = chars.peek() {
                    if c.is_ascii_digit() || c == '.' {
                        end = i + c.len_utf8();
                        chars.next();
                    } else {
                        break;
                    }
                }
                let text = &input[start..end];
                let value = text
                    .parse::<f64>()
                    .map_err(|_| CalcError::eval(format!("malformed number '{}'", text)))?;
                tokens.push(Token::Number(value));
            }
            c if c.is_ascii_alphabetic() => {
                let mut end = start;
                while let Some(&(i, c)) = chars.peek() {
                    if c.is_ascii_alphanumeric() {
                        end = i + c.len_utf8();
                        chars.next();
                    } else {
                        break;
                    }
                }
                tokens.push(Token::Ident(input[start..end].to_string()));
            }
            c => {
                return Err(CalcError::eval(format!("unexpected character '{}'", c)));
            }
        }
    }

    Ok(tokens)
}

/// Evaluates an expression string, failing on malformed input, unresolvable
/// identifiers, and math domain errors. Pure; result is always finite.
pub fn evaluate(input: &str, mode: EvalMode) -> Result<f64> {
    let tokens = tokenize(input)?;
    if tokens.is_empty() {
        return Err(CalcError::eval("empty expression"));
    }

    let mut parser = Parser {
        tokens: tokens.into_iter().peekable(),
        mode,
    };
    let value = parser.expr()?;

    if let Some(extra) = parser.tokens.next() {
        return Err(CalcError::eval(format!("unexpected token '{}'", extra)));
    }
    if !value.is_finite() {
        return Err(CalcError::eval("result is not a finite number"));
    }
    Ok(value)
}

struct Parser {
    tokens: Peekable<std::vec::IntoIter<Token>>,
    mode: EvalMode,
}

impl Parser {
    fn expr(&mut self) -> Result<f64> {
        let mut value = self.term()?;
        while let Some(Token::Plus | Token::Minus) = self.tokens.peek() {
            let add = self.tokens.next() == Some(Token::Plus);
            let rhs = self.term()?;
            value = if add { value + rhs } else { value - rhs };
        }
        Ok(value)
    }

    fn term(&mut self) -> Result<f64> {
        let mut value = self.power()?;
        while let Some(Token::Star | Token::Slash) = self.tokens.peek() {
            let mul = self.tokens.next() == Some(Token::Star);
            let rhs = self.power()?;
            if mul {
                value *= rhs;
            } else {
                if rhs == 0.0 {
                    return Err(CalcError::eval("division by zero"));
                }
                value /= rhs;
            }
        }
        Ok(value)
    }

    // Right-associative: the exponent recurses back into power.
    fn power(&mut self) -> Result<f64> {
        let base = self.unary()?;
        if let Some(Token::Caret) = self.tokens.peek() {
            self.tokens.next();
            let exponent = self.power()?;
            return Ok(base.powf(exponent));
        }
        Ok(base)
    }

    fn unary(&mut self) -> Result<f64> {
        if let Some(Token::Minus) = self.tokens.peek() {
            self.tokens.next();
            return Ok(-self.atom()?);
        }
        self.atom()
    }

    fn atom(&mut self) -> Result<f64> {
        match self.tokens.next() {
            Some(Token::Number(value)) => Ok(value),
            Some(Token::LParen) => {
                let value = self.expr()?;
                self.expect_rparen()?;
                Ok(value)
            }
            Some(Token::Ident(name)) => {
                if self.mode == EvalMode::Basic {
                    return Err(CalcError::eval(format!("unknown identifier '{}'", name)));
                }
                if let Some(Token::LParen) = self.tokens.peek() {
                    self.tokens.next();
                    let arg = self.expr()?;
                    self.expect_rparen()?;
                    apply_function(&name, arg)
                } else {
                    constant(&name)
                }
            }
            Some(other) => Err(CalcError::eval(format!("unexpected token '{}'", other))),
            None => Err(CalcError::eval("unexpected end of expression")),
        }
    }

    fn expect_rparen(&mut self) -> Result<()> {
        match self.tokens.next() {
            Some(Token::RParen) => Ok(()),
            Some(other) => Err(CalcError::eval(format!(
                "expected ')' but found '{}'",
                other
            ))),
            None => Err(CalcError::eval("missing closing parenthesis")),
        }
    }
}

fn apply_function(name: &str, arg: f64) -> Result<f64> {
    match name {
        "sin" => Ok(arg.sin()),
        "cos" => Ok(arg.cos()),
        "tan" => Ok(arg.tan()),
        "log" => {
            if arg <= 0.0 {
                return Err(CalcError::eval(format!("log of non-positive value {}", arg)));
            }
            Ok(arg.ln())
        }
        "exp" => Ok(arg.exp()),
        "sqrt" => {
            if arg < 0.0 {
                return Err(CalcError::eval(format!("sqrt of negative value {}", arg)));
            }
            Ok(arg.sqrt())
        }
        other => Err(CalcError::eval(format!("unknown function '{}'", other))),
    }
}

fn constant(name: &str) -> Result<f64> {
    match name {
        "pi" => Ok(std::f64::consts::PI),
        other => Err(CalcError::eval(format!("unknown identifier '{}'", other))),
    }
}
