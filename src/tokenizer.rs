use std::str::FromStr;

use num::BigInt;

/// Splits one case line on whitespace. Words that read as integers become
/// `Token::Integer`, everything else is kept as a `Token::Symbol` for the
/// parser to judge by position.
pub fn tokenize(text: &str) -> Vec<Token> {
  text
    .split_whitespace()
    .map(|word| match BigInt::from_str(word) {
      Ok(number) => Token::Integer(number),
      Err(_) => Token::Symbol(word.to_owned()),
    })
    .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub enum Token {
  Integer(BigInt),
  Symbol(String),
}

impl std::fmt::Display for Token {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Token::Integer(number) => write!(f, "{}", number),
      Token::Symbol(symbol) => write!(f, "{}", symbol),
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
  Add,
  Subtract,
  Multiply,
  Divide,
}

impl Operator {
  pub fn from_symbol(symbol: &str) -> Option<Operator> {
    match symbol {
      "+" => Some(Operator::Add),
      "-" => Some(Operator::Subtract),
      "*" => Some(Operator::Multiply),
      "/" => Some(Operator::Divide),
      _ => None,
    }
  }
}

impl std::fmt::Display for Operator {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Operator::Add => write!(f, "+"),
      Operator::Subtract => write!(f, "-"),
      Operator::Multiply => write!(f, "*"),
      Operator::Divide => write!(f, "/"),
    }
  }
}
