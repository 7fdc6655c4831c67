use num::BigInt;

use crate::{
  fraction::{Fraction, FractionError},
  tokenizer::{Operator, Token},
};

const CASE_LENGTH: usize = 5;

/// Reads `a_num a_den b_num b_den op` from one line's tokens.
pub fn parse(tokens: Vec<Token>) -> Result<Case, ParserError> {
  if tokens.len() != CASE_LENGTH {
    return Err(ParserError::WrongTokenCount(format!(
      "Expected {} fields, found {}",
      CASE_LENGTH,
      tokens.len()
    )));
  }
  let mut tokens = tokens.into_iter();
  let left = parse_fraction(&mut tokens)?;
  let right = parse_fraction(&mut tokens)?;
  let operator = match tokens.next() {
    Some(Token::Symbol(symbol)) => Operator::from_symbol(&symbol).ok_or_else(|| {
      ParserError::UnsupportedOperator(format!("Unsupported operator '{}'", symbol))
    })?,
    Some(token) => {
      return Err(ParserError::UnsupportedOperator(format!(
        "Expected an operator, found '{}'",
        token
      )))
    }
    None => unreachable!(),
  };
  Ok(Case {
    left,
    right,
    operator,
  })
}

fn parse_fraction(tokens: &mut impl Iterator<Item = Token>) -> Result<Fraction, ParserError> {
  let numerator = parse_integer(tokens.next())?;
  let denominator = parse_integer(tokens.next())?;
  Ok(Fraction::new(numerator, denominator)?)
}

fn parse_integer(token: Option<Token>) -> Result<BigInt, ParserError> {
  match token {
    Some(Token::Integer(number)) => Ok(number),
    Some(token) => Err(ParserError::ExpectedInteger(format!(
      "Expected an integer, found '{}'",
      token
    ))),
    None => Err(ParserError::WrongTokenCount(
      "Ran out of fields while reading a fraction".to_string(),
    )),
  }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Case {
  pub left: Fraction,
  pub right: Fraction,
  pub operator: Operator,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ParserError {
  WrongTokenCount(String),
  ExpectedInteger(String),
  UnsupportedOperator(String),
  InvalidFraction(FractionError),
}

impl From<FractionError> for ParserError {
  fn from(err: FractionError) -> Self {
    ParserError::InvalidFraction(err)
  }
}

impl std::fmt::Display for ParserError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      ParserError::WrongTokenCount(message) => write!(f, "{}", message),
      ParserError::ExpectedInteger(message) => write!(f, "{}", message),
      ParserError::UnsupportedOperator(message) => write!(f, "{}", message),
      ParserError::InvalidFraction(err) => write!(f, "{}", err),
    }
  }
}

impl std::error::Error for ParserError {}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::tokenizer::tokenize;

  fn frac(numerator: i64, denominator: i64) -> Fraction {
    Fraction::new(BigInt::from(numerator), BigInt::from(denominator)).unwrap()
  }

  #[test]
  fn parses_a_case() {
    let case = parse(tokenize("2 -4 3 9 *")).unwrap();
    assert_eq!(case.left, frac(-1, 2));
    assert_eq!(case.right, frac(1, 3));
    assert_eq!(case.operator, Operator::Multiply);
  }

  #[test]
  fn wrong_field_count() {
    assert!(matches!(
      parse(tokenize("1 2 3 +")),
      Err(ParserError::WrongTokenCount(_))
    ));
    assert!(matches!(
      parse(tokenize("1 2 3 4 + 5")),
      Err(ParserError::WrongTokenCount(_))
    ));
    assert!(matches!(
      parse(tokenize("")),
      Err(ParserError::WrongTokenCount(_))
    ));
  }

  #[test]
  fn non_integer_field() {
    assert!(matches!(
      parse(tokenize("1 x 3 4 +")),
      Err(ParserError::ExpectedInteger(_))
    ));
  }

  #[test]
  fn zero_denominator() {
    assert!(matches!(
      parse(tokenize("1 0 1 2 +")),
      Err(ParserError::InvalidFraction(FractionError::ZeroDenominator(_)))
    ));
    assert!(matches!(
      parse(tokenize("1 2 1 0 /")),
      Err(ParserError::InvalidFraction(FractionError::ZeroDenominator(_)))
    ));
  }

  #[test]
  fn unsupported_operator() {
    assert!(matches!(
      parse(tokenize("1 2 1 3 %")),
      Err(ParserError::UnsupportedOperator(_))
    ));
    assert!(matches!(
      parse(tokenize("1 2 1 3 4")),
      Err(ParserError::UnsupportedOperator(_))
    ));
  }
}
