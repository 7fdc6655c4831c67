use crate::{fraction::Fraction, tokenizer::Operator};

/// Applies `operator` to `left` and `right`. The result is always reduced.
pub fn calc(left: &Fraction, right: &Fraction, operator: Operator) -> Result<Fraction, EvaluationError> {
  let result = match operator {
    Operator::Add => left + right,
    Operator::Subtract => left - right,
    Operator::Multiply => left * right,
    Operator::Divide => left.checked_div(right).ok_or_else(|| {
      EvaluationError::DivisionByZero(format!("Can't divide '{}' by zero", left))
    })?,
  };
  log::debug!("{} {} {} = {}", left, operator, right, result);
  Ok(result)
}

#[derive(Debug, Clone, PartialEq)]
pub enum EvaluationError {
  DivisionByZero(String),
}

impl std::fmt::Display for EvaluationError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      EvaluationError::DivisionByZero(message) => write!(f, "{}", message),
    }
  }
}

impl std::error::Error for EvaluationError {}

#[cfg(test)]
mod tests {
  use super::*;
  use num::BigInt;
  use rand::Rng;

  fn frac(numerator: i64, denominator: i64) -> Fraction {
    Fraction::new(BigInt::from(numerator), BigInt::from(denominator)).unwrap()
  }

  fn random_fraction(rng: &mut impl Rng) -> Fraction {
    let denominator = rng.gen_range(1i64..=10_000) * if rng.gen() { 1 } else { -1 };
    frac(rng.gen_range(-10_000i64..=10_000), denominator)
  }

  #[test]
  fn each_operator() {
    let half = frac(1, 2);
    let third = frac(1, 3);
    assert_eq!(calc(&half, &third, Operator::Add), Ok(frac(5, 6)));
    assert_eq!(calc(&half, &half, Operator::Subtract), Ok(Fraction::zero()));
    assert_eq!(calc(&frac(2, 3), &frac(3, 4), Operator::Multiply), Ok(half.clone()));
    assert_eq!(calc(&half, &third, Operator::Divide), Ok(frac(3, 2)));
  }

  #[test]
  fn division_by_zero() {
    let res = calc(&frac(1, 2), &Fraction::zero(), Operator::Divide);
    assert!(matches!(res, Err(EvaluationError::DivisionByZero(_))));
  }

  #[test]
  fn addition_and_multiplication_commute() {
    let mut rng = rand::thread_rng();
    for _ in 0..500 {
      let a = random_fraction(&mut rng);
      let b = random_fraction(&mut rng);
      for operator in [Operator::Add, Operator::Multiply] {
        assert_eq!(calc(&a, &b, operator), calc(&b, &a, operator));
      }
    }
  }

  #[test]
  fn division_undoes_multiplication() {
    let mut rng = rand::thread_rng();
    for _ in 0..500 {
      let a = random_fraction(&mut rng);
      let b = random_fraction(&mut rng);
      if b.is_zero() {
        continue;
      }
      let product = calc(&a, &b, Operator::Multiply).unwrap();
      assert_eq!(calc(&product, &b, Operator::Divide), Ok(a));
    }
  }

  #[test]
  fn subtraction_undoes_addition() {
    let mut rng = rand::thread_rng();
    for _ in 0..500 {
      let a = random_fraction(&mut rng);
      let b = random_fraction(&mut rng);
      let sum = calc(&a, &b, Operator::Add).unwrap();
      assert_eq!(calc(&sum, &b, Operator::Subtract), Ok(a));
    }
  }
}
