use std::{
  cmp::Ordering,
  fmt,
  ops::{Add, Mul, Neg, Sub},
  str::FromStr,
};

use num::{BigInt, Integer, One, Signed, Zero};

/// An exact rational number.
///
/// Always stored in lowest terms with a positive denominator, so two equal
/// values have identical fields and the derived `PartialEq` is value equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Fraction {
  numerator: BigInt,
  denominator: BigInt,
}

impl Fraction {
  pub fn new(numerator: BigInt, denominator: BigInt) -> Result<Fraction, FractionError> {
    if denominator.is_zero() {
      return Err(FractionError::ZeroDenominator(format!(
        "Fraction '{}/{}' has a zero denominator",
        numerator, denominator
      )));
    }
    Ok(Fraction::reduced(numerator, denominator))
  }

  pub fn from_integer(numerator: BigInt) -> Fraction {
    Fraction {
      numerator,
      denominator: BigInt::one(),
    }
  }

  pub fn zero() -> Fraction {
    Fraction::from_integer(BigInt::zero())
  }

  // Caller guarantees `denominator != 0`.
  fn reduced(mut numerator: BigInt, mut denominator: BigInt) -> Fraction {
    if denominator.is_negative() {
      numerator = -numerator;
      denominator = -denominator;
    }
    let divisor = numerator.gcd(&denominator);
    if !divisor.is_one() {
      numerator /= &divisor;
      denominator /= &divisor;
    }
    Fraction {
      numerator,
      denominator,
    }
  }

  pub fn numerator(&self) -> &BigInt {
    &self.numerator
  }

  pub fn denominator(&self) -> &BigInt {
    &self.denominator
  }

  pub fn is_zero(&self) -> bool {
    self.numerator.is_zero()
  }

  pub fn is_integer(&self) -> bool {
    self.denominator.is_one()
  }

  pub fn abs(&self) -> Fraction {
    Fraction {
      numerator: self.numerator.abs(),
      denominator: self.denominator.clone(),
    }
  }

  /// The multiplicative inverse, or `None` for zero.
  pub fn recip(&self) -> Option<Fraction> {
    if self.is_zero() {
      return None;
    }
    Some(Fraction::reduced(
      self.denominator.clone(),
      self.numerator.clone(),
    ))
  }

  /// `self / rhs`, or `None` when `rhs` is zero.
  pub fn checked_div(&self, rhs: &Fraction) -> Option<Fraction> {
    if rhs.is_zero() {
      return None;
    }
    Some(Fraction::reduced(
      &self.numerator * &rhs.denominator,
      &self.denominator * &rhs.numerator,
    ))
  }
}

impl Default for Fraction {
  fn default() -> Self {
    Fraction::zero()
  }
}

impl Add for &Fraction {
  type Output = Fraction;

  fn add(self, rhs: Self) -> Fraction {
    Fraction::reduced(
      &self.numerator * &rhs.denominator + &rhs.numerator * &self.denominator,
      &self.denominator * &rhs.denominator,
    )
  }
}

impl Add for Fraction {
  type Output = Fraction;

  fn add(self, rhs: Self) -> Fraction {
    &self + &rhs
  }
}

impl Sub for &Fraction {
  type Output = Fraction;

  fn sub(self, rhs: Self) -> Fraction {
    Fraction::reduced(
      &self.numerator * &rhs.denominator - &rhs.numerator * &self.denominator,
      &self.denominator * &rhs.denominator,
    )
  }
}

impl Sub for Fraction {
  type Output = Fraction;

  fn sub(self, rhs: Self) -> Fraction {
    &self - &rhs
  }
}

impl Mul for &Fraction {
  type Output = Fraction;

  fn mul(self, rhs: Self) -> Fraction {
    Fraction::reduced(
      &self.numerator * &rhs.numerator,
      &self.denominator * &rhs.denominator,
    )
  }
}

impl Mul for Fraction {
  type Output = Fraction;

  fn mul(self, rhs: Self) -> Fraction {
    &self * &rhs
  }
}

impl Neg for Fraction {
  type Output = Fraction;

  fn neg(self) -> Fraction {
    Fraction {
      numerator: -self.numerator,
      denominator: self.denominator,
    }
  }
}

impl Neg for &Fraction {
  type Output = Fraction;

  fn neg(self) -> Fraction {
    -self.clone()
  }
}

impl Ord for Fraction {
  fn cmp(&self, other: &Self) -> Ordering {
    // Denominators are positive, so cross-multiplying keeps the direction.
    (&self.numerator * &other.denominator).cmp(&(&other.numerator * &self.denominator))
  }
}

impl PartialOrd for Fraction {
  fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
    Some(self.cmp(other))
  }
}

impl fmt::Display for Fraction {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if self.is_integer() {
      write!(f, "{}", self.numerator)
    } else {
      write!(f, "{}/{}", self.numerator, self.denominator)
    }
  }
}

impl FromStr for Fraction {
  type Err = FractionError;

  fn from_str(text: &str) -> Result<Self, Self::Err> {
    let text = text.trim();
    let malformed = || FractionError::Malformed(format!("Can't read '{}' as a fraction", text));
    match text.split_once('/') {
      Some((numerator, denominator)) => {
        let numerator = BigInt::from_str(numerator).map_err(|_| malformed())?;
        let denominator = BigInt::from_str(denominator).map_err(|_| malformed())?;
        Fraction::new(numerator, denominator)
      }
      None => {
        let numerator = BigInt::from_str(text).map_err(|_| malformed())?;
        Ok(Fraction::from_integer(numerator))
      }
    }
  }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FractionError {
  ZeroDenominator(String),
  Malformed(String),
}

impl fmt::Display for FractionError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      FractionError::ZeroDenominator(message) => write!(f, "{}", message),
      FractionError::Malformed(message) => write!(f, "{}", message),
    }
  }
}

impl std::error::Error for FractionError {}
