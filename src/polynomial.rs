use std::collections::BTreeMap;
use std::fmt;

use crate::SimplifyError;

/// Key of one collected term. Variant order drives map order: variable
/// products sort alphabetically and the constant slot comes last.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Monomial {
  /// One variable, or a product of variables built up by group suffixes.
  Vars(String),
  /// The constant slot. A dedicated variant, so it cannot collide with any
  /// variable name.
  Constant,
}

impl Monomial {
  pub fn var(letter: char) -> Self {
    Monomial::Vars(letter.to_string())
  }
}

/// An ordered map from monomial to nonzero integer coefficient. Entries
/// whose coefficient reaches zero are removed on the spot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Polynomial {
  terms: BTreeMap<Monomial, i64>,
}

impl Polynomial {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn constant(value: i64) -> Self {
    let mut poly = Self::new();
    if value != 0 {
      poly.terms.insert(Monomial::Constant, value);
    }
    poly
  }

  pub fn variable(letter: char) -> Self {
    let mut poly = Self::new();
    poly.terms.insert(Monomial::var(letter), 1);
    poly
  }

  pub fn is_empty(&self) -> bool {
    self.terms.is_empty()
  }

  pub fn len(&self) -> usize {
    self.terms.len()
  }

  /// Coefficient for a key; zero when absent, since zero entries are never
  /// stored.
  pub fn coefficient(&self, key: &Monomial) -> i64 {
    self.terms.get(key).copied().unwrap_or(0)
  }

  pub fn iter(&self) -> impl Iterator<Item = (&Monomial, i64)> + '_ {
    self.terms.iter().map(|(key, coefficient)| (key, *coefficient))
  }

  /// Add `coefficient` into `key`, dropping the entry if the sum is zero.
  pub fn add_term(
    &mut self,
    key: Monomial,
    coefficient: i64,
  ) -> Result<(), SimplifyError> {
    let sum = self
      .coefficient(&key)
      .checked_add(coefficient)
      .ok_or(SimplifyError::CoefficientOverflow)?;
    if sum == 0 {
      self.terms.remove(&key);
    } else {
      self.terms.insert(key, sum);
    }
    Ok(())
  }

  /// Merge another polynomial into this one, summing like terms.
  pub fn add(&mut self, other: Polynomial) -> Result<(), SimplifyError> {
    for (key, coefficient) in other.terms {
      self.add_term(key, coefficient)?;
    }
    Ok(())
  }

  /// Multiply every coefficient by `factor`.
  pub fn scale(&mut self, factor: i64) -> Result<(), SimplifyError> {
    if factor == 0 {
      self.terms.clear();
      return Ok(());
    }
    for coefficient in self.terms.values_mut() {
      *coefficient = coefficient
        .checked_mul(factor)
        .ok_or(SimplifyError::CoefficientOverflow)?;
    }
    Ok(())
  }

  /// Multiply every term by one variable: the constant contribution moves
  /// to that letter and variable products get it appended. Appending the
  /// same letter keeps keys distinct, so no coefficients merge here.
  pub fn multiply_by_variable(&mut self, letter: char) {
    let terms = std::mem::take(&mut self.terms);
    for (key, coefficient) in terms {
      let key = match key {
        Monomial::Constant => Monomial::var(letter),
        Monomial::Vars(mut vars) => {
          vars.push(letter);
          Monomial::Vars(vars)
        }
      };
      self.terms.insert(key, coefficient);
    }
  }
}

impl fmt::Display for Polynomial {
  /// Canonical signed-term form: sign, absolute coefficient, letters, with
  /// no separators. The constant slot renders its value alone, and the
  /// empty polynomial renders as the empty string.
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for (key, coefficient) in self.iter() {
      let sign = if coefficient >= 0 { '+' } else { '-' };
      write!(f, "{sign}{}", coefficient.unsigned_abs())?;
      if let Monomial::Vars(vars) = key {
        f.write_str(vars)?;
      }
    }
    Ok(())
  }
}
