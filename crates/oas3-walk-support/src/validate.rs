use std::ops::Rem;

use num_traits::Zero;
use rust_decimal::Decimal;


/// A value broke one of the configured constraints. Checks run in a fixed
/// order (maximum, minimum, multiple-of), so when several constraints fail the
/// reported violation is the first in that order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ConstraintViolation {
  #[error("value exceeds the configured maximum")]
  Maximum,
  #[error("value is below the configured minimum")]
  Minimum,
  #[error("value is not a multiple of the configured factor")]
  MultipleOf,
}

/// Range and multiple-of constraints for a single ordered numeric type.
///
/// Presence is carried by the explicit `*_set` flags rather than `Option`
/// wrappers: the zero value of `T` is a perfectly good bound ("maximum is 0"),
/// so it cannot double as "not configured". A validator with no flags set
/// accepts every value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NumericValidator<T> {
  pub max: T,
  pub max_set: bool,
  pub max_exclusive: bool,
  pub min: T,
  pub min_set: bool,
  pub min_exclusive: bool,
  pub multiple_of: T,
  pub multiple_of_set: bool,
}

/// Validator for integer-typed schemas.
pub type IntValidator = NumericValidator<i64>;

/// Validator for number-typed schemas. [`Decimal`] keeps the multiple-of
/// remainder exact; binary floating point would round.
pub type DecimalValidator = NumericValidator<Decimal>;

impl<T> NumericValidator<T> {
  /// True iff at least one constraint has been configured.
  pub fn is_configured(&self) -> bool {
    self.max_set || self.min_set || self.multiple_of_set
  }

  pub fn set_maximum(&mut self, value: T) {
    self.max = value;
    self.max_set = true;
    self.max_exclusive = false;
  }

  pub fn set_exclusive_maximum(&mut self, value: T) {
    self.max = value;
    self.max_set = true;
    self.max_exclusive = true;
  }

  pub fn set_minimum(&mut self, value: T) {
    self.min = value;
    self.min_set = true;
    self.min_exclusive = false;
  }

  pub fn set_exclusive_minimum(&mut self, value: T) {
    self.min = value;
    self.min_set = true;
    self.min_exclusive = true;
  }

  pub fn set_multiple_of(&mut self, value: T) {
    self.multiple_of = value;
    self.multiple_of_set = true;
  }
}

impl<T> NumericValidator<T>
where
  T: Copy + PartialOrd + Rem<Output = T> + Zero,
{
  /// Checks `value` against every configured constraint and reports the first
  /// violation, in the order maximum, minimum, multiple-of.
  pub fn validate(&self, value: T) -> Result<(), ConstraintViolation> {
    if self.max_set {
      let beyond = if self.max_exclusive {
        value >= self.max
      } else {
        value > self.max
      };
      if beyond {
        return Err(ConstraintViolation::Maximum);
      }
    }

    if self.min_set {
      let beyond = if self.min_exclusive {
        value <= self.min
      } else {
        value < self.min
      };
      if beyond {
        return Err(ConstraintViolation::Minimum);
      }
    }

    if self.multiple_of_set {
      // Only zero is a multiple of zero; guards the remainder against a zero
      // divisor.
      let aligned = if self.multiple_of.is_zero() {
        value.is_zero()
      } else {
        (value % self.multiple_of).is_zero()
      };
      if !aligned {
        return Err(ConstraintViolation::MultipleOf);
      }
    }

    Ok(())
  }
}
