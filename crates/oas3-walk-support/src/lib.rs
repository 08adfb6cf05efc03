//! Runtime validation support for `oas3-walk` consumers.
//!
//! The walker itself never validates values; collaborators construct a
//! [`validate::NumericValidator`] from a primitive schema's bounds inside
//! their `process` callback and apply it to literal values (defaults,
//! examples, enum members).

pub mod validate;

pub use rust_decimal::Decimal;
pub use validate::{ConstraintViolation, DecimalValidator, IntValidator, NumericValidator};
