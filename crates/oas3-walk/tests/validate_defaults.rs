//! End-to-end wiring of the walker and the constraint validator: a `process`
//! callback derives a decimal validator from each numeric leaf schema and
//! checks the schema's declared default value against its own bounds.

use std::str::FromStr;

use anyhow::{Context, Result, anyhow};
use indexmap::IndexMap;
use oas3_walk::{
  spec::{Components, PrimitiveSchema, PrimitiveType, Property, Schema, SchemaKind, Spec},
  walk_all_schemas,
};
use oas3_walk_support::{Decimal, DecimalValidator};

fn number(value: impl Into<serde_json::Number>) -> Option<serde_json::Number> {
  Some(value.into())
}

fn fraction(value: f64) -> Option<serde_json::Number> {
  serde_json::Number::from_f64(value)
}

/// `serde_json::Number` renders losslessly, so the decimal parse is exact even
/// for fractional literals that have no binary representation.
fn to_decimal(number: &serde_json::Number) -> Result<Decimal> {
  Decimal::from_str(&number.to_string()).with_context(|| format!("not a decimal literal: {number}"))
}

fn validator_for(primitive: &PrimitiveSchema) -> Result<DecimalValidator> {
  let mut validator = DecimalValidator::default();

  if let Some(max) = &primitive.maximum {
    let max = to_decimal(max)?;
    if primitive.exclusive_maximum {
      validator.set_exclusive_maximum(max);
    } else {
      validator.set_maximum(max);
    }
  }

  if let Some(min) = &primitive.minimum {
    let min = to_decimal(min)?;
    if primitive.exclusive_minimum {
      validator.set_exclusive_minimum(min);
    } else {
      validator.set_minimum(min);
    }
  }

  if let Some(multiple_of) = &primitive.multiple_of {
    validator.set_multiple_of(to_decimal(multiple_of)?);
  }

  Ok(validator)
}

/// Checks a primitive leaf's default against its own bounds; non-numeric
/// leaves and leaves without defaults pass through untouched.
fn check_default(schema: &Schema) -> Result<bool> {
  let SchemaKind::Primitive(primitive) = &schema.kind else {
    return Err(anyhow!("walker handed a non-primitive schema to process"));
  };

  let validator = validator_for(primitive)?;
  if !validator.is_configured() {
    return Ok(false);
  }

  let Some(serde_json::Value::Number(default)) = &primitive.default else {
    return Ok(false);
  };

  let value = to_decimal(default)?;
  validator
    .validate(value)
    .with_context(|| format!("default {value} violates its own schema bounds"))?;
  Ok(true)
}

fn pet_spec(age_default: i64) -> Spec {
  let age = PrimitiveSchema {
    primitive_type: PrimitiveType::Integer,
    minimum: number(0),
    maximum: number(120),
    default: Some(serde_json::Value::from(age_default)),
    ..PrimitiveSchema::default()
  };
  let price = PrimitiveSchema {
    primitive_type: PrimitiveType::Number,
    multiple_of: fraction(0.01),
    minimum: number(0),
    exclusive_minimum: true,
    default: Some(serde_json::Value::from(19.99)),
    ..PrimitiveSchema::default()
  };
  let name = PrimitiveSchema::of_type(PrimitiveType::String);

  Spec {
    components: Components {
      schemas: IndexMap::from([(
        "Pet".to_string(),
        Schema::object(vec![
          Property::new("age", Schema::primitive(age)),
          Property::new("price", Schema::primitive(price)),
          Property::new("name", Schema::primitive(name)),
        ])
        .into(),
      )]),
      ..Components::default()
    },
    ..Spec::default()
  }
}

#[test]
fn defaults_within_bounds_pass() {
  let spec = pet_spec(25);

  let mut validated = 0usize;
  let mut process = |schema: &Schema| -> Result<()> {
    if check_default(schema)? {
      validated += 1;
    }
    Ok(())
  };

  walk_all_schemas(&spec, &mut process, None).unwrap();
  assert_eq!(validated, 2, "both numeric defaults should be validated");
}

#[test]
fn out_of_range_default_fails_the_walk() {
  let spec = pet_spec(121);

  let mut process = |schema: &Schema| -> Result<()> {
    check_default(schema)?;
    Ok(())
  };

  let err = walk_all_schemas(&spec, &mut process, None).unwrap_err();
  assert!(
    err.to_string().contains("violates its own schema bounds"),
    "unexpected error: {err:#}",
  );
}
