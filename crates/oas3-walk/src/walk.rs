use anyhow::Result;

use crate::spec::{ArrayItems, Operation, Parameter, Schema, SchemaKind, SchemaNode, Spec};


/// Callback invoked once per primitive leaf schema. Returning an error aborts
/// the whole walk immediately.
pub type ProcessSchema<'a> = dyn FnMut(&Schema) -> Result<()> + 'a;

/// Callback invoked when the walker detects a recoverable structural defect.
/// Receives the defect kind, the enclosing property name when there is one,
/// and the offending schema. Returning `Ok(())` tolerates the defect and the
/// walk continues; returning an error aborts the walk with that error.
pub type RepairSchema<'a> = dyn FnMut(SchemaDefect, Option<&str>, &Schema) -> Result<()> + 'a;

/// A structural shape violation the walker can recover from. New defect kinds
/// may be added, so repair implementations should match non-exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum SchemaDefect {
  #[error("missing items in array")]
  MissingItemsInArray,
}

/// Walks every schema reachable from `spec` and calls `process` on each
/// primitive leaf, that is, every schema whose kind is neither object nor
/// array. Composition branches (`all_of`, `one_of`) are walked before the
/// node's own kind, and `$ref` nodes are skipped without descending.
///
/// Structural defects (currently [`SchemaDefect::MissingItemsInArray`]) are
/// routed to `repair`; when `None` is supplied the defect is propagated as the
/// walk's error.
pub fn walk_all_schemas<'f>(
  spec: &Spec,
  process: &mut ProcessSchema<'f>,
  repair: Option<&mut RepairSchema<'f>>,
) -> Result<()> {
  let mut propagate = |defect: SchemaDefect, _name: Option<&str>, _schema: &Schema| -> Result<()> { Err(defect.into()) };
  let repair: &mut RepairSchema<'f> = match repair {
    Some(repair) => repair,
    None => &mut propagate,
  };

  let mut walker = Walker { process, repair };
  walker.walk_spec(spec)
}

struct Walker<'w, 'f> {
  process: &'w mut ProcessSchema<'f>,
  repair: &'w mut RepairSchema<'f>,
}

impl Walker<'_, '_> {
  fn walk_spec(&mut self, spec: &Spec) -> Result<()> {
    for item in spec.paths.values() {
      self.walk_parameters(&item.parameters)?;

      for (_, op) in item.operations() {
        self.walk_operation(op)?;
      }
    }

    for parameter in spec.components.parameters.values() {
      self.walk_parameter(parameter)?;
    }

    for schema in spec.components.schemas.values() {
      self.walk_schema(None, Some(schema))?;
    }

    Ok(())
  }

  fn walk_parameters(&mut self, parameters: &[Parameter]) -> Result<()> {
    for parameter in parameters {
      self.walk_parameter(parameter)?;
    }

    Ok(())
  }

  fn walk_parameter(&mut self, parameter: &Parameter) -> Result<()> {
    self.walk_schema(None, parameter.schema.as_ref())?;

    for media_type in parameter.content.values() {
      self.walk_schema(None, media_type.schema.as_ref())?;
    }

    Ok(())
  }

  fn walk_operation(&mut self, operation: &Operation) -> Result<()> {
    self.walk_parameters(&operation.parameters)?;

    if let Some(body) = &operation.request_body {
      for media_type in body.content.values() {
        self.walk_schema(None, media_type.schema.as_ref())?;
      }
    }

    for response in operation.responses.values() {
      for media_type in response.content.values() {
        self.walk_schema(None, media_type.schema.as_ref())?;
      }
    }

    Ok(())
  }

  fn walk_schema(&mut self, name: Option<&str>, node: Option<&SchemaNode>) -> Result<()> {
    let Some(SchemaNode::Schema(schema)) = node else {
      // Absent slot, or a reference: references are walked at their
      // declaration site in components, never at the use site.
      return Ok(());
    };

    for child in &schema.all_of {
      self.walk_schema(None, Some(child))?;
    }

    for child in &schema.one_of {
      self.walk_schema(None, Some(child))?;
    }

    match &schema.kind {
      SchemaKind::Primitive(_) => (self.process)(schema),

      SchemaKind::Object { properties } => {
        for property in properties {
          self.walk_schema(Some(&property.name), Some(&property.schema))?;
        }

        Ok(())
      }

      SchemaKind::Array { items } => {
        match items {
          // A tolerated defect leaves nothing to descend into.
          None => (self.repair)(SchemaDefect::MissingItemsInArray, name, schema)?,

          Some(ArrayItems::Item(item)) => self.walk_schema(None, Some(item))?,

          Some(ArrayItems::Tuple(items)) => {
            for item in items {
              self.walk_schema(None, Some(item))?;
            }
          }
        }

        Ok(())
      }
    }
  }
}
