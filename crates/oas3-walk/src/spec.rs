use http::Method;
use indexmap::IndexMap;
use strum::{Display, EnumString};

/// Root of a parsed OpenAPI document, reduced to the parts the walker cares
/// about: the path table and the reusable components.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Spec {
  pub paths: IndexMap<String, PathItem>,
  pub components: Components,
}

/// Reusable named definitions. Schemas registered here are walked exactly once,
/// at their declaration site; `$ref` use sites never descend into them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Components {
  pub schemas: IndexMap<String, SchemaNode>,
  pub parameters: IndexMap<String, Parameter>,
}

/// A single path entry with its shared parameters and the eight fixed HTTP
/// method slots.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathItem {
  pub parameters: Vec<Parameter>,
  pub get: Option<Operation>,
  pub put: Option<Operation>,
  pub post: Option<Operation>,
  pub delete: Option<Operation>,
  pub options: Option<Operation>,
  pub head: Option<Operation>,
  pub patch: Option<Operation>,
  pub trace: Option<Operation>,
}

impl PathItem {
  /// Iterates the populated method slots in their fixed declaration order.
  /// Slot order is part of the traversal contract, so this is the only way
  /// operations should be enumerated.
  pub fn operations(&self) -> impl Iterator<Item = (Method, &Operation)> {
    [
      (Method::GET, &self.get),
      (Method::PUT, &self.put),
      (Method::POST, &self.post),
      (Method::DELETE, &self.delete),
      (Method::OPTIONS, &self.options),
      (Method::HEAD, &self.head),
      (Method::PATCH, &self.patch),
      (Method::TRACE, &self.trace),
    ]
    .into_iter()
    .filter_map(|(method, op)| op.as_ref().map(|op| (method, op)))
  }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Operation {
  pub operation_id: Option<String>,
  pub parameters: Vec<Parameter>,
  pub request_body: Option<RequestBody>,
  /// Keyed by status code or `default`, iterated in document order.
  pub responses: IndexMap<String, Response>,
}

/// Where a parameter is carried on the wire.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum ParameterIn {
  #[default]
  Query,
  Header,
  Path,
  Cookie,
}

/// An operation or path-item parameter. `schema` and `content` may both be
/// populated (content-based serialization styles); each contributes its
/// schemas independently.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Parameter {
  pub name: String,
  pub location: ParameterIn,
  pub required: bool,
  pub schema: Option<SchemaNode>,
  pub content: IndexMap<String, MediaType>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestBody {
  pub required: bool,
  pub content: IndexMap<String, MediaType>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Response {
  pub description: Option<String>,
  pub content: IndexMap<String, MediaType>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MediaType {
  pub schema: Option<SchemaNode>,
}

/// Either an inline schema or a `$ref` to a reusable one. References are
/// opaque: the walker stops at them rather than resolving the target, which
/// keeps cyclic schemas from recursing forever and keeps visit counts stable.
#[derive(Debug, Clone, PartialEq)]
pub enum SchemaNode {
  Reference { ref_path: String },
  Schema(Box<Schema>),
}

impl From<Schema> for SchemaNode {
  fn from(schema: Schema) -> Self {
    Self::Schema(Box::new(schema))
  }
}

/// A node in the schema tree. Composition branches (`all_of`, `one_of`) exist
/// independently of the kind and are always walked before it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Schema {
  pub description: Option<String>,
  pub all_of: Vec<SchemaNode>,
  pub one_of: Vec<SchemaNode>,
  pub kind: SchemaKind,
}

impl Schema {
  pub fn object(properties: Vec<Property>) -> Self {
    Self {
      kind: SchemaKind::Object { properties },
      ..Self::default()
    }
  }

  pub fn array(items: Option<ArrayItems>) -> Self {
    Self {
      kind: SchemaKind::Array { items },
      ..Self::default()
    }
  }

  pub fn primitive(primitive: PrimitiveSchema) -> Self {
    Self {
      kind: SchemaKind::Primitive(primitive),
      ..Self::default()
    }
  }
}

/// The active kind of a schema node. Exactly one kind per node; kind-specific
/// payloads live on the variant so states like an array carrying both a single
/// item schema and tuple items cannot be constructed.
#[derive(Debug, Clone, PartialEq)]
pub enum SchemaKind {
  Object { properties: Vec<Property> },
  Array { items: Option<ArrayItems> },
  Primitive(PrimitiveSchema),
}

impl Default for SchemaKind {
  fn default() -> Self {
    Self::Object { properties: Vec::new() }
  }
}

/// A named object property. Declaration order is preserved through the
/// surrounding `Vec` because downstream consumers depend on stable iteration
/// order for reproducible output.
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
  pub name: String,
  pub schema: SchemaNode,
}

impl Property {
  pub fn new(name: impl Into<String>, schema: impl Into<SchemaNode>) -> Self {
    Self {
      name: name.into(),
      schema: schema.into(),
    }
  }
}

/// Item descriptor for an array schema. A homogeneous array carries one item
/// schema; a tuple-typed array carries one schema per position. An array with
/// no descriptor at all is a structural defect surfaced through the walker's
/// repair hook.
#[derive(Debug, Clone, PartialEq)]
pub enum ArrayItems {
  Item(SchemaNode),
  Tuple(Vec<SchemaNode>),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum PrimitiveType {
  Boolean,
  Integer,
  Number,
  #[default]
  String,
  Null,
}

/// A leaf schema: the only nodes handed to the walker's `process` callback.
/// Numeric bounds are kept as [`serde_json::Number`] so a consumer can decide
/// on its own numeric representation (integer, exact decimal) before
/// constructing a validator from them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PrimitiveSchema {
  pub primitive_type: PrimitiveType,
  pub format: Option<String>,
  pub minimum: Option<serde_json::Number>,
  pub maximum: Option<serde_json::Number>,
  pub exclusive_minimum: bool,
  pub exclusive_maximum: bool,
  pub multiple_of: Option<serde_json::Number>,
  pub default: Option<serde_json::Value>,
  pub enum_values: Vec<serde_json::Value>,
}

impl PrimitiveSchema {
  pub fn of_type(primitive_type: PrimitiveType) -> Self {
    Self {
      primitive_type,
      ..Self::default()
    }
  }
}
