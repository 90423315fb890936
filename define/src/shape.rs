//! Structural type descriptors.
//!
//! This module provides the recursive type representation the generator maps
//! into TypeScript type expressions. A shape describes structure only (kind,
//! fields, element type); it carries no runtime values and is constructed
//! ahead of time, typically as a hand-written literal.
//!
//! ## Shape Kinds
//!
//! - [`TypeShape::String`] / [`TypeShape::Bool`] / [`TypeShape::Int`] /
//!   [`TypeShape::Float`] - primitives
//! - [`TypeShape::Nullable`] - a value that may be null (pointer-like)
//! - [`TypeShape::List`] - an ordered sequence of one element shape
//! - [`TypeShape::Struct`] - a named or anonymous struct
//! - [`TypeShape::Opaque`] - anything the mapper cannot express; becomes
//!   the dynamic type in generated code
//!
//! Shapes must be acyclic for all real route payloads. The generator does
//! not guard against cycles through *anonymous* structs; a cyclic anonymous
//! shape graph would recurse without bound.

use serde::{Deserialize, Serialize};

/// A recursive structural type descriptor.
///
/// ## Examples
///
/// ```
/// use quill_define::{Field, StructShape, TypeShape};
///
/// // Array<string>
/// let tags = TypeShape::list(TypeShape::String);
/// assert_eq!(tags.depth(), 2);
///
/// // A named struct referencing it
/// let shape = TypeShape::Struct(StructShape::named(
///     "Post",
///     vec![
///         Field::new("title", TypeShape::String),
///         Field::new("tags", tags),
///     ],
/// ));
/// assert!(matches!(shape, TypeShape::Struct(_)));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TypeShape {
    /// UTF-8 text.
    String,
    /// Boolean.
    Bool,
    /// Any integer kind, signed or unsigned.
    Int,
    /// Any floating-point kind.
    Float,
    /// A value that may be null.
    Nullable(Box<TypeShape>),
    /// An ordered sequence of elements of one shape.
    List(Box<TypeShape>),
    /// A struct, named or anonymous.
    Struct(StructShape),
    /// A shape outside the supported vocabulary; maps to the dynamic type.
    Opaque,
}

impl TypeShape {
    /// Creates a nullable wrapper around the given shape.
    pub fn nullable(inner: TypeShape) -> Self {
        Self::Nullable(Box::new(inner))
    }

    /// Creates a list of the given element shape.
    pub fn list(element: TypeShape) -> Self {
        Self::List(Box::new(element))
    }

    /// Returns the nesting depth of this shape.
    ///
    /// Primitives and [`TypeShape::Opaque`] have depth 1; every nullable,
    /// list, or struct-field layer adds one. Each recursive step of the
    /// type mapper strictly decreases the remaining depth, which is what
    /// guarantees termination on finite shapes.
    ///
    /// ## Examples
    ///
    /// ```
    /// use quill_define::TypeShape;
    ///
    /// assert_eq!(TypeShape::Bool.depth(), 1);
    /// assert_eq!(TypeShape::nullable(TypeShape::list(TypeShape::Int)).depth(), 3);
    /// ```
    pub fn depth(&self) -> usize {
        match self {
            Self::String | Self::Bool | Self::Int | Self::Float | Self::Opaque => 1,
            Self::Nullable(inner) | Self::List(inner) => 1 + inner.depth(),
            Self::Struct(s) => {
                1 + s
                    .fields
                    .iter()
                    .map(|f| f.shape.depth())
                    .max()
                    .unwrap_or(0)
            }
        }
    }
}

/// Where a field's value flows when a request is made.
///
/// A field carries at most one binding; this is enforced by construction
/// since the binding is a single enum value. Fields with
/// [`Binding::None`] exist on the wire shape but never appear in a
/// generated function signature.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Binding {
    /// Not bound; excluded from the generated parameter list.
    #[default]
    None,
    /// Substituted into the `:name` placeholder in the path template.
    Path(String),
    /// Appended to the query string under the given key.
    Query(String),
    /// Sent as a request header with the given name.
    Header(String),
    /// Serialized as the JSON request body.
    Body,
}

impl Binding {
    /// Returns true if the field participates in the request at all.
    pub fn is_bound(&self) -> bool {
        !matches!(self, Self::None)
    }
}

/// A single field on a struct shape.
///
/// Captures the closed per-field record the generator consumes: the binding
/// source plus the JSON directives that control the emitted property.
/// Everything is resolved at construction time; nothing is re-parsed during
/// emission.
///
/// ## Examples
///
/// Build fields with the chained constructors:
///
/// ```
/// use quill_define::{Binding, Field, TypeShape};
///
/// // Path-bound id
/// let id = Field::new("id", TypeShape::Int).path("id");
/// assert_eq!(id.binding, Binding::Path("id".to_string()));
///
/// // Body payload
/// let payload = Field::new("task", TypeShape::Opaque).body();
/// assert_eq!(payload.binding, Binding::Body);
///
/// // Renamed, optional JSON property
/// let notes = Field::new("notes", TypeShape::String)
///     .json("note_text")
///     .omit_empty();
/// assert_eq!(notes.property_name(), "note_text");
/// assert!(notes.omit_empty);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    /// Declared field name; doubles as the generated parameter name.
    pub name: String,
    /// Shape of the field's value.
    pub shape: TypeShape,
    /// Binding source for request construction.
    pub binding: Binding,
    /// JSON property name override.
    pub json_name: Option<String>,
    /// Widens the emitted property with an explicit may-be-absent marker.
    pub omit_empty: bool,
    /// Excluded from serialization entirely (the `json:"-"` sentinel).
    pub json_skip: bool,
    /// Promoted/embedded field. Emitters skip these; flattening is not
    /// attempted, so an embedded field is invisible to the generated client.
    pub embedded: bool,
}

impl Field {
    /// Creates an unbound field with the given name and shape.
    pub fn new(name: impl Into<String>, shape: TypeShape) -> Self {
        Self {
            name: name.into(),
            shape,
            binding: Binding::None,
            json_name: None,
            omit_empty: false,
            json_skip: false,
            embedded: false,
        }
    }

    /// Binds the field to a `:tag` path placeholder.
    pub fn path(mut self, tag: impl Into<String>) -> Self {
        self.binding = Binding::Path(tag.into());
        self
    }

    /// Binds the field to a query-string key.
    pub fn query(mut self, tag: impl Into<String>) -> Self {
        self.binding = Binding::Query(tag.into());
        self
    }

    /// Binds the field to a request header.
    pub fn header(mut self, tag: impl Into<String>) -> Self {
        self.binding = Binding::Header(tag.into());
        self
    }

    /// Binds the field as the JSON request body.
    pub fn body(mut self) -> Self {
        self.binding = Binding::Body;
        self
    }

    /// Overrides the emitted JSON property name.
    pub fn json(mut self, name: impl Into<String>) -> Self {
        self.json_name = Some(name.into());
        self
    }

    /// Marks the property as omitted when empty.
    pub fn omit_empty(mut self) -> Self {
        self.omit_empty = true;
        self
    }

    /// Excludes the field from serialization (the `json:"-"` sentinel).
    pub fn json_skip(mut self) -> Self {
        self.json_skip = true;
        self
    }

    /// Marks the field as embedded/promoted.
    pub fn embedded(mut self) -> Self {
        self.embedded = true;
        self
    }

    /// Resolves the emitted property name: the JSON override if present,
    /// the declared name otherwise.
    pub fn property_name(&self) -> &str {
        self.json_name.as_deref().unwrap_or(&self.name)
    }
}

/// A struct shape: an ordered field list with an optional exported name.
///
/// Anonymous shapes (no name) are emitted inline as structural literals;
/// named shapes are emitted once as exported interfaces and referenced by
/// name everywhere else.
///
/// ## Examples
///
/// ```
/// use quill_define::{Field, StructShape, TypeShape};
///
/// let named = StructShape::named("User", vec![Field::new("id", TypeShape::Int)]);
/// assert!(!named.is_anonymous());
///
/// let inline = StructShape::anonymous(vec![Field::new("x", TypeShape::Float)]);
/// assert!(inline.is_anonymous());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructShape {
    /// Exported name, or None for an anonymous shape.
    pub name: Option<String>,
    /// Fields in declaration order. Emission preserves this order.
    pub fields: Vec<Field>,
}

impl StructShape {
    /// Creates a named struct shape.
    pub fn named(name: impl Into<String>, fields: Vec<Field>) -> Self {
        Self {
            name: Some(name.into()),
            fields,
        }
    }

    /// Creates an anonymous struct shape.
    pub fn anonymous(fields: Vec<Field>) -> Self {
        Self { name: None, fields }
    }

    /// Returns true if the shape has no exported name.
    pub fn is_anonymous(&self) -> bool {
        self.name.is_none()
    }

    /// Returns the field bound as the request body, if any. Embedded fields
    /// are never considered.
    pub fn body_field(&self) -> Option<&Field> {
        self.fields
            .iter()
            .find(|f| !f.embedded && f.binding == Binding::Body)
    }

    /// Returns the fields that participate in a request, in declaration
    /// order: everything with a binding other than [`Binding::None`].
    /// Embedded fields are excluded; they are invisible to the generated
    /// client.
    pub fn bound_fields(&self) -> impl Iterator<Item = &Field> {
        self.fields
            .iter()
            .filter(|f| !f.embedded && f.binding.is_bound())
    }
}
