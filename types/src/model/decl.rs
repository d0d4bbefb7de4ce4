//! Fluent construction of nominal declarations.
//!
//! ```
//! use conformal_types::{BoxBuilder, DeclBuilder, ty};
//!
//! let b = BoxBuilder::new();
//! let counter = DeclBuilder::record(&b, "Counter")
//!     .field("count", ty!(b, Usize))
//!     .assoc("Item", ty!(b, Int))
//!     .method("next", ty!(b, (RefMut[Self]) => Option[Int]))
//!     .build();
//!
//! assert_eq!(counter.kind().decl_name(), Some("Counter"));
//! assert!(counter.kind().method("next").is_some());
//! ```

use alloc::vec::Vec;

use super::builder::TyBuilder;
use super::kind::{DeclShape, Scalar, TyKind};
use super::ty::{FieldList, Ident, Ty};

/// Accumulates the members of a record, union or enum descriptor.
#[derive(Debug)]
pub struct DeclBuilder<'b, B: TyBuilder> {
    builder: &'b B,
    shape: DeclShape,
    name: Ident<B>,
    fields: Vec<(Ident<B>, Ty<B>)>,
    methods: Vec<(Ident<B>, Ty<B>)>,
    assoc: Vec<(Ident<B>, Ty<B>)>,
}

impl<'b, B: TyBuilder> DeclBuilder<'b, B> {
    pub fn new(builder: &'b B, shape: DeclShape, name: impl AsRef<str>) -> Self {
        Self {
            builder,
            shape,
            name: Ident::new(builder, name),
            fields: Vec::new(),
            methods: Vec::new(),
            assoc: Vec::new(),
        }
    }

    pub fn record(builder: &'b B, name: impl AsRef<str>) -> Self {
        Self::new(builder, DeclShape::Record, name)
    }

    pub fn union(builder: &'b B, name: impl AsRef<str>) -> Self {
        Self::new(builder, DeclShape::Union, name)
    }

    pub fn enumeration(builder: &'b B, name: impl AsRef<str>) -> Self {
        Self::new(builder, DeclShape::Enum, name)
    }

    /// Adds a struct field, or a variant payload for unions.
    pub fn field(mut self, name: impl AsRef<str>, ty: Ty<B>) -> Self {
        self.fields.push((Ident::new(self.builder, name), ty));
        self
    }

    /// Adds an enum tag (a variant without payload).
    pub fn tag(self, name: impl AsRef<str>) -> Self {
        let unit = TyKind::Scalar(Scalar::Unit).alloc(self.builder);
        self.field(name, unit)
    }

    /// Adds a method. `signature` should be a `Function` whose first
    /// parameter is the receiver.
    pub fn method(mut self, name: impl AsRef<str>, signature: Ty<B>) -> Self {
        self.methods.push((Ident::new(self.builder, name), signature));
        self
    }

    pub fn assoc(mut self, name: impl AsRef<str>, ty: Ty<B>) -> Self {
        self.assoc.push((Ident::new(self.builder, name), ty));
        self
    }

    pub fn build(self) -> Ty<B> {
        TyKind::Decl {
            shape: self.shape,
            name: self.name,
            fields: FieldList::from_iter(self.builder, self.fields),
            methods: FieldList::from_iter(self.builder, self.methods),
            assoc: FieldList::from_iter(self.builder, self.assoc),
        }
        .alloc(self.builder)
    }
}
