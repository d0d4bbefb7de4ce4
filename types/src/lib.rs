//! Type descriptors with pluggable builders.
//!
//! This crate provides a structural description of candidate types (records,
//! tagged unions and enums with their fields, methods and associated types)
//! that the conformance checker validates against contracts. Storage goes
//! through the [`TyBuilder`] trait; [`BoxBuilder`] is the `Rc`-backed one.
//!
//! # Example
//!
//! ```
//! use conformal_types::{BoxBuilder, DeclBuilder, ty};
//!
//! let b = BoxBuilder::new();
//!
//! let cursor = DeclBuilder::record(&b, "Cursor")
//!     .field("pos", ty!(b, Usize))
//!     .assoc("Item", ty!(b, Int))
//!     .method("next", ty!(b, (RefMut[Self]) => Option[Int]))
//!     .build();
//!
//! assert_eq!(cursor.to_string(), "Cursor");
//! ```

#![no_std]
extern crate alloc;

pub mod builders;
mod macros;
pub mod model;

pub use builders::BoxBuilder;
pub use model::{
    DeclBuilder, DeclShape, FieldList, Ident, MethodSignature, Scalar, Ty, TyBuilder, TyFlags,
    TyKind, TyList, TyNode,
};
