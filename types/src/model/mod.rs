//! Core descriptor model.
//!
//! - [`TyBuilder`]: Trait for descriptor allocation strategies
//! - [`Ty`] and [`TyNode`]: Type handles and their underlying nodes
//! - [`TyKind`]: The different kinds of types (scalars, references, functions, declarations)
//! - [`DeclBuilder`]: Fluent construction of record, union and enum declarations
//! - [`TyFlags`]: Cached type properties for efficient queries

mod builder;
mod decl;
mod display;
mod flags;
mod kind;
mod ty;

pub use builder::TyBuilder;
pub use decl::DeclBuilder;
pub use display::MethodSignature;
pub use flags::TyFlags;
pub use kind::{DeclShape, Scalar, TyKind};
pub use ty::{FieldList, Ident, Ty, TyList, TyNode};
