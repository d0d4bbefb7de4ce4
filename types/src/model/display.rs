//! Human-readable rendering of descriptors, used by diagnostics.
//!
//! Types render in the bracketed style (`Option[Int]`, `Array[Str]`),
//! references and receivers in the familiar `&Self` / `&mut Self` form, and
//! declarations by name only.

use core::fmt;

use super::builder::TyBuilder;
use super::kind::{Scalar, TyKind};
use super::ty::Ty;

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Scalar::Unit => "()",
            Scalar::Bool => "Bool",
            Scalar::Int => "Int",
            Scalar::Usize => "Usize",
            Scalar::Float => "Float",
            Scalar::Str => "Str",
            Scalar::Bytes => "Bytes",
        };
        f.write_str(name)
    }
}

impl<B: TyBuilder> fmt::Display for Ty<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind() {
            TyKind::TypeVar(id) => write!(f, "T{id}"),
            TyKind::Scalar(scalar) => write!(f, "{scalar}"),
            TyKind::SelfTy => f.write_str("Self"),
            TyKind::Array(elem) => write!(f, "Array[{elem}]"),
            TyKind::Optional(inner) => write!(f, "Option[{inner}]"),
            TyKind::Ref {
                mutable: true,
                inner,
            } => write!(f, "&mut {inner}"),
            TyKind::Ref {
                mutable: false,
                inner,
            } => write!(f, "&{inner}"),
            TyKind::Function { params, ret } => {
                f.write_str("(")?;
                write_params(f, params)?;
                write!(f, ") => {ret}")
            }
            TyKind::Decl { name, .. } => f.write_str(name.as_str()),
        }
    }
}

fn write_params<B: TyBuilder>(f: &mut fmt::Formatter<'_>, params: &[Ty<B>]) -> fmt::Result {
    for (i, param) in params.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{param}")?;
    }
    Ok(())
}

/// Displays a method as `fn name(params) -> ret`.
///
/// Falls back to `fn name: <type>` when the member is not a function.
pub struct MethodSignature<'a, B: TyBuilder> {
    pub name: &'a str,
    pub ty: &'a Ty<B>,
}

impl<'a, B: TyBuilder> MethodSignature<'a, B> {
    pub fn new(name: &'a str, ty: &'a Ty<B>) -> Self {
        Self { name, ty }
    }
}

impl<B: TyBuilder> fmt::Display for MethodSignature<'_, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.ty.kind() {
            TyKind::Function { params, ret } => {
                write!(f, "fn {}(", self.name)?;
                write_params(f, params)?;
                f.write_str(")")?;
                if ret.kind() != &TyKind::Scalar(Scalar::Unit) {
                    write!(f, " -> {ret}")?;
                }
                Ok(())
            }
            _ => write!(f, "fn {}: {}", self.name, self.ty),
        }
    }
}
