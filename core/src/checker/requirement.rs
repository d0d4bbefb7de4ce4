//! Declarative requirement descriptors.
//!
//! A [`Contract`] is an ordered list of [`Requirement`]s. Order matters: the
//! checker stops at the first violation, and associated types bound by an
//! earlier requirement are visible to the ones after it.

use core::fmt::Write;

use conformal_types::{Ty, TyBuilder};
use smallvec::SmallVec;

use crate::{Box, String, Vec, format};

/// Types accepted at one position. Usually a single type; receivers
/// sometimes accept both `&Self` and `&mut Self`.
pub type Accepted<B> = SmallVec<[Ty<B>; 2]>;

/// What a method's return type must be.
#[derive(Debug, Clone)]
pub enum Returns<B: TyBuilder> {
    /// Exactly one of these types (covariant alternatives).
    OneOf(Accepted<B>),
    /// Any type that itself satisfies this contract.
    Conforms(Box<Contract<B>>),
}

impl<B: TyBuilder> Returns<B> {
    pub fn exactly(ty: Ty<B>) -> Self {
        Returns::OneOf(SmallVec::from_iter([ty]))
    }

    pub fn conforming(contract: Contract<B>) -> Self {
        Returns::Conforms(Box::new(contract))
    }
}

#[derive(Debug, Clone)]
pub struct MethodReq<B: TyBuilder> {
    pub name: &'static str,
    /// Positional parameters, receiver first.
    pub params: Vec<Accepted<B>>,
    pub returns: Returns<B>,
    /// May be absent; must match when present.
    pub optional: bool,
    /// Also accept `Option[IndexedItem{idx: Usize, val: T}]` wherever
    /// `Option[T]` is accepted.
    pub indexed_alternate: bool,
}

impl<B: TyBuilder> MethodReq<B> {
    pub fn new(name: &'static str, returns: Returns<B>) -> Self {
        Self {
            name,
            params: Vec::new(),
            returns,
            optional: false,
            indexed_alternate: false,
        }
    }

    pub fn param(self, ty: Ty<B>) -> Self {
        self.param_any_of([ty])
    }

    pub fn param_any_of(mut self, accepted: impl IntoIterator<Item = Ty<B>>) -> Self {
        self.params.push(accepted.into_iter().collect());
        self
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    pub fn with_indexed_alternate(mut self) -> Self {
        self.indexed_alternate = true;
        self
    }
}

#[derive(Debug, Clone)]
pub enum Requirement<B: TyBuilder> {
    Method(MethodReq<B>),
    /// The associated type must exist. With `binds`, its type is bound to
    /// that template variable for the remaining requirements.
    AssocType {
        name: &'static str,
        binds: Option<u16>,
    },
    Field {
        name: &'static str,
        ty: Ty<B>,
    },
}

impl<B: TyBuilder> Requirement<B> {
    pub fn name(&self) -> &'static str {
        match self {
            Requirement::Method(method) => method.name,
            Requirement::AssocType { name, .. } | Requirement::Field { name, .. } => *name,
        }
    }
}

/// A named, ordered list of requirements.
#[derive(Debug, Clone)]
pub struct Contract<B: TyBuilder> {
    pub name: &'static str,
    pub requirements: Vec<Requirement<B>>,
}

impl<B: TyBuilder> Contract<B> {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            requirements: Vec::new(),
        }
    }

    pub fn method(mut self, method: MethodReq<B>) -> Self {
        self.requirements.push(Requirement::Method(method));
        self
    }

    pub fn assoc(mut self, name: &'static str, binds: Option<u16>) -> Self {
        self.requirements.push(Requirement::AssocType { name, binds });
        self
    }

    pub fn field(mut self, name: &'static str, ty: Ty<B>) -> Self {
        self.requirements.push(Requirement::Field { name, ty });
        self
    }
}

/// Renders accepted alternatives as `A | B`.
pub(crate) fn render_accepted<B: TyBuilder>(accepted: &[Ty<B>]) -> String {
    let mut out = String::new();
    for (i, ty) in accepted.iter().enumerate() {
        if i > 0 {
            out.push_str(" | ");
        }
        let _ = write!(out, "{ty}");
    }
    out
}

/// Renders a method requirement as `fn name(params) -> ret`.
pub(crate) fn render_signature<B: TyBuilder>(
    name: &str,
    params: &[Accepted<B>],
    returns: &str,
) -> String {
    let mut out = format!("fn {name}(");
    for (i, accepted) in params.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        out.push_str(&render_accepted(accepted));
    }
    out.push(')');
    if returns != "()" {
        let _ = write!(out, " -> {returns}");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use conformal_types::{BoxBuilder, ty};

    #[test]
    fn test_render_signature_with_alternatives() {
        let b = BoxBuilder::new();
        let params: [Accepted<BoxBuilder>; 1] =
            [SmallVec::from_iter([ty!(b, Ref[Self]), ty!(b, RefMut[Self])])];
        assert_eq!(
            render_signature("iter", &params, "impl Iterator"),
            "fn iter(&Self | &mut Self) -> impl Iterator"
        );
    }

    #[test]
    fn test_render_signature_omits_unit_return() {
        let b = BoxBuilder::new();
        let params: [Accepted<BoxBuilder>; 2] = [
            SmallVec::from_iter([ty!(b, RefMut[Self])]),
            SmallVec::from_iter([ty!(b, Ref[Self])]),
        ];
        assert_eq!(
            render_signature("clone_from", &params, "()"),
            "fn clone_from(&mut Self, &Self)"
        );
    }

    #[test]
    fn test_contract_keeps_order() {
        let b = BoxBuilder::new();
        let contract = Contract::new("Sized")
            .assoc("Item", Some(0))
            .field("len", ty!(b, Usize))
            .method(MethodReq::new("len", Returns::exactly(ty!(b, Usize))).param(ty!(b, Ref[Self])));
        let names: Vec<&str> = contract.requirements.iter().map(Requirement::name).collect();
        assert_eq!(names, ["Item", "len", "len"]);
    }
}
