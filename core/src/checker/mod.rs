//! The conformance checker.
//!
//! [`Checker::check`] validates a candidate descriptor against a
//! [`Contract`] as an ordered pipeline and returns a [`Verdict`]. It never
//! fails and has no side effects; [`Checker::bind`] layers the diagnostic
//! mode on top.
//!
//! For every method requirement the steps are, in order:
//!
//! 1. the candidate is a record, union or enum (checked once, up front)
//! 2. the method exists
//! 3. it takes the required number of parameters
//! 4. each parameter is accepted, after substituting bound template variables
//! 5. the return type is accepted, or satisfies the nested contract
//!
//! # Example
//!
//! ```
//! use conformal_core::{Checker, FailureKind, contracts};
//! use conformal_types::{BoxBuilder, DeclBuilder, ty};
//!
//! let b = BoxBuilder::new();
//! let checker = Checker::new(&b);
//!
//! let counter = DeclBuilder::record(&b, "Counter")
//!     .assoc("Item", ty!(b, Int))
//!     .method("next", ty!(b, (RefMut[Self]) => Option[Int]))
//!     .build();
//! assert!(checker.is_iterator(&counter));
//!
//! let stuck = DeclBuilder::record(&b, "Stuck").assoc("Item", ty!(b, Int)).build();
//! let verdict = checker.check(&stuck, &contracts::iterator(&b, checker.options()));
//! assert_eq!(verdict.kind(), Some(FailureKind::MissingMethod));
//! ```

mod requirement;
mod substitution;
mod verdict;

pub use requirement::{Accepted, Contract, MethodReq, Requirement, Returns};
pub use substitution::Substitution;
pub use verdict::{Failure, FailureKind, Verdict};

use conformal_types::{MethodSignature, Ty, TyBuilder, TyKind};
use tracing::{debug, trace};

use crate::contracts;
use crate::error::ConformanceError;
use crate::options::{CheckMode, CheckOptions, CheckOptionsOverride};
use crate::{ToString, format};
use requirement::{render_accepted, render_signature};

/// The type whose `clone` an option or array delegates to.
fn clone_target<B: TyBuilder>(ty: &Ty<B>) -> &Ty<B> {
    match ty.kind() {
        TyKind::Optional(inner) | TyKind::Array(inner) => clone_target(inner),
        _ => ty,
    }
}

fn clones_natively<B: TyBuilder>(ty: &Ty<B>) -> bool {
    matches!(
        ty.kind(),
        TyKind::Scalar(_) | TyKind::Ref { mutable: false, .. }
    )
}

/// Checks descriptors built with `B` against contracts.
#[derive(Debug, Clone)]
pub struct Checker<'b, B: TyBuilder> {
    builder: &'b B,
    options: CheckOptions,
}

impl<'b, B: TyBuilder> Checker<'b, B> {
    pub fn new(builder: &'b B) -> Self {
        Self::with_options(builder, CheckOptions::default())
    }

    pub fn with_options(builder: &'b B, options: CheckOptions) -> Self {
        Self { builder, options }
    }

    /// A checker with the same builder and `overrides` applied on top of
    /// this checker's options.
    pub fn with_override(&self, overrides: &CheckOptionsOverride) -> Self {
        let mut options = self.options.clone();
        options.override_with(overrides);
        Self::with_options(self.builder, options)
    }

    pub fn builder(&self) -> &'b B {
        self.builder
    }

    pub fn options(&self) -> &CheckOptions {
        &self.options
    }

    /// Checks `candidate` against `contract`. Pure.
    pub fn check(&self, candidate: &Ty<B>, contract: &Contract<B>) -> Verdict {
        let verdict = Verdict::from(self.run(candidate, contract));
        if let Some(failure) = verdict.reason() {
            debug!(
                contract = contract.name,
                candidate = %candidate,
                kind = %failure.kind,
                member = %failure.member,
                "Contract not satisfied"
            );
        }
        verdict
    }

    /// Binds `candidate` to `contract`.
    ///
    /// In diagnostic mode a failed verdict is returned as
    /// [`ConformanceError::Unsatisfied`]. In introspection mode the verdict is
    /// always returned as `Ok`.
    pub fn bind(&self, candidate: &Ty<B>, contract: &Contract<B>) -> Result<Verdict, ConformanceError> {
        let verdict = self.check(candidate, contract);
        if verdict.is_valid() {
            debug!(contract = contract.name, candidate = %candidate, "Contract bound");
        }
        self.report(contract.name, candidate, verdict)
    }

    pub fn bind_iterator(&self, candidate: &Ty<B>) -> Result<Verdict, ConformanceError> {
        self.bind(candidate, &contracts::iterator(self.builder, &self.options))
    }

    pub fn bind_into_iterable(&self, candidate: &Ty<B>) -> Result<Verdict, ConformanceError> {
        self.bind(candidate, &contracts::into_iterable(self.builder, &self.options))
    }

    /// Scalars and shared references clone natively; options and arrays
    /// clone element-wise. Everything else is checked against
    /// [`contracts::cloneable`].
    pub fn bind_cloneable(&self, candidate: &Ty<B>) -> Result<Verdict, ConformanceError> {
        let target = clone_target(candidate);
        if clones_natively(target) {
            return Ok(Verdict::valid());
        }
        self.bind(target, &contracts::cloneable(self.builder))
    }

    /// Introspective: never produces an error.
    pub fn is_iterator(&self, candidate: &Ty<B>) -> bool {
        self.check(candidate, &contracts::iterator(self.builder, &self.options))
            .is_valid()
    }

    pub fn is_into_iterable(&self, candidate: &Ty<B>) -> bool {
        self.check(candidate, &contracts::into_iterable(self.builder, &self.options))
            .is_valid()
    }

    pub fn is_cloneable(&self, candidate: &Ty<B>) -> bool {
        let target = clone_target(candidate);
        clones_natively(target) || self.check(target, &contracts::cloneable(self.builder)).is_valid()
    }

    /// The `Item` an iterator descriptor yields, if it is an iterator.
    pub fn item_type(&self, iterator: &Ty<B>) -> Option<Ty<B>> {
        if !self.is_iterator(iterator) {
            return None;
        }
        iterator.kind().assoc("Item").cloned()
    }

    /// Binds `reset_iter(container, iterator)`.
    ///
    /// The container must be `IntoIterable`, `iterator` must be an Iterator
    /// ([`ConformanceError::NotAnIterator`] otherwise), and it must be the
    /// type the container's `iter` produces.
    pub fn bind_reset_iter(
        &self,
        container: &Ty<B>,
        iterator: &Ty<B>,
    ) -> Result<Verdict, ConformanceError> {
        let verdict = self.bind_into_iterable(container)?;
        if !verdict.is_valid() {
            return Ok(verdict);
        }

        let verdict = self.check(iterator, &contracts::iterator(self.builder, &self.options));
        if let Some(failure) = verdict.reason() {
            if self.options.mode == CheckMode::Diagnostic {
                return Err(ConformanceError::NotAnIterator {
                    candidate: iterator.to_string(),
                    failure: failure.clone(),
                });
            }
            return Ok(verdict);
        }

        let fresh = match container.kind().method("iter").map(|m| m.kind()) {
            Some(TyKind::Function { ret, .. }) if ret.kind() == &TyKind::SelfTy => container.clone(),
            Some(TyKind::Function { ret, .. }) => ret.clone(),
            _ => return Ok(Verdict::valid()),
        };
        if &fresh == iterator {
            return Ok(Verdict::valid());
        }
        let failure = Failure::new(
            FailureKind::WrongParamType,
            "reset_iter",
            format!("fn reset_iter(&Self, &mut {fresh})"),
        )
        .with_expected(format!("&mut {fresh}"))
        .with_found(format!("&mut {iterator}"))
        .at_position(1);
        self.report("IntoIterable", container, Verdict::invalid(failure))
    }

    /// Binds `iterator.cloned()`.
    ///
    /// The iterator must be an Iterator yielding shared references `&T`,
    /// and `T` must be `Cloneable`. Owned items are rejected as a wrong
    /// `next` return, the same restriction [`Iter::cloned`](crate::Iter::cloned)
    /// puts on `Item`. A non-cloneable `T` is rejected with exactly the
    /// error binding it to `Cloneable` would give.
    pub fn bind_cloned(&self, iterator: &Ty<B>) -> Result<Verdict, ConformanceError> {
        let verdict = self.bind_iterator(iterator)?;
        if !verdict.is_valid() {
            return Ok(verdict);
        }
        let Some(item) = iterator.kind().assoc("Item") else {
            return Ok(verdict);
        };
        match item.kind() {
            TyKind::Ref {
                mutable: false,
                inner,
            } => self.bind_cloneable(inner),
            _ => {
                let expected = format!("Option[&{item}]");
                let found = match iterator.kind().method("next").map(|next| next.kind()) {
                    Some(TyKind::Function { ret, .. }) => ret.to_string(),
                    _ => format!("Option[{item}]"),
                };
                let failure = Failure::new(
                    FailureKind::WrongReturnType,
                    "next",
                    format!("fn next(&mut Self) -> {expected}"),
                )
                .with_expected(expected)
                .with_found(found);
                self.report(contracts::ITERATOR, iterator, Verdict::invalid(failure))
            }
        }
    }

    fn report(
        &self,
        contract: &'static str,
        candidate: &Ty<B>,
        verdict: Verdict,
    ) -> Result<Verdict, ConformanceError> {
        match (self.options.mode, verdict.reason()) {
            (CheckMode::Diagnostic, Some(failure)) => Err(ConformanceError::Unsatisfied {
                contract,
                candidate: candidate.to_string(),
                failure: failure.clone(),
            }),
            _ => Ok(verdict),
        }
    }

    fn run(&self, candidate: &Ty<B>, contract: &Contract<B>) -> Result<(), Failure> {
        if !matches!(candidate.kind(), TyKind::Decl { .. }) {
            return Err(
                Failure::new(FailureKind::WrongKind, "", "record, union or enum").with_found(candidate),
            );
        }

        let mut bindings = Substitution::new();
        for requirement in &contract.requirements {
            trace!(
                contract = contract.name,
                requirement = requirement.name(),
                "Checking requirement"
            );
            match requirement {
                Requirement::AssocType { name, binds } => {
                    let ty = candidate.kind().assoc(name).ok_or_else(|| {
                        Failure::new(FailureKind::MissingAssociatedType, *name, format!("type {name}"))
                    })?;
                    if let Some(var) = binds {
                        bindings.bind(*var, ty.clone());
                    }
                }
                Requirement::Field { name, ty } => {
                    let expected = bindings.apply(self.builder, ty);
                    let signature = format!("{name}: {expected}");
                    match candidate.kind().field(name) {
                        None => {
                            return Err(Failure::new(FailureKind::MissingField, *name, signature));
                        }
                        Some(found) if found != &expected => {
                            return Err(Failure::new(FailureKind::WrongFieldType, *name, signature)
                                .with_expected(expected.to_string())
                                .with_found(found));
                        }
                        Some(_) => {}
                    }
                }
                Requirement::Method(method) => self.check_method(candidate, method, &bindings)?,
            }
        }
        Ok(())
    }

    fn check_method(
        &self,
        candidate: &Ty<B>,
        req: &MethodReq<B>,
        bindings: &Substitution<B>,
    ) -> Result<(), Failure> {
        let params: crate::Vec<Accepted<B>> = req
            .params
            .iter()
            .map(|accepted| accepted.iter().map(|ty| bindings.apply(self.builder, ty)).collect())
            .collect();
        let returns = match &req.returns {
            Returns::OneOf(accepted) => {
                Returns::OneOf(accepted.iter().map(|ty| bindings.apply(self.builder, ty)).collect())
            }
            Returns::Conforms(contract) => Returns::Conforms(contract.clone()),
        };
        let expected_ret = match &returns {
            Returns::OneOf(accepted) => render_accepted(accepted),
            Returns::Conforms(contract) => format!("impl {}", contract.name),
        };
        let signature = render_signature(req.name, &params, &expected_ret);
        let failure = |kind| Failure::new(kind, req.name, signature.clone());

        let Some(found) = candidate.kind().method(req.name) else {
            if req.optional {
                return Ok(());
            }
            return Err(failure(FailureKind::MissingMethod));
        };
        let TyKind::Function { params: found_params, ret } = found.kind() else {
            return Err(failure(FailureKind::MissingMethod).with_found(found));
        };

        if found_params.len() != params.len() {
            return Err(failure(FailureKind::WrongArity)
                .with_expected(format!("{} parameters", params.len()))
                .with_found(MethodSignature::new(req.name, found)));
        }

        for (position, (param, accepted)) in found_params.iter().zip(&params).enumerate() {
            if !accepted.contains(param) {
                return Err(failure(FailureKind::WrongParamType)
                    .with_expected(render_accepted(accepted))
                    .with_found(param)
                    .at_position(position));
            }
        }

        match &returns {
            Returns::OneOf(accepted) => {
                let ok = accepted.contains(ret)
                    || (req.indexed_alternate && self.is_indexed_alternate(ret, accepted));
                if !ok {
                    return Err(failure(FailureKind::WrongReturnType)
                        .with_expected(expected_ret)
                        .with_found(ret));
                }
            }
            Returns::Conforms(contract) => {
                let target = match ret.kind() {
                    TyKind::SelfTy => candidate,
                    _ => ret,
                };
                if let Err(cause) = self.run(target, contract) {
                    return Err(failure(FailureKind::WrongReturnType)
                        .with_expected(expected_ret)
                        .with_found(ret)
                        .caused_by(cause));
                }
            }
        }
        Ok(())
    }

    /// `Option[IndexedItem{idx: Usize, val: T}]` where `Option[T]` is accepted.
    fn is_indexed_alternate(&self, ret: &Ty<B>, accepted: &[Ty<B>]) -> bool {
        accepted.iter().any(|ty| match ty.kind() {
            TyKind::Optional(val) => {
                let indexed = contracts::indexed_item(self.builder, val.clone());
                ret == &TyKind::Optional(indexed).alloc(self.builder)
            }
            _ => false,
        })
    }
}
