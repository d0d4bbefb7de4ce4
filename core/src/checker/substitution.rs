//! Instantiation of contract templates.
//!
//! Contracts mention the candidate's associated types through template
//! variables (`T0` is the iterator `Item`). As `AssocType` requirements are
//! met, each variable is bound to the candidate's type, and later
//! requirements are instantiated before being compared.

use conformal_types::{Ty, TyBuilder, TyFlags, TyKind};
use hashbrown::HashMap;
use smallvec::SmallVec;

use crate::{Vec, vec};

#[derive(Debug, Clone)]
pub struct Substitution<B: TyBuilder> {
    bindings: HashMap<u16, Ty<B>>,
}

impl<B: TyBuilder> Default for Substitution<B> {
    fn default() -> Self {
        Self {
            bindings: HashMap::new(),
        }
    }
}

enum Step<B: TyBuilder> {
    Enter(Ty<B>),
    Rebuild(Ty<B>),
}

impl<B: TyBuilder> Substitution<B> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `var` to `ty`, returning the previous binding.
    pub fn bind(&mut self, var: u16, ty: Ty<B>) -> Option<Ty<B>> {
        self.bindings.insert(var, ty)
    }

    pub fn get(&self, var: u16) -> Option<&Ty<B>> {
        self.bindings.get(&var)
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Replaces every bound variable in `ty`.
    ///
    /// Unbound variables stay in place. Subtrees without variables are
    /// shared with the input instead of being rebuilt. Candidate types
    /// bound to variables are inserted as they are and never instantiated
    /// themselves.
    pub fn apply(&self, builder: &B, ty: &Ty<B>) -> Ty<B> {
        if self.is_empty() || !ty.flags().contains(TyFlags::HAS_TYPE_VARS) {
            return ty.clone();
        }

        // Post-order walk on an explicit stack: children land on `done` in
        // order, then their parent is rebuilt from them.
        let mut pending = vec![Step::Enter(ty.clone())];
        let mut done: Vec<Ty<B>> = Vec::new();
        while let Some(step) = pending.pop() {
            match step {
                Step::Enter(ty) if !ty.flags().contains(TyFlags::HAS_TYPE_VARS) => done.push(ty),
                Step::Enter(ty) => {
                    if let TyKind::TypeVar(var) = *ty.kind() {
                        done.push(self.get(var).cloned().unwrap_or(ty));
                        continue;
                    }
                    let children: SmallVec<[Ty<B>; 4]> = ty.kind().iter_children().cloned().collect();
                    pending.push(Step::Rebuild(ty));
                    pending.extend(children.into_iter().rev().map(Step::Enter));
                }
                Step::Rebuild(ty) => {
                    let start = done.len() - ty.kind().iter_children().len();
                    let kind = ty.kind().from_iter_children(builder, done.drain(start..));
                    done.push(kind.alloc(builder));
                }
            }
        }
        done.pop().unwrap_or_else(|| ty.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ToString, contracts};
    use conformal_types::{BoxBuilder, DeclBuilder, ty};
    use pretty_assertions::assert_eq;

    fn item_is<B: TyBuilder>(item: Ty<B>) -> Substitution<B> {
        let mut subst = Substitution::new();
        subst.bind(contracts::ITEM_VAR, item);
        subst
    }

    #[test]
    fn test_next_signature_is_instantiated() {
        let b = BoxBuilder::new();
        let subst = item_is(ty!(b, Str));
        let template = ty!(b, [t] => (RefMut[Self]) => Option[t]);
        assert_eq!(subst.apply(&b, &template), ty!(b, (RefMut[Self]) => Option[Str]));
    }

    #[test]
    fn test_indexed_item_template() {
        let b = BoxBuilder::new();
        let subst = item_is(ty!(b, Ref[Int]));
        let template = TyKind::Optional(contracts::indexed_item(&b, ty!(b, [t] => t))).alloc(&b);
        let expected = TyKind::Optional(contracts::indexed_item(&b, ty!(b, Ref[Int]))).alloc(&b);

        let instantiated = subst.apply(&b, &template);
        assert_eq!(instantiated, expected);
        assert_eq!(instantiated.to_string(), "Option[IndexedItem]");
        assert!(!instantiated.flags().contains(TyFlags::HAS_TYPE_VARS));
    }

    #[test]
    fn test_unbound_variables_are_kept() {
        let b = BoxBuilder::new();
        let subst = item_is(ty!(b, Int));
        let template = ty!(b, [t, u] => (Ref[Self], t) => Array[u]);
        let u = TyKind::TypeVar(1).alloc(&b);
        assert_eq!(subst.apply(&b, &template), ty!(b, (Ref[Self], Int) => Array[u]));
    }

    #[test]
    fn test_bound_candidate_types_are_not_instantiated() {
        let b = BoxBuilder::new();
        // The candidate's own item mentions `T0`; it must be inserted verbatim.
        let subst = item_is(ty!(b, [t] => Option[t]));
        let template = ty!(b, [t] => Array[t]);
        assert_eq!(subst.apply(&b, &template), ty!(b, [t] => Array[Option[t]]));
    }

    #[test]
    fn test_concrete_types_are_shared() {
        let b = BoxBuilder::new();
        let subst = item_is(ty!(b, Int));
        let concrete = DeclBuilder::record(&b, "Point")
            .field("x", ty!(b, Float))
            .build();
        let out = subst.apply(&b, &concrete);
        assert!(alloc::rc::Rc::ptr_eq(out.handle(), concrete.handle()));
    }

    #[test]
    fn test_empty_substitution_is_identity() {
        let b = BoxBuilder::new();
        let template = ty!(b, [t] => Option[t]);
        assert_eq!(Substitution::new().apply(&b, &template), template);
    }

    #[test]
    fn test_nested_template() {
        let b = BoxBuilder::new();
        let subst = item_is(ty!(b, Bool));
        let mut template = ty!(b, [t] => t);
        let mut expected = ty!(b, Bool);
        for _ in 0..1_000 {
            template = TyKind::Optional(template).alloc(&b);
            expected = TyKind::Optional(expected).alloc(&b);
        }
        assert_eq!(subst.apply(&b, &template), expected);
    }
}
