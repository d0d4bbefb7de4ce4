//! Descriptor forms of the capability contracts.
//!
//! Each constructor returns a fresh [`Contract`] built in the caller's
//! builder. They mirror the traits in [`crate::iter`]:
//!
//! | Contract | Trait | Requirements |
//! |----------|-------|--------------|
//! | [`iterator`] | [`Iter`](crate::Iter) | `type Item`, `fn next(&mut Self) -> Option[Item]` |
//! | [`into_iterable`] | [`IntoIterable`](crate::IntoIterable) | `fn iter(&Self \| &mut Self) -> impl Iterator` |
//! | [`cloneable`] | [`Cloneable`](crate::Cloneable) | `fn clone(&Self) -> Self`, optional `fn clone_from(&mut Self, &Self)` |

use conformal_types::{DeclBuilder, Ty, TyBuilder, ty};

use crate::checker::{Contract, MethodReq, Returns};
use crate::options::CheckOptions;

pub const ITERATOR: &str = "Iterator";
pub const INTO_ITERABLE: &str = "IntoIterable";
pub const CLONEABLE: &str = "Cloneable";

/// Template variable the iterator's `Item` is bound to.
pub const ITEM_VAR: u16 = 0;

/// `record IndexedItem { idx: Usize, val: T }`, the item shape of
/// [`Enumerator`](crate::Enumerator).
pub fn indexed_item<B: TyBuilder>(builder: &B, val: Ty<B>) -> Ty<B> {
    DeclBuilder::record(builder, "IndexedItem")
        .field("idx", ty!(*builder, Usize))
        .field("val", val)
        .build()
}

/// `type Item` bound to `T0`, then `fn next(&mut Self) -> Option[T0]`.
///
/// `next` may also return `Option[IndexedItem{idx: Usize, val: T0}]`. With
/// [`CheckOptions::allow_shared_next`] a `&Self` receiver is accepted too.
pub fn iterator<B: TyBuilder>(builder: &B, options: &CheckOptions) -> Contract<B> {
    let returns = Returns::exactly(ty!(*builder, [item] => Option[item]));
    let next = if options.allow_shared_next {
        MethodReq::new("next", returns)
            .param_any_of([ty!(*builder, RefMut[Self]), ty!(*builder, Ref[Self])])
    } else {
        MethodReq::new("next", returns).param(ty!(*builder, RefMut[Self]))
    };
    Contract::new(ITERATOR)
        .assoc("Item", Some(ITEM_VAR))
        .method(next.with_indexed_alternate())
}

/// `fn iter(&Self | &mut Self)` returning any type satisfying [`iterator`].
pub fn into_iterable<B: TyBuilder>(builder: &B, options: &CheckOptions) -> Contract<B> {
    let iter = MethodReq::new("iter", Returns::conforming(iterator(builder, options)))
        .param_any_of([ty!(*builder, Ref[Self]), ty!(*builder, RefMut[Self])]);
    Contract::new(INTO_ITERABLE).method(iter)
}

/// `fn clone(&Self) -> Self`, plus `fn clone_from(&mut Self, &Self)` which
/// may be absent but must match when present.
pub fn cloneable<B: TyBuilder>(builder: &B) -> Contract<B> {
    let clone = MethodReq::new("clone", Returns::exactly(ty!(*builder, Self)))
        .param(ty!(*builder, Ref[Self]));
    let clone_from = MethodReq::new("clone_from", Returns::exactly(ty!(*builder, Unit)))
        .param(ty!(*builder, RefMut[Self]))
        .param(ty!(*builder, Ref[Self]))
        .optional();
    Contract::new(CLONEABLE).method(clone).method(clone_from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Checker, FailureKind};
    use conformal_types::BoxBuilder;
    use pretty_assertions::assert_eq;

    fn point(b: &BoxBuilder) -> DeclBuilder<'_, BoxBuilder> {
        DeclBuilder::record(b, "Point")
            .field("x", ty!(*b, Float))
            .field("y", ty!(*b, Float))
    }

    #[test]
    fn test_cloneable_without_clone_from() {
        let b = BoxBuilder::new();
        let checker = Checker::new(&b);
        let p = point(&b)
            .method("clone", ty!(b, (Ref[Self]) => Self))
            .build();
        assert!(checker.is_cloneable(&p));
    }

    #[test]
    fn test_cloneable_bad_clone_from() {
        let b = BoxBuilder::new();
        let checker = Checker::new(&b);
        let p = point(&b)
            .method("clone", ty!(b, (Ref[Self]) => Self))
            .method("clone_from", ty!(b, (Ref[Self], Ref[Self]) => Unit))
            .build();
        let failure = checker
            .check(&p, &cloneable(&b))
            .into_result()
            .unwrap_err();
        assert_eq!(failure.kind, FailureKind::WrongParamType);
        assert_eq!(failure.member, "clone_from");
        assert_eq!(failure.position, Some(0));
    }

    #[test]
    fn test_clone_returning_other_type() {
        let b = BoxBuilder::new();
        let checker = Checker::new(&b);
        let p = point(&b)
            .method("clone", ty!(b, (Ref[Self]) => Int))
            .build();
        let failure = checker
            .check(&p, &cloneable(&b))
            .into_result()
            .unwrap_err();
        assert_eq!(failure.kind, FailureKind::WrongReturnType);
        assert_eq!(failure.signature, "fn clone(&Self) -> Self");
        assert_eq!(failure.found.as_deref(), Some("Int"));
    }

    #[test]
    fn test_into_iterable_nested_failure() {
        let b = BoxBuilder::new();
        let checker = Checker::new(&b);
        let broken = DeclBuilder::record(&b, "Broken")
            .assoc("Item", ty!(b, Int))
            .build();
        let bag = DeclBuilder::record(&b, "Bag")
            .method("iter", ty!(b, (Ref[Self]) => broken))
            .build();

        let failure = checker
            .check(&bag, &into_iterable(&b, checker.options()))
            .into_result()
            .unwrap_err();
        assert_eq!(failure.kind, FailureKind::WrongReturnType);
        assert_eq!(failure.expected, "impl Iterator");
        let cause = failure.cause.as_deref().unwrap();
        assert_eq!(cause.kind, FailureKind::MissingMethod);
        assert_eq!(cause.member, "next");
    }

    #[test]
    fn test_into_iterable_returning_self() {
        let b = BoxBuilder::new();
        let checker = Checker::new(&b);
        let range = DeclBuilder::record(&b, "Range")
            .assoc("Item", ty!(b, Int))
            .method("next", ty!(b, (RefMut[Self]) => Option[Int]))
            .method("iter", ty!(b, (Ref[Self]) => Self))
            .build();
        assert!(checker.is_into_iterable(&range));
        assert!(checker.is_iterator(&range));
    }

    #[test]
    fn test_indexed_item_shape() {
        let b = BoxBuilder::new();
        let item = indexed_item(&b, ty!(b, Str));
        assert_eq!(item.kind().decl_name(), Some("IndexedItem"));
        assert_eq!(item.kind().field("idx"), Some(&ty!(b, Usize)));
        assert_eq!(item.kind().field("val"), Some(&ty!(b, Str)));
    }
}
