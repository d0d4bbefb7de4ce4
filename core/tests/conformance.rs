//! End-to-end conformance checks of user types described through `Describe`.

use conformal_core::{
    CheckMode, CheckOptions, CheckOptionsOverride, Checker, ConformanceError, Describe,
    FailureKind, IndexedItem, IntoIterable, Iter, SliceIter, contracts, describe::describe_iterator,
};
use conformal_types::{BoxBuilder, DeclBuilder, Ty, TyBuilder, TyKind, ty};
use pretty_assertions::assert_eq;

/// A countdown that forgot to implement `next`.
struct Countdown;

impl Describe for Countdown {
    fn describe<B: TyBuilder>(builder: &B) -> Ty<B> {
        DeclBuilder::record(builder, "Countdown")
            .field("from", ty!(*builder, Int))
            .assoc("Item", ty!(*builder, Int))
            .build()
    }
}

/// Its `clone` returns an integer instead of a `Money`.
struct Money;

impl Describe for Money {
    fn describe<B: TyBuilder>(builder: &B) -> Ty<B> {
        DeclBuilder::record(builder, "Money")
            .field("cents", ty!(*builder, Int))
            .method("clone", ty!(*builder, (Ref[Self]) => Int))
            .build()
    }
}

/// A well-formed value type.
#[derive(Clone)]
struct Point;

impl Describe for Point {
    fn describe<B: TyBuilder>(builder: &B) -> Ty<B> {
        DeclBuilder::record(builder, "Point")
            .field("x", ty!(*builder, Float))
            .field("y", ty!(*builder, Float))
            .method("clone", ty!(*builder, (Ref[Self]) => Self))
            .method("clone_from", ty!(*builder, (RefMut[Self], Ref[Self]) => Unit))
            .build()
    }
}

/// Shape of an iterator whose `next` yields `IndexedItem`s of `Int` while its
/// `Item` is plain `Int`.
fn numbered<B: TyBuilder>(b: &B) -> Ty<B> {
    let indexed = TyKind::Optional(IndexedItem::<i64>::describe(b)).alloc(b);
    DeclBuilder::record(b, "Numbered")
        .assoc("Item", ty!(*b, Int))
        .method("next", ty!(*b, (RefMut[Self]) => indexed))
        .build()
}

#[test]
fn test_missing_next_is_reported_by_name() {
    let b = BoxBuilder::new();
    let checker = Checker::new(&b);

    let error = checker.bind_iterator(&Countdown::describe(&b)).unwrap_err();
    let failure = error.failure();
    assert_eq!(failure.kind, FailureKind::MissingMethod);
    assert_eq!(failure.member, "next");
    assert_eq!(failure.signature, "fn next(&mut Self) -> Option[Int]");
    assert_eq!(
        error.to_string(),
        "`Countdown` does not satisfy Iterator: missing method `next`: expected `fn next(&mut Self) -> Option[Int]`"
    );
    assert!(!checker.is_iterator(&Countdown::describe(&b)));
}

#[test]
fn test_bad_clone_and_cloned_fail_identically() {
    let b = BoxBuilder::new();
    let checker = Checker::new(&b);

    let direct = checker.bind_cloneable(&Money::describe(&b)).unwrap_err();
    assert_eq!(direct.failure().kind, FailureKind::WrongReturnType);
    assert_eq!(direct.failure().member, "clone");

    let through_cloned = checker
        .bind_cloned(&SliceIter::<Money>::describe(&b))
        .unwrap_err();
    assert_eq!(through_cloned, direct);
}

#[test]
fn test_cloned_over_cloneable_items() {
    let b = BoxBuilder::new();
    let checker = Checker::new(&b);
    assert!(checker.bind_cloneable(&Point::describe(&b)).unwrap().is_valid());
    assert!(checker.bind_cloned(&SliceIter::<Point>::describe(&b)).unwrap().is_valid());
    assert!(checker.bind_cloned(&SliceIter::<String>::describe(&b)).unwrap().is_valid());
}

#[test]
fn test_cloned_requires_an_iterator_first() {
    let b = BoxBuilder::new();
    let checker = Checker::new(&b);
    let error = checker.bind_cloned(&Countdown::describe(&b)).unwrap_err();
    assert_eq!(error.contract(), "Iterator");
}

#[test]
fn test_cloned_requires_borrowed_items() {
    let b = BoxBuilder::new();
    let checker = Checker::new(&b);

    // Yields owned integers, like a counter would.
    let numbers = describe_iterator(&b, "Numbers", ty!(b, Int));
    assert!(checker.is_iterator(&numbers));
    let error = checker.bind_cloned(&numbers).unwrap_err();
    let failure = error.failure();
    assert_eq!(error.contract(), "Iterator");
    assert_eq!(failure.kind, FailureKind::WrongReturnType);
    assert_eq!(failure.member, "next");
    assert_eq!(failure.expected, "Option[&Int]");
    assert_eq!(failure.found.as_deref(), Some("Option[Int]"));

    let exclusive = describe_iterator(&b, "Drain", ty!(b, RefMut[Int]));
    assert_eq!(
        checker.bind_cloned(&exclusive).unwrap_err().failure().kind,
        FailureKind::WrongReturnType
    );

    // The borrowed form is what `Iter::cloned` accepts.
    let values: Vec<u64> = vec![3, 1, 4];
    let mut it = IntoIterable::iter(&values);
    assert_eq!(it.cloned().collect().unwrap(), [3, 1, 4]);
    assert!(checker.bind_cloned(&SliceIter::<i64>::describe(&b)).unwrap().is_valid());

    let introspect = Checker::with_options(&b, CheckOptions::introspect());
    assert_eq!(
        introspect.bind_cloned(&numbers).unwrap().kind(),
        Some(FailureKind::WrongReturnType)
    );
}

#[test]
fn test_introspection_mode_returns_verdicts() {
    let b = BoxBuilder::new();
    let checker = Checker::with_options(&b, CheckOptions::introspect());

    let verdict = checker.bind_cloneable(&Money::describe(&b)).unwrap();
    assert_eq!(verdict.kind(), Some(FailureKind::WrongReturnType));

    let verdict = checker.bind_iterator(&Countdown::describe(&b)).unwrap();
    assert_eq!(verdict.kind(), Some(FailureKind::MissingMethod));
}

#[test]
fn test_reset_iter_requires_an_iterator() {
    let b = BoxBuilder::new();
    let checker = Checker::new(&b);
    let vec = Vec::<i64>::describe(&b);

    assert!(checker
        .bind_reset_iter(&vec, &SliceIter::<i64>::describe(&b))
        .unwrap()
        .is_valid());

    let error = checker
        .bind_reset_iter(&vec, &Countdown::describe(&b))
        .unwrap_err();
    assert!(matches!(error, ConformanceError::NotAnIterator { .. }));
    assert!(error.to_string().starts_with("`Countdown` must be a valid Iterator"));
}

#[test]
fn test_reset_iter_rejects_foreign_iterator() {
    let b = BoxBuilder::new();
    let checker = Checker::new(&b);
    let vec = Vec::<i64>::describe(&b);

    let error = checker
        .bind_reset_iter(&vec, &SliceIter::<String>::describe(&b))
        .unwrap_err();
    let failure = error.failure();
    assert_eq!(failure.kind, FailureKind::WrongParamType);
    assert_eq!(failure.position, Some(1));
    assert_eq!(failure.expected, "&mut SliceIter[Int]");
}

#[test]
fn test_reset_iter_in_introspection_mode() {
    let b = BoxBuilder::new();
    let checker = Checker::new(&b).with_override(&CheckOptionsOverride {
        mode: Some(CheckMode::Introspect),
        ..Default::default()
    });
    let verdict = checker
        .bind_reset_iter(&Vec::<i64>::describe(&b), &Countdown::describe(&b))
        .unwrap();
    assert_eq!(verdict.kind(), Some(FailureKind::MissingMethod));
}

#[test]
fn test_indexed_next_is_accepted() {
    let b = BoxBuilder::new();
    let checker = Checker::new(&b);
    assert!(checker.bind_iterator(&numbered(&b)).unwrap().is_valid());
}

#[test]
fn test_shared_next_relaxation() {
    let b = BoxBuilder::new();
    let rewindable = DeclBuilder::record(&b, "Rewindable")
        .assoc("Item", ty!(b, Str))
        .method("next", ty!(b, (Ref[Self]) => Option[Str]))
        .build();

    let strict = Checker::new(&b);
    assert_eq!(
        strict.bind_iterator(&rewindable).unwrap_err().failure().kind,
        FailureKind::WrongParamType
    );

    let relaxed = Checker::with_options(
        &b,
        CheckOptions {
            allow_shared_next: true,
            ..Default::default()
        },
    );
    assert!(relaxed.bind_iterator(&rewindable).unwrap().is_valid());
    assert!(relaxed.is_iterator(&SliceIter::<i64>::describe(&b)));
}

#[test]
fn test_wrong_kind_for_non_declarations() {
    let b = BoxBuilder::new();
    let checker = Checker::new(&b);
    for candidate in [ty!(b, Int), ty!(b, Array[Int]), ty!(b, (Ref[Self]) => Int)] {
        let verdict = checker.check(&candidate, &contracts::into_iterable(&b, checker.options()));
        assert_eq!(verdict.kind(), Some(FailureKind::WrongKind));
    }
}

#[test]
fn test_static_and_descriptor_levels_agree() {
    fn item_of<I: Iter>(_: &I) {}

    let points = [Point, Point];
    let mut it = conformal_core::IntoIterable::iter(&points);
    item_of(&it.cloned());

    let b = BoxBuilder::new();
    let checker = Checker::new(&b);
    assert!(checker.bind_cloned(&SliceIter::<Point>::describe(&b)).unwrap().is_valid());
}
