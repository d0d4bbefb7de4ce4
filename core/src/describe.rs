//! Bridge from Rust types to descriptors.
//!
//! Implementing [`Describe`] lets a Rust type be checked by the
//! [`Checker`](crate::Checker). The built-in containers, iterators and
//! adapters describe themselves so that their descriptors satisfy the same
//! contracts their traits express.
//!
//! ```
//! use conformal_core::{Checker, Describe, SliceIter};
//! use conformal_types::BoxBuilder;
//!
//! let b = BoxBuilder::new();
//! let checker = Checker::new(&b);
//! assert!(checker.is_into_iterable(&Vec::<i64>::describe(&b)));
//! assert!(checker.is_iterator(&SliceIter::<i64>::describe(&b)));
//! ```

use conformal_types::{DeclBuilder, Scalar, Ty, TyBuilder, TyKind, ty};

use crate::contracts;
use crate::iter::{Cloned, Enumerator, Filter, IndexedItem, Iter, SliceIter, StepBy};
use crate::{String, Vec, format};

pub trait Describe {
    fn describe<B: TyBuilder>(builder: &B) -> Ty<B>;
}

/// Record `name` with `type Item = item` and `fn next(&mut Self) -> Option[item]`.
pub fn describe_iterator<B: TyBuilder>(builder: &B, name: impl AsRef<str>, item: Ty<B>) -> Ty<B> {
    let ret = TyKind::Optional(item.clone()).alloc(builder);
    DeclBuilder::record(builder, name)
        .assoc("Item", item)
        .method("next", ty!(*builder, (RefMut[Self]) => ret))
        .build()
}

macro_rules! describe_scalar {
    ($($rust:ty => $scalar:ident),* $(,)?) => {
        $(
            impl Describe for $rust {
                fn describe<B: TyBuilder>(builder: &B) -> Ty<B> {
                    TyKind::Scalar(Scalar::$scalar).alloc(builder)
                }
            }
        )*
    };
}

describe_scalar! {
    () => Unit,
    bool => Bool,
    i32 => Int,
    i64 => Int,
    usize => Usize,
    f64 => Float,
    str => Str,
    String => Str,
}

impl<T: Describe> Describe for Option<T> {
    fn describe<B: TyBuilder>(builder: &B) -> Ty<B> {
        TyKind::Optional(T::describe(builder)).alloc(builder)
    }
}

impl<T: Describe + ?Sized> Describe for &T {
    fn describe<B: TyBuilder>(builder: &B) -> Ty<B> {
        TyKind::Ref {
            mutable: false,
            inner: T::describe(builder),
        }
        .alloc(builder)
    }
}

impl<T: Describe + ?Sized> Describe for &mut T {
    fn describe<B: TyBuilder>(builder: &B) -> Ty<B> {
        TyKind::Ref {
            mutable: true,
            inner: T::describe(builder),
        }
        .alloc(builder)
    }
}

impl<T: Describe> Describe for [T] {
    fn describe<B: TyBuilder>(builder: &B) -> Ty<B> {
        TyKind::Array(T::describe(builder)).alloc(builder)
    }
}

impl<T: Describe> Describe for IndexedItem<T> {
    fn describe<B: TyBuilder>(builder: &B) -> Ty<B> {
        contracts::indexed_item(builder, T::describe(builder))
    }
}

impl<T: Describe> Describe for Vec<T> {
    fn describe<B: TyBuilder>(builder: &B) -> Ty<B> {
        let elem = T::describe(builder);
        let iter = SliceIter::<T>::describe(builder);
        DeclBuilder::record(builder, format!("Vec[{elem}]"))
            .field("len", ty!(*builder, Usize))
            .method("iter", ty!(*builder, (Ref[Self]) => iter))
            .build()
    }
}

impl<T: Describe> Describe for SliceIter<'_, T> {
    fn describe<B: TyBuilder>(builder: &B) -> Ty<B> {
        let elem = T::describe(builder);
        let item = ty!(*builder, Ref[elem]);
        describe_iterator(builder, format!("SliceIter[{elem}]"), item)
    }
}

/// `Name[Upstream]`, so nested adapters read like the chain that built them.
fn adapter_name<U: Describe, B: TyBuilder>(builder: &B, adapter: &str) -> String {
    format!("{adapter}[{}]", U::describe(builder))
}

impl<I> Describe for Enumerator<'_, I>
where
    I: Iter + Describe,
    I::Item: Describe,
{
    fn describe<B: TyBuilder>(builder: &B) -> Ty<B> {
        let item = IndexedItem::<I::Item>::describe(builder);
        describe_iterator(builder, adapter_name::<I, B>(builder, "Enumerator"), item)
    }
}

impl<'b, I, T> Describe for Cloned<'_, I>
where
    I: Iter<Item = &'b T> + Describe,
    T: Describe + 'b,
{
    fn describe<B: TyBuilder>(builder: &B) -> Ty<B> {
        describe_iterator(builder, adapter_name::<I, B>(builder, "Cloned"), T::describe(builder))
    }
}

impl<I, P> Describe for Filter<'_, I, P>
where
    I: Iter + Describe,
    I::Item: Describe,
{
    fn describe<B: TyBuilder>(builder: &B) -> Ty<B> {
        describe_iterator(builder, adapter_name::<I, B>(builder, "Filter"), I::Item::describe(builder))
    }
}

impl<I> Describe for StepBy<'_, I>
where
    I: Iter + Describe,
    I::Item: Describe,
{
    fn describe<B: TyBuilder>(builder: &B) -> Ty<B> {
        describe_iterator(builder, adapter_name::<I, B>(builder, "StepBy"), I::Item::describe(builder))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Checker, ToString};
    use conformal_types::BoxBuilder;
    use pretty_assertions::assert_eq;

    type Slice<'a> = SliceIter<'a, i64>;

    #[test]
    fn test_scalars_and_wrappers() {
        let b = BoxBuilder::new();
        assert_eq!(i64::describe(&b), ty!(b, Int));
        assert_eq!(<&str>::describe(&b), ty!(b, Ref[Str]));
        assert_eq!(Option::<&mut usize>::describe(&b), ty!(b, Option[RefMut[Usize]]));
        assert_eq!(<[f64]>::describe(&b), ty!(b, Array[Float]));
    }

    #[test]
    fn test_builtin_containers_conform() {
        let b = BoxBuilder::new();
        let checker = Checker::new(&b);
        let vec = Vec::<String>::describe(&b);
        assert_eq!(vec.to_string(), "Vec[Str]");
        assert!(checker.bind_into_iterable(&vec).unwrap().is_valid());

        let iter = SliceIter::<String>::describe(&b);
        assert_eq!(checker.item_type(&iter), Some(ty!(b, Ref[Str])));
        assert!(checker.bind_reset_iter(&vec, &iter).unwrap().is_valid());
    }

    #[test]
    fn test_adapters_conform() {
        let b = BoxBuilder::new();
        let checker = Checker::new(&b);

        let enumerated = Enumerator::<Slice>::describe(&b);
        assert_eq!(enumerated.to_string(), "Enumerator[SliceIter[Int]]");
        assert!(checker.is_iterator(&enumerated));
        assert_eq!(
            checker.item_type(&enumerated),
            Some(IndexedItem::<&i64>::describe(&b))
        );

        let cloned = Cloned::<Slice>::describe(&b);
        assert_eq!(checker.item_type(&cloned), Some(ty!(b, Int)));

        let stepped = StepBy::<Enumerator<Slice>>::describe(&b);
        assert_eq!(stepped.to_string(), "StepBy[Enumerator[SliceIter[Int]]]");
        assert!(checker.is_iterator(&stepped));

        let filtered = Filter::<Slice, fn(&&i64) -> bool>::describe(&b);
        assert_eq!(checker.item_type(&filtered), Some(ty!(b, Ref[Int])));
    }

    #[test]
    fn test_descriptions_are_structural() {
        let b = BoxBuilder::new();
        assert_eq!(Vec::<i32>::describe(&b), Vec::<i64>::describe(&b));
        assert_ne!(Vec::<i64>::describe(&b), Vec::<usize>::describe(&b));
        assert!(Checker::new(&b).is_into_iterable(&Vec::<Vec<i32>>::describe(&b)));
    }
}
