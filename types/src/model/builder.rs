use core::{fmt::Debug, hash::Hash, ops::Deref};

use super::ty::{Ident, Ty, TyNode};

/// Allocation strategy for type descriptors.
///
/// Descriptors are immutable once built, so a builder only needs to know how
/// to allocate nodes, identifiers and lists. Equality of handles decides how
/// the checker compares signatures, so every handle must be `Eq + Hash`.
pub trait TyBuilder: Copy + Clone + Debug + Eq + Hash + Sized {
    /// Examples: `&'a TyNode<Self>`, `Rc<TyNode<Self>>`.
    type TyHandle: AsRef<TyNode<Self>> + Clone + Debug + Eq + Hash;

    /// Examples: `string_cache::DefaultAtom`, an interned `&'a str`.
    type IdentHandle: AsRef<str> + Clone + Debug + Eq + Hash;

    /// Lists are plain handles rather than a GAT `List<T>`, which keeps
    /// lifetimes out of the builder's signature.
    type TyListHandle: Deref<Target = [Ty<Self>]> + Clone + Debug + Eq + Hash;
    type FieldListHandle: Deref<Target = [(Ident<Self>, Ty<Self>)]> + Clone + Debug + Eq + Hash;

    /// Internal: Allocate a new type node.
    /// Call instead: `TyKind::...(...).alloc(builder)`.
    fn alloc(&self, node: TyNode<Self>) -> Self::TyHandle;

    fn alloc_ident(&self, ident: impl AsRef<str>) -> Self::IdentHandle;

    fn alloc_ty_list(
        &self,
        iter: impl IntoIterator<Item = Ty<Self>, IntoIter: ExactSizeIterator>,
    ) -> Self::TyListHandle;

    fn alloc_field_list(
        &self,
        iter: impl IntoIterator<Item = (Ident<Self>, Ty<Self>), IntoIter: ExactSizeIterator>,
    ) -> Self::FieldListHandle;
}
