use crate::model::{Ident, Ty, TyBuilder, TyNode};
use alloc::rc::Rc;
use alloc::vec::Vec;
use string_cache::DefaultAtom;

/// Builder that uses reference counting (no deduplication).
///
/// Nodes are allocated with `Rc` and not deduplicated; identifiers are
/// `string_cache` atoms, so member names repeated across descriptors
/// (`next`, `Item`, `clone`) share one allocation.
///
/// Following Chalk's design, flags are computed once when the node is
/// allocated and cached next to the kind.
///
/// # Example
///
/// ```
/// use conformal_types::{BoxBuilder, TyKind, Scalar};
///
/// let builder = BoxBuilder::new();
/// let int_ty = TyKind::Scalar(Scalar::Int).alloc(&builder);
/// let opt_ty = TyKind::Optional(int_ty).alloc(&builder);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct BoxBuilder;

impl BoxBuilder {
    /// Create a new box builder.
    pub fn new() -> Self {
        Self
    }
}

impl Default for BoxBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TyBuilder for BoxBuilder {
    type TyHandle = Rc<TyNode<Self>>;
    type IdentHandle = DefaultAtom;
    type TyListHandle = Vec<Ty<Self>>;
    type FieldListHandle = Vec<(Ident<Self>, Ty<Self>)>;

    fn alloc(&self, node: TyNode<Self>) -> Self::TyHandle {
        Rc::new(node)
    }

    fn alloc_ident(&self, ident: impl AsRef<str>) -> Self::IdentHandle {
        DefaultAtom::from(ident.as_ref())
    }

    fn alloc_ty_list(
        &self,
        iter: impl IntoIterator<Item = Ty<Self>, IntoIter: ExactSizeIterator>,
    ) -> Self::TyListHandle {
        iter.into_iter().collect()
    }

    fn alloc_field_list(
        &self,
        iter: impl IntoIterator<Item = (Ident<Self>, Ty<Self>), IntoIter: ExactSizeIterator>,
    ) -> Self::FieldListHandle {
        iter.into_iter().collect()
    }
}
