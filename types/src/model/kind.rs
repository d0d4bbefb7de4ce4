use smallvec::SmallVec;

use super::builder::TyBuilder;
use super::flags::TyFlags;
use super::ty::{FieldList, Ident, Ty, TyList, TyNode};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TyKind<B: TyBuilder> {
    /// Template variable.
    ///
    /// Contracts use these as placeholders bound from the candidate's
    /// associated types (`T0` is the iterator `Item`, for example).
    TypeVar(u16),

    /// Scalar types (Unit, Bool, Int, Usize, Float, Str, Bytes)
    Scalar(Scalar),

    /// The candidate type itself, as seen from inside its own methods.
    SelfTy,

    /// Array type with element type
    Array(Ty<B>),

    /// Optional value: either nothing or one `T`.
    Optional(Ty<B>),

    /// Shared (`&T`) or exclusive (`&mut T`) reference.
    Ref { mutable: bool, inner: Ty<B> },

    /// Function type with parameters and return type.
    ///
    /// Methods are functions whose first parameter is the receiver.
    Function { params: TyList<B>, ret: Ty<B> },

    /// A nominal declaration with members.
    ///
    /// `fields` hold struct fields (record), variant payloads (union) or tags
    /// with a `Unit` payload (enum). Members keep declaration order.
    Decl {
        shape: DeclShape,
        name: Ident<B>,
        fields: FieldList<B>,
        methods: FieldList<B>,
        assoc: FieldList<B>,
    },
}

impl<B: TyBuilder> TyKind<B> {
    pub fn compute_flags(&self) -> TyFlags {
        match self {
            TyKind::TypeVar(_) => TyFlags::HAS_TYPE_VARS,
            TyKind::Scalar(_) => TyFlags::empty(),
            TyKind::SelfTy => TyFlags::HAS_SELF,
            TyKind::Array(elem) | TyKind::Optional(elem) => elem.flags(),
            TyKind::Ref { inner, .. } => inner.flags(),
            TyKind::Function { params, ret } => {
                let param_flags = params
                    .iter()
                    .fold(TyFlags::empty(), |acc, ty| acc | ty.flags());
                param_flags | ret.flags()
            }
            // A declaration is a closed, nominal unit: `Self` inside its own
            // methods refers to the declaration and does not leak outwards.
            TyKind::Decl {
                fields,
                methods,
                assoc,
                ..
            } => fields
                .iter()
                .chain(methods.iter())
                .chain(assoc.iter())
                .fold(TyFlags::empty(), |acc, (_, ty)| acc | ty.flags())
                .difference(TyFlags::HAS_SELF),
        }
    }

    pub fn alloc(self, builder: &B) -> Ty<B> {
        Ty::new(builder, TyNode::new(self))
    }

    /// Children in definition order:
    /// - `Array`, `Optional`, `Ref`: `[inner]`
    /// - `Function`: `[param0, param1, ..., ret]`
    /// - `Decl`: `[fields..., methods..., assoc...]`
    /// - Leaves (TypeVar, Scalar, SelfTy): `[]`
    pub fn iter_children(
        &self,
    ) -> impl ExactSizeIterator<Item = &Ty<B>> + DoubleEndedIterator {
        let mut children: SmallVec<[&Ty<B>; 4]> = SmallVec::new();
        match self {
            TyKind::TypeVar(_) | TyKind::Scalar(_) | TyKind::SelfTy => {}
            TyKind::Array(inner) | TyKind::Optional(inner) | TyKind::Ref { inner, .. } => {
                children.push(inner)
            }
            TyKind::Function { params, ret } => {
                children.extend(params.iter());
                children.push(ret);
            }
            TyKind::Decl {
                fields,
                methods,
                assoc,
                ..
            } => {
                children.extend(fields.iter().map(|(_, ty)| ty));
                children.extend(methods.iter().map(|(_, ty)| ty));
                children.extend(assoc.iter().map(|(_, ty)| ty));
            }
        }
        children.into_iter()
    }

    /// Rebuilds this kind in `builder` with new children, given in the same
    /// order as [`TyKind::iter_children`].
    pub fn from_iter_children<Out: TyBuilder>(
        &self,
        builder: &Out,
        children: impl ExactSizeIterator<Item = Ty<Out>>,
    ) -> TyKind<Out> {
        let mut children = children;
        let mut next = || {
            children
                .next()
                .expect("Bug: fewer children than the kind requires")
        };
        match self {
            TyKind::TypeVar(id) => TyKind::TypeVar(*id),
            TyKind::Scalar(scalar) => TyKind::Scalar(*scalar),
            TyKind::SelfTy => TyKind::SelfTy,
            TyKind::Array(_) => TyKind::Array(next()),
            TyKind::Optional(_) => TyKind::Optional(next()),
            TyKind::Ref { mutable, .. } => TyKind::Ref {
                mutable: *mutable,
                inner: next(),
            },
            TyKind::Function { params, .. } => {
                let new_params: SmallVec<[Ty<Out>; 4]> = (0..params.len()).map(|_| next()).collect();
                let ret = next();
                TyKind::Function {
                    params: TyList::from_iter(builder, new_params),
                    ret,
                }
            }
            TyKind::Decl {
                shape,
                name,
                fields,
                methods,
                assoc,
            } => {
                let mut rebuild = |list: &FieldList<B>| {
                    let members: SmallVec<[(Ident<Out>, Ty<Out>); 4]> = list
                        .iter()
                        .map(|(ident, _)| (Ident::new(builder, ident.as_str()), next()))
                        .collect();
                    FieldList::from_iter(builder, members)
                };
                let fields = rebuild(fields);
                let methods = rebuild(methods);
                let assoc = rebuild(assoc);
                TyKind::Decl {
                    shape: *shape,
                    name: Ident::new(builder, name.as_str()),
                    fields,
                    methods,
                    assoc,
                }
            }
        }
    }

    /// Returns the declaration name for `Decl` kinds.
    pub fn decl_name(&self) -> Option<&str> {
        match self {
            TyKind::Decl { name, .. } => Some(name.as_str()),
            _ => None,
        }
    }

    pub fn field(&self, name: &str) -> Option<&Ty<B>> {
        match self {
            TyKind::Decl { fields, .. } => fields.get(name),
            _ => None,
        }
    }

    pub fn method(&self, name: &str) -> Option<&Ty<B>> {
        match self {
            TyKind::Decl { methods, .. } => methods.get(name),
            _ => None,
        }
    }

    pub fn assoc(&self, name: &str) -> Option<&Ty<B>> {
        match self {
            TyKind::Decl { assoc, .. } => assoc.get(name),
            _ => None,
        }
    }
}

/// Scalar type variants
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Scalar {
    /// The empty tuple.
    Unit,

    /// Boolean type
    Bool,

    /// Signed integer type
    Int,

    /// Unsigned machine-sized integer (positions, counts)
    Usize,

    /// Floating-point type
    Float,

    /// String type
    Str,

    /// Bytes type
    Bytes,
}

/// What kind of nominal declaration a `Decl` is.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum DeclShape {
    /// Struct with named fields.
    Record,
    /// Tagged union: one payload per variant.
    Union,
    /// Plain enumeration of tags.
    Enum,
}

impl DeclShape {
    pub fn keyword(self) -> &'static str {
        match self {
            DeclShape::Record => "record",
            DeclShape::Union => "union",
            DeclShape::Enum => "enum",
        }
    }
}
