//! Type construction macros for ergonomic descriptor building.
//!
//! # Example
//!
//! ```
//! use conformal_types::{ty, BoxBuilder, TyKind, Scalar};
//!
//! let b = BoxBuilder::new();
//!
//! // Scalar types
//! let int_ty = ty!(b, Int);
//! let str_ty = ty!(b, Str);
//!
//! // Compound types
//! let opt = ty!(b, Option[Array[Int]]);
//! let recv = ty!(b, RefMut[Self]);
//!
//! // Method signatures: the receiver is the first parameter
//! let next = ty!(b, (RefMut[Self]) => Option[Int]);
//!
//! // With template variables
//! let generic = ty!(b, [t] => (RefMut[Self]) => Option[t]);
//! ```

/// Macro for constructing descriptors with a concise syntax.
///
/// The first argument is the builder (a place expression; it is borrowed).
///
/// # Syntax
///
/// | Pattern | Meaning |
/// |---------|---------|
/// | `Unit`, `Bool`, `Int`, `Usize`, `Float`, `Str`, `Bytes` | Scalar types |
/// | `Self` | The candidate type |
/// | `Array[T]` | Array type |
/// | `Option[T]` | Optional type |
/// | `Ref[T]`, `RefMut[T]` | `&T`, `&mut T` |
/// | `(T1, T2) => R` | Function type |
/// | `[a, b] => T` | Introduce template variables |
#[macro_export]
macro_rules! ty {
    // === Entry points ===

    // With type variables: [a, b, ...] => Type
    ($b:expr, [$($var:ident),+ $(,)?] => $($rest:tt)+) => {{
        let __b = &$b;
        $crate::ty!(@vars __b, 0u16, [$($var),+] ; $($rest)+)
    }};

    // Without type variables
    ($b:expr, $($rest:tt)+) => {{
        let __b = &$b;
        $crate::ty!(@ty __b ; $($rest)+)
    }};

    // === Type variable binding ===

    // Last variable
    (@vars $b:expr, $n:expr, [$var:ident] ; $($rest:tt)+) => {{
        let $var = $crate::TyKind::TypeVar($n).alloc($b);
        $crate::ty!(@ty $b ; $($rest)+)
    }};

    // More variables to bind
    (@vars $b:expr, $n:expr, [$var:ident, $($tail:ident),+] ; $($rest:tt)+) => {{
        let $var = $crate::TyKind::TypeVar($n).alloc($b);
        $crate::ty!(@vars $b, $n + 1, [$($tail),+] ; $($rest)+)
    }};

    // === Scalar types ===

    (@ty $b:expr ; Unit) => {
        $crate::TyKind::Scalar($crate::Scalar::Unit).alloc($b)
    };
    (@ty $b:expr ; Bool) => {
        $crate::TyKind::Scalar($crate::Scalar::Bool).alloc($b)
    };
    (@ty $b:expr ; Int) => {
        $crate::TyKind::Scalar($crate::Scalar::Int).alloc($b)
    };
    (@ty $b:expr ; Usize) => {
        $crate::TyKind::Scalar($crate::Scalar::Usize).alloc($b)
    };
    (@ty $b:expr ; Float) => {
        $crate::TyKind::Scalar($crate::Scalar::Float).alloc($b)
    };
    (@ty $b:expr ; Str) => {
        $crate::TyKind::Scalar($crate::Scalar::Str).alloc($b)
    };
    (@ty $b:expr ; Bytes) => {
        $crate::TyKind::Scalar($crate::Scalar::Bytes).alloc($b)
    };

    // === Self ===

    (@ty $b:expr ; Self) => {
        $crate::TyKind::SelfTy.alloc($b)
    };

    // === Wrappers ===

    (@ty $b:expr ; Array[$($inner:tt)+]) => {{
        let elem = $crate::ty!(@ty $b ; $($inner)+);
        $crate::TyKind::Array(elem).alloc($b)
    }};

    (@ty $b:expr ; Option[$($inner:tt)+]) => {{
        let inner = $crate::ty!(@ty $b ; $($inner)+);
        $crate::TyKind::Optional(inner).alloc($b)
    }};

    (@ty $b:expr ; Ref[$($inner:tt)+]) => {{
        let inner = $crate::ty!(@ty $b ; $($inner)+);
        $crate::TyKind::Ref { mutable: false, inner }.alloc($b)
    }};

    (@ty $b:expr ; RefMut[$($inner:tt)+]) => {{
        let inner = $crate::ty!(@ty $b ; $($inner)+);
        $crate::TyKind::Ref { mutable: true, inner }.alloc($b)
    }};

    // === Function (params) => ret ===

    (@ty $b:expr ; ($($params:tt)*) => $($ret:tt)+) => {{
        let params = $crate::ty!(@params $b ; [] [] $($params)*);
        let ret = $crate::ty!(@ty $b ; $($ret)+);
        $crate::TyKind::Function { params, ret }.alloc($b)
    }};

    // === Param list parsing ===
    // @params builder ; [collected_types] [current_type_acc] remaining

    // Empty params
    (@params $b:expr ; [] []) => {{
        $crate::TyList::from_iter($b, core::iter::empty())
    }};

    // End of params - emit last accumulated type
    (@params $b:expr ; [$($collected:tt)*] [$($curr:tt)+]) => {{
        let last = $crate::ty!(@ty $b ; $($curr)+);
        $crate::TyList::from_iter($b, [$($collected)* last])
    }};

    // Comma - emit current type, continue
    (@params $b:expr ; [$($collected:tt)*] [$($curr:tt)+] , $($rest:tt)*) => {{
        let item = $crate::ty!(@ty $b ; $($curr)+);
        $crate::ty!(@params $b ; [$($collected)* item,] [] $($rest)*)
    }};

    // Opening bracket in params - keep the group together
    (@params $b:expr ; [$($collected:tt)*] [$($curr:tt)*] [$($inner:tt)*] $($rest:tt)*) => {{
        $crate::ty!(@params $b ; [$($collected)*] [$($curr)* [$($inner)*]] $($rest)*)
    }};

    // Any other token - accumulate
    (@params $b:expr ; [$($collected:tt)*] [$($curr:tt)*] $tok:tt $($rest:tt)*) => {{
        $crate::ty!(@params $b ; [$($collected)*] [$($curr)* $tok] $($rest)*)
    }};

    // === Type variable reference (fallback for identifiers) ===

    (@ty $b:expr ; $var:ident) => { $var.clone() };
}
