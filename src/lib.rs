//! Conformal - capability contracts and iteration protocols
//!
//! # Overview
//!
//! Conformal describes what it means for a type to be iterable, to be an
//! iterator, or to be cloneable, and checks candidate types against those
//! capabilities. It works at two levels:
//!
//! - **Static**: the [`Iter`], [`IntoIterable`] and [`Cloneable`] traits with
//!   their default operations and adapters.
//! - **Descriptor**: type descriptors built with [`types`] are checked by a
//!   [`Checker`] against [`Contract`]s, yielding a [`Verdict`] or a
//!   [`ConformanceError`] that names the exact member at fault.
//!
//! # Quick Start
//!
//! ```
//! use conformal::prelude::*;
//!
//! let numbers = vec![1, 2, 3, 4, 5];
//! let mut it = IntoIterable::iter(&numbers);
//! let big = |n: &&i32| **n > 3;
//! assert_eq!(it.filter(&big).collect().unwrap(), [&4, &5]);
//! ```
//!
//! # Checking descriptors
//!
//! ```
//! use conformal::{Checker, FailureKind};
//! use conformal::types::{BoxBuilder, DeclBuilder, ty};
//!
//! let b = BoxBuilder::new();
//! let countdown = DeclBuilder::record(&b, "Countdown")
//!     .assoc("Item", ty!(b, Int))
//!     .build();
//!
//! let error = Checker::new(&b).bind_iterator(&countdown).unwrap_err();
//! assert_eq!(error.failure().kind, FailureKind::MissingMethod);
//! assert_eq!(error.failure().member, "next");
//! ```
//!
//! Errors can be rendered against a pretty-printed declaration with
//! [`render_error_to`].

pub mod error_renderer;
pub mod pretty;

pub use error_renderer::{CharSet, RenderConfig, render_error, render_error_to};
pub use pretty::{DeclSource, MemberKind, MemberSpan, pretty_decl};

pub use conformal_core::{
    CheckMode, CheckOptions, CheckOptionsOverride, Checker, Cloneable, Cloned, CollectError,
    ConformanceError, Contract, Describe, Enumerator, Failure, FailureKind, Filter, IndexedItem,
    IntoIterable, Iter, MethodReq, Requirement, Returns, SliceIter, StepBy, Substitution, Verdict,
    contracts,
};

/// Type descriptors and their builders.
pub mod types {
    pub use conformal_types::*;
}

/// The traits needed to use iterators and describe types.
pub mod prelude {
    pub use conformal_core::{Cloneable, Describe, IntoIterable, Iter};
}
