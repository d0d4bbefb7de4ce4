#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

//! Capability contracts and a lazy iterator algebra.
//!
//! Contracts live at two levels:
//!
//! - Traits ([`IntoIterable`], [`Iter`], [`Cloneable`]) that the compiler
//!   enforces at every use site.
//! - Descriptor contracts ([`contracts`]) checked by the [`Checker`] against
//!   a structural description of a type, producing a [`Verdict`] that names
//!   the first violated requirement.
//!
//! Rust types reach the descriptor level through [`Describe`].

// Needed so that macros can uniformly refer to `::conformal_core` and still
// work from within this crate or a different one.
extern crate self as conformal_core;

// This works on std and no_std and is harmless.
extern crate alloc;

// Exports some symbols publicly basically so that macros can always refer to these.
#[doc(hidden)]
pub mod shim {
    pub use alloc::{boxed::Box, fmt, format, string::String, string::ToString, vec, vec::Vec};
}

// Re-export (crate only) for convenience so other modules don't need alloc:: prefix
#[allow(unused_imports)]
pub(crate) use shim::*;

pub mod checker;
pub mod contracts;
pub mod describe;
pub mod error;
pub mod iter;
pub mod options;

pub use checker::{
    Checker, Contract, Failure, FailureKind, MethodReq, Requirement, Returns, Substitution,
    Verdict,
};
pub use describe::Describe;
pub use error::{CollectError, ConformanceError};
pub use iter::{
    Cloneable, Cloned, Enumerator, Filter, IndexedItem, IntoIterable, Iter, SliceIter, StepBy,
};
pub use options::{CheckMode, CheckOptions, CheckOptionsOverride};
