//! Adapters returned by the [`Iter`](super::Iter) default operations.
//!
//! Each holds `&'a mut` to its upstream and implements `Iter` itself, so
//! adapters compose by borrowing one another.

mod cloned;
mod enumerate;
mod filter;
mod step_by;

pub use cloned::Cloned;
pub use enumerate::Enumerator;
pub use filter::Filter;
pub use step_by::StepBy;

static_assertions::assert_impl_all!(Enumerator<'static, super::SliceIter<'static, u8>>: super::Iter);
static_assertions::assert_impl_all!(Cloned<'static, super::SliceIter<'static, u8>>: super::Iter);
static_assertions::assert_impl_all!(StepBy<'static, super::SliceIter<'static, u8>>: super::Iter);
static_assertions::assert_impl_all!(
    Filter<'static, super::SliceIter<'static, u8>, fn(&&'static u8) -> bool>: super::Iter
);
