//! Descriptor builder implementations.
//!
//! - [`BoxBuilder`]: `Rc`-backed nodes with atom identifiers

mod box_builder;

pub use box_builder::BoxBuilder;
