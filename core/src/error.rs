//! Error types for binding contracts and collecting iterators.
//!
//! A verdict by itself is not an error: [`Checker::check`](crate::Checker::check)
//! always returns a [`Verdict`](crate::Verdict). Errors appear only where a
//! contract is bound in diagnostic mode, and when `collect` cannot grow its
//! buffer.

use thiserror::Error;

use crate::String;
use crate::checker::Failure;

/// A type was bound to a contract it does not satisfy.
///
/// These indicate a programming error in the candidate type, not a runtime
/// condition, and are meant to stop whatever construction was in progress.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConformanceError {
    #[error("`{candidate}` does not satisfy {contract}: {failure}")]
    Unsatisfied {
        contract: &'static str,
        candidate: String,
        failure: Failure,
    },

    /// The iterator handed to `reset_iter` is not an iterator at all.
    #[error("`{candidate}` must be a valid Iterator: {failure}")]
    NotAnIterator { candidate: String, failure: Failure },
}

impl ConformanceError {
    pub fn failure(&self) -> &Failure {
        match self {
            ConformanceError::Unsatisfied { failure, .. }
            | ConformanceError::NotAnIterator { failure, .. } => failure,
        }
    }

    /// Rendering of the offending type.
    pub fn candidate(&self) -> &str {
        match self {
            ConformanceError::Unsatisfied { candidate, .. }
            | ConformanceError::NotAnIterator { candidate, .. } => candidate,
        }
    }

    pub fn contract(&self) -> &'static str {
        match self {
            ConformanceError::Unsatisfied { contract, .. } => contract,
            ConformanceError::NotAnIterator { .. } => "Iterator",
        }
    }
}

/// `collect` ran out of memory.
///
/// The items gathered so far are dropped with the partial buffer, and so is
/// the item that could not be stored. The iterator is left positioned right
/// after that item.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectError {
    #[error("out of memory after collecting {collected} items")]
    OutOfMemory { collected: usize },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ToString;
    use crate::checker::FailureKind;

    #[test]
    fn test_display_names_contract_and_signature() {
        let failure = Failure::new(
            FailureKind::MissingMethod,
            "next",
            "fn next(&mut Self) -> Option[Int]",
        );
        let error = ConformanceError::Unsatisfied {
            contract: "Iterator",
            candidate: "Counter".to_string(),
            failure,
        };
        assert_eq!(
            error.to_string(),
            "`Counter` does not satisfy Iterator: missing method `next`: expected `fn next(&mut Self) -> Option[Int]`"
        );
        assert_eq!(error.contract(), "Iterator");
        assert_eq!(error.failure().kind, FailureKind::MissingMethod);
    }

    #[test]
    fn test_collect_error_display() {
        let error = CollectError::OutOfMemory { collected: 3 };
        assert_eq!(error.to_string(), "out of memory after collecting 3 items");
    }
}
