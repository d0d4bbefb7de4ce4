use core::fmt;

use crate::{Box, String, ToString};

/// Why a candidate failed a contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    /// No callable member of that name.
    ///
    /// A member that exists but is not a function (a `next` declared with a
    /// non-function type, say) counts as missing too; the failure then
    /// carries the member's type in `found`.
    MissingMethod,
    MissingAssociatedType,
    MissingField,
    WrongFieldType,
    WrongArity,
    WrongParamType,
    WrongReturnType,
    /// The candidate is not a record, tagged union or enum.
    WrongKind,
}

impl FailureKind {
    /// Stable diagnostic code.
    pub fn code(self) -> &'static str {
        match self {
            FailureKind::MissingMethod => "C001",
            FailureKind::MissingAssociatedType => "C002",
            FailureKind::MissingField => "C003",
            FailureKind::WrongFieldType => "C004",
            FailureKind::WrongArity => "C005",
            FailureKind::WrongParamType => "C006",
            FailureKind::WrongReturnType => "C007",
            FailureKind::WrongKind => "C008",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            FailureKind::MissingMethod => "MissingMethod",
            FailureKind::MissingAssociatedType => "MissingAssociatedType",
            FailureKind::MissingField => "MissingField",
            FailureKind::WrongFieldType => "WrongFieldType",
            FailureKind::WrongArity => "WrongArity",
            FailureKind::WrongParamType => "WrongParamType",
            FailureKind::WrongReturnType => "WrongReturnType",
            FailureKind::WrongKind => "WrongKind",
        }
    }

    /// True when the member is absent rather than mismatched.
    pub fn is_missing(self) -> bool {
        matches!(
            self,
            FailureKind::MissingMethod
                | FailureKind::MissingAssociatedType
                | FailureKind::MissingField
        )
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The first violated requirement of a contract.
///
/// `signature` is the full requirement as it would have to be written on the
/// candidate (`fn next(&mut Self) -> Option[Int]`), with template variables
/// already replaced by what the candidate bound them to. `expected` and
/// `found` narrow it down to the piece that differs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    pub kind: FailureKind,
    /// Name of the member the requirement is about. Empty for `WrongKind`.
    pub member: String,
    pub signature: String,
    pub expected: String,
    pub found: Option<String>,
    /// Zero-based parameter position (receiver is 0), for `WrongParamType`.
    pub position: Option<usize>,
    /// Set when a return type failed a nested contract.
    pub cause: Option<Box<Failure>>,
}

impl Failure {
    pub fn new(kind: FailureKind, member: impl Into<String>, signature: impl Into<String>) -> Self {
        let signature = signature.into();
        Self {
            kind,
            member: member.into(),
            expected: signature.clone(),
            signature,
            found: None,
            position: None,
            cause: None,
        }
    }

    pub fn with_expected(mut self, expected: impl Into<String>) -> Self {
        self.expected = expected.into();
        self
    }

    pub fn with_found(mut self, found: impl ToString) -> Self {
        self.found = Some(found.to_string());
        self
    }

    pub fn at_position(mut self, position: usize) -> Self {
        self.position = Some(position);
        self
    }

    pub fn caused_by(mut self, cause: Failure) -> Self {
        self.cause = Some(Box::new(cause));
        self
    }

    /// The innermost failure along the `cause` chain.
    pub fn root_cause(&self) -> &Failure {
        let mut current = self;
        while let Some(cause) = &current.cause {
            current = cause;
        }
        current
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let found = self.found.as_deref().unwrap_or("?");
        let member = &self.member;
        match self.kind {
            FailureKind::MissingMethod => {
                write!(f, "missing method `{member}`: expected `{}`", self.signature)?;
            }
            FailureKind::MissingAssociatedType => {
                write!(f, "missing associated type `{member}`: expected `{}`", self.signature)?;
            }
            FailureKind::MissingField => {
                write!(f, "missing field `{member}`: expected `{}`", self.signature)?;
            }
            FailureKind::WrongFieldType => {
                write!(f, "field `{member}` has type `{found}`, expected `{}`", self.expected)?;
            }
            FailureKind::WrongArity => {
                write!(
                    f,
                    "method `{member}` has the wrong number of parameters: expected `{}`, found `{found}`",
                    self.signature
                )?;
            }
            FailureKind::WrongParamType => {
                let position = self.position.unwrap_or_default();
                write!(
                    f,
                    "parameter {position} of method `{member}` has type `{found}`, expected `{}`",
                    self.expected
                )?;
            }
            FailureKind::WrongReturnType => {
                write!(f, "method `{member}` returns `{found}`, expected `{}`", self.expected)?;
            }
            FailureKind::WrongKind => {
                return write!(f, "`{found}` is not a record, union or enum");
            }
        }
        if self.kind.is_missing() {
            if let Some(found) = &self.found {
                write!(f, ", found `{found}`")?;
            }
        }
        if let Some(cause) = &self.cause {
            write!(f, ": {cause}")?;
        }
        Ok(())
    }
}

/// Outcome of checking one candidate against one contract.
///
/// Valid exactly when no reason is recorded; at most one reason is ever
/// recorded because checking stops at the first violation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    reason: Option<Failure>,
}

impl Verdict {
    pub fn valid() -> Self {
        Self { reason: None }
    }

    pub fn invalid(failure: Failure) -> Self {
        Self {
            reason: Some(failure),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.reason.is_none()
    }

    pub fn reason(&self) -> Option<&Failure> {
        self.reason.as_ref()
    }

    pub fn kind(&self) -> Option<FailureKind> {
        self.reason.as_ref().map(|failure| failure.kind)
    }

    pub fn into_result(self) -> Result<(), Failure> {
        match self.reason {
            None => Ok(()),
            Some(failure) => Err(failure),
        }
    }
}

impl From<Result<(), Failure>> for Verdict {
    fn from(result: Result<(), Failure>) -> Self {
        match result {
            Ok(()) => Verdict::valid(),
            Err(failure) => Verdict::invalid(failure),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verdict_validity_follows_reason() {
        assert!(Verdict::valid().is_valid());
        assert_eq!(Verdict::valid().kind(), None);

        let verdict = Verdict::invalid(Failure::new(FailureKind::MissingField, "len", "len: Usize"));
        assert!(!verdict.is_valid());
        assert_eq!(verdict.kind(), Some(FailureKind::MissingField));
        assert_eq!(verdict.reason().map(|f| f.member.as_str()), Some("len"));
    }

    #[test]
    fn test_failure_messages() {
        let param = Failure::new(FailureKind::WrongParamType, "next", "fn next(&mut Self) -> Option[Int]")
            .with_expected("&mut Self")
            .with_found("&Self")
            .at_position(0);
        assert_eq!(
            param.to_string(),
            "parameter 0 of method `next` has type `&Self`, expected `&mut Self`"
        );

        let kind = Failure::new(FailureKind::WrongKind, "", "record, union or enum").with_found("Int");
        assert_eq!(kind.to_string(), "`Int` is not a record, union or enum");
    }

    #[test]
    fn test_nested_cause_is_appended() {
        let inner = Failure::new(FailureKind::MissingMethod, "next", "fn next(&mut Self) -> Option[T0]");
        let outer = Failure::new(FailureKind::WrongReturnType, "iter", "fn iter(&Self) -> impl Iterator")
            .with_expected("impl Iterator")
            .with_found("Broken")
            .caused_by(inner.clone());
        assert_eq!(
            outer.to_string(),
            "method `iter` returns `Broken`, expected `impl Iterator`: missing method `next`: expected `fn next(&mut Self) -> Option[T0]`"
        );
        assert_eq!(outer.root_cause(), &inner);
    }

    #[test]
    fn test_codes_are_distinct() {
        let kinds = [
            FailureKind::MissingMethod,
            FailureKind::MissingAssociatedType,
            FailureKind::MissingField,
            FailureKind::WrongFieldType,
            FailureKind::WrongArity,
            FailureKind::WrongParamType,
            FailureKind::WrongReturnType,
            FailureKind::WrongKind,
        ];
        for (i, a) in kinds.iter().enumerate() {
            for b in &kinds[i + 1..] {
                assert_ne!(a.code(), b.code());
            }
        }
    }
}
