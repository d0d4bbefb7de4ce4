//! Options controlling how the checker reports and which shapes it accepts.
//!
//! Follows the defaults + override pattern: a [`Checker`](crate::Checker)
//! owns a full [`CheckOptions`], and callers adjust single fields through a
//! [`CheckOptionsOverride`] without restating the rest.

/// What `bind` does with a failed verdict.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CheckMode {
    /// A failed verdict becomes a `ConformanceError` naming the violated
    /// requirement and its expected signature.
    #[default]
    Diagnostic,
    /// The verdict is handed back as a value. No error, no side effects.
    Introspect,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CheckOptions {
    pub mode: CheckMode,
    /// Accept `next(&Self)` in addition to `next(&mut Self)`.
    ///
    /// Restartable iterators that keep their cursor behind interior
    /// mutability advertise a shared receiver.
    pub allow_shared_next: bool,
}

impl Default for CheckOptions {
    fn default() -> Self {
        Self {
            mode: CheckMode::Diagnostic,
            allow_shared_next: false,
        }
    }
}

impl CheckOptions {
    /// Options for the boolean predicates.
    pub fn introspect() -> Self {
        Self {
            mode: CheckMode::Introspect,
            ..Self::default()
        }
    }

    pub fn override_with(&mut self, other: &CheckOptionsOverride) {
        if let Some(mode) = other.mode {
            self.mode = mode;
        }
        if let Some(allow_shared_next) = other.allow_shared_next {
            self.allow_shared_next = allow_shared_next;
        }
    }
}

/// Partial [`CheckOptions`]; `None` keeps the current value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct CheckOptionsOverride {
    pub mode: Option<CheckMode>,
    pub allow_shared_next: Option<bool>,
}
