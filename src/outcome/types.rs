//! The `Outcome` enum and its basic observers.

use std::fmt;

/// Result of a computation that can accumulate side messages.
///
/// An `Outcome` is either a [`Success`](Outcome::Success) carrying a value
/// and zero or more messages, or a [`Failure`](Outcome::Failure) carrying
/// the reasons the value could not be produced. The message type `M` is
/// opaque to this crate: warnings, structured diagnostics, and plain
/// strings all work, as long as diagnostic joins (`Display`) are available
/// where an operation needs them.
///
/// Outcomes are immutable snapshots. Combinators consume one outcome and
/// produce a new one; nothing mutates `value` or `messages` in place, so a
/// constructed outcome may be shared read-only across threads.
///
/// The union is deliberately closed (no `#[non_exhaustive]`): exhaustive
/// matching at the dispatch sites is part of the contract.
///
/// # Examples
///
/// ```
/// use two_track::Outcome;
///
/// let ok: Outcome<i32, String> = Outcome::succeed(7);
/// assert!(ok.is_success());
///
/// let bad: Outcome<i32, String> = Outcome::fail("seven was unavailable".to_owned());
/// assert!(bad.is_failure());
/// ```
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome<S, M> {
    /// A usable value, plus any non-fatal messages gathered on the way.
    Success {
        /// The computed value.
        value: S,
        /// Accumulated messages, in insertion order. May be empty.
        messages: Vec<M>,
    },
    /// No usable value; the messages are the reasons why.
    Failure {
        /// The failure reasons, in insertion order. Never empty when the
        /// outcome was built through this crate's constructors.
        messages: Vec<M>,
    },
}

impl<S, M> Outcome<S, M> {
    /// `true` when the outcome carries a value.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// `true` when the outcome is a failure.
    #[must_use]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure { .. })
    }

    /// Borrows the success value, if there is one.
    #[must_use]
    pub const fn value(&self) -> Option<&S> {
        match self {
            Self::Success { value, .. } => Some(value),
            Self::Failure { .. } => None,
        }
    }

    /// Consumes the outcome and takes the success value, if there is one.
    #[must_use]
    pub fn into_value(self) -> Option<S> {
        match self {
            Self::Success { value, .. } => Some(value),
            Self::Failure { .. } => None,
        }
    }

    /// Borrows the message sequence of whichever arm is present.
    #[must_use]
    pub fn messages(&self) -> &[M] {
        match self {
            Self::Success { messages, .. } | Self::Failure { messages } => messages,
        }
    }
}

impl<S: fmt::Display, M: fmt::Display> fmt::Display for Outcome<S, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success { value, messages } => {
                write!(f, "OK: {value} - {}", joined(messages))
            }
            Self::Failure { messages } => write!(f, "Error: {}", joined(messages)),
        }
    }
}

/// Newline-joins messages for the diagnostic texts used by `Display` and
/// the panicking extractors.
pub(super) fn joined<M: fmt::Display>(messages: &[M]) -> String {
    messages
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}
