//! Terminal operations: dispatching on the arm and leaving the outcome
//! world.
//!
//! A failed extraction is a programming error, not a domain failure, so
//! [`Outcome::succeeded_with`], [`Outcome::failed_with`], and
//! [`Outcome::return_or_fail`] panic at the call site with a descriptive
//! message instead of returning a default.

use std::fmt;

use super::Outcome;
use super::types::joined;

impl<S, M> Outcome<S, M> {
    /// Dispatches to exactly one of two side-effecting handlers.
    ///
    /// `on_success` receives the value and the accumulated messages,
    /// `on_failure` the failure reasons. Use [`Outcome::either`] when the
    /// handlers should produce a value.
    ///
    /// # Examples
    ///
    /// ```
    /// use two_track::Outcome;
    ///
    /// let mut seen = None;
    /// Outcome::<_, String>::succeed(3).match_with(
    ///     |value, _messages| seen = Some(value),
    ///     |_messages| {},
    /// );
    /// assert_eq!(seen, Some(3));
    /// ```
    pub fn match_with<FS, FF>(self, on_success: FS, on_failure: FF)
    where
        FS: FnOnce(S, Vec<M>),
        FF: FnOnce(Vec<M>),
    {
        match self {
            Self::Success { value, messages } => on_success(value, messages),
            Self::Failure { messages } => on_failure(messages),
        }
    }

    /// Total dispatch: both handlers return a value of a common type.
    ///
    /// # Examples
    ///
    /// ```
    /// use two_track::Outcome;
    ///
    /// let label = Outcome::<i32, &str>::fail("nope")
    ///     .either(|value, _| format!("got {value}"), |messages| messages.join(", "));
    /// assert_eq!(label, "nope");
    /// ```
    pub fn either<R, FS, FF>(self, on_success: FS, on_failure: FF) -> R
    where
        FS: FnOnce(S, Vec<M>) -> R,
        FF: FnOnce(Vec<M>) -> R,
    {
        match self {
            Self::Success { value, messages } => on_success(value, messages),
            Self::Failure { messages } => on_failure(messages),
        }
    }

    /// The accumulated messages when the outcome is a success, otherwise an
    /// empty slice. Never fails.
    #[must_use]
    pub fn success_messages(&self) -> &[M] {
        match self {
            Self::Success { messages, .. } => messages,
            Self::Failure { .. } => &[],
        }
    }
}

impl<S, M: fmt::Display> Outcome<S, M> {
    /// The success value.
    ///
    /// # Panics
    ///
    /// Panics with the newline-joined failure messages when the outcome is
    /// a failure. Reach for this only where a failure indicates a bug.
    #[must_use]
    #[track_caller]
    pub fn succeeded_with(self) -> S {
        match self {
            Self::Success { value, .. } => value,
            Self::Failure { messages } => {
                panic!("Result was an error: {}", joined(&messages))
            }
        }
    }

    /// The success value, or a panic whose message is the newline-joined
    /// failure reasons.
    ///
    /// This is the conventional end of a chain in code that has no way to
    /// recover: the diagnostic text is the accumulated failure messages
    /// themselves.
    ///
    /// # Panics
    ///
    /// Panics when the outcome is a failure.
    #[must_use]
    #[track_caller]
    pub fn return_or_fail(self) -> S {
        match self {
            Self::Success { value, .. } => value,
            Self::Failure { messages } => panic!("{}", joined(&messages)),
        }
    }
}

impl<S: fmt::Display, M: fmt::Display> Outcome<S, M> {
    /// The failure messages.
    ///
    /// # Panics
    ///
    /// Panics with the rendered value and messages when the outcome is a
    /// success.
    #[must_use]
    #[track_caller]
    pub fn failed_with(self) -> Vec<M> {
        match self {
            Self::Failure { messages } => messages,
            Self::Success { value, messages } => {
                panic!("Result was a success: {value} - {}", joined(&messages))
            }
        }
    }
}
