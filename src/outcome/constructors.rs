//! Constructors for both arms.
//!
//! The failure constructors enforce the one invariant the type cannot
//! express on its own: a failure always has at least one reason.
//! [`Outcome::fail_all`] panics on an empty collection;
//! [`Outcome::try_fail_all`] is the non-panicking counterpart for call
//! sites where an empty collection is a legitimate input.

use super::Outcome;

impl<S, M> Outcome<S, M> {
    /// A success with no messages.
    ///
    /// # Examples
    ///
    /// ```
    /// use two_track::Outcome;
    /// let ok: Outcome<&str, String> = Outcome::succeed("done");
    /// assert!(ok.success_messages().is_empty());
    /// ```
    pub fn succeed(value: S) -> Self {
        Self::Success {
            value,
            messages: Vec::new(),
        }
    }

    /// A success carrying one message, typically a warning that did not
    /// prevent a value from being produced.
    pub fn succeed_with(value: S, message: M) -> Self {
        Self::Success {
            value,
            messages: vec![message],
        }
    }

    /// A success carrying the given messages, order preserved.
    pub fn succeed_all<I>(value: S, messages: I) -> Self
    where
        I: IntoIterator<Item = M>,
    {
        Self::Success {
            value,
            messages: messages.into_iter().collect(),
        }
    }

    /// A failure with a single reason.
    pub fn fail(message: M) -> Self {
        Self::Failure {
            messages: vec![message],
        }
    }

    /// A failure from at least one reason, order preserved.
    ///
    /// # Panics
    ///
    /// Panics when `messages` is empty: a failure without a reason is a
    /// contract violation. Use [`Outcome::try_fail_all`] when the
    /// collection may legitimately be empty.
    #[track_caller]
    pub fn fail_all<I>(messages: I) -> Self
    where
        I: IntoIterator<Item = M>,
    {
        Self::try_fail_all(messages).map_or_else(
            || panic!("a failure requires at least one message"),
            |outcome| outcome,
        )
    }

    /// A failure from a possibly empty collection of reasons.
    ///
    /// Returns `None` when no messages are supplied.
    pub fn try_fail_all<I>(messages: I) -> Option<Self>
    where
        I: IntoIterator<Item = M>,
    {
        let messages: Vec<M> = messages.into_iter().collect();
        if messages.is_empty() {
            None
        } else {
            Some(Self::Failure { messages })
        }
    }
}
