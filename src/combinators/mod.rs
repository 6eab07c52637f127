//! The combinator algebra: monadic chaining, applicative combination, and
//! sequence traversal.
//!
//! Two combination disciplines coexist and must not be confused:
//!
//! * [`Outcome::bind`] is sequential. Later steps depend on earlier values,
//!   so the first failure ends the chain; the function is never called for
//!   a failed input.
//! * [`Outcome::apply`] is parallel in spirit. The combined outcomes do not
//!   depend on each other, so a failure on one side does not suppress the
//!   failure on the other: both reason lists are kept. [`map2`] and
//!   [`collect`] inherit this accumulation.

use crate::Outcome;


impl<S, M> Outcome<S, M> {
    /// Threads previously accumulated messages into this outcome, keeping
    /// the arm.
    ///
    /// For a success, `extra` ends up in front of the messages already
    /// carried; for a failure, the failure's own reasons stay in front and
    /// `extra` follows. [`Outcome::bind`] uses this rule so a failure
    /// reports its reason first and the history that led to it after.
    pub fn merge_messages<I>(self, extra: I) -> Self
    where
        I: IntoIterator<Item = M>,
    {
        match self {
            Self::Success { value, messages } => {
                let mut merged: Vec<M> = extra.into_iter().collect();
                merged.extend(messages);
                Self::Success {
                    value,
                    messages: merged,
                }
            }
            Self::Failure { mut messages } => {
                messages.extend(extra);
                Self::Failure { messages }
            }
        }
    }

    /// Monadic chain: feeds the success value into `f` and threads the
    /// messages accumulated so far into whatever `f` returns.
    ///
    /// A failure passes through untouched and `f` is never called. When
    /// `f` itself fails, the prior success messages are not lost: they are
    /// appended after the new failure's reasons (see
    /// [`Outcome::merge_messages`]).
    ///
    /// # Examples
    ///
    /// ```
    /// use two_track::Outcome;
    ///
    /// let outcome = Outcome::succeed_with(2, "halved".to_owned())
    ///     .bind(|n| Outcome::succeed_with(n * 10, "scaled".to_owned()));
    /// assert_eq!(
    ///     outcome,
    ///     Outcome::succeed_all(20, vec!["halved".to_owned(), "scaled".to_owned()]),
    /// );
    /// ```
    pub fn bind<S2, F>(self, f: F) -> Outcome<S2, M>
    where
        F: FnOnce(S) -> Outcome<S2, M>,
    {
        match self {
            Self::Success { value, messages } => f(value).merge_messages(messages),
            Self::Failure { messages } => Outcome::Failure { messages },
        }
    }

    /// Applicative combination of a wrapped function with a wrapped
    /// argument.
    ///
    /// * Success ⊗ Success: the function is applied; messages concatenate,
    ///   the function's first.
    /// * Success ⊗ Failure: the argument's failure, unchanged.
    /// * Failure ⊗ Success: the function's failure, unchanged.
    /// * Failure ⊗ Failure: one failure carrying both reason lists, the
    ///   function's first.
    ///
    /// The last case is the point of the applicative form: independent
    /// failures accumulate instead of the first one masking the rest.
    pub fn apply<A, B>(self, arg: Outcome<A, M>) -> Outcome<B, M>
    where
        S: FnOnce(A) -> B,
    {
        match (self, arg) {
            (
                Self::Success {
                    value: f,
                    messages: mut merged,
                },
                Outcome::Success { value, messages },
            ) => {
                merged.extend(messages);
                Outcome::Success {
                    value: f(value),
                    messages: merged,
                }
            }
            (Self::Success { .. }, Outcome::Failure { messages })
            | (Self::Failure { messages }, Outcome::Success { .. }) => {
                Outcome::Failure { messages }
            }
            (
                Self::Failure {
                    messages: mut merged,
                },
                Outcome::Failure { messages },
            ) => {
                merged.extend(messages);
                Outcome::Failure { messages: merged }
            }
        }
    }

    /// Applies `f` to the success value; a failure passes through with its
    /// messages intact.
    ///
    /// Defined as [`Outcome::apply`] with the function lifted via
    /// [`Outcome::succeed`].
    pub fn map<S2, F>(self, f: F) -> Outcome<S2, M>
    where
        F: FnOnce(S) -> S2,
    {
        Outcome::succeed(f).apply(self)
    }
}

impl<S, M> Outcome<Outcome<S, M>, M> {
    /// Collapses one level of nesting: [`Outcome::bind`] with the identity.
    pub fn flatten(self) -> Outcome<S, M> {
        self.bind(|inner| inner)
    }
}

impl<S, M> Outcome<Vec<Outcome<S, M>>, M> {
    /// Unwraps the outer outcome and [`collect`]s the inner sequence.
    ///
    /// An outer failure passes through untouched; for an outer success the
    /// result is whatever `collect` makes of the inner outcomes.
    pub fn flatten_all(self) -> Outcome<Vec<S>, M> {
        match self {
            Self::Success { value, .. } => collect(value),
            Self::Failure { messages } => Outcome::Failure { messages },
        }
    }
}

/// Combines two independent outcomes with a two-argument function.
///
/// Built from [`Outcome::map`] and [`Outcome::apply`], so failures from
/// both sides accumulate, `a`'s messages first.
///
/// # Examples
///
/// ```
/// use two_track::{Outcome, map2};
///
/// let sum = map2(|a, b| a + b, Outcome::<_, &str>::succeed(1), Outcome::succeed(2));
/// assert_eq!(sum.value(), Some(&3));
///
/// let both = map2(|a: i32, b: i32| a + b, Outcome::fail("left"), Outcome::fail("right"));
/// assert_eq!(both.into_result(), Err(vec!["left", "right"]));
/// ```
pub fn map2<A, B, C, M, F>(f: F, a: Outcome<A, M>, b: Outcome<B, M>) -> Outcome<C, M>
where
    F: FnOnce(A, B) -> C,
{
    a.map(move |va| move |vb| f(va, vb)).apply(b)
}

/// Folds a sequence of outcomes into one outcome of all the values, in
/// input order.
///
/// Every element is consumed; the traversal never short-circuits. If all
/// elements succeed the values come back in their original order with all
/// messages concatenated in element order. If any element fails the result
/// is a failure accumulating the reasons of every failing element, per the
/// pairwise [`Outcome::apply`] rule.
///
/// An empty sequence is a vacuous success.
///
/// # Examples
///
/// ```
/// use two_track::{Outcome, collect};
///
/// let all: Outcome<Vec<i32>, &str> =
///     collect(vec![Outcome::succeed(1), Outcome::succeed(2), Outcome::succeed(3)]);
/// assert_eq!(all.value(), Some(&vec![1, 2, 3]));
///
/// let none: Outcome<Vec<i32>, &str> =
///     collect(vec![Outcome::fail("x"), Outcome::succeed(2), Outcome::fail("y")]);
/// assert_eq!(none.into_result(), Err(vec!["x", "y"]));
/// ```
pub fn collect<S, M, I>(outcomes: I) -> Outcome<Vec<S>, M>
where
    I: IntoIterator<Item = Outcome<S, M>>,
{
    outcomes
        .into_iter()
        .fold(Outcome::succeed(Vec::new()), |acc, next| {
            map2(
                |mut values: Vec<S>, value| {
                    values.push(value);
                    values
                },
                acc,
                next,
            )
        })
}
