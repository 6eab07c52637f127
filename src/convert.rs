//! Interop with `std::result::Result` and iterator collection.
//!
//! These conversions keep `Outcome` usable alongside code that speaks the
//! standard `Result` vocabulary: a `Result` lifts losslessly into an
//! outcome with no messages, and `.collect::<Outcome<Vec<_>, _>>()` runs
//! the accumulating traversal from [`collect`](crate::collect).

use crate::Outcome;
use crate::combinators::collect;

impl<S, M> From<Result<S, M>> for Outcome<S, M> {
    fn from(result: Result<S, M>) -> Self {
        match result {
            Ok(value) => Self::succeed(value),
            Err(message) => Self::fail(message),
        }
    }
}

impl<S, M> Outcome<S, M> {
    /// Converts into a plain `Result`, keeping the messages of whichever
    /// arm is present.
    ///
    /// # Errors
    ///
    /// Returns the failure messages when the outcome is a failure.
    pub fn into_result(self) -> Result<(S, Vec<M>), Vec<M>> {
        match self {
            Self::Success { value, messages } => Ok((value, messages)),
            Self::Failure { messages } => Err(messages),
        }
    }
}

impl<S, M> FromIterator<Outcome<S, M>> for Outcome<Vec<S>, M> {
    fn from_iter<I: IntoIterator<Item = Outcome<S, M>>>(iter: I) -> Self {
        collect(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::Outcome;

    #[test]
    fn ok_lifts_to_success() {
        let outcome = Outcome::from(Ok::<_, String>(5));
        assert_eq!(outcome, Outcome::succeed(5));
    }

    #[test]
    fn err_lifts_to_failure() {
        let outcome: Outcome<i32, &str> = Err("broken").into();
        assert_eq!(outcome, Outcome::fail("broken"));
    }

    #[test]
    fn into_result_round_trips_both_arms() {
        let ok = Outcome::<_, &str>::succeed_with(5, "warned");
        assert_eq!(ok.into_result(), Ok((5, vec!["warned"])));

        let bad = Outcome::<i32, _>::fail("broken");
        assert_eq!(bad.into_result(), Err(vec!["broken"]));
    }

    #[test]
    fn from_iterator_matches_collect() {
        let items = [Outcome::<_, &str>::succeed(1), Outcome::succeed(2)];
        let via_iter: Outcome<Vec<i32>, &str> = items.into_iter().collect();
        assert_eq!(via_iter, Outcome::succeed_all(vec![1, 2], Vec::new()));
    }
}
