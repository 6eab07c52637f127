//! The boundary between raised faults and domain failures.
//!
//! [`capture`] is the single place where a fault raised by caller-supplied
//! code becomes data. Closures handed to `bind`, `map`, or `apply` are
//! deliberately not sandboxed: a panic escaping one of those is a
//! programming error and propagates as such.

use std::any::Any;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};

use thiserror::Error;

use crate::Outcome;

#[cfg(test)]
mod tests;

/// A panic payload caught by [`capture`], usable as a failure message.
///
/// Retains the raw payload for downcasting alongside a rendered text for
/// display joins. `&str` and `String` payloads (everything produced by the
/// `panic!` macro with a message) render verbatim; other payload types
/// render as a placeholder and stay reachable through
/// [`CapturedPanic::downcast_ref`].
#[derive(Error)]
#[error("{rendered}")]
pub struct CapturedPanic {
    payload: Box<dyn Any + Send>,
    rendered: String,
}

impl CapturedPanic {
    fn new(payload: Box<dyn Any + Send>) -> Self {
        let rendered = payload
            .downcast_ref::<&'static str>()
            .map(|text| (*text).to_owned())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "opaque panic payload".to_owned());
        Self { payload, rendered }
    }

    /// The rendered panic message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.rendered
    }

    /// Attempts to view the original payload as a `T`.
    #[must_use]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.payload.downcast_ref()
    }
}

impl fmt::Debug for CapturedPanic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CapturedPanic")
            .field("rendered", &self.rendered)
            .finish_non_exhaustive()
    }
}

/// Runs `thunk`, turning a normal return into a success and a panic into a
/// failure whose sole message is the caught payload.
///
/// The message type is fixed to [`CapturedPanic`] rather than being generic:
/// this operation exists to move an arbitrary raised fault into the outcome
/// world, not to produce domain messages.
///
/// # Examples
///
/// ```
/// use two_track::capture;
///
/// let ok = capture(|| 42);
/// assert_eq!(ok.value(), Some(&42));
///
/// let caught = capture(|| -> i32 { panic!("boom") });
/// assert!(caught.is_failure());
/// ```
pub fn capture<S, F>(thunk: F) -> Outcome<S, CapturedPanic>
where
    F: FnOnce() -> S,
{
    match panic::catch_unwind(AssertUnwindSafe(thunk)) {
        Ok(value) => Outcome::succeed(value),
        Err(payload) => {
            let fault = CapturedPanic::new(payload);
            tracing::debug!(fault = %fault, "captured a panic as a failure");
            Outcome::fail(fault)
        }
    }
}

/// Runs a `Result`-returning `thunk` and folds it into the outcome world:
/// `Ok` becomes a success with no messages, `Err` a failure with the error
/// as its sole message.
pub fn capture_result<S, M, F>(thunk: F) -> Outcome<S, M>
where
    F: FnOnce() -> Result<S, M>,
{
    match thunk() {
        Ok(value) => Outcome::succeed(value),
        Err(message) => Outcome::fail(message),
    }
}
