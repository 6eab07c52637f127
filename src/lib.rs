//! Railway-oriented result handling with message accumulation.
//!
//! The crate centres on [`Outcome`], a two-armed type: a computation either
//! succeeded with a value plus zero or more side messages (warnings,
//! notices), or it failed with one or more messages explaining why. The
//! combinators keep chains of fallible steps linear instead of branching on
//! success at every step:
//!
//! * [`Outcome::bind`] chains dependent steps and short-circuits on the
//!   first failure, without losing the messages already accumulated;
//! * [`Outcome::apply`] (and [`map2`], [`collect`]) combines independent
//!   outcomes and retains every failure reason rather than stopping at the
//!   first one;
//! * [`capture`] converts a panicking computation into a domain failure.
//!
//! # Examples
//!
//! Chaining dependent validation steps:
//!
//! ```
//! use two_track::Outcome;
//!
//! fn parse_port(raw: &str) -> Outcome<u16, String> {
//!     match raw.parse() {
//!         Ok(port) => Outcome::succeed(port),
//!         Err(_) => Outcome::fail(format!("not a port number: {raw}")),
//!     }
//! }
//!
//! let outcome = parse_port("80").bind(|port| {
//!     if port < 1024 {
//!         Outcome::succeed_with(port, "privileged port".to_owned())
//!     } else {
//!         Outcome::succeed(port)
//!     }
//! });
//! assert_eq!(outcome.value(), Some(&80));
//!
//! let outcome = parse_port("eighty").bind(|port| Outcome::succeed(port + 1));
//! assert!(outcome.is_failure());
//! ```
//!
//! Collecting independent checks, keeping every failure:
//!
//! ```
//! use two_track::{Outcome, collect};
//!
//! let checks: Vec<Outcome<i32, &str>> =
//!     vec![Outcome::fail("too small"), Outcome::succeed(2), Outcome::fail("too big")];
//! let combined = collect(checks);
//! assert_eq!(combined.into_result(), Err(vec!["too small", "too big"]));
//! ```

mod capture;
mod combinators;
mod convert;
mod outcome;

pub use capture::{CapturedPanic, capture, capture_result};
pub use combinators::{collect, map2};
pub use outcome::Outcome;
