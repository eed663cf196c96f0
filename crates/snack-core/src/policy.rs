//! # Transient Failure Policies
//!
//! Decides whether a cart call should be rejected as if the backend had a
//! hiccup. The demo storefront rejects every 5th quantity change so the retry
//! snackbar can be exercised; tests and production use [`NeverFail`].
//!
//! ```text
//! call #:    1    2    3    4    5    6    7    8    9    10
//! EveryNth(5)  ok   ok   ok   ok   ✗    ok   ok   ok   ok   ✗
//! NeverFail    ok   ok   ok   ok   ok   ok   ok   ok   ok   ok
//! ```
//!
//! The policy only answers the question. Counting calls is the job of the
//! store that owns it, so the same policy can be shared or swapped freely.

use std::fmt;

/// Predicate over the 1-based number of a policy-governed call.
pub trait FailurePolicy: Send + Sync + fmt::Debug {
    /// Returns true when call number `call` must be rejected.
    fn should_reject(&self, call: u64) -> bool;
}

/// Never rejects anything.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NeverFail;

impl FailurePolicy for NeverFail {
    fn should_reject(&self, _call: u64) -> bool {
        false
    }
}

/// Rejects every n-th call (`call % n == 0`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EveryNth {
    n: u64,
}

impl EveryNth {
    /// Returns `None` for `n == 0`, which would reject nothing meaningful.
    pub fn new(n: u64) -> Option<Self> {
        (n > 0).then_some(EveryNth { n })
    }

    pub fn n(&self) -> u64 {
        self.n
    }
}

impl FailurePolicy for EveryNth {
    fn should_reject(&self, call: u64) -> bool {
        call % self.n == 0
    }
}

/// Builds the policy for a configured cadence. `0` means never fail.
///
/// ```rust
/// use snack_core::policy::{policy_for_cadence, FailurePolicy};
///
/// let policy = policy_for_cadence(5);
/// assert!(!policy.should_reject(4));
/// assert!(policy.should_reject(5));
///
/// assert!(!policy_for_cadence(0).should_reject(5));
/// ```
pub fn policy_for_cadence(every: u64) -> Box<dyn FailurePolicy> {
    match EveryNth::new(every) {
        Some(policy) => Box::new(policy),
        None => Box::new(NeverFail),
    }
}
