//! Status code normalization.
//!
//! Every raw call funnels its `XrResult` (and any output it produced) through
//! a [`ResultContext`] to become the caller-facing outcome. The context is
//! chosen once, at binding construction, so both policies coexist in one
//! build: [`CheckPolicy::Strict`] turns unaccepted codes into [`OxrError`],
//! [`CheckPolicy::Passthrough`] hands every code back for the caller to
//! branch on.

use crate::error::{OxrError, Result, XrError};
use oxr_sys as sys;

/// What to do with a status code the accepted set does not cover.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum CheckPolicy {
    /// Unaccepted codes become errors.
    #[default]
    Strict,
    /// Codes are returned as-is; the assert hook fires on failures.
    Passthrough,
}

/// Failure-reporting primitive for passthrough mode.
pub type AssertHook = fn(status: sys::XrResult, op: &'static str);

fn default_assert_hook(status: sys::XrResult, op: &'static str) {
    if cfg!(debug_assertions) {
        panic!("{op} failed with {status:?}");
    }
}

/// A successful outcome, pairing the value with the status code that
/// produced it so qualified successes stay observable.
#[derive(Copy, Clone, Debug)]
pub struct Success<T> {
    pub status: sys::XrResult,
    pub value: T,
}

impl<T> Success<T> {
    /// Discards the status code.
    pub fn into_value(self) -> T {
        self.value
    }

    /// True if the status was a non-default success.
    pub fn is_qualified(&self) -> bool {
        self.status.is_qualified()
    }
}

/// The success/failure policy applied to every normalized call.
#[derive(Copy, Clone)]
pub struct ResultContext {
    policy: CheckPolicy,
    assert_hook: AssertHook,
}

impl Default for ResultContext {
    fn default() -> Self {
        Self::new(CheckPolicy::Strict)
    }
}

impl ResultContext {
    pub fn new(policy: CheckPolicy) -> Self {
        Self {
            policy,
            assert_hook: default_assert_hook,
        }
    }

    pub fn with_assert_hook(policy: CheckPolicy, assert_hook: AssertHook) -> Self {
        Self {
            policy,
            assert_hook,
        }
    }

    pub fn policy(&self) -> CheckPolicy {
        self.policy
    }

    /// `XR_SUCCESS` is a member of every accepted set; nothing else is
    /// accepted implicitly, so an unlisted qualified success is a contract
    /// mismatch and reports like a failure under [`CheckPolicy::Strict`].
    fn admits(status: sys::XrResult, accepted: &[sys::XrResult]) -> bool {
        status == sys::XrResult::SUCCESS || accepted.contains(&status)
    }

    /// Normalizes a status-only call that accepts only the default success.
    pub fn status(&self, status: sys::XrResult, op: &'static str) -> Result<sys::XrResult> {
        self.status_in(status, &[], op)
    }

    /// Normalizes a status-only call with an explicit accepted-success set.
    pub fn status_in(
        &self,
        status: sys::XrResult,
        accepted: &[sys::XrResult],
        op: &'static str,
    ) -> Result<sys::XrResult> {
        if Self::admits(status, accepted) {
            return Ok(status);
        }
        match self.policy {
            CheckPolicy::Strict => Err(OxrError::Xr {
                op,
                source: XrError::from_raw(status),
            }),
            CheckPolicy::Passthrough => {
                if status.is_error() {
                    (self.assert_hook)(status, op);
                }
                Ok(status)
            }
        }
    }

    /// Normalizes a value-producing call that accepts only the default
    /// success.
    pub fn value<T>(&self, status: sys::XrResult, value: T, op: &'static str) -> Result<Success<T>> {
        self.value_in(status, value, &[], op)
    }

    /// Normalizes a value-producing call with an explicit accepted-success
    /// set. The status stays paired with the value so callers can observe
    /// qualified successes like `XR_SESSION_LOSS_PENDING`.
    pub fn value_in<T>(
        &self,
        status: sys::XrResult,
        value: T,
        accepted: &[sys::XrResult],
        op: &'static str,
    ) -> Result<Success<T>> {
        self.status_in(status, accepted, op)
            .map(|status| Success { status, value })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn strict_raises_failures_with_the_original_code() {
        let cx = ResultContext::new(CheckPolicy::Strict);
        for code in [
            sys::XrResult::ERROR_VALIDATION_FAILURE,
            sys::XrResult::ERROR_INSTANCE_LOST,
            sys::XrResult::ERROR_SESSION_LOST,
            sys::XrResult::from_raw(-31337),
        ] {
            match cx.status(code, "xrStub") {
                Err(OxrError::Xr { op, source }) => {
                    assert_eq!(op, "xrStub");
                    assert_eq!(source.raw(), code);
                }
                other => panic!("expected an error for {code:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn strict_rejects_unlisted_qualified_successes() {
        let cx = ResultContext::new(CheckPolicy::Strict);
        assert!(cx
            .status(sys::XrResult::SESSION_LOSS_PENDING, "xrStub")
            .is_err());
    }

    #[test]
    fn accepted_codes_are_preserved() {
        let cx = ResultContext::new(CheckPolicy::Strict);
        let accepted = [sys::XrResult::SESSION_LOSS_PENDING];
        let status = cx
            .status_in(sys::XrResult::SESSION_LOSS_PENDING, &accepted, "xrStub")
            .unwrap();
        assert_eq!(status, sys::XrResult::SESSION_LOSS_PENDING);

        let success = cx
            .value_in(sys::XrResult::SESSION_LOSS_PENDING, 17u32, &accepted, "xrStub")
            .unwrap();
        assert_eq!(success.status, sys::XrResult::SESSION_LOSS_PENDING);
        assert_eq!(success.value, 17);
        assert!(success.is_qualified());
    }

    #[test]
    fn unqualified_success_never_raises() {
        for policy in [CheckPolicy::Strict, CheckPolicy::Passthrough] {
            let cx = ResultContext::new(policy);
            assert_eq!(
                cx.status(sys::XrResult::SUCCESS, "xrStub").unwrap(),
                sys::XrResult::SUCCESS
            );
        }
    }

    static HOOK_FIRED: AtomicUsize = AtomicUsize::new(0);

    fn counting_hook(_status: sys::XrResult, _op: &'static str) {
        HOOK_FIRED.fetch_add(1, Ordering::SeqCst);
    }

    #[test]
    fn passthrough_returns_failures_and_fires_the_hook() {
        let cx = ResultContext::with_assert_hook(CheckPolicy::Passthrough, counting_hook);
        let status = cx
            .status(sys::XrResult::ERROR_RUNTIME_FAILURE, "xrStub")
            .unwrap();
        assert_eq!(status, sys::XrResult::ERROR_RUNTIME_FAILURE);
        assert_eq!(HOOK_FIRED.load(Ordering::SeqCst), 1);

        // Qualified successes are passed through without asserting.
        let status = cx
            .status(sys::XrResult::FRAME_DISCARDED, "xrStub")
            .unwrap();
        assert_eq!(status, sys::XrResult::FRAME_DISCARDED);
        assert_eq!(HOOK_FIRED.load(Ordering::SeqCst), 1);
    }
}
