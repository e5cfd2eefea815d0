//! The two-call enumeration idiom.
//!
//! Variable-length sequences in the API are fetched by calling the same entry
//! point twice: once with zero capacity to learn the element count, then with
//! a buffer of that size to fill it. The count may move between the two calls;
//! growth shows up as `XR_ERROR_SIZE_INSUFFICIENT` and is retried with the
//! newly reported count, shrinkage is handled by truncating to the written
//! count.

use crate::error::{OxrError, Result};
use crate::result::{ResultContext, Success};
use oxr_sys as sys;
use std::ptr;

/// Refill attempts allowed after the initial fill before the enumeration is
/// abandoned with [`OxrError::TwoCallStormed`]. A well-behaved runtime
/// converges in one.
pub const MAX_TWO_CALL_RETRIES: usize = 8;

/// Runs the probe/fill protocol for one enumeration entry point.
///
/// `call` receives `(capacity_input, count_output, buffer)` and forwards them
/// to the raw entry point. `template` is the element the fill buffer is
/// seeded with; out-structs must carry their structure type here. The outcome
/// is normalized through `cx` with `accepted` as the accepted-success set.
pub fn two_call_vec<T: Clone>(
    cx: &ResultContext,
    op: &'static str,
    accepted: &[sys::XrResult],
    template: T,
    mut call: impl FnMut(u32, &mut u32, *mut T) -> sys::XrResult,
) -> Result<Success<Vec<T>>> {
    let mut count = 0u32;
    let status = call(0, &mut count, ptr::null_mut());
    if status.is_error() || count == 0 {
        return cx.value_in(status, Vec::new(), accepted, op);
    }

    let mut retries = 0usize;
    loop {
        let mut buffer = vec![template.clone(); count as usize];
        let status = call(buffer.len() as u32, &mut count, buffer.as_mut_ptr());
        if status == sys::XrResult::ERROR_SIZE_INSUFFICIENT {
            // The set grew between calls; `count` now holds the new size.
            retries += 1;
            if retries > MAX_TWO_CALL_RETRIES {
                return Err(OxrError::TwoCallStormed { op, retries });
            }
            continue;
        }
        if status.is_error() {
            return cx.value_in(status, Vec::new(), accepted, op);
        }
        buffer.truncate(count as usize);
        return cx.value_in(status, buffer, accepted, op);
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::result::CheckPolicy;
    use std::cell::Cell;

    fn strict() -> ResultContext {
        ResultContext::new(CheckPolicy::Strict)
    }

    fn write_items(buffer: *mut u32, items: &[u32]) {
        for (i, item) in items.iter().enumerate() {
            unsafe { *buffer.add(i) = *item };
        }
    }

    #[test]
    fn clean_run_makes_exactly_two_calls() {
        let calls = Cell::new(0usize);
        let items = [10u32, 11, 12, 13, 14];
        let got = two_call_vec(&strict(), "xrStubEnumerate", &[], 0u32, |cap, count, buffer| {
            calls.set(calls.get() + 1);
            *count = items.len() as u32;
            if cap > 0 {
                assert_eq!(cap as usize, items.len());
                write_items(buffer, &items);
            }
            sys::XrResult::SUCCESS
        })
        .unwrap();
        assert_eq!(calls.get(), 2);
        assert_eq!(got.value, items);
        assert_eq!(got.status, sys::XrResult::SUCCESS);
    }

    #[test]
    fn growth_between_calls_is_retried() {
        let calls = Cell::new(0usize);
        let items = [1u32, 2, 3, 4, 5];
        let got = two_call_vec(&strict(), "xrStubEnumerate", &[], 0u32, |cap, count, buffer| {
            calls.set(calls.get() + 1);
            match calls.get() {
                // Probe reports a stale count.
                1 => {
                    *count = 3;
                    sys::XrResult::SUCCESS
                }
                // First fill arrives with too little room.
                2 => {
                    assert_eq!(cap, 3);
                    *count = items.len() as u32;
                    sys::XrResult::ERROR_SIZE_INSUFFICIENT
                }
                _ => {
                    assert_eq!(cap as usize, items.len());
                    *count = items.len() as u32;
                    write_items(buffer, &items);
                    sys::XrResult::SUCCESS
                }
            }
        })
        .unwrap();
        assert_eq!(calls.get(), 3);
        assert_eq!(got.value, items);
    }

    #[test]
    fn shrinkage_truncates_to_written_count() {
        let got = two_call_vec(&strict(), "xrStubEnumerate", &[], 0u32, |cap, count, buffer| {
            if cap == 0 {
                *count = 5;
            } else {
                *count = 2;
                write_items(buffer, &[7, 8]);
            }
            sys::XrResult::SUCCESS
        })
        .unwrap();
        assert_eq!(got.value, [7, 8]);
    }

    #[test]
    fn empty_enumeration_probes_once() {
        let calls = Cell::new(0usize);
        let got = two_call_vec(&strict(), "xrStubEnumerate", &[], 0u32, |_, count, _| {
            calls.set(calls.get() + 1);
            *count = 0;
            sys::XrResult::SUCCESS
        })
        .unwrap();
        assert_eq!(calls.get(), 1);
        assert!(got.value.is_empty());
    }

    #[test]
    fn probe_failure_short_circuits() {
        let calls = Cell::new(0usize);
        let err = two_call_vec(&strict(), "xrStubEnumerate", &[], 0u32, |_, _, _| {
            calls.set(calls.get() + 1);
            sys::XrResult::ERROR_INSTANCE_LOST
        })
        .unwrap_err();
        assert_eq!(calls.get(), 1);
        assert!(matches!(err, OxrError::Xr { op: "xrStubEnumerate", .. }));
    }

    #[test]
    fn passthrough_returns_the_probe_failure() {
        let cx = ResultContext::with_assert_hook(CheckPolicy::Passthrough, |_, _| {});
        let got = two_call_vec(&cx, "xrStubEnumerate", &[], 0u32, |_, _, _| {
            sys::XrResult::ERROR_SESSION_LOST
        })
        .unwrap();
        assert_eq!(got.status, sys::XrResult::ERROR_SESSION_LOST);
        assert!(got.value.is_empty());
    }

    #[test]
    fn unbounded_growth_is_cut_off() {
        let calls = Cell::new(0usize);
        let err = two_call_vec(&strict(), "xrStubEnumerate", &[], 0u32, |_, count, _| {
            calls.set(calls.get() + 1);
            // A runtime that always wants one more slot than it was offered.
            *count += 1;
            if calls.get() == 1 {
                sys::XrResult::SUCCESS
            } else {
                sys::XrResult::ERROR_SIZE_INSUFFICIENT
            }
        })
        .unwrap_err();
        assert!(matches!(err, OxrError::TwoCallStormed { retries, .. } if retries > MAX_TWO_CALL_RETRIES));
        // One probe, one initial fill, and MAX_TWO_CALL_RETRIES refills.
        assert_eq!(calls.get(), 2 + MAX_TWO_CALL_RETRIES);
    }
}
