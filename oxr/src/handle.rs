//! Exclusive ownership of runtime handles.

use oxr_sys as sys;
use std::fmt;
use std::mem;

/// A raw handle value as `oxr-sys` defines them.
pub trait RawHandle: Copy + PartialEq {
    const NULL: Self;
    const OBJECT_TYPE: sys::ObjectType;

    fn is_null(self) -> bool {
        self == Self::NULL
    }
}

macro_rules! impl_raw_handle {
    ($($ty:ident => $object:ident,)*) => {
        $(
            impl RawHandle for sys::$ty {
                const NULL: Self = sys::$ty::NULL;
                const OBJECT_TYPE: sys::ObjectType = sys::ObjectType::$object;
            }
        )*
    };
}

impl_raw_handle! {
    Instance => INSTANCE,
    Session => SESSION,
    Swapchain => SWAPCHAIN,
    Space => SPACE,
    ActionSet => ACTION_SET,
    Action => ACTION,
}

/// Signature shared by every `xrDestroy*` entry point.
pub type DestroyFn<H> = unsafe extern "system" fn(H) -> sys::XrResult;

/// Binds a handle to the destroy entry point captured when it was created.
///
/// Ownership is exclusive: the wrapper is not clonable, and moving it moves
/// the obligation to destroy. Dropping a non-null wrapper calls the captured
/// destroy function exactly once; the status it returns is ignored, since
/// there is nowhere left to report it. Children the runtime destroys
/// implicitly alongside the parent are the runtime's business, not tracked
/// here.
pub struct OwnedHandle<H: RawHandle> {
    raw: H,
    destroy: DestroyFn<H>,
}

impl<H: RawHandle> OwnedHandle<H> {
    /// Takes over destruction of `raw`.
    ///
    /// ## Safety
    /// `raw` must be a live handle that no other owner will destroy, and
    /// `destroy` must be the matching `xrDestroy*` entry point resolved from
    /// the runtime that produced it.
    pub unsafe fn new(raw: H, destroy: DestroyFn<H>) -> Self {
        Self { raw, destroy }
    }

    /// An empty wrapper that will destroy nothing until [`Self::reset`] arms
    /// it.
    pub fn null(destroy: DestroyFn<H>) -> Self {
        Self {
            raw: H::NULL,
            destroy,
        }
    }

    #[inline]
    pub fn as_raw(&self) -> H {
        self.raw
    }

    #[inline]
    pub fn is_null(&self) -> bool {
        self.raw.is_null()
    }

    /// Hands the handle back to the caller without destroying it.
    pub fn release(&mut self) -> H {
        mem::replace(&mut self.raw, H::NULL)
    }

    /// Replaces the held handle, destroying the old one first if it was
    /// non-null and different.
    ///
    /// ## Safety
    /// Same contract as [`Self::new`] for the incoming value.
    pub unsafe fn reset(&mut self, raw: H) {
        if !self.raw.is_null() && self.raw != raw {
            unsafe { (self.destroy)(self.raw) };
        }
        self.raw = raw;
    }
}

impl<H: RawHandle> Drop for OwnedHandle<H> {
    fn drop(&mut self) {
        if !self.raw.is_null() {
            unsafe { (self.destroy)(self.raw) };
        }
    }
}

impl<H: RawHandle + fmt::Debug> fmt::Debug for OwnedHandle<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("OwnedHandle").field(&self.raw).finish()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn make(raw: u64, destroy: DestroyFn<sys::Space>) -> OwnedHandle<sys::Space> {
        unsafe { OwnedHandle::new(sys::Space::from_raw(raw), destroy) }
    }

    static DROP_DESTROYS: AtomicUsize = AtomicUsize::new(0);
    unsafe extern "system" fn count_drop(_: sys::Space) -> sys::XrResult {
        DROP_DESTROYS.fetch_add(1, Ordering::SeqCst);
        sys::XrResult::SUCCESS
    }

    #[test]
    fn moving_then_dropping_destroys_once() {
        let owner = make(0xA11CE, count_drop);
        let moved = owner;
        assert_eq!(DROP_DESTROYS.load(Ordering::SeqCst), 0);
        drop(moved);
        assert_eq!(DROP_DESTROYS.load(Ordering::SeqCst), 1);
    }

    static RELEASE_DESTROYS: AtomicUsize = AtomicUsize::new(0);
    unsafe extern "system" fn count_release(_: sys::Space) -> sys::XrResult {
        RELEASE_DESTROYS.fetch_add(1, Ordering::SeqCst);
        sys::XrResult::SUCCESS
    }

    #[test]
    fn release_hands_ownership_back() {
        let mut owner = make(0xBEA7, count_release);
        let raw = owner.release();
        assert_eq!(raw, sys::Space::from_raw(0xBEA7));
        assert!(owner.is_null());
        drop(owner);
        assert_eq!(RELEASE_DESTROYS.load(Ordering::SeqCst), 0);
    }

    static RESET_DESTROYS: AtomicUsize = AtomicUsize::new(0);
    unsafe extern "system" fn count_reset(_: sys::Space) -> sys::XrResult {
        RESET_DESTROYS.fetch_add(1, Ordering::SeqCst);
        sys::XrResult::SUCCESS
    }

    #[test]
    fn reset_destroys_the_old_value_first() {
        let mut owner = make(0x1, count_reset);
        unsafe { owner.reset(sys::Space::from_raw(0x2)) };
        assert_eq!(RESET_DESTROYS.load(Ordering::SeqCst), 1);
        // Resetting to the value already held is a no-op.
        unsafe { owner.reset(sys::Space::from_raw(0x2)) };
        assert_eq!(RESET_DESTROYS.load(Ordering::SeqCst), 1);
        drop(owner);
        assert_eq!(RESET_DESTROYS.load(Ordering::SeqCst), 2);
    }

    static NULL_DESTROYS: AtomicUsize = AtomicUsize::new(0);
    unsafe extern "system" fn count_null(_: sys::Space) -> sys::XrResult {
        NULL_DESTROYS.fetch_add(1, Ordering::SeqCst);
        sys::XrResult::SUCCESS
    }

    #[test]
    fn null_wrappers_never_destroy() {
        let owner: OwnedHandle<sys::Space> = OwnedHandle::null(count_null);
        assert!(owner.is_null());
        drop(owner);
        assert_eq!(NULL_DESTROYS.load(Ordering::SeqCst), 0);
    }
}
