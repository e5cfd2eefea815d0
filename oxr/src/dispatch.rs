//! Entry point resolution and caching.
//!
//! Every callable operation in the API is reached through the root resolver,
//! `xrGetInstanceProcAddr`. [`DispatchTable`] owns one slot per known entry
//! point; a slot is populated the first time its typed accessor runs and is
//! then reused for the lifetime of the table. Addresses are scoped to the
//! instance the table was built for and die with it.
//!
//! All slots hold the type-erased [`pfn::VoidFunction`](sys::pfn::VoidFunction)
//! form; the cast back to the true signature happens in the accessor the
//! `dispatch_table!` macro generates and nowhere else.

use crate::error::{OxrError, Result};
use oxr_sys as sys;
use rustc_hash::FxHashMap;
use std::ffi::{CStr, CString};
use std::mem;
use std::sync::{Mutex, OnceLock};

// Vendor-suffixed entry points spell the suffix separately (`: FB`) so the
// generated method ident comes out as `_fb` rather than `_f_b`.
macro_rules! dispatch_table {
    ($($kind:ident $pfn:ident $(: $vendor:ident)?;)*) => { ::paste::paste! {
        #[derive(Default)]
        struct Slots {
            $([<$pfn:snake $(_ $vendor:lower)?>]: OnceLock<Option<sys::pfn::VoidFunction>>,)*
        }

        impl DispatchTable {
            $(
                #[doc = concat!("Typed accessor for `xr", stringify!($pfn), $(stringify!($vendor),)? "`, resolving it on first use.")]
                pub fn [<$pfn:snake $(_ $vendor:lower)?>](&self) -> Result<sys::pfn::[<$pfn $($vendor)?>]> {
                    let slot = self
                        .slots
                        .[<$pfn:snake $(_ $vendor:lower)?>]
                        .get_or_init(|| {
                            self.query(concat!("xr", stringify!($pfn), $(stringify!($vendor),)? "\0"))
                        });
                    match *slot {
                        Some(f) => Ok(unsafe {
                            mem::transmute::<sys::pfn::VoidFunction, sys::pfn::[<$pfn $($vendor)?>]>(f)
                        }),
                        None => Err(OxrError::FunctionUnavailable(
                            concat!("xr", stringify!($pfn) $(, stringify!($vendor))?).to_owned(),
                        )),
                    }
                }
            )*

            /// Resolves every known entry point now instead of on first use,
            /// so a missing mandatory one surfaces immediately. Entry points
            /// that belong to extensions may legitimately be absent and do
            /// not fail the bulk load.
            pub fn load_all(&self) -> Result<()> {
                $(dispatch_table!(@load $kind, self.[<$pfn:snake $(_ $vendor:lower)?>]());)*
                Ok(())
            }
        }
    } };
    (@load mandatory, $call:expr) => { $call?; };
    (@load optional, $call:expr) => { let _ = $call; };
}

/// Cache of resolved entry point addresses for one instance.
///
/// Lazily constructed tables resolve each entry point the first time it is
/// asked for; [`DispatchTable::fully_populated`] resolves everything up
/// front. Either way an address is queried from the runtime at most once and
/// the answer, including "not implemented", is kept for the lifetime of the
/// table.
pub struct DispatchTable {
    get_instance_proc_addr: sys::pfn::GetInstanceProcAddr,
    instance: sys::Instance,
    slots: Slots,
    /// Names outside the generated slots, e.g. extension entry points probed
    /// by name.
    dynamic: Mutex<FxHashMap<CString, Option<sys::pfn::VoidFunction>>>,
}

impl DispatchTable {
    /// A lazily populated table. `instance` may be null, in which case only
    /// the entry points the resolver serves without an instance will ever
    /// resolve.
    pub fn new(
        instance: sys::Instance,
        get_instance_proc_addr: sys::pfn::GetInstanceProcAddr,
    ) -> Self {
        Self {
            get_instance_proc_addr,
            instance,
            slots: Slots::default(),
            dynamic: Mutex::new(FxHashMap::default()),
        }
    }

    /// An eagerly populated table; the eager variant of [`DispatchTable::new`].
    ///
    /// Resolution is instance-scoped, so this requires a live instance and
    /// reports the first mandatory entry point the runtime fails to serve.
    pub fn fully_populated(
        instance: sys::Instance,
        get_instance_proc_addr: sys::pfn::GetInstanceProcAddr,
    ) -> Result<Self> {
        if instance.is_null() {
            return Err(OxrError::NullInstance);
        }
        let table = Self::new(instance, get_instance_proc_addr);
        table.load_all()?;
        Ok(table)
    }

    #[inline]
    pub fn instance(&self) -> sys::Instance {
        self.instance
    }

    #[inline]
    pub fn get_instance_proc_addr(&self) -> sys::pfn::GetInstanceProcAddr {
        self.get_instance_proc_addr
    }

    /// Resolves an entry point the table has no typed slot for, caching the
    /// answer by name. Useful for extension entry points negotiated at run
    /// time; the caller is responsible for casting to the right signature.
    pub fn resolve(&self, name: &CStr) -> Result<sys::pfn::VoidFunction> {
        let unavailable = || OxrError::FunctionUnavailable(name.to_string_lossy().into_owned());

        let mut cache = self.dynamic.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(cached) = cache.get(name) {
            return cached.ok_or_else(unavailable);
        }

        let mut function = None;
        let status = unsafe {
            (self.get_instance_proc_addr)(self.instance, name.as_ptr(), &mut function)
        };
        let resolved = if status.is_error() { None } else { function };
        cache.insert(name.to_owned(), resolved);
        resolved.ok_or_else(unavailable)
    }

    /// One resolver round trip. `name_z` is nul-terminated.
    fn query(&self, name_z: &'static str) -> Option<sys::pfn::VoidFunction> {
        let mut function = None;
        let status = unsafe {
            (self.get_instance_proc_addr)(
                self.instance,
                name_z.as_ptr().cast(),
                &mut function,
            )
        };
        if status.is_error() {
            return None;
        }
        // A success status with no address is a broken resolver, not a
        // recoverable condition.
        assert!(
            function.is_some(),
            "resolver reported {:?} for {} without an address",
            status,
            &name_z[..name_z.len() - 1]
        );
        function
    }
}

dispatch_table! {
    mandatory EnumerateApiLayerProperties;
    mandatory EnumerateInstanceExtensionProperties;
    mandatory CreateInstance;
    mandatory DestroyInstance;
    mandatory GetInstanceProperties;
    mandatory PollEvent;
    mandatory GetSystem;
    mandatory EnumerateViewConfigurations;
    mandatory EnumerateViewConfigurationViews;
    mandatory CreateSession;
    mandatory DestroySession;
    mandatory BeginSession;
    mandatory EndSession;
    mandatory RequestExitSession;
    mandatory WaitFrame;
    mandatory EnumerateReferenceSpaces;
    mandatory CreateReferenceSpace;
    mandatory DestroySpace;
    mandatory EnumerateSwapchainFormats;
    mandatory CreateSwapchain;
    mandatory DestroySwapchain;
    optional EnumerateDisplayRefreshRates: FB;
    optional RequestDisplayRefreshRate: FB;
}

#[cfg(test)]
mod test {
    use super::*;
    use std::os::raw::c_char;
    use std::sync::atomic::{AtomicUsize, Ordering};

    unsafe extern "system" fn noop_entry() {}

    fn name_of(ptr: *const c_char) -> &'static str {
        unsafe { CStr::from_ptr(ptr) }.to_str().unwrap()
    }

    static CACHED_RESOLVES: AtomicUsize = AtomicUsize::new(0);
    unsafe extern "system" fn counting_gipa(
        _instance: sys::Instance,
        _name: *const c_char,
        function: *mut Option<sys::pfn::VoidFunction>,
    ) -> sys::XrResult {
        CACHED_RESOLVES.fetch_add(1, Ordering::SeqCst);
        unsafe { *function = Some(noop_entry) };
        sys::XrResult::SUCCESS
    }

    #[test]
    fn resolution_happens_once_per_entry_point() {
        let table = DispatchTable::new(sys::Instance::from_raw(0x1), counting_gipa);
        table.begin_session().unwrap();
        table.begin_session().unwrap();
        table.begin_session().unwrap();
        assert_eq!(CACHED_RESOLVES.load(Ordering::SeqCst), 1);
        // A different entry point still costs one round trip.
        table.end_session().unwrap();
        assert_eq!(CACHED_RESOLVES.load(Ordering::SeqCst), 2);
    }

    unsafe extern "system" fn partial_gipa(
        _instance: sys::Instance,
        name: *const c_char,
        function: *mut Option<sys::pfn::VoidFunction>,
    ) -> sys::XrResult {
        if name_of(name).ends_with("FB") {
            return sys::XrResult::ERROR_FUNCTION_UNSUPPORTED;
        }
        unsafe { *function = Some(noop_entry) };
        sys::XrResult::SUCCESS
    }

    #[test]
    fn unsupported_entry_points_are_reported_by_name() {
        let table = DispatchTable::new(sys::Instance::from_raw(0x1), partial_gipa);
        match table.enumerate_display_refresh_rates_fb() {
            Err(OxrError::FunctionUnavailable(name)) => {
                assert_eq!(name, "xrEnumerateDisplayRefreshRatesFB");
            }
            other => panic!("expected FunctionUnavailable, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn eager_population_needs_an_instance() {
        assert!(matches!(
            DispatchTable::fully_populated(sys::Instance::NULL, partial_gipa),
            Err(OxrError::NullInstance)
        ));
    }

    unsafe extern "system" fn missing_wait_frame_gipa(
        _instance: sys::Instance,
        name: *const c_char,
        function: *mut Option<sys::pfn::VoidFunction>,
    ) -> sys::XrResult {
        if name_of(name) == "xrWaitFrame" {
            return sys::XrResult::ERROR_FUNCTION_UNSUPPORTED;
        }
        unsafe { *function = Some(noop_entry) };
        sys::XrResult::SUCCESS
    }

    #[test]
    fn eager_population_surfaces_missing_mandatory_entry_points() {
        match DispatchTable::fully_populated(sys::Instance::from_raw(0x1), missing_wait_frame_gipa)
        {
            Err(OxrError::FunctionUnavailable(name)) => assert_eq!(name, "xrWaitFrame"),
            _ => panic!("expected the bulk load to fail on xrWaitFrame"),
        }
    }

    #[test]
    fn missing_optional_entry_points_do_not_fail_bulk_load() {
        let table =
            DispatchTable::fully_populated(sys::Instance::from_raw(0x1), partial_gipa).unwrap();
        assert!(table.enumerate_display_refresh_rates_fb().is_err());
        assert!(table.wait_frame().is_ok());
    }

    #[test]
    fn dynamic_resolution_caches_by_name() {
        static DYNAMIC_RESOLVES: AtomicUsize = AtomicUsize::new(0);
        unsafe extern "system" fn dynamic_gipa(
            _instance: sys::Instance,
            name: *const c_char,
            function: *mut Option<sys::pfn::VoidFunction>,
        ) -> sys::XrResult {
            DYNAMIC_RESOLVES.fetch_add(1, Ordering::SeqCst);
            if name_of(name) == "xrOptionalFeatureX" {
                return sys::XrResult::ERROR_FUNCTION_UNSUPPORTED;
            }
            unsafe { *function = Some(noop_entry) };
            sys::XrResult::SUCCESS
        }

        let table = DispatchTable::new(sys::Instance::from_raw(0x1), dynamic_gipa);
        let name = CString::new("xrOptionalFeatureX").unwrap();
        assert!(table.resolve(&name).is_err());
        assert!(table.resolve(&name).is_err());
        assert_eq!(DYNAMIC_RESOLVES.load(Ordering::SeqCst), 1);

        let name = CString::new("xrSupportedFeatureY").unwrap();
        assert!(table.resolve(&name).is_ok());
        assert_eq!(DYNAMIC_RESOLVES.load(Ordering::SeqCst), 2);
    }
}
