//! Access to the runtime before an instance exists.

use crate::dispatch::DispatchTable;
use crate::error::{OxrError, Result, XrError};
use crate::handle::OwnedHandle;
use crate::instance::Instance;
use crate::result::{AssertHook, CheckPolicy, ResultContext, Success};
use crate::two_call::two_call_vec;
use oxr_sys as sys;
use std::ffi::CStr;
use std::os::raw::c_char;
use std::ptr;

/// Construction-time switches for the binding.
#[derive(Copy, Clone, Default)]
pub struct BindingOptions {
    /// How unaccepted status codes are surfaced.
    pub policy: CheckPolicy,
    /// Replaces the failure-reporting primitive used in passthrough mode.
    pub assert_hook: Option<AssertHook>,
    /// Resolve every known entry point at instance creation instead of on
    /// first call.
    pub eager_dispatch: bool,
}

impl BindingOptions {
    fn result_context(&self) -> ResultContext {
        match self.assert_hook {
            Some(hook) => ResultContext::with_assert_hook(self.policy, hook),
            None => ResultContext::new(self.policy),
        }
    }
}

#[cfg(feature = "linked")]
extern "system" {
    fn xrGetInstanceProcAddr(
        instance: sys::Instance,
        name: *const c_char,
        function: *mut Option<sys::pfn::VoidFunction>,
    ) -> sys::XrResult;
}

/// The root of the binding: holds the resolver and serves the entry points
/// that exist before any instance does.
pub struct Entry {
    table: DispatchTable,
    cx: ResultContext,
    options: BindingOptions,
}

impl Entry {
    /// Uses the loader linked into the process as the root resolver.
    #[cfg(feature = "linked")]
    pub fn linked() -> Self {
        Self::from_resolver(xrGetInstanceProcAddr)
    }

    /// Uses a caller-supplied root resolver, e.g. one obtained from a
    /// manually loaded runtime or an API layer.
    pub fn from_resolver(get_instance_proc_addr: sys::pfn::GetInstanceProcAddr) -> Self {
        Self {
            table: DispatchTable::new(sys::Instance::NULL, get_instance_proc_addr),
            cx: ResultContext::default(),
            options: BindingOptions::default(),
        }
    }

    pub fn with_options(mut self, options: &BindingOptions) -> Self {
        self.options = *options;
        self.cx = options.result_context();
        self
    }

    /// The pre-instance dispatch table, for raw access.
    pub fn table(&self) -> &DispatchTable {
        &self.table
    }

    /// Lists the API layers installed on the system.
    pub fn enumerate_api_layers(&self) -> Result<Success<Vec<sys::ApiLayerProperties>>> {
        let pfn = self.table.enumerate_api_layer_properties()?;
        two_call_vec(
            &self.cx,
            "xrEnumerateApiLayerProperties",
            &[],
            sys::ApiLayerProperties::out(ptr::null_mut()),
            |capacity, count, buffer| unsafe { pfn(capacity, count, buffer) },
        )
    }

    /// Lists the extensions implemented by the runtime, or by one layer if
    /// `layer_name` is given.
    pub fn enumerate_extensions(
        &self,
        layer_name: Option<&CStr>,
    ) -> Result<Success<Vec<sys::ExtensionProperties>>> {
        let pfn = self.table.enumerate_instance_extension_properties()?;
        let layer = layer_name.map_or(ptr::null(), CStr::as_ptr);
        two_call_vec(
            &self.cx,
            "xrEnumerateInstanceExtensionProperties",
            &[],
            sys::ExtensionProperties::out(ptr::null_mut()),
            |capacity, count, buffer| unsafe { pfn(layer, capacity, count, buffer) },
        )
    }

    /// Creates an instance and hands back the raw handle; the caller owns
    /// its destruction.
    pub fn create_instance_raw(
        &self,
        create_info: &sys::InstanceCreateInfo,
    ) -> Result<Success<sys::Instance>> {
        let pfn = self.table.create_instance()?;
        let mut raw = sys::Instance::NULL;
        let status = unsafe { pfn(create_info, &mut raw) };
        self.cx.value(status, raw, "xrCreateInstance")
    }

    /// Creates an [`Instance`] that destroys itself on drop and carries its
    /// own dispatch table and result policy.
    pub fn create_instance(&self, create_info: &sys::InstanceCreateInfo) -> Result<Instance> {
        let created = self.create_instance_raw(create_info)?;
        if created.value.is_null() {
            // Reachable only under passthrough: there is no instance to hang
            // a binding off, whatever the policy says.
            return Err(OxrError::Xr {
                op: "xrCreateInstance",
                source: XrError::from_raw(created.status),
            });
        }

        let table = if self.options.eager_dispatch {
            DispatchTable::fully_populated(created.value, self.table.get_instance_proc_addr())?
        } else {
            DispatchTable::new(created.value, self.table.get_instance_proc_addr())
        };
        let destroy = table.destroy_instance()?;
        let handle = unsafe { OwnedHandle::new(created.value, destroy) };
        Ok(Instance::from_parts(handle, table, self.cx))
    }
}

/// Builds an `XrApplicationInfo`, truncating names to the ABI's fixed field
/// sizes.
pub fn application_info(
    application_name: &str,
    application_version: u32,
    engine_name: &str,
    engine_version: u32,
) -> sys::ApplicationInfo {
    let mut info = sys::ApplicationInfo {
        application_name: [0; sys::MAX_APPLICATION_NAME_SIZE],
        application_version,
        engine_name: [0; sys::MAX_ENGINE_NAME_SIZE],
        engine_version,
        api_version: sys::CURRENT_API_VERSION,
    };
    write_cstr(&mut info.application_name, application_name);
    write_cstr(&mut info.engine_name, engine_name);
    info
}

/// Copies `src` into a fixed-size C string field, always leaving a
/// terminating nul.
fn write_cstr(dst: &mut [c_char], src: &str) {
    let take = src.len().min(dst.len() - 1);
    for (dst, &byte) in dst.iter_mut().zip(&src.as_bytes()[..take]) {
        *dst = byte as c_char;
    }
    dst[take] = 0;
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn application_info_truncates_and_terminates() {
        let long = "x".repeat(sys::MAX_APPLICATION_NAME_SIZE + 32);
        let info = application_info(&long, 1, "engine", 2);
        assert_eq!(info.application_name[sys::MAX_APPLICATION_NAME_SIZE - 1], 0);
        assert_eq!(info.application_name[0], b'x' as c_char);
        assert_eq!(info.engine_name[6], 0);
        assert_eq!(info.api_version, sys::CURRENT_API_VERSION);
    }
}
