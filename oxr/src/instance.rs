//! Instance-scoped call wrappers.

use crate::dispatch::DispatchTable;
use crate::error::{OxrError, Result, XrError};
use crate::handle::OwnedHandle;
use crate::result::{ResultContext, Success};
use crate::session::Session;
use crate::two_call::two_call_vec;
use oxr_sys as sys;
use std::ptr;

/// A live `XrInstance` bundled with its dispatch table and result policy.
///
/// Dropping the instance destroys the underlying handle; the runtime takes
/// everything created under it down with it, which is why the session and
/// resource wrappers borrow the instance they came from.
pub struct Instance {
    handle: OwnedHandle<sys::Instance>,
    table: DispatchTable,
    cx: ResultContext,
}

impl Instance {
    pub(crate) fn from_parts(
        handle: OwnedHandle<sys::Instance>,
        table: DispatchTable,
        cx: ResultContext,
    ) -> Self {
        Self { handle, table, cx }
    }

    #[inline]
    pub fn as_raw(&self) -> sys::Instance {
        self.handle.as_raw()
    }

    /// The dispatch table, for raw passthrough access to any entry point.
    #[inline]
    pub fn table(&self) -> &DispatchTable {
        &self.table
    }

    #[inline]
    pub(crate) fn result_context(&self) -> &ResultContext {
        &self.cx
    }

    /// Disarms the drop-time destroy and hands the raw handle back.
    pub fn release(mut self) -> sys::Instance {
        self.handle.release()
    }

    /// `xrGetInstanceProperties`
    pub fn properties(&self) -> Result<Success<sys::InstanceProperties>> {
        let pfn = self.table.get_instance_properties()?;
        let mut out = sys::InstanceProperties::out(ptr::null_mut());
        let status = unsafe { pfn(self.as_raw(), &mut out) };
        self.cx.value(status, out, "xrGetInstanceProperties")
    }

    /// `xrGetSystem`
    pub fn system(&self, form_factor: sys::FormFactor) -> Result<Success<sys::SystemId>> {
        let pfn = self.table.get_system()?;
        let info = sys::SystemGetInfo {
            ty: sys::StructureType::SYSTEM_GET_INFO,
            next: ptr::null(),
            form_factor,
        };
        let mut system = sys::SystemId::NULL;
        let status = unsafe { pfn(self.as_raw(), &info, &mut system) };
        self.cx.value(status, system, "xrGetSystem")
    }

    /// `xrPollEvent`. Rewrites `buffer` as a fresh event buffer before the
    /// call; the value is `true` when an event was written into it,
    /// `false` on `XR_EVENT_UNAVAILABLE`.
    pub fn poll_event(&self, buffer: &mut sys::EventDataBuffer) -> Result<Success<bool>> {
        let pfn = self.table.poll_event()?;
        *buffer = sys::EventDataBuffer::out(ptr::null());
        let status = unsafe { pfn(self.as_raw(), buffer) };
        self.cx
            .value_in(status, (), &[sys::XrResult::EVENT_UNAVAILABLE], "xrPollEvent")
            .map(|success| Success {
                status: success.status,
                value: success.status != sys::XrResult::EVENT_UNAVAILABLE,
            })
    }

    /// `xrEnumerateViewConfigurations`
    pub fn enumerate_view_configurations(
        &self,
        system: sys::SystemId,
    ) -> Result<Success<Vec<sys::ViewConfigurationType>>> {
        let pfn = self.table.enumerate_view_configurations()?;
        let instance = self.as_raw();
        two_call_vec(
            &self.cx,
            "xrEnumerateViewConfigurations",
            &[],
            sys::ViewConfigurationType::from_raw(0),
            |capacity, count, buffer| unsafe { pfn(instance, system, capacity, count, buffer) },
        )
    }

    /// `xrEnumerateViewConfigurationViews`
    pub fn enumerate_view_configuration_views(
        &self,
        system: sys::SystemId,
        view_configuration_type: sys::ViewConfigurationType,
    ) -> Result<Success<Vec<sys::ViewConfigurationView>>> {
        let pfn = self.table.enumerate_view_configuration_views()?;
        let instance = self.as_raw();
        two_call_vec(
            &self.cx,
            "xrEnumerateViewConfigurationViews",
            &[],
            sys::ViewConfigurationView::out(ptr::null_mut()),
            |capacity, count, buffer| unsafe {
                pfn(
                    instance,
                    system,
                    view_configuration_type,
                    capacity,
                    count,
                    buffer,
                )
            },
        )
    }

    /// `xrCreateSession`, raw-handle form: the caller owns destruction.
    pub fn create_session_raw(
        &self,
        create_info: &sys::SessionCreateInfo,
    ) -> Result<Success<sys::Session>> {
        let pfn = self.table.create_session()?;
        let mut raw = sys::Session::NULL;
        let status = unsafe { pfn(self.as_raw(), create_info, &mut raw) };
        self.cx.value_in(
            status,
            raw,
            &[sys::XrResult::SESSION_LOSS_PENDING],
            "xrCreateSession",
        )
    }

    /// `xrCreateSession`, owning form: the session destroys itself on drop
    /// via the destroy entry point captured here.
    pub fn create_session(&self, create_info: &sys::SessionCreateInfo) -> Result<Session<'_>> {
        let created = self.create_session_raw(create_info)?;
        if created.value.is_null() {
            return Err(OxrError::Xr {
                op: "xrCreateSession",
                source: XrError::from_raw(created.status),
            });
        }
        let destroy = self.table.destroy_session()?;
        let handle = unsafe { OwnedHandle::new(created.value, destroy) };
        Ok(Session::from_parts(handle, self))
    }
}
