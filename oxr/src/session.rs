//! Session-scoped call wrappers.
//!
//! Most session operations keep working while the runtime is tearing the
//! session down, reporting `XR_SESSION_LOSS_PENDING` instead of failing;
//! that code is in the accepted set of every wrapper here and stays visible
//! in the returned [`Success`].

use crate::error::{OxrError, Result, XrError};
use crate::handle::OwnedHandle;
use crate::instance::Instance;
use crate::result::Success;
use crate::two_call::two_call_vec;
use oxr_sys as sys;
use std::ptr;

const SESSION_SUCCESSES: &[sys::XrResult] = &[sys::XrResult::SESSION_LOSS_PENDING];

/// A live `XrSession`, destroyed on drop.
pub struct Session<'a> {
    handle: OwnedHandle<sys::Session>,
    instance: &'a Instance,
}

impl<'a> Session<'a> {
    pub(crate) fn from_parts(handle: OwnedHandle<sys::Session>, instance: &'a Instance) -> Self {
        Self { handle, instance }
    }

    #[inline]
    pub fn as_raw(&self) -> sys::Session {
        self.handle.as_raw()
    }

    #[inline]
    pub fn instance(&self) -> &Instance {
        self.instance
    }

    /// Disarms the drop-time destroy and hands the raw handle back.
    pub fn release(mut self) -> sys::Session {
        self.handle.release()
    }

    /// `xrBeginSession`
    pub fn begin(
        &self,
        primary_view_configuration_type: sys::ViewConfigurationType,
    ) -> Result<sys::XrResult> {
        let pfn = self.instance.table().begin_session()?;
        let info = sys::SessionBeginInfo {
            ty: sys::StructureType::SESSION_BEGIN_INFO,
            next: ptr::null(),
            primary_view_configuration_type,
        };
        let status = unsafe { pfn(self.as_raw(), &info) };
        self.instance
            .result_context()
            .status_in(status, SESSION_SUCCESSES, "xrBeginSession")
    }

    /// `xrEndSession`
    pub fn end(&self) -> Result<sys::XrResult> {
        let pfn = self.instance.table().end_session()?;
        let status = unsafe { pfn(self.as_raw()) };
        self.instance
            .result_context()
            .status_in(status, SESSION_SUCCESSES, "xrEndSession")
    }

    /// `xrRequestExitSession`
    pub fn request_exit(&self) -> Result<sys::XrResult> {
        let pfn = self.instance.table().request_exit_session()?;
        let status = unsafe { pfn(self.as_raw()) };
        self.instance
            .result_context()
            .status_in(status, SESSION_SUCCESSES, "xrRequestExitSession")
    }

    /// `xrWaitFrame`. Blocks for as long as the runtime wants to pace the
    /// frame loop; that latency belongs to the runtime and is not timed out
    /// here.
    pub fn wait_frame(&self) -> Result<Success<sys::FrameState>> {
        let pfn = self.instance.table().wait_frame()?;
        let info = sys::FrameWaitInfo::default();
        let mut state = sys::FrameState::out(ptr::null_mut());
        let status = unsafe { pfn(self.as_raw(), &info, &mut state) };
        self.instance
            .result_context()
            .value_in(status, state, SESSION_SUCCESSES, "xrWaitFrame")
    }

    /// `xrEnumerateReferenceSpaces`
    pub fn enumerate_reference_spaces(&self) -> Result<Success<Vec<sys::ReferenceSpaceType>>> {
        let pfn = self.instance.table().enumerate_reference_spaces()?;
        let session = self.as_raw();
        two_call_vec(
            self.instance.result_context(),
            "xrEnumerateReferenceSpaces",
            SESSION_SUCCESSES,
            sys::ReferenceSpaceType::from_raw(0),
            |capacity, count, buffer| unsafe { pfn(session, capacity, count, buffer) },
        )
    }

    /// `xrEnumerateSwapchainFormats`. Formats are graphics-API-specific
    /// values, in the runtime's order of preference.
    pub fn enumerate_swapchain_formats(&self) -> Result<Success<Vec<i64>>> {
        let pfn = self.instance.table().enumerate_swapchain_formats()?;
        let session = self.as_raw();
        two_call_vec(
            self.instance.result_context(),
            "xrEnumerateSwapchainFormats",
            SESSION_SUCCESSES,
            0i64,
            |capacity, count, buffer| unsafe { pfn(session, capacity, count, buffer) },
        )
    }

    /// `xrCreateReferenceSpace`, raw-handle form.
    pub fn create_reference_space_raw(
        &self,
        create_info: &sys::ReferenceSpaceCreateInfo,
    ) -> Result<Success<sys::Space>> {
        let pfn = self.instance.table().create_reference_space()?;
        let mut raw = sys::Space::NULL;
        let status = unsafe { pfn(self.as_raw(), create_info, &mut raw) };
        self.instance.result_context().value_in(
            status,
            raw,
            SESSION_SUCCESSES,
            "xrCreateReferenceSpace",
        )
    }

    /// `xrCreateReferenceSpace`, owning form.
    pub fn create_reference_space(
        &self,
        create_info: &sys::ReferenceSpaceCreateInfo,
    ) -> Result<Space<'_>> {
        let created = self.create_reference_space_raw(create_info)?;
        if created.value.is_null() {
            return Err(OxrError::Xr {
                op: "xrCreateReferenceSpace",
                source: XrError::from_raw(created.status),
            });
        }
        let destroy = self.instance.table().destroy_space()?;
        let handle = unsafe { OwnedHandle::new(created.value, destroy) };
        Ok(Space {
            handle,
            _session: self,
        })
    }

    /// `xrCreateSwapchain`, raw-handle form.
    pub fn create_swapchain_raw(
        &self,
        create_info: &sys::SwapchainCreateInfo,
    ) -> Result<Success<sys::Swapchain>> {
        let pfn = self.instance.table().create_swapchain()?;
        let mut raw = sys::Swapchain::NULL;
        let status = unsafe { pfn(self.as_raw(), create_info, &mut raw) };
        self.instance.result_context().value_in(
            status,
            raw,
            SESSION_SUCCESSES,
            "xrCreateSwapchain",
        )
    }

    /// `xrCreateSwapchain`, owning form.
    pub fn create_swapchain(
        &self,
        create_info: &sys::SwapchainCreateInfo,
    ) -> Result<Swapchain<'_>> {
        let created = self.create_swapchain_raw(create_info)?;
        if created.value.is_null() {
            return Err(OxrError::Xr {
                op: "xrCreateSwapchain",
                source: XrError::from_raw(created.status),
            });
        }
        let destroy = self.instance.table().destroy_swapchain()?;
        let handle = unsafe { OwnedHandle::new(created.value, destroy) };
        Ok(Swapchain {
            handle,
            _session: self,
        })
    }

    /// `xrEnumerateDisplayRefreshRatesFB` (`XR_FB_display_refresh_rate`).
    /// Fails with [`OxrError::FunctionUnavailable`] before touching the
    /// runtime when the extension is not implemented.
    pub fn enumerate_display_refresh_rates(&self) -> Result<Success<Vec<f32>>> {
        let pfn = self.instance.table().enumerate_display_refresh_rates_fb()?;
        let session = self.as_raw();
        two_call_vec(
            self.instance.result_context(),
            "xrEnumerateDisplayRefreshRatesFB",
            SESSION_SUCCESSES,
            0f32,
            |capacity, count, buffer| unsafe { pfn(session, capacity, count, buffer) },
        )
    }

    /// `xrRequestDisplayRefreshRateFB` (`XR_FB_display_refresh_rate`).
    pub fn request_display_refresh_rate(&self, rate: f32) -> Result<sys::XrResult> {
        let pfn = self.instance.table().request_display_refresh_rate_fb()?;
        let status = unsafe { pfn(self.as_raw(), rate) };
        self.instance.result_context().status_in(
            status,
            SESSION_SUCCESSES,
            "xrRequestDisplayRefreshRateFB",
        )
    }
}

/// A live `XrSpace`, destroyed on drop. The runtime destroys spaces
/// implicitly with their session; the borrow keeps this wrapper from
/// outliving it.
pub struct Space<'s> {
    handle: OwnedHandle<sys::Space>,
    _session: &'s Session<'s>,
}

impl Space<'_> {
    #[inline]
    pub fn as_raw(&self) -> sys::Space {
        self.handle.as_raw()
    }

    /// Disarms the drop-time destroy and hands the raw handle back.
    pub fn release(mut self) -> sys::Space {
        self.handle.release()
    }
}

/// A live `XrSwapchain`, destroyed on drop.
pub struct Swapchain<'s> {
    handle: OwnedHandle<sys::Swapchain>,
    _session: &'s Session<'s>,
}

impl std::fmt::Debug for Swapchain<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Swapchain")
            .field("handle", &self.handle)
            .finish()
    }
}

impl Swapchain<'_> {
    #[inline]
    pub fn as_raw(&self) -> sys::Swapchain {
        self.handle.as_raw()
    }

    /// Disarms the drop-time destroy and hands the raw handle back.
    pub fn release(mut self) -> sys::Swapchain {
        self.handle.release()
    }
}
