//! Function pointer signatures for the entry points reachable through
//! [`GetInstanceProcAddr`].
//!
//! Every pointer handed back by the resolver is type-erased to
//! [`VoidFunction`] on the wire; the aliases here are the true signatures it
//! must be cast back to before the call.

use crate::*;
use std::os::raw::c_char;

/// `PFN_xrVoidFunction`: the type-erased form every resolved address is
/// returned as.
pub type VoidFunction = unsafe extern "system" fn();

/// `PFN_xrGetInstanceProcAddr`: the root resolver.
pub type GetInstanceProcAddr = unsafe extern "system" fn(
    instance: Instance,
    name: *const c_char,
    function: *mut Option<VoidFunction>,
) -> XrResult;

pub type EnumerateApiLayerProperties = unsafe extern "system" fn(
    property_capacity_input: u32,
    property_count_output: *mut u32,
    properties: *mut ApiLayerProperties,
) -> XrResult;

pub type EnumerateInstanceExtensionProperties = unsafe extern "system" fn(
    layer_name: *const c_char,
    property_capacity_input: u32,
    property_count_output: *mut u32,
    properties: *mut ExtensionProperties,
) -> XrResult;

pub type CreateInstance = unsafe extern "system" fn(
    create_info: *const InstanceCreateInfo,
    instance: *mut Instance,
) -> XrResult;

pub type DestroyInstance = unsafe extern "system" fn(instance: Instance) -> XrResult;

pub type GetInstanceProperties = unsafe extern "system" fn(
    instance: Instance,
    instance_properties: *mut InstanceProperties,
) -> XrResult;

pub type PollEvent =
    unsafe extern "system" fn(instance: Instance, event_data: *mut EventDataBuffer) -> XrResult;

pub type GetSystem = unsafe extern "system" fn(
    instance: Instance,
    get_info: *const SystemGetInfo,
    system_id: *mut SystemId,
) -> XrResult;

pub type EnumerateViewConfigurations = unsafe extern "system" fn(
    instance: Instance,
    system_id: SystemId,
    view_configuration_type_capacity_input: u32,
    view_configuration_type_count_output: *mut u32,
    view_configuration_types: *mut ViewConfigurationType,
) -> XrResult;

pub type EnumerateViewConfigurationViews = unsafe extern "system" fn(
    instance: Instance,
    system_id: SystemId,
    view_configuration_type: ViewConfigurationType,
    view_capacity_input: u32,
    view_count_output: *mut u32,
    views: *mut ViewConfigurationView,
) -> XrResult;

pub type CreateSession = unsafe extern "system" fn(
    instance: Instance,
    create_info: *const SessionCreateInfo,
    session: *mut Session,
) -> XrResult;

pub type DestroySession = unsafe extern "system" fn(session: Session) -> XrResult;

pub type BeginSession =
    unsafe extern "system" fn(session: Session, begin_info: *const SessionBeginInfo) -> XrResult;

pub type EndSession = unsafe extern "system" fn(session: Session) -> XrResult;

pub type RequestExitSession = unsafe extern "system" fn(session: Session) -> XrResult;

pub type WaitFrame = unsafe extern "system" fn(
    session: Session,
    frame_wait_info: *const FrameWaitInfo,
    frame_state: *mut FrameState,
) -> XrResult;

pub type EnumerateReferenceSpaces = unsafe extern "system" fn(
    session: Session,
    space_capacity_input: u32,
    space_count_output: *mut u32,
    spaces: *mut ReferenceSpaceType,
) -> XrResult;

pub type CreateReferenceSpace = unsafe extern "system" fn(
    session: Session,
    create_info: *const ReferenceSpaceCreateInfo,
    space: *mut Space,
) -> XrResult;

pub type DestroySpace = unsafe extern "system" fn(space: Space) -> XrResult;

pub type EnumerateSwapchainFormats = unsafe extern "system" fn(
    session: Session,
    format_capacity_input: u32,
    format_count_output: *mut u32,
    formats: *mut i64,
) -> XrResult;

pub type CreateSwapchain = unsafe extern "system" fn(
    session: Session,
    create_info: *const SwapchainCreateInfo,
    swapchain: *mut Swapchain,
) -> XrResult;

pub type DestroySwapchain = unsafe extern "system" fn(swapchain: Swapchain) -> XrResult;

// XR_FB_display_refresh_rate

pub type EnumerateDisplayRefreshRatesFB = unsafe extern "system" fn(
    session: Session,
    display_refresh_rate_capacity_input: u32,
    display_refresh_rate_count_output: *mut u32,
    display_refresh_rates: *mut f32,
) -> XrResult;

pub type RequestDisplayRefreshRateFB =
    unsafe extern "system" fn(session: Session, display_refresh_rate: f32) -> XrResult;
