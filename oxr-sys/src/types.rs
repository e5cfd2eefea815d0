//! Mirrored enumerations, flag bits, and POD structs.
//!
//! Enumerations are newtypes over their wire representation rather than Rust
//! enums so that values this crate does not know about still round-trip
//! through the ABI unchanged.

use crate::{Bool32, Duration, SystemId, Time, Version};
use std::ffi::c_void;
use std::mem;
use std::os::raw::c_char;

macro_rules! define_enum {
    ($(#[$meta:meta])* $name:ident($repr:ty) { $($variant:ident = $value:expr,)* }) => {
        $(#[$meta])*
        #[repr(transparent)]
        #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
        pub struct $name(pub $repr);

        impl $name {
            $(pub const $variant: Self = Self($value);)*

            #[inline]
            pub const fn from_raw(raw: $repr) -> Self {
                Self(raw)
            }

            #[inline]
            pub const fn into_raw(self) -> $repr {
                self.0
            }
        }
    };
}

define_enum! {
    /// `XrStructureType`: the tag in the `ty`/`next` header of every chained struct.
    StructureType(i32) {
        UNKNOWN = 0,
        API_LAYER_PROPERTIES = 1,
        EXTENSION_PROPERTIES = 2,
        INSTANCE_CREATE_INFO = 3,
        SYSTEM_GET_INFO = 4,
        SYSTEM_PROPERTIES = 5,
        VIEW_LOCATE_INFO = 6,
        VIEW = 7,
        SESSION_CREATE_INFO = 8,
        SWAPCHAIN_CREATE_INFO = 9,
        SESSION_BEGIN_INFO = 10,
        VIEW_STATE = 11,
        FRAME_END_INFO = 12,
        HAPTIC_VIBRATION = 13,
        EVENT_DATA_BUFFER = 16,
        EVENT_DATA_INSTANCE_LOSS_PENDING = 17,
        EVENT_DATA_SESSION_STATE_CHANGED = 18,
        ACTION_STATE_BOOLEAN = 23,
        ACTION_STATE_FLOAT = 24,
        ACTION_STATE_VECTOR2F = 25,
        ACTION_STATE_POSE = 27,
        ACTION_SET_CREATE_INFO = 28,
        ACTION_CREATE_INFO = 29,
        INSTANCE_PROPERTIES = 32,
        FRAME_WAIT_INFO = 33,
        COMPOSITION_LAYER_PROJECTION = 35,
        COMPOSITION_LAYER_QUAD = 36,
        REFERENCE_SPACE_CREATE_INFO = 37,
        ACTION_SPACE_CREATE_INFO = 38,
        EVENT_DATA_REFERENCE_SPACE_CHANGE_PENDING = 40,
        VIEW_CONFIGURATION_VIEW = 41,
        SPACE_LOCATION = 42,
        SPACE_VELOCITY = 43,
        FRAME_STATE = 44,
        VIEW_CONFIGURATION_PROPERTIES = 45,
        FRAME_BEGIN_INFO = 46,
        COMPOSITION_LAYER_PROJECTION_VIEW = 48,
        EVENT_DATA_EVENTS_LOST = 49,
        INTERACTION_PROFILE_SUGGESTED_BINDING = 51,
        EVENT_DATA_INTERACTION_PROFILE_CHANGED = 52,
        INTERACTION_PROFILE_STATE = 53,
        SWAPCHAIN_IMAGE_ACQUIRE_INFO = 55,
        SWAPCHAIN_IMAGE_WAIT_INFO = 56,
        SWAPCHAIN_IMAGE_RELEASE_INFO = 57,
        ACTION_STATE_GET_INFO = 58,
        HAPTIC_ACTION_INFO = 59,
        SESSION_ACTION_SETS_ATTACH_INFO = 60,
        ACTIONS_SYNC_INFO = 61,
    }
}

define_enum! {
    /// `XrObjectType`
    ObjectType(i32) {
        UNKNOWN = 0,
        INSTANCE = 1,
        SESSION = 2,
        SWAPCHAIN = 3,
        SPACE = 4,
        ACTION_SET = 5,
        ACTION = 6,
    }
}

define_enum! {
    /// `XrFormFactor`
    FormFactor(i32) {
        HEAD_MOUNTED_DISPLAY = 1,
        HANDHELD_DISPLAY = 2,
    }
}

define_enum! {
    /// `XrViewConfigurationType`
    ViewConfigurationType(i32) {
        PRIMARY_MONO = 1,
        PRIMARY_STEREO = 2,
    }
}

define_enum! {
    /// `XrEnvironmentBlendMode`
    EnvironmentBlendMode(i32) {
        OPAQUE = 1,
        ADDITIVE = 2,
        ALPHA_BLEND = 3,
    }
}

define_enum! {
    /// `XrReferenceSpaceType`
    ReferenceSpaceType(i32) {
        VIEW = 1,
        LOCAL = 2,
        STAGE = 3,
    }
}

define_enum! {
    /// `XrSessionState`
    SessionState(i32) {
        UNKNOWN = 0,
        IDLE = 1,
        READY = 2,
        SYNCHRONIZED = 3,
        VISIBLE = 4,
        FOCUSED = 5,
        STOPPING = 6,
        LOSS_PENDING = 7,
        EXITING = 8,
    }
}

bitflags::bitflags! {
    /// `XrInstanceCreateFlags`: currently reserved.
    #[repr(transparent)]
    #[derive(Default)]
    pub struct InstanceCreateFlags: u64 {}
}

bitflags::bitflags! {
    /// `XrSessionCreateFlags`: currently reserved.
    #[repr(transparent)]
    #[derive(Default)]
    pub struct SessionCreateFlags: u64 {}
}

bitflags::bitflags! {
    /// `XrSwapchainCreateFlags`
    #[repr(transparent)]
    #[derive(Default)]
    pub struct SwapchainCreateFlags: u64 {
        const PROTECTED_CONTENT = 0x1;
        const STATIC_IMAGE = 0x2;
    }
}

bitflags::bitflags! {
    /// `XrSwapchainUsageFlags`
    #[repr(transparent)]
    #[derive(Default)]
    pub struct SwapchainUsageFlags: u64 {
        const COLOR_ATTACHMENT = 0x01;
        const DEPTH_STENCIL_ATTACHMENT = 0x02;
        const UNORDERED_ACCESS = 0x04;
        const TRANSFER_SRC = 0x08;
        const TRANSFER_DST = 0x10;
        const SAMPLED = 0x20;
        const MUTABLE_FORMAT = 0x40;
    }
}

/// `XrVector3f`
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Vector3f {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

/// `XrQuaternionf`
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Quaternionf {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Default for Quaternionf {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            z: 0.0,
            w: 1.0,
        }
    }
}

/// `XrPosef`
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Posef {
    pub orientation: Quaternionf,
    pub position: Vector3f,
}

impl Posef {
    /// The identity pose.
    pub const IDENTITY: Posef = Posef {
        orientation: Quaternionf {
            x: 0.0,
            y: 0.0,
            z: 0.0,
            w: 1.0,
        },
        position: Vector3f {
            x: 0.0,
            y: 0.0,
            z: 0.0,
        },
    };
}

/// `XrApiLayerProperties`, filled by `xrEnumerateApiLayerProperties`.
#[repr(C)]
#[derive(Copy, Clone)]
pub struct ApiLayerProperties {
    pub ty: StructureType,
    pub next: *mut c_void,
    pub layer_name: [c_char; crate::MAX_API_LAYER_NAME_SIZE],
    pub spec_version: Version,
    pub layer_version: u32,
    pub description: [c_char; crate::MAX_API_LAYER_DESCRIPTION_SIZE],
}

impl ApiLayerProperties {
    pub fn out(next: *mut c_void) -> Self {
        Self {
            ty: StructureType::API_LAYER_PROPERTIES,
            next,
            ..unsafe { mem::zeroed() }
        }
    }
}

/// `XrExtensionProperties`, filled by `xrEnumerateInstanceExtensionProperties`.
#[repr(C)]
#[derive(Copy, Clone)]
pub struct ExtensionProperties {
    pub ty: StructureType,
    pub next: *mut c_void,
    pub extension_name: [c_char; crate::MAX_EXTENSION_NAME_SIZE],
    pub extension_version: u32,
}

impl ExtensionProperties {
    pub fn out(next: *mut c_void) -> Self {
        Self {
            ty: StructureType::EXTENSION_PROPERTIES,
            next,
            ..unsafe { mem::zeroed() }
        }
    }
}

/// `XrApplicationInfo`
#[repr(C)]
#[derive(Copy, Clone)]
pub struct ApplicationInfo {
    pub application_name: [c_char; crate::MAX_APPLICATION_NAME_SIZE],
    pub application_version: u32,
    pub engine_name: [c_char; crate::MAX_ENGINE_NAME_SIZE],
    pub engine_version: u32,
    pub api_version: Version,
}

/// `XrInstanceCreateInfo`
#[repr(C)]
#[derive(Copy, Clone)]
pub struct InstanceCreateInfo {
    pub ty: StructureType,
    pub next: *const c_void,
    pub create_flags: InstanceCreateFlags,
    pub application_info: ApplicationInfo,
    pub enabled_api_layer_count: u32,
    pub enabled_api_layer_names: *const *const c_char,
    pub enabled_extension_count: u32,
    pub enabled_extension_names: *const *const c_char,
}

/// `XrInstanceProperties`, filled by `xrGetInstanceProperties`.
#[repr(C)]
#[derive(Copy, Clone)]
pub struct InstanceProperties {
    pub ty: StructureType,
    pub next: *mut c_void,
    pub runtime_version: Version,
    pub runtime_name: [c_char; crate::MAX_RUNTIME_NAME_SIZE],
}

impl InstanceProperties {
    pub fn out(next: *mut c_void) -> Self {
        Self {
            ty: StructureType::INSTANCE_PROPERTIES,
            next,
            ..unsafe { mem::zeroed() }
        }
    }
}

/// `XrSystemGetInfo`
#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct SystemGetInfo {
    pub ty: StructureType,
    pub next: *const c_void,
    pub form_factor: FormFactor,
}

/// `XrSessionCreateInfo`
#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct SessionCreateInfo {
    pub ty: StructureType,
    pub next: *const c_void,
    pub create_flags: SessionCreateFlags,
    pub system_id: SystemId,
}

/// `XrSessionBeginInfo`
#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct SessionBeginInfo {
    pub ty: StructureType,
    pub next: *const c_void,
    pub primary_view_configuration_type: ViewConfigurationType,
}

/// `XrReferenceSpaceCreateInfo`
#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct ReferenceSpaceCreateInfo {
    pub ty: StructureType,
    pub next: *const c_void,
    pub reference_space_type: ReferenceSpaceType,
    pub pose_in_reference_space: Posef,
}

/// `XrSwapchainCreateInfo`
#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct SwapchainCreateInfo {
    pub ty: StructureType,
    pub next: *const c_void,
    pub create_flags: SwapchainCreateFlags,
    pub usage_flags: SwapchainUsageFlags,
    pub format: i64,
    pub sample_count: u32,
    pub width: u32,
    pub height: u32,
    pub face_count: u32,
    pub array_size: u32,
    pub mip_count: u32,
}

/// `XrViewConfigurationView`, filled by `xrEnumerateViewConfigurationViews`.
#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct ViewConfigurationView {
    pub ty: StructureType,
    pub next: *mut c_void,
    pub recommended_image_rect_width: u32,
    pub max_image_rect_width: u32,
    pub recommended_image_rect_height: u32,
    pub max_image_rect_height: u32,
    pub recommended_swapchain_sample_count: u32,
    pub max_swapchain_sample_count: u32,
}

impl ViewConfigurationView {
    pub fn out(next: *mut c_void) -> Self {
        Self {
            ty: StructureType::VIEW_CONFIGURATION_VIEW,
            next,
            ..unsafe { mem::zeroed() }
        }
    }
}

/// `XrFrameWaitInfo`
#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct FrameWaitInfo {
    pub ty: StructureType,
    pub next: *const c_void,
}

impl Default for FrameWaitInfo {
    fn default() -> Self {
        Self {
            ty: StructureType::FRAME_WAIT_INFO,
            next: std::ptr::null(),
        }
    }
}

/// `XrFrameState`, filled by `xrWaitFrame`.
#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct FrameState {
    pub ty: StructureType,
    pub next: *mut c_void,
    pub predicted_display_time: Time,
    pub predicted_display_period: Duration,
    pub should_render: Bool32,
}

impl FrameState {
    pub fn out(next: *mut c_void) -> Self {
        Self {
            ty: StructureType::FRAME_STATE,
            next,
            ..unsafe { mem::zeroed() }
        }
    }
}

/// Size of the `varying` payload of `XrEventDataBuffer`.
pub const EVENT_DATA_BUFFER_VARYING_SIZE: usize = 4000;

/// `XrEventDataBuffer`: the universal out-structure for `xrPollEvent`.
#[repr(C)]
#[derive(Copy, Clone)]
pub struct EventDataBuffer {
    pub ty: StructureType,
    pub next: *const c_void,
    pub varying: [u8; EVENT_DATA_BUFFER_VARYING_SIZE],
}

impl EventDataBuffer {
    pub fn out(next: *const c_void) -> Self {
        Self {
            ty: StructureType::EVENT_DATA_BUFFER,
            next,
            varying: [0; EVENT_DATA_BUFFER_VARYING_SIZE],
        }
    }
}

/// `XrEventDataSessionStateChanged`, decoded from an [`EventDataBuffer`].
#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct EventDataSessionStateChanged {
    pub ty: StructureType,
    pub next: *const c_void,
    pub session: crate::Session,
    pub state: SessionState,
    pub time: Time,
}
