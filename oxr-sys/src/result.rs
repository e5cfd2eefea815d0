//! The `XrResult` status code domain.

use std::fmt;

/// `XrResult`: the signed status code returned by every entry point.
///
/// Negative values are failures, zero is unqualified success, and positive
/// values are qualified successes such as [`XrResult::TIMEOUT_EXPIRED`].
/// Runtimes may return codes this crate does not know about; those still
/// classify correctly by sign.
#[repr(transparent)]
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct XrResult(pub i32);

macro_rules! result_codes {
    ($($name:ident = $value:expr,)*) => {
        impl XrResult {
            $(pub const $name: XrResult = XrResult($value);)*

            /// The `XR_` identifier for this code, if it is a known one.
            pub fn name(self) -> Option<&'static str> {
                match self {
                    $(Self::$name => Some(concat!("XR_", stringify!($name))),)*
                    _ => None,
                }
            }
        }
    };
}

result_codes! {
    SUCCESS = 0,
    TIMEOUT_EXPIRED = 1,
    SESSION_LOSS_PENDING = 3,
    EVENT_UNAVAILABLE = 4,
    SPACE_BOUNDS_UNAVAILABLE = 7,
    SESSION_NOT_FOCUSED = 8,
    FRAME_DISCARDED = 9,
    ERROR_VALIDATION_FAILURE = -1,
    ERROR_RUNTIME_FAILURE = -2,
    ERROR_OUT_OF_MEMORY = -3,
    ERROR_API_VERSION_UNSUPPORTED = -4,
    ERROR_INITIALIZATION_FAILED = -6,
    ERROR_FUNCTION_UNSUPPORTED = -7,
    ERROR_FEATURE_UNSUPPORTED = -8,
    ERROR_EXTENSION_NOT_PRESENT = -9,
    ERROR_LIMIT_REACHED = -10,
    ERROR_SIZE_INSUFFICIENT = -11,
    ERROR_HANDLE_INVALID = -12,
    ERROR_INSTANCE_LOST = -13,
    ERROR_SESSION_RUNNING = -14,
    ERROR_SESSION_NOT_RUNNING = -16,
    ERROR_SESSION_LOST = -17,
    ERROR_SYSTEM_INVALID = -18,
    ERROR_PATH_INVALID = -19,
    ERROR_PATH_COUNT_EXCEEDED = -20,
    ERROR_PATH_FORMAT_INVALID = -21,
    ERROR_PATH_UNSUPPORTED = -22,
    ERROR_LAYER_INVALID = -23,
    ERROR_LAYER_LIMIT_EXCEEDED = -24,
    ERROR_SWAPCHAIN_RECT_INVALID = -25,
    ERROR_SWAPCHAIN_FORMAT_UNSUPPORTED = -26,
    ERROR_ACTION_TYPE_MISMATCH = -27,
    ERROR_SESSION_NOT_READY = -28,
    ERROR_SESSION_NOT_STOPPING = -29,
    ERROR_TIME_INVALID = -30,
    ERROR_REFERENCE_SPACE_UNSUPPORTED = -31,
    ERROR_FILE_ACCESS_ERROR = -32,
    ERROR_FILE_CONTENTS_INVALID = -33,
    ERROR_FORM_FACTOR_UNSUPPORTED = -34,
    ERROR_FORM_FACTOR_UNAVAILABLE = -35,
    ERROR_API_LAYER_NOT_PRESENT = -36,
    ERROR_CALL_ORDER_INVALID = -37,
    ERROR_GRAPHICS_DEVICE_INVALID = -38,
    ERROR_POSE_INVALID = -39,
    ERROR_INDEX_OUT_OF_RANGE = -40,
    ERROR_VIEW_CONFIGURATION_TYPE_UNSUPPORTED = -41,
    ERROR_ENVIRONMENT_BLEND_MODE_UNSUPPORTED = -42,
    ERROR_NAME_DUPLICATED = -44,
    ERROR_NAME_INVALID = -45,
    ERROR_ACTIONSET_NOT_ATTACHED = -46,
    ERROR_ACTIONSETS_ALREADY_ATTACHED = -47,
    ERROR_LOCALIZED_NAME_DUPLICATED = -48,
    ERROR_LOCALIZED_NAME_INVALID = -49,
    ERROR_GRAPHICS_REQUIREMENTS_CALL_MISSING = -50,
    ERROR_RUNTIME_UNAVAILABLE = -51,
    ERROR_ANDROID_THREAD_SETTINGS_ID_INVALID_KHR = -1000003000,
    ERROR_ANDROID_THREAD_SETTINGS_FAILURE_KHR = -1000003001,
    ERROR_CREATE_SPATIAL_ANCHOR_FAILED_MSFT = -1000039001,
    ERROR_SECONDARY_VIEW_CONFIGURATION_TYPE_NOT_ENABLED_MSFT = -1000053000,
    ERROR_DISPLAY_REFRESH_RATE_UNSUPPORTED_FB = -1000101000,
    ERROR_COLOR_SPACE_UNSUPPORTED_FB = -1000108000,
}

impl XrResult {
    #[inline]
    pub const fn from_raw(raw: i32) -> Self {
        Self(raw)
    }

    #[inline]
    pub const fn into_raw(self) -> i32 {
        self.0
    }

    /// True for zero and all qualified success codes.
    #[inline]
    pub const fn is_success(self) -> bool {
        self.0 >= 0
    }

    /// True for all failure codes.
    #[inline]
    pub const fn is_error(self) -> bool {
        self.0 < 0
    }

    /// True for non-default success codes such as `XR_SESSION_LOSS_PENDING`.
    #[inline]
    pub const fn is_qualified(self) -> bool {
        self.0 > 0
    }
}

impl fmt::Debug for XrResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => write!(f, "XR_UNKNOWN({})", self.0),
        }
    }
}
