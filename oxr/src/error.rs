//! Binding errors and the status-code-to-error mapping.

use oxr_sys as sys;
use thiserror::Error;

/// Cumulative error type for the binding core.
#[derive(Error, Debug)]
pub enum OxrError {
    #[error("{op} returned {source}")]
    Xr { op: &'static str, source: XrError },
    #[error("entry point {0} is not available from the runtime")]
    FunctionUnavailable(String),
    #[error("{op} kept reporting XR_ERROR_SIZE_INSUFFICIENT after {retries} refills")]
    TwoCallStormed { op: &'static str, retries: usize },
    #[error("eager dispatch population requires a live instance handle")]
    NullInstance,
}

/// Result type for the binding core.
pub type Result<T> = std::result::Result<T, OxrError>;

macro_rules! xr_errors {
    ($($variant:ident => $code:ident,)*) => {
        /// One error kind per failure code, mapped 1:1 from the `XrResult`
        /// domain. Codes this table does not know fall back to
        /// [`XrError::Unhandled`] carrying the raw value.
        #[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
        pub enum XrError {
            $(
                #[error("{}", concat!("XR_", stringify!($code)))]
                $variant,
            )*
            #[error("{0:?}")]
            Unhandled(sys::XrResult),
        }

        impl XrError {
            /// Maps a raw status code to its error kind.
            pub fn from_raw(code: sys::XrResult) -> Self {
                match code {
                    $(sys::XrResult::$code => Self::$variant,)*
                    other => Self::Unhandled(other),
                }
            }

            /// The raw status code this kind stands for.
            pub fn raw(self) -> sys::XrResult {
                match self {
                    $(Self::$variant => sys::XrResult::$code,)*
                    Self::Unhandled(other) => other,
                }
            }
        }
    };
}

xr_errors! {
    ValidationFailure => ERROR_VALIDATION_FAILURE,
    RuntimeFailure => ERROR_RUNTIME_FAILURE,
    OutOfMemory => ERROR_OUT_OF_MEMORY,
    ApiVersionUnsupported => ERROR_API_VERSION_UNSUPPORTED,
    InitializationFailed => ERROR_INITIALIZATION_FAILED,
    FunctionUnsupported => ERROR_FUNCTION_UNSUPPORTED,
    FeatureUnsupported => ERROR_FEATURE_UNSUPPORTED,
    ExtensionNotPresent => ERROR_EXTENSION_NOT_PRESENT,
    LimitReached => ERROR_LIMIT_REACHED,
    SizeInsufficient => ERROR_SIZE_INSUFFICIENT,
    HandleInvalid => ERROR_HANDLE_INVALID,
    InstanceLost => ERROR_INSTANCE_LOST,
    SessionRunning => ERROR_SESSION_RUNNING,
    SessionNotRunning => ERROR_SESSION_NOT_RUNNING,
    SessionLost => ERROR_SESSION_LOST,
    SystemInvalid => ERROR_SYSTEM_INVALID,
    PathInvalid => ERROR_PATH_INVALID,
    PathCountExceeded => ERROR_PATH_COUNT_EXCEEDED,
    PathFormatInvalid => ERROR_PATH_FORMAT_INVALID,
    PathUnsupported => ERROR_PATH_UNSUPPORTED,
    LayerInvalid => ERROR_LAYER_INVALID,
    LayerLimitExceeded => ERROR_LAYER_LIMIT_EXCEEDED,
    SwapchainRectInvalid => ERROR_SWAPCHAIN_RECT_INVALID,
    SwapchainFormatUnsupported => ERROR_SWAPCHAIN_FORMAT_UNSUPPORTED,
    ActionTypeMismatch => ERROR_ACTION_TYPE_MISMATCH,
    SessionNotReady => ERROR_SESSION_NOT_READY,
    SessionNotStopping => ERROR_SESSION_NOT_STOPPING,
    TimeInvalid => ERROR_TIME_INVALID,
    ReferenceSpaceUnsupported => ERROR_REFERENCE_SPACE_UNSUPPORTED,
    FileAccessError => ERROR_FILE_ACCESS_ERROR,
    FileContentsInvalid => ERROR_FILE_CONTENTS_INVALID,
    FormFactorUnsupported => ERROR_FORM_FACTOR_UNSUPPORTED,
    FormFactorUnavailable => ERROR_FORM_FACTOR_UNAVAILABLE,
    ApiLayerNotPresent => ERROR_API_LAYER_NOT_PRESENT,
    CallOrderInvalid => ERROR_CALL_ORDER_INVALID,
    GraphicsDeviceInvalid => ERROR_GRAPHICS_DEVICE_INVALID,
    PoseInvalid => ERROR_POSE_INVALID,
    IndexOutOfRange => ERROR_INDEX_OUT_OF_RANGE,
    ViewConfigurationTypeUnsupported => ERROR_VIEW_CONFIGURATION_TYPE_UNSUPPORTED,
    EnvironmentBlendModeUnsupported => ERROR_ENVIRONMENT_BLEND_MODE_UNSUPPORTED,
    NameDuplicated => ERROR_NAME_DUPLICATED,
    NameInvalid => ERROR_NAME_INVALID,
    ActionsetNotAttached => ERROR_ACTIONSET_NOT_ATTACHED,
    ActionsetsAlreadyAttached => ERROR_ACTIONSETS_ALREADY_ATTACHED,
    LocalizedNameDuplicated => ERROR_LOCALIZED_NAME_DUPLICATED,
    LocalizedNameInvalid => ERROR_LOCALIZED_NAME_INVALID,
    GraphicsRequirementsCallMissing => ERROR_GRAPHICS_REQUIREMENTS_CALL_MISSING,
    RuntimeUnavailable => ERROR_RUNTIME_UNAVAILABLE,
    AndroidThreadSettingsIdInvalidKhr => ERROR_ANDROID_THREAD_SETTINGS_ID_INVALID_KHR,
    AndroidThreadSettingsFailureKhr => ERROR_ANDROID_THREAD_SETTINGS_FAILURE_KHR,
    CreateSpatialAnchorFailedMsft => ERROR_CREATE_SPATIAL_ANCHOR_FAILED_MSFT,
    SecondaryViewConfigurationTypeNotEnabledMsft => ERROR_SECONDARY_VIEW_CONFIGURATION_TYPE_NOT_ENABLED_MSFT,
    DisplayRefreshRateUnsupportedFb => ERROR_DISPLAY_REFRESH_RATE_UNSUPPORTED_FB,
    ColorSpaceUnsupportedFb => ERROR_COLOR_SPACE_UNSUPPORTED_FB,
}
