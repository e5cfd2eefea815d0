//! Raw FFI types for the OpenXR runtime API.
//!
//! This crate mirrors the parts of `openxr.h` consumed by the [`oxr`](https://docs.rs/oxr)
//! binding core: result codes, opaque handles, a subset of the POD structs and
//! enumerations, and the function pointer signatures reachable through
//! `xrGetInstanceProcAddr`. Everything here is layout, constants, and trivial
//! accessors; all call logic lives in `oxr`.
//!
//! Handles are 64-bit opaque identifiers owned by the runtime. They are never
//! dereferenced on this side of the ABI.
#![allow(non_camel_case_types)]

mod result;
mod types;

pub mod pfn;

pub use result::XrResult;
pub use types::*;

use std::fmt;

/// Declares an opaque 64-bit handle type.
macro_rules! define_handle {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[repr(transparent)]
        #[derive(Copy, Clone, PartialEq, Eq, Hash)]
        pub struct $name(u64);

        impl $name {
            pub const NULL: Self = Self(0);

            #[inline]
            pub const fn from_raw(raw: u64) -> Self {
                Self(raw)
            }

            #[inline]
            pub const fn into_raw(self) -> u64 {
                self.0
            }

            #[inline]
            pub const fn is_null(self) -> bool {
                self.0 == 0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::NULL
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!(stringify!($name), "({:#x})"), self.0)
            }
        }
    };
}

define_handle! {
    /// `XrInstance`
    Instance
}
define_handle! {
    /// `XrSession`
    Session
}
define_handle! {
    /// `XrSpace`
    Space
}
define_handle! {
    /// `XrSwapchain`
    Swapchain
}
define_handle! {
    /// `XrActionSet`
    ActionSet
}
define_handle! {
    /// `XrAction`
    Action
}

/// `XrSystemId`
#[repr(transparent)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct SystemId(pub u64);

impl SystemId {
    pub const NULL: Self = Self(0);
}

/// `XrPath`
#[repr(transparent)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Path(pub u64);

/// `XrBool32`
pub type Bool32 = u32;
/// `XrTime`, nanoseconds on the runtime clock.
pub type Time = i64;
/// `XrDuration`, nanoseconds.
pub type Duration = i64;

pub const TRUE: Bool32 = 1;
pub const FALSE: Bool32 = 0;

/// `XrVersion`, packed as major.minor.patch.
#[repr(transparent)]
#[derive(Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version(pub u64);

impl Version {
    pub const fn new(major: u16, minor: u16, patch: u32) -> Self {
        Self(((major as u64) << 48) | ((minor as u64) << 32) | patch as u64)
    }

    pub const fn major(self) -> u16 {
        (self.0 >> 48) as u16
    }

    pub const fn minor(self) -> u16 {
        (self.0 >> 32) as u16
    }

    pub const fn patch(self) -> u32 {
        self.0 as u32
    }
}

impl fmt::Debug for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major(), self.minor(), self.patch())
    }
}

pub const CURRENT_API_VERSION: Version = Version::new(1, 0, 34);

pub const MAX_APPLICATION_NAME_SIZE: usize = 128;
pub const MAX_ENGINE_NAME_SIZE: usize = 128;
pub const MAX_RUNTIME_NAME_SIZE: usize = 128;
pub const MAX_API_LAYER_NAME_SIZE: usize = 256;
pub const MAX_API_LAYER_DESCRIPTION_SIZE: usize = 256;
pub const MAX_EXTENSION_NAME_SIZE: usize = 128;
pub const MAX_SYSTEM_NAME_SIZE: usize = 256;
