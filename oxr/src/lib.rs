//! Dynamic dispatch core for the OpenXR runtime API.
//!
//! OpenXR exposes its entire surface through one root resolver,
//! `xrGetInstanceProcAddr`. This crate implements the machinery every call
//! goes through, on top of the raw types in [`oxr-sys`](oxr_sys):
//!
//! - [`DispatchTable`]: resolves entry point addresses once, lazily or
//!   eagerly, and hands them out with their true signatures.
//! - [`ResultContext`]: turns raw `XrResult` codes into errors or passes
//!   them through, per the policy picked at construction.
//! - [`two_call`]: the probe-then-fill protocol behind every
//!   `xrEnumerate*` entry point.
//! - [`OwnedHandle`]: ties a runtime handle to the destroy entry point that
//!   was captured when it was created.
//!
//! The typed wrappers on [`Entry`], [`Instance`], and [`Session`] cover the
//! core creation, frame, and enumeration entry points; anything else is
//! reachable through [`DispatchTable::resolve`](dispatch::DispatchTable::resolve)
//! and the raw `oxr-sys` signatures.
//!
//! ## Usage
//! ```no_run
//! use oxr::Entry;
//!
//! # fn main() -> oxr::Result<()> {
//! # #[cfg(feature = "linked")] {
//! let entry = Entry::linked();
//! let extensions = entry.enumerate_extensions(None)?;
//! # }
//! # Ok(())
//! # }
//! ```

pub mod dispatch;
pub mod entry;
pub mod error;
pub mod handle;
pub mod instance;
pub mod result;
pub mod session;
pub mod two_call;

pub use oxr_sys as sys;

pub use dispatch::DispatchTable;
pub use entry::{application_info, BindingOptions, Entry};
pub use error::{OxrError, Result, XrError};
pub use handle::{OwnedHandle, RawHandle};
pub use instance::Instance;
pub use result::{AssertHook, CheckPolicy, ResultContext, Success};
pub use session::{Session, Space, Swapchain};
