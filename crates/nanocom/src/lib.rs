//! Minimal component-ABI ("nano-component") vocabulary
//!
//! A small distillation of COM-style conventions for defining an ABI
//! between components that are built and deployed separately:
//!
//! - [`Hresult`]: failures expressed as a signed 32-bit return code, with
//!   the well-known code taxonomy and [`catch_hresult`] bridging to and
//!   from Rust error handling at the boundary
//! - [`Interface`] / [`declare_iid!`]: GUID identities for interface types,
//!   bound at compile time
//! - [`Unknown`]: intrusive reference counting and GUID-keyed casting
//! - [`WeakReference`] / [`WeakReferenceSource`]: access to an object
//!   without keeping it alive
//! - [`com_alloc`] / [`com_free`]: memory that transfers ownership across
//!   library boundaries
//!
//! Everything runtime-flavored from the ancestral object model (activation,
//! apartments, marshaling, registration) is deliberately absent.
//!
//! # Example
//!
//! ```
//! use nanocom::{declare_iid, iid_of, Hresult, Unknown};
//!
//! // Declare an interface and bind its identity.
//! trait TextSink: Unknown {
//!     fn write_line(&self, line: &str);
//! }
//! declare_iid!("{5a1b72e4-90cf-4b6a-8f24-3d8be1c407a9}", dyn TextSink);
//!
//! assert_eq!(
//!     iid_of::<dyn TextSink>().to_string(),
//!     "{5a1b72e4-90cf-4b6a-8f24-3d8be1c407a9}",
//! );
//!
//! // Result codes keep their sign discipline.
//! assert!(Hresult::OK.is_success());
//! assert!(Hresult::FAILURE_NO_INTERFACE.is_failure());
//! assert_eq!(Hresult::FAILURE_INVALID_ARGUMENT.to_bits(), 0x8007_0057);
//! ```

pub mod alloc;
pub mod error;
pub mod hresult;
pub mod iid;
pub mod unknown;

pub use alloc::{com_alloc, com_free};
pub use error::{catch_hresult, catch_hresult_with, ComError};
pub use hresult::{Hresult, HresultError};
pub use iid::{iid_of, iid_of_target, iid_of_val, Interface};
pub use unknown::{ComRc, ComResult, Refcount, Unknown, WeakReference, WeakReferenceSource};

// The GUID vocabulary is part of this crate's API surface; re-exported so
// consumers (and `declare_iid!` expansions) need only one dependency.
pub use guid::{guid, Guid};
