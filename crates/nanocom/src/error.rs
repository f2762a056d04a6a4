//! Bridging between Rust error handling and ABI result codes.
//!
//! Inside a component, failures travel as ordinary Rust errors; across the
//! ABI they must travel as bare result codes. [`ComError`] enumerates the
//! failure conditions that may be in flight with a fixed code mapping each,
//! and [`catch_hresult`] demotes whatever reaches the boundary (an `Err`
//! return or an unwinding panic) to the matching code.

use std::any::Any;
use std::collections::TryReserveError;
use std::panic::{self, AssertUnwindSafe};

use thiserror::Error;

use guid::Guid;

use crate::hresult::{Hresult, HresultError};

/// Failure conditions that may be in flight inside a component, each with a
/// defined result-code mapping for crossing the ABI.
#[derive(Debug, Error)]
pub enum ComError {
    /// An already-coded failure.
    #[error(transparent)]
    Code(#[from] HresultError),

    /// Memory could not be obtained.
    #[error("out of memory")]
    OutOfMemory,

    /// A caller-supplied argument was rejected.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A lookup found nothing.
    #[error("not found: {0}")]
    NotFound(String),

    /// There is no implementation to invoke.
    #[error("not implemented")]
    NotImplemented,

    /// The object does not support the requested interface.
    #[error("no interface: {0}")]
    NoInterface(Guid),

    /// An internal invariant did not hold.
    #[error("unexpected failure: {0}")]
    Unexpected(String),
}

impl ComError {
    /// The result code this condition crosses the ABI as.
    pub fn to_hresult(&self) -> Hresult {
        match self {
            ComError::Code(e) => e.code(),
            ComError::OutOfMemory => Hresult::FAILURE_OUT_OF_MEMORY,
            ComError::InvalidArgument(_) => Hresult::FAILURE_INVALID_ARGUMENT,
            ComError::NotFound(_) => Hresult::FAILURE_NOT_FOUND,
            ComError::NotImplemented => Hresult::FAILURE_NOT_IMPLEMENTED,
            ComError::NoInterface(_) => Hresult::FAILURE_NO_INTERFACE,
            ComError::Unexpected(_) => Hresult::FAILURE_UNEXPECTED,
        }
    }
}

impl From<TryReserveError> for ComError {
    fn from(_: TryReserveError) -> ComError {
        ComError::OutOfMemory
    }
}

impl From<ComError> for Hresult {
    fn from(e: ComError) -> Hresult {
        e.to_hresult()
    }
}

/// Runs `f` at an ABI boundary and reports the outcome as a result code.
///
/// `Err` returns map through [`ComError::to_hresult`]. Unwinding panics are
/// caught; a payload carrying an [`HresultError`] (see
/// [`Hresult::throw_if_failure`]) or a [`ComError`] keeps its code, anything
/// else becomes `FAILURE_UNEXPECTED`.
pub fn catch_hresult<F>(f: F) -> Hresult
where
    F: FnOnce() -> Result<(), ComError>,
{
    catch_hresult_with(f, || Hresult::FAILURE_UNEXPECTED)
}

/// [`catch_hresult`] with a caller-supplied fallback for panic payloads this
/// crate does not recognize.
pub fn catch_hresult_with<F, G>(f: F, fallback: G) -> Hresult
where
    F: FnOnce() -> Result<(), ComError>,
    G: FnOnce() -> Hresult,
{
    match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(Ok(())) => Hresult::OK,
        Ok(Err(e)) => e.to_hresult(),
        Err(payload) => {
            let code = hresult_from_panic(payload.as_ref(), fallback);
            tracing::warn!("panic demoted to result code {}", code);
            code
        }
    }
}

fn hresult_from_panic<G>(payload: &(dyn Any + Send), fallback: G) -> Hresult
where
    G: FnOnce() -> Hresult,
{
    if let Some(carried) = payload.downcast_ref::<HresultError>() {
        carried.code()
    } else if let Some(carried) = payload.downcast_ref::<ComError>() {
        carried.to_hresult()
    } else {
        fallback()
    }
}
