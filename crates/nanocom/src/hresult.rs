//! Signed 32-bit result codes.
//!
//! The high bit encodes failure: zero and positive values are success,
//! negative values are failures. Well-known failure codes reuse the values
//! of the corresponding Windows HRESULTs, so codes are interchangeable with
//! components from that lineage; codes built from a 16-bit OS error follow
//! the `0x80070000 | code` convention.
//!
//! There is exactly one success code. Specific failure codes are diagnostic;
//! programmatically relevant failure modes belong in a domain enum or a
//! boolean result, not in control flow keyed on these constants.

use std::fmt;

use thiserror::Error;

/// A 32-bit signed result code; negative values are failures.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Hresult(pub i32);

impl Hresult {
    /// The single canonical success code.
    pub const OK: Hresult = Hresult(0);

    /// Operation is pending.
    pub const FAILURE_PENDING: Hresult = Hresult::from_bits(0x8000_000A);
    /// There is no implementation to invoke.
    pub const FAILURE_NOT_IMPLEMENTED: Hresult = Hresult::from_bits(0x8000_4001);
    /// The object does not support the requested interface.
    pub const FAILURE_NO_INTERFACE: Hresult = Hresult::from_bits(0x8000_4002);
    /// Operation aborted.
    pub const FAILURE_ABORT: Hresult = Hresult::from_bits(0x8000_4004);
    /// Unspecified failure.
    pub const FAILURE_UNSPECIFIED: Hresult = Hresult::from_bits(0x8000_4005);
    /// Unexpected internal failure.
    pub const FAILURE_UNEXPECTED: Hresult = Hresult::from_bits(0x8000_FFFF);
    /// Access denied.
    pub const FAILURE_ACCESS_DENIED: Hresult = Hresult::from_win32(5);
    /// Invalid handle.
    pub const FAILURE_INVALID_HANDLE: Hresult = Hresult::from_win32(6);
    /// Invalid data.
    pub const FAILURE_INVALID_DATA: Hresult = Hresult::from_win32(13);
    /// Memory could not be obtained.
    pub const FAILURE_OUT_OF_MEMORY: Hresult = Hresult::from_win32(14);
    /// Device or resource not ready.
    pub const FAILURE_NOT_READY: Hresult = Hresult::from_win32(21);
    /// Bad command.
    pub const FAILURE_BAD_COMMAND: Hresult = Hresult::from_win32(22);
    /// The request is not supported.
    pub const FAILURE_NOT_SUPPORTED: Hresult = Hresult::from_win32(50);
    /// A caller-supplied argument was rejected.
    pub const FAILURE_INVALID_ARGUMENT: Hresult = Hresult::from_win32(87);
    /// The supplied buffer is too small.
    pub const FAILURE_INSUFFICIENT_BUFFER: Hresult = Hresult::from_win32(122);
    /// More data is available than was returned.
    pub const FAILURE_MORE_DATA: Hresult = Hresult::from_win32(234);
    /// No more items to enumerate.
    pub const FAILURE_NO_MORE_ITEMS: Hresult = Hresult::from_win32(259);
    /// The operation was aborted.
    pub const FAILURE_OPERATION_ABORTED: Hresult = Hresult::from_win32(995);
    /// An I/O operation is in progress.
    pub const FAILURE_IO_PENDING: Hresult = Hresult::from_win32(997);
    /// A lookup found nothing.
    pub const FAILURE_NOT_FOUND: Hresult = Hresult::from_win32(1168);
    /// The operation was cancelled.
    pub const FAILURE_CANCELLED: Hresult = Hresult::from_win32(1223);
    /// A driver process terminated.
    pub const FAILURE_DRIVER_PROCESS_TERMINATED: Hresult = Hresult::from_win32(1291);
    /// The device was removed.
    pub const FAILURE_DEVICE_REMOVED: Hresult = Hresult::from_win32(1617);
    /// The target is not connected.
    pub const FAILURE_NOT_CONNECTED: Hresult = Hresult::from_win32(2250);

    /// Builds a code from its raw 32-bit pattern.
    pub const fn from_bits(bits: u32) -> Hresult {
        Hresult(bits as i32)
    }

    /// The raw 32-bit pattern of this code.
    pub const fn to_bits(self) -> u32 {
        self.0 as u32
    }

    /// The failure code carrying a 16-bit OS error (`0x80070000 | code`).
    ///
    /// Code 0 is the OS success value and has no failure encoding; passing
    /// it is a caller bug (build failure in const contexts, panic at run
    /// time).
    pub const fn from_win32(code: u16) -> Hresult {
        if code == 0 {
            panic!("OS error code 0 is success and has no failure encoding");
        }
        Hresult((0x8007_0000 | code as u32) as i32)
    }

    /// True for zero and positive codes.
    pub const fn is_success(self) -> bool {
        self.0 >= 0
    }

    /// True for negative codes.
    pub const fn is_failure(self) -> bool {
        self.0 < 0
    }

    /// `Ok(())` on success, the carried failure otherwise; the `?`-friendly
    /// way to promote a code into Rust error handling.
    pub fn ok(self) -> Result<(), HresultError> {
        if self.is_success() {
            Ok(())
        } else {
            Err(HresultError(self))
        }
    }

    /// Unwinds with an [`HresultError`] payload when `self` is a failure,
    /// for code that crosses frames by panic rather than by `?`. The
    /// boundary guard in [`crate::error`] recognizes the payload and
    /// restores the code.
    pub fn throw_if_failure(self) {
        if self.is_failure() {
            std::panic::panic_any(HresultError(self));
        }
    }
}

impl fmt::Display for Hresult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:08X}", self.to_bits())
    }
}

impl fmt::Debug for Hresult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hresult(0x{:08X})", self.to_bits())
    }
}

/// Error value carrying a single failing result code.
///
/// This is the unwinding currency between result-code land and Rust error
/// handling: [`Hresult::ok`] produces it, `?` propagates it, and
/// [`crate::catch_hresult`] turns it back into a bare code at the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("operation failed with result code {0}")]
pub struct HresultError(Hresult);

impl HresultError {
    /// Wraps a failure code.
    ///
    /// Wrapping a success code is a caller bug severe enough that the
    /// process terminates: a "failed successfully" value crossing the ABI
    /// corrupts every caller's error handling downstream.
    pub fn new(code: Hresult) -> Self {
        if code.is_success() {
            std::process::abort();
        }
        Self(code)
    }

    /// The carried failure code.
    pub const fn code(self) -> Hresult {
        self.0
    }
}

impl From<HresultError> for Hresult {
    fn from(e: HresultError) -> Hresult {
        e.code()
    }
}
