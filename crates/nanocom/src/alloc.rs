//! Cross-library allocation.
//!
//! Memory handed across the ABI must come from a heap shared by every
//! module: a buffer allocated inside one library is freed by its consumer in
//! another, so both must resolve to allocator symbols in a shared library
//! outside either of them. On Windows that is the COM task allocator in
//! ole32; elsewhere it is the C runtime heap in libc.

use std::ffi::c_void;

/// Allocates `num_bytes` from the cross-library heap.
///
/// Returns null on failure; the caller decides whether that is fatal.
#[must_use]
pub fn com_alloc(num_bytes: usize) -> *mut c_void {
    let p = imp::alloc(num_bytes);
    if p.is_null() && num_bytes > 0 {
        tracing::error!("cross-library allocation of {} bytes failed", num_bytes);
    }
    p
}

/// Returns `p` to the cross-library heap. Null is accepted and ignored.
///
/// # Safety
///
/// `p` must be null or a pointer obtained from [`com_alloc`] that has not
/// already been freed.
pub unsafe fn com_free(p: *mut c_void) {
    unsafe { imp::free(p) }
}

#[cfg(windows)]
mod imp {
    use std::ffi::c_void;

    use windows::Win32::System::Com::{CoTaskMemAlloc, CoTaskMemFree};

    pub fn alloc(num_bytes: usize) -> *mut c_void {
        unsafe { CoTaskMemAlloc(num_bytes) }
    }

    pub unsafe fn free(p: *mut c_void) {
        unsafe { CoTaskMemFree(Some(p as *const c_void)) }
    }
}

#[cfg(not(windows))]
mod imp {
    use std::ffi::c_void;

    pub fn alloc(num_bytes: usize) -> *mut c_void {
        unsafe { libc::malloc(num_bytes).cast() }
    }

    pub unsafe fn free(p: *mut c_void) {
        unsafe { libc::free(p.cast()) }
    }
}
