//! Reference-counted base interfaces and weak references.
//!
//! Every interface ultimately derives from [`Unknown`], which owns the two
//! lifetime primitives (an intrusive strong count) and GUID-keyed casting.
//! A newly created object starts with a strong count of at least one, owed
//! to its creator; when the count reaches zero the implementation destroys
//! the object. Weak access is a separate tear-off with its own lifetime:
//! [`WeakReferenceSource`] hands out [`WeakReference`] values that resolve
//! to a strong reference only while the target is still alive.
//!
//! Implementations live outside this crate; the traits fix the method
//! contracts and the three identities.

use std::any::Any;
use std::sync::Arc;

use guid::Guid;

use crate::hresult::HresultError;

/// Strong reference counts as returned by [`Unknown::add_ref`] and
/// [`Unknown::release`].
pub type Refcount = u32;

/// Result currency for interface methods: a success value or a failing
/// result code.
pub type ComResult<T> = Result<T, HresultError>;

/// A strong interface reference.
pub type ComRc = Arc<dyn Unknown>;

/// Reference-counted lifetime and GUID-keyed downcasting.
///
/// `add_ref`, `release`, and weak-reference resolution must be atomic with
/// respect to one another: racing calls from different threads may not
/// corrupt the count or observe a destroyed object through a strong
/// reference. Ordering beyond that is the caller's concern.
pub trait Unknown: Send + Sync {
    /// Returns a strong reference to the `iid` interface of this object,
    /// with the count already incremented, or `FAILURE_NO_INTERFACE` when
    /// the object does not implement it. The reference stays valid until
    /// released.
    fn query_interface(&self, iid: &Guid) -> ComResult<ComRc>;

    /// Increments the strong count and returns the new value.
    fn add_ref(&self) -> Refcount;

    /// Decrements the strong count and returns the new value. At zero the
    /// object is destroyed.
    fn release(&self) -> Refcount;

    /// Concrete-type downcast hook for the implementation behind a
    /// successful `query_interface`.
    fn as_any(&self) -> &dyn Any;
}

/// A handle to an object that does not keep the object alive.
pub trait WeakReference: Unknown {
    /// Resolves to a strong reference if the target is still alive and
    /// implements `iid`. Returns `Ok(None)`, success rather than an error,
    /// when the target has been destroyed; the null check is on the caller.
    fn resolve(&self, iid: &Guid) -> ComResult<Option<ComRc>>;
}

/// An object able to hand out weak references to itself.
pub trait WeakReferenceSource: Unknown {
    /// Returns a new weak reference to this object.
    fn get_weak_reference(&self) -> ComResult<Arc<dyn WeakReference>>;
}

impl std::fmt::Debug for dyn Unknown {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("dyn Unknown")
    }
}

crate::declare_iid!("{00000000-0000-0000-C000-000000000046}", dyn Unknown);
crate::declare_iid!("{00000037-0000-0000-C000-000000000046}", dyn WeakReference);
crate::declare_iid!("{00000038-0000-0000-C000-000000000046}", dyn WeakReferenceSource);
