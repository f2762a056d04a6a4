//! Association of GUID identities with interface types.
//!
//! The binding is a compile-time map: an interface type implements
//! [`Interface`] to declare its identity, and looking up a type without a
//! binding simply does not compile. [`declare_iid!`] wires a textual GUID
//! literal to a type, with the literal going through the const parser, so a
//! malformed id is a build failure and the binding has no runtime cost.

use std::ops::Deref;

use guid::Guid;

/// A type with an associated interface identifier.
pub trait Interface {
    /// The identity of this interface across the component ABI.
    ///
    /// If the method set or any signature of the interface ever changes, a
    /// fresh IID must be assigned; stale consumers then fail cleanly at
    /// `query_interface` instead of calling through a mismatched vtable.
    const IID: Guid;
}

/// The IID bound to `T`.
pub const fn iid_of<T: Interface + ?Sized>() -> Guid {
    T::IID
}

/// The IID bound to the (possibly unsized) type of `value`.
pub fn iid_of_val<T: Interface + ?Sized>(_value: &T) -> Guid {
    T::IID
}

/// The IID bound to the pointee type of a smart-pointer-like `wrapper`.
pub fn iid_of_target<P>(_wrapper: &P) -> Guid
where
    P: Deref,
    P::Target: Interface,
{
    <P::Target as Interface>::IID
}

/// Binds a textual GUID literal to an interface type.
///
/// ```
/// use nanocom::{declare_iid, iid_of, Unknown};
///
/// trait TextSink: Unknown {
///     fn write_line(&self, line: &str);
/// }
/// declare_iid!("{0bede896-6a9c-4c4c-b2a7-19e40f3a70bd}", dyn TextSink);
///
/// assert_eq!(
///     iid_of::<dyn TextSink>().to_string(),
///     "{0bede896-6a9c-4c4c-b2a7-19e40f3a70bd}",
/// );
/// ```
#[macro_export]
macro_rules! declare_iid {
    ($iid:literal, $interface:ty) => {
        impl $crate::Interface for $interface {
            const IID: $crate::Guid = $crate::guid!($iid);
        }
    };
}
