//! Host-provided random GUID acquisition.

use crate::Guid;

impl Guid {
    /// Returns a fresh random (version 4) GUID.
    ///
    /// Entropy comes from the operating system via the `uuid` crate; its RFC
    /// byte form is the Variant-1 encoding. A host that cannot produce
    /// entropy fails the process inside the generator rather than hand back
    /// a predictable value.
    pub fn generate() -> Guid {
        Guid::from_bytes(uuid::Uuid::new_v4().into_bytes())
    }
}
