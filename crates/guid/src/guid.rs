//! The structured GUID value type.

use std::cmp::Ordering;
use std::fmt;

use crate::format::FormattedGuid;

/// A 128-bit GUID in structured form.
///
/// The fields mirror the four sections of the string representation:
/// `data1` holds the first eight hex digits, `data2` and `data3` the next
/// two groups of four, and `data4` the remaining sixteen digits as raw
/// bytes. `#[repr(C)]` pins the historical layout (offsets 0, 4, 6, 8), so
/// a blit of the struct on a little-endian host reproduces the Variant-2
/// byte image.
#[repr(C)]
#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub struct Guid {
    pub data1: u32,
    pub data2: u16,
    pub data3: u16,
    pub data4: [u8; 8],
}

const _: () = {
    assert!(std::mem::size_of::<Guid>() == 16);
    assert!(std::mem::offset_of!(Guid, data1) == 0);
    assert!(std::mem::offset_of!(Guid, data2) == 4);
    assert!(std::mem::offset_of!(Guid, data3) == 6);
    assert!(std::mem::offset_of!(Guid, data4) == 8);
};

impl Guid {
    /// Size of the value (and of both byte encodings) in bytes.
    pub const SIZE: usize = 16;

    /// The all-zero GUID.
    pub const NIL: Self = Self {
        data1: 0,
        data2: 0,
        data3: 0,
        data4: [0; 8],
    };

    /// Builds a GUID from its four structured fields.
    pub const fn from_fields(data1: u32, data2: u16, data3: u16, data4: [u8; 8]) -> Self {
        Self {
            data1,
            data2,
            data3,
            data4,
        }
    }

    /// Returns true if this is the all-zero GUID.
    pub const fn is_nil(&self) -> bool {
        if self.data1 != 0 || self.data2 != 0 || self.data3 != 0 {
            return false;
        }
        let mut i = 0;
        while i < 8 {
            if self.data4[i] != 0 {
                return false;
            }
            i += 1;
        }
        true
    }
}

impl Ord for Guid {
    fn cmp(&self, other: &Self) -> Ordering {
        // Field-wise unsigned comparison, never a memcmp of the raw image:
        // the raw image of data1/2/3 depends on host byte order.
        self.data1
            .cmp(&other.data1)
            .then_with(|| self.data2.cmp(&other.data2))
            .then_with(|| self.data3.cmp(&other.data3))
            .then_with(|| self.data4.cmp(&other.data4))
    }
}

impl PartialOrd for Guid {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Guid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(FormattedGuid::new(self).as_str())
    }
}

impl fmt::Debug for Guid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use std::fmt;

    use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

    use super::Guid;

    impl Serialize for Guid {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.collect_str(self)
        }
    }

    struct GuidVisitor;

    impl de::Visitor<'_> for GuidVisitor {
        type Value = Guid;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a GUID string like {xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx}")
        }

        fn visit_str<E: de::Error>(self, text: &str) -> Result<Guid, E> {
            Guid::parse(text).map_err(E::custom)
        }
    }

    impl<'de> Deserialize<'de> for Guid {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            deserializer.deserialize_str(GuidVisitor)
        }
    }
}
