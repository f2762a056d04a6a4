//! GUID ⇄ 16-byte array codecs.
//!
//! Variant-1 serializes the three integer fields big-endian; it is the wire
//! form that libuuid and boost-uuid presume for every value. Variant-2
//! serializes them little-endian, matching the raw image of a structured
//! value on a little-endian host; it exists for components that historically
//! blitted that image to storage and must keep doing so. Neither direction
//! inspects the variant bits in byte 8; callers that need to honor them
//! dispatch between the two themselves.

use bytes::{Buf, BufMut};

use crate::Guid;

impl Guid {
    /// Encodes to the Variant-1 (big-endian) byte array.
    pub const fn to_bytes(&self) -> [u8; 16] {
        let d1 = self.data1.to_be_bytes();
        let d2 = self.data2.to_be_bytes();
        let d3 = self.data3.to_be_bytes();
        [
            d1[0],
            d1[1],
            d1[2],
            d1[3],
            d2[0],
            d2[1],
            d3[0],
            d3[1],
            self.data4[0],
            self.data4[1],
            self.data4[2],
            self.data4[3],
            self.data4[4],
            self.data4[5],
            self.data4[6],
            self.data4[7],
        ]
    }

    /// Decodes from the Variant-1 (big-endian) byte array.
    pub const fn from_bytes(bytes: [u8; 16]) -> Guid {
        Guid {
            data1: u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]),
            data2: u16::from_be_bytes([bytes[4], bytes[5]]),
            data3: u16::from_be_bytes([bytes[6], bytes[7]]),
            data4: [
                bytes[8], bytes[9], bytes[10], bytes[11], bytes[12], bytes[13], bytes[14],
                bytes[15],
            ],
        }
    }

    /// Encodes to the Variant-2 (little-endian) byte array.
    pub const fn to_bytes_le(&self) -> [u8; 16] {
        let d1 = self.data1.to_le_bytes();
        let d2 = self.data2.to_le_bytes();
        let d3 = self.data3.to_le_bytes();
        [
            d1[0],
            d1[1],
            d1[2],
            d1[3],
            d2[0],
            d2[1],
            d3[0],
            d3[1],
            self.data4[0],
            self.data4[1],
            self.data4[2],
            self.data4[3],
            self.data4[4],
            self.data4[5],
            self.data4[6],
            self.data4[7],
        ]
    }

    /// Decodes from the Variant-2 (little-endian) byte array.
    pub const fn from_bytes_le(bytes: [u8; 16]) -> Guid {
        Guid {
            data1: u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]),
            data2: u16::from_le_bytes([bytes[4], bytes[5]]),
            data3: u16::from_le_bytes([bytes[6], bytes[7]]),
            data4: [
                bytes[8], bytes[9], bytes[10], bytes[11], bytes[12], bytes[13], bytes[14],
                bytes[15],
            ],
        }
    }

    /// The raw in-memory image of this value on the current host.
    ///
    /// Host-dependent; suitable for hashing, never for the wire.
    pub const fn to_ne_bytes(&self) -> [u8; 16] {
        if cfg!(target_endian = "little") {
            self.to_bytes_le()
        } else {
            self.to_bytes()
        }
    }

    /// Appends the 16-byte encoding to `buf` in the requested byte order.
    pub fn encode<B: BufMut>(&self, buf: &mut B, little_endian: bool) {
        if little_endian {
            buf.put_u32_le(self.data1);
            buf.put_u16_le(self.data2);
            buf.put_u16_le(self.data3);
        } else {
            buf.put_u32(self.data1);
            buf.put_u16(self.data2);
            buf.put_u16(self.data3);
        }
        buf.put_slice(&self.data4);
    }

    /// Reads a 16-byte encoding from `buf` in the requested byte order.
    ///
    /// Returns `None` when fewer than 16 bytes remain.
    pub fn decode<B: Buf>(buf: &mut B, little_endian: bool) -> Option<Guid> {
        if buf.remaining() < Self::SIZE {
            return None;
        }
        let data1 = if little_endian {
            buf.get_u32_le()
        } else {
            buf.get_u32()
        };
        let data2 = if little_endian {
            buf.get_u16_le()
        } else {
            buf.get_u16()
        };
        let data3 = if little_endian {
            buf.get_u16_le()
        } else {
            buf.get_u16()
        };
        let mut data4 = [0u8; 8];
        buf.copy_to_slice(&mut data4);
        Some(Guid {
            data1,
            data2,
            data3,
            data4,
        })
    }
}
