//! FNV-1a hashing of GUID values.
//!
//! The hash runs over the 16-byte in-memory image of the value, so it is
//! cheap and collision-resistant for in-process tables but not stable across
//! hosts of different endianness. Do not persist it.

use std::hash::{Hash, Hasher};

use crate::Guid;

const FNV64_OFFSET_BASIS: u64 = 14_695_981_039_346_656_037;
const FNV64_PRIME: u64 = 1_099_511_628_211;

const FNV32_OFFSET_BASIS: u32 = 2_166_136_261;
const FNV32_PRIME: u32 = 16_777_619;

impl Guid {
    /// 64-bit FNV-1a over the raw in-memory image.
    pub const fn fnv1a_64(&self) -> u64 {
        let bytes = self.to_ne_bytes();
        let mut hash = FNV64_OFFSET_BASIS;
        let mut i = 0;
        while i < bytes.len() {
            hash ^= bytes[i] as u64;
            hash = hash.wrapping_mul(FNV64_PRIME);
            i += 1;
        }
        hash
    }

    /// 32-bit FNV-1a over the raw in-memory image.
    pub const fn fnv1a_32(&self) -> u32 {
        let bytes = self.to_ne_bytes();
        let mut hash = FNV32_OFFSET_BASIS;
        let mut i = 0;
        while i < bytes.len() {
            hash ^= bytes[i] as u32;
            hash = hash.wrapping_mul(FNV32_PRIME);
            i += 1;
        }
        hash
    }

    /// Pointer-width FNV-1a over the raw in-memory image.
    pub const fn fnv1a(&self) -> usize {
        if cfg!(target_pointer_width = "64") {
            self.fnv1a_64() as usize
        } else {
            self.fnv1a_32() as usize
        }
    }
}

impl Hash for Guid {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Feed the raw image so an FNV hasher observes exactly the bytes the
        // fnv1a_* methods consume.
        state.write(&self.to_ne_bytes());
    }
}
