//! Byte offsets and bit masks of the RFC 4122 field layout.
//!
//! ```text
//!  0                   1                   2                   3
//!  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                          time_low                             |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |       time_mid                |         time_hi_and_version   |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |clk_seq_hi_res |  clk_seq_low  |         node (0-1)            |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                         node (2-5)                            |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! ```
//!
//! In a UUIDv4 only the version nibble in `time_hi_and_version` and the variant bits in
//! `clock_seq_hi_and_reserved` carry meaning; the field names locate bytes and nothing else.
//!
//! # Examples
//!
//! ```rust
//! use uuid4::layout;
//!
//! let bytes = uuid4::generate_bytes()?;
//! let node = &bytes[layout::NODE.range()];
//! assert_eq!(node.len(), 6);
//! assert_eq!(bytes[layout::TIME_HI_AND_VERSION.offset] >> 4, 4);
//! # Ok::<(), uuid4::RandomSourceError>(())
//! ```

use std::ops::Range;

/// Location of a field within the 16-byte big-endian representation.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Field {
    /// Index of the first byte of the field.
    pub offset: usize,

    /// Length of the field in bytes.
    pub len: usize,
}

impl Field {
    /// Returns the byte range covered by the field.
    pub const fn range(&self) -> Range<usize> {
        self.offset..self.offset + self.len
    }
}

/// 32-bit `time_low` field.
pub const TIME_LOW: Field = Field { offset: 0, len: 4 };

/// 16-bit `time_mid` field.
pub const TIME_MID: Field = Field { offset: 4, len: 2 };

/// 16-bit `time_hi_and_version` field; its high nibble holds the version.
pub const TIME_HI_AND_VERSION: Field = Field { offset: 6, len: 2 };

/// 8-bit `clock_seq_hi_and_reserved` field; its top bits hold the variant.
pub const CLOCK_SEQ_HI_AND_RESERVED: Field = Field { offset: 8, len: 1 };

/// 8-bit `clock_seq_low` field.
pub const CLOCK_SEQ_LOW: Field = Field { offset: 9, len: 1 };

/// 48-bit `node` field.
pub const NODE: Field = Field { offset: 10, len: 6 };

/// Bits of the first `time_hi_and_version` byte kept from the random source.
pub const VERSION_MASK: u8 = 0x0f;

/// Version nibble `0100` in place.
pub const VERSION_BITS: u8 = 0x40;

/// Bits of `clock_seq_hi_and_reserved` kept from the random source, i.e. all but bit 6.
pub const VARIANT_MASK: u8 = 0xbf;

/// Variant bit 7 set; together with [`VARIANT_MASK`] this yields `10` in the top two bits.
pub const VARIANT_BITS: u8 = 0x80;

/// Length of the binary representation.
pub const UUID_LEN: usize = 16;

/// Length of the 8-4-4-4-12 string representation.
pub const STRING_LEN: usize = 36;
