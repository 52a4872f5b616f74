use std::{fmt, ops, str};

use crate::layout::{
    CLOCK_SEQ_HI_AND_RESERVED, STRING_LEN, TIME_HI_AND_VERSION, UUID_LEN, VARIANT_BITS,
    VARIANT_MASK, VERSION_BITS, VERSION_MASK,
};

/// Represents a Universally Unique IDentifier.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
pub struct Uuid([u8; UUID_LEN]);

/// The variant field of a UUID, determined by the most significant bits of byte 8.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Variant {
    /// `0xxx`: reserved, NCS backward compatibility.
    Var0,

    /// `10xx`: the RFC 4122 layout, which every UUIDv4 produced by this crate uses.
    Var10,

    /// `110x`: reserved, Microsoft backward compatibility.
    Var110,

    /// `111x`: reserved for future definition.
    Var111,
}

impl Uuid {
    /// Nil UUID (00000000-0000-0000-0000-000000000000)
    pub const NIL: Self = Self([0x00; UUID_LEN]);

    /// Max UUID (ffffffff-ffff-ffff-ffff-ffffffffffff)
    pub const MAX: Self = Self([0xff; UUID_LEN]);

    /// Returns a reference to the underlying byte array.
    pub const fn as_bytes(&self) -> &[u8; UUID_LEN] {
        &self.0
    }

    /// Creates a UUIDv4 from 16 random bytes by overwriting the version and variant bits.
    ///
    /// The remaining 122 bits are taken over as they are, so the result is only as unpredictable
    /// as the input.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uuid4::Uuid;
    ///
    /// let raw = [0xffu8; 16];
    /// let e = Uuid::from_random_bytes_v4(raw);
    /// assert_eq!(&e.encode() as &str, "ffffffff-ffff-4fff-bfff-ffffffffffff");
    /// ```
    pub const fn from_random_bytes_v4(mut bytes: [u8; UUID_LEN]) -> Self {
        let v = CLOCK_SEQ_HI_AND_RESERVED.offset;
        bytes[v] = (bytes[v] & VARIANT_MASK) | VARIANT_BITS;
        let t = TIME_HI_AND_VERSION.offset;
        bytes[t] = (bytes[t] & VERSION_MASK) | VERSION_BITS;
        Self(bytes)
    }

    /// Reports the variant field value of the UUID.
    pub const fn variant(&self) -> Variant {
        match self.0[CLOCK_SEQ_HI_AND_RESERVED.offset] >> 4 {
            0x0..=0x7 => Variant::Var0,
            0x8..=0xb => Variant::Var10,
            0xc..=0xd => Variant::Var110,
            _ => Variant::Var111,
        }
    }

    /// Returns the version field value of the UUID, or `None` if the UUID does not have the
    /// [`Variant::Var10`] variant.
    pub const fn version(&self) -> Option<u8> {
        match self.variant() {
            Variant::Var10 => Some(self.0[TIME_HI_AND_VERSION.offset] >> 4),
            _ => None,
        }
    }

    /// Returns the 8-4-4-4-12 hexadecimal string representation stored in a stack-allocated
    /// structure that can be dereferenced as `str` and [`Display`](fmt::Display)ed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uuid4::Uuid;
    ///
    /// let x = Uuid::from(0x48c51d77_69be_4444_8212_f984f2db2c69u128);
    /// let y = x.encode();
    /// assert_eq!(&y as &str, "48c51d77-69be-4444-8212-f984f2db2c69");
    /// assert_eq!(format!("{}", y), "48c51d77-69be-4444-8212-f984f2db2c69");
    /// ```
    pub fn encode(&self) -> impl ops::Deref<Target = str> + fmt::Display {
        const DIGITS: &[u8; 16] = b"0123456789abcdef";

        let mut buffer = [0u8; STRING_LEN];
        let mut pos = 0;
        for (i, e) in self.0.iter().enumerate() {
            if i == 4 || i == 6 || i == 8 || i == 10 {
                buffer[pos] = b'-';
                pos += 1;
            }
            buffer[pos] = DIGITS[(e >> 4) as usize];
            buffer[pos + 1] = DIGITS[(e & 15) as usize];
            pos += 2;
        }
        debug_assert_eq!(pos, STRING_LEN);
        debug_assert!(buffer.is_ascii());
        UuidStr(buffer)
    }
}

impl fmt::Display for Uuid {
    /// Returns the 8-4-4-4-12 canonical hexadecimal string representation.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

impl From<Uuid> for [u8; UUID_LEN] {
    fn from(src: Uuid) -> Self {
        src.0
    }
}

impl From<[u8; UUID_LEN]> for Uuid {
    fn from(src: [u8; UUID_LEN]) -> Self {
        Self(src)
    }
}

impl AsRef<[u8]> for Uuid {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl From<Uuid> for u128 {
    fn from(src: Uuid) -> Self {
        Self::from_be_bytes(src.0)
    }
}

impl From<u128> for Uuid {
    fn from(src: u128) -> Self {
        Self(src.to_be_bytes())
    }
}

impl From<Uuid> for String {
    fn from(src: Uuid) -> Self {
        src.to_string()
    }
}

/// Concrete return type of [`Uuid::encode()`] containing the stack-allocated 8-4-4-4-12 string
/// representation.
struct UuidStr([u8; STRING_LEN]);

impl ops::Deref for UuidStr {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        debug_assert!(self.0.is_ascii());
        // SAFETY: `encode()` writes only ASCII hex digits and hyphens
        unsafe { str::from_utf8_unchecked(&self.0) }
    }
}

impl fmt::Display for UuidStr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self)
    }
}

#[cfg(feature = "uuid")]
#[cfg_attr(docsrs, doc(cfg(feature = "uuid")))]
mod uuid_support {
    use super::Uuid;

    impl From<Uuid> for uuid::Uuid {
        fn from(src: Uuid) -> Self {
            uuid::Uuid::from_bytes(src.0)
        }
    }

    impl From<uuid::Uuid> for Uuid {
        fn from(src: uuid::Uuid) -> Self {
            Self(src.into_bytes())
        }
    }
}

#[cfg(feature = "serde")]
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
mod serde_support {
    use super::Uuid;
    use serde::Serializer;

    impl serde::Serialize for Uuid {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            if serializer.is_human_readable() {
                serializer.serialize_str(&self.encode())
            } else {
                serializer.serialize_bytes(self.as_bytes())
            }
        }
    }

}
