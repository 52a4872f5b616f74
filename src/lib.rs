//! A Rust implementation of UUID version 4
//!
//! ```rust
//! let uuid = uuid4::uuid4()?;
//! println!("{}", uuid); // e.g., "2ca4b2ce-6c13-40d4-bccf-37d222820f6f"
//! println!("{:?}", uuid.as_bytes()); // as 16-byte big-endian array
//!
//! let uuid_bytes: [u8; 16] = uuid4::generate_bytes()?;
//! let uuid_string: String = uuid4::generate_string()?;
//! # Ok::<(), uuid4::RandomSourceError>(())
//! ```
//!
//! See [RFC 4122](https://www.rfc-editor.org/rfc/rfc4122#section-4.4).
//!
//! # Field and bit layout
//!
//! This implementation produces identifiers with the following bit layout:
//!
//! ```text
//!  0                   1                   2                   3
//!  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                            random                             |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |            random             |  ver  |        random         |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |var|                        random                             |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                            random                             |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! ```
//!
//! Where:
//!
//! - The 4-bit `ver` field is set at `0100`.
//! - The 2-bit `var` field is set at `10`.
//! - The remaining 122 `random` bits are filled with bytes read from the operating system's
//!   cryptographically secure random number source.
//!
//! The byte offsets of the RFC 4122 field names are available in the [`layout`] module.
//!
//! # Errors
//!
//! Generation fails only when the random number source cannot supply the bytes, in which case
//! [`RandomSourceError`] is returned and no identifier is produced. The failure is also reported
//! through the [`log`](https://docs.rs/log) facade at the error level.
//!
//! # Crate features
//!
//! Optional features:
//!
//! - `serde` enables serialization of [`Uuid`] through `serde`.
//! - `uuid` enables conversion from/to the [`uuid`](https://docs.rs/uuid) crate's `Uuid` type.

#![cfg_attr(docsrs, feature(doc_cfg))]

mod error;
pub use error::RandomSourceError;

mod id;
pub use id::{Uuid, Variant};

pub mod layout;

mod v4;
pub use v4::{
    generate_bytes, generate_bytes_from, generate_string, generate_string_from, iter, uuid4,
    uuid4_from, Uuid4Iter,
};
