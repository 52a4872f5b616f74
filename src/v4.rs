//! UUIDv4 generator functions.

use rand::{rngs::OsRng, CryptoRng, RngCore};

use crate::layout::UUID_LEN;
use crate::{RandomSourceError, Uuid};

/// Generates a UUIDv4 object from the operating system's secure random number source.
///
/// Every call reads fresh bytes from [`OsRng`]; nothing is cached or shared between calls, so
/// this function can be called from any number of threads at once.
///
/// # Errors
///
/// Returns [`RandomSourceError`] if the operating system cannot supply 16 random bytes.
///
/// # Examples
///
/// ```rust
/// let uuid = uuid4::uuid4()?;
/// println!("{}", uuid); // e.g., "2ca4b2ce-6c13-40d4-bccf-37d222820f6f"
/// println!("{:?}", uuid.as_bytes()); // as 16-byte big-endian array
/// # Ok::<(), uuid4::RandomSourceError>(())
/// ```
pub fn uuid4() -> Result<Uuid, RandomSourceError> {
    uuid4_from(&mut OsRng)
}

/// Generates a UUIDv4 object from a caller-supplied cryptographically secure random number
/// generator.
///
/// # Errors
///
/// Returns [`RandomSourceError`] if `rng` fails to fill the 16-byte buffer. No identifier is
/// produced in that case.
///
/// # Examples
///
/// ```rust
/// use rand::rngs::OsRng;
///
/// let uuid = uuid4::uuid4_from(&mut OsRng)?;
/// assert_eq!(uuid.version(), Some(4));
/// # Ok::<(), uuid4::RandomSourceError>(())
/// ```
pub fn uuid4_from<R: RngCore + CryptoRng + ?Sized>(
    rng: &mut R,
) -> Result<Uuid, RandomSourceError> {
    let mut bytes = [0u8; UUID_LEN];
    rng.try_fill_bytes(&mut bytes).map_err(|err| {
        log::error!("could not retrieve random bytes for uuid: {}", err);
        RandomSourceError::from(err)
    })?;
    Ok(Uuid::from_random_bytes_v4(bytes))
}

/// Generates a UUIDv4 as a 16-byte big-endian array.
///
/// # Errors
///
/// Returns [`RandomSourceError`] if the operating system cannot supply 16 random bytes.
///
/// # Examples
///
/// ```rust
/// let bytes = uuid4::generate_bytes()?;
/// assert_eq!(bytes[6] >> 4, 4);
/// assert_eq!(bytes[8] >> 6, 0b10);
/// # Ok::<(), uuid4::RandomSourceError>(())
/// ```
pub fn generate_bytes() -> Result<[u8; UUID_LEN], RandomSourceError> {
    generate_bytes_from(&mut OsRng)
}

/// Generates a UUIDv4 as a 16-byte big-endian array using `rng`.
pub fn generate_bytes_from<R: RngCore + CryptoRng + ?Sized>(
    rng: &mut R,
) -> Result<[u8; UUID_LEN], RandomSourceError> {
    uuid4_from(rng).map(<[u8; UUID_LEN]>::from)
}

/// Generates a UUIDv4 in the 8-4-4-4-12 canonical hexadecimal string representation.
///
/// # Errors
///
/// Returns [`RandomSourceError`] if the operating system cannot supply 16 random bytes.
///
/// # Examples
///
/// ```rust
/// let text = uuid4::generate_string()?;
/// assert_eq!(text.len(), 36);
/// assert_eq!(&text[14..15], "4");
/// # Ok::<(), uuid4::RandomSourceError>(())
/// ```
pub fn generate_string() -> Result<String, RandomSourceError> {
    generate_string_from(&mut OsRng)
}

/// Generates a UUIDv4 in the 8-4-4-4-12 canonical hexadecimal string representation using `rng`.
pub fn generate_string_from<R: RngCore + CryptoRng + ?Sized>(
    rng: &mut R,
) -> Result<String, RandomSourceError> {
    uuid4_from(rng).map(String::from)
}

/// Returns an infinite iterator that draws a new UUIDv4 from the operating system's secure
/// random number source for each call of `next()`.
///
/// # Examples
///
/// ```rust
/// uuid4::iter()
///     .enumerate()
///     .skip(4)
///     .take(4)
///     .for_each(|(i, e)| println!("[{}] {}", i, e.unwrap()));
/// ```
pub fn iter() -> Uuid4Iter {
    Uuid4Iter { _priv: () }
}

/// Infinite iterator returned by [`iter()`].
///
/// The iterator holds no state; each item is independent of the others.
#[derive(Clone, Debug)]
pub struct Uuid4Iter {
    _priv: (),
}

impl Iterator for Uuid4Iter {
    type Item = Result<Uuid, RandomSourceError>;

    fn next(&mut self) -> Option<Self::Item> {
        Some(uuid4())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl std::iter::FusedIterator for Uuid4Iter {}


#[cfg(test)]
mod tests_custom_rng {
    use super::{generate_bytes_from, generate_string_from, uuid4_from};
    use rand::{CryptoRng, RngCore};

    /// Replays a fixed byte sequence.
    struct FixtureRng(&'static [u8]);

    impl RngCore for FixtureRng {
        fn next_u32(&mut self) -> u32 {
            unimplemented!()
        }

        fn next_u64(&mut self) -> u64 {
            unimplemented!()
        }

        fn fill_bytes(&mut self, dest: &mut [u8]) {
            self.try_fill_bytes(dest).unwrap()
        }

        fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
            dest.copy_from_slice(&self.0[..dest.len()]);
            Ok(())
        }
    }

    impl CryptoRng for FixtureRng {}

    /// Always fails, as an unavailable entropy source does.
    struct FailingRng;

    impl RngCore for FailingRng {
        fn next_u32(&mut self) -> u32 {
            unimplemented!()
        }

        fn next_u64(&mut self) -> u64 {
            unimplemented!()
        }

        fn fill_bytes(&mut self, dest: &mut [u8]) {
            self.try_fill_bytes(dest).unwrap()
        }

        fn try_fill_bytes(&mut self, _: &mut [u8]) -> Result<(), rand::Error> {
            Err(rand::Error::new("entropy source unavailable"))
        }
    }

    impl CryptoRng for FailingRng {}

    const RAW: &[u8] = &[
        0x48, 0xc5, 0x1d, 0x77, 0x69, 0xbe, 0xa4, 0x44, 0xc2, 0x12, 0xf9, 0x84, 0xf2, 0xdb, 0x2c,
        0x69,
    ];

    /// Masks fixture bytes exactly
    #[test]
    fn masks_fixture_bytes_exactly() {
        let bytes = generate_bytes_from(&mut FixtureRng(RAW)).unwrap();
        assert_eq!(
            bytes,
            [
                0x48, 0xc5, 0x1d, 0x77, 0x69, 0xbe, 0x44, 0x44, 0x82, 0x12, 0xf9, 0x84, 0xf2, 0xdb,
                0x2c, 0x69,
            ]
        );

        let text = generate_string_from(&mut FixtureRng(RAW)).unwrap();
        assert_eq!(text, "48c51d77-69be-4444-8212-f984f2db2c69");

        let e = uuid4_from(&mut FixtureRng(RAW)).unwrap();
        assert_eq!(e.as_bytes(), &bytes);
        assert_eq!(e.to_string(), text);
    }

    /// Returns error without identifier if source fails
    #[test]
    fn returns_error_without_identifier_if_source_fails() {
        let err = uuid4_from(&mut FailingRng).unwrap_err();
        assert_eq!(
            err.to_string(),
            "could not obtain random bytes: entropy source unavailable"
        );
        assert!(std::error::Error::source(&err).is_some());
        assert_eq!(err.raw_os_error(), None);

        assert!(generate_bytes_from(&mut FailingRng).is_err());
        assert!(generate_string_from(&mut FailingRng).is_err());
    }

    /// Accepts trait objects as source
    #[test]
    fn accepts_trait_objects_as_source() {
        use rand::rngs::OsRng;

        trait SecureRng: RngCore + CryptoRng {}
        impl<T: RngCore + CryptoRng> SecureRng for T {}

        let mut sources: Vec<Box<dyn SecureRng>> = vec![Box::new(OsRng), Box::new(FailingRng)];
        assert!(uuid4_from(sources[0].as_mut()).is_ok());
        assert!(uuid4_from(sources[1].as_mut()).is_err());
    }
}
