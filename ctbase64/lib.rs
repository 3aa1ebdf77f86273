//! Base64 encoding and decoding with two interchangeable strategies.
//!
//! - [`Fast`] uses table lookups and branches freely. Use it for public
//!   data where throughput matters.
//! - [`ConstantTime`] maps characters with branch-free arithmetic and never
//!   indexes a table by a data byte. Use it for secrets such as key
//!   material, where byte values must not leak through timing or the
//!   cache.
//!
//! Both implement the [`Encoder`] and [`Decoder`] traits and produce
//! byte-identical output for every input and [`Variant`].
//!
//! # Example
//!
//! ```
//! use ctbase64::{ConstantTime, Decoder, Encoder, Fast, Variant};
//!
//! let encoded = Fast.encode(b"Hello", Variant::Standard);
//! assert_eq!(encoded, "SGVsbG8=");
//! assert_eq!(ConstantTime.encode(b"Hello", Variant::Standard), encoded);
//!
//! let decoded = ConstantTime.decode(encoded.as_bytes(), Variant::Standard).unwrap();
//! assert_eq!(decoded, b"Hello");
//! ```

mod accumulator;
mod constant_time;
mod ct;
mod fast;
mod length;
mod variant;

#[cfg(test)]
#[path = "codec_tests.rs"]
mod tests;

pub use constant_time::ConstantTime;
pub use fast::Fast;
pub use length::{checked_encoded_len, decoded_len, encoded_len};
pub use variant::{Alphabet, ParseVariantError, Variant, ALPHABET_STANDARD, ALPHABET_URL, PAD};

/// Error type for base64 operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Destination buffer length differs from the computed length.
    #[error("output buffer holds {actual} bytes but {expected} are required")]
    Overflow { expected: usize, actual: usize },
    /// Input is too short to hold any data.
    #[error("invalid input length: {0}")]
    InvalidLength(usize),
    /// Padded input is missing `=` characters, or has more data than its
    /// padding allows for.
    #[error("invalid padding")]
    InvalidPadding,
    /// Unpadded input stopped at a non-alphabet byte before its end.
    #[error("unexpected byte 0x{byte:02x} at offset {offset}")]
    TrailingData { offset: usize, byte: u8 },
}

impl Error {
    /// True for a destination buffer of the wrong size.
    pub fn is_overflow(&self) -> bool {
        matches!(self, Error::Overflow { .. })
    }

    /// True for input that cannot be decoded.
    pub fn is_malformed(&self) -> bool {
        !self.is_overflow()
    }
}

/// Checks that a caller-supplied buffer has exactly the required length.
#[inline]
pub(crate) fn check_dst(dst: &[u8], expected: usize) -> Result<(), Error> {
    if dst.len() != expected {
        tracing::debug!(expected, actual = dst.len(), "destination length mismatch");
        return Err(Error::Overflow {
            expected,
            actual: dst.len(),
        });
    }
    Ok(())
}

/// Checks an encode destination against the encoded length of `src_len`
/// bytes. A length that does not fit in `usize` can never match.
#[inline]
pub(crate) fn check_encode_dst(dst: &[u8], src_len: usize, variant: Variant) -> Result<(), Error> {
    match checked_encoded_len(src_len, variant) {
        Some(expected) => check_dst(dst, expected),
        None => {
            tracing::debug!(input = src_len, "encoded length overflows usize");
            Err(Error::Overflow {
                expected: usize::MAX,
                actual: dst.len(),
            })
        }
    }
}

/// A strategy that can encode bytes to base64.
pub trait Encoder {
    /// Encodes `src` into `dst`, which must be exactly
    /// [`encoded_len`]`(src.len(), variant)` bytes long.
    ///
    /// Fails with [`Error::Overflow`] before writing anything if it is not.
    fn encode_to_slice(&self, dst: &mut [u8], src: &[u8], variant: Variant) -> Result<(), Error>;

    /// Length of the encoding of `len` bytes.
    #[inline]
    fn encoded_len(&self, len: usize, variant: Variant) -> usize {
        encoded_len(len, variant)
    }

    /// Encodes `src` into a freshly allocated string.
    fn encode(&self, src: &[u8], variant: Variant) -> String {
        let mut output = vec![0u8; encoded_len(src.len(), variant)];
        tracing::trace!(input = src.len(), output = output.len(), %variant, "encode");

        self.encode_to_slice(&mut output, src, variant)
            .expect("output sized by encoded_len");

        // All bytes are alphabet symbols or '=', which is valid UTF-8
        String::from_utf8(output).expect("base64 output is always valid UTF-8")
    }
}

/// A strategy that can decode base64 to bytes.
pub trait Decoder {
    /// Decodes `encoded` into `dst`, which must be exactly
    /// [`decoded_len`]`(encoded)` bytes long.
    ///
    /// Returns the number of bytes written. Padded variants treat the first
    /// non-alphabet byte as the start of padding, so this can be less than
    /// `dst.len()`.
    fn decode_to_slice(&self, dst: &mut [u8], encoded: &[u8], variant: Variant)
        -> Result<usize, Error>;

    /// Upper bound on the decoded length; see [`decoded_len`].
    #[inline]
    fn decoded_len(&self, encoded: &[u8]) -> Result<usize, Error> {
        decoded_len(encoded)
    }

    /// Decodes `encoded` into a freshly allocated buffer.
    fn decode(&self, encoded: &[u8], variant: Variant) -> Result<Vec<u8>, Error> {
        let mut output = vec![0u8; decoded_len(encoded)?];
        let written = self.decode_to_slice(&mut output, encoded, variant)?;
        output.truncate(written);
        tracing::trace!(input = encoded.len(), output = written, %variant, "decode");
        Ok(output)
    }
}

/// Runtime choice between the two strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    /// Table-driven; see [`Fast`].
    #[default]
    Fast,
    /// Branch-free; see [`ConstantTime`].
    ConstantTime,
}

impl Strategy {
    /// The encoder for this strategy.
    pub fn encoder(self) -> &'static dyn Encoder {
        match self {
            Strategy::Fast => &Fast,
            Strategy::ConstantTime => &ConstantTime,
        }
    }

    /// The decoder for this strategy.
    pub fn decoder(self) -> &'static dyn Decoder {
        match self {
            Strategy::Fast => &Fast,
            Strategy::ConstantTime => &ConstantTime,
        }
    }
}

/// Encodes data with the fast strategy.
///
/// # Example
///
/// ```
/// use ctbase64::{encode, Variant};
///
/// assert_eq!(encode([0xFF], Variant::Standard), "/w==");
/// assert_eq!(encode([0xFF], Variant::UrlSafeNoPadding), "_w");
/// ```
pub fn encode(data: impl AsRef<[u8]>, variant: Variant) -> String {
    Fast.encode(data.as_ref(), variant)
}

/// Decodes data with the fast strategy.
///
/// # Example
///
/// ```
/// use ctbase64::{decode, Variant};
///
/// assert_eq!(decode("/w==", Variant::Standard).unwrap(), [0xFF]);
/// assert_eq!(decode("_w", Variant::UrlSafeNoPadding).unwrap(), [0xFF]);
/// ```
pub fn decode(input: impl AsRef<[u8]>, variant: Variant) -> Result<Vec<u8>, Error> {
    Fast.decode(input.as_ref(), variant)
}

/// Encodes data with the constant-time strategy.
pub fn encode_ct(data: impl AsRef<[u8]>, variant: Variant) -> String {
    ConstantTime.encode(data.as_ref(), variant)
}

/// Decodes data with the constant-time strategy.
pub fn decode_ct(input: impl AsRef<[u8]>, variant: Variant) -> Result<Vec<u8>, Error> {
    ConstantTime.decode(input.as_ref(), variant)
}
