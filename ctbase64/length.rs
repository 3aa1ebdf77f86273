//! Length arithmetic shared by both strategies.

use crate::variant::{Variant, PAD};
use crate::Error;

/// Calculates the encoded length for a given input length.
///
/// Padded variants round up to whole 4-character groups. Unpadded variants
/// emit 2 characters for a trailing single byte and 3 for a trailing pair.
///
/// # Example
///
/// ```
/// use ctbase64::{encoded_len, Variant};
///
/// assert_eq!(encoded_len(3, Variant::Standard), 4);
/// assert_eq!(encoded_len(1, Variant::Standard), 4);
/// assert_eq!(encoded_len(1, Variant::StandardNoPadding), 2);
/// ```
///
/// # Panics
///
/// Panics if the encoded length does not fit in `usize`; see
/// [`checked_encoded_len`].
#[inline]
pub const fn encoded_len(len: usize, variant: Variant) -> usize {
    match checked_encoded_len(len, variant) {
        Some(n) => n,
        None => panic!("encoded length overflows usize"),
    }
}

/// Like [`encoded_len`], but returns `None` when the result does not fit
/// in `usize`.
#[inline]
pub const fn checked_encoded_len(len: usize, variant: Variant) -> Option<usize> {
    // Whole groups and tail are computed apart so no intermediate wraps
    let tail = match (len % 3, variant.is_padded()) {
        (0, _) => 0,
        (_, true) => 4,
        (rem, false) => (rem * 4 + 2) / 3,
    };
    match (len / 3).checked_mul(4) {
        Some(groups) => groups.checked_add(tail),
        None => None,
    }
}

/// Calculates the decoded length of a base64 buffer.
///
/// Only the final two positions are inspected for `=`, so the result is
/// the same for every variant. Empty input decodes to nothing; a single
/// character is too short to hold any data.
///
/// # Example
///
/// ```
/// use ctbase64::decoded_len;
///
/// assert_eq!(decoded_len(b"/w==").unwrap(), 1);
/// assert_eq!(decoded_len(b"_w").unwrap(), 1);
/// assert!(decoded_len(b"Z").is_err());
/// ```
#[inline]
pub fn decoded_len(encoded: &[u8]) -> Result<usize, Error> {
    let padding = match encoded {
        [] => return Ok(0),
        [_] => {
            tracing::debug!(len = encoded.len(), "input too short to decode");
            return Err(Error::InvalidLength(encoded.len()));
        }
        [.., PAD, PAD] => 2,
        [.., PAD] => 1,
        _ => 0,
    };

    // floor(3n / 4) without overflowing for huge n
    let len = encoded.len();
    let raw = len / 4 * 3 + (len % 4) * 3 / 4;
    Ok(raw.saturating_sub(padding))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encoded_len() {
        let cases = [
            (0, 0, 0),
            (1, 4, 2),
            (2, 4, 3),
            (3, 4, 4),
            (4, 8, 6),
            (5, 8, 7),
            (6, 8, 8),
            (64, 88, 86),
        ];
        for (len, padded, unpadded) in cases {
            assert_eq!(encoded_len(len, Variant::Standard), padded);
            assert_eq!(encoded_len(len, Variant::UrlSafe), padded);
            assert_eq!(encoded_len(len, Variant::StandardNoPadding), unpadded);
            assert_eq!(encoded_len(len, Variant::UrlSafeNoPadding), unpadded);
        }
    }

    #[test]
    fn test_encoded_len_matches_group_arithmetic() {
        for len in 0..300usize {
            let full = len / 3 * 4;
            let tail = match len % 3 {
                0 => 0,
                1 => 2,
                _ => 3,
            };
            assert_eq!(encoded_len(len, Variant::StandardNoPadding), full + tail);
            assert_eq!(
                encoded_len(len, Variant::Standard),
                full + if tail == 0 { 0 } else { 4 }
            );
        }
    }

    #[test]
    fn test_encoded_len_large_inputs() {
        // Naive 4 * len would wrap for every one of these
        let limit = usize::MAX / 4 * 3;
        for len in [usize::MAX / 4 + 1, usize::MAX / 2, limit - 1, limit] {
            let groups = (len / 3) as u128 * 4;
            let padded = groups + if len % 3 == 0 { 0 } else { 4 };
            let unpadded = groups + [0, 2, 3][len % 3];
            assert_eq!(encoded_len(len, Variant::Standard) as u128, padded);
            assert_eq!(encoded_len(len, Variant::UrlSafeNoPadding) as u128, unpadded);
        }
    }

    #[test]
    fn test_checked_encoded_len_overflow() {
        for variant in Variant::ALL {
            assert_eq!(checked_encoded_len(usize::MAX, variant), None);
            assert_eq!(checked_encoded_len(5, variant), Some(encoded_len(5, variant)));
        }
    }

    #[test]
    #[should_panic(expected = "encoded length overflows usize")]
    fn test_encoded_len_panics_on_overflow() {
        encoded_len(usize::MAX, Variant::Standard);
    }

    #[test]
    fn test_decoded_len() {
        assert_eq!(decoded_len(b"").unwrap(), 0);
        assert_eq!(decoded_len(b"Zg==").unwrap(), 1);
        assert_eq!(decoded_len(b"Zm8=").unwrap(), 2);
        assert_eq!(decoded_len(b"Zm9v").unwrap(), 3);
        assert_eq!(decoded_len(b"Zg").unwrap(), 1);
        assert_eq!(decoded_len(b"Zm8").unwrap(), 2);
        assert_eq!(decoded_len(b"Zm9vYg").unwrap(), 4);
    }

    #[test]
    fn test_decoded_len_only_counts_trailing_padding() {
        // '=' before a non-'=' last character is not padding.
        assert_eq!(decoded_len(b"Zm=v").unwrap(), 3);
        assert_eq!(decoded_len(b"=").unwrap_err(), Error::InvalidLength(1));
        assert_eq!(decoded_len(b"==").unwrap(), 0);
    }

    #[test]
    fn test_decoded_len_too_short() {
        assert_eq!(decoded_len(b"Z"), Err(Error::InvalidLength(1)));
    }
}
