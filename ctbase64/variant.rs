//! Base64 variants: alphabet choice crossed with padding policy.

use std::fmt;
use std::str::FromStr;

/// Standard base64 alphabet (RFC 4648).
pub const ALPHABET_STANDARD: &[u8; 64] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

/// URL-safe base64 alphabet (RFC 4648).
pub const ALPHABET_URL: &[u8; 64] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_";

/// Padding character.
pub const PAD: u8 = b'=';

const URL_SAFE: u8 = 0b01;
const NO_PADDING: u8 = 0b10;

/// The 64-symbol set used to map 6-bit values to characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Alphabet {
    /// `A-Z a-z 0-9 + /`
    Standard,
    /// `A-Z a-z 0-9 - _`
    UrlSafe,
}

impl Alphabet {
    /// Returns the symbol table for this alphabet.
    #[inline]
    pub const fn symbols(self) -> &'static [u8; 64] {
        match self {
            Alphabet::Standard => ALPHABET_STANDARD,
            Alphabet::UrlSafe => ALPHABET_URL,
        }
    }

    /// Characters for the values 62 and 63, the only two that differ
    /// between alphabets.
    #[inline]
    pub(crate) const fn extra_symbols(self) -> (u8, u8) {
        match self {
            Alphabet::Standard => (b'+', b'/'),
            Alphabet::UrlSafe => (b'-', b'_'),
        }
    }
}

/// One of the four supported base64 flavors.
///
/// The discriminant is the OR of two independent flags, so every
/// combination of alphabet and padding is valid.
///
/// # Example
///
/// ```
/// use ctbase64::{Alphabet, Variant};
///
/// let v = Variant::new(Alphabet::UrlSafe, false);
/// assert_eq!(v, Variant::UrlSafeNoPadding);
/// assert!(v.is_url_safe());
/// assert!(!v.is_padded());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum Variant {
    /// Standard alphabet, `=` padded.
    #[default]
    Standard = 0,
    /// Standard alphabet, no padding.
    StandardNoPadding = NO_PADDING,
    /// URL-safe alphabet, `=` padded.
    UrlSafe = URL_SAFE,
    /// URL-safe alphabet, no padding.
    UrlSafeNoPadding = URL_SAFE | NO_PADDING,
}

impl Variant {
    /// All four variants.
    pub const ALL: [Variant; 4] = [
        Variant::Standard,
        Variant::StandardNoPadding,
        Variant::UrlSafe,
        Variant::UrlSafeNoPadding,
    ];

    /// Builds a variant from its two flags.
    pub const fn new(alphabet: Alphabet, padded: bool) -> Self {
        match (alphabet, padded) {
            (Alphabet::Standard, true) => Variant::Standard,
            (Alphabet::Standard, false) => Variant::StandardNoPadding,
            (Alphabet::UrlSafe, true) => Variant::UrlSafe,
            (Alphabet::UrlSafe, false) => Variant::UrlSafeNoPadding,
        }
    }

    #[inline]
    const fn bits(self) -> u8 {
        self as u8
    }

    /// Whether `-` and `_` replace `+` and `/`.
    #[inline]
    pub const fn is_url_safe(self) -> bool {
        self.bits() & URL_SAFE != 0
    }

    /// Whether output is padded with `=` to a multiple of 4 characters.
    #[inline]
    pub const fn is_padded(self) -> bool {
        self.bits() & NO_PADDING == 0
    }

    /// The alphabet selected by this variant.
    #[inline]
    pub const fn alphabet(self) -> Alphabet {
        if self.is_url_safe() {
            Alphabet::UrlSafe
        } else {
            Alphabet::Standard
        }
    }

    /// Name used by `Display` and `FromStr`.
    pub const fn name(self) -> &'static str {
        match self {
            Variant::Standard => "standard",
            Variant::StandardNoPadding => "standard-nopad",
            Variant::UrlSafe => "url-safe",
            Variant::UrlSafeNoPadding => "url-safe-nopad",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a string names no known variant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown base64 variant: '{0}'")]
pub struct ParseVariantError(pub String);

impl FromStr for Variant {
    type Err = ParseVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Variant::ALL
            .into_iter()
            .find(|v| v.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseVariantError(s.to_string()))
    }
}
