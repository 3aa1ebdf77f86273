//! Constant-time base64 codec.
//!
//! Character mapping is a bitwise OR of masked candidates, one per
//! disjoint range, with masks from the branch-free comparisons in `ct`.
//! Exactly one candidate survives for a valid input, so the mapping
//! performs no branch and no memory access that depends on the data.
//!
//! Control flow still depends on lengths, and decoding stops at the first
//! non-alphabet byte. Neither reveals the value of an alphabet byte.

use crate::accumulator;
use crate::ct::{ct_eq, ct_ge, ct_le, ct_lt};
use crate::variant::{Alphabet, Variant};
use crate::{check_dst, check_encode_dst, decoded_len, Decoder, Encoder, Error};

/// Branch-free strategy for secret data.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConstantTime;

/// Maps a 6-bit value to its character.
#[inline]
fn sextet_to_char(x: u32, alphabet: Alphabet) -> u8 {
    let (c62, c63) = alphabet.extra_symbols();

    let c = (ct_lt(x, 26) & (x + b'A' as u32))
        | (ct_ge(x, 26) & ct_lt(x, 52) & (x + (b'a' as u32 - 26)))
        | (ct_ge(x, 52) & ct_lt(x, 62) & (x.wrapping_sub(52 - b'0' as u32)))
        | (ct_eq(x, 62) & c62 as u32)
        | (ct_eq(x, 63) & c63 as u32);

    c as u8
}

/// Maps a character to its 6-bit value, or `0xFF` for anything outside the
/// alphabet.
#[inline]
fn char_to_sextet(c: u8, alphabet: Alphabet) -> u8 {
    let (c62, c63) = alphabet.extra_symbols();
    let c = c as u32;

    let x = (ct_ge(c, b'A' as u32) & ct_le(c, b'Z' as u32) & c.wrapping_sub(b'A' as u32))
        | (ct_ge(c, b'a' as u32) & ct_le(c, b'z' as u32) & c.wrapping_sub(b'a' as u32 - 26))
        | (ct_ge(c, b'0' as u32) & ct_le(c, b'9' as u32) & (c + (52 - b'0' as u32)))
        | (ct_eq(c, c62 as u32) & 62)
        | (ct_eq(c, c63 as u32) & 63);

    // x == 0 is either 'A' or no match; the latter becomes 0xFF
    (x | (ct_eq(x, 0) & (ct_eq(c, b'A' as u32) ^ 0xFF))) as u8
}

impl Encoder for ConstantTime {
    fn encode_to_slice(&self, dst: &mut [u8], src: &[u8], variant: Variant) -> Result<(), Error> {
        check_encode_dst(dst, src.len(), variant)?;

        let alphabet = variant.alphabet();
        accumulator::encode_into(dst, src, |x| sextet_to_char(x, alphabet));
        Ok(())
    }
}

impl Decoder for ConstantTime {
    fn decode_to_slice(
        &self,
        dst: &mut [u8],
        encoded: &[u8],
        variant: Variant,
    ) -> Result<usize, Error> {
        check_dst(dst, decoded_len(encoded)?)?;

        let alphabet = variant.alphabet();
        accumulator::decode_from(dst, encoded, 0, 0, variant, |c| char_to_sextet(c, alphabet))
    }
}
