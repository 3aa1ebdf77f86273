//! Bit accumulator shared by both strategies.
//!
//! The character mapping is passed in, so the fast and constant-time
//! codecs run the exact same packing, padding and termination logic.

use crate::variant::{Variant, PAD};
use crate::Error;

/// Marker returned by a character-to-sextet mapping for non-alphabet bytes.
pub(crate) const INVALID: u8 = 0xFF;

/// Packs `src` into 6-bit symbols, mapping each through `to_char`.
///
/// `dst` must already be exactly `encoded_len(src.len(), variant)` long;
/// every position after the last symbol is filled with `=`.
#[inline]
pub(crate) fn encode_into<F>(dst: &mut [u8], src: &[u8], to_char: F)
where
    F: Fn(u32) -> u8,
{
    let mut acc: u32 = 0;
    let mut acc_len = 0u32;
    let mut out_pos = 0;

    for &byte in src {
        acc = (acc << 8) | byte as u32;
        acc_len += 8;
        while acc_len >= 6 {
            acc_len -= 6;
            dst[out_pos] = to_char((acc >> acc_len) & 0x3F);
            out_pos += 1;
        }
    }

    if acc_len > 0 {
        dst[out_pos] = to_char((acc << (6 - acc_len)) & 0x3F);
        out_pos += 1;
    }

    dst[out_pos..].fill(PAD);
}

/// Decodes `encoded[in_pos..]` into `dst[out_pos..]`, mapping each byte
/// through `to_sextet`.
///
/// Decoding stops at the first byte `to_sextet` rejects. Padded variants
/// then require `leftover_bits / 2` `=` characters and ignore whatever
/// follows them. Unpadded variants require the whole input to have been
/// consumed. Returns the total number of bytes written to `dst`.
pub(crate) fn decode_from<F>(
    dst: &mut [u8],
    encoded: &[u8],
    mut in_pos: usize,
    mut out_pos: usize,
    variant: Variant,
    to_sextet: F,
) -> Result<usize, Error>
where
    F: Fn(u8) -> u8,
{
    let mut acc: u32 = 0;
    let mut acc_len = 0u32;

    while let Some(&c) = encoded.get(in_pos) {
        let d = to_sextet(c);
        if d == INVALID {
            break;
        }

        acc = (acc << 6) | d as u32;
        acc_len += 6;
        if acc_len >= 8 {
            acc_len -= 8;
            // More data than the trailing '=' count allows for.
            let Some(slot) = dst.get_mut(out_pos) else {
                tracing::debug!(offset = in_pos, "data overruns padded length");
                return Err(Error::InvalidPadding);
            };
            *slot = (acc >> acc_len) as u8;
            out_pos += 1;
        }

        in_pos += 1;
    }

    if variant.is_padded() {
        let mut pad_len = acc_len / 2;
        while pad_len > 0 {
            if encoded.get(in_pos) != Some(&PAD) {
                tracing::debug!(offset = in_pos, missing = pad_len, "missing padding");
                return Err(Error::InvalidPadding);
            }
            pad_len -= 1;
            in_pos += 1;
        }
    } else if let Some(&byte) = encoded.get(in_pos) {
        tracing::debug!(offset = in_pos, "unpadded input not fully consumed");
        return Err(Error::TrailingData {
            offset: in_pos,
            byte,
        });
    }

    Ok(out_pos)
}
