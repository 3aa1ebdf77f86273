//! Table-driven base64 codec.
//!
//! Indexes the alphabet table by data and branches on character ranges.
//! Do not use it for secrets; see [`ConstantTime`](crate::ConstantTime).

use crate::accumulator::{self, INVALID};
use crate::variant::{Alphabet, Variant, PAD};
use crate::{check_dst, check_encode_dst, decoded_len, Decoder, Encoder, Error};

/// Branching, table-driven strategy optimized for throughput.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Fast;

#[inline(always)]
fn encode_triple(out: &mut [u8], b0: u8, b1: u8, b2: u8, table: &[u8; 64]) {
    out[0] = table[(b0 >> 2) as usize];
    out[1] = table[(((b0 & 0x03) << 4) | (b1 >> 4)) as usize];
    out[2] = table[(((b1 & 0x0F) << 2) | (b2 >> 6)) as usize];
    out[3] = table[(b2 & 0x3F) as usize];
}

/// Maps a character to its 6-bit value, or [`INVALID`].
#[inline]
fn decode_sextet(c: u8, alphabet: Alphabet) -> u8 {
    let (c62, c63) = alphabet.extra_symbols();
    match c {
        b'A'..=b'Z' => c - b'A',
        b'a'..=b'z' => c - b'a' + 26,
        b'0'..=b'9' => c - b'0' + 52,
        _ if c == c62 => 62,
        _ if c == c63 => 63,
        _ => INVALID,
    }
}

impl Encoder for Fast {
    fn encode_to_slice(&self, dst: &mut [u8], src: &[u8], variant: Variant) -> Result<(), Error> {
        check_encode_dst(dst, src.len(), variant)?;

        let table = variant.alphabet().symbols();

        // Process 4 groups at a time for better instruction-level parallelism
        let mut blocks = src.chunks_exact(12);
        let mut out_blocks = dst.chunks_exact_mut(16);
        for (block, out) in (&mut blocks).zip(&mut out_blocks) {
            encode_triple(&mut out[0..4], block[0], block[1], block[2], table);
            encode_triple(&mut out[4..8], block[3], block[4], block[5], table);
            encode_triple(&mut out[8..12], block[6], block[7], block[8], table);
            encode_triple(&mut out[12..16], block[9], block[10], block[11], table);
        }

        let rest = blocks.remainder();
        let done = src.len() - rest.len();
        let out = &mut dst[done / 3 * 4..];

        let mut groups = rest.chunks_exact(3);
        let mut out_groups = out.chunks_exact_mut(4);
        for (group, out) in (&mut groups).zip(&mut out_groups) {
            encode_triple(out, group[0], group[1], group[2], table);
        }

        // A padded tail fills a whole 4-byte chunk, so index rather than
        // take the chunk remainder.
        let out = &mut dst[src.len() / 3 * 4..];
        match *groups.remainder() {
            [b0] => {
                out[0] = table[(b0 >> 2) as usize];
                out[1] = table[((b0 & 0x03) << 4) as usize];
                if variant.is_padded() {
                    out[2] = PAD;
                    out[3] = PAD;
                }
            }
            [b0, b1] => {
                out[0] = table[(b0 >> 2) as usize];
                out[1] = table[(((b0 & 0x03) << 4) | (b1 >> 4)) as usize];
                out[2] = table[((b1 & 0x0F) << 2) as usize];
                if variant.is_padded() {
                    out[3] = PAD;
                }
            }
            _ => {}
        }

        Ok(())
    }
}

impl Decoder for Fast {
    fn decode_to_slice(
        &self,
        dst: &mut [u8],
        encoded: &[u8],
        variant: Variant,
    ) -> Result<usize, Error> {
        check_dst(dst, decoded_len(encoded)?)?;

        let alphabet = variant.alphabet();

        // Whole groups go straight through. The first group holding a
        // non-alphabet byte hands over to the accumulator, which owns
        // padding and termination.
        let groups = (encoded.len() / 4).min(dst.len() / 3);
        let mut done = 0;
        for (chunk, out) in encoded[..groups * 4]
            .chunks_exact(4)
            .zip(dst.chunks_exact_mut(3))
        {
            let v0 = decode_sextet(chunk[0], alphabet);
            let v1 = decode_sextet(chunk[1], alphabet);
            let v2 = decode_sextet(chunk[2], alphabet);
            let v3 = decode_sextet(chunk[3], alphabet);
            if (v0 | v1 | v2 | v3) > 63 {
                break;
            }

            out[0] = (v0 << 2) | (v1 >> 4);
            out[1] = (v1 << 4) | (v2 >> 2);
            out[2] = (v2 << 6) | v3;
            done += 1;
        }

        accumulator::decode_from(dst, encoded, done * 4, done * 3, variant, |c| {
            decode_sextet(c, alphabet)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoded_len;

    #[test]
    fn test_decode_sextet_inverts_table() {
        for alphabet in [Alphabet::Standard, Alphabet::UrlSafe] {
            for (i, &c) in alphabet.symbols().iter().enumerate() {
                assert_eq!(decode_sextet(c, alphabet), i as u8);
            }
        }
    }

    #[test]
    fn test_decode_sextet_rejects_other_alphabet_symbols() {
        assert_eq!(decode_sextet(b'-', Alphabet::Standard), INVALID);
        assert_eq!(decode_sextet(b'_', Alphabet::Standard), INVALID);
        assert_eq!(decode_sextet(b'+', Alphabet::UrlSafe), INVALID);
        assert_eq!(decode_sextet(b'/', Alphabet::UrlSafe), INVALID);
        assert_eq!(decode_sextet(PAD, Alphabet::Standard), INVALID);
    }

    #[test]
    fn test_encode_unrolled_and_tail_paths() {
        // 12-byte blocks, leftover triples and 1/2-byte tails all meet here
        let data: Vec<u8> = (0..29).collect();
        let mut out = vec![0u8; encoded_len(data.len(), Variant::Standard)];
        Fast.encode_to_slice(&mut out, &data, Variant::Standard).unwrap();
        assert_eq!(out, b"AAECAwQFBgcICQoLDA0ODxAREhMUFRYXGBkaGxw=");
    }

    #[test]
    fn test_encode_padded_tail_fills_last_group() {
        assert_eq!(Fast.encode(&[0xFF], Variant::Standard), "/w==");
        assert_eq!(Fast.encode(b"fo", Variant::UrlSafe), "Zm8=");
        assert_eq!(Fast.encode(b"f", Variant::StandardNoPadding), "Zg");
        // Tails after unrolled blocks and leftover triples
        for len in 0..40usize {
            let data: Vec<u8> = (0..len as u8).collect();
            for variant in Variant::ALL {
                assert_eq!(
                    Fast.encode(&data, variant),
                    crate::ConstantTime.encode(&data, variant),
                    "len {} {}",
                    len,
                    variant
                );
            }
        }
    }

    #[test]
    fn test_decode_fast_path_hands_over_to_accumulator() {
        // Second group carries the padding
        let mut out = vec![0u8; 4];
        let written = Fast
            .decode_to_slice(&mut out, b"Zm9vZg==", Variant::Standard)
            .unwrap();
        assert_eq!(&out[..written], b"foof");
    }
}
