#![no_main]

use arbitrary::Arbitrary;
use ctbase64::{ConstantTime, Decoder, Fast, Variant};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input<'a> {
    url_safe: bool,
    padded: bool,
    encoded: &'a [u8],
}

fuzz_target!(|input: Input<'_>| {
    let alphabet = if input.url_safe {
        ctbase64::Alphabet::UrlSafe
    } else {
        ctbase64::Alphabet::Standard
    };
    let variant = Variant::new(alphabet, input.padded);

    // Arbitrary input must never panic, and both strategies must agree
    let fast = Fast.decode(input.encoded, variant);
    let ct = ConstantTime.decode(input.encoded, variant);
    assert_eq!(fast, ct, "Strategy decode mismatch");
});
