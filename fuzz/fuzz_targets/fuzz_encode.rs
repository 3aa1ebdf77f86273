#![no_main]

use base64_external::engine::general_purpose::{
    STANDARD, STANDARD_NO_PAD, URL_SAFE, URL_SAFE_NO_PAD,
};
use base64_external::Engine;
use ctbase64::{ConstantTime, Decoder, Encoder, Fast, Variant};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let engines = [
        (Variant::Standard, &STANDARD),
        (Variant::StandardNoPadding, &STANDARD_NO_PAD),
        (Variant::UrlSafe, &URL_SAFE),
        (Variant::UrlSafeNoPadding, &URL_SAFE_NO_PAD),
    ];

    for (variant, engine) in engines {
        let encoded = Fast.encode(data, variant);
        assert_eq!(encoded, ConstantTime.encode(data, variant), "Strategy encode mismatch");

        // Conformance with external crate
        assert_eq!(encoded, engine.encode(data), "External crate encode mismatch");

        let decoded = ConstantTime.decode(encoded.as_bytes(), variant);
        assert_eq!(decoded.as_deref(), Ok(data), "Roundtrip failed");
    }
});
