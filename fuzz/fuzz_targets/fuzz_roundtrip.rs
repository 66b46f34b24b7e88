#![no_main]
use libfuzzer_sys::fuzz_target;
use zensurface::*;

fuzz_target!(|data: &[u8]| {
    // Anything that decodes must re-encode to the exact same bytes.
    let Ok(decoded) = decode_bmp(data) else {
        return;
    };

    let reencoded = encode_bmp(&decoded);
    let Ok(decoded2) = decode_bmp(&reencoded) else {
        panic!("re-encoded data failed to decode");
    };

    assert_eq!(decoded, decoded2, "roundtrip surface mismatch");
    assert_eq!(encode_bmp(&decoded2), reencoded);

    // Kernels must stay in bounds for any decodable size.
    let mut s = decoded2;
    s.rgb_filter_xor(0xFF, 0x00, 0xFF);
    s.translate(1, -1);
    s.or(&decoded);
    let _ = s.resized(3, 2);
});
