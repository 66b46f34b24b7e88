#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Must never panic, whatever the header claims.
    let _ = zensurface::ImageInfo::from_bytes(data);
    let _ = zensurface::decode_bmp(data);

    // A failed decode must leave the target as it was.
    let mut target = zensurface::Surface::new(2, 2, zensurface::BitDepth::Bgr24);
    target.rgb_filter_or(1, 2, 3);
    let before = target.clone();
    if zensurface::bmp::decode_into(data, &mut target).is_err() {
        assert_eq!(target, before, "failed decode modified the target");
    }
});
