use zensurface::*;

fn noise(w: u32, h: u32, seed: u32) -> Surface {
    let mut s = Surface::new(w, h, BitDepth::Bgr24);
    let mut state: u32 = seed;
    for y in 0..h {
        for x in 0..w {
            let mut next = || {
                state ^= state << 13;
                state ^= state >> 17;
                state ^= state << 5;
                state as u8
            };
            let color = BGR8 {
                b: next(),
                g: next(),
                r: next(),
            };
            s.set_pixel(x, y, color);
        }
    }
    s
}

fn is_all_zero(s: &Surface) -> bool {
    s.pixels().iter().all(|&b| b == 0)
}

#[test]
fn and_with_all_ones_is_noop() {
    for (w, h) in [(1, 1), (3, 2), (7, 5), (0, 4)] {
        let mut s = noise(w, h, 0xDEAD_BEEF);
        let before = s.clone();
        s.rgb_filter_and(0xFF, 0xFF, 0xFF);
        assert_eq!(s, before);
    }
}

#[test]
fn xor_twice_is_noop() {
    for c in [0x00u8, 0x5A, 0xFF] {
        let mut s = noise(5, 3, 0x1234_5678);
        let before = s.clone();
        s.rgb_filter_xor(c, c, c);
        if c != 0 {
            assert_ne!(s, before);
        }
        s.rgb_filter_xor(c, c, c);
        assert_eq!(s, before);
    }
}

#[test]
fn or_with_zero_is_noop_and_or_with_ones_saturates() {
    let mut s = noise(4, 4, 7);
    let before = s.clone();
    s.rgb_filter_or(0, 0, 0);
    assert_eq!(s, before);
    s.rgb_filter_or(0xFF, 0xFF, 0xFF);
    for y in 0..4 {
        for x in 0..4 {
            assert_eq!(
                s.pixel(x, y),
                Some(BGR8 {
                    b: 0xFF,
                    g: 0xFF,
                    r: 0xFF
                })
            );
        }
    }
}

#[test]
fn xor_with_self_clears() {
    let mut s = noise(6, 2, 99);
    let copy = s.clone();
    s.xor(&copy);
    assert!(is_all_zero(&s));
}

#[test]
fn combine_only_touches_overlap() {
    let mut big = noise(5, 4, 1);
    let before = big.clone();
    let zeros = Surface::new(2, 3, BitDepth::Bgr24);
    big.and(&zeros);
    for y in 0..4 {
        for x in 0..5 {
            if x < 2 && y < 3 {
                assert_eq!(big.pixel(x, y), Some(BGR8 { b: 0, g: 0, r: 0 }));
            } else {
                assert_eq!(big.pixel(x, y), before.pixel(x, y), "({x}, {y})");
            }
        }
    }
}

#[test]
fn translate_zero_is_identity() {
    let mut s = noise(7, 3, 42);
    let before = s.clone();
    s.translate(0, 0);
    assert_eq!(s, before);
}

#[test]
fn translate_out_of_range_clears() {
    let (w, h) = (4i64, 3i64);
    for (dx, dy) in [(w, 0), (-w, 0), (0, h), (0, -h), (100, -100), (i64::MAX, i64::MIN)] {
        let mut s = noise(4, 3, 5);
        s.translate(dx, dy);
        assert!(is_all_zero(&s), "({dx}, {dy})");
        assert_eq!((s.width(), s.height()), (4, 3));
    }
}

#[test]
fn translate_back_and_forth_keeps_the_overlap() {
    let orig = noise(6, 5, 11);
    let mut s = orig.clone();
    s.translate(2, -1);
    s.translate(-2, 1);
    for y in 0..5 {
        for x in 0..6 {
            let expected = if x < 4 && y >= 1 {
                orig.pixel(x, y)
            } else {
                Some(BGR8 { b: 0, g: 0, r: 0 })
            };
            assert_eq!(s.pixel(x, y), expected, "({x}, {y})");
        }
    }
}

#[test]
fn channel_split_and_merge() {
    // Split into per-channel surfaces, shift two of them, merge with OR and
    // push the result through the codec.
    let base = noise(16, 8, 0xC0FFEE);

    let mut red = base.clone();
    let mut green = base.clone();
    let mut blue = base.clone();
    red.rgb_filter_and(0xFF, 0x00, 0x00);
    green.rgb_filter_and(0x00, 0xFF, 0x00);
    blue.rgb_filter_and(0x00, 0x00, 0xFF);

    red.translate(-10, -5);
    blue.translate(10, 0);

    green.or(&red);
    green.or(&blue);

    // Pixel (3, 1): red came from (13, 6), blue from nowhere (x - 10 < 0).
    let p = green.pixel(3, 1).unwrap();
    assert_eq!(p.r, base.pixel(13, 6).unwrap().r);
    assert_eq!(p.g, base.pixel(3, 1).unwrap().g);
    assert_eq!(p.b, 0);

    let mut resized = green.resized(32, 16);
    assert_eq!(resized.pixel(7, 3), green.pixel(3, 1));
    resized.resize(20, 12);
    let decoded = decode_bmp(&encode_bmp(&resized)).unwrap();
    assert_eq!(decoded, resized);
}
