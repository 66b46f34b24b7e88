#!/usr/bin/env -S cargo +nightly -Zscript
//! Generate seed corpus files for fuzzing.
//! Run: cargo +nightly -Zscript fuzz/generate_seeds.rs

fn bmp(width: u32, height: u32) -> Vec<u8> {
    let stride = (width * 3).div_ceil(4) * 4;
    let payload = stride * height;
    let mut bmp = vec![0u8; 54 + payload as usize];
    bmp[0] = b'B'; bmp[1] = b'M';
    bmp[2..6].copy_from_slice(&(54 + payload).to_le_bytes()); // file size
    bmp[10..14].copy_from_slice(&54u32.to_le_bytes()); // data offset
    bmp[14..18].copy_from_slice(&40u32.to_le_bytes()); // info header size
    bmp[18..22].copy_from_slice(&width.to_le_bytes());
    bmp[22..26].copy_from_slice(&height.to_le_bytes());
    bmp[26..28].copy_from_slice(&1u16.to_le_bytes()); // planes
    bmp[28..30].copy_from_slice(&24u16.to_le_bytes()); // bpp
    bmp[34..38].copy_from_slice(&payload.to_le_bytes()); // image data size
    for (i, b) in bmp[54..].iter_mut().enumerate() {
        *b = (i * 37) as u8;
    }
    bmp
}

fn main() {
    use std::fs;
    let dir = "fuzz/corpus/fuzz_decode";
    fs::create_dir_all(dir).unwrap();

    for (w, h) in [(1, 1), (2, 2), (3, 1), (5, 3), (0, 0)] {
        fs::write(format!("{dir}/bmp_{w}x{h}.bmp"), bmp(w, h)).unwrap();
    }

    // One seed per warning path.
    let mut warn = bmp(2, 2);
    warn[6] = 1; // reserved1
    warn[38..42].copy_from_slice(&2835u32.to_le_bytes()); // x resolution
    warn[46..50].copy_from_slice(&256u32.to_le_bytes()); // palette colors
    fs::write(format!("{dir}/bmp_warnings.bmp"), warn).unwrap();

    // Truncated/malformed seeds for edge coverage
    fs::write(format!("{dir}/empty.bin"), b"").unwrap();
    fs::write(format!("{dir}/bm_short.bin"), b"BM\x00\x00").unwrap();
    let mut compressed = bmp(1, 1);
    compressed[30] = 1;
    fs::write(format!("{dir}/bmp_rle.bin"), compressed).unwrap();

    println!("Generated seed corpus in {dir}/");
}
