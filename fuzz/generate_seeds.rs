#!/usr/bin/env -S cargo +nightly -Zscript
//! Generate seed corpus files for fuzzing.
//! Run: cargo +nightly -Zscript fuzz/generate_seeds.rs

fn header(width: i32, height: i32) -> Vec<u8> {
    let stride = ((width.max(0) as u32 * 3 + 3) & !3) as u32;
    let image_size = stride * height.max(0) as u32;
    let mut bmp = vec![0u8; 54];
    bmp[0] = b'B'; bmp[1] = b'M';
    bmp[2..6].copy_from_slice(&(54 + image_size).to_le_bytes()); // file size
    bmp[10..14].copy_from_slice(&54u32.to_le_bytes()); // data offset
    bmp[14..18].copy_from_slice(&40u32.to_le_bytes()); // info header size
    bmp[18..22].copy_from_slice(&width.to_le_bytes());
    bmp[22..26].copy_from_slice(&height.to_le_bytes());
    bmp[26..28].copy_from_slice(&1u16.to_le_bytes()); // planes
    bmp[28..30].copy_from_slice(&24u16.to_le_bytes()); // bpp
    bmp[34..38].copy_from_slice(&image_size.to_le_bytes());
    bmp[38..42].copy_from_slice(&11811i32.to_le_bytes()); // ~300 DPI
    bmp[42..46].copy_from_slice(&11811i32.to_le_bytes());
    bmp[50..54].copy_from_slice(&0x100_0000u32.to_le_bytes()); // codec marker
    bmp
}

fn main() {
    use std::fs;
    let dir = "fuzz/corpus/fuzz_decode";
    fs::create_dir_all(dir).unwrap();

    // 1x1: one BGR pixel plus one padding byte
    let mut bmp = header(1, 1);
    bmp.extend_from_slice(&[0xff, 0x00, 0x00, 0x00]);
    fs::write(format!("{dir}/bmp_1x1.bmp"), &bmp).unwrap();

    // 3x2: 9 pixel bytes + 3 padding per row
    let mut bmp = header(3, 2);
    for row in 0..2u8 {
        bmp.extend((0..9).map(|i| i * 20 + row));
        bmp.extend_from_slice(&[0, 0, 0]);
    }
    fs::write(format!("{dir}/bmp_3x2.bmp"), &bmp).unwrap();

    // Headers only
    fs::write(format!("{dir}/bmp_0x0.bmp"), header(0, 0)).unwrap();

    // Truncated/malformed seeds for edge coverage
    fs::write(format!("{dir}/truncated_header.bmp"), &header(2, 2)[..20]).unwrap();
    fs::write(format!("{dir}/truncated_rows.bmp"), header(2, 2)).unwrap();
    fs::write(format!("{dir}/top_down.bmp"), header(2, -2)).unwrap();
    fs::write(format!("{dir}/huge.bmp"), header(i32::MAX, i32::MAX)).unwrap();

    println!("Seeds written to {dir}");
}
