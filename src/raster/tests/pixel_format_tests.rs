//! Tests for the pixel format decoders

extern crate std;

use crate::raster::errors::RasterError;
use crate::raster::pixel_format::{decode_chunk, PixelKind, SourceImageObject};

const WHITE: [u8; 4] = [255, 255, 255, 255];
const BLACK: [u8; 4] = [0, 0, 0, 255];

fn pixel(dest: &[u8], index: usize) -> [u8; 4] {
    [dest[index * 4], dest[index * 4 + 1], dest[index * 4 + 2], dest[index * 4 + 3]]
}

#[test]
fn test_kind_from_code() {
    std::assert_eq!(PixelKind::from_code(1).unwrap(), PixelKind::Grayscale1Bpp);
    std::assert_eq!(PixelKind::from_code(2).unwrap(), PixelKind::Rgb24Bpp);
    std::assert_eq!(PixelKind::from_code(3).unwrap(), PixelKind::Rgba32Bpp);
}

#[test]
fn test_kind_from_code_rejects_unknown() {
    match PixelKind::from_code(99) {
        Err(RasterError::UnsupportedPixelFormat(code)) => std::assert_eq!(code, 99),
        other => std::panic!("expected UnsupportedPixelFormat, got {:?}", other),
    }
}

#[test]
fn test_bytes_per_row() {
    std::assert_eq!(PixelKind::Grayscale1Bpp.bytes_per_row(8), 1);
    std::assert_eq!(PixelKind::Grayscale1Bpp.bytes_per_row(9), 2);
    std::assert_eq!(PixelKind::Rgb24Bpp.bytes_per_row(4), 12);
    std::assert_eq!(PixelKind::Rgba32Bpp.bytes_per_row(4), 16);
}

#[test]
fn test_gray_1bpp_alternating_bits() {
    // 0b10101010 expands to white/black pairs across the row
    let source = SourceImageObject::new(8, 2, PixelKind::Grayscale1Bpp, vec![0b10101010; 2]);
    let mut dest = vec![0u8; 8 * 2 * 4];

    let cursor = decode_chunk(&source, 0, 2, &mut dest);
    std::assert_eq!(cursor, 2);

    for row in 0..2 {
        for x in 0..8 {
            let expected = if x % 2 == 0 { WHITE } else { BLACK };
            std::assert_eq!(pixel(&dest, row * 8 + x), expected, "row {} pixel {}", row, x);
        }
    }
}

#[test]
fn test_gray_1bpp_row_padding_bits_do_not_leak() {
    // width 9: each row is 2 bytes, only the high bit of the second byte
    // belongs to a pixel. Row 0's second byte carries trailing 1-bits that
    // must not surface as row 1's first pixel.
    let data = vec![
        0b11111111, 0b01111111, // row 0: pixels 0..8 white, pixel 8 black
        0b00000000, 0b10000000, // row 1: pixels 0..8 black, pixel 8 white
    ];
    let source = SourceImageObject::new(9, 2, PixelKind::Grayscale1Bpp, data);
    let mut dest = vec![0u8; 9 * 2 * 4];

    let cursor = decode_chunk(&source, 0, 2, &mut dest);
    std::assert_eq!(cursor, 4);

    // Pixel 9 of row 0 derives from byte 1 bit 7, not from byte 0
    std::assert_eq!(pixel(&dest, 8), BLACK);
    // Row 1 starts on a fresh byte despite row 0's trailing 1-bits
    std::assert_eq!(pixel(&dest, 9), BLACK);
    std::assert_eq!(pixel(&dest, 9 + 8), WHITE);
}

#[test]
fn test_gray_1bpp_short_buffer_leaves_transparent_tail() {
    // 3 rows wanted, only 1 row byte provided
    let source = SourceImageObject::new(8, 3, PixelKind::Grayscale1Bpp, vec![0xff]);
    let mut dest = vec![0u8; 8 * 3 * 4];

    let cursor = decode_chunk(&source, 0, 3, &mut dest);
    std::assert_eq!(cursor, 1);

    std::assert_eq!(pixel(&dest, 0), WHITE);
    for index in 8..24 {
        std::assert_eq!(pixel(&dest, index), [0, 0, 0, 0], "pixel {}", index);
    }
}

#[test]
fn test_rgb_24bpp_synthesizes_opaque_alpha() {
    let data = vec![
        10, 20, 30, 40, 50, 60, // row 0
        70, 80, 90, 100, 110, 120, // row 1
    ];
    let source = SourceImageObject::new(2, 2, PixelKind::Rgb24Bpp, data);
    let mut dest = vec![0u8; 2 * 2 * 4];

    let cursor = decode_chunk(&source, 0, 2, &mut dest);
    std::assert_eq!(cursor, 12);

    std::assert_eq!(pixel(&dest, 0), [10, 20, 30, 255]);
    std::assert_eq!(pixel(&dest, 1), [40, 50, 60, 255]);
    std::assert_eq!(pixel(&dest, 2), [70, 80, 90, 255]);
    std::assert_eq!(pixel(&dest, 3), [100, 110, 120, 255]);
}

#[test]
fn test_rgb_24bpp_truncates_at_whole_pixels() {
    // 5 bytes cover one whole pixel plus a dangling fragment
    let source = SourceImageObject::new(2, 1, PixelKind::Rgb24Bpp, vec![1, 2, 3, 4, 5]);
    let mut dest = vec![0u8; 2 * 4];

    let cursor = decode_chunk(&source, 0, 1, &mut dest);
    std::assert_eq!(cursor, 3);

    std::assert_eq!(pixel(&dest, 0), [1, 2, 3, 255]);
    std::assert_eq!(pixel(&dest, 1), [0, 0, 0, 0]);
}

#[test]
fn test_rgba_32bpp_direct_copy() {
    let data: Vec<u8> = (0..16).collect();
    let source = SourceImageObject::new(2, 2, PixelKind::Rgba32Bpp, data.clone());
    let mut dest = vec![0u8; 16];

    let cursor = decode_chunk(&source, 0, 2, &mut dest);
    std::assert_eq!(cursor, 16);
    std::assert_eq!(dest, data);
}

#[test]
fn test_rgba_32bpp_short_buffer_zero_fill() {
    let source = SourceImageObject::new(2, 2, PixelKind::Rgba32Bpp, vec![9; 6]);
    let mut dest = vec![0u8; 16];

    let cursor = decode_chunk(&source, 0, 2, &mut dest);
    std::assert_eq!(cursor, 6);

    std::assert_eq!(&dest[..6], &[9, 9, 9, 9, 9, 9]);
    std::assert_eq!(&dest[6..], &[0u8; 10]);
}

#[test]
fn test_cursor_resumes_between_chunks() {
    // Two 1-row chunks over a 2-row image must split the source cleanly
    let data = vec![1, 2, 3, 4, 5, 6];
    let source = SourceImageObject::new(1, 2, PixelKind::Rgb24Bpp, data);

    let mut first = vec![0u8; 4];
    let cursor = decode_chunk(&source, 0, 1, &mut first);
    std::assert_eq!(cursor, 3);
    std::assert_eq!(first, vec![1, 2, 3, 255]);

    let mut second = vec![0u8; 4];
    let cursor = decode_chunk(&source, cursor, 1, &mut second);
    std::assert_eq!(cursor, 6);
    std::assert_eq!(second, vec![4, 5, 6, 255]);
}
