// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only

//! Decoding from imperfect scanlines: blemishes, transparent gaps, ties.

use colorbar_core::{decode_image, encode_with, render, PixelSource, SeparatorSelector};
use image::{Rgba, RgbaImage};

/// A one-row pixel source built from explicit RGBA values.
struct Row(Vec<[u8; 4]>);

impl PixelSource for Row {
    fn dimensions(&self) -> (u32, u32) {
        (self.0.len() as u32, 1)
    }

    fn rgba(&self, x: u32, _y: u32) -> [u8; 4] {
        self.0[x as usize]
    }
}

fn rendered(payload: &[u8], width: u32, height: u32) -> RgbaImage {
    let encoded = encode_with(payload, &mut SeparatorSelector::seeded(5)).unwrap();
    render(encoded.codes(), width, height).unwrap()
}

#[test]
fn survives_speckles_on_midline() {
    let mut image = rendered(b"speckled bar", 400, 9);
    let y = 9 / 2;
    // 8 bands of 50px; odd bands carry data. Flip three pixels per data band.
    for band in (1..8u32).step_by(2) {
        for offset in [5, 20, 33] {
            image.put_pixel(band * 50 + offset, y, Rgba([0x12, 0x34, 0x56, 255]));
        }
    }
    let decoded = decode_image(&image);
    assert_eq!(decoded.bytes(), b"speckled bar");
    assert_eq!(decoded.quality().segments, 4);
    assert_eq!(decoded.quality().contested_segments, 4);
    // 188 of 200 data samples agree.
    assert_eq!(decoded.quality().integrity_percent, 94);
}

#[test]
fn speckle_inside_separator_band_splits_segment() {
    // A stray colour between separator pixels becomes its own segment: the
    // voter only sees boundaries, not band geometry.
    let sep = [0x20, 0xfe, 0xfe, 255];
    let abc = [0x82, 0x84, 0x86, 255];
    let stray = [0x02, 0x02, 0x02, 255];
    let row = Row(vec![sep, stray, sep, abc, abc]);
    let decoded = decode_image(&row);
    assert_eq!(decoded.quality().segments, 2);
    assert_eq!(decoded.bytes(), &[0x01, 0x01, 0x01, b'A', b'B', b'C']);
}

#[test]
fn transparent_gaps_are_skipped() {
    let mut image = rendered(b"gappy", 200, 5);
    for x in (0..200).step_by(3) {
        image.put_pixel(x, 2, Rgba([0, 0, 0, 0]));
    }
    // Semi-transparent pixels are gaps too.
    for x in (1..200).step_by(7) {
        image.put_pixel(x, 2, Rgba([0xff, 0xff, 0xff, 128]));
    }
    let decoded = decode_image(&image);
    assert_eq!(decoded.bytes(), b"gappy");
    assert!(decoded.quality().is_pristine());
}

#[test]
fn damage_off_midline_is_ignored() {
    let mut image = rendered(b"midline", 140, 10);
    for x in 0..140 {
        image.put_pixel(x, 0, Rgba([0, 0, 0, 255]));
        image.put_pixel(x, 9, Rgba([0, 0, 0, 0]));
    }
    assert_eq!(decode_image(&image).bytes(), b"midline");
}

#[test]
fn fully_transparent_image_decodes_empty() {
    let image = RgbaImage::new(50, 50);
    let decoded = decode_image(&image);
    assert!(decoded.bytes().is_empty());
    assert_eq!(decoded.quality().segments, 0);
}

#[test]
fn separator_only_row_decodes_empty() {
    // 0x20fefe is the shifted separator 0x107f7f.
    let row = Row(vec![[0x20, 0xfe, 0xfe, 255]; 10]);
    assert!(decode_image(&row).bytes().is_empty());
}

#[test]
fn tie_goes_to_first_seen() {
    // Separator, then two colours with two votes each: "AB " (0x414220) first.
    let sep = [0x20, 0xfe, 0xfe, 255];
    let first = [0x82, 0x84, 0x40, 255]; // 0x414220 << 1
    let second = [0x84, 0x86, 0x40, 255]; // 0x424320 << 1
    let row = Row(vec![sep, first, second, second, first]);
    let decoded = decode_image(&row);
    assert_eq!(decoded.bytes(), b"AB");
    assert_eq!(decoded.quality().tied_segments, 1);

    let row = Row(vec![sep, second, first, first, second]);
    assert_eq!(decode_image(&row).bytes(), b"BC");
}

#[test]
fn missing_final_separator_still_flushes() {
    let sep = [0x20, 0xfe, 0xfe, 255];
    let abc = [0x82, 0x84, 0x86, 255]; // "ABC" << 1
    let def = [0x88, 0x8a, 0x8c, 255]; // "DEF" << 1
    let row = Row(vec![sep, abc, abc, sep, sep, def]);
    assert_eq!(decode_image(&row).bytes(), b"ABCDEF");
}
