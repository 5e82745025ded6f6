use super::*;

/// 3x2 image whose pixels are all distinct: pixel (x, y) has red = 10*y + x.
fn numbered_3x2() -> Raster {
    let mut data = Vec::new();
    for y in 0..2u8 {
        for x in 0..3u8 {
            data.extend_from_slice(&[10 * y + x, 0, 0, 255]);
        }
    }
    Raster::from_premul_rgba8(3, 2, data).unwrap()
}

fn red_at(img: &Raster, x: u32, y: u32) -> u8 {
    img.pixel(x, y).unwrap().r
}

#[test]
fn zero_turns_is_identity() {
    let img = numbered_3x2();
    assert_eq!(rotate(&img, 0).unwrap(), img);
    assert_eq!(rotate(&img, 4).unwrap(), img);
}

#[test]
fn quarter_turn_is_clockwise_and_swaps_dimensions() {
    let img = numbered_3x2();
    let out = rotate(&img, 1).unwrap();
    assert_eq!(out.size(), PixelSize::new(2, 3));
    // The bottom-left source pixel ends up top-left, the top row becomes the right column.
    assert_eq!(red_at(&out, 0, 0), 10);
    assert_eq!(red_at(&out, 1, 0), 0);
    assert_eq!(red_at(&out, 1, 1), 1);
    assert_eq!(red_at(&out, 1, 2), 2);
    assert_eq!(red_at(&out, 0, 2), 12);
}

#[test]
fn half_turn_reverses_both_axes() {
    let img = numbered_3x2();
    let out = rotate(&img, 2).unwrap();
    assert_eq!(out.size(), img.size());
    for y in 0..2 {
        for x in 0..3 {
            assert_eq!(red_at(&out, x, y), red_at(&img, 2 - x, 1 - y));
        }
    }
}

#[test]
fn three_turns_is_counter_clockwise() {
    let img = numbered_3x2();
    let out = rotate(&img, 3).unwrap();
    assert_eq!(out.size(), PixelSize::new(2, 3));
    assert_eq!(red_at(&out, 0, 0), 2);
    assert_eq!(red_at(&out, 1, 2), 10);
}

#[test]
fn rotations_round_trip_losslessly() {
    let mut data = Vec::new();
    for i in 0..(7u32 * 5) {
        let v = (i * 37 % 251) as u8;
        data.extend_from_slice(&[v, v / 2, v / 3, v]);
    }
    let img = Raster::from_premul_rgba8(7, 5, data).unwrap();
    for k in 0..4u8 {
        let there = rotate(&img, k).unwrap();
        let back = rotate(&there, (4 - k) % 4).unwrap();
        assert_eq!(back, img, "k = {k}");
    }
}

#[test]
fn every_output_pixel_is_written() {
    let img = Raster::filled(13, 4, crate::Rgba8Premul::from([1, 2, 3, 255])).unwrap();
    for k in 0..4u8 {
        let out = rotate(&img, k).unwrap();
        assert!(out.data().chunks_exact(4).all(|px| px == [1, 2, 3, 255]));
    }
}

#[test]
fn empty_image_rotates_to_empty_image() {
    let img = Raster::transparent(0, 3).unwrap();
    let out = rotate(&img, 1).unwrap();
    assert_eq!(out.size(), PixelSize::new(3, 0));
}
