use super::*;

const O: u8 = ScreenMask::OUTSIDE;
const I: u8 = ScreenMask::INSIDE;

/// Frame built from per-pixel alpha values; color is irrelevant to the mask.
fn frame_from_alpha(width: u32, alphas: &[u8]) -> Raster {
    let height = alphas.len() as u32 / width;
    let data = alphas.iter().flat_map(|&a| [0, 0, 0, a]).collect();
    Raster::from_premul_rgba8(width, height, data).unwrap()
}

fn mask_of_row(alphas: &[u8]) -> Vec<u8> {
    let frame = frame_from_alpha(alphas.len() as u32, alphas);
    build_screen_mask(&frame).unwrap().data().to_vec()
}

#[test]
fn transparent_row_is_entirely_outside() {
    assert_eq!(mask_of_row(&[0, 0, 128, 254, 0]), vec![O; 5]);
}

#[test]
fn opaque_row_is_entirely_inside() {
    assert_eq!(mask_of_row(&[255; 6]), vec![I; 6]);
}

#[test]
fn span_between_opaque_borders_is_inside_including_translucent_pixels() {
    let alphas = [0, 128, 255, 0, 128, 0, 255, 40, 0];
    assert_eq!(mask_of_row(&alphas), vec![O, O, I, I, I, I, I, O, O]);
}

#[test]
fn translucent_outer_edge_is_outside() {
    // Anti-aliased outer bezel edge on both sides.
    let alphas = [10, 200, 255, 255, 0, 255, 254, 3];
    assert_eq!(mask_of_row(&alphas), vec![O, O, I, I, I, I, O, O]);
}

#[test]
fn single_opaque_pixel_is_the_whole_span() {
    assert_eq!(mask_of_row(&[0, 0, 255, 0]), vec![O, O, I, O]);
    assert_eq!(mask_of_row(&[255, 0, 0]), vec![I, O, O]);
    assert_eq!(mask_of_row(&[0, 0, 255]), vec![O, O, I]);
}

#[test]
fn rows_are_scanned_independently() {
    #[rustfmt::skip]
    let alphas = [
        0,   255, 0,   255, 0,
        0,   0,   0,   0,   0,
        255, 0,   0,   0,   0,
    ];
    let frame = frame_from_alpha(5, &alphas);
    let mask = build_screen_mask(&frame).unwrap();
    assert_eq!(mask.row(0), &[O, I, I, I, O]);
    assert_eq!(mask.row(1), &[O; 5]);
    assert_eq!(mask.row(2), &[I, O, O, O, O]);
    assert!(mask.is_inside(2, 0));
    assert!(!mask.is_inside(2, 1));
    assert_eq!(mask.get(5, 0), None);
}

#[test]
fn rebuilding_is_bit_identical_across_pool_sizes() {
    let (w, h) = (64u32, 48u32);
    let mut alphas = Vec::new();
    for y in 0..h {
        for x in 0..w {
            // A wobbly bezel: opaque band whose position depends on the row.
            let left = 3 + (y % 7);
            let right = w - 4 - (y % 5);
            let a = if x == left || x == right {
                255
            } else if x < left || x > right {
                (x * 17 % 200) as u8
            } else {
                (y * 13 % 256) as u8
            };
            alphas.push(a);
        }
    }
    let frame = frame_from_alpha(w, &alphas);

    let a = build_screen_mask(&frame).unwrap();
    let b = build_screen_mask(&frame).unwrap();
    assert_eq!(a, b);

    for threads in [1, 3] {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()
            .unwrap();
        let c = pool.install(|| build_screen_mask(&frame)).unwrap();
        assert_eq!(a, c);
    }
}

#[test]
fn empty_frame_gives_empty_mask() {
    let frame = Raster::transparent(0, 0).unwrap();
    let mask = build_screen_mask(&frame).unwrap();
    assert!(mask.data().is_empty());
}

#[test]
fn both_opaque_borders_are_inside() {
    let alphas = [0, 255, 0, 0, 255, 0];
    let mask = build_screen_mask(&frame_from_alpha(6, &alphas)).unwrap();
    assert!(mask.is_inside(1, 0));
    assert!(mask.is_inside(4, 0));
    assert!(!mask.is_inside(5, 0));
}
