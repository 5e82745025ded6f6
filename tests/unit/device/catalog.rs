use super::*;

#[test]
fn find_device_by_name() {
    let d = find_by_name("iPhone 12").unwrap();
    assert_eq!(d.screen_rect(DeviceOrientation::Portrait), Some(ScreenRect::new(100, 90, 1170, 2532)));
    assert!(find_by_name("iPhone 13").is_none());
    assert!(find_by_name("iphone 12").is_none());
}

#[test]
fn find_device_by_size() {
    let (d, o) = find_by_screen_size(PixelSize::new(1284, 2778)).unwrap();
    assert_eq!(d.name(), "iPhone 12 Pro Max");
    assert_eq!(o, DeviceOrientation::Portrait);
}

#[test]
fn unknown_size_is_not_found() {
    assert!(find_by_screen_size(PixelSize::new(1, 1)).is_none());
}

#[test]
fn names_are_unique() {
    for (i, a) in DEVICES.iter().enumerate() {
        for b in &DEVICES[i + 1..] {
            assert_ne!(a.name(), b.name());
        }
    }
}

#[test]
fn every_orientation_has_a_screen_inside_its_frame() {
    for d in DEVICES {
        assert!(!d.orientations().is_empty(), "{}", d.name());
        for &o in d.orientations() {
            let rect = d.screen_rect(o).unwrap();
            let frame = d.frame_size(o).unwrap();
            assert!(rect.fits_within(frame), "{} {o}: {rect} not in {frame}", d.name());
        }
    }
}

#[test]
fn size_lookup_round_trips_with_first_registered_tie_break() {
    for d in DEVICES {
        for &o in d.orientations() {
            let size = d.screen_rect(o).unwrap().size();
            let (found, found_o) = find_by_screen_size(size).unwrap();
            if std::ptr::eq(found, d) {
                // Same device: `o` itself or an earlier-listed orientation of the same size.
                let pos = |x| d.orientations().iter().position(|&p| p == x);
                assert!(pos(found_o) <= pos(o), "{} {o} detected as {found_o}", d.name());
                assert_eq!(d.screen_rect(found_o).unwrap().size(), size);
            } else {
                assert!(found.index() < d.index(), "{} shadowed by later {}", d.name(), found.name());
                assert_eq!(found.screen_rect(found_o).unwrap().size(), size);
            }
        }
    }
}

#[test]
fn iphone_12_pro_is_only_reachable_by_name() {
    let pro = find_by_name("iPhone 12 Pro").unwrap();
    let size = pro.screen_rect(DeviceOrientation::Portrait).unwrap().size();
    let (found, _) = find_by_screen_size(size).unwrap();
    assert_eq!(found.name(), "iPhone 12");
}

#[test]
fn landscape_geometry_is_rotated_portrait_geometry() {
    let d = find_by_name("iPhone 12").unwrap();
    assert_eq!(
        d.frame_size(DeviceOrientation::LandscapeRight),
        Some(PixelSize::new(2732, 1370))
    );
    // Clockwise quarter turn: the portrait bottom margin becomes the left margin.
    assert_eq!(
        d.screen_rect(DeviceOrientation::LandscapeRight),
        Some(ScreenRect::new(110, 100, 2532, 1170))
    );
    assert_eq!(
        d.screen_rect(DeviceOrientation::LandscapeLeft),
        Some(ScreenRect::new(90, 100, 2532, 1170))
    );
    let (found, o) = find_by_screen_size(PixelSize::new(2532, 1170)).unwrap();
    assert_eq!(found.name(), "iPhone 12");
    assert_eq!(o, DeviceOrientation::LandscapeLeft);
}

#[test]
fn unsupported_orientation_has_no_geometry() {
    let watch = find_by_name("Apple Watch Series 6 44mm").unwrap();
    assert_eq!(watch.canonical_orientation(), DeviceOrientation::Standard);
    assert!(watch.screen_rect(DeviceOrientation::Portrait).is_none());
    assert!(watch.frame_size(DeviceOrientation::LandscapeLeft).is_none());
    assert_eq!(watch.turns_for(DeviceOrientation::Standard), 0);
}

#[test]
fn describe_lists_every_orientation() {
    let info = find_by_name("iPhone 12 mini").unwrap().describe();
    assert_eq!(info.name, "iPhone 12 mini");
    assert_eq!(info.orientations.len(), 3);
    let json = serde_json::to_value(&info).unwrap();
    assert_eq!(json["orientations"][0]["orientation"], "portrait");
    assert_eq!(json["orientations"][0]["screen"]["width"], 1125);
}

#[test]
fn landscape_right_is_shadowed_by_landscape_left() {
    for d in DEVICES.iter().filter(|d| d.supports(DeviceOrientation::LandscapeRight)) {
        let size = d.screen_rect(DeviceOrientation::LandscapeRight).unwrap().size();
        assert_eq!(
            d.screen_rect(DeviceOrientation::LandscapeLeft).unwrap().size(),
            size
        );
        assert_eq!(find_orientation(d, size), Some(DeviceOrientation::LandscapeLeft));
    }
}
