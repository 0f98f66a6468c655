use pretty_assertions::assert_eq;
use softblit::{Color, Error, Surface};

#[test]
fn put_get_round_trip_through_alpha_inversion() {
    let mut s = Surface::new(4, 3);
    for color in [
        Color::new(200, 10, 10, 0).unwrap(),
        Color::new(1, 2, 3, 255).unwrap(),
        Color::new(90, 80, 70, 128).unwrap(),
    ] {
        s.put_pixel(2, 1, color).unwrap();
        assert_eq!(s.get_pixel(2, 1).unwrap(), color);
    }
}

#[test]
fn fresh_surface_is_fully_transparent() {
    let s = Surface::new(2, 2);
    assert_eq!(s.get_pixel(0, 0).unwrap().alpha(), 255);
}

#[test]
fn out_of_bounds_pixel_access_fails() {
    let mut s = Surface::new(5, 4);
    assert!(matches!(
        s.get_pixel(5, 0),
        Err(Error::OutOfRange { x: 5, y: 0, .. })
    ));
    assert!(s.get_pixel(0, 4).is_err());
    assert!(s.put_pixel(5, 3, Color::BLACK).is_err());
    assert!(s.put_pixel(0, 0, Color::BLACK).is_ok());
}

#[test]
fn fill_rect_clips_to_bounds() {
    let red = Color::rgb(255, 0, 0);
    let mut s = Surface::new(4, 4);
    s.fill_rect(2, 2, 10, 10, red);
    assert_eq!(s.get_pixel(2, 2).unwrap(), red);
    assert_eq!(s.get_pixel(3, 3).unwrap(), red);
    assert_eq!(s.get_pixel(1, 1).unwrap().alpha(), 255);

    // Negative origin clips on the other side.
    let mut s = Surface::new(4, 4);
    s.fill_rect(-2, -2, 4, 4, red);
    assert_eq!(s.get_pixel(0, 0).unwrap(), red);
    assert_eq!(s.get_pixel(1, 1).unwrap(), red);
    assert_eq!(s.get_pixel(2, 2).unwrap().alpha(), 255);
}

#[test]
fn fill_rect_zero_area_is_a_noop() {
    let mut s = Surface::new(4, 4);
    let before = s.as_raw().to_vec();
    s.fill_rect(1, 1, 0, 3, Color::WHITE);
    s.fill_rect(1, 1, 3, 0, Color::WHITE);
    s.fill_rect(10, 10, 3, 3, Color::WHITE);
    s.fill_rect(0, 0, -2, -2, Color::WHITE);
    assert_eq!(s.as_raw(), &before[..]);
}

#[test]
fn clear_covers_every_pixel() {
    let blue = Color::new(0, 0, 200, 17).unwrap();
    let mut s = Surface::new(3, 2);
    s.clear(blue);
    for y in 0..2 {
        for x in 0..3 {
            assert_eq!(s.get_pixel(x, y).unwrap(), blue);
        }
    }
}

#[test]
fn view_reads_relative_to_its_origin() {
    let mut s = Surface::new(5, 5);
    let mark = Color::rgb(9, 8, 7);
    s.put_pixel(3, 2, mark).unwrap();
    let v = s.view(2, 1, 3, 3).unwrap();
    assert_eq!(v.width(), 3);
    assert_eq!(v.height(), 3);
    assert_eq!(v.get_pixel(1, 1).unwrap(), mark);
    assert!(v.get_pixel(3, 0).is_err());
}

#[test]
fn view_must_be_fully_contained() {
    let s = Surface::new(5, 5);
    assert!(s.view(0, 0, 5, 5).is_ok());
    assert!(s.view(3, 3, 3, 3).is_err());
    assert!(s.view(6, 0, 1, 1).is_err());
    assert!(s.view(0, 0, 6, 1).is_err());
}

#[test]
fn view_to_surface_copies_the_region() {
    let mut s = Surface::new(4, 4);
    let mark = Color::rgb(1, 2, 3);
    s.put_pixel(2, 2, mark).unwrap();
    let copy = s.view(1, 1, 2, 2).unwrap().to_surface();
    assert_eq!(copy.width(), 2);
    assert_eq!(copy.get_pixel(1, 1).unwrap(), mark);
    assert_eq!(copy.get_pixel(0, 0).unwrap().alpha(), 255);
}

#[test]
fn cloned_surface_is_independent() {
    let mut a = Surface::new(2, 2);
    a.put_pixel(0, 0, Color::rgb(5, 6, 7)).unwrap();
    let b = a.clone();
    a.put_pixel(0, 0, Color::rgb(9, 9, 9)).unwrap();
    assert_eq!(b.get_pixel(0, 0).unwrap(), Color::rgb(5, 6, 7));
}

#[test]
fn decode_png_bytes_restores_pixels() {
    let mut img = image::RgbaImage::new(2, 2);
    img.put_pixel(0, 0, image::Rgba([10, 20, 30, 255]));
    img.put_pixel(1, 1, image::Rgba([40, 50, 60, 200]));
    let mut bytes = Vec::new();
    img.write_to(
        &mut std::io::Cursor::new(&mut bytes),
        image::ImageFormat::Png,
    )
    .unwrap();

    let s = Surface::from_bytes(&bytes).unwrap();
    assert_eq!(s.width(), 2);
    assert_eq!(s.height(), 2);
    // Stored alpha 255 reads back as semantic alpha 0 (opaque).
    assert_eq!(s.get_pixel(0, 0).unwrap(), Color::rgb(10, 20, 30));
    assert_eq!(s.get_pixel(1, 1).unwrap(), Color::rgba(40, 50, 60, 55));
}

#[test]
fn decode_garbage_fails_with_codec_error() {
    assert!(matches!(
        Surface::from_bytes(b"not an image"),
        Err(Error::Image(_))
    ));
}
