use pretty_assertions::assert_eq;
use softblit::test_support::{atlas_with_runs, MAGENTA};
use softblit::{Color, Font, Screen};

#[test]
fn default_screen_has_the_handheld_size() {
    let screen = Screen::default();
    assert_eq!((screen.width(), screen.height()), (480, 272));
}

#[test]
fn drawing_targets_the_back_buffer_until_swap() {
    let red = Color::rgb(255, 0, 0);
    let mut screen = Screen::new(8, 6);
    screen.fill_rect(0, 0, 8, 6, red);

    // Back buffer sees the fill, the visible frame does not yet.
    assert_eq!(screen.get_pixel(3, 3).unwrap(), red);
    assert_eq!(screen.frame().get_pixel(3, 3).unwrap().alpha(), 255);

    screen.swap();
    assert_eq!(screen.frame().get_pixel(3, 3).unwrap(), red);
    // After the swap the draw target is the stale buffer again.
    assert_eq!(screen.get_pixel(3, 3).unwrap().alpha(), 255);
}

#[test]
fn text_renders_onto_a_screen() {
    let atlas = atlas_with_runs(&[3], 4, MAGENTA, Color::WHITE);
    let font = Font::load(&atlas).unwrap();
    let mut screen = Screen::new(16, 8);
    font.draw_text(&mut screen, 1, 1, "!");
    screen.swap();
    assert_eq!(screen.frame().get_pixel(1, 1).unwrap(), Color::WHITE);
    assert_eq!(screen.frame().get_pixel(3, 4).unwrap(), Color::WHITE);
    assert_eq!(screen.frame().get_pixel(4, 1).unwrap().alpha(), 255);
}
