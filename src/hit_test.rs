use super::*;

fn layout() -> BoardLayout {
    BoardLayout::new()
}

// --- Column mapping ---

#[test]
fn click_inside_first_band_maps_to_column_zero() {
    assert_eq!(hit_test(Point::new(155.0, 200.0), &layout()), Some(ClickTarget::Column(0)));
}

#[test]
fn click_near_band_right_edge_still_maps_to_column_zero() {
    // x = 209 is inside [100, 210).
    assert_eq!(hit_test(Point::new(209.0, 200.0), &layout()), Some(ClickTarget::Column(0)));
}

#[test]
fn click_past_band_boundary_maps_to_column_one() {
    assert_eq!(hit_test(Point::new(211.0, 200.0), &layout()), Some(ClickTarget::Column(1)));
}

#[test]
fn click_on_shared_band_boundary_maps_to_nothing() {
    // x = 210 is the open boundary between columns 0 and 1; neither claims it.
    assert_eq!(hit_test(Point::new(210.0, 200.0), &layout()), None);
}

#[test]
fn every_band_interior_maps_to_its_own_column() {
    let layout = layout();
    for (i, band) in layout.columns.iter().enumerate() {
        let inside = Point::new(band.x + band.width / 2.0, band.y + band.height / 2.0);
        assert_eq!(hit_test(inside, &layout), Some(ClickTarget::Column(i)));
    }
}

#[test]
fn click_above_the_board_maps_to_nothing() {
    assert_eq!(hit_test(Point::new(155.0, 100.0), &layout()), None);
}

#[test]
fn click_below_the_board_between_buttons_maps_to_nothing() {
    assert_eq!(hit_test(Point::new(450.0, 720.0), &layout()), None);
}

// --- Buttons ---

#[test]
fn click_inside_back_button() {
    assert_eq!(hit_test(Point::new(150.0, 725.0), &layout()), Some(ClickTarget::Back));
}

#[test]
fn click_inside_restart_button() {
    assert_eq!(hit_test(Point::new(850.0, 725.0), &layout()), Some(ClickTarget::Restart));
}

#[test]
fn click_on_back_button_boundary_maps_to_nothing() {
    assert_eq!(hit_test(Point::new(100.0, 725.0), &layout()), None);
    assert_eq!(hit_test(Point::new(150.0, 700.0), &layout()), None);
}

// --- Misses ---

#[test]
fn click_left_of_everything_maps_to_nothing() {
    assert_eq!(hit_test(Point::new(50.0, 400.0), &layout()), None);
}

#[test]
fn click_right_of_the_board_maps_to_nothing() {
    assert_eq!(hit_test(Point::new(900.0, 400.0), &layout()), None);
}
