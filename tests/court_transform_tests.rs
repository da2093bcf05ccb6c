use shotchart_rs::core::court::{BASKET_BASELINE_OFFSET, CANVAS_HEIGHT, CANVAS_WIDTH};
use shotchart_rs::core::{Canvas, CourtTransform, Point, Shot, ShotType};

#[test]
fn transform_round_trip_is_exact() {
    let transform = CourtTransform::default();

    let original = Point::new(-137.0, 212.0);
    let draw = transform.to_draw(original);
    let recovered = transform.to_court(draw);

    assert_eq!(recovered.x, original.x);
    assert_eq!(recovered.y, original.y);
}

#[test]
fn basket_sits_above_the_baseline_edge() {
    let transform = CourtTransform::default();
    let basket = transform.basket();

    assert_eq!(basket.x, f64::from(CANVAS_WIDTH) / 2.0);
    assert_eq!(basket.y, f64::from(CANVAS_HEIGHT) - BASKET_BASELINE_OFFSET);
    assert_eq!(transform.baseline_draw_y(), f64::from(CANVAS_HEIGHT));
}

#[test]
fn origin_maps_to_the_basket() {
    let transform = CourtTransform::default();
    let draw = transform.to_draw(Point::new(0.0, 0.0));

    assert_eq!(draw.x, 250.0);
    assert_eq!(draw.y, 420.0);
}

#[test]
fn y_increases_away_from_basket_but_downward_on_canvas() {
    let transform = CourtTransform::default();

    let near = transform.to_draw(Point::new(0.0, 10.0));
    let far = transform.to_draw(Point::new(0.0, 200.0));

    assert!(far.y < near.y);
}

#[test]
fn non_finite_shots_are_invalid() {
    let transform = CourtTransform::default();

    let nan = Shot::new(f64::NAN, 100.0, true, None, ShotType::TwoPt);
    let inf = Shot::new(0.0, f64::INFINITY, true, None, ShotType::TwoPt);

    assert!(!transform.is_valid_shot(&nan));
    assert!(!transform.is_valid_shot(&inf));
}

#[test]
fn shots_beyond_half_court_are_invalid() {
    let transform = CourtTransform::default();

    // Just past half-court: draw y goes negative.
    let beyond = Shot::new(0.0, 421.0, false, None, ShotType::ThreePt);
    // Behind the baseline edge.
    let behind = Shot::new(0.0, -51.0, false, None, ShotType::TwoPt);
    // Off the sideline.
    let wide = Shot::new(251.0, 100.0, false, None, ShotType::TwoPt);

    assert!(!transform.is_valid_shot(&beyond));
    assert!(!transform.is_valid_shot(&behind));
    assert!(!transform.is_valid_shot(&wide));
}

#[test]
fn valid_shots_filters_silently_and_preserves_order() {
    let transform = CourtTransform::default();
    let shots = vec![
        Shot::new(10.0, 20.0, true, None, ShotType::TwoPt),
        Shot::new(f64::NAN, 20.0, true, None, ShotType::TwoPt),
        Shot::new(-30.0, 150.0, false, None, ShotType::TwoPt),
    ];

    let valid = transform.valid_shots(&shots);

    assert_eq!(valid.len(), 2);
    assert_eq!(valid[0].x, 10.0);
    assert_eq!(valid[1].x, -30.0);
}

#[test]
fn degenerate_canvas_is_rejected() {
    assert!(CourtTransform::new(Canvas::new(0, 470)).is_err());
    assert!(CourtTransform::new(Canvas::new(500, 0)).is_err());
    // No room below the basket.
    assert!(CourtTransform::new(Canvas::new(500, 50)).is_err());
}
