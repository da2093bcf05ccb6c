use shotchart_rs::core::hexbin::{HEX_RADIUS, MIN_CELL_OPACITY};
use shotchart_rs::core::{
    CourtTransform, LeagueBaseline, Point, Shot, ShotType, ZoneName, hex_bins,
};
use shotchart_rs::render::DivergingScale;

fn bins_for(shots: &[Shot]) -> Vec<shotchart_rs::core::HexBin> {
    hex_bins(
        shots,
        CourtTransform::default(),
        HEX_RADIUS,
        &LeagueBaseline::default(),
        DivergingScale::default(),
    )
    .expect("valid radius")
}

#[test]
fn empty_input_yields_empty_bins() {
    assert!(bins_for(&[]).is_empty());
}

#[test]
fn fully_invalid_input_yields_empty_bins() {
    let shots = vec![
        Shot::new(f64::NAN, 10.0, true, None, ShotType::TwoPt),
        Shot::new(0.0, 900.0, true, None, ShotType::ThreePt),
    ];
    assert!(bins_for(&shots).is_empty());
}

#[test]
fn colocated_shots_share_one_cell() {
    let shots = vec![
        Shot::new(12.0, 33.0, true, Some(ZoneName::PaintNonRa), ShotType::TwoPt),
        Shot::new(12.0, 33.0, true, Some(ZoneName::PaintNonRa), ShotType::TwoPt),
        Shot::new(12.0, 33.0, false, Some(ZoneName::PaintNonRa), ShotType::TwoPt),
    ];

    let bins = bins_for(&shots);

    assert_eq!(bins.len(), 1);
    assert_eq!(bins[0].fga, 3);
    assert_eq!(bins[0].fgm, 2);
    assert!((bins[0].fg_pct - 2.0 / 3.0).abs() < 1e-12);
    assert_eq!(bins[0].dominant_zone, Some(ZoneName::PaintNonRa));
}

#[test]
fn cell_center_is_near_its_points() {
    let shots = vec![Shot::new(40.0, 120.0, false, None, ShotType::TwoPt)];
    let bins = bins_for(&shots);

    let draw = CourtTransform::default().to_draw(Point::new(40.0, 120.0));
    let center = bins[0].center;
    let distance = ((draw.x - center.x).powi(2) + (draw.y - center.y).powi(2)).sqrt();

    // A point is never farther from its cell center than the hex radius.
    assert!(distance <= HEX_RADIUS + 1e-9);
}

#[test]
fn attempts_are_conserved_across_cells() {
    let mut shots = Vec::new();
    for i in 0..40 {
        let x = -200.0 + 10.0 * f64::from(i);
        shots.push(Shot::new(x, 80.0, i % 2 == 0, None, ShotType::TwoPt));
    }
    // Invalid rows must not count.
    shots.push(Shot::new(f64::NAN, 80.0, true, None, ShotType::TwoPt));
    shots.push(Shot::new(0.0, 800.0, true, None, ShotType::TwoPt));

    let bins = bins_for(&shots);
    let total: u32 = bins.iter().map(|bin| bin.fga).sum();

    assert_eq!(total, 40);
}

#[test]
fn dominant_zone_tie_keeps_first_seen() {
    let shots = vec![
        Shot::new(5.0, 5.0, true, Some(ZoneName::RestrictedArea), ShotType::TwoPt),
        Shot::new(5.0, 5.0, false, Some(ZoneName::PaintNonRa), ShotType::TwoPt),
    ];
    let bins = bins_for(&shots);
    assert_eq!(bins[0].dominant_zone, Some(ZoneName::RestrictedArea));

    let reversed: Vec<Shot> = shots.into_iter().rev().collect();
    let bins = bins_for(&reversed);
    assert_eq!(bins[0].dominant_zone, Some(ZoneName::PaintNonRa));
}

#[test]
fn dominant_zone_prefers_the_majority_label() {
    let shots = vec![
        Shot::new(5.0, 5.0, true, Some(ZoneName::RestrictedArea), ShotType::TwoPt),
        Shot::new(5.0, 5.0, false, Some(ZoneName::PaintNonRa), ShotType::TwoPt),
        Shot::new(5.0, 5.0, false, Some(ZoneName::PaintNonRa), ShotType::TwoPt),
    ];

    let bins = bins_for(&shots);
    assert_eq!(bins[0].dominant_zone, Some(ZoneName::PaintNonRa));
}

#[test]
fn unlabeled_cells_fall_back_to_the_default_baseline() {
    let shots = vec![Shot::new(60.0, 60.0, true, None, ShotType::TwoPt)];
    let bins = bins_for(&shots);

    assert_eq!(bins[0].dominant_zone, None);
    assert!((bins[0].league_avg - 0.40).abs() < 1e-12);
}

#[test]
fn single_attempt_cells_get_minimum_opacity() {
    let shots = vec![Shot::new(0.0, 100.0, true, None, ShotType::TwoPt)];
    let bins = bins_for(&shots);

    assert!((bins[0].opacity - MIN_CELL_OPACITY).abs() < 1e-12);
}

#[test]
fn busiest_cell_saturates_opacity() {
    let mut shots = Vec::new();
    for _ in 0..12 {
        shots.push(Shot::new(0.0, 100.0, true, None, ShotType::TwoPt));
    }
    shots.push(Shot::new(-200.0, 100.0, false, None, ShotType::TwoPt));

    let bins = bins_for(&shots);
    assert_eq!(bins.len(), 2);

    let busy = bins.iter().find(|bin| bin.fga == 12).expect("busy cell");
    let quiet = bins.iter().find(|bin| bin.fga == 1).expect("quiet cell");

    assert!((busy.opacity - 1.0).abs() < 1e-12);
    assert!((quiet.opacity - MIN_CELL_OPACITY).abs() < 1e-12);
}

#[test]
fn opacity_is_monotonic_in_attempt_count() {
    let mut shots = Vec::new();
    // Three cells with 2, 5, and 9 attempts.
    for (count, x) in [(2, -180.0), (5, 0.0), (9, 180.0)] {
        for _ in 0..count {
            shots.push(Shot::new(x, 100.0, false, None, ShotType::TwoPt));
        }
    }

    let mut bins = bins_for(&shots);
    bins.sort_by_key(|bin| bin.fga);

    assert!(bins[0].opacity < bins[1].opacity);
    assert!(bins[1].opacity < bins[2].opacity);
    for bin in &bins {
        assert!(bin.opacity >= MIN_CELL_OPACITY && bin.opacity <= 1.0);
    }
}

#[test]
fn hot_cells_lean_red_and_cold_cells_lean_blue() {
    let hot_shots: Vec<Shot> = (0..5)
        .map(|_| Shot::new(5.0, 5.0, true, Some(ZoneName::RestrictedArea), ShotType::TwoPt))
        .collect();
    let cold_shots: Vec<Shot> = (0..5)
        .map(|_| Shot::new(5.0, 5.0, false, Some(ZoneName::RestrictedArea), ShotType::TwoPt))
        .collect();

    let hot = bins_for(&hot_shots)[0];
    let cold = bins_for(&cold_shots)[0];

    assert!(hot.color.red > hot.color.blue);
    assert!(cold.color.blue > cold.color.red);
}

#[test]
fn invalid_radius_is_rejected() {
    let result = hex_bins(
        &[],
        CourtTransform::default(),
        0.0,
        &LeagueBaseline::default(),
        DivergingScale::default(),
    );
    assert!(result.is_err());
}
