use super::chain::{Chain, CorrectionBias, Shrink};
use super::*;
use approx::assert_relative_eq;
use rstest::{fixture, rstest};

const STEP: f32 = 1.0 / 300.0;

#[fixture]
fn still_config() -> LashConfig {
    LashConfig {
        correction_weight: 0.5,
        damping: Vec3::ZERO,
        gravity: Vec3::ZERO,
        ..LashConfig::default()
    }
}

fn lash_with_points(config: LashConfig, points: &[Vec3]) -> Lash {
    let anchor = points.first().copied().unwrap_or(Vec3::ZERO);
    let mut lash = Lash::new(config, anchor).expect("test config should be valid");
    lash.chain = Chain::from_points(points);
    lash
}

fn max_pair_distance(points: &[Vec3]) -> f32 {
    points
        .windows(2)
        .map(|pair| pair[0].distance(pair[1]))
        .fold(0.0, f32::max)
}

#[test]
fn new_lash_holds_only_the_anchor() {
    let anchor = Vec3::new(1.0, 2.0, 3.0);
    let lash = Lash::new(LashConfig::default(), anchor).expect("defaults are valid");
    assert_eq!(lash.points(), &[anchor]);
    assert_eq!(lash.segment_count(), 0);
    assert!(!lash.is_extended());
}

#[test]
fn invalid_config_is_rejected() {
    let config = LashConfig {
        steps_per_second: 10.0,
        ..LashConfig::default()
    };
    assert_eq!(
        Lash::new(config, Vec3::ZERO).map(|_| ()),
        Err(ConfigError::StepsPerSecond(10.0))
    );
}

#[rstest]
fn extending_an_empty_lash_sprouts_without_stepping(still_config: LashConfig) {
    let mut lash = Lash::new(still_config, Vec3::ZERO).expect("valid config");
    let anchor = Vec3::new(0.0, 0.0, 5.0);
    lash.advance(1.0, anchor, true);
    assert_eq!(lash.points(), &[anchor, anchor]);
    assert_eq!(lash.step_remainder(), 0.0);
    assert!(lash.is_extended());
}

#[rstest]
fn retracted_empty_lash_does_nothing(still_config: LashConfig) {
    let mut lash = Lash::new(still_config, Vec3::ZERO).expect("valid config");
    lash.advance(1.0, Vec3::X, false);
    assert_eq!(lash.points(), &[Vec3::X]);
    assert_eq!(lash.step_remainder(), 0.0);
}

#[test]
fn zero_max_segments_never_grows() {
    let config = LashConfig {
        max_segments: 0,
        ..LashConfig::default()
    };
    let mut lash = Lash::new(config, Vec3::ZERO).expect("valid config");
    for _ in 0..10 {
        lash.advance(0.1, Vec3::ZERO, true);
    }
    assert_eq!(lash.segment_count(), 0);
}

#[test]
fn anchor_is_pinned_every_frame() {
    let mut lash = Lash::new(LashConfig::default(), Vec3::ZERO).expect("defaults are valid");
    for frame in 0..240_u16 {
        let t = f32::from(frame) / 90.0;
        let anchor = Vec3::new(t.sin() * 40.0, t.cos() * 25.0, t * 3.0);
        lash.advance(1.0 / 90.0, anchor, frame < 150);
        assert_eq!(lash.points()[0], anchor);
        assert_eq!(lash.points().len(), lash.segment_count() + 1);
    }
}

#[rstest]
fn long_tail_segment_grows_by_one_per_step(still_config: LashConfig) {
    let points = [Vec3::ZERO, Vec3::new(0.0, 0.0, -10.0), Vec3::new(0.0, 0.0, -18.0)];
    let mut lash = lash_with_points(still_config, &points);

    lash.advance(STEP, Vec3::ZERO, true);
    assert_eq!(lash.segment_count(), 3);
    assert_eq!(lash.points()[3], Vec3::new(0.0, 0.0, -18.0));

    // The new tail segment has zero length, so the next step must not grow.
    lash.advance(STEP, Vec3::ZERO, true);
    assert_eq!(lash.segment_count(), 3);
}

#[rstest]
fn growth_stops_at_max_segments(still_config: LashConfig) {
    let config = LashConfig {
        max_segments: 2,
        ..still_config
    };
    let points = [Vec3::ZERO, Vec3::new(0.0, 0.0, -10.0), Vec3::new(0.0, 0.0, -18.0)];
    let mut lash = lash_with_points(config, &points);
    lash.advance(STEP * 5.0, Vec3::ZERO, true);
    assert_eq!(lash.segment_count(), 2);
}

#[test]
fn integration_applies_linear_damping_and_gravity() {
    let mut chain = Chain::from_points(&[Vec3::ZERO, Vec3::X]);
    // At rest, so gravity alone moves the point to x = 2 and leaves it
    // travelling at 1 unit per step.
    chain.integrate(1.0, Vec3::ZERO, Vec3::X);
    chain.integrate(0.1, Vec3::new(5.0, 0.0, 0.0), Vec3::new(0.0, 0.0, -20.0));
    let point = chain.points()[1];
    assert_relative_eq!(point.x, 2.5, epsilon = 1e-6);
    assert_relative_eq!(point.y, 0.0);
    assert_relative_eq!(point.z, -2.0, epsilon = 1e-6);
}

#[test]
fn first_segment_inherits_the_anchor_motion() {
    let mut chain = Chain::from_points(&[Vec3::ZERO]);
    chain.pin_anchor(Vec3::X);
    chain.push_tail();
    chain.integrate(1.0, Vec3::ZERO, Vec3::ZERO);
    assert_eq!(chain.points(), &[Vec3::X, Vec3::X * 2.0]);
}

#[rstest]
fn flicked_anchor_whips_the_sprouted_tip(still_config: LashConfig) {
    let config = LashConfig {
        steps_per_second: 100.0,
        ..still_config
    };
    let mut lash = Lash::new(config, Vec3::ZERO).expect("valid config");
    lash.advance(0.01, Vec3::X, true);
    assert_eq!(lash.points(), &[Vec3::X, Vec3::X]);
    lash.advance(0.01, Vec3::X * 2.0, true);
    assert_eq!(lash.points(), &[Vec3::X * 2.0, Vec3::X * 2.0]);
}

#[rstest]
#[case(CorrectionBias::Tip, 17.5, 27.5)]
#[case(CorrectionBias::Base, 12.5, 22.5)]
fn relaxation_bias_decides_which_end_moves_more(
    #[case] bias: CorrectionBias,
    #[case] parent_x: f32,
    #[case] child_x: f32,
) {
    let mut chain = Chain::from_points(&[Vec3::ZERO, Vec3::X * 10.0, Vec3::X * 30.0]);
    chain.relax(10.0, 0.25, bias);
    let points = chain.points();
    assert_relative_eq!(points[1].x, parent_x, epsilon = 1e-5);
    assert_relative_eq!(points[2].x, child_x, epsilon = 1e-5);
    assert_relative_eq!(points[2].x - points[1].x, 10.0, epsilon = 1e-5);
}

#[test]
fn relaxation_ignores_coincident_points() {
    let mut chain = Chain::from_points(&[Vec3::ZERO, Vec3::X, Vec3::X]);
    chain.relax(0.5, 0.5, CorrectionBias::Tip);
    assert_eq!(chain.points(), &[Vec3::ZERO, Vec3::X, Vec3::X]);
}

#[test]
fn first_segment_clamp_is_hard() {
    let mut chain = Chain::from_points(&[Vec3::ZERO, Vec3::new(0.0, 20.0, 0.0)]);
    chain.clamp_first(10.0);
    assert_relative_eq!(chain.points()[1].y, 10.0, epsilon = 1e-6);
}

#[test]
fn shrink_reels_in_then_drops_the_first_point() {
    let mut chain = Chain::from_points(&[Vec3::ZERO, Vec3::X * 5.0, Vec3::X * 10.0]);

    let Shrink::Continue { first_segment_cap } = chain.shrink(0.1, 30.0, 0.1) else {
        panic!("two segments cannot collapse in one shrink");
    };
    assert_relative_eq!(first_segment_cap, 2.0, epsilon = 1e-6);

    let Shrink::Continue { first_segment_cap } = chain.shrink(0.1, 30.0, 0.1) else {
        panic!("one segment should remain");
    };
    assert_eq!(chain.segment_count(), 1);
    assert_relative_eq!(first_segment_cap, 10.0, epsilon = 1e-6);

    chain.shrink(1.0, 30.0, 0.1);
    assert_eq!(chain.segment_count(), 0);
}

#[test]
fn shrinking_the_last_segment_collapses() {
    let mut chain = Chain::from_points(&[Vec3::ZERO, Vec3::X]);
    assert_eq!(chain.shrink(0.1, 30.0, 0.1), Shrink::Collapsed);
    assert_eq!(chain.points(), &[Vec3::ZERO]);
}

#[test]
#[should_panic(expected = "empty chain")]
fn removing_from_an_empty_chain_panics() {
    let mut chain = Chain::new(Vec3::ZERO, 4);
    chain.remove_front();
}

#[rstest]
fn collapse_stops_the_remaining_sub_steps(still_config: LashConfig) {
    let mut lash = lash_with_points(still_config, &[Vec3::ZERO, Vec3::X * 0.05]);
    lash.advance(STEP * 10.5, Vec3::ZERO, false);
    assert_eq!(lash.points(), &[Vec3::ZERO]);
    assert!(lash.step_remainder() < STEP);
    assert_eq!(lash.shrink_first_segment_cap(), 0.0);
}

#[test]
fn retract_cap_prevents_the_first_segment_from_stretching() {
    let config = LashConfig {
        gravity: Vec3::new(1000.0, 0.0, 0.0),
        damping: Vec3::ZERO,
        ..LashConfig::default()
    };
    let mut lash = lash_with_points(config, &[Vec3::ZERO, Vec3::X * 5.0, Vec3::X * 15.0]);
    lash.advance(STEP, Vec3::ZERO, false);

    assert_relative_eq!(lash.shrink_first_segment_cap(), 4.9, epsilon = 1e-4);
    let first = lash.points()[1].length();
    assert!(
        first <= lash.shrink_first_segment_cap() + 1e-4,
        "first segment {first} exceeds cap {}",
        lash.shrink_first_segment_cap()
    );
}

#[test]
fn capped_lash_survives_a_huge_frame() {
    let config = LashConfig {
        steps_per_second: 1_000_000.0,
        max_steps_per_advance: Some(4),
        ..LashConfig::default()
    };
    let mut lash = Lash::new(config, Vec3::ZERO).expect("capped config is valid");
    lash.advance(0.01, Vec3::ZERO, true);
    lash.advance(20.0, Vec3::ZERO, true);
    assert_eq!(lash.segment_count(), 1);
    assert!(lash.step_remainder() < lash.config().step_interval());
}

#[test]
fn stretched_chain_relaxes_within_bounds() {
    let config = LashConfig {
        max_segments: 5,
        gravity: Vec3::ZERO,
        ..LashConfig::default()
    };
    let points: Vec<Vec3> = (0..=5_u8)
        .map(|i| Vec3::new(0.0, 15.0, 3.0) * f32::from(i))
        .collect();
    let mut lash = lash_with_points(config, &points);
    for _ in 0..100 {
        lash.advance(0.1, Vec3::ZERO, true);
    }
    assert_eq!(lash.segment_count(), 5);
    let worst = max_pair_distance(lash.points());
    assert!(worst <= 10.0 + 1e-3, "segment length {worst} above limit");
}

#[test]
fn retracting_lash_empties_in_finite_time() {
    let mut lash = Lash::new(LashConfig::default(), Vec3::ZERO).expect("defaults are valid");
    for _ in 0..90 {
        lash.advance(1.0 / 90.0, Vec3::ZERO, true);
    }
    assert!(lash.segment_count() > 0);

    let mut frames = 0;
    while lash.segment_count() > 0 {
        lash.advance(1.0 / 90.0, Vec3::ZERO, false);
        frames += 1;
        assert!(frames < 90 * 20, "lash still has {} segments", lash.segment_count());
    }
    assert_eq!(lash.points(), &[Vec3::ZERO]);
}
