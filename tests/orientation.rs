//! Quadrant selection and verticality of wrapped rotations.
use approx::assert_relative_eq;
use drakewalk::orientation::{normalize_rotation, verticality, Quadrant};
use glam::Vec2;
use rstest::rstest;
use test_utils::sample_angles;

#[rstest]
#[case::first(10.0, Vec2::new(1.0, 1.0))]
#[case::second(100.0, Vec2::new(-1.0, 1.0))]
#[case::third(190.0, Vec2::new(-1.0, -1.0))]
#[case::fourth(280.0, Vec2::new(1.0, -1.0))]
#[case::wrapped(370.0, Vec2::new(1.0, 1.0))]
#[case::negative(-80.0, Vec2::new(1.0, -1.0))]
#[case::many_turns(3_610.0, Vec2::new(1.0, 1.0))]
fn quadrant_sign_vectors(#[case] degrees: f32, #[case] expected: Vec2) {
    assert_eq!(Quadrant::from_rotation(degrees).sign_vector(), expected);
}

#[rstest]
#[case::floor(0.0, 0.0)]
#[case::diagonal(45.0, 0.5)]
#[case::wall(90.0, 1.0)]
#[case::overhang(135.0, 0.5)]
#[case::ceiling(180.0, 0.0)]
#[case::other_wall(270.0, 1.0)]
#[case::full_turn(360.0, 0.0)]
#[case::negative_wall(-90.0, 1.0)]
fn verticality_key_points(#[case] degrees: f32, #[case] expected: f32) {
    assert_relative_eq!(verticality(degrees), expected, epsilon = 1e-5);
}

#[test]
fn verticality_stays_in_unit_range() {
    for degrees in sample_angles(720).into_iter().map(|a| a * 3.0 - 500.0) {
        let v = verticality(degrees);
        assert!((0.0..=1.0).contains(&v), "verticality({degrees}) = {v}");
    }
}

#[test]
fn verticality_repeats_every_half_turn() {
    for degrees in sample_angles(36) {
        assert_relative_eq!(
            verticality(degrees),
            verticality(degrees + 180.0),
            epsilon = 1e-4
        );
    }
}

#[test]
fn verticality_is_symmetric_about_walls() {
    for offset in [5.0_f32, 20.0, 44.0, 67.5, 89.0] {
        assert_relative_eq!(
            verticality(90.0 - offset),
            verticality(90.0 + offset),
            epsilon = 1e-5
        );
        assert_relative_eq!(
            verticality(270.0 - offset),
            verticality(270.0 + offset),
            epsilon = 1e-4
        );
    }
}

#[test]
fn normalised_rotation_is_within_one_turn() {
    for degrees in [-720.5_f32, -1.0, 0.0, 359.9, 1_000.0] {
        let wrapped = normalize_rotation(degrees);
        assert!((0.0..=360.0).contains(&wrapped), "{degrees} -> {wrapped}");
    }
}
