use super::*;

#[test]
fn test_zero_sd_is_exact_order() {
    assert_eq!(probability_greater(5.0, 3.0, 0.0), 1.0);
    assert_eq!(probability_greater(3.0, 5.0, 0.0), 0.0);
    assert_eq!(probability_greater(4.0, 4.0, 0.0), 0.5);
    assert_eq!(probability_greater_closed_form(5.0, 3.0, 0.0), 1.0);
    assert_eq!(probability_greater_closed_form(4.0, 4.0, 0.0), 0.5);
}

#[test]
fn test_equal_means_give_half() {
    for (x, sd) in [(30.0, 3.2), (2.0, 4.0), (90.0, 10.0)] {
        assert_eq!(probability_greater(x, x, sd), 0.5);
    }
}

#[test]
fn test_complementary_inside_domain() {
    let ab = probability_greater(40.0, 30.0, 3.2);
    let ba = probability_greater(30.0, 40.0, 3.2);
    assert!(ab > 0.9);
    assert!(ba < 0.1);
    assert!((ab + ba - 1.0).abs() < 1e-6);
}

#[test]
fn test_asymmetric_normalization_near_origin() {
    // A's density is truncated less than B's at 0 degrees, so the two
    // directions normalize by different integrals.
    let ab = probability_greater(5.0, 2.0, 3.0);
    let ba = probability_greater(2.0, 5.0, 3.0);
    let sum = ab + ba;
    assert!(sum > 1.05);
    assert!(sum < 1.15);
}

#[test]
fn test_monotonic_in_difference() {
    let mut prev = 0.5;
    for delta in [1.0, 2.0, 5.0, 10.0, 20.0] {
        let p = probability_greater(40.0 + delta, 40.0, 3.2);
        assert!(p > prev);
        assert!(p <= 1.0);
        prev = p;
    }
    assert!(prev > 0.998);
}

#[test]
fn test_closed_form_matches_grid() {
    for (a, b, sd) in [
        (30.0, 25.0, 3.2),
        (15.0, 30.0, 3.2),
        (60.0, 58.0, 5.0),
        (45.0, 50.0, 4.2),
    ] {
        let grid = probability_greater(a, b, sd);
        let closed = probability_greater_closed_form(a, b, sd);
        assert!((grid - closed).abs() < 1e-3, "a={a} b={b} sd={sd}");
    }
}

#[test]
fn test_closed_form_value() {
    // Phi(5 / 6.4)
    let p = probability_greater_closed_form(30.0, 25.0, 3.2);
    assert!((p - 0.782_672).abs() < 1e-4);
}

#[test]
fn test_custom_grid_close_to_standard() {
    let coarse = IntegrationGrid::new(0.0, 180.0, 0.1);
    let p_coarse = probability_greater_on(&coarse, 32.0, 28.0, 3.2);
    let p_fine = probability_greater(32.0, 28.0, 3.2);
    assert!((p_coarse - p_fine).abs() < 1e-3);
}

#[test]
fn test_major_curve_mt_dominant() {
    let coronal = AngleTriple::new(25.0, 30.0, 15.0);
    let m = major_curve(&coronal, 3.2, ComparisonMethod::Grid);
    assert!(m.p_tl_major < 1e-3);
    assert_eq!(m.p_mt_major, 1.0 - m.p_tl_major);
}

#[test]
fn test_major_curve_tl_dominant() {
    let coronal = AngleTriple::new(20.0, 30.0, 55.0);
    let m = major_curve(&coronal, 3.2, ComparisonMethod::ClosedForm);
    assert!(m.p_tl_major > 0.99);
}

#[test]
fn test_major_curve_is_and_of_both_comparisons() {
    let coronal = AngleTriple::new(40.0, 40.0, 40.0);
    let m = major_curve(&coronal, 3.2, ComparisonMethod::Grid);
    assert_eq!(m.p_tl_major, 0.25);
    assert_eq!(m.p_mt_major, 0.75);
}
