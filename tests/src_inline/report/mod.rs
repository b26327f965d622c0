use super::*;

#[test]
fn test_quantiles() {
    let v = vec![1.0f32, 2.0, 3.0, 4.0, 5.0];
    assert_eq!(median(&v), 3.0);
    assert_eq!(median(&[]), 0.0);
}

#[test]
fn test_median_of_even_count_averages_middle() {
    let v = vec![10.0f32, 40.0, 20.0, 30.0];
    assert_eq!(median(&v), 25.0);
    assert_eq!(median(&[7.0, 3.0]), 5.0);
    assert_eq!(median(&[4.0]), 4.0);
}

#[test]
fn test_fraction_handles_empty_total() {
    assert_eq!(fraction(0, 0), 0.0);
    assert_eq!(fraction(1, 4), 0.25);
}

#[test]
fn test_format_f32_6() {
    assert_eq!(format_f32_6(0.5), "0.500000");
}
