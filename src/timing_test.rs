use super::*;

#[test]
fn first_call_passes() {
    let mut throttle = Throttle::new(10.0);
    assert!(throttle.try_pass(1000.0));
}

#[test]
fn calls_inside_window_are_dropped() {
    let mut throttle = Throttle::new(10.0);
    assert!(throttle.try_pass(0.0));
    assert!(!throttle.try_pass(3.0));
    assert!(!throttle.try_pass(9.9));
    assert!(throttle.try_pass(10.0));
    assert!(!throttle.try_pass(15.0));
}

#[test]
fn at_most_one_pass_per_window() {
    let mut throttle = Throttle::new(10.0);
    let passes = (0..100).filter(|&t| throttle.try_pass(f64::from(t))).count();
    assert_eq!(passes, 10);
}

#[test]
fn zero_limit_passes_everything() {
    let mut throttle = Throttle::new(0.0);
    assert!((0..5).all(|_| throttle.try_pass(42.0)));
}
