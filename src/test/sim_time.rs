use crate::sim::SimTime;

#[test]
fn sim_time_unit_conversions() {
    assert_eq!(SimTime::from_micros(1), SimTime(1_000));
    assert_eq!(SimTime::from_millis(1), SimTime(1_000_000));
    assert_eq!(SimTime::from_secs(1), SimTime(1_000_000_000));
}

#[test]
fn sim_time_unit_conversions_saturate_on_overflow() {
    assert_eq!(SimTime::from_micros(u64::MAX), SimTime(u64::MAX));
    assert_eq!(SimTime::from_millis(u64::MAX), SimTime(u64::MAX));
    assert_eq!(SimTime::from_secs(u64::MAX), SimTime(u64::MAX));
}

#[test]
fn fractional_millis_round_to_nanos_and_clamp_negative() {
    assert_eq!(SimTime::from_millis_f64(1.5), SimTime(1_500_000));
    assert_eq!(SimTime::from_millis_f64(0.0000004), SimTime::ZERO);
    assert_eq!(SimTime::from_millis_f64(-3.0), SimTime::ZERO);
    assert_eq!(SimTime::from_millis_f64(f64::NAN), SimTime::ZERO);
    assert_eq!(SimTime::from_millis_f64(f64::INFINITY), SimTime(u64::MAX));
}

#[test]
fn display_uses_milliseconds() {
    assert_eq!(SimTime::from_micros(2_500).to_string(), "2.500ms");
}
