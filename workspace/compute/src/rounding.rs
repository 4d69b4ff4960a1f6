/// Rounds a reading to two decimal places.
///
/// Scales by 100, rounds half-to-even and scales back, so a literal such as
/// `2.675` whose scaled value lands on the midpoint rounds up to `2.68`.
/// Non-finite input is returned unchanged.
pub fn round_dp2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

/// True when `value` carries no more than two decimal places.
pub fn has_at_most_two_decimals(value: f64) -> bool {
    round_dp2(value) == value
}
