/// Future value of `periodic` paid at the end of each of `periods` periods.
///
/// A rate of exactly zero accumulates the payments linearly instead of
/// dividing by the rate.
pub(crate) fn annuity_future_value(periodic: f64, rate: f64, periods: i64) -> f64 {
    let periods = periods as f64;
    if rate != 0.0 {
        periodic * ((1.0 + rate).powf(periods) - 1.0) / rate
    } else {
        periodic * periods
    }
}
