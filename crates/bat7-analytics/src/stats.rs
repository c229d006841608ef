//! Small numeric helpers shared by the aggregator.

/// Arithmetic mean, or `None` for an empty input.
pub fn mean<I>(values: I) -> Option<f64>
where
    I: IntoIterator<Item = f64>,
{
    let (sum, count) = values
        .into_iter()
        .fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    (count > 0).then(|| sum / count as f64)
}

/// Round to two decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Highest value a percentile can take.
pub const MAX_PERCENTILE: u8 = 100;

/// Mean percentile over the records that have one, rounded to the nearest
/// integer. Values above 100 are ignored. `None` when no usable value is
/// present, which is not the same as 0.
pub fn mean_percentile<I>(percentiles: I) -> Option<u8>
where
    I: IntoIterator<Item = Option<u8>>,
{
    mean(
        percentiles
            .into_iter()
            .flatten()
            .filter(|p| *p <= MAX_PERCENTILE)
            .map(f64::from),
    )
    .map(|m| m.round().clamp(0.0, f64::from(MAX_PERCENTILE)) as u8)
}
