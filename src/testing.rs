use crate::feat::FeatureAllocation;
use statrs::statistics::Statistics;

pub fn n_features_of_samples(
    n_samples: usize,
    mut sample: impl FnMut() -> FeatureAllocation,
) -> Vec<f64> {
    (0..n_samples).map(|_| sample().n_features() as f64).collect()
}

/// Checks that the sample mean is within `relative_tolerance` of `expected`
/// and that the expected value lies within four standard errors plus that
/// tolerance. Returns a description of the failure, if any.
pub fn assert_mean_within(
    samples: &[f64],
    expected: f64,
    relative_tolerance: f64,
) -> Option<String> {
    let mean = samples.mean();
    let standard_error = (samples.variance() / samples.len() as f64).sqrt();
    let allowance = relative_tolerance * expected.abs();
    if (mean - expected).abs() > allowance + 4.0 * standard_error {
        Some(format!(
            "Rejected mean... observed: {:.4}, expected: {:.4}, standard error: {:.4}, n: {}",
            mean,
            expected,
            standard_error,
            samples.len()
        ))
    } else {
        None
    }
}
