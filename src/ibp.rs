// Indian buffet process via the stick-breaking construction

use crate::distr::{FeatureAllocationSampler, Randomness};
use crate::error::IbpError;
use crate::feat::FeatureAllocation;
use crate::prelude::*;

// Largest number of candidate features a single draw may consider
pub const MAX_FEATURES: usize = 1 << 20;

#[derive(Debug, Clone)]
pub struct IbpParameters {
    pub n_items: usize,
    concentration: Concentration,
    damping: Damping,
    max_features: usize,
}

impl IbpParameters {
    pub fn new(
        n_items: usize,
        concentration: Concentration,
        damping: Damping,
    ) -> Result<Self, IbpError> {
        if n_items == 0 {
            return Err(IbpError::NoItems);
        }
        concentration.damped(damping)?;
        let max_features = truncation_level(n_items, concentration)?;
        Ok(Self {
            n_items,
            concentration,
            damping,
            max_features,
        })
    }

    pub fn new_with_concentration(
        n_items: usize,
        concentration: Concentration,
    ) -> Result<Self, IbpError> {
        Self::new(n_items, concentration, Damping::default())
    }

    pub fn concentration(&self) -> Concentration {
        self.concentration
    }

    pub fn damping(&self) -> Damping {
        self.damping
    }

    /// Expected number of features under the undamped prior, `alpha * H(n_items)`.
    pub fn expected_n_features(&self) -> f64 {
        expected_n_features(self.n_items, self.concentration)
    }

    pub fn truncation_level(&self) -> usize {
        self.max_features
    }
}

pub fn harmonic_number(n: usize) -> f64 {
    (1..=n).map(|k| 1.0 / k as f64).sum()
}

pub fn expected_n_features(n_items: usize, concentration: Concentration) -> f64 {
    concentration * harmonic_number(n_items)
}

/// Number of candidate features: the Poisson mean plus two standard
/// deviations, plus one. Fails when that exceeds `MAX_FEATURES`.
pub fn truncation_level(
    n_items: usize,
    concentration: Concentration,
) -> Result<usize, IbpError> {
    let lambda = expected_n_features(n_items, concentration);
    let cap = (lambda + 2.0 * lambda.sqrt()).floor();
    if !(cap < MAX_FEATURES as f64) {
        return Err(IbpError::TooManyFeatures(lambda));
    }
    (cap as usize)
        .checked_add(1)
        .ok_or(IbpError::TooManyFeatures(lambda))
}

/// Remaining stick length after each break. Consumes one Beta draw per
/// candidate feature, in order.
pub(crate) fn stick_lengths<R: Randomness + ?Sized>(
    n_features: usize,
    concentration: Concentration,
    rng: &mut R,
) -> Result<Vec<f64>, IbpError> {
    let proportions = rng.betas(concentration.unwrap(), 1.0, n_features)?;
    Ok(proportions
        .into_iter()
        .scan(1.0, |stick, nu| {
            *stick *= nu;
            Some(*stick)
        })
        .collect())
}

pub fn sample<R: Randomness + ?Sized>(
    parameters: &IbpParameters,
    rng: &mut R,
) -> Result<FeatureAllocation, IbpError> {
    let n_items = parameters.n_items;
    let damping = parameters.damping;
    let max_features = parameters.truncation_level();
    let sticks = stick_lengths(
        max_features,
        parameters.concentration.damped(damping)?,
        rng,
    )?;
    let mut allocation = FeatureAllocation::empty(n_items);
    for stick in sticks {
        let probability = stick * damping;
        let column: Vec<bool> = (0..n_items).map(|_| rng.uniform() < probability).collect();
        if column.iter().any(|&x| x) {
            allocation.push_column(column);
        }
    }
    tracing::debug!(
        n_items,
        max_features,
        n_features = allocation.n_features(),
        n_skipped = max_features - allocation.n_features(),
        "sampled feature allocation"
    );
    Ok(allocation)
}

/// Validates raw parameters and draws one allocation.
pub fn generate<R: Randomness + ?Sized>(
    n_items: usize,
    alpha: f64,
    reduced_proportion: f64,
    rng: &mut R,
) -> Result<FeatureAllocation, IbpError> {
    let parameters = IbpParameters::new(
        n_items,
        Concentration::new(alpha)?,
        Damping::new(reduced_proportion)?,
    )?;
    sample(&parameters, rng)
}

impl FeatureAllocationSampler for IbpParameters {
    fn sample<R: Randomness + ?Sized>(&self, rng: &mut R) -> Result<FeatureAllocation, IbpError> {
        sample(self, rng)
    }
}
