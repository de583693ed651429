// Batch of left-ordered draws for rendering side by side

use crate::distr::{FeatureAllocationSampler, Randomness};
use crate::error::IbpError;
use crate::feat::FeatureAllocation;
use crate::ibp::IbpParameters;
use crate::prelude::*;

pub const DEMO_N_ITEMS: usize = 50;

/// (concentration, damping) pairs, from sparse to dense.
pub const DEMO_SETTINGS: [(f64, f64); 4] = [(10.0, 0.1), (10.0, 1.0), (50.0, 1.0), (50.0, 0.5)];

pub fn demo_parameters() -> Result<Vec<IbpParameters>, IbpError> {
    DEMO_SETTINGS
        .iter()
        .map(|&(alpha, damping)| {
            IbpParameters::new(
                DEMO_N_ITEMS,
                Concentration::new(alpha)?,
                Damping::new(damping)?,
            )
        })
        .collect()
}

/// One left-ordered draw per demo setting, paired with its parameters.
pub fn demo_allocations<R: Randomness + ?Sized>(
    rng: &mut R,
) -> Result<Vec<(IbpParameters, FeatureAllocation)>, IbpError> {
    demo_parameters()?
        .into_iter()
        .map(|parameters| -> Result<_, IbpError> {
            let allocation = parameters.sample(rng)?.left_ordered();
            Ok((parameters, allocation))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    #[test]
    fn test_demo_allocations() {
        let rng = &mut Pcg64Mcg::seed_from_u64(0xBEEF);
        let draws = demo_allocations(rng).unwrap();
        assert_eq!(draws.len(), DEMO_SETTINGS.len());
        for ((parameters, allocation), &(alpha, damping)) in
            draws.iter().zip(DEMO_SETTINGS.iter())
        {
            assert_eq!(parameters.concentration().unwrap(), alpha);
            assert_eq!(parameters.damping().unwrap(), damping);
            assert_eq!(allocation.n_items(), DEMO_N_ITEMS);
            assert!(allocation.n_features() <= parameters.truncation_level());
            assert!(allocation.is_left_ordered());
            let rendered = allocation.to_string();
            assert_eq!(rendered.lines().count(), DEMO_N_ITEMS);
            assert!(rendered
                .lines()
                .all(|line| line.chars().count() == allocation.n_features()));
        }
    }
}
