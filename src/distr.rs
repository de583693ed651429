use crate::error::IbpError;
use crate::feat::FeatureAllocation;
use rand::Rng;
use rand_distr::{Beta, Distribution};

//

/// Source of the two kinds of draws the stick-breaking construction needs.
///
/// Every `rand::Rng` provides this through the blanket implementation below;
/// tests substitute a scripted source to replay exact draws.
pub trait Randomness {
    /// A draw from the uniform distribution on [0,1).
    fn uniform(&mut self) -> f64;

    /// A draw from the Beta(a, b) distribution.
    fn beta(&mut self, a: f64, b: f64) -> Result<f64, IbpError>;

    /// `n` independent draws from the Beta(a, b) distribution, in order.
    fn betas(&mut self, a: f64, b: f64, n: usize) -> Result<Vec<f64>, IbpError> {
        (0..n).map(|_| self.beta(a, b)).collect()
    }
}

impl<R: Rng + ?Sized> Randomness for R {
    fn uniform(&mut self) -> f64 {
        self.random::<f64>()
    }

    fn beta(&mut self, a: f64, b: f64) -> Result<f64, IbpError> {
        let distr = Beta::new(a, b)?;
        Ok(distr.sample(self))
    }

    fn betas(&mut self, a: f64, b: f64, n: usize) -> Result<Vec<f64>, IbpError> {
        let distr = Beta::new(a, b)?;
        Ok((0..n).map(|_| distr.sample(self)).collect())
    }
}

//

pub trait FeatureAllocationSampler {
    fn sample<R: Randomness + ?Sized>(&self, rng: &mut R) -> Result<FeatureAllocation, IbpError>;
}
