use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum IbpError {
    #[error("Number of items must be greater than zero.")]
    NoItems,
    #[error("Concentration must be finite and greater than zero, but is {0}.")]
    Concentration(f64),
    #[error("Damping must be in (0,1], but is {0}.")]
    Damping(f64),
    #[error("Expected number of features {0} exceeds the supported truncation level.")]
    TooManyFeatures(f64),
    #[error("Feature {feature} has {found} entries, but {expected} were expected.")]
    Shape {
        feature: usize,
        expected: usize,
        found: usize,
    },
    #[error("Beta distribution: {0}")]
    Beta(#[from] rand_distr::BetaError),
}
