use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProfileError {
    #[error("missing required parameter '{0}'")]
    Builder(&'static str),

    #[error("a profile requires at least 2 samples, got {0}")]
    TooFewSamples(usize),

    #[error("sample distances must be strictly increasing, violated at index {0}")]
    DistanceOrder(usize),

    #[error("path length must be positive, got {0} m")]
    PathLength(f64),

    #[error("frequency must be positive, got {0} MHz")]
    Frequency(f64),

    #[error("k-factor must be positive, got {0}")]
    KFactor(f64),
}
