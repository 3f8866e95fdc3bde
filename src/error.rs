use thiserror::Error;

#[derive(Debug, Error)]
pub enum FuzzyError {
    #[error("membership function has {in_len} input values but {mf_len} degrees")]
    LengthMismatch { in_len: usize, mf_len: usize },

    #[error("membership function needs at least one point")]
    EmptyMembership,

    #[error("points have to be given in increasing order, got {0:?}")]
    PointsNotIncreasing(Vec<f64>),

    #[error("label `{label}` is defined twice on variable `{variable}`")]
    DuplicateLabel { variable: String, label: String },

    #[error("variable `{variable}` has no label `{label}`")]
    UnknownLabel { variable: String, label: String },

    #[error("cannot activate a rule without any fuzzified input")]
    EmptyActivation,

    #[error("invalid operator configuration: {0}")]
    Config(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, FuzzyError>;
