//! Error types.
//!
//! Only construction-time inputs (datasets, dataset files, configuration) can
//! fail. Interaction never does: bad pick indices are ignored and cursor
//! positions are clamped.

/// Upstream data that violates the dataset preconditions.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum DatasetError {
    #[error("dataset has no channels")]
    NoChannels,
    #[error("duplicate channel name `{0}`")]
    DuplicateChannel(String),
    #[error("time axis is empty")]
    EmptyTimeAxis,
    #[error("time axis is not strictly increasing at index {0}")]
    TimeAxisNotIncreasing(usize),
    #[error("amplitude shape {found:?} does not match expected {expected:?}")]
    ShapeMismatch {
        expected: Vec<usize>,
        found: Vec<usize>,
    },
    #[error("per-epoch amplitudes contain no epochs")]
    NoEpochs,
    #[error("amplitude rows are ragged: {0}")]
    Ragged(String),
}

/// Reading or writing a dataset file.
#[derive(thiserror::Error, Debug)]
pub enum DatasetFileError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("file declares neither `averaged` nor `epochs` amplitudes")]
    MissingAmplitudes,
    #[error("file declares both `averaged` and `epochs` amplitudes")]
    AmbiguousAmplitudes,
    #[error("invalid dataset: {0}")]
    Invalid(#[from] DatasetError),
}

/// Viewer configuration problems.
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("yaml error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("unknown color `{0}`")]
    UnknownColor(String),
    #[error("palette is empty")]
    EmptyPalette,
    #[error("palette entry {0} collides with the unselected marker color")]
    PaletteUsesSentinel(usize),
    #[error("unknown color scheme `{0}`")]
    UnknownScheme(String),
}
