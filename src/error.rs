use thiserror::Error;

/// Fatal configuration problems, surfaced when the environment is built.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("price series has {len} rows, need at least lookback_range + 2 = {needed}")]
    SeriesTooShort { len: usize, needed: usize },

    #[error("unknown asset class: {0:?}")]
    UnknownAssetClass(String),

    #[error("price series rows are not sorted by date ascending")]
    UnsortedSeries,

    #[error("invalid config parameter: {0}")]
    InvalidParameter(&'static str),
}
