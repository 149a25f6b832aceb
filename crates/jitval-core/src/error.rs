use thiserror::Error;

/// Errors from packing / unpacking a `ParameterEnvelope`.
#[derive(Debug, Error)]
pub enum EnvelopeError {
    #[error("missing field '{0}'")]
    MissingField(String),

    #[error("field '{field}' is not a valid value: {source}")]
    TypeMismatch {
        field: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("field '{field}' could not be encoded: {source}")]
    Encode {
        field: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("envelope for '{0}' holds no value")]
    Empty(&'static str),
}

/// Errors reported by a benchmark engine.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("benchmark engine failed: {0}")]
    Failed(String),
}

/// Errors while loading host configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// A scenario row could not be verified at all.
///
/// A row whose log does not contain the expected text is not an error; it is a
/// failed report.
#[derive(Debug, Error)]
pub enum VerifyError {
    #[error("malformed scenario row: {0}")]
    Envelope(#[from] EnvelopeError),

    #[error(transparent)]
    Engine(#[from] EngineError),
}
