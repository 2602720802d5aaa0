use thiserror::Error;

#[derive(Debug, Error)]
pub enum PayloadError {
    #[error("telemetry frame is exactly 14 bytes, got {0}")]
    InvalidTelemetryLength(usize),

    #[error("velocity payload length {0} is odd, samples are 2 bytes each")]
    OddVelocityLength(usize),

    #[error("timestamp {0} is outside the representable date range")]
    TimestampOutOfRange(u64),

    #[error("timestamp predates the Unix epoch and cannot be encoded")]
    PreEpochTimestamp,

    #[error("json serialization error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("invalid STA/LTA configuration: {0}")]
    InvalidStaLtaConfig(String),

    #[error("insufficient samples: expected at least {expected}, got {actual}")]
    InsufficientSamples { expected: usize, actual: usize },

    #[error("long-term average is zero, trace is silent")]
    SilentTrace,
}

pub type Result<T> = std::result::Result<T, PayloadError>;
