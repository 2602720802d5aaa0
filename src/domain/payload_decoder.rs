use crate::domain::{decode_uplink, Result};
use tracing::{debug, instrument};

/// Decoder seam between the frame codec and whatever invokes it.
///
/// Implementations should:
/// - Interpret the raw uplink bytes
/// - Return the decoded reading as a JSON value on success
/// - Return a `PayloadError` on malformed input
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
pub trait PayloadDecoder: Send + Sync {
    /// Decode binary payload to JSON value
    fn decode(&self, bytes: &[u8]) -> Result<serde_json::Value>;
}

/// [`PayloadDecoder`] for the geophone node's frame layouts.
pub struct GeophoneDecoder;

impl GeophoneDecoder {
    pub fn new() -> Self {
        Self
    }
}

impl Default for GeophoneDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl PayloadDecoder for GeophoneDecoder {
    #[instrument(name = "uplink_decode", skip(self, bytes), fields(payload_size = bytes.len()))]
    fn decode(&self, bytes: &[u8]) -> Result<serde_json::Value> {
        let decoded = decode_uplink(bytes)?;
        debug!("decoded uplink payload");
        Ok(serde_json::to_value(decoded)?)
    }
}
