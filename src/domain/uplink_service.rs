use crate::domain::{PayloadDecoder, Result};
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tracing::{debug, error, instrument};

/// Uplink as handed over by the hosting network server, payload still binary.
#[derive(Debug, Clone, PartialEq)]
pub struct RawUplink {
    pub end_device_id: String,
    pub received_at: DateTime<Utc>,
    pub payload: Vec<u8>,
}

/// Uplink after decoding, ready for the host to consume.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessedUplink {
    pub end_device_id: String,
    pub received_at: DateTime<Utc>,
    pub data: serde_json::Value,
}

/// Adapter between the host's uplink hand-off and the frame codec.
///
/// Attaches receive metadata to the decoded reading; holds no state beyond
/// the injected decoder, so it is safe to share across callers.
pub struct UplinkService {
    decoder: Arc<dyn PayloadDecoder>,
}

impl UplinkService {
    pub fn new(decoder: Arc<dyn PayloadDecoder>) -> Self {
        Self { decoder }
    }

    /// Decode a raw uplink and carry its metadata through unchanged.
    #[instrument(skip(self, raw), fields(device_id = %raw.end_device_id, payload_size = raw.payload.len()))]
    pub fn process(&self, raw: RawUplink) -> Result<ProcessedUplink> {
        debug!("processing raw uplink");

        let data = self.decoder.decode(&raw.payload).map_err(|e| {
            error!(error = %e, "uplink decode failed");
            e
        })?;

        Ok(ProcessedUplink {
            end_device_id: raw.end_device_id,
            received_at: raw.received_at,
            data,
        })
    }
}
