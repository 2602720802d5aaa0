//! Wire layouts and codec for the geophone node's uplink frames.
//!
//! Frame selection is driven entirely by payload length: a payload of exactly
//! 14 bytes is a telemetry frame, anything else is a velocity frame. The node
//! never interleaves the two in a single transmission.
//!
//! # Telemetry frame (14 bytes)
//!
//! | Offset | Size | Field | Description |
//! |--------|------|-------|-------------|
//! | 0 | 8 | `timestamp` | RTC time as u64 seconds since the Unix epoch, big-endian. |
//! | 8 | 2 | `battery` | Battery level as i16, big-endian. |
//! | 10 | 2 | `temperature` | Temperature as i16, big-endian. |
//! | 12 | 2 | `humidity` | Relative humidity as i16, big-endian. |
//!
//! # Velocity frame (any other length)
//!
//! Consecutive big-endian i16 geophone samples, 2 bytes each, no header. The
//! node chunks its sample buffer to whatever the current data rate allows, so
//! frame length varies; it is always a whole number of samples.

use crate::domain::{
    DecodedUplink, PayloadError, Result, TelemetryReading, UplinkData, VelocityReading,
};
use chrono::DateTime;

/// Exact length of a telemetry frame in bytes.
pub const TELEMETRY_FRAME_LEN: usize = 14;

/// Length of the big-endian timestamp at the head of a telemetry frame.
pub const TIMESTAMP_LEN: usize = 8;

/// Size of one velocity sample on the wire.
pub const SAMPLE_LEN: usize = 2;

fn read_i16_be(data: &[u8]) -> i16 {
    i16::from_be_bytes([data[0], data[1]])
}

fn read_u64_be(data: &[u8]) -> u64 {
    u64::from_be_bytes([
        data[0], data[1], data[2], data[3], data[4], data[5], data[6], data[7],
    ])
}

/// Decode one uplink payload, selecting the layout by length.
///
/// Payloads of exactly [`TELEMETRY_FRAME_LEN`] bytes decode as telemetry;
/// every other length (including zero) decodes as velocity samples.
pub fn decode_uplink(bytes: &[u8]) -> Result<DecodedUplink> {
    let data = if bytes.len() == TELEMETRY_FRAME_LEN {
        UplinkData::Telemetry(decode_telemetry(bytes)?)
    } else {
        UplinkData::Velocity(decode_velocity(bytes)?)
    };
    Ok(DecodedUplink { data })
}

/// Decode a 14-byte telemetry frame.
///
/// The timestamp is reconstructed as a full 64-bit big-endian second count.
/// Counts that fall outside the representable date range are rejected with
/// [`PayloadError::TimestampOutOfRange`].
pub fn decode_telemetry(bytes: &[u8]) -> Result<TelemetryReading> {
    if bytes.len() != TELEMETRY_FRAME_LEN {
        return Err(PayloadError::InvalidTelemetryLength(bytes.len()));
    }

    let seconds = read_u64_be(&bytes[..TIMESTAMP_LEN]);
    let timestamp = i64::try_from(seconds)
        .ok()
        .and_then(|secs| DateTime::from_timestamp(secs, 0))
        .ok_or(PayloadError::TimestampOutOfRange(seconds))?;

    Ok(TelemetryReading {
        timestamp,
        battery: read_i16_be(&bytes[8..10]),
        temperature: read_i16_be(&bytes[10..12]),
        humidity: read_i16_be(&bytes[12..14]),
    })
}

/// Decode a velocity frame into its sample sequence.
///
/// `n` bytes yield exactly `n / 2` samples in transmit order; an empty
/// payload yields an empty reading. The node only ever transmits whole
/// samples, so an odd length is treated as corruption and rejected.
pub fn decode_velocity(bytes: &[u8]) -> Result<VelocityReading> {
    if bytes.len() % SAMPLE_LEN != 0 {
        return Err(PayloadError::OddVelocityLength(bytes.len()));
    }

    let values = bytes.chunks_exact(SAMPLE_LEN).map(read_i16_be).collect();
    Ok(VelocityReading { values })
}

/// Encode a telemetry reading into the 14-byte frame layout.
///
/// Mirrors the packing done on the node. Timestamps are encoded at second
/// resolution; readings that predate the Unix epoch cannot be represented as
/// an unsigned second count and are rejected.
pub fn encode_telemetry(reading: &TelemetryReading) -> Result<[u8; TELEMETRY_FRAME_LEN]> {
    let seconds =
        u64::try_from(reading.timestamp.timestamp()).map_err(|_| PayloadError::PreEpochTimestamp)?;

    let mut frame = [0u8; TELEMETRY_FRAME_LEN];
    frame[..TIMESTAMP_LEN].copy_from_slice(&seconds.to_be_bytes());
    frame[8..10].copy_from_slice(&reading.battery.to_be_bytes());
    frame[10..12].copy_from_slice(&reading.temperature.to_be_bytes());
    frame[12..14].copy_from_slice(&reading.humidity.to_be_bytes());
    Ok(frame)
}

/// Encode velocity samples into the wire layout, 2 bytes per sample.
pub fn encode_velocity(samples: &[i16]) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(samples.len() * SAMPLE_LEN);
    for sample in samples {
        bytes.extend_from_slice(&sample.to_be_bytes());
    }
    bytes
}
