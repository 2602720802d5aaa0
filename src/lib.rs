//! Decoder for the uplink payloads of a LoRaWAN geophone node.
//!
//! The node transmits two frame kinds on its application port:
//!
//! - **Telemetry frame** (exactly 14 bytes): RTC timestamp, battery,
//!   temperature and humidity.
//! - **Velocity frame** (any other length): consecutive big-endian 16-bit
//!   geophone samples.
//!
//! Decoding is a pure function over the payload bytes; frame selection is
//! driven entirely by payload length. See [`domain::uplink`] for the exact
//! wire layouts.
//!
//! # Example
//! ```
//! use geophone_uplink::{decode_uplink, UplinkData};
//!
//! // Telemetry frame: epoch second 1, battery 10, temperature -16, humidity 50
//! let frame = [0, 0, 0, 0, 0, 0, 0, 1, 0, 10, 0xFF, 0xF0, 0x00, 0x32];
//! let decoded = decode_uplink(&frame).unwrap();
//!
//! match decoded.data {
//!     UplinkData::Telemetry(t) => {
//!         assert_eq!(t.battery, 10);
//!         assert_eq!(t.temperature, -16);
//!         assert_eq!(t.humidity, 50);
//!     }
//!     UplinkData::Velocity(_) => unreachable!("14 bytes is a telemetry frame"),
//! }
//! ```

pub mod domain;

pub use domain::*;
