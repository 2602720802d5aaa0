use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Readings carried by the 14-byte telemetry frame.
///
/// Serialized field names follow the network server's decoder contract
/// (`Timestamp` as an ISO-8601 UTC string with millisecond precision, the
/// rest as plain signed 16-bit integers).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TelemetryReading {
    #[serde(rename = "Timestamp", with = "iso_millis")]
    pub timestamp: DateTime<Utc>,
    #[serde(rename = "Battery")]
    pub battery: i16,
    #[serde(rename = "Temperature")]
    pub temperature: i16,
    #[serde(rename = "Humidity")]
    pub humidity: i16,
}

/// Geophone samples carried by a velocity frame, in transmit order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VelocityReading {
    #[serde(rename = "Velocity")]
    pub values: Vec<i16>,
}

/// One decoded frame, tagged by which layout produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UplinkData {
    Telemetry(TelemetryReading),
    Velocity(VelocityReading),
}

/// Decoder result as handed to the network server: a single `data` field
/// wrapping the frame contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodedUplink {
    pub data: UplinkData,
}

/// ISO-8601 UTC with millisecond precision, e.g. `1970-01-01T00:00:01.000Z`.
mod iso_millis {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(ts: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&ts.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&s)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn telemetry_json_matches_host_contract() {
        let reading = DecodedUplink {
            data: UplinkData::Telemetry(TelemetryReading {
                timestamp: DateTime::from_timestamp(1, 0).unwrap(),
                battery: 10,
                temperature: -16,
                humidity: 50,
            }),
        };

        assert_eq!(
            serde_json::to_value(&reading).unwrap(),
            json!({
                "data": {
                    "Timestamp": "1970-01-01T00:00:01.000Z",
                    "Battery": 10,
                    "Temperature": -16,
                    "Humidity": 50,
                }
            })
        );
    }

    #[test]
    fn velocity_json_matches_host_contract() {
        let reading = DecodedUplink {
            data: UplinkData::Velocity(VelocityReading {
                values: vec![5, -5],
            }),
        };

        assert_eq!(
            serde_json::to_value(&reading).unwrap(),
            json!({ "data": { "Velocity": [5, -5] } })
        );
    }

    #[test]
    fn telemetry_json_round_trips() {
        let original = DecodedUplink {
            data: UplinkData::Telemetry(TelemetryReading {
                timestamp: DateTime::from_timestamp(1_700_000_000, 0).unwrap(),
                battery: -32768,
                temperature: 32767,
                humidity: 0,
            }),
        };

        let encoded = serde_json::to_string(&original).unwrap();
        let decoded: DecodedUplink = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, original);
    }

    #[test]
    fn velocity_json_round_trips() {
        let original = DecodedUplink {
            data: UplinkData::Velocity(VelocityReading {
                values: vec![0, 1, -1, 32767, -32768],
            }),
        };

        let encoded = serde_json::to_string(&original).unwrap();
        let decoded: DecodedUplink = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, original);
    }
}
