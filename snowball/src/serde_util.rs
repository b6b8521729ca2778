/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

/// `Option<Instant>` as epoch seconds
///
/// Whole seconds serialize as an integer. Timestamps with a sub-second part serialize as a
/// fractional number.
pub mod optional_epoch_seconds {
    use serde::{Deserialize, Deserializer, Serializer};
    use smithy_types::Instant;

    pub fn serialize<S>(instant: &Option<Instant>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match instant {
            Some(instant) if instant.has_nanos() => {
                serializer.serialize_f64(instant.epoch_fractional_seconds())
            }
            Some(instant) => serializer.serialize_i64(instant.epoch_seconds()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Instant>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let epoch_seconds = Option::<f64>::deserialize(deserializer)?;
        Ok(epoch_seconds.map(Instant::from_f64))
    }
}

#[cfg(test)]
mod test {
    use serde::{Deserialize, Serialize};
    use smithy_types::Instant;

    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct Timestamped {
        #[serde(with = "super::optional_epoch_seconds")]
        #[serde(default)]
        #[serde(skip_serializing_if = "Option::is_none")]
        at: Option<Instant>,
    }

    #[test]
    fn whole_seconds_are_integers() {
        let value = Timestamped {
            at: Some(Instant::from_epoch_seconds(1_576_540_098)),
        };
        assert_eq!(serde_json::to_string(&value).unwrap(), r#"{"at":1576540098}"#);
    }

    #[test]
    fn fractional_seconds_survive() {
        let parsed: Timestamped = serde_json::from_str(r#"{"at":1576540098.5}"#).unwrap();
        let at = parsed.at.expect("timestamp was present");
        assert_eq!(at.epoch_seconds(), 1_576_540_098);
        assert_eq!(at.subsec_nanos(), 500_000_000);
        assert_eq!(
            serde_json::to_string(&parsed).unwrap(),
            r#"{"at":1576540098.5}"#
        );
    }

    #[test]
    fn missing_and_null_are_none() {
        let missing: Timestamped = serde_json::from_str("{}").unwrap();
        assert_eq!(missing.at, None);
        let null: Timestamped = serde_json::from_str(r#"{"at":null}"#).unwrap();
        assert_eq!(null.at, None);
        assert_eq!(serde_json::to_string(&missing).unwrap(), "{}");
    }
}
