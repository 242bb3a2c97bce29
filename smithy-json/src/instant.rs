/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! `serde(with = ...)` adapters for timestamp members.
//!
//! JSON protocols encode timestamps as (optionally fractional) epoch seconds.

pub mod epoch_seconds {
    use serde::de::{self, Visitor};
    use serde::{Deserialize, Deserializer, Serializer};
    use smithy_types::instant::Format;
    use smithy_types::Instant;
    use std::fmt;

    pub fn serialize<S: Serializer>(instant: &Instant, serializer: S) -> Result<S::Ok, S::Error> {
        if instant.has_nanos() {
            // the nearest f64 to the decimal text prints back as that text
            let value = instant
                .fmt(Format::EpochSeconds)
                .parse::<f64>()
                .map_err(<S::Error as serde::ser::Error>::custom)?;
            serializer.serialize_f64(value)
        } else {
            serializer.serialize_i64(instant.epoch_seconds())
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Instant, D::Error> {
        EpochSeconds::deserialize(deserializer).map(|wrapped| wrapped.0)
    }

    struct EpochSeconds(Instant);

    impl<'de> Deserialize<'de> for EpochSeconds {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            deserializer.deserialize_any(EpochSecondsVisitor).map(EpochSeconds)
        }
    }

    struct EpochSecondsVisitor;

    impl<'de> Visitor<'de> for EpochSecondsVisitor {
        type Value = Instant;

        fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            formatter.write_str("epoch seconds")
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<Instant, E> {
            Ok(Instant::from_epoch_seconds(v))
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<Instant, E> {
            i64::try_from(v)
                .map(Instant::from_epoch_seconds)
                .map_err(|_| E::invalid_value(de::Unexpected::Unsigned(v), &self))
        }

        // Parsing with `float_roundtrip` yields the f64 nearest the wire text, and `Display`
        // prints the shortest text that maps back to it, so the original digits are recovered.
        fn visit_f64<E: de::Error>(self, v: f64) -> Result<Instant, E> {
            self.visit_str(&v.to_string())
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<Instant, E> {
            Instant::from_str(v, Format::EpochSeconds).map_err(E::custom)
        }
    }

    pub mod option {
        use serde::{Deserialize, Deserializer, Serializer};
        use smithy_types::Instant;

        pub fn serialize<S: Serializer>(
            instant: &Option<Instant>,
            serializer: S,
        ) -> Result<S::Ok, S::Error> {
            match instant {
                Some(instant) => super::serialize(instant, serializer),
                None => serializer.serialize_none(),
            }
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(
            deserializer: D,
        ) -> Result<Option<Instant>, D::Error> {
            Ok(Option::<super::EpochSeconds>::deserialize(deserializer)?.map(|wrapped| wrapped.0))
        }
    }
}

#[cfg(test)]
mod test {
    use proptest::prelude::*;
    use serde::{Deserialize, Serialize};
    use smithy_types::Instant;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Build {
        #[serde(with = "super::epoch_seconds")]
        start_time: Instant,
        #[serde(
            default,
            with = "super::epoch_seconds::option",
            skip_serializing_if = "Option::is_none"
        )]
        end_time: Option<Instant>,
    }

    #[test]
    fn whole_seconds_are_integers() {
        let build = Build {
            start_time: Instant::from_epoch_seconds(1576540098),
            end_time: None,
        };
        assert_eq!(serde_json::to_string(&build).unwrap(), r#"{"start_time":1576540098}"#);
    }

    #[test]
    fn fractional_seconds() {
        let build: Build =
            serde_json::from_str(r#"{"start_time": 1576540098.5, "end_time": 1576540099}"#)
                .unwrap();
        assert_eq!(
            build.start_time,
            Instant::from_secs_and_nanos(1576540098, 500_000_000)
        );
        assert_eq!(build.end_time, Some(Instant::from_epoch_seconds(1576540099)));
        assert_eq!(
            serde_json::to_string(&build).unwrap(),
            r#"{"start_time":1576540098.5,"end_time":1576540099}"#
        );
    }

    #[test]
    fn decimal_fractions_are_exact() {
        let build: Build = serde_json::from_str(
            r#"{"start_time": 1614952162.123, "end_time": 1614952162.987654321}"#,
        )
        .unwrap();
        assert_eq!(
            build.start_time,
            Instant::from_secs_and_nanos(1614952162, 123_000_000)
        );
        assert_eq!(
            serde_json::to_string(&build.start_time_only()).unwrap(),
            r#"{"start_time":1614952162.123}"#
        );
        // beyond f64 precision the nearest representable value is kept
        let end = build.end_time.unwrap();
        assert_eq!(end.epoch_seconds(), 1614952162);
        assert!((end.epoch_subsecond_nanos() as i64 - 987_654_321).abs() < 1_000);
    }

    #[test]
    fn string_and_invalid_values() {
        let build: Build = serde_json::from_str(r#"{"start_time": "1614952162.5"}"#).unwrap();
        assert_eq!(
            build.start_time,
            Instant::from_secs_and_nanos(1614952162, 500_000_000)
        );
        assert!(serde_json::from_str::<Build>(r#"{"start_time": "soon"}"#).is_err());
        assert!(serde_json::from_str::<Build>(r#"{"start_time": true}"#).is_err());
    }

    #[test]
    fn null_end_time() {
        let build: Build = serde_json::from_str(r#"{"start_time": 0, "end_time": null}"#).unwrap();
        assert_eq!(build.end_time, None);
    }

    impl Build {
        fn start_time_only(&self) -> Build {
            Build {
                start_time: self.start_time,
                end_time: None,
            }
        }
    }

    proptest! {
        #[test]
        fn whole_seconds_survive_json(secs in -1_000_000_000_000i64..1_000_000_000_000i64) {
            let build = Build { start_time: Instant::from_epoch_seconds(secs), end_time: None };
            let json = serde_json::to_string(&build).unwrap();
            let parsed: Build = serde_json::from_str(&json).unwrap();
            prop_assert_eq!(parsed, build);
        }

        #[test]
        fn millisecond_fractions_survive_json(secs in 0i64..4_102_444_800i64, millis in 1u32..1000) {
            let build = Build {
                start_time: Instant::from_secs_and_nanos(secs, millis * 1_000_000),
                end_time: None,
            };
            let json = serde_json::to_string(&build).unwrap();
            let parsed: Build = serde_json::from_str(&json).unwrap();
            prop_assert_eq!(parsed, build);
        }
    }
}
