/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use chrono::{DateTime, SecondsFormat, Utc};
use std::error::Error;
use std::fmt;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// A point in time with nanosecond precision, as used by Smithy `timestamp` shapes
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
pub struct Instant {
    seconds: i64,
    subsecond_nanos: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// RFC-3339, eg. `2019-12-16T23:48:18Z`
    DateTime,
    /// Seconds since the Unix epoch, optionally fractional, eg. `1576540098.52`
    EpochSeconds,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstantParseError {
    input: String,
    format: Format,
}

impl fmt::Display for InstantParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "`{}` is not a valid {:?} timestamp", self.input, self.format)
    }
}

impl Error for InstantParseError {}

impl Instant {
    pub fn from_epoch_seconds(epoch_seconds: i64) -> Self {
        Instant {
            seconds: epoch_seconds,
            subsecond_nanos: 0,
        }
    }

    pub fn from_secs_and_nanos(seconds: i64, subsecond_nanos: u32) -> Self {
        Instant {
            seconds,
            subsecond_nanos,
        }
    }

    /// Convert fractional epoch seconds, rounding to the nearest nanosecond
    ///
    /// `f64` cannot hold most decimal fractions exactly. Prefer [`Instant::from_str`] with
    /// [`Format::EpochSeconds`] when the textual form is available.
    pub fn from_f64(epoch_seconds: f64) -> Self {
        let mut seconds = epoch_seconds.floor() as i64;
        let mut nanos = ((epoch_seconds - epoch_seconds.floor()) * 1_000_000_000_f64).round() as u32;
        if nanos >= 1_000_000_000 {
            seconds += 1;
            nanos -= 1_000_000_000;
        }
        Instant::from_secs_and_nanos(seconds, nanos)
    }

    pub fn from_system_time(system_time: SystemTime) -> Self {
        match system_time.duration_since(UNIX_EPOCH) {
            Ok(duration) => Instant {
                seconds: duration.as_secs() as i64,
                subsecond_nanos: duration.subsec_nanos(),
            },
            Err(before_epoch) => {
                let duration = before_epoch.duration();
                let mut seconds = -(duration.as_secs() as i64);
                let mut nanos = duration.subsec_nanos();
                if nanos != 0 {
                    seconds -= 1;
                    nanos = 1_000_000_000 - nanos;
                }
                Instant::from_secs_and_nanos(seconds, nanos)
            }
        }
    }

    pub fn from_str(s: &str, format: Format) -> Result<Self, InstantParseError> {
        let err = || InstantParseError {
            input: s.to_string(),
            format,
        };
        match format {
            Format::DateTime => {
                let parsed = DateTime::parse_from_rfc3339(s).map_err(|_| err())?;
                Ok(Instant::from_secs_and_nanos(
                    parsed.timestamp(),
                    parsed.timestamp_subsec_nanos(),
                ))
            }
            Format::EpochSeconds => parse_epoch_seconds(s).ok_or_else(err),
        }
    }

    pub fn epoch_seconds(&self) -> i64 {
        self.seconds
    }

    pub fn epoch_subsecond_nanos(&self) -> u32 {
        self.subsecond_nanos
    }

    pub fn epoch_fractional_seconds(&self) -> f64 {
        self.seconds as f64 + self.subsecond_nanos as f64 / 1_000_000_000_f64
    }

    pub fn has_nanos(&self) -> bool {
        self.subsecond_nanos != 0
    }

    pub fn to_system_time(&self) -> Option<SystemTime> {
        if self.seconds >= 0 {
            UNIX_EPOCH.checked_add(Duration::new(self.seconds as u64, self.subsecond_nanos))
        } else {
            UNIX_EPOCH
                .checked_sub(Duration::from_secs(self.seconds.unsigned_abs()))?
                .checked_add(Duration::from_nanos(self.subsecond_nanos as u64))
        }
    }

    pub fn fmt(&self, format: Format) -> String {
        match format {
            Format::DateTime => match DateTime::<Utc>::from_timestamp(self.seconds, self.subsecond_nanos) {
                Some(date_time) => date_time.to_rfc3339_opts(SecondsFormat::AutoSi, true),
                None => self.fmt(Format::EpochSeconds),
            },
            Format::EpochSeconds => {
                if self.subsecond_nanos == 0 {
                    format!("{}", self.seconds)
                } else if self.seconds < 0 {
                    // nanos count forward from `seconds`, the text counts away from zero
                    let fraction = format!("{:0>9}", 1_000_000_000 - self.subsecond_nanos);
                    format!(
                        "-{}.{}",
                        -(self.seconds + 1),
                        fraction.trim_end_matches('0')
                    )
                } else {
                    let fraction = format!("{:0>9}", self.subsecond_nanos);
                    format!("{}.{}", self.seconds, fraction.trim_end_matches('0'))
                }
            }
        }
    }
}

/// Parse `[-]digits[.digits]` without going through `f64`
///
/// Fraction digits beyond nanosecond precision are truncated. Exponent notation is accepted but
/// is converted through `f64`.
fn parse_epoch_seconds(s: &str) -> Option<Instant> {
    if s.contains(|c: char| c == 'e' || c == 'E') {
        let value: f64 = s.parse().ok()?;
        return if value.is_finite() {
            Some(Instant::from_f64(value))
        } else {
            None
        };
    }
    let (negative, unsigned) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s),
    };
    let (whole, fraction) = match unsigned.split_once('.') {
        Some((whole, fraction)) => (whole, fraction),
        None => (unsigned, ""),
    };
    let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
    if whole.is_empty() || !all_digits(whole) || !all_digits(fraction) {
        return None;
    }
    let whole: i64 = whole.parse().ok()?;
    let mut nanos = 0_u32;
    for position in 0..9 {
        let digit = fraction.as_bytes().get(position).map_or(0, |b| b - b'0');
        nanos = nanos * 10 + u32::from(digit);
    }
    if !negative {
        Some(Instant::from_secs_and_nanos(whole, nanos))
    } else if nanos == 0 {
        Some(Instant::from_secs_and_nanos(-whole, 0))
    } else {
        Some(Instant::from_secs_and_nanos(-whole - 1, 1_000_000_000 - nanos))
    }
}

impl From<SystemTime> for Instant {
    fn from(time: SystemTime) -> Self {
        Instant::from_system_time(time)
    }
}

#[cfg(test)]
mod test {
    use super::{Format, Instant};
    use proptest::prelude::*;
    use std::time::{Duration, UNIX_EPOCH};

    #[test]
    fn format_instant() {
        let instant = Instant::from_epoch_seconds(1576540098);
        assert_eq!(instant.fmt(Format::DateTime), "2019-12-16T23:48:18Z");
        assert_eq!(instant.fmt(Format::EpochSeconds), "1576540098");

        let instant = Instant::from_secs_and_nanos(1576540098, 520_000_000);
        assert_eq!(instant.fmt(Format::DateTime), "2019-12-16T23:48:18.520Z");
        assert_eq!(instant.fmt(Format::EpochSeconds), "1576540098.52");
    }

    #[test]
    fn parse_date_time() {
        let parsed = Instant::from_str("2019-12-16T23:48:18.52Z", Format::DateTime).unwrap();
        assert_eq!(parsed.epoch_seconds(), 1576540098);
        assert_eq!(parsed.epoch_subsecond_nanos(), 520_000_000);

        let parsed = Instant::from_str("2019-12-16T23:48:18+01:00", Format::DateTime).unwrap();
        assert_eq!(parsed.epoch_seconds(), 1576540098 - 3600);

        assert!(Instant::from_str("not a date", Format::DateTime).is_err());
    }

    #[test]
    fn parse_epoch_seconds() {
        let parsed = Instant::from_str("1576540098.52", Format::EpochSeconds).unwrap();
        assert_eq!(parsed.epoch_seconds(), 1576540098);
        assert_eq!(parsed.epoch_subsecond_nanos(), 520_000_000);
        assert!(Instant::from_str("NaN", Format::EpochSeconds).is_err());
    }

    #[test]
    fn epoch_seconds_keep_decimal_fractions() {
        let parsed = Instant::from_str("1614952162.123", Format::EpochSeconds).unwrap();
        assert_eq!(parsed, Instant::from_secs_and_nanos(1614952162, 123_000_000));

        let parsed = Instant::from_str("1614952162.000000001", Format::EpochSeconds).unwrap();
        assert_eq!(parsed.epoch_subsecond_nanos(), 1);

        let parsed = Instant::from_str("1614952162.1234567899", Format::EpochSeconds).unwrap();
        assert_eq!(parsed.epoch_subsecond_nanos(), 123_456_789);

        let parsed = Instant::from_str("-1.25", Format::EpochSeconds).unwrap();
        assert_eq!(parsed, Instant::from_secs_and_nanos(-2, 750_000_000));
        assert_eq!(parsed.fmt(Format::EpochSeconds), "-1.25");

        let parsed = Instant::from_str("1.5E9", Format::EpochSeconds).unwrap();
        assert_eq!(parsed, Instant::from_epoch_seconds(1_500_000_000));

        for bad in ["", ".5", "1.2.3", "12a", "--1", "inf"] {
            assert!(Instant::from_str(bad, Format::EpochSeconds).is_err(), "{}", bad);
        }
    }

    #[test]
    fn from_f64_carries_rounded_nanos() {
        assert_eq!(
            Instant::from_f64(1.9999999999),
            Instant::from_epoch_seconds(2)
        );
        assert_eq!(
            Instant::from_f64(-0.5),
            Instant::from_secs_and_nanos(-1, 500_000_000)
        );
    }

    #[test]
    fn system_time_conversion() {
        let time = UNIX_EPOCH + Duration::new(1611160427, 5);
        let instant = Instant::from(time);
        assert_eq!(instant.epoch_seconds(), 1611160427);
        assert_eq!(instant.to_system_time(), Some(time));
    }

    proptest! {
        #[test]
        fn epoch_seconds_roundtrip(secs in 0i64..253402300799) {
            let instant = Instant::from_epoch_seconds(secs);
            let formatted = instant.fmt(Format::DateTime);
            prop_assert_eq!(Instant::from_str(&formatted, Format::DateTime).unwrap(), instant);
        }

        #[test]
        fn fractional_epoch_seconds_roundtrip(secs in -1_000_000_000_000i64..1_000_000_000_000i64, nanos in 0u32..1_000_000_000) {
            let instant = Instant::from_secs_and_nanos(secs, nanos);
            let formatted = instant.fmt(Format::EpochSeconds);
            prop_assert_eq!(Instant::from_str(&formatted, Format::EpochSeconds).unwrap(), instant);
        }
    }
}
