/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use chrono::{DateTime, SecondsFormat, TimeZone, Utc};
use std::error::Error;
use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

const NANOS_PER_SECOND: u32 = 1_000_000_000;

/// A point in time, stored as seconds since the Unix epoch plus a sub-second nanosecond offset.
///
/// `subsecond_nanos` is always positive: `-1.5` seconds is stored as `-2` seconds and `500_000_000`
/// nanoseconds.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy)]
pub struct Instant {
    seconds: i64,
    subsecond_nanos: u32,
}

#[derive(Debug, PartialEq, Eq)]
pub struct DateParseError {
    input: String,
    format: Format,
}

impl fmt::Display for DateParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "`{}` is not a valid {:?} timestamp", self.input, self.format)
    }
}

impl Error for DateParseError {}

impl Instant {
    pub fn from_epoch_seconds(epoch_seconds: i64) -> Self {
        Instant {
            seconds: epoch_seconds,
            subsecond_nanos: 0,
        }
    }

    pub fn from_fractional_seconds(epoch_seconds: i64, fraction: f64) -> Self {
        Instant {
            seconds: epoch_seconds,
            subsecond_nanos: ((fraction * NANOS_PER_SECOND as f64).round() as u32)
                .min(NANOS_PER_SECOND - 1),
        }
    }

    pub fn from_secs_and_nanos(seconds: i64, subsecond_nanos: u32) -> Self {
        Instant {
            seconds,
            subsecond_nanos,
        }
    }

    /// Reads the shortest decimal form of `epoch_seconds`, so `1576540098.52` keeps exactly
    /// `520_000_000` nanoseconds instead of the binary remainder of the float.
    pub fn from_f64(epoch_seconds: f64) -> Self {
        if let Some(instant) = parse_epoch_seconds(&epoch_seconds.to_string()) {
            return instant;
        }
        // more than nine fractional digits: round to the nearest nanosecond
        let seconds = epoch_seconds.floor();
        let nanos = ((epoch_seconds - seconds) * NANOS_PER_SECOND as f64).round();
        if nanos >= NANOS_PER_SECOND as f64 {
            Instant::from_epoch_seconds(seconds as i64 + 1)
        } else {
            Instant::from_secs_and_nanos(seconds as i64, nanos as u32)
        }
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
                if nanos > 0 {
                    seconds -= 1;
                    nanos = NANOS_PER_SECOND - nanos;
                }
                Instant::from_secs_and_nanos(seconds, nanos)
            }
        }
    }

    pub fn from_str(s: &str, format: Format) -> Result<Self, DateParseError> {
        let err = || DateParseError {
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

    fn to_chrono(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_opt(self.seconds, self.subsecond_nanos).single()
    }

    pub fn has_nanos(&self) -> bool {
        self.subsecond_nanos != 0
    }

    /// The float nearest to the exact decimal timestamp
    ///
    /// [`from_f64`](Instant::from_f64) reads the value back unchanged as long as the decimal has no
    /// more significant digits than an `f64` holds (about 15, so millisecond precision for
    /// present-day timestamps).
    pub fn epoch_fractional_seconds(&self) -> f64 {
        self.fmt(Format::EpochSeconds)
            .parse()
            .unwrap_or_else(|_| {
                self.seconds as f64 + self.subsecond_nanos as f64 / NANOS_PER_SECOND as f64
            })
    }

    pub fn epoch_seconds(&self) -> i64 {
        self.seconds
    }

    pub fn subsec_nanos(&self) -> u32 {
        self.subsecond_nanos
    }

    pub fn fmt(&self, format: Format) -> String {
        match format {
            Format::DateTime => match self.to_chrono() {
                Some(date_time) => {
                    let rfc3339 = date_time.to_rfc3339_opts(SecondsFormat::AutoSi, true);
                    // chrono pads the fraction to 3, 6 or 9 digits
                    if self.has_nanos() {
                        let mut trimmed = rfc3339
                            .trim_end_matches('Z')
                            .trim_end_matches('0')
                            .to_owned();
                        trimmed.push('Z');
                        trimmed
                    } else {
                        rfc3339
                    }
                }
                // out of chrono's range, fall back to a representation that can be parsed back
                None => self.fmt(Format::EpochSeconds),
            },
            Format::EpochSeconds => {
                if self.subsecond_nanos == 0 {
                    format!("{}", self.seconds)
                } else if self.seconds < 0 {
                    let whole = self.seconds + 1;
                    let fraction = format!("{:0>9}", NANOS_PER_SECOND - self.subsecond_nanos);
                    format!("-{}.{}", whole.abs(), fraction.trim_end_matches('0'))
                } else {
                    let fraction = format!("{:0>9}", self.subsecond_nanos);
                    format!("{}.{}", self.seconds, fraction.trim_end_matches('0'))
                }
            }
        }
    }
}

fn parse_epoch_seconds(s: &str) -> Option<Instant> {
    let (negative, unsigned) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s),
    };
    let mut parts = unsigned.splitn(2, '.');
    let whole = parts.next()?;
    if whole.is_empty() || !whole.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let whole: i64 = whole.parse().ok()?;
    let nanos = match parts.next() {
        None => 0,
        Some(fraction) => {
            if fraction.is_empty()
                || fraction.len() > 9
                || !fraction.bytes().all(|b| b.is_ascii_digit())
            {
                return None;
            }
            format!("{:0<9}", fraction).parse::<u32>().ok()?
        }
    };
    if !negative {
        return Some(Instant::from_secs_and_nanos(whole, nanos));
    }
    if nanos == 0 {
        Some(Instant::from_epoch_seconds(-whole))
    } else {
        Some(Instant::from_secs_and_nanos(
            -whole - 1,
            NANOS_PER_SECOND - nanos,
        ))
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Format {
    DateTime,
    EpochSeconds,
}

#[cfg(test)]
mod test {
    use crate::instant::{Format, Instant};
    use proptest::prelude::*;
    use std::time::{Duration, UNIX_EPOCH};

    #[test]
    fn test_instant_fmt() {
        let instant = Instant::from_epoch_seconds(1576540098);
        assert_eq!(instant.fmt(Format::DateTime), "2019-12-16T23:48:18Z");
        assert_eq!(instant.fmt(Format::EpochSeconds), "1576540098");

        let instant = Instant::from_fractional_seconds(1576540098, 0.52);
        assert_eq!(instant.fmt(Format::DateTime), "2019-12-16T23:48:18.52Z");
        assert_eq!(instant.fmt(Format::EpochSeconds), "1576540098.52");
    }

    #[test]
    fn parse_date_time() {
        let instant = Instant::from_str("2019-12-16T23:48:18.52Z", Format::DateTime)
            .expect("valid date");
        assert_eq!(instant, Instant::from_secs_and_nanos(1576540098, 520_000_000));
        Instant::from_str("2019-12-16", Format::DateTime).expect_err("missing time");
    }

    #[test]
    fn parse_epoch_seconds() {
        assert_eq!(
            Instant::from_str("1576540098.52", Format::EpochSeconds),
            Ok(Instant::from_secs_and_nanos(1576540098, 520_000_000))
        );
        assert_eq!(
            Instant::from_str("-1.5", Format::EpochSeconds),
            Ok(Instant::from_secs_and_nanos(-2, 500_000_000))
        );
        for bad in &["", "1.", ".5", "abc", "1.1234567891", "1e5"] {
            Instant::from_str(bad, Format::EpochSeconds).expect_err(bad);
        }
    }

    #[test]
    fn floats_keep_their_decimal_fraction() {
        assert_eq!(
            Instant::from_f64(1576540098.52),
            Instant::from_secs_and_nanos(1576540098, 520_000_000)
        );
        assert_eq!(
            Instant::from_f64(1.4754226E9),
            Instant::from_epoch_seconds(1_475_422_600)
        );
        assert_eq!(
            Instant::from_f64(-1.5),
            Instant::from_secs_and_nanos(-2, 500_000_000)
        );
        assert_eq!(Instant::from_f64(0.0000000001), Instant::from_epoch_seconds(0));
    }

    #[test]
    fn before_epoch_system_time() {
        let instant = Instant::from_system_time(UNIX_EPOCH - Duration::from_millis(1500));
        assert_eq!(instant, Instant::from_secs_and_nanos(-2, 500_000_000));
        assert_eq!(instant.fmt(Format::EpochSeconds), "-1.5");
        assert_eq!(instant.epoch_fractional_seconds(), -1.5);
    }

    proptest! {
        #[test]
        fn epoch_seconds_round_trip(seconds in -10_000_000_000i64..10_000_000_000i64, nanos in 0u32..1_000_000_000u32) {
            let instant = Instant::from_secs_and_nanos(seconds, nanos);
            let formatted = instant.fmt(Format::EpochSeconds);
            prop_assert_eq!(Instant::from_str(&formatted, Format::EpochSeconds), Ok(instant));
        }

        #[test]
        fn date_time_round_trip(seconds in 0i64..253_402_300_799i64, nanos in 0u32..1_000_000_000u32) {
            let instant = Instant::from_secs_and_nanos(seconds, nanos);
            let formatted = instant.fmt(Format::DateTime);
            prop_assert_eq!(Instant::from_str(&formatted, Format::DateTime), Ok(instant));
        }

        #[test]
        fn millisecond_floats_round_trip(seconds in 0i64..4_000_000_000i64, millis in 0u32..1000u32) {
            let instant = Instant::from_secs_and_nanos(seconds, millis * 1_000_000);
            prop_assert_eq!(Instant::from_f64(instant.epoch_fractional_seconds()), instant);
        }
    }
}
