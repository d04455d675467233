use std::{fmt, str::FromStr};

use serde::Serialize;

use crate::types::Timestamp;

/// Candlestick interval.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub enum CandleInterval {
    #[serde(rename = "1m")]
    Minute1,
    #[serde(rename = "5m")]
    Minute5,
    #[serde(rename = "15m")]
    Minute15,
    #[default]
    #[serde(rename = "1h")]
    Hour1,
    #[serde(rename = "2h")]
    Hour2,
    #[serde(rename = "4h")]
    Hour4,
    #[serde(rename = "1d")]
    Day1,
    #[serde(rename = "1w")]
    Week1,
}

impl CandleInterval {
    /// Interval duration in seconds.
    pub const fn duration_secs(&self) -> u64 {
        match self {
            CandleInterval::Minute1 => 60,
            CandleInterval::Minute5 => 300,
            CandleInterval::Minute15 => 900,
            CandleInterval::Hour1 => 3600,
            CandleInterval::Hour2 => 7200,
            CandleInterval::Hour4 => 14400,
            CandleInterval::Day1 => 86400,
            CandleInterval::Week1 => 604800,
        }
    }

    pub const fn suffix(&self) -> &'static str {
        match self {
            CandleInterval::Minute1 => "1m",
            CandleInterval::Minute5 => "5m",
            CandleInterval::Minute15 => "15m",
            CandleInterval::Hour1 => "1h",
            CandleInterval::Hour2 => "2h",
            CandleInterval::Hour4 => "4h",
            CandleInterval::Day1 => "1d",
            CandleInterval::Week1 => "1w",
        }
    }

    pub const fn all() -> &'static [CandleInterval] {
        &[
            CandleInterval::Minute1,
            CandleInterval::Minute5,
            CandleInterval::Minute15,
            CandleInterval::Hour1,
            CandleInterval::Hour2,
            CandleInterval::Hour4,
            CandleInterval::Day1,
            CandleInterval::Week1,
        ]
    }

    /// Start of the bucket the timestamp falls into, aligned to the Unix epoch (UTC).
    pub fn bucket_open_time(&self, timestamp: Timestamp) -> Timestamp {
        let duration = self.duration_secs();
        (timestamp / duration) * duration
    }
}

impl fmt::Display for CandleInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}

/// Unknown candlestick interval suffix.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown candle interval: {0}")]
pub struct ParseIntervalError(String);

impl FromStr for CandleInterval {
    type Err = ParseIntervalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CandleInterval::all()
            .iter()
            .find(|interval| interval.suffix() == s)
            .copied()
            .ok_or_else(|| ParseIntervalError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bucket_open_time() {
        assert_eq!(CandleInterval::Hour1.bucket_open_time(0), 0);
        assert_eq!(CandleInterval::Hour1.bucket_open_time(3599), 0);
        assert_eq!(CandleInterval::Hour1.bucket_open_time(3600), 3600);
        assert_eq!(CandleInterval::Hour1.bucket_open_time(1_634_562_309), 1_634_562_000);
        assert_eq!(CandleInterval::Minute15.bucket_open_time(1_634_562_909), 1_634_562_900);
        assert_eq!(CandleInterval::Day1.bucket_open_time(1_634_562_309), 1_634_515_200);
    }

    #[test]
    fn test_parse_round_trip() {
        for interval in CandleInterval::all() {
            assert_eq!(interval.to_string().parse::<CandleInterval>(), Ok(*interval));
        }
        assert!("3h".parse::<CandleInterval>().is_err());
        assert_eq!(CandleInterval::default(), CandleInterval::Hour1);
    }
}
