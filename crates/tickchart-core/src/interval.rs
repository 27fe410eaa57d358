//! Chart period enumeration.

use std::fmt;
use std::str::FromStr;

/// Period length of one bar in a series.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Interval {
    /// 1 minute
    Min1,
    /// 5 minutes
    Min5,
    /// 15 minutes
    Min15,
    /// 30 minutes
    Min30,
    /// 1 hour
    Hour1,
    /// 1 day
    Day1,
    /// 1 week
    #[default]
    Week1,
    /// 1 month
    Month1,
}

impl Interval {
    /// The wire string used in service query parameters.
    pub fn as_str(&self) -> &'static str {
        match self {
            Interval::Min1 => "1m",
            Interval::Min5 => "5m",
            Interval::Min15 => "15m",
            Interval::Min30 => "30m",
            Interval::Hour1 => "1h",
            Interval::Day1 => "1d",
            Interval::Week1 => "1w",
            Interval::Month1 => "1M",
        }
    }

    /// All supported intervals in ascending order.
    pub fn all() -> &'static [Interval] {
        &[
            Interval::Min1,
            Interval::Min5,
            Interval::Min15,
            Interval::Min30,
            Interval::Hour1,
            Interval::Day1,
            Interval::Week1,
            Interval::Month1,
        ]
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for an unrecognized interval string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseIntervalError(pub String);

impl fmt::Display for ParseIntervalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown interval: {}", self.0)
    }
}

impl std::error::Error for ParseIntervalError {}

impl FromStr for Interval {
    type Err = ParseIntervalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Interval::all()
            .iter()
            .find(|i| i.as_str() == s)
            .copied()
            .ok_or_else(|| ParseIntervalError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_all_intervals() {
        for interval in Interval::all() {
            assert_eq!(interval.as_str().parse::<Interval>().as_ref(), Ok(interval));
        }
    }

    #[test]
    fn test_unknown_interval_rejected() {
        assert!("2w".parse::<Interval>().is_err());
        assert!("".parse::<Interval>().is_err());
    }

    #[test]
    fn test_month_is_case_sensitive() {
        assert_eq!("1M".parse::<Interval>(), Ok(Interval::Month1));
        assert!("1M".parse::<Interval>() != Ok(Interval::Min1));
    }
}
