//! Animation rate in generations per minute

use crate::error::LifeError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// Generations per minute, kept within `MIN..=MAX`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct GenerationsPerMinute(u32);

impl GenerationsPerMinute {
    pub const MIN: u32 = 1;
    pub const MAX: u32 = 250;

    pub fn new(value: u32) -> Result<Self, LifeError> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(Self::invalid(value.to_string()))
        }
    }

    pub fn get(self) -> u32 {
        self.0
    }

    /// Delay between two generations
    pub fn interval(self) -> Duration {
        Duration::from_secs(60) / self.0
    }

    fn invalid(value: String) -> LifeError {
        LifeError::InvalidRate {
            value,
            min: Self::MIN,
            max: Self::MAX,
        }
    }
}

impl Default for GenerationsPerMinute {
    fn default() -> Self {
        Self(60)
    }
}

impl TryFrom<u32> for GenerationsPerMinute {
    type Error = LifeError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<GenerationsPerMinute> for u32 {
    fn from(rate: GenerationsPerMinute) -> Self {
        rate.0
    }
}

impl FromStr for GenerationsPerMinute {
    type Err = LifeError;

    /// Only plain digits are accepted, no sign or decimal point
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Self::invalid(trimmed.to_string()));
        }
        let value: u32 = trimmed
            .parse()
            .map_err(|_| Self::invalid(trimmed.to_string()))?;
        Self::new(value)
    }
}

impl fmt::Display for GenerationsPerMinute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} gen/min", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_limits() {
        assert!(GenerationsPerMinute::new(1).is_ok());
        assert!(GenerationsPerMinute::new(250).is_ok());
        assert!(matches!(
            GenerationsPerMinute::new(0),
            Err(LifeError::InvalidRate { min: 1, max: 250, .. })
        ));
        assert!(GenerationsPerMinute::new(251).is_err());
    }

    #[test]
    fn test_interval() {
        assert_eq!(GenerationsPerMinute::new(60).unwrap().interval(), Duration::from_secs(1));
        assert_eq!(GenerationsPerMinute::new(1).unwrap().interval(), Duration::from_secs(60));
        assert_eq!(
            GenerationsPerMinute::new(250).unwrap().interval(),
            Duration::from_millis(240)
        );
    }

    #[test]
    fn test_parse_digits_only() {
        assert_eq!("120".parse::<GenerationsPerMinute>().unwrap().get(), 120);
        assert_eq!(" 30 ".parse::<GenerationsPerMinute>().unwrap().get(), 30);
        assert!("".parse::<GenerationsPerMinute>().is_err());
        assert!("-5".parse::<GenerationsPerMinute>().is_err());
        assert!("+5".parse::<GenerationsPerMinute>().is_err());
        assert!("1.5".parse::<GenerationsPerMinute>().is_err());
        assert!("12a".parse::<GenerationsPerMinute>().is_err());
        assert!("99999999999".parse::<GenerationsPerMinute>().is_err());
        assert!("300".parse::<GenerationsPerMinute>().is_err());
    }

    #[test]
    fn test_serde_validates() {
        let rate: GenerationsPerMinute = serde_yaml::from_str("90").unwrap();
        assert_eq!(rate.get(), 90);
        assert!(serde_yaml::from_str::<GenerationsPerMinute>("0").is_err());
    }
}
