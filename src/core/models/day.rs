//! Day slot identifier
//!
//! A program is split into numbered days. The persisted form is `day{N}`,
//! which is also the key of the day's completion log in storage.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::KeyError;

/// A numbered day of the training program (1-based)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DayId(u8);

impl DayId {
    /// Create a day identifier. Day numbers start at 1.
    pub fn new(number: u8) -> Result<Self, KeyError> {
        if number == 0 {
            return Err(KeyError::InvalidDay(number.to_string()));
        }
        Ok(Self(number))
    }

    /// The day number
    #[must_use]
    pub const fn number(self) -> u8 {
        self.0
    }
}

impl fmt::Display for DayId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "day{}", self.0)
    }
}

impl FromStr for DayId {
    type Err = KeyError;

    /// Accepts both `day3` and `3`
    ///
    /// Only the canonical digits are accepted (no sign, no leading zero), so
    /// every stored key maps back to exactly one day.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix("day").unwrap_or(s);
        if digits.is_empty()
            || digits.starts_with('0')
            || !digits.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(KeyError::InvalidDay(s.to_string()));
        }
        let number: u8 = digits.parse().map_err(|_| KeyError::InvalidDay(s.to_string()))?;
        Self::new(number).map_err(|_| KeyError::InvalidDay(s.to_string()))
    }
}

impl Serialize for DayId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawDay {
    Number(u64),
    Text(String),
}

impl<'de> Deserialize<'de> for DayId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match RawDay::deserialize(deserializer)? {
            RawDay::Number(n) => u8::try_from(n)
                .map_err(|_| KeyError::InvalidDay(n.to_string()))
                .and_then(Self::new)
                .map_err(serde::de::Error::custom),
            RawDay::Text(s) => s.parse().map_err(serde::de::Error::custom),
        }
    }
}
