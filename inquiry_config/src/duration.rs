use std::{ops::Deref, str::FromStr};

use serde::Deserialize;
use thiserror::Error;

/// A duration written as whitespace separated parts like `"1m 30s"` or
/// `"250ms"`. Every part needs a unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Duration(pub std::time::Duration);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid duration {0:?}")]
pub struct InvalidDuration(String);

impl From<Duration> for std::time::Duration {
    fn from(value: Duration) -> Self {
        value.0
    }
}

impl Deref for Duration {
    type Target = std::time::Duration;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromStr for Duration {
    type Err = InvalidDuration;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || InvalidDuration(s.into());

        s.split_whitespace()
            .try_fold(std::time::Duration::ZERO, |acc, part| {
                let split = part
                    .find(|c: char| !c.is_ascii_digit())
                    .ok_or_else(invalid)?;
                let (value, unit) = part.split_at(split);
                let value = value.parse::<u64>().map_err(|_| invalid())?;
                let part = match unit {
                    "ms" => std::time::Duration::from_millis(value),
                    "s" => std::time::Duration::from_secs(value),
                    "m" => std::time::Duration::from_secs(value * 60),
                    "h" => std::time::Duration::from_secs(value * 3600),
                    "d" => std::time::Duration::from_secs(value * 24 * 3600),
                    _ => return Err(invalid()),
                };
                acc.checked_add(part).ok_or_else(invalid)
            })
            .map(Self)
    }
}

impl<'de> Deserialize<'de> for Duration {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        String::deserialize(deserializer)?
            .parse()
            .map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parse_duration() {
        for (input, expected) in [
            ("13s", Some(13_000)),
            ("250ms", Some(250)),
            ("42m", Some(42 * 60 * 1000)),
            ("7h", Some(7 * 60 * 60 * 1000)),
            ("2d", Some(2 * 24 * 60 * 60 * 1000)),
            ("", Some(0)),
            ("1m 30s 500ms", Some(90_500)),
            ("xyz", None),
            ("7", None),
            ("7dd", None),
            ("s", None),
        ] {
            let input = serde_json::Value::String(input.into());
            let output = serde_json::from_value::<Duration>(input)
                .ok()
                .map(|x| x.as_millis());
            assert_eq!(output, expected);
        }
    }
}
