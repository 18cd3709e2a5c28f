use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The market session a trade was taken in.
///
/// Deserialization goes through `FromStr`, so journal text is matched
/// case-insensitively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum Session {
    London,
    #[serde(rename = "NY")]
    NewYork,
    Asian,
    Overlap,
}

impl Session {
    pub fn as_str(&self) -> &'static str {
        match self {
            Session::London => "London",
            Session::NewYork => "NY",
            Session::Asian => "Asian",
            Session::Overlap => "Overlap",
        }
    }
}

impl fmt::Display for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Session {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "london" => Ok(Session::London),
            "ny" | "new york" | "newyork" => Ok(Session::NewYork),
            "asian" | "asia" => Ok(Session::Asian),
            "overlap" => Ok(Session::Overlap),
            _ => Err(CoreError::InvalidInput("session".to_string(), s.to_string())),
        }
    }
}

impl TryFrom<String> for Session {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum Direction {
    Long,
    Short,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Long => "Long",
            Direction::Short => "Short",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "long" | "buy" => Ok(Direction::Long),
            "short" | "sell" => Ok(Direction::Short),
            _ => Err(CoreError::InvalidInput("direction".to_string(), s.to_string())),
        }
    }
}

impl TryFrom<String> for Direction {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// The normalized win/loss/break-even classification of a trade.
///
/// Never stored on a record. It is derived from the raw `result` /
/// `tradeOutcome` fields every time a report is generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Win,
    Loss,
    #[serde(rename = "be")]
    BreakEven,
    /// Neither source field carried a recognizable value.
    #[default]
    #[serde(rename = "")]
    Unknown,
}

impl Outcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Win => "win",
            Outcome::Loss => "loss",
            Outcome::BreakEven => "be",
            Outcome::Unknown => "",
        }
    }

    pub fn is_win(&self) -> bool {
        matches!(self, Outcome::Win)
    }

    pub fn is_loss(&self) -> bool {
        matches!(self, Outcome::Loss)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
