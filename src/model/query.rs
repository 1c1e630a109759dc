use std::fmt;

use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("result count {0} is outside {min}..={max}", min = ResultCount::MIN, max = ResultCount::MAX)]
pub struct ResultCountError(pub u8);

/// Number of videos requested per search, always within `1..=10`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ResultCount(u8);

impl ResultCount {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 10;

    pub fn new(n: u8) -> Result<Self, ResultCountError> {
        if (Self::MIN..=Self::MAX).contains(&n) {
            Ok(Self(n))
        } else {
            Err(ResultCountError(n))
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }

    pub fn increment(self) -> Self {
        Self(self.0.saturating_add(1).min(Self::MAX))
    }

    pub fn decrement(self) -> Self {
        Self(self.0.saturating_sub(1).max(Self::MIN))
    }

    pub fn all() -> impl Iterator<Item = Self> {
        (Self::MIN..=Self::MAX).map(Self)
    }
}

impl Default for ResultCount {
    fn default() -> Self {
        Self(6)
    }
}

impl TryFrom<u8> for ResultCount {
    type Error = ResultCountError;

    fn try_from(n: u8) -> Result<Self, Self::Error> {
        Self::new(n)
    }
}

impl fmt::Display for ResultCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryState {
    pub text: String,
    pub count: ResultCount,
}

impl QueryState {
    pub fn new(count: ResultCount) -> Self {
        Self {
            text: String::new(),
            count,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}
