use core::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use identikit_core::{DomainError, DomainResult, ValueObject};

/// Gender, constrained to two values at the type level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    M,
    F,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::M => "M",
            Gender::F => "F",
        }
    }
}

impl core::fmt::Display for Gender {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "M" => Ok(Gender::M),
            "F" => Ok(Gender::F),
            other => Err(DomainError::validation(format!(
                "invalid gender: {other:?} (expected \"M\" or \"F\")"
            ))),
        }
    }
}

/// Calendar date of birth, serialized as `YYYY-MM-DD`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Birthdate(NaiveDate);

impl Birthdate {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    pub fn from_ymd(year: i32, month: u32, day: u32) -> DomainResult<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or_else(|| {
                DomainError::validation(format!("invalid birthdate: {year:04}-{month:02}-{day:02}"))
            })
    }

    /// Parse an ISO-8601 calendar date (`1985-10-21`).
    ///
    /// Unparseable input is an error, never a silently invalid date.
    pub fn parse(s: &str) -> DomainResult<Self> {
        NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map(Self)
            .map_err(|e| DomainError::validation(format!("invalid birthdate {s:?}: {e}")))
    }

    pub fn as_date(&self) -> NaiveDate {
        self.0
    }
}

impl ValueObject for Birthdate {}

impl From<NaiveDate> for Birthdate {
    fn from(value: NaiveDate) -> Self {
        Self(value)
    }
}

impl FromStr for Birthdate {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl core::fmt::Display for Birthdate {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Identity attributes of a person.
///
/// No validation: any string is accepted as `name`. Fields stay public and
/// writable; nothing in this crate mutates them after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub name: String,
    pub gender: Gender,
    pub birthdate: Birthdate,
}

impl Person {
    pub fn new(name: impl Into<String>, gender: Gender, birthdate: Birthdate) -> Self {
        Self {
            name: name.into(),
            gender,
            birthdate,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn gender(&self) -> Gender {
        self.gender
    }

    pub fn birthdate(&self) -> Birthdate {
        self.birthdate
    }
}

impl ValueObject for Person {}
