use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use chrono::{DateTime, Local, TimeZone, Utc};

use crate::error::{Result, StampError};

/// strftime pattern producing `YYYYMMDDHHMMSS`.
pub const TIMESTAMP_FORMAT: &str = "%Y%m%d%H%M%S";
pub const TIMESTAMP_LEN: usize = 14;

/// A 14-digit `YYYYMMDDHHMMSS` version identifier.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(String);

impl Timestamp {
    pub fn from_datetime<Tz>(at: &DateTime<Tz>) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        Self(at.format(TIMESTAMP_FORMAT).to_string())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Timestamp {
    type Err = StampError;

    fn from_str(s: &str) -> Result<Self> {
        if s.len() == TIMESTAMP_LEN && s.bytes().all(|b| b.is_ascii_digit()) {
            Ok(Self(s.to_string()))
        } else {
            Err(StampError::InvalidTimestamp {
                value: s.to_string(),
            })
        }
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Which wall clock a stamp is read from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Clock {
    #[default]
    Local,
    Utc,
}

impl Clock {
    #[must_use]
    pub fn now(self) -> Timestamp {
        match self {
            Self::Local => Timestamp::from_datetime(&Local::now()),
            Self::Utc => Timestamp::from_datetime(&Utc::now()),
        }
    }
}

/// The value written by one invocation. Built fresh, used once, dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionRecord {
    pub timestamp: Timestamp,
    pub target_path: PathBuf,
}

impl VersionRecord {
    pub fn new(timestamp: Timestamp, target_path: impl Into<PathBuf>) -> Self {
        Self {
            timestamp,
            target_path: target_path.into(),
        }
    }

    pub fn now(clock: Clock, target_path: &Path) -> Self {
        Self::new(clock.now(), target_path)
    }
}
