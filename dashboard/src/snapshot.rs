//! The telemetry snapshot a report is rendered from.
//!
//! Everything here is trusted as-is: aggregates like `summary` were computed upstream and are
//! never recomputed from the daily series.

use crate::error::SnapshotError;
use chrono::NaiveDate;
use serde::{
    Deserialize,
    Serialize,
};
use std::{
    fs::File,
    io::BufReader,
    path::Path,
};
use strum::Display;

pub const HOURS_PER_DAY: usize = 24;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    pub daily: Vec<DailyRecord>,
    /// Sorted by `count`, descending.
    pub countries: Vec<CountryRecord>,
    pub summary: Summary,
    pub api_messages: ApiMessages,
    #[serde(default)]
    pub balance: Balance,
    #[serde(default)]
    pub credit_events: Vec<CreditEvent>,
    /// One entry per UTC hour, the position is the hour.
    pub hourly: Vec<HourlyRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DailyRecord {
    pub date: NaiveDate,
    pub requests: u64,
    pub errors: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CountryRecord {
    pub country: String,
    pub code: String,
    pub count: u64,
    pub percentage: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Summary {
    pub total_requests: u64,
    pub unique_users: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiMessages {
    pub total: u64,
    pub success: u64,
    pub failed: u64,
    pub timeout: u64,
    pub success_rate: f64,
}

/// The account balance as reported by the billing side.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Balance {
    #[serde(default = "Balance::default_amount")]
    pub amount: f64,
}

impl Balance {
    const DEFAULT_AMOUNT: f64 = -0.42;

    fn default_amount() -> f64 {
        Self::DEFAULT_AMOUNT
    }

    pub fn is_unpaid(&self) -> bool {
        self.amount < 0.0
    }
}

impl Default for Balance {
    fn default() -> Self {
        Self {
            amount: Self::DEFAULT_AMOUNT,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreditEvent {
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub kind: CreditEventKind,
    pub label: String,
}

#[derive(Debug, Clone, Copy, Display, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum CreditEventKind {
    Topup,
    Depleted,
    /// Any other event type; kept but not annotated.
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HourlyRecord {
    pub requests: u64,
}

impl Snapshot {
    /// Reads and parses the snapshot at `path`.
    ///
    /// # Errors
    /// Fails when the file cannot be opened, is not valid JSON, misses a required field, or has
    /// no daily/country records or not exactly 24 hourly records.
    #[instrument(level = "debug", skip_all, fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SnapshotError> {
        let path = path.as_ref();
        let snapshot: Snapshot = {
            let file = File::open(path).map_err(|source| SnapshotError::Io {
                path: path.to_path_buf(),
                source,
            })?;
            serde_json::from_reader(BufReader::new(file)).map_err(|source| SnapshotError::Parse {
                path: path.to_path_buf(),
                source,
            })?
        };

        snapshot.validate().map_err(|reason| SnapshotError::Schema {
            path: path.to_path_buf(),
            reason,
        })?;

        debug!(
            days = snapshot.daily.len(),
            countries = snapshot.countries.len(),
            credit_events = snapshot.credit_events.len(),
            "Snapshot loaded"
        );
        Ok(snapshot)
    }

    fn validate(&self) -> Result<(), String> {
        if self.daily.is_empty() {
            return Err("no daily records".to_string());
        }
        if self.countries.is_empty() {
            return Err("no country records".to_string());
        }
        if self.hourly.len() != HOURS_PER_DAY {
            return Err(format!(
                "expected {HOURS_PER_DAY} hourly records, found {}",
                self.hourly.len()
            ));
        }
        Ok(())
    }

    pub fn daily_on(&self, date: NaiveDate) -> Option<&DailyRecord> {
        self.daily.iter().find(|day| day.date == date)
    }

    pub fn credit_event_on(&self, date: NaiveDate) -> Option<&CreditEvent> {
        self.credit_events.iter().find(|event| event.date == date)
    }
}
