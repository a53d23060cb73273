//! Workout records and the parsing boundary for loosely typed input
//!
//! Raw records may carry numbers as JSON numbers or strings, or omit them.
//! Everything past `PerformanceRecord::from_raw` works on checked values.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub const DEFAULT_REPS: u32 = 5;
pub const DEFAULT_SETS: u32 = 3;

/// ---------------------------------------------------------------------------
/// Loose Input
/// ---------------------------------------------------------------------------

/// A number that may arrive as `100`, `"100"` or `"  97.5 "`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LooseNumber {
  Number(f64),
  Text(String),
}

impl LooseNumber {
  /// Finite numeric value, if any
  pub fn as_f64(&self) -> Option<f64> {
    let value = match self {
      LooseNumber::Number(n) => *n,
      LooseNumber::Text(s) => s.trim().parse::<f64>().ok()?,
    };
    value.is_finite().then_some(value)
  }

  /// Positive whole count; fractions truncate, anything below 1 is rejected
  pub fn as_count(&self) -> Option<u32> {
    let value = self.as_f64()?;
    if value < 1.0 {
      return None;
    }
    Some(value.min(u32::MAX as f64) as u32)
  }
}

impl From<f64> for LooseNumber {
  fn from(value: f64) -> Self {
    LooseNumber::Number(value)
  }
}

impl From<&str> for LooseNumber {
  fn from(value: &str) -> Self {
    LooseNumber::Text(value.to_string())
  }
}

/// Record as it comes from an import file or an API payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RawRecord {
  pub date: Option<String>,
  pub weight: Option<LooseNumber>,
  pub reps: Option<LooseNumber>,
  pub sets: Option<LooseNumber>,
  pub memo: Option<String>,
}

/// ---------------------------------------------------------------------------
/// Performance Record
/// ---------------------------------------------------------------------------

/// One logged session of a single exercise
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceRecord {
  pub date: NaiveDate,
  /// kg, 0 when the source value was missing or invalid
  pub weight: f64,
  pub reps: u32,
  pub sets: u32,
  #[serde(default)]
  pub memo: String,
}

impl PerformanceRecord {
  pub fn new(date: NaiveDate, weight: f64, reps: u32, sets: u32, memo: impl Into<String>) -> Self {
    Self {
      date,
      weight: sanitize_weight(Some(weight)),
      reps: if reps == 0 { DEFAULT_REPS } else { reps },
      sets: if sets == 0 { DEFAULT_SETS } else { sets },
      memo: memo.into(),
    }
  }

  /// Convert raw input, defaulting numeric fields. Only an unusable date
  /// rejects the record, since history cannot be ordered without it.
  pub fn from_raw(raw: &RawRecord) -> Option<Self> {
    let date = raw.date.as_deref().and_then(parse_date)?;

    Some(Self {
      date,
      weight: sanitize_weight(raw.weight.as_ref().and_then(LooseNumber::as_f64)),
      reps: raw.reps.as_ref().and_then(LooseNumber::as_count).unwrap_or(DEFAULT_REPS),
      sets: raw.sets.as_ref().and_then(LooseNumber::as_count).unwrap_or(DEFAULT_SETS),
      memo: raw.memo.clone().unwrap_or_default().trim().to_string(),
    })
  }

  /// weight x reps x sets
  pub fn tonnage(&self) -> f64 {
    self.weight * self.reps as f64 * self.sets as f64
  }
}

/// Parse a batch of raw records, dropping the undated ones
pub fn parse_records(raws: &[RawRecord]) -> Vec<PerformanceRecord> {
  raws
    .iter()
    .filter_map(|raw| {
      let parsed = PerformanceRecord::from_raw(raw);
      if parsed.is_none() {
        tracing::warn!(date = ?raw.date, "Skipping record without a usable date");
      }
      parsed
    })
    .collect()
}

/// Accepts `YYYY-MM-DD` and anything that starts with it (RFC 3339 timestamps)
pub fn parse_date(value: &str) -> Option<NaiveDate> {
  let value = value.trim();
  let day = value.get(..10)?;
  NaiveDate::parse_from_str(day, "%Y-%m-%d").ok()
}

fn sanitize_weight(weight: Option<f64>) -> f64 {
  match weight {
    Some(w) if w.is_finite() && w > 0.0 => w,
    _ => 0.0,
  }
}

/// ---------------------------------------------------------------------------
/// Stored Records
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct StoredRecord {
  pub id: i64,
  pub exercise: String,
  pub date: NaiveDate,
  pub weight: f64,
  pub reps: Option<i64>,
  pub sets: Option<i64>,
  pub memo: String,
}

impl StoredRecord {
  pub fn to_performance(&self) -> PerformanceRecord {
    PerformanceRecord {
      date: self.date,
      weight: sanitize_weight(Some(self.weight)),
      reps: positive_or(self.reps, DEFAULT_REPS),
      sets: positive_or(self.sets, DEFAULT_SETS),
      memo: self.memo.clone(),
    }
  }
}

fn positive_or(value: Option<i64>, default: u32) -> u32 {
  value
    .filter(|v| *v >= 1)
    .map(|v| v.min(u32::MAX as i64) as u32)
    .unwrap_or(default)
}

/// For inserting new records (without id, created_at)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewRecord {
  pub exercise: String,
  pub date: NaiveDate,
  pub weight: f64,
  pub reps: Option<u32>,
  pub sets: Option<u32>,
  pub memo: String,
}
