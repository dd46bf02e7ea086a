use chrono::{DateTime, FixedOffset, NaiveDate, Offset, Utc};

use crate::env::parse_or;

/// Brasília time, where the schools issuing declarations operate.
const DEFAULT_UTC_OFFSET_HOURS: i32 = -3;

#[derive(Clone, Debug)]
pub struct DeclarationConfig {
    pub utc_offset_hours: i32,
}

impl Default for DeclarationConfig {
    fn default() -> Self {
        Self {
            utc_offset_hours: DEFAULT_UTC_OFFSET_HOURS,
        }
    }
}

impl DeclarationConfig {
    pub fn from_env() -> Self {
        Self {
            utc_offset_hours: parse_or("DECLARATION_UTC_OFFSET_HOURS", DEFAULT_UTC_OFFSET_HOURS),
        }
    }

    /// Offsets outside +/-23h fall back to UTC.
    pub fn offset(&self) -> FixedOffset {
        self.utc_offset_hours
            .checked_mul(3600)
            .and_then(FixedOffset::east_opt)
            .unwrap_or_else(|| Utc.fix())
    }

    /// The calendar date a declaration issued at `now` is dated with.
    pub fn local_date(&self, now: DateTime<Utc>) -> NaiveDate {
        now.with_timezone(&self.offset()).date_naive()
    }

    pub fn today(&self) -> NaiveDate {
        self.local_date(Utc::now())
    }
}
