//! Calendar helpers pinned to India Standard Time.
//!
//! IST is UTC+05:30 with no daylight saving, so a fixed offset is exact.

use chrono::{DateTime, Days, FixedOffset, NaiveDate, Offset, Utc};

/// Number of consecutive days shown in the grid.
pub const WINDOW_DAYS: usize = 7;

const IST_OFFSET_SECONDS: i32 = 5 * 3600 + 30 * 60;

/// Format the upstream API uses for session dates and the `date` query.
const API_DATE_FORMAT: &str = "%d-%m-%Y";

pub fn ist() -> FixedOffset {
    FixedOffset::east_opt(IST_OFFSET_SECONDS).unwrap_or_else(|| Utc.fix())
}

pub fn now_ist() -> DateTime<FixedOffset> {
    Utc::now().with_timezone(&ist())
}

pub fn today_ist() -> NaiveDate {
    now_ist().date_naive()
}

/// Date sent to `calendarByDistrict`: today plus `offset_days`.
pub fn target_date(today: NaiveDate, offset_days: u32) -> NaiveDate {
    today
        .checked_add_days(Days::new(u64::from(offset_days)))
        .unwrap_or(today)
}

/// The fixed grid window: `WINDOW_DAYS` dates starting at `start`.
pub fn window(start: NaiveDate) -> [NaiveDate; WINDOW_DAYS] {
    std::array::from_fn(|i| {
        start
            .checked_add_days(Days::new(i as u64))
            .unwrap_or(NaiveDate::MAX)
    })
}

/// `DD-MM-YYYY`, the key sessions are indexed by.
pub fn session_key(date: NaiveDate) -> String {
    date.format(API_DATE_FORMAT).to_string()
}

pub fn query_date(date: NaiveDate) -> String {
    session_key(date)
}

/// Short column header, e.g. `05 May`.
pub fn column_label(date: NaiveDate) -> String {
    date.format("%d %b").to_string()
}
