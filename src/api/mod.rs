//! CoWIN API access.
//!
//! Covers the location endpoints (states, districts) and the availability
//! endpoint (`calendarByDistrict`). The refresh loop only needs the latter,
//! so it depends on the [`AvailabilitySource`] seam rather than on the
//! concrete client.

mod client;
mod error;
mod types;

use std::future::Future;

use chrono::NaiveDate;

pub use client::CowinClient;
pub use error::ApiError;
pub use types::{Center, District, Session, State};

/// Anything that can produce the centers of a district for a start date.
pub trait AvailabilitySource: Send + Sync + 'static {
    fn fetch_centers(
        &self,
        district_id: u32,
        date: NaiveDate,
    ) -> impl Future<Output = Result<Vec<Center>, ApiError>> + Send;
}
