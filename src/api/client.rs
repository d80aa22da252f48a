use std::time::Duration;

use chrono::NaiveDate;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;

use crate::api::error::ApiError;
use crate::api::types::{
    CalendarResponse, Center, District, DistrictsResponse, State, StatesResponse,
};
use crate::api::AvailabilitySource;
use crate::availability::dates;
use crate::config::ApiConfig;

/// Thin client over the three read-only CoWIN endpoints.
///
/// No caching and no retries: every call goes to the network.
#[derive(Clone)]
pub struct CowinClient {
    client: Client,
    base_url: String,
}

impl CowinClient {
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(u64::from(config.timeout_seconds)))
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(ApiError::Client)?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// List every state.
    pub async fn states(&self) -> Result<Vec<State>, ApiError> {
        let url = format!("{}/admin/location/states", self.base_url);
        let body: StatesResponse = self.get_json(&url).await?;
        tracing::debug!(count = body.states.len(), "Loaded states");
        Ok(body.states)
    }

    /// List the districts of one state.
    pub async fn districts(&self, state_id: u32) -> Result<Vec<District>, ApiError> {
        let url = format!("{}/admin/location/districts/{}", self.base_url, state_id);
        let body: DistrictsResponse = self.get_json(&url).await?;
        tracing::debug!(state_id, count = body.districts.len(), "Loaded districts");
        Ok(body.districts)
    }

    /// Fetch a week of sessions for every center in a district, starting at
    /// `date`.
    ///
    /// A non-success status is not an error here: the district simply has
    /// no data for us, and the caller gets an empty list.
    pub async fn calendar_by_district(
        &self,
        district_id: u32,
        date: NaiveDate,
    ) -> Result<Vec<Center>, ApiError> {
        let url = format!(
            "{}/appointment/sessions/calendarByDistrict?district_id={}&date={}",
            self.base_url,
            district_id,
            dates::query_date(date)
        );
        let response = self.send(&url).await?;

        let status = response.status();
        if !status.is_success() {
            tracing::info!(
                district_id,
                status = status.as_u16(),
                "Availability lookup returned non-success status, treating as empty"
            );
            return Ok(Vec::new());
        }

        let body: CalendarResponse = decode(&url, response).await?;
        tracing::debug!(district_id, centers = body.centers.len(), "Loaded centers");
        Ok(body.centers)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, ApiError> {
        let response = self.send(url).await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }
        decode(url, response).await
    }

    async fn send(&self, url: &str) -> Result<Response, ApiError> {
        self.client
            .get(url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|source| ApiError::Transport {
                url: url.to_string(),
                source,
            })
    }
}

impl AvailabilitySource for CowinClient {
    async fn fetch_centers(
        &self,
        district_id: u32,
        date: NaiveDate,
    ) -> Result<Vec<Center>, ApiError> {
        self.calendar_by_district(district_id, date).await
    }
}

async fn decode<T: DeserializeOwned>(url: &str, response: Response) -> Result<T, ApiError> {
    let text = response.text().await.map_err(|source| ApiError::Transport {
        url: url.to_string(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| ApiError::Decode {
        url: url.to_string(),
        source,
    })
}
