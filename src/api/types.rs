//! Wire types for the CoWIN public API.

use serde::{Deserialize, Deserializer, Serialize};

/// An Indian state as listed by the location endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct State {
    pub state_id: u32,
    pub state_name: String,
}

/// A district within a state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct District {
    pub district_id: u32,
    pub district_name: String,
}

/// A vaccination center and its upcoming sessions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Center {
    pub center_id: u64,
    pub name: String,
    #[serde(default)]
    pub block_name: String,
    #[serde(default, deserialize_with = "pincode")]
    pub pincode: u32,
    #[serde(default)]
    pub address: Option<String>,
    /// "Free" or "Paid" on the live API.
    #[serde(default)]
    pub fee_type: Option<String>,
    #[serde(default)]
    pub sessions: Vec<Session>,
}

/// One day's offering at a center.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// `DD-MM-YYYY` in India Standard Time.
    pub date: String,
    pub min_age_limit: u32,
    #[serde(deserialize_with = "capacity")]
    pub available_capacity: u32,
    #[serde(default)]
    pub vaccine: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct StatesResponse {
    #[serde(default)]
    pub states: Vec<State>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct DistrictsResponse {
    #[serde(default)]
    pub districts: Vec<District>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CalendarResponse {
    #[serde(default)]
    pub centers: Vec<Center>,
}

/// Capacity arrives as a JSON number that is occasionally fractional or
/// negative. Clamp to a whole, non-negative slot count.
fn capacity<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = f64::deserialize(deserializer)?;
    if raw.is_nan() || raw <= 0.0 {
        return Ok(0);
    }
    Ok(raw.min(u32::MAX as f64) as u32)
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Number(u32),
    Text(String),
}

fn pincode<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match NumberOrText::deserialize(deserializer)? {
        NumberOrText::Number(value) => value,
        NumberOrText::Text(text) => match text.trim().parse() {
            Ok(value) => value,
            Err(_) => {
                tracing::debug!(pincode = %text, "Unparseable pincode, showing 0");
                0
            }
        },
    })
}
