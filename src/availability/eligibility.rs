//! Which sessions count as "available".

use serde::{Deserialize, Serialize};

use crate::api::Session;

/// Age bracket a session's `min_age_limit` must fall into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgeBracket {
    Any,
    /// `min_age_limit < n`. `Below(45)` selects the 18-44 sessions.
    Below(u32),
    /// `min_age_limit >= n`.
    AtLeast(u32),
}

impl Default for AgeBracket {
    fn default() -> Self {
        AgeBracket::Below(45)
    }
}

impl AgeBracket {
    pub fn admits(&self, min_age_limit: u32) -> bool {
        match *self {
            AgeBracket::Any => true,
            AgeBracket::Below(limit) => min_age_limit < limit,
            AgeBracket::AtLeast(limit) => min_age_limit >= limit,
        }
    }

    /// Who the bracket is for, as shown to the user.
    pub fn audience(&self) -> String {
        match *self {
            AgeBracket::Any => "all".to_string(),
            // Vaccination starts at 18
            AgeBracket::Below(limit) if limit > 19 => format!("18-{}", limit - 1),
            AgeBracket::Below(limit) => format!("under-{}", limit),
            AgeBracket::AtLeast(limit) => format!("{}+", limit),
        }
    }
}

/// The rule a session must satisfy for its center to be listed.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EligibilityRule {
    #[serde(default)]
    pub age: AgeBracket,
    /// Only count sessions with at least one free slot.
    #[serde(default)]
    pub require_capacity: bool,
    /// Vaccine brand, compared case-insensitively.
    #[serde(default)]
    pub vaccine: Option<String>,
}

impl EligibilityRule {
    pub fn admits(&self, session: &Session) -> bool {
        if !self.age.admits(session.min_age_limit) {
            return false;
        }
        if self.require_capacity && session.available_capacity == 0 {
            return false;
        }
        match &self.vaccine {
            Some(vaccine) => session.vaccine.eq_ignore_ascii_case(vaccine.trim()),
            None => true,
        }
    }

    /// Message shown when nothing qualifies.
    pub fn empty_message(&self) -> String {
        let mut message = format!("No slots available for {} persons", self.age.audience());
        if let Some(vaccine) = &self.vaccine {
            message.push_str(&format!(" ({})", vaccine.to_uppercase()));
        }
        message.push_str(" in this district");
        message
    }
}
