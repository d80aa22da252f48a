use std::collections::HashMap;

use crate::api::Session;

/// A center's sessions keyed by their `DD-MM-YYYY` date.
///
/// Built per projection and thrown away afterwards. When the upstream list
/// repeats a date the later session wins.
#[derive(Debug, Default)]
pub struct SessionIndex<'a> {
    by_date: HashMap<&'a str, &'a Session>,
}

impl<'a> SessionIndex<'a> {
    pub fn build(sessions: &'a [Session]) -> Self {
        let mut by_date = HashMap::with_capacity(sessions.len());
        for session in sessions {
            if by_date.insert(session.date.as_str(), session).is_some() {
                tracing::debug!(date = %session.date, "Duplicate session date, keeping the later entry");
            }
        }
        Self { by_date }
    }

    pub fn get(&self, date: &str) -> Option<&'a Session> {
        self.by_date.get(date).copied()
    }
}
