//! List filters for event queries.
//!
//! `EventFilter` carries the filters the event list endpoint understands.
//! None values mean "no filter" and are left out of the query string.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{EventFlowError, EventFlowResult};

/// Filters accepted by the event list endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventFilter {
    pub title: Option<String>,
    pub organizer_name: Option<String>,
    pub is_approved: Option<bool>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl EventFilter {
    /// Query parameters for the list endpoint, using the API's field names.
    /// Only set filters produce a pair.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();

        if let Some(title) = &self.title {
            pairs.push(("title", title.clone()));
        }
        if let Some(organizer) = &self.organizer_name {
            pairs.push(("organizer_name", organizer.clone()));
        }
        if let Some(approved) = self.is_approved {
            pairs.push(("is_approved", approved.to_string()));
        }
        if let Some(from) = self.start_date {
            pairs.push(("start_date", from.format("%Y-%m-%d").to_string()));
        }
        if let Some(to) = self.end_date {
            pairs.push(("end_date", to.format("%Y-%m-%d").to_string()));
        }

        pairs
    }
}

/// Parse a YYYY-MM-DD argument.
pub fn parse_date(s: &str) -> EventFlowResult<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| EventFlowError::InvalidDate(s.to_string()))
}
