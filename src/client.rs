//! HTTP client for the EventFlow REST API.

use anyhow::{Context, Result};
use serde::Deserialize;

use eventflow_core::{Event, EventDraft, EventFilter, EventPatch};

/// Client for the event endpoints.
pub struct Client {
    http: reqwest::Client,
    base_url: String,
}

// Response types matching the API

/// One page of the event list.
#[derive(Debug, Deserialize)]
pub struct EventPage {
    pub events: Vec<Event>,
    pub page: u64,
    pub limit: u64,
    pub total: u64,
}

#[derive(Deserialize)]
struct ListEnvelope {
    data: EventPage,
}

#[derive(Deserialize)]
struct ErrorResponse {
    message: String,
}

impl Client {
    pub fn new(base_url: String) -> Self {
        Client {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    /// GET /event with filters and paging
    pub async fn list_events(
        &self,
        filter: &EventFilter,
        page: u64,
        limit: u64,
    ) -> Result<EventPage> {
        let mut query = filter.query_pairs();
        query.push(("page", page.to_string()));
        query.push(("limit", limit.to_string()));

        let resp = self
            .http
            .get(format!("{}/event", self.base_url))
            .query(&query)
            .send()
            .await
            .context("Failed to reach the EventFlow API")?;

        if !resp.status().is_success() {
            let err: ErrorResponse = resp.json().await?;
            anyhow::bail!("{}", err.message);
        }

        let envelope: ListEnvelope = resp.json().await?;
        Ok(envelope.data)
    }

    /// POST /event
    pub async fn create_event(&self, draft: &EventDraft) -> Result<()> {
        let resp = self
            .http
            .post(format!("{}/event", self.base_url))
            .json(draft)
            .send()
            .await
            .context("Failed to reach the EventFlow API")?;

        if !resp.status().is_success() {
            let err: ErrorResponse = resp.json().await?;
            anyhow::bail!("{}", err.message);
        }

        Ok(())
    }

    /// PUT /event?id=<id>
    pub async fn update_event(&self, id: i64, patch: &EventPatch) -> Result<()> {
        let resp = self
            .http
            .put(format!("{}/event", self.base_url))
            .query(&[("id", id)])
            .json(patch)
            .send()
            .await
            .context("Failed to reach the EventFlow API")?;

        if !resp.status().is_success() {
            let err: ErrorResponse = resp.json().await?;
            anyhow::bail!("{}", err.message);
        }

        Ok(())
    }

    /// DELETE /event?id=<id>
    pub async fn delete_event(&self, id: i64) -> Result<()> {
        let resp = self
            .http
            .delete(format!("{}/event", self.base_url))
            .query(&[("id", id)])
            .send()
            .await
            .context("Failed to reach the EventFlow API")?;

        if !resp.status().is_success() {
            let err: ErrorResponse = resp.json().await?;
            anyhow::bail!("{}", err.message);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_envelope_matches_api_shape() {
        let json = r#"{
            "data": {
                "events": [],
                "page": 2,
                "limit": 10,
                "total": 45
            }
        }"#;

        let envelope: ListEnvelope = serde_json::from_str(json).unwrap();
        assert_eq!(envelope.data.page, 2);
        assert_eq!(envelope.data.limit, 10);
        assert_eq!(envelope.data.total, 45);
        assert!(envelope.data.events.is_empty());
    }

    #[test]
    fn error_envelope_carries_message() {
        let err: ErrorResponse = serde_json::from_str(r#"{"message":"Failed to fetch events"}"#).unwrap();
        assert_eq!(err.message, "Failed to fetch events");
    }
}
