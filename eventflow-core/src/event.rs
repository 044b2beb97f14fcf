//! Event types for the EventFlow calendar.
//!
//! These mirror the records served by the EventFlow REST API: `Event` is the
//! stored form, `EventDraft` is a submission payload, and `EventPatch` is a
//! partial update.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A calendar event as stored by the EventFlow service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub start_time: DateTime<Utc>,
    pub end_time: Option<DateTime<Utc>>,
    /// All-day events ignore the time-of-day portion of `start_time`.
    #[serde(default)]
    pub is_all_day: bool,

    // Organizer & contact
    pub organizer_name: String,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,

    // Links & presentation
    pub website_url: Option<String>,
    pub registration_link: Option<String>,
    pub external_links: Option<String>,
    pub featured_image: Option<String>,
    pub color: Option<String>,

    /// Submissions start unapproved and only appear publicly once approved.
    #[serde(default)]
    pub is_approved: bool,
}

/// Payload for submitting a new event.
///
/// Optional fields are left out of the JSON body when unset.
#[derive(Debug, Clone, Serialize)]
pub struct EventDraft {
    pub title: String,
    pub start_time: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<DateTime<Utc>>,
    pub is_all_day: bool,
    pub organizer_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Partial update for an existing event. Fields left as `None` are not sent
/// and stay unchanged on the server.
#[derive(Debug, Clone, Default, Serialize)]
pub struct EventPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organizer_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_approved: Option<bool>,
}

impl EventPatch {
    /// True when no field is set (nothing to send).
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.location.is_none()
            && self.start_time.is_none()
            && self.organizer_name.is_none()
            && self.contact_email.is_none()
            && self.is_approved.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn draft_serialization_skips_unset_fields() {
        let draft = EventDraft {
            title: "Tech Conference".to_string(),
            start_time: Utc.with_ymd_and_hms(2026, 8, 15, 10, 0, 0).unwrap(),
            end_time: None,
            is_all_day: false,
            organizer_name: "TechCorp".to_string(),
            contact_email: None,
            location: Some("Convention Center".to_string()),
            description: None,
        };

        let json = serde_json::to_value(&draft).unwrap();
        let body = json.as_object().unwrap();
        assert!(body.contains_key("title"));
        assert!(body.contains_key("location"));
        assert!(!body.contains_key("end_time"));
        assert!(!body.contains_key("contact_email"));
        assert!(!body.contains_key("description"));
    }

    #[test]
    fn patch_is_empty() {
        assert!(EventPatch::default().is_empty());

        let patch = EventPatch {
            is_approved: Some(true),
            ..EventPatch::default()
        };
        assert!(!patch.is_empty());
    }

    #[test]
    fn event_deserializes_api_record() {
        let json = r#"{
            "id": 42,
            "title": "Networking Event",
            "description": null,
            "location": "Business Hub",
            "start_time": "2026-08-20T18:00:00Z",
            "end_time": null,
            "organizer_name": "Professional Network",
            "contact_email": "connect@profnet.com",
            "contact_phone": null,
            "website_url": null,
            "registration_link": null,
            "external_links": null,
            "featured_image": null,
            "color": null,
            "is_approved": true
        }"#;

        let event: Event = serde_json::from_str(json).unwrap();
        assert_eq!(event.id, 42);
        assert_eq!(event.title, "Networking Event");
        assert!(event.is_approved);
        assert!(!event.is_all_day);
    }
}
