//! Core types for the EventFlow CLI.
//!
//! This crate provides the shared types used by the eventflow binary:
//! - `Event` and `EventDraft` for calendar events
//! - `EventFilter` for list queries
//! - `PageState`, `PageMarker` and `Pagination` for the pager control

pub mod error;
pub mod event;
pub mod filter;
pub mod page_state;
pub mod page_window;
pub mod pagination;

pub use error::{EventFlowError, EventFlowResult};
pub use event::{Event, EventDraft, EventPatch};
pub use filter::EventFilter;
pub use page_state::PageState;
pub use page_window::PageMarker;
pub use pagination::{PageLink, Pagination};
