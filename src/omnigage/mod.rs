//! # Omnigage Integration Module
//!
//! This module is the integration layer between omnivox and the Omnigage
//! REST API. The API follows JSON:API conventions: every resource is sent as
//! `{"data": {"type", "attributes", "relationships"}}` and answered with the
//! created resource including its `id`.
//!
//! ## Architecture
//!
//! ```text
//! Workflow (launch / schedule)
//!          ↓
//! Omnigage Integration Layer
//!     ├── Client (auth headers, POST / PATCH / bulk POST)
//!     ├── Resources (voice templates, engagements, activities, triggers, envelopes)
//!     └── Uploads (upload slot + presigned storage POST)
//!          ↓
//! HTTP Layer (reqwest, JSON, multipart)
//! ```
//!
//! ## Authentication
//!
//! Every API request carries two headers:
//! - `Authorization: Basic base64(token_key:token_secret)`
//! - `X-Account-Key: <account key>`
//!
//! Requests to the presigned storage URL carry only the headers returned by
//! the upload slot, never the API credentials.
//!
//! ## API Coverage
//!
//! - `POST uploads` - Reserve an upload slot and receive presigned storage details
//! - `POST voice-templates` - Create a recording referencing an upload
//! - `POST engagements` / `PATCH engagements/{id}` - Create and schedule the engagement
//! - `POST activities` - Create the voice activity for the engagement
//! - `POST triggers` - Play a recording on `voice-human` / `voice-machine`
//! - `POST envelopes` (bulk extension) - Populate the engagement queue
//!
//! ## Error Types
//!
//! All operations return [`ApiError`]. Non-2xx responses are turned into
//! [`ApiError::Status`] carrying the response body, which for this API is a
//! JSON:API `errors` document.

pub mod client;
pub mod error;
pub mod resources;
pub mod uploads;

pub use client::OmnigageClient;
pub use error::ApiError;
pub use resources::{Activity, Engagement, Envelope, Resource, Trigger, VoiceTemplate};
