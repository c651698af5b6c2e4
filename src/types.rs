use std::{collections::BTreeMap, fmt};

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tabled::Tabled;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub token_key: String,
    pub token_secret: String,
    pub account_key: String,
    pub host: String,
}

/// A JSON:API top-level document. `T` is a single resource object or a
/// list of them for bulk requests.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Document<T> {
    pub data: T,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResourceIdentifier {
    #[serde(rename = "type")]
    pub kind: String,
    pub id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Relationship {
    pub data: ResourceIdentifier,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ResourceObject<A> {
    #[serde(rename = "type")]
    pub kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub attributes: A,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub relationships: BTreeMap<&'static str, Relationship>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct UploadRequest {
    pub name: String,
    #[serde(rename = "type")]
    pub mime_type: String,
    pub size: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UploadSlotResponse {
    pub data: UploadSlot,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UploadSlot {
    pub id: String,
    pub attributes: UploadSlotAttributes,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct UploadSlotAttributes {
    pub request_url: String,
    #[serde(default)]
    pub request_headers: Option<Vec<Map<String, Value>>>,
    /// Presigned policy fields, kept in the order the API sent them.
    #[serde(default)]
    pub request_form_data: Option<Vec<Map<String, Value>>>,
}

/// A recipient as given on the command line or in an envelopes file.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct EnvelopeSpec {
    pub phone_number: String,
    #[serde(default)]
    pub meta: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RunStatus {
    #[default]
    Pending,
    Created,
    Scheduled,
    Failed,
}

impl fmt::Display for RunStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RunStatus::Pending => "pending",
            RunStatus::Created => "created",
            RunStatus::Scheduled => "scheduled",
            RunStatus::Failed => "failed",
        };
        write!(f, "{}", s)
    }
}

/// Everything a single `launch` created on the remote side.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct RunRecord {
    pub id: String,
    pub started_at: String,
    pub finished_at: Option<String>,
    pub host: String,
    pub status: RunStatus,
    pub human_upload_id: Option<String>,
    pub machine_upload_id: Option<String>,
    pub human_voice_template_id: Option<String>,
    pub machine_voice_template_id: Option<String>,
    pub engagement_id: Option<String>,
    pub activity_id: Option<String>,
    pub human_trigger_id: Option<String>,
    pub machine_trigger_id: Option<String>,
    pub envelope_count: usize,
    pub error: Option<String>,
    #[serde(default)]
    pub scheduled_at: Option<String>,
}

impl RunRecord {
    pub fn new(host: &str) -> Self {
        let now = Utc::now();
        Self {
            id: now.format("%Y%m%dT%H%M%S%3fZ").to_string(),
            started_at: now.to_rfc3339_opts(SecondsFormat::Secs, true),
            host: host.to_string(),
            ..Default::default()
        }
    }

    pub fn finish(&mut self, status: RunStatus, error: Option<String>) {
        self.status = status;
        self.error = error;
        self.finished_at = Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true));
    }

    /// Records that the engagement was switched to `scheduled`. The outcome
    /// of the launch itself (`finished-at`, `error`) is left untouched.
    pub fn mark_scheduled(&mut self) {
        self.status = RunStatus::Scheduled;
        self.scheduled_at = Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true));
    }

    /// Created resources in creation order, as `(label, id)` pairs.
    pub fn resources(&self) -> Vec<(&'static str, &str)> {
        [
            ("Upload (human)", &self.human_upload_id),
            ("Upload (machine)", &self.machine_upload_id),
            ("Voice Template (human)", &self.human_voice_template_id),
            ("Voice Template (machine)", &self.machine_voice_template_id),
            ("Engagement", &self.engagement_id),
            ("Activity", &self.activity_id),
            ("Trigger (human)", &self.human_trigger_id),
            ("Trigger (machine)", &self.machine_trigger_id),
        ]
        .into_iter()
        .filter_map(|(label, id)| id.as_deref().map(|id| (label, id)))
        .collect()
    }
}

#[derive(Tabled)]
pub struct ResourceTableRow {
    pub resource: String,
    pub id: String,
}

#[derive(Tabled)]
pub struct RunTableRow {
    pub started: String,
    pub engagement: String,
    pub envelopes: usize,
    pub status: String,
    pub error: String,
}
