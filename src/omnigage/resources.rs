use std::{collections::BTreeMap, fmt, path::PathBuf};

use serde::Serialize;

use crate::{
    omnigage::ApiError,
    types::{Document, EnvelopeSpec, Relationship, ResourceIdentifier, ResourceObject},
};

/// A JSON:API resource this client knows how to create and update.
///
/// Implementors describe their `type`, attributes and relationships; the
/// document layout is shared. Relationships point at resources by id, so a
/// relationship whose target has not been created yet fails to serialize.
pub trait Resource {
    const TYPE: &'static str;

    type Attributes: Serialize;

    fn id(&self) -> Option<&str>;

    fn set_id(&mut self, id: String);

    fn attributes(&self) -> Self::Attributes;

    fn relationships(&self) -> Result<BTreeMap<&'static str, Relationship>, ApiError> {
        Ok(BTreeMap::new())
    }

    fn resource_object(&self) -> Result<ResourceObject<Self::Attributes>, ApiError> {
        Ok(ResourceObject {
            kind: Self::TYPE,
            id: self.id().map(str::to_string),
            attributes: self.attributes(),
            relationships: self.relationships()?,
        })
    }

    fn document(&self) -> Result<Document<ResourceObject<Self::Attributes>>, ApiError> {
        Ok(Document {
            data: self.resource_object()?,
        })
    }
}

fn relate(
    resource: &'static str,
    relationship: &'static str,
    kind: &'static str,
    id: Option<&str>,
) -> Result<Relationship, ApiError> {
    match id.filter(|id| !id.is_empty()) {
        Some(id) => Ok(Relationship {
            data: ResourceIdentifier {
                kind: kind.to_string(),
                id: id.to_string(),
            },
        }),
        None => Err(ApiError::MissingRelationship {
            resource,
            relationship,
        }),
    }
}

/// Resource `voice-templates`: a recording played during a call.
#[derive(Debug, Clone, PartialEq)]
pub struct VoiceTemplate {
    pub id: Option<String>,
    pub name: String,
    pub kind: String,
    /// Local recording; never sent to the API.
    pub file_path: PathBuf,
    pub upload_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct VoiceTemplateAttributes {
    pub name: String,
    pub kind: String,
}

impl VoiceTemplate {
    pub fn audio(name: impl Into<String>, file_path: impl Into<PathBuf>) -> Self {
        Self {
            id: None,
            name: name.into(),
            kind: "audio".to_string(),
            file_path: file_path.into(),
            upload_id: None,
        }
    }
}

impl Resource for VoiceTemplate {
    const TYPE: &'static str = "voice-templates";

    type Attributes = VoiceTemplateAttributes;

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn set_id(&mut self, id: String) {
        self.id = Some(id);
    }

    fn attributes(&self) -> Self::Attributes {
        VoiceTemplateAttributes {
            name: self.name.clone(),
            kind: self.kind.clone(),
        }
    }

    fn relationships(&self) -> Result<BTreeMap<&'static str, Relationship>, ApiError> {
        Ok(BTreeMap::from([(
            "upload",
            relate(Self::TYPE, "upload", "uploads", self.upload_id.as_deref())?,
        )]))
    }
}

/// Resource `engagements`.
#[derive(Debug, Clone, PartialEq)]
pub struct Engagement {
    pub id: Option<String>,
    pub name: String,
    pub direction: String,
    pub status: Option<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct EngagementAttributes {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub direction: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl Engagement {
    pub const STATUS_SCHEDULED: &'static str = "scheduled";

    pub fn outbound(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            direction: "outbound".to_string(),
            status: None,
        }
    }

    /// An engagement created earlier, known only by id. Only attributes set
    /// afterwards are sent on update.
    pub fn existing(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            name: String::new(),
            direction: String::new(),
            status: None,
        }
    }

    pub fn schedule(&mut self) {
        self.status = Some(Self::STATUS_SCHEDULED.to_string());
    }
}

impl Resource for Engagement {
    const TYPE: &'static str = "engagements";

    type Attributes = EngagementAttributes;

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn set_id(&mut self, id: String) {
        self.id = Some(id);
    }

    fn attributes(&self) -> Self::Attributes {
        EngagementAttributes {
            name: self.name.clone(),
            direction: self.direction.clone(),
            status: self.status.clone(),
        }
    }
}

/// Resource `activities`: the voice blast attached to an engagement.
#[derive(Debug, Clone, PartialEq)]
pub struct Activity {
    pub id: Option<String>,
    pub name: String,
    pub kind: String,
    pub engagement_id: Option<String>,
    pub caller_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ActivityAttributes {
    pub name: String,
    pub kind: String,
}

impl Activity {
    pub fn voice(name: impl Into<String>, caller_id: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            kind: "voice".to_string(),
            engagement_id: None,
            caller_id: Some(caller_id.into()),
        }
    }
}

impl Resource for Activity {
    const TYPE: &'static str = "activities";

    type Attributes = ActivityAttributes;

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn set_id(&mut self, id: String) {
        self.id = Some(id);
    }

    fn attributes(&self) -> Self::Attributes {
        ActivityAttributes {
            name: self.name.clone(),
            kind: self.kind.clone(),
        }
    }

    fn relationships(&self) -> Result<BTreeMap<&'static str, Relationship>, ApiError> {
        Ok(BTreeMap::from([
            (
                "engagement",
                relate(
                    Self::TYPE,
                    "engagement",
                    Engagement::TYPE,
                    self.engagement_id.as_deref(),
                )?,
            ),
            (
                "caller-id",
                relate(
                    Self::TYPE,
                    "caller-id",
                    "caller-ids",
                    self.caller_id.as_deref(),
                )?,
            ),
        ]))
    }
}

/// Call outcome a trigger reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerEvent {
    /// A person answered.
    VoiceHuman,
    /// Answering machine detected.
    VoiceMachine,
}

impl TriggerEvent {
    pub fn as_str(&self) -> &'static str {
        match self {
            TriggerEvent::VoiceHuman => "voice-human",
            TriggerEvent::VoiceMachine => "voice-machine",
        }
    }
}

impl fmt::Display for TriggerEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Resource `triggers`.
#[derive(Debug, Clone, PartialEq)]
pub struct Trigger {
    pub id: Option<String>,
    pub kind: String,
    pub on_event: TriggerEvent,
    pub activity_id: Option<String>,
    pub voice_template_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct TriggerAttributes {
    pub kind: String,
    pub on_event: String,
}

impl Trigger {
    /// A trigger that plays `voice_template_id` when `on_event` happens.
    pub fn play(
        on_event: TriggerEvent,
        activity_id: Option<String>,
        voice_template_id: Option<String>,
    ) -> Self {
        Self {
            id: None,
            kind: "play".to_string(),
            on_event,
            activity_id,
            voice_template_id,
        }
    }
}

impl Resource for Trigger {
    const TYPE: &'static str = "triggers";

    type Attributes = TriggerAttributes;

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn set_id(&mut self, id: String) {
        self.id = Some(id);
    }

    fn attributes(&self) -> Self::Attributes {
        TriggerAttributes {
            kind: self.kind.clone(),
            on_event: self.on_event.as_str().to_string(),
        }
    }

    fn relationships(&self) -> Result<BTreeMap<&'static str, Relationship>, ApiError> {
        Ok(BTreeMap::from([
            (
                "activity",
                relate(
                    Self::TYPE,
                    "activity",
                    Activity::TYPE,
                    self.activity_id.as_deref(),
                )?,
            ),
            (
                "voice-template",
                relate(
                    Self::TYPE,
                    "voice-template",
                    VoiceTemplate::TYPE,
                    self.voice_template_id.as_deref(),
                )?,
            ),
        ]))
    }
}

/// Resource `envelopes`: one recipient in the engagement queue.
#[derive(Debug, Clone, PartialEq)]
pub struct Envelope {
    pub id: Option<String>,
    pub phone_number: String,
    pub meta: BTreeMap<String, String>,
    pub engagement_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct EnvelopeAttributes {
    pub phone_number: String,
    pub meta: BTreeMap<String, String>,
}

impl Envelope {
    /// Builds the `{"data": [...]}` document for the bulk endpoint.
    pub fn bulk_document(
        envelopes: &[Envelope],
    ) -> Result<Document<Vec<ResourceObject<EnvelopeAttributes>>>, ApiError> {
        let data = envelopes
            .iter()
            .map(|e| e.resource_object())
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Document { data })
    }
}

impl From<EnvelopeSpec> for Envelope {
    fn from(spec: EnvelopeSpec) -> Self {
        Self {
            id: None,
            phone_number: spec.phone_number,
            meta: spec.meta,
            engagement_id: None,
        }
    }
}

impl Resource for Envelope {
    const TYPE: &'static str = "envelopes";

    type Attributes = EnvelopeAttributes;

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn set_id(&mut self, id: String) {
        self.id = Some(id);
    }

    fn attributes(&self) -> Self::Attributes {
        EnvelopeAttributes {
            phone_number: self.phone_number.clone(),
            meta: self.meta.clone(),
        }
    }

    fn relationships(&self) -> Result<BTreeMap<&'static str, Relationship>, ApiError> {
        Ok(BTreeMap::from([(
            "engagement",
            relate(
                Self::TYPE,
                "engagement",
                Engagement::TYPE,
                self.engagement_id.as_deref(),
            )?,
        )]))
    }
}
