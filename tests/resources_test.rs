use std::collections::BTreeMap;

use omnivox::{
    omnigage::{
        Activity, ApiError, Engagement, Envelope, Resource, Trigger, VoiceTemplate,
        resources::TriggerEvent,
    },
    types::EnvelopeSpec,
};
use serde_json::{Value, json};

fn to_json<T: serde::Serialize>(value: &T) -> Value {
    serde_json::to_value(value).unwrap()
}

#[test]
fn test_voice_template_document() {
    let mut template = VoiceTemplate::audio("Human Recording", "/tmp/piano.wav");
    template.upload_id = Some("up-1".to_string());

    assert_eq!(
        to_json(&template.document().unwrap()),
        json!({
            "data": {
                "type": "voice-templates",
                "attributes": { "name": "Human Recording", "kind": "audio" },
                "relationships": {
                    "upload": { "data": { "type": "uploads", "id": "up-1" } }
                }
            }
        })
    );
}

#[test]
fn test_voice_template_never_sends_file_path() {
    let mut template = VoiceTemplate::audio("Human Recording", "/Users/Shared/piano.wav");
    template.upload_id = Some("up-1".to_string());

    let body = serde_json::to_string(&template.document().unwrap()).unwrap();
    assert!(!body.contains("piano.wav"));
}

#[test]
fn test_voice_template_requires_upload() {
    let template = VoiceTemplate::audio("Human Recording", "/tmp/piano.wav");

    match template.document() {
        Err(ApiError::MissingRelationship {
            resource,
            relationship,
        }) => {
            assert_eq!(resource, "voice-templates");
            assert_eq!(relationship, "upload");
        }
        other => panic!("expected MissingRelationship, got {:?}", other),
    }
}

#[test]
fn test_engagement_document_omits_unset_status() {
    let engagement = Engagement::outbound("Example Voice Blast");

    assert_eq!(
        to_json(&engagement.document().unwrap()),
        json!({
            "data": {
                "type": "engagements",
                "attributes": { "name": "Example Voice Blast", "direction": "outbound" }
            }
        })
    );
}

#[test]
fn test_engagement_schedule_document() {
    let mut engagement = Engagement::outbound("Example Voice Blast");
    engagement.set_id("eng-1".to_string());
    engagement.schedule();

    assert_eq!(
        to_json(&engagement.document().unwrap()),
        json!({
            "data": {
                "type": "engagements",
                "id": "eng-1",
                "attributes": {
                    "name": "Example Voice Blast",
                    "direction": "outbound",
                    "status": "scheduled"
                }
            }
        })
    );
}

#[test]
fn test_existing_engagement_only_sends_status() {
    let mut engagement = Engagement::existing("eng-9");
    engagement.schedule();

    assert_eq!(
        to_json(&engagement.document().unwrap()),
        json!({
            "data": {
                "type": "engagements",
                "id": "eng-9",
                "attributes": { "status": "scheduled" }
            }
        })
    );
}

#[test]
fn test_activity_document() {
    let mut activity = Activity::voice("Voice Blast", "yL9vQaWrSqg5W8EFEpE6xZ");
    activity.engagement_id = Some("eng-1".to_string());

    assert_eq!(
        to_json(&activity.document().unwrap()),
        json!({
            "data": {
                "type": "activities",
                "attributes": { "name": "Voice Blast", "kind": "voice" },
                "relationships": {
                    "engagement": { "data": { "type": "engagements", "id": "eng-1" } },
                    "caller-id": { "data": { "type": "caller-ids", "id": "yL9vQaWrSqg5W8EFEpE6xZ" } }
                }
            }
        })
    );
}

#[test]
fn test_activity_requires_engagement_and_caller_id() {
    let activity = Activity::voice("Voice Blast", "caller");
    assert!(matches!(
        activity.document(),
        Err(ApiError::MissingRelationship {
            relationship: "engagement",
            ..
        })
    ));

    let mut activity = Activity::voice("Voice Blast", "");
    activity.engagement_id = Some("eng-1".to_string());
    assert!(matches!(
        activity.document(),
        Err(ApiError::MissingRelationship {
            relationship: "caller-id",
            ..
        })
    ));
}

#[test]
fn test_trigger_documents() {
    let human = Trigger::play(
        TriggerEvent::VoiceHuman,
        Some("act-1".to_string()),
        Some("vt-1".to_string()),
    );
    let machine = Trigger::play(
        TriggerEvent::VoiceMachine,
        Some("act-1".to_string()),
        Some("vt-2".to_string()),
    );

    assert_eq!(
        to_json(&human.document().unwrap()),
        json!({
            "data": {
                "type": "triggers",
                "attributes": { "kind": "play", "on-event": "voice-human" },
                "relationships": {
                    "activity": { "data": { "type": "activities", "id": "act-1" } },
                    "voice-template": { "data": { "type": "voice-templates", "id": "vt-1" } }
                }
            }
        })
    );

    let machine = to_json(&machine.document().unwrap());
    assert_eq!(machine["data"]["attributes"]["on-event"], "voice-machine");
    assert_eq!(
        machine["data"]["relationships"]["voice-template"]["data"]["id"],
        "vt-2"
    );
}

#[test]
fn test_trigger_event_names() {
    assert_eq!(TriggerEvent::VoiceHuman.to_string(), "voice-human");
    assert_eq!(TriggerEvent::VoiceMachine.to_string(), "voice-machine");
}

#[test]
fn test_envelope_bulk_document() {
    let specs = vec![
        EnvelopeSpec {
            phone_number: "+15551234567".to_string(),
            meta: BTreeMap::from([
                ("first-name".to_string(), "Ada".to_string()),
                ("last-name".to_string(), "Lovelace".to_string()),
            ]),
        },
        EnvelopeSpec {
            phone_number: "+15557654321".to_string(),
            meta: BTreeMap::new(),
        },
    ];

    let mut envelopes: Vec<Envelope> = specs.into_iter().map(Envelope::from).collect();
    for envelope in envelopes.iter_mut() {
        envelope.engagement_id = Some("eng-1".to_string());
    }

    assert_eq!(
        to_json(&Envelope::bulk_document(&envelopes).unwrap()),
        json!({
            "data": [
                {
                    "type": "envelopes",
                    "attributes": {
                        "phone-number": "+15551234567",
                        "meta": { "first-name": "Ada", "last-name": "Lovelace" }
                    },
                    "relationships": {
                        "engagement": { "data": { "type": "engagements", "id": "eng-1" } }
                    }
                },
                {
                    "type": "envelopes",
                    "attributes": { "phone-number": "+15557654321", "meta": {} },
                    "relationships": {
                        "engagement": { "data": { "type": "engagements", "id": "eng-1" } }
                    }
                }
            ]
        })
    );
}

#[test]
fn test_envelope_bulk_document_requires_engagement() {
    let envelopes = vec![Envelope::from(EnvelopeSpec {
        phone_number: "+15551234567".to_string(),
        meta: BTreeMap::new(),
    })];

    assert!(Envelope::bulk_document(&envelopes).is_err());
}
