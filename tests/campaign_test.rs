use std::path::Path;

use omnivox::{
    cli::{LaunchPlan, build_campaign, load_envelopes},
    types::EnvelopeSpec,
    utils::parse_envelope,
    workflow::{DEFAULT_ACTIVITY_NAME, DEFAULT_ENGAGEMENT_NAME},
};

fn plan(dir: &Path) -> LaunchPlan {
    let human = dir.join("piano.wav");
    let machine = dir.join("spock.mp3");
    std::fs::write(&human, b"RIFF").unwrap();
    std::fs::write(&machine, b"ID3").unwrap();

    LaunchPlan {
        human_recording: human,
        machine_recording: machine,
        caller_id: "yL9vQaWrSqg5W8EFEpE6xZ".to_string(),
        envelopes: vec![parse_envelope("+15551234567,first-name=Ada").unwrap()],
        envelopes_file: None,
        engagement_name: DEFAULT_ENGAGEMENT_NAME.to_string(),
        activity_name: DEFAULT_ACTIVITY_NAME.to_string(),
        human_name: "Human Recording".to_string(),
        machine_name: "Machine Recording".to_string(),
        schedule: true,
    }
}

#[tokio::test]
async fn test_build_campaign() {
    let dir = tempfile::tempdir().unwrap();
    let plan = plan(dir.path());

    let campaign = build_campaign(&plan).await.unwrap();

    assert_eq!(campaign.human_recording.name, "Human Recording");
    assert_eq!(campaign.human_recording.kind, "audio");
    assert_eq!(campaign.machine_recording.file_path, plan.machine_recording);
    assert_eq!(campaign.engagement.name, "Example Voice Blast");
    assert_eq!(campaign.engagement.direction, "outbound");
    assert_eq!(campaign.activity.kind, "voice");
    assert_eq!(
        campaign.activity.caller_id.as_deref(),
        Some("yL9vQaWrSqg5W8EFEpE6xZ")
    );
    assert_eq!(campaign.envelopes.len(), 1);
    assert_eq!(campaign.envelopes[0].meta["first-name"], "Ada");
    assert!(campaign.envelopes[0].engagement_id.is_none());
}

#[tokio::test]
async fn test_build_campaign_merges_envelopes_file_first() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("envelopes.json");
    std::fs::write(
        &file,
        r#"[
            {"phone-number": "+15550000001", "meta": {"first-name": "Grace"}},
            {"phone-number": "+15550000002"}
        ]"#,
    )
    .unwrap();

    let mut plan = plan(dir.path());
    plan.envelopes_file = Some(file);

    let campaign = build_campaign(&plan).await.unwrap();
    let phones: Vec<&str> = campaign
        .envelopes
        .iter()
        .map(|e| e.phone_number.as_str())
        .collect();
    assert_eq!(phones, vec!["+15550000001", "+15550000002", "+15551234567"]);
    assert!(campaign.envelopes[1].meta.is_empty());
}

#[tokio::test]
async fn test_build_campaign_requires_envelopes() {
    let dir = tempfile::tempdir().unwrap();
    let mut plan = plan(dir.path());
    plan.envelopes.clear();

    assert!(build_campaign(&plan).await.is_err());
}

#[tokio::test]
async fn test_build_campaign_requires_caller_id() {
    let dir = tempfile::tempdir().unwrap();
    let mut plan = plan(dir.path());
    plan.caller_id = "  ".to_string();

    assert!(build_campaign(&plan).await.is_err());
}

#[tokio::test]
async fn test_build_campaign_checks_recordings() {
    let dir = tempfile::tempdir().unwrap();

    let mut missing = plan(dir.path());
    missing.human_recording = dir.path().join("nope.wav");
    let err = build_campaign(&missing).await.unwrap_err();
    assert!(err.to_string().contains("not found"));

    let text = dir.path().join("readme.txt");
    std::fs::write(&text, "hello").unwrap();
    let mut unsupported = plan(dir.path());
    unsupported.machine_recording = text;
    let err = build_campaign(&unsupported).await.unwrap_err();
    assert!(err.to_string().contains("Only WAV or MP3"));
}

#[tokio::test]
async fn test_load_envelopes_rejects_bad_phone_numbers() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("envelopes.json");
    std::fs::write(&file, r#"[{"phone-number": "555-1234"}]"#).unwrap();

    assert!(load_envelopes(&file).await.is_err());
}

#[tokio::test]
async fn test_load_envelopes() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("envelopes.json");
    std::fs::write(
        &file,
        r#"[{"phone-number": "+15551234567", "meta": {"last-name": "Hopper"}}]"#,
    )
    .unwrap();

    let specs = load_envelopes(&file).await.unwrap();
    assert_eq!(specs.len(), 1);
    assert_eq!(
        specs[0],
        EnvelopeSpec {
            phone_number: "+15551234567".to_string(),
            meta: [("last-name".to_string(), "Hopper".to_string())].into(),
        }
    );
}
