//! The voice engagement launch.
//!
//! A launch is a fixed sequence where every step feeds ids into the next:
//!
//! ```text
//! uploads (x2) -> voice-templates (x2) -> engagement -> activity
//!     -> triggers (voice-human, voice-machine) -> envelopes (bulk)
//!     -> engagement status = scheduled
//! ```
//!
//! The sequence stops at the first failing request. Everything created up to
//! that point is written to the [`RunRecord`] so the caller can persist it.

use serde_json::Value;

use crate::{
    info,
    omnigage::{
        ApiError, Activity, Engagement, Envelope, OmnigageClient, Resource, Trigger,
        VoiceTemplate, resources::TriggerEvent, uploads,
    },
    success,
    types::{RunRecord, RunStatus},
    utils, warning,
};

pub const DEFAULT_ENGAGEMENT_NAME: &str = "Example Voice Blast";
pub const DEFAULT_ACTIVITY_NAME: &str = "Voice Blast";
pub const DEFAULT_HUMAN_RECORDING_NAME: &str = "Human Recording";
pub const DEFAULT_MACHINE_RECORDING_NAME: &str = "Machine Recording";

/// Everything needed to launch one voice blast.
#[derive(Debug, Clone, PartialEq)]
pub struct Campaign {
    /// Played when a person answers.
    pub human_recording: VoiceTemplate,
    /// Played when an answering machine is detected.
    pub machine_recording: VoiceTemplate,
    pub engagement: Engagement,
    pub activity: Activity,
    pub envelopes: Vec<Envelope>,
}

/// Runs the whole launch against the API.
///
/// IDs are recorded on `record` as soon as each resource exists; the final
/// status is left for the caller to set. With `schedule == false` the
/// engagement is left unscheduled and can be scheduled later with
/// [`schedule`].
pub async fn launch(
    client: &OmnigageClient,
    campaign: &mut Campaign,
    record: &mut RunRecord,
    schedule: bool,
) -> Result<(), ApiError> {
    // upload recordings
    let upload_id = uploads::upload(client, &campaign.human_recording.file_path).await?;
    record.human_upload_id = Some(upload_id.clone());
    campaign.human_recording.upload_id = Some(upload_id);

    let upload_id = uploads::upload(client, &campaign.machine_recording.file_path).await?;
    record.machine_upload_id = Some(upload_id.clone());
    campaign.machine_recording.upload_id = Some(upload_id);

    // voice templates
    client.create(&mut campaign.human_recording).await?;
    record.human_voice_template_id = campaign.human_recording.id.clone();

    client.create(&mut campaign.machine_recording).await?;
    record.machine_voice_template_id = campaign.machine_recording.id.clone();

    info!("Voice Template ID (human): {}", id_of(&campaign.human_recording));
    info!("Voice Template ID (machine): {}", id_of(&campaign.machine_recording));

    // engagement and activity
    client.create(&mut campaign.engagement).await?;
    record.engagement_id = campaign.engagement.id.clone();

    campaign.activity.engagement_id = campaign.engagement.id.clone();
    client.create(&mut campaign.activity).await?;
    record.activity_id = campaign.activity.id.clone();

    info!("Engagement ID: {}", id_of(&campaign.engagement));
    info!("Activity ID: {}", id_of(&campaign.activity));

    // triggers
    let mut human_trigger = Trigger::play(
        TriggerEvent::VoiceHuman,
        campaign.activity.id.clone(),
        campaign.human_recording.id.clone(),
    );
    client.create(&mut human_trigger).await?;
    record.human_trigger_id = human_trigger.id.clone();

    let mut machine_trigger = Trigger::play(
        TriggerEvent::VoiceMachine,
        campaign.activity.id.clone(),
        campaign.machine_recording.id.clone(),
    );
    client.create(&mut machine_trigger).await?;
    record.machine_trigger_id = machine_trigger.id.clone();

    info!("Trigger ID (human): {}", id_of(&human_trigger));
    info!("Trigger ID (machine): {}", id_of(&machine_trigger));

    // populate engagement queue
    for envelope in campaign.envelopes.iter_mut() {
        envelope.engagement_id = campaign.engagement.id.clone();
    }
    record.envelope_count = populate(client, &campaign.envelopes).await?;
    record.status = RunStatus::Created;

    if schedule {
        self::schedule(client, &mut campaign.engagement).await?;
        record.mark_scheduled();
    } else {
        warning!(
            "Engagement {} left unscheduled. Run `omnivox schedule {}` when ready.",
            id_of(&campaign.engagement),
            id_of(&campaign.engagement)
        );
    }

    Ok(())
}

/// Bulk-creates `envelopes` and returns how many the API reports as created.
///
/// Falls back to the number sent when the response carries no `data` list.
pub async fn populate(client: &OmnigageClient, envelopes: &[Envelope]) -> Result<usize, ApiError> {
    if envelopes.is_empty() {
        warning!("No envelopes given, engagement queue stays empty.");
        return Ok(0);
    }

    let document = Envelope::bulk_document(envelopes)?;

    let pb = utils::spinner(format!("Creating {} envelopes...", envelopes.len()));
    let response = client.post_bulk(Envelope::TYPE, &document).await;
    pb.finish_and_clear();
    let response = response?;

    let count = response
        .get("data")
        .and_then(Value::as_array)
        .map(|data| data.len())
        .unwrap_or(envelopes.len());

    success!("Created {} envelopes.", count);
    Ok(count)
}

/// Flips `engagement` to `scheduled`, which starts processing its queue.
pub async fn schedule(client: &OmnigageClient, engagement: &mut Engagement) -> Result<(), ApiError> {
    engagement.schedule();
    client.update(engagement).await?;
    success!("Engagement {} scheduled.", id_of(engagement));
    Ok(())
}

fn id_of<R: Resource>(resource: &R) -> &str {
    resource.id().unwrap_or("-")
}
