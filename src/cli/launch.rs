use std::path::{Path, PathBuf};

use tabled::Table;

use crate::{
    Res, error, info,
    management::RunManager,
    omnigage::{Activity, Engagement, Envelope, OmnigageClient, VoiceTemplate},
    success,
    types::{Credentials, EnvelopeSpec, ResourceTableRow, RunRecord, RunStatus},
    utils, warning,
    workflow::{self, Campaign},
};

/// The inputs of a launch as given on the command line.
#[derive(Debug, Clone, Default)]
pub struct LaunchPlan {
    pub human_recording: PathBuf,
    pub machine_recording: PathBuf,
    pub caller_id: String,
    pub envelopes: Vec<EnvelopeSpec>,
    pub envelopes_file: Option<PathBuf>,
    pub engagement_name: String,
    pub activity_name: String,
    pub human_name: String,
    pub machine_name: String,
    pub schedule: bool,
}

pub async fn launch(credentials: Credentials, plan: LaunchPlan) {
    let mut campaign = match build_campaign(&plan).await {
        Ok(campaign) => campaign,
        Err(e) => error!("{}", e),
    };

    let client = match OmnigageClient::new(&credentials) {
        Ok(client) => client,
        Err(e) => error!("{}", e),
    };

    info!(
        "Launching engagement \"{}\" with {} envelopes against {}",
        campaign.engagement.name,
        campaign.envelopes.len(),
        client.base_url()
    );

    let mut record = RunRecord::new(client.base_url().as_str());
    let result = workflow::launch(&client, &mut campaign, &mut record, plan.schedule).await;

    match &result {
        Ok(()) => {
            let status = record.status;
            record.finish(status, None);
        }
        Err(e) => record.finish(RunStatus::Failed, Some(e.to_string())),
    }

    match RunManager::new().persist(&record).await {
        Ok(path) => info!("Run record saved to {}", path.display()),
        Err(e) => warning!("Failed to save run record: {}", e),
    }

    print_resources(&record);

    if let Err(e) = result {
        error!("Launch failed: {}", e);
    }

    success!("Launch complete ({}).", record.status);
}

/// Turns a [`LaunchPlan`] into the resources to create.
///
/// Envelopes from `--envelopes-file` come first, followed by the ones given
/// with `--envelope`. At least one envelope is required and both recordings
/// must be WAV or MP3 files that exist.
pub async fn build_campaign(plan: &LaunchPlan) -> Res<Campaign> {
    for path in [&plan.human_recording, &plan.machine_recording] {
        check_recording(path)?;
    }

    if plan.caller_id.trim().is_empty() {
        return Err("A caller ID is required (--caller-id)".into());
    }

    let mut specs = match &plan.envelopes_file {
        Some(path) => load_envelopes(path).await?,
        None => Vec::new(),
    };
    specs.extend(plan.envelopes.iter().cloned());

    if specs.is_empty() {
        return Err("At least one envelope is required (--envelope or --envelopes-file)".into());
    }

    Ok(Campaign {
        human_recording: VoiceTemplate::audio(&plan.human_name, &plan.human_recording),
        machine_recording: VoiceTemplate::audio(&plan.machine_name, &plan.machine_recording),
        engagement: Engagement::outbound(&plan.engagement_name),
        activity: Activity::voice(&plan.activity_name, plan.caller_id.trim()),
        envelopes: specs.into_iter().map(Envelope::from).collect(),
    })
}

/// Reads a JSON array of `{"phone-number": "+1...", "meta": {...}}` objects.
pub async fn load_envelopes(path: &Path) -> Res<Vec<EnvelopeSpec>> {
    let content = async_fs::read_to_string(path)
        .await
        .map_err(|e| format!("Cannot read {}: {}", path.display(), e))?;
    let specs: Vec<EnvelopeSpec> = serde_json::from_str(&content)
        .map_err(|e| format!("Invalid envelopes file {}: {}", path.display(), e))?;

    for spec in &specs {
        utils::validate_phone_number(&spec.phone_number)?;
    }

    Ok(specs)
}

fn check_recording(path: &Path) -> Res<()> {
    if !path.is_file() {
        return Err(format!("File {} not found.", path.display()).into());
    }

    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_default();
    if utils::mime_type(file_name).is_none() {
        return Err(format!("Only WAV or MP3 files accepted, got {}.", path.display()).into());
    }

    Ok(())
}

fn print_resources(record: &RunRecord) {
    let rows: Vec<ResourceTableRow> = record
        .resources()
        .into_iter()
        .map(|(resource, id)| ResourceTableRow {
            resource: resource.to_string(),
            id: id.to_string(),
        })
        .collect();

    if rows.is_empty() {
        return;
    }

    println!("{}\nEnvelopes: {}\n", Table::new(rows), record.envelope_count);
}
