use crate::{
    error, info,
    management::RunManager,
    omnigage::{Engagement, OmnigageClient},
    types::Credentials,
    warning, workflow,
};

pub async fn schedule(
    credentials: Credentials,
    engagement_id: String,
    name: Option<String>,
    direction: Option<String>,
) {
    let client = match OmnigageClient::new(&credentials) {
        Ok(client) => client,
        Err(e) => error!("{}", e),
    };

    let mut engagement = Engagement::existing(engagement_id.trim());
    if let Some(name) = name {
        engagement.name = name;
    }
    if let Some(direction) = direction {
        engagement.direction = direction;
    }

    if let Err(e) = workflow::schedule(&client, &mut engagement).await {
        error!("Failed to schedule engagement {}: {}", engagement_id, e);
    }

    // keep the local run record in sync, if this engagement came from a launch
    let manager = RunManager::new();
    match manager.find_by_engagement(engagement_id.trim()).await {
        Ok(Some(mut record)) => {
            record.mark_scheduled();
            match manager.persist(&record).await {
                Ok(_) => info!("Run record {} marked as scheduled.", record.id),
                Err(e) => warning!("Failed to update run record {}: {}", record.id, e),
            }
        }
        Ok(None) => {}
        Err(e) => warning!("Failed to load run records: {}", e),
    }
}
