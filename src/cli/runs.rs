use tabled::Table;

use crate::{
    error, info,
    management::RunManager,
    types::{RunRecord, RunTableRow},
};

pub async fn runs(last: Option<usize>, engagement: Option<String>) {
    let records = match RunManager::new().load_all().await {
        Ok(records) => records,
        Err(e) => error!("Failed to load run records: {}", e),
    };

    let rows = select(records, last, engagement.as_deref());
    if rows.is_empty() {
        info!("No runs recorded yet.");
        return;
    }

    println!("{}", Table::new(rows));
}

/// Filters by engagement, keeps the `last` most recent records and turns
/// them into table rows, oldest first.
pub(crate) fn select(
    records: Vec<RunRecord>,
    last: Option<usize>,
    engagement: Option<&str>,
) -> Vec<RunTableRow> {
    let mut records: Vec<RunRecord> = records
        .into_iter()
        .filter(|r| engagement.is_none() || r.engagement_id.as_deref() == engagement)
        .collect();

    if let Some(last) = last {
        let skip = records.len().saturating_sub(last);
        records.drain(..skip);
    }

    records
        .into_iter()
        .map(|r| RunTableRow {
            started: r.started_at,
            engagement: r.engagement_id.unwrap_or_else(|| "-".to_string()),
            envelopes: r.envelope_count,
            status: r.status.to_string(),
            error: r.error.unwrap_or_default(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, engagement: Option<&str>) -> RunRecord {
        RunRecord {
            id: id.to_string(),
            started_at: id.to_string(),
            engagement_id: engagement.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn test_select_keeps_most_recent() {
        let records = vec![
            record("1", Some("a")),
            record("2", Some("b")),
            record("3", None),
        ];

        let rows = select(records, Some(2), None);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].started, "2");
        assert_eq!(rows[1].started, "3");
        assert_eq!(rows[1].engagement, "-");
    }

    #[test]
    fn test_select_by_engagement() {
        let records = vec![record("1", Some("a")), record("2", Some("b"))];

        let rows = select(records, None, Some("b"));
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].engagement, "b");
    }
}
