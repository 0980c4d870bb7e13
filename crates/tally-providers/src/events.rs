use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;
use thiserror::Error;
use tokio::fs;
use tracing::warn;

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("failed to read event log: {0}")]
    Io(#[from] std::io::Error),
}

/// One parsed log entry, bucketed to its UTC day.
#[derive(Clone, Debug, PartialEq)]
pub struct Event {
    pub day: NaiveDate,
    pub kind: String,
    pub user: String,
}

#[derive(Deserialize)]
struct RawEvent {
    timestamp: String,
    kind: String,
    user: String,
}

/// Reads an NDJSON event log. Lines that fail to parse (bad JSON or a
/// timestamp that is not RFC 3339) are skipped with a warning rather than
/// failing the whole load.
pub async fn read_events(path: &str) -> Result<Vec<Event>, ProviderError> {
    let contents = fs::read_to_string(path).await?;
    Ok(parse_events(&contents))
}

pub fn parse_events(contents: &str) -> Vec<Event> {
    let mut events = Vec::new();
    for (lineNo, line) in contents.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        match parse_line(line) {
            Ok(event) => events.push(event),
            Err(e) => warn!("skipping event log line {}: {e}", lineNo + 1),
        }
    }
    events
}

fn parse_line(line: &str) -> Result<Event, String> {
    let raw: RawEvent = serde_json::from_str(line).map_err(|e| format!("bad JSON: {e}"))?;
    let timestamp = DateTime::parse_from_rfc3339(&raw.timestamp)
        .map_err(|e| format!("bad timestamp {:?}: {e}", raw.timestamp))?;
    Ok(Event {
        day: timestamp.with_timezone(&Utc).date_naive(),
        kind: raw.kind,
        user: raw.user,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn parses_well_formed_lines_and_skips_bad_ones() {
        let contents = concat!(
            r#"{"timestamp":"2025-03-01T10:00:00Z","kind":"click","user":"ada"}"#,
            "\n",
            "not json\n",
            r#"{"timestamp":"yesterday","kind":"click","user":"ada"}"#,
            "\n",
            "\n",
            r#"{"timestamp":"2025-03-01T23:59:00+02:00","kind":"view","user":"bob"}"#,
            "\n",
        );

        let events = parse_events(contents);
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].kind, "click");
        assert_eq!(events[0].day, NaiveDate::from_ymd_opt(2025, 3, 1).unwrap());
        // +02:00 offset normalizes back into March 1 UTC
        assert_eq!(events[1].day, NaiveDate::from_ymd_opt(2025, 3, 1).unwrap());
    }

    #[tokio::test]
    async fn reads_events_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"{{"timestamp":"2025-03-02T08:30:00Z","kind":"signup","user":"cat"}}"#
        )
        .unwrap();

        let events = read_events(file.path().to_str().unwrap()).await.unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].user, "cat");
    }

    #[tokio::test]
    async fn missing_file_is_an_io_error() {
        let result = read_events("/nonexistent/events.ndjson").await;
        assert!(matches!(result, Err(ProviderError::Io(_))));
    }
}
