use chrono::{DateTime, Local, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Minutes recorded for every completed focus session
pub const SESSION_MINUTES: u32 = 25;

/// Record of one completed focus interval
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FocusSession {
    /// Task text at the time the session completed
    pub task: String,
    /// Nominal duration in minutes
    pub duration: u32,
    /// ISO-8601 UTC timestamp, e.g. "2024-03-01T09:30:00.000Z"
    pub timestamp: String,
    pub completed: bool,
}

impl FocusSession {
    /// Build the record emitted when a countdown expires
    pub fn completed_at(task: String, now: DateTime<Utc>) -> Self {
        Self {
            task,
            duration: SESSION_MINUTES,
            timestamp: now.to_rfc3339_opts(SecondsFormat::Millis, true),
            completed: true,
        }
    }

    /// Calendar day portion of the timestamp ("YYYY-MM-DD")
    pub fn date_key(&self) -> &str {
        self.timestamp
            .split_once('T')
            .map(|(date, _)| date)
            .unwrap_or(&self.timestamp)
    }

    /// Timestamp converted to local time, if it parses
    pub fn local_time(&self) -> Option<DateTime<Local>> {
        DateTime::parse_from_rfc3339(&self.timestamp)
            .ok()
            .map(|dt| dt.with_timezone(&Local))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_completed_at() {
        let now = Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap();
        let session = FocusSession::completed_at("Write report".to_string(), now);

        assert_eq!(session.task, "Write report");
        assert_eq!(session.duration, 25);
        assert!(session.completed);
        assert_eq!(session.timestamp, "2024-03-01T09:30:00.000Z");
        assert_eq!(session.date_key(), "2024-03-01");
    }

    #[test]
    fn test_date_key_without_time() {
        let session = FocusSession {
            task: "x".to_string(),
            duration: 25,
            timestamp: "2024-03-01".to_string(),
            completed: true,
        };
        assert_eq!(session.date_key(), "2024-03-01");
        assert!(session.local_time().is_none());
    }

    #[test]
    fn test_json_field_names() {
        let json = r#"{"task":"Read","duration":25,"timestamp":"2024-03-01T09:30:00.000Z","completed":true}"#;
        let session: FocusSession = serde_json::from_str(json).unwrap();
        assert_eq!(session.task, "Read");
        assert!(session.local_time().is_some());
        assert_eq!(serde_json::to_string(&session).unwrap(), json);
    }
}
