//! Job DTOs sent to the tracker API

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::job::JobStatus;

/// Create/update request body: a job entry minus its id
///
/// Absent optional fields are omitted from the JSON entirely.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobPayload {
    pub company: String,
    pub position: String,
    pub status: JobStatus,
    #[serde(with = "iso_instant")]
    pub date_applied: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remarks: Option<String>,
}

/// Widen a calendar date to the instant it starts at, in UTC
pub fn widen_date(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}

/// Parse an instant as the API may return it
///
/// Accepts RFC 3339 (`2024-01-15T00:00:00.000Z`, `+02:00` offsets) as well as
/// naive timestamps, which are read as UTC.
pub fn parse_instant(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc())
}

/// Millisecond-precision `Z` timestamps, the format browsers send
pub mod iso_instant {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer, de};

    pub const FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";

    pub fn format(dt: &DateTime<Utc>) -> String {
        dt.format(FORMAT).to_string()
    }

    pub fn serialize<S: Serializer>(dt: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format(dt))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse_instant(&raw)
            .ok_or_else(|| de::Error::custom(format!("invalid ISO-8601 instant: {raw}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload() -> JobPayload {
        JobPayload {
            company: "Acme".to_string(),
            position: "Engineer".to_string(),
            status: JobStatus::Applied,
            date_applied: widen_date(NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()),
            salary: None,
            job_url: None,
            remarks: None,
        }
    }

    #[test]
    fn test_absent_fields_are_omitted() {
        let value = serde_json::to_value(payload()).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "company": "Acme",
                "position": "Engineer",
                "status": "applied",
                "date_applied": "2024-01-15T00:00:00.000Z",
            })
        );
    }

    #[test]
    fn test_present_fields_are_sent() {
        let mut req = payload();
        req.salary = Some(4200.5);
        req.remarks = Some("referral".to_string());

        let value = serde_json::to_value(req).unwrap();
        assert_eq!(value["salary"], serde_json::json!(4200.5));
        assert_eq!(value["remarks"], "referral");
        assert!(value.get("job_url").is_none());
    }

    #[test]
    fn test_parse_instant_variants() {
        let midnight = widen_date(NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
        assert_eq!(parse_instant("2024-01-15T00:00:00.000Z"), Some(midnight));
        assert_eq!(parse_instant("2024-01-15T00:00:00"), Some(midnight));
        assert_eq!(parse_instant("2024-01-15T02:00:00+02:00"), Some(midnight));
        assert_eq!(parse_instant("15/01/2024"), None);
    }
}
