use chrono::NaiveDateTime;
use serde::Deserialize;

use super::dates;

/// One scheduled or past appointment, as served by
/// `GET /patients/{id}/appointments`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: i64,
    pub patient_id: i64,
    #[serde(deserialize_with = "dates::de_datetime")]
    pub appointment_date: NaiveDateTime,
    #[serde(default)]
    pub status: Option<String>,
    /// Visit purpose. Older rows call this field `type`.
    #[serde(default, alias = "type")]
    pub reason: Option<String>,
    #[serde(default)]
    pub doctor_name: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}
