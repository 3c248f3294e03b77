use chrono::NaiveDateTime;
use serde::de::Deserializer;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::dates;
use super::payload::Payload;

/// One patient-history row from `GET /patients/{id}/history`.
///
/// The four embedded collections arrive either as native JSON or as
/// JSON-encoded strings; [`Payload`] settles that at the boundary.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryRecord {
    pub id: i64,
    pub patient_id: i64,
    #[serde(deserialize_with = "dates::de_datetime")]
    pub visit_date: NaiveDateTime,
    #[serde(default)]
    pub visit_reason: Option<String>,
    #[serde(default)]
    pub diagnosis: Option<String>,
    #[serde(default)]
    pub treatment: Option<String>,
    #[serde(default)]
    pub prescriptions: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub recorded_by: Option<String>,
    #[serde(default)]
    pub vitals: Payload<VitalsReading>,
    #[serde(default)]
    pub medications: Payload<Vec<MedicationEntry>>,
    #[serde(default)]
    pub lab_results: Payload<Vec<LabResultEntry>>,
    #[serde(default)]
    pub documents: Payload<Vec<DocumentEntry>>,
}

/// Vitals captured during a visit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VitalsReading {
    /// `systolic/diastolic`, e.g. `"118/76"`.
    #[serde(default)]
    pub blood_pressure: Option<String>,
    #[serde(default)]
    pub heart_rate: Option<f64>,
    #[serde(default)]
    pub temperature: Option<f64>,
    #[serde(default)]
    pub respiratory_rate: Option<f64>,
    #[serde(default)]
    pub oxygen_saturation: Option<f64>,
    #[serde(default)]
    pub weight: Option<f64>,
    #[serde(default)]
    pub height: Option<f64>,
}

impl VitalsReading {
    /// Short human-readable line, e.g. `"BP 118/76, HR 72, Temp 36.8"`.
    /// `None` when the reading carries no displayable measurement.
    pub fn summary(&self) -> Option<String> {
        let mut parts = Vec::new();
        if let Some(bp) = &self.blood_pressure {
            parts.push(format!("BP {bp}"));
        }
        if let Some(hr) = self.heart_rate {
            parts.push(format!("HR {hr}"));
        }
        if let Some(temp) = self.temperature {
            parts.push(format!("Temp {temp}"));
        }
        if let Some(rr) = self.respiratory_rate {
            parts.push(format!("RR {rr}"));
        }
        if let Some(spo2) = self.oxygen_saturation {
            parts.push(format!("SpO2 {spo2}%"));
        }
        if parts.is_empty() {
            None
        } else {
            Some(parts.join(", "))
        }
    }
}

/// One medication row embedded in a history record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MedicationEntry {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, alias = "dose")]
    pub dosage: Option<String>,
    #[serde(default)]
    pub frequency: Option<String>,
    #[serde(default, deserialize_with = "dates::de_datetime_opt")]
    pub start_date: Option<NaiveDateTime>,
    #[serde(default, deserialize_with = "dates::de_datetime_opt")]
    pub end_date: Option<NaiveDateTime>,
    #[serde(default)]
    pub instructions: Option<String>,
}

/// One lab measurement embedded in a history record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabResultEntry {
    #[serde(default, alias = "test")]
    pub test_name: Option<String>,
    /// Measured value; numeric backend values are kept as their text form.
    #[serde(default, alias = "result", deserialize_with = "lenient_string")]
    pub value: Option<String>,
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default)]
    pub reference_range: Option<String>,
}

/// One attached document reference embedded in a history record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentEntry {
    #[serde(default, alias = "fileName", alias = "title")]
    pub name: Option<String>,
    #[serde(default, rename = "type")]
    pub doc_type: Option<String>,
    #[serde(default, deserialize_with = "dates::de_datetime_opt")]
    pub date: Option<NaiveDateTime>,
    #[serde(default)]
    pub url: Option<String>,
}

/// Accepts strings, numbers and booleans where a string is expected.
/// Lab values in particular drift between `"5.4"` and `5.4` across rows.
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(match raw {
        None | Some(Value::Null) => None,
        Some(Value::String(text)) => Some(text),
        Some(Value::Number(n)) => Some(n.to_string()),
        Some(Value::Bool(b)) => Some(b.to_string()),
        Some(other) => Some(other.to_string()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deserializes_row_with_string_encoded_collections() {
        let record: HistoryRecord = serde_json::from_value(json!({
            "id": 40,
            "patientId": 3,
            "visitDate": "2025-02-01T10:00:00",
            "visitReason": "Hypertension follow-up",
            "diagnosis": "Stage 1 hypertension",
            "vitals": "{\"bloodPressure\": \"150/95\", \"heartRate\": 88}",
            "medications": "[{\"name\": \"Lisinopril\", \"dosage\": \"10mg\"}]",
            "labResults": "[{\"testName\": \"HbA1c\", \"value\": 5.4, \"unit\": \"%\"}]"
        }))
        .unwrap();

        let vitals = record.vitals.as_parsed().unwrap();
        assert_eq!(vitals.blood_pressure.as_deref(), Some("150/95"));
        assert_eq!(vitals.heart_rate, Some(88.0));

        let medications = record.medications.as_parsed().unwrap();
        assert_eq!(medications[0].name.as_deref(), Some("Lisinopril"));

        let labs = record.lab_results.as_parsed().unwrap();
        assert_eq!(labs[0].value.as_deref(), Some("5.4"));
        assert!(record.documents.is_absent());
    }

    #[test]
    fn deserializes_native_collections() {
        let record: HistoryRecord = serde_json::from_value(json!({
            "id": 41,
            "patientId": 3,
            "visitDate": "2025-02-02 09:15:00",
            "documents": [
                {"fileName": "scan.pdf", "type": "imaging", "date": "2025-02-02"}
            ]
        }))
        .unwrap();
        let documents = record.documents.as_parsed().unwrap();
        assert_eq!(documents[0].name.as_deref(), Some("scan.pdf"));
        assert_eq!(documents[0].doc_type.as_deref(), Some("imaging"));
        assert!(documents[0].date.is_some());
    }

    #[test]
    fn malformed_collection_is_kept_as_invalid() {
        let record: HistoryRecord = serde_json::from_value(json!({
            "id": 42,
            "patientId": 3,
            "visitDate": "2025-02-03",
            "medications": "[{broken"
        }))
        .unwrap();
        assert!(record.medications.invalid_reason().is_some());
        // Siblings are unaffected.
        assert!(record.vitals.is_absent());
    }

    #[test]
    fn medication_accepts_dose_alias() {
        let entry: MedicationEntry =
            serde_json::from_value(json!({"name": "Metformin", "dose": "500mg"})).unwrap();
        assert_eq!(entry.dosage.as_deref(), Some("500mg"));
    }

    #[test]
    fn lab_accepts_test_and_result_aliases() {
        let entry: LabResultEntry =
            serde_json::from_value(json!({"test": "TSH", "result": 2.1})).unwrap();
        assert_eq!(entry.test_name.as_deref(), Some("TSH"));
        assert_eq!(entry.value.as_deref(), Some("2.1"));
    }

    #[test]
    fn vitals_summary_joins_present_measurements() {
        let reading = VitalsReading {
            blood_pressure: Some("118/76".into()),
            heart_rate: Some(72.0),
            temperature: Some(36.8),
            ..Default::default()
        };
        assert_eq!(
            reading.summary().as_deref(),
            Some("BP 118/76, HR 72, Temp 36.8")
        );
        assert_eq!(VitalsReading::default().summary(), None);
    }
}
