//! Per-source event builders.
//!
//! Each function maps one backend record (or one embedded sub-record) to its
//! timeline representation. Malformed embedded payloads are logged and
//! skipped here; they never abort the surrounding record.

use crate::models::{
    Appointment, EventKind, HistoryRecord, LabResultEntry, MedicationEntry, Payload, VitalsReading,
};
use crate::timeline::types::{EventId, EventMetadata, HealthEvent};

pub(super) const GENERIC_APPOINTMENT_TITLE: &str = "Appointment";
pub(super) const GENERIC_VISIT_TITLE: &str = "Clinic visit";
pub(super) const GENERIC_MEDICATION_TITLE: &str = "Medication";
pub(super) const GENERIC_DOCUMENT_TITLE: &str = "Document";
pub(super) const VITALS_TITLE: &str = "Vital signs";
pub(super) const LABS_TITLE: &str = "Lab results";

pub(super) const FALLBACK_DOCTOR: &str = "Not assigned";
pub(super) const FALLBACK_LOCATION: &str = "Not specified";
pub(super) const MISSING_NOTES_PLACEHOLDER: &str = "No notes recorded";

pub(super) const STATUS_NORMAL: &str = "normal";
pub(super) const STATUS_ABNORMAL: &str = "abnormal";

// Display thresholds only, not a clinical assessment. Strictly above either
// limit flags the reading.
const BP_SYSTOLIC_LIMIT: u32 = 140;
const BP_DIASTOLIC_LIMIT: u32 = 90;

pub(super) fn appointment_event(appointment: &Appointment) -> HealthEvent {
    let doctor = text_or(&appointment.doctor_name, FALLBACK_DOCTOR);
    let location = text_or(&appointment.location, FALLBACK_LOCATION);
    HealthEvent {
        id: EventId::Record(appointment.id),
        kind: EventKind::Appointment,
        date: appointment.appointment_date,
        title: text_or(&appointment.reason, GENERIC_APPOINTMENT_TITLE),
        description: Some(format!("{doctor}, {location}")),
        status: appointment.status.clone(),
        metadata: EventMetadata::Appointment {
            doctor,
            location,
            notes: appointment.notes.clone(),
        },
    }
}

/// Every history record yields a visit event, however sparse the row is.
pub(super) fn history_event(record: &HistoryRecord) -> HealthEvent {
    HealthEvent {
        id: EventId::Record(record.id),
        kind: EventKind::History,
        date: record.visit_date,
        title: text_or(&record.visit_reason, GENERIC_VISIT_TITLE),
        description: Some(text_or(&record.notes, MISSING_NOTES_PLACEHOLDER)),
        status: None,
        metadata: EventMetadata::History {
            diagnosis: opt_text(&record.diagnosis),
            treatment: opt_text(&record.treatment),
            prescriptions: opt_text(&record.prescriptions),
            recorded_by: opt_text(&record.recorded_by),
        },
    }
}

pub(super) fn vitals_event(record: &HistoryRecord) -> Option<HealthEvent> {
    let reading = match &record.vitals {
        Payload::Parsed(reading) => reading,
        Payload::Invalid(reason) => {
            skipped(record.id, "vitals", reason);
            return None;
        }
        Payload::Absent => return None,
    };
    Some(HealthEvent {
        id: EventId::Embedded {
            parent: record.id,
            index: 0,
        },
        kind: EventKind::Vitals,
        date: record.visit_date,
        title: VITALS_TITLE.to_string(),
        description: reading.summary(),
        status: Some(vitals_status(reading).to_string()),
        metadata: EventMetadata::Vitals {
            reading: reading.clone(),
        },
    })
}

pub(super) fn medication_events(record: &HistoryRecord) -> Vec<HealthEvent> {
    let entries = match &record.medications {
        Payload::Parsed(entries) => entries,
        Payload::Invalid(reason) => {
            skipped(record.id, "medications", reason);
            return Vec::new();
        }
        Payload::Absent => return Vec::new(),
    };
    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            // Undated prescriptions count from the visit they were recorded at.
            let start_date = entry.start_date.unwrap_or(record.visit_date);
            HealthEvent {
                id: EventId::Embedded {
                    parent: record.id,
                    index: index as u32,
                },
                kind: EventKind::Medication,
                date: start_date,
                title: text_or(&entry.name, GENERIC_MEDICATION_TITLE),
                description: medication_summary(entry),
                status: None,
                metadata: EventMetadata::Medication {
                    name: text_or(&entry.name, GENERIC_MEDICATION_TITLE),
                    dosage: opt_text(&entry.dosage),
                    frequency: opt_text(&entry.frequency),
                    start_date,
                    end_date: entry.end_date,
                    instructions: opt_text(&entry.instructions),
                },
            }
        })
        .collect()
}

/// One event per record, covering the whole panel of results.
pub(super) fn labs_event(record: &HistoryRecord) -> Option<HealthEvent> {
    let results = match &record.lab_results {
        Payload::Parsed(results) => results,
        Payload::Invalid(reason) => {
            skipped(record.id, "labResults", reason);
            return None;
        }
        Payload::Absent => return None,
    };
    let names: Vec<&str> = results
        .iter()
        .filter_map(|entry| entry.test_name.as_deref())
        .filter(|name| !name.trim().is_empty())
        .collect();
    Some(HealthEvent {
        id: EventId::Embedded {
            parent: record.id,
            index: 0,
        },
        kind: EventKind::Labs,
        date: record.visit_date,
        title: LABS_TITLE.to_string(),
        description: (!names.is_empty()).then(|| names.join(", ")),
        status: Some(labs_status(results).to_string()),
        metadata: EventMetadata::Labs {
            results: results.clone(),
        },
    })
}

pub(super) fn document_events(record: &HistoryRecord) -> Vec<HealthEvent> {
    let entries = match &record.documents {
        Payload::Parsed(entries) => entries,
        Payload::Invalid(reason) => {
            skipped(record.id, "documents", reason);
            return Vec::new();
        }
        Payload::Absent => return Vec::new(),
    };
    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| HealthEvent {
            id: EventId::Embedded {
                parent: record.id,
                index: index as u32,
            },
            kind: EventKind::Document,
            date: entry.date.unwrap_or(record.visit_date),
            title: text_or(&entry.name, GENERIC_DOCUMENT_TITLE),
            description: opt_text(&entry.doc_type),
            status: None,
            metadata: EventMetadata::Document {
                name: text_or(&entry.name, GENERIC_DOCUMENT_TITLE),
                doc_type: opt_text(&entry.doc_type),
                url: opt_text(&entry.url),
            },
        })
        .collect()
}

// ── status heuristics ─────────────────────────────────────────────────────

fn vitals_status(reading: &VitalsReading) -> &'static str {
    let elevated = reading
        .blood_pressure
        .as_deref()
        .and_then(parse_blood_pressure)
        .is_some_and(|(systolic, diastolic)| {
            systolic > BP_SYSTOLIC_LIMIT || diastolic > BP_DIASTOLIC_LIMIT
        });
    if elevated {
        STATUS_ABNORMAL
    } else {
        STATUS_NORMAL
    }
}

/// `"118/76"` style readings. Anything else (missing slash, non-numeric
/// halves) is unreadable and treated as unremarkable.
fn parse_blood_pressure(raw: &str) -> Option<(u32, u32)> {
    let (systolic, diastolic) = raw.split_once('/')?;
    Some((
        systolic.trim().parse().ok()?,
        diastolic.trim().parse().ok()?,
    ))
}

fn labs_status(results: &[LabResultEntry]) -> &'static str {
    let flagged = results.iter().any(|entry| {
        entry
            .value
            .as_deref()
            .is_some_and(|value| value.to_ascii_lowercase().contains(STATUS_ABNORMAL))
    });
    if flagged {
        STATUS_ABNORMAL
    } else {
        STATUS_NORMAL
    }
}

// ── helpers ───────────────────────────────────────────────────────────────

fn text_or(value: &Option<String>, fallback: &str) -> String {
    match value {
        Some(text) if !text.trim().is_empty() => text.clone(),
        _ => fallback.to_string(),
    }
}

fn opt_text(value: &Option<String>) -> Option<String> {
    value
        .as_ref()
        .filter(|text| !text.trim().is_empty())
        .cloned()
}

fn medication_summary(entry: &MedicationEntry) -> Option<String> {
    let parts: Vec<&str> = [entry.dosage.as_deref(), entry.frequency.as_deref()]
        .into_iter()
        .flatten()
        .filter(|text| !text.trim().is_empty())
        .collect();
    (!parts.is_empty()).then(|| parts.join(", "))
}

fn skipped(record_id: i64, field: &str, reason: &str) {
    tracing::warn!(
        record = record_id,
        field = field,
        error = reason,
        "Skipping malformed embedded payload"
    );
}
