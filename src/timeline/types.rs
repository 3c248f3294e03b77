use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::models::{EventKind, LabResultEntry, VitalsReading};

/// A single entry on the unified patient timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthEvent {
    pub id: EventId,
    pub kind: EventKind,
    pub date: NaiveDateTime,
    pub title: String,
    pub description: Option<String>,
    pub status: Option<String>,
    pub metadata: EventMetadata,
}

impl HealthEvent {
    /// Identity for selection lookups. Ids are only unique within a kind,
    /// so the key pairs both.
    pub fn key(&self) -> EventKey {
        EventKey {
            kind: self.kind,
            id: self.id,
        }
    }

    pub fn status_tone(&self) -> Option<StatusTone> {
        self.status.as_deref().map(StatusTone::for_status)
    }
}

/// Where an event came from.
///
/// Top-level rows keep their backend id; events lifted out of an embedded
/// collection name the owning history record plus their position in it, so
/// derived events can never collide with record ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EventId {
    /// Backend row id of an appointment or history record.
    Record(i64),
    /// Entry `index` of an embedded collection on history record `parent`.
    Embedded { parent: i64, index: u32 },
}

/// Compound lookup key: `(kind, id)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventKey {
    pub kind: EventKind,
    pub id: EventId,
}

/// Kind-specific detail carried by each event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum EventMetadata {
    Appointment {
        doctor: String,
        location: String,
        notes: Option<String>,
    },
    History {
        diagnosis: Option<String>,
        treatment: Option<String>,
        prescriptions: Option<String>,
        recorded_by: Option<String>,
    },
    Vitals {
        reading: VitalsReading,
    },
    Medication {
        name: String,
        dosage: Option<String>,
        frequency: Option<String>,
        start_date: NaiveDateTime,
        end_date: Option<NaiveDateTime>,
        instructions: Option<String>,
    },
    Labs {
        results: Vec<LabResultEntry>,
    },
    Document {
        name: String,
        doc_type: Option<String>,
        url: Option<String>,
    },
}

/// Presentation bucket derived from an event's free-text status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusTone {
    Positive,
    Caution,
    Negative,
    Neutral,
}

impl StatusTone {
    /// Statuses outside the known vocabulary render as [`StatusTone::Neutral`].
    pub fn for_status(status: &str) -> Self {
        match status.trim().to_ascii_lowercase().as_str() {
            "confirmed" | "completed" | "normal" | "active" => StatusTone::Positive,
            "pending" | "scheduled" | "rescheduled" => StatusTone::Caution,
            "cancelled" | "canceled" | "no-show" | "abnormal" => StatusTone::Negative,
            _ => StatusTone::Neutral,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StatusTone::Positive => "positive",
            StatusTone::Caution => "caution",
            StatusTone::Negative => "negative",
            StatusTone::Neutral => "neutral",
        }
    }
}
