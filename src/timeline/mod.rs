//! Unified patient timeline.
//!
//! Assembles events from both record sources (appointments, visit history
//! with its embedded vitals/medications/labs/documents) into one flat
//! `Vec<HealthEvent>`, sorted newest first. Pure functions over borrowed
//! input; callers rebuild from scratch whenever a source refreshes.

mod normalize;
mod types;

pub use types::*;

use crate::models::{Appointment, EventKind, HistoryRecord};

/// Builds the full event list from the two source collections.
///
/// Either slice may be empty (the fetches land independently); an empty
/// source simply contributes nothing. Deterministic: identical inputs give
/// element-wise identical output.
pub fn build_timeline(appointments: &[Appointment], history: &[HistoryRecord]) -> Vec<HealthEvent> {
    let mut events: Vec<HealthEvent> = Vec::new();

    events.extend(appointments.iter().map(normalize::appointment_event));
    for record in history {
        events.push(normalize::history_event(record));
        events.extend(normalize::vitals_event(record));
        events.extend(normalize::medication_events(record));
        events.extend(normalize::labs_event(record));
        events.extend(normalize::document_events(record));
    }

    // Newest first. The sort is stable, so events sharing a date keep
    // emission order: appointments, then per record history, vitals,
    // medications, labs, documents.
    events.sort_by(|a, b| b.date.cmp(&a.date));

    tracing::debug!(
        appointments = appointments.len(),
        history = history.len(),
        events = events.len(),
        "Assembled timeline"
    );
    events
}

/// Keeps events whose kind is in `selected`, preserving order.
///
/// An empty selection means nothing is visible, not everything.
pub fn filter_by_kind(events: &[HealthEvent], selected: &[EventKind]) -> Vec<HealthEvent> {
    events
        .iter()
        .filter(|event| selected.contains(&event.kind))
        .cloned()
        .collect()
}

/// Resolves a compound key against the list. `None` when the event is gone,
/// which callers render as "no selection", never as an error.
pub fn select_event(events: &[HealthEvent], key: EventKey) -> Option<&HealthEvent> {
    events.iter().find(|event| event.key() == key)
}

// ── Tests ──────────────────────────────────────────────────────────────────
