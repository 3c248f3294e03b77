//! Timeline view state.
//!
//! Owns the two input snapshots, the kind filter and the current selection,
//! nothing else. Every input change rebuilds the event list from scratch;
//! there is no partial patching and no cached derivation to invalidate.

use crate::client::PatientRecords;
use crate::models::{Appointment, EventKind, HistoryRecord};
use crate::timeline::{build_timeline, filter_by_kind, select_event, EventKey, HealthEvent};

#[derive(Debug, Clone)]
pub struct TimelineView {
    appointments: Vec<Appointment>,
    history: Vec<HistoryRecord>,
    events: Vec<HealthEvent>,
    selected_kinds: Vec<EventKind>,
    selected: Option<EventKey>,
}

impl TimelineView {
    /// Empty view with every kind visible.
    pub fn new() -> Self {
        Self {
            appointments: Vec::new(),
            history: Vec::new(),
            events: Vec::new(),
            selected_kinds: EventKind::ALL.to_vec(),
            selected: None,
        }
    }

    /// Replaces the appointment snapshot and rebuilds. Filter and selection
    /// are left alone; a selection that no longer resolves reads as `None`.
    pub fn set_appointments(&mut self, appointments: Vec<Appointment>) {
        self.appointments = appointments;
        self.rebuild();
    }

    /// Replaces the history snapshot and rebuilds.
    pub fn set_history(&mut self, history: Vec<HistoryRecord>) {
        self.history = history;
        self.rebuild();
    }

    /// Replaces both snapshots with one rebuild.
    pub fn set_records(&mut self, records: PatientRecords) {
        self.appointments = records.appointments;
        self.history = records.history;
        self.rebuild();
    }

    fn rebuild(&mut self) {
        self.events = build_timeline(&self.appointments, &self.history);
    }

    /// The full unfiltered list, newest first.
    pub fn events(&self) -> &[HealthEvent] {
        &self.events
    }

    /// The list the current kind selection allows through.
    pub fn visible_events(&self) -> Vec<HealthEvent> {
        filter_by_kind(&self.events, &self.selected_kinds)
    }

    pub fn selected_kinds(&self) -> &[EventKind] {
        &self.selected_kinds
    }

    pub fn set_selected_kinds(&mut self, kinds: Vec<EventKind>) {
        self.selected_kinds = kinds;
    }

    pub fn toggle_kind(&mut self, kind: EventKind) {
        if self.selected_kinds.contains(&kind) {
            self.selected_kinds.retain(|k| *k != kind);
        } else {
            self.selected_kinds.push(kind);
        }
    }

    pub fn select(&mut self, key: EventKey) {
        self.selected = Some(key);
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// The selected event, provided it still exists and its kind is visible.
    pub fn selected_event(&self) -> Option<&HealthEvent> {
        let key = self.selected?;
        if !self.selected_kinds.contains(&key.kind) {
            return None;
        }
        select_event(&self.events, key)
    }
}

impl Default for TimelineView {
    fn default() -> Self {
        Self::new()
    }
}
