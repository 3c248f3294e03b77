//! Careline: the data core of a clinic-management app's patient timeline.
//!
//! Two independently fetched backend collections (appointments, and visit
//! history with embedded vitals/medications/labs/documents that may arrive
//! JSON-encoded) are normalized into one flat, newest-first list of
//! [`HealthEvent`]s, filterable by kind and queryable for a selected detail
//! entry.
//!
//! Data flows one way: fetch (`client`), typed models (`models`), assembly
//! (`timeline`), state (`view`). The only state kept anywhere is the view's
//! input snapshots, kind filter and selection; every input change rebuilds
//! the event list from scratch.

pub mod client;
pub mod config;
pub mod models;
pub mod prefs;
pub mod timeline;
pub mod view;

pub use client::{ClientConfig, FetchError, PatientRecords, RecordsClient};
pub use models::{Appointment, EventKind, HistoryRecord, Theme};
pub use prefs::Preferences;
pub use timeline::{
    build_timeline, filter_by_kind, select_event, EventId, EventKey, EventMetadata, HealthEvent,
    StatusTone,
};
pub use view::TimelineView;
