//! The event stream: everything the rendering layer hears about.
//!
//! RULE: Every state-changing operation returns the events it emitted.
//! The core never pushes; callers (a view layer, the runner, tests)
//! decide what to render, log, or drop.

use crate::editor::{EditorMode, Snapshot};
use crate::types::{HospitalId, Tick};
use serde::{Deserialize, Serialize};

/// Every event emitted by the two view cores.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum UiEvent {
    // ── Capacity-editor events ─────────────────────
    SnapshotPublished {
        snapshot: Snapshot,
    },
    ModeChanged {
        mode: EditorMode,
    },

    // ── Bed-finder registry events ─────────────────
    BedsPerturbed {
        tick: Tick,
        hospital_id: HospitalId,
        delta: i64,
        beds_available: i64,
    },
    HospitalSelected {
        hospital_id: HospitalId,
    },
    BookingConfirmed {
        tick: Tick,
        hospital_id: HospitalId,
        hospital: String,
        patient: String,
    },
    BookingRejected {
        tick: Tick,
        reason: String,
    },
}

impl UiEvent {
    /// User-visible text for notice-type events. Booking outcomes are
    /// the only events a user is told about directly; everything else
    /// shows up through re-rendered state.
    pub fn notice(&self) -> Option<String> {
        match self {
            Self::BookingConfirmed {
                hospital, patient, ..
            } => Some(format!("Booking confirmed at {hospital} for {patient}")),
            Self::BookingRejected { reason, .. } => Some(reason.clone()),
            _ => None,
        }
    }
}
