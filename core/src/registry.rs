//! Bed-finder registry: the fixed hospital list, the synthetic feed
//! target, and the selection + booking flow.
//!
//! RULES:
//!   - Record membership and ids are fixed at construction. Only
//!     beds_available mutates: by a feed tick or a booking decrement.
//!   - A feed tick clamps beds_available at 0. A booking decrement does
//!     not re-check the floor; booking a 0-bed hospital yields -1.

use crate::{
    action::{ContactField, RegistryAction},
    event::UiEvent,
    rng::FeedRng,
    types::{HospitalId, Tick},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HospitalRecord {
    pub id: HospitalId,
    pub name: String,
    pub beds_available: i64,
    pub lat: f64,
    pub lng: f64,
    pub specialties: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub contact: String,
}

/// Transient booking-dialog state. Cleared only by a successful booking;
/// a dismissed dialog leaves it as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionState {
    pub selected: Option<HospitalId>,
    pub contact: ContactForm,
}

#[derive(Debug, Clone)]
pub struct BedRegistry {
    records: Vec<HospitalRecord>,
    selection: SelectionState,
}

impl BedRegistry {
    /// Build the registry from the fixed seed set.
    pub fn seeded() -> Self {
        let registry = Self::with_records(seed_hospitals());
        log::info!(
            "registry: seeded {} hospitals",
            registry.records.len()
        );
        registry
    }

    /// Build a registry over a caller-supplied record set. Tests and
    /// tooling use this; the application entry point is seeded().
    pub fn with_records(records: Vec<HospitalRecord>) -> Self {
        Self {
            records,
            selection: SelectionState::default(),
        }
    }

    /// The full record list, in seed order. There is no search or
    /// filter; renderers always show everything.
    pub fn records(&self) -> &[HospitalRecord] {
        &self.records
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    /// Reducer entry point for the user-initiated operations.
    pub fn apply(&mut self, action: RegistryAction, tick: Tick) -> Vec<UiEvent> {
        match action {
            RegistryAction::Select { hospital_id } => self.select(hospital_id),
            RegistryAction::UpdateContactField { field, value } => {
                self.update_contact_field(field, &value);
                vec![]
            }
            RegistryAction::ConfirmBooking => self.confirm_booking(tick),
        }
    }

    /// Point the transient selection at a record. Stored by id only,
    /// a weak reference the feed can move beds under. Never mutates the
    /// record list.
    pub fn select(&mut self, id: HospitalId) -> Vec<UiEvent> {
        self.selection.selected = Some(id);
        log::debug!("registry: hospital {id} selected");
        vec![UiEvent::HospitalSelected { hospital_id: id }]
    }

    pub fn update_contact_field(&mut self, field: ContactField, value: &str) {
        match field {
            ContactField::Name => self.selection.contact.name = value.to_string(),
            ContactField::Contact => self.selection.contact.contact = value.to_string(),
        }
    }

    /// Book one bed at the selected hospital.
    ///
    /// Requires a selection that still resolves and both contact fields
    /// non-empty; otherwise the booking is rejected with a notice and
    /// nothing changes. The bed count is read at confirmation time, not
    /// selection time; a feed tick in between moves the count and the
    /// decrement proceeds against the current value regardless.
    pub fn confirm_booking(&mut self, tick: Tick) -> Vec<UiEvent> {
        let complete = !self.selection.contact.name.is_empty()
            && !self.selection.contact.contact.is_empty();
        let position = self
            .selection
            .selected
            .and_then(|id| self.records.iter().position(|r| r.id == id));

        let Some(index) = position.filter(|_| complete) else {
            log::warn!("tick={tick} registry: booking rejected, incomplete details");
            return vec![UiEvent::BookingRejected {
                tick,
                reason: "Please fill in all booking details".to_string(),
            }];
        };

        let record = &mut self.records[index];
        record.beds_available -= 1;
        log::info!(
            "tick={tick} registry: booked 1 bed at {} ({} left)",
            record.name,
            record.beds_available
        );

        let event = UiEvent::BookingConfirmed {
            tick,
            hospital_id: record.id,
            hospital: record.name.clone(),
            patient: self.selection.contact.name.clone(),
        };
        self.selection = SelectionState::default();
        vec![event]
    }

    /// One synthetic feed step: pick one record uniformly at random and
    /// move its bed count by a uniform delta in [-max_delta, max_delta],
    /// floored at 0. Exactly one record is touched per call.
    pub fn tick(&mut self, tick: Tick, max_delta: i64, rng: &mut FeedRng) -> Vec<UiEvent> {
        let index = rng.next_u64_below(self.records.len() as u64) as usize;
        let delta = rng.signed_delta(max_delta);
        let record = &mut self.records[index];
        record.beds_available = (record.beds_available + delta).max(0);
        log::debug!(
            "tick={tick} registry: {} beds {delta:+} -> {}",
            record.name,
            record.beds_available
        );
        vec![UiEvent::BedsPerturbed {
            tick,
            hospital_id: record.id,
            delta,
            beds_available: record.beds_available,
        }]
    }
}

/// The fixed seed set. Ids are stable and the list never grows or
/// shrinks at runtime.
fn seed_hospitals() -> Vec<HospitalRecord> {
    [
        (
            1,
            "All India Institute of Medical Sciences (AIIMS)",
            2500,
            28.5672,
            77.2100,
            ["General Medicine", "Cardiology", "Neurology"],
        ),
        (
            2,
            "Safdarjung Hospital",
            1800,
            28.5677,
            77.2042,
            ["Orthopedics", "Gynecology", "Pediatrics"],
        ),
        (
            3,
            "Lok Nayak Hospital",
            2000,
            28.6389,
            77.2403,
            ["Emergency Medicine", "Surgery", "Pulmonology"],
        ),
        (
            4,
            "Ram Manohar Lohia Hospital",
            1500,
            28.6260,
            77.2006,
            ["Oncology", "Nephrology", "Gastroenterology"],
        ),
        (
            5,
            "GTB Hospital",
            1700,
            28.6857,
            77.3124,
            ["Trauma Care", "Burns", "Plastic Surgery"],
        ),
        (
            6,
            "Lady Hardinge Medical College",
            1200,
            28.6334,
            77.2142,
            ["Obstetrics", "Neonatology", "Pediatric Surgery"],
        ),
        (
            7,
            "Apollo Hospital",
            700,
            28.5616,
            77.2827,
            ["Cardiology", "Neurosurgery", "Robotic Surgery"],
        ),
        (
            8,
            "Max Super Speciality Hospital",
            600,
            28.5731,
            77.2750,
            ["Oncology", "Orthopedics", "Bariatric Surgery"],
        ),
    ]
    .into_iter()
    .map(|(id, name, beds_available, lat, lng, specialties)| HospitalRecord {
        id,
        name: name.to_string(),
        beds_available,
        lat,
        lng,
        specialties: specialties.iter().map(|s| s.to_string()).collect(),
    })
    .collect()
}
