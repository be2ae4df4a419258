use crate::types::HospitalId;
use serde::{Deserialize, Serialize};

/// All operations the rendering layer can dispatch at the editor.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum EditorAction {
    UpdateField { field: DraftField, value: String },
    AddCenter,
    RemoveCenter { index: usize },
    Submit,
    RequestEdit,
}

/// Addresses one text field of the draft form: either a top-level count
/// or an attribute of the center at `index`. Center indices must be
/// valid for the list as currently rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DraftField {
    TotalBeds,
    AvailableBeds,
    Center { index: usize, attr: CenterAttr },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CenterAttr {
    Name,
    PatientCount,
    MaxCapacity,
}

/// All operations the rendering layer can dispatch at the registry.
/// The periodic feed tick is not an action; it belongs to BedFeed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum RegistryAction {
    Select { hospital_id: HospitalId },
    UpdateContactField { field: ContactField, value: String },
    ConfirmBooking,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactField {
    Name,
    Contact,
}
