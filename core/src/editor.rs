//! Hospital-capacity editor: a draft form of raw text fields and the
//! immutable dashboard snapshot parsed out of it on submission.
//!
//! Two modes, Editing (initial) and Viewing. submit() is the only way
//! forward, request_edit() the only way back, and the draft text is
//! never round-tripped from the published snapshot.

use crate::{
    action::{CenterAttr, DraftField, EditorAction},
    event::UiEvent,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Sub;

/// Parse result of a draft count field.
///
/// Unparsable text is carried as NotANumber, propagates through
/// arithmetic, and displays as `NaN`. It is never an error: the editor
/// accepts whatever the form held and lets the display show the artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BedCount {
    Value(i64),
    NotANumber,
}

impl BedCount {
    /// Base-10 integer parse of a raw text field, lenient the way form
    /// inputs are: leading whitespace and an optional sign, then as many
    /// digits as the text offers ("12.5" parses as 12, "30 beds" as 30).
    /// No leading digits at all is NotANumber.
    pub fn parse(text: &str) -> Self {
        let trimmed = text.trim_start();
        let (negative, rest) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
        };

        let end = rest
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(rest.len());
        let digits = &rest[..end];
        if digits.is_empty() {
            return Self::NotANumber;
        }
        match digits.parse::<i64>() {
            Ok(n) => Self::Value(if negative { -n } else { n }),
            Err(_) => Self::NotANumber,
        }
    }

    pub fn is_nan(&self) -> bool {
        matches!(self, Self::NotANumber)
    }
}

impl Sub for BedCount {
    type Output = BedCount;

    fn sub(self, rhs: BedCount) -> BedCount {
        match (self, rhs) {
            (Self::Value(a), Self::Value(b)) => Self::Value(a - b),
            _ => Self::NotANumber,
        }
    }
}

impl fmt::Display for BedCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(n) => write!(f, "{n}"),
            Self::NotANumber => write!(f, "NaN"),
        }
    }
}

/// One outpatient-center row of the draft. All fields raw text until
/// submission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CenterDraft {
    pub name: String,
    pub patient_count: String,
    pub max_capacity: String,
}

/// The editable, uncommitted form state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftForm {
    pub total_beds: String,
    pub available_beds: String,
    pub centers: Vec<CenterDraft>,
}

impl Default for DraftForm {
    /// A fresh form seeds one empty center row. Nothing stops the user
    /// from removing it; an empty list is legal.
    fn default() -> Self {
        Self {
            total_beds: String::new(),
            available_beds: String::new(),
            centers: vec![CenterDraft::default()],
        }
    }
}

/// A parsed center as it appears on the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CenterSummary {
    pub name: String,
    pub patient_count: BedCount,
    pub max_capacity: BedCount,
}

impl CenterSummary {
    /// Remaining capacity. May be negative for an overfull center;
    /// displayed as-is, never clamped.
    pub fn available(&self) -> BedCount {
        self.max_capacity - self.patient_count
    }
}

/// The immutable, committed view of a draft after parsing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub total_beds: BedCount,
    pub available_beds: BedCount,
    pub centers: Vec<CenterSummary>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EditorMode {
    Editing,
    Viewing,
}

#[derive(Debug, Clone)]
pub struct CapacityEditor {
    pub mode: EditorMode,
    pub draft: DraftForm,
    published: Option<Snapshot>,
}

impl CapacityEditor {
    pub fn new() -> Self {
        Self {
            mode: EditorMode::Editing,
            draft: DraftForm::default(),
            published: None,
        }
    }

    /// The snapshot currently on display, if one has been submitted.
    pub fn published(&self) -> Option<&Snapshot> {
        self.published.as_ref()
    }

    /// Reducer entry point: run one action, return the events it emitted.
    pub fn apply(&mut self, action: EditorAction) -> Vec<UiEvent> {
        match action {
            EditorAction::UpdateField { field, value } => {
                self.update_field(field, &value);
                vec![]
            }
            EditorAction::AddCenter => {
                self.add_center();
                vec![]
            }
            EditorAction::RemoveCenter { index } => {
                self.remove_center(index);
                vec![]
            }
            EditorAction::Submit => self.submit(),
            EditorAction::RequestEdit => self.request_edit(),
        }
    }

    /// Replace one text field of the draft. Center indices must be valid
    /// for the current list; an out-of-range index is a caller bug.
    pub fn update_field(&mut self, field: DraftField, value: &str) {
        match field {
            DraftField::TotalBeds => self.draft.total_beds = value.to_string(),
            DraftField::AvailableBeds => self.draft.available_beds = value.to_string(),
            DraftField::Center { index, attr } => {
                let center = &mut self.draft.centers[index];
                match attr {
                    CenterAttr::Name => center.name = value.to_string(),
                    CenterAttr::PatientCount => center.patient_count = value.to_string(),
                    CenterAttr::MaxCapacity => center.max_capacity = value.to_string(),
                }
            }
        }
        log::debug!("editor: {field:?} updated");
    }

    /// Append an empty center row. No upper limit.
    pub fn add_center(&mut self) {
        self.draft.centers.push(CenterDraft::default());
    }

    /// Remove the center at `index`, preserving the order of the rest.
    /// Removing the last row leaves the list empty.
    pub fn remove_center(&mut self, index: usize) {
        self.draft.centers.remove(index);
    }

    /// Parse every text field and publish the result as a snapshot,
    /// switching to Viewing. Unparsable text becomes NotANumber; the
    /// operation itself cannot fail.
    pub fn submit(&mut self) -> Vec<UiEvent> {
        assert_eq!(
            self.mode,
            EditorMode::Editing,
            "submit() called outside Editing"
        );

        let snapshot = Snapshot {
            total_beds: BedCount::parse(&self.draft.total_beds),
            available_beds: BedCount::parse(&self.draft.available_beds),
            centers: self
                .draft
                .centers
                .iter()
                .map(|c| CenterSummary {
                    name: c.name.clone(),
                    patient_count: BedCount::parse(&c.patient_count),
                    max_capacity: BedCount::parse(&c.max_capacity),
                })
                .collect(),
        };

        self.published = Some(snapshot.clone());
        self.mode = EditorMode::Viewing;
        log::info!(
            "editor: snapshot published ({} centers)",
            snapshot.centers.len()
        );

        vec![
            UiEvent::SnapshotPublished { snapshot },
            UiEvent::ModeChanged { mode: self.mode },
        ]
    }

    /// Back to the form. The draft keeps whatever text it held before
    /// submission; it is not re-populated from the published snapshot.
    pub fn request_edit(&mut self) -> Vec<UiEvent> {
        assert_eq!(
            self.mode,
            EditorMode::Viewing,
            "request_edit() called outside Viewing"
        );
        self.mode = EditorMode::Editing;
        vec![UiEvent::ModeChanged { mode: self.mode }]
    }
}

impl Default for CapacityEditor {
    fn default() -> Self {
        Self::new()
    }
}
