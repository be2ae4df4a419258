use caremate_core::{
    action::{CenterAttr, DraftField, EditorAction},
    editor::{BedCount, CapacityEditor, EditorMode},
    event::UiEvent,
};

fn set_center(editor: &mut CapacityEditor, index: usize, name: &str, patients: &str, capacity: &str) {
    editor.update_field(
        DraftField::Center {
            index,
            attr: CenterAttr::Name,
        },
        name,
    );
    editor.update_field(
        DraftField::Center {
            index,
            attr: CenterAttr::PatientCount,
        },
        patients,
    );
    editor.update_field(
        DraftField::Center {
            index,
            attr: CenterAttr::MaxCapacity,
        },
        capacity,
    );
}

#[test]
fn center_count_tracks_adds_and_removes() {
    let mut editor = CapacityEditor::new();
    // A fresh editor seeds one empty row.
    assert_eq!(editor.draft.centers.len(), 1);

    editor.add_center();
    editor.add_center();
    assert_eq!(editor.draft.centers.len(), 3);

    editor.remove_center(1);
    assert_eq!(editor.draft.centers.len(), 2);

    // Emptying the list entirely is permitted.
    editor.remove_center(0);
    editor.remove_center(0);
    assert!(editor.draft.centers.is_empty());
}

#[test]
fn removal_preserves_order_of_untouched_centers() {
    let mut editor = CapacityEditor::new();
    editor.add_center();
    editor.add_center();
    for (i, name) in ["first", "second", "third"].iter().enumerate() {
        editor.update_field(
            DraftField::Center {
                index: i,
                attr: CenterAttr::Name,
            },
            name,
        );
    }

    editor.remove_center(1);

    let names: Vec<&str> = editor.draft.centers.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["first", "third"]);
}

#[test]
fn update_field_routes_scalars_and_center_attrs() {
    let mut editor = CapacityEditor::new();
    editor.update_field(DraftField::TotalBeds, "200");
    editor.update_field(DraftField::AvailableBeds, "75");
    set_center(&mut editor, 0, "OPD1", "30", "50");

    assert_eq!(editor.draft.total_beds, "200");
    assert_eq!(editor.draft.available_beds, "75");
    assert_eq!(editor.draft.centers[0].name, "OPD1");
    assert_eq!(editor.draft.centers[0].patient_count, "30");
    assert_eq!(editor.draft.centers[0].max_capacity, "50");
}

#[test]
fn submit_parses_draft_into_snapshot() {
    let mut editor = CapacityEditor::new();
    editor.update_field(DraftField::TotalBeds, "100");
    // available_beds left empty on purpose: it must come out NaN.
    set_center(&mut editor, 0, "OPD1", "30", "50");

    let events = editor.submit();

    assert_eq!(editor.mode, EditorMode::Viewing);
    let snapshot = editor.published().expect("snapshot published");
    assert_eq!(snapshot.total_beds, BedCount::Value(100));
    assert!(snapshot.available_beds.is_nan());
    assert_eq!(snapshot.centers.len(), 1);
    assert_eq!(snapshot.centers[0].name, "OPD1");
    assert_eq!(snapshot.centers[0].patient_count, BedCount::Value(30));
    assert_eq!(snapshot.centers[0].max_capacity, BedCount::Value(50));
    assert_eq!(snapshot.centers[0].available(), BedCount::Value(20));

    assert!(matches!(events[0], UiEvent::SnapshotPublished { .. }));
    assert!(matches!(
        events[1],
        UiEvent::ModeChanged {
            mode: EditorMode::Viewing
        }
    ));
}

#[test]
fn draft_survives_submit_then_edit_unchanged() {
    let mut editor = CapacityEditor::new();
    editor.update_field(DraftField::TotalBeds, "250");
    editor.update_field(DraftField::AvailableBeds, "90");
    set_center(&mut editor, 0, "Cardio OPD", "12", "40");
    let before = editor.draft.clone();

    editor.submit();
    let events = editor.request_edit();

    // The draft is not re-populated from the snapshot; it is exactly the
    // text that was there before submission.
    assert_eq!(editor.draft, before);
    assert_eq!(editor.mode, EditorMode::Editing);
    assert!(matches!(
        events[0],
        UiEvent::ModeChanged {
            mode: EditorMode::Editing
        }
    ));
}

#[test]
fn overfull_center_shows_negative_availability() {
    let mut editor = CapacityEditor::new();
    set_center(&mut editor, 0, "Emergency OPD", "80", "50");
    editor.submit();

    let snapshot = editor.published().expect("snapshot published");
    assert_eq!(snapshot.centers[0].available(), BedCount::Value(-30));
}

#[test]
fn numeric_prefixes_parse_and_junk_becomes_nan() {
    assert_eq!(BedCount::parse("30"), BedCount::Value(30));
    assert_eq!(BedCount::parse(" 42 "), BedCount::Value(42));
    assert_eq!(BedCount::parse("-7"), BedCount::Value(-7));
    assert_eq!(BedCount::parse("+5"), BedCount::Value(5));
    // A numeric prefix is enough; the tail is ignored.
    assert_eq!(BedCount::parse("12.5"), BedCount::Value(12));
    assert_eq!(BedCount::parse("30 beds"), BedCount::Value(30));
    assert!(BedCount::parse("").is_nan());
    assert!(BedCount::parse("lots").is_nan());
    assert!(BedCount::parse("+-3").is_nan());
    assert!(BedCount::parse(".5").is_nan());

    assert_eq!(BedCount::parse("abc").to_string(), "NaN");
    assert_eq!(BedCount::Value(20).to_string(), "20");
    assert!((BedCount::NotANumber - BedCount::Value(1)).is_nan());
    assert!((BedCount::Value(1) - BedCount::NotANumber).is_nan());
}

#[test]
fn nan_center_fields_surface_in_derived_availability() {
    let mut editor = CapacityEditor::new();
    set_center(&mut editor, 0, "OPD1", "thirty", "50");
    editor.submit();

    let snapshot = editor.published().expect("snapshot published");
    assert!(snapshot.centers[0].patient_count.is_nan());
    assert!(snapshot.centers[0].available().is_nan());
}

#[test]
fn reducer_dispatches_every_action() {
    let mut editor = CapacityEditor::new();
    editor.apply(EditorAction::UpdateField {
        field: DraftField::TotalBeds,
        value: "120".to_string(),
    });
    editor.apply(EditorAction::AddCenter);
    editor.apply(EditorAction::RemoveCenter { index: 1 });
    assert_eq!(editor.draft.total_beds, "120");
    assert_eq!(editor.draft.centers.len(), 1);

    let submit_events = editor.apply(EditorAction::Submit);
    assert_eq!(submit_events.len(), 2);
    assert_eq!(editor.mode, EditorMode::Viewing);

    let edit_events = editor.apply(EditorAction::RequestEdit);
    assert_eq!(edit_events.len(), 1);
    assert_eq!(editor.mode, EditorMode::Editing);
}
