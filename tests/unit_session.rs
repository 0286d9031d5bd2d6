use assert_matches::assert_matches;
use datapoint_viewer::{
    Direction, FieldPath, ParseError, SelectionPolicy, ViewerConfig, ViewerSession,
};
use serde_json::json;

mod support;
use support::{paths, sample_json};

fn uploaded() -> ViewerSession {
    let mut session = ViewerSession::new(&ViewerConfig::default());
    session
        .upload(&sample_json().to_string())
        .expect("upload sample");
    session
}

#[test]
fn upload_loads_and_clears_previous_error() {
    let mut session = ViewerSession::default();
    assert!(session.upload("not json").is_err());
    assert!(session.last_error().is_some());

    let count = session.upload(&sample_json().to_string()).expect("upload");
    assert_eq!(count, 2);
    assert_eq!(session.last_error(), None);
    assert_eq!(session.navigator().len(), 2);
}

#[test]
fn failed_upload_leaves_dataset_and_position_intact() {
    let mut session = uploaded();
    session.step(Direction::Forward);
    session.add_field(Some(FieldPath::from("extra")));

    let err = session.upload(r#"{"a": 1}"#).unwrap_err();
    assert_eq!(err, ParseError::NotAList);
    assert_eq!(
        session.last_error(),
        Some("Provided file is not in list format. Please see instructions for file format.")
    );
    assert_eq!(session.navigator().len(), 2);
    assert_eq!(session.navigator().position(), 1);
    assert_eq!(
        session.navigator().selected().iter().cloned().collect::<Vec<_>>(),
        paths(&["a", "extra"])
    );
}

#[test]
fn malformed_upload_records_a_parse_message() {
    let mut session = uploaded();
    let err = session.upload("[{").unwrap_err();
    assert_matches!(err, ParseError::InvalidJson(_));
    assert!(
        session
            .last_error()
            .is_some_and(|message| message.starts_with("failed to parse dataset as JSON"))
    );
}

#[test]
fn view_renders_selected_fields_with_inline_errors() {
    let mut session = uploaded();
    session.add_field(Some(FieldPath::from("missing.path")));
    session.add_field(None);

    let view = session.view();
    assert_eq!(view.position, 0);
    assert_eq!(view.record_count, 2);
    assert_eq!(view.progress, "Viewing Datapoint 1 out of 2");
    assert_eq!(view.selected.len(), 3);
    assert_eq!(view.selected[0].value.as_deref(), Some("x"));
    assert!(view.selected[1].error.is_some());
    assert_eq!(view.selected[2].field, FieldPath::from("b.c"));
    assert_eq!(view.selected[2].value.as_deref(), Some("y"));
    assert!(view.available_fields.is_empty());
}

#[test]
fn field_list_reports_all_and_available() {
    let session = uploaded();
    let list = session.field_list();
    assert_eq!(list.fields, paths(&["a", "b.c"]));
    assert_eq!(list.available_fields, paths(&["b.c"]));
}

#[test]
fn compare_defaults_both_sides_to_the_first_field() {
    let session = uploaded();
    let comparison = session.compare();
    assert_eq!(comparison.left_field, Some(FieldPath::from("a")));
    assert_eq!(comparison.right_field, Some(FieldPath::from("a")));
    assert!(comparison.identical);
}

#[test]
fn compare_tracks_chosen_fields_across_moves() {
    let mut session = uploaded();
    assert!(session.choose_right("b.c"));
    let comparison = session.compare();
    assert_eq!(comparison.left, "x");
    assert_eq!(comparison.right, "y");
    assert!(!comparison.identical);

    session.step(Direction::Forward);
    let comparison = session.compare();
    assert_eq!(comparison.right_field, Some(FieldPath::from("a")));
    assert_eq!(comparison.right, "z");
}

#[test]
fn choosing_an_unknown_field_falls_back() {
    let mut session = uploaded();
    assert!(!session.choose_left("nope"));
    assert_eq!(session.compare().left_field, Some(FieldPath::from("a")));
}

#[test]
fn compare_on_empty_dataset_renders_empty_strings() {
    let mut session = ViewerSession::default();
    session.upload("[]").expect("upload");
    let comparison = session.compare();
    assert_eq!(comparison.left_field, None);
    assert_eq!(comparison.left, "");
    assert_eq!(comparison.right, "");
    assert!(comparison.identical);
}

#[test]
fn session_uses_configured_selection_policy() {
    let config = ViewerConfig {
        selection_policy: SelectionPolicy::Retain,
        ..ViewerConfig::default()
    };
    let mut session = ViewerSession::new(&config);
    session
        .upload(&json!([{"a": "1", "b": "2"}, {"a": "3", "b": "4"}]).to_string())
        .expect("upload");
    session.add_field(None);
    session.seek(1);
    assert_eq!(
        session.navigator().selected().iter().cloned().collect::<Vec<_>>(),
        paths(&["a", "b"])
    );
}
