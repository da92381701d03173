use super::{FieldPath, FieldPathParseError, FieldPathSegment};
use std::str::FromStr;

#[test]
fn root_path_roundtrip() {
    let parsed = FieldPath::from_str("$").expect("must parse root");
    assert!(parsed.is_root());
    assert_eq!(parsed.to_string(), "$");
}

#[test]
fn job_field_path_roundtrip() {
    let parsed = FieldPath::from_str("$.instance_groups[0].jobs[1].name").expect("must parse");
    assert_eq!(
        parsed.segments(),
        &[
            FieldPathSegment::Key("instance_groups".to_string()),
            FieldPathSegment::Index(0),
            FieldPathSegment::Key("jobs".to_string()),
            FieldPathSegment::Index(1),
            FieldPathSegment::Key("name".to_string()),
        ]
    );
    assert_eq!(parsed.to_string(), "$.instance_groups[0].jobs[1].name");
}

#[test]
fn builder_matches_parsed_path() {
    let built = FieldPath::root()
        .key("instance_groups")
        .index(2)
        .key("vm_type");
    assert_eq!(built, "$.instance_groups[2].vm_type".parse().expect("must parse"));
}

#[test]
fn builder_leaves_parent_untouched() {
    let group = FieldPath::root().key("instance_groups").index(0);
    assert_eq!(group.key("name").to_string(), "$.instance_groups[0].name");
    assert_eq!(group.to_string(), "$.instance_groups[0]");
}

#[test]
fn missing_root_rejected() {
    let err = FieldPath::from_str("instance_groups").expect_err("must reject");
    assert_eq!(err, FieldPathParseError::MissingRoot);
}

#[test]
fn invalid_index_rejected() {
    let err = FieldPath::from_str("$.jobs[]").expect_err("must reject");
    assert_eq!(err, FieldPathParseError::InvalidIndex(6));

    let err = FieldPath::from_str("$.jobs[1").expect_err("must reject");
    assert_eq!(err, FieldPathParseError::InvalidIndex(6));
}

#[test]
fn empty_key_rejected() {
    let err = FieldPath::from_str("$.jobs.").expect_err("must reject");
    assert_eq!(err, FieldPathParseError::EmptyKey(6));
}

#[test]
fn serializes_as_string() {
    let path = FieldPath::root().key("properties");
    let value = serde_json::to_value(&path).expect("must serialize");
    assert_eq!(value, serde_json::json!("$.properties"));

    let back: FieldPath = serde_json::from_value(value).expect("must deserialize");
    assert_eq!(back, path);
}
