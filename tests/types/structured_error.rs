use std::error::Error;

use error_trail::codes::{self, MISSING_CODE};
use error_trail::trace::TraceConfig;
use error_trail::{wrap, Field, StructuredError, Value};

fn keys(err: &StructuredError) -> Vec<&str> {
    err.fields().iter().map(Field::key).collect()
}

#[test]
fn new_keeps_fields_in_given_order() {
    let err = StructuredError::new(
        "boom",
        [Field::new("a", 1), Field::new("b", 2), Field::new("c", 3)],
    );

    assert_eq!(err.message(), "boom");
    assert_eq!(keys(&err), ["a", "b", "c"]);
}

#[test]
fn new_does_not_deduplicate() {
    let err = StructuredError::new("boom", [Field::new("a", 1), Field::new("A", 2)]);
    assert_eq!(err.fields().len(), 2);
}

#[test]
fn new_without_fields() {
    let err = StructuredError::new("empty", []);
    assert!(err.fields().is_empty());
    assert!(err.source().is_none());
}

#[test]
fn new_captures_call_site() {
    let err = StructuredError::new("boom", []);
    assert!(err.trace().contains("new_captures_call_site()"), "trace: {}", err.trace());
}

#[test]
fn with_config_outside_namespace_has_empty_trace() {
    let config = TraceConfig::default().namespace("no_frame_lives_here");
    let err = StructuredError::with_config(&config, "boom", [Field::new("k", 1)]);

    assert_eq!(err.trace(), "");
    assert_eq!(err.message(), "boom");
    assert_eq!(err.fields().len(), 1);
}

#[test]
fn merge_replaces_in_place() {
    let mut err = StructuredError::new(
        "boom",
        [Field::new("a", 1), Field::new("b", 2), Field::new("c", 3)],
    );
    err.merge([Field::new("B", 20)]);

    assert_eq!(err.fields().len(), 3);
    assert_eq!(keys(&err), ["a", "b", "c"]);
    assert_eq!(err.fields()[1].value(), &Value::Int(20));
}

#[test]
fn merge_appends_new_keys_in_order() {
    let mut err = StructuredError::new("boom", [Field::new("a", 1)]);
    err.merge([Field::new("z", 26), Field::new("m", 13)]);

    assert_eq!(keys(&err), ["a", "z", "m"]);
}

#[test]
fn normalized_keys_collide() {
    let mut err = StructuredError::new("boom", [Field::new("USER_ID", 1)]);
    err.merge([Field::new("userid", 2)]).merge([Field::new("User-Id", 3)]);

    assert_eq!(err.fields().len(), 1);
    assert_eq!(err.fields()[0].key(), "USER_ID");
    assert_eq!(err.fields()[0].value(), &Value::Int(3));
}

#[test]
fn merge_keeps_trace() {
    let mut err = StructuredError::new("boom", []);
    let trace = err.trace().to_string();
    err.merge([Field::new("extra", true)]);

    assert_eq!(err.trace(), trace);
}

#[test]
fn with_fields_is_builder_merge() {
    let err = StructuredError::new("boom", [Field::new("a", "x")]).with_fields([Field::new("A", "y")]);

    assert_eq!(err.fields().len(), 1);
    assert_eq!(err.fields()[0].to_string(), "a=y");
}

#[test]
fn set_code_twice_leaves_one_field() {
    let mut err = StructuredError::new("boom", [Field::new("first", 1)]);

    assert!(err.set_code(404));
    assert!(err.set_code(500));

    assert_eq!(err.get_code(), 500);
    assert_eq!(err.fields().len(), 2);
    assert_eq!(err.fields()[1].key(), "code");
}

#[test]
fn get_code_is_minus_one_when_absent() {
    let err = StructuredError::new("boom", []);

    assert_eq!(err.get_code(), MISSING_CODE);
    assert_eq!(err.get_code(), -1);
    assert_eq!(err.code(), None);
}

#[test]
fn non_integer_code_counts_as_absent() {
    let err = StructuredError::new("boom", [Field::new("code", "teapot")]);
    assert_eq!(err.get_code(), -1);

    let err = StructuredError::new("boom", [Field::new("Code", 503_u64)]);
    assert_eq!(err.get_code(), 503);
}

#[test]
fn rewrapping_overrides_code() {
    let err = StructuredError::new("boom", [codes::code(200)]);
    let err = wrap(Some(err), [codes::code(500)]).unwrap();

    assert_eq!(err.get_code(), 500);
    assert_eq!(err.fields().len(), 1);
}

#[test]
fn rewrapping_keeps_first_key_spelling() {
    let err = StructuredError::new("boom", [Field::new("a", "x")]);
    let err = wrap(Some(err), [Field::new("A", "y")]).unwrap();

    assert_eq!(err.fields().len(), 1);
    assert_eq!(err.fields()[0].key(), "a");
    assert_eq!(err.fields()[0].value(), &Value::String("y".into()));
}

#[test]
fn get_message_pairs_message_and_trace() {
    let err = StructuredError::new("boom", []);
    let message = err.get_message();

    assert_eq!(message.message, "boom");
    assert_eq!(message.trace, err.trace());
}

#[test]
fn display_prints_message_and_alternate_prints_details() {
    let err = StructuredError::with_config(
        &TraceConfig::default().namespace("nothing_matches_this"),
        "disk full",
        [Field::new("path", "/var"), codes::SERVICE_UNAVAILABLE],
    );

    assert_eq!(err.to_string(), "disk full");
    assert_eq!(format!("{err:#}"), "Error: disk full\nFields:\n  - path=/var\n  - code=503");
    assert!(!format!("{err:#}").ends_with('\n'));
}

#[test]
fn clone_is_independent() {
    let original = StructuredError::new("boom", [Field::new("a", 1)]);
    let mut copy = original.clone();
    copy.merge([Field::new("a", 2)]);

    assert_eq!(original.fields()[0].value(), &Value::Int(1));
    assert_eq!(copy.fields()[0].value(), &Value::Int(2));
}

#[test]
fn into_parts_returns_message_and_fields() {
    let err = StructuredError::new("boom", [Field::new("a", 1)]);
    let (message, fields) = err.into_parts();

    assert_eq!(message.message, "boom");
    assert_eq!(fields.len(), 1);
}
