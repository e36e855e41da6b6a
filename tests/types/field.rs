use std::io;

use error_trail::{Field, Value};

#[test]
fn typed_constructors() {
    assert_eq!(Field::string("s", "text").value(), &Value::String("text".into()));
    assert_eq!(Field::int("i", -3).value(), &Value::Int(-3));
    assert_eq!(Field::uint("u", 3).value(), &Value::Uint(3));
    assert_eq!(Field::bool("b", true).value(), &Value::Bool(true));
    assert_eq!(Field::float("f", 0.5).value(), &Value::Float(0.5));
    assert_eq!(Field::bytes("raw", vec![1_u8, 2]).value(), &Value::Bytes(vec![1, 2]));
}

#[test]
fn error_field_records_message() {
    let cause = io::Error::new(io::ErrorKind::NotFound, "missing file");
    let field = Field::error("cause", &cause);

    assert_eq!(field.value(), &Value::Error("missing file".into()));
    assert_eq!(field.value().type_name(), "error");
}

#[test]
fn debug_field_uses_debug_output() {
    let field = Field::debug("ids", &[1, 2, 3]);
    assert_eq!(field.to_string(), "ids=[1, 2, 3]");
}

#[test]
fn tuple_conversion() {
    let field: Field = ("attempt", 2_u8).into();
    assert_eq!(field.key(), "attempt");
    assert_eq!(field.value(), &Value::Uint(2));
}

#[test]
fn matches_uses_normalized_keys() {
    let field = Field::new("request_id", "r-1");
    assert!(field.matches("RequestId"));
    assert!(field.matches("request-id"));
    assert!(!field.matches("request"));
}

#[test]
fn into_parts_hands_back_key_and_value() {
    let (key, value) = Field::new("k", false).into_parts();
    assert_eq!(key, "k");
    assert_eq!(value, Value::Bool(false));
}

#[test]
fn value_integer_view() {
    assert_eq!(Value::Int(-1).as_i64(), Some(-1));
    assert_eq!(Value::Uint(7).as_i64(), Some(7));
    assert_eq!(Value::Uint(u64::MAX).as_i64(), None);
    assert_eq!(Value::Float(1.0).as_i64(), None);
    assert_eq!(Value::from("7").as_i64(), None);
}

#[test]
fn bytes_display_lossy() {
    assert_eq!(Value::Bytes(b"ok".to_vec()).to_string(), "ok");
    assert_eq!(Value::Bytes(vec![0xff]).to_string(), "\u{fffd}");
}
