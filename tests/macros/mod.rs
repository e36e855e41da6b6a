use error_trail::{codes, fields, structured, Field, Value};

#[test]
fn fields_macro_builds_in_order() {
    let user = String::from("kim");
    let built = fields!["user" => &user, "age" => 31_u8, "admin" => false,];

    assert_eq!(built.len(), 3);
    assert_eq!(built[0].value(), &Value::String("kim".into()));
    assert_eq!(built[1].value(), &Value::Uint(31));
    assert_eq!(built[2].key(), "admin");
}

#[test]
fn empty_fields_macro() {
    let built: Vec<Field> = fields![];
    assert!(built.is_empty());
}

#[test]
fn structured_macro_formats_message() {
    let id = 7;
    let err = structured!("order {} not found", id);

    assert_eq!(err.message(), "order 7 not found");
    assert!(err.fields().is_empty());
}

#[test]
fn structured_macro_with_fields() {
    let id = 7;
    let err = structured!("order {id} rejected"; "order_id" => id, "code" => 409);

    assert_eq!(err.message(), "order 7 rejected");
    assert_eq!(err.get_code(), 409);
    assert_eq!(err.fields().to_string(), "order_id=7 code=409");
}

#[test]
fn structured_macro_captures_call_site() {
    let err = structured!("boom"; "k" => 1);
    assert!(err.trace().contains("structured_macro_captures_call_site()"), "trace: {}", err.trace());
}

#[test]
fn macro_fields_merge_like_any_other() {
    let mut err = structured!("boom"; "retry-count" => 1);
    err.merge(fields!["RetryCount" => 2]).merge([codes::TOO_MANY_REQUESTS]);

    assert_eq!(err.fields().to_string(), "retry-count=2 code=429");
}
