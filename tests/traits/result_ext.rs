use std::io;

use error_trail::trace::SEPARATOR;
use error_trail::traits::ResultExt;
use error_trail::{codes, Field, StructuredError, Value};

fn read_config() -> Result<String, io::Error> {
    Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied"))
}

fn load() -> Result<String, StructuredError> {
    read_config().wrap_err([Field::new("path", "/etc/app.toml")])
}

fn startup() -> Result<String, StructuredError> {
    load().wrap_err([Field::new("phase", "startup"), codes::SERVICE_UNAVAILABLE])
}

#[test]
fn wrap_err_on_ok_passes_value_through() {
    let result: Result<i32, io::Error> = Ok(42);
    assert_eq!(result.wrap_err([Field::new("unused", 1)]).unwrap(), 42);
}

#[test]
fn wrap_err_on_err_creates_structured_error() {
    let err = load().unwrap_err();

    assert_eq!(err.message(), "denied");
    assert_eq!(err.fields().value("path"), Some(&Value::String("/etc/app.toml".into())));
    assert!(err.trace().contains("load()"), "trace: {}", err.trace());
}

#[test]
fn outer_layers_enrich_and_keep_inner_trace() {
    let inner = load().unwrap_err();
    let outer = startup().unwrap_err();

    assert_eq!(outer.message(), inner.message());
    let innermost = outer.trace().rsplit(SEPARATOR).next().unwrap_or_default();
    assert!(innermost.contains("load()"), "trace: {}", outer.trace());
    assert!(outer.trace().contains("startup()"));
    assert_eq!(outer.fields().to_string(), "path=/etc/app.toml phase=startup code=503");
}

#[test]
fn wrap_err_with_is_lazy() {
    let mut called = false;
    let result: Result<(), io::Error> = Ok(());

    let _ = result.wrap_err_with(|| {
        called = true;
        [Field::new("expensive", true)]
    });
    assert!(!called, "field producer must not run on Ok");
}

#[test]
fn wrap_err_with_runs_on_err() {
    let result: Result<(), io::Error> = Err(io::Error::other("boom"));
    let err = result.wrap_err_with(|| vec![Field::new("attempt", 3)]).unwrap_err();

    assert_eq!(err.fields().value("attempt"), Some(&Value::Int(3)));
}

#[test]
fn with_code_sets_and_overrides() {
    let result: Result<(), io::Error> = Err(io::Error::other("boom"));
    let err = result.with_code(500).unwrap_err();
    assert_eq!(err.get_code(), 500);

    let again: Result<(), StructuredError> = Err(err);
    let err = again.with_code(502).unwrap_err();
    assert_eq!(err.get_code(), 502);
    assert_eq!(err.fields().len(), 1);
}

#[test]
fn string_errors_are_accepted() {
    let result: Result<(), &str> = Err("bad token");
    let err = result.wrap_err([codes::UNAUTHORIZED]).unwrap_err();

    assert_eq!(err.message(), "bad token");
    assert_eq!(err.get_code(), 401);
}
