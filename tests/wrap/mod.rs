use std::error::Error;
use std::io;

use error_trail::trace::{FrameFilter, TraceConfig};
use error_trail::{codes, wrap, BoxError, Field, StructuredError, Tracer, Value, Wrapped};

/// Module path as it appears in demangled symbols; the `mod` test crate is
/// spelled `r#mod` by `module_path!`.
fn this_module() -> &'static str {
    module_path!().trim_start_matches("r#")
}

fn local_tracer() -> Tracer {
    Tracer::new(TraceConfig::default().filter(FrameFilter::contains(this_module())))
}

#[test]
fn wrapping_nothing_yields_nothing() {
    assert!(wrap(None::<io::Error>, [Field::new("a", 1)]).is_none());
    assert!(wrap(None::<StructuredError>, []).is_none());
    assert!(local_tracer().wrap(None::<BoxError>, []).is_none());
}

#[test]
fn plain_error_keeps_its_message() {
    let err = wrap(Some(io::Error::other("connection refused")), [Field::new("peer", "10.0.0.1")]).unwrap();

    assert!(err.is_created());
    assert_eq!(err.message(), "connection refused");
    assert_eq!(err.fields().value("peer"), Some(&Value::String("10.0.0.1".into())));
}

#[test]
fn plain_error_trace_starts_at_wrap_call() {
    let err = wrap(Some(io::Error::other("x")), []).unwrap();

    assert!(!err.trace().is_empty());
    assert!(err.trace().contains("plain_error_trace_starts_at_wrap_call()"), "trace: {}", err.trace());
}

#[test]
fn trace_is_empty_outside_namespace() {
    let tracer = Tracer::new(TraceConfig::default().namespace("no_such_namespace"));
    let err = tracer.wrap(Some(io::Error::other("x")), []).unwrap();

    assert_eq!(err.trace(), "");
    assert_eq!(err.message(), "x");
}

#[test]
fn plain_error_fields_are_kept_as_given() {
    let err = wrap(Some(io::Error::other("x")), [Field::new("a", 1), Field::new("b", 2)]).unwrap();
    assert_eq!(err.fields().to_string(), "a=1 b=2");
}

#[test]
fn plain_error_becomes_source() {
    let err = wrap(Some(io::Error::new(io::ErrorKind::TimedOut, "slow")), []).unwrap().into_inner();

    let source = err.source().expect("wrapped error keeps its source");
    let io_err = source.downcast_ref::<io::Error>().unwrap();
    assert_eq!(io_err.kind(), io::ErrorKind::TimedOut);
}

#[test]
fn structured_error_is_enriched_not_recreated() {
    let original = local_tracer().error("boom", [Field::new("stage", "parse")]);
    let trace = original.trace().to_string();

    let err = wrap(Some(original), [Field::new("Stage", "load"), codes::BAD_REQUEST]).unwrap();

    assert!(err.is_enriched());
    assert_eq!(err.message(), "boom");
    assert_eq!(err.trace(), trace);
    assert_eq!(err.fields().to_string(), "stage=load code=400");
}

#[test]
fn boxed_structured_error_is_enriched() {
    let boxed: BoxError = Box::new(StructuredError::new("boom", []));
    let err = wrap(Some(boxed), [Field::new("k", 1)]).unwrap();

    assert!(err.is_enriched());
    assert_eq!(err.fields().len(), 1);
}

#[test]
fn boxed_plain_error_is_created() {
    let boxed: BoxError = "plain text failure".into();
    let err = wrap(Some(boxed), []).unwrap();

    assert!(err.is_created());
    assert_eq!(err.message(), "plain text failure");
}

#[test]
fn repeated_wraps_accumulate() {
    let mut err: StructuredError = wrap(Some(io::Error::other("x")), [Field::new("layer", 1)]).unwrap().into();

    for layer in 2..=4 {
        err = wrap(Some(err), [Field::new("LAYER", layer), Field::new(format!("seen_{layer}"), true)])
            .unwrap()
            .into_inner();
    }

    assert_eq!(err.fields().len(), 4);
    assert_eq!(err.fields()[0].value(), &Value::Int(4));
    assert_eq!(err.fields()[3].key(), "seen_4");
}

#[test]
fn wrapped_derefs_to_error() {
    let mut wrapped: Wrapped = wrap(Some(io::Error::other("x")), []).unwrap();
    wrapped.set_code(503);

    assert_eq!(wrapped.get_code(), 503);
    match wrapped {
        Wrapped::Created(err) => assert_eq!(err.get_code(), 503),
        Wrapped::Enriched(_) => panic!("expected a created error"),
    }
}

#[test]
fn tracer_error_captures_caller() {
    let err = local_tracer().error("boom", [codes::NOT_FOUND]);

    assert!(err.trace().contains("tracer_error_captures_caller()"), "trace: {}", err.trace());
    assert_eq!(err.get_code(), 404);
}

#[test]
fn tracer_reports_its_config() {
    let tracer = Tracer::new(TraceConfig::default().max_depth(1));
    assert_eq!(tracer.config().depth(), 1);
    assert_eq!(Tracer::global().config().depth(), error_trail::trace::max_depth());
}
