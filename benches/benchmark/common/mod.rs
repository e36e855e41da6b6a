use criterion::Criterion;
use error_trail::{codes, Field};
use std::time::Duration;

pub fn configure_criterion() -> Criterion {
    Criterion::default()
        .sample_size(100)
        .warm_up_time(Duration::from_secs(3))
        .measurement_time(Duration::from_secs(5))
        .noise_threshold(0.05)
}

/// Fields a typical request handler attaches.
pub fn request_fields(n: usize) -> Vec<Field> {
    let mut fields = vec![
        Field::new("request_id", "9f3c2a"),
        Field::new("user_id", 42_u64),
        Field::new("route", "/api/v1/orders"),
        codes::INTERNAL_SERVER_ERROR,
    ];
    fields.extend((fields.len()..n).map(|i| Field::new(format!("extra_{i}"), i)));
    fields.truncate(n);
    fields
}
