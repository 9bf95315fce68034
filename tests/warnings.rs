//! The tuple-overflow diagnostic fires once per parser value.

use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};

use jsonshape::{int, string, tuple};
use serde_json::json;
use tracing::{
    span::{Attributes, Id, Record},
    Event, Level, Metadata, Subscriber,
};

/// Counts WARN events dispatched on the current thread.
struct WarnCounter {
    warnings: Arc<AtomicUsize>,
}

impl Subscriber for WarnCounter {
    fn enabled(&self, _metadata: &Metadata<'_>) -> bool {
        true
    }

    fn new_span(&self, _span: &Attributes<'_>) -> Id {
        Id::from_u64(1)
    }

    fn record(&self, _span: &Id, _values: &Record<'_>) {}

    fn record_follows_from(&self, _span: &Id, _follows: &Id) {}

    fn event(&self, event: &Event<'_>) {
        if *event.metadata().level() == Level::WARN {
            self.warnings.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn enter(&self, _span: &Id) {}

    fn exit(&self, _span: &Id) {}
}

fn count_warnings(f: impl FnOnce()) -> usize {
    let warnings = Arc::new(AtomicUsize::new(0));
    let subscriber = WarnCounter {
        warnings: Arc::clone(&warnings),
    };
    tracing::subscriber::with_default(subscriber, f);
    warnings.load(Ordering::SeqCst)
}

#[test]
fn warning_is_generated_exactly_once() {
    let parser = tuple((int(), int()));
    let count = count_warnings(|| {
        assert_eq!(parser.parse(&json!([1, 2, 3])).unwrap(), (1, 2));
        assert_eq!(parser.parse(&json!([1, 2, 3])).unwrap(), (1, 2));
        assert_eq!(parser.parse(&json!([1, 2, 3, 4])).unwrap(), (1, 2));
    });
    assert_eq!(count, 1);
}

#[test]
fn distinct_parser_values_have_independent_latches() {
    let first = tuple((int(), int()));
    let second = tuple((int(), int()));
    let count = count_warnings(|| {
        first.parse(&json!([1, 2, 3])).unwrap();
        second.parse(&json!([1, 2, 3])).unwrap();
        // a clone shares identity with the original, so it never re-warns
        first.clone().parse(&json!([1, 2, 3])).unwrap();
    });
    assert_eq!(count, 2);
}

#[test]
fn no_warning_when_a_position_fails() {
    let parser = tuple((string(), string()));
    let count = count_warnings(|| {
        assert!(parser.parse(&json!([1, 2, 3])).is_err());
        assert!(parser.parse(&json!([1, 2, 3])).is_err());
    });
    assert_eq!(count, 0);
}

#[test]
fn exact_length_never_warns() {
    let parser = tuple((int(), int()));
    let count = count_warnings(|| {
        parser.parse(&json!([1, 2])).unwrap();
        parser.parse(&json!([3, 4])).unwrap();
    });
    assert_eq!(count, 0);
}
