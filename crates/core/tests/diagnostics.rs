//! The translation warning emitted by `translate_mapping`.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::{Arc, Mutex};

use jobcompat_core::translate_mapping;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::registry::Registry;
use tracing_subscriber::Layer;

/// Collects the message of every WARN event.
#[derive(Clone, Default)]
struct WarnCollector(Arc<Mutex<Vec<String>>>);

struct MessageVisitor(String);

impl Visit for MessageVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.0 = format!("{:?}", value);
        }
    }
}

impl<S: Subscriber> Layer<S> for WarnCollector {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        if *event.metadata().level() != Level::WARN {
            return;
        }
        let mut visitor = MessageVisitor(String::new());
        event.record(&mut visitor);
        self.0.lock().unwrap().push(visitor.0);
    }
}

fn capture_warnings<T>(f: impl FnOnce() -> T) -> (T, Vec<String>) {
    let collector = WarnCollector::default();
    let subscriber = Registry::default().with(collector.clone());
    let result = tracing::subscriber::with_default(subscriber, f);
    let warnings = collector.0.lock().unwrap().clone();
    (result, warnings)
}

fn jobconf(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn one_warning_for_a_renamed_key() {
    let input = jobconf(&[("mapred.job.tracker", "x")]);
    let (result, warnings) = capture_warnings(|| translate_mapping(&input, Some("2.0")).unwrap());

    assert_eq!(result.jobconf["mapred.job.tracker"], "x");
    assert_eq!(result.jobconf["mapreduce.jobtracker.address"], "x");
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].contains("2.0"));
    assert!(warnings[0].contains("mapred.job.tracker -> mapreduce.jobtracker.address"));
}

#[test]
fn one_warning_lists_every_rename_sorted() {
    let input = jobconf(&[("user.name", "dave"), ("mapred.job.tracker", "x")]);
    let (_, warnings) = capture_warnings(|| translate_mapping(&input, Some("2.0")).unwrap());

    assert_eq!(warnings.len(), 1);
    let tracker = warnings[0].find("mapred.job.tracker ->").unwrap();
    let user = warnings[0].find("user.name ->").unwrap();
    assert!(tracker < user);
}

#[test]
fn no_warning_without_renames() {
    let input = jobconf(&[("mapreduce.jobtracker.address", "x"), ("my.key", "1")]);
    let (_, warnings) = capture_warnings(|| translate_mapping(&input, Some("2.0")).unwrap());
    assert!(warnings.is_empty());
}

#[test]
fn no_warning_when_translating_for_all_versions() {
    let input = jobconf(&[("mapred.job.tracker", "x")]);
    let (result, warnings) = capture_warnings(|| translate_mapping(&input, None).unwrap());
    assert_eq!(result.jobconf.len(), 2);
    assert!(warnings.is_empty());
}
