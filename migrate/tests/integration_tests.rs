//! End-to-end tests for migration runs.

use std::path::{Path, PathBuf};

use slo_migrate::{MigrateConfig, MigrateError, MigrationEvent, MigrationSummary, SkipReason};
use slo_migrate_core::{PrometheusServiceLevel, TARGET_API_VERSION, TARGET_KIND};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

const SINGLE_APP: &str = r#"
apiVersion: monitoring.spotahome.com/v1alpha1
kind: ServiceLevel
metadata:
  name: app
  namespace: ns1
spec:
  serviceLevelObjectives:
    - name: availability
      availabilityObjectivePercent: 99.9
      disable: false
      serviceLevelIndicator:
        prometheus:
          address: http://prometheus:9090
          errorQuery: sum(rate(errors[5m]))
          totalQuery: sum(rate(total[5m]))
"#;

const TWO_GROUPS: &str = r#"
apiVersion: monitoring.spotahome.com/v1alpha1
kind: ServiceLevelList
items:
  - metadata:
      name: checkout
      namespace: shop
      labels:
        team: payments
    spec:
      serviceLevelObjectives:
        - name: availability
          description: Requests without 5xx.
          availabilityObjectivePercent: 99.95
          serviceLevelIndicator:
            prometheus:
              errorQuery: sum(rate(http_requests_total{code=~"5.."}[1m]))
              totalQuery: sum(rate(http_requests_total[1m]))
          output:
            prometheus:
              labels:
                tier: "1"
  - metadata:
      name: legacy
      namespace: shop
    spec:
      serviceLevelObjectives:
        - name: availability
          disable: true
          availabilityObjectivePercent: 99
          serviceLevelIndicator:
            prometheus:
              errorQuery: sum(rate(errors[5m]))
              totalQuery: sum(rate(total[5m]))
"#;

struct Workspace {
    dir: tempfile::TempDir,
}

impl Workspace {
    fn new(input: &str) -> Self {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("slos.yaml"), input).unwrap();
        std::fs::create_dir(dir.path().join("out")).unwrap();
        Self { dir }
    }

    fn config(&self) -> MigrateConfig {
        MigrateConfig::new(self.dir.path().join("slos.yaml"), self.out())
    }

    fn out(&self) -> PathBuf {
        self.dir.path().join("out")
    }

    fn generated(&self) -> Vec<String> {
        let mut names: Vec<String> = std::fs::read_dir(self.out())
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }
}

fn read_sloth(path: &Path) -> PrometheusServiceLevel {
    let raw = std::fs::read_to_string(path).unwrap();
    serde_yaml::from_str(&raw).unwrap()
}

#[derive(Debug, PartialEq)]
enum Event {
    Skipped(String, SkipReason),
    Written(String, PathBuf),
}

fn run_collecting(config: &MigrateConfig) -> (slo_migrate::Result<MigrationSummary>, Vec<Event>) {
    let mut events = Vec::new();
    let result = slo_migrate::run(config, |event| {
        events.push(match event {
            MigrationEvent::Skipped { name, reason } => Event::Skipped(name.to_string(), reason),
            MigrationEvent::Written { name, path } => {
                Event::Written(name.to_string(), path.to_path_buf())
            }
        });
    });
    (result, events)
}

// ---------------------------------------------------------------------------
// Successful runs
// ---------------------------------------------------------------------------

#[test]
fn test_single_service_level_is_migrated() {
    let ws = Workspace::new(SINGLE_APP);
    let (result, events) = run_collecting(&ws.config());
    let summary = result.unwrap();

    let expected = ws.out().join("_gen_ns1_app.yaml");
    assert_eq!(summary.loaded, 1);
    assert_eq!(summary.skipped, 0);
    assert_eq!(summary.written, vec![expected.clone()]);
    assert_eq!(events, vec![Event::Written("app".into(), expected.clone())]);

    let sloth = read_sloth(&expected);
    assert_eq!(sloth.api_version, TARGET_API_VERSION);
    assert_eq!(sloth.kind, TARGET_KIND);
    assert_eq!(sloth.metadata.name, "app");
    assert_eq!(sloth.metadata.namespace, "ns1");
    assert_eq!(sloth.spec.service, "app");
    assert_eq!(sloth.spec.slos.len(), 1);

    let slo = &sloth.spec.slos[0];
    assert_eq!(slo.name, "availability");
    assert_eq!(slo.objective, 99.9);
    assert!(slo.sli.events.error_query.ends_with("[{{ .window }}]))"));
    assert!(slo.sli.events.total_query.ends_with("[{{ .window }}]))"));
    assert!(slo.alerting.page_alert.disable);
    assert!(slo.alerting.ticket_alert.disable);
}

#[test]
fn test_list_keeps_disabled_objectives_by_default() {
    let ws = Workspace::new(TWO_GROUPS);
    let (result, _) = run_collecting(&ws.config());
    let summary = result.unwrap();

    assert_eq!(summary.loaded, 2);
    assert_eq!(summary.skipped, 0);
    assert_eq!(
        ws.generated(),
        vec!["_gen_shop_checkout.yaml", "_gen_shop_legacy.yaml"]
    );

    let legacy = read_sloth(&ws.out().join("_gen_shop_legacy.yaml"));
    assert_eq!(legacy.spec.slos.len(), 1);
    assert_eq!(legacy.spec.slos[0].objective, 99.0);
}

#[test]
fn test_fully_disabled_group_is_skipped_when_ignoring_disabled() {
    let ws = Workspace::new(TWO_GROUPS);
    let config = ws.config().with_ignore_disabled(true);
    let (result, events) = run_collecting(&config);
    let summary = result.unwrap();

    // The legacy group loses its only objective and is not written, even as
    // an empty service level.
    assert_eq!(summary.loaded, 2);
    assert_eq!(summary.skipped, 1);
    assert_eq!(ws.generated(), vec!["_gen_shop_checkout.yaml"]);
    assert_eq!(
        events,
        vec![
            Event::Skipped("legacy".into(), SkipReason::AllDisabled),
            Event::Written("checkout".into(), ws.out().join("_gen_shop_checkout.yaml")),
        ]
    );

    let checkout = read_sloth(&ws.out().join("_gen_shop_checkout.yaml"));
    assert_eq!(
        checkout.metadata.labels.get("team").map(String::as_str),
        Some("payments")
    );
    let slo = &checkout.spec.slos[0];
    assert_eq!(slo.description, "Requests without 5xx.");
    assert_eq!(slo.labels.get("tier").map(String::as_str), Some("1"));
    assert_eq!(
        slo.sli.events.error_query,
        r#"sum(rate(http_requests_total{code=~"5.."}[{{ .window }}]))"#
    );
}

#[test]
fn test_group_without_objectives_is_skipped() {
    let input = r#"
kind: ServiceLevelList
items:
  - metadata: { name: empty, namespace: ns1 }
    spec:
      serviceLevelObjectives: []
"#;
    let ws = Workspace::new(input);
    let (result, events) = run_collecting(&ws.config());
    let summary = result.unwrap();

    assert_eq!(summary.skipped, 1);
    assert!(summary.written.is_empty());
    assert!(ws.generated().is_empty());
    assert_eq!(
        events,
        vec![Event::Skipped("empty".into(), SkipReason::NoObjectives)]
    );
}

#[test]
fn test_existing_output_is_overwritten() {
    let ws = Workspace::new(SINGLE_APP);
    let target = ws.out().join("_gen_ns1_app.yaml");
    std::fs::write(&target, "stale: true\n").unwrap();

    run_collecting(&ws.config()).0.unwrap();
    assert_eq!(read_sloth(&target).spec.service, "app");
}

// ---------------------------------------------------------------------------
// Failures
// ---------------------------------------------------------------------------

#[test]
fn test_empty_list_is_an_error() {
    let ws = Workspace::new("apiVersion: v1\nkind: ServiceLevelList\nitems: []\n");
    let (result, events) = run_collecting(&ws.config());
    assert!(matches!(result, Err(MigrateError::EmptyInput)));
    assert!(events.is_empty());
}

#[test]
fn test_input_without_a_document_is_an_error() {
    for input in ["", "# generated by tooling\n", "---\n", "null\n", "~\n"] {
        let ws = Workspace::new(input);
        let (result, events) = run_collecting(&ws.config());
        assert!(
            matches!(result, Err(MigrateError::EmptyInput)),
            "input {input:?} gave {result:?}"
        );
        assert!(events.is_empty());
        assert!(ws.generated().is_empty());
    }
}

#[test]
fn test_missing_input_is_a_read_error() {
    let ws = Workspace::new(SINGLE_APP);
    let config = MigrateConfig::new(ws.dir.path().join("nope.yaml"), ws.out());
    let (result, _) = run_collecting(&config);
    assert!(matches!(result, Err(MigrateError::Read { .. })));
}

#[test]
fn test_malformed_input_is_a_decode_error() {
    let ws = Workspace::new("items: [\n  - metadata: {name: a\n");
    let (result, _) = run_collecting(&ws.config());
    assert!(matches!(result, Err(MigrateError::Decode(_))));
    assert!(ws.generated().is_empty());
}

#[test]
fn test_mapping_error_writes_nothing() {
    let input = r#"
kind: ServiceLevelList
items:
  - metadata: { name: good, namespace: ns1 }
    spec:
      serviceLevelObjectives:
        - name: availability
          availabilityObjectivePercent: 99.9
          serviceLevelIndicator:
            prometheus:
              errorQuery: e[5m]
              totalQuery: t[5m]
  - metadata: { name: bad, namespace: ns1 }
    spec:
      serviceLevelObjectives:
        - name: latency
          availabilityObjectivePercent: 95
"#;
    let ws = Workspace::new(input);
    let (result, events) = run_collecting(&ws.config());
    assert!(matches!(result, Err(MigrateError::Mapping { .. })));
    assert!(events.is_empty());
    assert!(ws.generated().is_empty());
}

#[test]
fn test_missing_output_directory_is_a_write_error() {
    let ws = Workspace::new(SINGLE_APP);
    let config = MigrateConfig::new(ws.config().spec_file, ws.dir.path().join("absent"));
    let (result, _) = run_collecting(&config);
    assert!(matches!(result, Err(MigrateError::Write { .. })));
}
