//! Replays the scenario files shipped with the tool

use gesture_replay::{replay, Scenario};
use overlay_core::{HostEvent, OverlayUpdate, Rect};
use pretty_assertions::assert_eq;
use std::path::PathBuf;

fn scenario_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("scenarios")
        .join(name)
}

#[test]
fn migrate_signature_scenario() {
    let scenario = Scenario::from_file(scenario_path("migrate_signature.toml")).unwrap();
    let report = replay(&scenario, None).unwrap();

    let updates: Vec<&OverlayUpdate> = report
        .events
        .iter()
        .filter_map(|event| match event {
            HostEvent::Update { update, .. } => Some(update),
            HostEvent::Remove { .. } => None,
        })
        .collect();
    assert_eq!(updates.len(), 3);
    assert_eq!(*updates[0], OverlayUpdate::migrated(1, 72.0, 0.0));

    let overlay = &report.overlays[0];
    assert_eq!(overlay.page, 1);
    assert_eq!(overlay.rect(), Rect::new(22.0, 0.0, 268.0, 59.0));
}

#[test]
fn missing_scenario_file_is_an_error() {
    let err = Scenario::from_file(scenario_path("does_not_exist.toml")).unwrap_err();
    assert!(err.to_string().contains("Failed to read scenario file"));
}
