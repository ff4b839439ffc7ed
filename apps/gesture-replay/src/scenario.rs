//! Recorded gesture scenarios
//!
//! A scenario is a TOML file describing the page layout, the markers on it
//! and a script of pointer, touch and viewport steps. Replaying it through
//! the engine yields the host updates a browser session would have produced.

use anyhow::Context;
use overlay_core::{
    Corner, EngineConfig, GestureOutcome, HostEvent, Overlay, OverlayEngine, OverlayId,
    ScreenPoint, ScrollOffset, SessionKind, StackedLayout, TouchPair,
};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Top-level scenario file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scenario {
    /// Optional human-readable name
    #[serde(default)]
    pub name: Option<String>,
    /// Engine configuration (defaults when omitted)
    #[serde(default)]
    pub config: EngineConfig,
    /// Initial page layout and viewport
    pub layout: StackedLayout,
    /// Markers present before the first step
    #[serde(default)]
    pub markers: Vec<Overlay>,
    /// Steps to replay, in order
    #[serde(default)]
    pub steps: Vec<ReplayStep>,
}

/// A single recorded input
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ReplayStep {
    /// Pointer pressed on a marker body
    Down { marker: String, x: f64, y: f64 },
    /// Pointer pressed on a corner handle
    Corner {
        marker: String,
        corner: Corner,
        x: f64,
        y: f64,
    },
    /// Pointer moved
    Move { marker: String, x: f64, y: f64 },
    /// Pointer released or fingers lifted
    Up { marker: String },
    /// Pointer cancelled
    Cancel { marker: String },
    /// Two fingers down
    PinchStart {
        marker: String,
        touches: [ScreenPoint; 2],
    },
    /// Two fingers moved
    PinchMove {
        marker: String,
        touches: [ScreenPoint; 2],
    },
    /// Pinch scale from a gesture recognizer (starts a pinch if needed)
    PinchScale { marker: String, scale: f64 },
    Select { marker: String },
    ClickAway,
    Remove { marker: String },
    /// Viewer zoom changed
    Zoom { value: f64 },
    /// Viewer scrolled
    Scroll { x: f64, y: f64 },
}

impl ReplayStep {
    /// Short label for logging
    pub fn label(&self) -> &'static str {
        match self {
            ReplayStep::Down { .. } => "down",
            ReplayStep::Corner { .. } => "corner",
            ReplayStep::Move { .. } => "move",
            ReplayStep::Up { .. } => "up",
            ReplayStep::Cancel { .. } => "cancel",
            ReplayStep::PinchStart { .. } => "pinch_start",
            ReplayStep::PinchMove { .. } => "pinch_move",
            ReplayStep::PinchScale { .. } => "pinch_scale",
            ReplayStep::Select { .. } => "select",
            ReplayStep::ClickAway => "click_away",
            ReplayStep::Remove { .. } => "remove",
            ReplayStep::Zoom { .. } => "zoom",
            ReplayStep::Scroll { .. } => "scroll",
        }
    }
}

impl Scenario {
    /// Load a scenario from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read scenario file: {}", path.display()))?;
        content
            .parse()
            .with_context(|| format!("Invalid scenario: {}", path.display()))
    }
}

impl std::str::FromStr for Scenario {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let scenario: Scenario = toml::from_str(s).context("Failed to parse TOML")?;
        scenario
            .config
            .validate()
            .context("Invalid engine configuration")?;
        Ok(scenario)
    }
}

/// What one step did
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StepRecord {
    pub index: usize,
    pub step: &'static str,
    pub outcome: String,
}

/// Result of replaying a scenario
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReplayReport {
    /// Host callbacks, in the order they fired
    pub events: Vec<HostEvent>,
    /// Committed markers after the last step
    pub overlays: Vec<Overlay>,
    /// Per-step outcomes
    pub steps: Vec<StepRecord>,
}

/// Replay a scenario. `config` overrides the scenario's own configuration.
pub fn replay(scenario: &Scenario, config: Option<EngineConfig>) -> anyhow::Result<ReplayReport> {
    let config = config.unwrap_or(scenario.config);
    let mut engine =
        OverlayEngine::new(config, Vec::new()).context("Failed to create gesture engine")?;
    let mut layout = scenario.layout.clone();

    for marker in &scenario.markers {
        engine
            .insert(marker.clone(), &layout)
            .with_context(|| format!("Failed to place marker {}", marker.id))?;
    }

    let mut steps = Vec::with_capacity(scenario.steps.len());
    for (index, step) in scenario.steps.iter().enumerate() {
        let outcome = apply_step(&mut engine, &mut layout, step);
        debug!(index, step = step.label(), outcome = %outcome, "step replayed");
        steps.push(StepRecord {
            index,
            step: step.label(),
            outcome,
        });
    }

    let overlays = engine.store().iter().cloned().collect();
    let events = engine.into_host();
    info!(
        steps = steps.len(),
        events = events.len(),
        "scenario replayed"
    );

    Ok(ReplayReport {
        events,
        overlays,
        steps,
    })
}

fn apply_step(
    engine: &mut OverlayEngine<Vec<HostEvent>>,
    layout: &mut StackedLayout,
    step: &ReplayStep,
) -> String {
    let outcome = match step {
        ReplayStep::Down { marker, x, y } => {
            engine.begin_drag(&OverlayId::from(marker.as_str()), ScreenPoint::new(*x, *y))
        }
        ReplayStep::Corner {
            marker,
            corner,
            x,
            y,
        } => engine.begin_resize(
            &OverlayId::from(marker.as_str()),
            *corner,
            ScreenPoint::new(*x, *y),
        ),
        ReplayStep::Move { marker, x, y } => engine.pointer_move(
            &OverlayId::from(marker.as_str()),
            ScreenPoint::new(*x, *y),
            &*layout,
        ),
        ReplayStep::Up { marker } => {
            engine.end_gesture(&OverlayId::from(marker.as_str()), &*layout)
        }
        ReplayStep::Cancel { marker } => engine.abort(&OverlayId::from(marker.as_str())),
        ReplayStep::PinchStart { marker, touches } => engine.begin_pinch_touches(
            &OverlayId::from(marker.as_str()),
            TouchPair::new(touches[0], touches[1]),
        ),
        ReplayStep::PinchMove { marker, touches } => engine.pinch_touches(
            &OverlayId::from(marker.as_str()),
            TouchPair::new(touches[0], touches[1]),
            &*layout,
        ),
        ReplayStep::PinchScale { marker, scale } => {
            let id = OverlayId::from(marker.as_str());
            let started = match engine.session_kind(&id) {
                SessionKind::Pinching => None,
                _ => Some(engine.begin_pinch(&id)),
            };
            match started {
                Some(outcome @ GestureOutcome::Ignored(_)) => outcome,
                _ => engine.pinch_to(&id, *scale, &*layout),
            }
        }
        ReplayStep::Select { marker } => {
            return format!("selected={}", engine.select(&OverlayId::from(marker.as_str())))
        }
        ReplayStep::ClickAway => return format!("aborted={}", engine.click_away()),
        ReplayStep::Remove { marker } => {
            return format!("removed={}", engine.remove(&OverlayId::from(marker.as_str())))
        }
        ReplayStep::Zoom { value } => {
            layout.set_zoom(*value);
            return format!("zoom={}", value);
        }
        ReplayStep::Scroll { x, y } => {
            layout.scroll_to(ScrollOffset::new(*x, *y));
            return format!("scroll=({}, {})", x, y);
        }
    };
    format!("{:?}", outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use overlay_core::{OverlayUpdate, Rect};
    use pretty_assertions::assert_eq;

    const TWO_PAGES: &str = r#"
        name = "drag onto next page"

        [layout]
        pages = [
            { width = 800.0, height = 1000.0 },
            { width = 800.0, height = 1000.0 },
        ]

        [[markers]]
        id = "sig-1"
        kind = "signature"
        page = 0
        x = 100.0
        y = 900.0
        width = 150.0
        height = 80.0

        [[steps]]
        type = "scroll"
        x = 0.0
        y = 1000.0

        [[steps]]
        type = "down"
        marker = "sig-1"
        x = 0.0
        y = 0.0

        [[steps]]
        type = "move"
        marker = "sig-1"
        x = 0.0
        y = 100.0

        [[steps]]
        type = "up"
        marker = "sig-1"
    "#;

    #[test]
    fn test_parse_and_replay_migration() {
        let scenario: Scenario = TWO_PAGES.parse().unwrap();
        assert_eq!(scenario.name.as_deref(), Some("drag onto next page"));
        assert_eq!(scenario.steps.len(), 4);

        let report = replay(&scenario, None).unwrap();
        assert_eq!(
            report.events,
            vec![HostEvent::Update {
                id: OverlayId::from("sig-1"),
                update: OverlayUpdate::migrated(1, 100.0, 0.0),
            }]
        );
        assert_eq!(report.overlays[0].page, 1);
        assert_eq!(report.steps[3].step, "up");
    }

    #[test]
    fn test_pinch_scale_step_starts_pinch() {
        let scenario: Scenario = r#"
            [layout]
            pages = [{ width = 800.0, height = 1000.0 }]

            [[markers]]
            id = "m"
            kind = "signature"
            page = 0
            x = 100.0
            y = 100.0
            width = 100.0
            height = 60.0

            [[steps]]
            type = "pinch_scale"
            marker = "m"
            scale = 2.0

            [[steps]]
            type = "up"
            marker = "m"
        "#
        .parse()
        .unwrap();

        let report = replay(&scenario, None).unwrap();
        assert_eq!(report.overlays[0].rect(), Rect::new(50.0, 70.0, 200.0, 120.0));
    }

    #[test]
    fn test_corner_and_touch_steps_parse() {
        let scenario: Scenario = r#"
            [layout]
            pages = [{ width = 800.0, height = 1000.0 }]

            [[steps]]
            type = "corner"
            marker = "m"
            corner = "se"
            x = 1.0
            y = 2.0

            [[steps]]
            type = "pinch_start"
            marker = "m"
            touches = [{ x = 0.0, y = 0.0 }, { x = 50.0, y = 0.0 }]

            [[steps]]
            type = "click_away"
        "#
        .parse()
        .unwrap();

        let labels: Vec<_> = scenario.steps.iter().map(ReplayStep::label).collect();
        assert_eq!(labels, vec!["corner", "pinch_start", "click_away"]);

        // Unknown markers are ignored, not fatal
        let report = replay(&scenario, None).unwrap();
        assert!(report.events.is_empty());
        assert_eq!(report.steps[0].outcome, "Ignored(UnknownOverlay)");
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let result: anyhow::Result<Scenario> = r#"
            [config]
            tap_threshold_px = -1.0

            [layout]
            pages = []
        "#
        .parse();
        assert!(result.is_err());
    }

    #[test]
    fn test_marker_on_missing_page_fails_replay() {
        let scenario: Scenario = r#"
            [layout]
            pages = [{ width = 800.0, height = 1000.0 }]

            [[markers]]
            id = "m"
            kind = "field"
            page = 4
            x = 0.0
            y = 0.0
            width = 150.0
            height = 30.0
        "#
        .parse()
        .unwrap();

        let err = replay(&scenario, None).unwrap_err();
        assert!(err.to_string().contains("Failed to place marker m"));
    }
}
