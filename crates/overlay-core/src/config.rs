//! Engine configuration
//!
//! Every field has a default matching the stock viewer behaviour, so an empty
//! TOML document is a valid configuration:
//!
//! ```
//! use overlay_core::config::EngineConfig;
//!
//! let config = EngineConfig::from_toml_str(r#"
//!     tap_threshold_px = 5.0
//!
//!     [scale_bounds]
//!     max = 2.5
//!
//!     [bounds.field]
//!     pinch_min = { width = 50.0, height = 30.0 }
//!     resize_min = { width = 50.0, height = 30.0 }
//!     max = { type = "fixed", width = 500.0, height = 300.0 }
//! "#).unwrap();
//! assert_eq!(config.tap_threshold_px, 5.0);
//! assert_eq!(config.scale_bounds.min, 0.5);
//! assert_eq!(config.bounds.signature, overlay_core::config::KindBounds::signature());
//! ```

use crate::error::ConfigError;
use crate::geometry::{clamp_min_wins, Size};
use crate::overlay::OverlayKind;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Smallest side a corner resize may produce, in document units
pub const MIN_RESIZE_SIDE: f64 = 20.0;

/// Which gesture a size limit applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizingGesture {
    Pinch,
    CornerResize,
}

/// Upper size bound for a marker kind
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Extent {
    /// Bounded by the page the marker sits on
    Page,
    /// Bounded by a fixed size (and still by the page)
    Fixed { width: f64, height: f64 },
}

/// Resolved min/max sizes for one gesture on one page
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeLimits {
    pub min: Size,
    pub max: Size,
}

impl SizeLimits {
    /// Clamp each side into the limits. Non-finite or non-positive input lands on the minimum.
    pub fn clamp(&self, size: Size) -> Size {
        Size::new(
            clamp_side(size.width, self.min.width, self.max.width),
            clamp_side(size.height, self.min.height, self.max.height),
        )
    }
}

fn clamp_side(value: f64, min: f64, max: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        clamp_min_wins(value, min, max)
    } else {
        min
    }
}

/// Size bounds for one marker kind
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KindBounds {
    /// Minimum size reachable by pinching
    pub pinch_min: Size,
    /// Minimum size reachable by dragging a corner handle
    pub resize_min: Size,
    pub max: Extent,
}

impl KindBounds {
    /// Signatures may grow to fill their page
    pub const fn signature() -> Self {
        Self {
            pinch_min: Size::new(50.0, 30.0),
            resize_min: Size::new(MIN_RESIZE_SIDE, MIN_RESIZE_SIDE),
            max: Extent::Page,
        }
    }

    /// Fields stay small regardless of page size
    pub const fn field() -> Self {
        Self {
            pinch_min: Size::new(50.0, 30.0),
            resize_min: Size::new(50.0, 30.0),
            max: Extent::Fixed {
                width: 400.0,
                height: 300.0,
            },
        }
    }

    /// Resolve the limits against a live page size.
    ///
    /// The maximum never exceeds the page, and the minimum never exceeds the
    /// maximum, so a marker on a tiny page still satisfies the page invariant.
    pub fn limits(&self, gesture: SizingGesture, page: Size) -> SizeLimits {
        let max = match self.max {
            Extent::Page => page,
            Extent::Fixed { width, height } => {
                Size::new(width.min(page.width), height.min(page.height))
            }
        };
        let min = match gesture {
            SizingGesture::Pinch => self.pinch_min,
            SizingGesture::CornerResize => self.resize_min,
        };
        SizeLimits {
            min: Size::new(min.width.min(max.width), min.height.min(max.height)),
            max,
        }
    }

    fn validate(&self, kind: OverlayKind) -> Result<(), ConfigError> {
        let fail = |reason: String| ConfigError::KindBounds {
            kind: kind.to_string(),
            reason,
        };
        for (name, size) in [("pinch_min", self.pinch_min), ("resize_min", self.resize_min)] {
            if size.is_degenerate() || !size.width.is_finite() || !size.height.is_finite() {
                return Err(fail(format!("{} must be positive", name)));
            }
        }
        if self.resize_min.width < MIN_RESIZE_SIDE || self.resize_min.height < MIN_RESIZE_SIDE {
            return Err(fail(format!(
                "resize_min must be at least {} on each side",
                MIN_RESIZE_SIDE
            )));
        }
        if let Extent::Fixed { width, height } = self.max {
            let floor_w = self.pinch_min.width.max(self.resize_min.width);
            let floor_h = self.pinch_min.height.max(self.resize_min.height);
            if width < floor_w || height < floor_h {
                return Err(fail(format!(
                    "fixed max {}x{} is below the minimum {}x{}",
                    width, height, floor_w, floor_h
                )));
            }
        }
        Ok(())
    }
}

/// Per-kind bounds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoundsTable {
    pub field: KindBounds,
    pub signature: KindBounds,
}

impl BoundsTable {
    pub fn for_kind(&self, kind: OverlayKind) -> &KindBounds {
        match kind {
            OverlayKind::Field => &self.field,
            OverlayKind::Signature => &self.signature,
        }
    }
}

impl Default for BoundsTable {
    fn default() -> Self {
        Self {
            field: KindBounds::field(),
            signature: KindBounds::signature(),
        }
    }
}

/// Pinch scale range and rubber-band stiffness
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScaleBounds {
    pub min: f64,
    pub max: f64,
    /// Overshoot stiffness while the pinch is live; 0 disables rubber-banding
    pub rubberband: f64,
}

impl Default for ScaleBounds {
    fn default() -> Self {
        Self {
            min: 0.5,
            max: 3.0,
            rubberband: 0.15,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Screen pixels a pointer must travel before a press becomes a drag
    pub tap_threshold_px: f64,
    pub scale_bounds: ScaleBounds,
    /// Extra grab area around each marker, in document units
    pub hit_padding: f64,
    pub bounds: BoundsTable,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            tap_threshold_px: 3.0,
            scale_bounds: ScaleBounds::default(),
            hit_padding: 15.0,
            bounds: BoundsTable::default(),
        }
    }
}

impl EngineConfig {
    /// Parse and validate a TOML configuration
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: EngineConfig =
            toml::from_str(s).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML configuration file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::from_toml_str(&content)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.tap_threshold_px.is_finite() || self.tap_threshold_px < 0.0 {
            return Err(ConfigError::TapThreshold(self.tap_threshold_px));
        }

        let ScaleBounds {
            min,
            max,
            rubberband,
        } = self.scale_bounds;
        if !(min.is_finite() && max.is_finite() && min > 0.0 && min <= 1.0 && max >= 1.0) {
            return Err(ConfigError::ScaleBounds { min, max });
        }
        if !(0.0..=1.0).contains(&rubberband) {
            return Err(ConfigError::Rubberband(rubberband));
        }

        self.bounds.field.validate(OverlayKind::Field)?;
        self.bounds.signature.validate(OverlayKind::Signature)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const LETTER: Size = Size::new(612.0, 792.0);

    #[test]
    fn test_defaults_are_valid() {
        assert!(EngineConfig::default().validate().is_ok());
    }

    #[test]
    fn test_empty_toml_gives_defaults() {
        let config = EngineConfig::from_toml_str("").unwrap();
        assert_eq!(config, EngineConfig::default());
    }

    #[test]
    fn test_signature_limits_follow_page() {
        let limits = KindBounds::signature().limits(SizingGesture::Pinch, LETTER);
        assert_eq!(limits.max, LETTER);
        assert_eq!(limits.min, Size::new(50.0, 30.0));

        let limits = KindBounds::signature().limits(SizingGesture::CornerResize, LETTER);
        assert_eq!(limits.min, Size::new(20.0, 20.0));
    }

    #[test]
    fn test_field_limits_are_fixed_but_page_capped() {
        let limits = KindBounds::field().limits(SizingGesture::Pinch, LETTER);
        assert_eq!(limits.max, Size::new(400.0, 300.0));

        let tiny = Size::new(200.0, 25.0);
        let limits = KindBounds::field().limits(SizingGesture::CornerResize, tiny);
        assert_eq!(limits.max, Size::new(200.0, 25.0));
        assert_eq!(limits.min, Size::new(50.0, 25.0));
    }

    #[test]
    fn test_limits_clamp_degenerate_to_minimum() {
        let limits = KindBounds::field().limits(SizingGesture::CornerResize, LETTER);
        assert_eq!(limits.clamp(Size::new(-40.0, 0.0)), Size::new(50.0, 30.0));
        assert_eq!(limits.clamp(Size::new(f64::NAN, 1000.0)), Size::new(50.0, 300.0));
    }

    #[test]
    fn test_rejects_inverted_scale_bounds() {
        let mut config = EngineConfig::default();
        config.scale_bounds.min = 2.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ScaleBounds { .. })
        ));
    }

    #[test]
    fn test_rejects_resize_minimum_below_floor() {
        let toml = r#"
            [bounds.signature]
            pinch_min = { width = 50.0, height = 30.0 }
            resize_min = { width = 10.0, height = 20.0 }
            max = { type = "page" }
        "#;
        let err = EngineConfig::from_toml_str(toml).unwrap_err();
        assert!(matches!(err, ConfigError::KindBounds { ref kind, .. } if kind == "signature"));
    }

    #[test]
    fn test_rejects_fixed_max_below_minimum() {
        let mut config = EngineConfig::default();
        config.bounds.field.max = Extent::Fixed {
            width: 40.0,
            height: 300.0,
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_parse_error_is_reported() {
        let err = EngineConfig::from_toml_str("tap_threshold_px = \"three\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_file_is_reported() {
        let err = EngineConfig::from_file("/nonexistent/overlay.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
