//! Committed overlay state
//!
//! `OverlayStore` mirrors the markers owned by the host document store. It is
//! only ever written through committed gesture updates, placement and removal;
//! tentative gesture state never reaches it.

use crate::error::OverlayError;
use crate::geometry::{Rect, Size};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Opaque marker identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OverlayId(String);

impl OverlayId {
    /// Generate a fresh random id
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for OverlayId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for OverlayId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for OverlayId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverlayKind {
    /// A generic form field (text, date, checkbox...)
    Field,
    /// A captured signature image
    Signature,
}

impl OverlayKind {
    /// Default dimensions when the host places a marker without a size (width, height)
    pub fn default_size(&self) -> Size {
        match self {
            OverlayKind::Signature => Size::new(200.0, 50.0),
            OverlayKind::Field => Size::new(150.0, 30.0),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OverlayKind::Field => "field",
            OverlayKind::Signature => "signature",
        }
    }
}

impl fmt::Display for OverlayKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OverlayKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "field" => Ok(OverlayKind::Field),
            "signature" => Ok(OverlayKind::Signature),
            other => Err(format!("Unknown overlay kind: {}", other)),
        }
    }
}

/// Marker accent color, stored as `#rrggbb`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct OverlayColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl OverlayColor {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a `#rrggbb` hex string
    pub fn from_hex(hex: &str) -> Result<Self, OverlayError> {
        let digits = hex
            .strip_prefix('#')
            .filter(|d| d.len() == 6 && d.is_ascii())
            .ok_or_else(|| OverlayError::InvalidColor(hex.to_string()))?;
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16)
                .map_err(|_| OverlayError::InvalidColor(hex.to_string()))
        };
        Ok(Self {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }

    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// CSS `rgba()` string, opacity clamped to [0, 1]
    pub fn to_rgba(&self, opacity: f64) -> String {
        let opacity = if opacity.is_nan() {
            1.0
        } else {
            opacity.clamp(0.0, 1.0)
        };
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, opacity)
    }
}

impl Default for OverlayColor {
    fn default() -> Self {
        // Material Design 3 primary
        Self::rgb(0x67, 0x50, 0xA4)
    }
}

impl TryFrom<String> for OverlayColor {
    type Error = OverlayError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_hex(&value)
    }
}

impl From<OverlayColor> for String {
    fn from(value: OverlayColor) -> Self {
        value.to_hex()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Overlay {
    pub id: OverlayId,
    pub kind: OverlayKind,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Zero-based page index
    pub page: usize,
    #[serde(default)]
    pub color: OverlayColor,
}

impl Overlay {
    pub fn new(id: OverlayId, kind: OverlayKind, page: usize, rect: Rect) -> Self {
        Self {
            id,
            kind,
            x: rect.x,
            y: rect.y,
            width: rect.width,
            height: rect.height,
            page,
            color: OverlayColor::default(),
        }
    }

    pub fn with_color(mut self, color: OverlayColor) -> Self {
        self.color = color;
        self
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Apply a committed update in place
    pub fn apply(&mut self, update: &OverlayUpdate) {
        if let Some(x) = update.x {
            self.x = x;
        }
        if let Some(y) = update.y {
            self.y = y;
        }
        if let Some(width) = update.width {
            self.width = width;
        }
        if let Some(height) = update.height {
            self.height = height;
        }
        if let Some(page) = update.page {
            self.page = page;
        }
    }
}

/// Partial update handed to the host on commit
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct OverlayUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<usize>,
}

impl OverlayUpdate {
    /// Position-only update
    pub fn moved(x: f64, y: f64) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
            ..Self::default()
        }
    }

    /// Position update that also reassigns the page
    pub fn migrated(page: usize, x: f64, y: f64) -> Self {
        Self {
            page: Some(page),
            ..Self::moved(x, y)
        }
    }

    /// Full geometry update from a resize
    pub fn resized(rect: Rect) -> Self {
        Self {
            x: Some(rect.x),
            y: Some(rect.y),
            width: Some(rect.width),
            height: Some(rect.height),
            page: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Committed markers, in placement order
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OverlayStore {
    overlays: Vec<Overlay>,
}

impl OverlayStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a marker, rejecting duplicate ids
    pub fn insert(&mut self, overlay: Overlay) -> Result<(), OverlayError> {
        if self.contains(&overlay.id) {
            return Err(OverlayError::DuplicateOverlay(overlay.id.to_string()));
        }
        self.overlays.push(overlay);
        Ok(())
    }

    pub fn contains(&self, id: &OverlayId) -> bool {
        self.overlays.iter().any(|o| &o.id == id)
    }

    pub fn get(&self, id: &OverlayId) -> Option<&Overlay> {
        self.overlays.iter().find(|o| &o.id == id)
    }

    /// Apply an update to an existing marker. Returns false when the id is unknown.
    pub fn apply(&mut self, id: &OverlayId, update: &OverlayUpdate) -> bool {
        match self.overlays.iter_mut().find(|o| &o.id == id) {
            Some(overlay) => {
                overlay.apply(update);
                true
            }
            None => false,
        }
    }

    pub fn set_color(&mut self, id: &OverlayId, color: OverlayColor) -> bool {
        match self.overlays.iter_mut().find(|o| &o.id == id) {
            Some(overlay) => {
                overlay.color = color;
                true
            }
            None => false,
        }
    }

    /// Remove a marker and return it
    pub fn remove(&mut self, id: &OverlayId) -> Option<Overlay> {
        let index = self.overlays.iter().position(|o| &o.id == id)?;
        Some(self.overlays.remove(index))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Overlay> {
        self.overlays.iter()
    }

    pub fn len(&self) -> usize {
        self.overlays.len()
    }

    pub fn is_empty(&self) -> bool {
        self.overlays.is_empty()
    }
}
