//! Gesture engine for page-anchored overlay markers
//!
//! Signature and form-field markers sit on top of a rendered, scrollable,
//! zoomable multi-page document. This crate turns pointer and touch events
//! into drag, pinch and corner-resize gestures, keeps in-flight state
//! tentative, and reports one committed update per gesture to the host.
//!
//! - [`OverlayEngine`]: gesture routing, placement, selection
//! - [`PageGeometry`]: live page layout supplied by the host viewer
//! - [`PageLocator`]: decides which page a dragged marker lands on
//! - [`EngineConfig`]: thresholds, scale bounds and per-kind size limits

pub mod config;
pub mod display;
pub mod drag;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod host;
pub mod locator;
pub mod overlay;
pub mod page;
pub mod pinch;
pub mod resize;
pub mod session;

pub use config::{BoundsTable, EngineConfig, Extent, KindBounds, ScaleBounds, SizeLimits, SizingGesture};
pub use display::DisplayFrame;
pub use engine::{GestureOutcome, IgnoreReason, OverlayEngine};
pub use error::{ConfigError, OverlayError};
pub use geometry::{Rect, ScreenPoint, ScreenRect, ScreenVector, Size};
pub use host::{CaptureGuard, HostEvent, OverlayHost, PointerCapture};
pub use locator::{Location, PageLocator};
pub use overlay::{Overlay, OverlayColor, OverlayId, OverlayKind, OverlayStore, OverlayUpdate};
pub use page::{PageGeometry, ScrollOffset, StackedLayout};
pub use pinch::TouchPair;
pub use resize::Corner;
pub use session::SessionKind;
