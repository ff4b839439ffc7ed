//! Two-finger pinch resize, anchored on the marker's center

use crate::config::{ScaleBounds, SizeLimits};
use crate::geometry::{clamp_min_wins, Rect, ScreenPoint, Size};

/// Finger spreads below this distance are too noisy to derive a scale from
const MIN_TOUCH_DISTANCE_PX: f64 = 10.0;

impl ScaleBounds {
    /// Hard clamp into `[min, max]`. NaN means "no change".
    pub fn clamp(&self, scale: f64) -> f64 {
        if scale.is_nan() {
            return 1.0;
        }
        clamp_min_wins(scale, self.min, self.max)
    }

    /// Scale shown while the pinch is live: past the bounds it overshoots
    /// with diminishing returns instead of stopping dead.
    pub fn rubberband(&self, scale: f64) -> f64 {
        if scale.is_nan() {
            return 1.0;
        }
        if !scale.is_finite() || self.rubberband <= 0.0 {
            return self.clamp(scale);
        }
        let range = self.max - self.min;
        if scale < self.min {
            self.min - overshoot(self.min - scale, range, self.rubberband)
        } else if scale > self.max {
            self.max + overshoot(scale - self.max, range, self.rubberband)
        } else {
            scale
        }
    }
}

fn overshoot(distance: f64, dimension: f64, constant: f64) -> f64 {
    if dimension <= 0.0 {
        return 0.0;
    }
    (distance * dimension * constant) / (dimension + constant * distance)
}

/// Two touch points of a pinch
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchPair {
    pub first: ScreenPoint,
    pub second: ScreenPoint,
}

impl TouchPair {
    pub fn new(first: ScreenPoint, second: ScreenPoint) -> Self {
        Self { first, second }
    }

    pub fn distance(&self) -> f64 {
        self.first.distance_to(self.second)
    }
}

/// Center-anchored resize of `base` by `scale`
pub fn pinch_rect(base: Rect, scale: f64, limits: SizeLimits, page: Size) -> Rect {
    let size = limits.clamp(Size::new(base.width * scale, base.height * scale));
    let (center_x, center_y) = base.center();
    Rect {
        x: clamp_min_wins(center_x - size.width / 2.0, 0.0, page.width - size.width),
        y: clamp_min_wins(center_y - size.height / 2.0, 0.0, page.height - size.height),
        width: size.width,
        height: size.height,
    }
}

#[derive(Debug, Clone)]
pub struct PinchController {
    base: Rect,
    scale_bounds: ScaleBounds,
    initial_distance: Option<f64>,
    last_scale: Option<f64>,
    tentative: Option<Rect>,
}

impl PinchController {
    /// Start a pinch from the last committed rectangle
    pub fn new(base: Rect, scale_bounds: ScaleBounds) -> Self {
        Self {
            base,
            scale_bounds,
            initial_distance: None,
            last_scale: None,
            tentative: None,
        }
    }

    /// Start a pinch from two touch points; later touch pairs are scaled
    /// against this finger spread.
    pub fn with_touches(base: Rect, scale_bounds: ScaleBounds, touches: TouchPair) -> Self {
        Self {
            initial_distance: Some(touches.distance()),
            ..Self::new(base, scale_bounds)
        }
    }

    pub fn base(&self) -> Rect {
        self.base
    }

    pub fn tentative(&self) -> Option<Rect> {
        self.tentative
    }

    /// Whether the pinch started from touch points
    pub fn has_touch_baseline(&self) -> bool {
        self.initial_distance.is_some()
    }

    /// Scale implied by a touch pair relative to the starting spread
    pub fn touch_scale(&self, touches: TouchPair) -> f64 {
        match self.initial_distance {
            Some(initial) if initial >= MIN_TOUCH_DISTANCE_PX => touches.distance() / initial,
            _ => 1.0,
        }
    }

    /// Feed a scale relative to gesture start; returns the tentative rectangle
    pub fn update(&mut self, scale: f64, limits: SizeLimits, page: Size) -> Rect {
        self.last_scale = Some(scale);
        let live = self.scale_bounds.rubberband(scale);
        let rect = pinch_rect(self.base, live, limits, page);
        self.tentative = Some(rect);
        rect
    }

    /// Final rectangle with the scale collapsed onto its bounds, or `None`
    /// if no scale was ever reported.
    pub fn release(&self, limits: SizeLimits, page: Size) -> Option<Rect> {
        let scale = self.scale_bounds.clamp(self.last_scale?);
        Some(pinch_rect(self.base, scale, limits, page))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{KindBounds, SizingGesture};
    use pretty_assertions::assert_eq;

    const PAGE: Size = Size::new(800.0, 1000.0);

    fn signature_limits() -> SizeLimits {
        KindBounds::signature().limits(SizingGesture::Pinch, PAGE)
    }

    #[test]
    fn test_pinch_doubles_around_center() {
        let mut pinch = PinchController::new(
            Rect::new(100.0, 100.0, 100.0, 60.0),
            ScaleBounds::default(),
        );
        pinch.update(2.0, signature_limits(), PAGE);
        let rect = pinch.release(signature_limits(), PAGE).unwrap();
        assert_eq!(rect, Rect::new(50.0, 70.0, 200.0, 120.0));
    }

    #[test]
    fn test_scale_beyond_max_collapses_to_bound() {
        let base = Rect::new(100.0, 100.0, 100.0, 60.0);
        let mut huge = PinchController::new(base, ScaleBounds::default());
        huge.update(10.0, signature_limits(), PAGE);
        let mut max = PinchController::new(base, ScaleBounds::default());
        max.update(3.0, signature_limits(), PAGE);
        assert_eq!(
            huge.release(signature_limits(), PAGE),
            max.release(signature_limits(), PAGE)
        );
    }

    #[test]
    fn test_live_scale_rubberbands_past_bounds() {
        let bounds = ScaleBounds::default();
        let live = bounds.rubberband(4.0);
        assert!(live > 3.0 && live < 4.0);
        let low = bounds.rubberband(0.1);
        assert!(low < 0.5 && low > 0.1);
        assert_eq!(bounds.rubberband(1.7), 1.7);
    }

    #[test]
    fn test_rubberband_disabled_is_hard_clamp() {
        let bounds = ScaleBounds {
            rubberband: 0.0,
            ..ScaleBounds::default()
        };
        assert_eq!(bounds.rubberband(4.0), 3.0);
        assert_eq!(bounds.rubberband(f64::INFINITY), 3.0);
        assert_eq!(bounds.clamp(f64::NAN), 1.0);
    }

    #[test]
    fn test_field_pinch_respects_fixed_bounds() {
        let limits = KindBounds::field().limits(SizingGesture::Pinch, PAGE);
        let mut pinch = PinchController::new(
            Rect::new(100.0, 100.0, 300.0, 200.0),
            ScaleBounds::default(),
        );
        let rect = pinch.update(3.0, limits, PAGE);
        assert_eq!((rect.width, rect.height), (400.0, 300.0));
        // Center (250, 200) kept
        assert_eq!((rect.x, rect.y), (50.0, 50.0));
    }

    #[test]
    fn test_pinch_near_edge_stays_on_page() {
        let mut pinch = PinchController::new(
            Rect::new(700.0, 900.0, 100.0, 100.0),
            ScaleBounds::default(),
        );
        let rect = pinch.update(2.0, signature_limits(), PAGE);
        assert_eq!(rect, Rect::new(600.0, 800.0, 200.0, 200.0));
        assert!(rect.fits_within(PAGE));
    }

    #[test]
    fn test_touch_scale_from_finger_spread() {
        let start = TouchPair::new(ScreenPoint::new(0.0, 0.0), ScreenPoint::new(100.0, 0.0));
        let pinch = PinchController::with_touches(
            Rect::new(0.0, 0.0, 100.0, 100.0),
            ScaleBounds::default(),
            start,
        );
        let spread = TouchPair::new(ScreenPoint::new(0.0, 0.0), ScreenPoint::new(0.0, 150.0));
        assert_eq!(pinch.touch_scale(spread), 1.5);
    }

    #[test]
    fn test_touch_scale_ignores_tiny_initial_spread() {
        let start = TouchPair::new(ScreenPoint::new(0.0, 0.0), ScreenPoint::new(2.0, 0.0));
        let pinch = PinchController::with_touches(
            Rect::new(0.0, 0.0, 100.0, 100.0),
            ScaleBounds::default(),
            start,
        );
        let spread = TouchPair::new(ScreenPoint::new(0.0, 0.0), ScreenPoint::new(200.0, 0.0));
        assert_eq!(pinch.touch_scale(spread), 1.0);
    }

    #[test]
    fn test_release_without_updates_is_none() {
        let pinch = PinchController::new(Rect::new(0.0, 0.0, 100.0, 100.0), ScaleBounds::default());
        assert_eq!(pinch.release(signature_limits(), PAGE), None);
    }
}
