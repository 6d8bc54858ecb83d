//! Coordinate normalizer - resolution-independent placement
//!
//! Static world points (encounter markers, planet hotspots) are stored as
//! ratios of a *reference size*: the background image when one is loaded,
//! otherwise the window size at scene start. On every resize the ratios are
//! projected back onto the new window. Ratios are never recomputed from a
//! later window size, so repeated resizes cannot drift.
//!
//! Radii scale against the larger reference dimension.

use crate::types::{Size, Vec2};

/// Position expressed as fractions of a reference size. Not clamped.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct NormalizedPoint {
    pub x_ratio: f32,
    pub y_ratio: f32,
}

impl NormalizedPoint {
    pub const fn new(x_ratio: f32, y_ratio: f32) -> Self {
        Self { x_ratio, y_ratio }
    }
}

/// Background size when one is loaded, else the window size.
pub fn reference_size(background: Option<Size>, window: Size) -> Size {
    background.unwrap_or(window)
}

pub fn normalize(point: Vec2, reference: Size) -> NormalizedPoint {
    if reference.is_degenerate() {
        return NormalizedPoint::default();
    }
    NormalizedPoint {
        x_ratio: point.x / reference.width as f32,
        y_ratio: point.y / reference.height as f32,
    }
}

/// Project a ratio onto a window, rounding to whole pixels.
pub fn denormalize(ratio: NormalizedPoint, window: Size) -> Vec2 {
    Vec2::new(
        (ratio.x_ratio * window.width as f32).round(),
        (ratio.y_ratio * window.height as f32).round(),
    )
}

pub fn normalize_radius(radius: f32, reference: Size) -> f32 {
    radius / reference.longest_side()
}

/// Denormalized radius, never below one pixel.
pub fn denormalize_radius(ratio: f32, window: Size) -> f32 {
    (ratio * window.longest_side()).round().max(1.0)
}

/// Re-express a point from one window size in another, keeping its ratios.
pub fn rescale(point: Vec2, from: Size, to: Size) -> Vec2 {
    if from.is_degenerate() {
        return point;
    }
    denormalize(normalize(point, from), to)
}

#[derive(Debug, Clone)]
pub struct ScaledEntry<T> {
    pub item: T,
    pub ratio: NormalizedPoint,
    pub radius_ratio: Option<f32>,
    pub position: Vec2,
    pub radius: Option<f32>,
}

/// Table of tracked points sharing one reference size.
///
/// The reference size is fixed at construction. Call [`ScaledLayout::on_resize`]
/// at scene start and on every resize to refresh the absolute positions.
#[derive(Debug, Clone)]
pub struct ScaledLayout<T> {
    reference: Size,
    window: Size,
    entries: Vec<ScaledEntry<T>>,
}

impl<T> ScaledLayout<T> {
    pub fn new(reference: Size, window: Size) -> Self {
        Self {
            reference,
            window,
            entries: Vec::new(),
        }
    }

    pub fn reference(&self) -> Size {
        self.reference
    }

    pub fn window(&self) -> Size {
        self.window
    }

    /// Track a point given in reference-space pixels.
    pub fn insert(&mut self, item: T, position: Vec2, radius: Option<f32>) -> usize {
        let ratio = normalize(position, self.reference);
        let radius_ratio = radius.map(|r| normalize_radius(r, self.reference));
        self.insert_normalized(item, ratio, radius_ratio)
    }

    /// Track a point given directly as ratios.
    pub fn insert_normalized(
        &mut self,
        item: T,
        ratio: NormalizedPoint,
        radius_ratio: Option<f32>,
    ) -> usize {
        self.entries.push(ScaledEntry {
            position: denormalize(ratio, self.window),
            radius: radius_ratio.map(|r| denormalize_radius(r, self.window)),
            item,
            ratio,
            radius_ratio,
        });
        self.entries.len() - 1
    }

    /// Recompute every absolute position from its stored ratio.
    pub fn on_resize(&mut self, window: Size) {
        self.window = window;
        for entry in &mut self.entries {
            entry.position = denormalize(entry.ratio, window);
            entry.radius = entry.radius_ratio.map(|r| denormalize_radius(r, window));
        }
    }

    pub fn get(&self, index: usize) -> Option<&ScaledEntry<T>> {
        self.entries.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut ScaledEntry<T>> {
        self.entries.get_mut(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ScaledEntry<T>> {
        self.entries.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, ScaledEntry<T>> {
        self.entries.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centre_point_round_trips_across_windows() {
        let reference = Size::new(1280, 720);
        let ratio = normalize(Vec2::new(640.0, 360.0), reference);
        assert_eq!(ratio, NormalizedPoint::new(0.5, 0.5));
        assert_eq!(denormalize(ratio, Size::new(1920, 1080)), Vec2::new(960.0, 540.0));
    }

    #[test]
    fn degenerate_reference_yields_origin() {
        let r = normalize(Vec2::new(100.0, 100.0), Size::new(0, 720));
        assert_eq!(r, NormalizedPoint::default());
        let r = normalize(Vec2::new(100.0, 100.0), Size::new(1280, 0));
        assert_eq!(r, NormalizedPoint::default());
    }

    #[test]
    fn background_wins_over_window() {
        let window = Size::new(1280, 720);
        assert_eq!(reference_size(None, window), window);
        assert_eq!(
            reference_size(Some(Size::new(1024, 768)), window),
            Size::new(1024, 768)
        );
    }

    #[test]
    fn radius_uses_longest_side_and_has_floor() {
        let reference = Size::new(1280, 720);
        let r = normalize_radius(64.0, reference);
        assert_eq!(r, 0.05);
        assert_eq!(denormalize_radius(r, Size::new(640, 1000)), 50.0);
        assert_eq!(denormalize_radius(0.0001, Size::new(100, 100)), 1.0);
        assert_eq!(denormalize_radius(0.5, Size::new(0, 0)), 1.0);
    }

    #[test]
    fn resize_keeps_ratios_and_does_not_drift() {
        let reference = Size::new(1000, 500);
        let mut layout = ScaledLayout::new(reference, reference);
        let i = layout.insert("marker", Vec2::new(250.0, 125.0), Some(30.0));

        for window in [
            Size::new(333, 777),
            Size::new(1920, 1080),
            Size::new(17, 9),
            Size::new(1000, 500),
        ] {
            layout.on_resize(window);
        }

        let entry = layout.get(i).unwrap();
        assert_eq!(entry.ratio, NormalizedPoint::new(0.25, 0.25));
        assert_eq!(entry.position, Vec2::new(250.0, 125.0));
        assert_eq!(entry.radius, Some(30.0));
        assert_eq!(layout.reference(), reference);
    }

    #[test]
    fn rescale_preserves_relative_position() {
        let p = rescale(
            Vec2::new(320.0, 180.0),
            Size::new(1280, 720),
            Size::new(640, 360),
        );
        assert_eq!(p, Vec2::new(160.0, 90.0));
        assert_eq!(
            rescale(Vec2::new(5.0, 5.0), Size::new(0, 0), Size::new(10, 10)),
            Vec2::new(5.0, 5.0)
        );
    }
}
