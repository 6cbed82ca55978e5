//! Intrinsic width measurement for line breaking.
//!
//! This module provides the backend-agnostic capability the layout core uses to
//! learn how wide each renderable item is. How the width is obtained (shaping
//! text, rendering offscreen, reading a fixed size) is entirely up to the host.

/// Backend-agnostic item width measurement.
///
/// Implementors return the intrinsic width of a payload in the same unit as the
/// container width. The call must be synchronous and idempotent for the same
/// payload during one layout pass; the core calls it at most once per item per
/// pass through [`crate::WidthCache`].
///
/// A measurer that cannot size an item should return `0.0`, which hides the
/// item. Negative and NaN results are clamped to `0.0` by the cache.
///
/// Any `FnMut(&T) -> f64` closure is a measurer.
pub trait WidthMeasurer<T> {
    /// Measure the intrinsic width of a single renderable payload.
    fn measure_width(&mut self, payload: &T) -> f64;
}

impl<T, F> WidthMeasurer<T> for F
where
    F: FnMut(&T) -> f64,
{
    fn measure_width(&mut self, payload: &T) -> f64 {
        self(payload)
    }
}

/// Measurer for payloads that already carry their width.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedWidth;

impl WidthMeasurer<f64> for FixedWidth {
    fn measure_width(&mut self, payload: &f64) -> f64 {
        *payload
    }
}

/// Clamp a raw width, gap or height to a usable length.
///
/// NaN and negative values become `0.0`; a zero item width is invisible.
pub(crate) fn non_negative(value: f64) -> f64 {
    if value > 0.0 {
        value
    } else {
        0.0
    }
}
