use crate::item::{Item, ItemModel};
use crate::measure::{non_negative, WidthMeasurer};

/// Widths below this are treated as absent from spacing decisions.
pub const VISIBILITY_EPSILON: f64 = 1e-9;

/// Lazily measured item widths for one layout pass
///
/// The cache is bound to a single item model and a single container width.
/// Each renderable item is measured at most once, on first access; the line
/// breaker and the line renderer share the same cache so no item is measured
/// twice in a pass. A different container width needs a new cache.
pub struct WidthCache<'a, T, M> {
    items: &'a ItemModel<T>,
    measurer: M,
    container_width: f64,
    widths: Vec<Option<f64>>,
    measurements: usize,
}

impl<'a, T, M> WidthCache<'a, T, M>
where
    M: WidthMeasurer<T>,
{
    /// Create an empty cache. No measurement happens until a width is requested.
    ///
    /// NaN or negative container widths are treated as `0.0`.
    pub fn new(items: &'a ItemModel<T>, measurer: M, container_width: f64) -> Self {
        Self {
            items,
            measurer,
            container_width: non_negative(container_width),
            widths: vec![None; items.len()],
            measurements: 0,
        }
    }

    pub fn items(&self) -> &'a ItemModel<T> {
        self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The container width this cache was created for
    pub fn container_width(&self) -> f64 {
        self.container_width
    }

    /// Width of the item at `index`, measuring it on first access
    ///
    /// Line breaks are always `0.0` and never reach the measurer.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn width_of(&mut self, index: usize) -> f64 {
        if let Some(width) = self.widths[index] {
            return width;
        }

        let width = match self.items.get(index) {
            Item::LineBreak => 0.0,
            Item::Renderable(payload) => {
                self.measurements += 1;
                let raw = self.measurer.measure_width(payload);
                let width = non_negative(raw);
                if width != raw {
                    log::debug!("clamped width of item {index} from {raw} to {width}");
                }
                width
            }
        };

        self.widths[index] = Some(width);
        width
    }

    /// Whether the item at `index` takes part in width accumulation and spacing
    ///
    /// Line breaks are never visible.
    pub fn is_visible(&mut self, index: usize) -> bool {
        self.width_of(index) > VISIBILITY_EPSILON
    }

    /// Width of the item at `index` if it has already been measured
    pub fn cached(&self, index: usize) -> Option<f64> {
        self.widths.get(index).copied().flatten()
    }

    /// Number of times the measurer has been invoked
    pub fn measurement_count(&self) -> usize {
        self.measurements
    }

    /// Measure every item and return the widths in index order
    pub fn widths(&mut self) -> Vec<f64> {
        (0..self.len()).map(|index| self.width_of(index)).collect()
    }
}
