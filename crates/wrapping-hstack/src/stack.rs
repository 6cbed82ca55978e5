use crate::arrange::{arrange, Arrangement};
use crate::item::{Item, ItemModel};
use crate::line_breaker::{break_lines, Line};
use crate::measure::{non_negative, WidthMeasurer};
use crate::renderer::{LinePlan, LineRenderer, RenderPlan, RenderSink};
use crate::spacing::{HorizontalAlign, Spacing};
use crate::width_cache::WidthCache;

/// Minimum change before a newly measured content height replaces the stored one.
pub const HEIGHT_CHANGE_THRESHOLD: f64 = 1.0;

/// Result of one layout pass at a single container width
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutPass {
    pub container_width: f64,
    pub lines: Vec<Line>,
    pub plan: RenderPlan,
    /// Measured width of every item, `0.0` for hidden items and line breaks
    pub widths: Vec<f64>,
    /// How many times the measurer ran during the pass
    pub measurements: usize,
}

impl LayoutPass {
    /// Measure, break and plan `items` at `container_width`
    ///
    /// One width cache is shared by the breaker and the renderer, so every
    /// item is measured at most once.
    pub fn compute<T, M>(
        items: &ItemModel<T>,
        measurer: M,
        container_width: f64,
        spacing: Spacing,
        alignment: HorizontalAlign,
    ) -> Self
    where
        M: WidthMeasurer<T>,
    {
        let mut cache = WidthCache::new(items, measurer, container_width);
        let lines = break_lines(&mut cache, spacing);
        let plan = LineRenderer::new(spacing, alignment).plan(&mut cache, &lines);
        let widths = cache.widths();

        log::debug!(
            "laid out {} items into {} lines at width {} ({} measurements)",
            items.len(),
            lines.len(),
            cache.container_width(),
            cache.measurement_count()
        );

        Self {
            container_width: cache.container_width(),
            lines,
            plan,
            widths,
            measurements: cache.measurement_count(),
        }
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn is_visible(&self, index: usize) -> bool {
        self.widths
            .get(index)
            .is_some_and(|&width| width > crate::VISIBILITY_EPSILON)
    }
}

/// Height of the laid out content, as propagated back to the host
///
/// Changes of at most [`HEIGHT_CHANGE_THRESHOLD`] are ignored so that a
/// container sizing itself from its own content height settles instead of
/// oscillating on rounding noise.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ContentHeight {
    value: f64,
}

impl ContentHeight {
    pub const fn new(value: f64) -> Self {
        Self { value }
    }

    pub const fn get(&self) -> f64 {
        self.value
    }

    /// Store `measured` if it differs enough from the current height
    ///
    /// Returns whether the stored height changed. NaN is ignored.
    pub fn update(&mut self, measured: f64) -> bool {
        if (self.value - measured).abs() > HEIGHT_CHANGE_THRESHOLD {
            self.value = measured;
            true
        } else {
            false
        }
    }
}

/// A horizontal stack that wraps overflowing items onto new lines
///
/// Holds the content and configuration, and remembers the last layout pass.
/// The pass is reused while the container width and content stay the same;
/// any change discards it, together with its measured widths.
pub struct WrappingHStack<T> {
    items: ItemModel<T>,
    alignment: HorizontalAlign,
    spacing: Spacing,
    line_spacing: f64,
    pass: Option<LayoutPass>,
    height: ContentHeight,
}

impl<T> WrappingHStack<T> {
    /// Create a stack with leading alignment, `Spacing::Constant(8.0)` and no line spacing
    pub fn new(items: impl IntoIterator<Item = Item<T>>) -> Self {
        Self {
            items: items.into_iter().collect(),
            alignment: HorizontalAlign::default(),
            spacing: Spacing::default(),
            line_spacing: 0.0,
            pass: None,
            height: ContentHeight::default(),
        }
    }

    /// Create a stack by mapping every datum to an item
    pub fn from_data<D>(
        data: impl IntoIterator<Item = D>,
        content: impl FnMut(D) -> Item<T>,
    ) -> Self {
        Self::new(data.into_iter().map(content))
    }

    /// Set the horizontal alignment of every line
    pub fn with_alignment(mut self, alignment: HorizontalAlign) -> Self {
        self.alignment = alignment;
        self.pass = None;
        self
    }

    /// Set the spacing policy
    pub fn with_spacing(mut self, spacing: Spacing) -> Self {
        self.spacing = spacing;
        self.pass = None;
        self
    }

    /// Set the vertical distance between lines
    pub fn with_line_spacing(mut self, line_spacing: f64) -> Self {
        self.line_spacing = non_negative(line_spacing);
        self
    }

    /// Append a renderable item
    pub fn with_item(self, payload: T) -> Self {
        self.with_items([Item::Renderable(payload)])
    }

    /// Append a forced line break
    pub fn with_line_break(self) -> Self {
        self.with_items([Item::LineBreak])
    }

    /// Append several items
    pub fn with_items(mut self, items: impl IntoIterator<Item = Item<T>>) -> Self {
        let mut all = std::mem::take(&mut self.items).into_vec();
        all.extend(items);
        self.set_items(all);
        self
    }

    /// Replace the content, discarding the previous layout pass
    pub fn set_items(&mut self, items: impl IntoIterator<Item = Item<T>>) {
        self.items = items.into_iter().collect();
        self.pass = None;
    }

    pub fn items(&self) -> &ItemModel<T> {
        &self.items
    }

    pub fn alignment(&self) -> HorizontalAlign {
        self.alignment
    }

    pub fn spacing(&self) -> Spacing {
        self.spacing
    }

    pub fn line_spacing(&self) -> f64 {
        self.line_spacing
    }

    /// Lay the content out at `container_width`
    ///
    /// Reuses the previous pass when the width is unchanged; otherwise a new
    /// width cache is built and every item is measured again, once.
    pub fn layout<M>(&mut self, container_width: f64, measurer: M) -> &LayoutPass
    where
        M: WidthMeasurer<T>,
    {
        let container_width = non_negative(container_width);

        if self
            .pass
            .as_ref()
            .is_some_and(|pass| pass.container_width == container_width)
        {
            log::trace!("reusing layout pass at width {container_width}");
        } else {
            self.pass = None;
        }

        let items = &self.items;
        let (spacing, alignment) = (self.spacing, self.alignment);
        self.pass.get_or_insert_with(|| {
            LayoutPass::compute(items, measurer, container_width, spacing, alignment)
        })
    }

    /// The last layout pass, if the content has been laid out since it last changed
    pub fn pass(&self) -> Option<&LayoutPass> {
        self.pass.as_ref()
    }

    /// Feed the last layout pass to `sink`
    ///
    /// Returns `false` without rendering anything if there is no current pass.
    pub fn render(&self, sink: &mut impl RenderSink<T>) -> bool {
        match &self.pass {
            Some(pass) => {
                pass.plan.render(&self.items, sink);
                true
            }
            None => false,
        }
    }

    /// Position every visible item of the last pass
    pub fn arrange(&self, line_height: impl FnMut(&LinePlan) -> f64) -> Option<Arrangement> {
        self.pass
            .as_ref()
            .map(|pass| arrange(&pass.plan, self.line_spacing, line_height))
    }

    /// Recompute the content height of the last pass and store it
    ///
    /// Returns whether the propagated height changed.
    pub fn update_height(&mut self, line_height: impl FnMut(&LinePlan) -> f64) -> bool {
        match self.arrange(line_height) {
            Some(arrangement) => self.height.update(arrangement.height),
            None => false,
        }
    }

    pub fn content_height(&self) -> f64 {
        self.height.get()
    }
}

impl<T> Default for WrappingHStack<T> {
    fn default() -> Self {
        Self::new([])
    }
}

impl<T> FromIterator<Item<T>> for WrappingHStack<T> {
    fn from_iter<I: IntoIterator<Item = Item<T>>>(iter: I) -> Self {
        Self::new(iter)
    }
}
