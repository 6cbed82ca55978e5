//! Per-line spacer decisions.
//!
//! Given the line partition, decides which spacers surround each visible item
//! and whether a line gets alignment padding. Invisible items and line-break
//! markers are transparent: they never get spacers, and the visible items on
//! either side of them are spaced as if they were neighbours.

use crate::item::ItemModel;
use crate::line_breaker::Line;
use crate::measure::WidthMeasurer;
use crate::spacing::{HorizontalAlign, Spacing};
use crate::width_cache::WidthCache;

/// A gap emitted next to an item or at a line border
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Spacer {
    /// Exactly this wide
    Fixed(f64),
    /// At least `min` wide, grows to fill free space on the line
    Flexible { min: f64 },
    /// Alignment padding with no minimum; takes `share` of the free space when
    /// the line has no flexible spacers
    Padding { share: f64 },
}

impl Spacer {
    /// Width the spacer occupies before free space is distributed
    pub fn min_length(&self) -> f64 {
        match *self {
            Spacer::Fixed(width) => width,
            Spacer::Flexible { min } => min,
            Spacer::Padding { .. } => 0.0,
        }
    }

    pub const fn is_flexible(&self) -> bool {
        matches!(self, Spacer::Flexible { .. })
    }
}

/// Spacers placed directly before and after one item
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ItemSpacers {
    pub leading: Option<Spacer>,
    pub trailing: Option<Spacer>,
}

/// Whether a line is padded at its borders to honour the alignment
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SideSpacers {
    pub leading: bool,
    pub trailing: bool,
}

/// A visible item scheduled for rendering
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlannedItem {
    /// Index into the item model
    pub index: usize,
    pub width: f64,
    pub spacers: ItemSpacers,
}

/// Spacing decisions for one line
#[derive(Clone, Debug, PartialEq)]
pub struct LinePlan {
    pub line: Line,
    /// Alignment padding before the first item
    pub leading_padding: Option<Spacer>,
    /// Alignment padding after the last item
    pub trailing_padding: Option<Spacer>,
    /// Visible items in index order
    pub items: Vec<PlannedItem>,
}

impl LinePlan {
    pub fn side_spacers(&self) -> SideSpacers {
        SideSpacers {
            leading: self.leading_padding.is_some(),
            trailing: self.trailing_padding.is_some(),
        }
    }

    /// True for lines without any visible item
    pub fn is_blank(&self) -> bool {
        self.items.is_empty()
    }

    /// All spacers of the line in emission order
    pub fn spacers(&self) -> impl Iterator<Item = Spacer> + '_ {
        self.leading_padding
            .into_iter()
            .chain(
                self.items
                    .iter()
                    .flat_map(|item| item.spacers.leading.into_iter().chain(item.spacers.trailing)),
            )
            .chain(self.trailing_padding)
    }

    /// Sum of visible widths and spacer minima
    pub fn min_width(&self) -> f64 {
        self.items.iter().map(|item| item.width).sum::<f64>()
            + self.spacers().map(|spacer| spacer.min_length()).sum::<f64>()
    }
}

/// Host callbacks receiving a render plan in order
pub trait RenderSink<T> {
    fn begin_line(&mut self, _line_index: usize, _plan: &LinePlan) {}

    fn spacer(&mut self, spacer: Spacer);

    /// Render the visible item at `index`
    fn item(&mut self, index: usize, payload: &T);

    fn end_line(&mut self, _line_index: usize, _plan: &LinePlan) {}
}

/// Ordered spacing decisions for every line of one layout pass
#[derive(Clone, Debug, PartialEq)]
pub struct RenderPlan {
    pub container_width: f64,
    pub lines: Vec<LinePlan>,
}

impl RenderPlan {
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Drive `sink` through the plan
    ///
    /// Per line: `begin_line`, leading padding, then each item with its
    /// leading and trailing spacers, trailing padding, `end_line`.
    pub fn render<T>(&self, items: &ItemModel<T>, sink: &mut impl RenderSink<T>) {
        for (line_index, plan) in self.lines.iter().enumerate() {
            sink.begin_line(line_index, plan);

            if let Some(padding) = plan.leading_padding {
                sink.spacer(padding);
            }

            for planned in &plan.items {
                if let Some(spacer) = planned.spacers.leading {
                    sink.spacer(spacer);
                }
                if let Some(payload) = items.get(planned.index).payload() {
                    sink.item(planned.index, payload);
                }
                if let Some(spacer) = planned.spacers.trailing {
                    sink.spacer(spacer);
                }
            }

            if let Some(padding) = plan.trailing_padding {
                sink.spacer(padding);
            }

            sink.end_line(line_index, plan);
        }
    }
}

/// Decides spacers for lines under one spacing policy and alignment
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LineRenderer {
    spacing: Spacing,
    alignment: HorizontalAlign,
}

impl LineRenderer {
    pub fn new(spacing: Spacing, alignment: HorizontalAlign) -> Self {
        Self { spacing, alignment }
    }

    pub fn spacing(&self) -> Spacing {
        self.spacing
    }

    pub fn alignment(&self) -> HorizontalAlign {
        self.alignment
    }

    /// Spacers around the item at `offset` within `line`
    ///
    /// Invisible items, line breaks and offsets past the end of `line` get no
    /// spacers.
    pub fn spacing_for<T, M>(
        &self,
        cache: &mut WidthCache<'_, T, M>,
        line: Line,
        offset: usize,
    ) -> ItemSpacers
    where
        M: WidthMeasurer<T>,
    {
        if offset >= line.len() {
            return ItemSpacers::default();
        }

        let index = line.start + offset;
        if !cache.is_visible(index) {
            return ItemSpacers::default();
        }

        let visible = visible_indices(cache, line);
        let rank = visible.iter().position(|&visible_index| visible_index == index);
        match rank {
            Some(rank) => self.spacers_at(rank, visible.len()),
            None => ItemSpacers::default(),
        }
    }

    /// Whether `line` is padded at its borders
    pub fn side_spacers_for<T, M>(
        &self,
        cache: &mut WidthCache<'_, T, M>,
        line: Line,
    ) -> SideSpacers
    where
        M: WidthMeasurer<T>,
    {
        let padded = self.is_padded(visible_indices(cache, line).len());
        SideSpacers {
            leading: padded,
            trailing: padded,
        }
    }

    /// Spacing decisions for a single line
    pub fn plan_line<T, M>(&self, cache: &mut WidthCache<'_, T, M>, line: Line) -> LinePlan
    where
        M: WidthMeasurer<T>,
    {
        let visible = visible_indices(cache, line);
        let count = visible.len();

        let items = visible
            .iter()
            .enumerate()
            .map(|(rank, &index)| PlannedItem {
                index,
                width: cache.width_of(index),
                spacers: self.spacers_at(rank, count),
            })
            .collect();

        let (leading_padding, trailing_padding) = if self.is_padded(count) {
            let (leading, trailing) = self.alignment.padding_shares();
            (
                Some(Spacer::Padding { share: leading }),
                Some(Spacer::Padding { share: trailing }),
            )
        } else {
            (None, None)
        };

        LinePlan {
            line,
            leading_padding,
            trailing_padding,
            items,
        }
    }

    /// Spacing decisions for every line, reusing the widths measured by the breaker
    pub fn plan<T, M>(&self, cache: &mut WidthCache<'_, T, M>, lines: &[Line]) -> RenderPlan
    where
        M: WidthMeasurer<T>,
    {
        RenderPlan {
            container_width: cache.container_width(),
            lines: lines.iter().map(|&line| self.plan_line(cache, line)).collect(),
        }
    }

    fn spacers_at(&self, rank: usize, visible_count: usize) -> ItemSpacers {
        let gap = self.spacing.min_spacing();
        let borders = self.spacing.includes_borders();
        let is_first = rank == 0;
        let is_last = rank + 1 == visible_count;

        let leading = (is_first && borders).then_some(Spacer::Flexible { min: gap });
        let trailing = if !is_last {
            Some(match self.spacing {
                Spacing::Constant(_) => Spacer::Fixed(gap),
                Spacing::Dynamic { .. } | Spacing::DynamicIncludingBorders { .. } => {
                    Spacer::Flexible { min: gap }
                }
            })
        } else if borders {
            Some(Spacer::Flexible { min: gap })
        } else {
            None
        };

        ItemSpacers { leading, trailing }
    }

    fn is_padded(&self, visible_count: usize) -> bool {
        if visible_count == 0 {
            return false;
        }
        match self.spacing {
            Spacing::Constant(_) => true,
            // Keeps a lone item on a sparse line at its requested alignment.
            Spacing::Dynamic { .. } => {
                visible_count == 1 && self.alignment != HorizontalAlign::Leading
            }
            Spacing::DynamicIncludingBorders { .. } => false,
        }
    }
}

fn visible_indices<T, M>(cache: &mut WidthCache<'_, T, M>, line: Line) -> Vec<usize>
where
    M: WidthMeasurer<T>,
{
    line.range().filter(|&index| cache.is_visible(index)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::Item;
    use crate::line_breaker::break_lines;
    use crate::test_support::{hide, random_model, remove, seeded};
    use crate::FixedWidth;

    fn items(widths: &[f64]) -> ItemModel<f64> {
        widths.iter().copied().map(Item::Renderable).collect()
    }

    fn plan_for(
        model: &ItemModel<f64>,
        width: f64,
        spacing: Spacing,
        align: HorizontalAlign,
    ) -> RenderPlan {
        let mut cache = WidthCache::new(model, FixedWidth, width);
        let lines = break_lines(&mut cache, spacing);
        LineRenderer::new(spacing, align).plan(&mut cache, &lines)
    }

    #[derive(Default)]
    struct Recorder {
        events: Vec<String>,
    }

    impl RenderSink<f64> for Recorder {
        fn begin_line(&mut self, line_index: usize, _plan: &LinePlan) {
            self.events.push(format!("line {line_index}"));
        }

        fn spacer(&mut self, spacer: Spacer) {
            self.events.push(format!("{spacer:?}"));
        }

        fn item(&mut self, index: usize, payload: &f64) {
            self.events.push(format!("item {index} ({payload})"));
        }
    }

    #[test]
    fn test_borders_on_single_item_line() {
        let model = items(&[20.0]);
        let plan = plan_for(
            &model,
            100.0,
            Spacing::dynamic_including_borders(5.0),
            HorizontalAlign::Leading,
        );
        let line = &plan.lines[0];

        assert_eq!(
            line.items[0].spacers,
            ItemSpacers {
                leading: Some(Spacer::Flexible { min: 5.0 }),
                trailing: Some(Spacer::Flexible { min: 5.0 }),
            }
        );
        assert_eq!(line.side_spacers(), SideSpacers::default());
    }

    #[test]
    fn test_dynamic_trailing_pads_lone_item() {
        let model = items(&[20.0]);
        let plan = plan_for(&model, 100.0, Spacing::dynamic(5.0), HorizontalAlign::Trailing);
        let line = &plan.lines[0];

        assert_eq!(
            line.side_spacers(),
            SideSpacers {
                leading: true,
                trailing: true
            }
        );
        assert_eq!(line.leading_padding, Some(Spacer::Padding { share: 1.0 }));
        assert_eq!(line.trailing_padding, Some(Spacer::Padding { share: 0.0 }));
        assert_eq!(line.items[0].spacers, ItemSpacers::default());
    }

    #[test]
    fn test_dynamic_pads_only_lone_items_off_leading() {
        let model = items(&[40.0, 40.0, 40.0]);

        let trailing = plan_for(&model, 100.0, Spacing::dynamic(5.0), HorizontalAlign::Trailing);
        assert_eq!(trailing.lines[0].side_spacers(), SideSpacers::default());
        assert!(trailing.lines[1].side_spacers().leading);

        let leading = plan_for(&model, 100.0, Spacing::dynamic(5.0), HorizontalAlign::Leading);
        assert_eq!(leading.lines[1].side_spacers(), SideSpacers::default());
    }

    #[test]
    fn test_constant_pads_every_line() {
        let model = items(&[30.0, 30.0, 30.0]);
        let plan = plan_for(&model, 100.0, Spacing::constant(10.0), HorizontalAlign::Center);

        assert_eq!(plan.line_count(), 2);
        for line in &plan.lines {
            assert_eq!(line.leading_padding, Some(Spacer::Padding { share: 0.5 }));
            assert_eq!(line.trailing_padding, Some(Spacer::Padding { share: 0.5 }));
        }
        assert_eq!(plan.lines[0].items[0].spacers.trailing, Some(Spacer::Fixed(10.0)));
        assert_eq!(plan.lines[0].items[1].spacers.trailing, None);
    }

    #[test]
    fn test_hidden_item_adds_no_gap() {
        let model = items(&[20.0, 0.0, 20.0]);
        let plan = plan_for(&model, 100.0, Spacing::constant(10.0), HorizontalAlign::Leading);
        let line = &plan.lines[0];

        assert_eq!(line.items.len(), 2);
        assert_eq!(line.items[0].spacers.trailing, Some(Spacer::Fixed(10.0)));
        assert_eq!(line.items[1].spacers, ItemSpacers::default());
        assert_eq!(line.min_width(), 50.0);
    }

    #[test]
    fn test_dynamic_hidden_items_at_line_edges() {
        let model = items(&[0.0, 20.0, 0.0, 20.0, 0.0]);

        let plan = plan_for(&model, 100.0, Spacing::dynamic(5.0), HorizontalAlign::Center);
        let line = &plan.lines[0];
        assert_eq!(plan.line_count(), 1);
        assert_eq!(line.items.iter().map(|item| item.index).collect::<Vec<_>>(), vec![1, 3]);
        assert_eq!(
            line.items[0].spacers,
            ItemSpacers {
                leading: None,
                trailing: Some(Spacer::Flexible { min: 5.0 }),
            }
        );
        assert_eq!(line.items[1].spacers, ItemSpacers::default());
        assert_eq!(line.side_spacers(), SideSpacers::default());

        let plan = plan_for(
            &model,
            100.0,
            Spacing::dynamic_including_borders(5.0),
            HorizontalAlign::Center,
        );
        let line = &plan.lines[0];
        assert_eq!(line.items[0].spacers.leading, Some(Spacer::Flexible { min: 5.0 }));
        assert_eq!(line.items[1].spacers.trailing, Some(Spacer::Flexible { min: 5.0 }));
        assert_eq!(line.spacers().count(), 3);
    }

    #[test]
    fn test_dynamic_lone_visible_item_among_hidden_is_padded() {
        let model = items(&[0.0, 20.0, 0.0]);
        let plan = plan_for(&model, 100.0, Spacing::dynamic(5.0), HorizontalAlign::Trailing);
        let line = &plan.lines[0];

        assert_eq!(line.items.len(), 1);
        assert_eq!(line.items[0].spacers, ItemSpacers::default());
        assert_eq!(line.leading_padding, Some(Spacer::Padding { share: 1.0 }));
        assert_eq!(line.trailing_padding, Some(Spacer::Padding { share: 0.0 }));
    }

    #[test]
    fn test_hidden_item_spaced_like_removed_item() {
        // Hiding the last item after a break leaves a blank row that removing
        // it does not, so only rows with visible items are compared.
        fn rows(plan: &RenderPlan, hidden: Option<usize>) -> Vec<LinePlan> {
            plan.lines
                .iter()
                .filter(|line| !line.is_blank())
                .map(|line| {
                    let mut line = line.clone();
                    for item in &mut line.items {
                        if hidden.is_some_and(|hidden| item.index > hidden) {
                            item.index -= 1;
                        }
                    }
                    line.line = Line::new(0, 0);
                    line
                })
                .collect()
        }

        let mut rng = seeded(47);
        let aligns = [
            HorizontalAlign::Leading,
            HorizontalAlign::Center,
            HorizontalAlign::Trailing,
        ];

        for len in 1..25 {
            let model = random_model(&mut rng, len);
            for spacing in [Spacing::constant(10.0), Spacing::dynamic(5.0)] {
                for align in aligns {
                    for hidden in 0..len {
                        if model.get(hidden).is_line_break() {
                            continue;
                        }

                        let with_hidden = plan_for(&hide(&model, hidden), 120.0, spacing, align);
                        let without = plan_for(&remove(&model, hidden), 120.0, spacing, align);
                        let hidden_rows = rows(&with_hidden, Some(hidden));
                        let removed_rows = rows(&without, None);

                        assert_eq!(hidden_rows, removed_rows, "hiding {hidden} under {spacing:?}");
                        for (a, b) in hidden_rows.iter().zip(&removed_rows) {
                            assert_eq!(a.side_spacers(), b.side_spacers());
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_spacing_for_offset_past_line_end() {
        let model = items(&[20.0, 20.0, 90.0]);
        let mut cache = WidthCache::new(&model, FixedWidth, 100.0);
        let spacing = Spacing::constant(4.0);
        let lines = break_lines(&mut cache, spacing);
        let renderer = LineRenderer::new(spacing, HorizontalAlign::Leading);

        assert_eq!(lines, vec![Line::new(0, 2), Line::new(2, 3)]);
        assert_eq!(renderer.spacing_for(&mut cache, lines[0], 2), ItemSpacers::default());
        assert_eq!(renderer.spacing_for(&mut cache, lines[1], 1), ItemSpacers::default());
        assert_eq!(renderer.spacing_for(&mut cache, lines[1], 10), ItemSpacers::default());
    }

    #[test]
    fn test_spacing_for_queries() {
        let model = items(&[20.0, 0.0, 20.0, 20.0]);
        let mut cache = WidthCache::new(&model, FixedWidth, 100.0);
        let spacing = Spacing::dynamic_including_borders(4.0);
        let lines = break_lines(&mut cache, spacing);
        let renderer = LineRenderer::new(spacing, HorizontalAlign::Center);

        assert_eq!(lines.len(), 1);
        let line = lines[0];
        assert_eq!(
            renderer.spacing_for(&mut cache, line, 0).leading,
            Some(Spacer::Flexible { min: 4.0 })
        );
        assert_eq!(renderer.spacing_for(&mut cache, line, 1), ItemSpacers::default());
        assert_eq!(
            renderer.spacing_for(&mut cache, line, 2),
            ItemSpacers {
                leading: None,
                trailing: Some(Spacer::Flexible { min: 4.0 }),
            }
        );
        assert_eq!(
            renderer.spacing_for(&mut cache, line, 3).trailing,
            Some(Spacer::Flexible { min: 4.0 })
        );
        assert_eq!(renderer.side_spacers_for(&mut cache, line), SideSpacers::default());
        assert_eq!(cache.measurement_count(), 4);
    }

    #[test]
    fn test_blank_line_has_no_spacers() {
        let model: ItemModel<f64> = vec![Item::LineBreak, Item::Renderable(0.0)]
            .into_iter()
            .collect();
        for spacing in [
            Spacing::constant(3.0),
            Spacing::dynamic(3.0),
            Spacing::dynamic_including_borders(3.0),
        ] {
            let plan = plan_for(&model, 100.0, spacing, HorizontalAlign::Center);
            for line in &plan.lines {
                assert!(line.is_blank());
                assert_eq!(line.spacers().count(), 0);
            }
        }
    }

    #[test]
    fn test_render_order() {
        let model: ItemModel<f64> = vec![
            Item::Renderable(10.0),
            Item::Renderable(10.0),
            Item::LineBreak,
            Item::Renderable(0.0),
            Item::Renderable(10.0),
        ]
        .into_iter()
        .collect();
        let plan = plan_for(&model, 100.0, Spacing::constant(2.0), HorizontalAlign::Leading);
        let mut recorder = Recorder::default();
        plan.render(&model, &mut recorder);

        assert_eq!(
            recorder.events,
            vec![
                "line 0",
                "Padding { share: 0.0 }",
                "item 0 (10)",
                "Fixed(2.0)",
                "item 1 (10)",
                "Padding { share: 1.0 }",
                "line 1",
                "Padding { share: 0.0 }",
                "item 4 (10)",
                "Padding { share: 1.0 }",
            ]
        );
    }
}
