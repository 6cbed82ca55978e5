//! Resolve a render plan into concrete item positions.
//!
//! Free space on a line is `container width - visible widths - spacer minima`.
//! Flexible spacers split it evenly; when a line has none, its alignment
//! padding takes it according to each padding's share. Fixed spacers never
//! grow, and nothing shrinks when a line overflows.

use glam::DVec2;

use crate::measure::non_negative;
use crate::renderer::{LinePlan, RenderPlan, Spacer};

/// Final position of one visible item
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    /// Index into the item model
    pub index: usize,
    /// Line the item was placed on
    pub line: usize,
    /// Top-left corner relative to the container
    pub origin: DVec2,
    /// Item width and the height of its line
    pub size: DVec2,
}

/// Positions of every visible item plus the total content height
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Arrangement {
    pub placements: Vec<Placement>,
    /// Vertical offset of each line
    pub line_offsets: Vec<f64>,
    pub height: f64,
}

impl Arrangement {
    pub fn placement_of(&self, index: usize) -> Option<&Placement> {
        self.placements.iter().find(|placement| placement.index == index)
    }
}

/// Horizontal offset of each item in `plan.items`
pub fn arrange_line(plan: &LinePlan, container_width: f64) -> Vec<f64> {
    let free = (container_width - plan.min_width()).max(0.0);
    let flexible = plan.spacers().filter(Spacer::is_flexible).count();

    let resolve = |spacer: Spacer| -> f64 {
        match spacer {
            Spacer::Fixed(width) => width,
            Spacer::Flexible { min } => min + free / flexible as f64,
            Spacer::Padding { share } if flexible == 0 => free * share,
            Spacer::Padding { .. } => 0.0,
        }
    };

    let mut x = plan.leading_padding.map_or(0.0, resolve);
    let mut offsets = Vec::with_capacity(plan.items.len());

    for item in &plan.items {
        x += item.spacers.leading.map_or(0.0, resolve);
        offsets.push(x);
        x += item.width + item.spacers.trailing.map_or(0.0, resolve);
    }

    offsets
}

/// Stack the lines of `plan` vertically and position every visible item
///
/// `line_height` supplies the rendered height of each line; negative or NaN
/// heights count as `0.0`.
pub fn arrange(
    plan: &RenderPlan,
    line_spacing: f64,
    mut line_height: impl FnMut(&LinePlan) -> f64,
) -> Arrangement {
    let line_spacing = non_negative(line_spacing);
    let mut placements = Vec::new();
    let mut line_offsets = Vec::with_capacity(plan.lines.len());
    let mut heights = Vec::with_capacity(plan.lines.len());
    let mut y = 0.0;

    for (line_index, line) in plan.lines.iter().enumerate() {
        if line_index > 0 {
            y += line_spacing;
        }

        let height = non_negative(line_height(line));
        let offsets = arrange_line(line, plan.container_width);

        placements.extend(line.items.iter().zip(offsets).map(|(item, x)| Placement {
            index: item.index,
            line: line_index,
            origin: DVec2::new(x, y),
            size: DVec2::new(item.width, height),
        }));

        line_offsets.push(y);
        heights.push(height);
        y += height;
    }

    Arrangement {
        placements,
        line_offsets,
        height: total_height(heights, line_spacing),
    }
}

/// Sum of line heights plus `line_spacing` between consecutive lines
///
/// Zero lines have zero height.
pub fn total_height(line_heights: impl IntoIterator<Item = f64>, line_spacing: f64) -> f64 {
    let line_spacing = non_negative(line_spacing);
    let (sum, count) = line_heights
        .into_iter()
        .fold((0.0, 0usize), |(sum, count), height| {
            (sum + non_negative(height), count + 1)
        });

    if count == 0 {
        0.0
    } else {
        sum + line_spacing * (count - 1) as f64
    }
}
