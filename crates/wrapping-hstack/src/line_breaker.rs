//! Greedy line breaking.
//!
//! Items are packed left to right in a single forward pass without
//! backtracking. A line-break marker ends the current line; a visible item
//! that would overflow the remaining width (including the gap in front of it)
//! starts a new one. Invisible items never start a line and consume nothing.

use std::ops::Range;

use crate::measure::WidthMeasurer;
use crate::spacing::Spacing;
use crate::width_cache::WidthCache;

/// Slack allowed when comparing accumulated widths against the container.
pub const FIT_TOLERANCE: f64 = 1e-9;

/// A contiguous run of item indices rendered as one row: `[start, end)`
///
/// A line-break marker belongs to the line it terminates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Line {
    pub start: usize,
    pub end: usize,
}

impl Line {
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub const fn contains(&self, index: usize) -> bool {
        self.start <= index && index < self.end
    }
}

/// Partition the cached items into lines
///
/// The first line always starts at index 0, even when its items are all
/// invisible, so the result has exactly one entry per row the host renders.
/// A trailing line-break marker does not open an extra line. An item wider
/// than the container is placed alone on its own line. An item that fits
/// exactly stays on the current line.
///
/// Returns no lines for an empty sequence.
pub fn break_lines<T, M>(cache: &mut WidthCache<'_, T, M>, spacing: Spacing) -> Vec<Line>
where
    M: WidthMeasurer<T>,
{
    let starts = line_starts(cache, spacing);
    let len = cache.len();

    starts
        .iter()
        .enumerate()
        .map(|(i, &start)| {
            let end = starts.get(i + 1).copied().unwrap_or(len);
            Line::new(start, end)
        })
        .collect()
}

/// Index of the first item of every line, strictly increasing
pub fn line_starts<T, M>(cache: &mut WidthCache<'_, T, M>, spacing: Spacing) -> Vec<usize>
where
    M: WidthMeasurer<T>,
{
    let len = cache.len();
    if len == 0 {
        return Vec::new();
    }

    let container_width = cache.container_width();
    let gap = spacing.min_spacing();

    let mut starts = vec![0];
    let mut remaining = container_width;
    let mut line_is_empty = true;

    for index in 0..len {
        if cache.items().get(index).is_line_break() {
            if index + 1 < len {
                starts.push(index + 1);
            }
            remaining = container_width;
            line_is_empty = true;
            continue;
        }

        if !cache.is_visible(index) {
            continue;
        }

        let width = cache.width_of(index);

        // The first item of a line is always placed, even if it overflows on its own.
        if line_is_empty {
            remaining -= width;
            line_is_empty = false;
            continue;
        }

        let needed = gap + width;
        if needed > remaining + FIT_TOLERANCE {
            log::trace!(
                "item {index} (width {width}) overflows {remaining} remaining, starting line {}",
                starts.len()
            );
            starts.push(index);
            remaining = container_width - width;
        } else {
            remaining -= needed;
        }
    }

    starts
}

/// Index of the line containing item `index`
pub fn line_of(lines: &[Line], index: usize) -> Option<usize> {
    lines.iter().position(|line| line.contains(index))
}
