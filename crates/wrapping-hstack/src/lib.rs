//! # wrapping-hstack
//!
//! Graphics backend agnostic line wrapping for horizontal stacks.
//!
//! This crate decides which items of a sequence go on which line for a given
//! container width, and which spacers surround them under a spacing policy.
//! Measuring items and drawing them are left to the host: widths come in
//! through a [`WidthMeasurer`], and the result goes out as a [`RenderPlan`]
//! driven into a [`RenderSink`] or resolved into positions with [`arrange`].
//!
//! ```
//! use wrapping_hstack::{FixedWidth, Item, Spacing, WrappingHStack};
//!
//! let mut stack = WrappingHStack::new([30.0, 30.0, 30.0].map(Item::Renderable))
//!     .with_spacing(Spacing::constant(10.0));
//! let pass = stack.layout(100.0, FixedWidth);
//!
//! assert_eq!(pass.line_count(), 2);
//! assert_eq!(pass.lines[1].start, 2);
//! ```

mod arrange;
mod item;
mod line_breaker;
mod measure;
mod renderer;
mod spacing;
mod stack;
mod width_cache;

#[cfg(test)]
mod test_support;

pub use arrange::*;
pub use item::*;
pub use line_breaker::*;
pub use measure::*;
pub use renderer::*;
pub use spacing::*;
pub use stack::*;
pub use width_cache::*;
