use crate::measure::non_negative;

/// Rule set for the gaps between items on a line
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Spacing {
    /// Every gap between neighbouring visible items is exactly this wide
    Constant(f64),
    /// Gaps are at least `min_spacing` and grow to fill the line
    Dynamic { min_spacing: f64 },
    /// Like `Dynamic`, with an extra flexible gap before the first and after
    /// the last visible item of every line
    DynamicIncludingBorders { min_spacing: f64 },
}

impl Spacing {
    /// Fixed gaps. NaN or negative values become `0.0`.
    pub fn constant(gap: f64) -> Self {
        Self::Constant(non_negative(gap))
    }

    /// Flexible gaps of at least `min_spacing`
    pub fn dynamic(min_spacing: f64) -> Self {
        Self::Dynamic {
            min_spacing: non_negative(min_spacing),
        }
    }

    /// Flexible gaps of at least `min_spacing`, including both line borders
    pub fn dynamic_including_borders(min_spacing: f64) -> Self {
        Self::DynamicIncludingBorders {
            min_spacing: non_negative(min_spacing),
        }
    }

    /// Gap used when deciding whether the next item still fits on a line
    ///
    /// For `Constant` this is the fixed gap itself.
    pub fn min_spacing(&self) -> f64 {
        let raw = match *self {
            Spacing::Constant(gap) => gap,
            Spacing::Dynamic { min_spacing } | Spacing::DynamicIncludingBorders { min_spacing } => {
                min_spacing
            }
        };
        non_negative(raw)
    }

    pub const fn is_constant(&self) -> bool {
        matches!(self, Spacing::Constant(_))
    }

    pub const fn includes_borders(&self) -> bool {
        matches!(self, Spacing::DynamicIncludingBorders { .. })
    }
}

impl Default for Spacing {
    fn default() -> Self {
        Self::Constant(8.0)
    }
}

/// Horizontal alignment of the content of each line
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HorizontalAlign {
    #[default]
    Leading,
    Center,
    Trailing,
}

impl HorizontalAlign {
    /// Share of the free space given to the (leading, trailing) padding
    pub const fn padding_shares(&self) -> (f64, f64) {
        match self {
            HorizontalAlign::Leading => (0.0, 1.0),
            HorizontalAlign::Center => (0.5, 0.5),
            HorizontalAlign::Trailing => (1.0, 0.0),
        }
    }
}
