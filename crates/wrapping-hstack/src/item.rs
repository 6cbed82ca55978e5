/// A single position in a wrapping stack's content sequence
///
/// Every position is either something the host can render, or a marker that
/// forces the following items onto a new line. The kind is fixed when the
/// item is constructed and never inferred afterwards.
#[derive(Debug, Clone, PartialEq)]
pub enum Item<T> {
    /// Host-supplied payload; its width is obtained through a [`crate::WidthMeasurer`]
    Renderable(T),
    /// Zero-width marker terminating the current line
    LineBreak,
}

impl<T> Item<T> {
    /// Build an item from a `(payload, is_line_break)` pair
    ///
    /// The payload of a line-break pair is dropped.
    pub fn from_pair(payload: T, is_line_break: bool) -> Self {
        if is_line_break {
            Self::LineBreak
        } else {
            Self::Renderable(payload)
        }
    }

    pub const fn is_line_break(&self) -> bool {
        matches!(self, Self::LineBreak)
    }

    /// The renderable payload, or `None` for a line break
    pub fn payload(&self) -> Option<&T> {
        match self {
            Self::Renderable(payload) => Some(payload),
            Self::LineBreak => None,
        }
    }
}

impl<T> From<T> for Item<T> {
    fn from(payload: T) -> Self {
        Self::Renderable(payload)
    }
}

/// Normalized, immutable input sequence for one layout computation
///
/// Indices are stable 0-based positions: hidden items keep their slot so
/// that the identity of the items after them never shifts.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemModel<T> {
    items: Vec<Item<T>>,
}

impl<T> ItemModel<T> {
    pub fn new(items: Vec<Item<T>>) -> Self {
        Self { items }
    }

    /// Build the model from `(payload, is_line_break)` pairs
    pub fn from_pairs(pairs: impl IntoIterator<Item = (T, bool)>) -> Self {
        pairs
            .into_iter()
            .map(|(payload, is_line_break)| Item::from_pair(payload, is_line_break))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn get(&self, index: usize) -> &Item<T> {
        &self.items[index]
    }

    pub fn items(&self) -> &[Item<T>] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Item<T>> {
        self.items.iter()
    }

    pub fn into_vec(self) -> Vec<Item<T>> {
        self.items
    }
}

impl<T> Default for ItemModel<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T> FromIterator<Item<T>> for ItemModel<T> {
    fn from_iter<I: IntoIterator<Item = Item<T>>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<'a, T> IntoIterator for &'a ItemModel<T> {
    type Item = &'a Item<T>;
    type IntoIter = std::slice::Iter<'a, Item<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
