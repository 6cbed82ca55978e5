//! Generated item sequences shared by the unit tests.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::item::{Item, ItemModel};

pub(crate) fn seeded(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Mostly ordinary widths, with some hidden and some oversized items
pub(crate) fn random_width(rng: &mut impl Rng) -> f64 {
    match rng.random_range(0..10u32) {
        0 => 0.0,
        1 => 150.0,
        n => f64::from(n * 7) + rng.random_range(0.0..13.0),
    }
}

/// `len` items, roughly one in twelve a line break
pub(crate) fn random_model(rng: &mut impl Rng, len: usize) -> ItemModel<f64> {
    (0..len)
        .map(|_| {
            if rng.random_ratio(1, 12) {
                Item::LineBreak
            } else {
                Item::Renderable(random_width(rng))
            }
        })
        .collect()
}

/// `model` with item `index` replaced by a zero-width item
pub(crate) fn hide(model: &ItemModel<f64>, index: usize) -> ItemModel<f64> {
    model
        .iter()
        .enumerate()
        .map(|(i, item)| if i == index { Item::Renderable(0.0) } else { item.clone() })
        .collect()
}

/// `model` without item `index`
pub(crate) fn remove(model: &ItemModel<f64>, index: usize) -> ItemModel<f64> {
    model
        .iter()
        .enumerate()
        .filter(|&(i, _)| i != index)
        .map(|(_, item)| item.clone())
        .collect()
}
