//! Box of brick templates with remaining counts

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::brick::Brick;
use crate::config::BrickworldConfig;
use crate::core::error::{BrickError, BuildError};
use crate::core::types::Dimensions;

/// Shape and color of a brick kind, used to stamp out fresh bricks
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrickTemplate {
    pub dimensions: Dimensions,
    pub color: String,
}

impl BrickTemplate {
    pub fn new(dimensions: Dimensions, color: impl Into<String>) -> Self {
        Self { dimensions, color: color.into() }
    }

    /// New unplaced brick of this kind
    pub fn instantiate(&self) -> Result<Brick, BrickError> {
        Brick::new(self.dimensions, self.color.clone())
    }
}

/// A template and how many are left
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoxItem {
    pub template: BrickTemplate,
    pub remaining: u32,
}

/// The bricks available to a builder
#[derive(Clone, Debug, Default)]
pub struct BrickBox {
    items: Vec<BoxItem>,
}

impl BrickBox {
    pub fn new() -> Self {
        Self::default()
    }

    /// Box filled from the `bricks` section of a config
    pub fn from_config(config: &BrickworldConfig) -> Self {
        let mut brick_box = Self::new();
        for entry in &config.bricks {
            brick_box.add(entry.template(), entry.amount);
        }
        brick_box
    }

    /// Add `amount` bricks of a kind. Zero is ignored.
    pub fn add(&mut self, template: BrickTemplate, amount: u32) {
        if amount == 0 {
            return;
        }
        self.items.push(BoxItem { template, remaining: amount });
    }

    /// Drop a whole item by index
    pub fn remove_item(&mut self, index: usize) -> Option<BoxItem> {
        if index < self.items.len() {
            log::debug!("Removing item {} from the box", index);
            Some(self.items.remove(index))
        } else {
            None
        }
    }

    pub fn items(&self) -> &[BoxItem] {
        &self.items
    }

    pub fn total_remaining(&self) -> u64 {
        self.items.iter().map(|item| item.remaining as u64).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Pick a random item, take one brick from it, and drop the item once
    /// it runs out. Every item is equally likely regardless of its count.
    pub fn pick_random(&mut self, rng: &mut impl Rng) -> Result<BrickTemplate, BuildError> {
        if self.items.is_empty() {
            return Err(BuildError::BoxEmpty);
        }
        let index = rng.gen_range(0..self.items.len());
        let item = &mut self.items[index];
        item.remaining -= 1;
        let template = item.template.clone();
        if item.remaining == 0 {
            self.items.remove(index);
        }
        log::debug!("Picked {} {} brick", template.dimensions, template.color);
        Ok(template)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn template(color: &str) -> BrickTemplate {
        BrickTemplate::new(Dimensions::splat(2), color)
    }

    #[test]
    fn test_instantiate() {
        let brick = template("#ffd3b6").instantiate().unwrap();
        assert_eq!(brick.dimensions(), Dimensions::splat(2));
        assert_eq!(brick.color(), "#ffd3b6");
        assert!(!brick.is_placed());

        let flat = BrickTemplate::new(Dimensions::new(2, 2, 1), "#ffd3b6");
        assert!(matches!(flat.instantiate(), Err(BrickError::DimensionTooSmall(_))));
    }

    #[test]
    fn test_add_and_remove_items() {
        let mut brick_box = BrickBox::new();
        brick_box.add(template("#a8e6cf"), 3);
        brick_box.add(template("#dcedc1"), 0);
        brick_box.add(template("#ff8b94"), 2);
        assert_eq!(brick_box.items().len(), 2);
        assert_eq!(brick_box.total_remaining(), 5);

        let removed = brick_box.remove_item(0).unwrap();
        assert_eq!(removed.template.color, "#a8e6cf");
        assert!(brick_box.remove_item(5).is_none());
        assert_eq!(brick_box.total_remaining(), 2);
    }

    #[test]
    fn test_pick_drains_box() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut brick_box = BrickBox::new();
        brick_box.add(template("#a8e6cf"), 2);
        brick_box.add(template("#ff8b94"), 1);

        let mut picked = Vec::new();
        while !brick_box.is_empty() {
            picked.push(brick_box.pick_random(&mut rng).unwrap().color);
        }
        picked.sort();
        assert_eq!(picked, vec!["#a8e6cf", "#a8e6cf", "#ff8b94"]);
        assert_eq!(brick_box.pick_random(&mut rng), Err(BuildError::BoxEmpty));
    }

    #[test]
    fn test_from_config() {
        let config = BrickworldConfig::default();
        let brick_box = BrickBox::from_config(&config);
        assert_eq!(brick_box.items().len(), 1);
        assert_eq!(brick_box.total_remaining(), 10);
        assert_eq!(brick_box.items()[0].template, template("#a8e6cf"));
    }
}
