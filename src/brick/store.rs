//! Generational slab of bricks addressed by [`BrickId`]

use std::collections::BTreeSet;

use super::brick::Brick;
use super::handle::BrickId;

#[derive(Clone, Debug, Default)]
struct Slot {
    generation: u32,
    brick: Option<Brick>,
}

/// Owns bricks on behalf of a world's callers.
///
/// Vacated slots are reused with a bumped generation, so a handle to a
/// brick that was taken out never resolves to its successor.
#[derive(Clone, Debug, Default)]
pub struct BrickStore {
    slots: Vec<Slot>,
    free: Vec<u32>,
    len: usize,
}

impl BrickStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take custody of a brick and return its handle
    pub fn insert(&mut self, brick: Brick) -> BrickId {
        self.len += 1;
        if let Some(index) = self.free.pop() {
            let slot = &mut self.slots[index as usize];
            slot.brick = Some(brick);
            return BrickId::new(index, slot.generation);
        }
        let index = self.slots.len() as u32;
        self.slots.push(Slot { generation: 0, brick: Some(brick) });
        BrickId::new(index, 0)
    }

    pub fn get(&self, id: BrickId) -> Option<&Brick> {
        self.slots
            .get(id.index as usize)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.brick.as_ref())
    }

    pub fn get_mut(&mut self, id: BrickId) -> Option<&mut Brick> {
        self.slots
            .get_mut(id.index as usize)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.brick.as_mut())
    }

    pub fn contains(&self, id: BrickId) -> bool {
        self.get(id).is_some()
    }

    /// Give a brick back, invalidating its handle
    pub fn remove(&mut self, id: BrickId) -> Option<Brick> {
        let slot = self
            .slots
            .get_mut(id.index as usize)
            .filter(|slot| slot.generation == id.generation)?;
        let brick = slot.brick.take()?;
        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(id.index);
        self.len -= 1;
        Some(brick)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// All bricks in slot order
    pub fn iter(&self) -> impl Iterator<Item = (BrickId, &Brick)> + '_ {
        self.slots.iter().enumerate().filter_map(|(i, slot)| {
            slot.brick
                .as_ref()
                .map(|brick| (BrickId::new(i as u32, slot.generation), brick))
        })
    }

    /// Tear down every connector link of `id` on both sides and reset its
    /// position, leaving it unplaced.
    ///
    /// Returns the former neighbours, or `None` for an unknown handle.
    pub fn disconnect(&mut self, id: BrickId) -> Option<BTreeSet<BrickId>> {
        let neighbours = self.get(id)?.adjacent_bricks();
        for &neighbour in &neighbours {
            if let Some(other) = self.get_mut(neighbour) {
                other.disconnect_from(id);
            }
        }
        self.get_mut(id)?.detach();
        Some(neighbours)
    }
}
