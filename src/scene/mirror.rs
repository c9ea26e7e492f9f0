//! Scene mirror: box meshes for placed bricks

use std::collections::BTreeMap;

use glam::{Vec3, Vec4};

use crate::brick::BrickId;
use crate::core::types::{Dimensions, Position};
use crate::math::Aabb;
use crate::world::{PlacementObserver, World, WorldEvent};

/// Used when a brick's color tag is not a hex color
const FALLBACK_COLOR: Vec4 = Vec4::new(0.5, 0.5, 0.5, 1.0);

/// Parse `#RRGGBB` or `#AARRGGBB` into RGBA in 0..1
pub fn parse_hex_color(tag: &str) -> Option<Vec4> {
    let hex = tag.strip_prefix('#')?;
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok().map(|v| v as f32 / 255.0);
    match hex.len() {
        6 => Some(Vec4::new(channel(0)?, channel(2)?, channel(4)?, 1.0)),
        8 => Some(Vec4::new(channel(2)?, channel(4)?, channel(6)?, channel(0)?)),
        _ => None,
    }
}

/// Box mesh description for one placed brick, in world units (z up)
#[derive(Clone, Debug, PartialEq)]
pub struct BrickMesh {
    pub center: Vec3,
    pub size: Vec3,
    /// RGBA diffuse color
    pub color: Vec4,
}

impl BrickMesh {
    fn new(position: Position, dimensions: Dimensions, color: &str) -> Self {
        let bounds = Aabb::from_origin_size(position, dimensions);
        Self {
            center: bounds.center(),
            size: dimensions.as_vec3(),
            color: parse_hex_color(color).unwrap_or(FALLBACK_COLOR),
        }
    }

    /// Center with y and z swapped, for y-up renderers
    pub fn y_up_center(&self) -> Vec3 {
        Vec3::new(self.center.x, self.center.z, self.center.y)
    }
}

/// Tracks which bricks a renderer should currently show
#[derive(Clone, Debug, Default)]
pub struct SceneMirror {
    meshes: BTreeMap<BrickId, BrickMesh>,
}

impl SceneMirror {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drain the world's pending events and apply them. Returns how many.
    pub fn sync(&mut self, world: &mut World) -> usize {
        let events = world.take_events();
        for event in &events {
            self.apply(event);
        }
        events.len()
    }

    pub fn apply(&mut self, event: &WorldEvent) {
        event.dispatch(self);
    }

    pub fn mesh(&self, id: BrickId) -> Option<&BrickMesh> {
        self.meshes.get(&id)
    }

    pub fn meshes(&self) -> impl Iterator<Item = (BrickId, &BrickMesh)> + '_ {
        self.meshes.iter().map(|(id, mesh)| (*id, mesh))
    }

    pub fn len(&self) -> usize {
        self.meshes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.meshes.is_empty()
    }
}

impl PlacementObserver for SceneMirror {
    fn on_placed(&mut self, id: BrickId, position: Position, dimensions: Dimensions, color: &str) {
        self.meshes.insert(id, BrickMesh::new(position, dimensions, color));
    }

    fn on_removed(&mut self, id: BrickId, _position: Position, _dimensions: Dimensions) {
        if self.meshes.remove(&id).is_none() {
            log::warn!("Scene had no mesh for removed brick {}", id);
        }
    }
}
