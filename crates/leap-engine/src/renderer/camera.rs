use glam::Vec2;
use log::warn;

use crate::components::entity::Entity;
use crate::core::aabb::Aabb;

/// Viewport that follows a target point and stays inside the world.
///
/// `offset` is the world position of the viewport's top-left corner.
/// Whenever the world is at least as large as the viewport on an axis,
/// `0 <= offset <= world - viewport` on that axis; otherwise the offset is 0.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    viewport: Vec2,
    world: Vec2,
    offset: Vec2,
}

impl Camera {
    pub fn new(viewport: Vec2, world: Vec2) -> Self {
        if world.x < viewport.x || world.y < viewport.y {
            warn!(
                "world {}x{} is smaller than viewport {}x{}; camera will show out-of-world space",
                world.x, world.y, viewport.x, viewport.y
            );
        }
        Self {
            viewport,
            world,
            offset: Vec2::ZERO,
        }
    }

    /// Center on `target`, then clamp each axis into the world.
    pub fn update(&mut self, target: Vec2) {
        let wanted = target - self.viewport * 0.5;
        let max = self.world - self.viewport;
        // Upper bound first so the lower bound wins when the world is too small.
        self.offset = wanted.min(max).max(Vec2::ZERO);
    }

    /// Track an entity's center.
    pub fn follow(&mut self, entity: &Entity) {
        self.update(entity.center());
    }

    pub fn to_screen(&self, world_pos: Vec2) -> Vec2 {
        world_pos - self.offset
    }

    pub fn to_world(&self, screen_pos: Vec2) -> Vec2 {
        screen_pos + self.offset
    }

    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    pub fn viewport(&self) -> Vec2 {
        self.viewport
    }

    pub fn world_size(&self) -> Vec2 {
        self.world
    }

    /// The world-space rectangle currently on screen.
    pub fn view_rect(&self) -> Aabb {
        Aabb::new(self.offset, self.viewport)
    }

    /// Whether any part of `bounds` is on screen.
    pub fn is_visible(&self, bounds: &Aabb) -> bool {
        self.view_rect().overlaps(bounds)
    }
}
