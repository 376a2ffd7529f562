use glam::Vec2;

use crate::api::error::GeometryError;
use crate::api::types::EntityId;
use crate::components::structure::Collidable;
use crate::components::visual::{Color, Visual};
use crate::core::aabb::Aabb;
use crate::input::intent::HorizontalIntent;

pub const DEFAULT_GRAVITY: f32 = 0.5;
pub const DEFAULT_MOVE_SPEED: f32 = 5.0;
pub const DEFAULT_JUMP_SPEED: f32 = 12.0;

/// Drawing hint. Collision always uses the bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BodyShape {
    Rect,
    /// Circle inscribed in the box; `radius` is half the box width.
    Circle { radius: f32 },
}

/// Fat Entity: a gravity-affected body plus its movement tuning.
/// Units are world units per frame, not per second.
#[derive(Debug, Clone)]
pub struct Entity {
    /// Unique identifier.
    pub id: EntityId,
    /// String tag for finding entities by name.
    pub tag: String,
    /// Inactive entities are skipped by the world step and the renderer.
    pub active: bool,
    /// Top-left corner in world space.
    pub pos: Vec2,
    size: Vec2,
    /// Velocity in world units per frame.
    pub vel: Vec2,
    /// Added to `vel.y` once per frame.
    pub gravity: f32,
    /// Result of the most recent frame's vertical resolution.
    pub grounded: bool,
    pub move_speed: f32,
    pub jump_speed: f32,
    pub shape: BodyShape,
    pub visual: Option<Visual>,
}

impl Entity {
    /// Create a rectangular body at `pos` (top-left).
    pub fn new(id: EntityId, pos: Vec2, size: Vec2) -> Result<Self, GeometryError> {
        let bounds = Aabb::try_new(pos, size)?;
        Ok(Self {
            id,
            tag: String::new(),
            active: true,
            pos: bounds.min,
            size: bounds.size,
            vel: Vec2::ZERO,
            gravity: DEFAULT_GRAVITY,
            grounded: false,
            move_speed: DEFAULT_MOVE_SPEED,
            jump_speed: DEFAULT_JUMP_SPEED,
            shape: BodyShape::Rect,
            visual: None,
        })
    }

    /// Create a circular body centered on `center`. Its box is `2r x 2r`.
    pub fn circle(id: EntityId, center: Vec2, radius: f32) -> Result<Self, GeometryError> {
        let size = Vec2::splat(radius * 2.0);
        let mut entity = Self::new(id, center - Vec2::splat(radius), size)?;
        entity.shape = BodyShape::Circle { radius };
        entity.visual = Some(Visual::Fill(Color::RED));
        Ok(entity)
    }

    // -- Builder pattern --

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    /// Negative gravity is clamped to zero.
    pub fn with_gravity(mut self, gravity: f32) -> Self {
        self.gravity = gravity.max(0.0);
        self
    }

    pub fn with_velocity(mut self, vel: Vec2) -> Self {
        self.vel = vel;
        self
    }

    pub fn with_speeds(mut self, move_speed: f32, jump_speed: f32) -> Self {
        self.move_speed = move_speed;
        self.jump_speed = jump_speed;
        self
    }

    pub fn with_visual(mut self, visual: Visual) -> Self {
        self.visual = Some(visual);
        self
    }

    // -- Geometry --

    pub fn size(&self) -> Vec2 {
        self.size
    }

    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }

    // -- Movement intent --

    pub fn set_horizontal_intent(&mut self, intent: HorizontalIntent) {
        self.vel.x = match intent {
            HorizontalIntent::Left => -self.move_speed,
            HorizontalIntent::Right => self.move_speed,
            HorizontalIntent::None => 0.0,
        };
    }

    pub fn move_left(&mut self) {
        self.set_horizontal_intent(HorizontalIntent::Left);
    }

    pub fn move_right(&mut self) {
        self.set_horizontal_intent(HorizontalIntent::Right);
    }

    pub fn stop_horizontal(&mut self) {
        self.set_horizontal_intent(HorizontalIntent::None);
    }

    /// Launch upward if grounded. Returns whether the jump happened.
    /// `grounded` itself is left alone; the next frame's reset clears it.
    pub fn jump(&mut self) -> bool {
        if !self.grounded {
            return false;
        }
        self.vel.y = -self.jump_speed;
        true
    }
}

impl Collidable for Entity {
    fn aabb(&self) -> Aabb {
        Aabb::new(self.pos, self.size)
    }

    fn visual(&self) -> Option<&Visual> {
        self.visual.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body() -> Entity {
        Entity::new(EntityId(1), Vec2::new(100.0, 100.0), Vec2::new(50.0, 50.0)).unwrap()
    }

    #[test]
    fn circle_box_surrounds_center() {
        let e = Entity::circle(EntityId(1), Vec2::new(400.0, 100.0), 25.0).unwrap();
        assert_eq!(e.pos, Vec2::new(375.0, 75.0));
        assert_eq!(e.size(), Vec2::new(50.0, 50.0));
        assert_eq!(e.center(), Vec2::new(400.0, 100.0));
        assert_eq!(e.shape, BodyShape::Circle { radius: 25.0 });
    }

    #[test]
    fn rejects_non_positive_size() {
        assert!(Entity::new(EntityId(1), Vec2::ZERO, Vec2::new(0.0, 10.0)).is_err());
        assert!(Entity::circle(EntityId(1), Vec2::ZERO, -3.0).is_err());
    }

    #[test]
    fn horizontal_intent_sets_velocity() {
        let mut e = body();
        e.set_horizontal_intent(HorizontalIntent::Right);
        assert_eq!(e.vel.x, DEFAULT_MOVE_SPEED);
        e.move_left();
        assert_eq!(e.vel.x, -DEFAULT_MOVE_SPEED);
        e.stop_horizontal();
        assert_eq!(e.vel.x, 0.0);
    }

    #[test]
    fn jump_while_airborne_is_ignored() {
        let mut e = body().with_velocity(Vec2::new(0.0, 3.0));
        assert!(!e.jump());
        assert_eq!(e.vel.y, 3.0);
    }

    #[test]
    fn jump_while_grounded_sets_velocity_but_keeps_flag() {
        let mut e = body();
        e.grounded = true;
        assert!(e.jump());
        assert_eq!(e.vel.y, -DEFAULT_JUMP_SPEED);
        assert!(e.grounded);
    }

    #[test]
    fn negative_gravity_clamps_to_zero() {
        let e = body().with_gravity(-1.0);
        assert_eq!(e.gravity, 0.0);
    }
}
