use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::api::error::GeometryError;
use crate::components::visual::{Color, Visual};
use crate::core::aabb::Aabb;

/// Anything the physics can test against and the renderer can draw.
pub trait Collidable {
    fn aabb(&self) -> Aabb;
    fn visual(&self) -> Option<&Visual>;
}

/// Descriptive tag for a structure. Carries no behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StructureKind {
    #[default]
    Platform,
    Ground,
    Wall,
}

/// Static obstacle. Position and size are fixed after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Structure {
    bounds: Aabb,
    pub kind: StructureKind,
    pub visual: Visual,
}

impl Structure {
    /// Create a platform at `pos` (top-left) with the given size.
    pub fn new(pos: Vec2, size: Vec2) -> Result<Self, GeometryError> {
        Ok(Self {
            bounds: Aabb::try_new(pos, size)?,
            kind: StructureKind::Platform,
            visual: Visual::default(),
        })
    }

    /// Floor slab, usually spanning the bottom of the world.
    pub fn ground(pos: Vec2, size: Vec2) -> Result<Self, GeometryError> {
        Ok(Self::new(pos, size)?
            .with_kind(StructureKind::Ground)
            .with_color(Color::rgb(120, 60, 0)))
    }

    pub fn with_kind(mut self, kind: StructureKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.visual = Visual::Fill(color);
        self
    }

    pub fn with_visual(mut self, visual: Visual) -> Self {
        self.visual = visual;
        self
    }

    pub fn pos(&self) -> Vec2 {
        self.bounds.min
    }

    pub fn size(&self) -> Vec2 {
        self.bounds.size
    }
}

impl Collidable for Structure {
    fn aabb(&self) -> Aabb {
        self.bounds
    }

    fn visual(&self) -> Option<&Visual> {
        Some(&self.visual)
    }
}
