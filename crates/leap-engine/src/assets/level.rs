use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::api::config::WorldConfig;
use crate::api::error::{GeometryError, LevelError};
use crate::api::types::EntityId;
use crate::components::entity::{Entity, DEFAULT_GRAVITY, DEFAULT_JUMP_SPEED, DEFAULT_MOVE_SPEED};
use crate::components::structure::{Structure, StructureKind};
use crate::components::visual::{Color, Visual};
use crate::core::aabb::check_size;

/// A level: world settings, the player spawn and the static structures.
/// Loaded from a JSON file at runtime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Level {
    #[serde(default)]
    pub config: WorldConfig,
    pub player: PlayerSpawn,
    #[serde(default)]
    pub structures: Vec<StructureDesc>,
}

/// Where and how the player circle starts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerSpawn {
    /// Circle center in world space, as `[x, y]`.
    pub center: Vec2,
    pub radius: f32,
    #[serde(default = "default_gravity")]
    pub gravity: f32,
    #[serde(default = "default_move_speed")]
    pub move_speed: f32,
    #[serde(default = "default_jump_speed")]
    pub jump_speed: f32,
    #[serde(default)]
    pub color: Option<Color>,
}

/// One static obstacle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructureDesc {
    /// Top-left corner, as `[x, y]`.
    pub pos: Vec2,
    /// `[width, height]`.
    pub size: Vec2,
    #[serde(default)]
    pub kind: StructureKind,
    #[serde(default)]
    pub visual: Option<Visual>,
}

fn default_gravity() -> f32 {
    DEFAULT_GRAVITY
}

fn default_move_speed() -> f32 {
    DEFAULT_MOVE_SPEED
}

fn default_jump_speed() -> f32 {
    DEFAULT_JUMP_SPEED
}

/// Tag a geometry failure with the level item it came from.
fn geometry(what: impl Into<String>) -> impl FnOnce(GeometryError) -> LevelError {
    let what = what.into();
    move |source| LevelError::Geometry { what, source }
}

impl StructureDesc {
    fn platform(x: f32, y: f32, w: f32, h: f32, color: Color) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(w, h),
            kind: StructureKind::Platform,
            visual: Some(Visual::Fill(color)),
        }
    }
}

impl Level {
    /// Parse and validate a level from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, LevelError> {
        let level: Level = serde_json::from_str(json)?;
        level.validate()?;
        Ok(level)
    }

    pub fn to_json(&self) -> Result<String, LevelError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check every size and tuning value before anything is built.
    pub fn validate(&self) -> Result<(), LevelError> {
        self.config.validate()?;

        check_size(Vec2::splat(self.player.radius * 2.0)).map_err(geometry("player"))?;
        let tuning = [
            ("gravity", self.player.gravity),
            ("move_speed", self.player.move_speed),
            ("jump_speed", self.player.jump_speed),
        ];
        for (name, value) in tuning {
            if !value.is_finite() || value < 0.0 {
                return Err(LevelError::InvalidConfig(format!(
                    "player {name} must be a non-negative number, got {value}"
                )));
            }
        }

        for (i, desc) in self.structures.iter().enumerate() {
            check_size(desc.size).map_err(geometry(format!("structure {i}")))?;
        }
        Ok(())
    }

    /// Structures in file order. That order is the collision resolution order.
    pub fn build_structures(&self) -> Result<Vec<Structure>, LevelError> {
        self.structures
            .iter()
            .enumerate()
            .map(|(i, desc)| -> Result<Structure, LevelError> {
                let structure = Structure::new(desc.pos, desc.size)
                    .map_err(geometry(format!("structure {i}")))?
                    .with_kind(desc.kind);
                Ok(match desc.visual {
                    Some(visual) => structure.with_visual(visual),
                    None => structure,
                })
            })
            .collect()
    }

    pub fn build_player(&self, id: EntityId) -> Result<Entity, LevelError> {
        let spawn = &self.player;
        let mut player = Entity::circle(id, spawn.center, spawn.radius)
            .map_err(geometry("player"))?
            .with_tag("player")
            .with_gravity(spawn.gravity)
            .with_speeds(spawn.move_speed, spawn.jump_speed);
        if let Some(color) = spawn.color {
            player = player.with_visual(Visual::Fill(color));
        }
        Ok(player)
    }

    /// Sample layout: three platforms over a wide ground slab, player near the top.
    pub fn demo() -> Self {
        let config = WorldConfig::default();
        let ground_h = 40.0;
        Self {
            player: PlayerSpawn {
                center: Vec2::new(config.viewport_width / 2.0, 100.0),
                radius: 25.0,
                gravity: DEFAULT_GRAVITY,
                move_speed: DEFAULT_MOVE_SPEED,
                jump_speed: DEFAULT_JUMP_SPEED,
                color: Some(Color::GREEN),
            },
            structures: vec![
                StructureDesc::platform(300.0, 400.0, 200.0, 20.0, Color::rgb(150, 100, 50)),
                StructureDesc::platform(1200.0, 350.0, 200.0, 20.0, Color::rgb(150, 50, 150)),
                StructureDesc::platform(500.0, 200.0, 100.0, 20.0, Color::rgb(255, 255, 0)),
                StructureDesc {
                    pos: Vec2::new(0.0, config.viewport_height - ground_h),
                    size: Vec2::new(config.world_width, ground_h),
                    kind: StructureKind::Ground,
                    visual: Some(Visual::Fill(Color::rgb(120, 60, 0))),
                },
            ],
            config,
        }
    }
}
