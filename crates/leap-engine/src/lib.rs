pub mod api;
pub mod assets;
pub mod components;
pub mod core;
pub mod input;
pub mod renderer;
pub mod systems;

// Re-export key types at crate root for convenience
pub use crate::core::aabb::Aabb;
pub use crate::core::physics::{advance, Contact, ContactSide};
pub use crate::core::scene::Scene;
pub use crate::core::time::FrameClock;
pub use crate::core::world::World;
pub use api::config::{GroundingPolicy, WorldConfig};
pub use api::error::{GeometryError, LevelError};
pub use api::types::{EntityId, StructureId};
pub use assets::level::{Level, PlayerSpawn, StructureDesc};
pub use components::entity::{BodyShape, Entity};
pub use components::structure::{Collidable, Structure, StructureKind};
pub use components::visual::{Color, TextureId, Visual};
pub use input::intent::{HorizontalIntent, Intent, IntentQueue};
pub use renderer::camera::Camera;
pub use renderer::instance::{DrawBuffer, DrawInstance};
pub use systems::render::build_draw_list;
