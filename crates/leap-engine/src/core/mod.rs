pub mod aabb;
pub mod physics;
pub mod scene;
pub mod time;
pub mod world;

pub use aabb::Aabb;
pub use physics::{advance, Contact, ContactSide};
pub use scene::Scene;
pub use time::FrameClock;
pub use world::World;
