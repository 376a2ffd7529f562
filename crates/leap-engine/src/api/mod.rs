pub mod config;
pub mod error;
pub mod types;

pub use config::{GroundingPolicy, WorldConfig};
pub use error::{GeometryError, LevelError};
pub use types::{EntityId, StructureId};
