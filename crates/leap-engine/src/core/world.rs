use glam::Vec2;
use log::debug;

use crate::api::config::WorldConfig;
use crate::api::error::LevelError;
use crate::api::types::{EntityId, StructureId};
use crate::assets::level::Level;
use crate::components::entity::Entity;
use crate::components::structure::Structure;
use crate::core::physics::{self, Contact};
use crate::core::scene::Scene;
use crate::input::intent::{Intent, IntentQueue};
use crate::renderer::camera::Camera;

/// Everything one simulation owns: bodies, obstacles and the camera.
/// A step needs exclusive access; hosts that share a world across threads
/// must lock around the whole `step` call.
pub struct World {
    config: WorldConfig,
    pub scene: Scene,
    structures: Vec<Structure>,
    pub camera: Camera,
    pub intents: IntentQueue,
    tracked: Option<EntityId>,
    contacts: Vec<Contact>,
    next_id: u32,
    frame: u64,
}

impl World {
    pub fn new(config: WorldConfig) -> Self {
        let camera = Camera::new(
            Vec2::new(config.viewport_width, config.viewport_height),
            Vec2::new(config.world_width, config.world_height),
        );
        debug!(
            "world {}x{}, viewport {}x{}, grounding {:?}",
            config.world_width,
            config.world_height,
            config.viewport_width,
            config.viewport_height,
            config.grounding
        );
        Self {
            config,
            scene: Scene::new(),
            structures: Vec::new(),
            camera,
            intents: IntentQueue::new(),
            tracked: None,
            contacts: Vec::new(),
            next_id: 1,
            frame: 0,
        }
    }

    /// Build a world from a level description. The player is spawned first
    /// and tracked by the camera.
    pub fn from_level(level: &Level) -> Result<Self, LevelError> {
        level.validate()?;
        let mut world = World::new(level.config.clone());
        for structure in level.build_structures()? {
            world.add_structure(structure);
        }
        let id = world.next_id();
        let player = level.build_player(id)?;
        world.spawn(player);
        world.track(id);
        if let Some(player) = world.scene.get(id) {
            world.camera.follow(player);
        }
        debug!(
            "level loaded: {} structures, player {:?}",
            world.structures.len(),
            id
        );
        Ok(world)
    }

    /// Generate the next unique entity ID.
    pub fn next_id(&mut self) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        id
    }

    pub fn spawn(&mut self, entity: Entity) -> EntityId {
        let id = entity.id;
        if id.0 >= self.next_id {
            self.next_id = id.0 + 1;
        }
        self.scene.spawn(entity);
        id
    }

    pub fn add_structure(&mut self, structure: Structure) -> StructureId {
        let id = StructureId(self.structures.len() as u32);
        self.structures.push(structure);
        id
    }

    pub fn structures(&self) -> &[Structure] {
        &self.structures
    }

    /// Choose which entity the camera follows.
    pub fn track(&mut self, id: EntityId) {
        self.tracked = Some(id);
    }

    pub fn tracked(&self) -> Option<EntityId> {
        self.tracked
    }

    pub fn tracked_entity(&self) -> Option<&Entity> {
        self.tracked.and_then(|id| self.scene.get(id))
    }

    /// Apply a movement command right away. Returns false if the entity
    /// does not exist or the command was refused (jumping in mid-air).
    pub fn apply_intent(&mut self, id: EntityId, intent: Intent) -> bool {
        let Some(entity) = self.scene.get_mut(id) else {
            return false;
        };
        match intent {
            Intent::Horizontal(dir) => {
                entity.set_horizontal_intent(dir);
                true
            }
            Intent::Jump => entity.jump(),
        }
    }

    /// Run one frame: queued intents, physics for every active entity in
    /// spawn order, then the camera.
    pub fn step(&mut self) {
        for (id, intent) in self.intents.drain() {
            self.apply_intent(id, intent);
        }

        self.contacts.clear();
        let world_size = Vec2::new(self.config.world_width, self.config.world_height);
        for entity in self.scene.iter_mut().filter(|e| e.active) {
            physics::advance(
                entity,
                &self.structures,
                self.config.grounding,
                &mut self.contacts,
            );
            if self.config.confine_to_world {
                physics::confine_to_bounds(entity, world_size);
            }
        }

        if let Some(entity) = self.tracked.and_then(|id| self.scene.get(id)) {
            self.camera.follow(entity);
        }
        self.frame += 1;
    }

    /// Push-outs from the most recent step.
    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    /// Number of steps run so far.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn config(&self) -> &WorldConfig {
        &self.config
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new(WorldConfig::default())
    }
}
