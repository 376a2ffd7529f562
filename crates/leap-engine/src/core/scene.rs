use crate::api::types::EntityId;
use crate::components::entity::Entity;

/// Entity storage using a flat Vec, kept in spawn order.
/// The world steps entities in this order; small counts only.
pub struct Scene {
    entities: Vec<Entity>,
}

impl Scene {
    pub fn new() -> Self {
        Self {
            entities: Vec::with_capacity(16),
        }
    }

    /// Add an entity to the scene.
    pub fn spawn(&mut self, entity: Entity) {
        self.entities.push(entity);
    }

    /// Remove an entity by ID, preserving the order of the rest.
    pub fn despawn(&mut self, id: EntityId) -> Option<Entity> {
        let idx = self.entities.iter().position(|e| e.id == id)?;
        Some(self.entities.remove(idx))
    }

    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.entities.iter().find(|e| e.id == id)
    }

    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.entities.iter_mut().find(|e| e.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Entity> {
        self.entities.iter_mut()
    }

    /// Find the first entity with the given tag.
    pub fn find_by_tag(&self, tag: &str) -> Option<&Entity> {
        self.entities.iter().find(|e| e.tag == tag)
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn body(id: u32) -> Entity {
        Entity::new(EntityId(id), Vec2::ZERO, Vec2::splat(10.0)).unwrap()
    }

    #[test]
    fn spawn_and_get() {
        let mut scene = Scene::new();
        scene.spawn(body(1));
        scene.get_mut(EntityId(1)).unwrap().pos = Vec2::new(10.0, 20.0);
        assert_eq!(scene.get(EntityId(1)).unwrap().pos, Vec2::new(10.0, 20.0));
        assert!(scene.get(EntityId(2)).is_none());
    }

    #[test]
    fn despawn_keeps_order() {
        let mut scene = Scene::new();
        for id in 1..=3 {
            scene.spawn(body(id));
        }
        assert!(scene.despawn(EntityId(1)).is_some());
        assert!(scene.despawn(EntityId(9)).is_none());
        let ids: Vec<_> = scene.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![EntityId(2), EntityId(3)]);
    }

    #[test]
    fn find_by_tag() {
        let mut scene = Scene::new();
        scene.spawn(body(1).with_tag("player"));
        scene.spawn(body(2).with_tag("crate"));
        assert_eq!(scene.find_by_tag("crate").unwrap().id, EntityId(2));
    }
}
