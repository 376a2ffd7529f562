use glam::Vec2;

use leap_engine::{
    advance, build_draw_list, ContactSide, DrawBuffer, Entity, EntityId, GroundingPolicy,
    HorizontalIntent, Intent, Level, Structure, StructureId, World, WorldConfig,
};

#[test]
fn falling_box_settles_on_platform() {
    let size = Vec2::new(50.0, 50.0);
    let mut player = Entity::new(EntityId(1), Vec2::new(100.0, 100.0), size).unwrap();
    let platform = Structure::new(Vec2::new(90.0, 200.0), Vec2::new(200.0, 20.0)).unwrap();
    let structures = [platform];
    let policy = GroundingPolicy::ActiveLanding;
    let mut contacts = Vec::new();

    advance(&mut player, &structures, policy, &mut contacts);
    assert_eq!(player.vel.y, 0.5);
    assert_eq!(player.pos.y, 100.5);
    assert!(!player.grounded);

    let mut frames = 1;
    while !player.grounded {
        advance(&mut player, &structures, policy, &mut contacts);
        frames += 1;
        assert!(frames < 100, "player never landed");
    }

    assert_eq!(player.pos.y, 150.0);
    assert_eq!(player.vel.y, 0.0);
    assert_eq!(player.pos.x, 100.0);
}

#[test]
fn demo_player_lands_on_first_platform() {
    let mut world = World::from_level(&Level::demo()).unwrap();
    let id = world.tracked().unwrap();

    for _ in 0..100 {
        world.step();
    }

    let player = world.tracked_entity().unwrap();
    assert_eq!(player.id, id);
    assert_eq!(player.pos.y + player.size().y, 400.0);
    assert!(player.grounded);
    let contact = world.contacts()[0];
    assert_eq!(contact.structure, StructureId(0));
    assert_eq!(contact.side, ContactSide::Top);
}

#[test]
fn walking_off_a_ledge_drops_to_the_ground() {
    let mut world = World::from_level(&Level::demo()).unwrap();
    let id = world.tracked().unwrap();
    for _ in 0..100 {
        world.step();
    }

    let right = Intent::Horizontal(HorizontalIntent::Right);
    for _ in 0..60 {
        world.intents.push(id, right);
        world.step();
    }

    let player = world.scene.get(id).unwrap();
    assert_eq!(player.pos.x, 675.0);
    assert_eq!(player.pos.y, 510.0);
    assert!(player.grounded);
    assert_eq!(world.camera.offset(), Vec2::new(300.0, 0.0));
}

#[test]
fn jump_needs_ground_and_clears_on_next_frame() {
    let mut world = World::from_level(&Level::demo()).unwrap();
    let id = world.tracked().unwrap();

    // Mid-air on the first frames: refused.
    world.step();
    assert!(!world.apply_intent(id, Intent::Jump));

    for _ in 0..100 {
        world.step();
    }
    assert!(world.apply_intent(id, Intent::Jump));
    let player = world.scene.get(id).unwrap();
    assert_eq!(player.vel.y, -player.jump_speed);
    assert!(player.grounded, "flag stays set until the next frame");

    world.step();
    let player = world.scene.get(id).unwrap();
    assert!(!player.grounded);
    assert!(player.vel.y < 0.0);
    assert!(!world.apply_intent(id, Intent::Jump));
}

#[test]
fn camera_stops_at_world_edges() {
    let mut world = World::from_level(&Level::demo()).unwrap();
    let id = world.tracked().unwrap();

    world.scene.get_mut(id).unwrap().pos.x = 2350.0;
    world.step();
    let right_edge = world.camera.offset();
    assert_eq!(right_edge.x, 1600.0);

    world.scene.get_mut(id).unwrap().pos.x = 5000.0;
    world.step();
    assert_eq!(world.camera.offset().x, right_edge.x);

    world.scene.get_mut(id).unwrap().pos.x = -300.0;
    world.step();
    assert_eq!(world.camera.offset().x, 0.0);
}

#[test]
fn entities_do_not_collide_with_each_other() {
    let mut world = World::new(WorldConfig::default());
    for _ in 0..2 {
        let id = world.next_id();
        world.spawn(Entity::new(id, Vec2::new(100.0, 100.0), Vec2::splat(20.0)).unwrap());
    }
    world.step();
    for entity in world.scene.iter() {
        assert_eq!(entity.pos, Vec2::new(100.0, 100.5));
    }
    assert!(world.contacts().is_empty());
}

#[test]
fn resting_contact_policy_from_level_json() {
    let json = r#"{
        "config": { "grounding": "resting_contact" },
        "player": { "center": [100, 175], "radius": 25, "gravity": 0 },
        "structures": [ { "pos": [0, 200], "size": [400, 20], "kind": "ground" } ]
    }"#;
    let level = Level::from_json(json).unwrap();
    let mut world = World::from_level(&level).unwrap();
    world.step();
    assert!(world.tracked_entity().unwrap().grounded);
    assert!(world.contacts().is_empty());
}

#[test]
fn draw_list_follows_camera() {
    let mut world = World::from_level(&Level::demo()).unwrap();
    let id = world.tracked().unwrap();
    world.scene.get_mut(id).unwrap().pos.x = 1275.0;
    world.step();

    let mut buffer = DrawBuffer::new();
    build_draw_list(&world, &mut buffer);

    // Camera offset x = 1300 - 400 = 900; the player circle sits mid-screen.
    let player = buffer.instances[buffer.entity_start as usize];
    assert_eq!(player.x, 400.0);
    // Platform at x=1200 is on screen at 300; the one at 300 is culled.
    let xs: Vec<f32> = buffer.instances[..buffer.entity_start as usize]
        .iter()
        .map(|i| i.x)
        .collect();
    assert!(xs.contains(&300.0));
    assert!(!xs.contains(&-600.0));
}
