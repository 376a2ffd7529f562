use crate::components::entity::{BodyShape, Entity};
use crate::components::structure::{Collidable, Structure};
use crate::components::visual::Visual;
use crate::core::world::World;
use crate::renderer::camera::Camera;
use crate::renderer::instance::{kind, DrawBuffer, DrawInstance};

/// Build the frame's draw list in screen space.
/// Structures come first, then active entities; anything off screen is culled.
pub fn build_draw_list(world: &World, buffer: &mut DrawBuffer) {
    buffer.clear();

    for structure in world.structures() {
        if let Some(instance) = structure_instance(structure, &world.camera) {
            buffer.push(instance);
        }
    }

    buffer.begin_entities();
    for entity in world.scene.iter().filter(|e| e.active) {
        if let Some(instance) = entity_instance(entity, &world.camera) {
            buffer.push(instance);
        }
    }
}

fn structure_instance(structure: &Structure, camera: &Camera) -> Option<DrawInstance> {
    let bounds = structure.aabb();
    if !camera.is_visible(&bounds) {
        return None;
    }
    let screen = camera.to_screen(bounds.min);
    Some(with_visual(
        DrawInstance {
            x: screen.x,
            y: screen.y,
            w: bounds.size.x,
            h: bounds.size.y,
            kind: kind::RECT,
            ..Default::default()
        },
        structure.visual(),
    ))
}

fn entity_instance(entity: &Entity, camera: &Camera) -> Option<DrawInstance> {
    let bounds = entity.aabb();
    if !camera.is_visible(&bounds) {
        return None;
    }
    let instance = match entity.shape {
        BodyShape::Circle { radius } => {
            let center = camera.to_screen(entity.center());
            DrawInstance {
                x: center.x,
                y: center.y,
                w: radius,
                h: radius,
                kind: kind::CIRCLE,
                ..Default::default()
            }
        }
        BodyShape::Rect => {
            let screen = camera.to_screen(bounds.min);
            DrawInstance {
                x: screen.x,
                y: screen.y,
                w: bounds.size.x,
                h: bounds.size.y,
                kind: kind::RECT,
                ..Default::default()
            }
        }
    };
    Some(with_visual(instance, entity.visual()))
}

fn with_visual(mut instance: DrawInstance, visual: Option<&Visual>) -> DrawInstance {
    instance.texture = -1.0;
    match visual {
        Some(Visual::Fill(color)) => {
            [instance.r, instance.g, instance.b] = color.to_f32();
        }
        Some(Visual::Texture(tex)) => {
            // Circles keep their shape; only rects switch to the textured path.
            if instance.kind == kind::RECT {
                instance.kind = kind::TEXTURED_RECT;
            }
            instance.texture = tex.0 as f32;
        }
        None => {
            [instance.r, instance.g, instance.b] = [1.0, 1.0, 1.0];
        }
    }
    instance
}
