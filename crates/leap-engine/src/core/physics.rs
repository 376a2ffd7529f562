//! Discrete per-frame platformer physics.
//!
//! Each frame: add gravity, move on X and push out of structures, then move on
//! Y and push out again. Resolution is sequential in structure-list order, so
//! the result depends on that order. No swept tests: a body fast enough to skip
//! over a structure in one frame passes through it.

use glam::Vec2;
use log::trace;

use crate::api::config::GroundingPolicy;
use crate::api::types::{EntityId, StructureId};
use crate::components::entity::Entity;
use crate::components::structure::{Collidable, Structure};
use crate::core::aabb::Aabb;

/// Largest gap between feet and a structure top still treated as resting on it.
pub const RESTING_TOLERANCE: f32 = 1e-3;

/// Which face of the structure the entity was pushed against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactSide {
    Left,
    Right,
    Top,
    Bottom,
}

/// One push-out that happened during a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Contact {
    pub entity: EntityId,
    pub structure: StructureId,
    pub side: ContactSide,
}

#[derive(Clone, Copy, PartialEq)]
enum Axis {
    X,
    Y,
}

/// Run one frame of physics for `entity` against `structures`.
/// Push-outs are appended to `contacts`.
pub fn advance(
    entity: &mut Entity,
    structures: &[Structure],
    policy: GroundingPolicy,
    contacts: &mut Vec<Contact>,
) {
    entity.vel.y += entity.gravity;

    entity.pos.x += entity.vel.x;
    resolve_axis(entity, structures, Axis::X, contacts);

    entity.grounded = false;
    entity.pos.y += entity.vel.y;
    resolve_axis(entity, structures, Axis::Y, contacts);

    if policy == GroundingPolicy::RestingContact && !entity.grounded {
        entity.grounded = is_resting(&entity.aabb(), structures);
    }
}

/// Push the entity out of every overlapping structure along one axis.
///
/// The direction of travel is taken from the velocity at the time of the move,
/// so a structure later in the list can still push an already-snapped entity.
fn resolve_axis(
    entity: &mut Entity,
    structures: &[Structure],
    axis: Axis,
    contacts: &mut Vec<Contact>,
) {
    let travel = match axis {
        Axis::X => entity.vel.x,
        Axis::Y => entity.vel.y,
    };
    let size = entity.size();

    let pos = structures
        .iter()
        .enumerate()
        .fold(entity.pos, |pos, (index, structure)| {
            let wall = structure.aabb();
            if !Aabb::new(pos, size).overlaps(&wall) {
                return pos;
            }

            let (snapped, side) = match axis {
                Axis::X if travel > 0.0 => {
                    (Vec2::new(wall.left() - size.x, pos.y), ContactSide::Left)
                }
                Axis::X if travel < 0.0 => (Vec2::new(wall.right(), pos.y), ContactSide::Right),
                Axis::Y if travel > 0.0 => {
                    (Vec2::new(pos.x, wall.top() - size.y), ContactSide::Top)
                }
                Axis::Y if travel < 0.0 => (Vec2::new(pos.x, wall.bottom()), ContactSide::Bottom),
                // Overlapping without moving on this axis: leave it for the other pass.
                _ => return pos,
            };

            match axis {
                Axis::X => entity.vel.x = 0.0,
                Axis::Y => {
                    entity.vel.y = 0.0;
                    if side == ContactSide::Top {
                        entity.grounded = true;
                    }
                }
            }

            let structure_id = StructureId(index as u32);
            trace!("entity {:?} hit {:?} of structure {}", entity.id, side, index);
            contacts.push(Contact {
                entity: entity.id,
                structure: structure_id,
                side,
            });
            snapped
        });

    entity.pos = pos;
}

/// Whether `body`'s bottom edge sits on top of a structure it horizontally overlaps.
pub fn is_resting(body: &Aabb, structures: &[Structure]) -> bool {
    structures.iter().any(|s| {
        let top = s.aabb();
        (body.bottom() - top.top()).abs() <= RESTING_TOLERANCE
            && body.left() < top.right()
            && body.right() > top.left()
    })
}

/// Clamp an entity into the rectangle `[0, world_size]`.
/// A body larger than the world on an axis is pinned to 0 on that axis.
///
/// Horizontal clamping leaves velocity alone. Hitting the top zeroes upward
/// velocity; hitting the bottom zeroes downward velocity and counts as a landing.
pub fn confine_to_bounds(entity: &mut Entity, world_size: Vec2) {
    let size = entity.size();

    let max_x = (world_size.x - size.x).max(0.0);
    entity.pos.x = entity.pos.x.clamp(0.0, max_x);

    if entity.pos.y < 0.0 {
        entity.pos.y = 0.0;
        if entity.vel.y < 0.0 {
            entity.vel.y = 0.0;
        }
    }

    let floor = (world_size.y - size.y).max(0.0);
    if entity.pos.y > floor {
        entity.pos.y = floor;
        if entity.vel.y > 0.0 {
            entity.vel.y = 0.0;
            entity.grounded = true;
        }
    }
}
